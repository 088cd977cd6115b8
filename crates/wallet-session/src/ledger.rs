//! The ledger network client seam.
//!
//! The RPC transport is an external collaborator. The session opens a
//! connection per submission, fetches a recent blockhash, submits raw
//! signed bytes, and awaits confirmation, all through these traits.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::Cluster;
use sol_wire::{Blockhash, Signature};

/// Durability level requested from the network for reads and confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl Commitment {
    /// The string form the RPC protocol uses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

/// Faults from the network client.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("rpc fault: {0}")]
    Rpc(String),
}

/// An open connection to one cluster endpoint at a default commitment.
#[async_trait]
pub trait LedgerConnection: Send + Sync {
    /// The latest blockhash at `commitment`.
    async fn latest_blockhash(&self, commitment: Commitment) -> Result<Blockhash, LedgerError>;

    /// Submit raw signed transaction bytes; returns the transaction
    /// signature the network will track.
    async fn send_raw_transaction(&self, wire: &[u8]) -> Result<Signature, LedgerError>;

    /// Await confirmation of `signature` at `commitment`. `Ok(false)` means
    /// the network answered but the transaction did not confirm.
    async fn confirm_signature(
        &self,
        signature: &Signature,
        commitment: Commitment,
    ) -> Result<bool, LedgerError>;
}

/// Opens [`LedgerConnection`]s.
#[async_trait]
pub trait LedgerConnector: Send + Sync {
    async fn open(
        &self,
        cluster: Cluster,
        commitment: Commitment,
    ) -> Result<Box<dyn LedgerConnection>, LedgerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commitment_protocol_strings() {
        assert_eq!(Commitment::Processed.as_str(), "processed");
        assert_eq!(Commitment::Confirmed.as_str(), "confirmed");
        assert_eq!(Commitment::Finalized.as_str(), "finalized");
    }

    #[test]
    fn display_rpc_fault() {
        let err = LedgerError::Rpc("blockhash not found".into());
        assert_eq!(err.to_string(), "rpc fault: blockhash not found");
    }
}
