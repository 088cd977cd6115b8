//! The injected wallet provider seam.
//!
//! Mirrors the capability surface a Phantom-style extension exposes on the
//! page: identity flags, the current public key, a connect request that can
//! be restricted to previously trusted sites, and transaction signing.
//! The session only consumes this trait; production code adapts it over the
//! real injected object, tests script it.

use async_trait::async_trait;
use thiserror::Error;

use sol_wire::{Pubkey, Transaction};

/// Faults the provider can report.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The user (or, for `only_if_trusted` requests, the extension itself)
    /// declined the request.
    #[error("connection request rejected")]
    Rejected,

    /// The extension resolved without a usable result.
    #[error("no response from wallet")]
    NoResponse,

    /// Anything else the extension threw.
    #[error("wallet extension fault: {0}")]
    Extension(String),
}

/// The injected wallet capability object.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Does the injected object identify itself as the expected provider?
    fn is_phantom(&self) -> bool;

    /// Does the provider currently consider itself connected to this site?
    fn is_connected(&self) -> bool;

    /// The wallet's public key, exposed once connected.
    fn public_key(&self) -> Option<Pubkey>;

    /// Request a connection. With `only_if_trusted` the extension must not
    /// prompt the user and succeeds only for previously trusted sites;
    /// without it, the extension may open an approval prompt.
    async fn connect(&self, only_if_trusted: bool) -> Result<Pubkey, ProviderError>;

    /// Ask the wallet to sign `tx`. Signing only; broadcast stays with the
    /// caller.
    async fn sign_transaction(&self, tx: Transaction) -> Result<Transaction, ProviderError>;
}
