//! Compiled-in configuration.
//!
//! The contract program and receiver account are fixed constants, stored as
//! pre-computed 32-byte arrays (Base58 cannot be decoded in const context;
//! the text form is in each doc comment).

use serde::{Deserialize, Serialize};

use sol_wire::Pubkey;

/// Network cluster the session submits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cluster {
    Mainnet,
    Devnet,
    Testnet,
}

impl Cluster {
    /// Public RPC endpoint for this cluster.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Cluster::Mainnet => "https://api.mainnet-beta.solana.com",
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
        }
    }

    /// Display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Cluster::Mainnet => "Mainnet Beta",
            Cluster::Devnet => "Devnet",
            Cluster::Testnet => "Testnet",
        }
    }
}

/// The contract program invoked by the signing flow.
/// Base58: `6nBFtQ2QB8W4hfTjpn8U8TqpxuPqBnYYmWQCZFfwkX19`
pub const CONTRACT_PROGRAM_ID: Pubkey = Pubkey::new([
    0x55, 0xdd, 0x2b, 0x14, 0x68, 0x12, 0xa1, 0xbc, 0xcd, 0xf6, 0x68, 0xde, 0x4a, 0xe0,
    0x46, 0xa6, 0x21, 0x20, 0x55, 0xdb, 0x18, 0xad, 0x01, 0x3b, 0x37, 0x93, 0xf0, 0x8b,
    0x78, 0xaf, 0x52, 0x98,
]);

/// The fixed receiver account named by the contract instruction.
/// Base58: `AYa2L9BNVdUBoKX4piyT9VULtvhcNg5Furnj8gb6uqnX`
pub const CONTRACT_RECEIVER: Pubkey = Pubkey::new([
    0x8d, 0xcf, 0x86, 0xcd, 0x07, 0x7d, 0xbb, 0xf2, 0x8d, 0x63, 0x30, 0x7d, 0x6f, 0x13,
    0x65, 0xfe, 0xa0, 0x62, 0x8b, 0x7b, 0xd6, 0x4f, 0xb5, 0x5e, 0x45, 0x15, 0x63, 0x10,
    0xc9, 0x19, 0x4f, 0x00,
]);

/// Static session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub cluster: Cluster,
    pub program_id: Pubkey,
    pub receiver: Pubkey,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            cluster: Cluster::Devnet,
            program_id: CONTRACT_PROGRAM_ID,
            receiver: CONTRACT_RECEIVER,
        }
    }
}
