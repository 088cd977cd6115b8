//! Wallet connection session over an injected browser-wallet provider.
//!
//! The session is a small state machine (disconnected, connecting,
//! connected, failed) layered over two collaborators this crate only ever
//! consumes through traits:
//!
//! ```text
//! WalletSession
//!     │
//!     ├── WalletProvider (injected wallet extension)
//!     │       detect · silent reconnect · connect · sign
//!     │
//!     └── LedgerConnector / LedgerConnection (RPC client)
//!             blockhash · submit raw bytes · confirm signature
//! ```
//!
//! The provider owns the private keys; the ledger connection owns the
//! transport. What lives here is the transition logic, the loading-flag
//! invariant (the initial silent reconnect resolves exactly once, whatever
//! happens), and the fixed contract-signing transaction flow built on
//! `sol-wire`.

pub mod config;
pub mod contract;
pub mod error;
pub mod ledger;
pub mod provider;
pub mod session;
pub mod state;

pub use config::{Cluster, SessionConfig};
pub use contract::TransactionRequest;
pub use error::SessionError;
pub use ledger::{Commitment, LedgerConnection, LedgerConnector, LedgerError};
pub use provider::{ProviderError, WalletProvider};
pub use session::WalletSession;
pub use state::WalletState;

// Re-export the wire types that appear in this crate's public API.
pub use sol_wire::{Blockhash, Pubkey, Signature, Transaction};
