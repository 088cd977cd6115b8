//! Solana transaction wire format for externally signed transactions.
//!
//! This crate implements the compact binary layout a Solana node expects on
//! the wire, for the case where the private key lives somewhere else (a
//! browser wallet extension, a hardware device) and the application only
//! ever sees finished signatures. The envelope is compiled unsigned, handed
//! to the signer, and the returned signatures are attached into their slots
//! before serialization.
//!
//! ```text
//! Transaction:
//!   num_signatures          compact-u16
//!   signatures              64 bytes * num_signatures
//!   message:
//!     num_required_sigs     u8
//!     num_readonly_signed   u8
//!     num_readonly_unsigned u8
//!     num_accounts          compact-u16
//!     account_keys          32 bytes * num_accounts
//!     recent_blockhash      32 bytes
//!     num_instructions      compact-u16
//!     instructions[]        (see below)
//!
//! Instruction:
//!   program_id_index        u8
//!   num_accounts            compact-u16
//!   account_indices         u8 * num_accounts
//!   data_len                compact-u16
//!   data                    u8 * data_len
//! ```
//!
//! No `solana-sdk` dependency: the format is small enough to carry by hand,
//! with `bs58` for the Base58 text forms.

pub mod error;
pub mod instruction;
pub mod message;
pub mod pubkey;
pub mod shortvec;
pub mod transaction;

pub use error::WireError;
pub use instruction::{AccountMeta, Instruction};
pub use message::{Blockhash, CompiledInstruction, Message, MessageHeader};
pub use pubkey::Pubkey;
pub use transaction::{Signature, Transaction};
