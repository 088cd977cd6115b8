//! Message compilation and serialization.
//!
//! Compiling collects every account an instruction set touches, merges
//! duplicate references with OR-ed permission bits, and sorts the table into
//! the canonical order the runtime expects:
//!
//!   1. writable signers (fee payer first)
//!   2. read-only signers
//!   3. writable non-signers
//!   4. read-only non-signers
//!
//! The serialized message bytes are exactly what gets signed.

use std::fmt;
use std::str::FromStr;

use crate::error::WireError;
use crate::instruction::Instruction;
use crate::pubkey::Pubkey;
use crate::shortvec;

/// A recent ledger checkpoint bounding transaction validity.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Blockhash([u8; 32]);

impl Blockhash {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Blockhash(bytes)
    }

    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl FromStr for Blockhash {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| WireError::InvalidBlockhash(format!("base58 decode failed: {e}")))?;
        let arr: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
            WireError::InvalidBlockhash(format!("expected 32 bytes, got {}", v.len()))
        })?;
        Ok(Blockhash(arr))
    }
}

impl fmt::Display for Blockhash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Blockhash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blockhash({self})")
    }
}

/// The three leading counts of a serialized message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageHeader {
    /// The first `num_required_signatures` account keys must sign.
    pub num_required_signatures: u8,
    /// How many of the signing accounts are read-only.
    pub num_readonly_signed: u8,
    /// How many of the non-signing accounts are read-only.
    pub num_readonly_unsigned: u8,
}

/// An instruction with account references replaced by u8 indices into the
/// message's account table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledInstruction {
    pub program_id_index: u8,
    pub account_indices: Vec<u8>,
    pub data: Vec<u8>,
}

/// A compiled, not-yet-signed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: MessageHeader,
    pub account_keys: Vec<Pubkey>,
    pub recent_blockhash: Blockhash,
    pub instructions: Vec<CompiledInstruction>,
}

struct AccountEntry {
    pubkey: Pubkey,
    is_signer: bool,
    is_writable: bool,
}

impl AccountEntry {
    fn rank(&self) -> u8 {
        match (self.is_signer, self.is_writable) {
            (true, true) => 0,
            (true, false) => 1,
            (false, true) => 2,
            (false, false) => 3,
        }
    }
}

impl Message {
    /// Compile `instructions` into a message with `fee_payer` as the first
    /// (writable, signing) account and `recent_blockhash` bounding validity.
    pub fn compile(
        instructions: &[Instruction],
        fee_payer: &Pubkey,
        recent_blockhash: Blockhash,
    ) -> Result<Message, WireError> {
        let mut entries: Vec<AccountEntry> = Vec::new();

        let mut upsert = |pubkey: Pubkey, signer: bool, writable: bool| {
            if let Some(entry) = entries.iter_mut().find(|e| e.pubkey == pubkey) {
                entry.is_signer |= signer;
                entry.is_writable |= writable;
            } else {
                entries.push(AccountEntry {
                    pubkey,
                    is_signer: signer,
                    is_writable: writable,
                });
            }
        };

        // Fee payer is always signer + writable, and inserted first so the
        // stable sort keeps it ahead of every other writable signer.
        upsert(*fee_payer, true, true);

        for ix in instructions {
            for meta in &ix.accounts {
                upsert(meta.pubkey, meta.is_signer, meta.is_writable);
            }
            // Program ids are non-signing, read-only accounts.
            upsert(ix.program_id, false, false);
        }

        // Instruction indices are single bytes.
        if entries.len() > u8::MAX as usize + 1 {
            return Err(WireError::CompileError(format!(
                "{} accounts exceed the 256-entry table",
                entries.len()
            )));
        }

        entries.sort_by_key(AccountEntry::rank);

        let header = MessageHeader {
            num_required_signatures: entries.iter().filter(|e| e.is_signer).count() as u8,
            num_readonly_signed: entries
                .iter()
                .filter(|e| e.is_signer && !e.is_writable)
                .count() as u8,
            num_readonly_unsigned: entries
                .iter()
                .filter(|e| !e.is_signer && !e.is_writable)
                .count() as u8,
        };

        let account_keys: Vec<Pubkey> = entries.iter().map(|e| e.pubkey).collect();

        let position = |key: &Pubkey| -> Result<u8, WireError> {
            account_keys
                .iter()
                .position(|k| k == key)
                .map(|i| i as u8)
                .ok_or_else(|| WireError::CompileError(format!("{key} not in account table")))
        };

        let mut compiled = Vec::with_capacity(instructions.len());
        for ix in instructions {
            let account_indices = ix
                .accounts
                .iter()
                .map(|meta| position(&meta.pubkey))
                .collect::<Result<Vec<u8>, _>>()?;

            compiled.push(CompiledInstruction {
                program_id_index: position(&ix.program_id)?,
                account_indices,
                data: ix.data.clone(),
            });
        }

        Ok(Message {
            header,
            account_keys,
            recent_blockhash,
            instructions: compiled,
        })
    }

    /// The bytes a signer signs.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(256);

        buf.push(self.header.num_required_signatures);
        buf.push(self.header.num_readonly_signed);
        buf.push(self.header.num_readonly_unsigned);

        shortvec::append_u16(&mut buf, self.account_keys.len() as u16);
        for key in &self.account_keys {
            buf.extend_from_slice(key.as_bytes());
        }

        buf.extend_from_slice(&self.recent_blockhash.to_bytes());

        shortvec::append_u16(&mut buf, self.instructions.len() as u16);
        for ix in &self.instructions {
            buf.push(ix.program_id_index);

            shortvec::append_u16(&mut buf, ix.account_indices.len() as u16);
            buf.extend_from_slice(&ix.account_indices);

            shortvec::append_u16(&mut buf, ix.data.len() as u16);
            buf.extend_from_slice(&ix.data);
        }

        buf
    }

    /// The account keys that must sign, in signature-slot order.
    pub fn signer_keys(&self) -> &[Pubkey] {
        &self.account_keys[..self.header.num_required_signatures as usize]
    }

    /// Signature-slot index of `key`, if it is a required signer.
    pub fn signer_position(&self, key: &Pubkey) -> Option<usize> {
        self.signer_keys().iter().position(|k| k == key)
    }
}
