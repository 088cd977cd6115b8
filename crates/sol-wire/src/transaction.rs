//! The externally signed transaction envelope.
//!
//! A [`Transaction`] starts life unsigned, with one all-zero placeholder
//! slot per required signer. Whoever owns the key (a wallet extension, a
//! hardware device) signs the serialized message bytes, and the resulting
//! signature is attached into the slot matching the signer's pubkey. Only a
//! fully signed envelope should be serialized for submission.

use std::fmt;
use std::str::FromStr;

use crate::error::WireError;
use crate::message::Message;
use crate::pubkey::Pubkey;
use crate::shortvec;

/// A 64-byte Ed25519 signature over the message bytes.
///
/// Displays as Base58, the text form ledger explorers use.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; 64]);

impl Signature {
    pub const fn new(bytes: [u8; 64]) -> Self {
        Signature(bytes)
    }

    /// The all-zero placeholder an unsigned slot carries.
    pub const fn placeholder() -> Self {
        Signature([0u8; 64])
    }

    pub const fn to_bytes(self) -> [u8; 64] {
        self.0
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == [0u8; 64]
    }
}

impl FromStr for Signature {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| WireError::InvalidSignature(format!("base58 decode failed: {e}")))?;
        let arr: [u8; 64] = bytes.try_into().map_err(|v: Vec<u8>| {
            WireError::InvalidSignature(format!("expected 64 bytes, got {}", v.len()))
        })?;
        Ok(Signature(arr))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({self})")
    }
}

/// A message plus its signature slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// One slot per required signer, in the message's signer order.
    pub signatures: Vec<Signature>,
    pub message: Message,
}

impl Transaction {
    /// Wrap a compiled message with placeholder signature slots.
    pub fn new_unsigned(message: Message) -> Self {
        let slots = message.header.num_required_signatures as usize;
        Transaction {
            signatures: vec![Signature::placeholder(); slots],
            message,
        }
    }

    /// Attach `signature` into the slot belonging to `signer`.
    ///
    /// Fails if `signer` is not one of the message's required signers.
    pub fn attach_signature(
        &mut self,
        signer: &Pubkey,
        signature: Signature,
    ) -> Result<(), WireError> {
        let slot = self.message.signer_position(signer).ok_or_else(|| {
            WireError::AttachError(format!("{signer} is not a required signer"))
        })?;
        self.signatures[slot] = signature;
        Ok(())
    }

    /// True once no placeholder slot remains.
    pub fn is_fully_signed(&self) -> bool {
        !self.signatures.is_empty() && self.signatures.iter().all(|s| !s.is_placeholder())
    }

    /// The first signature (the transaction id the ledger reports), once
    /// it has been attached.
    pub fn signature(&self) -> Option<&Signature> {
        self.signatures.first().filter(|s| !s.is_placeholder())
    }

    /// Assemble the wire bytes: shortvec signature count, the signature
    /// slots, then the message.
    pub fn serialize(&self) -> Vec<u8> {
        let message_bytes = self.message.serialize();

        let mut wire = Vec::with_capacity(1 + 64 * self.signatures.len() + message_bytes.len());
        shortvec::append_u16(&mut wire, self.signatures.len() as u16);
        for signature in &self.signatures {
            wire.extend_from_slice(&signature.to_bytes());
        }
        wire.extend_from_slice(&message_bytes);

        wire
    }
}
