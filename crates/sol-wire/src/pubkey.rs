//! Account public keys.
//!
//! A Solana account address is the Base58 encoding of a raw 32-byte Ed25519
//! public key. There is no hashing step; the key bytes ARE the address
//! bytes. The
//! canonical alphabet is the Bitcoin Base58 alphabet used by the `bs58`
//! crate.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::WireError;

/// A 32-byte account public key.
///
/// Displays as its Base58 address string; parses from one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pubkey([u8; 32]);

impl Pubkey {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Pubkey(bytes)
    }

    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl FromStr for Pubkey {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| WireError::InvalidPubkey(format!("base58 decode failed: {e}")))?;

        let arr: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
            WireError::InvalidPubkey(format!("expected 32 bytes, got {}", v.len()))
        })?;

        Ok(Pubkey(arr))
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({self})")
    }
}

impl Serialize for Pubkey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pubkey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The System Program address is 32 zero bytes, which encodes to
    /// "11111111111111111111111111111111" in Base58.
    #[test]
    fn system_program_address() {
        let key = Pubkey::new([0u8; 32]);
        assert_eq!(key.to_string(), "11111111111111111111111111111111");
    }

    #[test]
    fn roundtrip_parse_display() {
        // Known address (the Token Program)
        let address = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
        let key: Pubkey = address.parse().unwrap();
        assert_eq!(key.to_string(), address);
    }

    #[test]
    fn parse_garbage_fails() {
        assert!("not-a-valid-address!!!".parse::<Pubkey>().is_err());
    }

    #[test]
    fn parse_too_short_fails() {
        // "1" decodes to a single zero byte, which is not 32 bytes.
        let err = "1".parse::<Pubkey>().unwrap_err();
        assert!(err.to_string().contains("expected 32 bytes"));
    }

    #[test]
    fn debug_includes_base58() {
        let key = Pubkey::new([0u8; 32]);
        let debug = format!("{key:?}");
        assert!(debug.contains("11111111111111111111111111111111"));
    }

    #[test]
    fn serde_roundtrip_as_base58_string() {
        let key: Pubkey = "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr".parse().unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr\"");
        let back: Pubkey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn serde_rejects_wrong_length() {
        let result: Result<Pubkey, _> = serde_json::from_str("\"1\"");
        assert!(result.is_err());
    }
}
