use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::borrow::Borrow;
use std::fmt;

use crate::constants::{ADDRESS_BYTES, ADDRESS_CHECKSUM_BYTES, ADDRESS_KEY_BYTES};
use crate::error::AllotError;

/// Balance in whole coins.
pub type Balance = u64;

/// Unix timestamp (seconds, UTC).
pub type Timestamp = u64;

// ── Address ──────────────────────────────────────────────────────────────────

/// A base58-encoded ledger address.
///
/// Identity is exact string equality. Building an `Address` never validates
/// the encoding, so any owner string a collaborator hands over can be compared
/// against the distribution set; use [`Address::decode`] when the encoding
/// itself matters.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the base58 string and verify its checksum.
    ///
    /// Layout: `key (20) || version (1) || SHA256(key || version)[..4]`.
    pub fn decode(&self) -> Result<DecodedAddress, AllotError> {
        let bytes = bs58::decode(&self.0)
            .into_vec()
            .map_err(|e| AllotError::InvalidBase58(e.to_string()))?;
        if bytes.len() != ADDRESS_BYTES {
            return Err(AllotError::InvalidAddressLength {
                expected: ADDRESS_BYTES,
                got: bytes.len(),
            });
        }

        let (body, checksum) = bytes.split_at(ADDRESS_BYTES - ADDRESS_CHECKSUM_BYTES);
        let digest = Sha256::digest(body);
        if digest[..ADDRESS_CHECKSUM_BYTES] != *checksum {
            return Err(AllotError::AddressChecksumMismatch);
        }

        let mut key = [0u8; ADDRESS_KEY_BYTES];
        key.copy_from_slice(&body[..ADDRESS_KEY_BYTES]);
        Ok(DecodedAddress {
            key,
            version: body[ADDRESS_KEY_BYTES],
        })
    }

    pub fn is_well_formed(&self) -> bool {
        self.decode().is_ok()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Address {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ── DecodedAddress ───────────────────────────────────────────────────────────

/// The binary form of an [`Address`] after checksum verification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DecodedAddress {
    /// RIPEMD160(SHA256(SHA256(pubkey))) of the owning key.
    pub key: [u8; ADDRESS_KEY_BYTES],
    pub version: u8,
}

impl DecodedAddress {
    pub fn key_hex(&self) -> String {
        hex::encode(self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS_ADDR: &str = "2Er4U9oGkXHjiDG7Qy7GzqEue1pFwCDVF29";

    #[test]
    fn decodes_known_address() {
        let decoded = Address::from(GENESIS_ADDR).decode().unwrap();
        assert_eq!(decoded.version, 0);
        assert_eq!(decoded.key_hex(), "b28d7c0dd12843a4178c3f3ec52bc527e84f17dc");
    }

    #[test]
    fn rejects_bad_checksum() {
        // Last base58 digit bumped by one: only the checksum bytes change.
        let addr = Address::from("2Er4U9oGkXHjiDG7Qy7GzqEue1pFwCDVF2A");
        assert_eq!(addr.decode(), Err(AllotError::AddressChecksumMismatch));
        assert!(!addr.is_well_formed());
    }

    #[test]
    fn rejects_short_and_non_base58() {
        assert!(matches!(
            Address::from("2Er4").decode(),
            Err(AllotError::InvalidAddressLength { expected: 25, .. })
        ));
        assert!(matches!(
            Address::from("0OIl").decode(),
            Err(AllotError::InvalidBase58(_))
        ));
        assert!(matches!(
            Address::from("").decode(),
            Err(AllotError::InvalidAddressLength { got: 0, .. })
        ));
    }

    #[test]
    fn identity_is_string_equality() {
        let a = Address::from(GENESIS_ADDR);
        let b = Address::new(GENESIS_ADDR.to_string());
        assert_eq!(a, b);
        assert_ne!(a, Address::from(GENESIS_ADDR.to_lowercase()));
        assert_eq!(a.to_string(), GENESIS_ADDR);
        assert_eq!(format!("{:<36}|", Address::from("ab")), format!("{:<36}|", "ab"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let a = Address::from(GENESIS_ADDR);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, format!("\"{GENESIS_ADDR}\""));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
