//! Decoded wallet address.

use crate::base58;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Failure modes of address decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("empty address text")]
    Empty,

    #[error("invalid character {0:?} in address")]
    InvalidCharacter(char),

    #[error("address data too short")]
    TooShort,

    #[error("address checksum mismatch")]
    BadChecksum,
}

/// A structurally valid wallet address: version byte plus payload, as
/// recovered from a Base58Check string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    version: u8,
    payload: Vec<u8>,
}

impl Address {
    /// Decode and checksum-verify an address string.
    pub fn decode(text: &str) -> Result<Self, AddressError> {
        let data = base58::decode_check(text)?;
        let (version, payload) = data.split_first().ok_or(AddressError::TooShort)?;
        Ok(Self {
            version: *version,
            payload: payload.to_vec(),
        })
    }

    /// The leading version byte.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The payload (typically a public-key hash).
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut data = Vec::with_capacity(1 + self.payload.len());
        data.push(self.version);
        data.extend_from_slice(&self.payload);
        f.write_str(&base58::encode_check(&data))
    }
}

/// Whether `text` is a structurally valid, checksum-correct address.
pub fn is_valid(text: &str) -> bool {
    Address::decode(text).is_ok()
}
