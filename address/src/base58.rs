//! Base58Check codec.
//!
//! Big-integer base conversion over the Bitcoin alphabet (no `0`, `O`,
//! `I`, or `l`), with a 4-byte double-SHA-256 checksum suffix.

use crate::address::AddressError;
use sha2::{Digest, Sha256};

/// The Base58 alphabet.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Whether `c` may appear in a Base58-encoded string.
pub fn is_base58_char(c: char) -> bool {
    c.is_ascii() && ALPHABET.contains(&(c as u8))
}

fn digit_value(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    ALPHABET.iter().position(|&a| a == c as u8).map(|i| i as u32)
}

/// Decode a Base58 string into bytes.
pub fn decode(text: &str) -> Result<Vec<u8>, AddressError> {
    if text.is_empty() {
        return Err(AddressError::Empty);
    }
    // A leading run of '1' encodes leading zero bytes.
    let zeros = text.bytes().take_while(|b| *b == b'1').count();

    let mut little_endian: Vec<u8> = Vec::with_capacity(text.len() * 733 / 1000 + 1);
    for c in text.chars().skip(zeros) {
        let mut carry = digit_value(c).ok_or(AddressError::InvalidCharacter(c))?;
        for byte in little_endian.iter_mut() {
            carry += u32::from(*byte) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            little_endian.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut out = vec![0u8; zeros];
    out.extend(little_endian.iter().rev());
    Ok(out)
}

/// Encode bytes as a Base58 string.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|b| **b == 0).count();

    let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 138 / 100 + 1);
    for &byte in &data[zeros..] {
        let mut carry = u32::from(byte);
        for digit in digits.iter_mut() {
            carry += u32::from(*digit) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut out = String::with_capacity(zeros + digits.len());
    for _ in 0..zeros {
        out.push('1');
    }
    for &digit in digits.iter().rev() {
        out.push(ALPHABET[usize::from(digit)] as char);
    }
    out
}

fn checksum(payload: &[u8]) -> [u8; 4] {
    let digest = Sha256::digest(Sha256::digest(payload));
    let mut out = [0u8; 4];
    out.copy_from_slice(&digest[..4]);
    out
}

/// Decode and verify a Base58Check string, returning the payload without
/// its checksum suffix.
pub fn decode_check(text: &str) -> Result<Vec<u8>, AddressError> {
    let data = decode(text)?;
    if data.len() < 4 {
        return Err(AddressError::TooShort);
    }
    let (payload, suffix) = data.split_at(data.len() - 4);
    if checksum(payload) != *suffix {
        return Err(AddressError::BadChecksum);
    }
    Ok(payload.to_vec())
}

/// Encode a payload as Base58Check, appending its checksum.
pub fn encode_check(payload: &[u8]) -> String {
    let mut data = payload.to_vec();
    data.extend_from_slice(&checksum(payload));
    encode(&data)
}
