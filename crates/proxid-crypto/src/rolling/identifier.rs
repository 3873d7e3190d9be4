//! Per-interval identifier encryption using AES-128
//!
//! A rolling identifier is the AES-128 encryption of a fixed-format 16-byte
//! block under the identifier key, in single-block mode (no chaining, no
//! nonce). The block layout is protocol-mandated and must match bit-for-bit
//! across independent implementations.

use aes::Aes128;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};

use super::derivation::IdentifierKey;

/// Byte length of a rolling identifier (one AES block)
pub const IDENTIFIER_LENGTH: usize = 16;

/// Byte length of the protocol label at the front of the identifier block
pub const IDENTIFIER_LABEL_LENGTH: usize = 6;

/// Derive the rolling identifier for one interval.
///
/// Encrypts the identifier block for `interval` as a single AES-128 block
/// keyed by `identifier_key`. Deterministic: the same key, label, and
/// interval always produce the same 16 bytes, and they must equal the bytes
/// any other correct implementation of the protocol computes.
pub fn derive_identifier(
    identifier_key: &IdentifierKey,
    label: &[u8; IDENTIFIER_LABEL_LENGTH],
    interval: u32,
) -> [u8; IDENTIFIER_LENGTH] {
    let cipher = Aes128::new(GenericArray::from_slice(identifier_key.as_bytes()));

    let mut block = GenericArray::from(build_identifier_block(label, interval));
    cipher.encrypt_block(&mut block);

    let mut identifier = [0u8; IDENTIFIER_LENGTH];
    identifier.copy_from_slice(&block);
    identifier
}

/// Build the 16-byte plaintext block for one interval.
///
/// Layout:
/// - bytes 0-5: protocol label
/// - bytes 6-9: reserved, zero
/// - bytes 10-13: interval number (little-endian)
/// - bytes 14-15: zero padding
fn build_identifier_block(
    label: &[u8; IDENTIFIER_LABEL_LENGTH],
    interval: u32,
) -> [u8; IDENTIFIER_LENGTH] {
    let mut block = [0u8; IDENTIFIER_LENGTH];

    block[0..IDENTIFIER_LABEL_LENGTH].copy_from_slice(label);
    block[10..14].copy_from_slice(&interval.to_le_bytes());

    block
}
