//! Identifier-key derivation using HKDF

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroize;

use super::error::KeyMaterialError;

/// Byte length of a rotating key secret and of the derived identifier key
pub const KEY_LENGTH: usize = 16;

/// Key used to derive the rolling identifiers of one rotating key.
///
/// Purely a function of the rotating key it was derived from; it is never
/// stored and is recomputed on demand (or held transiently while generating
/// one day's identifiers). Zeroized on drop.
#[derive(Clone, Debug)]
pub struct IdentifierKey {
    /// The 16-byte AES-128 key for identifier encryption
    key: [u8; KEY_LENGTH],
}

impl IdentifierKey {
    /// 16-byte AES-128 key for identifier encryption.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

// Implement Drop to zeroize key material
impl Drop for IdentifierKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

/// Derive the identifier key for a rotating key secret.
///
/// Applies HKDF-SHA256 with no salt and the protocol's derivation label as
/// the `info` parameter, truncating the output to 16 bytes. Interoperating
/// devices derive the same identifier key from the same secret independently,
/// so the inputs must match the deployed protocol exactly.
///
/// # Errors
///
/// - `WrongLength`: if `secret` is not exactly [`KEY_LENGTH`] bytes. Rejected
///   before any derivation runs.
pub fn derive_identifier_key(
    secret: &[u8],
    label: &[u8],
) -> Result<IdentifierKey, KeyMaterialError> {
    if secret.len() != KEY_LENGTH {
        return Err(KeyMaterialError::WrongLength { expected: KEY_LENGTH, got: secret.len() });
    }

    let hkdf = Hkdf::<Sha256>::new(None, secret);

    let mut key = [0u8; KEY_LENGTH];
    let Ok(()) = hkdf.expand(label, &mut key) else {
        unreachable!("16 bytes is a valid HKDF-SHA256 output length");
    };

    Ok(IdentifierKey { key })
}
