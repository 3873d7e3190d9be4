//! Error types for the exposure-notification core.
//!
//! Strongly-typed errors for malformed input crossing the core's boundary.
//! All core functions are total over well-formed input: malformed key
//! material, out-of-range intervals, and invalid configuration raise a typed
//! failure instead of returning a sentinel value, and no partial results are
//! produced on failure.

use thiserror::Error;

use proxid_crypto::KeyMaterialError;

/// Errors raised when validating values entering the core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Rotating or identifier key material has the wrong byte length
    #[error("key material must be {expected} bytes, got {got}")]
    MalformedKeyMaterial {
        /// Mandated key length in bytes
        expected: usize,
        /// Length of the rejected input
        got: usize,
    },

    /// Captured identifier bytes have the wrong length
    #[error("rolling identifier must be {expected} bytes, got {got}")]
    MalformedIdentifier {
        /// Mandated identifier length in bytes
        expected: usize,
        /// Length of the rejected input
        got: usize,
    },

    /// Negative or oversized raw interval value
    #[error("epoch interval out of range: {value}")]
    OutOfRangeInterval {
        /// The rejected raw value
        value: i64,
    },

    /// Associated metadata field outside its protocol-mandated range
    #[error("associated metadata {field} out of range: {value}")]
    InvalidMetadata {
        /// Which field was rejected
        field: &'static str,
        /// The rejected value
        value: i64,
    },

    /// Protocol configuration violates a structural invariant
    #[error("invalid protocol configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration was rejected
        reason: &'static str,
    },
}

/// Convert proxid-crypto key validation errors to `ProtocolError`
impl From<KeyMaterialError> for ProtocolError {
    fn from(err: KeyMaterialError) -> Self {
        match err {
            KeyMaterialError::WrongLength { expected, got } => {
                Self::MalformedKeyMaterial { expected, got }
            },
        }
    }
}
