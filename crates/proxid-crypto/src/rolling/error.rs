//! Error types for rolling identifier derivation.

use thiserror::Error;

/// Errors that can occur when validating key material for derivation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyMaterialError {
    /// Rotating key secret does not have the mandated byte length
    #[error("rotating key must be {expected} bytes, got {got}")]
    WrongLength {
        /// Mandated secret length in bytes
        expected: usize,
        /// Length of the rejected input
        got: usize,
    },
}
