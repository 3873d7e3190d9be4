//! Rolling identifier derivation.
//!
//! Two pure derivation stages: a rotating key's identifier key via HKDF
//! ([`derive_identifier_key`]) and the per-interval identifier via a single
//! AES-128 block encryption ([`derive_identifier`]).

mod derivation;
mod error;
mod identifier;

pub use derivation::{IdentifierKey, KEY_LENGTH, derive_identifier_key};
pub use error::KeyMaterialError;
pub use identifier::{IDENTIFIER_LABEL_LENGTH, IDENTIFIER_LENGTH, derive_identifier};
