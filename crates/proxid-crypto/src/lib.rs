//! Proxid Cryptographic Primitives
//!
//! Cryptographic building blocks for the proxid exposure-notification core.
//! Pure functions with deterministic outputs and no I/O. Key material entropy
//! is provided by callers, which keeps every operation reproducible in tests.
//!
//! # Key Lifecycle
//!
//! This section describes the derivation chain from a daily rotating secret to
//! the per-interval identifiers a device broadcasts. Each rotating key is
//! valid for one 144-interval day; its identifier key is derived once and then
//! produces one identifier per 10-minute interval.
//!
//! ```text
//! Rotating Key (daily secret, 16 bytes)
//!        │
//!        ▼
//! HKDF-SHA256 → Identifier Key (per rotating key)
//!        │
//!        ▼
//! AES-128 single block → Rolling Identifier (per interval)
//! ```
//!
//! Both stages are the interoperability contract of the protocol: independent
//! implementations observing the same rotating key must reproduce identical
//! identifier bytes, so the block layout and derivation labels are fixed
//! bit-for-bit.
//!
//! # Security
//!
//! Unlinkability:
//! - Identifiers rotate every interval; without the rotating key, successive
//!   identifiers from one device are indistinguishable from random
//! - The identifier key never leaves the derivation chain and is never stored
//!
//! Key Hygiene:
//! - Identifier keys are zeroized on drop
//! - Wrong-length key material is rejected before any derivation runs

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod rolling;

pub use rolling::{
    IDENTIFIER_LABEL_LENGTH, IDENTIFIER_LENGTH, IdentifierKey, KEY_LENGTH, KeyMaterialError,
    derive_identifier, derive_identifier_key,
};
