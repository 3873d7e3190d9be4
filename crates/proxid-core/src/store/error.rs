//! Error types for the storage boundary.

use thiserror::Error;

use crate::interval::EpochInterval;

/// Errors surfaced by [`ExposureStore`](super::ExposureStore)
/// implementations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The one-key-per-interval invariant is broken: zero or multiple
    /// rotating keys stored where exactly one must exist. Fatal to the
    /// calling operation.
    #[error("expected exactly one rotating key for interval {interval}, found {found}")]
    IntegrityViolation {
        /// Interval the lookup asked for
        interval: EpochInterval,
        /// Number of keys actually stored for it
        found: usize,
    },

    /// Underlying storage backend failure
    #[error("storage backend error: {0}")]
    Backend(String),
}
