//! Storage abstraction for the exposure-notification core.
//!
//! Trait-based boundary between the core and whatever persists keys and
//! captured payloads. The trait is synchronous (no async) to keep the core's
//! pure, blocking-free call discipline; persistence backends live outside
//! this crate, only an in-memory reference implementation ships here.

mod error;
mod memory;

use std::collections::BTreeMap;

pub use error::StoreError;
pub use memory::MemoryStore;

use crate::captured::CapturedPayload;
use crate::interval::EpochInterval;
use crate::keys::{DiagnosisKey, TemporaryExposureKey};

/// Storage boundary consumed by the core.
///
/// Must be Clone (handed to independent call sites), Send + Sync
/// (thread-safe), and synchronous. Implementations typically share internal
/// state via Arc, so clones access the same underlying store.
pub trait ExposureStore: Clone + Send + Sync + 'static {
    /// Persist a locally generated rotating key.
    fn add_own_key(&self, key: TemporaryExposureKey) -> Result<(), StoreError>;

    /// All locally generated rotating keys, oldest first.
    fn own_keys(&self) -> Result<Vec<TemporaryExposureKey>, StoreError>;

    /// The rotating key whose validity window starts at `interval`.
    ///
    /// # Errors
    ///
    /// - `IntegrityViolation`: if zero or more than one key is stored for
    ///   `interval`. Exactly one rotating key is valid per day; anything else
    ///   is a storage-integrity error that must surface, never be masked by
    ///   picking arbitrarily.
    fn own_key_for_interval(
        &self,
        interval: EpochInterval,
    ) -> Result<TemporaryExposureKey, StoreError>;

    /// Whether any rotating key is stored for `interval`.
    fn has_own_key_for_interval(&self, interval: EpochInterval) -> Result<bool, StoreError>;

    /// Persist a captured broadcast payload.
    fn add_captured(&self, payload: CapturedPayload) -> Result<(), StoreError>;

    /// All captured payloads, in capture order.
    fn captured(&self) -> Result<Vec<CapturedPayload>, StoreError>;

    /// Captured payloads grouped by their local capture interval.
    fn captured_by_interval(
        &self,
    ) -> Result<BTreeMap<EpochInterval, Vec<CapturedPayload>>, StoreError> {
        let mut grouped: BTreeMap<EpochInterval, Vec<CapturedPayload>> = BTreeMap::new();
        for payload in self.captured()? {
            grouped.entry(payload.interval()).or_default().push(payload);
        }
        Ok(grouped)
    }

    /// Persist a batch of diagnosis keys under an opaque batch token.
    ///
    /// Appends to the batch if the token already exists.
    fn add_diagnosis_keys(&self, token: &str, keys: Vec<DiagnosisKey>) -> Result<(), StoreError>;

    /// Diagnosis keys of one batch. Empty if the token is unknown.
    fn diagnosis_keys(&self, token: &str) -> Result<Vec<DiagnosisKey>, StoreError>;

    /// Drop a diagnosis-key batch. A no-op for unknown tokens.
    fn remove_diagnosis_batch(&self, token: &str) -> Result<(), StoreError>;

    /// Drop rotating keys and captured payloads older than `cutoff`.
    ///
    /// Diagnosis-key batches are managed by token, not by age, and are left
    /// untouched.
    fn prune_before(&self, cutoff: EpochInterval) -> Result<(), StoreError>;

    /// Drop everything.
    fn clear(&self) -> Result<(), StoreError>;
}
