use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{ExposureStore, StoreError};
use crate::captured::CapturedPayload;
use crate::interval::EpochInterval;
use crate::keys::{DiagnosisKey, TemporaryExposureKey};

/// In-memory store for tests and simulation.
///
/// Uses Vecs in insertion order for keys and captured payloads, and a
/// `HashMap` for diagnosis-key batches by token. All state is wrapped in
/// `Arc<Mutex<_>>` to allow Clone and concurrent access. Uses
/// `lock().expect()` which will panic if the mutex is poisoned - acceptable
/// for test code.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryStoreInner>>,
}

struct MemoryStoreInner {
    /// Locally generated rotating keys, oldest first
    own_keys: Vec<TemporaryExposureKey>,

    /// Captured payloads in capture order
    captured: Vec<CapturedPayload>,

    /// Diagnosis-key batches by opaque token
    diagnosis: HashMap<String, Vec<DiagnosisKey>>,
}

impl MemoryStore {
    /// Create a new empty `MemoryStore`.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryStoreInner {
                own_keys: Vec::new(),
                captured: Vec::new(),
                diagnosis: HashMap::new(),
            })),
        }
    }

    /// Number of stored rotating keys.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned (a thread panicked while
    /// holding the lock). This is acceptable for test/simulation code.
    #[allow(clippy::expect_used)]
    pub fn own_key_count(&self) -> usize {
        self.inner.lock().expect("Mutex poisoned").own_keys.len()
    }

    /// Number of stored captured payloads.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    pub fn captured_count(&self) -> usize {
        self.inner.lock().expect("Mutex poisoned").captured.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExposureStore for MemoryStore {
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn add_own_key(&self, key: TemporaryExposureKey) -> Result<(), StoreError> {
        self.inner.lock().expect("Mutex poisoned").own_keys.push(key);
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn own_keys(&self) -> Result<Vec<TemporaryExposureKey>, StoreError> {
        Ok(self.inner.lock().expect("Mutex poisoned").own_keys.clone())
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn own_key_for_interval(
        &self,
        interval: EpochInterval,
    ) -> Result<TemporaryExposureKey, StoreError> {
        let inner = self.inner.lock().expect("Mutex poisoned");

        let mut found =
            inner.own_keys.iter().filter(|key| key.interval() == interval);

        match (found.next(), found.next()) {
            (Some(key), None) => Ok(key.clone()),
            (None, _) => Err(StoreError::IntegrityViolation { interval, found: 0 }),
            (Some(_), Some(_)) => {
                let count =
                    inner.own_keys.iter().filter(|key| key.interval() == interval).count();
                Err(StoreError::IntegrityViolation { interval, found: count })
            },
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn has_own_key_for_interval(&self, interval: EpochInterval) -> Result<bool, StoreError> {
        let inner = self.inner.lock().expect("Mutex poisoned");
        Ok(inner.own_keys.iter().any(|key| key.interval() == interval))
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn add_captured(&self, payload: CapturedPayload) -> Result<(), StoreError> {
        self.inner.lock().expect("Mutex poisoned").captured.push(payload);
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn captured(&self) -> Result<Vec<CapturedPayload>, StoreError> {
        Ok(self.inner.lock().expect("Mutex poisoned").captured.clone())
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn add_diagnosis_keys(
        &self,
        token: &str,
        keys: Vec<DiagnosisKey>,
    ) -> Result<(), StoreError> {
        self.inner
            .lock()
            .expect("Mutex poisoned")
            .diagnosis
            .entry(token.to_owned())
            .or_default()
            .extend(keys);
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn diagnosis_keys(&self, token: &str) -> Result<Vec<DiagnosisKey>, StoreError> {
        let inner = self.inner.lock().expect("Mutex poisoned");
        Ok(inner.diagnosis.get(token).cloned().unwrap_or_default())
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn remove_diagnosis_batch(&self, token: &str) -> Result<(), StoreError> {
        self.inner.lock().expect("Mutex poisoned").diagnosis.remove(token);
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn prune_before(&self, cutoff: EpochInterval) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("Mutex poisoned");

        inner.own_keys.retain(|key| key.interval() >= cutoff);
        inner.captured.retain(|payload| payload.interval() >= cutoff);
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn clear(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("Mutex poisoned");

        inner.own_keys.clear();
        inner.captured.clear();
        inner.diagnosis.clear();
        Ok(())
    }
}
