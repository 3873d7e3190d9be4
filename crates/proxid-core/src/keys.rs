//! Rotating key material.
//!
//! A device generates one rotating key per day (entropy is caller-provided,
//! the core never touches an RNG) and derives everything it broadcasts from
//! it. Keys published by diagnosed users arrive as [`DiagnosisKey`] values
//! and feed candidate selection in the matching engine.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use proxid_crypto::{IdentifierKey, KEY_LENGTH, derive_identifier_key};

use crate::config::ProtocolConfig;
use crate::error::ProtocolError;
use crate::interval::EpochInterval;

/// A rotating key: 16 secret bytes valid for one 144-interval day.
///
/// Immutable once created. The secret is zeroized on drop.
///
/// # Invariants
///
/// - `interval` marks the start of the key's 24-hour validity window; under
///   normal operation exactly one key exists per day
/// - The secret is exactly [`KEY_LENGTH`] bytes, enforced at construction
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporaryExposureKey {
    /// Start of the key's validity window
    interval: EpochInterval,
    /// The daily secret
    secret: [u8; KEY_LENGTH],
}

impl TemporaryExposureKey {
    /// Create a rotating key from caller-provided secret bytes.
    ///
    /// # Errors
    ///
    /// - `MalformedKeyMaterial`: if `secret` is not exactly [`KEY_LENGTH`]
    ///   bytes.
    pub fn new(interval: EpochInterval, secret: &[u8]) -> Result<Self, ProtocolError> {
        let secret: [u8; KEY_LENGTH] = secret
            .try_into()
            .map_err(|_| ProtocolError::MalformedKeyMaterial {
                expected: KEY_LENGTH,
                got: secret.len(),
            })?;
        Ok(Self { interval, secret })
    }

    /// Start of the key's validity window.
    pub const fn interval(&self) -> EpochInterval {
        self.interval
    }

    /// The secret bytes.
    pub const fn secret(&self) -> &[u8; KEY_LENGTH] {
        &self.secret
    }

    /// Derive this key's identifier key.
    ///
    /// Recomputed on demand; callers generating a full day of identifiers
    /// hold the result transiently instead of storing it.
    pub fn identifier_key(&self, config: &ProtocolConfig) -> IdentifierKey {
        let Ok(key) = derive_identifier_key(&self.secret, config.identifier_key_label()) else {
            unreachable!("secret length is enforced at construction");
        };
        key
    }
}

// The secret must not outlive the key in memory
impl Drop for TemporaryExposureKey {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl fmt::Debug for TemporaryExposureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporaryExposureKey")
            .field("interval", &self.interval)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// A rotating key published by a diagnosed user, with its transmission risk
/// annotation.
///
/// Received from a diagnosis-key feed outside the core; used only as an input
/// to candidate selection. The risk level is carried through for downstream
/// risk evaluation, the core itself never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisKey {
    /// The published rotating key
    key: TemporaryExposureKey,
    /// Transmission risk level assigned by the publishing authority
    transmission_risk_level: u8,
}

impl DiagnosisKey {
    /// Create a diagnosis key.
    pub const fn new(key: TemporaryExposureKey, transmission_risk_level: u8) -> Self {
        Self { key, transmission_risk_level }
    }

    /// The published rotating key.
    pub const fn key(&self) -> &TemporaryExposureKey {
        &self.key
    }

    /// Transmission risk level assigned by the publishing authority.
    pub const fn transmission_risk_level(&self) -> u8 {
        self.transmission_risk_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_requires_16_bytes() {
        let short = TemporaryExposureKey::new(EpochInterval::new(1440), &[0u8; 15]);
        assert_eq!(
            short.unwrap_err(),
            ProtocolError::MalformedKeyMaterial { expected: 16, got: 15 }
        );

        let long = TemporaryExposureKey::new(EpochInterval::new(1440), &[0u8; 17]);
        assert_eq!(
            long.unwrap_err(),
            ProtocolError::MalformedKeyMaterial { expected: 16, got: 17 }
        );
    }

    #[test]
    fn identifier_key_is_deterministic() {
        let config = ProtocolConfig::default();
        let key =
            TemporaryExposureKey::new(EpochInterval::new(1440), b"rotating_secret!").unwrap();

        assert_eq!(
            key.identifier_key(&config).as_bytes(),
            key.identifier_key(&config).as_bytes()
        );
    }

    #[test]
    fn debug_redacts_the_secret() {
        let key =
            TemporaryExposureKey::new(EpochInterval::new(1440), b"rotating_secret!").unwrap();
        let rendered = format!("{key:?}");

        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("rotating_secret"));
    }

    #[test]
    fn diagnosis_key_carries_risk_level() {
        let key =
            TemporaryExposureKey::new(EpochInterval::new(1440), b"rotating_secret!").unwrap();
        let diagnosis = DiagnosisKey::new(key.clone(), 6);

        assert_eq!(diagnosis.key(), &key);
        assert_eq!(diagnosis.transmission_risk_level(), 6);
    }
}
