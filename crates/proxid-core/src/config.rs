//! Protocol configuration.
//!
//! Every constant the deployed protocol fixes for interoperability lives in
//! one immutable struct passed explicitly to the core's entry points, never
//! in ambient global state. Alternate parameters are constructible for tests;
//! production callers use `ProtocolConfig::default()`.

use std::num::NonZeroU32;
use std::time::Duration;

use proxid_crypto::IDENTIFIER_LABEL_LENGTH;

use crate::error::ProtocolError;
use crate::interval::EpochInterval;

/// Immutable protocol parameters.
///
/// # Invariants
///
/// - `intervals_per_day` is nonzero
/// - `interval_duration` is nonzero
/// - `tolerance` is smaller than one day, so a tolerance window can straddle
///   at most one day boundary (the two-slot case of candidate selection)
#[derive(Debug, Clone)]
pub struct ProtocolConfig {
    /// Number of intervals in one key validity day
    intervals_per_day: NonZeroU32,
    /// Wall-clock duration of one interval
    interval_duration: Duration,
    /// Fuzzy tolerance width: maximum assumed clock skew between broadcaster
    /// and scanner, in intervals
    tolerance: u32,
    /// HKDF `info` label for identifier-key derivation
    identifier_key_label: &'static [u8],
    /// Label at the front of the identifier block
    identifier_label: [u8; IDENTIFIER_LABEL_LENGTH],
}

impl ProtocolConfig {
    /// Create a configuration with explicit parameters.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig`: if `intervals_per_day` or `interval_duration` is
    ///   zero, or `tolerance` is not smaller than `intervals_per_day`.
    pub fn new(
        intervals_per_day: u32,
        interval_duration: Duration,
        tolerance: u32,
        identifier_key_label: &'static [u8],
        identifier_label: [u8; IDENTIFIER_LABEL_LENGTH],
    ) -> Result<Self, ProtocolError> {
        let Some(intervals_per_day) = NonZeroU32::new(intervals_per_day) else {
            return Err(ProtocolError::InvalidConfig { reason: "intervals per day must be nonzero" });
        };
        if interval_duration.is_zero() {
            return Err(ProtocolError::InvalidConfig { reason: "interval duration must be nonzero" });
        }
        if tolerance >= intervals_per_day.get() {
            return Err(ProtocolError::InvalidConfig {
                reason: "tolerance must be smaller than one day",
            });
        }

        Ok(Self {
            intervals_per_day,
            interval_duration,
            tolerance,
            identifier_key_label,
            identifier_label,
        })
    }

    /// Number of intervals in one key validity day.
    pub const fn intervals_per_day(&self) -> NonZeroU32 {
        self.intervals_per_day
    }

    /// Wall-clock duration of one interval.
    pub const fn interval_duration(&self) -> Duration {
        self.interval_duration
    }

    /// Fuzzy tolerance width in intervals.
    pub const fn tolerance(&self) -> u32 {
        self.tolerance
    }

    /// HKDF `info` label for identifier-key derivation.
    pub const fn identifier_key_label(&self) -> &'static [u8] {
        self.identifier_key_label
    }

    /// Label at the front of the identifier block.
    pub const fn identifier_label(&self) -> &[u8; IDENTIFIER_LABEL_LENGTH] {
        &self.identifier_label
    }

    /// First interval of the day containing `interval`.
    pub fn day_start(&self, interval: EpochInterval) -> EpochInterval {
        interval.day_start(self.intervals_per_day)
    }

    /// Last interval of the day containing `interval`.
    ///
    /// A rotating key whose validity day starts at `day_start` never produces
    /// identifiers after `day_start + intervals_per_day - 1`.
    pub fn day_end(&self, interval: EpochInterval) -> EpochInterval {
        self.day_start(interval).saturating_add(self.intervals_per_day.get() - 1)
    }
}

/// The deployed protocol's parameters: 10-minute intervals, 144 intervals per
/// day, ±12 intervals (±2 h) of clock-skew tolerance, and the fixed
/// derivation labels.
impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            intervals_per_day: NonZeroU32::new(144).unwrap_or(NonZeroU32::MIN),
            interval_duration: Duration::from_secs(600),
            tolerance: 12,
            identifier_key_label: b"EN-RPIK",
            identifier_label: *b"EN-RPI",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_deployed_protocol() {
        let config = ProtocolConfig::default();

        assert_eq!(config.intervals_per_day().get(), 144);
        assert_eq!(config.interval_duration(), Duration::from_secs(600));
        assert_eq!(config.tolerance(), 12);
        assert_eq!(config.identifier_key_label(), b"EN-RPIK");
        assert_eq!(config.identifier_label(), b"EN-RPI");
    }

    #[test]
    fn day_bounds() {
        let config = ProtocolConfig::default();

        assert_eq!(config.day_start(EpochInterval::new(1590)), EpochInterval::new(1584));
        assert_eq!(config.day_end(EpochInterval::new(1590)), EpochInterval::new(1727));
    }

    #[test]
    fn zero_intervals_per_day_rejected() {
        let result =
            ProtocolConfig::new(0, Duration::from_secs(600), 12, b"EN-RPIK", *b"EN-RPI");
        assert!(matches!(result, Err(ProtocolError::InvalidConfig { .. })));
    }

    #[test]
    fn zero_interval_duration_rejected() {
        let result = ProtocolConfig::new(144, Duration::ZERO, 12, b"EN-RPIK", *b"EN-RPI");
        assert!(matches!(result, Err(ProtocolError::InvalidConfig { .. })));
    }

    #[test]
    fn day_sized_tolerance_rejected() {
        let result =
            ProtocolConfig::new(144, Duration::from_secs(600), 144, b"EN-RPIK", *b"EN-RPI");
        assert!(matches!(result, Err(ProtocolError::InvalidConfig { .. })));
    }

    #[test]
    fn alternate_parameters_accepted() {
        let config =
            ProtocolConfig::new(24, Duration::from_secs(3600), 2, b"TESTKEY", *b"TESTID")
                .unwrap();

        assert_eq!(config.day_start(EpochInterval::new(50)), EpochInterval::new(48));
        assert_eq!(config.day_end(EpochInterval::new(50)), EpochInterval::new(71));
    }
}
