//! Epoch interval arithmetic.
//!
//! The temporal model of the protocol: time is a grid of fixed-duration
//! (10-minute) ticks counted from the Unix epoch, and every rotating key is
//! valid for one 144-interval day. All arithmetic here is on integers; the
//! core never reads a wall clock, callers supply interval values.

use std::fmt;
use std::num::NonZeroU32;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// A count of fixed-duration intervals since the Unix epoch.
///
/// # Invariants
///
/// - Non-negative by construction (`u32`), matching the 4-byte little-endian
///   interval field of the identifier block
/// - Monotonically increasing with wall-clock time; window arithmetic
///   saturates at the epoch origin instead of wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EpochInterval(u32);

impl EpochInterval {
    /// Create an interval from a tick count.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Validate a raw signed interval value from an external source.
    ///
    /// # Errors
    ///
    /// - `OutOfRangeInterval`: if `value` is negative or exceeds the 4-byte
    ///   interval space.
    pub fn from_raw(value: i64) -> Result<Self, ProtocolError> {
        u32::try_from(value).map(Self).map_err(|_| ProtocolError::OutOfRangeInterval { value })
    }

    /// Interval containing a Unix timestamp, on the grid defined by
    /// `interval_duration`.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig`: if `interval_duration` is zero.
    /// - `OutOfRangeInterval`: if the resulting tick count exceeds the 4-byte
    ///   interval space.
    pub fn from_unix_seconds(
        seconds: u64,
        interval_duration: Duration,
    ) -> Result<Self, ProtocolError> {
        let tick = interval_duration.as_secs();
        if tick == 0 {
            return Err(ProtocolError::InvalidConfig { reason: "interval duration must be nonzero" });
        }
        let ticks = seconds / tick;
        u32::try_from(ticks).map(Self).map_err(|_| ProtocolError::OutOfRangeInterval {
            value: i64::try_from(ticks).unwrap_or(i64::MAX),
        })
    }

    /// Unix timestamp (seconds) at which this interval begins.
    pub fn unix_seconds(self, interval_duration: Duration) -> u64 {
        u64::from(self.0) * interval_duration.as_secs()
    }

    /// Raw tick count.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// First interval of the day containing this interval.
    ///
    /// Floor-aligns to the nearest multiple of `intervals_per_day` at or
    /// below the input.
    pub fn day_start(self, intervals_per_day: NonZeroU32) -> Self {
        Self(self.0 / intervals_per_day * intervals_per_day.get())
    }

    /// Interval `n` ticks earlier, saturating at the epoch origin.
    pub const fn saturating_sub(self, n: u32) -> Self {
        Self(self.0.saturating_sub(n))
    }

    /// Interval `n` ticks later, saturating at the end of the interval space.
    pub const fn saturating_add(self, n: u32) -> Self {
        Self(self.0.saturating_add(n))
    }
}

impl fmt::Display for EpochInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
