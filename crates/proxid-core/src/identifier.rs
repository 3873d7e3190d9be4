//! Rolling proximity identifiers.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use proxid_crypto::IDENTIFIER_LENGTH;

use crate::error::ProtocolError;
use crate::interval::EpochInterval;

/// A rolling identifier: "this device, at this interval".
///
/// The 16 bytes are what travels over the air. The interval is provenance
/// metadata: the interval a generated identifier was derived for, or the
/// *local* interval a captured identifier was observed at (the sender's clock
/// is unknown, which is why matching is fuzzy).
///
/// # Invariants
///
/// - Equality and hashing consider the identifier bytes only, never the
///   interval: two identifiers are the same identifier iff their byte
///   contents are equal
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct ProximityIdentifier {
    /// The 16 identifier bytes
    data: [u8; IDENTIFIER_LENGTH],
    /// Provenance: generation interval or local capture interval
    interval: EpochInterval,
}

impl ProximityIdentifier {
    /// Create an identifier from its 16 bytes and provenance interval.
    pub const fn new(data: [u8; IDENTIFIER_LENGTH], interval: EpochInterval) -> Self {
        Self { data, interval }
    }

    /// Validate raw identifier bytes from an external source.
    ///
    /// # Errors
    ///
    /// - `MalformedIdentifier`: if `data` is not exactly
    ///   [`IDENTIFIER_LENGTH`] bytes.
    pub fn from_slice(data: &[u8], interval: EpochInterval) -> Result<Self, ProtocolError> {
        let data: [u8; IDENTIFIER_LENGTH] =
            data.try_into().map_err(|_| ProtocolError::MalformedIdentifier {
                expected: IDENTIFIER_LENGTH,
                got: data.len(),
            })?;
        Ok(Self { data, interval })
    }

    /// The 16 identifier bytes.
    pub const fn bytes(&self) -> &[u8; IDENTIFIER_LENGTH] {
        &self.data
    }

    /// Provenance interval.
    pub const fn interval(&self) -> EpochInterval {
        self.interval
    }
}

impl PartialEq for ProximityIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for ProximityIdentifier {}

impl Hash for ProximityIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl fmt::Debug for ProximityIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProximityIdentifier(")?;
        for byte in &self.data {
            write!(f, "{byte:02x}")?;
        }
        write!(f, " @ {})", self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_the_interval() {
        let data = [0xAB; IDENTIFIER_LENGTH];

        let at_capture = ProximityIdentifier::new(data, EpochInterval::new(1500));
        let at_generation = ProximityIdentifier::new(data, EpochInterval::new(1503));

        assert_eq!(at_capture, at_generation);
    }

    #[test]
    fn different_bytes_are_different_identifiers() {
        let interval = EpochInterval::new(1500);

        let a = ProximityIdentifier::new([1; IDENTIFIER_LENGTH], interval);
        let b = ProximityIdentifier::new([2; IDENTIFIER_LENGTH], interval);

        assert_ne!(a, b);
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        let result = ProximityIdentifier::from_slice(&[0u8; 15], EpochInterval::new(0));
        assert_eq!(
            result.unwrap_err(),
            ProtocolError::MalformedIdentifier { expected: 16, got: 15 }
        );
    }

    #[test]
    fn from_slice_accepts_16_bytes() {
        let hex_bytes = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let identifier =
            ProximityIdentifier::from_slice(&hex_bytes, EpochInterval::new(42)).unwrap();

        assert_eq!(identifier.bytes()[15], 0x0f);
        assert_eq!(identifier.interval(), EpochInterval::new(42));
    }

    #[test]
    fn debug_renders_hex_and_interval() {
        let identifier =
            ProximityIdentifier::new([0xFF; IDENTIFIER_LENGTH], EpochInterval::new(7));
        let rendered = format!("{identifier:?}");

        assert!(rendered.contains("ffffffffffffffffffffffffffffffff"));
        assert!(rendered.contains("@ 7"));
    }
}
