//! Captured broadcast payloads.

use serde::{Deserialize, Serialize};

use crate::identifier::ProximityIdentifier;
use crate::interval::EpochInterval;
use crate::metadata::AssociatedMetadata;

/// One payload captured by the scan layer: the identifier a nearby device
/// broadcast, the metadata beside it, and the measured signal strength.
///
/// The identifier's interval is the *local* interval at capture time, not the
/// sender's; the two clocks can disagree by up to the configured tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPayload {
    /// The captured rolling identifier, stamped with the local interval
    identifier: ProximityIdentifier,
    /// Associated metadata broadcast beside the identifier
    metadata: AssociatedMetadata,
    /// Received signal strength in dBm
    rssi: i8,
}

impl CapturedPayload {
    /// Create a captured payload.
    pub const fn new(
        identifier: ProximityIdentifier,
        metadata: AssociatedMetadata,
        rssi: i8,
    ) -> Self {
        Self { identifier, metadata, rssi }
    }

    /// The captured rolling identifier.
    pub const fn identifier(&self) -> ProximityIdentifier {
        self.identifier
    }

    /// Local interval at capture time.
    pub const fn interval(&self) -> EpochInterval {
        self.identifier.interval()
    }

    /// Associated metadata broadcast beside the identifier.
    pub const fn metadata(&self) -> AssociatedMetadata {
        self.metadata
    }

    /// Received signal strength in dBm.
    pub const fn rssi(&self) -> i8 {
        self.rssi
    }
}
