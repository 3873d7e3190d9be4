//! Associated metadata broadcast beside each rolling identifier.

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Byte length of the associated metadata block
pub const METADATA_LENGTH: usize = 4;

const VERSIONING_BYTE: usize = 0;
const POWER_LEVEL_BYTE: usize = 1;
const MAJOR_BIT_POS: u32 = 6;
const MINOR_BIT_POS: u32 = 4;

/// The 4-byte associated metadata block.
///
/// Layout:
/// - byte 0: protocol version, major in bits 7-6 and minor in bits 5-4
/// - byte 1: transmit power level, signed
/// - bytes 2-3: reserved
///
/// The over-the-air form is encrypted by the broadcast layer; this type holds
/// the plaintext block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatedMetadata {
    data: [u8; METADATA_LENGTH],
}

impl AssociatedMetadata {
    /// Pack version and power level into a metadata block.
    ///
    /// # Errors
    ///
    /// - `InvalidMetadata`: if a version does not fit in two bits or the
    ///   power level is below -127 dBm.
    pub fn new(
        major_version: u8,
        minor_version: u8,
        power_level: i8,
    ) -> Result<Self, ProtocolError> {
        if major_version >= 4 {
            return Err(ProtocolError::InvalidMetadata {
                field: "major version",
                value: i64::from(major_version),
            });
        }
        if minor_version >= 4 {
            return Err(ProtocolError::InvalidMetadata {
                field: "minor version",
                value: i64::from(minor_version),
            });
        }
        if power_level == i8::MIN {
            return Err(ProtocolError::InvalidMetadata {
                field: "power level",
                value: i64::from(power_level),
            });
        }

        let mut data = [0u8; METADATA_LENGTH];
        data[VERSIONING_BYTE] =
            (major_version << MAJOR_BIT_POS) | (minor_version << MINOR_BIT_POS);
        data[POWER_LEVEL_BYTE] = power_level as u8;
        Ok(Self { data })
    }

    /// Validate a raw metadata block from an external source.
    ///
    /// # Errors
    ///
    /// - `InvalidMetadata`: if `raw` is not exactly [`METADATA_LENGTH`]
    ///   bytes.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, ProtocolError> {
        let data: [u8; METADATA_LENGTH] =
            raw.try_into().map_err(|_| ProtocolError::InvalidMetadata {
                field: "raw length",
                value: raw.len() as i64,
            })?;
        Ok(Self { data })
    }

    /// The raw metadata block.
    pub const fn bytes(&self) -> [u8; METADATA_LENGTH] {
        self.data
    }

    /// Major protocol version.
    pub const fn major_version(&self) -> u8 {
        (self.data[VERSIONING_BYTE] >> MAJOR_BIT_POS) & 3
    }

    /// Minor protocol version.
    pub const fn minor_version(&self) -> u8 {
        (self.data[VERSIONING_BYTE] >> MINOR_BIT_POS) & 3
    }

    /// Transmit power level in dBm.
    pub const fn power_level(&self) -> i8 {
        self.data[POWER_LEVEL_BYTE] as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_round_trips() {
        let metadata = AssociatedMetadata::new(1, 2, -40).unwrap();

        assert_eq!(metadata.major_version(), 1);
        assert_eq!(metadata.minor_version(), 2);
        assert_eq!(metadata.power_level(), -40);
    }

    #[test]
    fn versions_pack_into_high_bits() {
        let metadata = AssociatedMetadata::new(3, 3, 0).unwrap();
        assert_eq!(metadata.bytes()[0], 0b1111_0000);

        let metadata = AssociatedMetadata::new(1, 0, 0).unwrap();
        assert_eq!(metadata.bytes()[0], 0b0100_0000);
    }

    #[test]
    fn reserved_bytes_stay_zero() {
        let metadata = AssociatedMetadata::new(1, 1, 20).unwrap();
        assert_eq!(&metadata.bytes()[2..], &[0, 0]);
    }

    #[test]
    fn out_of_range_fields_rejected() {
        assert_eq!(
            AssociatedMetadata::new(4, 0, 0).unwrap_err(),
            ProtocolError::InvalidMetadata { field: "major version", value: 4 }
        );
        assert_eq!(
            AssociatedMetadata::new(0, 4, 0).unwrap_err(),
            ProtocolError::InvalidMetadata { field: "minor version", value: 4 }
        );
        assert_eq!(
            AssociatedMetadata::new(0, 0, i8::MIN).unwrap_err(),
            ProtocolError::InvalidMetadata { field: "power level", value: -128 }
        );
    }

    #[test]
    fn raw_block_round_trips() {
        let original = AssociatedMetadata::new(2, 1, -63).unwrap();
        let reparsed = AssociatedMetadata::from_bytes(&original.bytes()).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn wrong_raw_length_rejected() {
        assert!(AssociatedMetadata::from_bytes(&[0u8; 3]).is_err());
        assert!(AssociatedMetadata::from_bytes(&[0u8; 5]).is_err());
    }

    #[test]
    fn negative_power_levels_survive_the_byte_cast() {
        let metadata = AssociatedMetadata::new(0, 0, -127).unwrap();
        assert_eq!(metadata.power_level(), -127);

        let metadata = AssociatedMetadata::new(0, 0, 127).unwrap();
        assert_eq!(metadata.power_level(), 127);
    }
}
