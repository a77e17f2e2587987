// src/types.rs
use byteorder::ByteOrder;
use std::fmt;

/// Total byte length of a Fragment (header + payload)
pub type FragmentSize = u64;
pub type TriggerNumber = u64;
/// DAQ clock ticks
pub type Timestamp = u64;
pub type TimestampDiff = i64;
pub type RunNumber = u32;
/// Raw numeric tag stored in the header's `fragment_type` field
pub type FragmentTypeTag = u32;

/// Sentinel values marking a header field as "not set"
pub struct TypeDefaults;

impl TypeDefaults {
    pub const INVALID_FRAGMENT_SIZE: FragmentSize = FragmentSize::MAX;
    pub const INVALID_TRIGGER_NUMBER: TriggerNumber = TriggerNumber::MAX;
    pub const INVALID_TIMESTAMP: Timestamp = Timestamp::MAX;
    pub const INVALID_TIMESTAMP_DIFF: TimestampDiff = TimestampDiff::MAX;
    pub const INVALID_RUN_NUMBER: RunNumber = RunNumber::MAX;
    pub const INVALID_FRAGMENT_TYPE: FragmentTypeTag = FragmentTypeTag::MAX;
    pub const INVALID_APA_NUMBER: u32 = u32::MAX;
    pub const INVALID_LINK_NUMBER: u32 = u32::MAX;
}

/// Byte order of the header's wire form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

impl Endianness {
    pub fn is_big_endian(&self) -> bool {
        matches!(self, Endianness::Big)
    }
}

/// Geographic identifier of the detector component that produced a Fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GeoId {
    pub apa_number: u32,
    pub link_number: u32,
}

impl GeoId {
    /// Encoded width in bytes
    pub const SIZE: usize = 8;

    pub fn new(apa_number: u32, link_number: u32) -> Self {
        GeoId { apa_number, link_number }
    }

    pub fn is_valid(&self) -> bool {
        self.apa_number != TypeDefaults::INVALID_APA_NUMBER
            && self.link_number != TypeDefaults::INVALID_LINK_NUMBER
    }

    /// Write the 8-byte wire form into the start of `buf`
    pub fn encode<B: ByteOrder>(&self, buf: &mut [u8]) {
        B::write_u32(&mut buf[0..4], self.apa_number);
        B::write_u32(&mut buf[4..8], self.link_number);
    }

    /// Read the 8-byte wire form from the start of `buf`
    pub fn decode<B: ByteOrder>(buf: &[u8]) -> Self {
        GeoId {
            apa_number: B::read_u32(&buf[0..4]),
            link_number: B::read_u32(&buf[4..8]),
        }
    }
}

impl Default for GeoId {
    fn default() -> Self {
        GeoId {
            apa_number: TypeDefaults::INVALID_APA_NUMBER,
            link_number: TypeDefaults::INVALID_LINK_NUMBER,
        }
    }
}

impl fmt::Display for GeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "APA: {}, link: {}", self.apa_number, self.link_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{BigEndian, LittleEndian};

    #[test]
    fn test_geo_id_default_is_invalid() {
        let id = GeoId::default();
        assert!(!id.is_valid());
        assert_eq!(id.apa_number, u32::MAX);
        assert_eq!(id.link_number, u32::MAX);
        assert!(GeoId::new(1, 2).is_valid());
    }

    #[test]
    fn test_geo_id_display() {
        assert_eq!(GeoId::new(3, 7).to_string(), "APA: 3, link: 7");
    }

    #[test]
    fn test_geo_id_wire_order() {
        let id = GeoId::new(0x0102_0304, 5);

        let mut le = [0u8; GeoId::SIZE];
        id.encode::<LittleEndian>(&mut le);
        assert_eq!(le, [4, 3, 2, 1, 5, 0, 0, 0]);

        let mut be = [0u8; GeoId::SIZE];
        id.encode::<BigEndian>(&mut be);
        assert_eq!(be, [1, 2, 3, 4, 0, 0, 0, 5]);

        assert_eq!(GeoId::decode::<BigEndian>(&be), id);
        assert_eq!(GeoId::decode::<LittleEndian>(&le), id);
    }

    #[test]
    fn test_endianness_default() {
        assert_eq!(Endianness::default(), Endianness::Little);
        assert!(Endianness::Big.is_big_endian());
        assert!(!Endianness::Little.is_big_endian());
    }
}
