// src/header/record.rs
use crate::error::{FragmentError, Result};
use crate::error_bits::{ErrorBits, FragmentErrorBits};
use crate::registry::FragmentType;
use crate::types::{
    FragmentSize, FragmentTypeTag, GeoId, RunNumber, Timestamp, TimestampDiff, TriggerNumber,
    TypeDefaults,
};

/// The header for a DAQ Fragment.
///
/// A freshly constructed header always identifies itself as a current-version
/// header; every other field starts at its "not set" sentinel. The header does
/// not check its own fields; readers validate marker and version when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FragmentHeader {
    /// Magic bytes used to identify a FragmentHeader in a raw data stream
    pub marker: u32,
    pub version: u32,
    /// Size of the Fragment, including header and payload
    pub size: FragmentSize,
    /// Trigger Number this Fragment is associated with
    pub trigger_number: TriggerNumber,
    /// Timestamp of the TriggerDecision
    pub trigger_timestamp: Timestamp,
    /// Offset of the data window relative to `trigger_timestamp`
    pub window_offset: TimestampDiff,
    pub window_width: TimestampDiff,
    pub run_number: RunNumber,
    /// Component that generated the data in this Fragment
    pub link_id: GeoId,
    /// Error bits set by the upstream DAQ, see [`FragmentErrorBits`]
    pub error_bits: u32,
    /// Format of the payload that follows the header
    pub fragment_type: FragmentTypeTag,
}

impl FragmentHeader {
    pub const MAGIC: u32 = 0x1111_2222;
    pub const CURRENT_VERSION: u32 = 1;
    /// Versions this reader knows how to interpret
    pub const SUPPORTED_VERSIONS: &'static [u32] = &[1];
    pub const DEFAULT_ERROR_BITS: u32 = 0;
    /// Encoded width in bytes: packed fields, no padding
    pub const SIZE: usize = 68;

    pub fn new() -> Self {
        FragmentHeader {
            marker: Self::MAGIC,
            version: Self::CURRENT_VERSION,
            size: TypeDefaults::INVALID_FRAGMENT_SIZE,
            trigger_number: TypeDefaults::INVALID_TRIGGER_NUMBER,
            trigger_timestamp: TypeDefaults::INVALID_TIMESTAMP,
            window_offset: TypeDefaults::INVALID_TIMESTAMP_DIFF,
            window_width: TypeDefaults::INVALID_TIMESTAMP_DIFF,
            run_number: TypeDefaults::INVALID_RUN_NUMBER,
            link_id: GeoId::default(),
            error_bits: Self::DEFAULT_ERROR_BITS,
            fragment_type: TypeDefaults::INVALID_FRAGMENT_TYPE,
        }
    }

    pub fn is_supported_version(version: u32) -> bool {
        Self::SUPPORTED_VERSIONS.contains(&version)
    }

    pub(crate) fn check_marker(marker: u32) -> Result<()> {
        if marker != Self::MAGIC {
            return Err(FragmentError::InvalidMarker {
                expected: Self::MAGIC,
                found: marker,
            });
        }
        Ok(())
    }

    pub(crate) fn check_version(version: u32) -> Result<()> {
        if !Self::is_supported_version(version) {
            return Err(FragmentError::UnsupportedVersion {
                found: version,
                supported: Self::SUPPORTED_VERSIONS,
            });
        }
        Ok(())
    }

    /// Apply the reader-side marker and version checks to this instance
    pub fn validate(&self) -> Result<()> {
        Self::check_marker(self.marker)?;
        Self::check_version(self.version)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Bytes following the header, if `size` has been set to something sane
    pub fn payload_size(&self) -> Option<u64> {
        if self.size == TypeDefaults::INVALID_FRAGMENT_SIZE {
            return None;
        }
        self.size.checked_sub(Self::SIZE as u64)
    }

    pub fn error_bits(&self) -> ErrorBits {
        ErrorBits::new(self.error_bits)
    }

    pub fn set_error_bits(&mut self, bits: ErrorBits) {
        self.error_bits = bits.raw_value();
    }

    pub fn error_bit(&self, bit: FragmentErrorBits) -> bool {
        self.error_bits().is_set(bit)
    }

    pub fn set_error_bit(&mut self, bit: FragmentErrorBits, value: bool) -> Result<()> {
        let mut bits = self.error_bits();
        bits.set(bit, value)?;
        self.set_error_bits(bits);
        Ok(())
    }

    pub fn fragment_type(&self) -> FragmentType {
        FragmentType::new(self.fragment_type)
    }

    pub fn set_fragment_type(&mut self, ty: FragmentType) {
        self.fragment_type = ty.tag();
    }
}

impl Default for FragmentHeader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_identifies_as_current_header() {
        let header = FragmentHeader::default();
        assert_eq!(header.marker, 0x1111_2222);
        assert_eq!(header.version, 1);
        assert_eq!(header, FragmentHeader::new());
        assert!(header.is_valid());
    }

    #[test]
    fn test_default_sentinels() {
        let header = FragmentHeader::new();
        assert_eq!(header.size, u64::MAX);
        assert_eq!(header.trigger_number, u64::MAX);
        assert_eq!(header.trigger_timestamp, u64::MAX);
        assert_eq!(header.window_offset, i64::MAX);
        assert_eq!(header.window_width, i64::MAX);
        assert_eq!(header.run_number, u32::MAX);
        assert_eq!(header.link_id, GeoId::default());
        assert_eq!(header.error_bits, 0);
        assert!(header.fragment_type().is_invalid());
        assert_eq!(header.payload_size(), None);
    }

    #[test]
    fn test_validate_distinguishes_marker_and_version() {
        let mut header = FragmentHeader::new();
        header.marker = 0xDEAD_BEEF;
        let err = header.validate().unwrap_err();
        assert!(err.is_format_violation());

        let mut header = FragmentHeader::new();
        header.version = 2;
        let err = header.validate().unwrap_err();
        assert!(err.is_version_mismatch());
        assert!(!err.is_format_violation());
    }

    #[test]
    fn test_payload_size() {
        let mut header = FragmentHeader::new();
        header.size = FragmentHeader::SIZE as u64 + 100;
        assert_eq!(header.payload_size(), Some(100));

        header.size = 10;
        assert_eq!(header.payload_size(), None);
    }

    #[test]
    fn test_error_bit_accessors() {
        let mut header = FragmentHeader::new();
        header.set_error_bit(FragmentErrorBits::Incomplete, true).unwrap();
        header.set_error_bit(FragmentErrorBits::Unassigned5, true).unwrap();
        assert!(header.error_bit(FragmentErrorBits::Incomplete));
        assert!(header.error_bit(FragmentErrorBits::Unassigned5));
        assert_eq!(header.error_bits, 0b10_0010);

        assert!(header.set_error_bit(FragmentErrorBits::Invalid, true).is_err());
        assert_eq!(header.error_bits, 0b10_0010);
    }

    #[test]
    fn test_fragment_type_accessors() {
        let mut header = FragmentHeader::new();
        header.set_fragment_type(FragmentType::new(7));
        assert_eq!(header.fragment_type, 7);
        assert_eq!(header.fragment_type(), FragmentType::new(7));
    }
}
