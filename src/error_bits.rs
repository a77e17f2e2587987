// src/error_bits.rs
use crate::error::{FragmentError, Result};

/// Bit positions of the header's `error_bits` field.
///
/// Only positions 0 and 1 have an assigned meaning. Positions 2-31 are
/// reserved: pass-through code must carry them as-is since a later header
/// version may define them. `Invalid` (32) is the first position that does not
/// fit in the 32-bit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum FragmentErrorBits {
    /// The requested data was not found at all, so the fragment is empty
    DataNotFound = 0,
    /// Only part of the requested data is present in the fragment
    Incomplete = 1,
    Unassigned2 = 2,
    Unassigned3 = 3,
    Unassigned4 = 4,
    Unassigned5 = 5,
    Unassigned6 = 6,
    Unassigned7 = 7,
    Unassigned8 = 8,
    Unassigned9 = 9,
    Unassigned10 = 10,
    Unassigned11 = 11,
    Unassigned12 = 12,
    Unassigned13 = 13,
    Unassigned14 = 14,
    Unassigned15 = 15,
    Unassigned16 = 16,
    Unassigned17 = 17,
    Unassigned18 = 18,
    Unassigned19 = 19,
    Unassigned20 = 20,
    Unassigned21 = 21,
    Unassigned22 = 22,
    Unassigned23 = 23,
    Unassigned24 = 24,
    Unassigned25 = 25,
    Unassigned26 = 26,
    Unassigned27 = 27,
    Unassigned28 = 28,
    Unassigned29 = 29,
    Unassigned30 = 30,
    Unassigned31 = 31,
    /// Position 32 and higher; `error_bits` is only 32 bits wide
    Invalid = 32,
}

impl FragmentErrorBits {
    /// Number of representable positions
    pub const WIDTH: usize = 32;

    const ALL: [FragmentErrorBits; 33] = [
        FragmentErrorBits::DataNotFound,
        FragmentErrorBits::Incomplete,
        FragmentErrorBits::Unassigned2,
        FragmentErrorBits::Unassigned3,
        FragmentErrorBits::Unassigned4,
        FragmentErrorBits::Unassigned5,
        FragmentErrorBits::Unassigned6,
        FragmentErrorBits::Unassigned7,
        FragmentErrorBits::Unassigned8,
        FragmentErrorBits::Unassigned9,
        FragmentErrorBits::Unassigned10,
        FragmentErrorBits::Unassigned11,
        FragmentErrorBits::Unassigned12,
        FragmentErrorBits::Unassigned13,
        FragmentErrorBits::Unassigned14,
        FragmentErrorBits::Unassigned15,
        FragmentErrorBits::Unassigned16,
        FragmentErrorBits::Unassigned17,
        FragmentErrorBits::Unassigned18,
        FragmentErrorBits::Unassigned19,
        FragmentErrorBits::Unassigned20,
        FragmentErrorBits::Unassigned21,
        FragmentErrorBits::Unassigned22,
        FragmentErrorBits::Unassigned23,
        FragmentErrorBits::Unassigned24,
        FragmentErrorBits::Unassigned25,
        FragmentErrorBits::Unassigned26,
        FragmentErrorBits::Unassigned27,
        FragmentErrorBits::Unassigned28,
        FragmentErrorBits::Unassigned29,
        FragmentErrorBits::Unassigned30,
        FragmentErrorBits::Unassigned31,
        FragmentErrorBits::Invalid,
    ];

    pub fn position(&self) -> usize {
        *self as usize
    }

    /// Map a bit position to its enumerator; anything past bit 31 is `Invalid`
    pub fn from_position(position: usize) -> Self {
        Self::ALL
            .get(position)
            .copied()
            .unwrap_or(FragmentErrorBits::Invalid)
    }

    /// Single-bit mask, or None for `Invalid`
    pub fn mask(&self) -> Option<u32> {
        if self.is_valid() {
            Some(1u32 << self.position())
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, FragmentErrorBits::Invalid)
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, FragmentErrorBits::DataNotFound | FragmentErrorBits::Incomplete)
    }

    pub fn description(&self) -> &'static str {
        match self {
            FragmentErrorBits::DataNotFound => {
                "The requested data was not found at all, so the fragment is empty"
            }
            FragmentErrorBits::Incomplete => {
                "Only part of the requested data is present in the fragment"
            }
            FragmentErrorBits::Invalid => "Not a valid error bit position",
            _ => "Unassigned error bit",
        }
    }

    /// Iterate the 32 representable positions in order
    pub fn valid_bits() -> impl Iterator<Item = FragmentErrorBits> {
        (0..Self::WIDTH).map(Self::from_position)
    }
}

/// The header's 32-bit error bitmask with checked bit access.
///
/// Unassigned bits are never masked out; whatever arrived is what leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ErrorBits(u32);

impl ErrorBits {
    /// Mask of the bits with an assigned meaning
    pub const ASSIGNED_MASK: u32 = 0b11;

    pub fn new(bits: u32) -> Self {
        ErrorBits(bits)
    }

    pub fn empty() -> Self {
        ErrorBits(0)
    }

    pub fn raw_value(&self) -> u32 {
        self.0
    }

    pub fn has_errors(&self) -> bool {
        self.0 != 0
    }

    pub fn is_set(&self, bit: FragmentErrorBits) -> bool {
        bit.mask().map_or(false, |mask| self.0 & mask != 0)
    }

    pub fn is_position_set(&self, position: usize) -> bool {
        self.is_set(FragmentErrorBits::from_position(position))
    }

    /// Set or clear one bit. `Invalid` is rejected rather than wrapped.
    pub fn set(&mut self, bit: FragmentErrorBits, value: bool) -> Result<()> {
        let mask = bit
            .mask()
            .ok_or(FragmentError::InvalidErrorBit(bit.position()))?;
        if value {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
        Ok(())
    }

    pub fn set_position(&mut self, position: usize, value: bool) -> Result<()> {
        if position >= FragmentErrorBits::WIDTH {
            return Err(FragmentError::InvalidErrorBit(position));
        }
        self.set(FragmentErrorBits::from_position(position), value)
    }

    pub fn data_not_found(&self) -> bool {
        self.is_set(FragmentErrorBits::DataNotFound)
    }

    pub fn incomplete(&self) -> bool {
        self.is_set(FragmentErrorBits::Incomplete)
    }

    /// Bits set at positions that carry no meaning in this header version
    pub fn unassigned(&self) -> u32 {
        self.0 & !Self::ASSIGNED_MASK
    }

    /// All set bits, lowest position first
    pub fn iter(&self) -> impl Iterator<Item = FragmentErrorBits> + '_ {
        FragmentErrorBits::valid_bits().filter(move |bit| self.is_set(*bit))
    }
}

impl From<u32> for ErrorBits {
    fn from(bits: u32) -> Self {
        ErrorBits(bits)
    }
}

impl From<ErrorBits> for u32 {
    fn from(bits: ErrorBits) -> Self {
        bits.0
    }
}
