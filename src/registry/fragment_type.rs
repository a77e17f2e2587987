// src/registry/fragment_type.rs
use crate::types::{FragmentTypeTag, TypeDefaults};
use std::fmt;

/// Payload format tag carried in the header's `fragment_type` field.
///
/// The set of tags is open: this crate only defines `INVALID`, and the layer
/// that owns a concrete payload format declares its own constants and
/// registers a name for them in a [`FragmentTypeRegistry`](super::FragmentTypeRegistry).
///
/// ```
/// use fragment_header::FragmentType;
///
/// const TPC_DATA: FragmentType = FragmentType::new(1);
/// assert!(!TPC_DATA.is_invalid());
/// assert!(FragmentType::default().is_invalid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FragmentType(FragmentTypeTag);

impl FragmentType {
    pub const INVALID: FragmentType = FragmentType(TypeDefaults::INVALID_FRAGMENT_TYPE);

    pub const fn new(tag: FragmentTypeTag) -> Self {
        FragmentType(tag)
    }

    pub const fn tag(&self) -> FragmentTypeTag {
        self.0
    }

    pub fn is_invalid(&self) -> bool {
        *self == Self::INVALID
    }
}

impl Default for FragmentType {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<FragmentTypeTag> for FragmentType {
    fn from(tag: FragmentTypeTag) -> Self {
        FragmentType(tag)
    }
}

impl From<FragmentType> for FragmentTypeTag {
    fn from(ty: FragmentType) -> Self {
        ty.0
    }
}

impl fmt::Display for FragmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
