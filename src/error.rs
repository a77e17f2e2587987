// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FragmentError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid header marker: expected {expected:#010x}, found {found:#010x}")]
    InvalidMarker { expected: u32, found: u32 },

    #[error("Unsupported header version {found} (supported: {supported:?})")]
    UnsupportedVersion { found: u32, supported: &'static [u32] },

    #[error("Buffer too short: need {needed} bytes, have {available}")]
    BufferTooShort { needed: usize, available: usize },

    #[error("Invalid error bit position: {0} (error_bits is 32 bits wide)")]
    InvalidErrorBit(usize),

    #[error("Invalid fragment type name: {0:?}")]
    InvalidTypeName(String),

    #[error("FragmentType::INVALID cannot be registered")]
    ReservedFragmentType,

    #[error("Fragment type registry already installed")]
    RegistryAlreadyInstalled,
}

impl FragmentError {
    /// True for failures that mean the bytes are not a header at all
    pub fn is_format_violation(&self) -> bool {
        matches!(self, FragmentError::InvalidMarker { .. })
    }

    pub fn is_version_mismatch(&self) -> bool {
        matches!(self, FragmentError::UnsupportedVersion { .. })
    }
}

pub type Result<T> = std::result::Result<T, FragmentError>;
