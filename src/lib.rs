// src/lib.rs
//! # fragment-header
//!
//! The fixed-layout binary header that precedes every DAQ Fragment payload,
//! plus the enumerations that give its fields meaning.
//!
//! ## Features
//!
//! - **Stable wire form**: 68 packed bytes, explicit byte order, no padding
//! - **Checked reads**: marker and version mismatches are distinct errors
//! - **Error bits**: checked access that preserves unassigned bits
//! - **Type registry**: process-wide tag ↔ name table, populated once
//!
//! ## Quick Start
//!
//! ### Producing a header
//!
//! ```rust
//! use fragment_header::*;
//!
//! fn main() -> Result<()> {
//!     let payload = vec![0u8; 256];
//!
//!     let mut header = FragmentHeader::new();
//!     header.trigger_number = 1;
//!     header.trigger_timestamp = 2;
//!     header.run_number = 3;
//!     header.link_id = GeoId::new(1, 4);
//!     header.size = (FragmentHeader::SIZE + payload.len()) as u64;
//!     header.set_error_bit(FragmentErrorBits::Incomplete, true)?;
//!
//!     let mut fragment = Vec::new();
//!     header.write_to(&mut fragment)?;
//!     fragment.extend_from_slice(&payload);
//!     assert_eq!(fragment.len() as u64, header.size);
//!     Ok(())
//! }
//! ```
//!
//! ### Consuming a header
//!
//! ```rust
//! use fragment_header::*;
//!
//! fn main() -> Result<()> {
//!     let bytes = FragmentHeader::new().to_bytes();
//!
//!     match FragmentHeader::from_bytes(&bytes) {
//!         Ok(header) => println!("{}", header),
//!         Err(FragmentError::InvalidMarker { found, .. }) => println!("not a header: {:x}", found),
//!         Err(FragmentError::UnsupportedVersion { found, .. }) => println!("version {}", found),
//!         Err(e) => return Err(e),
//!     }
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod error_bits;
pub mod header;
pub mod registry;
pub mod types;

pub use error::{FragmentError, Result};

pub use types::{
    Endianness,
    FragmentSize,
    FragmentTypeTag,
    GeoId,
    RunNumber,
    Timestamp,
    TimestampDiff,
    TriggerNumber,
    TypeDefaults,
};

pub use error_bits::{ErrorBits, FragmentErrorBits};

pub use header::{find_header, peek_marker, FragmentHeader, HeaderScanner};

pub use registry::{
    fragment_type_to_string,
    string_to_fragment_type,
    FragmentType,
    FragmentTypeRegistry,
    INVALID_TYPE_NAME,
};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use fragment_header::prelude::*;
    //! ```

    pub use crate::error::{FragmentError, Result};
    pub use crate::error_bits::{ErrorBits, FragmentErrorBits};
    pub use crate::header::FragmentHeader;
    pub use crate::registry::{FragmentType, FragmentTypeRegistry};
    pub use crate::types::{Endianness, GeoId};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");


// Benchmark helpers
#[cfg(feature = "bench")]
pub mod bench_helpers {
    use super::*;

    /// A header with every field set to a non-sentinel value
    pub fn populated_header(seed: u64) -> FragmentHeader {
        let mut header = FragmentHeader::new();
        header.size = FragmentHeader::SIZE as u64 + seed;
        header.trigger_number = seed;
        header.trigger_timestamp = seed.wrapping_mul(62_500_000);
        header.window_offset = -(seed as i64 % 1000);
        header.window_width = 2000;
        header.run_number = (seed % 10_000) as u32;
        header.link_id = GeoId::new((seed % 6) as u32, (seed % 10) as u32);
        header.fragment_type = (seed % 4) as u32;
        header
    }

    /// `count` encoded headers back to back
    pub fn header_stream(count: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(count * FragmentHeader::SIZE);
        for i in 0..count {
            out.extend_from_slice(&populated_header(i as u64).to_bytes());
        }
        out
    }
}
