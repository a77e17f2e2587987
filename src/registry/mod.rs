// src/registry/mod.rs
//! Fragment type tags and the process-wide name table.
//!
//! The table is populated once by whichever layer defines concrete fragment
//! types, then read by everyone else:
//!
//! ```
//! use fragment_header::registry::{self, FragmentTypeRegistry};
//! use fragment_header::FragmentType;
//!
//! const TPC: FragmentType = FragmentType::new(1);
//!
//! let table = FragmentTypeRegistry::new().with(TPC, "TPC").unwrap();
//! registry::install(table).unwrap();
//!
//! assert_eq!(registry::fragment_type_to_string(TPC), "TPC");
//! assert_eq!(registry::string_to_fragment_type("tpc"), TPC);
//! ```
//!
//! Install before starting any thread that reads the table. The first call to
//! [`global`] freezes the table: an empty one is installed if nothing was.

mod fragment_type;
mod table;

pub use fragment_type::FragmentType;
pub use table::{FragmentTypeRegistry, INVALID_TYPE_NAME};

use crate::error::{FragmentError, Result};
use log::debug;
use std::sync::OnceLock;

static GLOBAL_REGISTRY: OnceLock<FragmentTypeRegistry> = OnceLock::new();

/// Install the process-wide table. Fails if one is already in place.
pub fn install(registry: FragmentTypeRegistry) -> Result<()> {
    let count = registry.len();
    GLOBAL_REGISTRY
        .set(registry)
        .map_err(|_| FragmentError::RegistryAlreadyInstalled)?;
    debug!("installed fragment type registry with {} names", count);
    Ok(())
}

/// The process-wide table
pub fn global() -> &'static FragmentTypeRegistry {
    GLOBAL_REGISTRY.get_or_init(FragmentTypeRegistry::new)
}

pub fn is_installed() -> bool {
    GLOBAL_REGISTRY.get().is_some()
}

/// Convert a FragmentType to its name using the global table
pub fn fragment_type_to_string(ty: FragmentType) -> String {
    global().type_to_name(ty)
}

/// Convert a name (any case) to a FragmentType using the global table
pub fn string_to_fragment_type(name: &str) -> FragmentType {
    global().name_to_type(name)
}
