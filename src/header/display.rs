// src/header/display.rs
use crate::header::FragmentHeader;
use crate::registry::FragmentTypeRegistry;
use std::fmt;

/// Single-line `key: value` rendering. Field order and labels are relied on
/// by log scrapers; keep them stable.
impl fmt::Display for FragmentHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "check_word: {:x}, version: {}, size: {}, trigger_number: {}, run_number: {}, \
             trigger_timestamp: {}, window_offset: {}, window_width: {}, link_id: {}, \
             error_bits: {}, fragment_type : {}",
            self.marker,
            self.version,
            self.size,
            self.trigger_number,
            self.run_number,
            self.trigger_timestamp,
            self.window_offset,
            self.window_width,
            self.link_id,
            self.error_bits,
            self.fragment_type,
        )
    }
}

impl FragmentHeader {
    /// The `Display` line with the type name from `registry` appended
    pub fn describe(&self, registry: &FragmentTypeRegistry) -> String {
        format!("{} ({})", self, registry.type_to_name(self.fragment_type()))
    }
}
