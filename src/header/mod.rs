// src/header/mod.rs
mod codec;
mod display;
mod record;
mod scan;

pub use codec::peek_marker;
pub use record::FragmentHeader;
pub use scan::{find_header, HeaderScanner};
