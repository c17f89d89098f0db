//! Codec Module
//!
//! Hex line encoding of byte records and the fixture files built on it.

mod fixture;
mod hex_lines;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use fixture::{append_fixture, load_fixture, save_fixture};
pub use hex_lines::{decode_lines, encode_lines, Width};

/// Default fixture file name
pub const DEFAULT_FIXTURE_PATH: &str = "testcachevals.env";
