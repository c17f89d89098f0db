//! Fixture Files
//!
//! Reads and writes hex line fixtures on disk.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::codec::{decode_lines, encode_lines, Width};
use crate::error::Result;

// == Save ==
/// Writes `records` to `path`, replacing any existing content.
pub fn save_fixture<B: AsRef<[u8]>>(path: impl AsRef<Path>, records: &[B]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, encode_lines(records))?;
    info!("Saved {} record(s) to {}", records.len(), path.display());
    Ok(())
}

// == Append ==
/// Appends `records` to `path`, creating the file if needed.
pub fn append_fixture<B: AsRef<[u8]>>(path: impl AsRef<Path>, records: &[B]) -> Result<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(encode_lines(records).as_bytes())?;
    info!("Appended {} record(s) to {}", records.len(), path.display());
    Ok(())
}

// == Load ==
/// Reads every record from `path`.
pub fn load_fixture(path: impl AsRef<Path>, width: Width) -> Result<Vec<Vec<u8>>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let records = decode_lines(&text, width)?;
    info!("Loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}
