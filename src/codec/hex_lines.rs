//! Hex Line Codec
//!
//! One record per line, each byte as two lowercase hex digits separated by a
//! single space.

use crate::error::{BufferError, Result};

// == Width ==
/// Byte count a decoded line must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Every line must decode to exactly this many bytes
    Fixed(usize),
    /// Lines may have any length
    Any,
}

// == Encode ==
/// Renders each record as one newline-terminated line, in input order.
pub fn encode_lines<B: AsRef<[u8]>>(records: &[B]) -> String {
    let mut text = String::new();
    for record in records {
        let digits = hex::encode(record.as_ref());
        for i in 0..digits.len() / 2 {
            if i > 0 {
                text.push(' ');
            }
            text.push_str(&digits[2 * i..2 * i + 2]);
        }
        text.push('\n');
    }
    text
}

// == Decode ==
/// Parses text produced by [`encode_lines`].
///
/// Trailing blank lines are dropped; a blank line before the last non-blank
/// one is an empty record. Tokens must be exactly two hex digits. Line
/// numbers in errors are 1-based positions in `text`.
pub fn decode_lines(text: &str, width: Width) -> Result<Vec<Vec<u8>>> {
    let lines: Vec<&str> = text.lines().collect();
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |last| last + 1);

    let mut records = Vec::with_capacity(end);
    for (index, line) in lines[..end].iter().enumerate() {
        let line_no = index + 1;
        let record = line
            .split_whitespace()
            .map(|token| decode_token(token, line_no))
            .collect::<Result<Vec<u8>>>()?;

        if let Width::Fixed(expected) = width {
            if record.len() != expected {
                return Err(BufferError::LineLength {
                    line: line_no,
                    expected,
                    actual: record.len(),
                });
            }
        }

        records.push(record);
    }

    Ok(records)
}

fn decode_token(token: &str, line: usize) -> Result<u8> {
    let malformed = || BufferError::MalformedHex {
        line,
        token: token.to_string(),
    };

    if token.len() != 2 {
        return Err(malformed());
    }

    let mut byte = [0u8; 1];
    hex::decode_to_slice(token, &mut byte).map_err(|_| malformed())?;
    Ok(byte[0])
}
