//! Layout Module
//!
//! Fixed-width record builder that refuses to truncate.

use crate::error::{BufferError, Result};

// == Fixed Width Builder ==
/// Appends fields into a `N`-byte array.
///
/// Any write past `N` fails with [`BufferError::LayoutOverflow`], and
/// [`finish`](Self::finish) fails unless exactly `N` bytes were written.
#[derive(Debug)]
pub struct FixedWidthBuilder<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> FixedWidthBuilder<N> {
    // == Constructor ==
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
        }
    }

    // == Put ==
    /// Appends `bytes` at the current position.
    pub fn put(&mut self, bytes: &[u8]) -> Result<&mut Self> {
        let end = self.len + bytes.len();
        if end > N {
            return Err(BufferError::LayoutOverflow {
                expected: N,
                actual: end,
            });
        }
        self.buf[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(self)
    }

    // == Zeros ==
    /// Appends `count` zero bytes.
    pub fn zeros(&mut self, count: usize) -> Result<&mut Self> {
        let end = self.len + count;
        if end > N {
            return Err(BufferError::LayoutOverflow {
                expected: N,
                actual: end,
            });
        }
        // buffer starts zeroed and is only written forward
        self.len = end;
        Ok(self)
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Finish ==
    /// Returns the record if it is exactly `N` bytes long.
    pub fn finish(self) -> Result<[u8; N]> {
        if self.len != N {
            return Err(BufferError::LayoutOverflow {
                expected: N,
                actual: self.len,
            });
        }
        Ok(self.buf)
    }
}

impl<const N: usize> Default for FixedWidthBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_exact_fit() {
        let mut builder = FixedWidthBuilder::<4>::new();
        builder.put(&[1, 2]).unwrap().zeros(1).unwrap().put(&[9]).unwrap();
        assert_eq!(builder.finish().unwrap(), [1, 2, 0, 9]);
    }

    #[test]
    fn test_builder_put_overflow() {
        let mut builder = FixedWidthBuilder::<4>::new();
        builder.put(&[1, 2, 3]).unwrap();

        let result = builder.put(&[4, 5]);
        assert!(matches!(
            result,
            Err(BufferError::LayoutOverflow {
                expected: 4,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_builder_zeros_overflow() {
        let mut builder = FixedWidthBuilder::<4>::new();
        let result = builder.zeros(5);
        assert!(matches!(result, Err(BufferError::LayoutOverflow { .. })));
    }

    #[test]
    fn test_builder_short_record_fails() {
        let mut builder = FixedWidthBuilder::<4>::new();
        builder.put(&[1]).unwrap();
        assert_eq!(builder.len(), 1);

        let result = builder.finish();
        assert!(matches!(
            result,
            Err(BufferError::LayoutOverflow {
                expected: 4,
                actual: 1
            })
        ));
    }
}
