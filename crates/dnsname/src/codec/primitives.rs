//! Byte-level cursor and output buffer for the wire form.
//!
//! Every read is bounds-checked and reported as [`DecodeError::OutOfBounds`]
//! instead of panicking.

use crate::error::DecodeError;

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding binary data.
///
/// Wraps a byte slice and tracks the read offset.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the remaining bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Fails unless at least `n` bytes remain, without consuming anything.
    #[inline]
    pub fn require(&self, n: usize) -> Result<(), DecodeError> {
        let remaining = self.remaining_len();
        if n > remaining {
            return Err(DecodeError::OutOfBounds {
                offset: self.pos,
                needed: n,
                remaining,
            });
        }
        Ok(())
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8, DecodeError> {
        self.require(1)?;
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        self.require(n)?;
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_byte_advances() {
        let data = [7u8, 8];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.read_byte().unwrap(), 7);
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.remaining(), &[8]);
        assert_eq!(reader.read_byte().unwrap(), 8);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_read_byte_on_empty_input() {
        let mut reader = Reader::new(&[]);
        assert_eq!(
            reader.read_byte(),
            Err(DecodeError::OutOfBounds {
                offset: 0,
                needed: 1,
                remaining: 0
            })
        );
    }

    #[test]
    fn test_unexpected_eof() {
        let data = [0u8; 5];
        let mut reader = Reader::new(&data);
        let result = reader.read_bytes(10);
        assert!(matches!(
            result,
            Err(DecodeError::OutOfBounds {
                needed: 10,
                remaining: 5,
                ..
            })
        ));
        // A failed read consumes nothing.
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_require_does_not_consume() {
        let data = [1u8, 2, 3];
        let reader = Reader::new(&data);
        assert!(reader.require(3).is_ok());
        assert!(reader.require(4).is_err());
        assert_eq!(reader.remaining_len(), 3);
    }

    #[test]
    fn test_writer_with_capacity() {
        let mut writer = Writer::with_capacity(4);
        assert!(writer.is_empty());
        writer.write_byte(3);
        writer.write_bytes(b"abc");
        assert_eq!(writer.len(), 4);
        assert_eq!(writer.as_bytes(), &[3, b'a', b'b', b'c']);
        assert_eq!(writer.into_bytes(), vec![3, b'a', b'b', b'c']);
    }
}
