//! Label-by-label walk over a wire-form name.

use std::iter::FusedIterator;

use crate::codec::primitives::Reader;
use crate::error::DecodeError;
use crate::limits::{MAX_LABEL_LEN, TERMINATOR};

/// Iterator over the labels of a wire-form name.
///
/// Yields each label as a borrowed slice, in order. The terminating zero
/// byte ends the iteration. The first structural error is yielded once and
/// the iterator is fused afterwards, so a caller collecting results never
/// sees labels past a malformed one.
///
/// ```rust
/// use dnsname::Labels;
///
/// let wire = b"\x04test\x03eth\x00";
/// let labels: Result<Vec<_>, _> = Labels::new(wire).collect();
/// assert_eq!(labels.unwrap(), vec![&b"test"[..], &b"eth"[..]]);
/// ```
#[derive(Debug, Clone)]
pub struct Labels<'a> {
    reader: Reader<'a>,
    done: bool,
}

impl<'a> Labels<'a> {
    /// Starts a walk at the beginning of `wire`.
    pub fn new(wire: &'a [u8]) -> Self {
        Self {
            reader: Reader::new(wire),
            done: false,
        }
    }

    /// Current read offset into the wire buffer.
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Returns true if more than the terminator byte is left to read.
    ///
    /// After a label has been yielded, this tells whether another label
    /// follows it.
    pub fn has_more(&self) -> bool {
        self.reader.remaining_len() > 1
    }

    fn next_label(&mut self) -> Result<Option<&'a [u8]>, DecodeError> {
        let offset = self.reader.position();
        let len = self.reader.read_byte()?;

        if len as usize > MAX_LABEL_LEN {
            return Err(DecodeError::LabelTooLong { offset, len });
        }

        if len == TERMINATOR {
            if !self.reader.is_empty() {
                return Err(DecodeError::UnexpectedTerminator {
                    offset,
                    trailing: self.reader.remaining_len(),
                });
            }
            return Ok(None);
        }

        // The label must still leave room for a terminator.
        let len = len as usize;
        self.reader.require(len + 1)?;

        let start = self.reader.position();
        let label = self.reader.read_bytes(len)?;
        if let Some(i) = label.iter().position(|&b| b == 0) {
            return Err(DecodeError::UnexpectedNullByte { offset: start + i });
        }

        Ok(Some(label))
    }
}

impl<'a> Iterator for Labels<'a> {
    type Item = Result<&'a [u8], DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_label() {
            Ok(Some(label)) => Some(Ok(label)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Labels<'_> {}
