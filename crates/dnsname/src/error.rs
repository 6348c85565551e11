//! Error types for name encoding and decoding.

use thiserror::Error;

/// Flat classification of every failure the codec can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: A label is longer than 63 bytes
    LabelTooLong,
    /// E002: The buffer ends before a label or its terminator
    OutOfBounds,
    /// E003: A zero length byte appears before the final byte
    UnexpectedTerminator,
    /// E004: A label contains a 0x00 byte
    UnexpectedNullByte,
    /// E005: The decoded name is not valid UTF-8
    InvalidUtf8,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::LabelTooLong => "E001",
            ErrorCode::OutOfBounds => "E002",
            ErrorCode::UnexpectedTerminator => "E003",
            ErrorCode::UnexpectedNullByte => "E004",
            ErrorCode::InvalidUtf8 => "E005",
        }
    }

    /// Returns the canonical short message for this kind of failure.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::LabelTooLong => "label too long",
            ErrorCode::OutOfBounds => "out of bounds",
            ErrorCode::UnexpectedTerminator => "unexpected terminator",
            ErrorCode::UnexpectedNullByte => "unexpected null-zero",
            ErrorCode::InvalidUtf8 => "invalid utf-8",
        }
    }
}

/// Error while decoding a wire-form name.
///
/// Offsets are byte positions in the input buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("[E001] label too long: length byte {len} at offset {offset} exceeds 63")]
    LabelTooLong { offset: usize, len: u8 },

    #[error("[E002] out of bounds: {needed} bytes needed at offset {offset}, {remaining} remaining")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("[E003] unexpected terminator at offset {offset} ({trailing} trailing bytes)")]
    UnexpectedTerminator { offset: usize, trailing: usize },

    #[error("[E004] unexpected null-zero in label at offset {offset}")]
    UnexpectedNullByte { offset: usize },

    #[error("[E005] invalid UTF-8 in decoded name after {valid_up_to} bytes")]
    InvalidUtf8 { valid_up_to: usize },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::LabelTooLong { .. } => ErrorCode::LabelTooLong,
            DecodeError::OutOfBounds { .. } => ErrorCode::OutOfBounds,
            DecodeError::UnexpectedTerminator { .. } => ErrorCode::UnexpectedTerminator,
            DecodeError::UnexpectedNullByte { .. } => ErrorCode::UnexpectedNullByte,
            DecodeError::InvalidUtf8 { .. } => ErrorCode::InvalidUtf8,
        }
    }
}

/// Error while encoding a textual name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("[E001] label too long: label {index} is {len} bytes, maximum 63")]
    LabelTooLong { index: usize, len: usize },
}

impl EncodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EncodeError::LabelTooLong { .. } => ErrorCode::LabelTooLong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            ErrorCode::LabelTooLong,
            ErrorCode::OutOfBounds,
            ErrorCode::UnexpectedTerminator,
            ErrorCode::UnexpectedNullByte,
            ErrorCode::InvalidUtf8,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_display_carries_canonical_message() {
        let err = DecodeError::UnexpectedNullByte { offset: 2 };
        assert!(err.to_string().contains(err.code().message()));

        let err = DecodeError::OutOfBounds {
            offset: 1,
            needed: 10,
            remaining: 9,
        };
        assert!(err.to_string().contains("out of bounds"));
        assert!(err.to_string().starts_with("[E002]"));

        let err = EncodeError::LabelTooLong { index: 0, len: 64 };
        assert_eq!(err.code(), ErrorCode::LabelTooLong);
        assert!(err.to_string().contains("label too long"));
    }
}
