//! Wire-format limits and marker bytes.

/// Maximum byte length of a single label.
pub const MAX_LABEL_LEN: usize = 63;

/// Zero length byte that ends a wire-form name.
pub const TERMINATOR: u8 = 0x00;

/// Separator between labels in the textual form.
pub const SEPARATOR: u8 = b'.';
