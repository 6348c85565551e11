//! Name encoding/decoding.
//!
//! The wire form is a sequence of length-prefixed labels followed by a
//! single zero byte, e.g. `test.eth` is `04 74657374 03 657468 00`.

use crate::codec::labels::Labels;
use crate::codec::primitives::Writer;
use crate::error::{DecodeError, EncodeError};
use crate::limits::{MAX_LABEL_LEN, SEPARATOR, TERMINATOR};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a wire-form name into its dotted textual form.
///
/// `[0x00]` decodes to the empty string. Any structural error rejects the
/// whole buffer; no partially decoded name is ever returned.
///
/// ```rust
/// let name = dnsname::decode(b"\x04test\x03eth\x00").unwrap();
/// assert_eq!(name, "test.eth");
/// ```
pub fn decode(input: &[u8]) -> Result<String, DecodeError> {
    let bytes = decode_bytes(input)?;
    String::from_utf8(bytes).map_err(|e| DecodeError::InvalidUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

/// Decodes a wire-form name into dotted bytes, treating labels as opaque.
///
/// Applies the same structural checks as [`decode`] but never fails on
/// non-UTF-8 label content.
pub fn decode_bytes(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut labels = Labels::new(input);
    // Exact for any valid input: one length byte per label plus the
    // terminator, minus one separator per label boundary.
    let mut name = Vec::with_capacity(input.len().saturating_sub(2));

    while let Some(label) = labels.next() {
        name.extend_from_slice(label?);
        if labels.has_more() {
            name.push(SEPARATOR);
        }
    }

    Ok(name)
}

// =============================================================================
// ENCODING
// =============================================================================

/// Strips every leading and trailing separator.
pub(crate) fn trim_separators(name: &str) -> &str {
    name.trim_matches(SEPARATOR as char)
}

/// Splits a textual name into the labels [`encode`] writes.
///
/// Outer separators are stripped first; interior empty labels are kept.
pub(crate) fn text_labels(name: &str) -> impl Iterator<Item = &str> {
    trim_separators(name).split(SEPARATOR as char)
}

/// Returns the exact wire length [`encode`] produces for `name`.
///
/// This does not check label lengths.
pub fn encoded_len(name: &str) -> usize {
    trim_separators(name).len() + 2
}

/// Encodes a dotted textual name into its wire form.
///
/// Leading and trailing dots are ignored, so `.test.eth`, `test.eth.` and
/// `test.eth` all encode identically. The empty name encodes as one empty
/// label plus the terminator (`00 00`).
///
/// ```rust
/// let wire = dnsname::encode("test.eth").unwrap();
/// assert_eq!(wire, b"\x04test\x03eth\x00");
/// ```
pub fn encode(name: &str) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::with_capacity(encoded_len(name));

    for (index, label) in text_labels(name).enumerate() {
        let len = label.len();
        if len > MAX_LABEL_LEN {
            return Err(EncodeError::LabelTooLong { index, len });
        }
        writer.write_byte(len as u8);
        writer.write_bytes(label.as_bytes());
    }
    writer.write_byte(TERMINATOR);

    Ok(writer.into_bytes())
}
