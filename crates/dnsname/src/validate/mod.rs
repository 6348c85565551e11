//! Structural validation without building a name.
//!
//! The codec already validates while it encodes or decodes. These checks
//! are for callers that only need a yes/no answer (and the label count),
//! e.g. when vetting a name embedded in a larger message before storing it.

use crate::codec::labels::Labels;
use crate::codec::name::text_labels;
use crate::error::{DecodeError, EncodeError};
use crate::limits::MAX_LABEL_LEN;

/// Validates a wire-form name and returns its label count.
///
/// Applies the same rules as [`decode`](crate::decode), except that label
/// content need not be UTF-8. Nothing is allocated.
pub fn validate_wire(input: &[u8]) -> Result<usize, DecodeError> {
    let mut count = 0;
    for label in Labels::new(input) {
        label?;
        count += 1;
    }
    Ok(count)
}

/// Validates a textual name and returns the number of labels
/// [`encode`](crate::encode) would write for it.
pub fn validate_text(name: &str) -> Result<usize, EncodeError> {
    let mut count = 0;
    for (index, label) in text_labels(name).enumerate() {
        if label.len() > MAX_LABEL_LEN {
            return Err(EncodeError::LabelTooLong {
                index,
                len: label.len(),
            });
        }
        count += 1;
    }
    Ok(count)
}
