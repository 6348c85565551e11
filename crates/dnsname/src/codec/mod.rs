//! Binary encoding/decoding for names.
//!
//! This module implements the length-prefixed wire form.

pub mod labels;
pub mod name;
pub mod primitives;

pub use labels::Labels;
pub use name::{decode, decode_bytes, encode, encoded_len};
pub use primitives::{Reader, Writer};
