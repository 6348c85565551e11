//! dnsname: codec between dotted names and their DNS-style wire form.
//!
//! A name such as `test.eth` is serialized as a sequence of labels, each
//! prefixed by its byte length, followed by a single zero byte:
//!
//! ```text
//! 04 74 65 73 74 03 65 74 68 00
//!  4  t  e  s  t  3  e  t  h  terminator
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use dnsname::{decode, encode};
//!
//! let wire = encode("test.eth").unwrap();
//! assert_eq!(wire, b"\x04test\x03eth\x00");
//!
//! let name = decode(&wire).unwrap();
//! assert_eq!(name, "test.eth");
//! ```
//!
//! # Modules
//!
//! - [`codec`]: Encoding/decoding and the label walker
//! - [`validate`]: Structural checks that do not build a result
//! - [`error`]: Error types
//! - [`limits`]: Wire-format constants
//!
//! # Rules
//!
//! - Labels are at most 63 bytes, in both directions
//! - Encoding ignores leading and trailing dots; interior empty labels are
//!   written as zero-length labels
//! - Decoding requires exactly one terminator, as the last byte, and rejects
//!   labels containing a zero byte
//! - Every failure is reported as a typed error; no partial result is returned
//!
//! No compression pointers, case folding or IDN conversion are performed.
//! Label content is opaque apart from the zero-byte rule.

pub mod codec;
pub mod error;
pub mod limits;
pub mod validate;

pub use codec::{decode, decode_bytes, encode, encoded_len, Labels, Reader, Writer};
pub use error::{DecodeError, EncodeError, ErrorCode};
pub use validate::{validate_text, validate_wire};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
