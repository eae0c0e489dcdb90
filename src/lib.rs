//! json-toy - a small recursive descent JSON parser and compact serializer.
//!
//! Text is parsed into an owned [`Value`] tree and written back as minimal
//! JSON with no insignificant whitespace. Both directions share a LIFO
//! [`ScratchBuffer`] that stages decoded strings and serialized output.
//!
//! # Architecture
//!
//! - [`value`] - Value tree: strings, arrays, objects and equality rules
//! - [`parser`] - Recursive descent parser with configurable limits
//! - [`serializer`] - Compact writer and number formatting
//! - [`scratch`] - Byte stack shared by parsing and serialization
//! - [`limits`] - Nesting and size limits for untrusted input
//! - [`error`] - Status codes for every failure
//!
//! # Example
//!
//! ```
//! use json_toy::{Parser, Value};
//!
//! let mut parser = Parser::new(r#"{"b": [1, 2.5], "a": "x"}"#);
//! parser.parse(None).unwrap();
//!
//! let root = parser.take_root();
//! assert_eq!(root.get("a").and_then(Value::as_str), Some("x"));
//!
//! let out = parser.stringify(&root).unwrap();
//! assert_eq!(out, br#"{"b":[1,2.5],"a":"x"}"#);
//! ```
//!
//! # Equality
//!
//! `==` on values ignores object member order and also array element order.
//! Use [`Value::eq_with`] with [`ArrayOrder::Ordered`] when element order
//! matters.

// Library code reports failures through ErrorCode; internal invariants use
// assert!. Tests are checked separately.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod limits;
pub mod parser;
pub mod scratch;
pub mod serializer;
pub mod value;

// Re-export commonly used types
pub use error::{ErrorCode, JsonResult};
pub use limits::Limits;
pub use parser::{parse, parse_with_limits, Parser};
pub use scratch::ScratchBuffer;
pub use serializer::{format_number, to_string, to_vec};
pub use value::{Array, ArrayOrder, JsonString, Member, Object, Value, ValueType};
