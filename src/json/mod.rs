//! Legacy array-to-JSON serialization.
//!
//! The core of this module is [`serialize`], a pure function from a
//! [`Value`] tree to JSON-like text that reproduces the legacy encoder,
//! including its list-or-map inference and its narrow escaping.
//!
//! # Architecture
//!
//! - [`types`] - `Value`, `Number`, `Key`, `Map`
//! - [`numeric`] - numeric-string detection
//! - [`shape`] - list-vs-map inference (the contiguity rule)
//! - [`escape`] - legacy slash escaping and strict JSON escaping
//! - [`encode`] - the serializer and its dialects
//! - [`limits`], [`lexer`], [`parser`] - ingest of untyped JSON text
//!
//! # Example
//!
//! ```
//! use asset_helper::json::{parse, serialize, serialize_strict};
//!
//! let value = parse(br#"{"0": "x", "1": "y"}"#).unwrap();
//! assert_eq!(serialize(&value), r#"["x","y"]"#);
//!
//! let value = parse(br#"{"note": null, "count": "12"}"#).unwrap();
//! assert_eq!(serialize(&value), r#"{"note":"","count":12}"#);
//! assert_eq!(serialize_strict(&value), r#"{"note":null,"count":"12"}"#);
//! ```

pub mod encode;
pub mod escape;
pub mod lexer;
pub mod limits;
pub mod numeric;
pub mod parser;
pub mod shape;
pub mod types;

pub use encode::{serialize, serialize_strict, Dialect, Encoder};
pub use escape::{add_slashes, escape_json, strip_slashes};
pub use limits::Limits;
pub use numeric::is_numeric;
pub use parser::{parse, parse_with_limits};
pub use shape::Shape;
pub use types::{Key, Map, Number, Value};
