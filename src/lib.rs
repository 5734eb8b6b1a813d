//! Asset Helper - presentation helpers for legacy web views.
//!
//! The centre of the crate is the legacy structure serializer: it turns a
//! nested, ordered [`Value`] tree into the JSON text the old `array2json`
//! encoder produced, including its list-vs-map contiguity rule.
//!
//! # Architecture
//!
//! - [`json`] - value model, legacy and strict encoders, ingest parser
//! - [`assets`] - tag builders, asset paths, dates and file utilities
//! - [`conformance`] - replay of recorded legacy vectors
//! - [`error`] - numbered error codes
//! - [`logging`] - tracing subscriber for the binary
//!
//! # Example
//!
//! ```
//! use asset_helper::{serialize, Map, Value};
//!
//! let mut sparse = Map::new();
//! sparse.insert(0, "x");
//! sparse.insert(2, "z");
//! assert_eq!(serialize(&Value::Map(sparse)), r#"{"0":"x","2":"z"}"#);
//! ```

// Library code reports failures through ErrorCode; never abort the caller.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod assets;
pub mod conformance;
pub mod error;
pub mod json;
pub mod logging;

// Re-export commonly used types
pub use assets::AssetConfig;
pub use error::{ErrorCode, HelperResult};
pub use json::{serialize, serialize_strict, Dialect, Encoder, Key, Map, Number, Value};
