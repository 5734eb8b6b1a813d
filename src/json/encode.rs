//! Structure serializer.
//!
//! Converts a [`Value`] tree into JSON-like text by recursive descent. Every
//! aggregate is classified on its own with the contiguity rule in
//! [`super::shape`], so maps and lists may nest freely.
//!
//! Two dialects exist:
//!
//! - [`Dialect::Legacy`] reproduces the original encoder byte for byte,
//!   including its narrow escaping, unquoted numeric strings, raw map keys,
//!   `""` for null and `{}` for every empty aggregate.
//! - [`Dialect::Strict`] writes standard JSON.
//!
//! # Example
//!
//! ```
//! use asset_helper::json::{serialize, Map, Value};
//!
//! let mut inner = Map::new();
//! inner.insert("k", "v");
//! let mut outer = Map::new();
//! outer.insert("items", Value::List(vec![Value::from(1), Value::Map(inner)]));
//!
//! assert_eq!(serialize(&Value::Map(outer)), r#"{"items":[1,{"k":"v"}]}"#);
//! ```

use super::escape::{push_json_string, push_slashed};
use super::numeric::is_numeric;
use super::shape::Shape;
use super::types::{Key, Map, Number, Value};
use crate::error::{ErrorCode, HelperResult};

/// Output dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Bug-compatible legacy output
    #[default]
    Legacy,
    /// Standard JSON output
    Strict,
}

/// Configurable serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Encoder {
    dialect: Dialect,
    max_depth: Option<u64>,
}

impl Encoder {
    /// Encoder for the legacy dialect with no depth limit.
    pub const fn legacy() -> Self {
        Self {
            dialect: Dialect::Legacy,
            max_depth: None,
        }
    }

    /// Encoder for the strict dialect with no depth limit.
    pub const fn strict() -> Self {
        Self {
            dialect: Dialect::Strict,
            max_depth: None,
        }
    }

    /// Fail with `E111_NestingTooDeep` when aggregates nest deeper than
    /// `max_depth`.
    pub const fn with_max_depth(mut self, max_depth: u64) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// The dialect this encoder writes.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Encode a value.
    ///
    /// Only a configured depth limit can make this fail.
    pub fn encode(&self, value: &Value) -> HelperResult<String> {
        let mut output = String::new();
        self.write_value(value, 0, &mut output)?;
        Ok(output)
    }

    fn enter(&self, depth: u64) -> HelperResult<u64> {
        let depth = depth + 1;
        match self.max_depth {
            Some(max) if depth > max => Err(ErrorCode::E111_NestingTooDeep(depth, max)),
            _ => Ok(depth),
        }
    }

    fn write_value(&self, value: &Value, depth: u64, output: &mut String) -> HelperResult<()> {
        match value {
            Value::Null => self.write_null(output),
            Value::Bool(true) => output.push_str("true"),
            Value::Bool(false) => output.push_str("false"),
            Value::Number(n) => self.write_number(n, output),
            Value::String(s) => self.write_string(s, output),
            Value::List(items) => return self.write_list(items, depth, output),
            Value::Map(map) => return self.write_map(map, depth, output),
        }
        Ok(())
    }

    fn write_null(&self, output: &mut String) {
        match self.dialect {
            // The legacy encoder quoted the empty text of null.
            Dialect::Legacy => output.push_str("\"\""),
            Dialect::Strict => output.push_str("null"),
        }
    }

    fn write_number(&self, n: &Number, output: &mut String) {
        match self.dialect {
            Dialect::Strict if !n.is_finite() => output.push_str("null"),
            _ => output.push_str(n.as_str()),
        }
    }

    fn write_string(&self, s: &str, output: &mut String) {
        match self.dialect {
            Dialect::Legacy if is_numeric(s) => output.push_str(s),
            Dialect::Legacy => {
                output.push('"');
                push_slashed(s, output);
                output.push('"');
            }
            Dialect::Strict => push_json_string(s, output),
        }
    }

    fn write_key(&self, key: &Key, output: &mut String) {
        match self.dialect {
            Dialect::Legacy => {
                output.push('"');
                match key {
                    Key::Index(i) => output.push_str(&i.to_string()),
                    Key::Name(name) => output.push_str(name),
                }
                output.push('"');
            }
            Dialect::Strict => push_json_string(&key.to_string(), output),
        }
        output.push(':');
    }

    fn write_list(&self, items: &[Value], depth: u64, output: &mut String) -> HelperResult<()> {
        let depth = self.enter(depth)?;
        let shape = match self.dialect {
            Dialect::Legacy => Shape::of_list(items.len()),
            Dialect::Strict => Shape::List,
        };
        tracing::trace!(?shape, len = items.len(), depth, "encoding list");

        if shape == Shape::Map {
            output.push_str("{}");
            return Ok(());
        }

        output.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                output.push(',');
            }
            self.write_value(item, depth, output)?;
        }
        output.push(']');
        Ok(())
    }

    fn write_map(&self, map: &Map, depth: u64, output: &mut String) -> HelperResult<()> {
        let depth = self.enter(depth)?;
        let shape = Shape::of_map(map);
        tracing::trace!(?shape, len = map.len(), depth, "encoding map");

        let (open, close) = match shape {
            Shape::List => ('[', ']'),
            Shape::Map => ('{', '}'),
        };

        output.push(open);
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                output.push(',');
            }
            if shape == Shape::Map {
                self.write_key(key, output);
            }
            self.write_value(value, depth, output)?;
        }
        output.push(close);
        Ok(())
    }
}

/// Serialize a value with the legacy dialect.
///
/// Total: every finite value tree encodes.
pub fn serialize(value: &Value) -> String {
    let mut output = String::new();
    // Without a depth limit the encoder has no failure path.
    if Encoder::legacy().write_value(value, 0, &mut output).is_err() {
        output.clear();
    }
    output
}

/// Serialize a value as standard JSON.
pub fn serialize_strict(value: &Value) -> String {
    let mut output = String::new();
    if Encoder::strict().write_value(value, 0, &mut output).is_err() {
        output.clear();
    }
    output
}
