//! Value types accepted by the serializer.
//!
//! A [`Value`] is a tagged union of scalars and two aggregates:
//! [`Value::List`], an explicitly tagged sequence, and [`Value::Map`], a keyed
//! aggregate whose output shape is inferred from its keys (see
//! [`super::shape`]).
//!
//! Keys follow the legacy associative-container rules: text that is a
//! canonical decimal integer becomes an integer key, and maps keep insertion
//! order.

use std::collections::HashMap;
use std::fmt;

use super::numeric::is_numeric;

/// A number stored as its textual form, emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// Build a number from text, accepting only numeric strings.
    pub fn parse(text: &str) -> Option<Self> {
        if is_numeric(text) {
            Some(Number(text.to_string()))
        } else {
            None
        }
    }

    /// The verbatim text of this number.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// False for the `NAN` / `INF` / `-INF` renderings of non-finite floats.
    pub fn is_finite(&self) -> bool {
        !matches!(self.0.as_str(), "NAN" | "INF" | "-INF")
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number(value.to_string())
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        let text = if value.is_nan() {
            "NAN".to_string()
        } else if value.is_infinite() {
            let text = if value > 0.0 { "INF" } else { "-INF" };
            text.to_string()
        } else {
            value.to_string()
        };
        Number(text)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::from(value as f64)
    }
}

/// A map key: an integer index or a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Integer key
    Index(i64),
    /// Any other text key
    Name(String),
}

impl Key {
    /// Returns the integer value for index keys.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }
}

/// Parse text that is a canonical decimal integer: no sign other than a
/// leading `-`, no leading zeros, no `-0`, and within `i64`.
fn canonical_index(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.starts_with('0') && (digits.len() > 1 || text.starts_with('-')) {
        return None;
    }
    text.parse::<i64>().ok()
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        match canonical_index(text) {
            Some(i) => Key::Index(i),
            None => Key::Name(text.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        match canonical_index(&text) {
            Some(i) => Key::Index(i),
            None => Key::Name(text),
        }
    }
}

impl From<&String> for Key {
    fn from(text: &String) -> Self {
        Key::from(text.as_str())
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Index(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Index(i as i64)
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        match i64::try_from(i) {
            Ok(i) => Key::Index(i),
            Err(_) => Key::Name(i.to_string()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(s) => f.write_str(s),
        }
    }
}

/// An insertion-ordered map with unique keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Map {
    entries: Vec<(Key, Value)>,
}

impl Map {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a value. An existing key keeps its position and the old value
    /// is returned.
    ///
    /// Lookup is a linear scan; bulk construction should go through
    /// `FromIterator`, which indexes keys while building.
    pub fn insert<K: Into<Key>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Append an entry whose key the caller knows to be new.
    pub(crate) fn append(&mut self, key: Key, value: Value) {
        self.entries.push((key, value));
    }

    /// Append a value under the next free integer index and return that key.
    ///
    /// Returns `None` and leaves the map unchanged when the largest index is
    /// already `i64::MAX`.
    pub fn push<V: Into<Value>>(&mut self, value: V) -> Option<Key> {
        let next = match self
            .entries
            .iter()
            .filter_map(|(k, _)| k.as_index())
            .filter(|i| *i >= 0)
            .max()
        {
            Some(max) => max.checked_add(1)?,
            None => 0,
        };
        let key = Key::Index(next);
        self.entries.push((key.clone(), value.into()));
        Some(key)
    }

    /// Look up a value by key.
    pub fn get<K: Into<Key>>(&self, key: K) -> Option<&Value> {
        let key = key.into();
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Returns true if the key is present.
    pub fn contains_key<K: Into<Key>>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (Key, Value)> {
        self.entries.iter()
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterate values in insertion order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = &'a (Key, Value);
    type IntoIter = std::slice::Iter<'a, (Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        let mut positions: HashMap<Key, usize> = HashMap::new();
        for (k, v) in iter {
            let key = k.into();
            let value = v.into();
            match positions.get(&key) {
                Some(&pos) => map.entries[pos].1 = value,
                None => {
                    positions.insert(key.clone(), map.entries.len());
                    map.entries.push((key, value));
                }
            }
        }
        map
    }
}

/// A value accepted by the serializer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// Absent value
    #[default]
    Null,
    /// Boolean (true/false)
    Bool(bool),
    /// Number, emitted verbatim
    Number(Number),
    /// Raw text, escaped on output
    String(String),
    /// Explicitly tagged sequence
    List(Vec<Value>),
    /// Keyed aggregate, shape inferred from its keys
    Map(Map),
}

impl Value {
    /// Fallback for types without a dedicated variant: the `Display` text
    /// becomes a string value.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Value::String(value.to_string())
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for lists and maps.
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Returns the boolean value if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a Number, None otherwise.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list items if this is a List, None otherwise.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the map if this is a Map, None otherwise.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Get a value from a map by key.
    pub fn get<K: Into<Key>>(&self, key: K) -> Option<&Value> {
        self.as_map().and_then(|m| m.get(key))
    }

    /// Get a value from a list by index.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_list().and_then(|items| items.get(index))
    }

    /// Returns the type name as a string for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) if n.is_f64() => Value::Number(Number::from(f)),
                _ => Value::Number(Number(n.to_string())),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Map(obj.into_iter().collect()),
        }
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::List(iter.into_iter().collect())
    }
}
