//! Aggregate shape inference.
//!
//! An aggregate is written as a list only when its keys, read in order, are
//! exactly `0, 1, 2, ..., n - 1`. Anything else (name keys, gaps, reordered
//! indices) is written as a map, and so is an empty aggregate.

use super::types::{Key, Map};

/// Output shape of an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Written as `[v,v,...]`
    List,
    /// Written as `{"k":v,...}`
    Map,
}

impl Shape {
    /// Classify a sequence of keys with the contiguity rule.
    pub fn of_keys<'a, I>(keys: I) -> Shape
    where
        I: IntoIterator<Item = &'a Key>,
    {
        let mut count = 0usize;
        for (position, key) in keys.into_iter().enumerate() {
            match (key.as_index(), i64::try_from(position)) {
                (Some(index), Ok(position)) if index == position => count += 1,
                _ => return Shape::Map,
            }
        }
        if count == 0 {
            Shape::Map
        } else {
            Shape::List
        }
    }

    /// Classify a map by its keys.
    pub fn of_map(map: &Map) -> Shape {
        Shape::of_keys(map.keys())
    }

    /// Classify an explicit list of `len` items. Lists address their items
    /// 0..len, so only the empty case falls back to the map form.
    pub fn of_list(len: usize) -> Shape {
        if len == 0 {
            Shape::Map
        } else {
            Shape::List
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::types::Value;

    fn keyed(keys: &[&str]) -> Map {
        keys.iter().map(|k| (*k, Value::Null)).collect()
    }

    #[test]
    fn test_contiguous_keys_are_list() {
        assert_eq!(Shape::of_map(&keyed(&["0", "1", "2"])), Shape::List);
        assert_eq!(Shape::of_map(&keyed(&["0"])), Shape::List);
    }

    #[test]
    fn test_empty_is_map() {
        assert_eq!(Shape::of_map(&Map::new()), Shape::Map);
        assert_eq!(Shape::of_list(0), Shape::Map);
        assert_eq!(Shape::of_list(3), Shape::List);
    }

    #[test]
    fn test_gap_is_map() {
        assert_eq!(Shape::of_map(&keyed(&["0", "2"])), Shape::Map);
    }

    #[test]
    fn test_out_of_order_is_map() {
        assert_eq!(Shape::of_map(&keyed(&["1", "0"])), Shape::Map);
        assert_eq!(Shape::of_map(&keyed(&["0", "2", "1"])), Shape::Map);
    }

    #[test]
    fn test_not_starting_at_zero_is_map() {
        assert_eq!(Shape::of_map(&keyed(&["1", "2"])), Shape::Map);
    }

    #[test]
    fn test_name_keys_are_map() {
        assert_eq!(Shape::of_map(&keyed(&["a"])), Shape::Map);
        assert_eq!(Shape::of_map(&keyed(&["0", "a"])), Shape::Map);
        // Leading zeros keep the key textual, so this is not index 0.
        assert_eq!(Shape::of_map(&keyed(&["00"])), Shape::Map);
    }
}
