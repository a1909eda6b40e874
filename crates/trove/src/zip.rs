//! Positional transposes of a collection of collections.
//!
//! Every operation here walks the indices of the *first* sub-collection;
//! longer sub-collections are truncated and shorter ones read as `null`.

use serde_json::{Map, Value};
use trove_core::{property_key, put, Address};

use crate::collection::Collection;
use crate::set::sub_items;

impl Collection {
    /// Groups the items at each position into arrays.
    ///
    /// ```
    /// use serde_json::json;
    /// use trove::Collection;
    ///
    /// let c = Collection::from_value(json!([["a", "b"], [1, 2], [true]])).unwrap();
    /// assert_eq!(c.zip(), json!([["a", 1, true], ["b", 2, null]]));
    /// ```
    pub fn zip(&self) -> Collection {
        self.zip_with(|row| Value::Array(row.to_vec()))
    }

    /// Combines the items at each position with `combine`.
    pub fn zip_with<F>(&self, combine: F) -> Collection
    where
        F: Fn(&[Value]) -> Value,
    {
        (0..self.width())
            .map(|index| combine(&self.row(index)))
            .collect()
    }

    /// The inverse of [`zip`](Self::zip), which is its own inverse.
    pub fn unzip(&self) -> Collection {
        self.zip()
    }

    /// Pairs the first sub-collection (keys) with the second (values).
    pub fn zip_object(&self) -> Map<String, Value> {
        let (keys, values) = self.keys_and_values();
        keys.iter()
            .enumerate()
            .map(|(index, key)| {
                let value = values.get(index).cloned().unwrap_or(Value::Null);
                (property_key(key), value)
            })
            .collect()
    }

    /// Like [`zip_object`](Self::zip_object), treating each key as a path
    /// and building nested structure.
    ///
    /// ```
    /// use serde_json::json;
    /// use trove::Collection;
    ///
    /// let c = Collection::from_value(json!([["a.b", "a.c"], [1, 2]])).unwrap();
    /// assert_eq!(c.zip_object_deep(), json!({"a": {"b": 1, "c": 2}}));
    /// ```
    pub fn zip_object_deep(&self) -> Value {
        let (keys, values) = self.keys_and_values();
        let mut root = Value::Object(Map::new());
        for (index, key) in keys.iter().enumerate() {
            let value = values.get(index).cloned().unwrap_or(Value::Null);
            put(&mut root, &Address::parse(&property_key(key)), value);
        }
        root
    }

    fn width(&self) -> usize {
        self.items.first().map_or(0, |first| sub_items(first).len())
    }

    fn row(&self, index: usize) -> Vec<Value> {
        self.items
            .iter()
            .map(|sub| sub_items(sub).get(index).cloned().unwrap_or(Value::Null))
            .collect()
    }

    fn keys_and_values(&self) -> (&[Value], &[Value]) {
        let keys = self.items.first().map_or(&[][..], sub_items);
        let values = self.items.get(1).map_or(&[][..], sub_items);
        (keys, values)
    }
}
