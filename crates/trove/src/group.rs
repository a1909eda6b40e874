//! Grouping, counting and entry conversion.
//!
//! Keyed results are ordered maps: keys appear in the order they were first
//! produced, as the property-key text of the selector's result.

use serde_json::{Map, Value};
use trove_core::{property_key, Iteratee};

use crate::collection::Collection;

impl Collection {
    /// Counts the items `iteratee` holds for.
    pub fn count<'f>(&self, iteratee: impl Into<Iteratee<'f>>) -> usize {
        let iteratee = iteratee.into();
        self.items.iter().filter(|item| iteratee.test(item)).count()
    }

    /// Counts items per selector key.
    ///
    /// ```
    /// use serde_json::json;
    /// use trove::{Collection, Iteratee};
    ///
    /// let c = Collection::from_value(json!([1.5, 2.5, 1.2])).unwrap();
    /// let floor = Iteratee::func(|v: &serde_json::Value| {
    ///     v.as_f64().unwrap_or(0.0).floor() as i64
    /// });
    /// let counts = c.count_by(floor);
    /// assert_eq!(counts["1"], json!(2));
    /// assert_eq!(counts["2"], json!(1));
    /// ```
    pub fn count_by<'f>(&self, iteratee: impl Into<Iteratee<'f>>) -> Map<String, Value> {
        let iteratee = iteratee.into();
        let mut counts: Map<String, Value> = Map::new();
        for item in &self.items {
            let key = property_key(&iteratee.evaluate(item));
            let next = counts.get(&key).and_then(Value::as_u64).unwrap_or(0) + 1;
            counts.insert(key, Value::from(next));
        }
        counts
    }

    /// Indexes items by selector key. Later items win.
    pub fn key_by<'f>(&self, iteratee: impl Into<Iteratee<'f>>) -> Map<String, Value> {
        let iteratee = iteratee.into();
        let mut keyed = Map::new();
        for item in &self.items {
            keyed.insert(property_key(&iteratee.evaluate(item)), item.clone());
        }
        keyed
    }

    /// Groups items into arrays by selector key.
    pub fn group_by<'f>(&self, iteratee: impl Into<Iteratee<'f>>) -> Map<String, Value> {
        let iteratee = iteratee.into();
        let mut groups: Map<String, Value> = Map::new();
        for item in &self.items {
            let key = property_key(&iteratee.evaluate(item));
            let slot = groups.entry(key).or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(group) = slot {
                group.push(item.clone());
            }
        }
        groups
    }

    /// Splits items into those `iteratee` holds for and the rest.
    pub fn partition<'f>(&self, iteratee: impl Into<Iteratee<'f>>) -> (Collection, Collection) {
        let iteratee = iteratee.into();
        let (matched, rest): (Vec<Value>, Vec<Value>) =
            self.items.iter().cloned().partition(|item| iteratee.test(item));
        (Collection::from(matched), Collection::from(rest))
    }

    /// Keeps the items `iteratee` does not hold for.
    pub fn reject<'f>(&self, iteratee: impl Into<Iteratee<'f>>) -> Collection {
        let iteratee = iteratee.into();
        self.items
            .iter()
            .filter(|item| !iteratee.test(item))
            .cloned()
            .collect()
    }

    /// Builds an object from `[key, value]` items.
    ///
    /// Items that are not arrays are skipped; a missing value reads as
    /// `null` and later keys overwrite earlier ones.
    pub fn from_entries(&self) -> Map<String, Value> {
        let mut object = Map::new();
        for item in &self.items {
            let Value::Array(entry) = item else {
                tracing::debug!(kind = %trove_core::Kind::of(item), "skipping non-entry item");
                continue;
            };
            let key = entry.first().map(property_key).unwrap_or_else(|| "undefined".to_string());
            let value = entry.get(1).cloned().unwrap_or(Value::Null);
            object.insert(key, value);
        }
        object
    }

    /// Flattens every item into its `[key, value]` entries.
    ///
    /// Objects yield their fields and arrays yield `[index, item]` pairs
    /// with the index as text. Primitives yield nothing.
    pub fn each_as_entries(&self) -> Collection {
        let mut entries = Collection::new();
        for item in &self.items {
            match item {
                Value::Object(fields) => entries.extend(
                    fields
                        .iter()
                        .map(|(key, value)| entry(Value::from(key.as_str()), value)),
                ),
                Value::Array(values) => entries.extend(
                    values
                        .iter()
                        .enumerate()
                        .map(|(index, value)| entry(Value::from(index.to_string()), value)),
                ),
                _ => {}
            }
        }
        entries
    }
}

fn entry(key: Value, value: &Value) -> Value {
    Value::Array(vec![key, value.clone()])
}
