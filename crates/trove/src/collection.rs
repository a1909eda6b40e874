//! The [`Collection`] type: construction, conversion and access.
//!
//! A collection is an owned, ordered sequence of JSON values. Methods taking
//! `&mut self` edit it in place and return `&mut Self` for chaining; methods
//! taking `&self` derive a new collection and leave the receiver alone.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use trove_core::{get_in, Address, Kind, Partial, Result, TroveError};

/// An ordered, index-addressable, mutable sequence of values.
///
/// Dereferences to `[Value]`, so slice methods (`len`, `iter`, `first`,
/// `last`, indexing) are available directly.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use trove::Collection;
///
/// let people = Collection::from_value(json!([
///     {"name": "ada", "langs": ["en", "fr"]},
///     {"name": "bob", "langs": ["de"]},
/// ]))
/// .unwrap();
///
/// assert_eq!(people.at("0.langs[-1]"), Some(&json!("fr")));
/// assert_eq!(people.get_each("name"), json!(["ada", "bob"]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    pub(crate) items: Vec<Value>,
}

impl Collection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Collection::default()
    }

    /// Builds a collection from an array value.
    ///
    /// Nested arrays and objects are kept as nested values.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Collection { items }),
            other => Err(TroveError::NotASequence {
                kind: Kind::of(&other).as_str(),
            }),
        }
    }

    /// Parses JSON text holding an array.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Collection::from_value(value)
    }

    /// Wraps `template` as a partial pattern for use with the deep
    /// comparison methods.
    pub fn partial(template: &Value) -> Partial<'_> {
        Partial::new(template)
    }

    /// Returns the items as a slice.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Consumes the collection, returning its items.
    pub fn into_items(self) -> Vec<Value> {
        self.items
    }

    /// Consumes the collection, returning it as an array value.
    pub fn into_value(self) -> Value {
        Value::Array(self.items)
    }

    /// Appends one value.
    pub fn push(&mut self, value: impl Into<Value>) -> &mut Self {
        self.items.push(value.into());
        self
    }

    /// Returns an independent copy.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Serializes the collection to JSON text.
    pub fn json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.items)?)
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Reads the value at `path`, with the collection as the root.
    pub fn at(&self, path: impl Into<Address>) -> Option<&Value> {
        get_in(&self.items, &path.into())
    }

    /// Returns the item at `index`; negative indices count from the end.
    pub fn get(&self, index: i64) -> Option<&Value> {
        get_in(&self.items, &Address::from_index(index))
    }

    /// Reads `path` from every item. Missing values become `null`.
    pub fn get_each(&self, path: impl Into<Address>) -> Collection {
        let address = path.into();
        self.items
            .iter()
            .map(|item| trove_core::get(item, &address).cloned().unwrap_or(Value::Null))
            .collect()
    }

    /// Returns the index of the last item, or `None` when empty.
    pub fn last_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }
}

impl Deref for Collection {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.items
    }
}

impl DerefMut for Collection {
    fn deref_mut(&mut self) -> &mut [Value] {
        &mut self.items
    }
}

impl From<Vec<Value>> for Collection {
    fn from(items: Vec<Value>) -> Self {
        Collection { items }
    }
}

impl From<Collection> for Value {
    fn from(collection: Collection) -> Self {
        collection.into_value()
    }
}

impl TryFrom<Value> for Collection {
    type Error = TroveError;

    fn try_from(value: Value) -> Result<Self> {
        Collection::from_value(value)
    }
}

impl FromIterator<Value> for Collection {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Collection {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Value> for Collection {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for Collection {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl PartialEq<Value> for Collection {
    fn eq(&self, other: &Value) -> bool {
        matches!(other, Value::Array(items) if *items == self.items)
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = serde_json::to_string(&self.items).map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}
