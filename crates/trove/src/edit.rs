//! In-place editing.
//!
//! Everything here mutates the receiver and returns it for chaining, except
//! [`Collection::splice`] and [`Collection::clear`], which hand back what
//! they removed.

use serde_json::Value;
use trove_core::{get_in, is_equal, put, Address};

use crate::collection::Collection;

impl Collection {
    /// Replaces the first item deep-equal to `search` (or every such item,
    /// when `all` is set).
    pub fn replace(&mut self, search: &Value, replacement: Value, all: bool) -> &mut Self {
        for item in self.items.iter_mut() {
            if is_equal(&*item, search) {
                *item = replacement.clone();
                if !all {
                    break;
                }
            }
        }
        self
    }

    /// Overwrites `delete_count` items starting at `start` with copies of
    /// `value`. A negative `start` counts from the end.
    pub fn replace_by_index(&mut self, start: i64, value: Value, delete_count: usize) -> &mut Self {
        self.splice(start, delete_count, vec![value; delete_count]);
        self
    }

    /// Removes `delete_count` items at `start`, inserts `elements` there and
    /// returns the removed items.
    ///
    /// A negative `start` counts from the end; out-of-range bounds clamp.
    pub fn splice(&mut self, start: i64, delete_count: usize, elements: Vec<Value>) -> Collection {
        let len = self.items.len();
        let start = if start < 0 {
            len.saturating_sub(usize::try_from(start.unsigned_abs()).unwrap_or(usize::MAX))
        } else {
            usize::try_from(start).unwrap_or(usize::MAX).min(len)
        };
        let end = start.saturating_add(delete_count).min(len);
        self.items.splice(start..end, elements).collect()
    }

    /// Removes up to `count` items deep-equal to `value`, first to last.
    ///
    /// A negative `count` removes every match.
    pub fn remove(&mut self, value: &Value, count: i64) -> &mut Self {
        let mut remaining = count;
        while count < 0 || remaining > 0 {
            let Some(index) = self.deep_index_of(value, 0) else {
                break;
            };
            self.items.remove(index);
            remaining -= 1;
        }
        self
    }

    /// Replaces each item deep-equal to `search` in place.
    ///
    /// Equivalent to [`deep_replace_with`](Self::deep_replace_with) with the
    /// item's own index as the path.
    pub fn deep_replace(&mut self, search: &Value, replacement: Value) -> &mut Self {
        self.deep_replace_with(search, replacement, |index| index.to_string())
    }

    /// For each index, reads the value at `path_for(index)` and, if it is
    /// deep-equal to `search`, writes `replacement` there.
    ///
    /// ```
    /// use serde_json::json;
    /// use trove::Collection;
    ///
    /// let mut rows = Collection::from_value(json!([
    ///     {"status": "old"},
    ///     {"status": "new"},
    /// ]))
    /// .unwrap();
    /// rows.deep_replace_with(&json!("old"), json!("archived"), |i| format!("{}.status", i));
    /// assert_eq!(rows, json!([{"status": "archived"}, {"status": "new"}]));
    /// ```
    pub fn deep_replace_with<F, P>(
        &mut self,
        search: &Value,
        replacement: Value,
        path_for: F,
    ) -> &mut Self
    where
        F: Fn(usize) -> P,
        P: Into<Address>,
    {
        for index in 0..self.items.len() {
            let address = path_for(index).into();
            let hit = get_in(&self.items, &address).is_some_and(|found| is_equal(found, search));
            if hit {
                self.put(&address, replacement.clone());
            }
        }
        self
    }

    /// Writes `value` at `address`, with the collection as the root.
    ///
    /// Missing intermediate containers are created. The identity address is
    /// ignored, since the root must stay a sequence.
    pub fn put(&mut self, address: &Address, value: Value) -> &mut Self {
        if address.is_empty() {
            tracing::debug!("ignoring write to the collection root");
            return self;
        }
        let mut root = Value::Array(std::mem::take(&mut self.items));
        put(&mut root, address, value);
        if let Value::Array(items) = root {
            self.items = items;
        }
        self
    }

    /// Empties the collection, returning the removed items.
    pub fn clear(&mut self) -> Collection {
        Collection::from(std::mem::take(&mut self.items))
    }

    /// Appends values; array values are flattened one level.
    pub fn concat<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = Value>,
    {
        for value in values {
            match value {
                Value::Array(items) => self.items.extend(items),
                other => self.items.push(other),
            }
        }
        self
    }
}
