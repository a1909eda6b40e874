//! Deduplication.
//!
//! An item is a duplicate when the first and last positions of equal items
//! differ. Deep variants compare with [`is_equal`](trove_core::is_equal);
//! shallow variants compare primitives by value and containers by identity.

use serde_json::Value;
use trove_core::{is_equal, Iteratee};

use crate::collection::Collection;
use crate::search::same;

impl Collection {
    /// Returns `true` if `value` occurs more than once.
    pub fn is_duplicate(&self, value: &Value, deep: bool) -> bool {
        self.first_index(value, deep) != self.last_index_of(value, deep)
    }

    /// Keeps only the items that occur exactly once.
    pub fn without_duplicates(&self, deep: bool) -> Collection {
        self.items
            .iter()
            .filter(|item| !self.is_duplicate(item, deep))
            .cloned()
            .collect()
    }

    /// Items that occur more than once, by shallow equality.
    ///
    /// With `uniq`, each duplicated item is reported once; otherwise once
    /// per occurrence.
    pub fn duplicates(&self, uniq: bool) -> Collection {
        self.collect_duplicates(false, uniq)
    }

    /// Items that occur more than once, by deep equality.
    pub fn deep_duplicates(&self, uniq: bool) -> Collection {
        self.collect_duplicates(true, uniq)
    }

    /// Drops every item deep-equal to an earlier one.
    ///
    /// ```
    /// use serde_json::json;
    /// use trove::Collection;
    ///
    /// let c = Collection::from_value(json!([1, {"a": 1}, 1, {"a": 1}])).unwrap();
    /// assert_eq!(c.uniq(), json!([1, {"a": 1}]));
    /// ```
    pub fn uniq(&self) -> Collection {
        let mut kept: Vec<&Value> = Vec::new();
        for item in &self.items {
            if !kept.iter().any(|seen| is_equal(*seen, item)) {
                kept.push(item);
            }
        }
        kept.into_iter().cloned().collect()
    }

    /// Drops every item whose projection through `iteratee` deep-equals
    /// the projection of an earlier item.
    pub fn uniq_by<'f>(&self, iteratee: impl Into<Iteratee<'f>>) -> Collection {
        let iteratee = iteratee.into();
        let mut seen: Vec<Value> = Vec::new();
        let mut kept = Collection::new();
        for item in &self.items {
            let key = iteratee.evaluate(item).into_owned();
            if !seen.iter().any(|earlier| is_equal(earlier, &key)) {
                seen.push(key);
                kept.items.push(item.clone());
            }
        }
        kept
    }

    fn collect_duplicates(&self, deep: bool, uniq: bool) -> Collection {
        let mut found: Vec<&Value> = Vec::new();
        for item in &self.items {
            if uniq && found.iter().any(|earlier| same(earlier, item, deep)) {
                continue;
            }
            if self.is_duplicate(item, deep) {
                found.push(item);
            }
        }
        found.into_iter().cloned().collect()
    }
}
