//! Set algebra: difference, without and intersection.
//!
//! Intersection treats the receiver as a collection of collections; items
//! that are not arrays count as empty sub-collections.

use serde_json::Value;
use trove_core::{is_equal, Iteratee};

use crate::collection::Collection;

impl Collection {
    /// Keeps items with no deep-equal counterpart in `other`.
    ///
    /// ```
    /// use serde_json::json;
    /// use trove::Collection;
    ///
    /// let c = Collection::from_value(json!([1, 2, 3, {"x": 1}])).unwrap();
    /// assert_eq!(c.difference(&[json!(2), json!({"x": 1})]), json!([1, 3]));
    /// ```
    pub fn difference(&self, other: &[Value]) -> Collection {
        self.difference_with(other, |a, b| is_equal(a, b))
    }

    /// Keeps items whose projection through `iteratee` deep-equals the
    /// projection of no item in `other`.
    pub fn difference_by<'f>(
        &self,
        other: &[Value],
        iteratee: impl Into<Iteratee<'f>>,
    ) -> Collection {
        let iteratee = iteratee.into();
        let projected: Vec<Value> = other
            .iter()
            .map(|item| iteratee.evaluate(item).into_owned())
            .collect();
        self.items
            .iter()
            .filter(|item| {
                let key = iteratee.evaluate(item);
                projected.iter().all(|seen| !is_equal(&*key, seen))
            })
            .cloned()
            .collect()
    }

    /// Keeps items for which `comparator` matches no item in `other`.
    pub fn difference_with<F>(&self, other: &[Value], comparator: F) -> Collection
    where
        F: Fn(&Value, &Value) -> bool,
    {
        self.items
            .iter()
            .filter(|item| other.iter().all(|el| !comparator(*item, el)))
            .cloned()
            .collect()
    }

    /// Drops every item deep-equal to one of `values`.
    pub fn without(&self, values: &[Value]) -> Collection {
        let values = Collection::from(values.to_vec());
        self.items
            .iter()
            .filter(|item| !values.deep_includes(*item))
            .cloned()
            .collect()
    }

    /// Items of the first sub-collection present in every sub-collection,
    /// deduplicated.
    ///
    /// ```
    /// use serde_json::json;
    /// use trove::Collection;
    ///
    /// let c = Collection::from_value(json!([[1, 2, 3], [2, 3, 4]])).unwrap();
    /// assert_eq!(c.intersection(), json!([2, 3]));
    /// ```
    pub fn intersection(&self) -> Collection {
        let Some(first) = self.items.first() else {
            return Collection::new();
        };
        let found: Collection = sub_items(first)
            .iter()
            .filter(|el| {
                self.items
                    .iter()
                    .all(|other| sub_items(other).iter().any(|item| is_equal(item, *el)))
            })
            .cloned()
            .collect();
        found.uniq()
    }

    /// Like [`intersection`](Self::intersection), comparing the projection
    /// of each item through `iteratee`.
    pub fn intersection_by<'f>(&self, iteratee: impl Into<Iteratee<'f>>) -> Collection {
        let iteratee = iteratee.into();
        let Some(first) = self.items.first() else {
            return Collection::new();
        };
        let found: Collection = sub_items(first)
            .iter()
            .filter(|el| {
                let key = iteratee.evaluate(el);
                self.items.iter().all(|other| {
                    sub_items(other)
                        .iter()
                        .any(|item| is_equal(&*iteratee.evaluate(item), &*key))
                })
            })
            .cloned()
            .collect();
        found.uniq()
    }
}

/// The items of a nested sub-collection.
pub(crate) fn sub_items(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items,
        _ => &[],
    }
}
