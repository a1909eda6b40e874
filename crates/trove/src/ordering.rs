//! Multi-key sorting.
//!
//! Provides [`Dir`] for sort direction and [`OrderBy`] for iteratee-based
//! ordering clauses.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use trove_core::value::to_number;
use trove_core::Iteratee;

use crate::collate::locale_compare;
use crate::collection::Collection;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single ordering clause: what to sort by, and which way.
#[derive(Debug)]
pub struct OrderBy<'f> {
    /// Selects the sort key from each item.
    pub iteratee: Iteratee<'f>,
    /// The sort direction.
    pub dir: Dir,
}

impl<'f> OrderBy<'f> {
    /// Creates a new ascending ordering.
    pub fn asc(iteratee: impl Into<Iteratee<'f>>) -> Self {
        OrderBy::new(iteratee, Dir::Asc)
    }

    /// Creates a new descending ordering.
    pub fn desc(iteratee: impl Into<Iteratee<'f>>) -> Self {
        OrderBy::new(iteratee, Dir::Desc)
    }

    /// Creates a new ordering with the given direction.
    pub fn new(iteratee: impl Into<Iteratee<'f>>, dir: Dir) -> Self {
        OrderBy {
            iteratee: iteratee.into(),
            dir,
        }
    }

    /// Compares two items according to this ordering.
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        let key_a = self.iteratee.evaluate(a);
        let key_b = self.iteratee.evaluate(b);
        self.dir.apply(compare_values(&key_a, &key_b))
    }
}

/// Compares two sort keys.
///
/// Keys fall into three ranks, compared in order: numeric keys (numbers,
/// booleans, `null`), then strings, then arrays and objects. Numeric keys
/// compare by value, strings with [`locale_compare`], and containers tie.
/// The result is a total order over all keys.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    rank(a).cmp(&rank(b)).then_with(|| match (a, b) {
        (Value::String(a), Value::String(b)) => locale_compare(a, b),
        _ => match (to_number(a), to_number(b)) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            _ => Ordering::Equal,
        },
    })
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => 0,
        Value::String(_) => 1,
        Value::Array(_) | Value::Object(_) => 2,
    }
}

/// Compares two items using a list of ordering clauses.
///
/// The first clause is the primary key, the second breaks its ties, and
/// so on. If every clause compares equal, returns `Equal`.
pub fn compare_by_orderings(a: &Value, b: &Value, orderings: &[OrderBy<'_>]) -> Ordering {
    orderings
        .iter()
        .map(|order_by| order_by.compare(a, b))
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

impl Collection {
    /// Stable sort by one or more keys.
    ///
    /// `orders` gives the direction per key; keys past its end reuse the
    /// last direction, and an empty list means ascending.
    ///
    /// ```
    /// use serde_json::json;
    /// use trove::{Collection, Dir};
    ///
    /// let mut c = Collection::from_value(json!([
    ///     {"team": "web", "age": 30},
    ///     {"team": "core", "age": 25},
    ///     {"team": "core", "age": 41},
    /// ]))
    /// .unwrap();
    /// c.sort_by(["team", "age"], &[Dir::Asc, Dir::Desc]);
    /// assert_eq!(c.get_each("age"), json!([41, 25, 30]));
    /// ```
    pub fn sort_by<'f, I, K>(&mut self, keys: I, orders: &[Dir]) -> &mut Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Iteratee<'f>>,
    {
        let orderings: Vec<OrderBy<'f>> = keys
            .into_iter()
            .enumerate()
            .map(|(index, key)| {
                let dir = orders
                    .get(index)
                    .or_else(|| orders.last())
                    .copied()
                    .unwrap_or_default();
                OrderBy::new(key, dir)
            })
            .collect();
        self.sort_by_orderings(&orderings)
    }

    /// Stable sort by explicit ordering clauses.
    pub fn sort_by_orderings(&mut self, orderings: &[OrderBy<'_>]) -> &mut Self {
        self.items.sort_by(|a, b| compare_by_orderings(a, b, orderings));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collection(value: Value) -> Collection {
        Collection::from_value(value).unwrap()
    }

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_display_and_serde() {
        assert_eq!(Dir::Desc.to_string(), "desc");
        assert_eq!(serde_json::to_value(Dir::Asc).unwrap(), json!("asc"));
        let dir: Dir = serde_json::from_value(json!("desc")).unwrap();
        assert!(dir.is_desc());
        assert!(Dir::default().is_asc());
    }

    #[test]
    fn compare_mixed_values() {
        assert_eq!(compare_values(&json!(2), &json!(10)), Ordering::Less);
        assert_eq!(compare_values(&json!("b"), &json!("A")), Ordering::Greater);
        assert_eq!(compare_values(&json!(null), &json!(-1)), Ordering::Greater);
        assert_eq!(compare_values(&json!(true), &json!(0.5)), Ordering::Greater);
        assert_eq!(compare_values(&json!([1]), &json!({"a": 1})), Ordering::Equal);
    }

    #[test]
    fn text_and_numbers_order_by_rank() {
        assert_eq!(compare_values(&json!(10), &json!("2")), Ordering::Less);
        assert_eq!(compare_values(&json!("x"), &json!(1)), Ordering::Greater);
        assert_eq!(compare_values(&json!({}), &json!("x")), Ordering::Greater);
        assert_eq!(compare_values(&json!("10"), &json!("2")), Ordering::Less);
        assert_eq!(compare_values(&json!(2), &json!("10")), Ordering::Less);
        assert_eq!(compare_values(&json!(2), &json!("2")), Ordering::Less);
    }

    #[test]
    fn sort_mixed_keys() {
        let mut c = collection(json!([
            {"k": "x1"}, {"k": 3}, {"k": "10"}, {"k": null},
            {"k": "2"}, {"k": [0]}, {"k": 2}, {"k": true}
        ]));
        c.sort_by(["k"], &[Dir::Asc]);
        assert_eq!(
            c.get_each("k"),
            json!([null, true, 2, 3, "10", "2", "x1", [0]])
        );
    }

    #[test]
    fn sort_single_key_ascending() {
        let mut c = collection(json!([{"n": 3}, {"n": 1}, {"n": 2}]));
        c.sort_by(["n"], &[]);
        assert_eq!(c.get_each("n"), json!([1, 2, 3]));
    }

    #[test]
    fn sort_is_stable() {
        let mut c = collection(json!([
            {"k": 1, "id": "a"},
            {"k": 0, "id": "b"},
            {"k": 1, "id": "c"},
            {"k": 0, "id": "d"}
        ]));
        c.sort_by(["k"], &[Dir::Asc]);
        assert_eq!(c.get_each("id"), json!(["b", "d", "a", "c"]));
    }

    #[test]
    fn last_order_is_reused() {
        let mut c = collection(json!([
            {"a": 1, "b": 1},
            {"a": 2, "b": 2},
            {"a": 2, "b": 3}
        ]));
        c.sort_by(["a", "b"], &[Dir::Desc]);
        assert_eq!(c.get_each("b"), json!([3, 2, 1]));
    }

    #[test]
    fn sort_strings_by_locale() {
        let mut c = collection(json!(["banana", "Apple", "cherry", "apple"]));
        c.sort_by([Iteratee::func(|v: &Value| v.clone())], &[]);
        assert_eq!(c, json!(["apple", "Apple", "banana", "cherry"]));
    }

    #[test]
    fn explicit_orderings() {
        let mut c = collection(json!([{"n": 1}, {"n": 3}, {"n": 2}]));
        c.sort_by_orderings(&[OrderBy::desc("n")]);
        assert_eq!(c.get_each("n"), json!([3, 2, 1]));
    }
}
