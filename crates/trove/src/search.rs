//! Searching by deep and shallow equality.
//!
//! Deep searches go through [`is_equal`], so a [`Partial`](trove_core::Partial)
//! pattern can stand in for the searched value. Shallow searches compare
//! primitives by value and containers by identity.

use serde_json::Value;
use trove_core::value::{is_primitive, strict_eq};
use trove_core::{is_equal, Iteratee, Operand};

use crate::collection::Collection;

impl Collection {
    /// Returns `true` if some item deep-equals `value`.
    ///
    /// ```
    /// use serde_json::json;
    /// use trove::Collection;
    ///
    /// let c = Collection::from_value(json!([{"id": 1, "tags": []}])).unwrap();
    /// let pattern = json!({"id": 1});
    /// assert!(c.deep_includes(Collection::partial(&pattern)));
    /// assert!(!c.deep_includes(&pattern));
    /// ```
    pub fn deep_includes<'a>(&self, value: impl Into<Operand<'a>>) -> bool {
        self.deep_index_of(value, 0).is_some()
    }

    /// Returns `true` if `iteratee` evaluates to something deep-equal to
    /// `value` for some item.
    pub fn includes_by<'f>(&self, iteratee: impl Into<Iteratee<'f>>, value: &Value) -> bool {
        let iteratee = iteratee.into();
        self.items
            .iter()
            .any(|item| is_equal(&*iteratee.evaluate(item), value))
    }

    /// Index of the first item at or after `from` that deep-equals `value`.
    pub fn deep_index_of<'a>(&self, value: impl Into<Operand<'a>>, from: usize) -> Option<usize> {
        let value = value.into();
        self.items
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, item)| is_equal(value, *item))
            .map(|(index, _)| index)
    }

    /// Index of the last item that deep-equals `value`.
    pub fn deep_last_index_of<'a>(&self, value: impl Into<Operand<'a>>) -> Option<usize> {
        let value = value.into();
        self.items.iter().rposition(|item| is_equal(value, item))
    }

    /// Returns `true` if `other` has the same length and deep-equal items
    /// at every position.
    pub fn is_equal_to(&self, other: &[Value]) -> bool {
        self.items.len() == other.len()
            && self
                .items
                .iter()
                .zip(other)
                .all(|(a, b)| is_equal(a, b))
    }

    /// Index of the first item equal to `value`, deep or shallow.
    pub(crate) fn first_index(&self, value: &Value, deep: bool) -> Option<usize> {
        self.items.iter().position(|item| same(item, value, deep))
    }

    /// Index of the last item equal to `value`, deep or shallow.
    pub(crate) fn last_index_of(&self, value: &Value, deep: bool) -> Option<usize> {
        self.items.iter().rposition(|item| same(item, value, deep))
    }
}

/// Shallow equality: primitives by value, containers by identity.
pub(crate) fn shallow_eq(a: &Value, b: &Value) -> bool {
    if is_primitive(a) || is_primitive(b) {
        strict_eq(a, b)
    } else {
        std::ptr::eq(a, b)
    }
}

pub(crate) fn same(a: &Value, b: &Value, deep: bool) -> bool {
    if deep {
        is_equal(a, b)
    } else {
        shallow_eq(a, b)
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
    fn deep_index_from_offset() {
        let c = collection(json!([[1], 2, [1]]));
        assert_eq!(c.deep_index_of(&json!([1]), 0), Some(0));
        assert_eq!(c.deep_index_of(&json!([1]), 1), Some(2));
        assert_eq!(c.deep_index_of(&json!([1]), 3), None);
        assert_eq!(c.deep_index_of(&json!(3), 0), None);
    }

    #[test]
    fn deep_last_index_checks_every_item() {
        let c = collection(json!([{"a": 1}, 2, {"a": 1}]));
        assert_eq!(c.deep_last_index_of(&json!({"a": 1})), Some(2));
        assert_eq!(c.deep_last_index_of(&json!(2)), Some(1));
        assert_eq!(collection(json!([5])).deep_last_index_of(&json!(5)), Some(0));
    }

    #[test]
    fn includes_by_projects_items() {
        let c = collection(json!([{"user": {"id": 7}}, {"user": {"id": 9}}]));
        assert!(c.includes_by("user.id", &json!(9)));
        assert!(!c.includes_by("user.id", &json!(8)));
    }

    #[test]
    fn is_equal_to_is_positional() {
        let c = collection(json!([1, {"a": [2]}]));
        assert!(c.is_equal_to(&[json!(1), json!({"a": [2]})]));
        assert!(!c.is_equal_to(&[json!({"a": [2]}), json!(1)]));
        assert!(!c.is_equal_to(&[json!(1)]));
    }

    #[test]
    fn shallow_equality_uses_identity_for_containers() {
        let c = collection(json!([[1], [1]]));
        assert!(!shallow_eq(&c[0], &c[1]));
        assert!(shallow_eq(&c[0], &c[0]));
        assert!(shallow_eq(&json!(1), &json!(1.0)));
        assert_eq!(c.first_index(&c[1], false), Some(1));
        assert_eq!(c.first_index(&c[1], true), Some(0));
    }
}
