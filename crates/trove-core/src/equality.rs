//! Structural equality with partial matching.
//!
//! Two values are equal when they have the same shape and, key by key,
//! equal contents. Nested containers recurse; primitives compare strictly.
//! Arrays go through the same path as objects, keyed by position.
//!
//! By default key *order* matters: `{"a":1,"b":2}` and `{"b":2,"a":1}` are
//! not equal. [`KeyOrder::Ignore`] relaxes that to a set comparison.
//!
//! When either side is a [`Partial`](crate::Partial), the size and order
//! checks are skipped and only the pattern's keys are compared, so the
//! other side may hold extra keys.
//!
//! There is no cycle guard. Owned value trees cannot form cycles.

use serde::{Deserialize, Serialize};

use crate::partial::{is_partial, Operand};
use crate::value::{is_container, strict_eq};

/// How object key order affects equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyOrder {
    /// Keys must appear in the same order.
    #[default]
    Strict,
    /// Keys must form the same set, in any order.
    Ignore,
}

/// Equality policy.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use trove_core::{Equality, KeyOrder};
///
/// let a = json!({"a": 1, "b": 2});
/// let b = json!({"b": 2, "a": 1});
///
/// assert!(!Equality::new().is_equal(&a, &b));
/// assert!(Equality::new().with_key_order(KeyOrder::Ignore).is_equal(&a, &b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Equality {
    pub key_order: KeyOrder,
}

impl Equality {
    /// Creates the default (key-order sensitive) policy.
    pub fn new() -> Self {
        Equality::default()
    }

    /// Sets the key-order policy.
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    /// Compares two operands under this policy.
    pub fn is_equal<'a, 'b>(&self, a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> bool {
        self.compare(a.into(), b.into())
    }

    fn compare<'x>(&self, a: Operand<'x>, b: Operand<'x>) -> bool {
        if a.is_primitive() || b.is_primitive() {
            return match (a, b) {
                (Operand::Value(a), Operand::Value(b)) => strict_eq(a, b),
                _ => false,
            };
        }

        if let (Operand::Value(x), Operand::Value(y)) = (a, b) {
            if std::ptr::eq(x, y) {
                return true;
            }
        }

        let any_partial = is_partial(&a) || is_partial(&b);
        if !any_partial && a.kind() != b.kind() {
            tracing::trace!(left = %a.kind(), right = %b.kind(), "shape mismatch");
            return false;
        }

        let keys = match (a, b) {
            (Operand::Partial(pattern), _) | (_, Operand::Partial(pattern)) => pattern.keys(),
            _ => {
                let left = a.keys();
                let right = b.keys();
                if !self.same_keys(&left, &right, &b) {
                    tracing::trace!("key mismatch");
                    return false;
                }
                left
            }
        };

        keys.iter().all(|key| match (a.get(key), b.get(key)) {
            (Some(x), Some(y)) if is_container(x) && is_container(y) => {
                self.compare(Operand::Value(x), Operand::Value(y))
            }
            (Some(x), Some(y)) => strict_eq(x, y),
            (None, None) => true,
            _ => false,
        })
    }

    fn same_keys<K: AsRef<str>>(&self, left: &[K], right: &[K], other: &Operand<'_>) -> bool {
        if left.len() != right.len() {
            return false;
        }
        match self.key_order {
            KeyOrder::Strict => left
                .iter()
                .zip(right)
                .all(|(l, r)| l.as_ref() == r.as_ref()),
            KeyOrder::Ignore => left.iter().all(|key| other.get(key.as_ref()).is_some()),
        }
    }
}

/// Compares two operands with the default policy.
///
/// ```
/// use serde_json::json;
/// use trove_core::is_equal;
///
/// assert!(is_equal(&json!({"a": [1, {"b": 2}]}), &json!({"a": [1, {"b": 2}]})));
/// assert!(!is_equal(&json!([1, 2]), &json!({"0": 1, "1": 2})));
/// ```
pub fn is_equal<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> bool {
    Equality::default().is_equal(a, b)
}
