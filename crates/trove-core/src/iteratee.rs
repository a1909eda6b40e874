//! Uniform selectors and predicates.
//!
//! Operations that take "something to select or test an item by" accept an
//! [`Iteratee`]. It is classified once, at the call boundary, into one of
//! four shapes:
//!
//! | Shape | Evaluates to |
//! |-------|--------------|
//! | Function | whatever the closure returns |
//! | Path | the value at the path, or whether the path is an own property |
//! | Pair `(key, value)` | whether the item partially matches `{key: value}` |
//! | Template object | whether the item partially matches the template |
//!
//! ```
//! use serde_json::json;
//! use trove_core::Iteratee;
//!
//! let item = json!({"name": "ada", "tags": ["x"]});
//!
//! assert_eq!(*Iteratee::from("name").evaluate(&item), json!("ada"));
//! assert!(Iteratee::from(("name", "ada")).test(&item));
//! assert!(Iteratee::from_value(json!({"tags": ["x"]})).test(&item));
//! assert!(!Iteratee::from("missing").test(&item));
//! ```

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::access::{get, has_own};
use crate::equality::is_equal;
use crate::partial::Partial;
use crate::path::Address;
use crate::value::is_truthy;

/// A selector or predicate over items.
pub enum Iteratee<'f> {
    /// A caller-supplied function.
    Function(Box<dyn Fn(&Value) -> Value + 'f>),
    /// A path to read from each item.
    Path(Address),
    /// A `[key, value]` pair, held as its single-entry template.
    Pair(Value),
    /// A template the item must partially match.
    Template(Value),
}

impl<'f> Iteratee<'f> {
    /// Wraps a selector function.
    pub fn func<F, R>(f: F) -> Self
    where
        F: Fn(&Value) -> R + 'f,
        R: Into<Value>,
    {
        Iteratee::Function(Box::new(move |value| f(value).into()))
    }

    /// Wraps a predicate function.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + 'f,
    {
        Iteratee::Function(Box::new(move |value| Value::Bool(f(value))))
    }

    /// Selects by path.
    pub fn path(path: impl Into<Address>) -> Self {
        Iteratee::Path(path.into())
    }

    /// Matches items whose `key` equals `value`.
    pub fn pair(key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut template = Map::new();
        template.insert(key.into(), value.into());
        Iteratee::Pair(Value::Object(template))
    }

    /// Matches items that contain every key of `template`.
    pub fn template(template: Value) -> Self {
        Iteratee::Template(template)
    }

    /// Classifies a dynamic value.
    ///
    /// Strings and numbers become paths, a two-element array led by a
    /// string becomes a pair, and anything else is used as a template.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(path) => Iteratee::path(path),
            Value::Number(n) => Iteratee::path(n.to_string()),
            Value::Array(items) => {
                if let [Value::String(key), expected] = items.as_slice() {
                    return Iteratee::pair(key.clone(), expected.clone());
                }
                Iteratee::Template(Value::Array(items))
            }
            other => Iteratee::Template(other),
        }
    }

    /// Applies this iteratee to an item.
    ///
    /// A path that reads nothing falls back to reporting whether the path
    /// exists as an own property, so it also works as a presence test.
    pub fn evaluate<'v>(&self, value: &'v Value) -> Cow<'v, Value> {
        match self {
            Iteratee::Function(f) => Cow::Owned(f(value)),
            Iteratee::Path(address) => match get(value, address) {
                Some(found) => Cow::Borrowed(found),
                None => Cow::Owned(Value::Bool(has_own(value, address))),
            },
            Iteratee::Pair(template) | Iteratee::Template(template) => {
                Cow::Owned(Value::Bool(is_equal(Partial::new(template), value)))
            }
        }
    }

    /// Applies this iteratee as a predicate, using truthiness.
    pub fn test(&self, value: &Value) -> bool {
        match self {
            Iteratee::Pair(template) | Iteratee::Template(template) => {
                is_equal(Partial::new(template), value)
            }
            _ => is_truthy(&self.evaluate(value)),
        }
    }
}

impl std::fmt::Debug for Iteratee<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Iteratee::Function(_) => f.write_str("Function(..)"),
            Iteratee::Path(address) => f.debug_tuple("Path").field(address).finish(),
            Iteratee::Pair(template) => f.debug_tuple("Pair").field(template).finish(),
            Iteratee::Template(template) => f.debug_tuple("Template").field(template).finish(),
        }
    }
}

impl From<&str> for Iteratee<'_> {
    fn from(path: &str) -> Self {
        Iteratee::path(path)
    }
}

impl From<String> for Iteratee<'_> {
    fn from(path: String) -> Self {
        Iteratee::path(path)
    }
}

impl From<Address> for Iteratee<'_> {
    fn from(address: Address) -> Self {
        Iteratee::Path(address)
    }
}

impl<V: Into<Value>> From<(&str, V)> for Iteratee<'_> {
    fn from((key, value): (&str, V)) -> Self {
        Iteratee::pair(key, value)
    }
}

impl From<Value> for Iteratee<'_> {
    fn from(value: Value) -> Self {
        Iteratee::from_value(value)
    }
}
