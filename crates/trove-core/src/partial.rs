//! Partial patterns and equality operands.
//!
//! A [`Partial`] wraps a template value. Compared against a candidate, it
//! only ever exposes the template's own keys, so the candidate may carry
//! any number of extra keys and still match.
//!
//! ```
//! use serde_json::json;
//! use trove_core::{is_equal, Partial};
//!
//! let template = json!({"x": 1});
//! assert!(is_equal(Partial::new(&template), &json!({"x": 1, "y": 2})));
//! assert!(!is_equal(Partial::new(&template), &json!({"y": 2})));
//! ```

use std::borrow::Cow;

use serde_json::Value;

use crate::access::child;
use crate::value::{is_primitive, Kind};

/// A template that matches any candidate containing its keys.
///
/// The pattern borrows its template; it never copies it. Two patterns over
/// the same template are distinct values that behave identically.
#[derive(Debug, Clone, Copy)]
pub struct Partial<'a> {
    template: &'a Value,
}

impl<'a> Partial<'a> {
    /// Wraps `template` as a partial pattern.
    pub fn new(template: &'a Value) -> Self {
        Partial { template }
    }

    /// Returns the wrapped template.
    pub fn template(&self) -> &'a Value {
        self.template
    }

    /// Returns the template's own keys, in order.
    pub fn keys(&self) -> Vec<Cow<'a, str>> {
        own_keys(self.template)
    }

    /// Looks up a key on the template.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        child(self.template, key)
    }
}

/// One side of an equality check: a plain value or a partial pattern.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Value(&'a Value),
    Partial(Partial<'a>),
}

impl<'a> Operand<'a> {
    /// Returns the underlying value (the template, for a pattern).
    pub fn value(&self) -> &'a Value {
        match self {
            Operand::Value(value) => value,
            Operand::Partial(partial) => partial.template(),
        }
    }

    /// Returns `true` for a plain primitive. Patterns are never primitive.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Operand::Value(value) if is_primitive(value))
    }

    /// Returns the shape of the underlying value.
    pub fn kind(&self) -> Kind {
        Kind::of(self.value())
    }

    /// Returns the keys this operand exposes for comparison.
    pub fn keys(&self) -> Vec<Cow<'a, str>> {
        own_keys(self.value())
    }

    /// Looks up one key on the underlying value.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        child(self.value(), key)
    }
}

impl<'a> From<&'a Value> for Operand<'a> {
    fn from(value: &'a Value) -> Self {
        Operand::Value(value)
    }
}

impl<'a> From<Partial<'a>> for Operand<'a> {
    fn from(partial: Partial<'a>) -> Self {
        Operand::Partial(partial)
    }
}

impl<'a> From<&Partial<'a>> for Operand<'a> {
    fn from(partial: &Partial<'a>) -> Self {
        Operand::Partial(*partial)
    }
}

/// Returns `true` if the operand is tagged as a partial pattern.
pub fn is_partial(operand: &Operand<'_>) -> bool {
    matches!(operand, Operand::Partial(_))
}

/// Own keys of a container: object fields in order, or array positions.
fn own_keys(value: &Value) -> Vec<Cow<'_, str>> {
    match value {
        Value::Object(map) => map.keys().map(|key| Cow::Borrowed(key.as_str())).collect(),
        Value::Array(items) => (0..items.len()).map(|i| Cow::Owned(i.to_string())).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keys_come_from_template_only() {
        let template = json!({"b": 1, "a": 2});
        let partial = Partial::new(&template);
        assert_eq!(partial.keys(), vec!["b", "a"]);
        assert_eq!(partial.get("a"), Some(&json!(2)));
        assert_eq!(partial.get("z"), None);
    }

    #[test]
    fn array_keys_are_positions() {
        let value = json!(["x", "y"]);
        assert_eq!(Operand::from(&value).keys(), vec!["0", "1"]);
    }

    #[test]
    fn partial_tag() {
        let template = json!({});
        assert!(is_partial(&Partial::new(&template).into()));
        assert!(!is_partial(&Operand::from(&template)));
    }

    #[test]
    fn patterns_are_never_primitive() {
        let template = json!(3);
        assert!(!Operand::from(Partial::new(&template)).is_primitive());
        assert!(Operand::from(&template).is_primitive());
    }

    #[test]
    fn two_patterns_over_one_template_agree() {
        let template = json!({"k": [1]});
        let first = Partial::new(&template);
        let second = Partial::new(&template);
        assert_eq!(first.keys(), second.keys());
        assert!(std::ptr::eq(first.template(), second.template()));
    }
}
