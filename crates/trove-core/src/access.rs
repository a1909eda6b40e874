//! Reading values by path.
//!
//! Reads are best effort: a missing key yields `None`, and reaching a
//! primitive before the path is exhausted yields that primitive as-is.

use serde_json::Value;

use crate::path::{parse_index, resolve_index, Address, Step};
use crate::value::is_container;

/// Reads the value at `address`, starting from `root`.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use trove_core::access::get;
///
/// let data = json!({"a": {"b": [10, 20, 30]}});
/// assert_eq!(get(&data, &"a.b[-1]".into()), Some(&json!(30)));
/// assert_eq!(get(&data, &"a.b.0".into()), Some(&json!(10)));
/// assert_eq!(get(&data, &"a.x".into()), None);
/// ```
pub fn get<'v>(root: &'v Value, address: &Address) -> Option<&'v Value> {
    descend(root, address.steps())
}

/// Reads the value at `address`, treating `items` as the root sequence.
///
/// The identity address yields `None`, since a slice is not a value.
pub fn get_in<'v>(items: &'v [Value], address: &Address) -> Option<&'v Value> {
    let (first, rest) = address.steps().split_first()?;
    let reached = match first {
        Step::Key(name) => slot(items, name)?,
        Step::Indexed { name, index } => {
            let base = slot(items, name)?;
            if !is_container(base) {
                return Some(base);
            }
            child(base, index)?
        }
    };
    descend(reached, rest)
}

/// Reports whether the final step of `address` is an own property of its
/// parent.
///
/// Object fields are own when present; array positions are own when in
/// bounds, with negative positions counted from the end.
pub fn has_own(root: &Value, address: &Address) -> bool {
    let Some((parent, last)) = address.split_last() else {
        return false;
    };
    let Some(parent) = get(root, &parent) else {
        return false;
    };
    match last {
        Step::Key(name) => owns(parent, name),
        Step::Indexed { name, index } => child(parent, name).is_some_and(|base| owns(base, index)),
    }
}

fn descend<'v>(mut current: &'v Value, steps: &[Step]) -> Option<&'v Value> {
    for step in steps {
        if !is_container(current) {
            return Some(current);
        }
        current = match step {
            Step::Key(name) => child(current, name)?,
            Step::Indexed { name, index } => {
                let base = child(current, name)?;
                if !is_container(base) {
                    return Some(base);
                }
                child(base, index)?
            }
        };
    }
    Some(current)
}

/// Looks up one key in a container.
pub(crate) fn child<'v>(container: &'v Value, key: &str) -> Option<&'v Value> {
    match container {
        Value::Object(map) => map.get(key),
        Value::Array(items) => slot(items, key),
        _ => None,
    }
}

fn slot<'v>(items: &'v [Value], key: &str) -> Option<&'v Value> {
    let index = resolve_index(parse_index(key)?, items.len())?;
    items.get(index)
}

fn owns(container: &Value, key: &str) -> bool {
    match container {
        Value::Object(map) => map.contains_key(key),
        Value::Array(items) => slot(items, key).is_some(),
        _ => false,
    }
}
