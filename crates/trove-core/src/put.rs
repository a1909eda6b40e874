//! Writing values by path.
//!
//! [`put`] walks an address and creates whatever intermediate containers
//! are missing on the way. Existing containers are reused, never replaced,
//! so repeated writes under a shared prefix build up one structure.
//!
//! A bracket step `name[index]` creates `name` as an array. The slot at
//! `index` becomes an array when the following step is numeric and an
//! object otherwise. A plain intermediate step always creates an object.

use serde_json::{Map, Value};

use crate::path::{parse_index, resolve_index, Address, Step};
use crate::value::{is_container, Kind};

/// How far past the end of an array a write may land.
///
/// Writing beyond the end pads with `null`; writes further out than this
/// are dropped rather than allocating the padding.
pub const MAX_PADDING: usize = 1 << 16;

/// Writes `value` at `address` inside `root` and returns `root`.
///
/// Writes that cannot be placed are dropped: a text key into an array, a
/// negative index before the start, an index more than [`MAX_PADDING`]
/// past the end, or a primitive root.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use trove_core::put::put;
///
/// let mut root = json!({"a": {"keep": true}});
/// put(&mut root, &"a.b[0].c".into(), json!(5));
/// assert_eq!(root, json!({"a": {"keep": true, "b": [{"c": 5}]}}));
/// ```
pub fn put<'r>(root: &'r mut Value, address: &Address, value: Value) -> &'r mut Value {
    write(root, address.steps(), value);
    root
}

/// Builds a fresh object holding `value` at `address`.
///
/// ```
/// use serde_json::json;
/// use trove_core::put::build;
///
/// assert_eq!(build(&"a.b[0].c".into(), json!(5)), json!({"a": {"b": [{"c": 5}]}}));
/// ```
pub fn build(address: &Address, value: Value) -> Value {
    let mut root = Value::Object(Map::new());
    put(&mut root, address, value);
    root
}

fn write(root: &mut Value, steps: &[Step], value: Value) {
    let Some((last, init)) = steps.split_last() else {
        *root = value;
        return;
    };

    let mut current = root;
    for (i, step) in init.iter().enumerate() {
        let following = &steps[i + 1];
        let descended = match step {
            Step::Key(name) => ensure(current, name, empty_object()),
            Step::Indexed { name, index } => {
                let fresh = if following.is_numeric() {
                    Value::Array(Vec::new())
                } else {
                    empty_object()
                };
                ensure(current, name, Value::Array(Vec::new()))
                    .and_then(|base| ensure(base, index, fresh))
            }
        };
        match descended {
            Some(container) => current = container,
            None => return,
        }
    }

    match last {
        Step::Key(name) => assign(current, name, value),
        Step::Indexed { name, index } => {
            if let Some(base) = ensure(current, name, Value::Array(Vec::new())) {
                assign(base, index, value);
            }
        }
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Descends into `key`, replacing a missing or primitive slot with `fresh`.
fn ensure<'v>(container: &'v mut Value, key: &str, fresh: Value) -> Option<&'v mut Value> {
    let slot = slot_mut(container, key)?;
    if !is_container(slot) {
        *slot = fresh;
    }
    Some(slot)
}

fn assign(container: &mut Value, key: &str, value: Value) {
    if let Some(slot) = slot_mut(container, key) {
        *slot = value;
    }
}

/// Returns the slot for `key`, creating it (as `null`) if absent.
fn slot_mut<'v>(container: &'v mut Value, key: &str) -> Option<&'v mut Value> {
    match container {
        Value::Object(map) => Some(map.entry(key).or_insert(Value::Null)),
        Value::Array(items) => {
            let Some(raw) = parse_index(key) else {
                tracing::debug!(key, "dropping write: text key into an array");
                return None;
            };
            let len = items.len();
            let Some(index) = resolve_index(raw, len) else {
                tracing::debug!(index = raw, len, "dropping write: index before start");
                return None;
            };
            if index.saturating_sub(len) > MAX_PADDING {
                tracing::debug!(index, len, "dropping write: index too far past the end");
                return None;
            }
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            items.get_mut(index)
        }
        other => {
            tracing::debug!(key, kind = %Kind::of(other), "dropping write: not a container");
            None
        }
    }
}
