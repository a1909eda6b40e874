//! Slicing and shaping: chunk, drop, compact, split.

use serde_json::Value;
use trove_core::{is_truthy, Iteratee};

use crate::collection::Collection;

impl Collection {
    /// Splits the items into consecutive groups of `size`; the last group
    /// may be shorter. A `size` of zero yields an empty collection.
    pub fn chunk(&self, size: usize) -> Collection {
        if size == 0 {
            return Collection::new();
        }
        self.items
            .chunks(size)
            .map(|chunk| Value::Array(chunk.to_vec()))
            .collect()
    }

    /// Returns everything after the first `n` items.
    pub fn drop(&self, n: usize) -> Collection {
        self.items.iter().skip(n).cloned().collect()
    }

    /// Returns everything before the last `n` items.
    pub fn drop_right(&self, n: usize) -> Collection {
        let keep = self.items.len().saturating_sub(n);
        self.items[..keep].iter().cloned().collect()
    }

    /// Drops leading items while `iteratee` holds.
    pub fn drop_while<'f>(&self, iteratee: impl Into<Iteratee<'f>>) -> Collection {
        let iteratee = iteratee.into();
        self.items
            .iter()
            .skip_while(|item| iteratee.test(item))
            .cloned()
            .collect()
    }

    /// Drops trailing items while `iteratee` holds.
    pub fn drop_while_right<'f>(&self, iteratee: impl Into<Iteratee<'f>>) -> Collection {
        let iteratee = iteratee.into();
        let keep = self
            .items
            .iter()
            .rposition(|item| !iteratee.test(item))
            .map_or(0, |last| last + 1);
        self.items[..keep].iter().cloned().collect()
    }

    /// Every item but the last.
    pub fn initial(&self) -> Collection {
        self.drop_right(1)
    }

    /// Every item but the first.
    pub fn tail(&self) -> Collection {
        self.drop(1)
    }

    /// Keeps truthy items. With `keep_zero`, numeric zero survives too.
    pub fn compact(&self, keep_zero: bool) -> Collection {
        self.items
            .iter()
            .filter(|item| is_truthy(item) || (keep_zero && is_zero(item)))
            .cloned()
            .collect()
    }

    /// Splits every string item on `separator` into an array of parts.
    /// Other items pass through unchanged.
    pub fn split(&self, separator: &str) -> Collection {
        self.items
            .iter()
            .map(|item| match item {
                Value::String(text) => text.split(separator).map(Value::from).collect(),
                other => other.clone(),
            })
            .collect()
    }
}

fn is_zero(value: &Value) -> bool {
    value.as_f64() == Some(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collection(value: Value) -> Collection {
        Collection::from_value(value).unwrap()
    }

    #[test]
    fn chunk_groups() {
        let c = collection(json!([1, 2, 3, 4, 5]));
        assert_eq!(c.chunk(2), json!([[1, 2], [3, 4], [5]]));
        assert_eq!(c.chunk(9), json!([[1, 2, 3, 4, 5]]));
        assert!(c.chunk(0).is_empty());
    }

    #[test]
    fn drop_from_both_ends() {
        let c = collection(json!([1, 2, 3]));
        assert_eq!(c.drop(2), json!([3]));
        assert_eq!(c.drop(5), json!([]));
        assert_eq!(c.drop_right(1), json!([1, 2]));
        assert_eq!(c.drop_right(5), json!([]));
        assert_eq!(c.initial(), json!([1, 2]));
        assert_eq!(c.tail(), json!([2, 3]));
    }

    #[test]
    fn drop_while_stops_at_first_miss() {
        let c = collection(json!([
            {"done": true},
            {"done": false},
            {"done": true}
        ]));
        assert_eq!(c.drop_while("done"), json!([{"done": false}, {"done": true}]));
        assert_eq!(c.reject("done"), json!([{"done": false}]));
        assert_eq!(
            c.drop_while_right(("done", true)),
            json!([{"done": true}, {"done": false}])
        );
    }

    #[test]
    fn drop_while_everything() {
        let c = collection(json!([1, 2]));
        let always = Iteratee::predicate(|_| true);
        assert!(c.drop_while(always).is_empty());
        assert!(c.drop_while_right(Iteratee::predicate(|_| true)).is_empty());
    }

    #[test]
    fn compact_keeps_truthy() {
        let c = collection(json!([0, 1, "", "a", null, false, [], {}, 0.0]));
        assert_eq!(c.compact(false), json!([1, "a", [], {}]));
        assert_eq!(c.compact(true), json!([0, 1, "a", [], {}, 0.0]));
    }

    #[test]
    fn split_strings_only() {
        let c = collection(json!(["a,b", "c", 3]));
        assert_eq!(c.split(","), json!([["a", "b"], ["c"], 3]));
    }
}
