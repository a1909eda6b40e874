//! Property-based tests for collection operations.

use proptest::prelude::*;
use serde_json::{json, Value};
use trove::{compare_values, Collection, Dir};

// ============================================================================
// Strategies
// ============================================================================

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-50i64..50).prop_map(Value::from),
        "[a-c]{0,3}".prop_map(Value::from),
    ]
}

fn json_item() -> impl Strategy<Value = Value> {
    json_leaf().prop_recursive(2, 12, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            prop::collection::btree_map("[a-b]", inner, 0..3)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn collection() -> impl Strategy<Value = Collection> {
    prop::collection::vec(json_item(), 0..12).prop_map(Collection::from)
}

fn records() -> impl Strategy<Value = Collection> {
    prop::collection::vec((-5i64..5, -5i64..5), 0..16).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(k1, k2)| json!({"k1": k1, "k2": k2}))
            .collect::<Collection>()
    })
}

fn mixed_key() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        (0i64..20).prop_map(Value::from),
        (0i64..20).prop_map(|n| Value::from(n.to_string())),
        (0i64..20).prop_map(|n| Value::from(format!("x{}", n))),
    ]
}

fn mixed_records() -> impl Strategy<Value = Collection> {
    prop::collection::vec(mixed_key(), 0..40).prop_map(|keys| {
        keys.into_iter()
            .map(|k| json!({ "k": k }))
            .collect::<Collection>()
    })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Deduplicating twice changes nothing.
    #[test]
    fn uniq_is_idempotent(c in collection()) {
        let once = c.uniq();
        prop_assert_eq!(once.uniq(), once);
    }

    /// A deduplicated collection has no deep duplicates left.
    #[test]
    fn uniq_leaves_no_duplicates(c in collection()) {
        prop_assert!(c.uniq().deep_duplicates(true).is_empty());
    }

    /// Every item survives `uniq` in some deep-equal form.
    #[test]
    fn uniq_keeps_every_value(c in collection()) {
        let unique = c.uniq();
        for item in c.iter() {
            prop_assert!(unique.deep_includes(item));
        }
    }

    /// Sorting by a key yields a non-decreasing sequence in that key.
    #[test]
    fn sort_ascending_is_ordered(mut c in records()) {
        c.sort_by(["k1"], &[Dir::Asc]);
        let keys = c.get_each("k1");
        for pair in keys.windows(2) {
            prop_assert_ne!(compare_values(&pair[0], &pair[1]), std::cmp::Ordering::Greater);
        }
    }

    /// Text, numbers and nulls mixed in one key still sort into order.
    #[test]
    fn sort_mixed_keys_is_ordered(mut c in mixed_records(), desc in any::<bool>()) {
        let dir = if desc { Dir::Desc } else { Dir::Asc };
        c.sort_by(["k"], &[dir]);
        let keys = c.get_each("k");
        for pair in keys.windows(2) {
            let ordering = dir.apply(compare_values(&pair[0], &pair[1]));
            prop_assert_ne!(ordering, std::cmp::Ordering::Greater);
        }
    }

    /// Ties on the first key are broken by the second, descending.
    #[test]
    fn sort_breaks_ties_with_second_key(mut c in records()) {
        c.sort_by(["k1", "k2"], &[Dir::Asc, Dir::Desc]);
        for pair in c.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a["k1"].as_i64() <= b["k1"].as_i64());
            if a["k1"] == b["k1"] {
                prop_assert!(a["k2"].as_i64() >= b["k2"].as_i64());
            }
        }
    }

    /// Sorting keeps the same items.
    #[test]
    fn sort_is_a_permutation(mut c in records()) {
        let before = c.copy();
        c.sort_by(["k2"], &[Dir::Desc]);
        prop_assert_eq!(c.len(), before.len());
        prop_assert!(c.difference(&before).is_empty());
        prop_assert!(before.difference(&c).is_empty());
    }

    /// Difference never yields anything found in the argument.
    #[test]
    fn difference_excludes_argument(a in collection(), b in collection()) {
        let diff = a.difference(&b);
        for item in diff.iter() {
            prop_assert!(!b.deep_includes(item));
        }
    }

    /// Chunks concatenate back to the original.
    #[test]
    fn chunks_reassemble(c in collection(), size in 1usize..5) {
        let mut joined = Collection::new();
        joined.concat(c.chunk(size));
        prop_assert_eq!(joined, c);
    }
}
