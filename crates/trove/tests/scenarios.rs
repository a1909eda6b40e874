//! End-to-end scenarios across the public API.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use trove::{build, get, is_equal, Address, Collection, Dir, Equality, Iteratee, KeyOrder, Partial};

fn collection(value: Value) -> Collection {
    Collection::from_value(value).unwrap()
}

// ============================================================================
// Path engine
// ============================================================================

#[test]
fn negative_bracket_index_reads_last() {
    let data = json!({"a": {"b": [10, 20, 30]}});
    assert_eq!(get(&data, &Address::parse("a.b[-1]")), Some(&json!(30)));
}

#[test]
fn build_creates_arrays_and_objects() {
    let built = build(&Address::parse("a.b[0].c"), json!(5));
    assert_eq!(built, json!({"a": {"b": [{"c": 5}]}}));
}

#[test]
fn reads_short_circuit_on_primitives() {
    let data = json!({"a": 1});
    assert_eq!(get(&data, &Address::parse("a.b.c")), Some(&json!(1)));
    assert_eq!(get(&data, &Address::parse("z.b")), None);
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn partial_template_matches_superset_only() {
    let template = json!({"x": 1});
    assert!(is_equal(Partial::new(&template), &json!({"x": 1, "y": 2})));
    assert!(!is_equal(Partial::new(&template), &json!({"y": 2})));
}

#[test]
fn key_order_policy() {
    let a = json!({"a": 1, "b": 2});
    let b = json!({"b": 2, "a": 1});
    assert!(!is_equal(&a, &b));
    assert!(Equality::new().with_key_order(KeyOrder::Ignore).is_equal(&a, &b));
}

// ============================================================================
// Collection operations
// ============================================================================

#[test]
fn zip_object_deep_nests_paths() {
    let c = collection(json!([["a.b", "a.c"], [1, 2]]));
    assert_eq!(c.zip_object_deep(), json!({"a": {"b": 1, "c": 2}}));
}

#[test]
fn difference_uses_deep_equality() {
    let c = collection(json!([1, 2, 3, {"x": 1}]));
    assert_eq!(c.difference(&[json!(2), json!({"x": 1})]), json!([1, 3]));
}

#[test]
fn intersection_of_sub_collections() {
    let c = collection(json!([[1, 2, 3], [2, 3, 4]]));
    assert_eq!(c.intersection(), json!([2, 3]));
}

#[test]
fn multi_key_sort_breaks_ties_descending() {
    let mut c = collection(json!([
        {"k1": 1, "k2": "a"},
        {"k1": 0, "k2": "z"},
        {"k1": 1, "k2": "b"},
        {"k1": 0, "k2": "y"}
    ]));
    c.sort_by(["k1", "k2"], &[Dir::Asc, Dir::Desc]);
    assert_eq!(c.get_each("k2"), json!(["z", "y", "b", "a"]));
}

#[test]
fn partial_patterns_drive_search() {
    let c = collection(json!([
        {"id": 1, "role": "admin", "name": "ada"},
        {"id": 2, "role": "user", "name": "bob"}
    ]));
    let pattern = json!({"role": "user"});
    assert_eq!(c.deep_index_of(Collection::partial(&pattern), 0), Some(1));
    assert_eq!(c.count(pattern.clone()), 1);
    assert_eq!(c.reject(pattern).get_each("name"), json!(["ada"]));
}

#[test]
fn editing_chains_in_place() {
    let mut c = collection(json!([1, 2, 3]));
    c.concat([json!([4, 5])])
        .remove(&json!(2), 1)
        .replace(&json!(5), json!("five"), false);
    assert_eq!(c, json!([1, 3, 4, "five"]));
}

#[test]
fn derived_collections_leave_receiver_alone() {
    let c = collection(json!([3, 1, 0, 2]));
    let _ = c.compact(false);
    let _ = c.drop(2);
    let _ = c.uniq();
    assert_eq!(c, json!([3, 1, 0, 2]));
}

#[test]
fn grouping_with_function_selector() {
    let c = collection(json!(["one", "two", "three"]));
    let by_len = c.group_by(Iteratee::func(|v: &Value| v.as_str().map_or(0, str::len) as u64));
    assert_eq!(by_len["3"], json!(["one", "two"]));
    assert_eq!(by_len["5"], json!(["three"]));
}

#[test]
fn json_round_trip_through_text() {
    let c = Collection::from_json(r#"[{"a":[1,2]},null,"x"]"#).unwrap();
    let again = Collection::from_json(&c.json().unwrap()).unwrap();
    assert_eq!(c, again);
}

#[test]
fn seeded_sampling_is_reproducible() {
    let c = collection(json!(["a", "b", "c", "d", "e"]));
    let first = c.sample(&mut StdRng::seed_from_u64(21), 3, true);
    let second = c.sample(&mut StdRng::seed_from_u64(21), 3, true);
    assert_eq!(first, second);
    assert_eq!(first.uniq().len(), 3);
}
