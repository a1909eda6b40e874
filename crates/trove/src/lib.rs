//! Trove - array-extension operations over JSON values.
//!
//! A [`Collection`] is an owned, ordered sequence of [`serde_json::Value`]s
//! with the operations you reach for when massaging loosely structured data:
//!
//! - Grouping and counting by selector (`group_by`, `key_by`, `count_by`)
//! - Deduplication by deep or shallow equality (`uniq`, `duplicates`)
//! - Set algebra (`difference`, `intersection`, `without`)
//! - Stable multi-key sorting with locale-aware string comparison
//! - Zipping collections of collections into rows or nested objects
//! - Random sampling through any [`rand::Rng`]
//!
//! Everything is built on the two primitives from `trove-core`, re-exported
//! here: deep equality with [`Partial`] patterns, and dotted path addressing.
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use trove::{Collection, Dir};
//!
//! let mut tasks = Collection::from_value(json!([
//!     {"title": "Write docs", "priority": 3, "tags": ["docs"]},
//!     {"title": "Fix bug", "priority": 5, "tags": ["bug", "urgent"]},
//!     {"title": "Triage", "priority": 5, "tags": []},
//! ]))
//! .unwrap();
//!
//! tasks.sort_by(["priority", "title"], &[Dir::Desc, Dir::Asc]);
//! assert_eq!(tasks.get_each("title"), json!(["Fix bug", "Triage", "Write docs"]));
//!
//! let by_priority = tasks.group_by("priority");
//! assert_eq!(by_priority["5"].as_array().map(Vec::len), Some(2));
//!
//! assert_eq!(tasks.at("0.tags[-1]"), Some(&json!("urgent")));
//! ```
//!
//! # Iteratees
//!
//! Methods that select or test items by "something" take
//! `impl Into<Iteratee>`:
//!
//! | Argument | Meaning |
//! |----------|---------|
//! | `"a.b"` | the value at path `a.b` (or whether it exists) |
//! | `("k", v)` | whether the item's `k` equals `v` |
//! | `json!({...})` | whether the item partially matches the object |
//! | `Iteratee::func(f)` | whatever `f` returns |
//!
//! # Mutation
//!
//! Methods taking `&mut self` (`sort_by`, `replace`, `remove`, `splice`,
//! `concat`, `clear`, `deep_replace`) edit in place. Everything else returns
//! a new collection and leaves the receiver untouched.

mod collate;
mod collection;
mod dedupe;
mod edit;
mod group;
mod ordering;
mod sample;
mod search;
mod set;
mod slice;
mod zip;

// Re-export public API
pub use collate::locale_compare;
pub use collection::Collection;
pub use ordering::{compare_by_orderings, compare_values, Dir, OrderBy};
pub use trove_core::{
    build, get, get_in, has_own, is_equal, is_partial, is_truthy, property_key, put, Address,
    Equality, Iteratee, KeyOrder, Kind, Operand, Partial, Result, Step, TroveError,
};
