//! Trove core - structural equality and path addressing over JSON values.
//!
//! This crate holds the two primitives the `trove` collection operations are
//! built on:
//!
//! - **Structural equality** with partial patterns: deep comparison of
//!   primitives, arrays and objects, where a [`Partial`] template matches any
//!   candidate that contains its keys.
//! - **Path addressing**: dotted paths with optional bracket indices
//!   (`a.b[2].c`, `list[-1]`) that can read values and write them, creating
//!   missing containers on the way.
//!
//! On top of those sits [`Iteratee`], the uniform selector/predicate used by
//! every operation that takes "something to pick or test items by".
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use trove_core::{build, get, is_equal, Address, Partial};
//!
//! let data = json!({"a": {"b": [10, 20, 30]}});
//! assert_eq!(get(&data, &Address::parse("a.b[-1]")), Some(&json!(30)));
//!
//! let built = build(&Address::parse("a.b[0].c"), json!(5));
//! assert_eq!(built, json!({"a": {"b": [{"c": 5}]}}));
//!
//! let template = json!({"x": 1});
//! assert!(is_equal(Partial::new(&template), &json!({"x": 1, "y": 2})));
//! ```
//!
//! # Failure Semantics
//!
//! Reads, writes and comparisons never fail:
//!
//! - [`get`] returns whatever it reached, or `None` for a missing key
//! - [`put`] creates missing structure and drops writes it cannot place
//! - [`is_equal`] treats mismatched shapes and types as "not equal"
//!
//! # Path Syntax
//!
//! | Path | Meaning |
//! |------|---------|
//! | `""` | the value itself |
//! | `a.b` | field `b` of field `a` |
//! | `list.0` | first item of `list` |
//! | `list.-1` | last item of `list` |
//! | `list[2].name` | field `name` of the third item of `list` |

pub mod access;
pub mod equality;
mod error;
pub mod iteratee;
pub mod partial;
pub mod path;
pub mod put;
pub mod value;

// Re-export public API
pub use access::{get, get_in, has_own};
pub use equality::{is_equal, Equality, KeyOrder};
pub use error::{Result, TroveError};
pub use iteratee::Iteratee;
pub use partial::{is_partial, Operand, Partial};
pub use path::{Address, Step};
pub use put::{build, put};
pub use value::{is_truthy, property_key, Kind};
