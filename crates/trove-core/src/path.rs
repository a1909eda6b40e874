//! Path addresses into nested values.
//!
//! A path is a dot-separated list of segments. Each segment may carry one
//! bracket suffix, `name[index]`, and a purely numeric segment addresses a
//! position. Negative indices count from the end of the container they are
//! applied to, and are resolved at traversal time.
//!
//! ```
//! use trove_core::path::{Address, Step};
//!
//! let address = Address::parse("a.b[-1].c");
//! assert_eq!(address.steps().len(), 3);
//! assert_eq!(address.steps()[1], Step::indexed("b", "-1"));
//! assert_eq!(address.to_string(), "a.b[-1].c");
//! ```

use std::convert::Infallible;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

static BRACKETED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>[^\[\]]*)\[(?P<index>.*)\]$").expect("bracket pattern is valid")
});

/// One step of a path traversal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// A plain key: an object field, or an array position if numeric.
    Key(String),
    /// `name[index]`: read `name`, then `index` from the result.
    Indexed { name: String, index: String },
}

impl Step {
    /// Creates a plain key step.
    pub fn key(name: impl Into<String>) -> Self {
        Step::Key(name.into())
    }

    /// Creates a bracket step.
    pub fn indexed(name: impl Into<String>, index: impl Into<String>) -> Self {
        Step::Indexed {
            name: name.into(),
            index: index.into(),
        }
    }

    fn parse(segment: &str) -> Self {
        match BRACKETED.captures(segment) {
            Some(caps) => {
                let name = &caps["name"];
                let index = &caps["index"];
                if name.is_empty() {
                    Step::key(index)
                } else {
                    Step::indexed(name, index)
                }
            }
            None => Step::key(segment),
        }
    }

    /// Returns the base key of this step.
    pub fn name(&self) -> &str {
        match self {
            Step::Key(name) | Step::Indexed { name, .. } => name,
        }
    }

    /// Returns the bracket index, if this is a bracket step.
    pub fn index(&self) -> Option<&str> {
        match self {
            Step::Key(_) => None,
            Step::Indexed { index, .. } => Some(index),
        }
    }

    /// Returns `true` for a plain step whose key is an integer.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Step::Key(name) if parse_index(name).is_some())
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Key(name) => write!(f, "{}", name),
            Step::Indexed { name, index } => write!(f, "{}[{}]", name, index),
        }
    }
}

/// A parsed path: an immutable, ordered list of steps.
///
/// The empty address denotes the value itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Address {
    steps: Vec<Step>,
}

impl Address {
    /// Parses a path string. Never fails: malformed segments become keys.
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Address::default();
        }
        Address {
            steps: path.split('.').map(Step::parse).collect(),
        }
    }

    /// Creates a single positional step.
    pub fn from_index(index: i64) -> Self {
        Address {
            steps: vec![Step::Key(index.to_string())],
        }
    }

    /// Creates an address from already-parsed steps.
    pub fn from_steps(steps: Vec<Step>) -> Self {
        Address { steps }
    }

    /// Returns the steps in traversal order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns `true` if this is the identity address.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Splits off the final step, returning the parent address and that step.
    pub fn split_last(&self) -> Option<(Address, &Step)> {
        let (last, parent) = self.steps.split_last()?;
        Some((Address::from_steps(parent.to_vec()), last))
    }
}

impl FromStr for Address {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Address::parse(s))
    }
}

impl From<&str> for Address {
    fn from(path: &str) -> Self {
        Address::parse(path)
    }
}

impl From<String> for Address {
    fn from(path: String) -> Self {
        Address::parse(&path)
    }
}

impl From<&String> for Address {
    fn from(path: &String) -> Self {
        Address::parse(path)
    }
}

impl From<&Address> for Address {
    fn from(address: &Address) -> Self {
        address.clone()
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

/// Parses an integer index, allowing a leading minus sign.
pub fn parse_index(key: &str) -> Option<i64> {
    key.parse().ok()
}

/// Resolves a possibly negative index against a container length.
///
/// Returns `None` when a negative index reaches before the start.
pub fn resolve_index(index: i64, len: usize) -> Option<usize> {
    if index >= 0 {
        usize::try_from(index).ok()
    } else {
        let back = usize::try_from(index.unsigned_abs()).ok()?;
        len.checked_sub(back)
    }
}
