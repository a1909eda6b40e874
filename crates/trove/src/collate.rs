//! Locale-style string comparison.

use std::cmp::Ordering;

use deunicode::deunicode;

/// Compares two strings the way a human-facing sort would.
///
/// Three levels, each consulted only on a tie at the previous one:
///
/// 1. accent-folded, case-insensitive text (`é` sorts with `e`);
/// 2. case-insensitive text, so accented forms follow plain ones;
/// 3. case, lowercase first.
///
/// ```
/// use std::cmp::Ordering;
/// use trove::locale_compare;
///
/// assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_compare("école", "ecrire"), Ordering::Less);
/// assert_eq!(locale_compare("a", "A"), Ordering::Less);
/// ```
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    deunicode(a)
        .to_lowercase()
        .cmp(&deunicode(b).to_lowercase())
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}
