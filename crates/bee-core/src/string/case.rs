//! Case conversion and substring search.
//!
//! Only ASCII letters are transformed; every other character passes through
//! unchanged.

/// Returns `s` with every ASCII letter lowercased.
#[must_use]
pub fn lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Returns `s` with every ASCII letter uppercased.
#[must_use]
pub fn upper(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Lowercases `s`, then uppercases its first character.
///
/// `"test STRING"` becomes `"Test string"`.
#[must_use]
pub fn capital(s: &str) -> String {
    let mut out = s.to_ascii_lowercase();
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}

/// Returns true if `sub` occurs in `s`. An empty `sub` is always contained.
#[inline]
#[must_use]
pub fn contains(s: &str, sub: &str) -> bool {
    s.contains(sub)
}
