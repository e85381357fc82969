//! Splitting and joining on a string delimiter.

use crate::error::StrError;

/// Splits `s` at every non-overlapping occurrence of `delim`.
///
/// Leading and interior empty pieces are kept, but a string ending exactly on
/// a delimiter does not produce a trailing empty piece:
///
/// - `split("1,2,3", ",")` is `["1", "2", "3"]`
/// - `split("a,b,", ",")` is `["a", "b"]`
/// - `split(",a", ",")` is `["", "a"]`
/// - `split("", ",")` is `[]`
///
/// An empty `delim` yields an empty vector.
#[must_use]
pub fn split(s: &str, delim: &str) -> Vec<String> {
    if delim.is_empty() {
        return Vec::new();
    }
    let mut parts: Vec<String> = s.split(delim).map(String::from).collect();
    if parts.last().is_some_and(String::is_empty) {
        parts.pop();
    }
    parts
}

/// Strict [`split`]: an empty delimiter is an error instead of `[]`.
pub fn try_split(s: &str, delim: &str) -> Result<Vec<String>, StrError> {
    if delim.is_empty() {
        return Err(StrError::EmptyDelimiter);
    }
    Ok(split(s, delim))
}

/// Joins `parts` with `delim` between each pair.
///
/// Empty `parts` and an empty `delim` both yield `""`. Concatenating without
/// a separator is `parts.concat()`.
#[must_use]
pub fn join<S: AsRef<str>>(parts: &[S], delim: &str) -> String {
    if parts.is_empty() || delim.is_empty() {
        return String::new();
    }
    join_unchecked(parts, delim)
}

/// Strict [`join`]: an empty delimiter is an error; empty `parts` is `Ok("")`.
pub fn try_join<S: AsRef<str>>(parts: &[S], delim: &str) -> Result<String, StrError> {
    if delim.is_empty() {
        return Err(StrError::EmptyDelimiter);
    }
    Ok(join_unchecked(parts, delim))
}

fn join_unchecked<S: AsRef<str>>(parts: &[S], delim: &str) -> String {
    let body: usize = parts.iter().map(|p| p.as_ref().len()).sum();
    let mut out = String::with_capacity(body + delim.len() * parts.len().saturating_sub(1));
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push_str(delim);
        }
        out.push_str(part.as_ref());
    }
    out
}
