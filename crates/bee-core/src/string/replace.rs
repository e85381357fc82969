//! Single and multi-pattern replacement.
//!
//! Matches are found left to right in the text as it stands; inserted
//! replacement text is never searched again by the same pattern.

use crate::error::StrError;

/// Replaces every non-overlapping occurrence of `from` with `to`, or only the
/// first one when `only_first` is set.
///
/// An empty `from` returns `s` unchanged.
#[must_use]
pub fn replace(s: &str, from: &str, to: &str, only_first: bool) -> String {
    if from.is_empty() {
        return s.to_string();
    }
    if only_first {
        s.replacen(from, to, 1)
    } else {
        s.replace(from, to)
    }
}

/// Applies each `from[i] -> to[i]` replacement at most once, in index order.
///
/// Each pattern replaces its first occurrence at or after the anchor. The
/// anchor starts at 0; when `sorted` is set it moves to the position of every
/// match, so searches never go backwards and a pattern that only occurs before
/// an earlier match is not applied. Without `sorted` every search restarts at
/// the beginning. The first pattern that is not found ends the pass, so later
/// pairs are left unapplied. Empty patterns are skipped and leave the anchor
/// where it was.
///
/// Lists of different lengths, or two empty lists, return `s` unchanged; see
/// [`try_replace_many`] for the strict form.
#[must_use]
pub fn replace_many<F: AsRef<str>, T: AsRef<str>>(
    s: &str,
    from: &[F],
    to: &[T],
    sorted: bool,
) -> String {
    if from.len() != to.len() || from.is_empty() {
        return s.to_string();
    }
    apply_pairs(s, from, to, sorted)
}

/// Strict [`replace_many`]: degenerate replacement lists are reported.
pub fn try_replace_many<F: AsRef<str>, T: AsRef<str>>(
    s: &str,
    from: &[F],
    to: &[T],
    sorted: bool,
) -> Result<String, StrError> {
    if from.len() != to.len() {
        return Err(StrError::MismatchedLengths {
            from: from.len(),
            to: to.len(),
        });
    }
    if from.is_empty() {
        return Err(StrError::EmptyPatterns);
    }
    Ok(apply_pairs(s, from, to, sorted))
}

fn apply_pairs<F: AsRef<str>, T: AsRef<str>>(s: &str, from: &[F], to: &[T], sorted: bool) -> String {
    let mut out = s.to_string();
    let mut anchor = 0usize;

    for (pattern, replacement) in from.iter().zip(to) {
        let pattern = pattern.as_ref();
        if pattern.is_empty() {
            continue;
        }
        // `anchor` is always a previous match start, hence a char boundary.
        let Some(offset) = out.get(anchor..).and_then(|tail| tail.find(pattern)) else {
            break;
        };
        let pos = anchor + offset;
        out.replace_range(pos..pos + pattern.len(), replacement.as_ref());
        if sorted {
            anchor = pos;
        }
    }
    out
}
