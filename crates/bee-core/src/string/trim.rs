//! Trimming by character set, and cutting/slicing by character count.

/// Characters removed by the `*_default` trim helpers.
pub const DEFAULT_TRIM_SET: &str = " \t\r\n";

/// Removes leading and trailing characters that appear in `charset`.
///
/// `charset` is a set of individual characters, not a pattern:
/// `trim("***aaa***", "*")` and `trim("***aaa***", "***")` are both `"aaa"`.
#[must_use]
pub fn trim(s: &str, charset: &str) -> String {
    s.trim_matches(|c: char| charset.contains(c)).to_string()
}

/// Removes leading characters that appear in `charset`.
#[must_use]
pub fn trim_left(s: &str, charset: &str) -> String {
    s.trim_start_matches(|c: char| charset.contains(c)).to_string()
}

/// Removes trailing characters that appear in `charset`.
#[must_use]
pub fn trim_right(s: &str, charset: &str) -> String {
    s.trim_end_matches(|c: char| charset.contains(c)).to_string()
}

/// [`trim`] with [`DEFAULT_TRIM_SET`].
#[must_use]
pub fn trim_default(s: &str) -> String {
    trim(s, DEFAULT_TRIM_SET)
}

/// [`trim_left`] with [`DEFAULT_TRIM_SET`].
#[must_use]
pub fn trim_left_default(s: &str) -> String {
    trim_left(s, DEFAULT_TRIM_SET)
}

/// [`trim_right`] with [`DEFAULT_TRIM_SET`].
#[must_use]
pub fn trim_right_default(s: &str) -> String {
    trim_right(s, DEFAULT_TRIM_SET)
}

/// Removes `count` characters from both ends of `s`.
///
/// Returns `""` when `2 * count` reaches the character length.
#[must_use]
pub fn cut(s: &str, count: usize) -> String {
    let len = s.chars().count();
    match count.checked_mul(2) {
        Some(both) if both < len => slice(s, count, len - count),
        _ => String::new(),
    }
}

/// Removes the first `count` characters of `s`, clamping to `""`.
#[must_use]
pub fn cut_left(s: &str, count: usize) -> String {
    match s.char_indices().nth(count) {
        Some((at, _)) => s[at..].to_string(),
        None => String::new(),
    }
}

/// Removes the last `count` characters of `s`, clamping to `""`.
#[must_use]
pub fn cut_right(s: &str, count: usize) -> String {
    let len = s.chars().count();
    slice(s, 0, len.saturating_sub(count))
}

/// Returns the characters of `s` in `[start, end)`.
///
/// `end` is clamped to the character length; `start >= end` yields `""`.
#[must_use]
pub fn slice(s: &str, start: usize, end: usize) -> String {
    if start >= end {
        return String::new();
    }
    s.chars().skip(start).take(end - start).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_default_set() {
        assert_eq!(trim_default(" aaa "), "aaa");
        assert_eq!(trim_left_default(" aaa "), "aaa ");
        assert_eq!(trim_right_default(" aaa "), " aaa");
        assert_eq!(trim_default("\t\r\n aaa \n"), "aaa");
    }

    #[test]
    fn test_trim_custom_set() {
        assert_eq!(trim("***aaa***", "***"), "aaa");
        assert_eq!(trim("-=x=-", "=-"), "x");
        assert_eq!(trim("-=x=-", ""), "-=x=-");
    }

    #[test]
    fn test_trim_all_removable() {
        assert_eq!(trim_default(" \t\r\n "), "");
        assert_eq!(trim_left_default("   "), "");
        assert_eq!(trim_right_default("   "), "");
        assert_eq!(trim_default(""), "");
    }

    #[test]
    fn test_cut() {
        assert_eq!(cut(" / a / b / c / ", 3), "a / b / c");
        assert_eq!(cut_left(" / a / b / c", 3), "a / b / c");
        assert_eq!(cut_right("a / b / c / ", 3), "a / b / c");
        assert_eq!(cut("abc", 0), "abc");
    }

    #[test]
    fn test_cut_clamps_to_empty() {
        for count in [3, 4, 100, usize::MAX] {
            assert_eq!(cut_left("abc", count), "");
            assert_eq!(cut_right("abc", count), "");
            assert_eq!(cut("abc", count), "");
        }
        assert_eq!(cut("abcd", 2), "");
        assert_eq!(cut("abcde", 2), "c");
    }

    #[test]
    fn test_cut_counts_characters() {
        assert_eq!(cut_left("·ab", 1), "ab");
        assert_eq!(cut_right("ab·", 1), "ab");
        assert_eq!(cut("·x·", 1), "x");
    }

    #[test]
    fn test_slice() {
        assert_eq!(slice("abcdef", 1, 4), "bcd");
        assert_eq!(slice("abcdef", 2, 100), "cdef");
        assert_eq!(slice("abcdef", 4, 2), "");
        assert_eq!(slice("abcdef", 6, 9), "");
    }
}
