//! Helpers for measuring and trimming the matching ends of two strings. All
//! returned lengths are in bytes but always fall on character boundaries, so
//! they can be used for slicing directly.

/// Byte length of the longest common prefix of `left` and `right`.
pub fn common_prefix_len(left: &str, right: &str) -> usize {
    left.chars()
        .zip(right.chars())
        .take_while(|(left, right)| left == right)
        .map(|(char, _)| char.len_utf8())
        .sum()
}

/// Byte length of the longest common suffix of `left` and `right`.
pub fn common_suffix_len(left: &str, right: &str) -> usize {
    left.chars()
        .rev()
        .zip(right.chars().rev())
        .take_while(|(left, right)| left == right)
        .map(|(char, _)| char.len_utf8())
        .sum()
}

/// The first `count` characters of `text`, or all of it if it's shorter.
pub fn first_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// The last `count` characters of `text`, or all of it if it's shorter.
pub fn last_chars(text: &str, count: usize) -> &str {
    if count == 0 {
        return "";
    }

    match text.char_indices().rev().nth(count - 1) {
        Some((start, _)) => &text[start..],
        None => text,
    }
}
