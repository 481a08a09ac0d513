#[cfg(feature = "serde")]
use serde::Serialize;

/// A substring shared by two strings along with where it starts in each of
/// them. Offsets are in bytes and always fall on character boundaries.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonSubstring<'a> {
    pub text: &'a str,
    pub left_offset: usize,
    pub right_offset: usize,
}

impl CommonSubstring<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    /// Byte offset just after the substring in the left string.
    #[must_use]
    pub fn left_end(&self) -> usize { self.left_offset + self.text.len() }

    /// Byte offset just after the substring in the right string.
    #[must_use]
    pub fn right_end(&self) -> usize { self.right_offset + self.text.len() }
}

/// Given two strings, returns the longest substring contained in both.
///
/// Characters are compared as whole `char`s, so the result never splits a
/// multi-byte character. If there are multiple candidates of the same length,
/// the one starting first in `left` wins, and then the one starting first in
/// `right`. Returns an empty substring at offset 0 when nothing is shared.
///
/// ## Example
///
/// ```not_rust
/// left:  "abXcd"
/// right: "cdYab"
/// ```
/// > results in "ab" at offset 0 in `left` and offset 3 in `right`
///
/// ```not_rust
/// left:  "ab"
/// right: "xabyab"
/// ```
/// > results in "ab" at offset 0 in `left` and offset 1 in `right`
///
/// Runs in `O(left * right)` time and `O(right)` space.
#[must_use]
pub fn longest_common_substring<'a>(left: &'a str, right: &str) -> CommonSubstring<'a> {
    let left_chars = left.char_indices().collect::<Vec<_>>();
    let right_chars = right.char_indices().collect::<Vec<_>>();

    // `current[j + 1]` is the length of the longest common suffix of the
    // current prefix of `left` and `right[..=j]`.
    let mut previous = vec![0; right_chars.len() + 1];
    let mut current = vec![0; right_chars.len() + 1];

    let mut best_len = 0;
    let mut best_left_end = 0;
    let mut best_right_end = 0;

    for (i, (_, left_char)) in left_chars.iter().enumerate() {
        for (j, (_, right_char)) in right_chars.iter().enumerate() {
            current[j + 1] = if left_char == right_char {
                previous[j] + 1
            } else {
                0
            };

            if current[j + 1] > best_len {
                best_len = current[j + 1];
                best_left_end = i + 1;
                best_right_end = j + 1;
            }
        }

        std::mem::swap(&mut previous, &mut current);
    }

    if best_len == 0 {
        return CommonSubstring {
            text: "",
            left_offset: 0,
            right_offset: 0,
        };
    }

    let left_offset = left_chars[best_left_end - best_len].0;
    let left_end = left_chars
        .get(best_left_end)
        .map_or(left.len(), |(index, _)| *index);

    CommonSubstring {
        text: &left[left_offset..left_end],
        left_offset,
        right_offset: right_chars[best_right_end - best_len].0,
    }
}
