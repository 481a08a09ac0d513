mod alignment_node;
mod fragment;
mod infix;

pub use alignment_node::{Alignment, AlignmentNode};
pub use fragment::Fragment;

use crate::{
    AlignmentOptions,
    utils::common_affix::{common_prefix_len, common_suffix_len, first_chars, last_chars},
};

/// Align `left` and `right` into a tree of matching and diverging fragments.
///
/// The common prefix and suffix are stripped first so that
/// `matching_pad_len` only has to be applied to the outermost matching text;
/// the rest is split recursively around shared substrings.
///
/// ```
/// use inline_diff::{AlignmentOptions, LeftRightFormat, align};
///
/// let alignment = align("Look, it's Batman!!!", "Look, it's Superman!!!", &AlignmentOptions::default());
/// assert_eq!(alignment.render(&LeftRightFormat::default()), "Look, it's <(Bat/Super)>man!!!");
/// assert_eq!(alignment.right_text(), "Look, it's Superman!!!");
/// ```
#[must_use]
pub fn align<'a>(left: &'a str, right: &'a str, options: &AlignmentOptions) -> Alignment<'a> {
    if left.is_empty() && right.is_empty() {
        return Fragment::Matched("").into();
    }

    if left.is_empty() || right.is_empty() {
        return Fragment::Divergent { left, right }.into();
    }

    let prefix_len = common_prefix_len(left, right);
    let (prefix, left) = left.split_at(prefix_len);
    let right = &right[prefix_len..];

    let suffix_len = common_suffix_len(left, right);
    let (left, suffix) = left.split_at(left.len() - suffix_len);
    let right = &right[..right.len() - suffix_len];

    let pad = options.matching_pad_len();
    let (prefix, suffix) = if pad > 0 {
        // Keep the context closest to the differences
        (last_chars(prefix, pad), first_chars(suffix, pad))
    } else {
        (prefix, suffix)
    };

    Alignment::node(
        Fragment::Matched(prefix).into(),
        infix::decompose_infix(left, right, options),
        Fragment::Matched(suffix).into(),
    )
}
