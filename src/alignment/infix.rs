use log::trace;

use super::{alignment_node::Alignment, fragment::Fragment};
use crate::{AlignmentOptions, longest_common_substring};

/// Recursively split `left` and `right` around their longest common
/// substring until no remaining pair shares a substring worth keeping.
///
/// ```not_rust
/// left:  "123GHI456"
/// right: "GHI"
/// ```
/// > results in `<(123/)>GHI<(456/)>`
///
/// Each level only searches the text between the previous split points, so
/// the recursion depth is bounded by the number of common regions found.
pub fn decompose_infix<'a>(
    left: &'a str,
    right: &'a str,
    options: &AlignmentOptions,
) -> Alignment<'a> {
    let common = longest_common_substring(left, right);

    if !options.is_common_substring(common.text) {
        trace!(
            "No common substring longer than {} characters between {left:?} and {right:?}",
            options.min_substr_len()
        );
        return Fragment::Divergent { left, right }.into();
    }

    trace!(
        "Splitting {left:?} and {right:?} around {:?}",
        common.text
    );

    Alignment::node(
        decompose_infix(
            &left[..common.left_offset],
            &right[..common.right_offset],
            options,
        ),
        Fragment::Matched(common.text).into(),
        decompose_infix(
            &left[common.left_end()..],
            &right[common.right_end()..],
            options,
        ),
    )
}
