//! Render the difference between two strings inline.
//!
//! Common text is printed verbatim while diverging regions are wrapped in a
//! two-hole template, `<(left/right)>` by default:
//!
//! ```
//! use inline_diff::compare;
//!
//! assert_eq!(compare("ABCDEF", "ABCDXYZ"), "ABCD<(EF/XYZ)>");
//! assert_eq!(compare("same", "same"), "");
//! ```

mod alignment;
mod types;
mod utils;

use std::fmt::Debug;

pub use alignment::{Alignment, AlignmentNode, Fragment, align};
pub use types::{
    align_error::AlignError,
    alignment_options::{AlignmentOptions, DEFAULT_MIN_SUBSTR_LEN},
    left_right_format::{DEFAULT_LEFT_RIGHT_FORMAT, LeftRightFormat},
};
pub use utils::{
    longest_common_substring::{CommonSubstring, longest_common_substring},
    side::Side,
};

#[cfg(feature = "wasm")]
pub mod wasm;

/// Compare `left` and `right` using the default [`AlignmentOptions`].
///
/// Returns an empty string when both inputs are equal.
#[must_use]
pub fn compare(left: &str, right: &str) -> String {
    compare_with_options(left, right, &AlignmentOptions::default())
}

/// Compare `left` and `right` and render their differences inline.
///
/// Returns an empty string when both inputs are equal, otherwise the aligned
/// rendering where diverging regions are formatted with the options'
/// [`LeftRightFormat`].
///
/// ```
/// use inline_diff::{AlignmentOptions, compare_with_options};
///
/// let options = AlignmentOptions::default().with_matching_pad_len(5);
/// assert_eq!(
///     compare_with_options("ABCDEF123GHIJKLMNOP", "ABCDEFGHIJKLMNOP", &options),
///     "BCDEF<(123/)>GHIJK"
/// );
/// ```
#[must_use]
pub fn compare_with_options(left: &str, right: &str, options: &AlignmentOptions) -> String {
    if left == right {
        return String::new();
    }

    let rendered = align(left, right, options).render(options.left_right_format());

    log::debug!(
        "Compared {} and {} characters into {} characters of output",
        left.chars().count(),
        right.chars().count(),
        rendered.chars().count()
    );

    rendered
}

/// Same as [`compare_with_options`] but for raw bytes which are decoded as
/// UTF-8 first.
///
/// # Errors
///
/// Returns [`AlignError::InvalidUtf8`] naming the first side which could not
/// be decoded.
pub fn compare_bytes(
    left: &[u8],
    right: &[u8],
    options: &AlignmentOptions,
) -> Result<String, AlignError> {
    let left = utils::decode::decode(left, Side::Left)?;
    let right = utils::decode::decode(right, Side::Right)?;

    Ok(compare_with_options(left, right, options))
}

/// Compare two values through their `Debug` representation.
///
/// Useful as a fallback for leaf values which have no better textual form.
///
/// ```
/// use inline_diff::{AlignmentOptions, compare_debug};
///
/// let options = AlignmentOptions::default();
/// assert_eq!(compare_debug(&[1, 2, 3], &[1, 2, 4], &options), "[1, 2, <(3/4)>]");
/// ```
#[must_use]
pub fn compare_debug<T>(left: &T, right: &T, options: &AlignmentOptions) -> String
where
    T: Debug + ?Sized,
{
    compare_with_options(&format!("{left:?}"), &format!("{right:?}"), options)
}
