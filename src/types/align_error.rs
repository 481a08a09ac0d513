use thiserror::Error;

use crate::Side;

/// Error type for invalid configuration and undecodable input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// The divergence template doesn't have exactly two `%s` holes
    #[error(
        "Invalid left/right format {template:?}: expected exactly 2 `%s` placeholders but found \
         {holes}"
    )]
    InvalidTemplate {
        /// The rejected template
        template: String,
        /// The number of `%s` placeholders found in it
        holes: usize,
    },

    /// One of the inputs isn't valid UTF-8
    #[error("Invalid UTF-8 in the {side} input after {valid_up_to} valid bytes")]
    InvalidUtf8 {
        /// Which input failed to decode
        side: Side,
        /// The length of the longest valid UTF-8 prefix in bytes
        valid_up_to: usize,
    },
}
