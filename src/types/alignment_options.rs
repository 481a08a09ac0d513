#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{AlignError, LeftRightFormat};

/// Shared substrings of at most this many characters are ignored by default,
/// which keeps single letters and short words from splitting a divergence.
pub const DEFAULT_MIN_SUBSTR_LEN: usize = 2;

/// Options controlling how two strings are aligned and rendered.
///
/// Missing fields take their default values when deserialising.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentOptions {
    /// The number of matching characters kept next to the outermost
    /// divergences. Matching text further away is dropped from the output.
    /// `0` keeps everything.
    matching_pad_len: usize,

    /// A shared substring must be strictly longer than this many characters
    /// to split a diverging region in two.
    min_substr_len: usize,

    left_right_format: LeftRightFormat,
}

impl AlignmentOptions {
    #[must_use]
    pub fn new(
        matching_pad_len: usize,
        min_substr_len: usize,
        left_right_format: LeftRightFormat,
    ) -> Self {
        Self {
            matching_pad_len,
            min_substr_len,
            left_right_format,
        }
    }

    #[must_use]
    pub fn with_matching_pad_len(self, matching_pad_len: usize) -> Self {
        Self {
            matching_pad_len,
            ..self
        }
    }

    #[must_use]
    pub fn with_min_substr_len(self, min_substr_len: usize) -> Self {
        Self {
            min_substr_len,
            ..self
        }
    }

    #[must_use]
    pub fn with_left_right_format(self, left_right_format: LeftRightFormat) -> Self {
        Self {
            left_right_format,
            ..self
        }
    }

    /// Parse `template` and use it for rendering diverging regions.
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::InvalidTemplate`] if `template` doesn't contain
    /// exactly two `%s` holes.
    pub fn with_template(self, template: &str) -> Result<Self, AlignError> {
        Ok(self.with_left_right_format(LeftRightFormat::new(template)?))
    }

    #[must_use]
    pub fn matching_pad_len(&self) -> usize { self.matching_pad_len }

    #[must_use]
    pub fn min_substr_len(&self) -> usize { self.min_substr_len }

    #[must_use]
    pub fn left_right_format(&self) -> &LeftRightFormat { &self.left_right_format }

    /// Whether `candidate` is worth splitting a diverging region around.
    pub(crate) fn is_common_substring(&self, candidate: &str) -> bool {
        !candidate.is_empty()
            && candidate != " "
            && candidate.chars().count() > self.min_substr_len
    }
}

impl Default for AlignmentOptions {
    fn default() -> Self {
        Self {
            matching_pad_len: 0,
            min_substr_len: DEFAULT_MIN_SUBSTR_LEN,
            left_right_format: LeftRightFormat::default(),
        }
    }
}
