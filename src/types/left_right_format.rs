use std::{fmt::Display, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::AlignError;

/// The template used when no other is configured.
pub const DEFAULT_LEFT_RIGHT_FORMAT: &str = "<(%s/%s)>";

const HOLE: &str = "%s";

/// A validated template with exactly two `%s` holes used for rendering
/// diverging regions. The first hole receives the left text, the second one
/// the right text.
///
/// The template is split around its holes once, on construction, so rendering
/// never has to parse it again.
///
/// ```
/// use inline_diff::LeftRightFormat;
///
/// let format: LeftRightFormat = "{%s|%s}".parse().unwrap();
/// assert_eq!(format.format("old", "new"), "{old|new}");
///
/// assert!("%s only".parse::<LeftRightFormat>().is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeftRightFormat {
    template: String,
    before: String,
    between: String,
    after: String,
}

impl LeftRightFormat {
    /// Parse `template`.
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::InvalidTemplate`] if `template` doesn't contain
    /// exactly two `%s` holes.
    pub fn new(template: &str) -> Result<Self, AlignError> {
        let parts = template.split(HOLE).collect::<Vec<_>>();

        let [before, between, after] = parts.as_slice() else {
            return Err(AlignError::InvalidTemplate {
                template: template.to_owned(),
                holes: parts.len() - 1,
            });
        };

        Ok(Self {
            template: template.to_owned(),
            before: (*before).to_owned(),
            between: (*between).to_owned(),
            after: (*after).to_owned(),
        })
    }

    #[must_use]
    pub fn template(&self) -> &str { &self.template }

    /// Fill the holes with `left` and `right`.
    #[must_use]
    pub fn format(&self, left: &str, right: &str) -> String {
        let mut buffer = String::new();
        self.format_into(&mut buffer, left, right);
        buffer
    }

    /// Same as [`LeftRightFormat::format`] but appends to `buffer`.
    pub fn format_into(&self, buffer: &mut String, left: &str, right: &str) {
        buffer.reserve(
            self.before.len() + left.len() + self.between.len() + right.len() + self.after.len(),
        );
        buffer.push_str(&self.before);
        buffer.push_str(left);
        buffer.push_str(&self.between);
        buffer.push_str(right);
        buffer.push_str(&self.after);
    }
}

impl Default for LeftRightFormat {
    fn default() -> Self {
        Self {
            template: DEFAULT_LEFT_RIGHT_FORMAT.to_owned(),
            before: "<(".to_owned(),
            between: "/".to_owned(),
            after: ")>".to_owned(),
        }
    }
}

impl FromStr for LeftRightFormat {
    type Err = AlignError;

    fn from_str(template: &str) -> Result<Self, Self::Err> { Self::new(template) }
}

impl TryFrom<&str> for LeftRightFormat {
    type Error = AlignError;

    fn try_from(template: &str) -> Result<Self, Self::Error> { Self::new(template) }
}

impl TryFrom<String> for LeftRightFormat {
    type Error = AlignError;

    fn try_from(template: String) -> Result<Self, Self::Error> { Self::new(&template) }
}

impl From<LeftRightFormat> for String {
    fn from(format: LeftRightFormat) -> Self { format.template }
}

impl Display for LeftRightFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.template)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_default_matches_parsed_default() {
        assert_eq!(
            LeftRightFormat::default(),
            LeftRightFormat::new(DEFAULT_LEFT_RIGHT_FORMAT).unwrap()
        );
        assert_eq!(LeftRightFormat::default().format("ab", "c"), "<(ab/c)>");
    }

    #[test_case("{%s|%s}", "old", "new", "{old|new}" ; "curly braces")]
    #[test_case("%s%s", "old", "new", "oldnew" ; "no decoration")]
    #[test_case("-%s- +%s+", "", "new", "-- +new+" ; "empty left")]
    #[test_case("[%s→%s]", "ő", "ü", "[ő→ü]" ; "unicode")]
    fn test_format(template: &str, left: &str, right: &str, expected: &str) {
        let format = LeftRightFormat::new(template).unwrap();
        assert_eq!(format.format(left, right), expected);
        assert_eq!(format.template(), template);
        assert_eq!(format.to_string(), template);
    }

    #[test_case("", 0 ; "empty")]
    #[test_case("<(%s)>", 1 ; "one hole")]
    #[test_case("%s/%s/%s", 3 ; "three holes")]
    #[test_case("<(%d/%d)>", 0 ; "wrong verb")]
    fn test_invalid_template(template: &str, holes: usize) {
        assert_eq!(
            template.parse::<LeftRightFormat>(),
            Err(AlignError::InvalidTemplate {
                template: template.to_owned(),
                holes,
            })
        );
    }

    #[test]
    fn test_format_into_appends() {
        let mut buffer = "prefix ".to_owned();
        LeftRightFormat::default().format_into(&mut buffer, "a", "b");
        assert_eq!(buffer, "prefix <(a/b)>");
    }
}
