use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{LeftRightFormat, Side};

/// A leaf of an [`crate::Alignment`]: either text present in both inputs or a
/// pair of diverging texts.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Text found in both inputs, rendered verbatim.
    Matched(&'a str),

    /// Text only found in one of the inputs. Either side may be empty, which
    /// represents a pure insertion or deletion.
    Divergent { left: &'a str, right: &'a str },
}

impl<'a> Fragment<'a> {
    #[must_use]
    pub fn is_matched(&self) -> bool { matches!(self, Fragment::Matched(_)) }

    #[must_use]
    pub fn is_divergent(&self) -> bool { matches!(self, Fragment::Divergent { .. }) }

    /// Whether the fragment renders as an empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Fragment::Matched(text) => text.is_empty(),
            Fragment::Divergent { left, right } => left.is_empty() && right.is_empty(),
        }
    }

    /// The text this fragment contributes to the given input.
    #[must_use]
    pub fn text(&self, side: Side) -> &'a str {
        match *self {
            Fragment::Matched(text) => text,
            Fragment::Divergent { left, right } => side.select(left, right),
        }
    }

    #[must_use]
    pub fn render(&self, format: &LeftRightFormat) -> String {
        let mut buffer = String::new();
        self.render_into(&mut buffer, format);
        buffer
    }

    /// Append the rendered fragment to `buffer`. A divergent fragment with two
    /// empty sides contributes nothing rather than an empty bracket pair.
    pub fn render_into(&self, buffer: &mut String, format: &LeftRightFormat) {
        match *self {
            Fragment::Matched(text) => buffer.push_str(text),
            Fragment::Divergent { left, right } => {
                if !left.is_empty() || !right.is_empty() {
                    format.format_into(buffer, left, right);
                }
            }
        }
    }
}

impl Display for Fragment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&LeftRightFormat::default()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render() {
        let format = LeftRightFormat::default();

        assert_eq!(Fragment::Matched("abc").render(&format), "abc");
        assert_eq!(Fragment::Matched("").render(&format), "");
        assert_eq!(
            Fragment::Divergent {
                left: "EF",
                right: "XYZ"
            }
            .render(&format),
            "<(EF/XYZ)>"
        );
        assert_eq!(
            Fragment::Divergent {
                left: "",
                right: "ABC"
            }
            .render(&format),
            "<(/ABC)>"
        );
        assert_eq!(
            Fragment::Divergent {
                left: "",
                right: ""
            }
            .render(&format),
            ""
        );
    }

    #[test]
    fn test_render_with_custom_format() {
        let format = LeftRightFormat::new("{%s|%s}").unwrap();

        assert_eq!(
            Fragment::Divergent {
                left: "may be",
                right: "is often"
            }
            .render(&format),
            "{may be|is often}"
        );
        assert_eq!(Fragment::Matched("{%s}").render(&format), "{%s}");
    }

    #[test]
    fn test_predicates() {
        let matched = Fragment::Matched("");
        let divergent = Fragment::Divergent {
            left: "a",
            right: "",
        };

        assert!(matched.is_matched());
        assert!(!matched.is_divergent());
        assert!(matched.is_empty());

        assert!(divergent.is_divergent());
        assert!(!divergent.is_matched());
        assert!(!divergent.is_empty());
        assert!(
            Fragment::Divergent {
                left: "",
                right: ""
            }
            .is_empty()
        );
    }

    #[test]
    fn test_text() {
        let fragment = Fragment::Divergent {
            left: "old",
            right: "new",
        };

        assert_eq!(fragment.text(Side::Left), "old");
        assert_eq!(fragment.text(Side::Right), "new");
        assert_eq!(Fragment::Matched("both").text(Side::Right), "both");
        assert_eq!(fragment.to_string(), "<(old/new)>");
    }
}
