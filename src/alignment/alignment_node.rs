use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::fragment::Fragment;
use crate::{LeftRightFormat, Side};

/// The result of aligning two strings: a tree whose leaves are
/// [`Fragment`]s. Reading the leaves depth-first yields the rendered text in
/// order.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alignment<'a> {
    Fragment(Fragment<'a>),
    Node(Box<AlignmentNode<'a>>),
}

/// One level of a recursive split: the text before, at, and after a common
/// region. Each slot can be split further.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentNode<'a> {
    pub prefix: Alignment<'a>,
    pub infix: Alignment<'a>,
    pub suffix: Alignment<'a>,
}

impl<'a> Alignment<'a> {
    #[must_use]
    pub fn node(prefix: Alignment<'a>, infix: Alignment<'a>, suffix: Alignment<'a>) -> Self {
        Alignment::Node(Box::new(AlignmentNode {
            prefix,
            infix,
            suffix,
        }))
    }

    #[must_use]
    pub fn render(&self, format: &LeftRightFormat) -> String {
        let mut buffer = String::new();
        self.render_into(&mut buffer, format);
        buffer
    }

    /// Append the rendered tree to `buffer` without adding any separators.
    pub fn render_into(&self, buffer: &mut String, format: &LeftRightFormat) {
        match self {
            Alignment::Fragment(fragment) => fragment.render_into(buffer, format),
            Alignment::Node(node) => node.render_into(buffer, format),
        }
    }

    /// All leaves in depth-first order.
    #[must_use]
    pub fn fragments(&self) -> Vec<Fragment<'a>> {
        let mut fragments = Vec::new();
        self.collect_fragments(&mut fragments);
        fragments
    }

    fn collect_fragments(&self, fragments: &mut Vec<Fragment<'a>>) {
        match self {
            Alignment::Fragment(fragment) => fragments.push(*fragment),
            Alignment::Node(node) => {
                node.prefix.collect_fragments(fragments);
                node.infix.collect_fragments(fragments);
                node.suffix.collect_fragments(fragments);
            }
        }
    }

    /// Reassemble one of the inputs from the tree. Matching context dropped
    /// due to padding is not part of the result.
    #[must_use]
    pub fn text(&self, side: Side) -> String {
        self.fragments()
            .iter()
            .map(|fragment| fragment.text(side))
            .collect()
    }

    #[must_use]
    pub fn left_text(&self) -> String { self.text(Side::Left) }

    #[must_use]
    pub fn right_text(&self) -> String { self.text(Side::Right) }

    /// Whether any leaf would render with the left/right format.
    #[must_use]
    pub fn has_divergence(&self) -> bool {
        self.fragments()
            .iter()
            .any(|fragment| fragment.is_divergent() && !fragment.is_empty())
    }
}

impl AlignmentNode<'_> {
    pub fn render_into(&self, buffer: &mut String, format: &LeftRightFormat) {
        self.prefix.render_into(buffer, format);
        self.infix.render_into(buffer, format);
        self.suffix.render_into(buffer, format);
    }
}

impl<'a> From<Fragment<'a>> for Alignment<'a> {
    fn from(fragment: Fragment<'a>) -> Self { Alignment::Fragment(fragment) }
}

impl Display for Alignment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&LeftRightFormat::default()))
    }
}
