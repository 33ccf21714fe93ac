//! Keyword-valued properties that change how geometry is read or written.

use strum_macros::{Display, EnumString};

/// [CSS Box Sizing Level 3 § 4.1](https://www.w3.org/TR/css-sizing-3/#box-sizing)
///
/// "The box-sizing property defines whether or not an element's width and
/// height properties include padding and border."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum BoxSizing {
    /// "This is the behavior of width and height as specified by CSS2.1. The
    /// specified width and height apply to the width and height respectively
    /// of the content box of the element."
    #[default]
    ContentBox,
    /// "Length and percentages values for width and height on this element
    /// determine the border box of the element."
    BorderBox,
}

impl BoxSizing {
    /// Interpret a resolved `box-sizing` value. Anything unrecognized is the
    /// initial value, `content-box`.
    #[must_use]
    pub fn from_resolved(value: &str) -> Self {
        value.trim().parse().unwrap_or_default()
    }

    /// Whether `width`/`height` name the border box.
    #[must_use]
    pub const fn is_border_box(self) -> bool {
        matches!(self, Self::BorderBox)
    }
}

/// [§ 9.3.1 Choosing a positioning scheme: 'position' property](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
///
/// "The 'position' and 'float' properties determine which of the CSS 2
/// positioning algorithms is used to calculate the position of a box."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PositionType {
    /// "The box is a normal box, laid out according to the normal flow."
    #[default]
    Static,
    /// "The box's position is calculated according to the normal flow.
    /// Then the box is offset relative to its normal position."
    Relative,
    /// "The box's position (and possibly size) is specified with the
    /// 'top', 'right', 'bottom', and 'left' properties."
    Absolute,
    /// "The box's position is calculated according to the 'absolute' model,
    /// but the box is fixed with respect to some reference."
    Fixed,
    /// [CSS Positioned Layout Module Level 3 § 3.4](https://www.w3.org/TR/css-position-3/#stickypos-insets)
    Sticky,
}

impl PositionType {
    /// Interpret a resolved `position` value; unrecognized input is `static`.
    #[must_use]
    pub fn from_resolved(value: &str) -> Self {
        value.trim().parse().unwrap_or_default()
    }

    /// Whether the box is removed from normal flow.
    #[must_use]
    pub const fn is_out_of_flow(self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }

    /// Whether the box establishes a containing block for absolute descendants.
    #[must_use]
    pub const fn establishes_containing_block(self) -> bool {
        !matches!(self, Self::Static)
    }
}

/// Whether a resolved `position` value puts the element in a positioning
/// context that `top`/`left` nudges act on.
///
/// Matches on the prefix (`ab`, `fi`, `re`), so `absolute`, `fixed` and
/// `relative` qualify while `static` and `sticky` do not.
#[must_use]
pub fn is_positioned(value: &str) -> bool {
    let value = value.trim_start();
    ["ab", "fi", "re"]
        .iter()
        .any(|prefix| value.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_sizing_from_resolved() {
        assert_eq!(BoxSizing::from_resolved("border-box"), BoxSizing::BorderBox);
        assert_eq!(BoxSizing::from_resolved("Content-Box"), BoxSizing::ContentBox);
        assert_eq!(BoxSizing::from_resolved("padding-box"), BoxSizing::ContentBox);
        assert_eq!(BoxSizing::BorderBox.to_string(), "border-box");
    }

    #[test]
    fn test_position_type_from_resolved() {
        assert_eq!(PositionType::from_resolved("fixed"), PositionType::Fixed);
        assert_eq!(PositionType::from_resolved(""), PositionType::Static);
        assert!(PositionType::Absolute.is_out_of_flow());
        assert!(!PositionType::Relative.is_out_of_flow());
    }

    #[test]
    fn test_is_positioned_prefix_match() {
        assert!(is_positioned("absolute"));
        assert!(is_positioned("fixed"));
        assert!(is_positioned("relative"));
        assert!(!is_positioned("static"));
        assert!(!is_positioned("sticky"));
        assert!(!is_positioned(""));
    }
}
