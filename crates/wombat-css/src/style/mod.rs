//! Style declarations and resolved values.
//!
//! - [`declarations`] - inline `style` attribute parsing and shorthand expansion
//! - [`resolve`] - resolved values as `getComputedStyle` reports them

pub mod declarations;
pub mod resolve;

pub use declarations::{expand_declaration, parse_style_attribute};
pub use resolve::{initial_value, resolved_value};

use strum_macros::{Display, EnumIter, EnumString};

/// [CSS Box Model Level 3 § 3](https://www.w3.org/TR/css-box-3/#box-model)
///
/// One of the four physical sides of a box. Displays as the lowercase name
/// used inside longhand property names (`padding-left`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Edge {
    /// Top side.
    Top,
    /// Right side.
    Right,
    /// Bottom side.
    Bottom,
    /// Left side.
    Left,
}

impl Edge {
    /// Sides in the order CSS 1-to-4 value shorthands assign them.
    pub const CLOCKWISE: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// `padding-<edge>`
    #[must_use]
    pub fn padding_property(self) -> String {
        format!("padding-{self}")
    }

    /// `margin-<edge>`
    #[must_use]
    pub fn margin_property(self) -> String {
        format!("margin-{self}")
    }

    /// `border-<edge>-width`
    #[must_use]
    pub fn border_width_property(self) -> String {
        format!("border-{self}-width")
    }

    /// `border-<edge>-style`
    #[must_use]
    pub fn border_style_property(self) -> String {
        format!("border-{self}-style")
    }

    /// `border-<edge>-color`
    #[must_use]
    pub fn border_color_property(self) -> String {
        format!("border-{self}-color")
    }
}
