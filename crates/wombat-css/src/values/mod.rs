//! CSS value types.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

mod keywords;
mod length;

pub use keywords::{BoxSizing, PositionType, is_positioned};
pub use length::{AutoLength, format_px, parse_auto_length, parse_px};
