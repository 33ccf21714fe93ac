//! CSS values, resolved style, and layout for the Wombat geometry crates.
//!
//! # Scope
//!
//! This crate implements:
//! - **Length parsing** ([CSS Values Level 4 § 4.1](https://www.w3.org/TR/css-values-4/#lengths))
//!   - `parseFloat`-compatible pixel extraction where unparsable input reads as zero
//!   - Serializing pixel values back to `<n>px`
//!
//! - **Keywords**
//!   - `box-sizing` ([CSS Box Sizing Level 3](https://www.w3.org/TR/css-sizing-3/#box-sizing))
//!   - `position` ([CSS Positioned Layout Level 3](https://www.w3.org/TR/css-position-3/))
//!
//! - **Declarations** ([CSS Syntax § 5.4.5](https://www.w3.org/TR/css-syntax-3/#consume-list-of-declarations))
//!   - Inline `style` attribute parsing
//!   - Shorthand expansion (margin, padding, border, border-width, border-style)
//!
//! - **Resolved values** ([CSSOM § 9](https://drafts.csswg.org/cssom/#resolved-values))
//!
//! - **Layout** ([CSS 2.1 § 9 Visual formatting model](https://www.w3.org/TR/CSS2/visuren.html))
//!   - Block flow, relative/absolute/fixed positioning, scrollable overflow
//!
//! # Not Yet Implemented
//!
//! - Percentage and font-relative units (read as bare numbers)
//! - Inline formatting, floats, margin collapsing
//! - Transforms

/// Box model and block layout per [CSS 2.1 § 9](https://www.w3.org/TR/CSS2/visuren.html).
pub mod layout;
/// Declaration parsing and resolved style per [CSSOM](https://drafts.csswg.org/cssom/).
pub mod style;
/// Length and keyword values per [CSS Values Level 4](https://www.w3.org/TR/css-values-4/).
pub mod values;

// Re-exports for convenience
pub use layout::{BoxDimensions, EdgeSizes, LayoutBox, LayoutTree, Rect, layout_document};
pub use style::{Edge, expand_declaration, parse_style_attribute, resolved_value};
pub use values::{AutoLength, BoxSizing, PositionType, format_px, is_positioned, parse_px};
