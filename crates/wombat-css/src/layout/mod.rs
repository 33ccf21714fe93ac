//! CSS Layout Engine
//!
//! Just enough of the visual formatting model to produce the rectangles
//! geometry accessors report: block flow, positioning, and scrollable
//! overflow.
//!
//! # Relevant Specifications
//!
//! - [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//! - [CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html)
//! - [CSS Positioned Layout Module Level 3](https://www.w3.org/TR/css-position-3/)
//! - [CSS Overflow Module Level 3](https://www.w3.org/TR/css-overflow-3/#scrollable)
//!
//! # Module Structure
//!
//! - [`box_model`] - Box dimensions, rectangles, and edge sizes
//! - [`flow`] - Block flow and positioned layout over a [`wombat_dom::DomTree`]

pub mod box_model;
pub mod flow;

pub use box_model::{BoxDimensions, EdgeSizes, Rect};
pub use flow::{LayoutBox, LayoutTree, layout_document};
