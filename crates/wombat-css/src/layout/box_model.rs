//! CSS Box Model types.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)

use serde::Serialize;

use crate::style::Edge;

/// A rectangle positioned in 2D space, in CSS pixels.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f64,
    /// Vertical position of the top-left corner.
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Construct a rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// [CSSOM View § 6.3](https://drafts.csswg.org/geometry-1/#dom-domrectreadonly-domrect-top)
    /// "The top attribute must return min(y coordinate, y coordinate + height dimension)."
    #[must_use]
    pub fn top(&self) -> f64 {
        self.y.min(self.y + self.height)
    }

    /// "The left attribute must return min(x coordinate, x coordinate + width dimension)."
    #[must_use]
    pub fn left(&self) -> f64 {
        self.x.min(self.x + self.width)
    }

    /// "The right attribute must return max(x coordinate, x coordinate + width dimension)."
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x.max(self.x + self.width)
    }

    /// "The bottom attribute must return max(y coordinate, y coordinate + height dimension)."
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y.max(self.y + self.height)
    }

    /// Smallest rectangle containing both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(left, top, right - left, bottom - top)
    }

    /// The same rectangle moved by `(dx, dy)`.
    #[must_use]
    pub const fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// Edge sizes for padding, border, or margin.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EdgeSizes {
    /// Top edge size.
    pub top: f64,
    /// Right edge size.
    pub right: f64,
    /// Bottom edge size.
    pub bottom: f64,
    /// Left edge size.
    pub left: f64,
}

impl EdgeSizes {
    /// `left + right`
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// `top + bottom`
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// The size on one side.
    #[must_use]
    pub const fn side(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }
}

/// [§ 3. The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// "Each box has a content area and optional surrounding padding, border,
/// and margin areas."
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoxDimensions {
    /// Content area, in document coordinates.
    pub content: Rect,
    /// Padding widths.
    pub padding: EdgeSizes,
    /// Border widths.
    pub border: EdgeSizes,
    /// Margin widths.
    pub margin: EdgeSizes,
}

impl BoxDimensions {
    // The boxes from innermost to outermost:
    //   1. Content box  - the actual content
    //   2. Padding box  - content + padding
    //   3. Border box   - content + padding + border
    //   4. Margin box   - content + padding + border + margin

    /// [§ 3.2 Padding](https://www.w3.org/TR/css-box-3/#paddings)
    ///
    /// "The padding box contains both the content and padding areas."
    #[must_use]
    pub fn padding_box(&self) -> Rect {
        expand(self.content, &self.padding)
    }

    /// [§ 3.3 Borders](https://www.w3.org/TR/css-box-3/#borders)
    ///
    /// "The border box contains content, padding, and border areas."
    #[must_use]
    pub fn border_box(&self) -> Rect {
        expand(self.padding_box(), &self.border)
    }

    /// [§ 3.1 Margins](https://www.w3.org/TR/css-box-3/#margins)
    ///
    /// "The margin box is the outermost box, and contains all four areas."
    #[must_use]
    pub fn margin_box(&self) -> Rect {
        expand(self.border_box(), &self.margin)
    }
}

/// Grow `rect` outward by `edges`.
fn expand(rect: Rect, edges: &EdgeSizes) -> Rect {
    Rect {
        x: rect.x - edges.left,
        y: rect.y - edges.top,
        width: rect.width + edges.horizontal(),
        height: rect.height + edges.vertical(),
    }
}
