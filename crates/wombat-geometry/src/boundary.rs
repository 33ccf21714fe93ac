//! Boundaries, axes, and the deltas between them.
//!
//! A rendered box along one axis is `content + padding + border`. Each
//! logical measurement stops at one of those layers; the functions here turn
//! a rendered size into that measurement (read) and a desired measurement
//! into the value to assign to the CSS `width`/`height` property (write).

use strum_macros::{Display, EnumIter};
use wombat_css::{BoxSizing, Edge, Rect};

use crate::metrics::BoxMetrics;

/// Which box-model layer a measurement stops at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Boundary {
    /// The content box (`width`, `height`).
    Content,
    /// The padding edge (`innerWidth`, `innerHeight`).
    Padding,
    /// The border edge (`outerWidth`, `outerHeight`).
    Border,
}

/// Horizontal measurements read left/right edges; vertical ones top/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    /// Width-like, x-like.
    Horizontal,
    /// Height-like, y-like.
    Vertical,
}

impl Axis {
    /// The two physical edges on this axis.
    #[must_use]
    pub const fn edges(self) -> [Edge; 2] {
        match self {
            Self::Horizontal => [Edge::Left, Edge::Right],
            Self::Vertical => [Edge::Top, Edge::Bottom],
        }
    }

    /// The other axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// `width` or `height`.
    #[must_use]
    pub const fn size_property(self) -> &'static str {
        match self {
            Self::Horizontal => "width",
            Self::Vertical => "height",
        }
    }

    /// `left` or `top`, the box offset a position write adjusts.
    #[must_use]
    pub const fn offset_property(self) -> &'static str {
        match self {
            Self::Horizontal => "left",
            Self::Vertical => "top",
        }
    }

    /// The rectangle's size along this axis.
    #[must_use]
    pub const fn extent_of(self, rect: &Rect) -> f64 {
        match self {
            Self::Horizontal => rect.width,
            Self::Vertical => rect.height,
        }
    }

    /// The rectangle's leading edge (`left` or `top`) along this axis.
    #[must_use]
    pub fn start_of(self, rect: &Rect) -> f64 {
        match self {
            Self::Horizontal => rect.left(),
            Self::Vertical => rect.top(),
        }
    }
}

/// Amount to subtract from the rendered (border-box) size to get the
/// measurement at `boundary`.
#[must_use]
pub fn read_delta(boundary: Boundary, metrics: BoxMetrics) -> f64 {
    match boundary {
        // width - border - padding
        Boundary::Content => metrics.padding + metrics.border,
        // width - border
        Boundary::Padding => metrics.border,
        Boundary::Border => 0.0,
    }
}

/// Amount to subtract from a desired measurement at `boundary` to get the
/// value to assign to CSS `width`/`height` under `sizing`.
///
/// Negative results mean the CSS value is larger than the measurement: a
/// border-box `width` must cover the padding and border a content
/// measurement leaves out.
#[must_use]
pub fn write_delta(sizing: BoxSizing, boundary: Boundary, metrics: BoxMetrics) -> f64 {
    match (sizing, boundary) {
        // css = content + padding + border
        (BoxSizing::BorderBox, Boundary::Content) => -(metrics.padding + metrics.border),
        (BoxSizing::BorderBox, Boundary::Padding) => -metrics.border,
        (BoxSizing::BorderBox, Boundary::Border) | (BoxSizing::ContentBox, Boundary::Content) => 0.0,
        // css = content
        (BoxSizing::ContentBox, Boundary::Padding) => metrics.padding,
        (BoxSizing::ContentBox, Boundary::Border) => metrics.padding + metrics.border,
    }
}
