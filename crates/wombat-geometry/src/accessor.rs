//! Every accessor by name.
//!
//! [`Accessor`] names the fourteen numeric measurements the way DOM code
//! spells them (`outerWidth`, `scrollTop`, ...) and routes each to its size,
//! scroll or position implementation. [`Geometry`] wraps a host and exposes
//! one method per accessor using the optional-value convention.

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::boundary::{Axis, Boundary};
use crate::dispatch::get_or_set;
use crate::host::GeometryHost;
use crate::position::{PositionKind, get_position, positioned, set_position};
use crate::scroll::{get_scroll_extent, get_scroll_offset, set_scroll_extent, set_scroll_offset};
use crate::size::{get_size, set_size};
use crate::target::Target;

/// A named geometry measurement.
///
/// Parses from and displays as its camelCase name. `clientLeft` also parses
/// from `clienttLeft`, a spelling some callers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum Accessor {
    /// Content-box width.
    Width,
    /// Content-box height.
    Height,
    /// Content + padding width.
    InnerWidth,
    /// Content + padding height.
    InnerHeight,
    /// Content + padding + border width.
    OuterWidth,
    /// Content + padding + border height.
    OuterHeight,
    /// Horizontal scroll offset.
    ScrollLeft,
    /// Vertical scroll offset.
    ScrollTop,
    /// Horizontal scroll extent. Writes are ignored.
    ScrollWidth,
    /// Vertical scroll extent. Writes are ignored.
    ScrollHeight,
    /// Vertical position relative to the offset parent.
    OffsetTop,
    /// Horizontal position relative to the offset parent.
    OffsetLeft,
    /// Vertical position from the bounding rectangle, scroll-compensated.
    ClientTop,
    /// Horizontal position from the bounding rectangle, scroll-compensated.
    #[strum(to_string = "clientLeft", serialize = "clienttLeft")]
    ClientLeft,
}

/// What an accessor measures, once the name is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Measure {
    Size(Boundary),
    ScrollOffset,
    ScrollExtent,
    Position(PositionKind),
}

impl Accessor {
    /// The axis this accessor reads along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Width
            | Self::InnerWidth
            | Self::OuterWidth
            | Self::ScrollLeft
            | Self::ScrollWidth
            | Self::OffsetLeft
            | Self::ClientLeft => Axis::Horizontal,
            Self::Height
            | Self::InnerHeight
            | Self::OuterHeight
            | Self::ScrollTop
            | Self::ScrollHeight
            | Self::OffsetTop
            | Self::ClientTop => Axis::Vertical,
        }
    }

    /// The boundary a size accessor stops at; `None` for the others.
    #[must_use]
    pub const fn boundary(self) -> Option<Boundary> {
        match self.measure() {
            Measure::Size(boundary) => Some(boundary),
            _ => None,
        }
    }

    /// Whether writes through this accessor can have any effect.
    /// `scrollWidth` and `scrollHeight` accept writes but ignore them.
    #[must_use]
    pub const fn is_writable(self) -> bool {
        !matches!(self.measure(), Measure::ScrollExtent)
    }

    const fn measure(self) -> Measure {
        match self {
            Self::Width | Self::Height => Measure::Size(Boundary::Content),
            Self::InnerWidth | Self::InnerHeight => Measure::Size(Boundary::Padding),
            Self::OuterWidth | Self::OuterHeight => Measure::Size(Boundary::Border),
            Self::ScrollLeft | Self::ScrollTop => Measure::ScrollOffset,
            Self::ScrollWidth | Self::ScrollHeight => Measure::ScrollExtent,
            Self::OffsetTop | Self::OffsetLeft => Measure::Position(PositionKind::Offset),
            Self::ClientTop | Self::ClientLeft => Measure::Position(PositionKind::Client),
        }
    }

    /// Read the measurement.
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn get<H: GeometryHost + ?Sized>(self, host: &H, target: Target<H::Element>) -> Result<f64, H::Error> {
        let axis = self.axis();
        match self.measure() {
            Measure::Size(boundary) => get_size(host, target, axis, boundary),
            Measure::ScrollOffset => get_scroll_offset(host, target, axis),
            Measure::ScrollExtent => get_scroll_extent(host, target, axis),
            Measure::Position(kind) => get_position(host, target, kind, axis),
        }
    }

    /// Write the measurement and return the value written.
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn set<H: GeometryHost + ?Sized>(
        self,
        host: &mut H,
        target: Target<H::Element>,
        value: f64,
    ) -> Result<f64, H::Error> {
        self.write(host, target, value)?;
        Ok(value)
    }

    /// Read when `value` is `None`, otherwise write it and return it.
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn access<H: GeometryHost + ?Sized>(
        self,
        host: &mut H,
        target: Target<H::Element>,
        value: Option<f64>,
    ) -> Result<f64, H::Error> {
        get_or_set(
            host,
            value,
            |host| self.get(host, target),
            |host, value| self.write(host, target, value),
        )
    }

    fn write<H: GeometryHost + ?Sized>(
        self,
        host: &mut H,
        target: Target<H::Element>,
        value: f64,
    ) -> Result<(), H::Error> {
        let axis = self.axis();
        match self.measure() {
            Measure::Size(boundary) => set_size(host, target, axis, boundary, value),
            Measure::ScrollOffset => set_scroll_offset(host, target, axis, value),
            Measure::ScrollExtent => set_scroll_extent(host, target, axis, value),
            Measure::Position(kind) => set_position(host, target, kind, axis, value),
        }
    }
}

/// A host with one method per accessor.
///
/// ```ignore
/// let mut geometry = Geometry::new(&mut host);
/// let outer = geometry.outer_width(Target::Element(el), None)?;
/// geometry.outer_width(Target::Element(el), Some(outer + 10.0))?;
/// ```
pub struct Geometry<'h, H: ?Sized> {
    host: &'h mut H,
}

impl<'h, H: GeometryHost + ?Sized> Geometry<'h, H> {
    /// Wrap a host.
    pub const fn new(host: &'h mut H) -> Self {
        Self { host }
    }

    /// The wrapped host.
    pub const fn host(&mut self) -> &mut H {
        self.host
    }

    /// Read or write any accessor by value.
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn access(
        &mut self,
        accessor: Accessor,
        target: Target<H::Element>,
        value: Option<f64>,
    ) -> Result<f64, H::Error> {
        accessor.access(self.host, target, value)
    }

    /// Whether the element's `position` is `absolute`, `fixed` or `relative`.
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn positioned(&self, element: H::Element) -> Result<bool, H::Error> {
        positioned(&*self.host, element)
    }

    /// `width`
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn width(&mut self, target: Target<H::Element>, value: Option<f64>) -> Result<f64, H::Error> {
        self.access(Accessor::Width, target, value)
    }

    /// `height`
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn height(&mut self, target: Target<H::Element>, value: Option<f64>) -> Result<f64, H::Error> {
        self.access(Accessor::Height, target, value)
    }

    /// `innerWidth`
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn inner_width(&mut self, target: Target<H::Element>, value: Option<f64>) -> Result<f64, H::Error> {
        self.access(Accessor::InnerWidth, target, value)
    }

    /// `innerHeight`
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn inner_height(&mut self, target: Target<H::Element>, value: Option<f64>) -> Result<f64, H::Error> {
        self.access(Accessor::InnerHeight, target, value)
    }

    /// `outerWidth`
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn outer_width(&mut self, target: Target<H::Element>, value: Option<f64>) -> Result<f64, H::Error> {
        self.access(Accessor::OuterWidth, target, value)
    }

    /// `outerHeight`
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn outer_height(&mut self, target: Target<H::Element>, value: Option<f64>) -> Result<f64, H::Error> {
        self.access(Accessor::OuterHeight, target, value)
    }

    /// `scrollLeft`
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn scroll_left(&mut self, target: Target<H::Element>, value: Option<f64>) -> Result<f64, H::Error> {
        self.access(Accessor::ScrollLeft, target, value)
    }

    /// `scrollTop`
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn scroll_top(&mut self, target: Target<H::Element>, value: Option<f64>) -> Result<f64, H::Error> {
        self.access(Accessor::ScrollTop, target, value)
    }

    /// `scrollWidth`; writes are ignored.
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn scroll_width(&mut self, target: Target<H::Element>, value: Option<f64>) -> Result<f64, H::Error> {
        self.access(Accessor::ScrollWidth, target, value)
    }

    /// `scrollHeight`; writes are ignored.
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn scroll_height(&mut self, target: Target<H::Element>, value: Option<f64>) -> Result<f64, H::Error> {
        self.access(Accessor::ScrollHeight, target, value)
    }

    /// `offsetTop`; writes may set `position: relative`.
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn offset_top(&mut self, target: Target<H::Element>, value: Option<f64>) -> Result<f64, H::Error> {
        self.access(Accessor::OffsetTop, target, value)
    }

    /// `offsetLeft`; writes may set `position: relative`.
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn offset_left(&mut self, target: Target<H::Element>, value: Option<f64>) -> Result<f64, H::Error> {
        self.access(Accessor::OffsetLeft, target, value)
    }

    /// `clientTop`; writes may set `position: relative`.
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn client_top(&mut self, target: Target<H::Element>, value: Option<f64>) -> Result<f64, H::Error> {
        self.access(Accessor::ClientTop, target, value)
    }

    /// `clientLeft`; writes may set `position: relative`.
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn client_left(&mut self, target: Target<H::Element>, value: Option<f64>) -> Result<f64, H::Error> {
        self.access(Accessor::ClientLeft, target, value)
    }
}
