//! All readings of one target at once.

use serde::Serialize;

use crate::accessor::Accessor;
use crate::host::GeometryHost;
use crate::target::Target;

/// Every accessor's value for one target, sampled in a single pass.
///
/// Serializes with the accessors' camelCase names, so a JSON dump reads
/// like the DOM attributes it mirrors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometrySnapshot {
    /// `width`
    pub width: f64,
    /// `height`
    pub height: f64,
    /// `innerWidth`
    pub inner_width: f64,
    /// `innerHeight`
    pub inner_height: f64,
    /// `outerWidth`
    pub outer_width: f64,
    /// `outerHeight`
    pub outer_height: f64,
    /// `scrollLeft`
    pub scroll_left: f64,
    /// `scrollTop`
    pub scroll_top: f64,
    /// `scrollWidth`
    pub scroll_width: f64,
    /// `scrollHeight`
    pub scroll_height: f64,
    /// `offsetTop`
    pub offset_top: f64,
    /// `offsetLeft`
    pub offset_left: f64,
    /// `clientTop`
    pub client_top: f64,
    /// `clientLeft`
    pub client_left: f64,
}

impl GeometrySnapshot {
    /// Read every accessor for `target`.
    ///
    /// # Errors
    ///
    /// Propagates the first host failure.
    pub fn capture<H: GeometryHost + ?Sized>(host: &H, target: Target<H::Element>) -> Result<Self, H::Error> {
        let read = |accessor: Accessor| accessor.get(host, target);
        Ok(Self {
            width: read(Accessor::Width)?,
            height: read(Accessor::Height)?,
            inner_width: read(Accessor::InnerWidth)?,
            inner_height: read(Accessor::InnerHeight)?,
            outer_width: read(Accessor::OuterWidth)?,
            outer_height: read(Accessor::OuterHeight)?,
            scroll_left: read(Accessor::ScrollLeft)?,
            scroll_top: read(Accessor::ScrollTop)?,
            scroll_width: read(Accessor::ScrollWidth)?,
            scroll_height: read(Accessor::ScrollHeight)?,
            offset_top: read(Accessor::OffsetTop)?,
            offset_left: read(Accessor::OffsetLeft)?,
            client_top: read(Accessor::ClientTop)?,
            client_left: read(Accessor::ClientLeft)?,
        })
    }

    /// The value recorded for `accessor`.
    #[must_use]
    pub const fn get(&self, accessor: Accessor) -> f64 {
        match accessor {
            Accessor::Width => self.width,
            Accessor::Height => self.height,
            Accessor::InnerWidth => self.inner_width,
            Accessor::InnerHeight => self.inner_height,
            Accessor::OuterWidth => self.outer_width,
            Accessor::OuterHeight => self.outer_height,
            Accessor::ScrollLeft => self.scroll_left,
            Accessor::ScrollTop => self.scroll_top,
            Accessor::ScrollWidth => self.scroll_width,
            Accessor::ScrollHeight => self.scroll_height,
            Accessor::OffsetTop => self.offset_top,
            Accessor::OffsetLeft => self.offset_left,
            Accessor::ClientTop => self.client_top,
            Accessor::ClientLeft => self.client_left,
        }
    }
}
