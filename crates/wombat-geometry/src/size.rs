//! Width and height at the content, padding, and border boundaries.
//!
//! | Accessor      | Axis       | Boundary |
//! |---------------|------------|----------|
//! | `width`       | horizontal | content  |
//! | `innerWidth`  | horizontal | padding  |
//! | `outerWidth`  | horizontal | border   |
//! | `height`      | vertical   | content  |
//! | `innerHeight` | vertical   | padding  |
//! | `outerHeight` | vertical   | border   |
//!
//! For the window and the document every boundary gives the same number.

use wombat_css::format_px;

use crate::boundary::{Axis, Boundary, read_delta, write_delta};
use crate::host::GeometryHost;
use crate::metrics::box_metrics;
use crate::target::Target;

/// Read the size of `target` along `axis`, measured at `boundary`.
///
/// - Window: the viewport size, falling back to the document element's
///   client size when the host reports none (or zero).
/// - Document: the largest of the scroll, offset and client sizes of the
///   body and the document element.
/// - Element: the bounding rectangle's size minus the padding and border
///   outside `boundary`. May be fractional; is not clamped.
///
/// # Errors
///
/// Propagates host failures for element reads.
pub fn get_size<H: GeometryHost + ?Sized>(
    host: &H,
    target: Target<H::Element>,
    axis: Axis,
    boundary: Boundary,
) -> Result<f64, H::Error> {
    match target.element() {
        Some(element) => {
            let rendered = axis.extent_of(&host.bounding_client_rect(element)?);
            let metrics = box_metrics(host, element, axis)?;
            Ok(rendered - read_delta(boundary, metrics))
        }
        None if target.is_window() => window_size(host, axis),
        None => document_size(host, axis),
    }
}

/// Make the measurement of `target` along `axis` at `boundary` equal `value`.
///
/// The value is converted to whatever box the element's `box-sizing` says
/// the CSS `width`/`height` property names, then assigned in pixels. Writes
/// to the window or the document are ignored.
///
/// # Errors
///
/// Propagates host failures for element reads and writes.
pub fn set_size<H: GeometryHost + ?Sized>(
    host: &mut H,
    target: Target<H::Element>,
    axis: Axis,
    boundary: Boundary,
    value: f64,
) -> Result<(), H::Error> {
    let Some(element) = target.element() else {
        return Ok(());
    };

    let sizing = host.box_sizing(element)?;
    let metrics = box_metrics(host, element, axis)?;
    let css_value = value - write_delta(sizing, boundary, metrics);
    host.set_style(element, axis.size_property(), &format_px(css_value))
}

/// `window.innerWidth || documentElement.clientWidth || 0`
fn window_size<H: GeometryHost + ?Sized>(host: &H, axis: Axis) -> Result<f64, H::Error> {
    if let Some(size) = host.inner_size(axis).filter(|size| *size != 0.0) {
        return Ok(size);
    }
    match host.document_element() {
        Some(root) => host.client_extent(root, axis),
        None => Ok(0.0),
    }
}

/// Some engines under-report one of these for the whole document, so take
/// the largest.
fn document_size<H: GeometryHost + ?Sized>(host: &H, axis: Axis) -> Result<f64, H::Error> {
    let mut size: f64 = 0.0;

    if let Some(body) = host.body() {
        size = size
            .max(host.scroll_extent(body, axis)?)
            .max(host.offset_extent(body, axis)?);
    }
    if let Some(root) = host.document_element() {
        size = size
            .max(host.scroll_extent(root, axis)?)
            .max(host.offset_extent(root, axis)?)
            .max(host.client_extent(root, axis)?);
    }

    Ok(size)
}
