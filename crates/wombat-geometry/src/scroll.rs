//! Scroll offsets and scroll extents.
//!
//! [CSSOM View § 5](https://drafts.csswg.org/cssom-view/#dom-element-scrolltop)
//!
//! The window and the document share one scroll position: the viewport's.
//! Extents are read-only; writes to them are accepted and ignored because
//! they are determined by the content.

use crate::boundary::Axis;
use crate::host::GeometryHost;
use crate::target::Target;

/// `scrollLeft` (horizontal) or `scrollTop` (vertical).
///
/// For the window and the document this is the page offset, falling back to
/// the document element's own scroll offset when the host reports none (or
/// zero).
///
/// # Errors
///
/// Propagates host failures for element reads.
pub fn get_scroll_offset<H: GeometryHost + ?Sized>(
    host: &H,
    target: Target<H::Element>,
    axis: Axis,
) -> Result<f64, H::Error> {
    if let Some(element) = target.element() {
        return host.scroll_offset(element, axis);
    }
    if let Some(offset) = host.page_offset(axis).filter(|offset| *offset != 0.0) {
        return Ok(offset);
    }
    match host.document_element() {
        Some(root) => host.scroll_offset(root, axis),
        None => Ok(0.0),
    }
}

/// Set `scrollLeft` or `scrollTop`.
///
/// For the window and the document the other axis is read back first and
/// passed along unchanged, so scrolling one axis never resets the other.
///
/// # Errors
///
/// Propagates host failures.
pub fn set_scroll_offset<H: GeometryHost + ?Sized>(
    host: &mut H,
    target: Target<H::Element>,
    axis: Axis,
    value: f64,
) -> Result<(), H::Error> {
    if let Some(element) = target.element() {
        return host.set_scroll_offset(element, axis, value);
    }

    let other = get_scroll_offset(host, target, axis.cross())?;
    match axis {
        Axis::Horizontal => host.scroll_window_to(value, other),
        Axis::Vertical => host.scroll_window_to(other, value),
    }
    Ok(())
}

/// `scrollWidth` (horizontal) or `scrollHeight` (vertical). The window and
/// the document report the document element's extent.
///
/// # Errors
///
/// Propagates host failures for element reads.
pub fn get_scroll_extent<H: GeometryHost + ?Sized>(
    host: &H,
    target: Target<H::Element>,
    axis: Axis,
) -> Result<f64, H::Error> {
    let Some(element) = target.element().or_else(|| host.document_element()) else {
        return Ok(0.0);
    };
    host.scroll_extent(element, axis)
}

/// Writes to `scrollWidth`/`scrollHeight` do nothing.
///
/// Kept so every accessor has a setter with the same shape.
///
/// # Errors
///
/// Never fails.
pub fn set_scroll_extent<H: GeometryHost + ?Sized>(
    _host: &mut H,
    _target: Target<H::Element>,
    _axis: Axis,
    _value: f64,
) -> Result<(), H::Error> {
    Ok(())
}
