//! Offset and client positions, and the positioning side effect of writing
//! them.
//!
//! Writing a position never scrolls. It nudges the element through its CSS
//! `top`/`left` by the difference between the requested and the current
//! position. Those offsets only act on positioned elements, so an element
//! whose `position` is `static` (or `sticky`) is switched to `relative`
//! first. That switch is permanent; callers that must not have their
//! `position` changed should set it themselves before writing.

use strum_macros::Display;
use wombat_css::{format_px, is_positioned, parse_px};

use crate::boundary::Axis;
use crate::host::{GeometryHost, StyleReader};
use crate::scroll::get_scroll_offset;
use crate::target::Target;

/// Which coordinate space a position is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PositionKind {
    /// [CSSOM View § 6](https://drafts.csswg.org/cssom-view/#dom-htmlelement-offsettop):
    /// `offsetTop`/`offsetLeft`, relative to the offset parent.
    Offset,
    /// The bounding rectangle's top/left plus the window's scroll offset,
    /// i.e. viewport coordinates carried back to the document origin.
    Client,
}

/// Is the element's resolved `position` one of `absolute`, `fixed` or
/// `relative`?
///
/// # Errors
///
/// Propagates style lookup failures from the host.
pub fn positioned<H: StyleReader + ?Sized>(host: &H, element: H::Element) -> Result<bool, H::Error> {
    Ok(is_positioned(&host.computed_style(element, "position")?))
}

/// Read a position of `target` along `axis`. The window and the document are
/// always at `0`.
///
/// # Errors
///
/// Propagates host failures for element reads.
pub fn get_position<H: GeometryHost + ?Sized>(
    host: &H,
    target: Target<H::Element>,
    kind: PositionKind,
    axis: Axis,
) -> Result<f64, H::Error> {
    let Some(element) = target.element() else {
        return Ok(0.0);
    };

    match kind {
        PositionKind::Offset => host.offset_position(element, axis),
        PositionKind::Client => {
            let start = axis.start_of(&host.bounding_client_rect(element)?);
            Ok(start + get_scroll_offset(host, Target::Window, axis)?)
        }
    }
}

/// Move `target` so that reading the same position returns `value`.
///
/// Samples the current position, forces `position: relative` on elements
/// that are not positioned, then adds the difference to the resolved CSS
/// `left` (horizontal) or `top` (vertical). Writes to the window or the
/// document are ignored.
///
/// # Errors
///
/// Propagates host failures.
pub fn set_position<H: GeometryHost + ?Sized>(
    host: &mut H,
    target: Target<H::Element>,
    kind: PositionKind,
    axis: Axis,
    value: f64,
) -> Result<(), H::Error> {
    let Some(element) = target.element() else {
        return Ok(());
    };

    let delta = value - get_position(host, target, kind, axis)?;

    if !positioned(host, element)? {
        host.set_style(element, "position", "relative")?;
    }

    let property = axis.offset_property();
    let current = parse_px(&host.computed_style(element, property)?);
    host.set_style(element, property, &format_px(current + delta))
}
