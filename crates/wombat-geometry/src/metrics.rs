//! Per-axis padding and border sums.

use serde::Serialize;
use wombat_css::parse_px;

use crate::boundary::Axis;
use crate::host::StyleReader;

/// Total padding and total border width of one element along one axis.
///
/// Computed fresh on every access: style can change between a read and a
/// later write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoxMetrics {
    /// `padding-left + padding-right` or `padding-top + padding-bottom`.
    pub padding: f64,
    /// `border-left-width + border-right-width` or the vertical pair.
    pub border: f64,
}

/// Read the resolved `padding-<edge>` and `border-<edge>-width` of both
/// edges on `axis` and sum each pair. Unparsable values count as zero.
///
/// # Errors
///
/// Propagates style lookup failures from the host.
pub fn box_metrics<H: StyleReader + ?Sized>(
    host: &H,
    element: H::Element,
    axis: Axis,
) -> Result<BoxMetrics, H::Error> {
    let mut metrics = BoxMetrics::default();
    for edge in axis.edges() {
        metrics.padding += parse_px(&host.computed_style(element, &edge.padding_property())?);
        metrics.border += parse_px(&host.computed_style(element, &edge.border_width_property())?);
    }
    Ok(metrics)
}
