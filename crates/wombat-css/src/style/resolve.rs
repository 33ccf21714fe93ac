//! Resolved values.
//!
//! [CSSOM § 9 Resolved Values](https://drafts.csswg.org/cssom/#resolved-values)
//!
//! "getComputedStyle() was historically defined to return the "computed
//! value" of an element or pseudo-element. However, the concept of "computed
//! value" changed between revisions of CSS while the implementation of
//! getComputedStyle() had to remain the same for compatibility with deployed
//! scripts."
//!
//! Only the inline declaration block takes part in the cascade here, so the
//! resolved value is the declared longhand or the property's initial value.
//! Border widths are the one computed-value rule applied.

use wombat_dom::{InlineStyle, normalize_property_name};

use super::Edge;
use crate::values::{format_px, parse_px};

/// Resolve `property` for an element with the given inline style.
///
/// Accepts kebab-case or camelCase names.
#[must_use]
pub fn resolved_value(style: &InlineStyle, property: &str) -> String {
    let property = normalize_property_name(property);

    if let Some(edge) = border_width_edge(&property) {
        return resolved_border_width(style, edge);
    }

    style
        .get(&property)
        .map_or_else(|| initial_value(&property).to_string(), str::to_string)
}

/// [CSS Cascading Level 4 § 7.1](https://www.w3.org/TR/css-cascade-4/#initial-values)
///
/// "Each property has an initial value, defined in the property's definition
/// table."
#[must_use]
pub fn initial_value(property: &str) -> &'static str {
    match property {
        "box-sizing" => "content-box",
        "position" => "static",
        "display" => "block",
        "width" | "height" | "top" | "right" | "bottom" | "left" => "auto",
        "border-top-style" | "border-right-style" | "border-bottom-style"
        | "border-left-style" => "none",
        p if p.starts_with("padding-") || p.starts_with("margin-") => "0px",
        _ => "",
    }
}

/// Which side a `border-<edge>-width` longhand names, if any.
fn border_width_edge(property: &str) -> Option<Edge> {
    property
        .strip_prefix("border-")?
        .strip_suffix("-width")?
        .parse()
        .ok()
}

/// [§ 4.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
///
/// "Computed value: absolute length, snapped as a border width; zero if the
/// border style is none or hidden"
///
/// "The lengths corresponding to thin, medium, and thick are not specified,
/// but the values are constant throughout a document and thin ≤ medium ≤
/// thick." Browsers use 1px, 3px and 5px.
fn resolved_border_width(style: &InlineStyle, edge: Edge) -> String {
    let border_style = style
        .get(&edge.border_style_property())
        .unwrap_or("none")
        .to_ascii_lowercase();
    if border_style == "none" || border_style == "hidden" {
        return "0px".to_string();
    }

    let width = style.get(&edge.border_width_property()).unwrap_or("medium");
    let px = match width.to_ascii_lowercase().as_str() {
        "thin" => 1.0,
        "medium" => 3.0,
        "thick" => 5.0,
        other => parse_px(other),
    };
    format_px(px)
}
