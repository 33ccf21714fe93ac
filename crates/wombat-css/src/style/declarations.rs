//! Inline style declarations.
//!
//! [CSS Syntax Level 3 § 5.4.5 Consume a list of declarations](https://www.w3.org/TR/css-syntax-3/#consume-list-of-declarations)
//!
//! Declarations are split on `;` and `:` and every shorthand is expanded to
//! longhands before it reaches the element's declaration block. No
//! tokenizer is involved: the values this crate cares about are lengths and
//! keywords, which survive whitespace splitting intact.

use wombat_common::warning::warn_once;
use wombat_dom::normalize_property_name;

use super::Edge;

/// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
///
/// "<line-style> = none | hidden | dotted | dashed | solid | double |
///                 groove | ridge | inset | outset"
const LINE_STYLES: [&str; 10] = [
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// [§ 4.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
///
/// "<line-width> = <length [0,∞]> | thin | medium | thick"
const LINE_WIDTH_KEYWORDS: [&str; 3] = ["thin", "medium", "thick"];

/// Parse the text of a `style` attribute into longhand `(property, value)`
/// pairs, in declaration order.
///
/// Empty declarations and declarations without a `:` are skipped.
#[must_use]
pub fn parse_style_attribute(text: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for declaration in text.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim();
        if property.is_empty() {
            continue;
        }
        out.extend(expand_declaration(property, value));
    }
    out
}

/// Expand one declaration into longhands.
///
/// Property names are normalized (`paddingLeft` → `padding-left`). Longhands
/// pass through unchanged apart from trimming.
#[must_use]
pub fn expand_declaration(property: &str, value: &str) -> Vec<(String, String)> {
    let property = normalize_property_name(property);
    let value = value.trim();

    match property.as_str() {
        // [§ 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)
        // "The 'padding' property is a shorthand property for setting
        // 'padding-top', 'padding-right', 'padding-bottom', and 'padding-left'"
        "padding" => expand_sides(&property, value, Edge::padding_property),
        // [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
        "margin" => expand_sides(&property, value, Edge::margin_property),
        "border-width" => expand_sides(&property, value, Edge::border_width_property),
        "border-style" => expand_sides(&property, value, Edge::border_style_property),
        "border-color" => expand_sides(&property, value, Edge::border_color_property),
        // [§ 4.4 'border'](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
        //
        // "The border property is a shorthand property for setting the same
        // width, color, and style for all four borders of a box."
        "border" => Edge::CLOCKWISE
            .iter()
            .flat_map(|&edge| expand_border_side(edge, value))
            .collect(),
        "border-top" => expand_border_side(Edge::Top, value),
        "border-right" => expand_border_side(Edge::Right, value),
        "border-bottom" => expand_border_side(Edge::Bottom, value),
        "border-left" => expand_border_side(Edge::Left, value),
        _ => vec![(property, value.to_string())],
    }
}

/// Expand a 1-to-4 value side shorthand.
///
/// [§ 8.3](https://www.w3.org/TR/CSS2/box.html#margin-properties)
/// "If there is only one component value, it applies to all sides. If there
/// are two values, the top and bottom margins are set to the first value and
/// the right and left margins are set to the second. If there are three
/// values, the top is set to the first value, the left and right are set to
/// the second, and the bottom is set to the third. If there are four values,
/// they apply to the top, right, bottom, and left, respectively."
fn expand_sides(
    shorthand: &str,
    value: &str,
    longhand: fn(Edge) -> String,
) -> Vec<(String, String)> {
    let parts: Vec<&str> = value.split_ascii_whitespace().collect();
    let [top, right, bottom, left] = match parts.as_slice() {
        [all] => [*all; 4],
        [vertical, horizontal] => [*vertical, *horizontal, *vertical, *horizontal],
        [top, horizontal, bottom] => [*top, *horizontal, *bottom, *horizontal],
        [top, right, bottom, left] => [*top, *right, *bottom, *left],
        _ => {
            let _ = warn_once("CSS", &format!("ignoring '{shorthand}: {value}'"));
            return Vec::new();
        }
    };

    Edge::CLOCKWISE
        .iter()
        .zip([top, right, bottom, left])
        .map(|(&edge, v)| (longhand(edge), v.to_string()))
        .collect()
}

/// [§ 4.4 'border-top'](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
///
/// "<line-width> || <line-style> || <color>"
///
/// Omitted parts reset to their initial values: `medium`, `none` and
/// `currentcolor`.
fn expand_border_side(edge: Edge, value: &str) -> Vec<(String, String)> {
    let mut width = "medium";
    let mut style = "none";
    let mut color = "currentcolor";

    for part in value.split_ascii_whitespace() {
        let lower = part.to_ascii_lowercase();
        if LINE_STYLES.contains(&lower.as_str()) {
            style = part;
        } else if LINE_WIDTH_KEYWORDS.contains(&lower.as_str())
            || part.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        {
            width = part;
        } else {
            color = part;
        }
    }

    vec![
        (edge.border_width_property(), width.to_string()),
        (edge.border_style_property(), style.to_string()),
        (edge.border_color_property(), color.to_string()),
    ]
}
