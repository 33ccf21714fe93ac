//! Block flow and positioned layout.
//!
//! [CSS 2.1 § 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
//!
//! "In a block formatting context, boxes are laid out one after the other,
//! vertically, beginning at the top of a containing block."
//!
//! Every element generates a block box. Text is not measured, margins do not
//! collapse, and there are no floats. What this layout does get right is the
//! part geometry accessors depend on: how `width`/`height` combine with
//! padding, border and `box-sizing`, where relatively and absolutely
//! positioned boxes land, and how far content overflows its scroll container.

use std::collections::HashMap;

use wombat_dom::{DomTree, InlineStyle, NodeId, Window};

use super::box_model::{BoxDimensions, EdgeSizes, Rect};
use crate::style::{Edge, resolved_value};
use crate::values::{AutoLength, BoxSizing, PositionType, parse_auto_length, parse_px};

/// The laid-out box of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBox {
    /// The element this box was generated for.
    pub node: NodeId,
    /// Content rectangle and edges, in document coordinates.
    pub dimensions: BoxDimensions,
    /// The element's `position` at layout time.
    pub position: PositionType,
    /// [CSS Overflow 3 § 2.2](https://www.w3.org/TR/css-overflow-3/#scrollable)
    ///
    /// The padding box united with the border boxes of all descendants.
    pub scrollable_overflow: Rect,
    /// [CSSOM § 9](https://drafts.csswg.org/cssom/#resolved-values)
    ///
    /// Used values of `top`, `right`, `bottom` and `left`. All zero unless
    /// the box is relatively, absolutely or fixed positioned.
    pub insets: EdgeSizes,
}

impl LayoutBox {
    /// [CSSOM View § 5](https://drafts.csswg.org/cssom-view/#dom-element-scrollwidth)
    ///
    /// "Return the width of the element's scrolling area."
    ///
    /// Overflow to the left of the padding edge is not scrollable.
    #[must_use]
    pub fn scroll_width(&self) -> f64 {
        self.scrollable_overflow.right() - self.dimensions.padding_box().x
    }

    /// [CSSOM View § 5](https://drafts.csswg.org/cssom-view/#dom-element-scrollheight)
    #[must_use]
    pub fn scroll_height(&self) -> f64 {
        self.scrollable_overflow.bottom() - self.dimensions.padding_box().y
    }
}

/// Result of laying out a document: one [`LayoutBox`] per rendered element.
#[derive(Debug, Clone, Default)]
pub struct LayoutTree {
    boxes: HashMap<NodeId, LayoutBox>,
    viewport: Rect,
}

impl LayoutTree {
    /// The box generated for `id`, if the element is rendered.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&LayoutBox> {
        self.boxes.get(&id)
    }

    /// The initial containing block.
    #[must_use]
    pub const fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Number of boxes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether no element was laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

/// Lay out the document element and its descendants against the window's
/// viewport.
///
/// [§ 10.1 Definition of "containing block"](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
///
/// "The containing block in which the root element lives is a rectangle
/// called the initial containing block. For continuous media, it has the
/// dimensions of the viewport and is anchored at the canvas origin."
#[must_use]
pub fn layout_document(tree: &DomTree, window: &Window) -> LayoutTree {
    let viewport = Rect::new(0.0, 0.0, window.viewport_width(), window.viewport_height());
    let mut flow = FlowLayout {
        tree,
        boxes: HashMap::new(),
        // "If the element's position is 'fixed', the containing block is
        // established by the viewport."
        fixed_containing_block: viewport.translate(window.scroll_x(), window.scroll_y()),
    };

    if let Some(root) = tree.document_element() {
        let _ = flow.layout_block(root, viewport, (0.0, 0.0), viewport);
    }

    LayoutTree {
        boxes: flow.boxes,
        viewport,
    }
}

struct FlowLayout<'a> {
    tree: &'a DomTree,
    boxes: HashMap<NodeId, LayoutBox>,
    fixed_containing_block: Rect,
}

impl FlowLayout<'_> {
    /// Lay out `id` with its margin box's top-left corner at `static_position`.
    ///
    /// Returns the height the box takes up in normal flow (zero when it is
    /// out of flow) and the overflow rectangle it contributes to its
    /// ancestors' scrolling areas.
    fn layout_block(
        &mut self,
        id: NodeId,
        containing_block: Rect,
        static_position: (f64, f64),
        absolute_containing_block: Rect,
    ) -> (f64, Option<Rect>) {
        let tree = self.tree;
        let Some(element) = tree.as_element(id) else {
            return (0.0, None);
        };
        let style = &element.style;
        let value = |property: &str| resolved_value(style, property);

        // [§ 9.2.4 The 'display' property](https://www.w3.org/TR/CSS2/visuren.html#display-prop)
        // "none: This value causes an element to not appear in the formatting
        // structure"
        if value("display").eq_ignore_ascii_case("none") {
            return (0.0, None);
        }

        let padding = edges(style, Edge::padding_property);
        let border = edges(style, Edge::border_width_property);
        let margin = edges(style, Edge::margin_property);
        let position = PositionType::from_resolved(&value("position"));
        let sizing = BoxSizing::from_resolved(&value("box-sizing"));

        let cb = match position {
            PositionType::Absolute => absolute_containing_block,
            PositionType::Fixed => self.fixed_containing_block,
            _ => containing_block,
        };

        // [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
        //
        // "'margin-left' + 'border-left-width' + 'padding-left' + 'width' +
        // 'padding-right' + 'border-right-width' + 'margin-right' = width of
        // containing block"
        let content_width = match parse_auto_length(&value("width")) {
            AutoLength::Px(width) => used_content_size(width, padding.horizontal() + border.horizontal(), sizing),
            AutoLength::Auto => {
                (cb.width - margin.horizontal() - padding.horizontal() - border.horizontal()).max(0.0)
            }
        };
        let content_height = match parse_auto_length(&value("height")) {
            AutoLength::Px(height) => Some(used_content_size(
                height,
                padding.vertical() + border.vertical(),
                sizing,
            )),
            AutoLength::Auto => None,
        };

        let (x, y) = border_box_origin(position, style, cb, static_position, &margin);
        let content_x = x + border.left + padding.left;
        let content_y = y + border.top + padding.top;

        let child_containing_block = Rect::new(
            content_x,
            content_y,
            content_width,
            content_height.unwrap_or(0.0),
        );
        let child_absolute_containing_block = if position.establishes_containing_block() {
            Rect::new(
                x + border.left,
                y + border.top,
                content_width + padding.horizontal(),
                content_height.unwrap_or(0.0) + padding.vertical(),
            )
        } else {
            absolute_containing_block
        };

        let mut cursor = content_y;
        let mut descendant_overflow: Option<Rect> = None;
        for &child in tree.children(id) {
            let (flow_height, overflow) = self.layout_block(
                child,
                child_containing_block,
                (content_x, cursor),
                child_absolute_containing_block,
            );
            cursor += flow_height;
            descendant_overflow = unite(descendant_overflow, overflow);
        }

        // [§ 10.6.3 Block-level non-replaced elements in normal flow when
        // 'overflow' computes to 'visible'](https://www.w3.org/TR/CSS2/visudet.html#normal-block)
        //
        // "If 'height' is 'auto', the height depends on whether the element has
        // any block-level children ... the bottom edge of the bottom (possibly
        // collapsed) margin of its last in-flow child"
        let content_height = content_height.unwrap_or(cursor - content_y);

        let dimensions = BoxDimensions {
            content: Rect::new(content_x, content_y, content_width, content_height),
            padding,
            border,
            margin,
        };
        let padding_box = dimensions.padding_box();
        let border_box = dimensions.border_box();
        let insets = used_insets(position, dimensions.margin_box(), cb, static_position);

        #[cfg(feature = "layout-trace")]
        eprintln!(
            "[LAYOUT] node={id:?} <{}> position={position} border_box={border_box:?}",
            element.tag_name
        );

        let _ = self.boxes.insert(
            id,
            LayoutBox {
                node: id,
                dimensions,
                position,
                scrollable_overflow: descendant_overflow.map_or(padding_box, |o| padding_box.union(o)),
                insets,
            },
        );

        let flow_height = if position.is_out_of_flow() {
            0.0
        } else {
            dimensions.margin_box().height
        };
        (flow_height, unite(Some(border_box), descendant_overflow))
    }
}

/// [§ 9.3.2 Box offsets](https://www.w3.org/TR/CSS2/visuren.html#position-props)
///
/// Top-left corner of the border box.
fn border_box_origin(
    position: PositionType,
    style: &InlineStyle,
    cb: Rect,
    static_position: (f64, f64),
    margin: &EdgeSizes,
) -> (f64, f64) {
    let offset = |property: &str| parse_auto_length(&resolved_value(style, property));
    let (static_x, static_y) = (static_position.0 + margin.left, static_position.1 + margin.top);

    match position {
        // [§ 9.4.3 Relative positioning](https://www.w3.org/TR/CSS2/visuren.html#relative-positioning)
        //
        // "If both 'left' and 'right' are 'auto' (their initial values), the
        // used values are '0' (i.e., the boxes stay in their original
        // position). If 'left' is 'auto', its used value is minus the value of
        // 'right' (i.e., the boxes move to the left by the value of 'right')."
        PositionType::Relative => {
            let dx = match offset("left") {
                AutoLength::Px(left) => left,
                AutoLength::Auto => -offset("right").px_or(0.0),
            };
            let dy = match offset("top") {
                AutoLength::Px(top) => top,
                AutoLength::Auto => -offset("bottom").px_or(0.0),
            };
            (static_x + dx, static_y + dy)
        }
        // [§ 10.3.7 Absolutely positioned, non-replaced elements](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-width)
        //
        // Auto offsets fall back to the static position.
        PositionType::Absolute | PositionType::Fixed => {
            let x = match offset("left") {
                AutoLength::Px(left) => cb.x + left + margin.left,
                AutoLength::Auto => static_x,
            };
            let y = match offset("top") {
                AutoLength::Px(top) => cb.y + top + margin.top,
                AutoLength::Auto => static_y,
            };
            (x, y)
        }
        PositionType::Static | PositionType::Sticky => (static_x, static_y),
    }
}

/// [§ 9.3.2 Box offsets](https://www.w3.org/TR/CSS2/visuren.html#position-props)
///
/// Used box offsets, read back from where the margin box landed. A relative
/// box reports its shift from the static position (so `bottom` is minus
/// `top`); an absolute or fixed box reports the distance of each margin edge
/// from the matching edge of its containing block.
fn used_insets(position: PositionType, margin_box: Rect, cb: Rect, static_position: (f64, f64)) -> EdgeSizes {
    match position {
        PositionType::Relative => {
            let dx = margin_box.x - static_position.0;
            let dy = margin_box.y - static_position.1;
            EdgeSizes {
                top: dy,
                right: -dx,
                bottom: -dy,
                left: dx,
            }
        }
        PositionType::Absolute | PositionType::Fixed => EdgeSizes {
            top: margin_box.top() - cb.top(),
            right: cb.right() - margin_box.right(),
            bottom: cb.bottom() - margin_box.bottom(),
            left: margin_box.left() - cb.left(),
        },
        PositionType::Static | PositionType::Sticky => EdgeSizes::default(),
    }
}

/// [CSS Box Sizing 3 § 4.1](https://www.w3.org/TR/css-sizing-3/#box-sizing)
///
/// Content-box size for a specified `width`/`height`. Under `border-box` the
/// padding and border are carved out of the specified size, floored at zero.
fn used_content_size(specified: f64, padding_and_border: f64, sizing: BoxSizing) -> f64 {
    let content = if sizing.is_border_box() {
        specified - padding_and_border
    } else {
        specified
    };
    content.max(0.0)
}

/// Resolve the four sides of an edge property family to pixels.
fn edges(style: &InlineStyle, longhand: fn(Edge) -> String) -> EdgeSizes {
    let side = |edge: Edge| parse_px(&resolved_value(style, &longhand(edge)));
    EdgeSizes {
        top: side(Edge::Top),
        right: side(Edge::Right),
        bottom: side(Edge::Bottom),
        left: side(Edge::Left),
    }
}

fn unite(a: Option<Rect>, b: Option<Rect>) -> Option<Rect> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.union(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
