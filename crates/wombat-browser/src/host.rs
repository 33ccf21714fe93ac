//! The headless host.

use wombat_common::warning::{clear_warnings, warn_once};
use wombat_css::{
    Edge, LayoutBox, LayoutTree, PositionType, Rect, expand_declaration, format_px, is_positioned, layout_document,
    parse_style_attribute, resolved_value,
};
use wombat_dom::{DomTree, ElementData, NodeId, NodeType, Window, clamp_scroll, normalize_property_name};
use wombat_geometry::{Axis, GeometryHost, StyleReader};

use crate::error::HostError;

/// A document with an `html` root, a `body`, and a window to view it in.
///
/// Geometry is never cached: every read lays the document out again, so a
/// read always reflects the writes before it.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    tree: DomTree,
    window: Window,
}

impl HeadlessHost {
    /// An empty `<html><body>` document in a `width` × `height` viewport.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_window(Window::new(width, height))
    }

    /// Like [`HeadlessHost::new`], but the window hides `innerWidth`,
    /// `innerHeight` and the page offsets.
    #[must_use]
    pub fn legacy(width: f64, height: f64) -> Self {
        Self::with_window(Window::legacy(width, height))
    }

    /// An empty `<html><body>` document shown in `window`. Warnings
    /// recorded for an earlier document are forgotten.
    #[must_use]
    pub fn with_window(window: Window) -> Self {
        clear_warnings();

        let mut tree = DomTree::new();
        let html = tree.alloc(NodeType::Element(ElementData::new("html")));
        tree.append_child(NodeId::ROOT, html);
        let body = tree.alloc(NodeType::Element(ElementData::new("body")));
        tree.append_child(html, body);

        Self { tree, window }
    }

    /// The DOM tree.
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// The window.
    #[must_use]
    pub const fn window(&self) -> &Window {
        &self.window
    }

    /// `document.documentElement`
    #[must_use]
    pub fn html(&self) -> NodeId {
        self.tree.document_element().unwrap_or(NodeId::ROOT)
    }

    /// `document.body`
    #[must_use]
    pub fn body_element(&self) -> NodeId {
        self.tree.body().unwrap_or_else(|| self.html())
    }

    /// Create a `tag` element with the given inline `style` text and append
    /// it to `parent`.
    ///
    /// # Errors
    ///
    /// Fails when `parent` is not an element of this document.
    pub fn append_element(&mut self, parent: NodeId, tag: &str, style: &str) -> Result<NodeId, HostError> {
        let _ = self.element(parent)?;

        let mut data = ElementData::new(tag);
        for (property, value) in parse_style_attribute(style) {
            let _ = data.style.set(&property, &value);
        }
        let id = self.tree.alloc(NodeType::Element(data));
        self.tree.append_child(parent, id);
        Ok(id)
    }

    /// Append a text node to `parent`. Text is not measured.
    ///
    /// # Errors
    ///
    /// Fails when `parent` is not an element of this document.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Result<NodeId, HostError> {
        let _ = self.element(parent)?;
        let _ = warn_once("Browser", "text nodes take no space in headless layout");
        let id = self.tree.alloc(NodeType::Text(text.to_string()));
        self.tree.append_child(parent, id);
        Ok(id)
    }

    /// The declared inline value of `property`, if any.
    ///
    /// # Errors
    ///
    /// Fails when `id` is not an element of this document.
    pub fn inline_style(&self, id: NodeId, property: &str) -> Result<Option<String>, HostError> {
        Ok(self.element(id)?.style.get(property).map(str::to_string))
    }

    /// Lay the document out as it currently stands.
    #[must_use]
    pub fn layout(&self) -> LayoutTree {
        layout_document(&self.tree, &self.window)
    }

    fn element(&self, id: NodeId) -> Result<&ElementData, HostError> {
        let node = self.tree.get(id).ok_or(HostError::UnknownNode(id))?;
        match &node.node_type {
            NodeType::Element(data) => Ok(data),
            NodeType::Document | NodeType::Text(_) => Err(HostError::NotAnElement(id)),
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, HostError> {
        let _ = self.element(id)?;
        self.tree.as_element_mut(id).ok_or(HostError::NotAnElement(id))
    }

    /// The element's box, or `None` when it is not rendered.
    fn layout_box(&self, id: NodeId) -> Result<Option<LayoutBox>, HostError> {
        let _ = self.element(id)?;
        Ok(self.layout().get(id).copied())
    }

    fn viewport_extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.window.viewport_width(),
            Axis::Vertical => self.window.viewport_height(),
        }
    }

    /// [CSSOM View § 5](https://drafts.csswg.org/cssom-view/#dom-element-scrollwidth)
    ///
    /// "If the element is the root element ... return max(viewport scrolling
    /// area width, viewport width)."
    fn root_scroll_extent(&self, layout_box: Option<&LayoutBox>, axis: Axis) -> f64 {
        let content = layout_box.map_or(0.0, |b| scroll_extent_of(b, axis));
        content.max(self.viewport_extent(axis))
    }

    fn max_window_scroll(&self, axis: Axis) -> f64 {
        let layout = self.layout();
        let root = self.tree.document_element().and_then(|id| layout.get(id));
        self.root_scroll_extent(root, axis) - self.viewport_extent(axis)
    }

    /// Summed scroll offsets of the ancestors whose scrolling box carries
    /// `id`, below the root element (the root scrolls the window).
    ///
    /// An absolutely positioned box only scrolls with the ancestors from its
    /// containing block upwards; a fixed box scrolls with none of them.
    fn ancestor_scroll(&self, id: NodeId, layout: &LayoutTree) -> (f64, f64) {
        let position_of = |node: NodeId| layout.get(node).map_or(PositionType::Static, |b| b.position);
        let root = self.tree.document_element();

        let mut position = position_of(id);
        let (mut dx, mut dy) = (0.0, 0.0);
        for ancestor in self.tree.ancestors(id) {
            if Some(ancestor) == root {
                break;
            }
            let Some(data) = self.tree.as_element(ancestor) else {
                break;
            };
            let ancestor_position = position_of(ancestor);
            let carries = match position {
                PositionType::Fixed => false,
                PositionType::Absolute => ancestor_position.establishes_containing_block(),
                PositionType::Static | PositionType::Relative | PositionType::Sticky => true,
            };
            if carries {
                dx += data.scroll.left;
                dy += data.scroll.top;
                position = ancestor_position;
            }
        }
        (dx, dy)
    }

    /// [CSSOM View § 6](https://drafts.csswg.org/cssom-view/#dom-htmlelement-offsetparent)
    ///
    /// "Return the nearest ancestor of the element for which at least one of
    /// the following is true ... The element is a containing block of
    /// absolutely-positioned descendants ... The element is the HTML body
    /// element."
    fn offset_parent(&self, id: NodeId, layout: &LayoutTree) -> Option<NodeId> {
        let body = self.tree.body();
        if Some(id) == body || Some(id) == self.tree.document_element() {
            return None;
        }
        if layout.get(id).is_some_and(|b| b.position == PositionType::Fixed) {
            return None;
        }

        self.tree.ancestors(id).find(|&ancestor| {
            Some(ancestor) == body
                || layout
                    .get(ancestor)
                    .is_some_and(|b| b.position.establishes_containing_block())
        })
    }
}

impl StyleReader for HeadlessHost {
    type Element = NodeId;
    type Error = HostError;

    /// [CSSOM § 9](https://drafts.csswg.org/cssom/#resolved-values)
    ///
    /// "If the property applies to a positioned element and the resolved
    /// value of the display property is not none or contents, and the
    /// property is not over-constrained, the resolved value is the used
    /// value."
    ///
    /// That rule covers `top`, `right`, `bottom` and `left`; everything else
    /// is the declared or initial value.
    fn computed_style(&self, element: NodeId, property: &str) -> Result<String, HostError> {
        let style = &self.element(element)?.style;
        let property = normalize_property_name(property);

        if let Ok(edge) = property.parse::<Edge>()
            && is_positioned(&resolved_value(style, "position"))
        {
            let layout = self.layout();
            if let Some(layout_box) = layout.get(element) {
                return Ok(format_px(layout_box.insets.side(edge)));
            }
        }

        Ok(resolved_value(style, &property))
    }

    /// Shorthands are expanded before they are stored.
    fn set_style(&mut self, element: NodeId, property: &str, value: &str) -> Result<(), HostError> {
        let data = self.element_mut(element)?;
        for (longhand, value) in expand_declaration(property, value) {
            let _ = data.style.set(&longhand, &value);
        }
        Ok(())
    }
}

impl GeometryHost for HeadlessHost {
    fn inner_size(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.window.inner_width(),
            Axis::Vertical => self.window.inner_height(),
        }
    }

    fn page_offset(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.window.page_x_offset(),
            Axis::Vertical => self.window.page_y_offset(),
        }
    }

    fn scroll_window_to(&mut self, x: f64, y: f64) {
        let max_x = self.max_window_scroll(Axis::Horizontal);
        let max_y = self.max_window_scroll(Axis::Vertical);
        self.window.scroll_to(x, y, max_x, max_y);
    }

    fn document_element(&self) -> Option<NodeId> {
        self.tree.document_element()
    }

    fn body(&self) -> Option<NodeId> {
        self.tree.body()
    }

    /// [CSSOM View § 5](https://drafts.csswg.org/cssom-view/#dom-element-getboundingclientrect)
    ///
    /// Border box relative to the viewport: moved up and left by the window
    /// scroll and by every scrolled ancestor the box scrolls with.
    /// Unrendered elements report an all-zero rectangle.
    fn bounding_client_rect(&self, element: NodeId) -> Result<Rect, HostError> {
        let _ = self.element(element)?;
        let layout = self.layout();
        let Some(own) = layout.get(element) else {
            return Ok(Rect::default());
        };

        let (dx, dy) = self.ancestor_scroll(element, &layout);
        Ok(own.dimensions.border_box().translate(
            -self.window.scroll_x() - dx,
            -self.window.scroll_y() - dy,
        ))
    }

    /// [CSSOM View § 6](https://drafts.csswg.org/cssom-view/#dom-htmlelement-offsettop)
    ///
    /// "1. If the element is the HTML body element or does not have any
    /// associated CSS layout box return zero and terminate this algorithm.
    /// 2. If the offsetParent of the element is null return the y-coordinate
    /// of the top border edge of the first CSS layout box associated with the
    /// element, relative to the initial containing block origin, ignoring any
    /// transforms that apply to the element and its ancestors.
    /// 3. Return the result of subtracting the y-coordinate of the top padding
    /// edge of the first CSS layout box associated with the offsetParent of
    /// the element from the y-coordinate of the top border edge of the first
    /// CSS layout box associated with the element."
    ///
    /// As browsers do, a `body` offset parent is measured from the initial
    /// containing block rather than from its padding edge.
    fn offset_position(&self, element: NodeId, axis: Axis) -> Result<f64, HostError> {
        let _ = self.element(element)?;
        if Some(element) == self.tree.body() {
            return Ok(0.0);
        }

        let layout = self.layout();
        let Some(own) = layout.get(element) else {
            return Ok(0.0);
        };
        let border_edge = axis.start_of(&own.dimensions.border_box());

        let parent_edge = self
            .offset_parent(element, &layout)
            .filter(|&parent| Some(parent) != self.tree.body())
            .and_then(|parent| layout.get(parent))
            .map_or(0.0, |parent| axis.start_of(&parent.dimensions.padding_box()));

        Ok(border_edge - parent_edge)
    }

    fn offset_extent(&self, element: NodeId, axis: Axis) -> Result<f64, HostError> {
        Ok(self
            .layout_box(element)?
            .map_or(0.0, |b| axis.extent_of(&b.dimensions.border_box())))
    }

    /// [CSSOM View § 5](https://drafts.csswg.org/cssom-view/#dom-element-clientwidth)
    ///
    /// "If the element is the root element ... return the viewport width
    /// excluding the size of a rendered scroll bar (if any)."
    fn client_extent(&self, element: NodeId, axis: Axis) -> Result<f64, HostError> {
        let layout_box = self.layout_box(element)?;
        if Some(element) == self.tree.document_element() {
            return Ok(self.viewport_extent(axis));
        }
        Ok(layout_box.map_or(0.0, |b| axis.extent_of(&b.dimensions.padding_box())))
    }

    fn scroll_extent(&self, element: NodeId, axis: Axis) -> Result<f64, HostError> {
        let layout_box = self.layout_box(element)?;
        if Some(element) == self.tree.document_element() {
            return Ok(self.root_scroll_extent(layout_box.as_ref(), axis));
        }
        Ok(layout_box.map_or(0.0, |b| scroll_extent_of(&b, axis)))
    }

    /// [CSSOM View § 5](https://drafts.csswg.org/cssom-view/#dom-element-scrolltop)
    ///
    /// "If the element is the root element return the value of scrollY on
    /// window."
    fn scroll_offset(&self, element: NodeId, axis: Axis) -> Result<f64, HostError> {
        let data = self.element(element)?;
        if Some(element) == self.tree.document_element() {
            return Ok(match axis {
                Axis::Horizontal => self.window.scroll_x(),
                Axis::Vertical => self.window.scroll_y(),
            });
        }
        Ok(match axis {
            Axis::Horizontal => data.scroll.left,
            Axis::Vertical => data.scroll.top,
        })
    }

    /// Offsets clamp to what the element's content allows; the root element
    /// scrolls the window instead.
    fn set_scroll_offset(&mut self, element: NodeId, axis: Axis, value: f64) -> Result<(), HostError> {
        if Some(element) == self.tree.document_element() {
            match axis {
                Axis::Horizontal => self.scroll_window_to(value, self.window.scroll_y()),
                Axis::Vertical => self.scroll_window_to(self.window.scroll_x(), value),
            }
            return Ok(());
        }

        let max = self.scroll_extent(element, axis)? - self.client_extent(element, axis)?;
        let data = self.element_mut(element)?;
        match axis {
            Axis::Horizontal => data.scroll.left = clamp_scroll(value, max),
            Axis::Vertical => data.scroll.top = clamp_scroll(value, max),
        }
        Ok(())
    }
}

fn scroll_extent_of(layout_box: &LayoutBox, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => layout_box.scroll_width(),
        Axis::Vertical => layout_box.scroll_height(),
    }
}
