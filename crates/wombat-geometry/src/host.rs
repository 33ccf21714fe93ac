//! The narrow interface a DOM implementation exposes to the accessors.
//!
//! Every method returns a raw value the way the corresponding DOM attribute
//! reports it. Nothing here knows about boundaries or box-sizing; that
//! reconciliation is the job of the accessor modules.

use wombat_css::{BoxSizing, Rect};

use crate::boundary::Axis;

/// Resolved style lookup and inline style writes.
///
/// [CSSOM § 9 Resolved Values](https://drafts.csswg.org/cssom/#resolved-values)
pub trait StyleReader {
    /// Handle to an element. Cheap to copy; never cached by the accessors.
    type Element: Copy;
    /// Failure raised by the host, e.g. for a handle that is not an element.
    /// Accessors propagate it untouched.
    type Error: std::error::Error;

    /// `getComputedStyle(element)[property]`. Property names are kebab-case.
    ///
    /// # Errors
    ///
    /// Fails when `element` does not refer to a live element.
    fn computed_style(&self, element: Self::Element, property: &str) -> Result<String, Self::Error>;

    /// `element.style[property] = value`.
    ///
    /// # Errors
    ///
    /// Fails when `element` does not refer to a live element.
    fn set_style(&mut self, element: Self::Element, property: &str, value: &str) -> Result<(), Self::Error>;

    /// The element's resolved `box-sizing`.
    ///
    /// # Errors
    ///
    /// Propagates [`StyleReader::computed_style`] failures.
    fn box_sizing(&self, element: Self::Element) -> Result<BoxSizing, Self::Error> {
        Ok(BoxSizing::from_resolved(&self.computed_style(element, "box-sizing")?))
    }
}

/// Raw geometry of the window, the document, and its elements.
///
/// [CSSOM View § 4](https://drafts.csswg.org/cssom-view/#extensions-to-the-window-interface),
/// [§ 5](https://drafts.csswg.org/cssom-view/#extension-to-the-element-interface),
/// [§ 6](https://drafts.csswg.org/cssom-view/#extensions-to-the-htmlelement-interface)
pub trait GeometryHost: StyleReader {
    /// `window.innerWidth` / `window.innerHeight`, or `None` when the host
    /// does not expose them.
    fn inner_size(&self, axis: Axis) -> Option<f64>;

    /// `window.pageXOffset` / `window.pageYOffset`, or `None` when the host
    /// does not expose them.
    fn page_offset(&self, axis: Axis) -> Option<f64>;

    /// `window.scrollTo(x, y)`.
    fn scroll_window_to(&mut self, x: f64, y: f64);

    /// `document.documentElement`
    fn document_element(&self) -> Option<Self::Element>;

    /// `document.body`
    fn body(&self) -> Option<Self::Element>;

    /// `element.getBoundingClientRect()`, relative to the viewport.
    ///
    /// # Errors
    ///
    /// Fails when `element` does not refer to a live element.
    fn bounding_client_rect(&self, element: Self::Element) -> Result<Rect, Self::Error>;

    /// `element.offsetLeft` / `element.offsetTop`.
    ///
    /// # Errors
    ///
    /// Fails when `element` does not refer to a live element.
    fn offset_position(&self, element: Self::Element, axis: Axis) -> Result<f64, Self::Error>;

    /// `element.offsetWidth` / `element.offsetHeight`.
    ///
    /// # Errors
    ///
    /// Fails when `element` does not refer to a live element.
    fn offset_extent(&self, element: Self::Element, axis: Axis) -> Result<f64, Self::Error>;

    /// `element.clientWidth` / `element.clientHeight`.
    ///
    /// # Errors
    ///
    /// Fails when `element` does not refer to a live element.
    fn client_extent(&self, element: Self::Element, axis: Axis) -> Result<f64, Self::Error>;

    /// `element.scrollWidth` / `element.scrollHeight`.
    ///
    /// # Errors
    ///
    /// Fails when `element` does not refer to a live element.
    fn scroll_extent(&self, element: Self::Element, axis: Axis) -> Result<f64, Self::Error>;

    /// `element.scrollLeft` / `element.scrollTop`.
    ///
    /// # Errors
    ///
    /// Fails when `element` does not refer to a live element.
    fn scroll_offset(&self, element: Self::Element, axis: Axis) -> Result<f64, Self::Error>;

    /// `element.scrollLeft = value` / `element.scrollTop = value`.
    ///
    /// # Errors
    ///
    /// Fails when `element` does not refer to a live element.
    fn set_scroll_offset(&mut self, element: Self::Element, axis: Axis, value: f64) -> Result<(), Self::Error>;
}
