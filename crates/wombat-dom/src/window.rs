//! The `Window` object.
//!
//! [HTML § 7.2 The Window object](https://html.spec.whatwg.org/multipage/nav-history-apis.html#the-window-object)
//! [CSSOM View § 4 Extensions to the Window Interface](https://drafts.csswg.org/cssom-view/#extensions-to-the-window-interface)

/// Viewport size and page scroll state.
///
/// A *legacy* window models engines that do not expose `innerWidth`,
/// `innerHeight`, `pageXOffset` or `pageYOffset`. The underlying state is
/// still tracked, it just is not reported through those attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    viewport_width: f64,
    viewport_height: f64,
    scroll_x: f64,
    scroll_y: f64,
    legacy: bool,
}

impl Window {
    /// A window with the given viewport size, scrolled to the origin.
    #[must_use]
    pub const fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            viewport_width,
            viewport_height,
            scroll_x: 0.0,
            scroll_y: 0.0,
            legacy: false,
        }
    }

    /// A window that hides `innerWidth`/`innerHeight` and the page offsets.
    #[must_use]
    pub const fn legacy(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            legacy: true,
            ..Self::new(viewport_width, viewport_height)
        }
    }

    /// Whether this window hides the viewport and page-offset attributes.
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        self.legacy
    }

    /// Viewport width, regardless of what the window reports.
    #[must_use]
    pub const fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Viewport height, regardless of what the window reports.
    #[must_use]
    pub const fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// [CSSOM View § 4](https://drafts.csswg.org/cssom-view/#dom-window-innerwidth)
    ///
    /// "The innerWidth attribute must return the viewport width including the
    /// size of a rendered scroll bar (if any), or zero if there is no viewport."
    #[must_use]
    pub const fn inner_width(&self) -> Option<f64> {
        if self.legacy { None } else { Some(self.viewport_width) }
    }

    /// [CSSOM View § 4](https://drafts.csswg.org/cssom-view/#dom-window-innerheight)
    #[must_use]
    pub const fn inner_height(&self) -> Option<f64> {
        if self.legacy { None } else { Some(self.viewport_height) }
    }

    /// [CSSOM View § 4](https://drafts.csswg.org/cssom-view/#dom-window-pagexoffset)
    ///
    /// "The pageXOffset attribute must return the value returned by the
    /// scrollX attribute."
    #[must_use]
    pub const fn page_x_offset(&self) -> Option<f64> {
        if self.legacy { None } else { Some(self.scroll_x) }
    }

    /// [CSSOM View § 4](https://drafts.csswg.org/cssom-view/#dom-window-pageyoffset)
    #[must_use]
    pub const fn page_y_offset(&self) -> Option<f64> {
        if self.legacy { None } else { Some(self.scroll_y) }
    }

    /// Horizontal scroll offset, regardless of what the window reports.
    #[must_use]
    pub const fn scroll_x(&self) -> f64 {
        self.scroll_x
    }

    /// Vertical scroll offset, regardless of what the window reports.
    #[must_use]
    pub const fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// [CSSOM View § 4](https://drafts.csswg.org/cssom-view/#dom-window-scroll)
    ///
    /// Scroll the viewport to `(x, y)`, clamped to `[0, max_x]` × `[0, max_y]`.
    /// The caller supplies the maxima since they depend on layout.
    pub const fn scroll_to(&mut self, x: f64, y: f64, max_x: f64, max_y: f64) {
        self.scroll_x = clamp_scroll(x, max_x);
        self.scroll_y = clamp_scroll(y, max_y);
    }
}

/// Clamp a scroll offset into `[0, max]`, treating a negative `max` as zero.
#[must_use]
pub const fn clamp_scroll(value: f64, max: f64) -> f64 {
    let max = if max > 0.0 { max } else { 0.0 };
    if value.is_nan() || value < 0.0 {
        0.0
    } else if value > max {
        max
    } else {
        value
    }
}
