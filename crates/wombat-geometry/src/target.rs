//! What a geometry accessor is pointed at.

/// A window, the document, or one of its elements.
///
/// Classification is a plain match and is redone on every access; the DOM
/// may change between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target<E> {
    /// The `Window` object. All boxes coincide with the viewport.
    Window,
    /// The `Document` object. All boxes coincide with the document extent.
    Document,
    /// A regular element, measured through its own box model.
    Element(E),
}

impl<E: Copy> Target<E> {
    /// Is it the window?
    #[must_use]
    pub const fn is_window(&self) -> bool {
        matches!(self, Self::Window)
    }

    /// The element handle, when the target is an element. `None` means the
    /// window or the document.
    #[must_use]
    pub const fn element(&self) -> Option<E> {
        match self {
            Self::Element(element) => Some(*element),
            Self::Window | Self::Document => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(Target::<u32>::Window.is_window());
        assert!(!Target::<u32>::Document.is_window());
        assert!(!Target::Element(7_u32).is_window());

        assert_eq!(Target::Element(7_u32).element(), Some(7));
        assert_eq!(Target::<u32>::Document.element(), None);
        assert_eq!(Target::<u32>::Window.element(), None);
    }
}
