//! Inline style declaration block.
//!
//! [CSSOM § 6.6 CSS Declaration Blocks](https://drafts.csswg.org/cssom/#css-declaration-blocks)

use std::collections::BTreeMap;

/// [CSSOM § 6.6](https://drafts.csswg.org/cssom/#css-declaration-blocks)
///
/// "A CSS declaration block is an ordered collection of CSS properties with
/// their associated values."
///
/// Only longhand properties are stored here. Shorthand expansion is a CSS
/// concern and happens before values reach the DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: BTreeMap<String, String>,
}

impl InlineStyle {
    /// Look up a declared value. Accepts both `padding-left` and `paddingLeft`.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .get(&normalize_property_name(property))
            .map(String::as_str)
    }

    /// Set a declared value, replacing any previous one.
    ///
    /// Returns the previous value, if any.
    pub fn set(&mut self, property: &str, value: &str) -> Option<String> {
        self.declarations
            .insert(normalize_property_name(property), value.trim().to_string())
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the block holds no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// [CSSOM § 6.6.1](https://drafts.csswg.org/cssom/#camel-cased-attribute)
///
/// "For each CSS property property that is a supported CSS property, except
/// for properties that have no "-" (U+002D) in the property name, the
/// following partial interface applies where camel-cased attribute is
/// obtained by running the CSS property to IDL attribute algorithm."
///
/// This runs that mapping in reverse: `borderLeftWidth` becomes
/// `border-left-width`. Names that are already dashed are lowercased.
#[must_use]
pub fn normalize_property_name(property: &str) -> String {
    let property = property.trim();
    if property.contains('-') {
        return property.to_ascii_lowercase();
    }

    let mut out = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_camel_case() {
        assert_eq!(normalize_property_name("paddingLeft"), "padding-left");
        assert_eq!(normalize_property_name("borderTopWidth"), "border-top-width");
        assert_eq!(normalize_property_name("boxSizing"), "box-sizing");
        assert_eq!(normalize_property_name("width"), "width");
    }

    #[test]
    fn test_normalize_dashed_is_lowercased() {
        assert_eq!(normalize_property_name("Box-Sizing"), "box-sizing");
    }

    #[test]
    fn test_set_and_get_share_normalized_key() {
        let mut style = InlineStyle::default();
        assert!(style.is_empty());
        assert_eq!(style.set("paddingLeft", " 10px "), None);
        assert_eq!(style.get("padding-left"), Some("10px"));
        assert_eq!(style.set("padding-left", "4px"), Some("10px".to_string()));
        assert_eq!(style.len(), 1);
    }
}
