//! Attribute mutation.
//!
//! Edits are applied by parsing the current text, changing one attribute on the
//! addressed element and serializing the whole tree again. Every failure mode
//! leaves the input untouched.

use tracing::{debug, warn};

use super::parser::{is_valid_name, parse_document};
use super::serializer::serialize_document;
use super::tree::Document;

impl Document {
    /// Sets `name` to `value` on the element at `address`.
    ///
    /// Returns `false` (and leaves the tree untouched) if the address does not
    /// resolve or `name` is not a valid attribute name.
    pub fn set_attribute(&mut self, address: &[usize], name: &str, value: &str) -> bool {
        if !is_valid_name(name) {
            warn!("rejected attribute name {:?}", name);
            return false;
        }
        match self.resolve_mut(address) {
            Some(element) => {
                element.set_attribute(name, value);
                true
            }
            None => {
                debug!("address {:?} does not resolve", address);
                false
            }
        }
    }
}

/// Returns `text` with one attribute set on the element at `address`.
///
/// The text is returned unchanged when it does not parse, when the address does
/// not resolve, or when `name` is not a valid attribute name. Other elements
/// and attributes are untouched, though the output is reserialized and so uses
/// normalized formatting.
///
/// # Example
///
/// ```
/// use vectorcraft::document::mutation::set_attribute;
///
/// let doc = "<svg><g><rect/><circle/></g></svg>";
///
/// let edited = set_attribute(doc, &[0, 1], "r", "5");
/// assert_eq!(edited, r#"<svg><g><rect/><circle r="5"/></g></svg>"#);
///
/// // Out-of-range addresses are a no-op
/// assert_eq!(set_attribute(doc, &[0, 5], "r", "5"), doc);
/// ```
pub fn set_attribute(text: &str, address: &[usize], name: &str, value: &str) -> String {
    let mut doc = match parse_document(text) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("attribute edit ignored, document does not parse: {}", e);
            return text.to_string();
        }
    };

    if !doc.set_attribute(address, name, value) {
        return text.to_string();
    }

    let edited = serialize_document(&doc);
    // e.g. a prefixed name whose prefix is not declared
    if let Err(e) = parse_document(&edited) {
        warn!("attribute edit ignored, result would not parse: {}", e);
        return text.to_string();
    }
    debug!("set {}={:?} at {:?}", name, value, address);
    edited
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_other_attributes() {
        let out = set_attribute(
            "<svg><rect x=\"1\" fill=\"red\" y=\"2\"/></svg>",
            &[0],
            "fill",
            "blue",
        );
        assert_eq!(out, "<svg><rect x=\"1\" fill=\"blue\" y=\"2\"/></svg>");
    }

    #[test]
    fn test_root_address() {
        let out = set_attribute("<svg/>", &[], "width", "10");
        assert_eq!(out, "<svg width=\"10\"/>");
    }

    #[test]
    fn test_value_is_escaped() {
        let out = set_attribute("<svg/>", &[], "data-x", "a\"<b>&");
        assert_eq!(out, "<svg data-x=\"a&quot;&lt;b&gt;&amp;\"/>");
    }

    #[test]
    fn test_unparseable_input_returned_unchanged() {
        let text = "<svg><g></svg>";
        assert_eq!(set_attribute(text, &[], "a", "b"), text);
    }

    #[test]
    fn test_invalid_name_is_noop() {
        let text = "<svg/>";
        assert_eq!(set_attribute(text, &[], "bad name", "x"), text);
        assert_eq!(set_attribute(text, &[], "", "x"), text);
        assert_eq!(set_attribute(text, &[], "1x", "x"), text);
    }

    #[test]
    fn test_undeclared_prefix_is_noop() {
        let text = "<svg><use/></svg>";
        assert_eq!(set_attribute(text, &[0], "xlink:href", "#a"), text);

        let declared = "<svg xmlns:xlink=\"http://www.w3.org/1999/xlink\"><use/></svg>";
        assert_eq!(
            set_attribute(declared, &[0], "xlink:href", "#a"),
            "<svg xmlns:xlink=\"http://www.w3.org/1999/xlink\"><use xlink:href=\"#a\"/></svg>"
        );
    }

    #[test]
    fn test_in_tree_variant() {
        let mut doc = parse_document("<svg><g/></svg>").unwrap();
        assert!(doc.set_attribute(&[0], "id", "layer"));
        assert!(!doc.set_attribute(&[1], "id", "nope"));
        assert_eq!(doc.resolve(&[0]).unwrap().id(), Some("layer"));
    }
}
