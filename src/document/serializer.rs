//! Markup serialization.
//!
//! Turns a [`Document`] back into text. Formatting is normalized: attributes are
//! always double-quoted and escaped, childless elements are self-closed, and
//! text is re-escaped minimally (CDATA sections come back as escaped text).
//! Whitespace text nodes and comments are emitted as parsed; the text around
//! the root element is copied verbatim.

use super::node::{Element, XmlNode};
use super::tree::Document;

/// Serializes a whole document, prolog and epilog included.
///
/// # Example
///
/// ```
/// use vectorcraft::document::parser::parse_document;
/// use vectorcraft::document::serializer::serialize_document;
///
/// let doc = parse_document("<svg width='10'><rect></rect></svg>").unwrap();
/// assert_eq!(serialize_document(&doc), r#"<svg width="10"><rect/></svg>"#);
/// ```
pub fn serialize_document(doc: &Document) -> String {
    let mut out = String::from(doc.prolog());
    write_element(doc.root(), &mut out);
    out.push_str(doc.epilog());
    out
}

/// Serializes a single element and its subtree.
pub fn serialize_element(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

fn write_node(node: &XmlNode, out: &mut String) {
    match node {
        XmlNode::Element(e) => write_element(e, out),
        XmlNode::Text(t) => out.push_str(&escape_text(t)),
        XmlNode::Comment(c) => {
            out.push_str("<!--");
            out.push_str(c);
            out.push_str("-->");
        }
        XmlNode::ProcessingInstruction { target, data } => {
            out.push_str("<?");
            out.push_str(target);
            if !data.is_empty() {
                out.push(' ');
                out.push_str(data);
            }
            out.push_str("?>");
        }
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.name);
    for (name, value) in &element.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }

    if element.children.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in &element.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
}

/// Escapes character data.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a double-quoted attribute value.
///
/// Tabs and line breaks are written as character references so that they
/// survive attribute-value normalization on the next parse.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    out
}
