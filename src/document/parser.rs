//! Markup parsing into the owned node tree.
//!
//! Well-formedness checking, entity expansion (including entities declared in
//! an internal DTD subset) and namespace handling are done by `roxmltree`. The
//! result is copied into the owned [`Element`] tree the editor mutates. Tag
//! and attribute names are taken as written in the start tag, so prefixes,
//! namespace declarations and attribute order survive reserialization.
//!
//! Everything before and after the root element (XML declaration, doctype,
//! comments, whitespace) is kept verbatim.
//!
//! # Example
//!
//! ```
//! use vectorcraft::document::parser::parse_document;
//!
//! let doc = parse_document(r#"<svg width="10"><g><rect/><circle/></g></svg>"#).unwrap();
//! assert_eq!(doc.root().name(), "svg");
//! assert_eq!(doc.root().attribute("width"), Some("10"));
//!
//! assert!(parse_document("<svg><g></svg>").is_err());
//! ```

use roxmltree::{Node, NodeType, ParsingOptions};
use thiserror::Error;

use super::node::{Element, XmlNode};
use super::tree::Document;

/// A document that is not well-formed markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MarkupError {
    /// 1-based line of the error
    pub row: u32,
    /// 1-based column of the error
    pub col: u32,
    pub message: String,
}

impl From<roxmltree::Error> for MarkupError {
    fn from(e: roxmltree::Error) -> Self {
        let pos = e.pos();
        Self {
            row: pos.row,
            col: pos.col,
            message: e.to_string(),
        }
    }
}

/// Parses a complete markup document.
///
/// Doctypes are allowed, so documents exported with entity declarations in
/// their internal subset parse as a browser would parse them.
pub fn parse_document(input: &str) -> Result<Document, MarkupError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let parsed = roxmltree::Document::parse_with_options(input, options)?;

    let root_node = parsed.root_element();
    let range = root_node.range();
    let prolog = input.get(..range.start).unwrap_or_default();
    let epilog = input.get(range.end..).unwrap_or_default();

    Ok(Document::from_parts(
        prolog.to_string(),
        build_element(root_node, input),
        epilog.to_string(),
    ))
}

fn build_element(node: Node<'_, '_>, input: &str) -> Element {
    let mut element = match read_start_tag(node, input) {
        Some((name, attribute_names)) => {
            let mut element = Element::new(name);
            let mut values = node.attributes();
            for raw_name in attribute_names {
                let value = match declared_prefix(raw_name) {
                    Some(prefix) => node
                        .namespaces()
                        .find(|ns| ns.name() == prefix)
                        .map(|ns| ns.uri())
                        .unwrap_or_default(),
                    None => values.next().map(|a| a.value()).unwrap_or_default(),
                };
                element.set_attribute(raw_name, value);
            }
            element
        }
        None => resolved_element(node),
    };

    for child in node.children() {
        match child.node_type() {
            NodeType::Element => element.push_child(XmlNode::Element(build_element(child, input))),
            NodeType::Text => {
                if let Some(text) = child.text() {
                    element.push_child(XmlNode::Text(text.to_string()));
                }
            }
            NodeType::Comment => {
                if let Some(text) = child.text() {
                    element.push_child(XmlNode::Comment(text.to_string()));
                }
            }
            NodeType::PI => {
                if let Some(pi) = child.pi() {
                    element.push_child(XmlNode::ProcessingInstruction {
                        target: pi.target.to_string(),
                        data: pi.value.unwrap_or_default().to_string(),
                    });
                }
            }
            NodeType::Root => {}
        }
    }

    element
}

/// Tag and attribute names exactly as written in the element's start tag.
///
/// Returns `None` when the source text at the node's position does not agree
/// with the parsed element, e.g. for elements produced by entity expansion.
fn read_start_tag<'i>(node: Node<'_, '_>, input: &'i str) -> Option<(&'i str, Vec<&'i str>)> {
    let tag = input.get(node.range().start..)?;
    let (name, attribute_names) = scan_start_tag(tag)?;

    let local = name.rsplit(':').next().unwrap_or(name);
    let plain = attribute_names
        .iter()
        .filter(|n| declared_prefix(n).is_none())
        .count();
    (local == node.tag_name().name() && plain == node.attributes().count())
        .then_some((name, attribute_names))
}

/// Splits `<name a="1" b='2' ...` into the tag name and attribute names.
fn scan_start_tag(tag: &str) -> Option<(&str, Vec<&str>)> {
    let body = tag.strip_prefix('<')?;
    let name_end = body.find(|c: char| c.is_whitespace() || c == '/' || c == '>')?;
    let name = &body[..name_end];
    let mut rest = &body[name_end..];
    let mut names = Vec::new();

    loop {
        rest = rest.trim_start();
        if rest.is_empty() || rest.starts_with('/') || rest.starts_with('>') {
            break;
        }
        let eq = rest.find('=')?;
        names.push(rest[..eq].trim_end());
        rest = rest[eq + 1..].trim_start();
        let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
        let close = rest[1..].find(quote)?;
        rest = &rest[close + 2..];
    }

    Some((name, names))
}

/// For a namespace declaration returns the prefix it binds (`None` for the
/// default namespace); for an ordinary attribute returns `None` overall.
fn declared_prefix(attribute_name: &str) -> Option<Option<&str>> {
    if attribute_name == "xmlns" {
        Some(None)
    } else {
        attribute_name.strip_prefix("xmlns:").map(Some)
    }
}

/// Builds an element from resolved names only. Namespace declarations are not
/// available this way.
fn resolved_element(node: Node<'_, '_>) -> Element {
    let tag = node.tag_name();
    let mut element = Element::new(qualified_name(node, tag.namespace(), tag.name()));
    for attribute in node.attributes() {
        element.set_attribute(
            qualified_name(node, attribute.namespace(), attribute.name()),
            attribute.value(),
        );
    }
    element
}

fn qualified_name(node: Node<'_, '_>, namespace: Option<&str>, local: &str) -> String {
    match namespace.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{}:{}", prefix, local),
        _ => local.to_string(),
    }
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == ':'
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.')
}

/// Returns true if `name` is usable as an element or attribute name.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_name_start(c) => chars.all(is_name_char),
        _ => false,
    }
}
