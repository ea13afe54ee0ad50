//! Document tree and positional addressing.
//!
//! This module provides the [`Document`] type and the addressing scheme that
//! ties the structure view, selection and attribute edits together. An
//! address is a sequence of indices: starting at the graphics root (the `<svg>`
//! element), each index selects the nth *element* child of the current element.
//! Text and comments never count. The empty address is the graphics root itself.
//!
//! # Example
//!
//! ```
//! use vectorcraft::document::parser::parse_document;
//!
//! let doc = parse_document("<svg><g>\n  <rect/>\n  <!-- c -->\n  <circle/>\n</g></svg>").unwrap();
//!
//! assert_eq!(doc.resolve(&[]).unwrap().name(), "svg");
//! assert_eq!(doc.resolve(&[0, 1]).unwrap().name(), "circle");
//! assert!(doc.resolve(&[0, 2]).is_none());
//! ```

use super::node::Element;

/// A parsed markup document.
///
/// Holds the single root element plus the source text that surrounds it (XML
/// declaration, doctype, comments, whitespace), kept verbatim so that
/// serialization can reproduce it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    prolog: String,
    root: Element,
    epilog: String,
}

impl Document {
    /// Creates a document consisting of just a root element.
    pub fn new(root: Element) -> Self {
        Self {
            prolog: String::new(),
            root,
            epilog: String::new(),
        }
    }

    pub(crate) fn from_parts(prolog: String, root: Element, epilog: String) -> Self {
        Self {
            prolog,
            root,
            epilog,
        }
    }

    /// Returns the document's root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Returns a mutable reference to the document's root element.
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Source text before the root element.
    pub fn prolog(&self) -> &str {
        &self.prolog
    }

    /// Source text after the root element.
    pub fn epilog(&self) -> &str {
        &self.epilog
    }

    /// Returns the graphics root: the first `svg` element in document order.
    ///
    /// This is normally the document root. A namespace prefix (`svg:svg`) is
    /// ignored. Returns `None` if the document contains no `svg` element.
    pub fn graphics_root(&self) -> Option<&Element> {
        find_svg(&self.root)
    }

    /// Mutable counterpart of [`graphics_root`](Self::graphics_root).
    pub fn graphics_root_mut(&mut self) -> Option<&mut Element> {
        find_svg_mut(&mut self.root)
    }

    /// Resolves an address to an element.
    ///
    /// Walks the address left to right, indexing into element children only.
    /// Returns `None` if any index is out of range or there is no graphics root.
    pub fn resolve(&self, address: &[usize]) -> Option<&Element> {
        let mut current = self.graphics_root()?;
        for &index in address {
            current = current.child_element(index)?;
        }
        Some(current)
    }

    /// Resolves an address to a mutable element.
    ///
    /// Follows the same rules as [`resolve`](Self::resolve).
    pub fn resolve_mut(&mut self, address: &[usize]) -> Option<&mut Element> {
        let mut current = self.graphics_root_mut()?;
        for &index in address {
            current = current.child_element_mut(index)?;
        }
        Some(current)
    }

    /// Lists the address of every element under the graphics root, root
    /// included, in document order.
    ///
    /// # Example
    ///
    /// ```
    /// use vectorcraft::document::parser::parse_document;
    ///
    /// let doc = parse_document("<svg><g><rect/></g><circle/></svg>").unwrap();
    /// assert_eq!(
    ///     doc.addresses(),
    ///     vec![vec![], vec![0], vec![0, 0], vec![1]]
    /// );
    /// ```
    pub fn addresses(&self) -> Vec<Vec<usize>> {
        let mut out = Vec::new();
        if let Some(root) = self.graphics_root() {
            collect_addresses(root, &mut Vec::new(), &mut out);
        }
        out
    }

    /// Number of elements under the graphics root, root included.
    pub fn element_count(&self) -> usize {
        self.addresses().len()
    }
}

fn find_svg(element: &Element) -> Option<&Element> {
    if element.local_name() == "svg" {
        return Some(element);
    }
    element.element_children().find_map(find_svg)
}

fn find_svg_mut(element: &mut Element) -> Option<&mut Element> {
    if element.local_name() == "svg" {
        return Some(element);
    }
    element.element_children_mut().find_map(find_svg_mut)
}

fn collect_addresses(element: &Element, path: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
    out.push(path.clone());
    for (i, child) in element.element_children().enumerate() {
        path.push(i);
        collect_addresses(child, path, out);
        path.pop();
    }
}

/// Formats an address as dot-separated indices (`"0.1.2"`); the root is `"."`.
///
/// # Example
///
/// ```
/// use vectorcraft::document::tree::{format_address, parse_address};
///
/// assert_eq!(format_address(&[0, 1]), "0.1");
/// assert_eq!(format_address(&[]), ".");
/// assert_eq!(parse_address("0.1"), Some(vec![0, 1]));
/// assert_eq!(parse_address("."), Some(vec![]));
/// assert_eq!(parse_address("0.x"), None);
/// ```
pub fn format_address(address: &[usize]) -> String {
    if address.is_empty() {
        return ".".to_string();
    }
    address
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Parses the dot-separated address notation produced by [`format_address`].
pub fn parse_address(text: &str) -> Option<Vec<usize>> {
    let text = text.trim();
    if text == "." || text.is_empty() {
        return Some(Vec::new());
    }
    text.split('.').map(|part| part.parse::<usize>().ok()).collect()
}
