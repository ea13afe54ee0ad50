//! Markup node representation.
//!
//! This module provides the owned tree that the rest of vectorcraft works on.
//! An [`Element`] carries its tag name, its attributes in declaration order and
//! its children. Non-element content (text, comments, processing
//! instructions) is kept so that reserialization loses as little as possible,
//! but it never takes part in addressing.
//!
//! # Example
//!
//! ```
//! use vectorcraft::document::node::{Element, XmlNode};
//!
//! let mut group = Element::new("g");
//! group.push_child(XmlNode::Text("\n  ".to_string()));
//! group.push_child(XmlNode::Element(Element::new("rect")));
//! group.push_child(XmlNode::Comment(" marker ".to_string()));
//! group.push_child(XmlNode::Element(Element::new("circle")));
//!
//! // Only element children are counted
//! assert_eq!(group.element_children().count(), 2);
//! assert_eq!(group.child_element(1).unwrap().name(), "circle");
//! ```

use indexmap::IndexMap;

/// Any node that can appear in a markup document.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    /// An element with attributes and children
    Element(Element),
    /// Character data, entities decoded (CDATA sections included)
    Text(String),
    /// A `<!-- ... -->` comment
    Comment(String),
    /// A `<?target data?>` processing instruction inside the root element
    ProcessingInstruction { target: String, data: String },
}

impl XmlNode {
    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            XmlNode::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the element mutably if this node is one.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            XmlNode::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Returns true if this node is an element.
    pub fn is_element(&self) -> bool {
        matches!(self, XmlNode::Element(_))
    }
}

/// A markup element.
///
/// Attributes are stored in an `IndexMap`, so iteration yields them in the order
/// they were declared; overwriting an attribute keeps its position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: IndexMap<String, String>,
    pub(crate) children: Vec<XmlNode>,
}

impl Element {
    /// Creates an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Returns the qualified tag name (including any prefix).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tag name with any namespace prefix removed.
    ///
    /// # Example
    ///
    /// ```
    /// use vectorcraft::document::node::Element;
    ///
    /// assert_eq!(Element::new("svg:rect").local_name(), "rect");
    /// assert_eq!(Element::new("rect").local_name(), "rect");
    /// ```
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map(|(_, local)| local)
            .unwrap_or(&self.name)
    }

    /// Returns all attributes in declaration order.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Returns the value of one attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns the `id` attribute, treating an empty value as absent.
    pub fn id(&self) -> Option<&str> {
        self.attribute("id").filter(|id| !id.is_empty())
    }

    /// Sets or overwrites an attribute.
    ///
    /// An existing attribute keeps its position; a new one is appended.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Returns all child nodes, including text and comments.
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Appends a child node.
    pub fn push_child(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    /// Iterates over element children only, in document order.
    ///
    /// This is the single filtering rule used for addressing and projection:
    /// text, comments and processing instructions are skipped.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    /// Mutable counterpart of [`element_children`](Self::element_children).
    pub fn element_children_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(XmlNode::as_element_mut)
    }

    /// Returns the `index`-th element child.
    pub fn child_element(&self, index: usize) -> Option<&Element> {
        self.element_children().nth(index)
    }

    /// Returns the `index`-th element child mutably.
    pub fn child_element_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.element_children_mut().nth(index)
    }

    /// Concatenated text content of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for child in &element.children {
        match child {
            XmlNode::Text(t) => out.push_str(t),
            XmlNode::Element(e) => collect_text(e, out),
            _ => {}
        }
    }
}
