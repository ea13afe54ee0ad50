//! Read-only structure projection.
//!
//! A [`StructureNode`] tree mirrors the element tree under the graphics root.
//! It is a snapshot built for presentation (the structure panel and
//! `--dump-structure`) and is rebuilt wholesale whenever the document changes.
//! Each node carries the address it was reached by, so selecting a node in the
//! view yields an address that [`Document::resolve`](super::tree::Document::resolve)
//! maps back to the same element.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use super::node::Element;
use super::parser::parse_document;
use super::tree::Document;

/// One element in the structure projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureNode {
    /// Qualified tag name as written in the source
    pub tag_name: String,
    /// Value of the `id` attribute, `None` when absent or empty
    pub id: Option<String>,
    /// Attributes in declaration order
    pub attributes: IndexMap<String, String>,
    /// Element children in document order
    pub children: Vec<StructureNode>,
    /// Address of this element relative to the graphics root
    pub index_path: Vec<usize>,
}

/// Projects document text into a structure tree.
///
/// Returns `None` if the text does not parse or has no `svg` element.
///
/// # Example
///
/// ```
/// use vectorcraft::document::structure::project;
///
/// let tree = project("<svg><g id=\"layer\"><rect/></g></svg>").unwrap();
/// assert_eq!(tree.tag_name, "svg");
/// assert_eq!(tree.children[0].id.as_deref(), Some("layer"));
/// assert_eq!(tree.children[0].children[0].index_path, vec![0, 0]);
///
/// assert!(project("<svg><g></svg>").is_none());
/// ```
pub fn project(text: &str) -> Option<StructureNode> {
    match parse_document(text) {
        Ok(doc) => StructureNode::from_document(&doc),
        Err(e) => {
            debug!("structure projection skipped: {}", e);
            None
        }
    }
}

impl StructureNode {
    /// Builds the projection of an already parsed document.
    pub fn from_document(doc: &Document) -> Option<Self> {
        doc.graphics_root()
            .map(|root| Self::from_element(root, &mut Vec::new()))
    }

    fn from_element(element: &Element, path: &mut Vec<usize>) -> Self {
        let children = element
            .element_children()
            .enumerate()
            .map(|(i, child)| {
                path.push(i);
                let node = Self::from_element(child, path);
                path.pop();
                node
            })
            .collect();

        Self {
            tag_name: element.name().to_string(),
            id: element.id().map(str::to_string),
            attributes: element.attributes().clone(),
            children,
            index_path: path.clone(),
        }
    }

    /// Finds the node at `address` (relative to this node).
    pub fn find(&self, address: &[usize]) -> Option<&StructureNode> {
        address
            .iter()
            .try_fold(self, |node, &i| node.children.get(i))
    }

    /// Iterates over this node and its descendants in pre-order, paired with
    /// their depth (this node is depth 0).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }

    /// Total number of nodes in this subtree, this node included.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(StructureNode::len).sum::<usize>()
    }

    /// A projection always contains at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Short label used by the tree view, e.g. `rect#bg`.
    pub fn label(&self) -> String {
        match &self.id {
            Some(id) => format!("{}#{}", self.tag_name, id),
            None => self.tag_name.clone(),
        }
    }
}

/// Pre-order iterator returned by [`StructureNode::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a StructureNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a StructureNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <!-- background -->
  <rect id="bg" width="100" height="100"/>
  <g id="">
    <circle cx="50" cy="50" r="10"/>
    text
    <path d="M 0 0 L 10 10"/>
  </g>
</svg>"#;

    #[test]
    fn test_projection_shape() {
        let tree = project(SAMPLE).unwrap();
        assert_eq!(tree.tag_name, "svg");
        assert_eq!(tree.index_path, Vec::<usize>::new());
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].id.as_deref(), Some("bg"));
        assert_eq!(tree.children[1].id, None);
        assert_eq!(tree.children[1].children[1].tag_name, "path");
        assert_eq!(tree.children[1].children[1].index_path, vec![1, 1]);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_attributes_in_declaration_order() {
        let tree = project(SAMPLE).unwrap();
        let keys: Vec<&str> = tree.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["xmlns", "viewBox"]);
    }

    #[test]
    fn test_walk_is_preorder_with_depth() {
        let tree = project(SAMPLE).unwrap();
        let seen: Vec<(usize, &str)> = tree
            .walk()
            .map(|(depth, node)| (depth, node.tag_name.as_str()))
            .collect();
        assert_eq!(
            seen,
            vec![(0, "svg"), (1, "rect"), (1, "g"), (2, "circle"), (2, "path")]
        );
    }

    #[test]
    fn test_find_matches_index_path() {
        let tree = project(SAMPLE).unwrap();
        for (_, node) in tree.walk() {
            assert_eq!(tree.find(&node.index_path), Some(node));
        }
        assert!(tree.find(&[5]).is_none());
    }

    #[test]
    fn test_unparseable_or_missing_svg() {
        assert!(project("<svg><g></svg>").is_none());
        assert!(project("<html/>").is_none());
        assert!(project("").is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let tree = project("<svg><rect id=\"a\"/></svg>").unwrap();
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["tagName"], "svg");
        assert_eq!(json["children"][0]["indexPath"], serde_json::json!([0]));
        assert_eq!(json["children"][0]["id"], "a");
        assert!(json["id"].is_null());
    }
}
