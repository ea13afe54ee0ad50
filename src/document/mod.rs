//! SVG document model.
//!
//! - [`node`]: owned element tree with ordered attributes
//! - [`parser`]: markup text to [`tree::Document`]
//! - [`serializer`]: [`tree::Document`] back to text
//! - [`tree`]: the document type and positional addressing
//! - [`structure`]: read-only projection for the structure view
//! - [`mutation`]: attribute edits addressed by index path

pub mod mutation;
pub mod node;
pub mod parser;
pub mod serializer;
pub mod structure;
pub mod tree;

pub use mutation::set_attribute;
pub use parser::{parse_document, MarkupError};
pub use serializer::serialize_document;
pub use structure::{project, StructureNode};
pub use tree::{format_address, parse_address, Document};
