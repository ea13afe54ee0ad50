//! Editor session: the document text plus the current selection.
//!
//! The session is the single owner of the document. Every change replaces the
//! text wholesale and rebuilds the structure projection before returning, so
//! callers always observe a settled state.
//!
//! # Example
//!
//! ```
//! use vectorcraft::editor::session::EditorSession;
//!
//! let mut session = EditorSession::new("<svg><g><rect/><circle/></g></svg>");
//! session.select(Some(vec![0, 1]));
//! assert_eq!(session.selected_element().unwrap().tag_name, "circle");
//!
//! assert!(session.update_attribute("r", "5"));
//! assert_eq!(session.document(), r#"<svg><g><rect/><circle r="5"/></g></svg>"#);
//! assert_eq!(session.selection(), Some(&[0, 1][..]));
//! ```

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tracing::debug;

use super::inspector::Inspector;
use crate::document::mutation::set_attribute;
use crate::document::parser::parse_document;
use crate::document::structure::{project, StructureNode};
use crate::path::{self, ParseMode};

/// Details of the selected element, resolved from the current text.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDetails {
    pub tag_name: String,
    pub id: Option<String>,
    pub attributes: IndexMap<String, String>,
    /// The `d` attribute, if present
    pub d: Option<String>,
}

/// Owns the document text, the selection and the structure projection.
#[derive(Debug, Clone)]
pub struct EditorSession {
    document: String,
    selection: Option<Vec<usize>>,
    structure: Option<StructureNode>,
    revalidate_selection: bool,
    parse_mode: ParseMode,
}

impl EditorSession {
    /// Creates a session for `text` with nothing selected.
    pub fn new(text: impl Into<String>) -> Self {
        let document = text.into();
        let structure = project(&document);
        Self {
            document,
            selection: None,
            structure,
            revalidate_selection: false,
            parse_mode: ParseMode::default(),
        }
    }

    /// Clear the selection after an edit if it no longer resolves.
    pub fn set_revalidate_selection(&mut self, enabled: bool) {
        self.revalidate_selection = enabled;
    }

    /// Parse mode used for `d` attributes.
    pub fn set_parse_mode(&mut self, mode: ParseMode) {
        self.parse_mode = mode;
    }

    pub fn parse_mode(&self) -> ParseMode {
        self.parse_mode
    }

    /// Current document text.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Current selection address.
    pub fn selection(&self) -> Option<&[usize]> {
        self.selection.as_deref()
    }

    /// Structure projection of the current text, `None` if it does not parse.
    pub fn structure(&self) -> Option<&StructureNode> {
        self.structure.as_ref()
    }

    /// Replaces the document (file load or import) and clears the selection.
    ///
    /// Text that does not parse is still stored, with no structure.
    pub fn load_document(&mut self, text: impl Into<String>) {
        self.selection = None;
        self.replace_document(text.into());
    }

    /// Replaces the document as typed by the user, keeping the selection.
    pub fn set_document_text(&mut self, text: impl Into<String>) {
        self.replace_document(text.into());
    }

    fn replace_document(&mut self, text: String) {
        self.document = text;
        self.structure = project(&self.document);
        if self.structure.is_none() {
            debug!("document has no structure");
        }
    }

    /// Sets or clears the selection. The document is untouched.
    pub fn select(&mut self, address: Option<Vec<usize>>) {
        self.selection = address;
    }

    /// Resolves the selection against the current text.
    ///
    /// Returns `None` when nothing is selected, the text does not parse, or the
    /// address no longer resolves.
    pub fn selected_element(&self) -> Option<ElementDetails> {
        let address = self.selection.as_deref()?;
        let doc = parse_document(&self.document).ok()?;
        let element = doc.resolve(address)?;
        Some(ElementDetails {
            tag_name: element.name().to_string(),
            id: element.id().map(str::to_string),
            attributes: element.attributes().clone(),
            d: element.attribute("d").map(str::to_string),
        })
    }

    /// Sets an attribute on the selected element.
    ///
    /// Returns whether the document text changed. Does nothing without a
    /// selection. The selection is kept as-is afterwards unless selection
    /// revalidation is enabled and the address no longer resolves.
    pub fn update_attribute(&mut self, name: &str, value: &str) -> bool {
        let Some(address) = self.selection.clone() else {
            debug!("attribute update without a selection");
            return false;
        };

        let current = self
            .selected_element()
            .and_then(|element| element.attributes.get(name).cloned());
        let mut changed = false;
        if current.as_deref() == Some(value) {
            debug!("attribute {} already set to {:?}", name, value);
        } else {
            let updated = set_attribute(&self.document, &address, name, value);
            changed = updated != self.document;
            if changed {
                self.replace_document(updated);
            }
        }

        if self.revalidate_selection && !self.selection_resolves() {
            debug!("selection {:?} no longer resolves, clearing", address);
            self.selection = None;
        }

        changed
    }

    fn selection_resolves(&self) -> bool {
        match (&self.structure, &self.selection) {
            (Some(structure), Some(address)) => structure.find(address).is_some(),
            _ => false,
        }
    }

    /// Changes one numeric parameter of the selected path's `d` attribute.
    ///
    /// Non-finite values and out-of-range indices are ignored. Returns whether
    /// the document changed.
    pub fn update_path_value(
        &mut self,
        command_index: usize,
        value_index: usize,
        new_value: f64,
    ) -> bool {
        if !new_value.is_finite() {
            return false;
        }
        let Some(d) = self.selected_element().and_then(|details| details.d) else {
            return false;
        };
        let commands = match path::parse_with_mode(&d, self.parse_mode) {
            Ok(commands) => commands,
            Err(e) => {
                debug!("path edit ignored: {}", e);
                return false;
            }
        };
        match path::try_update_value(&commands, command_index, value_index, new_value) {
            Some(updated) => self.update_attribute("d", &path::serialize(&updated)),
            None => false,
        }
    }

    /// Inspector for the selected element, if it has one.
    pub fn inspector(&self) -> Option<Inspector> {
        let details = self.selected_element()?;
        Inspector::for_element(&details, self.parse_mode)
    }

    /// File name for an exported document: `{prefix}-{unix millis}.svg`.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use vectorcraft::editor::session::EditorSession;
    ///
    /// let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
    /// assert_eq!(
    ///     EditorSession::export_file_name("vectorcraft", now),
    ///     "vectorcraft-1700000000000.svg"
    /// );
    /// ```
    pub fn export_file_name(prefix: &str, now: DateTime<Utc>) -> String {
        format!("{}-{}.svg", prefix, now.timestamp_millis())
    }
}
