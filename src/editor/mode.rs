//! Editor mode management for modal editing.
//!
//! Following vim-style modal editing, the editor is always in exactly one of:
//!
//! - **Normal**: navigation and selection in the structure view
//! - **Insert**: typing into an edit prompt (attribute or path value)
//! - **Command**: typing a `:` command (save, quit, export, theme)
//!
//! # Example
//!
//! ```
//! use vectorcraft::editor::mode::EditorMode;
//!
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! assert_eq!(format!("{}", EditorMode::Insert), "INSERT");
//! ```

use std::fmt;

/// Represents the current editing mode of the editor.
///
/// The mode decides how keystrokes are interpreted and is shown in the
/// status line via its `Display` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Navigation and selection.
    #[default]
    Normal,
    /// Typing into the edit prompt.
    Insert,
    /// Typing a `:` command.
    Command,
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Normal => write!(f, "NORMAL"),
            EditorMode::Insert => write!(f, "INSERT"),
            EditorMode::Command => write!(f, "COMMAND"),
        }
    }
}
