//! VectorCraft - a terminal-based structural SVG editor.
//!
//! The editing core is usable without the terminal front end:
//!
//! - [`path`]: SVG path data parsing, serialization and single-value edits
//! - [`document`]: markup parsing, index-path addressing, attribute mutation
//!   and the structure projection
//! - [`editor`]: the editor session (document text plus selection), property
//!   inspectors and the terminal editor state
//!
//! # Example
//!
//! ```
//! use vectorcraft::editor::session::EditorSession;
//!
//! let mut session = EditorSession::new("<svg><path d=\"M 0 0 L 10 10\"/></svg>");
//! session.select(Some(vec![0]));
//! assert!(session.update_path_value(1, 0, 25.0));
//! assert_eq!(session.document(), "<svg><path d=\"M0 0 L25 10\"/></svg>");
//! ```

pub mod config;
pub mod document;
pub mod editor;
pub mod file;
pub mod input;
pub mod path;
pub mod theme;
pub mod ui;
