//! Editor session, inspectors and terminal editor state.
//!
//! # Modules
//!
//! - `session`: document text, selection and structure projection
//! - `inspector`: path and shape property inspectors
//! - `mode`: editor mode enumeration
//! - `cursor`: cursor position in the structure view
//! - `state`: terminal UI state built around a session
//!
//! # Example
//!
//! ```
//! use vectorcraft::editor::mode::EditorMode;
//!
//! // Editor starts in Normal mode
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! ```

pub mod cursor;
pub mod inspector;
pub mod mode;
pub mod session;
pub mod state;
