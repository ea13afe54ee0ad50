//! Cursor position in the structure view.
//!
//! The cursor is an element address: the same index path used for selection
//! and attribute edits. Moving the cursor does not select anything; pressing
//! Enter copies the cursor address into the session's selection.
//!
//! # Example
//!
//! ```
//! use vectorcraft::editor::cursor::Cursor;
//!
//! let mut cursor = Cursor::new();
//! assert_eq!(cursor.path(), &[] as &[usize]);
//!
//! cursor.push(0);
//! cursor.push(1);
//! assert_eq!(cursor.path(), &[0, 1]);
//!
//! cursor.pop();
//! assert_eq!(cursor.path(), &[0]);
//! ```

/// Address of the element under the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    path: Vec<usize>,
}

impl Cursor {
    /// Creates a cursor on the graphics root (empty address).
    pub fn new() -> Self {
        Self { path: vec![] }
    }

    /// Returns the current address.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Moves the cursor to `path`.
    pub fn set_path(&mut self, path: Vec<usize>) {
        self.path = path;
    }

    /// Descends into the `index`-th element child.
    pub fn push(&mut self, index: usize) {
        self.path.push(index);
    }

    /// Moves to the parent element. Returns the removed index, if any.
    pub fn pop(&mut self) -> Option<usize> {
        self.path.pop()
    }

    /// Returns true when the cursor is on the graphics root.
    pub fn is_at_root(&self) -> bool {
        self.path.is_empty()
    }
}
