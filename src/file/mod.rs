//! File I/O for SVG documents.
//!
//! Loading from disk or stdin (with transparent gzip for `.svgz`), and saving
//! with atomic writes, optional backups and timestamped export. Source edits
//! round-trip through the user's external editor.

pub mod external;
pub mod loader;
pub mod saver;
