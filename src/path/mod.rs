//! Path data codec for the `d` attribute of `<path>` elements.
//!
//! This module turns the compact path mini-language into an ordered list of
//! [`PathCommand`]s and back again, so that individual numeric parameters can be
//! edited from the inspector.
//!
//! # Tokenization
//!
//! - Each command is one ASCII letter followed by its argument text (everything
//!   up to the next letter)
//! - Arguments are separated by runs of whitespace and/or commas
//! - Text before the first letter is ignored
//! - Arc flags are plain numbers; the compact unseparated flag form is not supported
//!
//! # Examples
//!
//! ```
//! use vectorcraft::path::{parse, serialize, update_value};
//!
//! let commands = parse("M 10 20 L 30 40 Z");
//! assert_eq!(commands.len(), 3);
//!
//! let edited = update_value(&commands, 1, 0, 99.0);
//! assert_eq!(serialize(&edited), "M10 20 L99 40 Z");
//! ```

pub mod command;
pub mod error;
pub mod parser;
pub mod writer;

pub use command::{describe, param_label, CommandDescription, CommandKind, PathCommand};
pub use error::PathError;
pub use parser::{parse, parse_with_mode, ParseMode};
pub use writer::{format_number, serialize, try_update_value, update_value};
