//! Error types for strict path data parsing.

use thiserror::Error;

/// Errors reported by [`parse_with_mode`](super::parse_with_mode) in strict mode.
///
/// Permissive parsing never produces these; it degrades locally instead
/// (a bad number becomes `NaN`, an unknown letter is passed through).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A numeric argument could not be parsed.
    #[error("Invalid number '{text}' in command {command_index}")]
    InvalidNumber { command_index: usize, text: String },

    /// The command letter is not part of the path mini-language.
    #[error("Unknown path command '{letter}' at command {command_index}")]
    UnknownCommand { command_index: usize, letter: char },

    /// The number of arguments does not fit the command's arity.
    #[error(
        "Command '{letter}' at command {command_index} expects a multiple of {expected} values, found {found}"
    )]
    ParameterCount {
        command_index: usize,
        letter: char,
        expected: usize,
        found: usize,
    },

    /// Non-whitespace text appeared before the first command letter.
    #[error("Unexpected text '{text}' before the first path command")]
    UnexpectedText { text: String },
}
