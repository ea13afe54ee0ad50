//! Keyboard event mapping and input event types.

use crate::editor::mode::EditorMode;
use termion::event::{Event, Key};

/// High-level input events abstracted from raw keyboard input.
///
/// These events represent user intentions (quit, move cursor, select)
/// rather than specific key presses, allowing for mode-specific keybindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User wants to quit the editor
    Quit,
    /// Move cursor down
    MoveDown,
    /// Move cursor up
    MoveUp,
    /// Move to the parent element
    MoveToParent,
    /// Jump to the first element (gg)
    JumpToTop,
    /// Jump to the last element (G)
    JumpToBottom,
    /// Half-page down (Ctrl-d)
    HalfPageDown,
    /// Half-page up (Ctrl-u)
    HalfPageUp,
    /// Select the element under the cursor (Enter)
    Select,
    /// Clear the selection (Esc)
    ClearSelection,
    /// Open the attribute prompt
    EditAttribute,
    /// Open the path value prompt
    EditPathValue,
    /// Enter command mode (from normal mode)
    EnterCommandMode,
    /// Copy the document to the system clipboard
    Yank,
    /// Toggle help overlay
    Help,
    /// Exit current mode back to normal mode
    ExitMode,
    /// Insert a character in insert mode
    InsertCharacter(char),
    /// Backspace in insert mode
    InsertBackspace,
    /// Enter in insert mode
    InsertEnter,
    /// Unknown or unmapped key
    Unknown,
}

/// Maps a termion Event to an InputEvent based on the current editor mode.
///
/// - Normal mode: j/k/h for movement, Enter to select, e/p to edit, : for commands
/// - Insert mode: characters go to the prompt, Esc to exit
/// - Command mode: Esc to exit
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use vectorcraft::editor::mode::EditorMode;
/// use vectorcraft::input::keys::{map_key_event, InputEvent};
///
/// let event = Event::Key(Key::Char('j'));
/// let input_event = map_key_event(event, &EditorMode::Normal);
/// assert_eq!(input_event, InputEvent::MoveDown);
/// ```
pub fn map_key_event(event: Event, mode: &EditorMode) -> InputEvent {
    // We only care about key events
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    match mode {
        EditorMode::Normal => match key {
            Key::Ctrl('d') => InputEvent::HalfPageDown,
            Key::Ctrl('u') => InputEvent::HalfPageUp,
            Key::Char('q') => InputEvent::Quit,
            Key::Char('j') => InputEvent::MoveDown,
            Key::Char('k') => InputEvent::MoveUp,
            Key::Char('h') => InputEvent::MoveToParent,
            Key::Char('g') => InputEvent::JumpToTop,
            Key::Char('G') => InputEvent::JumpToBottom,
            Key::Char('\n') => InputEvent::Select,
            Key::Esc => InputEvent::ClearSelection,
            Key::Char('e') => InputEvent::EditAttribute,
            Key::Char('p') => InputEvent::EditPathValue,
            Key::Char(':') => InputEvent::EnterCommandMode,
            Key::Char('y') => InputEvent::Yank,
            Key::Char('?') => InputEvent::Help,
            Key::Down => InputEvent::MoveDown,
            Key::Up => InputEvent::MoveUp,
            Key::Left => InputEvent::MoveToParent,
            Key::PageDown => InputEvent::HalfPageDown,
            Key::PageUp => InputEvent::HalfPageUp,
            Key::Home => InputEvent::JumpToTop,
            Key::End => InputEvent::JumpToBottom,
            Key::F(1) => InputEvent::Help,
            _ => InputEvent::Unknown,
        },
        EditorMode::Insert => match key {
            Key::Esc => InputEvent::ExitMode,
            Key::Char('\n') => InputEvent::InsertEnter,
            Key::Backspace => InputEvent::InsertBackspace,
            Key::Char(c) => InputEvent::InsertCharacter(c),
            _ => InputEvent::Unknown,
        },
        EditorMode::Command => match key {
            Key::Esc => InputEvent::ExitMode,
            _ => InputEvent::Unknown,
        },
    }
}
