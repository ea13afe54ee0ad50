//! Editor state management.
//!
//! `EditorState` wraps an [`EditorSession`] with everything the terminal UI
//! needs on top: mode, cursor, structure view lines, messages, the command and
//! edit buffers, the dirty flag and the filename.
//!
//! # Example
//!
//! ```
//! use vectorcraft::config::Config;
//! use vectorcraft::editor::mode::EditorMode;
//! use vectorcraft::editor::session::EditorSession;
//! use vectorcraft::editor::state::EditorState;
//!
//! let session = EditorSession::new("<svg><rect/></svg>");
//! let mut state = EditorState::new(session, Config::default());
//!
//! assert_eq!(state.mode(), &EditorMode::Normal);
//! assert!(!state.is_dirty());
//!
//! state.move_cursor_down();
//! state.select_at_cursor();
//! assert_eq!(state.session().selection(), Some(&[0][..]));
//! ```

use super::cursor::Cursor;
use super::inspector::{parse_param_input, Inspector};
use super::mode::EditorMode;
use super::session::EditorSession;
use crate::config::Config;
use crate::ui::tree_view::TreeViewState;
use anyhow::{anyhow, bail, Result};
use tracing::debug;

/// Represents a message to display to the user.
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// What the edit prompt is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// `name=value` for any attribute of the selected element
    Attribute,
    /// `command.value=number` for a parameter of the selected path
    PathValue,
}

impl PromptKind {
    /// Label shown in front of the prompt.
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::Attribute => "attr",
            PromptKind::PathValue => "path",
        }
    }
}

pub struct EditorState {
    session: EditorSession,
    config: Config,
    mode: EditorMode,
    cursor: Cursor,
    tree_view: TreeViewState,
    dirty: bool,
    filename: Option<String>,
    message: Option<Message>,
    command_buffer: String,
    edit_buffer: Option<String>,
    edit_cursor: usize,
    prompt: Option<PromptKind>,
    show_help: bool,
    help_scroll: usize,
    pending_theme: Option<String>,
    /// Set by `:source`; the main loop runs the external editor
    source_edit_requested: bool,
    current_theme: String,
    scroll_offset: usize,
    viewport_height: usize,
}

impl EditorState {
    /// Creates editor state around a session.
    ///
    /// The session picks up `revalidate_selection` and the path parse mode
    /// from `config`.
    pub fn new(mut session: EditorSession, config: Config) -> Self {
        session.set_revalidate_selection(config.revalidate_selection);
        session.set_parse_mode(config.parse_mode());

        let mut state = Self {
            session,
            current_theme: config.theme.clone(),
            config,
            mode: EditorMode::default(),
            cursor: Cursor::new(),
            tree_view: TreeViewState::new(),
            dirty: false,
            filename: None,
            message: None,
            command_buffer: String::new(),
            edit_buffer: None,
            edit_cursor: 0,
            prompt: None,
            show_help: false,
            help_scroll: 0,
            pending_theme: None,
            source_edit_requested: false,
            scroll_offset: 0,
            viewport_height: 0,
        };
        state.rebuild_tree_view();
        state
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the document (e.g. after `:e`), clearing the selection.
    pub fn load_document(&mut self, text: String) {
        self.session.load_document(text);
        self.cursor = Cursor::new();
        self.scroll_offset = 0;
        self.rebuild_tree_view();
        self.dirty = false;
    }

    /// Replaces the document with hand-edited source, keeping the selection.
    ///
    /// Returns whether the text changed; a change marks the buffer dirty.
    pub fn set_document_text(&mut self, text: String) -> bool {
        if text == self.session.document() {
            return false;
        }
        self.session.set_document_text(text);
        self.rebuild_tree_view();
        self.dirty = true;
        true
    }

    /// Regenerates the structure view lines and keeps the cursor on a
    /// visible line.
    pub fn rebuild_tree_view(&mut self) {
        self.tree_view.rebuild(
            self.session.structure(),
            self.config.show_attributes_in_tree,
        );
        if self.tree_view.position_of(self.cursor.path()).is_none() {
            if let Some(first) = self.tree_view.lines().first() {
                self.cursor.set_path(first.path.clone());
            }
        }
    }

    pub fn tree_view(&self) -> &TreeViewState {
        &self.tree_view
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, filename: String) {
        self.filename = Some(filename);
    }

    fn cursor_index(&self) -> usize {
        self.tree_view.position_of(self.cursor.path()).unwrap_or(0)
    }

    fn move_cursor_to_line(&mut self, index: usize) {
        if let Some(line) = self.tree_view.lines().get(index) {
            self.cursor.set_path(line.path.clone());
        }
    }

    /// Moves the cursor to the next line.
    pub fn move_cursor_down(&mut self) {
        let next = self.cursor_index() + 1;
        self.move_cursor_to_line(next);
    }

    /// Moves the cursor to the previous line.
    pub fn move_cursor_up(&mut self) {
        let index = self.cursor_index();
        if index > 0 {
            self.move_cursor_to_line(index - 1);
        }
    }

    /// Moves the cursor to the parent element.
    pub fn move_to_parent(&mut self) {
        if !self.cursor.is_at_root() {
            self.cursor.pop();
        }
    }

    /// Jumps to the first line.
    pub fn jump_to_top(&mut self) {
        self.move_cursor_to_line(0);
    }

    /// Jumps to the last line.
    pub fn jump_to_bottom(&mut self) {
        let last = self.tree_view.lines().len().saturating_sub(1);
        self.move_cursor_to_line(last);
    }

    /// Returns the current scroll offset (top line of viewport).
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Adjusts scroll offset to ensure the cursor is visible in the viewport.
    pub fn adjust_scroll_to_cursor(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        self.viewport_height = viewport_height;

        let cursor_idx = self.cursor_index();
        if cursor_idx < self.scroll_offset {
            self.scroll_offset = cursor_idx;
        } else if cursor_idx >= self.scroll_offset + viewport_height {
            self.scroll_offset = cursor_idx - viewport_height + 1;
        }
    }

    /// Moves the cursor down by half a viewport.
    pub fn page_down(&mut self) {
        let step = (self.viewport_height / 2).max(1);
        let last = self.tree_view.lines().len().saturating_sub(1);
        let target = (self.cursor_index() + step).min(last);
        self.move_cursor_to_line(target);
    }

    /// Moves the cursor up by half a viewport.
    pub fn page_up(&mut self) {
        let step = (self.viewport_height / 2).max(1);
        let target = self.cursor_index().saturating_sub(step);
        self.move_cursor_to_line(target);
    }

    /// Selects the element under the cursor.
    pub fn select_at_cursor(&mut self) {
        if self.tree_view.lines().is_empty() {
            self.set_message("Nothing to select".to_string(), MessageLevel::Warning);
            return;
        }
        let address = self.cursor.path().to_vec();
        debug!("select {:?}", address);
        self.session.select(Some(address));
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.session.select(None);
    }

    /// Inspector for the selected element.
    pub fn inspector(&self) -> Option<Inspector> {
        self.session.inspector()
    }

    /// Returns the current message, if any.
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Sets a message to display to the user.
    pub fn set_message(&mut self, text: String, level: MessageLevel) {
        self.message = Some(Message { text, level });
    }

    /// Clears the current message.
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Returns the current command buffer.
    pub fn command_buffer(&self) -> &str {
        &self.command_buffer
    }

    /// Appends a character to the command buffer.
    pub fn push_to_command_buffer(&mut self, ch: char) {
        self.command_buffer.push(ch);
    }

    /// Removes the last character from the command buffer.
    pub fn pop_from_command_buffer(&mut self) {
        self.command_buffer.pop();
    }

    /// Clears the command buffer.
    pub fn clear_command_buffer(&mut self) {
        self.command_buffer.clear();
    }

    /// Returns whether the help overlay is shown.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.help_scroll = 0;
        }
    }

    pub fn help_scroll(&self) -> usize {
        self.help_scroll
    }

    pub fn scroll_help_down(&mut self) {
        self.help_scroll = self.help_scroll.saturating_add(1);
    }

    pub fn scroll_help_up(&mut self) {
        self.help_scroll = self.help_scroll.saturating_sub(1);
    }

    /// Returns the pending theme name if there is one, consuming it.
    pub fn take_pending_theme(&mut self) -> Option<String> {
        self.pending_theme.take()
    }

    /// Requests a theme change; the main loop applies it before the next draw.
    pub fn request_theme_change(&mut self, theme_name: String) {
        self.current_theme = theme_name.clone();
        self.config.theme = theme_name.clone();
        self.pending_theme = Some(theme_name);
    }

    /// Asks the main loop to open the document source in an external editor.
    pub fn request_source_edit(&mut self) {
        self.source_edit_requested = true;
    }

    /// Returns whether a source edit was requested, consuming the request.
    pub fn take_source_edit_request(&mut self) -> bool {
        std::mem::take(&mut self.source_edit_requested)
    }

    pub fn current_theme(&self) -> &str {
        &self.current_theme
    }

    /// Returns the active prompt, if editing.
    pub fn prompt(&self) -> Option<PromptKind> {
        self.prompt
    }

    /// Returns the edit buffer while a prompt is open.
    pub fn edit_buffer(&self) -> Option<&str> {
        self.edit_buffer.as_deref()
    }

    /// Returns the current edit cursor position (byte offset).
    pub fn edit_cursor_position(&self) -> usize {
        self.edit_cursor
    }

    /// Opens the attribute prompt for the selected element.
    ///
    /// Fails if nothing is selected or the selection no longer resolves.
    pub fn start_attribute_edit(&mut self) -> Result<()> {
        if self.session.selected_element().is_none() {
            bail!("No element selected (press Enter on an element first)");
        }
        self.open_prompt(PromptKind::Attribute, String::new());
        Ok(())
    }

    /// Opens the path value prompt for the selected path.
    ///
    /// Fails unless the selection is a path with a parsed command list.
    pub fn start_path_edit(&mut self) -> Result<()> {
        match self.session.inspector() {
            Some(Inspector::Path { commands, .. }) if !commands.is_empty() => {
                self.open_prompt(PromptKind::PathValue, String::new());
                Ok(())
            }
            Some(Inspector::Path { .. }) => bail!("Path data has no editable commands"),
            _ => bail!("Selected element is not a path"),
        }
    }

    fn open_prompt(&mut self, kind: PromptKind, initial: String) {
        self.edit_cursor = initial.len();
        self.edit_buffer = Some(initial);
        self.prompt = Some(kind);
        self.mode = EditorMode::Insert;
    }

    /// Closes the prompt without applying anything.
    pub fn cancel_editing(&mut self) {
        self.edit_buffer = None;
        self.edit_cursor = 0;
        self.prompt = None;
        self.mode = EditorMode::Normal;
    }

    /// Applies the prompt contents.
    ///
    /// Returns `Ok(true)` if the document changed and `Ok(false)` if the edit
    /// was well formed but changed nothing. The prompt stays open on error.
    pub fn commit_editing(&mut self) -> Result<bool> {
        let buffer = self
            .edit_buffer
            .clone()
            .ok_or_else(|| anyhow!("No edit in progress"))?;
        let kind = self.prompt.ok_or_else(|| anyhow!("No edit in progress"))?;

        let changed = match kind {
            PromptKind::Attribute => {
                let (name, value) = parse_attribute_input(&buffer)?;
                self.session.update_attribute(name, value)
            }
            PromptKind::PathValue => {
                let (command_index, value_index, value) = parse_path_value_input(&buffer)?;
                self.session
                    .update_path_value(command_index, value_index, value)
            }
        };

        if changed {
            self.dirty = true;
            self.rebuild_tree_view();
        }
        self.cancel_editing();
        Ok(changed)
    }

    /// Inserts a character at the current cursor position in the edit buffer.
    pub fn push_to_edit_buffer(&mut self, ch: char) {
        if let Some(ref mut buffer) = self.edit_buffer {
            buffer.insert(self.edit_cursor, ch);
            self.edit_cursor += ch.len_utf8();
        }
    }

    /// Removes the character before the cursor (backspace).
    pub fn pop_from_edit_buffer(&mut self) {
        if let Some(ref mut buffer) = self.edit_buffer {
            if self.edit_cursor > 0 {
                let char_start = buffer[..self.edit_cursor]
                    .char_indices()
                    .next_back()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                buffer.remove(char_start);
                self.edit_cursor = char_start;
            }
        }
    }

    /// Moves the edit cursor left by one character.
    pub fn edit_cursor_left(&mut self) {
        if let Some(ref buffer) = self.edit_buffer {
            if self.edit_cursor > 0 {
                self.edit_cursor = buffer[..self.edit_cursor]
                    .char_indices()
                    .next_back()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
            }
        }
    }

    /// Moves the edit cursor right by one character.
    pub fn edit_cursor_right(&mut self) {
        if let Some(ref buffer) = self.edit_buffer {
            if let Some(ch) = buffer[self.edit_cursor..].chars().next() {
                self.edit_cursor += ch.len_utf8();
            }
        }
    }

    /// Moves the edit cursor to the beginning of the buffer (Ctrl-a).
    pub fn edit_cursor_home(&mut self) {
        self.edit_cursor = 0;
    }

    /// Moves the edit cursor to the end of the buffer (Ctrl-e).
    pub fn edit_cursor_end(&mut self) {
        if let Some(ref buffer) = self.edit_buffer {
            self.edit_cursor = buffer.len();
        }
    }

    /// Deletes from cursor to end of buffer (Ctrl-k).
    pub fn edit_kill_to_end(&mut self) {
        if let Some(ref mut buffer) = self.edit_buffer {
            buffer.truncate(self.edit_cursor);
        }
    }
}

/// Splits `name=value`. The name is trimmed; the value is kept verbatim.
///
/// # Example
///
/// ```
/// use vectorcraft::editor::state::parse_attribute_input;
///
/// assert_eq!(parse_attribute_input("fill=#ff0000").unwrap(), ("fill", "#ff0000"));
/// assert_eq!(parse_attribute_input(" x = 1").unwrap(), ("x", " 1"));
/// assert!(parse_attribute_input("fill").is_err());
/// ```
pub fn parse_attribute_input(input: &str) -> Result<(&str, &str)> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected name=value"))?;
    let name = name.trim();
    if name.is_empty() {
        bail!("Attribute name is empty");
    }
    Ok((name, value))
}

/// Parses `command.value=number` as used by the path prompt.
///
/// # Example
///
/// ```
/// use vectorcraft::editor::state::parse_path_value_input;
///
/// assert_eq!(parse_path_value_input("1.0=99").unwrap(), (1, 0, 99.0));
/// assert!(parse_path_value_input("1.0=abc").is_err());
/// assert!(parse_path_value_input("1=5").is_err());
/// ```
pub fn parse_path_value_input(input: &str) -> Result<(usize, usize, f64)> {
    let (target, number) = input
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected command.value=number"))?;
    let (command, value) = target
        .trim()
        .split_once('.')
        .ok_or_else(|| anyhow!("Expected command.value=number"))?;
    let command_index = command
        .trim()
        .parse::<usize>()
        .map_err(|_| anyhow!("Invalid command index: {}", command.trim()))?;
    let value_index = value
        .trim()
        .parse::<usize>()
        .map_err(|_| anyhow!("Invalid value index: {}", value.trim()))?;
    let number = parse_param_input(number)
        .ok_or_else(|| anyhow!("Not a finite number: {}", number.trim()))?;
    Ok((command_index, value_index, number))
}
