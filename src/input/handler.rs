//! Input event handler for polling and processing keyboard events.

use super::keys::{map_key_event, InputEvent};
use crate::editor::mode::EditorMode;
use crate::editor::state::{EditorState, MessageLevel, PromptKind};
use crate::file::external::edit_in_external_editor;
use crate::file::loader::load_svg_file;
use crate::file::saver::{export_svg, save_svg_file};
use crate::theme::{get_builtin_theme, list_builtin_themes};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Stdin};
use std::path::Path;
use std::time::Duration;
use termion::event::{Event, Key};
use termion::input::{Events, TermRead};
use tracing::{debug, info};

/// Event source for reading terminal events.
///
/// This enum wraps the events iterator to maintain its state across
/// multiple calls, preventing character loss during rapid input (paste).
enum EventSource {
    /// Reading from stdin
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin was piped)
    Tty(Events<File>),
}

/// Handles terminal input events and updates editor state.
///
/// The InputHandler polls for termion events and converts them to
/// high-level InputEvents, then updates the editor state accordingly.
pub struct InputHandler {
    /// Event source iterator (maintains position in input buffer)
    events: EventSource,
    /// True after a single `g`, waiting for the second one
    pending_g: bool,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    ///
    /// # Example
    ///
    /// ```
    /// use vectorcraft::input::InputHandler;
    ///
    /// let handler = InputHandler::new();
    /// ```
    pub fn new() -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
            pending_g: false,
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin has been consumed for piped data.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
            pending_g: false,
        })
    }

    /// Polls for a terminal event with a timeout.
    ///
    /// Returns Some(Event) if an event occurred, None if timeout elapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the event system fails
    pub fn poll_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        // Use the stored events iterator to maintain position in the input buffer.
        match &mut self.events {
            EventSource::Stdin(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
            EventSource::Tty(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
        }

        Ok(None)
    }

    /// Handles a terminal event and updates editor state.
    ///
    /// Returns `Ok(true)` if the application should quit.
    ///
    /// # Example
    ///
    /// ```
    /// use vectorcraft::config::Config;
    /// use vectorcraft::editor::session::EditorSession;
    /// use vectorcraft::editor::state::EditorState;
    /// use vectorcraft::input::InputHandler;
    /// use termion::event::{Event, Key};
    ///
    /// let mut handler = InputHandler::new();
    /// let mut state = EditorState::new(EditorSession::new("<svg/>"), Config::default());
    /// let should_quit = handler.handle_event(Event::Key(Key::Char('q')), &mut state).unwrap();
    /// assert!(should_quit);
    /// ```
    pub fn handle_event(&mut self, event: Event, state: &mut EditorState) -> Result<bool> {
        if let Event::Key(key) = event {
            if state.prompt().is_some() {
                self.handle_prompt_key(key, state);
                return Ok(false);
            }

            // Handle command mode separately for character input
            if *state.mode() == EditorMode::Command {
                match key {
                    Key::Char('\n') => {
                        let command = state.command_buffer().to_string();
                        state.clear_command_buffer();
                        state.set_mode(EditorMode::Normal);
                        return self.execute_command(&command, state);
                    }
                    Key::Char(c) => {
                        state.push_to_command_buffer(c);
                        return Ok(false);
                    }
                    Key::Backspace => {
                        state.pop_from_command_buffer();
                        // Exit command mode if buffer is now empty
                        if state.command_buffer().is_empty() {
                            state.set_mode(EditorMode::Normal);
                        }
                        return Ok(false);
                    }
                    Key::Esc => {
                        state.clear_command_buffer();
                        state.set_mode(EditorMode::Normal);
                        return Ok(false);
                    }
                    _ => return Ok(false),
                }
            }

            // If help is shown, handle scrolling and closing
            if state.show_help() {
                match key {
                    Key::Esc | Key::F(1) | Key::Char('?') | Key::Char('q') => {
                        state.toggle_help();
                    }
                    Key::Down | Key::Char('j') => state.scroll_help_down(),
                    Key::Up | Key::Char('k') => state.scroll_help_up(),
                    _ => {}
                }
                return Ok(false);
            }
        }

        let input_event = map_key_event(event.clone(), state.mode());

        if input_event != InputEvent::JumpToTop {
            self.pending_g = false;
        }

        match input_event {
            InputEvent::Quit => {
                if state.is_dirty() {
                    state.set_message(
                        "No write since last change (use :q! to force)".to_string(),
                        MessageLevel::Error,
                    );
                    return Ok(false);
                }
                return Ok(true);
            }
            InputEvent::MoveDown => state.move_cursor_down(),
            InputEvent::MoveUp => state.move_cursor_up(),
            InputEvent::MoveToParent => state.move_to_parent(),
            InputEvent::JumpToTop => {
                // Home jumps at once; `g` needs a second press
                if self.pending_g || event == Event::Key(Key::Home) {
                    self.pending_g = false;
                    state.jump_to_top();
                } else {
                    self.pending_g = true;
                }
            }
            InputEvent::JumpToBottom => state.jump_to_bottom(),
            InputEvent::HalfPageDown => state.page_down(),
            InputEvent::HalfPageUp => state.page_up(),
            InputEvent::Select => {
                state.clear_message();
                state.select_at_cursor();
            }
            InputEvent::ClearSelection => {
                state.clear_selection();
                state.clear_message();
            }
            InputEvent::EditAttribute => {
                if let Err(e) = state.start_attribute_edit() {
                    state.set_message(e.to_string(), MessageLevel::Error);
                }
            }
            InputEvent::EditPathValue => {
                if let Err(e) = state.start_path_edit() {
                    state.set_message(e.to_string(), MessageLevel::Error);
                }
            }
            InputEvent::EnterCommandMode => {
                state.clear_message();
                state.set_mode(EditorMode::Command);
            }
            InputEvent::Yank => {
                let text = state.session().document().to_string();
                match arboard::Clipboard::new().and_then(|mut c| c.set_text(text)) {
                    Ok(()) => state.set_message(
                        "Document copied to clipboard".to_string(),
                        MessageLevel::Info,
                    ),
                    Err(e) => state.set_message(
                        format!("Clipboard unavailable: {}", e),
                        MessageLevel::Error,
                    ),
                }
            }
            InputEvent::Help => state.toggle_help(),
            InputEvent::ExitMode => state.set_mode(EditorMode::Normal),
            InputEvent::InsertCharacter(_)
            | InputEvent::InsertBackspace
            | InputEvent::InsertEnter
            | InputEvent::Unknown => {}
        }

        Ok(false)
    }

    fn handle_prompt_key(&mut self, key: Key, state: &mut EditorState) {
        match key {
            Key::Char('\n') => {
                let kind = state.prompt();
                match state.commit_editing() {
                    Ok(true) => {
                        let text = match kind {
                            Some(PromptKind::PathValue) => "Path data updated",
                            _ => "Attribute updated",
                        };
                        state.set_message(text.to_string(), MessageLevel::Info);
                    }
                    Ok(false) => {
                        state.set_message("Nothing changed".to_string(), MessageLevel::Warning);
                    }
                    Err(e) => {
                        state.set_message(format!("Invalid input: {}", e), MessageLevel::Error);
                    }
                }
            }
            Key::Char(c) => state.push_to_edit_buffer(c),
            Key::Backspace => state.pop_from_edit_buffer(),
            Key::Left => state.edit_cursor_left(),
            Key::Right => state.edit_cursor_right(),
            Key::Ctrl('a') | Key::Home => state.edit_cursor_home(),
            Key::Ctrl('e') | Key::End => state.edit_cursor_end(),
            Key::Ctrl('k') => state.edit_kill_to_end(),
            Key::Esc => {
                state.cancel_editing();
                state.set_message("Edit cancelled".to_string(), MessageLevel::Info);
            }
            _ => {}
        }
    }

    /// Executes a `:` command. Returns `Ok(true)` if the editor should quit.
    fn execute_command(&self, command: &str, state: &mut EditorState) -> Result<bool> {
        let command = command.trim();
        debug!("command: {}", command);

        match command {
            "" => Ok(false),
            "help" => {
                state.toggle_help();
                Ok(false)
            }
            "q" => {
                if state.is_dirty() {
                    state.set_message(
                        "No write since last change (use :q! to force)".to_string(),
                        MessageLevel::Error,
                    );
                    return Ok(false);
                }
                Ok(true)
            }
            "q!" => Ok(true),
            "w" => {
                let Some(filename) = state.filename().map(|s| s.to_string()) else {
                    state.set_message(
                        "No file name (use :w <filename>)".to_string(),
                        MessageLevel::Error,
                    );
                    return Ok(false);
                };
                self.write_file(&filename, state);
                Ok(false)
            }
            "wq" | "x" => {
                let Some(filename) = state.filename().map(|s| s.to_string()) else {
                    state.set_message(
                        "No file name (use :wq <filename>)".to_string(),
                        MessageLevel::Error,
                    );
                    return Ok(false);
                };
                Ok(self.write_file(&filename, state))
            }
            "export" => {
                let dir = state
                    .filename()
                    .and_then(|f| Path::new(f).parent())
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| ".".into());
                match export_svg(&dir, state.session().document(), state.config()) {
                    Ok(path) => state.set_message(
                        format!("Exported to {}", path.display()),
                        MessageLevel::Info,
                    ),
                    Err(e) => state.set_message(
                        format!("Error exporting file: {:#}", e),
                        MessageLevel::Error,
                    ),
                }
                Ok(false)
            }
            "source" => {
                state.request_source_edit();
                Ok(false)
            }
            "theme" => {
                state.set_message(
                    format!(
                        "Current theme: {} (available: {})",
                        state.current_theme(),
                        list_builtin_themes().join(", ")
                    ),
                    MessageLevel::Info,
                );
                Ok(false)
            }
            "e!" => {
                let Some(filename) = state.filename().map(|s| s.to_string()) else {
                    state.set_message("No file name".to_string(), MessageLevel::Error);
                    return Ok(false);
                };
                self.open_file(&filename, state);
                Ok(false)
            }
            cmd => {
                if let Some(theme_name) = cmd.strip_prefix("theme ") {
                    let theme_name = theme_name.trim();
                    if get_builtin_theme(theme_name).is_some() {
                        state.request_theme_change(theme_name.to_string());
                        state.set_message(
                            format!("Switched to theme: {}", theme_name),
                            MessageLevel::Info,
                        );
                    } else {
                        state.set_message(
                            format!("Unknown theme: {} (use :theme to list)", theme_name),
                            MessageLevel::Error,
                        );
                    }
                    return Ok(false);
                }

                if let Some(filename) = cmd.strip_prefix("w ") {
                    let filename = filename.trim();
                    if self.write_file(filename, state) {
                        state.set_filename(filename.to_string());
                    }
                    return Ok(false);
                }

                if let Some(filename) = cmd
                    .strip_prefix("wq ")
                    .or_else(|| cmd.strip_prefix("x "))
                {
                    let filename = filename.trim();
                    if self.write_file(filename, state) {
                        state.set_filename(filename.to_string());
                        return Ok(true);
                    }
                    return Ok(false);
                }

                if let Some(filename) = cmd.strip_prefix("e! ") {
                    self.open_file(filename.trim(), state);
                    return Ok(false);
                }

                if let Some(filename) = cmd.strip_prefix("e ") {
                    if state.is_dirty() {
                        state.set_message(
                            "No write since last change (use :e! to discard)".to_string(),
                            MessageLevel::Error,
                        );
                    } else {
                        self.open_file(filename.trim(), state);
                    }
                    return Ok(false);
                }

                state.set_message(format!("Unknown command: {}", cmd), MessageLevel::Error);
                Ok(false)
            }
        }
    }

    /// Opens the document source in `editor` and takes back the result.
    ///
    /// Runs while the terminal is suspended. The selection is kept; a
    /// changed text marks the buffer dirty. Returns whether the text changed.
    pub fn edit_source(&self, state: &mut EditorState, editor: &str) -> bool {
        let original = state.session().document().to_string();
        let edited = match edit_in_external_editor(&original, editor) {
            Ok(edited) => edited,
            Err(e) => {
                state.set_message(format!("Source edit failed: {:#}", e), MessageLevel::Error);
                return false;
            }
        };

        if !state.set_document_text(edited) {
            state.set_message("Source unchanged".to_string(), MessageLevel::Info);
            return false;
        }
        if state.session().structure().is_some() {
            state.set_message("Source updated".to_string(), MessageLevel::Info);
        } else {
            state.set_message(
                "Source updated, but it is not well-formed".to_string(),
                MessageLevel::Warning,
            );
        }
        true
    }

    /// Saves the document; returns whether it was written.
    fn write_file(&self, filename: &str, state: &mut EditorState) -> bool {
        match save_svg_file(filename, state.session().document(), state.config()) {
            Ok(()) => {
                info!("wrote {}", filename);
                state.clear_dirty();
                state.set_message(format!("\"{}\" written", filename), MessageLevel::Info);
                true
            }
            Err(e) => {
                state.set_message(format!("Error saving file: {:#}", e), MessageLevel::Error);
                false
            }
        }
    }

    fn open_file(&self, filename: &str, state: &mut EditorState) {
        match load_svg_file(filename) {
            Ok(text) => {
                state.load_document(text);
                state.set_filename(filename.to_string());
                let message = if state.session().structure().is_some() {
                    (format!("\"{}\" loaded", filename), MessageLevel::Info)
                } else {
                    (
                        format!("\"{}\" loaded, but it is not well-formed", filename),
                        MessageLevel::Warning,
                    )
                };
                state.set_message(message.0, message.1);
            }
            Err(e) => {
                state.set_message(format!("Error loading file: {:#}", e), MessageLevel::Error);
            }
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::editor::session::EditorSession;
    use std::fs;
    use tempfile::TempDir;

    fn state(svg: &str) -> EditorState {
        EditorState::new(EditorSession::new(svg), Config::default())
    }

    fn press(handler: &mut InputHandler, state: &mut EditorState, keys: &str) -> bool {
        let mut quit = false;
        for c in keys.chars() {
            quit = handler.handle_event(Event::Key(Key::Char(c)), state).unwrap();
        }
        quit
    }

    fn run_command(handler: &mut InputHandler, state: &mut EditorState, command: &str) -> bool {
        press(handler, state, ":");
        press(handler, state, command);
        press(handler, state, "\n")
    }

    #[test]
    fn test_quit_event() {
        let mut handler = InputHandler::new();
        let mut state = state("<svg/>");
        assert!(press(&mut handler, &mut state, "q"));
    }

    #[test]
    fn test_quit_blocked_when_dirty() {
        let mut handler = InputHandler::new();
        let mut state = state("<svg/>");
        state.mark_dirty();

        assert!(!press(&mut handler, &mut state, "q"));
        assert_eq!(state.message().unwrap().level, MessageLevel::Error);
        assert!(run_command(&mut handler, &mut state, "q!"));
    }

    #[test]
    fn test_select_and_edit_attribute() {
        let mut handler = InputHandler::new();
        let mut state = state("<svg><g><rect/><circle/></g></svg>");

        press(&mut handler, &mut state, "jjj\n");
        assert_eq!(state.session().selection(), Some(&[0, 1][..]));

        press(&mut handler, &mut state, "er=5\n");
        assert_eq!(
            state.session().document(),
            "<svg><g><rect/><circle r=\"5\"/></g></svg>"
        );
        assert!(state.is_dirty());
        assert_eq!(*state.mode(), EditorMode::Normal);
        assert_eq!(state.message().unwrap().text, "Attribute updated");
    }

    #[test]
    fn test_edit_path_value() {
        let mut handler = InputHandler::new();
        let mut state = state("<svg><path d=\"M 0 0 L 5 5\"/></svg>");

        press(&mut handler, &mut state, "j\np1.1=9\n");
        assert_eq!(
            state.session().document(),
            "<svg><path d=\"M0 0 L5 9\"/></svg>"
        );
    }

    #[test]
    fn test_invalid_prompt_input_keeps_prompt_open() {
        let mut handler = InputHandler::new();
        let mut state = state("<svg><rect/></svg>");

        press(&mut handler, &mut state, "j\nefill\n");
        assert_eq!(state.prompt(), Some(PromptKind::Attribute));
        assert_eq!(state.message().unwrap().level, MessageLevel::Error);

        handler
            .handle_event(Event::Key(Key::Esc), &mut state)
            .unwrap();
        assert_eq!(state.prompt(), None);
        assert_eq!(state.session().document(), "<svg><rect/></svg>");
    }

    #[test]
    fn test_edit_without_selection_reports_error() {
        let mut handler = InputHandler::new();
        let mut state = state("<svg><rect/></svg>");

        press(&mut handler, &mut state, "e");
        assert_eq!(state.prompt(), None);
        assert_eq!(state.message().unwrap().level, MessageLevel::Error);
    }

    #[test]
    fn test_gg_jumps_to_top() {
        let mut handler = InputHandler::new();
        let mut state = state("<svg><a/><b/><c/></svg>");

        press(&mut handler, &mut state, "G");
        assert_eq!(state.cursor().path(), &[2]);
        press(&mut handler, &mut state, "g");
        assert_eq!(state.cursor().path(), &[2]);
        press(&mut handler, &mut state, "g");
        assert!(state.cursor().path().is_empty());
    }

    #[test]
    fn test_escape_clears_selection() {
        let mut handler = InputHandler::new();
        let mut state = state("<svg><rect/></svg>");

        press(&mut handler, &mut state, "j\n");
        assert!(state.session().selection().is_some());
        handler
            .handle_event(Event::Key(Key::Esc), &mut state)
            .unwrap();
        assert!(state.session().selection().is_none());
    }

    #[test]
    fn test_write_with_new_filename() {
        let mut handler = InputHandler::new();
        let mut state = state("<svg><rect/></svg>");
        state.mark_dirty();

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.svg");
        let file_path_str = file_path.to_str().unwrap();

        assert_eq!(state.filename(), None);
        let quit = run_command(&mut handler, &mut state, &format!("w {}", file_path_str));
        assert!(!quit);

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "<svg><rect/></svg>");
        assert_eq!(state.filename(), Some(file_path_str));
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_wq_with_new_filename() {
        let mut handler = InputHandler::new();
        let mut state = state("<svg/>");

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("quit.svg");

        let quit = run_command(
            &mut handler,
            &mut state,
            &format!("wq {}", file_path.to_str().unwrap()),
        );
        assert!(quit);
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "<svg/>");
    }

    #[test]
    fn test_write_without_filename() {
        let mut handler = InputHandler::new();
        let mut state = state("<svg/>");

        assert!(!run_command(&mut handler, &mut state, "w"));
        assert!(state.message().unwrap().text.contains("No file name"));
    }

    #[test]
    fn test_edit_command_loads_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("other.svg");
        fs::write(&file_path, "<svg><circle/></svg>").unwrap();

        let mut handler = InputHandler::new();
        let mut state = state("<svg/>");
        run_command(
            &mut handler,
            &mut state,
            &format!("e {}", file_path.to_str().unwrap()),
        );

        assert_eq!(state.session().document(), "<svg><circle/></svg>");
        assert_eq!(state.tree_view().lines().len(), 2);
        assert_eq!(state.filename(), file_path.to_str());
    }

    #[test]
    fn test_edit_command_refuses_when_dirty() {
        let mut handler = InputHandler::new();
        let mut state = state("<svg/>");
        state.mark_dirty();

        run_command(&mut handler, &mut state, "e /nonexistent.svg");
        assert!(state.message().unwrap().text.contains(":e!"));
        assert_eq!(state.session().document(), "<svg/>");
    }

    #[test]
    fn test_export_writes_timestamped_copy() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("art.svg");

        let mut handler = InputHandler::new();
        let mut state = state("<svg><rect/></svg>");
        state.set_filename(file_path.to_str().unwrap().to_string());

        run_command(&mut handler, &mut state, "export");

        let exported: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(exported.len(), 1);
        assert!(exported[0].starts_with("vectorcraft-"));
        assert!(exported[0].ends_with(".svg"));
    }

    #[test]
    fn test_theme_command() {
        let mut handler = InputHandler::new();
        let mut state = state("<svg/>");

        run_command(&mut handler, &mut state, "theme nord");
        assert_eq!(state.take_pending_theme(), Some("nord".to_string()));

        run_command(&mut handler, &mut state, "theme nope");
        assert_eq!(state.message().unwrap().level, MessageLevel::Error);
        assert_eq!(state.take_pending_theme(), None);
    }

    #[test]
    fn test_source_command_requests_external_edit() {
        let mut handler = InputHandler::new();
        let mut state = state("<svg><rect/></svg>");
        run_command(&mut handler, &mut state, "source");
        assert!(state.take_source_edit_request());
        assert!(!state.take_source_edit_request());
    }

    #[test]
    fn test_edit_source_replaces_document() {
        let handler = InputHandler::new();
        let mut state = state("<svg><rect/><path d=\"M 0 0\"/></svg>");
        state.move_cursor_down();
        state.select_at_cursor();
        assert_eq!(state.session().selection(), Some(&[0][..]));

        assert!(handler.edit_source(&mut state, "sed -i s/rect/circle/"));
        assert_eq!(
            state.session().document(),
            "<svg><circle/><path d=\"M 0 0\"/></svg>"
        );
        assert!(state.is_dirty());
        assert_eq!(state.session().selection(), Some(&[0][..]));
        assert_eq!(state.session().selected_element().unwrap().tag_name, "circle");
    }

    #[test]
    fn test_edit_source_unchanged_or_failed() {
        let handler = InputHandler::new();
        let mut state = state("<svg><rect/></svg>");
        assert!(!handler.edit_source(&mut state, "true"));
        assert!(!state.is_dirty());
        assert_eq!(state.message().unwrap().text, "Source unchanged");

        assert!(!handler.edit_source(&mut state, "false"));
        assert_eq!(state.message().unwrap().level, MessageLevel::Error);
        assert_eq!(state.session().document(), "<svg><rect/></svg>");
    }

    #[test]
    fn test_edit_source_to_malformed_text() {
        let handler = InputHandler::new();
        let mut state = state("<svg><rect/></svg>");
        assert!(handler.edit_source(&mut state, "sed -i 's#<rect/>#<rect>#'"));
        assert!(state.session().structure().is_none());
        assert!(state.is_dirty());
        assert_eq!(state.message().unwrap().level, MessageLevel::Warning);
    }

    #[test]
    fn test_unknown_command() {
        let mut handler = InputHandler::new();
        let mut state = state("<svg/>");

        run_command(&mut handler, &mut state, "frobnicate");
        assert_eq!(
            state.message().unwrap().text,
            "Unknown command: frobnicate"
        );
    }

    #[test]
    fn test_help_overlay_toggle() {
        let mut handler = InputHandler::new();
        let mut state = state("<svg/>");

        press(&mut handler, &mut state, "?");
        assert!(state.show_help());
        press(&mut handler, &mut state, "jj");
        assert_eq!(state.help_scroll(), 2);
        press(&mut handler, &mut state, "?");
        assert!(!state.show_help());
    }
}
