//! UI module for the vectorcraft terminal interface.
//!
//! This module provides the main UI structure for rendering the terminal interface,
//! including layout management and widget composition.

pub mod edit_prompt;
pub mod help_overlay;
pub mod inspector_panel;
pub mod message_area;
pub mod status_line;
pub mod tree_view;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::editor::state::EditorState;
use crate::theme::Theme;

/// Main UI structure that manages the terminal interface rendering.
///
/// The UI is composed of three main areas:
/// - Main view area (top): structure view on the left, inspector on the right
/// - Status line (middle): mode, file info and the selected address
/// - Message area (bottom): messages, the command line or an edit prompt
///
/// # Example
///
/// ```no_run
/// use vectorcraft::config::Config;
/// use vectorcraft::editor::session::EditorSession;
/// use vectorcraft::editor::state::EditorState;
/// use vectorcraft::theme::get_builtin_theme;
/// use vectorcraft::ui::UI;
/// use ratatui::backend::TermionBackend;
/// use ratatui::Terminal;
/// use std::io;
/// use termion::raw::IntoRawMode;
///
/// let theme = get_builtin_theme("default-dark").unwrap();
/// let ui = UI::new(theme);
/// let mut state = EditorState::new(EditorSession::new("<svg/>"), Config::default());
/// let backend = TermionBackend::new(io::stdout().into_raw_mode().unwrap());
/// let mut terminal = Terminal::new(backend).unwrap();
/// ui.render(&mut terminal, &mut state).unwrap();
/// ```
pub struct UI {
    theme: Theme,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    ///
    /// # Example
    ///
    /// ```
    /// use vectorcraft::ui::UI;
    /// use vectorcraft::theme::get_builtin_theme;
    ///
    /// let theme = get_builtin_theme("nord").unwrap();
    /// let ui = UI::new(theme);
    /// assert_eq!(ui.theme_name(), "nord");
    /// ```
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Changes the current theme.
    ///
    /// Returns true if the theme was successfully changed, false if the theme name is invalid.
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        use crate::theme::get_builtin_theme;

        if let Some(new_theme) = get_builtin_theme(theme_name) {
            self.theme = new_theme;
            true
        } else {
            false
        }
    }

    /// Renders the UI to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        state: &mut EditorState,
    ) -> Result<()> {
        let colors = &self.theme.colors;

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // Main view area
                    Constraint::Length(1), // Status line
                    Constraint::Length(1), // Message area
                ])
                .split(f.area());

            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(chunks[0]);

            // Tree view borders take two rows
            let viewport_height = panes[0].height.saturating_sub(2) as usize;
            state.adjust_scroll_to_cursor(viewport_height);

            tree_view::render_tree_view(
                f,
                panes[0],
                state.tree_view(),
                state.cursor(),
                state.session().selection(),
                colors,
                state.scroll_offset(),
            );

            let inspector = state.inspector();
            inspector_panel::render_inspector_panel(f, panes[1], inspector.as_ref(), colors);

            status_line::render_status_line(f, chunks[1], state, colors);

            if let (Some(kind), Some(buffer)) = (state.prompt(), state.edit_buffer()) {
                let prompt = format!("{}: ", kind.label());
                edit_prompt::render_edit_prompt(
                    f,
                    chunks[2],
                    buffer,
                    state.edit_cursor_position(),
                    colors,
                    &prompt,
                );
            } else {
                message_area::render_message_area(f, chunks[2], state, colors);
            }

            // Help overlay (rendered on top if visible)
            if state.show_help() {
                help_overlay::render_help_overlay(f, colors, state.help_scroll());
            }
        })?;

        Ok(())
    }
}
