//! Status line widget for displaying editor state information.
//!
//! The status line shows:
//! - Current mode (NORMAL, INSERT, COMMAND)
//! - Filename (or "[No Name]" if unsaved)
//! - Dirty indicator "[+]" for unsaved changes
//! - Address of the selected element, if any
//! - Cursor position (row/total)
//!
//! Example status line: `NORMAL | drawing.svg [+] sel 0.1                 5/20`

use crate::document::tree::format_address;
use crate::editor::state::EditorState;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the status line showing mode, filename, and dirty indicator.
pub fn render_status_line(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let mode_text = format!("{}", state.mode());
    let filename = state.filename().unwrap_or("[No Name]");
    let dirty_indicator = if state.is_dirty() { " [+]" } else { "" };

    let mode_and_file = format!("{} | {}", mode_text, filename);

    let selection_display = state
        .session()
        .selection()
        .map(|address| format!(" sel {}", format_address(address)))
        .unwrap_or_default();

    let lines = state.tree_view().lines();
    let row = lines
        .iter()
        .position(|l| l.path.as_slice() == state.cursor().path())
        .map(|i| i + 1)
        .unwrap_or(0);
    let position = format!("{}/{}", row, lines.len());

    // Calculate padding to position right-aligned text
    let total_width = area.width as usize;
    let left_len = mode_and_file.chars().count()
        + dirty_indicator.len()
        + selection_display.chars().count();
    let position_len = position.len();

    let padding = if left_len + position_len + 1 < total_width {
        total_width - left_len - position_len
    } else {
        1
    };

    let default_style = Style::default()
        .fg(colors.status_line_fg)
        .bg(colors.status_line_bg);
    let selection_style = Style::default()
        .fg(colors.selection)
        .bg(colors.status_line_bg);

    let mut spans = vec![Span::styled(mode_and_file, default_style)];

    if !dirty_indicator.is_empty() {
        spans.push(Span::styled(dirty_indicator, default_style));
    }

    if !selection_display.is_empty() {
        spans.push(Span::styled(selection_display, selection_style));
    }

    spans.push(Span::styled(" ".repeat(padding), default_style));
    spans.push(Span::styled(position, default_style));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
