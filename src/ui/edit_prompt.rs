//! Edit prompt rendering for the attribute and path value prompts.

use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the edit prompt showing the current edit buffer with a block cursor.
///
/// `cursor_pos` is a byte offset into `buffer`.
pub fn render_edit_prompt(
    f: &mut Frame,
    area: Rect,
    buffer: &str,
    cursor_pos: usize,
    colors: &ThemeColors,
    prompt: &str,
) {
    let cursor_pos = cursor_pos.min(buffer.len());
    let (before, rest) = buffer.split_at(cursor_pos);
    let mut rest_chars = rest.chars();
    let char_at_cursor = rest_chars.next().unwrap_or(' ');
    let after = rest_chars.as_str();

    let text_style = Style::default()
        .fg(colors.foreground)
        .bg(colors.background)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(prompt.to_string(), text_style.fg(colors.info)),
        Span::styled(before.to_string(), text_style),
        Span::styled(
            char_at_cursor.to_string(),
            Style::default()
                .fg(colors.background)
                .bg(colors.cursor)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if !after.is_empty() {
        spans.push(Span::styled(after.to_string(), text_style));
    }

    let line = Line::from(spans);
    let prompt = Paragraph::new(line).style(Style::default().bg(colors.background));

    f.render_widget(prompt, area);
}
