//! Help overlay for displaying keybindings and commands.

use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const NAVIGATION: &[(&str, &str)] = &[
    ("j/k           ", "Move cursor down/up"),
    ("h             ", "Move to parent element"),
    ("gg / Home     ", "Jump to first element"),
    ("G / End       ", "Jump to last element"),
    ("Ctrl-d        ", "Half-page down"),
    ("Ctrl-u        ", "Half-page up"),
    ("Arrow keys    ", "Move cursor"),
];

const SELECTION: &[(&str, &str)] = &[
    ("Enter         ", "Select element under cursor"),
    ("Esc           ", "Clear selection / leave prompt"),
];

const EDITING: &[(&str, &str)] = &[
    ("e             ", "Set attribute on selection (name=value)"),
    ("p             ", "Set path parameter (command.value=number)"),
    ("y             ", "Copy document to clipboard"),
];

const PROMPT: &[(&str, &str)] = &[
    ("Left/Right    ", "Move within the prompt"),
    ("Ctrl-a/Ctrl-e ", "Start/end of prompt"),
    ("Ctrl-k        ", "Delete to end of prompt"),
    ("Enter         ", "Apply"),
];

const COMMANDS: &[(&str, &str)] = &[
    (":w            ", "Write (save) file"),
    (":w <file>     ", "Write to a new file name"),
    (":q            ", "Quit (warns if unsaved)"),
    (":q!           ", "Quit without saving"),
    (":wq / :x      ", "Save and quit"),
    (":e <file>     ", "Open another file (warns if unsaved)"),
    (":e!           ", "Reload current file, discarding changes"),
    (":export       ", "Write a timestamped copy"),
    (":source       ", "Edit the source in $EDITOR"),
    (":theme <name> ", "Change theme"),
    (":help         ", "Show this help"),
];

/// Renders a centered help overlay showing keybindings and commands.
///
/// Displays:
/// - Navigation keybindings
/// - Selection and editing operations
/// - Command mode commands
/// - Instructions to close (press ? or Esc)
pub fn render_help_overlay(f: &mut Frame, colors: &ThemeColors, scroll: usize) {
    let area = centered_rect(80, 85, f.area());

    // Clear the background
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Vectorcraft Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.info))
        .style(Style::default().bg(colors.background));

    let mut help_text = Vec::new();
    for (title, entries) in [
        ("Navigation", NAVIGATION),
        ("Selection", SELECTION),
        ("Editing", EDITING),
        ("Prompts", PROMPT),
        ("Commands", COMMANDS),
    ] {
        help_text.push(Line::from(""));
        help_text.push(Line::from(vec![Span::styled(
            title,
            Style::default().fg(colors.tag).add_modifier(Modifier::BOLD),
        )]));
        for (keys, description) in entries {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {}", keys), Style::default().fg(colors.number)),
                Span::raw(*description),
            ]));
        }
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(vec![Span::styled(
        "Press ? or Esc to close, j/k to scroll",
        Style::default().fg(colors.muted),
    )]));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

/// Helper function to create a centered rect using up certain percentage of the available rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
