//! Inspector panel: parameter table or shape fields for the selection.

use std::str::FromStr;

use crate::editor::inspector::{swatch_color, Appearance, Inspector};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Renders the inspector for the selected element.
///
/// Shows a hint when there is no inspector (nothing selected, or an element
/// type without one).
pub fn render_inspector_panel(
    f: &mut Frame,
    area: Rect,
    inspector: Option<&Inspector>,
    colors: &ThemeColors,
) {
    let title = inspector
        .map(|i| format!(" {} ", i.title()))
        .unwrap_or_else(|| " Inspector ".to_string());

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let lines = match inspector {
        None => vec![Line::from(Span::styled(
            "Select a path, rect or circle (Enter)",
            Style::default().fg(colors.muted),
        ))],
        Some(inspector) => inspector_lines(inspector, colors),
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(paragraph, area);
}

fn inspector_lines<'a>(inspector: &'a Inspector, colors: &ThemeColors) -> Vec<Line<'a>> {
    let label_style = Style::default().fg(colors.attr_name);
    let value_style = Style::default().fg(colors.number);
    let mut lines = Vec::new();

    match inspector {
        Inspector::Path {
            commands,
            raw_d,
            parse_error,
            ..
        } => {
            if let Some(error) = parse_error {
                lines.push(Line::from(Span::styled(
                    format!("Invalid path data: {}", error),
                    Style::default().fg(colors.error),
                )));
                lines.push(Line::from(Span::styled(
                    raw_d.as_str(),
                    Style::default().fg(colors.muted),
                )));
            }
            for (index, row) in commands.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:>3} ", index), Style::default().fg(colors.muted)),
                    Span::styled(
                        format!("{} ", row.letter),
                        Style::default().fg(colors.tag).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(row.name),
                ]));
                if row.params.is_empty() {
                    continue;
                }
                let mut spans = vec![Span::raw("      ")];
                for (i, (label, value)) in row.params.iter().enumerate() {
                    spans.push(Span::styled(format!("{}.{} ", index, i), Style::default().fg(colors.muted)));
                    spans.push(Span::styled(format!("{}=", label), label_style));
                    spans.push(Span::styled(format!("{}  ", value), value_style));
                }
                lines.push(Line::from(spans));
            }
        }
        Inspector::Shape { fields, id, .. } => {
            if let Some(id) = id {
                lines.push(Line::from(vec![
                    Span::styled("ID ", label_style),
                    Span::styled(format!("#{}", id), Style::default().fg(colors.id)),
                ]));
            }
            for field in fields {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<9}", field.label), label_style),
                    Span::styled(format!("{:<7}", field.attribute), Style::default().fg(colors.muted)),
                    Span::styled(field.value.as_str(), value_style),
                ]));
            }
        }
    }

    lines.push(Line::from(""));
    lines.extend(appearance_lines(inspector.appearance(), colors));
    lines
}

fn appearance_lines<'a>(appearance: &'a Appearance, colors: &ThemeColors) -> Vec<Line<'a>> {
    let label_style = Style::default().fg(colors.attr_name);
    let value_style = Style::default().fg(colors.attr_value);

    let paint = |label: &'a str, value: &'a str| {
        Line::from(vec![
            Span::styled(format!("{:<13}", label), label_style),
            Span::styled("■ ", Style::default().fg(swatch(value))),
            Span::styled(value, value_style),
        ])
    };

    vec![
        Line::from(Span::styled(
            "Appearance",
            Style::default().fg(colors.tag).add_modifier(Modifier::BOLD),
        )),
        paint("Fill", appearance.fill.as_str()),
        paint("Stroke", appearance.stroke.as_str()),
        Line::from(vec![
            Span::styled(format!("{:<13}", "Stroke Width"), label_style),
            Span::styled(appearance.stroke_width.as_str(), value_style),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<13}", "Opacity"), label_style),
            Span::styled(appearance.opacity.as_str(), value_style),
        ]),
    ]
}

/// Terminal color for a paint swatch.
///
/// Three-digit hex colors are expanded before conversion.
fn swatch(value: &str) -> Color {
    let hex = swatch_color(value);
    let expanded = match hex.strip_prefix('#') {
        Some(short) if short.len() == 3 => {
            let doubled: String = short.chars().flat_map(|c| [c, c]).collect();
            format!("#{}", doubled)
        }
        _ => hex.to_string(),
    };
    Color::from_str(&expanded).unwrap_or(Color::Black)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::session::EditorSession;
    use crate::path::ParseMode;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(inspector: Option<&Inspector>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let colors = ThemeColors::default_dark();
        terminal
            .draw(|f| render_inspector_panel(f, f.area(), inspector, &colors))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn inspector_for(svg: &str, address: Vec<usize>) -> Inspector {
        let mut session = EditorSession::new(svg);
        session.select(Some(address));
        let details = session.selected_element().unwrap();
        Inspector::for_element(&details, ParseMode::Permissive).unwrap()
    }

    #[test]
    fn test_hint_without_inspector() {
        let text = draw(None);
        assert!(text.contains("Inspector"));
        assert!(text.contains("Select a path"));
    }

    #[test]
    fn test_path_table() {
        let inspector = inspector_for("<svg><path d=\"M 10 20 L 30 40\" fill=\"#f00\"/></svg>", vec![0]);
        let text = draw(Some(&inspector));
        assert!(text.contains("Path Data"));
        assert!(text.contains("Move To"));
        assert!(text.contains("1.0 x=30"));
        assert!(text.contains("#f00"));
    }

    #[test]
    fn test_circle_fields() {
        let inspector = inspector_for("<svg><circle id=\"dot\" r=\"7\"/></svg>", vec![0]);
        let text = draw(Some(&inspector));
        assert!(text.contains("Circle Properties"));
        assert!(text.contains("#dot"));
        assert!(text.contains("Radius"));
    }

    #[test]
    fn test_swatch_expands_short_hex() {
        assert_eq!(swatch("#f00"), Color::Rgb(255, 0, 0));
        assert_eq!(swatch("#3b82f6"), Color::Rgb(0x3b, 0x82, 0xf6));
        assert_eq!(swatch("none"), Color::Rgb(0, 0, 0));
    }
}
