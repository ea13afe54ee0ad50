//! Structure view: the element tree as a flat list of indented lines.
//!
//! - `TreeViewLine`: one displayable line (one element)
//! - `TreeViewState`: the lines, rebuilt from the structure projection
//! - `render_tree_view`: draws the lines with cursor and selection markers

use crate::document::structure::StructureNode;
use crate::editor::cursor::Cursor;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Longest attribute preview shown after a tag name.
const MAX_PREVIEW_CHARS: usize = 48;

/// A single line in the structure view.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeViewLine {
    /// Address of the element
    pub path: Vec<usize>,
    /// Indentation depth (0 for the graphics root)
    pub depth: usize,
    /// Qualified tag name
    pub tag_name: String,
    /// Non-empty `id` attribute
    pub id: Option<String>,
    /// `name=value` pairs other than `id`, truncated
    pub attribute_preview: String,
    /// Whether the element has element children
    pub has_children: bool,
}

/// Holds the visible lines of the structure view.
///
/// # Example
///
/// ```
/// use vectorcraft::document::structure::project;
/// use vectorcraft::ui::tree_view::TreeViewState;
///
/// let structure = project("<svg><g id=\"a\"><rect/></g></svg>");
///
/// let mut state = TreeViewState::new();
/// state.rebuild(structure.as_ref(), true);
/// assert_eq!(state.lines().len(), 3);
/// assert_eq!(state.lines()[2].path, vec![0, 0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeViewState {
    lines: Vec<TreeViewLine>,
}

impl TreeViewState {
    /// Creates an empty TreeViewState.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Returns the visible lines.
    pub fn lines(&self) -> &[TreeViewLine] {
        &self.lines
    }

    /// Index of the line with the given address.
    pub fn position_of(&self, path: &[usize]) -> Option<usize> {
        self.lines.iter().position(|l| l.path == path)
    }

    /// Regenerates the lines from a structure projection.
    ///
    /// `None` (a document that does not parse) yields no lines.
    pub fn rebuild(&mut self, structure: Option<&StructureNode>, show_attributes: bool) {
        self.lines.clear();
        let Some(root) = structure else {
            return;
        };

        for (depth, node) in root.walk() {
            let attribute_preview = if show_attributes {
                format_attribute_preview(node, MAX_PREVIEW_CHARS)
            } else {
                String::new()
            };
            self.lines.push(TreeViewLine {
                path: node.index_path.clone(),
                depth,
                tag_name: node.tag_name.clone(),
                id: node.id.clone(),
                attribute_preview,
                has_children: !node.children.is_empty(),
            });
        }
    }
}

/// Formats attributes (except `id`) as `name="value"` pairs, truncated with an
/// ellipsis once `max_chars` is exceeded.
pub fn format_attribute_preview(node: &StructureNode, max_chars: usize) -> String {
    let joined = node
        .attributes
        .iter()
        .filter(|(name, _)| name.as_str() != "id")
        .map(|(name, value)| format!("{}=\"{}\"", name, value))
        .collect::<Vec<_>>()
        .join(" ");

    if joined.chars().count() <= max_chars {
        joined
    } else {
        let mut truncated: String = joined.chars().take(max_chars.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }
}

/// Renders the structure view.
///
/// The cursor line is highlighted; the selected element is marked with `●`.
///
/// # Example
///
/// ```
/// use ratatui::backend::TestBackend;
/// use ratatui::Terminal;
/// use vectorcraft::document::structure::project;
/// use vectorcraft::editor::cursor::Cursor;
/// use vectorcraft::theme::colors::ThemeColors;
/// use vectorcraft::ui::tree_view::{render_tree_view, TreeViewState};
///
/// let mut tree_view = TreeViewState::new();
/// tree_view.rebuild(project("<svg><rect/></svg>").as_ref(), true);
///
/// let backend = TestBackend::new(40, 5);
/// let mut terminal = Terminal::new(backend).unwrap();
/// let colors = ThemeColors::default_dark();
/// terminal.draw(|f| {
///     render_tree_view(f, f.area(), &tree_view, &Cursor::new(), None, &colors, 0);
/// }).unwrap();
/// ```
pub fn render_tree_view(
    f: &mut Frame,
    area: Rect,
    tree_view: &TreeViewState,
    cursor: &Cursor,
    selection: Option<&[usize]>,
    colors: &ThemeColors,
    scroll_offset: usize,
) {
    let block = Block::default()
        .title(" Structure ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let viewport_height = area.height.saturating_sub(2) as usize;

    let lines_to_render: Vec<Line> = if tree_view.lines().is_empty() {
        vec![Line::from(Span::styled(
            "No structure (document does not parse)",
            Style::default().fg(colors.muted),
        ))]
    } else {
        tree_view
            .lines()
            .iter()
            .skip(scroll_offset)
            .take(viewport_height)
            .map(|line| render_line(line, cursor, selection, colors))
            .collect()
    };

    let paragraph = Paragraph::new(lines_to_render)
        .block(block)
        .style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(paragraph, area);
}

fn render_line<'a>(
    line: &'a TreeViewLine,
    cursor: &Cursor,
    selection: Option<&[usize]>,
    colors: &ThemeColors,
) -> Line<'a> {
    let is_cursor = cursor.path() == line.path.as_slice();
    let is_selected = selection == Some(line.path.as_slice());

    let mut spans = Vec::new();
    spans.push(Span::raw("  ".repeat(line.depth)));

    if is_selected {
        spans.push(Span::styled("● ", Style::default().fg(colors.selection)));
    } else if line.has_children {
        spans.push(Span::styled("▾ ", Style::default().fg(colors.muted)));
    } else {
        spans.push(Span::raw("  "));
    }

    let tag_style = if is_cursor {
        Style::default()
            .fg(Color::White)
            .bg(colors.cursor)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.tag)
    };
    spans.push(Span::styled(format!("<{}>", line.tag_name), tag_style));

    if let Some(id) = &line.id {
        spans.push(Span::styled(format!(" #{}", id), Style::default().fg(colors.id)));
    }

    if !line.attribute_preview.is_empty() {
        spans.push(Span::styled(
            format!(" {}", line.attribute_preview),
            Style::default().fg(colors.muted),
        ));
    }

    Line::from(spans)
}
