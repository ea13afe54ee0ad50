//! Path command types and the display table used by the path inspector.

use std::fmt;

/// One instruction of a path: a command letter and its positional parameters.
///
/// The letter is kept verbatim so that unfamiliar commands survive a
/// parse/serialize round trip. Use [`PathCommand::kind`] to classify it.
///
/// # Example
///
/// ```
/// use vectorcraft::path::{CommandKind, PathCommand};
///
/// let cmd = PathCommand::new('l', vec![5.0, -5.0]);
/// assert_eq!(cmd.kind(), Some(CommandKind::LineTo));
/// assert!(cmd.is_relative());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    /// The command letter (case encodes absolute vs. relative).
    pub letter: char,
    /// Positional parameters in source order.
    pub values: Vec<f64>,
}

impl PathCommand {
    /// Creates a command from a letter and its values.
    pub fn new(letter: char, values: Vec<f64>) -> Self {
        Self { letter, values }
    }

    /// Returns the command kind, or `None` for letters outside the mini-language.
    pub fn kind(&self) -> Option<CommandKind> {
        CommandKind::from_letter(self.letter)
    }

    /// Returns true for lowercase (relative) commands.
    pub fn is_relative(&self) -> bool {
        self.letter.is_ascii_lowercase()
    }

    /// Returns the display description for this command's letter.
    pub fn description(&self) -> Option<&'static CommandDescription> {
        describe(self.letter)
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", super::writer::format_number(*value))?;
        }
        Ok(())
    }
}

/// The kinds of command in the path mini-language, independent of case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CubicBezier,
    SmoothCubic,
    Quadratic,
    SmoothQuadratic,
    Arc,
    ClosePath,
}

impl CommandKind {
    /// Classifies a command letter (case-insensitive).
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'M' => Some(CommandKind::MoveTo),
            'L' => Some(CommandKind::LineTo),
            'H' => Some(CommandKind::HorizontalLineTo),
            'V' => Some(CommandKind::VerticalLineTo),
            'C' => Some(CommandKind::CubicBezier),
            'S' => Some(CommandKind::SmoothCubic),
            'Q' => Some(CommandKind::Quadratic),
            'T' => Some(CommandKind::SmoothQuadratic),
            'A' => Some(CommandKind::Arc),
            'Z' => Some(CommandKind::ClosePath),
            _ => None,
        }
    }

    /// Number of parameters one instance of this command takes.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadratic => 2,
            CommandKind::HorizontalLineTo | CommandKind::VerticalLineTo => 1,
            CommandKind::CubicBezier => 6,
            CommandKind::SmoothCubic | CommandKind::Quadratic => 4,
            CommandKind::Arc => 7,
            CommandKind::ClosePath => 0,
        }
    }
}

/// Human-readable name and parameter labels for one command letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescription {
    pub name: &'static str,
    pub params: &'static [&'static str],
}

const fn desc(name: &'static str, params: &'static [&'static str]) -> CommandDescription {
    CommandDescription { name, params }
}

static DESCRIPTIONS: [(char, CommandDescription); 20] = [
    ('M', desc("Move To (Abs)", &["x", "y"])),
    ('m', desc("Move To (Rel)", &["dx", "dy"])),
    ('L', desc("Line To (Abs)", &["x", "y"])),
    ('l', desc("Line To (Rel)", &["dx", "dy"])),
    ('H', desc("Horizontal (Abs)", &["x"])),
    ('h', desc("Horizontal (Rel)", &["dx"])),
    ('V', desc("Vertical (Abs)", &["y"])),
    ('v', desc("Vertical (Rel)", &["dy"])),
    ('C', desc("Cubic Bezier (Abs)", &["x1", "y1", "x2", "y2", "x", "y"])),
    ('c', desc("Cubic Bezier (Rel)", &["dx1", "dy1", "dx2", "dy2", "dx", "dy"])),
    ('S', desc("Smooth Cubic (Abs)", &["x2", "y2", "x", "y"])),
    ('s', desc("Smooth Cubic (Rel)", &["dx2", "dy2", "dx", "dy"])),
    ('Q', desc("Quadratic (Abs)", &["x1", "y1", "x", "y"])),
    ('q', desc("Quadratic (Rel)", &["dx1", "dy1", "dx", "dy"])),
    ('T', desc("Smooth Quad (Abs)", &["x", "y"])),
    ('t', desc("Smooth Quad (Rel)", &["dx", "dy"])),
    ('A', desc("Arc (Abs)", &["rx", "ry", "rot", "large", "sweep", "x", "y"])),
    ('a', desc("Arc (Rel)", &["rx", "ry", "rot", "large", "sweep", "dx", "dy"])),
    ('Z', desc("Close Path", &[])),
    ('z', desc("Close Path", &[])),
];

/// Looks up the display description of a command letter.
///
/// Used for labelling only; parsing never consults this table.
///
/// # Example
///
/// ```
/// use vectorcraft::path::describe;
///
/// assert_eq!(describe('C').unwrap().params.len(), 6);
/// assert!(describe('X').is_none());
/// ```
pub fn describe(letter: char) -> Option<&'static CommandDescription> {
    DESCRIPTIONS
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|(_, d)| d)
}

/// Returns the label for parameter `index` of `letter`, or `p{index}` when the
/// table has none (unknown letters, or extra values from implicit repetition).
pub fn param_label(letter: char, index: usize) -> String {
    describe(letter)
        .and_then(|d| d.params.get(index))
        .map(|p| p.to_string())
        .unwrap_or_else(|| format!("p{}", index))
}
