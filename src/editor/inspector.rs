//! Property inspectors for the selected element.
//!
//! An [`Inspector`] is a display model derived from [`ElementDetails`]. Paths
//! get a per-command parameter table, rectangles and circles get their
//! geometry fields; both carry the shared appearance controls. Other elements
//! have no inspector.

use indexmap::IndexMap;

use super::session::ElementDetails;
use crate::path::{self, param_label, ParseMode};

/// Inspector for the selected element.
#[derive(Debug, Clone, PartialEq)]
pub enum Inspector {
    /// Parameter table for a `<path>` element's `d` attribute
    Path {
        commands: Vec<CommandRow>,
        appearance: Appearance,
        raw_d: String,
        /// Set when strict parsing rejected the path data
        parse_error: Option<String>,
    },
    /// Geometry fields for `<rect>` and `<circle>`
    Shape {
        label: &'static str,
        fields: Vec<Field>,
        appearance: Appearance,
        id: Option<String>,
    },
}

/// One path command with labelled parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRow {
    pub letter: char,
    pub name: &'static str,
    pub params: Vec<(String, f64)>,
}

/// One editable geometry attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: &'static str,
    pub attribute: &'static str,
    /// Current value; a missing attribute reads as `"0"`
    pub value: String,
}

/// Fill, stroke and opacity as shown by the appearance controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: String,
    pub opacity: String,
}

const RECT_FIELDS: &[(&str, &str)] = &[
    ("x", "X"),
    ("y", "Y"),
    ("width", "Width"),
    ("height", "Height"),
    ("rx", "Radius X"),
    ("ry", "Radius Y"),
];

const CIRCLE_FIELDS: &[(&str, &str)] = &[("cx", "Center X"), ("cy", "Center Y"), ("r", "Radius")];

impl Inspector {
    /// Builds the inspector for an element, or `None` if it has none.
    ///
    /// # Example
    ///
    /// ```
    /// use vectorcraft::editor::inspector::Inspector;
    /// use vectorcraft::editor::session::EditorSession;
    /// use vectorcraft::path::ParseMode;
    ///
    /// let mut session = EditorSession::new("<svg><circle r=\"4\"/><g/></svg>");
    /// session.select(Some(vec![0]));
    /// let details = session.selected_element().unwrap();
    ///
    /// match Inspector::for_element(&details, ParseMode::Permissive) {
    ///     Some(Inspector::Shape { label, fields, .. }) => {
    ///         assert_eq!(label, "Circle");
    ///         assert_eq!(fields[2].value, "4");
    ///         assert_eq!(fields[0].value, "0");
    ///     }
    ///     other => panic!("unexpected inspector: {:?}", other),
    /// }
    /// ```
    pub fn for_element(details: &ElementDetails, mode: ParseMode) -> Option<Self> {
        let appearance = Appearance::from_attributes(&details.attributes);

        match details.tag_name.as_str() {
            "path" => {
                let d = details.d.as_deref().filter(|d| !d.is_empty())?;
                let (commands, parse_error) = match path::parse_with_mode(d, mode) {
                    Ok(commands) => (commands, None),
                    Err(e) => (Vec::new(), Some(e.to_string())),
                };
                let commands = commands
                    .iter()
                    .map(|cmd| CommandRow {
                        letter: cmd.letter,
                        name: cmd.description().map(|desc| desc.name).unwrap_or("Unknown"),
                        params: cmd
                            .values
                            .iter()
                            .enumerate()
                            .map(|(i, v)| (param_label(cmd.letter, i), *v))
                            .collect(),
                    })
                    .collect();
                Some(Inspector::Path {
                    commands,
                    appearance,
                    raw_d: d.to_string(),
                    parse_error,
                })
            }
            "rect" => Some(Self::shape("Rectangle", RECT_FIELDS, details, appearance)),
            "circle" => Some(Self::shape("Circle", CIRCLE_FIELDS, details, appearance)),
            _ => None,
        }
    }

    fn shape(
        label: &'static str,
        table: &[(&'static str, &'static str)],
        details: &ElementDetails,
        appearance: Appearance,
    ) -> Self {
        let fields = table
            .iter()
            .map(|&(attribute, label)| Field {
                label,
                attribute,
                value: non_empty(&details.attributes, attribute).unwrap_or("0").to_string(),
            })
            .collect();
        Inspector::Shape {
            label,
            fields,
            appearance,
            id: details.id.clone(),
        }
    }

    /// Panel title, e.g. `Path Data` or `Rectangle Properties`.
    pub fn title(&self) -> String {
        match self {
            Inspector::Path { .. } => "Path Data".to_string(),
            Inspector::Shape { label, .. } => format!("{} Properties", label),
        }
    }

    pub fn appearance(&self) -> &Appearance {
        match self {
            Inspector::Path { appearance, .. } | Inspector::Shape { appearance, .. } => appearance,
        }
    }
}

impl Appearance {
    /// Reads the appearance attributes, applying the control defaults.
    pub fn from_attributes(attributes: &IndexMap<String, String>) -> Self {
        Self {
            fill: non_empty(attributes, "fill").unwrap_or("none").to_string(),
            stroke: non_empty(attributes, "stroke").unwrap_or("none").to_string(),
            stroke_width: non_empty(attributes, "stroke-width")
                .unwrap_or("0")
                .to_string(),
            opacity: non_empty(attributes, "opacity").unwrap_or("1").to_string(),
        }
    }
}

fn non_empty<'a>(attributes: &'a IndexMap<String, String>, name: &str) -> Option<&'a str> {
    attributes
        .get(name)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

/// Color shown in a swatch for a paint value.
///
/// Only hex colors (`#rgb`, `#rrggbb`) are shown as-is; anything else
/// (`none`, named colors, `url(#grad)`) falls back to black.
///
/// # Example
///
/// ```
/// use vectorcraft::editor::inspector::swatch_color;
///
/// assert_eq!(swatch_color("#3b82f6"), "#3b82f6");
/// assert_eq!(swatch_color("#fff"), "#fff");
/// assert_eq!(swatch_color("red"), "#000000");
/// assert_eq!(swatch_color("#12345"), "#000000");
/// ```
pub fn swatch_color(value: &str) -> &str {
    let is_hex = value
        .strip_prefix('#')
        .filter(|hex| hex.len() == 3 || hex.len() == 6)
        .is_some_and(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()));
    if is_hex {
        value
    } else {
        "#000000"
    }
}

/// Parses a numeric value typed into the path parameter table.
///
/// Returns `None` for anything that is not a finite number, which the
/// inspector ignores.
pub fn parse_param_input(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
