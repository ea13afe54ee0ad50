//! Color definitions for vectorcraft themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used in the vectorcraft terminal UI. Colors fall into three groups:
//! markup highlighting, UI elements, and message levels.

use ratatui::style::Color;

/// Defines all colors used in a vectorcraft theme.
///
/// - **Markup colors**: tag names, ids, attribute names and values, numbers
/// - **UI colors**: background, foreground, cursor, selection, status line
/// - **Semantic colors**: errors, warnings, info messages
///
/// # Examples
///
/// ```
/// use vectorcraft::theme::colors::ThemeColors;
///
/// let dark = ThemeColors::default_dark();
/// let light = ThemeColors::default_light();
/// assert_ne!(dark.background, light.background);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Markup colors
    /// Color for element tag names.
    pub tag: Color,
    /// Color for `#id` suffixes in the structure view.
    pub id: Color,
    /// Color for attribute names.
    pub attr_name: Color,
    /// Color for attribute values.
    pub attr_value: Color,
    /// Color for numeric parameters in the inspector.
    pub number: Color,
    /// Color for secondary text (labels, hints, empty states).
    pub muted: Color,

    // UI colors
    /// Main background color for the editor.
    pub background: Color,
    /// Main foreground/text color for the editor.
    pub foreground: Color,
    /// Color for the cursor line in the structure view.
    pub cursor: Color,
    /// Marker color for the selected element.
    pub selection: Color,
    /// Border color for panels.
    pub border: Color,
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,

    // Semantic colors
    /// Color for error messages.
    pub error: Color,
    /// Color for warning messages.
    pub warning: Color,
    /// Color for informational messages.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// Uses ANSI colors so the terminal's own palette decides the final look.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectorcraft::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_dark();
    /// assert_eq!(colors.background, Color::Reset);
    /// assert_eq!(colors.status_line_bg, Color::White);
    /// ```
    pub fn default_dark() -> Self {
        Self {
            tag: Color::LightBlue,
            id: Color::Yellow,
            attr_name: Color::Cyan,
            attr_value: Color::Green,
            number: Color::Magenta,
            muted: Color::DarkGray,

            background: Color::Reset, // Use terminal's default background
            foreground: Color::Gray,
            cursor: Color::LightBlue,
            selection: Color::Yellow,
            border: Color::DarkGray,
            status_line_bg: Color::White,
            status_line_fg: Color::Black,

            error: Color::Red,
            warning: Color::Yellow,
            info: Color::LightBlue,
        }
    }

    /// Returns the default light color scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectorcraft::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_light();
    /// assert_eq!(colors.background, Color::Rgb(250, 250, 250));
    /// ```
    pub fn default_light() -> Self {
        Self {
            tag: Color::Rgb(166, 38, 164),
            id: Color::Rgb(152, 104, 1),
            attr_name: Color::Rgb(1, 132, 188),
            attr_value: Color::Rgb(80, 161, 79),
            number: Color::Rgb(152, 104, 1),
            muted: Color::Rgb(160, 161, 167),

            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            cursor: Color::Rgb(82, 139, 255),
            selection: Color::Rgb(202, 18, 67),
            border: Color::Rgb(220, 220, 220),
            status_line_bg: Color::Rgb(238, 238, 238),
            status_line_fg: Color::Rgb(56, 58, 66),

            error: Color::Rgb(202, 18, 67),
            warning: Color::Rgb(152, 104, 1),
            info: Color::Rgb(1, 132, 188),
        }
    }

    /// Returns the Gruvbox Dark color scheme.
    pub fn gruvbox_dark() -> Self {
        Self {
            tag: Color::Rgb(251, 184, 108),        // orange
            id: Color::Rgb(250, 189, 47),          // yellow
            attr_name: Color::Rgb(131, 165, 152),  // aqua
            attr_value: Color::Rgb(184, 187, 38),  // green
            number: Color::Rgb(211, 134, 155),     // purple
            muted: Color::Rgb(146, 131, 116),      // gray

            background: Color::Rgb(40, 40, 40),
            foreground: Color::Rgb(235, 219, 178),
            cursor: Color::Rgb(251, 184, 108),
            selection: Color::Rgb(250, 189, 47),
            border: Color::Rgb(80, 73, 69),
            status_line_bg: Color::Rgb(60, 56, 54),
            status_line_fg: Color::Rgb(235, 219, 178),

            error: Color::Rgb(251, 73, 52),
            warning: Color::Rgb(250, 189, 47),
            info: Color::Rgb(131, 165, 152),
        }
    }

    /// Returns the Nord color scheme.
    pub fn nord() -> Self {
        Self {
            tag: Color::Rgb(136, 192, 208),        // frost cyan
            id: Color::Rgb(235, 203, 139),         // aurora yellow
            attr_name: Color::Rgb(129, 161, 193),  // frost blue
            attr_value: Color::Rgb(163, 190, 140), // aurora green
            number: Color::Rgb(180, 142, 173),     // aurora purple
            muted: Color::Rgb(76, 86, 106),        // polar night gray

            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            cursor: Color::Rgb(136, 192, 208),
            selection: Color::Rgb(235, 203, 139),
            border: Color::Rgb(67, 76, 94),
            status_line_bg: Color::Rgb(59, 66, 82),
            status_line_fg: Color::Rgb(216, 222, 233),

            error: Color::Rgb(191, 97, 106),
            warning: Color::Rgb(235, 203, 139),
            info: Color::Rgb(136, 192, 208),
        }
    }

    /// Returns the Dracula color scheme.
    pub fn dracula() -> Self {
        Self {
            tag: Color::Rgb(255, 121, 198),        // pink
            id: Color::Rgb(255, 184, 108),         // orange
            attr_name: Color::Rgb(139, 233, 253),  // cyan
            attr_value: Color::Rgb(241, 250, 140), // yellow
            number: Color::Rgb(189, 147, 249),     // purple
            muted: Color::Rgb(98, 114, 164),       // comment

            background: Color::Rgb(40, 42, 54),
            foreground: Color::Rgb(248, 248, 242),
            cursor: Color::Rgb(189, 147, 249),
            selection: Color::Rgb(80, 250, 123),
            border: Color::Rgb(68, 71, 90),
            status_line_bg: Color::Rgb(68, 71, 90),
            status_line_fg: Color::Rgb(248, 248, 242),

            error: Color::Rgb(255, 85, 85),
            warning: Color::Rgb(255, 184, 108),
            info: Color::Rgb(139, 233, 253),
        }
    }
}
