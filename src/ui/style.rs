//! Named text styles and styled text fragments.
//!
//! Styles are plain values; color escapes are only produced when a
//! [`StyledText`] is painted for a color-capable sink.

use colored::{Color, ColoredString, Colorize};

/// A named terminal style: optional foreground color plus bold/dim flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        color: None,
        bold: false,
        dim: false,
    };

    pub const fn fg(color: Color) -> Self {
        Style {
            color: Some(color),
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Style { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Style { dim: true, ..self }
    }

    pub fn is_plain(&self) -> bool {
        *self == Style::PLAIN
    }

    /// Apply this style to a piece of text
    pub fn paint(&self, text: &str) -> ColoredString {
        let mut painted = text.normal();
        if let Some(color) = self.color {
            painted = painted.color(color);
        }
        if self.bold {
            painted = painted.bold();
        }
        if self.dim {
            painted = painted.dimmed();
        }
        painted
    }
}

/// Text paired with the style it should be shown in
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledText {
    pub text: String,
    pub style: Style,
}

impl StyledText {
    pub fn new<S: Into<String>>(text: S, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self::new(text, Style::PLAIN)
    }

    /// Render to a string, with escapes only when `color` is set
    pub fn render(&self, color: bool) -> String {
        if color && !self.style.is_plain() {
            self.style.paint(&self.text).to_string()
        } else {
            self.text.clone()
        }
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        StyledText::plain(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        StyledText::plain(text)
    }
}
