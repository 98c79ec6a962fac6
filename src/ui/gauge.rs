//! Threshold classification and text usage bars.

use colored::Color;
use serde::{Deserialize, Serialize};

use super::style::{Style, StyledText};

pub const FILLED_GLYPH: char = '█';
pub const EMPTY_GLYPH: char = '░';
pub const DEFAULT_BAR_WIDTH: usize = 20;

/// Three-valued color classification of a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Normal,
    Warning,
    Critical,
}

impl Severity {
    pub fn style(self) -> Style {
        match self {
            Severity::Normal => Style::fg(Color::Green),
            Severity::Warning => Style::fg(Color::Yellow),
            Severity::Critical => Style::fg(Color::Red),
        }
    }
}

/// Cut points for [`classify`], both inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub warning: f32,
    pub critical: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning: 60.0,
            critical: 80.0,
        }
    }
}

/// Classify a percentage. NaN falls through to `Normal`.
pub fn classify(percent: f32, thresholds: &Thresholds) -> Severity {
    if percent >= thresholds.critical {
        Severity::Critical
    } else if percent >= thresholds.warning {
        Severity::Warning
    } else {
        Severity::Normal
    }
}

/// Number of filled glyphs for `percent` on a bar of `width`, capped to the bar.
pub fn filled_glyphs(percent: f32, width: usize) -> usize {
    let raw = (width as f64 * percent as f64 / 100.0).floor();
    if raw.is_nan() || raw <= 0.0 {
        0
    } else {
        (raw as usize).min(width)
    }
}

/// Render `percent` as a fixed-width bar followed by the value, styled by severity.
pub fn render_bar(percent: f32, width: usize, thresholds: &Thresholds) -> StyledText {
    let filled = filled_glyphs(percent, width);
    let mut bar = String::with_capacity(width * 3 + 8);
    bar.extend(std::iter::repeat(FILLED_GLYPH).take(filled));
    bar.extend(std::iter::repeat(EMPTY_GLYPH).take(width - filled));

    StyledText::new(
        format!("{} {:.1}%", bar, percent),
        classify(percent, thresholds).style(),
    )
}
