//! Tables, titled panels and the console sink they are printed to.
//!
//! Layout is computed on display width (`unicode-width`), so emoji titles and
//! bar glyphs line up. Styling is applied only when the console has color on.

use std::io::{self, Stdout, Write};

use colored::Color;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{self, Clear, ClearType},
};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::style::{Style, StyledText};
use crate::error::{DashError, Result};

const DEFAULT_CONSOLE_WIDTH: usize = 80;
const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    pub style: Style,
    pub justify: Justify,
}

impl Column {
    pub fn new<S: Into<String>>(header: S, style: Style) -> Self {
        Self {
            header: header.into(),
            style,
            justify: Justify::Left,
        }
    }

    pub fn right(mut self) -> Self {
        self.justify = Justify::Right;
        self
    }
}

/// One rendered line: styled segments laid out left to right
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub segments: Vec<StyledText>,
}

impl Line {
    pub fn width(&self) -> usize {
        self.segments.iter().map(|s| s.text.width()).sum()
    }

    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn render(&self, color: bool) -> String {
        self.segments.iter().map(|s| s.render(color)).collect()
    }

    fn push(&mut self, segment: StyledText) {
        self.segments.push(segment);
    }

    fn pad(&mut self, n: usize) {
        if n > 0 {
            self.segments.push(StyledText::plain(" ".repeat(n)));
        }
    }
}

/// A table of styled cells with typed columns
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<StyledText>>,
    show_header: bool,
}

impl Table {
    /// Create a table with a header row
    pub fn with_columns(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            show_header: true,
        }
    }

    /// Create a borderless key/value style table without header
    pub fn grid(columns: Vec<Column>) -> Self {
        Self {
            show_header: false,
            ..Self::with_columns(columns)
        }
    }

    /// Add a row. Missing cells are blank, extra cells are dropped.
    pub fn add_row<I, T>(&mut self, cells: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<StyledText>,
    {
        let mut row: Vec<StyledText> = cells
            .into_iter()
            .take(self.columns.len())
            .map(Into::into)
            .collect();
        row.resize(self.columns.len(), StyledText::default());
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Vec<StyledText>] {
        &self.rows
    }

    fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let header = if self.show_header {
                    col.header.width()
                } else {
                    0
                };
                self.rows
                    .iter()
                    .map(|row| row[i].text.width())
                    .fold(header, usize::max)
            })
            .collect()
    }

    /// Lay the table out into lines
    pub fn lines(&self) -> Vec<Line> {
        let widths = self.column_widths();
        let total_width = widths.iter().sum::<usize>()
            + COLUMN_GAP.len() * widths.len().saturating_sub(1);
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        if self.show_header {
            let headers: Vec<StyledText> = self
                .columns
                .iter()
                .map(|c| StyledText::new(c.header.clone(), Style::PLAIN.bold()))
                .collect();
            lines.push(self.layout_row(&headers, &widths));
            lines.push(Line {
                segments: vec![StyledText::new(
                    "─".repeat(total_width),
                    Style::PLAIN.dim(),
                )],
            });
        }

        for row in &self.rows {
            lines.push(self.layout_row(row, &widths));
        }

        lines
    }

    fn layout_row(&self, cells: &[StyledText], widths: &[usize]) -> Line {
        let mut line = Line::default();
        let last = cells.len().saturating_sub(1);

        for (i, (cell, column)) in cells.iter().zip(&self.columns).enumerate() {
            let slack = widths[i].saturating_sub(cell.text.width());
            let styled = if cell.style.is_plain() {
                StyledText::new(cell.text.clone(), column.style)
            } else {
                cell.clone()
            };

            match column.justify {
                Justify::Left => {
                    line.push(styled);
                    // trailing pad on the last column is added by the panel
                    if i != last {
                        line.pad(slack);
                    }
                }
                Justify::Right => {
                    line.pad(slack);
                    line.push(styled);
                }
            }

            if i != last {
                line.push(StyledText::plain(COLUMN_GAP));
            }
        }

        line
    }
}

/// A table wrapped in a rounded border with an optional centered title
#[derive(Debug, Clone)]
pub struct Panel {
    pub title: Option<String>,
    pub border: Style,
    pub body: Table,
    /// Shrink to content instead of expanding to the console width
    pub fit: bool,
}

impl Panel {
    pub fn new<S: Into<String>>(title: S, border: Style, body: Table) -> Self {
        Self {
            title: Some(title.into()),
            border,
            body,
            fit: false,
        }
    }

    pub fn untitled(border: Style, body: Table) -> Self {
        Self {
            title: None,
            border,
            body,
            fit: false,
        }
    }

    pub fn fit(mut self) -> Self {
        self.fit = true;
        self
    }

    /// Lay out the panel for a console of `width` columns
    pub fn lines(&self, width: usize) -> Vec<Line> {
        let body = self.body.lines();
        let content = body.iter().map(Line::width).max().unwrap_or(0);
        let title = self.title.as_ref().map(|t| format!(" {} ", t));
        let title_width = title.as_ref().map(|t| t.width()).unwrap_or(0);

        let mut inner = if self.fit {
            content
        } else {
            content.max(width.saturating_sub(4))
        };
        inner = inner.max(title_width.saturating_sub(2));
        let run = inner + 2;

        let border = |s: String| StyledText::new(s, self.border);
        let mut lines = Vec::with_capacity(body.len() + 2);

        let mut top = Line::default();
        match title {
            Some(title) => {
                let left = (run - title_width) / 2;
                let right = run - title_width - left;
                top.push(border(format!("╭{}", "─".repeat(left))));
                top.push(StyledText::new(title, Style::PLAIN.bold()));
                top.push(border(format!("{}╮", "─".repeat(right))));
            }
            None => top.push(border(format!("╭{}╮", "─".repeat(run)))),
        }
        lines.push(top);

        for row in body {
            let slack = inner - row.width();
            let mut line = Line::default();
            line.push(border("│".to_string()));
            line.pad(1);
            line.segments.extend(row.segments);
            line.pad(slack + 1);
            line.push(border("│".to_string()));
            lines.push(line);
        }

        lines.push(Line {
            segments: vec![border(format!("╰{}╯", "─".repeat(run)))],
        });
        lines
    }
}

/// Output sink for styled text, tables and panels
pub struct Console<W: Write> {
    out: W,
    color: bool,
    width: usize,
}

impl Console<Stdout> {
    /// Console on stdout, sized to the terminal when there is one
    pub fn stdout(color: bool) -> Self {
        let width = terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(DEFAULT_CONSOLE_WIDTH);
        Self::new(io::stdout(), color, width)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool, width: usize) -> Self {
        Self { out, color, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn print_panel(&mut self, panel: &Panel) -> Result<()> {
        for line in panel.lines(self.width) {
            self.write_line(&line)?;
        }
        Ok(())
    }

    /// Write `value` as pretty-printed JSON followed by a newline
    pub fn print_json<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value)
            .map_err(|e| DashError::RenderingFailure(e.into()))?;
        writeln!(self.out).map_err(DashError::RenderingFailure)
    }

    pub fn print_styled(&mut self, text: &StyledText) -> Result<()> {
        self.write_line(&Line {
            segments: vec![text.clone()],
        })
    }

    pub fn print_error(&mut self, message: &str) -> Result<()> {
        self.print_styled(&StyledText::new(message, Style::fg(Color::Red)))
    }

    pub fn blank_line(&mut self) -> Result<()> {
        self.write_line(&Line::default())
    }

    /// Clear the screen and home the cursor
    pub fn clear(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0)).map_err(DashError::RenderingFailure)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(DashError::RenderingFailure)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &Line) -> Result<()> {
        writeln!(self.out, "{}", line.render(self.color)).map_err(DashError::RenderingFailure)
    }
}
