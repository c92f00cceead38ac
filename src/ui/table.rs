use super::color::Painter;
use unicode_width::UnicodeWidthStr;

/// A run of text with an optional color code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub color: Option<String>,
}

/// A table cell made of one or more spans.
///
/// Widths are measured on the plain text so color escapes never skew
/// alignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    spans: Vec<Span>,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn styled<T: Into<String>>(text: T, color: &str) -> Self {
        Self::new().push(text, Some(color))
    }

    pub fn push<T: Into<String>>(mut self, text: T, color: Option<&str>) -> Self {
        self.spans.push(Span {
            text: text.into(),
            color: color.map(|c| c.to_string()),
        });
        self
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(|span| span.text.width()).sum()
    }

    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    pub fn render(&self, painter: &Painter) -> String {
        self.spans
            .iter()
            .map(|span| match &span.color {
                Some(code) => painter.paint(code, &span.text),
                None => span.text.clone(),
            })
            .collect()
    }
}

/// Left-aligned text table.
///
/// Every column but the last is padded to its widest cell, followed by
/// `gap` spaces. The last column is never padded, so lines carry no
/// trailing whitespace.
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
    gap: usize,
}

impl Table {
    pub fn new() -> Self {
        Self::with_gap(1)
    }

    pub fn with_gap(gap: usize) -> Self {
        Self {
            rows: Vec::new(),
            gap,
        }
    }

    pub fn add_row(&mut self, cells: Vec<Cell>) {
        self.rows.push(cells);
    }

    pub fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..columns)
            .map(|column| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(column))
                    .map(Cell::width)
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Display width of the widest rendered line
    pub fn width(&self) -> usize {
        let widths = self.column_widths();
        self.rows
            .iter()
            .map(|row| self.line_width(row, &widths))
            .max()
            .unwrap_or(0)
    }

    fn line_width(&self, row: &[Cell], widths: &[usize]) -> usize {
        let Some(last) = row.len().checked_sub(1) else {
            return 0;
        };
        let padded: usize = widths[..last].iter().map(|w| w + self.gap).sum();
        padded + row[last].width()
    }

    /// One rendered line per row, in insertion order
    pub fn render_lines(&self, painter: &Painter) -> Vec<String> {
        let widths = self.column_widths();

        self.rows
            .iter()
            .map(|row| {
                let mut line = String::new();
                for (column, cell) in row.iter().enumerate() {
                    line.push_str(&cell.render(painter));
                    if column + 1 < row.len() {
                        let padding = widths[column] - cell.width() + self.gap;
                        line.push_str(&" ".repeat(padding));
                    }
                }
                line
            })
            .collect()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
