//! Table decorator: headers, borders, separators and aligned rows.
//!
//! # Example
//!
//! ```rust
//! use tabview_render::{BorderStyle, Column, Table, TextCell, Width};
//!
//! let table = Table::new(vec![
//!     Column::new(Width::Fixed(6)),
//!     Column::new(Width::Fixed(4)).right(),
//! ])
//! .header(["Name", "Load"])
//! .border(BorderStyle::Ascii);
//!
//! let out = table.render(&[vec![TextCell::from("pump"), TextCell::from("42")]]);
//! let lines: Vec<&str> = out.lines().collect();
//! assert_eq!(lines[0], "+--------+------+");
//! assert_eq!(lines[1], "| Name   | Load |");
//! assert_eq!(lines[3], "| pump   |   42 |");
//! ```

use console::Style;

use crate::resolve::{resolve_widths, ResolvedWidths};
use crate::types::{Align, BorderChars, BorderStyle, Column};
use crate::util::{display_width, fit};

const PLAIN_SEPARATOR: &str = "  ";

/// Cell text with an optional terminal style.
#[derive(Clone, Debug, Default)]
pub struct TextCell {
    pub text: String,
    pub style: Option<Style>,
}

impl TextCell {
    pub fn new(text: impl Into<String>) -> Self {
        TextCell {
            text: text.into(),
            style: None,
        }
    }

    /// Set the style applied after padding.
    pub fn styled(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    fn paint(&self, width: usize, align: Align) -> String {
        let padded = fit(&self.text, width, align);
        match &self.style {
            Some(style) => style.apply_to(padded).to_string(),
            None => padded,
        }
    }
}

impl From<&str> for TextCell {
    fn from(text: &str) -> Self {
        TextCell::new(text)
    }
}

impl From<String> for TextCell {
    fn from(text: String) -> Self {
        TextCell::new(text)
    }
}

/// A decorated table with borders, headers, and separators.
#[derive(Clone, Debug)]
pub struct Table {
    columns: Vec<Column>,
    headers: Option<Vec<TextCell>>,
    header_style: Option<Style>,
    border: BorderStyle,
    width: Option<usize>,
    row_separator: bool,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Table {
            columns,
            headers: None,
            header_style: None,
            border: BorderStyle::None,
            width: None,
            row_separator: false,
        }
    }

    /// Set the column headers.
    pub fn header<S: Into<TextCell>, I: IntoIterator<Item = S>>(mut self, headers: I) -> Self {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Style applied to header cells that carry no style of their own.
    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = Some(style);
        self
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Total width available, including borders. `None` sizes to content.
    pub fn width(mut self, width: Option<usize>) -> Self {
        self.width = width;
        self
    }

    /// Draw a separator line between data rows.
    pub fn row_separator(mut self, enable: bool) -> Self {
        self.row_separator = enable;
        self
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Width taken by borders and separators.
    pub fn overhead(&self) -> usize {
        let n = self.columns.len();
        match self.border {
            BorderStyle::None => PLAIN_SEPARATOR.len() * n.saturating_sub(1),
            _ if n == 0 => 0,
            _ => 4 + 3 * (n - 1),
        }
    }

    /// Resolves column widths for the given rows and headers.
    pub fn resolve(&self, rows: &[Vec<TextCell>]) -> ResolvedWidths {
        let texts: Vec<Vec<&str>> = self
            .headers
            .iter()
            .chain(rows.iter())
            .map(|row| row.iter().map(|c| c.text.as_str()).collect())
            .collect();
        resolve_widths(&self.columns, self.width, self.overhead(), &texts)
    }

    /// Render the complete table.
    pub fn render(&self, rows: &[Vec<TextCell>]) -> String {
        let widths = self.resolve(rows);
        let mut output = self.head(&widths);

        let between = if self.row_separator {
            self.line(&widths, LineType::Middle)
        } else {
            None
        };
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                if let Some(sep) = &between {
                    output.push(sep.clone());
                }
            }
            output.push(self.row(&widths, row));
        }

        output.extend(self.line(&widths, LineType::Bottom));
        output.join("\n")
    }

    /// Render the header followed by one centered line spanning all columns.
    ///
    /// Used for empty and loading bodies.
    pub fn render_message(&self, message: &TextCell) -> String {
        let mut widths = self.resolve(&[]);
        let span = self.span(&widths);
        let needed = display_width(&message.text);
        if needed > span && self.width.is_none() {
            if let Some(last) = widths.widths.last_mut() {
                *last += needed - span;
            }
        }

        let mut output = self.head(&widths);
        let body = message.paint(self.span(&widths), Align::Center);
        output.push(self.wrap(body));
        output.extend(self.line(&widths, LineType::Bottom));
        output.join("\n")
    }

    fn head(&self, widths: &ResolvedWidths) -> Vec<String> {
        let mut output = Vec::new();
        output.extend(self.line(widths, LineType::Top));
        if let Some(headers) = &self.headers {
            let styled: Vec<TextCell> = headers
                .iter()
                .map(|h| match (&h.style, &self.header_style) {
                    (None, Some(style)) => h.clone().styled(style.clone()),
                    _ => h.clone(),
                })
                .collect();
            output.push(self.row(widths, &styled));
            match self.line(widths, LineType::Middle) {
                Some(sep) => output.push(sep),
                None => output.push(
                    widths
                        .widths
                        .iter()
                        .map(|w| "-".repeat(*w))
                        .collect::<Vec<_>>()
                        .join(PLAIN_SEPARATOR),
                ),
            }
        }
        output
    }

    fn row(&self, widths: &ResolvedWidths, cells: &[TextCell]) -> String {
        let empty = TextCell::default();
        let parts: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let cell = cells.get(i).unwrap_or(&empty);
                cell.paint(widths.get(i).unwrap_or(0), col.align)
            })
            .collect();
        match self.border.chars() {
            Some(chars) => self.wrap(parts.join(&format!(" {} ", chars.vertical))),
            None => parts.join(PLAIN_SEPARATOR),
        }
    }

    /// Content width of a row between the outer borders.
    fn span(&self, widths: &ResolvedWidths) -> usize {
        let sep = match self.border {
            BorderStyle::None => PLAIN_SEPARATOR.len(),
            _ => 3,
        };
        widths.total() + sep * widths.len().saturating_sub(1)
    }

    fn wrap(&self, content: String) -> String {
        match self.border.chars() {
            Some(chars) => format!("{v} {content} {v}", v = chars.vertical),
            None => content,
        }
    }

    fn line(&self, widths: &ResolvedWidths, line_type: LineType) -> Option<String> {
        let chars = self.border.chars()?;
        let (left, joint, right) = line_type.ends(&chars);
        let segments: Vec<String> = widths
            .widths
            .iter()
            .map(|w| chars.horizontal.to_string().repeat(w + 2))
            .collect();
        Some(format!(
            "{}{}{}",
            left,
            segments.join(&joint.to_string()),
            right
        ))
    }
}

/// Type of horizontal line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineType {
    Top,
    Middle,
    Bottom,
}

impl LineType {
    fn ends(self, chars: &BorderChars) -> (char, char, char) {
        match self {
            LineType::Top => (chars.top_left, chars.top_t, chars.top_right),
            LineType::Middle => (chars.left_t, chars.cross, chars.right_t),
            LineType::Bottom => (chars.bottom_left, chars.bottom_t, chars.bottom_right),
        }
    }
}
