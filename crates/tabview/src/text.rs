//! Terminal output for a [`RenderedTable`].
//!
//! The layout is: an optional search line, the table with sort indicators
//! in the headers, and an optional pagination line.
//!
//! ```text
//! Search: pump
//! ┌──────┬──────────┐
//! │ ID   │ Load ▲   │
//! ├──────┼──────────┤
//! │ d-2  │ 12%      │
//! └──────┴──────────┘
//! ‹ Prev  1 … 4 [5] 6 … 10  Next ›  41 to 50 of 97
//! ```

use console::Style;
use tabview_render::{Column, StyleSheet, Table, TextCell};
use tabview_seeker::Dir;

use crate::column::Cell;
use crate::config::TableConfig;
use crate::model::{Body, PaginationBar, RenderedTable, SearchBox};
use crate::pagination::PageItem;

/// Draws rendered tables as text.
#[derive(Clone, Debug)]
pub struct TextRenderer {
    styles: StyleSheet,
    config: TableConfig,
    width: Option<usize>,
    color: bool,
}

impl TextRenderer {
    /// A renderer using the indicators, border and styles of `config`.
    pub fn new(config: &TableConfig) -> Self {
        let styles = config
            .styles
            .iter()
            .fold(StyleSheet::default(), |sheet, (name, dotted)| {
                sheet.define(name.as_str(), dotted)
            });
        TextRenderer {
            styles,
            config: config.clone(),
            width: None,
            color: false,
        }
    }

    /// Total output width. `None` sizes the table to its content.
    pub fn width(mut self, width: Option<usize>) -> Self {
        self.width = width;
        self
    }

    /// Emit ANSI styles for styled cells and headers.
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn render(&self, table: &RenderedTable) -> String {
        let mut out = Vec::new();
        if let Some(search) = &table.search {
            out.push(self.search_line(search));
        }
        out.push(self.table(table));
        if let Some(pagination) = &table.pagination {
            out.push(self.pagination_line(pagination));
        }
        out.join("\n")
    }

    fn search_line(&self, search: &SearchBox) -> String {
        if search.text.is_empty() {
            return self.paint(&search.placeholder, Some("muted"));
        }
        format!("Search: {}", search.text)
    }

    fn table(&self, table: &RenderedTable) -> String {
        let mut columns: Vec<Column> = table
            .headers
            .iter()
            .map(|h| Column::new(h.width.clone().unwrap_or_default()).align(h.align))
            .collect();
        let mut titles: Vec<String> = table
            .headers
            .iter()
            .map(|h| match h.sort {
                Some(Dir::Asc) => format!("{} {}", h.title, self.config.sort_asc_indicator),
                Some(Dir::Desc) => format!("{} {}", h.title, self.config.sort_desc_indicator),
                None => h.title.clone(),
            })
            .collect();
        if let Some(title) = &table.actions_title {
            columns.push(Column::default());
            titles.push(title.clone());
        }

        let mut layout = Table::new(columns)
            .header(titles)
            .border(self.config.border)
            .width(self.width);
        if let Some(style) = self.style("header") {
            layout = layout.header_style(style);
        }

        match &table.body {
            Body::Rows { rows } => {
                let cells: Vec<Vec<TextCell>> = rows
                    .iter()
                    .map(|row| {
                        let mut line: Vec<TextCell> =
                            row.cells.iter().map(|c| self.cell(c)).collect();
                        if table.actions_title.is_some() {
                            let labels: Vec<&str> = row
                                .actions
                                .iter()
                                .filter(|a| !a.disabled)
                                .map(|a| a.label.as_str())
                                .collect();
                            line.push(TextCell::new(labels.join(" ")));
                        }
                        line
                    })
                    .collect();
                layout.render(&cells)
            }
            Body::Loading { text } | Body::Empty { text } => {
                let mut message = TextCell::new(text.as_str());
                if let Some(style) = self.style("muted") {
                    message = message.styled(style);
                }
                layout.render_message(&message)
            }
        }
    }

    fn pagination_line(&self, bar: &PaginationBar) -> String {
        let mut parts = Vec::new();
        if bar.has_previous {
            parts.push("‹ Prev".to_string());
        }
        let pages: Vec<String> = bar
            .pages
            .iter()
            .map(|item| match item {
                PageItem::Page {
                    number,
                    current: true,
                } => self.paint(&format!("[{}]", number), Some("accent")),
                PageItem::Page { number, .. } => number.to_string(),
                PageItem::Ellipsis => "…".to_string(),
            })
            .collect();
        parts.push(pages.join(" "));
        if bar.has_next {
            parts.push("Next ›".to_string());
        }
        parts.push(self.paint(&bar.label, Some("muted")));
        parts.join("  ")
    }

    fn cell(&self, cell: &Cell) -> TextCell {
        let text = TextCell::new(cell.text.as_str());
        match cell.style.as_deref().and_then(|name| self.style(name)) {
            Some(style) => text.styled(style),
            None => text,
        }
    }

    fn paint(&self, text: &str, style: Option<&str>) -> String {
        match style.and_then(|name| self.style(name)) {
            Some(style) => style.apply_to(text).to_string(),
            None => text.to_string(),
        }
    }

    fn style(&self, name: &str) -> Option<Style> {
        if !self.color {
            return None;
        }
        self.styles
            .get(name)
            .map(|style| style.clone().force_styling(true))
    }
}
