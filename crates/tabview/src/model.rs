//! The rendered view model.
//!
//! [`TabularView::render`](crate::TabularView::render) produces a
//! [`RenderedTable`]: plain data describing what a front end draws. It
//! serializes to JSON and can be exported as CSV or drawn as text.

use serde::{Serialize, Serializer};
use tabview_render::{Align, Width};
use tabview_seeker::Dir;

use crate::column::Cell;
use crate::error::RenderError;
use crate::pagination::PageItem;
use crate::props::Action;

/// One column header.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    pub sortable: bool,
    pub filterable: bool,
    /// Direction of the active sort, if this column is sorted.
    #[serde(serialize_with = "serialize_dir", skip_serializing_if = "Option::is_none")]
    pub sort: Option<Dir>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Width>,
    pub align: Align,
}

fn serialize_dir<S: Serializer>(dir: &Option<Dir>, serializer: S) -> Result<S::Ok, S::Error> {
    dir.map(Dir::as_str).serialize(serializer)
}

/// One data row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderedRow {
    /// Resolved row identity.
    pub key: String,
    /// Position in display order.
    pub index: usize,
    /// Position in the records supplied by the caller.
    pub source_index: usize,
    pub cells: Vec<Cell>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
}

/// Table body: placeholder text or data rows.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Body {
    /// Shown while `loading` is set, regardless of records.
    Loading { text: String },
    /// Shown when there are no records.
    Empty { text: String },
    Rows { rows: Vec<RenderedRow> },
}

impl Body {
    /// Data rows; empty for placeholder bodies.
    pub fn rows(&self) -> &[RenderedRow] {
        match self {
            Body::Rows { rows } => rows,
            Body::Loading { .. } | Body::Empty { .. } => &[],
        }
    }

    /// Placeholder text of a loading or empty body.
    pub fn message(&self) -> Option<&str> {
        match self {
            Body::Loading { text } | Body::Empty { text } => Some(text.as_str()),
            Body::Rows { .. } => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Body::Loading { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty { .. })
    }
}

/// The search input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchBox {
    pub text: String,
    pub placeholder: String,
    /// False when there is no callback; typing changes nothing upstream.
    pub active: bool,
}

/// The pagination bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationBar {
    /// Clamped current page.
    pub current: usize,
    pub page_size: usize,
    pub total: usize,
    pub page_count: usize,
    /// First visible record, 1-based; 0 when there are no records.
    pub start: usize,
    /// Last visible record, inclusive; 0 when there are no records.
    pub end: usize,
    pub label: String,
    pub has_previous: bool,
    pub has_next: bool,
    pub pages: Vec<PageItem>,
    pub page_size_options: Vec<usize>,
}

/// Everything needed to draw one table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderedTable {
    pub headers: Vec<HeaderCell>,
    /// Title of the trailing action column, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions_title: Option<String>,
    pub body: Body,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationBar>,
}

impl RenderedTable {
    pub fn rows(&self) -> &[RenderedRow] {
        self.body.rows()
    }

    /// Row keys in display order.
    pub fn row_keys(&self) -> Vec<&str> {
        self.rows().iter().map(|r| r.key.as_str()).collect()
    }

    /// Cell texts of the column `key`, in display order.
    pub fn column_texts(&self, key: &str) -> Vec<&str> {
        let Some(pos) = self.headers.iter().position(|h| h.key == key) else {
            return Vec::new();
        };
        self.rows()
            .iter()
            .filter_map(|r| r.cells.get(pos).map(|c| c.text.as_str()))
            .collect()
    }

    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Header titles and cell texts as CSV.
    ///
    /// Placeholder bodies export the header only; actions are not exported.
    pub fn to_csv(&self) -> Result<String, RenderError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(self.headers.iter().map(|h| h.title.as_str()))?;
        for row in self.rows() {
            writer.write_record(row.cells.iter().map(|c| c.text.as_str()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8(bytes)?)
    }
}
