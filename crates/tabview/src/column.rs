//! Column specifications and cells.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tabview_render::{Align, Width};
use tabview_seeker::{display_value, Record, Value};

/// Custom cell renderer: `(value, record, display_index) -> Cell`.
pub type CellRenderer<T> = Arc<dyn Fn(&Value<'_>, &T, usize) -> Cell + Send + Sync>;

/// One rendered cell: display text plus an optional style name.
///
/// Style names are resolved by the output layer (see
/// [`TextRenderer`](crate::TextRenderer)); the core never interprets them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            style: None,
        }
    }

    /// A cell with a style name such as `"danger"` or `"muted"`.
    pub fn styled(text: impl Into<String>, style: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            style: Some(style.into()),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::new(text)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Declarative description of one column.
///
/// ```rust
/// use tabview::{Cell, ColumnSpec, Width};
/// use serde_json::Value as Json;
///
/// let load = ColumnSpec::<Json>::new("load", "Load")
///     .width(Width::Fixed(6))
///     .sortable(true)
///     .render(|value, _row, _index| match value.as_number() {
///         Some(n) if n.to_f64() > 80.0 => Cell::styled(format!("{n}%"), "danger"),
///         Some(n) => Cell::new(format!("{n}%")),
///         None => Cell::new("-"),
///     });
/// assert!(load.is_sortable());
/// ```
pub struct ColumnSpec<T> {
    key: String,
    title: String,
    width: Option<Width>,
    align: Align,
    sortable: bool,
    filterable: bool,
    render: Option<CellRenderer<T>>,
}

impl<T> ColumnSpec<T> {
    /// A column showing the field `key` under the header `title`.
    ///
    /// Synthetic keys that resolve to no field are fine as long as a
    /// renderer is supplied.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        ColumnSpec {
            key: key.into(),
            title: title.into(),
            width: None,
            align: Align::Left,
            sortable: false,
            filterable: false,
            render: None,
        }
    }

    /// Layout hint for text output.
    pub fn width(mut self, width: Width) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Shorthand for `.align(Align::Right)`.
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Marks the column as searched by [`filter_records`](crate::filter_records).
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Replaces the default stringification of the field value.
    pub fn render<F, R>(mut self, render: F) -> Self
    where
        F: Fn(&Value<'_>, &T, usize) -> R + Send + Sync + 'static,
        R: Into<Cell>,
    {
        self.render = Some(Arc::new(
            move |value: &Value<'_>, record: &T, index: usize| render(value, record, index).into(),
        ));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn get_width(&self) -> Option<&Width> {
        self.width.as_ref()
    }

    pub fn get_align(&self) -> Align {
        self.align
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    pub fn has_render(&self) -> bool {
        self.render.is_some()
    }
}

impl<T: Record> ColumnSpec<T> {
    /// Produces the cell for `record` at `index` in display order.
    ///
    /// Without a renderer a missing value becomes `placeholder`.
    pub fn cell(&self, record: &T, index: usize, placeholder: &str) -> Cell {
        let value = record.field(&self.key);
        match &self.render {
            Some(render) => render(&value, record, index),
            None => display_value(&value)
                .map(Cell::new)
                .unwrap_or_else(|| Cell::new(placeholder)),
        }
    }
}

impl<T> Clone for ColumnSpec<T> {
    fn clone(&self) -> Self {
        ColumnSpec {
            key: self.key.clone(),
            title: self.title.clone(),
            width: self.width.clone(),
            align: self.align,
            sortable: self.sortable,
            filterable: self.filterable,
            render: self.render.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
