//! Per-render inputs: records, columns, callbacks and options.
//!
//! Props borrow the caller's data for one render or interaction. Callbacks
//! are `FnMut` and may capture the caller's state mutably for the lifetime
//! `'a`.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::column::ColumnSpec;
use crate::identity::RowIdentity;
use crate::pagination::PaginationState;

/// Page-change callback: `(page, page_size)`.
pub type PageChangeFn<'a> = Box<dyn FnMut(usize, usize) + 'a>;
/// Search callback, called with the full input text.
pub type SearchFn<'a> = Box<dyn FnMut(&str) + 'a>;
/// Row-click callback: `(record, display_index)`.
pub type RowClickFn<'a, T> = Box<dyn FnMut(&T, usize) + 'a>;
/// Per-row action factory: `(record, display_index) -> actions`.
pub type ActionsFn<T> = Arc<dyn Fn(&T, usize) -> Vec<Action> + Send + Sync>;

/// Pagination descriptor plus the page-change callback.
pub struct Pagination<'a> {
    pub state: PaginationState,
    pub(crate) on_change: Option<PageChangeFn<'a>>,
}

impl<'a> Pagination<'a> {
    pub fn new(current: usize, page_size: usize, total: usize) -> Self {
        Pagination::from_state(PaginationState::new(current, page_size, total))
    }

    pub fn from_state(state: PaginationState) -> Self {
        Pagination {
            state,
            on_change: None,
        }
    }

    /// Called with `(page, page_size)` when the user navigates.
    pub fn on_change(mut self, f: impl FnMut(usize, usize) + 'a) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub(crate) fn emit(&mut self, page: usize, page_size: usize) -> (usize, usize) {
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(page, page_size);
        }
        (page, page_size)
    }
}

impl fmt::Debug for Pagination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pagination")
            .field("state", &self.state)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Search box options.
pub struct Search<'a> {
    pub searchable: bool,
    pub placeholder: Option<String>,
    pub(crate) on_search: Option<SearchFn<'a>>,
}

impl<'a> Search<'a> {
    /// A searchable box without a callback; input is kept but inert.
    pub fn new() -> Self {
        Search {
            searchable: true,
            placeholder: None,
            on_search: None,
        }
    }

    /// Called on every change with the full text. No debounce.
    pub fn on_search(mut self, f: impl FnMut(&str) + 'a) -> Self {
        self.on_search = Some(Box::new(f));
        self
    }

    /// Overrides the configured placeholder.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn has_callback(&self) -> bool {
        self.on_search.is_some()
    }
}

impl Default for Search<'_> {
    fn default() -> Self {
        Search::new()
    }
}

impl fmt::Debug for Search<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Search")
            .field("searchable", &self.searchable)
            .field("placeholder", &self.placeholder)
            .field("on_search", &self.on_search.is_some())
            .finish()
    }
}

/// An interactive element of a row, such as an edit or delete button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Action {
    /// Stable identifier reported back to the caller.
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl Action {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Action {
            id: id.into(),
            label: label.into(),
            style: None,
            disabled: false,
        }
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Trailing column of per-row actions.
pub struct ActionColumn<T> {
    pub title: String,
    pub(crate) render: ActionsFn<T>,
}

impl<T> ActionColumn<T> {
    pub fn new<F>(title: impl Into<String>, render: F) -> Self
    where
        F: Fn(&T, usize) -> Vec<Action> + Send + Sync + 'static,
    {
        ActionColumn {
            title: title.into(),
            render: Arc::new(render),
        }
    }

    /// Actions for `record` shown at `index`.
    pub fn actions(&self, record: &T, index: usize) -> Vec<Action> {
        (self.render)(record, index)
    }
}

impl<T> Clone for ActionColumn<T> {
    fn clone(&self) -> Self {
        ActionColumn {
            title: self.title.clone(),
            render: Arc::clone(&self.render),
        }
    }
}

impl<T> fmt::Debug for ActionColumn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionColumn")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Everything a [`TabularView`](crate::TabularView) needs for one render or
/// interaction.
///
/// ```rust
/// use serde_json::json;
/// use tabview::{ColumnSpec, Pagination, Search, TableProps};
///
/// let rows = vec![json!({"id": "a", "v": 3})];
/// let columns = vec![ColumnSpec::new("v", "Value").sortable(true)];
/// let mut searches = Vec::new();
///
/// let props = TableProps::new(&rows, &columns)
///     .pagination(Pagination::new(1, 10, 1))
///     .search(Search::new().on_search(|text| searches.push(text.to_string())))
///     .row_key("id");
/// assert!(!props.loading);
/// ```
pub struct TableProps<'a, T> {
    pub records: &'a [T],
    pub columns: &'a [ColumnSpec<T>],
    pub pagination: Option<Pagination<'a>>,
    pub search: Option<Search<'a>>,
    pub row_identity: RowIdentity<T>,
    pub(crate) on_row_click: Option<RowClickFn<'a, T>>,
    pub actions: Option<ActionColumn<T>>,
    pub loading: bool,
}

impl<'a, T> TableProps<'a, T> {
    pub fn new(records: &'a [T], columns: &'a [ColumnSpec<T>]) -> Self {
        TableProps {
            records,
            columns,
            pagination: None,
            search: None,
            row_identity: RowIdentity::Default,
            on_row_click: None,
            actions: None,
            loading: false,
        }
    }

    pub fn pagination(mut self, pagination: Pagination<'a>) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn search(mut self, search: Search<'a>) -> Self {
        self.search = Some(search);
        self
    }

    pub fn row_identity(mut self, identity: RowIdentity<T>) -> Self {
        self.row_identity = identity;
        self
    }

    /// Shorthand for `.row_identity(RowIdentity::field(name))`.
    pub fn row_key(self, field: impl Into<String>) -> Self {
        self.row_identity(RowIdentity::Field(field.into()))
    }

    pub fn on_row_click(mut self, f: impl FnMut(&T, usize) + 'a) -> Self {
        self.on_row_click = Some(Box::new(f));
        self
    }

    pub fn actions(mut self, actions: ActionColumn<T>) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl<T> fmt::Debug for TableProps<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableProps")
            .field("records", &self.records.len())
            .field("columns", &self.columns)
            .field("pagination", &self.pagination)
            .field("search", &self.search)
            .field("row_identity", &self.row_identity)
            .field("on_row_click", &self.on_row_click.is_some())
            .field("actions", &self.actions)
            .field("loading", &self.loading)
            .finish()
    }
}
