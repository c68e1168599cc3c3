//! The `TabularView` component.
//!
//! A `TabularView<T>` owns the only state a table keeps between renders:
//! the active sort and the search text. Records, columns and callbacks are
//! passed in as [`TableProps`] on every render and interaction, so the
//! caller's collection is never owned or mutated.
//!
//! ```rust
//! use serde_json::{json, Value};
//! use tabview::{ColumnSpec, TableProps, TabularView};
//!
//! let rows = vec![
//!     json!({"id": "a", "v": 3}),
//!     json!({"id": "b", "v": 1}),
//!     json!({"id": "c", "v": 2}),
//! ];
//! let columns = vec![ColumnSpec::new("v", "Value").sortable(true)];
//! let props = TableProps::new(&rows, &columns);
//!
//! let mut view = TabularView::<Value>::new();
//! view.click_header(&props, "v");
//! assert_eq!(view.render(&props).row_keys(), ["b", "c", "a"]);
//! view.click_header(&props, "v");
//! assert_eq!(view.render(&props).row_keys(), ["a", "c", "b"]);
//! ```

use std::marker::PhantomData;

use tabview_seeker::Record;

use crate::config::TableConfig;
use crate::model::{Body, HeaderCell, PaginationBar, RenderedRow, RenderedTable, SearchBox};
use crate::pagination::PaginationState;
use crate::props::{Search, TableProps};
use crate::search::SearchOutcome;
use crate::sort::{display_order, is_sortable, SortState};

/// Headless table component for records of type `T`.
pub struct TabularView<T> {
    sort: Option<SortState>,
    search_text: String,
    config: TableConfig,
    _records: PhantomData<fn(&T)>,
}

impl<T> TabularView<T> {
    /// A fresh component: no sort, empty search, default texts.
    pub fn new() -> Self {
        TabularView::with_config(TableConfig::default())
    }

    pub fn with_config(config: TableConfig) -> Self {
        TabularView {
            sort: None,
            search_text: String::new(),
            config,
            _records: PhantomData,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Clears sort and search, keeping the configuration.
    pub fn reset(&mut self) {
        self.sort = None;
        self.search_text.clear();
    }

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Restores a sort kept by the caller, e.g. across navigation.
    pub fn set_sort(&mut self, state: SortState) {
        self.sort = Some(state);
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Handles a click on the header of `key`.
    ///
    /// Returns the new sort, or `None` if `key` is not a sortable column, in
    /// which case the state is unchanged.
    pub fn click_header(&mut self, props: &TableProps<'_, T>, key: &str) -> Option<SortState> {
        if !is_sortable(props.columns, key) {
            log::debug!("ignoring header click on non-sortable column '{}'", key);
            return None;
        }
        let next = SortState::toggled(self.sort.as_ref(), key);
        log::debug!("sort changed to {}", next);
        self.sort = Some(next.clone());
        Some(next)
    }

    /// Handles a change of the search input.
    ///
    /// Every call is one change and reaches `on_search` immediately.
    pub fn input_search(&mut self, props: &mut TableProps<'_, T>, text: &str) -> SearchOutcome {
        let Some(search) = props.search.as_mut().filter(|s| s.searchable) else {
            return SearchOutcome::Disabled;
        };
        self.search_text = text.to_string();
        match search.on_search.as_mut() {
            Some(on_search) => {
                log::debug!("search emitted: {:?}", text);
                on_search(text);
                SearchOutcome::Emitted
            }
            None => SearchOutcome::Inert,
        }
    }

    /// "Previous" button. Disabled on the first page.
    pub fn click_previous(&self, props: &mut TableProps<'_, T>) -> Option<(usize, usize)> {
        let pagination = props.pagination.as_mut()?;
        let state = pagination.state;
        if !state.has_previous() {
            return None;
        }
        log::debug!("page {} -> {}", state.current_page(), state.current_page() - 1);
        Some(pagination.emit(state.current_page() - 1, state.page_size()))
    }

    /// "Next" button. Disabled on the last page.
    pub fn click_next(&self, props: &mut TableProps<'_, T>) -> Option<(usize, usize)> {
        let pagination = props.pagination.as_mut()?;
        let state = pagination.state;
        if !state.has_next() {
            return None;
        }
        log::debug!("page {} -> {}", state.current_page(), state.current_page() + 1);
        Some(pagination.emit(state.current_page() + 1, state.page_size()))
    }

    /// Jumps to `page`, clamped to the valid range. Nothing is emitted when
    /// that is already the current page.
    pub fn go_to_page(&self, props: &mut TableProps<'_, T>, page: usize) -> Option<(usize, usize)> {
        let pagination = props.pagination.as_mut()?;
        let state = pagination.state;
        let target = page.clamp(1, state.page_count());
        if target == state.current_page() {
            return None;
        }
        log::debug!("page {} -> {}", state.current_page(), target);
        Some(pagination.emit(target, state.page_size()))
    }

    /// Changes the page size and returns to page 1. Nothing is emitted when
    /// the size is unchanged.
    pub fn change_page_size(
        &self,
        props: &mut TableProps<'_, T>,
        page_size: usize,
    ) -> Option<(usize, usize)> {
        let pagination = props.pagination.as_mut()?;
        let page_size = page_size.max(1);
        if page_size == pagination.state.page_size() {
            return None;
        }
        log::debug!("page size {} -> {}", pagination.state.page_size(), page_size);
        Some(pagination.emit(1, page_size))
    }
}

impl<T: Record> TabularView<T> {
    /// Positions of `props.records` in display order.
    ///
    /// Stable, and idempotent for unchanged props.
    pub fn sorted_indices(&self, props: &TableProps<'_, T>) -> Vec<usize> {
        display_order(props.records, props.columns, self.sort.as_ref())
    }

    /// The records in display order.
    pub fn sorted_records<'r>(&self, props: &TableProps<'r, T>) -> Vec<&'r T> {
        let records = props.records;
        self.sorted_indices(props)
            .into_iter()
            .map(|i| &records[i])
            .collect()
    }

    /// Row keys in display order.
    pub fn row_keys(&self, props: &TableProps<'_, T>) -> Vec<String> {
        let records = props.records;
        self.sorted_indices(props)
            .into_iter()
            .enumerate()
            .map(|(index, source)| props.row_identity.resolve(&records[source], index))
            .collect()
    }

    /// Handles a click on the row with key `row_key`.
    ///
    /// Calls `on_row_click(record, display_index)` and returns the display
    /// index, or `None` if no row has that key.
    pub fn click_row(&self, props: &mut TableProps<'_, T>, row_key: &str) -> Option<usize> {
        let records = props.records;
        let (index, source) = self
            .sorted_indices(props)
            .into_iter()
            .enumerate()
            .find(|(index, source)| props.row_identity.resolve(&records[*source], *index) == row_key)?;

        log::debug!("row '{}' clicked at index {}", row_key, index);
        if let Some(on_row_click) = props.on_row_click.as_mut() {
            on_row_click(&records[source], index);
        }
        Some(index)
    }

    /// Derives the view model for the current state and props.
    pub fn render(&self, props: &TableProps<'_, T>) -> RenderedTable {
        log::trace!(
            "rendering {} records, {} columns, sort {:?}",
            props.records.len(),
            props.columns.len(),
            self.sort
        );

        RenderedTable {
            headers: self.headers(props),
            actions_title: props.actions.as_ref().map(|a| a.title.clone()),
            body: self.body(props),
            search: props.search.as_ref().and_then(|s| self.search_box(s)),
            pagination: props.pagination.as_ref().map(|p| self.pagination_bar(&p.state)),
        }
    }

    fn headers(&self, props: &TableProps<'_, T>) -> Vec<HeaderCell> {
        props
            .columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key().to_string(),
                title: column.title().to_string(),
                sortable: column.is_sortable(),
                filterable: column.is_filterable(),
                sort: self
                    .sort
                    .as_ref()
                    .filter(|s| column.is_sortable() && s.key == column.key())
                    .map(|s| s.dir),
                width: column.get_width().cloned(),
                align: column.get_align(),
            })
            .collect()
    }

    fn body(&self, props: &TableProps<'_, T>) -> Body {
        if props.loading {
            return Body::Loading {
                text: self.config.loading_text.clone(),
            };
        }
        if props.records.is_empty() {
            return Body::Empty {
                text: self.config.empty_text.clone(),
            };
        }

        let records = props.records;
        let rows = self
            .sorted_indices(props)
            .into_iter()
            .enumerate()
            .map(|(index, source)| {
                let record = &records[source];
                RenderedRow {
                    key: props.row_identity.resolve(record, index),
                    index,
                    source_index: source,
                    cells: props
                        .columns
                        .iter()
                        .map(|c| c.cell(record, index, &self.config.placeholder))
                        .collect(),
                    actions: props
                        .actions
                        .as_ref()
                        .map(|a| a.actions(record, index))
                        .unwrap_or_default(),
                }
            })
            .collect();
        Body::Rows { rows }
    }

    fn search_box(&self, search: &Search<'_>) -> Option<SearchBox> {
        if !search.searchable {
            return None;
        }
        Some(SearchBox {
            text: self.search_text.clone(),
            placeholder: search
                .placeholder
                .clone()
                .unwrap_or_else(|| self.config.search_placeholder.clone()),
            active: search.has_callback(),
        })
    }

    fn pagination_bar(&self, state: &PaginationState) -> PaginationBar {
        let (start, end) = state.range();
        PaginationBar {
            current: state.current_page(),
            page_size: state.page_size(),
            total: state.total,
            page_count: state.page_count(),
            start,
            end,
            label: self.config.range_label(start, end, state.total),
            has_previous: state.has_previous(),
            has_next: state.has_next(),
            pages: state.page_items(),
            page_size_options: self.config.page_size_options.clone(),
        }
    }
}

impl<T> Default for TabularView<T> {
    fn default() -> Self {
        TabularView::new()
    }
}

impl<T> Clone for TabularView<T> {
    fn clone(&self) -> Self {
        TabularView {
            sort: self.sort.clone(),
            search_text: self.search_text.clone(),
            config: self.config.clone(),
            _records: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for TabularView<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabularView")
            .field("sort", &self.sort)
            .field("search_text", &self.search_text)
            .finish_non_exhaustive()
    }
}
