//! # Tabview - Headless Table Component
//!
//! Tabview is a generic table component for admin-style lists. It keeps the
//! small amount of state a table owns (the active sort and the search text)
//! and derives everything else from the props supplied on each render:
//!
//! - Single-column sorting with a stable, never-failing comparator
//! - Row identity from a key function, a key field, `id`, or the position
//! - A search box that reports every change to the caller
//! - Pagination display and navigation, driven by caller-owned state
//! - Loading and empty bodies with configurable texts
//!
//! The component never filters or slices records itself. Search and page
//! changes are reported through callbacks; the caller decides what the next
//! set of records is. [`filter_records`] and [`paginate`] help callers that
//! hold the full collection in memory.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabview::{ColumnSpec, Pagination, Record, TableProps, TabularView};
//!
//! #[derive(Record)]
//! struct Device {
//!     #[field(String)]
//!     id: String,
//!     #[field(String)]
//!     name: String,
//!     #[field(Number)]
//!     load: u32,
//! }
//!
//! let devices = vec![
//!     Device { id: "d-1".into(), name: "pump".into(), load: 70 },
//!     Device { id: "d-2".into(), name: "fan".into(), load: 20 },
//! ];
//! let columns = vec![
//!     ColumnSpec::new(Device::NAME, "Name").sortable(true),
//!     ColumnSpec::new(Device::LOAD, "Load").sortable(true).right(),
//! ];
//!
//! let mut pages = Vec::new();
//! let mut props = TableProps::new(&devices, &columns)
//!     .pagination(Pagination::new(1, 1, 2).on_change(|page, size| pages.push((page, size))));
//!
//! let mut view = TabularView::new();
//! view.click_header(&props, "load");
//! let table = view.render(&props);
//! assert_eq!(table.row_keys(), ["d-2", "d-1"]);
//! assert_eq!(table.pagination.as_ref().map(|p| p.label.as_str()), Some("1 to 1 of 2"));
//!
//! view.click_next(&mut props);
//! drop(props);
//! assert_eq!(pages, [(2, 1)]);
//! ```
//!
//! ## Records
//!
//! Any type implementing [`Record`] can be shown. The derive macro covers
//! plain structs; `serde_json::Value` works out of the box with dot paths
//! such as `"owner.name"`.
//!
//! ## Output
//!
//! [`TabularView::render`] returns a [`RenderedTable`], a serializable view
//! model. It can be exported with [`RenderedTable::to_json`] and
//! [`RenderedTable::to_csv`] or drawn for a terminal with [`TextRenderer`].
//!
//! ## Configuration
//!
//! Texts, indicators, border and styles live in [`TableConfig`], loadable
//! from YAML or JSON. [`TableConfig::zh_cn`] provides Simplified Chinese
//! texts.

mod column;
mod config;
mod error;
mod identity;
mod model;
mod pagination;
mod props;
mod search;
mod sort;
mod text;
mod view;

pub use tabview_seeker as seeker;

// Field access: the derive macro and the trait share a name, like serde.
pub use tabview_macros::Record;
pub use tabview_seeker::{Dir, Number, OrderBy, Record, RecordTimestamp, Timestamp, Value};

pub use tabview_render::{Align, BorderStyle, Width};

pub use column::{Cell, CellRenderer, ColumnSpec};
pub use config::{TableConfig, DEFAULT_RANGE_TEMPLATE};
pub use error::{ConfigError, RenderError};
pub use identity::{KeyFn, RowIdentity, DEFAULT_KEY_FIELD};
pub use model::{Body, HeaderCell, PaginationBar, RenderedRow, RenderedTable, SearchBox};
pub use pagination::{paginate, PageItem, PaginationState};
pub use props::{
    Action, ActionColumn, ActionsFn, PageChangeFn, Pagination, RowClickFn, Search, SearchFn,
    TableProps,
};
pub use search::{filter_records, SearchOutcome};
pub use sort::SortState;
pub use text::TextRenderer;
pub use view::TabularView;
