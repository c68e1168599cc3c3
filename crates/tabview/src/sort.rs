//! Single-column sort state and the toggle rule.

use std::fmt;
use std::str::FromStr;

use tabview_seeker::{sort_by_key, Dir, OrderBy, Record, SeekerError};

use crate::column::ColumnSpec;

/// The active sort: one column key and a direction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SortState {
    pub key: String,
    pub dir: Dir,
}

impl SortState {
    pub fn asc(key: impl Into<String>) -> Self {
        SortState {
            key: key.into(),
            dir: Dir::Asc,
        }
    }

    pub fn desc(key: impl Into<String>) -> Self {
        SortState {
            key: key.into(),
            dir: Dir::Desc,
        }
    }

    /// The state after clicking the header of `key`.
    ///
    /// The same key flips the direction; any other key starts ascending.
    ///
    /// ```rust
    /// use tabview::SortState;
    ///
    /// let first = SortState::toggled(None, "v");
    /// assert_eq!(first, SortState::asc("v"));
    /// assert_eq!(SortState::toggled(Some(&first), "v"), SortState::desc("v"));
    /// assert_eq!(SortState::toggled(Some(&first), "name"), SortState::asc("name"));
    /// ```
    pub fn toggled(current: Option<&SortState>, key: &str) -> SortState {
        match current {
            Some(state) if state.key == key => SortState {
                key: state.key.clone(),
                dir: state.dir.flip(),
            },
            _ => SortState::asc(key),
        }
    }
}

impl From<OrderBy> for SortState {
    fn from(order: OrderBy) -> Self {
        SortState {
            key: order.field,
            dir: order.dir,
        }
    }
}

impl From<SortState> for OrderBy {
    fn from(state: SortState) -> Self {
        OrderBy::new(state.key, state.dir)
    }
}

/// Parses `"key"`, `"key:desc"` or `"-key"`.
impl FromStr for SortState {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<OrderBy>().map(SortState::from)
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.dir)
    }
}

/// Display order of `records` under `sort`.
///
/// The sort applies only when its key names a sortable column; otherwise
/// records keep their supplied order.
pub(crate) fn display_order<T: Record>(
    records: &[T],
    columns: &[ColumnSpec<T>],
    sort: Option<&SortState>,
) -> Vec<usize> {
    match sort {
        Some(state) if is_sortable(columns, &state.key) => {
            sort_by_key(records, &state.key, state.dir)
        }
        _ => (0..records.len()).collect(),
    }
}

pub(crate) fn is_sortable<T>(columns: &[ColumnSpec<T>], key: &str) -> bool {
    columns.iter().any(|c| c.key() == key && c.is_sortable())
}
