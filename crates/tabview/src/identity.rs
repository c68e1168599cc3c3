//! Row identity: the string key of each rendered row.

use std::fmt;
use std::sync::Arc;

use tabview_seeker::{display_value, Record};

/// Field consulted when no key function or key field resolves.
pub const DEFAULT_KEY_FIELD: &str = "id";

/// Key function: `(record, display_index) -> key`.
pub type KeyFn<T> = Arc<dyn Fn(&T, usize) -> String + Send + Sync>;

/// How a row's key is produced.
///
/// Resolution order for every row:
///
/// 1. the key function, if one is configured;
/// 2. the configured field, if it has a value on this record;
/// 3. the `id` field, if it has a value;
/// 4. the row's display index as a string.
///
/// The index fallback changes when the table is re-sorted, so rows without
/// an id lose their identity across sorts.
pub enum RowIdentity<T> {
    Func(KeyFn<T>),
    Field(String),
    Default,
}

impl<T> RowIdentity<T> {
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&T, usize) -> String + Send + Sync + 'static,
    {
        RowIdentity::Func(Arc::new(f))
    }

    pub fn field(name: impl Into<String>) -> Self {
        RowIdentity::Field(name.into())
    }
}

impl<T: Record> RowIdentity<T> {
    /// Resolves the key of `record` shown at `index`.
    pub fn resolve(&self, record: &T, index: usize) -> String {
        let field = match self {
            RowIdentity::Func(f) => return f(record, index),
            RowIdentity::Field(name) => display_value(&record.field(name)),
            RowIdentity::Default => None,
        };
        field
            .or_else(|| display_value(&record.field(DEFAULT_KEY_FIELD)))
            .unwrap_or_else(|| index.to_string())
    }
}

impl<T> Default for RowIdentity<T> {
    fn default() -> Self {
        RowIdentity::Default
    }
}

impl<T> Clone for RowIdentity<T> {
    fn clone(&self) -> Self {
        match self {
            RowIdentity::Func(f) => RowIdentity::Func(Arc::clone(f)),
            RowIdentity::Field(name) => RowIdentity::Field(name.clone()),
            RowIdentity::Default => RowIdentity::Default,
        }
    }
}

impl<T> fmt::Debug for RowIdentity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowIdentity::Func(_) => f.write_str("Func(<fn>)"),
            RowIdentity::Field(name) => f.debug_tuple("Field").field(name).finish(),
            RowIdentity::Default => f.write_str("Default"),
        }
    }
}

impl<T> From<&str> for RowIdentity<T> {
    fn from(name: &str) -> Self {
        RowIdentity::field(name)
    }
}
