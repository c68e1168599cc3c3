//! The [`Record`] trait and derive-macro helpers.
//!
//! A table never looks inside its records except through this trait. It is
//! typically derived with `#[derive(Record)]` from `tabview-macros`, but the
//! manual implementation is a single `match`.

use std::rc::Rc;
use std::sync::Arc;

use crate::value::{Timestamp, Value};

/// Field access by name.
///
/// # Derive Usage
///
/// ```ignore
/// use tabview::Record;
///
/// #[derive(Record)]
/// struct Device {
///     #[field(String)]
///     id: String,
///     #[field(Number)]
///     load: u8,
///     #[field(Bool, rename = "online")]
///     is_online: bool,
/// }
///
/// assert_eq!(Device::LOAD, "load");
/// ```
///
/// # Manual Implementation
///
/// ```
/// use tabview_seeker::{Record, Value, Number};
///
/// struct Device {
///     id: String,
///     load: u8,
/// }
///
/// impl Record for Device {
///     fn field(&self, key: &str) -> Value<'_> {
///         match key {
///             "id" => Value::String(&self.id),
///             "load" => Value::Number(Number::from(self.load)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the value of a field, or [`Value::None`] if the record has no
    /// such field or it is empty.
    fn field(&self, key: &str) -> Value<'_>;

    /// Function-pointer form of [`Record::field`], for APIs that take an
    /// accessor.
    fn accessor<'a>(item: &'a Self, key: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field(key)
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn field(&self, key: &str) -> Value<'_> {
        (**self).field(key)
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn field(&self, key: &str) -> Value<'_> {
        (**self).field(key)
    }
}

impl<T: Record + ?Sized> Record for Rc<T> {
    fn field(&self, key: &str) -> Value<'_> {
        (**self).field(key)
    }
}

impl<T: Record + ?Sized> Record for Arc<T> {
    fn field(&self, key: &str) -> Value<'_> {
        (**self).field(key)
    }
}

/// Conversion to [`Timestamp`] for fields marked `#[field(Timestamp)]`.
///
/// ```
/// use tabview_seeker::{RecordTimestamp, Timestamp};
///
/// struct Stamp(i64);
///
/// impl RecordTimestamp for Stamp {
///     fn record_timestamp(&self) -> Timestamp {
///         Timestamp::from_secs(self.0)
///     }
/// }
/// ```
pub trait RecordTimestamp {
    /// Converts this value to a [`Timestamp`].
    fn record_timestamp(&self) -> Timestamp;
}

impl RecordTimestamp for i64 {
    fn record_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(*self)
    }
}

impl RecordTimestamp for u64 {
    fn record_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(i64::try_from(*self).unwrap_or(i64::MAX))
    }
}

impl RecordTimestamp for Timestamp {
    fn record_timestamp(&self) -> Timestamp {
        *self
    }
}

impl<Tz: chrono::TimeZone> RecordTimestamp for chrono::DateTime<Tz> {
    fn record_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(self.timestamp_millis())
    }
}
