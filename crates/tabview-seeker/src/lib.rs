//! Seeker - field access and ordering for in-memory record collections.
//!
//! Seeker is the data layer underneath the tabview component. It knows
//! nothing about tables; it answers two questions about arbitrary records:
//!
//! - What is the value of field `key` on this record? ([`Record`], [`Value`])
//! - How do two such values order? ([`compare_values`], [`Dir`], [`stable_sort_indices`])
//!
//! # Quick Start
//!
//! ```rust
//! use tabview_seeker::{sort_by_key, Dir, Number, Record, Value};
//!
//! struct Device {
//!     name: String,
//!     load: i64,
//! }
//!
//! impl Record for Device {
//!     fn field(&self, key: &str) -> Value<'_> {
//!         match key {
//!             "name" => Value::String(&self.name),
//!             "load" => Value::Number(Number::I64(self.load)),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let devices = vec![
//!     Device { name: "pump-3".into(), load: 70 },
//!     Device { name: "pump-1".into(), load: 20 },
//!     Device { name: "pump-2".into(), load: 45 },
//! ];
//!
//! let order = sort_by_key(&devices, "load", Dir::Desc);
//! assert_eq!(order, vec![0, 2, 1]);
//! ```
//!
//! # Comparison Semantics
//!
//! Values of the same kind compare natively: strings lexicographically,
//! numbers numerically (integers and floats mix freely), timestamps
//! chronologically and booleans with `false < true`.
//!
//! Everything else is *incomparable*: mismatched kinds, missing values,
//! `NaN` and nested JSON. [`sort_by_key`] never moves missing values, `NaN`
//! or nested JSON, and sorts each kind of a mixed column among the positions
//! that kind holds. A column holding mixed data never aborts a sort.
//!
//! # Dynamic Records
//!
//! `serde_json::Value` and `serde_json::Map` implement [`Record`], with dot
//! notation reaching into nested objects (`"owner.name"`).

mod error;
mod json;
mod ordering;
mod text;
mod traits;
mod value;

pub use error::{Result, SeekerError};
pub use json::lookup_path;
pub use ordering::{compare_values, sort_by_key, stable_sort_indices, Dir, OrderBy};
pub use text::{contains_ignore_case, display_value};
pub use traits::{Record, RecordTimestamp};
pub use value::{Number, Timestamp, Value};
