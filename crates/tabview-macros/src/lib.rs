//! Proc macros for tabview.
//!
//! ## Derive Macros
//!
//! - [`Record`] - Generate field accessors so a struct can be shown in a table
//!
//! The generated code refers to `::tabview::seeker`, so depend on `tabview`
//! rather than on this crate directly.

mod record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Record` trait for table rows.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `String` | `String` or `&str` field |
/// | `Number` | Any primitive numeric field |
/// | `Timestamp` | Field implementing `RecordTimestamp` |
/// | `Bool` | Boolean field |
/// | `optional` | Field is an `Option<_>`; `None` becomes a missing value |
/// | `skip` | Exclude this field |
/// | `rename = "..."` | Expose the field under a different key |
///
/// Fields without a `#[field(...)]` attribute are not exposed.
///
/// # Generated Code
///
/// 1. Key constants (e.g., `Device::NAME`, `Device::LAST_SEEN`)
/// 2. Implementation of `Record::field()`
///
/// # Example
///
/// ```ignore
/// use tabview::Record;
///
/// #[derive(Record)]
/// struct Device {
///     #[field(String)]
///     name: String,
///
///     #[field(Number)]
///     load: u8,
///
///     #[field(String, optional)]
///     owner: Option<String>,
///
///     #[field(Bool, rename = "online")]
///     is_online: bool,
///
///     #[field(skip)]
///     token: String,
/// }
///
/// let column = tabview::ColumnSpec::<Device>::new(Device::LOAD, "Load").sortable(true);
/// ```
#[proc_macro_derive(Record, attributes(field))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::record_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
