//! Unicode-aware column layout and text tables for terminal output.
//!
//! Widths are measured in display columns: CJK characters count as 2 and
//! ANSI escape codes as 0, so styled and translated text stays aligned.
//!
//! ## Width Strategies
//!
//! - [`Width::Fixed`]`(n)` - Exactly n display columns
//! - [`Width::Bounded`]`{ min, max }` - Sized by content within bounds
//! - [`Width::Fill`] - Expand to fill remaining space
//! - [`Width::Fraction`]`(n)` - n shares of the remaining space
//!
//! ## Example
//!
//! ```rust
//! use tabview_render::{BorderStyle, Column, Table, TextCell, Width};
//!
//! let table = Table::new(vec![Column::new(Width::Fixed(8)), Column::new(Width::Fill)])
//!     .header(["Name", "Owner"])
//!     .border(BorderStyle::Light)
//!     .width(Some(40));
//!
//! let rows = vec![vec![TextCell::from("pump-01"), TextCell::from("运维")]];
//! println!("{}", table.render(&rows));
//! ```

mod resolve;
mod style;
mod table;
mod types;
mod util;

pub use resolve::{resolve_widths, ResolvedWidths};
pub use style::StyleSheet;
pub use table::{Table, TextCell};
pub use types::{Align, BorderStyle, Column, Width};
pub use util::{display_width, fit, pad_center, pad_left, pad_right, truncate_to_width};

pub use console::Style;
