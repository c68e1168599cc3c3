//! Field values as seen by sorting and display.
//!
//! Admin records hold text, numbers, timestamps and flags, plus nested
//! objects when they come from JSON. [`Value`] borrows each of these from the
//! record it was read from.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, SecondsFormat};

/// One field of one record.
///
/// ```
/// use tabview_seeker::{Value, Number};
///
/// struct Report {
///     title: String,
///     pages: u32,
/// }
///
/// fn field<'a>(report: &'a Report, key: &str) -> Value<'a> {
///     match key {
///         "title" => Value::String(&report.title),
///         "pages" => Value::Number(Number::from(report.pages)),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    String(&'a str),
    Number(Number),
    Timestamp(Timestamp),
    Bool(bool),
    /// JSON array or object. Shown as compact JSON; never ordered.
    Nested(&'a serde_json::Value),
    /// Missing key, JSON `null`, or a type the record does not expose.
    None,
}

impl<'a> Value<'a> {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_str(&self) -> Option<&'a str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        if let Value::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn as_timestamp(&self) -> Option<Timestamp> {
        if let Value::Timestamp(ts) = self {
            Some(*ts)
        } else {
            None
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// Kind name for log messages: `"string"`, `"number"`, and so on.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Timestamp(_) => "timestamp",
            Value::Bool(_) => "bool",
            Value::Nested(_) => "nested",
            Value::None => "none",
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Timestamp> for Value<'_> {
    fn from(ts: Timestamp) -> Self {
        Value::Timestamp(ts)
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::None)
    }
}

/// A number as read from a record.
///
/// Integers keep their signedness so that large `u64` ids and negative
/// offsets both order exactly; only mixed integer/float pairs go through
/// `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    /// Lossy conversion, for thresholds and mixed comparisons.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::F64(x) => x,
            Number::I64(i) => i as f64,
            Number::U64(u) => u as f64,
        }
    }

    /// Numeric ordering across variants; `None` if either side is `NaN`.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        use Number::*;
        match (self, other) {
            (I64(x), I64(y)) => Some(x.cmp(&y)),
            (U64(x), U64(y)) => Some(x.cmp(&y)),
            (I64(x), U64(y)) => Some(compare_i64_u64(x, y)),
            (U64(x), I64(y)) => Some(compare_i64_u64(y, x).reverse()),
            (F64(x), F64(y)) => x.partial_cmp(&y),
            (x, y) => x.to_f64().partial_cmp(&y.to_f64()),
        }
    }
}

fn compare_i64_u64(a: i64, b: u64) -> Ordering {
    if a < 0 {
        Ordering::Less
    } else {
        (a as u64).cmp(&b)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, rhs: &Number) -> Option<Ordering> {
        self.compare(*rhs)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::I64(i) => fmt::Display::fmt(&i, f),
            Number::U64(u) => fmt::Display::fmt(&u, f),
            Number::F64(x) => fmt::Display::fmt(&x, f),
        }
    }
}

macro_rules! number_from {
    ($variant:ident, $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$variant(n as $target)
                }
            }

            impl From<$source> for Value<'_> {
                fn from(n: $source) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

number_from!(I64, i64: i8, i16, i32, i64, isize);
number_from!(U64, u64: u8, u16, u32, u64, usize);
number_from!(F64, f64: f32, f64);

/// Milliseconds since the Unix epoch, displayed as RFC 3339 UTC.
///
/// ```
/// use tabview_seeker::Timestamp;
///
/// assert!(Timestamp(1000) < Timestamp(2000));
/// assert_eq!(Timestamp::from_secs(0).to_string(), "1970-01-01T00:00:00Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn from_millis(ms: i64) -> Self {
        Timestamp(ms)
    }

    /// Saturates instead of overflowing.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(1000))
    }

    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Whole seconds, truncated toward zero.
    pub fn as_secs(self) -> i64 {
        self.0 / 1000
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Timestamp(ms)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::from_timestamp_millis(self.0) {
            Some(dt) => {
                let format = if self.0 % 1000 == 0 {
                    SecondsFormat::Secs
                } else {
                    SecondsFormat::Millis
                };
                write!(f, "{}", dt.to_rfc3339_opts(format, true))
            }
            // Out of chrono's range; show the raw value.
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_only_their_kind() {
        let text = Value::String("pump");
        assert_eq!(text.as_str(), Some("pump"));
        assert_eq!(text.as_number(), None);
        assert_eq!(text.kind(), "string");

        let load = Value::from(42u8);
        assert_eq!(load.as_number(), Some(Number::U64(42)));
        assert_eq!(load.as_bool(), None);

        let seen = Value::from(Timestamp(1000));
        assert_eq!(seen.as_timestamp(), Some(Timestamp(1000)));
        assert_eq!(Value::from(false).as_bool(), Some(false));
        assert!(Value::None.is_none());
        assert!(!seen.is_none());
    }

    #[test]
    fn options_map_missing_to_none() {
        assert_eq!(Value::from(Some("x")), Value::String("x"));
        assert_eq!(Value::from(None::<&str>), Value::None);
        assert_eq!(Value::from(Some(-3i32)), Value::Number(Number::I64(-3)));
    }

    #[test]
    fn numbers_order_across_variants() {
        let cases = [
            (Number::I64(-7), Number::I64(2), Ordering::Less),
            (Number::U64(9), Number::U64(9), Ordering::Equal),
            (Number::I64(-1), Number::U64(0), Ordering::Less),
            (Number::U64(u64::MAX), Number::I64(i64::MAX), Ordering::Greater),
            (Number::I64(4), Number::F64(4.0), Ordering::Equal),
            (Number::F64(0.25), Number::U64(1), Ordering::Less),
        ];
        for (a, b, expected) in cases {
            assert_eq!(a.compare(b), Some(expected), "{a} vs {b}");
        }
    }

    #[test]
    fn nan_is_unordered() {
        assert_eq!(Number::F64(f64::NAN).compare(Number::F64(0.0)), None);
        assert!(Number::U64(3).partial_cmp(&Number::F64(f64::NAN)).is_none());
    }

    #[test]
    fn numbers_display_shortest() {
        assert_eq!(Number::I64(-12).to_string(), "-12");
        assert_eq!(Number::F64(0.5).to_string(), "0.5");
        assert_eq!(Number::F64(7.0).to_string(), "7");
    }

    #[test]
    fn timestamps_display_rfc3339() {
        assert_eq!(Timestamp(0).to_string(), "1970-01-01T00:00:00Z");
        assert_eq!(Timestamp(86_400_250).to_string(), "1970-01-02T00:00:00.250Z");
        // Outside chrono's range the raw millis are shown.
        assert_eq!(Timestamp(i64::MIN).to_string(), i64::MIN.to_string());
        assert_eq!(Timestamp::from_secs(i64::MAX).as_millis(), i64::MAX);
        assert_eq!(Timestamp::from_millis(-1500).as_secs(), -1);
    }
}
