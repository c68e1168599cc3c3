//! Ordering types and the stable sort used for record collections.
//!
//! Provides [`Dir`] for sort direction, [`OrderBy`] for a field-based
//! ordering, and [`stable_sort_indices`], a merge sort that tolerates
//! comparators which are not total orders.
//!
//! [`sort_by_key`] orders a column kind by kind: each kind keeps the
//! positions it holds in the input and its values are sorted within them.
//! Missing values, `NaN` and nested JSON never move.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::SeekerError;
use crate::traits::Record;
use crate::value::{Number, Value};

/// Sort direction. Ascending unless stated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    #[default]
    Asc,
    Desc,
}

impl Dir {
    pub fn flip(self) -> Self {
        if self == Dir::Asc {
            Dir::Desc
        } else {
            Dir::Asc
        }
    }

    /// Orients an ascending comparison result. `Equal` stays `Equal`, so
    /// ties keep their order in both directions.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        if self == Dir::Desc {
            ordering.reverse()
        } else {
            ordering
        }
    }

    /// `"asc"` or `"desc"`.
    pub fn as_str(self) -> &'static str {
        if self == Dir::Desc {
            "desc"
        } else {
            "asc"
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dir {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Dir::Asc),
            "desc" | "descending" => Ok(Dir::Desc),
            other => Err(SeekerError::InvalidDirection(other.to_string())),
        }
    }
}

/// A field key plus a direction, e.g. parsed from `--sort -load`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub dir: Dir,
}

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Desc)
    }

    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            field: field.into(),
            dir,
        }
    }

    /// [`compare_values`] oriented by this direction; `None` when the pair
    /// is incomparable.
    pub fn compare<'a>(&self, a: &Value<'a>, b: &Value<'a>) -> Option<Ordering> {
        compare_values(a, b).map(|ord| self.dir.apply(ord))
    }
}

/// Parses `field`, `field:asc`, `field:desc` or `-field` (descending).
impl FromStr for OrderBy {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (field, dir) = if let Some(rest) = s.strip_prefix('-') {
            (rest, Dir::Desc)
        } else if let Some((field, dir)) = s.split_once(':') {
            (field, dir.parse()?)
        } else {
            (s, Dir::Asc)
        };

        let field = field.trim();
        if field.is_empty() {
            return Err(SeekerError::EmptyField);
        }
        Ok(OrderBy::new(field, dir))
    }
}

impl std::fmt::Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.field, self.dir)
    }
}

/// Compares two values of the same kind with their native ordering.
///
/// Returns `None` if the kinds don't match or the pair is not comparable
/// (missing values, `NaN`, nested JSON).
pub fn compare_values<'a>(a: &Value<'a>, b: &Value<'a>) -> Option<Ordering> {
    match (a, b) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => a.compare(*b),
        (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Returns the stable sorted permutation of `items` under `cmp`.
///
/// `result[i]` is the index in `items` of the element at sorted position `i`.
/// Elements comparing `Equal` keep their original relative order. This is a
/// bottom-up merge sort that only ever asks "is right strictly less than
/// left?", so a comparator that is not a total order still yields a
/// deterministic permutation instead of panicking.
pub fn stable_sort_indices<T, F>(items: &[T], mut cmp: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    let mut src: Vec<usize> = (0..len).collect();
    if len < 2 {
        return src;
    }
    let mut dst: Vec<usize> = vec![0; len];

    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge(&src, &mut dst, start, mid, end, items, &mut cmp);
            start = end;
        }
        std::mem::swap(&mut src, &mut dst);
        width *= 2;
    }

    src
}

fn merge<T, F>(
    src: &[usize],
    dst: &mut [usize],
    start: usize,
    mid: usize,
    end: usize,
    items: &[T],
    cmp: &mut F,
) where
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut left, mut right) = (start, mid);
    for slot in dst.iter_mut().take(end).skip(start) {
        let take_right = right < end
            && (left >= mid || cmp(&items[src[right]], &items[src[left]]) == Ordering::Less);
        if take_right {
            *slot = src[right];
            right += 1;
        } else {
            *slot = src[left];
            left += 1;
        }
    }
}

/// Values in the same class are totally ordered by [`compare_values`];
/// `None` marks values that are never ordered.
fn sort_class(value: &Value<'_>) -> Option<u8> {
    match value {
        Value::String(_) => Some(0),
        Value::Number(Number::F64(x)) if x.is_nan() => None,
        Value::Number(_) => Some(1),
        Value::Timestamp(_) => Some(2),
        Value::Bool(_) => Some(3),
        Value::Nested(_) | Value::None => None,
    }
}

const SORT_CLASSES: u8 = 4;

/// Stable sort permutation of records by a single field.
///
/// Values of one kind are sorted among the positions that kind occupies, so
/// `[2, null, "b", 1, "a"]` ascending becomes `[1, null, "a", 2, "b"]`.
/// Incomparable values stay in place. Sorting an already sorted sequence
/// returns the identity permutation. Descending reverses comparisons, not
/// ties.
pub fn sort_by_key<T: Record>(items: &[T], key: &str, dir: Dir) -> Vec<usize> {
    let values: Vec<Value<'_>> = items.iter().map(|item| item.field(key)).collect();
    let classes: Vec<Option<u8>> = values.iter().map(sort_class).collect();
    let mut order: Vec<usize> = (0..items.len()).collect();

    for class in 0..SORT_CLASSES {
        let slots: Vec<usize> = (0..items.len())
            .filter(|&i| classes[i] == Some(class))
            .collect();
        if slots.len() < 2 {
            continue;
        }
        let sorted = stable_sort_indices(&slots, |&a, &b| {
            compare_values(&values[a], &values[b])
                .map(|ordering| dir.apply(ordering))
                .unwrap_or(Ordering::Equal)
        });
        for (&slot, &from) in slots.iter().zip(&sorted) {
            order[slot] = slots[from];
        }
    }

    order
}
