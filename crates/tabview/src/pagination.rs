//! Pagination arithmetic.
//!
//! Pagination is display-and-navigation only: the component reports the
//! visible range and emits page changes, but never slices records itself.
//! Callers that hold the full collection can slice with [`paginate`].

use serde::{Deserialize, Serialize};

/// Caller-owned pagination descriptor.
///
/// Out-of-range values are tolerated: a page size of 0 counts as 1 and
/// `current` is clamped to `[1, page_count]` by every accessor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// 1-based page number as supplied by the caller.
    pub current: usize,
    pub page_size: usize,
    pub total: usize,
}

/// One entry of the page-number strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageItem {
    Page { number: usize, current: bool },
    Ellipsis,
}

impl PaginationState {
    pub fn new(current: usize, page_size: usize, total: usize) -> Self {
        PaginationState {
            current,
            page_size,
            total,
        }
    }

    /// Page size, at least 1.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Number of pages, at least 1 even when there are no records.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size()).max(1)
    }

    /// The current page clamped to `[1, page_count]`.
    pub fn current_page(&self) -> usize {
        self.current.clamp(1, self.page_count())
    }

    /// 1-based inclusive range of records on the current page.
    ///
    /// `(0, 0)` when there are no records.
    ///
    /// ```rust
    /// use tabview::PaginationState;
    ///
    /// assert_eq!(PaginationState::new(1, 2, 5).range(), (1, 2));
    /// assert_eq!(PaginationState::new(3, 2, 5).range(), (5, 5));
    /// assert_eq!(PaginationState::new(9, 2, 5).range(), (5, 5));
    /// assert_eq!(PaginationState::new(1, 10, 0).range(), (0, 0));
    /// ```
    pub fn range(&self) -> (usize, usize) {
        if self.total == 0 {
            return (0, 0);
        }
        let size = self.page_size();
        let current = self.current_page();
        let start = (current - 1).saturating_mul(size).saturating_add(1);
        let end = current.saturating_mul(size).min(self.total);
        (start, end)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page() < self.page_count()
    }

    /// Page-number strip: first, last and the neighbours of the current
    /// page, with ellipses over gaps.
    ///
    /// A gap of a single page shows that page instead of an ellipsis.
    pub fn page_items(&self) -> Vec<PageItem> {
        let count = self.page_count();
        let current = self.current_page();

        let mut numbers = vec![1, count];
        for n in current.saturating_sub(1)..=current.saturating_add(1) {
            if (1..=count).contains(&n) {
                numbers.push(n);
            }
        }
        numbers.sort_unstable();
        numbers.dedup();

        let mut items = Vec::with_capacity(numbers.len() + 2);
        let mut previous = 0;
        for n in numbers {
            if n - previous == 2 {
                items.push(PageItem::Page {
                    number: n - 1,
                    current: n - 1 == current,
                });
            } else if n - previous > 2 {
                items.push(PageItem::Ellipsis);
            }
            items.push(PageItem::Page {
                number: n,
                current: n == current,
            });
            previous = n;
        }
        items
    }
}

/// Slice of `records` shown on page `current` of `page_size`.
///
/// Uses the same clamping as [`PaginationState`], with the slice length as
/// the total.
///
/// ```rust
/// use tabview::paginate;
///
/// let rows = [1, 2, 3, 4, 5];
/// assert_eq!(paginate(&rows, 2, 2), &[3, 4]);
/// assert_eq!(paginate(&rows, 3, 2), &[5]);
/// assert_eq!(paginate(&rows, 0, 2), &[1, 2]);
/// ```
pub fn paginate<T>(records: &[T], current: usize, page_size: usize) -> &[T] {
    let state = PaginationState::new(current, page_size, records.len());
    match state.range() {
        (0, 0) => &records[..0],
        (start, end) => &records[start - 1..end],
    }
}
