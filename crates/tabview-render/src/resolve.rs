//! Width resolution for table columns.
//!
//! Turns column [`Width`] strategies, the cell contents and the available
//! terminal width into concrete display widths.

use crate::types::{Column, Width};
use crate::util::display_width;

/// Resolved widths for all columns in a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each column in display columns.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Sum of column widths, without decorations.
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Resolves column widths from content.
///
/// `total_width` is the space available including `overhead` (borders and
/// separators). Without a total width, flexible columns size to their content
/// and nothing is expanded.
///
/// ```rust
/// use tabview_render::{resolve_widths, Column, Width};
///
/// let columns = vec![Column::new(Width::Fixed(4)), Column::new(Width::Fill)];
/// let rows = vec![vec!["id", "a long description"]];
///
/// assert_eq!(resolve_widths(&columns, Some(30), 2, &rows).widths, vec![4, 24]);
/// assert_eq!(resolve_widths(&columns, None, 2, &rows).widths, vec![4, 18]);
/// ```
pub fn resolve_widths<S: AsRef<str>>(
    columns: &[Column],
    total_width: Option<usize>,
    overhead: usize,
    rows: &[Vec<S>],
) -> ResolvedWidths {
    if columns.is_empty() {
        return ResolvedWidths { widths: vec![] };
    }

    let mut content: Vec<usize> = vec![0; columns.len()];
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns.len()) {
            content[i] = content[i].max(display_width(cell.as_ref()));
        }
    }

    let mut widths: Vec<usize> = Vec::with_capacity(columns.len());
    // (index, weight) for Fill/Fraction
    let mut flex: Vec<(usize, usize)> = Vec::new();
    let mut used: usize = 0;

    for (i, col) in columns.iter().enumerate() {
        let width = match &col.width {
            Width::Fixed(w) => *w,
            Width::Bounded { min, max } => content[i]
                .max(min.unwrap_or(0))
                .min(max.unwrap_or(usize::MAX)),
            Width::Fill | Width::Fraction(_) if total_width.is_none() => content[i],
            Width::Fill => {
                flex.push((i, 1));
                0
            }
            Width::Fraction(n) => {
                flex.push((i, *n));
                0
            }
        };
        widths.push(width);
        used += width;
    }

    let Some(total) = total_width else {
        return ResolvedWidths { widths };
    };
    let remaining = total.saturating_sub(overhead).saturating_sub(used);

    if !flex.is_empty() {
        let total_weight: usize = flex.iter().map(|(_, w)| w).sum();
        if total_weight > 0 {
            let mut left = remaining;
            for (n, (idx, weight)) in flex.iter().enumerate() {
                // Last flex column absorbs rounding.
                let width = if n == flex.len() - 1 {
                    left
                } else {
                    let share = remaining * weight / total_weight;
                    left = left.saturating_sub(share);
                    share
                };
                widths[*idx] = width;
            }
        }
    } else if remaining > 0 {
        // Without flex columns the rightmost bounded column takes the slack.
        if let Some(idx) = columns
            .iter()
            .rposition(|c| matches!(c.width, Width::Bounded { .. }))
        {
            widths[idx] += remaining;
        }
    }

    ResolvedWidths { widths }
}
