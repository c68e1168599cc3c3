//! Search input outcomes and a caller-side filter helper.

use tabview_seeker::{contains_ignore_case, Record};

use crate::column::ColumnSpec;

/// What happened to a search keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// `on_search` was called with the text.
    Emitted,
    /// The box is searchable but has no callback; the text is kept for
    /// display only.
    Inert,
    /// The table is not searchable; the input was ignored.
    Disabled,
}

/// Records whose displayed text contains `text`, case-insensitively.
///
/// Searches the columns marked `filterable`, or every column when none are.
/// Cells are produced exactly as the table shows them, including custom
/// renderers, with the record's position in `records` as the index. Empty
/// text keeps every record.
///
/// The component never filters by itself; this is for `on_search`
/// callbacks that hold the full collection.
///
/// ```rust
/// use serde_json::json;
/// use tabview::{filter_records, ColumnSpec};
///
/// let rows = vec![json!({"name": "Pump A"}), json!({"name": "Valve"})];
/// let columns = vec![ColumnSpec::new("name", "Name").filterable(true)];
///
/// let hits = filter_records(&rows, &columns, "pump");
/// assert_eq!(hits.len(), 1);
/// ```
pub fn filter_records<'r, T: Record>(
    records: &'r [T],
    columns: &[ColumnSpec<T>],
    text: &str,
) -> Vec<&'r T> {
    let needle = text.trim();
    if needle.is_empty() {
        return records.iter().collect();
    }

    let any_filterable = columns.iter().any(ColumnSpec::is_filterable);
    let searched: Vec<&ColumnSpec<T>> = columns
        .iter()
        .filter(|c| !any_filterable || c.is_filterable())
        .collect();

    records
        .iter()
        .enumerate()
        .filter(|(index, record)| {
            searched
                .iter()
                .any(|c| contains_ignore_case(&c.cell(record, *index, "").text, needle))
        })
        .map(|(_, record)| record)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value as Json};

    fn rows() -> Vec<Json> {
        vec![
            json!({"id": 1, "name": "North Pump", "site": "Harbor"}),
            json!({"id": 2, "name": "Valve 7", "site": "North Yard"}),
            json!({"id": 3, "name": "Compressor", "site": "Depot"}),
        ]
    }

    fn ids(hits: &[&Json]) -> Vec<i64> {
        hits.iter().filter_map(|r| r["id"].as_i64()).collect()
    }

    #[test]
    fn test_only_filterable_columns_are_searched() {
        let rows = rows();
        let columns = vec![
            ColumnSpec::new("name", "Name").filterable(true),
            ColumnSpec::new("site", "Site"),
        ];
        assert_eq!(ids(&filter_records(&rows, &columns, "north")), vec![1]);
    }

    #[test]
    fn test_all_columns_when_none_filterable() {
        let rows = rows();
        let columns = vec![ColumnSpec::new("name", "Name"), ColumnSpec::new("site", "Site")];
        assert_eq!(ids(&filter_records(&rows, &columns, "NORTH")), vec![1, 2]);
    }

    #[test]
    fn test_empty_text_keeps_all() {
        let rows = rows();
        let columns = vec![ColumnSpec::new("name", "Name")];
        assert_eq!(filter_records(&rows, &columns, "  ").len(), 3);
    }

    #[test]
    fn test_matches_rendered_text() {
        let rows = rows();
        let columns = vec![ColumnSpec::new("id", "Code")
            .filterable(true)
            .render(|v, _: &Json, _| match v.as_number() {
                Some(n) => format!("DEV-{n}"),
                None => String::new(),
            })];
        assert_eq!(ids(&filter_records(&rows, &columns, "dev-3")), vec![3]);
    }
}
