//! End-to-end behavior of `TabularView` over JSON records.

use serde_json::{json, Value as Json};
use tabview::{
    paginate, Action, ActionColumn, Body, Cell, ColumnSpec, Pagination, RowIdentity, Search,
    SearchOutcome, SortState, TableConfig, TableProps, TabularView,
};

fn devices() -> Vec<Json> {
    vec![
        json!({"id": "a", "name": "gamma", "load": 3, "site": {"code": "N1"}}),
        json!({"id": "b", "name": "alpha", "load": 1, "site": {"code": "S4"}}),
        json!({"id": "c", "name": "beta", "load": 2}),
    ]
}

fn columns() -> Vec<ColumnSpec<Json>> {
    vec![
        ColumnSpec::new("name", "Name").sortable(true),
        ColumnSpec::new("load", "Load").sortable(true).right(),
        ColumnSpec::new("site.code", "Site"),
    ]
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn test_header_clicks_sort_ascending_then_descending() {
    let rows = devices();
    let columns = columns();
    let props = TableProps::new(&rows, &columns);
    let mut view = TabularView::new();

    assert_eq!(view.render(&props).row_keys(), ["a", "b", "c"]);

    view.click_header(&props, "load");
    assert_eq!(view.render(&props).row_keys(), ["b", "c", "a"]);

    view.click_header(&props, "load");
    assert_eq!(view.render(&props).row_keys(), ["a", "c", "b"]);

    view.click_header(&props, "load");
    assert_eq!(view.sort_state(), Some(&SortState::asc("load")));
}

#[test]
fn test_sort_is_stable_for_equal_values() {
    let rows = vec![
        json!({"id": "x1", "group": "b"}),
        json!({"id": "x2", "group": "a"}),
        json!({"id": "x3", "group": "b"}),
        json!({"id": "x4", "group": "a"}),
    ];
    let columns = vec![ColumnSpec::new("group", "Group").sortable(true)];
    let props = TableProps::new(&rows, &columns);
    let mut view = TabularView::new();

    view.click_header(&props, "group");
    assert_eq!(view.row_keys(&props), ["x2", "x4", "x1", "x3"]);

    view.click_header(&props, "group");
    assert_eq!(view.row_keys(&props), ["x1", "x3", "x2", "x4"]);
}

#[test]
fn test_mixed_and_missing_values_keep_their_slots() {
    let rows = vec![
        json!({"id": 1, "v": 10}),
        json!({"id": 2, "v": "ten"}),
        json!({"id": 3}),
        json!({"id": 4, "v": 2}),
        json!({"id": 5, "v": {"nested": true}}),
    ];
    let columns = vec![ColumnSpec::new("v", "V").sortable(true)];
    let props = TableProps::new(&rows, &columns);
    let mut view = TabularView::new();

    // Numbers trade places; the string, the gap and the object stay put.
    view.click_header(&props, "v");
    assert_eq!(view.row_keys(&props), ["4", "2", "3", "1", "5"]);

    view.click_header(&props, "v");
    assert_eq!(view.row_keys(&props), ["1", "2", "3", "4", "5"]);
}

#[test]
fn test_sort_on_column_that_became_unsortable_is_ignored() {
    let rows = devices();
    let sortable = columns();
    let plain = vec![ColumnSpec::new("load", "Load")];
    let mut view = TabularView::new();

    view.click_header(&TableProps::new(&rows, &sortable), "load");
    let table = view.render(&TableProps::new(&rows, &plain));
    assert_eq!(table.row_keys(), ["a", "b", "c"]);
    assert_eq!(table.headers[0].sort, None);
}

#[test]
fn test_sort_state_survives_new_records() {
    let columns = columns();
    let mut view = TabularView::new();
    let first = devices();
    view.click_header(&TableProps::new(&first, &columns), "name");

    let second = vec![
        json!({"id": "z", "name": "zulu"}),
        json!({"id": "y", "name": "echo"}),
    ];
    assert_eq!(view.render(&TableProps::new(&second, &columns)).row_keys(), ["y", "z"]);
}

#[test]
fn test_sort_state_parses_from_text() {
    let rows = devices();
    let columns = columns();
    let props = TableProps::new(&rows, &columns);
    let mut view = TabularView::new();

    let state: SortState = "-name".parse().unwrap();
    view.set_sort(state);
    assert_eq!(view.render(&props).column_texts("name"), ["gamma", "beta", "alpha"]);

    view.clear_sort();
    assert_eq!(view.render(&props).row_keys(), ["a", "b", "c"]);
}

// =============================================================================
// Cells
// =============================================================================

#[test]
fn test_missing_value_renders_placeholder() {
    let rows = devices();
    let columns = columns();
    let props = TableProps::new(&rows, &columns);
    let table = TabularView::new().render(&props);

    assert_eq!(table.column_texts("site.code"), ["N1", "S4", "-"]);
}

#[test]
fn test_custom_renderer_receives_display_index() {
    let rows = devices();
    let columns = vec![
        ColumnSpec::new("load", "Load").sortable(true),
        ColumnSpec::new("rank", "#").render(|_, _: &Json, index| Cell::new(format!("{}", index + 1))),
        ColumnSpec::new("load", "Level").render(|value, _: &Json, _| match value.as_number() {
            Some(n) if n.to_f64() >= 3.0 => Cell::styled("high", "danger"),
            Some(_) => Cell::new("low"),
            None => Cell::new("?"),
        }),
    ];
    let props = TableProps::new(&rows, &columns);
    let mut view = TabularView::new();
    view.click_header(&props, "load");

    let table = view.render(&props);
    let ranks: Vec<&str> = table.rows().iter().map(|r| r.cells[1].text.as_str()).collect();
    assert_eq!(ranks, ["1", "2", "3"]);
    let last = &table.rows()[2].cells[2];
    assert_eq!(last.text, "high");
    assert_eq!(last.style.as_deref(), Some("danger"));
}

#[test]
fn test_custom_placeholder_from_config() {
    let rows = vec![json!({"id": 1})];
    let columns = vec![ColumnSpec::new("missing", "Missing")];
    let config = TableConfig {
        placeholder: "n/a".to_string(),
        ..TableConfig::default()
    };
    let view = TabularView::with_config(config);
    let table = view.render(&TableProps::new(&rows, &columns));
    assert_eq!(table.column_texts("missing"), ["n/a"]);
}

// =============================================================================
// Row identity
// =============================================================================

#[test]
fn test_row_identity_resolution_order() {
    let rows = vec![
        json!({"id": 7, "uuid": "u-1"}),
        json!({"uuid": "u-2"}),
        json!({"name": "orphan"}),
    ];
    let columns = vec![ColumnSpec::new("name", "Name")];
    let view = TabularView::new();

    let by_default = TableProps::new(&rows, &columns);
    assert_eq!(view.row_keys(&by_default), ["7", "1", "2"]);

    let by_field = TableProps::new(&rows, &columns).row_key("uuid");
    assert_eq!(view.row_keys(&by_field), ["u-1", "u-2", "2"]);

    let by_func = TableProps::new(&rows, &columns)
        .row_identity(RowIdentity::func(|_: &Json, index| format!("row-{index}")));
    assert_eq!(view.row_keys(&by_func), ["row-0", "row-1", "row-2"]);
}

#[test]
fn test_rendered_rows_carry_indices() {
    let rows = devices();
    let columns = columns();
    let props = TableProps::new(&rows, &columns);
    let mut view = TabularView::new();
    view.set_sort(SortState::asc("name"));

    let table = view.render(&props);
    let indices: Vec<(usize, usize)> = table.rows().iter().map(|r| (r.index, r.source_index)).collect();
    assert_eq!(indices, [(0, 1), (1, 2), (2, 0)]);
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_search_emits_and_caller_filters() {
    let all = devices();
    let columns = columns();
    let mut queries = Vec::new();

    let mut view = TabularView::new();
    {
        let mut props = TableProps::new(&all, &columns)
            .search(Search::new().on_search(|text| queries.push(text.to_string())));
        assert_eq!(view.input_search(&mut props, "ALP"), SearchOutcome::Emitted);
    }
    assert_eq!(queries, ["ALP"]);

    let filtered: Vec<Json> = tabview::filter_records(&all, &columns, &queries[0])
        .into_iter()
        .cloned()
        .collect();
    let props = TableProps::new(&filtered, &columns).search(Search::new());
    let table = view.render(&props);
    assert_eq!(table.row_keys(), ["b"]);
    assert_eq!(table.search.map(|s| s.text), Some("ALP".to_string()));
}

#[test]
fn test_search_placeholder_override() {
    let rows = devices();
    let columns = columns();
    let view = TabularView::with_config(TableConfig::zh_cn());

    let props = TableProps::new(&rows, &columns).search(Search::new());
    assert_eq!(
        view.render(&props).search.map(|s| s.placeholder),
        Some("请输入关键字搜索".to_string())
    );

    let props = TableProps::new(&rows, &columns).search(Search::new().placeholder("Find device"));
    assert_eq!(
        view.render(&props).search.map(|s| s.placeholder),
        Some("Find device".to_string())
    );

    let props = TableProps::new(&rows, &columns).search(Search::new().searchable(false));
    assert!(view.render(&props).search.is_none());
}

// =============================================================================
// Pagination
// =============================================================================

#[test]
fn test_pagination_label_and_next_page() {
    let all: Vec<Json> = (1..=5).map(|i| json!({"id": i})).collect();
    let columns = vec![ColumnSpec::new("id", "ID")];
    let mut changes = Vec::new();
    let view = TabularView::new();

    {
        let page = paginate(&all, 1, 2);
        let mut props = TableProps::new(page, &columns)
            .pagination(Pagination::new(1, 2, all.len()).on_change(|p, s| changes.push((p, s))));

        let table = view.render(&props);
        let bar = table.pagination.as_ref().unwrap();
        assert_eq!(bar.label, "1 to 2 of 5");
        assert_eq!(bar.page_count, 3);
        assert!(!bar.has_previous);
        assert_eq!(table.row_keys(), ["1", "2"]);

        assert_eq!(view.click_next(&mut props), Some((2, 2)));
    }
    assert_eq!(changes, [(2, 2)]);

    let page = paginate(&all, 2, 2);
    let props = TableProps::new(page, &columns).pagination(Pagination::new(2, 2, all.len()));
    let table = view.render(&props);
    // Row identity comes from the `id` field, not the page position.
    assert_eq!(table.row_keys(), ["3", "4"]);
    assert_eq!(table.pagination.map(|p| p.label), Some("3 to 4 of 5".to_string()));
}

#[test]
fn test_pagination_does_not_slice_records() {
    let rows: Vec<Json> = (1..=5).map(|i| json!({"id": i})).collect();
    let columns = vec![ColumnSpec::new("id", "ID")];
    let props = TableProps::new(&rows, &columns).pagination(Pagination::new(1, 2, 5));
    assert_eq!(TabularView::new().render(&props).rows().len(), 5);
}

#[test]
fn test_pagination_with_no_records() {
    let rows: Vec<Json> = Vec::new();
    let columns = vec![ColumnSpec::new("id", "ID")];
    let mut props = TableProps::new(&rows, &columns).pagination(Pagination::new(1, 10, 0));
    let view = TabularView::new();

    let bar = view.render(&props).pagination.unwrap();
    assert_eq!((bar.start, bar.end, bar.page_count), (0, 0, 1));
    assert_eq!(bar.label, "0 to 0 of 0");
    assert_eq!(view.click_next(&mut props), None);
    assert_eq!(view.click_previous(&mut props), None);
}

#[test]
fn test_localized_range_label() {
    let rows: Vec<Json> = (1..=3).map(|i| json!({"id": i})).collect();
    let columns = vec![ColumnSpec::new("id", "ID")];
    let props = TableProps::new(&rows, &columns).pagination(Pagination::new(2, 2, 3));
    let view = TabularView::with_config(TableConfig::zh_cn());
    assert_eq!(
        view.render(&props).pagination.map(|p| p.label),
        Some("第 3-3 条/共 3 条".to_string())
    );
}

// =============================================================================
// Body states
// =============================================================================

#[test]
fn test_empty_records_show_empty_text() {
    let rows: Vec<Json> = Vec::new();
    let columns = columns();
    let props = TableProps::new(&rows, &columns);

    let table = TabularView::new().render(&props);
    assert_eq!(table.body, Body::Empty { text: "No data".to_string() });
    assert!(table.rows().is_empty());
    assert_eq!(table.headers.len(), 3);

    let table = TabularView::with_config(TableConfig::zh_cn()).render(&props);
    assert_eq!(table.body.message(), Some("暂无数据"));
}

#[test]
fn test_loading_takes_precedence_over_records() {
    let rows = devices();
    let columns = columns();
    let props = TableProps::new(&rows, &columns).loading(true);

    let table = TabularView::new().render(&props);
    assert!(table.body.is_loading());
    assert!(table.rows().is_empty());

    let empty: Vec<Json> = Vec::new();
    let props = TableProps::new(&empty, &columns).loading(true);
    assert_eq!(TabularView::new().render(&props).body.message(), Some("Loading..."));
}

// =============================================================================
// Actions and row clicks
// =============================================================================

#[test]
fn test_action_column_per_row() {
    let rows = devices();
    let columns = columns();
    let actions = ActionColumn::new("Actions", |record: &Json, _| {
        let mut list = vec![Action::new("edit", "Edit")];
        let locked = record["load"].as_i64().unwrap_or(0) >= 3;
        list.push(Action::new("delete", "Delete").style("danger").disabled(locked));
        list
    });
    let props = TableProps::new(&rows, &columns).actions(actions);

    let table = TabularView::new().render(&props);
    assert_eq!(table.actions_title.as_deref(), Some("Actions"));
    assert!(table.rows()[0].actions[1].disabled);
    assert!(!table.rows()[1].actions[1].disabled);
}

#[test]
fn test_row_click_reports_record_in_display_order() {
    let rows = devices();
    let columns = columns();
    let mut clicks = Vec::new();
    {
        let mut props = TableProps::new(&rows, &columns)
            .on_row_click(|record: &Json, index| clicks.push((record["name"].clone(), index)));
        let mut view = TabularView::new();
        view.click_header(&props, "name");
        assert_eq!(view.click_row(&mut props, "c"), Some(1));
    }
    assert_eq!(clicks, [(json!("beta"), 1)]);
}

// =============================================================================
// Exports
// =============================================================================

#[test]
fn test_json_and_csv_exports() {
    let rows = devices();
    let columns = columns();
    let props = TableProps::new(&rows, &columns).pagination(Pagination::new(1, 10, 3));
    let mut view = TabularView::new();
    view.click_header(&props, "load");
    let table = view.render(&props);

    let json: Json = serde_json::from_str(&table.to_json().unwrap()).unwrap();
    assert_eq!(json["body"]["state"], "rows");
    assert_eq!(json["headers"][1]["sort"], "asc");
    assert_eq!(json["pagination"]["label"], "1 to 3 of 3");
    assert_eq!(json["body"]["rows"][0]["key"], "b");

    let csv = table.to_csv().unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines, ["Name,Load,Site", "alpha,1,S4", "beta,2,-", "gamma,3,N1"]);
}
