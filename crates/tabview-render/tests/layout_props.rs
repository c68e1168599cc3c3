//! Property tests for table layout.

use proptest::prelude::*;
use tabview_render::{display_width, BorderStyle, Column, Table, TextCell, Width};

fn border_strategy() -> impl Strategy<Value = BorderStyle> {
    prop_oneof![
        Just(BorderStyle::None),
        Just(BorderStyle::Ascii),
        Just(BorderStyle::Light),
        Just(BorderStyle::Heavy),
        Just(BorderStyle::Double),
        Just(BorderStyle::Rounded),
    ]
}

fn rows_strategy(cols: usize) -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::vec("[a-z0-9 设备运维]{0,10}", cols..=cols),
        0..12,
    )
}

proptest! {
    /// Every line of a bordered table has the same display width.
    #[test]
    fn bordered_lines_have_equal_width(
        (cols, rows) in (1usize..5).prop_flat_map(|c| (Just(c), rows_strategy(c))),
        border in border_strategy().prop_filter("bordered", |b| *b != BorderStyle::None),
    ) {
        let headers: Vec<String> = (0..cols).map(|i| format!("col{i}")).collect();
        let table = Table::new(vec![Column::default(); cols])
            .header(headers)
            .border(border);
        let cells: Vec<Vec<TextCell>> = rows
            .iter()
            .map(|r| r.iter().map(|s| TextCell::from(s.as_str())).collect())
            .collect();
        let out = table.render(&cells);
        let widths: Vec<usize> = out.lines().map(display_width).collect();
        prop_assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }

    /// With a fill column and enough room, the table is exactly as wide as requested.
    #[test]
    fn fill_column_reaches_requested_width(
        total in 30usize..120,
        rows in rows_strategy(2),
        border in border_strategy(),
    ) {
        let table = Table::new(vec![Column::new(Width::Fixed(10)), Column::new(Width::Fill)])
            .border(border)
            .width(Some(total));
        let cells: Vec<Vec<TextCell>> = rows
            .iter()
            .map(|r| r.iter().map(|s| TextCell::from(s.as_str())).collect())
            .collect();
        for line in table.render(&cells).lines() {
            prop_assert_eq!(display_width(line), total);
        }
    }
}
