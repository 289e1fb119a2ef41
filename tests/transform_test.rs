//! 注文統合変換の統合テスト
//!
//! 生の行列を組み立てて process() をエンドツーエンドで検証する。

use yupacket_manifest::error::ManifestError;
use yupacket_manifest::transform::{self, header::Layout, LogLevel};
use yupacket_manifest::workbook::{CellValue, RawRow};

fn text_row(cells: &[(&str, &str)]) -> RawRow {
    let mut row = RawRow::new();
    for (col, value) in cells {
        row.set(col, CellValue::Text(value.to_string()));
    }
    row
}

/// 汎用レイアウトのヘッダー行
fn generic_header() -> RawRow {
    text_row(&[
        ("A", "注文ID"),
        ("B", "受取人"),
        ("C", "電話番号"),
        ("D", "郵便番号"),
        ("E", "都道府県"),
        ("F", "市区町村"),
        ("G", "町名"),
        ("H", "詳細住所1"),
        ("I", "詳細住所2"),
    ])
}

/// 汎用レイアウトのデータ行（田中宛の標準形）
fn order_row(order_id: &str, product: &str, quantity: &str) -> RawRow {
    text_row(&[
        ("A", order_id),
        ("B", "田中"),
        ("C", "09012345678"),
        ("D", "1234567"),
        ("E", "東京都"),
        ("F", "港区"),
        ("G", "芝浦"),
        ("H", "1-2-3"),
        ("AW", product),
        ("AY", quantity),
    ])
}

#[test]
fn test_end_to_end_merge_scenario() {
    // 同一宛先の2行（数量1と2）が1件の発送に統合される
    let rows = vec![
        generic_header(),
        order_row("R001", "Box*4", "1"),
        order_row("R002", "Box*4", "2"),
    ];
    let result = transform::process(&rows).unwrap();

    assert_eq!(result.layout, Layout::Generic);
    assert_eq!(result.rows.len(), 1);

    let row = &result.rows[0];
    assert_eq!(row.seq, 1);
    assert_eq!(row.phone, "09012345678");
    assert_eq!(row.zip, "123-4567");
    assert_eq!(row.address, "東京都港区芝浦1-2-3");
    assert_eq!(row.name, "田中");
    assert_eq!(row.products, "Box*4\nBox*8");
    assert_eq!(row.order_ids, "R001\nR002");

    let merge_logs: Vec<_> = result
        .logs
        .iter()
        .filter(|l| l.level == LogLevel::Merge)
        .collect();
    assert_eq!(merge_logs.len(), 1);
    assert!(merge_logs[0].message.contains("田中"));

    // 統合が発生したのでサマリーは警告
    assert_eq!(result.logs.last().unwrap().level, LogLevel::Warning);
    assert_eq!(result.stats.valid_rows, 2);
    assert_eq!(result.stats.shipment_groups, 1);
    assert_eq!(result.stats.merged_rows, 1);
}

#[test]
fn test_distinct_receivers_no_merge() {
    let mut other = order_row("R002", "Cup", "1");
    other.set("B", CellValue::Text("佐藤".into()));
    let rows = vec![generic_header(), order_row("R001", "Box*4", "1"), other];
    let result = transform::process(&rows).unwrap();

    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.rows[0].seq, 1);
    assert_eq!(result.rows[1].seq, 2);
    assert!(result.logs.iter().all(|l| l.level != LogLevel::Merge));
    assert_eq!(result.logs.last().unwrap().level, LogLevel::Info);
}

#[test]
fn test_skipped_rows_never_contribute() {
    let mut zero_quantity = order_row("R010", "Box", "0");
    zero_quantity.set("B", CellValue::Text("数量ゼロ".into()));
    let mut short_phone = order_row("R011", "Box", "1");
    short_phone.set("C", CellValue::Text("090".into()));
    let mut blank_order = order_row("  ", "Box", "1");
    blank_order.set("A", CellValue::Text("  ".into()));

    let rows = vec![
        generic_header(),
        order_row("R001", "Box*4", "1"),
        zero_quantity,
        short_phone,
        blank_order,
    ];
    let result = transform::process(&rows).unwrap();

    assert_eq!(result.stats.data_rows, 4);
    assert_eq!(result.stats.valid_rows, 1);
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].order_ids, "R001");
}

#[test]
fn test_repeated_header_row_is_skipped() {
    let rows = vec![
        generic_header(),
        order_row("R001", "Box*4", "1"),
        generic_header(),
        order_row("R002", "Box*4", "1"),
    ];
    let result = transform::process(&rows).unwrap();
    assert_eq!(result.stats.valid_rows, 2);
}

#[test]
fn test_fixed_layout_end_to_end() {
    let header = text_row(&[("B", "注文ID"), ("S", "電話番号")]);
    let data = text_row(&[
        ("B", "R100"),
        ("R", "鈴木"),
        ("S", "(+81)9011112222"),
        ("T", "4600008"),
        ("U", "愛知県"),
        ("V", "名古屋市中区"),
        ("W", "栄"),
        ("X", "3-1-1"),
        ("Y", "サカエビル501"),
        ("AW", "お茶*24"),
        ("AY", "2"),
    ]);
    let result = transform::process(&[header, data]).unwrap();

    assert_eq!(result.layout, Layout::Fixed);
    assert_eq!(result.header_row, 0);
    assert_eq!(result.rows.len(), 1);
    let row = &result.rows[0];
    assert_eq!(row.phone, "9011112222");
    assert_eq!(row.zip, "460-0008");
    assert_eq!(row.address, "愛知県名古屋市中区栄3-1-1(サカエビル501)");
    assert_eq!(row.name, "鈴木");
    assert_eq!(row.products, "お茶*48");
    assert_eq!(row.order_ids, "R100");
}

#[test]
fn test_idempotent_reruns() {
    let rows = vec![
        generic_header(),
        order_row("R001", "Box*4", "1"),
        order_row("R002", "Box*4", "2"),
        order_row("R003", "Cup", "3"),
    ];
    let first = transform::process(&rows).unwrap();
    let second = transform::process(&rows).unwrap();

    assert_eq!(first.rows, second.rows);
    assert_eq!(first.logs, second.logs);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_too_few_rows_is_fatal() {
    let result = transform::process(&[generic_header()]);
    assert!(matches!(result, Err(ManifestError::TooFewRows(1))));
}

#[test]
fn test_header_not_found_is_fatal() {
    let rows = vec![text_row(&[("A", "メモ")]), text_row(&[("A", "データ")])];
    let result = transform::process(&rows);
    assert!(matches!(result, Err(ManifestError::HeaderNotFound)));
}

#[test]
fn test_missing_required_columns_is_fatal() {
    let rows = vec![
        text_row(&[("A", "注文ID"), ("B", "電話番号")]),
        text_row(&[("A", "R001"), ("B", "09012345678")]),
    ];
    let result = transform::process(&rows);
    assert!(matches!(result, Err(ManifestError::MissingColumns { .. })));
}

#[test]
fn test_all_rows_skipped_is_fatal() {
    let rows = vec![generic_header(), order_row("R001", "Box", "0")];
    let result = transform::process(&rows);
    assert!(matches!(result, Err(ManifestError::NoShipments)));
}
