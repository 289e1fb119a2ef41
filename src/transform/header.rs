//! ヘッダー行の検出とレイアウト分類
//!
//! 先頭20行のみを走査する。固定レイアウトの署名チェックを全行に対して
//! 先に評価し、成立しなければキーワード走査にフォールバックする
//! （後の行がフォールバックに先に一致しても固定レイアウトが優先）。

use crate::transform::columns::{FIXED_ORDER_ID, FIXED_PHONE};
use crate::workbook::RawRow;
use serde::Serialize;

/// ヘッダー走査の上限行数
const SCAN_LIMIT: usize = 20;

/// フォールバック走査のキーワード（電話系・注文ID系）
const FALLBACK_KEYWORDS: [&str; 6] = [
    "電話番号",
    "telephone",
    "phone",
    "注文id",
    "order id",
    "orderid",
];

/// 入力レイアウトの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// 既知のECモール注文エクスポート（位置署名で検出）
    Fixed,
    /// キーワード照合で列を発見する未知レイアウト
    Generic,
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Fixed => write!(f, "固定レイアウト"),
            Layout::Generic => write!(f, "汎用レイアウト"),
        }
    }
}

/// ヘッダー行を検出する
///
/// 戻り値は (0始まりのヘッダー行インデックス, レイアウト分類)。
/// 検出できなければ None。
pub fn detect_header(rows: &[RawRow]) -> Option<(usize, Layout)> {
    let scan = rows.len().min(SCAN_LIMIT);

    // 固定レイアウトの署名チェック（優先）
    for (index, row) in rows[..scan].iter().enumerate() {
        let order_cell = row.get(FIXED_ORDER_ID).trimmed().to_lowercase();
        let phone_cell = row.get(FIXED_PHONE).trimmed().to_lowercase();
        if (order_cell.contains("id") || order_cell.contains("注文"))
            && (phone_cell.contains("phone") || phone_cell.contains("電話"))
        {
            return Some((index, Layout::Fixed));
        }
    }

    // フォールバック: キーワードが2個以上現れる行をヘッダーとみなす
    for (index, row) in rows[..scan].iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|(_, cell)| cell.trimmed().to_lowercase())
            .collect();
        let hits = FALLBACK_KEYWORDS
            .iter()
            .filter(|keyword| cells.iter().any(|cell| cell.contains(*keyword)))
            .count();
        if hits >= 2 {
            return Some((index, Layout::Generic));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::CellValue;

    fn text_row(cells: &[(&str, &str)]) -> RawRow {
        let mut row = RawRow::new();
        for (col, value) in cells {
            row.set(col, CellValue::Text(value.to_string()));
        }
        row
    }

    #[test]
    fn test_detect_fixed_layout() {
        let rows = vec![
            text_row(&[("A", "エクスポート 2026/08/01")]),
            text_row(&[("B", "注文ID"), ("S", "電話番号")]),
            text_row(&[("B", "R123"), ("S", "09011112222")]),
        ];
        assert_eq!(detect_header(&rows), Some((1, Layout::Fixed)));
    }

    #[test]
    fn test_detect_generic_layout() {
        let rows = vec![
            text_row(&[("A", "メモ")]),
            text_row(&[("A", "注文ID"), ("B", "受取人"), ("C", "電話番号")]),
        ];
        assert_eq!(detect_header(&rows), Some((1, Layout::Generic)));
    }

    #[test]
    fn test_fixed_takes_priority_over_earlier_fallback() {
        // 1行目がフォールバック条件を満たしても、後段の固定署名が勝つ
        let rows = vec![
            text_row(&[("A", "order id"), ("B", "phone")]),
            text_row(&[("B", "注文ID"), ("S", "お電話番号")]),
        ];
        assert_eq!(detect_header(&rows), Some((1, Layout::Fixed)));
    }

    #[test]
    fn test_one_keyword_is_not_enough() {
        let rows = vec![
            text_row(&[("A", "電話番号")]),
            text_row(&[("A", "データ")]),
        ];
        assert_eq!(detect_header(&rows), None);
    }

    #[test]
    fn test_scan_window_is_twenty_rows() {
        let mut rows: Vec<RawRow> = (0..25).map(|_| text_row(&[("A", "x")])).collect();
        rows[22] = text_row(&[("A", "注文ID"), ("B", "電話番号")]);
        assert_eq!(detect_header(&rows), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(detect_header(&[]), None);
    }
}
