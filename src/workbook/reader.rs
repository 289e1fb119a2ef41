//! Excelワークブックの読み込み
//!
//! calamineで任意形式（xlsx/xls/ods）を開き、使用範囲を
//! 絶対座標に揃えた RawRow 列に変換する。B3始まりのシートでも
//! 先頭2行は空行、セルは"B"列から始まるよう埋め戻す。

use crate::error::{ManifestError, Result};
use crate::workbook::{CellValue, RawRow};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// ワークブックを読み込み、絶対座標のRawRow列を返す
///
/// `sheet` 未指定時は先頭シート。存在しないシート名は
/// 利用可能なシート一覧付きのエラーになる。
pub fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<Vec<RawRow>> {
    if !path.exists() {
        return Err(ManifestError::FileNotFound(path.display().to_string()));
    }

    let mut workbook =
        open_workbook_auto(path).map_err(|e| ManifestError::WorkbookRead(e.to_string()))?;
    let sheet_names = workbook.sheet_names();

    let sheet_name = match sheet {
        Some(name) => {
            if !sheet_names.iter().any(|n| n == name) {
                return Err(ManifestError::SheetNotFound {
                    name: name.to_string(),
                    available: sheet_names.join(", "),
                });
            }
            name.to_string()
        }
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ManifestError::WorkbookRead("シートがありません".into()))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ManifestError::WorkbookRead(e.to_string()))?;

    let (anchor_row, anchor_col) = match range.start() {
        Some(start) => start,
        None => return Ok(Vec::new()), // 空シート
    };

    let mut rows = Vec::with_capacity(anchor_row as usize + range.height());
    for _ in 0..anchor_row {
        rows.push(RawRow::new());
    }
    for sheet_row in range.rows() {
        let mut cells = vec![CellValue::Empty; anchor_col as usize];
        cells.extend(sheet_row.iter().map(convert_cell));
        rows.push(RawRow::from_cells(cells));
    }

    Ok(rows)
}

/// calamineのセル型を3種に畳み込む
fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}
