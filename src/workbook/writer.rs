//! マニフェストExcelの生成
//!
//! 空行3行 → 22列のヘッダー行（4行目）→ データ行（5行目以降）。
//! 複数行セル（品名・記事）には折り返し書式を適用する。

use crate::config::SenderProfile;
use crate::error::{ManifestError, Result};
use crate::transform::output::{ManifestRow, HEADER_LABELS};
use crate::workbook::CellValue;
use chrono::Datelike;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use std::path::Path;

/// ヘッダー行の0始まり行番号（上に空行3行）
const HEADER_ROW: u32 = 3;

/// 出力ファイル名: `ゆうパケットMM.DD.xlsx`（月日とも2桁）
pub fn manifest_file_name(date: &impl Datelike) -> String {
    format!("ゆうパケット{:02}.{:02}.xlsx", date.month(), date.day())
}

/// マニフェストをファイルに書き出す
pub fn write_manifest(rows: &[ManifestRow], sender: &SenderProfile, path: &Path) -> Result<()> {
    let mut workbook = build_workbook(rows, sender)?;
    workbook.save(path).map_err(excel_error)?;
    Ok(())
}

/// マニフェストをバイト列として生成する
pub fn manifest_buffer(rows: &[ManifestRow], sender: &SenderProfile) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(rows, sender)?;
    workbook.save_to_buffer().map_err(excel_error)
}

fn build_workbook(rows: &[ManifestRow], sender: &SenderProfile) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    let wrap_format = Format::new().set_text_wrap();

    // 列幅（電話・郵便・住所・氏名・ご依頼主欄・品名・記事）
    for (col, width) in [
        (5u16, 14.0),
        (6, 10.0),
        (7, 40.0),
        (8, 14.0),
        (13, 10.0),
        (14, 30.0),
        (15, 22.0),
        (16, 30.0),
        (21, 20.0),
    ] {
        worksheet.set_column_width(col, width).map_err(excel_error)?;
    }

    for (col, label) in HEADER_LABELS.iter().enumerate() {
        worksheet
            .write_string_with_format(HEADER_ROW, col as u16, *label, &header_format)
            .map_err(excel_error)?;
    }

    for (index, manifest_row) in rows.iter().enumerate() {
        let excel_row = HEADER_ROW + 1 + index as u32;
        for (col, cell) in manifest_row.cells(sender).into_iter().enumerate() {
            let col = col as u16;
            // 品名(16)と記事(21)は折り返し
            let wrap = col == 16 || col == 21;
            match cell {
                CellValue::Empty => {}
                CellValue::Number(n) => {
                    worksheet
                        .write_number(excel_row, col, n)
                        .map_err(excel_error)?;
                }
                CellValue::Text(s) => {
                    if wrap {
                        worksheet
                            .write_string_with_format(excel_row, col, &s, &wrap_format)
                            .map_err(excel_error)?;
                    } else {
                        worksheet
                            .write_string(excel_row, col, &s)
                            .map_err(excel_error)?;
                    }
                }
            }
        }
    }

    Ok(workbook)
}

fn excel_error(e: XlsxError) -> ManifestError {
    ManifestError::ExcelWrite(e.to_string())
}
