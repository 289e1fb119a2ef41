//! 注文統合の変換パイプライン
//!
//! 生のワークブック行からマニフェスト行・処理ログ・統計を生成する
//! 純粋関数。グローバル状態は持たず、状態はすべて1回の呼び出しに閉じる。
//!
//! ## 処理フロー
//! 1. ヘッダー行の検出とレイアウト分類（header）
//! 2. 意味フィールド → 列の対応付け（columns）
//! 3. データ行の検証・正規化（validate）
//! 4. マージキーによる出荷グループ統合（merge）
//! 5. 固定スキーマ行とログの組み立て（output）

pub mod columns;
pub mod header;
pub mod merge;
pub mod output;
pub mod validate;

use crate::error::{ManifestError, Result};
use crate::workbook::RawRow;
use columns::ColumnMap;
use header::Layout;
use merge::MergeEngine;
use output::ManifestRow;
use serde::Serialize;

/// 処理ログのレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Merge,
    Warning,
    Error,
}

impl LogLevel {
    /// CLI表示用のマーカー
    pub fn marker(&self) -> &'static str {
        match self {
            LogLevel::Info => "ℹ️",
            LogLevel::Merge => "🔗",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }
}

/// 処理ログの1エントリ（追記専用、タイムスタンプなし）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: String) -> Self {
        Self { level, message }
    }

    fn info(message: String) -> Self {
        Self::new(LogLevel::Info, message)
    }
}

/// 1回の処理で収集する統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStats {
    /// ヘッダー以降のデータ行数
    pub data_rows: usize,
    /// 検証を通過した行数
    pub valid_rows: usize,
    /// 出荷グループ数
    pub shipment_groups: usize,
    /// 統合で吸収された行数
    pub merged_rows: usize,
}

/// 変換の結果一式
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutput {
    /// ヘッダー行の0始まりインデックス
    pub header_row: usize,
    pub layout: Layout,
    pub column_map: ColumnMap,
    pub rows: Vec<ManifestRow>,
    pub logs: Vec<LogEntry>,
    pub stats: ProcessStats,
}

/// 注文エクスポートの全行をマニフェストへ変換する
///
/// 致命的エラー（行数不足・ヘッダー未検出・必須列未解決・
/// 出荷グループ0件）は Err で中断し、出力は作らない。
/// 個々の不正データ行は黙ってスキップする。
pub fn process(rows: &[RawRow]) -> Result<TransformOutput> {
    if rows.len() < 2 {
        return Err(ManifestError::TooFewRows(rows.len()));
    }

    let (header_row, layout) =
        header::detect_header(rows).ok_or(ManifestError::HeaderNotFound)?;
    let header = &rows[header_row];
    let column_map = ColumnMap::resolve(header, layout)?;

    let mut logs = vec![LogEntry::info(format!(
        "ヘッダー行を検出: {}行目（{}）",
        header_row + 1,
        layout,
    ))];

    let mut stats = ProcessStats::default();
    let mut engine = MergeEngine::new();
    for row in &rows[header_row + 1..] {
        stats.data_rows += 1;
        if let Some(record) = validate::validate_row(row, header, &column_map) {
            stats.valid_rows += 1;
            engine.insert(record);
        }
    }
    logs.push(LogEntry::info(format!(
        "データ{}行中 {}行を有効と判定",
        stats.data_rows, stats.valid_rows,
    )));

    let groups = engine.into_groups();
    if groups.is_empty() {
        return Err(ManifestError::NoShipments);
    }
    stats.shipment_groups = groups.len();
    stats.merged_rows = stats.valid_rows - groups.len();

    let (manifest_rows, mut output_logs) = output::build_manifest(&groups, stats.valid_rows);
    logs.append(&mut output_logs);

    Ok(TransformOutput {
        header_row,
        layout,
        column_map,
        rows: manifest_rows,
        logs,
        stats,
    })
}
