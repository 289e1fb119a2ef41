//! 出力マニフェストの組み立て
//!
//! 出荷グループを初回挿入順に連番付きの固定スキーマ行へ変換し、
//! 統合ログとサマリーログを発行する。22列のセル実体化もここが持つ。

use crate::config::SenderProfile;
use crate::transform::merge::ShipmentGroup;
use crate::transform::{LogEntry, LogLevel};
use crate::workbook::CellValue;
use serde::Serialize;

/// 出力ヘッダーラベル（22列、固定順）
pub const HEADER_LABELS: [&str; 22] = [
    "序号",
    "配送方法",
    "送り状種類",
    "伝票番号",
    "送料",
    "電話番号",
    "郵便番号",
    "住所",
    "氏名",
    "お届け希望日",
    "時間帯指定",
    "出荷予定日",
    "ご依頼主電話番号",
    "ご依頼主郵便番号",
    "ご依頼主住所1",
    "ご依頼主名",
    "品名",
    "ゆうパケット専用サイズ欄",
    "注意写真",
    "代引金額",
    "梱包資材費",
    "記事",
];

/// 配送方法コード
pub const DELIVERY_METHOD: f64 = 9.0;
/// 送り状種類コード
pub const LABEL_TYPE: f64 = 1_800_800_001.0;
/// ゆうパケット専用サイズ
pub const PACKET_SIZE: f64 = 20.0;
/// 代引金額
pub const COD_AMOUNT: f64 = 0.0;
/// 梱包資材費
pub const PACKING_FEE: f64 = 0.0;

/// マニフェストの1データ行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestRow {
    pub seq: u32,
    pub phone: String,
    pub zip: String,
    pub address: String,
    pub name: String,
    /// 品名（改行区切り、出現順）
    pub products: String,
    /// 注文ID（改行区切り、挿入順）
    pub order_ids: String,
}

impl ManifestRow {
    /// ヘッダーラベルに揃えた22セルを実体化する
    pub fn cells(&self, sender: &SenderProfile) -> Vec<CellValue> {
        vec![
            CellValue::Number(self.seq as f64),
            CellValue::Number(DELIVERY_METHOD),
            CellValue::Number(LABEL_TYPE),
            CellValue::Empty, // 伝票番号
            CellValue::Empty, // 送料
            CellValue::Text(self.phone.clone()),
            CellValue::Text(self.zip.clone()),
            CellValue::Text(self.address.clone()),
            CellValue::Text(self.name.clone()),
            CellValue::Empty, // お届け希望日
            CellValue::Empty, // 時間帯指定
            CellValue::Empty, // 出荷予定日
            text_or_empty(&sender.phone),
            CellValue::Text(sender.zip.clone()),
            CellValue::Text(sender.address.clone()),
            CellValue::Text(sender.name.clone()),
            CellValue::Text(self.products.clone()),
            CellValue::Number(PACKET_SIZE),
            CellValue::Empty, // 注意写真
            CellValue::Number(COD_AMOUNT),
            CellValue::Number(PACKING_FEE),
            CellValue::Text(self.order_ids.clone()),
        ]
    }
}

fn text_or_empty(value: &str) -> CellValue {
    if value.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(value.to_string())
    }
}

/// グループ列からマニフェスト行とログを組み立てる
///
/// 連番は1始まり。注文IDが2件以上のグループごとに統合ログを1件、
/// 最後に全体サマリー（統合ありなら警告、なければ情報）を1件出す。
pub fn build_manifest(groups: &[ShipmentGroup], valid_rows: usize) -> (Vec<ManifestRow>, Vec<LogEntry>) {
    let mut rows = Vec::with_capacity(groups.len());
    let mut logs = Vec::new();

    for (position, group) in groups.iter().enumerate() {
        rows.push(ManifestRow {
            seq: position as u32 + 1,
            phone: group.phone.clone(),
            zip: group.zip.clone(),
            address: group.address.clone(),
            name: group.name.clone(),
            products: group.products.join("\n"),
            order_ids: group.order_ids.join("\n"),
        });

        if group.order_ids.len() > 1 {
            logs.push(LogEntry::new(
                LogLevel::Merge,
                format!(
                    "注文統合: {} 様宛 {}件（{}）",
                    group.name,
                    group.order_ids.len(),
                    group.order_ids.iter().collect::<Vec<_>>().join(", "),
                ),
            ));
        }
    }

    if valid_rows > groups.len() {
        logs.push(LogEntry::new(
            LogLevel::Warning,
            format!(
                "有効{}行を{}件の発送に統合しました（{}行をマージ）",
                valid_rows,
                groups.len(),
                valid_rows - groups.len(),
            ),
        ));
    } else {
        logs.push(LogEntry::new(
            LogLevel::Info,
            format!("{}件の発送を作成しました（統合なし）", groups.len()),
        ));
    }

    (rows, logs)
}
