//! 意味フィールド → 物理列の対応付け
//!
//! 固定レイアウトは既知ECモールのエクスポート配置を静的に割り当てる。
//! 汎用レイアウトはヘッダー行のキーワード照合で列を発見する。
//! 商品名と数量は両レイアウトとも固定列（AW / AY）から読む。

use crate::error::{ManifestError, Result};
use crate::transform::header::Layout;
use crate::workbook::{ColumnId, RawRow};
use serde::Serialize;

// 固定レイアウトの静的割り当て
pub const FIXED_ORDER_ID: &str = "B";
pub const FIXED_NAME: &str = "R";
pub const FIXED_PHONE: &str = "S";
pub const FIXED_ZIP: &str = "T";
pub const FIXED_PREFECTURE: &str = "U";
pub const FIXED_CITY: &str = "V";
pub const FIXED_TOWN: &str = "W";
pub const FIXED_ADDR1: &str = "X";
pub const FIXED_ADDR2: &str = "Y";

/// 商品名・数量の固定列。汎用レイアウトでも動的発見はしない（既知の制限）
pub const PRODUCT_COLUMN: &str = "AW";
pub const QUANTITY_COLUMN: &str = "AY";

/// 意味フィールド → 列識別子のマッピング
///
/// 必須フィールド（注文ID・氏名・電話・郵便番号）は解決必須。
/// 住所パーツは欠けていてもよい。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMap {
    pub order_id: ColumnId,
    pub name: ColumnId,
    pub phone: ColumnId,
    pub zip: ColumnId,
    pub prefecture: Option<ColumnId>,
    pub city: Option<ColumnId>,
    pub town: Option<ColumnId>,
    pub addr1: Option<ColumnId>,
    pub addr2: Option<ColumnId>,
}

impl ColumnMap {
    /// ヘッダー行とレイアウト分類からマッピングを構築する
    pub fn resolve(header: &RawRow, layout: Layout) -> Result<Self> {
        match layout {
            Layout::Fixed => Ok(Self::fixed()),
            Layout::Generic => Self::resolve_generic(header),
        }
    }

    fn fixed() -> Self {
        Self {
            order_id: FIXED_ORDER_ID.to_string(),
            name: FIXED_NAME.to_string(),
            phone: FIXED_PHONE.to_string(),
            zip: FIXED_ZIP.to_string(),
            prefecture: Some(FIXED_PREFECTURE.to_string()),
            city: Some(FIXED_CITY.to_string()),
            town: Some(FIXED_TOWN.to_string()),
            addr1: Some(FIXED_ADDR1.to_string()),
            addr2: Some(FIXED_ADDR2.to_string()),
        }
    }

    /// ヘッダーセルをキーワード照合して列を割り当てる
    ///
    /// 複数セルが同じフィールドに一致した場合は後に走査した列が勝つ
    /// （先勝ちロックなし。元仕様の互換動作をそのまま保持）。
    fn resolve_generic(header: &RawRow) -> Result<Self> {
        let mut order_id: Option<ColumnId> = None;
        let mut name: Option<ColumnId> = None;
        let mut phone: Option<ColumnId> = None;
        let mut zip: Option<ColumnId> = None;
        let mut prefecture: Option<ColumnId> = None;
        let mut city: Option<ColumnId> = None;
        let mut town: Option<ColumnId> = None;
        let mut addr1: Option<ColumnId> = None;
        let mut addr2: Option<ColumnId> = None;

        for (col, cell) in header.iter() {
            let text = cell.trimmed().to_lowercase();
            if text.is_empty() {
                continue;
            }
            // 1つのセルが複数フィールドのキーワードに一致し得る（else-ifにしない）
            if contains_any(&text, &["電話番号", "telephone", "phone"]) {
                phone = Some(col.clone());
            }
            if contains_any(&text, &["郵便番号", "zip", "postal"]) {
                zip = Some(col.clone());
            }
            if text.contains("都道府県") {
                prefecture = Some(col.clone());
            }
            if text.contains("市区町村") {
                city = Some(col.clone());
            }
            if text.contains("町名") {
                town = Some(col.clone());
            }
            if text.contains("詳細住所1") {
                addr1 = Some(col.clone());
            }
            if text.contains("詳細住所2") {
                addr2 = Some(col.clone());
            }
            if contains_any(&text, &["受取人", "name", "recipient"]) {
                name = Some(col.clone());
            }
            if contains_any(&text, &["注文id", "order id", "orderid"]) {
                order_id = Some(col);
            }
        }

        let mut missing = Vec::new();
        if phone.is_none() {
            missing.push("phone");
        }
        if zip.is_none() {
            missing.push("zip");
        }
        if name.is_none() {
            missing.push("name");
        }
        if order_id.is_none() {
            missing.push("orderId");
        }
        if !missing.is_empty() {
            return Err(ManifestError::MissingColumns {
                layout: Layout::Generic.to_string(),
                fields: missing.join(", "),
            });
        }

        Ok(Self {
            order_id: order_id.unwrap_or_default(),
            name: name.unwrap_or_default(),
            phone: phone.unwrap_or_default(),
            zip: zip.unwrap_or_default(),
            prefecture,
            city,
            town,
            addr1,
            addr2,
        })
    }

    /// 表示用の (フィールド名, 列ラベル) 一覧
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            ("orderId", self.order_id.clone()),
            ("name", self.name.clone()),
            ("phone", self.phone.clone()),
            ("zip", self.zip.clone()),
        ];
        for (label, col) in [
            ("prefecture", &self.prefecture),
            ("city", &self.city),
            ("town", &self.town),
            ("addr1", &self.addr1),
            ("addr2", &self.addr2),
        ] {
            if let Some(col) = col {
                entries.push((label, col.clone()));
            }
        }
        entries
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
