//! データ行の検証と正規化
//!
//! 不正行・説明行は黙ってスキップする（行単位のログは出さない）。
//! スキップ条件は順序どおりに評価する。

use crate::normalizer;
use crate::transform::columns::{ColumnMap, PRODUCT_COLUMN, QUANTITY_COLUMN};
use crate::workbook::{CellValue, RawRow};

/// 検証を通過した1行分の正規化済みレコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub order_id: String,
    pub phone: String,
    pub zip: String,
    pub address: String,
    pub name: String,
    pub product_name: String,
    pub quantity: i64,
}

/// 1行を検証し、正規化済みレコードか None（スキップ）を返す
pub fn validate_row(row: &RawRow, header: &RawRow, map: &ColumnMap) -> Option<OrderRecord> {
    let order_cell = row.get(&map.order_id);

    // 1. 注文IDセルが空
    if !order_cell.is_truthy() {
        return None;
    }

    // 2. データ中に埋め込まれたヘッダー行の再出現
    let order_id = order_cell.trimmed();
    if order_id == header.get(&map.order_id).trimmed() {
        return None;
    }

    // 3. 電話の数字が8桁未満（記入例などの説明行を除外）
    let phone = normalizer::format_phone(&row.get(&map.phone).display_text());
    if phone.len() < 8 {
        return None;
    }

    // 4. 注文IDが空白のみ
    if order_id.is_empty() {
        return None;
    }

    // 5. 数量が0以下
    let quantity = parse_quantity(row.get(QUANTITY_COLUMN));
    if quantity <= 0 {
        return None;
    }

    let zip = normalizer::format_zip(&row.get(&map.zip).display_text());
    let name = row.get(&map.name).trimmed();
    let address = assemble_address(row, map);
    let product_name = row.get(PRODUCT_COLUMN).trimmed();

    Some(OrderRecord {
        order_id,
        phone,
        zip,
        address,
        name,
        product_name,
        quantity,
    })
}

/// 数量のパース。数値セルは0方向に切り捨て、非数値テキストは0
fn parse_quantity(cell: &CellValue) -> i64 {
    match cell {
        CellValue::Number(n) => *n as i64,
        CellValue::Text(s) => s.trim().parse::<i64>().unwrap_or(0),
        CellValue::Empty => 0,
    }
}

/// 住所の組み立て
///
/// 都道府県・市区町村・町名・詳細住所1を区切りなしで連結し、
/// 詳細住所2があれば括弧付きで末尾に付ける。
fn assemble_address(row: &RawRow, map: &ColumnMap) -> String {
    let mut address = String::new();
    for col in [&map.prefecture, &map.city, &map.town, &map.addr1] {
        if let Some(col) = col {
            let part = row.get(col).trimmed();
            if !part.is_empty() {
                address.push_str(&part);
            }
        }
    }
    if let Some(col) = &map.addr2 {
        let part = row.get(col).trimmed();
        if !part.is_empty() {
            address.push('(');
            address.push_str(&part);
            address.push(')');
        }
    }
    address
}
