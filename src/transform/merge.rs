//! 同一出荷先への注文統合
//!
//! マージキー = 電話|郵便番号|住所|氏名（正規化済み値を `|` で連結）。
//! 4項目すべてが一致した行だけを同一グループにまとめる。
//! グループの反復順は初回挿入順（ハッシュ順には依存しない）。

use crate::normalizer;
use crate::transform::validate::OrderRecord;
use std::collections::{HashMap, HashSet};

/// 挿入順を保持する文字列セット
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 未登録なら末尾に追加。追加したら true
    pub fn insert(&mut self, value: &str) -> bool {
        if self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.to_string());
        self.items.push(value.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn join(&self, separator: &str) -> String {
        self.items.join(separator)
    }
}

/// 出荷グループ（出力1行分の単位）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentGroup {
    pub merge_key: String,
    pub name: String,
    pub phone: String,
    pub zip: String,
    pub address: String,
    /// 注文ID（挿入順保持）
    pub order_ids: OrderedSet,
    /// 品名（行の出現順）
    pub products: Vec<String>,
}

/// キー→グループの蓄積エンジン
#[derive(Debug, Default)]
pub struct MergeEngine {
    index: HashMap<String, usize>,
    groups: Vec<ShipmentGroup>,
}

impl MergeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// 検証済みレコードを1件取り込む
    pub fn insert(&mut self, record: OrderRecord) {
        let merge_key = format!(
            "{}|{}|{}|{}",
            record.phone, record.zip, record.address, record.name
        );
        let product = normalizer::calculate_product(&record.product_name, record.quantity);

        match self.index.get(&merge_key) {
            Some(&position) => {
                let group = &mut self.groups[position];
                group.order_ids.insert(&record.order_id);
                group.products.push(product);
            }
            None => {
                let mut order_ids = OrderedSet::new();
                order_ids.insert(&record.order_id);
                self.index.insert(merge_key.clone(), self.groups.len());
                self.groups.push(ShipmentGroup {
                    merge_key,
                    name: record.name,
                    phone: record.phone,
                    zip: record.zip,
                    address: record.address,
                    order_ids,
                    products: vec![product],
                });
            }
        }
    }

    /// 初回挿入順のグループ列を取り出す
    pub fn into_groups(self) -> Vec<ShipmentGroup> {
        self.groups
    }
}
