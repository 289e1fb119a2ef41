//! 正規化モジュール
//!
//! 純粋関数のみ:
//! - 郵便番号の整形（7桁 → DDD-DDDD）
//! - 電話番号のスクラブ（国番号マーカー除去・数字以外を除去）
//! - 商品名×数量の計算（パックサイズ演算）

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_DIGIT: Regex = Regex::new(r"[^0-9]").unwrap();
    /// 商品名末尾の `*<パックサイズ>` パターン
    static ref PACK_SIZE: Regex = Regex::new(r"^(.*)\*(\d+)$").unwrap();
}

/// 郵便番号を整形する
///
/// 数字以外を除去して7桁が残れば `DDD-DDDD` 形式にする。
/// それ以外の桁数は形式不明として元の値をそのまま返す。
pub fn format_zip(raw: &str) -> String {
    let digits = NON_DIGIT.replace_all(raw, "");
    if digits.len() == 7 {
        format!("{}-{}", &digits[..3], &digits[3..])
    } else {
        raw.to_string()
    }
}

/// 電話番号をスクラブする
///
/// 日本の国番号マーカー `(+81)` を除去したうえで数字以外を全て除去する。
pub fn format_phone(raw: &str) -> String {
    let without_marker = raw.replace("(+81)", "");
    NON_DIGIT.replace_all(&without_marker, "").to_string()
}

/// 品名文字列を計算する
///
/// - 商品名が空: `Unknown*<数量>`
/// - `<ベース名>*<パックサイズ>` 形式: 数量1ならそのまま、
///   それ以外は `<ベース名>*<パックサイズ×数量>`
/// - 上記以外: `<商品名>*<数量>`
pub fn calculate_product(name: &str, quantity: i64) -> String {
    if name.is_empty() {
        return format!("Unknown*{}", quantity);
    }

    if let Some(caps) = PACK_SIZE.captures(name) {
        if let Ok(pack_size) = caps[2].parse::<i64>() {
            if quantity == 1 {
                return name.to_string();
            }
            return format!("{}*{}", &caps[1], pack_size * quantity);
        }
    }

    format!("{}*{}", name, quantity)
}
