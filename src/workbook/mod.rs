//! ワークブックのデータモデルとファイルI/O
//!
//! コア変換が消費する型:
//! - CellValue: セル値（空 / テキスト / 数値）
//! - RawRow: 列識別子（"A", "AW"等）→ セル値の順序付きマッピング
//! - ColumnId: 列識別子の型エイリアス（配列位置とは区別する）

pub mod reader;
pub mod writer;

/// 列識別子（"A"〜"Z", "AA"〜）。意味フィールド名と混同しないための別名
pub type ColumnId = String;

/// 0始まりの列インデックスを列ラベルに変換（0→"A", 26→"AA", 48→"AW"）
pub fn column_label(index: usize) -> ColumnId {
    let mut n = index + 1;
    let mut label = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}

/// 列ラベルを0始まりのインデックスに変換（"A"→0, "AW"→48）
pub fn column_index(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }
    let mut value: usize = 0;
    for c in label.chars() {
        let c = c.to_ascii_uppercase();
        if !c.is_ascii_uppercase() {
            return None;
        }
        value = value * 26 + (c as usize - 'A' as usize + 1);
    }
    Some(value - 1)
}

/// セル値。読み込み側でブール・日付等はこの3種に畳み込む
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

static EMPTY_CELL: CellValue = CellValue::Empty;

impl CellValue {
    /// 表示用テキスト。整数値の数値セルは小数部なしで描画する
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
        }
    }

    /// 前後空白を除いた表示テキスト
    pub fn trimmed(&self) -> String {
        self.display_text().trim().to_string()
    }

    /// 真偽判定。空セル・空テキスト・数値0は偽
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Number(n) => *n != 0.0,
        }
    }
}

/// 1行分のセル。列ラベルをキーとする順序付きマッピング
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: Vec<CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// 絶対列位置に揃えたセル列から構築（先頭が"A"列）
    pub fn from_cells(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// 列ラベル指定でセルを設定。途中の列は空セルで埋める
    pub fn set(&mut self, col: &str, value: CellValue) {
        if let Some(index) = column_index(col) {
            if index >= self.cells.len() {
                self.cells.resize(index + 1, CellValue::Empty);
            }
            self.cells[index] = value;
        }
    }

    /// 列ラベル指定でセルを取得。範囲外は空セル
    pub fn get(&self, col: &str) -> &CellValue {
        column_index(col)
            .and_then(|i| self.cells.get(i))
            .unwrap_or(&EMPTY_CELL)
    }

    /// (列ラベル, セル値) の列順イテレータ
    pub fn iter(&self) -> impl Iterator<Item = (ColumnId, &CellValue)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (column_label(i), cell))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
