use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("Excel読み込みエラー: {0}")]
    WorkbookRead(String),

    #[error("シートが見つかりません: {name}（利用可能: {available}）")]
    SheetNotFound { name: String, available: String },

    #[error("データが不足しています（{0}行）: ヘッダー行とデータ行が必要です")]
    TooFewRows(usize),

    #[error("ヘッダー行が見つかりません（先頭20行を走査）: 注文ID列と電話番号列を含む行が必要です")]
    HeaderNotFound,

    #[error("必須列が見つかりません（{layout}）: {fields}")]
    MissingColumns { layout: String, fields: String },

    #[error("出力対象の注文がありません: 全データ行がスキップされました")]
    NoShipments,

    #[error("Excel生成エラー: {0}")]
    ExcelWrite(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ManifestError>;
