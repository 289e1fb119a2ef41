use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "yupacket")]
#[command(about = "EC注文エクスポート → ゆうパケット発送マニフェスト変換ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 注文Excelを変換してマニフェストを出力
    Convert {
        /// 注文エクスポートのExcelファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ディレクトリ（デフォルト: 入力ファイルのディレクトリ）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 読み込むシート名（デフォルト: 先頭シート）
        #[arg(long)]
        sheet: Option<String>,
    },

    /// 変換結果を確認（ファイルは書き出さない）
    Inspect {
        /// 注文エクスポートのExcelファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 読み込むシート名（デフォルト: 先頭シート）
        #[arg(long)]
        sheet: Option<String>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定（ご依頼主情報）を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// ご依頼主名を設定
        #[arg(long)]
        set_sender_name: Option<String>,

        /// ご依頼主郵便番号を設定
        #[arg(long)]
        set_sender_zip: Option<String>,

        /// ご依頼主住所を設定
        #[arg(long)]
        set_sender_address: Option<String>,

        /// ご依頼主電話番号を設定
        #[arg(long)]
        set_sender_phone: Option<String>,
    },
}
