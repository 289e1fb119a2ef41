//! yupacket-manifest
//!
//! EC注文のExcelエクスポートを読み込み、同一宛先の注文を統合した
//! ゆうパケット発送マニフェスト（ラベル取込形式のExcel）を生成する。
//!
//! コアの変換は [`transform::process`]: 生の行列からマニフェスト行・
//! 処理ログ・統計を返す純粋関数で、ファイルI/OとCLIはその外側にある。

pub mod cli;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod transform;
pub mod workbook;

pub use config::{Config, SenderProfile};
pub use error::{ManifestError, Result};
pub use transform::{process, LogEntry, LogLevel, ProcessStats, TransformOutput};
