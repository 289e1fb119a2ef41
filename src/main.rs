use clap::Parser;
use std::path::PathBuf;
use yupacket_manifest::cli::{Cli, Commands};
use yupacket_manifest::config::Config;
use yupacket_manifest::error::Result;
use yupacket_manifest::{transform, workbook};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { input, output, sheet } => {
            println!("📦 yupacket - 発送マニフェスト生成\n");

            // 1. 読み込み
            println!("[1/3] Excelを読み込み中...");
            let rows = workbook::reader::read_workbook(&input, sheet.as_deref())?;
            println!("✔ {}行を読み込み\n", rows.len());

            // 2. 変換
            println!("[2/3] 注文を変換中...");
            let result = transform::process(&rows)?;
            if cli.verbose {
                println!("  レイアウト: {}", result.layout);
                for (field, col) in result.column_map.entries() {
                    println!("  {} → {}列", field, col);
                }
            }
            for log in &result.logs {
                println!("  {} {}", log.level.marker(), log.message);
            }
            println!("✔ {}件の発送に変換\n", result.rows.len());

            // 3. 書き出し
            println!("[3/3] マニフェストを書き出し中...");
            let config = Config::load()?;
            let output_dir = output.unwrap_or_else(|| {
                input
                    .parent()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| PathBuf::from("."))
            });
            let file_name =
                workbook::writer::manifest_file_name(&chrono::Local::now().date_naive());
            let output_path = output_dir.join(file_name);
            workbook::writer::write_manifest(&result.rows, &config.sender, &output_path)?;
            println!("✔ 出力: {}", output_path.display());

            println!("\n✅ 完了");
        }

        Commands::Inspect { input, sheet, json } => {
            let rows = workbook::reader::read_workbook(&input, sheet.as_deref())?;
            let result = transform::process(&rows)?;

            if json {
                let summary = serde_json::json!({
                    "headerRow": result.header_row,
                    "layout": result.layout,
                    "columns": result.column_map,
                    "stats": result.stats,
                    "logs": result.logs,
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("🔍 yupacket - 変換内容の確認\n");
                println!("ヘッダー行: {}行目", result.header_row + 1);
                println!("レイアウト: {}", result.layout);
                println!("列マッピング:");
                for (field, col) in result.column_map.entries() {
                    println!("  {} → {}列", field, col);
                }
                println!("\n処理ログ:");
                for log in &result.logs {
                    println!("  {} {}", log.level.marker(), log.message);
                }
                println!("\n統計:");
                println!("  データ行: {}", result.stats.data_rows);
                println!("  有効行: {}", result.stats.valid_rows);
                println!("  発送件数: {}", result.stats.shipment_groups);
                println!("  統合行数: {}", result.stats.merged_rows);
            }
        }

        Commands::Config {
            show,
            set_sender_name,
            set_sender_zip,
            set_sender_address,
            set_sender_phone,
        } => {
            let mut config = Config::load()?;
            let mut changed = false;

            if let Some(name) = set_sender_name {
                config.sender.name = name;
                changed = true;
            }
            if let Some(zip) = set_sender_zip {
                config.sender.zip = zip;
                changed = true;
            }
            if let Some(address) = set_sender_address {
                config.sender.address = address;
                changed = true;
            }
            if let Some(phone) = set_sender_phone {
                config.sender.phone = phone;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  ご依頼主名: {}", config.sender.name);
                println!("  ご依頼主郵便番号: {}", config.sender.zip);
                println!("  ご依頼主住所: {}", config.sender.address);
                println!(
                    "  ご依頼主電話番号: {}",
                    if config.sender.phone.is_empty() {
                        "未設定"
                    } else {
                        config.sender.phone.as_str()
                    }
                );
            }
        }
    }

    Ok(())
}
