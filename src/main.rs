use clap::Parser;
use member_photos::{archive, cli, config, download, error, fetch, planner, postprocess, report};
use member_photos_common::{count_by_chamber, legislators_from_file, members_from_file};
use cli::{Cli, Commands};
use config::Config;
use download::{metadata::Provenance, DownloadOptions};
use error::Result;
use fetch::GuideClient;
use report::ErrorReport;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Run { congress, outdir, delay, test, current_only, errors, metadata_dir, resize: resize_command } => {
            println!("📸 member-photos - 議員写真取得（第{}議会）\n", congress);
            let client = GuideClient::new(&config)?;

            // 1. データ取得
            println!("[1/4] 議員データを取得中...");
            let legislators = client.get_legislators(!current_only).await?;
            let members = client.get_members_pictorial(congress).await?;
            let (senators, representatives) = count_by_chamber(&members);
            println!(
                "✔ Pictorial {}件（上院{} / 下院{}）、legislators {}件\n",
                members.len(), senators, representatives, legislators.len()
            );

            // 2. 照合
            println!("[2/4] Bioguide IDを照合中...");
            let plan = planner::plan_downloads(&members, &legislators);
            println!("✔ {}件照合、{}件エラー\n", plan.tasks.len(), plan.errors.len());

            // 3. ダウンロード
            println!("[3/4] 写真をダウンロード中...{}", if test { " (テストモード)" } else { "" });
            let options = DownloadOptions {
                outdir,
                metadata_dir,
                delay: delay.map(Duration::from_secs).unwrap_or_else(|| config.delay()),
                test_mode: test,
                provenance: Provenance {
                    name: config.metadata_name.clone(),
                    link: config.metadata_link.clone(),
                },
                show_progress: !cli.verbose,
            };
            let summary = download::download_photos(client.http(), &plan.tasks, &options).await?;
            println!(
                "✔ Downloaded {} member photos.（既存{}件、失敗{}件、テストモード{}件）\n",
                summary.downloaded.len(),
                summary.skipped.len(),
                summary.failures.len(),
                summary.dry_run.len()
            );

            // 4. 後処理・レポート
            println!("[4/4] 後処理中...");
            let mut report = ErrorReport::new(congress);
            report.extend(plan.errors);
            report.extend(summary.failure_entries());
            let resize_command = resize_command.filter(|_| !summary.downloaded.is_empty());
            let written = postprocess::finish_run(&report, &errors, resize_command.as_deref())?;
            if written {
                println!("⚠ {}件の議員でエラー。詳細: {}", report.len(), errors.display());
            }
            if resize_command.is_some() {
                println!("✔ リサイズ完了");
            }

            println!("\n✅ 完了");
        }

        Commands::Match { congress, output, current_only, errors, members_file, legislators_file } => {
            println!("🔍 member-photos - 照合のみ（第{}議会）\n", congress);
            let client = GuideClient::new(&config)?;

            let legislators = match legislators_file {
                Some(path) => legislators_from_file(&path)?,
                None => client.get_legislators(!current_only).await?,
            };
            let members = match members_file {
                Some(path) => members_from_file(&path)?,
                None => client.get_members_pictorial(congress).await?,
            };

            let plan = planner::plan_downloads(&members, &legislators);
            let json = serde_json::to_string_pretty(&plan.tasks)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ {}件を保存: {}", plan.tasks.len(), path.display());
                }
                None => println!("{}", json),
            }

            let mut report = ErrorReport::new(congress);
            report.extend(plan.errors);
            if report.write(&errors)? {
                println!("⚠ {}件の議員でエラー。詳細: {}", report.len(), errors.display());
            }
        }

        Commands::Archive { outdir, metadata_dir, list } => {
            let photos = archive::scan_archive(&outdir, &metadata_dir)?;
            let total_size: u64 = photos.iter().map(|p| p.size).sum();
            let without_metadata = photos.iter().filter(|p| !p.has_metadata).count();

            println!("アーカイブ情報:");
            println!("  パス: {}", outdir.display());
            println!("  件数: {}", photos.len());
            println!("  サイズ: {} bytes", total_size);
            println!("  メタデータなし: {}", without_metadata);

            if list {
                for photo in &photos {
                    println!(
                        "  {} {:>8} bytes{}",
                        photo.bioguide_id,
                        photo.size,
                        if photo.has_metadata { "" } else { " (メタデータなし)" }
                    );
                }
            }
        }

        Commands::Config { set_user_agent, set_delay, show } => {
            let mut config = config;

            if let Some(user_agent) = set_user_agent {
                config.set_user_agent(user_agent)?;
                println!("✔ User-Agentを設定しました");
            }

            if let Some(seconds) = set_delay {
                config.set_delay(seconds)?;
                println!("✔ リクエスト間隔を{}秒に設定しました", seconds);
            }

            if show {
                println!("設定:");
                println!("  User-Agent: {}", config.user_agent);
                println!("  Pictorial API: {}", config.pictorial_base_url);
                println!("  legislators (現職): {}", config.legislators_current_url);
                println!("  legislators (歴代): {}", config.legislators_historical_url);
                println!("  リクエスト間隔: {}秒", config.delay_seconds);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
