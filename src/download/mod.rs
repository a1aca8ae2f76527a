//! 写真ダウンロードモジュール
//!
//! 1件ずつ順番に取得し、リクエスト間には必ず `Throttle` で間隔を空ける。
//! 個別の失敗はサマリーに記録して処理を続行する。

pub mod metadata;

use crate::archive::photo_path;
use crate::error::{PhotoError, Result};
use crate::planner::PhotoTask;
use crate::report::{ErrorReason, ReportEntry};
use crate::throttle::Throttle;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use metadata::{save_metadata, Provenance};
use reqwest::header::CONTENT_TYPE;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct DownloadOptions {
    pub outdir: PathBuf,
    pub metadata_dir: PathBuf,
    /// リクエスト間の最小間隔
    pub delay: Duration,
    /// テストモード: 取得も保存もしない
    pub test_mode: bool,
    pub provenance: Provenance,
    pub show_progress: bool,
}

#[derive(Debug)]
pub struct DownloadFailure {
    pub task: PhotoTask,
    pub error: PhotoError,
}

#[derive(Debug, Default)]
pub struct DownloadSummary {
    pub downloaded: Vec<String>,
    /// 保存済みのためスキップ
    pub skipped: Vec<String>,
    /// テストモードで取得しなかった
    pub dry_run: Vec<String>,
    pub failures: Vec<DownloadFailure>,
}

impl DownloadSummary {
    /// 失敗をレポート行に変換
    pub fn failure_entries(&self) -> Vec<ReportEntry> {
        self.failures
            .iter()
            .map(|f| {
                ReportEntry::new(ErrorReason::DownloadFailed, f.error.to_string(), f.task.member.clone())
                    .with_bioguide_id(f.task.bioguide_id.clone())
            })
            .collect()
    }
}

/// `Content-Type` が画像か（パラメータ部分は無視）
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|mime| mime.trim().to_ascii_lowercase())
        .is_some_and(|mime| mime.starts_with("image/"))
}

/// 1ファイルをダウンロードして保存
///
/// 画像以外の応答は保存しない。一時ファイルに書いてからリネームする。
pub async fn download_file(client: &reqwest::Client, url: &str, outfile: &Path) -> Result<()> {
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(PhotoError::Server {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if !is_image_content_type(&content_type) {
        return Err(PhotoError::NotAnImage { content_type });
    }

    let bytes = resp.bytes().await?;
    let format = image::guess_format(&bytes)
        .map_err(|e| PhotoError::UnknownImageFormat(e.to_string()))?;
    debug!(url = %url, ?format, size = bytes.len(), "received image");

    if let Some(parent) = outfile.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let partial = outfile.with_extension("part");
    if let Err(e) = std::fs::write(&partial, &bytes).and_then(|()| std::fs::rename(&partial, outfile)) {
        std::fs::remove_file(&partial).ok();
        return Err(e.into());
    }

    Ok(())
}

/// 写真とメタデータを保存
///
/// メタデータを書けなければ写真も削除する（次回実行で再取得させる）。
async fn archive_photo(
    client: &reqwest::Client,
    task: &PhotoTask,
    filename: &Path,
    options: &DownloadOptions,
) -> Result<()> {
    download_file(client, &task.image_url, filename).await?;

    if let Err(e) = save_metadata(&options.metadata_dir, &task.bioguide_id, &options.provenance) {
        std::fs::remove_file(filename).ok();
        return Err(e);
    }

    Ok(())
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    let target = if visible {
        ProgressDrawTarget::stderr()
    } else {
        ProgressDrawTarget::hidden()
    };
    let pb = ProgressBar::with_draw_target(Some(len as u64), target);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}") {
        pb.set_style(style);
    }
    pb
}

/// 写真を順番にダウンロード
pub async fn download_photos(
    client: &reqwest::Client,
    tasks: &[PhotoTask],
    options: &DownloadOptions,
) -> Result<DownloadSummary> {
    std::fs::create_dir_all(&options.outdir)?;

    let mut throttle = Throttle::new(options.delay);
    let mut summary = DownloadSummary::default();
    let pb = progress_bar(tasks.len(), options.show_progress);

    for task in tasks {
        pb.set_message(task.bioguide_id.clone());
        let filename = photo_path(&options.outdir, &task.bioguide_id);

        if filename.is_file() {
            debug!(path = %filename.display(), "image already exists");
            summary.skipped.push(task.bioguide_id.clone());
        } else if options.test_mode {
            info!(bioguide = %task.bioguide_id, url = %task.image_url, "test mode, not downloading");
            summary.dry_run.push(task.bioguide_id.clone());
        } else {
            throttle.pause().await;
            match archive_photo(client, task, &filename, options).await {
                Ok(()) => {
                    info!(bioguide = %task.bioguide_id, path = %filename.display(), "saved photo");
                    summary.downloaded.push(task.bioguide_id.clone());
                }
                Err(error) => {
                    warn!(bioguide = %task.bioguide_id, url = %task.image_url, "image not available: {}", error);
                    summary.failures.push(DownloadFailure {
                        task: task.clone(),
                        error,
                    });
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    info!(
        downloaded = summary.downloaded.len(),
        skipped = summary.skipped.len(),
        failed = summary.failures.len(),
        "download finished"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_content_type() {
        assert!(is_image_content_type("image/jpeg"));
        assert!(is_image_content_type("image/png"));
        assert!(is_image_content_type("Image/JPEG; charset=binary"));
        assert!(!is_image_content_type("text/html"));
        assert!(!is_image_content_type("text/html; charset=utf-8"));
        assert!(!is_image_content_type(""));
    }
}
