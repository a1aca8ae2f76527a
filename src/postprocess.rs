//! 実行後処理
//!
//! エラーレポートを先に書き出し、その後でリサイズを実行する。
//! リサイズが失敗してもレポートは残る。

use crate::error::Result;
use crate::report::ErrorReport;
use crate::resize::run_resize;
use std::path::Path;
use tracing::warn;

/// レポート書き出し → リサイズ
///
/// レポートを書き出した場合は `true` を返す。
pub fn finish_run(report: &ErrorReport, errors_path: &Path, resize_command: Option<&str>) -> Result<bool> {
    let written = report.write(errors_path)?;

    if let Some(command) = resize_command {
        if let Err(e) = run_resize(command) {
            warn!("resize failed: {}", e);
            return Err(e);
        }
    }

    Ok(written)
}
