//! リサイズ後処理（外部コマンド呼び出し）

use crate::error::{PhotoError, Result};
use std::process::Command;
use tracing::info;

/// リサイズコマンドを実行
///
/// コマンド文字列は空白区切りで、先頭をプログラム、残りを引数とする。
pub fn run_resize(command: &str) -> Result<()> {
    let mut parts = command.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| PhotoError::Resize("コマンドが空です".into()))?;

    info!(command = %command, "running resize command");
    let output = Command::new(program)
        .args(parts)
        .output()
        .map_err(|e| PhotoError::Resize(format!("{}: {}", program, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PhotoError::Resize(format!(
            "{} failed (code {:?}): {}",
            program,
            output.status.code(),
            stderr.trim()
        )));
    }

    Ok(())
}
