//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Format error: {0}")]
    Format(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 照合失敗の種別
///
/// どちらも致命的ではなく、呼び出し側で集約して手動確認に回す。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// 名前・議席の両方を満たす候補がない
    #[error("No Bioguide ID match found for {name}")]
    NotFound { name: String },

    /// 両方を満たす候補が複数ある
    #[error("Multiple Bioguide ID matches found for {name} ({count} candidates)")]
    Ambiguous { name: String, count: usize },
}

impl MatchError {
    /// 照合元の表示名
    pub fn name(&self) -> &str {
        match self {
            MatchError::NotFound { name } | MatchError::Ambiguous { name, .. } => name,
        }
    }
}
