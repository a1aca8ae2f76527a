use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("サーバーエラー {status}: {url}")]
    Server { status: u16, url: String },

    #[error("画像ではありません (Content-Type: {content_type})")]
    NotAnImage { content_type: String },

    #[error("画像形式を判別できません: {0}")]
    UnknownImageFormat(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("リサイズ実行エラー: {0}")]
    Resize(String),

    #[error(transparent)]
    Common(#[from] member_photos_common::Error),
}

pub type Result<T> = std::result::Result<T, PhotoError>;
