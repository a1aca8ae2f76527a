use crate::fetch::CURRENT_CONGRESS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "member-photos")]
#[command(about = "GPO Member Guideから議員写真を取得し、Bioguide IDで保存する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 取得・照合・ダウンロードを一括実行
    Run {
        /// 議会期（例: 116, 117, 118）
        #[arg(short = 'n', long, default_value_t = CURRENT_CONGRESS)]
        congress: u32,

        /// 写真の保存先
        #[arg(short, long, default_value = "congress/original")]
        outdir: PathBuf,

        /// リクエスト間隔（秒、省略時は設定値）
        #[arg(short, long, value_name = "SECONDS")]
        delay: Option<u64>,

        /// テストモード（画像を保存しない）
        #[arg(short, long)]
        test: bool,

        /// 歴代議員データを取得しない
        #[arg(long)]
        current_only: bool,

        /// エラーレポートの出力先
        #[arg(long, default_value = "errors.json")]
        errors: PathBuf,

        /// メタデータYAMLの保存先
        #[arg(long, default_value = "congress/metadata")]
        metadata_dir: PathBuf,

        /// ダウンロード後に実行するリサイズコマンド
        #[arg(long)]
        resize: Option<String>,
    },

    /// 照合のみ実行し、Bioguide ID → 画像URLの一覧を出力
    Match {
        /// 議会期
        #[arg(short = 'n', long, default_value_t = CURRENT_CONGRESS)]
        congress: u32,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 歴代議員データを取得しない
        #[arg(long)]
        current_only: bool,

        /// エラーレポートの出力先
        #[arg(long, default_value = "errors.json")]
        errors: PathBuf,

        /// 保存済みGetMembersレスポンス（指定時はAPIを呼ばない）
        #[arg(long)]
        members_file: Option<PathBuf>,

        /// 保存済みlegislators JSON（指定時はダウンロードしない）
        #[arg(long)]
        legislators_file: Option<PathBuf>,
    },

    /// 保存済み写真の情報を表示
    Archive {
        /// 写真の保存先
        #[arg(short, long, default_value = "congress/original")]
        outdir: PathBuf,

        /// メタデータYAMLの保存先
        #[arg(long, default_value = "congress/metadata")]
        metadata_dir: PathBuf,

        /// 1件ずつ表示
        #[arg(short, long)]
        list: bool,
    },

    /// 設定を表示/編集
    Config {
        /// User-Agentを設定
        #[arg(long)]
        set_user_agent: Option<String>,

        /// リクエスト間隔（秒）を設定
        #[arg(long)]
        set_delay: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
