//! リクエスト間隔制御モジュール
//!
//! 外部サービスへのリクエスト開始間隔を最小値以上に保つ。

use std::time::Duration;
use tokio::time::Instant;
use tracing::info;

#[derive(Debug)]
pub struct Throttle {
    min_interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: None,
        }
    }

    /// 前回から `min_interval` 未満なら残り時間だけ待機
    ///
    /// 初回は待機しない。戻り時刻を次回の基準にする。
    pub async fn pause(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                info!(seconds = wait.as_secs_f64(), "sleeping before next request");
                tokio::time::sleep(wait).await;
            }
        }
        self.last = Some(Instant::now());
    }
}
