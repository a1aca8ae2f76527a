//! データ取得モジュール
//!
//! - GPO Pictorial API: 議会期ごとの議員エントリ
//! - congress-legislators: 現職（＋任意で歴代）議員データ

use crate::config::Config;
use crate::error::{PhotoError, Result};
use member_photos_common::{parse_legislators, parse_members_pictorial, Legislator, PictorialMember};
use tracing::info;

/// 現在の議会期
pub const CURRENT_CONGRESS: u32 = 118;

/// 取得元サーバー向けHTTPクライアント
pub struct GuideClient {
    client: reqwest::Client,
    pictorial_base_url: String,
    legislators_current_url: String,
    legislators_historical_url: String,
}

impl GuideClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            pictorial_base_url: config.pictorial_base_url.trim_end_matches('/').to_string(),
            legislators_current_url: config.legislators_current_url.clone(),
            legislators_historical_url: config.legislators_historical_url.clone(),
        })
    }

    /// 内部のreqwestクライアント（写真ダウンロードで共用）
    pub fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// 指定議会期の上院・下院議員エントリを取得
    ///
    /// API仕様: https://pictorialapi.gpo.gov/index.html
    pub async fn get_members_pictorial(&self, congress: u32) -> Result<Vec<PictorialMember>> {
        let url = format!(
            "{}/api/GuideMember/GetMembers/{}",
            self.pictorial_base_url, congress
        );
        let body = self.get_text(&url).await?;
        let members = parse_members_pictorial(&body)?;
        info!(congress, count = members.len(), "fetched pictorial members");
        Ok(members)
    }

    /// congress-legislatorsの議員データを取得
    ///
    /// `include_historical` で歴代議員も追加する（ダウンロード量は大きく増える）。
    pub async fn get_legislators(&self, include_historical: bool) -> Result<Vec<Legislator>> {
        let mut legislators = parse_legislators(&self.get_text(&self.legislators_current_url).await?)?;
        info!(count = legislators.len(), "fetched current legislators");

        if include_historical {
            let historical =
                parse_legislators(&self.get_text(&self.legislators_historical_url).await?)?;
            info!(count = historical.len(), "fetched historical legislators");
            legislators.extend(historical);
        }

        Ok(legislators)
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        info!(url = %url, "GET");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(PhotoError::Server {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.text().await?)
    }
}
