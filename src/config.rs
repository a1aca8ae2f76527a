use crate::error::{PhotoError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const PICTORIAL_BASE_URL: &str = "https://pictorialapi.gpo.gov";
pub const LEGISLATORS_CURRENT_URL: &str =
    "https://theunitedstates.io/congress-legislators/legislators-current.json";
pub const LEGISLATORS_HISTORICAL_URL: &str =
    "https://theunitedstates.io/congress-legislators/legislators-historical.json";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/41.0.2228.0 Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub user_agent: String,
    pub pictorial_base_url: String,
    pub legislators_current_url: String,
    pub legislators_historical_url: String,
    /// リクエスト間の最小間隔（秒）
    pub delay_seconds: u64,
    pub timeout_seconds: u64,
    /// メタデータYAMLの `name`
    pub metadata_name: String,
    /// メタデータYAMLの `link`
    pub metadata_link: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.into(),
            pictorial_base_url: PICTORIAL_BASE_URL.into(),
            legislators_current_url: LEGISLATORS_CURRENT_URL.into(),
            legislators_historical_url: LEGISLATORS_HISTORICAL_URL.into(),
            delay_seconds: 5,
            timeout_seconds: 60,
            metadata_name: "GPO Member Guide".into(),
            metadata_link: "https://pictorial.gpo.gov".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("member-photos").join("config.json"))
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_seconds)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn set_user_agent(&mut self, user_agent: String) -> Result<()> {
        if user_agent.trim().is_empty() {
            return Err(PhotoError::Config("User-Agentが空です".into()));
        }
        self.user_agent = user_agent;
        self.save()
    }

    pub fn set_delay(&mut self, seconds: u64) -> Result<()> {
        self.delay_seconds = seconds;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.delay_seconds, 5);
        assert_eq!(config.delay(), Duration::from_secs(5));
        assert_eq!(config.pictorial_base_url, PICTORIAL_BASE_URL);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"delay_seconds": 10}"#).unwrap();
        assert_eq!(config.delay_seconds, 10);
        assert_eq!(config.timeout_seconds, 60);
        assert_eq!(config.metadata_name, "GPO Member Guide");
    }
}
