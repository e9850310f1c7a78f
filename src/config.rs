use crate::error::{AdvisorError, Result};
use laundry_advisor_common::{EndpointConfig, BACKEND_URL_VAR};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AdvisorError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("laundry-advisor").join("config.json"))
    }

    /// 起動時に一度だけエンドポイントを確定させる
    ///
    /// 優先順位: `--endpoint` > 環境変数 > 設定ファイル
    pub fn resolve_endpoint(&self, flag: Option<&str>) -> Result<EndpointConfig> {
        let env = std::env::var(BACKEND_URL_VAR).ok();
        resolve_endpoint_from(flag, env.as_deref(), self.endpoint.as_deref())
    }

    /// 検証してから保存する
    pub fn set_endpoint(&mut self, url: &str) -> Result<()> {
        let endpoint = EndpointConfig::parse(url)?;
        self.endpoint = Some(endpoint.base_url().to_string());
        self.save()
    }
}

pub fn resolve_endpoint_from(
    flag: Option<&str>,
    env: Option<&str>,
    file: Option<&str>,
) -> Result<EndpointConfig> {
    let raw = present(flag)
        .or(present(env))
        .or(present(file))
        .ok_or(AdvisorError::MissingEndpoint)?;
    let endpoint = EndpointConfig::parse(raw)?;
    tracing::debug!(endpoint = endpoint.base_url(), "endpoint resolved");
    Ok(endpoint)
}

/// 空文字は未設定と同じ扱い
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_prefers_flag() {
        let endpoint = resolve_endpoint_from(
            Some("http://flag:8000"),
            Some("http://env:8000"),
            Some("http://file:8000"),
        )
        .unwrap();
        assert_eq!(endpoint.base_url(), "http://flag:8000");
    }

    #[test]
    fn test_resolve_env_over_file() {
        let endpoint = resolve_endpoint_from(None, Some("http://env:8000"), Some("http://file:8000")).unwrap();
        assert_eq!(endpoint.base_url(), "http://env:8000");
    }

    #[test]
    fn test_resolve_blank_env_falls_back_to_file() {
        let endpoint = resolve_endpoint_from(None, Some(""), Some("http://file:8000")).unwrap();
        assert_eq!(endpoint.base_url(), "http://file:8000");

        let endpoint = resolve_endpoint_from(None, Some("  "), Some("http://file:8000")).unwrap();
        assert_eq!(endpoint.base_url(), "http://file:8000");
    }

    #[test]
    fn test_resolve_all_blank_is_missing() {
        let result = resolve_endpoint_from(Some(""), Some(" "), Some(""));
        assert!(matches!(result, Err(AdvisorError::MissingEndpoint)));
    }

    #[test]
    fn test_resolve_missing_is_error() {
        let result = resolve_endpoint_from(None, None, None);
        assert!(matches!(result, Err(AdvisorError::MissingEndpoint)));
    }

    #[test]
    fn test_resolve_invalid_is_config_error() {
        let result = resolve_endpoint_from(Some("not-a-url"), None, None);
        assert!(matches!(result, Err(AdvisorError::Config(_))));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            endpoint: Some("http://localhost:8000".into()),
            timeout_seconds: 30,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.endpoint.as_deref(), Some("http://localhost:8000"));
        assert_eq!(loaded.timeout_seconds, 30);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert!(config.endpoint.is_none());
        assert_eq!(config.timeout_seconds, 120);
    }

    #[test]
    fn test_load_partial_file_defaults_timeout() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"endpoint": "https://api.example.com"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.endpoint.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.timeout_seconds, 120);
    }
}
