//! 解析エンドポイント設定
//!
//! 起動時に一度だけ検証し、以降は `EndpointConfig` を渡して使う。

use crate::error::{Error, Result};

/// エンドポイントURLを指定する環境変数名
pub const BACKEND_URL_VAR: &str = "LAUNDRY_BACKEND_URL";

/// 解析APIのパス
pub const ANALYZE_PATH: &str = "/analyze-label";

/// 検証済みのエンドポイント設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    base_url: String,
}

impl EndpointConfig {
    /// URL文字列を検証
    ///
    /// 前後の空白と末尾の `/` は除去する。
    /// 空、または http/https 以外のスキームはエラー。
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::Config(format!("{} is empty", BACKEND_URL_VAR)));
        }

        let scheme_ok = ["http://", "https://"]
            .iter()
            .any(|s| trimmed.len() > s.len() && trimmed.to_ascii_lowercase().starts_with(s));
        if !scheme_ok {
            return Err(Error::Config(format!(
                "{} must be an http(s) URL: {}",
                BACKEND_URL_VAR, trimmed
            )));
        }

        Ok(Self { base_url: trimmed.to_string() })
    }

    /// 値が無い場合は致命的な設定エラー
    pub fn from_optional(raw: Option<&str>) -> Result<Self> {
        match raw {
            Some(value) => Self::parse(value),
            None => Err(Error::Config(format!(
                "{} is not set in environment variables",
                BACKEND_URL_VAR
            ))),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST` 先のURL
    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.base_url, ANALYZE_PATH)
    }
}
