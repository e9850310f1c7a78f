//! 共通型定義
//!
//! 解析エンドポイントとのワイヤ形式と、表に描画する行の型

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 解析結果の1行（カテゴリ + 指示）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRow {
    pub category: String,
    pub instruction: String,
}

impl AnalysisRow {
    pub fn new(category: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            instruction: instruction.into(),
        }
    }
}

/// `POST /analyze-label` の成功レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub valid: bool,

    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,      // valid=false時の却下理由

    #[serde(default, deserialize_with = "lenient_string")]
    pub analysis: Option<String>,     // valid=true時のマークダウン
}

/// 非2xxレスポンスのボディ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "lenient_string")]
    pub detail: Option<String>,
}

/// JSの真偽判定と同じ基準でboolに変換（null/false/0/""のみ偽）
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// 文字列以外の値はJSON表現のまま文字列化する
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_response_valid() {
        let json = r###"{"valid": true, "analysis": "## Washing\n• 30°C"}"###;
        let response: AnalyzeResponse = serde_json::from_str(json).unwrap();
        assert!(response.valid);
        assert_eq!(response.analysis.as_deref(), Some("## Washing\n• 30°C"));
        assert!(response.message.is_none());
    }

    #[test]
    fn test_analyze_response_missing_fields_default() {
        let response: AnalyzeResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.valid);
        assert!(response.message.is_none());
        assert!(response.analysis.is_none());
    }

    #[test]
    fn test_analyze_response_truthy_valid() {
        let response: AnalyzeResponse = serde_json::from_str(r#"{"valid": 1}"#).unwrap();
        assert!(response.valid);

        let response: AnalyzeResponse = serde_json::from_str(r#"{"valid": ""}"#).unwrap();
        assert!(!response.valid);

        let response: AnalyzeResponse = serde_json::from_str(r#"{"valid": null}"#).unwrap();
        assert!(!response.valid);
    }

    #[test]
    fn test_analyze_response_non_string_message() {
        let response: AnalyzeResponse =
            serde_json::from_str(r#"{"valid": false, "message": 42}"#).unwrap();
        assert_eq!(response.message.as_deref(), Some("42"));
    }

    #[test]
    fn test_error_body_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "too large"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("too large"));
    }

    #[test]
    fn test_analysis_row_serialize() {
        let row = AnalysisRow::new("Wash", "Do not bleach");
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"category":"Wash","instruction":"Do not bleach"}"#);
    }
}
