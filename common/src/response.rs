//! 解析エンドポイントのレスポンス解釈
//!
//! HTTPステータスとボディから `AnalyzeOutcome` を決定する。
//! ブラウザ版とCLI版の両方がこのモジュールを通す。

use crate::types::{AnalyzeResponse, ErrorBody};

/// 例外メッセージが空の場合の既定メッセージ
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while analyzing the image";

/// message欠落時の表示（元の挙動に合わせる）
const MISSING_MESSAGE: &str = "undefined";

/// 1回の解析リクエストの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeOutcome {
    /// valid=true: 解析マークダウン
    Accepted { analysis: String },
    /// valid=false: サーバーの却下理由
    Rejected { message: String },
    /// 非2xx・通信失敗・JSON不正
    Failed { message: String },
}

impl AnalyzeOutcome {
    /// 通信レベルの失敗を結果に変換
    pub fn transport_failure(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            AnalyzeOutcome::Failed { message: GENERIC_FAILURE_MESSAGE.to_string() }
        } else {
            AnalyzeOutcome::Failed { message }
        }
    }
}

/// HTTPレスポンスを解釈
///
/// # Arguments
/// * `status` - HTTPステータスコード
/// * `status_text` - ステータス行の理由句（例: "Payload Too Large"）
/// * `body` - レスポンスボディ
pub fn interpret_response(status: u16, status_text: &str, body: &str) -> AnalyzeOutcome {
    if !(200..300).contains(&status) {
        return AnalyzeOutcome::Failed { message: server_error_message(status, status_text, body) };
    }

    match serde_json::from_str::<AnalyzeResponse>(body) {
        Ok(response) => outcome_from_response(response),
        Err(e) => {
            tracing::warn!(error = %e, "success body is not valid JSON");
            AnalyzeOutcome::transport_failure(e.to_string())
        }
    }
}

/// デコード済みの成功レスポンスを結果に変換
pub fn outcome_from_response(response: AnalyzeResponse) -> AnalyzeOutcome {
    if response.valid {
        AnalyzeOutcome::Accepted { analysis: response.analysis.unwrap_or_default() }
    } else {
        AnalyzeOutcome::Rejected {
            message: response.message.unwrap_or_else(|| MISSING_MESSAGE.to_string()),
        }
    }
}

/// 非2xxレスポンスのメッセージ
///
/// JSONボディの `detail` が空でなければそれを、
/// そうでなければ `"Server error: <status> <statusText>"` を返す。
pub fn server_error_message(status: u16, status_text: &str, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| format!("Server error: {} {}", status, status_text))
}
