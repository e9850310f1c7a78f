//! アップロードセッションの状態機械
//!
//! ファイル選択 → 解析リクエスト → 一時表示 → 結果表示 の流れを
//! 同期的な遷移として表現する。非同期処理（ファイル読込・HTTP・タイマー）は
//! 各フロントエンドのドライバが担当し、結果をトークン付きでここに戻す。
//!
//! 新しいアップロードが始まると以前のトークンは古くなり、
//! 古いトークンのイベントは全て破棄される。

use std::time::Duration;

use crate::parser::format_error_markdown;
use crate::response::AnalyzeOutcome;

/// valid=true時のチェック表示時間
pub const SUCCESS_DISPLAY_DELAY: Duration = Duration::from_millis(1000);

/// valid=false時のバツ表示時間
pub const REJECTED_DISPLAY_DELAY: Duration = Duration::from_millis(1500);

/// アップロード毎に発行される単調増加トークン
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UploadToken(u64);

impl UploadToken {
    fn next(self) -> Self {
        UploadToken(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// リクエストの段階
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestPhase {
    #[default]
    Idle,
    Loading,
    /// 成功チェック表示中（一時）
    Success,
    /// 却下バツ表示中（一時）
    Rejected,
    /// 結果またはエラーが確定
    Settled,
}

impl RequestPhase {
    /// プレビュー枠のCSSクラス名
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestPhase::Idle => "idle",
            RequestPhase::Loading => "loading",
            RequestPhase::Success => "success",
            RequestPhase::Rejected => "rejected",
            RequestPhase::Settled => "settled",
        }
    }

    /// ローディング・一時表示のいずれかが有効か
    pub fn is_transient(&self) -> bool {
        matches!(self, RequestPhase::Loading | RequestPhase::Success | RequestPhase::Rejected)
    }
}

/// 一時表示の後に行う内容の差し替え
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledSwap {
    pub token: UploadToken,
    pub delay: Duration,
    pub content: String,
}

/// 1回のアップロードから結果表示までの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSession {
    token: UploadToken,
    preview: Option<String>,
    phase: RequestPhase,
    analysis: Option<String>,
    error: Option<String>,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイル選択時のリセット
    ///
    /// 新しいトークンを発行し、エラー・解析結果を消去してローディングに入る。
    /// プレビューは新しい画像が読み込まれるまで前のものを残す。
    pub fn begin_upload(&mut self) -> UploadToken {
        self.token = self.token.next();
        self.phase = RequestPhase::Loading;
        self.analysis = None;
        self.error = None;
        tracing::debug!(token = self.token.value(), "upload started");
        self.token
    }

    /// トークンが最新のアップロードのものか
    pub fn is_current(&self, token: UploadToken) -> bool {
        token == self.token
    }

    /// プレビュー（Data URL）の読込完了
    ///
    /// 古いトークンの場合は無視して `false` を返す。
    pub fn set_preview(&mut self, token: UploadToken, data_url: String) -> bool {
        if !self.accepts(token, "preview") {
            return false;
        }
        self.preview = Some(data_url);
        true
    }

    /// リクエスト結果を反映
    ///
    /// 却下・成功時は一時表示に入り、遅延後の差し替えを返す。
    /// 失敗時はエラーを確定させ、差し替えは無い。
    pub fn apply_outcome(&mut self, token: UploadToken, outcome: AnalyzeOutcome) -> Option<ScheduledSwap> {
        if !self.accepts(token, "outcome") || self.phase != RequestPhase::Loading {
            return None;
        }

        match outcome {
            AnalyzeOutcome::Failed { message } => {
                tracing::warn!(token = token.value(), %message, "analysis failed");
                self.phase = RequestPhase::Settled;
                self.error = Some(message);
                None
            }
            AnalyzeOutcome::Rejected { message } => {
                tracing::debug!(token = token.value(), "image rejected");
                self.phase = RequestPhase::Rejected;
                Some(ScheduledSwap {
                    token,
                    delay: REJECTED_DISPLAY_DELAY,
                    content: format_error_markdown(&message),
                })
            }
            AnalyzeOutcome::Accepted { analysis } => {
                tracing::debug!(token = token.value(), "analysis accepted");
                self.phase = RequestPhase::Success;
                Some(ScheduledSwap {
                    token,
                    delay: SUCCESS_DISPLAY_DELAY,
                    content: analysis,
                })
            }
        }
    }

    /// 遅延後の差し替え
    ///
    /// 一時表示を消し、解析テキストを設定する。古いトークンの場合は無視。
    pub fn complete_swap(&mut self, swap: ScheduledSwap) -> bool {
        if !self.accepts(swap.token, "swap") {
            return false;
        }
        if !matches!(self.phase, RequestPhase::Success | RequestPhase::Rejected) {
            return false;
        }
        self.phase = RequestPhase::Settled;
        self.analysis = Some(swap.content);
        true
    }

    fn accepts(&self, token: UploadToken, event: &str) -> bool {
        if self.is_current(token) {
            return true;
        }
        tracing::debug!(
            stale = token.value(),
            current = self.token.value(),
            event,
            "discarding stale event"
        );
        false
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    /// 空文字の解析結果は未設定と同じ扱い
    pub fn analysis(&self) -> Option<&str> {
        self.analysis.as_deref().filter(|a| !a.is_empty())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == RequestPhase::Loading
    }
}
