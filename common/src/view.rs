//! 表示判定
//!
//! セッション状態から何を描画するかを決める純粋関数。
//! Leptosコンポーネントとターミナル表示の両方がこれを使う。

use crate::parser::AnalysisContent;
use crate::session::{RequestPhase, UploadSession};

/// バナー表示時の対処ヒント
pub const REMEDIATION_HINT: &str =
    "Please make sure the backend server is started with the host flag and LAUNDRY_BACKEND_URL is set properly.";

/// プレビュー画像上のオーバーレイ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Spinner,
    Check,
    Cross,
    ErrorText(String),
}

/// セッションの表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionView {
    /// 何も選択されていない
    Empty,
    /// プレビュー無しで失敗した場合のインラインエラー
    Banner { message: String },
    /// プレビュー画像と、その上のオーバーレイ・解析内容
    Preview {
        data_url: String,
        blurred: bool,
        overlay: Option<Overlay>,
        content: Option<AnalysisContent>,
    },
}

impl SessionView {
    pub fn from_session(session: &UploadSession) -> Self {
        let Some(data_url) = session.preview() else {
            return match session.error() {
                Some(message) => SessionView::Banner { message: message.to_string() },
                None => SessionView::Empty,
            };
        };

        let overlay = match session.phase() {
            RequestPhase::Loading => Some(Overlay::Spinner),
            RequestPhase::Success => Some(Overlay::Check),
            RequestPhase::Rejected => Some(Overlay::Cross),
            RequestPhase::Idle | RequestPhase::Settled => {
                session.error().map(|e| Overlay::ErrorText(e.to_string()))
            }
        };

        let content = session.analysis().map(AnalysisContent::classify);
        let blurred = content.is_some() || session.phase().is_transient();

        SessionView::Preview {
            data_url: data_url.to_string(),
            blurred,
            overlay,
            content,
        }
    }
}

const MOBILE_PATTERNS: &[&str] = &["mobile", "android", "ios", "iphone", "ipad", "ipod", "windows phone"];

/// 起動時に一度だけ判定する端末能力
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceCapabilities {
    /// カメラ撮影ボタンを出すか
    pub is_mobile: bool,
}

impl DeviceCapabilities {
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();
        Self {
            is_mobile: MOBILE_PATTERNS.iter().any(|p| ua.contains(p)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::AnalyzeOutcome;
    use crate::types::AnalysisRow;

    const PREVIEW: &str = "data:image/jpeg;base64,/9j/";

    fn session_with_preview() -> (UploadSession, crate::session::UploadToken) {
        let mut session = UploadSession::new();
        let token = session.begin_upload();
        session.set_preview(token, PREVIEW.to_string());
        (session, token)
    }

    #[test]
    fn test_view_empty() {
        assert_eq!(SessionView::from_session(&UploadSession::new()), SessionView::Empty);
    }

    #[test]
    fn test_view_banner_without_preview() {
        let mut session = UploadSession::new();
        let token = session.begin_upload();
        session.apply_outcome(token, AnalyzeOutcome::Failed { message: "connection refused".into() });
        assert_eq!(
            SessionView::from_session(&session),
            SessionView::Banner { message: "connection refused".into() }
        );
    }

    #[test]
    fn test_view_loading_spinner() {
        let (session, _) = session_with_preview();
        assert_eq!(
            SessionView::from_session(&session),
            SessionView::Preview {
                data_url: PREVIEW.into(),
                blurred: true,
                overlay: Some(Overlay::Spinner),
                content: None,
            }
        );
    }

    #[test]
    fn test_view_success_check_then_table() {
        let (mut session, token) = session_with_preview();
        let swap = session
            .apply_outcome(token, AnalyzeOutcome::Accepted { analysis: "## Iron\n• Low heat".into() })
            .unwrap();

        match SessionView::from_session(&session) {
            SessionView::Preview { overlay, content, blurred, .. } => {
                assert_eq!(overlay, Some(Overlay::Check));
                assert!(content.is_none());
                assert!(blurred);
            }
            other => panic!("Expected Preview, got {:?}", other),
        }

        session.complete_swap(swap);
        match SessionView::from_session(&session) {
            SessionView::Preview { overlay, content, blurred, .. } => {
                assert!(overlay.is_none());
                assert!(blurred);
                assert_eq!(
                    content,
                    Some(AnalysisContent::Table(vec![AnalysisRow::new("Iron", "Low heat")]))
                );
            }
            other => panic!("Expected Preview, got {:?}", other),
        }
    }

    #[test]
    fn test_view_rejected_cross_then_error_box() {
        let (mut session, token) = session_with_preview();
        let swap = session
            .apply_outcome(token, AnalyzeOutcome::Rejected { message: "Not a care label".into() })
            .unwrap();

        match SessionView::from_session(&session) {
            SessionView::Preview { overlay, .. } => assert_eq!(overlay, Some(Overlay::Cross)),
            other => panic!("Expected Preview, got {:?}", other),
        }

        session.complete_swap(swap);
        match SessionView::from_session(&session) {
            SessionView::Preview { content, .. } => {
                assert_eq!(content, Some(AnalysisContent::ErrorMessage("Not a care label".into())));
            }
            other => panic!("Expected Preview, got {:?}", other),
        }
    }

    #[test]
    fn test_view_error_text_over_sharp_preview() {
        let (mut session, token) = session_with_preview();
        session.apply_outcome(token, AnalyzeOutcome::Failed { message: "too large".into() });
        assert_eq!(
            SessionView::from_session(&session),
            SessionView::Preview {
                data_url: PREVIEW.into(),
                blurred: false,
                overlay: Some(Overlay::ErrorText("too large".into())),
                content: None,
            }
        );
    }

    #[test]
    fn test_device_capabilities_mobile() {
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
        assert!(DeviceCapabilities::from_user_agent(iphone).is_mobile);

        let android = "Mozilla/5.0 (Linux; Android 14; Pixel 8) Mobile Safari/537.36";
        assert!(DeviceCapabilities::from_user_agent(android).is_mobile);
    }

    #[test]
    fn test_device_capabilities_desktop() {
        let desktop = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0 Safari/537.36";
        assert!(!DeviceCapabilities::from_user_agent(desktop).is_mobile);
    }
}
