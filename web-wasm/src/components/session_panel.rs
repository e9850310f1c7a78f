//! セッション表示コンポーネント
//!
//! プレビュー画像、ローディング/チェック/バツのオーバーレイ、解析結果を描画する。
//! 何を出すかの判定は `SessionView` に任せる。

use leptos::prelude::*;
use laundry_advisor_common::{Overlay, SessionView, UploadSession};
use crate::components::analysis_table::AnalysisView;
use crate::components::error_banner::ErrorBanner;

#[component]
pub fn SessionPanel(session: RwSignal<UploadSession>) -> impl IntoView {
    let view_state = Memo::new(move |_| session.with(SessionView::from_session));

    move || match view_state.get() {
        SessionView::Empty => ().into_any(),
        SessionView::Banner { message } => view! { <ErrorBanner message=message /> }.into_any(),
        SessionView::Preview { data_url, blurred, overlay, content } => view! {
            <div class=move || format!("image-preview phase-{}", session.with(|s| s.phase().as_str()))>
                <img
                    src=data_url
                    alt="Laundry care label"
                    class=if blurred { "blurred" } else { "" }
                />
                {overlay.map(|overlay| view! {
                    <div class="image-overlay">
                        <OverlayIndicator overlay=overlay />
                    </div>
                })}
                {content.map(|content| view! {
                    <div class="analysis-overlay">
                        <AnalysisView content=content />
                    </div>
                })}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn OverlayIndicator(overlay: Overlay) -> impl IntoView {
    match overlay {
        Overlay::Spinner => view! { <div class="loading" /> }.into_any(),
        Overlay::Check => view! { <div class="success-check" /> }.into_any(),
        Overlay::Cross => view! { <div class="error-cross" /> }.into_any(),
        Overlay::ErrorText(message) => view! { <div class="error-message">{message}</div> }.into_any(),
    }
}
