//! インラインエラーバナー（プレビュー無しで失敗した場合）

use leptos::prelude::*;
use laundry_advisor_common::REMEDIATION_HINT;

#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="error-message">
            <strong>"Error:"</strong> " " {message}
            <br />
            <small>{REMEDIATION_HINT}</small>
        </div>
    }
}
