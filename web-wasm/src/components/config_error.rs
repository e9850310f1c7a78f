//! 設定エラー画面
//!
//! エンドポイントURLが無い・不正な場合はアプリ本体の代わりにこれを表示する。

use leptos::prelude::*;

#[component]
pub fn ConfigError(message: String) -> impl IntoView {
    view! {
        <div class="app-container">
            <div class="error-message config-error">
                <strong>"Configuration error:"</strong> " " {message}
                <br />
                <small>"Set LAUNDRY_BACKEND_URL when building the web app (e.g. LAUNDRY_BACKEND_URL=http://192.168.0.10:8000 trunk build)."</small>
            </div>
        </div>
    }
}
