//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="app-logo">"🧺"</div>
            <h1>"AI Laundry Advisor " <sup class="beta-tag">"Beta"</sup></h1>
            <p class="app-description">"AI-powered laundry care decoder at your fingertips."</p>
        </header>
    }
}
