//! フッターコンポーネント

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-content">
                <span>"© 2025 nerdyStuff"</span>
                <a href="https://www.nerdystuff.xyz" target="_blank" rel="noopener noreferrer">"About us"</a>
                <a href="https://www.nerdystuff.xyz/pages/contact-us" target="_blank" rel="noopener noreferrer">"Contact"</a>
                <a href="https://buymeacoffee.com/nerdystuff" target="_blank" rel="noopener noreferrer" class="coffee-link">
                    "☕️ Buy me a coffee"
                </a>
            </div>
        </footer>
    }
}
