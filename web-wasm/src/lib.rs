//! Laundry Advisor Web App (Leptos + WASM)

mod app;
mod components;
mod api;
mod controller;

use wasm_bindgen::prelude::*;
use leptos::prelude::*;
use laundry_advisor_common::EndpointConfig;
use crate::app::App;
use crate::components::config_error::ConfigError;

/// ビルド時に埋め込むエンドポイントURL
const BACKEND_URL: Option<&str> = option_env!("LAUNDRY_BACKEND_URL");

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // 設定が無ければアプリを起動しない
    match EndpointConfig::from_optional(BACKEND_URL) {
        Ok(config) => {
            leptos::mount::mount_to_body(move || view! { <App config=config /> });
        }
        Err(e) => {
            let message = e.to_string();
            web_sys::console::error_1(&JsValue::from_str(&message));
            leptos::mount::mount_to_body(move || view! { <ConfigError message=message /> });
        }
    }
}
