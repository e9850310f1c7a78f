//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use laundry_advisor_common::{DeviceCapabilities, EndpointConfig, UploadSession};
use crate::components::{
    header::Header,
    upload_area::UploadArea,
    session_panel::SessionPanel,
    footer::Footer,
};
use crate::controller::UploadController;

/// メインアプリケーションコンポーネント
#[component]
pub fn App(config: EndpointConfig) -> impl IntoView {
    // 端末判定は起動時に一度だけ
    let capabilities = DeviceCapabilities::from_user_agent(&user_agent());

    let session = RwSignal::new(UploadSession::new());
    let controller = UploadController::new(config, session);

    let on_file_selected = move |file: web_sys::File| controller.handle_file(file);

    view! {
        <div class="app-container">
            <Header />

            <UploadArea
                is_mobile=capabilities.is_mobile
                on_file_selected=on_file_selected
            />

            <SessionPanel session=session />

            <Footer />
        </div>
    }
}

fn user_agent() -> String {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}
