//! アップロードエリアコンポーネント
//!
//! ギャラリー選択ボタンと、モバイル端末ではカメラ撮影ボタンを表示する。

use leptos::html;
use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

#[component]
pub fn UploadArea<F>(
    is_mobile: bool,
    on_file_selected: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone + Send + Sync,
{
    let gallery_input: NodeRef<html::Input> = NodeRef::new();
    let camera_input: NodeRef<html::Input> = NodeRef::new();

    // 先頭の1ファイルのみ扱う
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file_selected(file);
        }
    };

    let open_gallery = move |_| {
        if let Some(input) = gallery_input.get() {
            input.click();
        }
    };

    let open_camera = move |_| {
        if let Some(input) = camera_input.get() {
            input.click();
        }
    };

    view! {
        <div class="upload-section">
            <input
                type="file"
                accept="image/*"
                style="display: none"
                node_ref=gallery_input
                on:change=on_change.clone()
            />

            <Show when=move || is_mobile>
                <input
                    type="file"
                    accept="image/*"
                    capture="environment"
                    style="display: none"
                    node_ref=camera_input
                    on:change=on_change.clone()
                />
            </Show>

            <button on:click=open_gallery title="Upload from gallery">
                <span class="upload-icon">"🖼️"</span>
            </button>

            <Show when=move || is_mobile>
                <button on:click=open_camera title="Take photo">
                    <span class="upload-icon">"📷"</span>
                </button>
            </Show>
        </div>
    }
}
