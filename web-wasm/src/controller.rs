//! アップロードコントローラ（ブラウザ版ドライバ）
//!
//! ファイル選択を受けてセッションをリセットし、プレビュー読込と
//! 解析リクエストを並行して走らせる。結果はトークン付きでセッションに戻すため、
//! 後から選択されたファイルがあれば古い結果は捨てられる。

use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, FileReader};
use laundry_advisor_common::{EndpointConfig, UploadSession, UploadToken};
use crate::api::analyze::analyze_label;

#[derive(Clone)]
pub struct UploadController {
    config: EndpointConfig,
    session: RwSignal<UploadSession>,
}

impl UploadController {
    pub fn new(config: EndpointConfig, session: RwSignal<UploadSession>) -> Self {
        Self { config, session }
    }

    /// ファイル選択時のエントリポイント
    pub fn handle_file(&self, file: File) {
        let Some(token) = self.session.try_update(UploadSession::begin_upload) else {
            return;
        };

        // プレビュー読込はリクエストを待たせない
        read_preview(&file, self.session, token);

        let config = self.config.clone();
        let session = self.session;
        spawn_local(async move {
            let outcome = analyze_label(&config, &file).await;

            let swap = session
                .try_update(|s| s.apply_outcome(token, outcome))
                .flatten();

            if let Some(swap) = swap {
                TimeoutFuture::new(swap.delay.as_millis() as u32).await;
                session.update(|s| {
                    s.complete_swap(swap);
                });
            }
        });
    }
}

fn read_preview(file: &File, session: RwSignal<UploadSession>, token: UploadToken) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            web_sys::console::error_2(&JsValue::from_str("FileReader unavailable:"), &e);
            return;
        }
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                session.update(|s| {
                    s.set_preview(token, data_url);
                });
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onloadend(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if let Err(e) = reader.read_as_data_url(file) {
        web_sys::console::error_2(&JsValue::from_str("Failed to read image:"), &e);
    }
}
