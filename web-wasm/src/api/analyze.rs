//! `POST /analyze-label` 呼び出し
//!
//! 画像をmultipartで送信し、レスポンスを `AnalyzeOutcome` に変換する。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};
use laundry_advisor_common::{interpret_response, AnalyzeOutcome, EndpointConfig};

/// multipartのフィールド名
const FILE_FIELD: &str = "file";

/// HTTPレスポンスの要素
struct RawResponse {
    status: u16,
    status_text: String,
    body: String,
}

/// 画像を解析エンドポイントへ送信
///
/// 通信失敗も含め、結果は常に `AnalyzeOutcome` で返す（リトライなし）。
pub async fn analyze_label(config: &EndpointConfig, file: &File) -> AnalyzeOutcome {
    match send(config, file).await {
        Ok(raw) => {
            if !(200..300).contains(&raw.status) {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "analyze-label returned {} {}",
                    raw.status, raw.status_text
                )));
            }
            interpret_response(raw.status, &raw.status_text, &raw.body)
        }
        Err(e) => {
            web_sys::console::error_2(&JsValue::from_str("Error details:"), &e);
            AnalyzeOutcome::transport_failure(js_error_message(&e))
        }
    }
}

async fn send(config: &EndpointConfig, file: &File) -> Result<RawResponse, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    // Content-Typeはブラウザがboundary付きで設定する
    let request = Request::new_with_str_and_init(&config.analyze_url(), &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    Ok(RawResponse {
        status: resp.status(),
        status_text: resp.status_text(),
        body: read_body(&resp).await,
    })
}

/// ボディが読めない場合は空文字（エラーメッセージはステータス行から作る）
async fn read_body(resp: &Response) -> String {
    let Ok(promise) = resp.text() else {
        return String::new();
    };
    JsFuture::from(promise)
        .await
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// JS例外からメッセージを取り出す
fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return err.message().into();
    }
    value.as_string().unwrap_or_default()
}
