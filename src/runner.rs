//! アップロードセッションのドライバ（CLI版）
//!
//! ブラウザ版と同じ状態機械を tokio 上で駆動する。
//! プレビュー生成は別タスクで走らせ、リクエストを待たせない。

use crate::client::{AnalysisClient, ImageUpload};
use laundry_advisor_common::{RequestPhase, SessionView, UploadSession};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SharedSession = Arc<Mutex<UploadSession>>;

pub fn new_session() -> SharedSession {
    Arc::new(Mutex::new(UploadSession::new()))
}

/// 1回のアップロードを最後まで実行し、最終的な表示内容を返す
///
/// `on_phase` はローディング開始時と、一時表示（成功/却下）に入った時に呼ばれる。
/// 後から別のアップロードが始まった場合、このチェーンの結果は破棄される。
pub async fn run_upload<F>(
    client: &AnalysisClient,
    session: &SharedSession,
    image: ImageUpload,
    on_phase: F,
) -> SessionView
where
    F: Fn(RequestPhase),
{
    let token = session.lock().await.begin_upload();
    on_phase(RequestPhase::Loading);

    let preview_task = {
        let session = Arc::clone(session);
        let image = image.clone();
        tokio::spawn(async move {
            let data_url = tokio::task::spawn_blocking(move || image.data_url()).await;
            match data_url {
                Ok(data_url) => {
                    session.lock().await.set_preview(token, data_url);
                }
                Err(e) => tracing::warn!(error = %e, "preview encoding failed"),
            }
        })
    };

    let outcome = client.analyze(&image).await;

    let swap = {
        let mut guard = session.lock().await;
        let swap = guard.apply_outcome(token, outcome);
        if swap.is_some() {
            on_phase(guard.phase());
        }
        swap
    };

    if let Some(swap) = swap {
        tokio::time::sleep(swap.delay).await;
        session.lock().await.complete_swap(swap);
    }

    if let Err(e) = preview_task.await {
        tracing::warn!(error = %e, "preview task panicked");
    }

    let guard = session.lock().await;
    SessionView::from_session(&guard)
}
