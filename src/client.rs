//! 解析エンドポイントHTTPクライアント
//!
//! 画像を `file` フィールドのmultipartで `POST /analyze-label` に送る。

use crate::error::{AdvisorError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use laundry_advisor_common::{interpret_response, AnalyzeOutcome, EndpointConfig};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;

const FILE_FIELD: &str = "file";

/// 送信する画像
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(AdvisorError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            mime_type: mime_type_for(path).to_string(),
            file_name,
            bytes,
        })
    }

    /// プレビュー用のData URL
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

/// 拡張子からMIMEタイプを推定
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "heic" => "image/heic",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: EndpointConfig,
}

impl AnalysisClient {
    pub fn new(endpoint: EndpointConfig, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }

    /// 画像を1回だけ送信する（リトライなし）
    pub async fn analyze(&self, image: &ImageUpload) -> AnalyzeOutcome {
        match self.send(image).await {
            Ok((status, status_text, body)) => interpret_response(status, &status_text, &body),
            Err(e) => {
                tracing::warn!(error = %e, "analyze-label request failed");
                AnalyzeOutcome::transport_failure(e.to_string())
            }
        }
    }

    async fn send(&self, image: &ImageUpload) -> std::result::Result<(u16, String, String), reqwest::Error> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)?;
        let form = Form::new().part(FILE_FIELD, part);

        let url = self.endpoint.analyze_url();
        tracing::debug!(%url, file = %image.file_name, size = image.bytes.len(), "posting image");

        let response = self.http.post(url).multipart(form).send().await?;
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();

        // ボディが読めなくてもステータス行からメッセージを作れる
        let body = response.text().await.unwrap_or_default();
        Ok((status.as_u16(), status_text, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_mime_type_for() {
        assert_eq!(mime_type_for(Path::new("label.JPG")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("label.jpeg")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("label.png")), "image/png");
        assert_eq!(mime_type_for(Path::new("label.webp")), "image/webp");
        assert_eq!(mime_type_for(Path::new("label")), "application/octet-stream");
    }

    #[test]
    fn test_load_missing_file() {
        let result = ImageUpload::load(Path::new("/nonexistent/label-12345.jpg"));
        assert!(matches!(result, Err(AdvisorError::FileNotFound(_))));
    }

    #[test]
    fn test_load_and_data_url() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("tag.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let image = ImageUpload::load(&path).unwrap();
        assert_eq!(image.file_name, "tag.png");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data_url(), "data:image/png;base64,iVBORw==");
    }
}
