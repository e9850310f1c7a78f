use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("解析エンドポイントが設定されていません。`--endpoint`、環境変数 LAUNDRY_BACKEND_URL、または `laundry-advisor config --set-endpoint URL` で設定してください")]
    MissingEndpoint,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<laundry_advisor_common::Error> for AdvisorError {
    fn from(e: laundry_advisor_common::Error) -> Self {
        match e {
            laundry_advisor_common::Error::Config(msg) => AdvisorError::Config(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
