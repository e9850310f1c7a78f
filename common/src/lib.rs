//! Laundry Advisor Common Library
//!
//! CLIとWeb(WASM)で共有される型・パーサー・セッション状態機械

pub mod types;
pub mod error;
pub mod config;
pub mod parser;
pub mod response;
pub mod session;
pub mod view;

pub use types::{AnalysisRow, AnalyzeResponse, ErrorBody};
pub use error::{Error, Result};
pub use config::{EndpointConfig, BACKEND_URL_VAR};
pub use parser::{parse_analysis, format_error_markdown, AnalysisContent, ERROR_MARKER};
pub use response::{interpret_response, AnalyzeOutcome, GENERIC_FAILURE_MESSAGE};
pub use session::{RequestPhase, ScheduledSwap, UploadSession, UploadToken};
pub use view::{DeviceCapabilities, Overlay, SessionView, REMEDIATION_HINT};
