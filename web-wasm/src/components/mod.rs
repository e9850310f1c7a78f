//! UIコンポーネント

pub mod header;
pub mod upload_area;
pub mod session_panel;
pub mod analysis_table;
pub mod error_banner;
pub mod footer;
pub mod config_error;
