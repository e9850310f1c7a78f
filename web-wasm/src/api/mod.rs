//! 解析エンドポイント呼び出し

pub mod analyze;
