//! Laundry Advisor CLI
//!
//! 洗濯表示ラベルの画像を解析エンドポイントに送り、ケア方法を表で表示する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod runner;
