use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "laundry-advisor")]
#[command(about = "洗濯表示ラベルをAI解析してケア方法を表示するクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ラベル画像を解析エンドポイントに送信して結果を表示
    Analyze {
        /// ラベル画像のパス
        #[arg(required = true)]
        image: PathBuf,

        /// 解析エンドポイントのベースURL（環境変数・設定ファイルより優先）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// リクエストのタイムアウト秒数
        #[arg(short, long)]
        timeout: Option<u64>,

        /// 表をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 保存済みの解析マークダウンを表として表示（`-` で標準入力）
    Parse {
        /// 入力ファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 表をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 解析エンドポイントのベースURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
