use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use laundry_advisor::{cli, client, config, render, runner};
use laundry_advisor_common::{AnalysisContent, RequestPhase, SessionView};
use cli::{Cli, Commands};
use client::{AnalysisClient, ImageUpload};
use config::Config;
use std::io::Read;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // parse はオフラインで動くので設定ファイルを読まない
    match cli.command {
        Commands::Analyze { image, endpoint, timeout, json } => {
            // 設定は最初に確定させる（無ければ何もしない）
            let config = Config::load()?;
            let endpoint = config.resolve_endpoint(endpoint.as_deref())?;
            let timeout = Duration::from_secs(timeout.unwrap_or(config.timeout_seconds));
            let client = AnalysisClient::new(endpoint, timeout)?;

            let image = ImageUpload::load(&image)?;
            println!("🧺 laundry-advisor - {}\n", image.file_name);

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.enable_steady_tick(Duration::from_millis(100));

            let session = runner::new_session();
            let view = runner::run_upload(&client, &session, image, |phase| match phase {
                RequestPhase::Loading => spinner.set_message("解析中..."),
                RequestPhase::Success => spinner.set_message("✔ 解析完了"),
                RequestPhase::Rejected => spinner.set_message("✖ ラベルを認識できませんでした"),
                RequestPhase::Idle | RequestPhase::Settled => {}
            })
            .await;
            spinner.finish_and_clear();

            print_view(&view, json)?;

            if render::is_failure(&view) {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Parse { input, json } => {
            let text = read_input(&input)
                .with_context(|| format!("入力を読み込めません: {}", input.display()))?;
            let content = AnalysisContent::classify(&text);

            match (&content, json) {
                (AnalysisContent::Table(rows), true) => println!("{}", serde_json::to_string_pretty(rows)?),
                _ => println!("{}", render::render_content(&content)),
            }

            if matches!(content, AnalysisContent::ErrorMessage(_)) {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Config { set_endpoint, show } => {
            let mut config = Config::load()?;

            if let Some(url) = set_endpoint {
                config.set_endpoint(&url)?;
                println!("✔ エンドポイントを設定しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  エンドポイント: {}",
                    config.endpoint.as_deref().unwrap_or("未設定")
                );
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_view(view: &SessionView, json: bool) -> anyhow::Result<()> {
    if let (true, SessionView::Preview { content: Some(AnalysisContent::Table(rows)), .. }) = (json, view) {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        println!("{}", render::render_view(view));
    }
    Ok(())
}

fn read_input(input: &std::path::Path) -> std::io::Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
    }
}
