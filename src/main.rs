/*
readnext - interactive CLI main.rs
Collects the user's reading history, requests three follow-up article
recommendations from an OpenAI-compatible endpoint, and prints them.
*/

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use readnext::config;
use readnext::llm::remote::RemoteLlmProvider;
use readnext::run_pipeline;

#[derive(Parser, Debug)]
#[command(name = "readnext", about = "技術記事のレコメンデーションツール")]
struct Args {
    /// Chat-completion endpoint URL
    #[arg(long, default_value = config::DEFAULT_API_URL)]
    api_url: String,

    /// Model name
    #[arg(long, default_value = config::DEFAULT_MODEL)]
    model: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,

    /// Completion token budget per request
    #[arg(long, default_value_t = 1000)]
    max_tokens: usize,

    /// Override log level (info, debug, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    // Load a .env file if present, then check the credential before anything
    // touches the network.
    dotenv::dotenv().ok();
    let Some(api_key) = config::require_api_key(&mut output)? else {
        return Ok(());
    };

    let provider = RemoteLlmProvider::new(args.api_url, api_key, args.model).with_defaults(
        args.timeout_secs,
        args.max_tokens,
        0.7,
    );

    // Single top-level catch-all: print the message and exit cleanly.
    if let Err(e) = run_pipeline(&provider, &mut input, &mut output).await {
        error!(%e, "pipeline failed");
        println!("エラーが発生しました: {}", e);
    }
    Ok(())
}
