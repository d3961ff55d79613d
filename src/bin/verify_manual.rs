//! Manual-page verifier
//!
//! Confirms the `/manual` page of the running web app renders a top-level
//! heading and captures a screenshot for visual review. Exits 0 on
//! success, non-zero on an unhandled error or timeout.

use clap::Parser;
use flow_verify::scenario::manual::{self, ManualOptions};
use flow_verify::BrowserConfig;
use std::path::PathBuf;

/// Manual-page verifier
#[derive(Parser, Debug)]
#[command(name = "verify-manual")]
#[command(version)]
#[command(about = "Verify that the /manual page renders its top-level heading")]
struct Args {
    /// Page URL to verify
    #[arg(long, default_value = manual::DEFAULT_URL)]
    url: String,

    /// Screenshot output path
    #[arg(long, default_value = manual::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Wait bound for the heading, in milliseconds
    #[arg(long, default_value_t = manual::DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Path to Chrome/Chromium executable
    #[arg(long)]
    chrome_path: Option<String>,

    /// Disable the Chromium sandbox (some containers require this)
    #[arg(long)]
    no_sandbox: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn browser_config(&self) -> BrowserConfig {
        let mut builder = BrowserConfig::builder().sandbox(!self.no_sandbox);
        if let Some(ref path) = self.chrome_path {
            builder = builder.chrome_path(path.clone());
        }
        builder.build()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("{} {} verifying {}", flow_verify::NAME, flow_verify::VERSION, args.url);

    let options = ManualOptions {
        url: args.url.clone(),
        output: args.output.clone(),
        timeout_ms: args.timeout_ms,
        browser: args.browser_config(),
    };

    manual::verify(&options).await?;
    Ok(())
}
