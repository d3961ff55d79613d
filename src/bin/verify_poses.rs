//! Poses-library verifier
//!
//! Confirms the `/poses` page of the running web app renders the expected
//! "Child's Pose" card, echoing every browser console message to stdout
//! while the check runs. On failure a diagnostic screenshot is written and
//! the process exits non-zero.

use clap::Parser;
use flow_verify::scenario::poses::{self, PosesOptions};
use flow_verify::BrowserConfig;
use std::path::PathBuf;

/// Poses-library verifier
#[derive(Parser, Debug)]
#[command(name = "verify-poses")]
#[command(version)]
#[command(about = "Verify that the /poses page renders the expected pose card")]
struct Args {
    /// Page URL to verify
    #[arg(long, default_value = poses::DEFAULT_URL)]
    url: String,

    /// Accessible name of the heading that proves the page loaded
    #[arg(long, default_value = poses::EXPECTED_HEADING)]
    heading: String,

    /// Screenshot output path on success
    #[arg(long, default_value = poses::DEFAULT_SUCCESS_OUTPUT)]
    success_output: PathBuf,

    /// Screenshot output path on failure
    #[arg(long, default_value = poses::DEFAULT_ERROR_OUTPUT)]
    error_output: PathBuf,

    /// Visibility wait bound, in milliseconds
    #[arg(long, default_value_t = poses::DEFAULT_TIMEOUT_MS)]
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

    let options = PosesOptions {
        url: args.url.clone(),
        heading: args.heading.clone(),
        success_output: args.success_output.clone(),
        error_output: args.error_output.clone(),
        timeout_ms: args.timeout_ms,
        browser: args.browser_config(),
    };

    poses::verify(&options).await?;
    Ok(())
}
