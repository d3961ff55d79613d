//! Manual-page verifier
//!
//! Confirms the `/manual` page loads and exposes a top-level heading, then
//! captures a screenshot for visual review. There is no assertion beyond
//! the wait succeeding; a wait timeout propagates and no screenshot is
//! written.

use crate::browser::{BrowserConfig, BrowserController, PageCapture, PageNavigator};
use crate::error::Result;
use crate::scenario::close_after;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Page under verification
pub const DEFAULT_URL: &str = "http://localhost:3000/manual";

/// Screenshot destination
pub const DEFAULT_OUTPUT: &str = "jules-scratch/verification/verification.png";

/// Wait bound for the heading, in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = crate::browser::navigation::DEFAULT_TIMEOUT_MS;

/// Options for the manual-page scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualOptions {
    /// Page URL to verify
    pub url: String,
    /// Screenshot output path
    pub output: PathBuf,
    /// Wait bound in milliseconds
    pub timeout_ms: u64,
    /// Browser launch configuration
    #[serde(default)]
    pub browser: BrowserConfig,
}

impl Default for ManualOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            browser: BrowserConfig::default(),
        }
    }
}

/// Run the manual-page verification: launch, navigate, wait for an `h1`,
/// screenshot, close. The browser is closed on every exit path.
#[instrument(skip(options))]
pub async fn verify(options: &ManualOptions) -> Result<()> {
    let controller = BrowserController::launch(options.browser.clone()).await?;
    let outcome = run(&controller, options).await;
    close_after(controller, outcome).await
}

async fn run(controller: &BrowserController, options: &ManualOptions) -> Result<()> {
    let page = controller.new_page().await?;

    PageNavigator::goto(&page, &options.url, options.timeout_ms).await?;
    PageNavigator::wait_for_selector(&page, "h1", options.timeout_ms).await?;

    let shot = PageCapture::screenshot(&page).await?;
    shot.save(&options.output).await?;

    info!("Manual page verified: {}", options.output.display());
    Ok(())
}
