//! Poses-library verifier
//!
//! Confirms the `/poses` page renders at least one expected pose card,
//! identified by a heading with the accessible name "Child's Pose". Every
//! browser console message is echoed to stdout while the check runs. On
//! failure a diagnostic screenshot of the page state is written and the
//! original error is re-raised.

use crate::browser::{
    BrowserConfig, BrowserController, ConsoleForwarder, PageCapture, PageNavigator,
};
use crate::error::Result;
use crate::scenario::close_after;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// Page under verification
pub const DEFAULT_URL: &str = "http://localhost:3000/poses";

/// Accessible name of the heading expected on a loaded page
pub const EXPECTED_HEADING: &str = "Child's Pose";

/// Screenshot destination on success
pub const DEFAULT_SUCCESS_OUTPUT: &str = "jules-scratch/verification/poses_loaded.png";

/// Screenshot destination on failure
pub const DEFAULT_ERROR_OUTPUT: &str = "jules-scratch/verification/poses_error.png";

/// Visibility wait bound, in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// Options for the poses-library scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosesOptions {
    /// Page URL to verify
    pub url: String,
    /// Accessible name of the heading that proves the page loaded
    pub heading: String,
    /// Screenshot output path on success
    pub success_output: PathBuf,
    /// Screenshot output path on failure
    pub error_output: PathBuf,
    /// Visibility wait bound in milliseconds
    pub timeout_ms: u64,
    /// Browser launch configuration
    #[serde(default)]
    pub browser: BrowserConfig,
}

impl Default for PosesOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            heading: EXPECTED_HEADING.to_string(),
            success_output: PathBuf::from(DEFAULT_SUCCESS_OUTPUT),
            error_output: PathBuf::from(DEFAULT_ERROR_OUTPUT),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            browser: BrowserConfig::default(),
        }
    }
}

/// Run the poses-library verification. The browser is closed on every
/// exit path, including when the visibility wait fails and its error is
/// re-raised.
#[instrument(skip(options))]
pub async fn verify(options: &PosesOptions) -> Result<()> {
    let controller = BrowserController::launch(options.browser.clone()).await?;
    let outcome = run(&controller, options).await;
    close_after(controller, outcome).await
}

async fn run(controller: &BrowserController, options: &PosesOptions) -> Result<()> {
    let page = controller.new_page().await?;

    // Attach before navigating so load-time messages are captured
    let _console = ConsoleForwarder::attach(&page).await?;

    PageNavigator::goto(
        &page,
        &options.url,
        crate::browser::navigation::DEFAULT_TIMEOUT_MS,
    )
    .await?;

    match PageNavigator::wait_for_heading(&page, &options.heading, options.timeout_ms).await {
        Ok(()) => {
            println!("Verification successful: Poses loaded.");
            let shot = PageCapture::screenshot(&page).await?;
            shot.save(&options.success_output).await?;
            info!("Poses page verified: {}", options.success_output.display());
            Ok(())
        }
        Err(err) => {
            println!("Verification failed: {}", err);
            // Diagnostic capture of the page state; its own failure must
            // not mask the wait error
            match PageCapture::screenshot_to_file(&page, &options.error_output).await {
                Ok(_) => info!(
                    "Diagnostic screenshot: {}",
                    options.error_output.display()
                ),
                Err(capture_err) => warn!("Diagnostic screenshot failed: {}", capture_err),
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poses_options_default() {
        let options = PosesOptions::default();
        assert_eq!(options.url, "http://localhost:3000/poses");
        assert_eq!(options.heading, "Child's Pose");
        assert_eq!(
            options.success_output,
            PathBuf::from("jules-scratch/verification/poses_loaded.png")
        );
        assert_eq!(
            options.error_output,
            PathBuf::from("jules-scratch/verification/poses_error.png")
        );
        assert_eq!(options.timeout_ms, 15_000);
    }

    #[test]
    fn test_poses_options_serialization() {
        let options = PosesOptions::default();
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("Child's Pose"));

        let parsed: PosesOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.heading, "Child's Pose");
        assert_eq!(parsed.timeout_ms, 15_000);
    }
}
