//! Verification scenarios
//!
//! Each scenario performs exactly one launch, navigate, wait, screenshot,
//! close cycle against a fixed page of the running web app. The browser is
//! released on every exit path, success and failure alike.

pub mod manual;
pub mod poses;

use crate::browser::BrowserController;
use crate::error::Result;
use tracing::warn;

/// Base URL the web app is assumed to be serving.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Close the browser unconditionally, then report the scenario outcome.
///
/// A close failure only surfaces when the scenario itself succeeded;
/// otherwise it is logged so the root cause stays visible.
pub(crate) async fn close_after(controller: BrowserController, outcome: Result<()>) -> Result<()> {
    match (outcome, controller.close().await) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(close_err)) => Err(close_err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => {
            warn!("Browser close failed after scenario error: {}", close_err);
            Err(err)
        }
    }
}
