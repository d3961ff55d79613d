//! Flow Verify - Visual Verification Harness for the Yoga Flow Web App
//!
//! This crate drives a headless Chromium over CDP to confirm that specific
//! pages of the locally running web app render their expected content, and
//! captures PNG screenshots for human review.
//!
//! # Features
//!
//! - **Browser Control**: Headless browser lifecycle via ChromiumOxide (CDP)
//! - **Bounded Waits**: Selector and accessible-name visibility polling
//! - **Capture**: Viewport PNG screenshots written to fixed paths
//! - **Console Forwarding**: Live echo of browser console messages
//!
//! # Architecture
//!
//! ```text
//! verify-manual ──┐
//!                 ├──▶ Scenario ──▶ Browser Controller (CDP)
//! verify-poses ───┘        │              │
//!                          ▼              ▼
//!                    ┌──────────┐   ┌──────────────┐
//!                    │ Capture  │   │ Navigation   │
//!                    └────┬─────┘   │ + Waits      │
//!                         │         └──────────────┘
//!                         ▼
//!                   PNG screenshots
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use flow_verify::scenario::manual::{self, ManualOptions};
//!
//! #[tokio::main]
//! async fn main() -> flow_verify::Result<()> {
//!     // Verify the /manual page and capture a screenshot
//!     manual::verify(&ManualOptions::default()).await
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod browser;
pub mod error;
pub mod scenario;

// Re-exports for convenience
pub use browser::{
    BrowserConfig, BrowserController, ConsoleForwarder, PageCapture, PageHandle, PageNavigator,
    Screenshot,
};
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
