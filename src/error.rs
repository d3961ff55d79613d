//! Error types for Flow Verify
//!
//! This module provides the error type hierarchy using `thiserror`
//! for proper error handling across all components.

use thiserror::Error;

/// The main error type for Flow Verify operations
#[derive(Error, Debug)]
pub enum Error {
    /// Browser-related errors
    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    /// Navigation errors
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// DOM wait errors
    #[error("Wait error: {0}")]
    Wait(#[from] WaitError),

    /// Capture errors (screenshots)
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ChromiumOxide errors
    #[error("CDP error: {0}")]
    Cdp(String),
}

/// Browser lifecycle and control errors
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Failed to launch browser
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Browser configuration error
    #[error("Invalid browser configuration: {0}")]
    ConfigError(String),

    /// Failed to create new page/tab
    #[error("Failed to create page: {0}")]
    PageCreationFailed(String),
}

/// Navigation errors
#[derive(Error, Debug)]
pub enum NavigationError {
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Navigation timeout
    #[error("Navigation timed out after {0}ms")]
    Timeout(u64),

    /// Page load failed
    #[error("Page load failed: {0}")]
    LoadFailed(String),
}

/// Errors from bounded DOM waits
#[derive(Error, Debug)]
pub enum WaitError {
    /// No element matched the selector before the deadline
    #[error("No element matched selector {selector:?} within {timeout_ms}ms")]
    SelectorTimeout {
        /// The CSS selector that was polled
        selector: String,
        /// The wait bound in milliseconds
        timeout_ms: u64,
    },

    /// The expected heading never became visible before the deadline
    #[error("Heading {name:?} did not become visible within {timeout_ms}ms")]
    HeadingTimeout {
        /// The accessible name that was polled for
        name: String,
        /// The wait bound in milliseconds
        timeout_ms: u64,
    },
}

/// Capture errors (screenshots)
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Screenshot failed
    #[error("Screenshot capture failed: {0}")]
    ScreenshotFailed(String),

    /// Writing the captured image to disk failed
    #[error("Failed to write screenshot to {path}: {source}")]
    WriteFailed {
        /// Destination path of the failed write
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for Flow Verify operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a CDP error from a string
    pub fn cdp<S: Into<String>>(msg: S) -> Self {
        Error::Cdp(msg.into())
    }
}

/// Convert chromiumoxide errors
impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}
