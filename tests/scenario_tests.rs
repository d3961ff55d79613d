//! Scenario and configuration tests
//!
//! These tests verify option defaults, error rendering, and screenshot
//! persistence through the public API. Live page verification requires a
//! running Chrome/Chromium and the web app, and is exercised via the
//! `verify-manual` and `verify-poses` binaries.

use flow_verify::error::{CaptureError, NavigationError, WaitError};
use flow_verify::scenario::{manual, poses};
use flow_verify::{BrowserConfig, Error};
use pretty_assertions::assert_eq;
use std::path::Path;

#[test]
fn manual_defaults_match_fixed_contract() {
    let options = manual::ManualOptions::default();
    assert_eq!(options.url, "http://localhost:3000/manual");
    assert_eq!(
        options.output,
        Path::new("jules-scratch/verification/verification.png")
    );
    assert_eq!(options.timeout_ms, 30_000);
}

#[test]
fn poses_defaults_match_fixed_contract() {
    let options = poses::PosesOptions::default();
    assert_eq!(options.url, "http://localhost:3000/poses");
    assert_eq!(options.heading, "Child's Pose");
    assert_eq!(
        options.success_output,
        Path::new("jules-scratch/verification/poses_loaded.png")
    );
    assert_eq!(
        options.error_output,
        Path::new("jules-scratch/verification/poses_error.png")
    );
    assert_eq!(options.timeout_ms, 15_000);
}

#[test]
fn fixed_urls_share_the_default_base() {
    use flow_verify::scenario::DEFAULT_BASE_URL;
    assert!(manual::ManualOptions::default().url.starts_with(DEFAULT_BASE_URL));
    assert!(poses::PosesOptions::default().url.starts_with(DEFAULT_BASE_URL));
}

#[test]
fn scenarios_share_one_output_directory() {
    let manual_out = manual::ManualOptions::default().output;
    let poses_out = poses::PosesOptions::default().success_output;
    assert_eq!(manual_out.parent(), poses_out.parent());
}

#[test]
fn browser_config_defaults() {
    let config = BrowserConfig::default();
    assert!(config.headless);
    assert_eq!((config.width, config.height), (1280, 720));
    assert!(config.sandbox);
    assert!(config.chrome_path.is_none());
}

#[test]
fn browser_config_builder_round_trip() {
    let config = BrowserConfig::builder()
        .headless(false)
        .viewport(800, 600)
        .sandbox(false)
        .chrome_path("/opt/chromium/chrome")
        .build();

    let json = serde_json::to_string(&config).unwrap();
    let parsed: BrowserConfig = serde_json::from_str(&json).unwrap();

    assert!(!parsed.headless);
    assert_eq!((parsed.width, parsed.height), (800, 600));
    assert!(!parsed.sandbox);
    assert_eq!(parsed.chrome_path.as_deref(), Some("/opt/chromium/chrome"));
}

#[test]
fn options_deserialize_with_default_browser_section() {
    // The browser section is optional in serialized options
    let parsed: poses::PosesOptions = serde_json::from_str(
        r#"{
            "url": "http://localhost:3000/poses",
            "heading": "Child's Pose",
            "success_output": "out/loaded.png",
            "error_output": "out/error.png",
            "timeout_ms": 5000
        }"#,
    )
    .unwrap();

    assert!(parsed.browser.headless);
    assert_eq!(parsed.timeout_ms, 5_000);
}

#[test]
fn wait_errors_render_operative_detail() {
    let err: Error = WaitError::HeadingTimeout {
        name: poses::EXPECTED_HEADING.to_string(),
        timeout_ms: poses::DEFAULT_TIMEOUT_MS,
    }
    .into();

    let rendered = err.to_string();
    assert!(rendered.contains("Child's Pose"));
    assert!(rendered.contains("15000ms"));

    let err: Error = WaitError::SelectorTimeout {
        selector: "h1".to_string(),
        timeout_ms: 30_000,
    }
    .into();
    assert!(err.to_string().contains("\"h1\""));
}

#[test]
fn navigation_and_capture_errors_render() {
    let err: Error = NavigationError::InvalidUrl("not-a-url".to_string()).into();
    assert!(err.to_string().contains("Invalid URL"));

    let err: Error = CaptureError::ScreenshotFailed("target crashed".to_string()).into();
    assert!(err.to_string().contains("target crashed"));
}
