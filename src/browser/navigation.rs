//! Page navigation and bounded DOM waits
//!
//! This module handles single-shot URL navigation and the polling waits
//! the verification scenarios block on: "an element matching a selector
//! exists" and "a heading with a given accessible name is visible".

use crate::browser::PageHandle;
use crate::error::{Error, NavigationError, Result, WaitError};
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Default navigation/wait bound in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Extra slack granted to the in-page probe before the outer timeout fires
const PROBE_SLACK_MS: u64 = 1_000;

/// Resolves once the document has fired its load event
const LOAD_PROBE: &str = r#"
    new Promise(resolve => {
        if (document.readyState === 'complete') {
            resolve(true);
        } else {
            window.addEventListener('load', () => resolve(true));
        }
    })
"#;

/// Page navigator for single navigation-and-check cycles
pub struct PageNavigator;

impl PageNavigator {
    /// Navigate to a URL and wait for the document load event.
    ///
    /// Performs exactly one attempt, bounded by `timeout_ms`.
    #[instrument(skip(page))]
    pub async fn goto(page: &PageHandle, url: &str, timeout_ms: u64) -> Result<()> {
        validate_url(url)?;

        info!("Navigating to: {}", url);
        let timeout = Duration::from_millis(timeout_ms);

        tokio::time::timeout(timeout, page.page.goto(url))
            .await
            .map_err(|_| NavigationError::Timeout(timeout_ms))?
            .map_err(|e| NavigationError::LoadFailed(e.to_string()))?;

        tokio::time::timeout(timeout, page.page.evaluate(LOAD_PROBE))
            .await
            .map_err(|_| NavigationError::Timeout(timeout_ms))?
            .map_err(|e| Error::cdp(e.to_string()))?;

        debug!("Navigation complete: {}", url);
        Ok(())
    }

    /// Wait for an element matching a CSS selector to appear in the DOM.
    #[instrument(skip(page))]
    pub async fn wait_for_selector(
        page: &PageHandle,
        selector: &str,
        timeout_ms: u64,
    ) -> Result<()> {
        let script = selector_probe(selector, timeout_ms);
        let timed_out = || WaitError::SelectorTimeout {
            selector: selector.to_string(),
            timeout_ms,
        };

        let found = run_probe(page, &script, timeout_ms, &timed_out).await?;
        if !found {
            return Err(timed_out().into());
        }

        debug!("Selector appeared: {}", selector);
        Ok(())
    }

    /// Wait for a heading with the exact accessible name to become visible.
    ///
    /// Matches `h1`..`h6` and `[role="heading"]` elements whose trimmed text
    /// equals `name`, and requires the element to be rendered with a
    /// non-zero box.
    #[instrument(skip(page))]
    pub async fn wait_for_heading(page: &PageHandle, name: &str, timeout_ms: u64) -> Result<()> {
        let script = heading_probe(name, timeout_ms);
        let timed_out = || WaitError::HeadingTimeout {
            name: name.to_string(),
            timeout_ms,
        };

        let visible = run_probe(page, &script, timeout_ms, &timed_out).await?;
        if !visible {
            return Err(timed_out().into());
        }

        debug!("Heading visible: {}", name);
        Ok(())
    }
}

/// Evaluate a boolean probe script with an outer timeout as backstop.
async fn run_probe<F>(
    page: &PageHandle,
    script: &str,
    timeout_ms: u64,
    timed_out: &F,
) -> Result<bool>
where
    F: Fn() -> WaitError,
{
    let hard_bound = Duration::from_millis(timeout_ms + PROBE_SLACK_MS);

    tokio::time::timeout(hard_bound, page.page.evaluate(script))
        .await
        .map_err(|_| timed_out())?
        .map_err(|e| Error::cdp(e.to_string()))?
        .into_value::<bool>()
        .map_err(|e| Error::cdp(e.to_string()))
}

fn validate_url(url: &str) -> Result<()> {
    let parsed =
        Url::parse(url).map_err(|e| NavigationError::InvalidUrl(format!("{}: {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" | "file" => Ok(()),
        scheme => Err(NavigationError::InvalidUrl(format!(
            "unsupported scheme {:?}: {}",
            scheme, url
        ))
        .into()),
    }
}

/// Build the rAF polling script for [`PageNavigator::wait_for_selector`].
///
/// Resolves `true` when a match appears, `false` when the in-page deadline
/// passes.
fn selector_probe(selector: &str, timeout_ms: u64) -> String {
    format!(
        r#"
            new Promise(resolve => {{
                const deadline = Date.now() + {timeout_ms};

                function check() {{
                    if (document.querySelector('{selector}')) {{
                        resolve(true);
                    }} else if (Date.now() > deadline) {{
                        resolve(false);
                    }} else {{
                        requestAnimationFrame(check);
                    }}
                }}
                check();
            }})
        "#,
        timeout_ms = timeout_ms,
        selector = js_literal(selector),
    )
}

/// Build the rAF polling script for [`PageNavigator::wait_for_heading`].
fn heading_probe(name: &str, timeout_ms: u64) -> String {
    format!(
        r#"
            new Promise(resolve => {{
                const deadline = Date.now() + {timeout_ms};

                function visible(el) {{
                    const style = window.getComputedStyle(el);
                    if (style.display === 'none' || style.visibility === 'hidden') {{
                        return false;
                    }}
                    const rect = el.getBoundingClientRect();
                    return rect.width > 0 && rect.height > 0;
                }}

                function check() {{
                    const headings = document.querySelectorAll(
                        'h1, h2, h3, h4, h5, h6, [role="heading"]'
                    );
                    for (const el of headings) {{
                        if (el.textContent.trim() === '{name}' && visible(el)) {{
                            resolve(true);
                            return;
                        }}
                    }}
                    if (Date.now() > deadline) {{
                        resolve(false);
                    }} else {{
                        requestAnimationFrame(check);
                    }}
                }}
                check();
            }})
        "#,
        timeout_ms = timeout_ms,
        name = js_literal(name),
    )
}

/// Escape text for embedding in a single-quoted JS string literal.
fn js_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_http() {
        assert!(validate_url("http://localhost:3000/manual").is_ok());
    }

    #[test]
    fn test_validate_url_https() {
        assert!(validate_url("https://example.com/poses").is_ok());
    }

    #[test]
    fn test_validate_url_file() {
        assert!(validate_url("file:///tmp/page.html").is_ok());
    }

    #[test]
    fn test_validate_url_empty() {
        assert!(validate_url("").is_err());
    }

    #[test]
    fn test_validate_url_no_scheme() {
        assert!(validate_url("localhost:3000/manual").is_err());
    }

    #[test]
    fn test_validate_url_unsupported_scheme() {
        let err = validate_url("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_js_literal_plain() {
        assert_eq!(js_literal("h1"), "h1");
    }

    #[test]
    fn test_js_literal_apostrophe() {
        assert_eq!(js_literal("Child's Pose"), "Child\\'s Pose");
    }

    #[test]
    fn test_js_literal_backslash_first() {
        assert_eq!(js_literal(r"a\'b"), r"a\\\'b");
    }

    #[test]
    fn test_selector_probe_embeds_selector_and_bound() {
        let script = selector_probe("h1", 30_000);
        assert!(script.contains("querySelector('h1')"));
        assert!(script.contains("Date.now() + 30000"));
    }

    #[test]
    fn test_heading_probe_escapes_name() {
        let script = heading_probe("Child's Pose", 15_000);
        assert!(script.contains("Child\\'s Pose"));
        assert!(script.contains("Date.now() + 15000"));
        assert!(script.contains("[role=\"heading\"]"));
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(DEFAULT_TIMEOUT_MS, 30_000);
    }
}
