//! Browser console forwarding
//!
//! Echoes every `Runtime.consoleAPICalled` event a page emits to stdout,
//! immediately and in arrival order, as lines of the form
//! `Browser Console: <type> <text>`. A passive side channel: no buffering,
//! no filtering.

use crate::browser::PageHandle;
use crate::error::{Error, Result};
use chromiumoxide::cdp::js_protocol::runtime::{EventConsoleApiCalled, RemoteObject};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Forwards a page's console messages to this process's stdout.
///
/// The subscription lives until the forwarder is dropped or the page's
/// event stream ends (page or browser closed).
pub struct ConsoleForwarder {
    task: JoinHandle<()>,
}

impl ConsoleForwarder {
    /// Subscribe to the page's console events and start echoing them.
    ///
    /// Attach before navigating so messages emitted during page load are
    /// not missed.
    #[instrument(skip(page))]
    pub async fn attach(page: &PageHandle) -> Result<Self> {
        let mut events = page
            .page
            .event_listener::<EventConsoleApiCalled>()
            .await
            .map_err(|e| Error::cdp(e.to_string()))?;

        let task = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                println!("{}", format_line(&event));
            }
            debug!("Console event stream ended");
        });

        debug!("Console forwarding attached");
        Ok(Self { task })
    }
}

impl Drop for ConsoleForwarder {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Render one console event as a `Browser Console: <type> <text>` line.
fn format_line(event: &EventConsoleApiCalled) -> String {
    let kind = format!("{:?}", event.r#type).to_lowercase();
    let text = event
        .args
        .iter()
        .map(render_arg)
        .collect::<Vec<_>>()
        .join(" ");
    format!("Browser Console: {} {}", kind, text)
}

/// Render one console call argument the way DevTools would print it.
fn render_arg(arg: &RemoteObject) -> String {
    stringify_value(arg.value.as_ref(), arg.description.as_deref())
}

/// String values print verbatim, other primitives via their JSON
/// rendering; objects fall back to the CDP-provided description.
fn stringify_value(value: Option<&serde_json::Value>, description: Option<&str>) -> String {
    match value {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => description.unwrap_or("undefined").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromiumoxide::cdp::js_protocol::runtime::ConsoleApiCalledType;
    use serde_json::json;

    #[test]
    fn test_stringify_string_verbatim() {
        let value = json!("pose data loaded");
        assert_eq!(stringify_value(Some(&value), None), "pose data loaded");
    }

    #[test]
    fn test_stringify_number() {
        let value = json!(42);
        assert_eq!(stringify_value(Some(&value), None), "42");
    }

    #[test]
    fn test_stringify_bool_and_null() {
        assert_eq!(stringify_value(Some(&json!(true)), None), "true");
        assert_eq!(stringify_value(Some(&json!(null)), None), "null");
    }

    #[test]
    fn test_stringify_description_fallback() {
        assert_eq!(
            stringify_value(None, Some("TypeError: fetch failed")),
            "TypeError: fetch failed"
        );
    }

    #[test]
    fn test_stringify_undefined_placeholder() {
        assert_eq!(stringify_value(None, None), "undefined");
    }

    #[test]
    fn test_console_kind_lowercase() {
        let kind = format!("{:?}", ConsoleApiCalledType::Error).to_lowercase();
        assert_eq!(kind, "error");
        let kind = format!("{:?}", ConsoleApiCalledType::Log).to_lowercase();
        assert_eq!(kind, "log");
    }
}
