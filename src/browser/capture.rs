//! Page capture functionality
//!
//! This module captures the current viewport as a PNG and writes it to
//! disk for human review.

use crate::browser::PageHandle;
use crate::error::{CaptureError, Result};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use std::path::Path;
use tracing::{debug, info, instrument};

/// A captured PNG screenshot awaiting a disk write
#[derive(Debug, Clone)]
pub struct Screenshot {
    data: Vec<u8>,
}

impl Screenshot {
    /// The raw PNG bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the capture produced no data
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write the screenshot to `path`, creating missing parent directories
    /// and overwriting any previous file.
    #[instrument(skip(self))]
    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| CaptureError::WriteFailed {
                        path: path.display().to_string(),
                        source: e,
                    })?;
            }
        }

        tokio::fs::write(path, &self.data)
            .await
            .map_err(|e| CaptureError::WriteFailed {
                path: path.display().to_string(),
                source: e,
            })?;

        info!("Screenshot written: {} ({} bytes)", path.display(), self.len());
        Ok(())
    }
}

/// Page capture operations
pub struct PageCapture;

impl PageCapture {
    /// Capture the current viewport as a PNG screenshot.
    #[instrument(skip(page))]
    pub async fn screenshot(page: &PageHandle) -> Result<Screenshot> {
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .from_surface(true)
            .capture_beyond_viewport(false)
            .build();

        let data = page
            .page
            .screenshot(params)
            .await
            .map_err(|e| CaptureError::ScreenshotFailed(e.to_string()))?;

        debug!("Screenshot captured: {} bytes", data.len());
        Ok(Screenshot { data })
    }

    /// Capture the viewport and write it straight to `path`.
    pub async fn screenshot_to_file(page: &PageHandle, path: &Path) -> Result<Screenshot> {
        let shot = Self::screenshot(page).await?;
        shot.save(path).await?;
        Ok(shot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Screenshot {
        Screenshot {
            data: b"not-really-a-png".to_vec(),
        }
    }

    #[test]
    fn test_screenshot_accessors() {
        let shot = sample();
        assert_eq!(shot.len(), 16);
        assert!(!shot.is_empty());
        assert_eq!(shot.as_bytes()[0], b'n');
    }

    #[tokio::test]
    async fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/shot.png");

        sample().save(&path).await.unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, b"not-really-a-png");
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");
        std::fs::write(&path, b"old contents").unwrap();

        sample().save(&path).await.unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, b"not-really-a-png");
    }

    #[tokio::test]
    async fn test_save_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the destination path makes the write fail
        let path = dir.path().join("shot.png");
        std::fs::create_dir(&path).unwrap();

        let err = sample().save(&path).await.unwrap_err();
        assert!(err.to_string().contains("shot.png"));
    }
}
