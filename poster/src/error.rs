//! Failure type shared by every delegated capability.

use thiserror::Error;

/// A delegated browser capability failed.
///
/// Only the photo and export pipelines see these. Background-removal failures
/// are recovered with a fallback image; render and download failures are
/// surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("background removal failed: {0}")]
    BackgroundRemoval(String),
    #[error("file read failed: {0}")]
    FileRead(String),
    #[error("render failed: {0}")]
    Render(String),
    #[error("download failed: {0}")]
    Download(String),
    #[error("capability unavailable: {0}")]
    Unavailable(String),
}
