//! Error types for platform surface operations.

use thiserror::Error;

/// Errors a surface can report when talking to the platform.
///
/// None of these reach the host; the synchronizer logs them and carries on
/// with DOM and value possibly diverged until the next edit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SurfaceError {
    /// The element is not attached.
    #[error("element is not mounted")]
    NotMounted,

    /// No selection range is available.
    #[error("no active selection")]
    NoSelection,

    /// The platform rejected the call.
    #[error("platform call failed: {0}")]
    Platform(String),
}

impl From<&str> for SurfaceError {
    fn from(s: &str) -> Self {
        SurfaceError::Platform(s.to_string())
    }
}

impl From<String> for SurfaceError {
    fn from(s: String) -> Self {
        SurfaceError::Platform(s)
    }
}
