use std::path::PathBuf;

use thiserror::Error;

/// Failure during one of the staged context-manager init steps
///
/// Each variant corresponds to one stage; a failed stage leaves the later
/// stages untouched. The payload is the platform's diagnostic string.
#[derive(Debug, Error)]
pub enum InitError {
    /// The video subsystem could not be started
    #[error("video subsystem unavailable: {0}")]
    Subsystem(String),

    /// The subsystem rejected the window request (e.g. no display)
    #[error("window could not be created: {0}")]
    Window(String),

    /// No render target could be established for the window
    #[error("render target could not be created: {0}")]
    RenderTarget(String),
}

/// Failure while turning an image file into a drawable resource
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The decoder rejected the file (missing, unreadable, bad format)
    #[error("unable to load image {path}: {detail}")]
    Load { path: PathBuf, detail: String },

    /// Decoded fine but could not be converted to the display format
    #[error("unable to convert image {path} to display format: {detail}")]
    Optimize { path: PathBuf, detail: String },
}

impl ResourceError {
    pub fn load(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        Self::Load {
            path: path.into(),
            detail: detail.into(),
        }
    }

    pub fn optimize(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        Self::Optimize {
            path: path.into(),
            detail: detail.into(),
        }
    }

    /// Path of the file that failed, whichever stage rejected it
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Load { path, .. } | Self::Optimize { path, .. } => path,
        }
    }
}

/// A draw or present command failed
///
/// These are logged and tolerated by the frame loop rather than terminating
/// it; a dropped frame is not a lifecycle event.
#[derive(Debug, Error)]
#[error("draw command failed: {0}")]
pub struct DrawError(pub String);

impl From<String> for DrawError {
    fn from(detail: String) -> Self {
        Self(detail)
    }
}

impl From<&str> for DrawError {
    fn from(detail: &str) -> Self {
        Self(detail.to_owned())
    }
}
