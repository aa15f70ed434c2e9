//! External launcher errors.

use thiserror::Error;

/// Failure to hand a URI to the system handler.
#[derive(Debug, Error)]
#[error("failed to open {uri}: {message}")]
pub struct LaunchError {
    /// URI that could not be opened.
    pub uri: String,
    /// Underlying cause.
    pub message: String,
}

impl LaunchError {
    /// Creates launch error.
    #[must_use]
    pub fn new(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            message: message.into(),
        }
    }
}
