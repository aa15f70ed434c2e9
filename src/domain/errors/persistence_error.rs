//! Document store write errors.

use thiserror::Error;

/// Persistence error variants.
///
/// Variants exist for diagnostics only; users see one message regardless.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum PersistenceError {
    #[error("network error while writing document: {message}")]
    Network { message: String },

    #[error("document store rejected the write ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("document {document_id} already exists")]
    AlreadyExists { document_id: String },

    #[error("failed to encode document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("local storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected persistence error: {message}")]
    Unexpected { message: String },
}

impl PersistenceError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates rejected error.
    #[must_use]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Creates already-exists error.
    #[must_use]
    pub fn already_exists(document_id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            document_id: document_id.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the document was already written by an earlier attempt.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
