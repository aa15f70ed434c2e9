//! Session fetch errors.

use thiserror::Error;

use crate::domain::entities::UserType;

/// Message shown whenever the session cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Error al cargar los datos del usuario.";

/// Session load error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum LoadError {
    #[error("no registered {user_type} user found")]
    NotFound { user_type: UserType },

    #[error("failed to read user data: {message}")]
    Storage { message: String },

    #[error("unexpected error loading user data: {message}")]
    Unexpected { message: String },
}

impl LoadError {
    /// Creates not-found error.
    #[must_use]
    pub const fn not_found(user_type: UserType) -> Self {
        Self::NotFound { user_type }
    }

    /// Creates storage error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns the message shown to the user.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        LOAD_FAILURE_MESSAGE
    }
}
