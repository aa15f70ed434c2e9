//! In-memory user session.

use serde::{Deserialize, Serialize};

use super::{RegistrationRecord, UserType};

/// Identity of the current app run, derived from a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    user_type: UserType,
    nombre: String,
}

impl UserSession {
    /// Creates a session.
    #[must_use]
    pub fn new(user_type: UserType, nombre: impl Into<String>) -> Self {
        Self {
            user_type,
            nombre: nombre.into(),
        }
    }

    /// Derives the session from a persisted registration.
    #[must_use]
    pub fn from_record(record: &RegistrationRecord) -> Self {
        Self::new(record.user_type(), record.display_name())
    }

    /// Returns the user type.
    #[must_use]
    pub const fn user_type(&self) -> UserType {
        self.user_type
    }

    /// Returns the greeting name.
    #[must_use]
    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    /// Returns the welcome line.
    #[must_use]
    pub fn welcome(&self) -> String {
        format!("Bienvenido, {}", self.nombre)
    }
}
