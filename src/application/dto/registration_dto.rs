//! Registration DTOs.

use crate::domain::entities::{DocumentId, RegistrationRecord, SubmissionKey, UserSession, UserType};
use crate::domain::navigation::Route;

/// Title of the confirmation popup.
pub const SUCCESS_TITLE: &str = "Éxito";
/// Title of the failure popup.
pub const FAILURE_TITLE: &str = "Error";

/// Returns the confirmation shown after a successful registration.
#[must_use]
pub const fn success_message(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Cliente => "Cliente registrado correctamente",
        UserType::Empresa => "Empresa registrada correctamente",
    }
}

/// Returns the message shown for any failed registration.
#[must_use]
pub const fn failure_message(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Cliente => "No se pudo registrar el cliente. Por favor, intente de nuevo.",
        UserType::Empresa => "No se pudo registrar la empresa. Por favor, intente de nuevo.",
    }
}

/// Registration request data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    /// Record to persist.
    pub record: RegistrationRecord,
    /// Idempotency key of the form.
    pub key: SubmissionKey,
    /// Whether to remember the session for later loads.
    pub remember_session: bool,
}

impl RegistrationRequest {
    /// Creates new registration request.
    #[must_use]
    pub const fn new(record: RegistrationRecord, key: SubmissionKey) -> Self {
        Self {
            record,
            key,
            remember_session: true,
        }
    }

    /// Disables session persistence.
    #[must_use]
    pub fn without_session(mut self) -> Self {
        self.remember_session = false;
        self
    }
}

/// Registration response data.
#[derive(Debug, Clone)]
pub struct RegistrationResponse {
    /// Id of the stored document.
    pub document_id: DocumentId,
    /// Session derived from the record.
    pub session: UserSession,
    /// Where the UI goes next.
    pub next: Route,
    /// Whether the session was remembered.
    pub session_persisted: bool,
    /// Whether an earlier attempt had already written the document.
    pub was_duplicate: bool,
}

impl RegistrationResponse {
    /// Returns the confirmation message.
    #[must_use]
    pub const fn confirmation(&self) -> &'static str {
        success_message(self.session.user_type())
    }
}
