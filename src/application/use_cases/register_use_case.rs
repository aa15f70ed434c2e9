//! Registration use case implementation.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::application::dto::{RegistrationRequest, RegistrationResponse};
use crate::domain::entities::{DocumentId, UserSession};
use crate::domain::errors::PersistenceError;
use crate::domain::navigation::Route;
use crate::domain::ports::{DocumentStorePort, SessionStoragePort};

/// Submits a completed registration form.
#[derive(Clone)]
pub struct RegisterUseCase {
    store: Arc<dyn DocumentStorePort>,
    sessions: Arc<dyn SessionStoragePort>,
}

impl RegisterUseCase {
    /// Creates new registration use case.
    #[must_use]
    pub const fn new(
        store: Arc<dyn DocumentStorePort>,
        sessions: Arc<dyn SessionStoragePort>,
    ) -> Self {
        Self { store, sessions }
    }

    /// Writes the record to its collection.
    ///
    /// Exactly one document-store write is attempted; there is no retry. The
    /// record is not validated, so empty fields are persisted as-is.
    ///
    /// # Errors
    /// Returns error if the write fails for any reason.
    pub async fn execute(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationResponse, PersistenceError> {
        let user_type = request.record.user_type();
        let collection = user_type.collection();

        debug!(user_type = %user_type, collection, key = %request.key, "Submitting registration");

        let document = request.record.to_document().map_err(|e| {
            error!(error = %e, "Failed to encode registration");
            PersistenceError::from(e)
        })?;

        let (document_id, was_duplicate) =
            match self.store.add(collection, &document, &request.key).await {
                Ok(id) => (id, false),
                Err(e) if e.is_duplicate() => {
                    warn!(key = %request.key, "Registration already stored by an earlier attempt");
                    (DocumentId::new(request.key.as_str()), true)
                }
                Err(e) => {
                    error!(error = %e, user_type = %user_type, "Failed to register");
                    return Err(e);
                }
            };

        info!(
            user_type = %user_type,
            document_id = %document_id,
            "Registration stored"
        );

        let session = UserSession::from_record(&request.record);

        let session_persisted = if request.remember_session {
            match self.sessions.store_session(&session).await {
                Ok(()) => {
                    debug!("Session remembered");
                    true
                }
                Err(e) => {
                    error!(error = %e, "Failed to remember session");
                    false
                }
            }
        } else {
            debug!("Session persistence disabled, skipping storage");
            false
        };

        Ok(RegistrationResponse {
            document_id,
            session,
            next: Route::MainMenu { user_type },
            session_persisted,
            was_duplicate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::form_state::{ClientField, RegistrationForm};
    use crate::domain::entities::{
        ClientRecord, CompanyRecord, RegistrationRecord, SubmissionKey, UserType,
    };
    use crate::domain::ports::mocks::{MockDocumentStore, MockSessionStorage};

    fn ana() -> RegistrationRecord {
        RegistrationRecord::from(ClientRecord::new("Ana", "a@x.com", "3000000000"))
    }

    #[tokio::test]
    async fn test_client_registration_writes_once_and_navigates() {
        let store = Arc::new(MockDocumentStore::new(true));
        let sessions = Arc::new(MockSessionStorage::new());
        let use_case = RegisterUseCase::new(store.clone(), sessions.clone());

        let response = use_case
            .execute(RegistrationRequest::new(ana(), SubmissionKey::generate()))
            .await
            .unwrap();

        let calls = store.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].collection, "clients");
        assert_eq!(calls[0].document, ana().to_document().unwrap());
        assert_eq!(
            response.next,
            Route::MainMenu {
                user_type: UserType::Cliente
            }
        );
        assert_eq!(response.confirmation(), "Cliente registrado correctamente");
        assert!(response.session_persisted);
        assert_eq!(
            sessions.stored(UserType::Cliente).await,
            Some(UserSession::new(UserType::Cliente, "Ana"))
        );
    }

    #[tokio::test]
    async fn test_company_registration_goes_to_companies() {
        let store = Arc::new(MockDocumentStore::new(true));
        let use_case = RegisterUseCase::new(store.clone(), Arc::new(MockSessionStorage::new()));
        let record = RegistrationRecord::from(CompanyRecord {
            name: "Llaves Rápidas".into(),
            ..CompanyRecord::default()
        });

        let response = use_case
            .execute(RegistrationRequest::new(record, SubmissionKey::generate()))
            .await
            .unwrap();

        assert_eq!(store.calls()[0].collection, "companies");
        assert_eq!(
            response.next,
            Route::MainMenu {
                user_type: UserType::Empresa
            }
        );
    }

    #[tokio::test]
    async fn test_rejected_write_leaves_form_untouched() {
        let store = Arc::new(MockDocumentStore::new(false));
        let sessions = Arc::new(MockSessionStorage::new());
        let use_case = RegisterUseCase::new(store.clone(), sessions.clone());

        let form = match RegistrationForm::new(UserType::Cliente) {
            RegistrationForm::Client(form) => RegistrationForm::Client(
                form.set_field(ClientField::Name, "Ana")
                    .set_field(ClientField::Phone, "3000000000"),
            ),
            RegistrationForm::Company(_) => unreachable!(),
        };
        let before = form.clone();

        let request = RegistrationRequest::new(form.to_record(), form.submission_key().clone());
        let result = use_case.execute(request).await;

        assert!(matches!(result, Err(PersistenceError::Network { .. })));
        assert_eq!(form, before);
        assert_eq!(store.calls().len(), 1);
        assert!(sessions.stored(UserType::Cliente).await.is_none());
    }

    #[tokio::test]
    async fn test_resubmission_reuses_key_and_accepts_duplicate() {
        let store = Arc::new(MockDocumentStore::new(false));
        let use_case = RegisterUseCase::new(store.clone(), Arc::new(MockSessionStorage::new()));
        let key = SubmissionKey::generate();

        let first = use_case
            .execute(RegistrationRequest::new(ana(), key.clone()))
            .await;
        assert!(first.is_err());

        store.set_duplicate(true);
        let second = use_case
            .execute(RegistrationRequest::new(ana(), key.clone()))
            .await
            .unwrap();

        assert!(second.was_duplicate);
        assert_eq!(second.document_id.as_str(), key.as_str());
        let calls = store.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].key, calls[1].key);
    }

    #[tokio::test]
    async fn test_session_storage_failure_is_not_fatal() {
        let sessions = Arc::new(MockSessionStorage::new());
        sessions.set_fail_stores(true);
        let use_case = RegisterUseCase::new(Arc::new(MockDocumentStore::new(true)), sessions);

        let response = use_case
            .execute(RegistrationRequest::new(ana(), SubmissionKey::generate()))
            .await
            .unwrap();

        assert!(!response.session_persisted);
    }

    #[tokio::test]
    async fn test_registration_without_session() {
        let sessions = Arc::new(MockSessionStorage::new());
        let use_case =
            RegisterUseCase::new(Arc::new(MockDocumentStore::new(true)), sessions.clone());

        let response = use_case
            .execute(RegistrationRequest::new(ana(), SubmissionKey::generate()).without_session())
            .await
            .unwrap();

        assert!(!response.session_persisted);
        assert!(sessions.stored(UserType::Cliente).await.is_none());
    }
}
