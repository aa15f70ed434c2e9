//! Session provider feeding the welcome fragment of downstream screens.
//!
//! Every reload issues a ticket with a fresh generation number. Only the most
//! recently issued ticket may move the provider out of `Loading`; completions
//! carrying an older ticket are discarded.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{UserSession, UserType};
use crate::domain::errors::LoadError;
use crate::domain::ports::SessionStoragePort;

/// Provider state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// A fetch is pending or none has started yet.
    Loading,
    /// Session is available.
    Ready(UserSession),
    /// Last fetch failed.
    Error(LoadError),
}

impl SessionState {
    /// Returns true for `Ready` and `Error`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// Handle for one issued reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    user_type: UserType,
}

impl LoadTicket {
    /// Returns the generation number.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the requested user type.
    #[must_use]
    pub const fn user_type(&self) -> UserType {
        self.user_type
    }
}

/// Completed fetch, ready to be applied with [`SessionProvider::complete`].
#[derive(Debug, Clone)]
pub struct SessionLoad {
    /// Ticket the fetch was issued for.
    pub ticket: LoadTicket,
    /// Fetched session or the reason it could not be loaded.
    pub result: Result<UserSession, LoadError>,
}

/// Loads the session of the registered user by type.
pub struct SessionProvider {
    storage: Arc<dyn SessionStoragePort>,
    state: SessionState,
    issued: u64,
}

impl SessionProvider {
    /// Creates a provider in `Loading` with no fetch issued.
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStoragePort>) -> Self {
        Self {
            storage,
            state: SessionState::Loading,
            issued: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns the session once ready.
    #[must_use]
    pub const fn current_session(&self) -> Option<&UserSession> {
        match &self.state {
            SessionState::Ready(session) => Some(session),
            _ => None,
        }
    }

    /// Returns true while a fetch is pending.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    /// Returns the load error, if the last fetch failed.
    #[must_use]
    pub const fn error(&self) -> Option<&LoadError> {
        match &self.state {
            SessionState::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Enters `Loading` and issues a new ticket, superseding any pending one.
    pub fn begin_reload(&mut self, user_type: UserType) -> LoadTicket {
        self.issued += 1;
        self.state = SessionState::Loading;
        debug!(user_type = %user_type, generation = self.issued, "Session reload issued");
        LoadTicket {
            generation: self.issued,
            user_type,
        }
    }

    /// Returns a detached future performing the fetch for `ticket`.
    ///
    /// The future owns its storage handle, so it can be spawned while the
    /// provider stays with the UI.
    pub fn fetch(&self, ticket: LoadTicket) -> impl Future<Output = SessionLoad> + Send + 'static {
        let storage = self.storage.clone();
        async move {
            let result = storage.load_session(ticket.user_type).await;
            SessionLoad { ticket, result }
        }
    }

    /// Applies a completed fetch.
    ///
    /// Returns false if the ticket was superseded and the result discarded.
    pub fn complete(&mut self, load: SessionLoad) -> bool {
        let SessionLoad { ticket, result } = load;

        if ticket.generation != self.issued || self.state.is_terminal() {
            debug!(
                generation = ticket.generation,
                latest = self.issued,
                "Discarding stale session load"
            );
            return false;
        }

        self.state = match result {
            Ok(session) => {
                info!(user_type = %session.user_type(), "Session ready");
                SessionState::Ready(session)
            }
            Err(e) => {
                warn!(error = %e, user_type = %ticket.user_type, "Failed to load session");
                SessionState::Error(e)
            }
        };
        true
    }

    /// Makes `session` current without fetching it.
    ///
    /// Used right after a registration, when the session is already in hand
    /// and the remembered copy may be missing or stale. Pending fetches
    /// become stale.
    pub fn adopt(&mut self, session: UserSession) {
        self.issued += 1;
        info!(user_type = %session.user_type(), generation = self.issued, "Session adopted");
        self.state = SessionState::Ready(session);
    }

    /// Issues a reload and waits for it in place.
    pub async fn reload(&mut self, user_type: UserType) -> &SessionState {
        let ticket = self.begin_reload(user_type);
        let load = self.fetch(ticket).await;
        self.complete(load);
        &self.state
    }

    /// Drops the session on logout. Pending fetches become stale.
    pub fn clear(&mut self) {
        self.issued += 1;
        self.state = SessionState::Loading;
        debug!("Session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockSessionStorage;

    fn storage_with(user_type: UserType, nombre: &str) -> Arc<MockSessionStorage> {
        Arc::new(MockSessionStorage::with_session(UserSession::new(
            user_type, nombre,
        )))
    }

    #[test]
    fn test_starts_loading() {
        let provider = SessionProvider::new(Arc::new(MockSessionStorage::new()));
        assert!(provider.is_loading());
        assert!(provider.current_session().is_none());
    }

    #[tokio::test]
    async fn test_reload_reaches_ready() {
        let mut provider = SessionProvider::new(storage_with(UserType::Cliente, "Ana"));

        let state = provider.reload(UserType::Cliente).await.clone();

        assert_eq!(
            state,
            SessionState::Ready(UserSession::new(UserType::Cliente, "Ana"))
        );
        assert_eq!(
            provider.current_session().map(UserSession::welcome),
            Some("Bienvenido, Ana".to_string())
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_then_retry() {
        let storage = storage_with(UserType::Empresa, "Llaves Rápidas");
        storage.set_fail_loads(true);
        let mut provider = SessionProvider::new(storage.clone());

        provider.reload(UserType::Empresa).await;
        let error = provider.error().cloned().unwrap();
        assert_eq!(error.user_message(), "Error al cargar los datos del usuario.");

        storage.set_fail_loads(false);
        let ticket = provider.begin_reload(UserType::Empresa);
        assert!(provider.is_loading());

        let load = provider.fetch(ticket).await;
        assert!(provider.complete(load));
        assert_eq!(provider.current_session().unwrap().nombre(), "Llaves Rápidas");
    }

    #[tokio::test]
    async fn test_missing_session_is_not_found() {
        let mut provider = SessionProvider::new(Arc::new(MockSessionStorage::new()));

        provider.reload(UserType::Cliente).await;

        assert_eq!(
            provider.error(),
            Some(&LoadError::not_found(UserType::Cliente))
        );
    }

    #[tokio::test]
    async fn test_latest_reload_wins_when_it_finishes_first() {
        let storage = storage_with(UserType::Empresa, "Llaves Rápidas");
        let mut provider = SessionProvider::new(storage);

        let first = provider.begin_reload(UserType::Cliente);
        let second = provider.begin_reload(UserType::Empresa);
        let first_load = provider.fetch(first);
        let second_load = provider.fetch(second);

        assert!(provider.complete(second_load.await));
        assert!(!provider.complete(first_load.await));

        assert_eq!(
            provider.current_session().map(UserSession::user_type),
            Some(UserType::Empresa)
        );
    }

    #[tokio::test]
    async fn test_stale_completion_does_not_end_loading() {
        let storage = storage_with(UserType::Empresa, "Llaves Rápidas");
        let mut provider = SessionProvider::new(storage);

        let first = provider.begin_reload(UserType::Empresa);
        let second = provider.begin_reload(UserType::Empresa);

        let stale = provider.fetch(first).await;
        assert!(!provider.complete(stale));
        assert!(provider.is_loading());

        let latest = provider.fetch(second).await;
        assert!(provider.complete(latest));
        assert!(provider.current_session().is_some());

        // A duplicate completion of the same ticket is ignored.
        let again = provider.fetch(second).await;
        assert!(!provider.complete(again));
    }

    #[tokio::test]
    async fn test_adopt_supersedes_pending_fetch() {
        let storage = storage_with(UserType::Cliente, "Beatriz");
        let mut provider = SessionProvider::new(storage);

        let pending = provider.begin_reload(UserType::Cliente);
        provider.adopt(UserSession::new(UserType::Cliente, "Ana"));
        assert!(!provider.is_loading());

        let load = provider.fetch(pending).await;
        assert!(!provider.complete(load));
        assert_eq!(provider.current_session().unwrap().nombre(), "Ana");
    }

    #[tokio::test]
    async fn test_clear_resets_and_invalidates_pending() {
        let mut provider = SessionProvider::new(storage_with(UserType::Cliente, "Ana"));
        provider.reload(UserType::Cliente).await;

        let pending = provider.begin_reload(UserType::Cliente);
        provider.clear();

        assert!(provider.is_loading());
        let load = provider.fetch(pending).await;
        assert!(!provider.complete(load));
        assert!(provider.is_loading());
    }
}
