//! Session storage port definition.

use async_trait::async_trait;

use crate::domain::entities::{UserSession, UserType};
use crate::domain::errors::{LoadError, PersistenceError};

/// Port for fetching and remembering the session of a registered user.
#[async_trait]
pub trait SessionStoragePort: Send + Sync {
    /// Fetches the session of the last registered user of this type.
    async fn load_session(&self, user_type: UserType) -> Result<UserSession, LoadError>;

    /// Remembers a session for later fetches.
    async fn store_session(&self, session: &UserSession) -> Result<(), PersistenceError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::RwLock;

    /// Mock session storage for testing.
    pub struct MockSessionStorage {
        sessions: Arc<RwLock<HashMap<UserType, UserSession>>>,
        fail_loads: Arc<AtomicBool>,
        fail_stores: Arc<AtomicBool>,
    }

    impl MockSessionStorage {
        /// Creates empty mock storage.
        pub fn new() -> Self {
            Self {
                sessions: Arc::new(RwLock::new(HashMap::new())),
                fail_loads: Arc::new(AtomicBool::new(false)),
                fail_stores: Arc::new(AtomicBool::new(false)),
            }
        }

        /// Creates mock storage with a session.
        pub fn with_session(session: UserSession) -> Self {
            let storage = Self::new();
            storage
                .sessions
                .try_write()
                .unwrap()
                .insert(session.user_type(), session);
            storage
        }

        /// Makes loads fail with a storage error.
        pub fn set_fail_loads(&self, value: bool) {
            self.fail_loads.store(value, Ordering::SeqCst);
        }

        /// Makes stores fail.
        pub fn set_fail_stores(&self, value: bool) {
            self.fail_stores.store(value, Ordering::SeqCst);
        }

        /// Returns stored session for a type.
        pub async fn stored(&self, user_type: UserType) -> Option<UserSession> {
            self.sessions.read().await.get(&user_type).cloned()
        }
    }

    impl Default for MockSessionStorage {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl SessionStoragePort for MockSessionStorage {
        async fn load_session(&self, user_type: UserType) -> Result<UserSession, LoadError> {
            if self.fail_loads.load(Ordering::SeqCst) {
                return Err(LoadError::storage("mock failure"));
            }
            self.sessions
                .read()
                .await
                .get(&user_type)
                .cloned()
                .ok_or(LoadError::not_found(user_type))
        }

        async fn store_session(&self, session: &UserSession) -> Result<(), PersistenceError> {
            if self.fail_stores.load(Ordering::SeqCst) {
                return Err(PersistenceError::unexpected("mock failure"));
            }
            self.sessions
                .write()
                .await
                .insert(session.user_type(), session.clone());
            Ok(())
        }
    }
}
