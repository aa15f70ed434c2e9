//! Document store port definition.

use async_trait::async_trait;

use crate::domain::entities::{DocumentId, SubmissionKey};
use crate::domain::errors::PersistenceError;

/// Append-only sink for registration documents.
#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// Adds a document to a collection.
    ///
    /// The submission key identifies the write; adapters reject a second
    /// document with the same key with [`PersistenceError::AlreadyExists`].
    async fn add(
        &self,
        collection: &str,
        document: &serde_json::Value,
        key: &SubmissionKey,
    ) -> Result<DocumentId, PersistenceError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    /// A recorded `add` call.
    #[derive(Debug, Clone, PartialEq)]
    pub struct AddCall {
        pub collection: String,
        pub document: serde_json::Value,
        pub key: SubmissionKey,
    }

    /// Mock document store recording every call.
    pub struct MockDocumentStore {
        should_succeed: Arc<AtomicBool>,
        duplicate: Arc<AtomicBool>,
        calls: Mutex<Vec<AddCall>>,
    }

    impl MockDocumentStore {
        /// Creates new mock.
        pub fn new(should_succeed: bool) -> Self {
            Self {
                should_succeed: Arc::new(AtomicBool::new(should_succeed)),
                duplicate: Arc::new(AtomicBool::new(false)),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Sets success behavior.
        pub fn set_should_succeed(&self, value: bool) {
            self.should_succeed.store(value, Ordering::SeqCst);
        }

        /// Makes every write answer "already exists".
        pub fn set_duplicate(&self, value: bool) {
            self.duplicate.store(value, Ordering::SeqCst);
        }

        /// Returns recorded calls.
        pub fn calls(&self) -> Vec<AddCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DocumentStorePort for MockDocumentStore {
        async fn add(
            &self,
            collection: &str,
            document: &serde_json::Value,
            key: &SubmissionKey,
        ) -> Result<DocumentId, PersistenceError> {
            self.calls.lock().unwrap().push(AddCall {
                collection: collection.to_string(),
                document: document.clone(),
                key: key.clone(),
            });

            if self.duplicate.load(Ordering::SeqCst) {
                Err(PersistenceError::already_exists(key.as_str()))
            } else if self.should_succeed.load(Ordering::SeqCst) {
                Ok(DocumentId::new(key.as_str()))
            } else {
                Err(PersistenceError::network("mock rejection"))
            }
        }
    }
}
