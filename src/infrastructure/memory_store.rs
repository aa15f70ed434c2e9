//! In-memory document store used when no backend is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{DocumentId, SubmissionKey};
use crate::domain::errors::PersistenceError;
use crate::domain::ports::DocumentStorePort;

type Collection = HashMap<String, serde_json::Value>;

/// Keeps documents per collection, keyed by submission key.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryDocumentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStorePort for MemoryDocumentStore {
    async fn add(
        &self,
        collection: &str,
        document: &serde_json::Value,
        key: &SubmissionKey,
    ) -> Result<DocumentId, PersistenceError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        if docs.contains_key(key.as_str()) {
            return Err(PersistenceError::already_exists(key.as_str()));
        }

        docs.insert(key.as_str().to_string(), document.clone());
        debug!(collection, key = %key, "Document kept in memory");

        Ok(DocumentId::new(key.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn stored(store: &MemoryDocumentStore, collection: &str) -> Collection {
        store
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let store = MemoryDocumentStore::new();
        let key = SubmissionKey::generate();
        let document = json!({ "name": "Ana", "email": "a@x.com", "phone": "3000000000" });

        let id = store.add("clients", &document, &key).await.unwrap();

        assert_eq!(id.as_str(), key.as_str());
        let clients = stored(&store, "clients").await;
        assert_eq!(clients.get(id.as_str()), Some(&document));
        assert_eq!(clients.len(), 1);
        assert!(stored(&store, "companies").await.is_empty());
    }

    #[tokio::test]
    async fn test_same_key_is_duplicate() {
        let store = MemoryDocumentStore::new();
        let key = SubmissionKey::generate();

        store.add("clients", &json!({}), &key).await.unwrap();
        let second = store.add("clients", &json!({}), &key).await;

        assert!(second.unwrap_err().is_duplicate());
        assert_eq!(stored(&store, "clients").await.len(), 1);
    }
}
