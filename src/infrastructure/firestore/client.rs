//! Firestore REST client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::dto::{DocumentRequest, DocumentResponse, ErrorResponse};
use crate::domain::entities::{DocumentId, SubmissionKey};
use crate::domain::errors::PersistenceError;
use crate::domain::ports::DocumentStorePort;
use crate::infrastructure::config::BackendConfig;

const USER_AGENT: &str = concat!("findercol/", env!("CARGO_PKG_VERSION"));

/// Connection settings of a Firestore database.
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// REST endpoint root.
    pub base_url: String,
    /// Google Cloud project.
    pub project_id: String,
    /// Database id, usually `(default)`.
    pub database: String,
    /// Web API key appended to each request.
    pub api_key: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl FirestoreConfig {
    /// Builds settings from the backend section, if a project is configured.
    #[must_use]
    pub fn from_backend(backend: &BackendConfig) -> Option<Self> {
        let project_id = backend.project_id.clone()?;
        Some(Self {
            base_url: backend.base_url.trim_end_matches('/').to_string(),
            project_id,
            database: backend.database.clone(),
            api_key: backend.api_key.clone(),
            timeout: Duration::from_secs(backend.timeout_secs),
        })
    }

    /// Returns the collection URL documents are created under.
    #[must_use]
    pub fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents/{}",
            self.base_url, self.project_id, self.database, collection
        )
    }
}

/// Document store writing to Firestore over REST.
pub struct FirestoreClient {
    client: Client,
    config: FirestoreConfig,
}

impl FirestoreClient {
    /// Creates new client.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(config: FirestoreConfig) -> Result<Self, PersistenceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                PersistenceError::unexpected(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    async fn handle_error_response(
        status: StatusCode,
        key: &SubmissionKey,
        response: reqwest::Response,
    ) -> PersistenceError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error.message,
            Err(_) => format!("HTTP {status}"),
        };
        map_status(status, key, message)
    }
}

/// Maps a non-success status to an error.
fn map_status(status: StatusCode, key: &SubmissionKey, message: String) -> PersistenceError {
    match status {
        StatusCode::CONFLICT => PersistenceError::already_exists(key.as_str()),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::BAD_REQUEST => {
            PersistenceError::rejected(status.as_u16(), message)
        }
        StatusCode::TOO_MANY_REQUESTS | StatusCode::REQUEST_TIMEOUT => {
            PersistenceError::network(format!("{status}: {message}"))
        }
        s if s.is_server_error() => PersistenceError::network(format!("{status}: {message}")),
        _ => PersistenceError::unexpected(format!("unexpected response: {status} - {message}")),
    }
}

fn map_transport_error(e: &reqwest::Error) -> PersistenceError {
    if e.is_timeout() {
        PersistenceError::network("request timed out")
    } else if e.is_connect() {
        PersistenceError::network("failed to connect to Firestore")
    } else {
        PersistenceError::network(e.to_string())
    }
}

#[async_trait]
impl DocumentStorePort for FirestoreClient {
    async fn add(
        &self,
        collection: &str,
        document: &serde_json::Value,
        key: &SubmissionKey,
    ) -> Result<DocumentId, PersistenceError> {
        let url = self.config.collection_url(collection);
        let body = DocumentRequest::from_json(document);

        let mut query = vec![("documentId", key.as_str())];
        if let Some(api_key) = &self.config.api_key {
            query.push(("key", api_key.as_str()));
        }

        debug!(collection, key = %key, "Creating Firestore document");

        let response = self
            .client
            .post(&url)
            .query(&query)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach Firestore");
                map_transport_error(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, key, response).await);
        }

        let created: DocumentResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse Firestore response");
            PersistenceError::unexpected(format!("failed to parse response: {e}"))
        })?;

        debug!(
            name = %created.name,
            create_time = created.create_time.as_deref().unwrap_or("-"),
            "Firestore document created"
        );

        Ok(DocumentId::from_resource_name(&created.name))
    }
}
