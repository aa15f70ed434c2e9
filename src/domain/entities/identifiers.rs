//! Identifier value objects.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Idempotency key attached to one registration form.
///
/// Minted once per form and reused on every resubmission, so a retry after a
/// lost response maps onto the same document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionKey(String);

impl SubmissionKey {
    /// Generates a fresh random key.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Wraps an existing key.
    #[must_use]
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns key as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier assigned to a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates document id.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Extracts the id from a full resource path such as
    /// `projects/p/databases/(default)/documents/clients/abc`.
    #[must_use]
    pub fn from_resource_name(name: &str) -> Self {
        Self::new(name.rsplit('/').next().unwrap_or(name))
    }

    /// Returns id as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_keys_are_unique() {
        let a = SubmissionKey::generate();
        let b = SubmissionKey::generate();

        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }

    #[test]
    fn test_document_id_from_resource_name() {
        let id = DocumentId::from_resource_name(
            "projects/findercol/databases/(default)/documents/clients/abc123",
        );
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(DocumentId::from_resource_name("plain").as_str(), "plain");
    }
}
