//! Remembered sessions persisted to a TOML file.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::entities::{UserSession, UserType};
use crate::domain::errors::{LoadError, PersistenceError};
use crate::domain::ports::SessionStoragePort;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ProfilesFile {
    #[serde(default)]
    profiles: Vec<UserSession>,
}

/// Session storage backed by `profiles.toml`, one entry per user type.
#[derive(Clone)]
pub struct ProfileStore {
    path: Option<PathBuf>,
}

impl ProfileStore {
    /// Stores profiles in the file at `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Creates a store that remembers nothing.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { path: None }
    }

    async fn read(&self) -> Result<ProfilesFile, std::io::Error> {
        let Some(path) = &self.path else {
            return Ok(ProfilesFile::default());
        };

        if !fs::try_exists(path).await? {
            return Ok(ProfilesFile::default());
        }

        let content = fs::read_to_string(path).await?;
        match toml::from_str(&content) {
            Ok(file) => Ok(file),
            Err(e) => {
                warn!(error = %e, "Failed to parse profiles file, ignoring it");
                Ok(ProfilesFile::default())
            }
        }
    }
}

#[async_trait]
impl SessionStoragePort for ProfileStore {
    async fn load_session(&self, user_type: UserType) -> Result<UserSession, LoadError> {
        let file = self
            .read()
            .await
            .map_err(|e| LoadError::storage(e.to_string()))?;

        file.profiles
            .into_iter()
            .find(|profile| profile.user_type() == user_type)
            .ok_or(LoadError::not_found(user_type))
    }

    async fn store_session(&self, session: &UserSession) -> Result<(), PersistenceError> {
        let Some(path) = &self.path else {
            debug!("Profile persistence disabled");
            return Ok(());
        };

        let mut file = self.read().await?;
        file.profiles
            .retain(|profile| profile.user_type() != session.user_type());
        file.profiles.push(session.clone());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string(&file)
            .map_err(|e| PersistenceError::unexpected(format!("failed to encode profiles: {e}")))?;
        fs::write(path, content).await?;

        debug!(user_type = %session.user_type(), "Profile stored");
        Ok(())
    }
}
