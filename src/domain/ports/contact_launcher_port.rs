//! Contact launcher port definition.

use crate::domain::contact::ContactUri;
use crate::domain::errors::LaunchError;

/// Port handing contact URIs to the platform handler.
pub trait ContactLauncherPort: Send + Sync {
    /// Opens the URI. Callers do not wait for or observe the outcome beyond
    /// logging a hand-off failure.
    ///
    /// # Errors
    /// Returns error if the handler could not be started.
    fn launch(&self, uri: &ContactUri) -> Result<(), LaunchError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Mock launcher recording launched URIs.
    #[derive(Default)]
    pub struct MockLauncher {
        launched: Mutex<Vec<String>>,
    }

    impl MockLauncher {
        /// Returns launched URIs.
        pub fn launched(&self) -> Vec<String> {
            self.launched.lock().unwrap().clone()
        }
    }

    impl ContactLauncherPort for MockLauncher {
        fn launch(&self, uri: &ContactUri) -> Result<(), LaunchError> {
            self.launched.lock().unwrap().push(uri.to_uri());
            Ok(())
        }
    }
}
