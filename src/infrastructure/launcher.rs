//! Platform handler for contact URIs.

use tracing::{debug, warn};

use crate::domain::contact::ContactUri;
use crate::domain::errors::LaunchError;
use crate::domain::ports::ContactLauncherPort;

/// Opens `tel:` and `whatsapp:` URIs with the system handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    /// Creates the launcher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ContactLauncherPort for SystemLauncher {
    fn launch(&self, uri: &ContactUri) -> Result<(), LaunchError> {
        let target = uri.to_uri();
        debug!(uri = %target, "Opening contact URI");

        opener::open(&target).map_err(|e| {
            warn!(uri = %target, error = %e, "Failed to open contact URI");
            LaunchError::new(target.clone(), e.to_string())
        })
    }
}
