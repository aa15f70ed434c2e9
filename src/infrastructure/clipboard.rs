use arboard::Clipboard;
use tracing::{debug, error, warn};

/// Copies share text to the system clipboard off the UI thread.
#[derive(Clone, Default)]
pub struct ClipboardService {}

impl ClipboardService {
    /// Creates the service.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Copies `text`. Failures are logged, never reported.
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        tokio::task::spawn_blocking(move || match Clipboard::new() {
            Ok(mut cb) => {
                if let Err(e) = cb.set_text(text) {
                    error!(error = %e, "Failed to set clipboard text");
                } else {
                    debug!("Clipboard text set");
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to initialize clipboard for copy");
            }
        });
    }
}
