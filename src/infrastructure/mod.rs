//! Infrastructure layer with external service adapters.

/// Catalog loading.
pub mod catalog;
/// System clipboard.
pub mod clipboard;
/// Application configuration.
pub mod config;
/// Firestore REST adapter.
pub mod firestore;
/// Contact link hand-off.
pub mod launcher;
/// Offline document store.
pub mod memory_store;
/// Remembered sessions.
pub mod profile_store;

pub use catalog::{CatalogError, CatalogLoader};
pub use clipboard::ClipboardService;
pub use config::{AppConfig, CliArgs, LogLevel, StateConfig, StorageManager};
pub use firestore::{FirestoreClient, FirestoreConfig};
pub use launcher::SystemLauncher;
pub use memory_store::MemoryDocumentStore;
pub use profile_store::ProfileStore;
