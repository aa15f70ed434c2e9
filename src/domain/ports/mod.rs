//! Port definitions.

mod contact_launcher_port;
mod document_store_port;
mod session_storage_port;

pub use contact_launcher_port::ContactLauncherPort;
pub use document_store_port::DocumentStorePort;
pub use session_storage_port::SessionStoragePort;
