//! Domain layer with core business entities and port definitions.

/// Contact URIs and share text.
pub mod contact;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Screen routes.
pub mod navigation;
/// User-facing notifications.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Stateless domain services.
pub mod services;

pub use entities::{ClientRecord, CompanyRecord, RegistrationRecord, UserSession, UserType};
pub use errors::{LoadError, PersistenceError};
pub use navigation::Route;
pub use notification::{Notification, NotificationLevel};
pub use ports::{ContactLauncherPort, DocumentStorePort, SessionStoragePort};
