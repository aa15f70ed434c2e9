//! Application layer with use cases, DTOs and UI-independent services.

/// Data transfer objects.
pub mod dto;
/// Stateful services shared by the screens.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{RegistrationRequest, RegistrationResponse};
pub use services::{RegistrationForm, SessionProvider, SessionState};
pub use use_cases::RegisterUseCase;
