//! Data transfer objects for the application layer.

mod registration_dto;

pub use registration_dto::{
    FAILURE_TITLE, RegistrationRequest, RegistrationResponse, SUCCESS_TITLE, failure_message,
    success_message,
};
