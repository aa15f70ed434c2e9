//! Domain error types.

mod form_error;
mod launch_error;
mod load_error;
mod persistence_error;

pub use form_error::FormError;
pub use launch_error::LaunchError;
pub use load_error::{LOAD_FAILURE_MESSAGE, LoadError};
pub use persistence_error::PersistenceError;
