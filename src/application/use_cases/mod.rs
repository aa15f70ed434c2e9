//! Use case implementations.

mod register_use_case;

pub use register_use_case::RegisterUseCase;
