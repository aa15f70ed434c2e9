//! Application configuration.

/// `config.toml` sections.
pub mod app_config;
/// Command line flags.
pub mod args;
/// `state.toml` contents.
pub mod state_config;
/// Config directory access.
pub mod storage;

pub use app_config::{AppConfig, BackendConfig, LogLevel, ThemeConfig, ThemeMode, UiConfig};
pub use args::CliArgs;
pub use state_config::StateConfig;
pub use storage::{ConfigError, StorageManager};
