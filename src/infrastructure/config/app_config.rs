//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "findercol";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "findercol";

/// Default Firestore REST endpoint.
pub const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, file values overridden by CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Catalog file. Falls back to `<config_dir>/catalog.toml`.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Document store configuration.
    #[serde(default)]
    pub backend: BackendConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Document store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Firebase project id. Without it the app runs offline.
    #[serde(default)]
    pub project_id: Option<String>,

    /// Web API key sent with every request.
    #[serde(default)]
    pub api_key: Option<String>,

    /// REST base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Database name.
    #[serde(default = "default_database")]
    pub database: String,

    /// Keep records in memory instead of writing them remotely.
    #[serde(default)]
    pub offline: bool,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Returns true if records must stay in memory.
    #[must_use]
    pub const fn is_offline(&self) -> bool {
        self.offline || self.project_id.is_none()
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            api_key: None,
            base_url: default_base_url(),
            database: default_database(),
            offline: false,
            timeout_secs: default_timeout(),
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable `TachyonFX` animations.
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    /// Notification duration in seconds.
    #[serde(default = "default_notification_duration")]
    pub notification_duration: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
            notification_duration: default_notification_duration(),
        }
    }
}

/// Theme mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light mode (default).
    #[default]
    Light,
    /// Dark mode.
    Dark,
}

impl ThemeMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Theme mode (Light, Dark).
    #[serde(default)]
    pub mode: ThemeMode,
}

fn default_accent_color() -> String {
    "#2E7D32".to_string()
}

fn default_base_url() -> String {
    DEFAULT_FIRESTORE_URL.to_string()
}

fn default_database() -> String {
    "(default)".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_true() -> bool {
    true
}

const fn default_notification_duration() -> u64 {
    4
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            mode: ThemeMode::default(),
        }
    }
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(project_id) = args.project_id {
            self.backend.project_id = Some(project_id);
        }
        if let Some(api_key) = args.api_key {
            self.backend.api_key = Some(api_key);
        }
        if args.offline {
            self.backend.offline = true;
        }
        if let Some(catalog) = args.catalog {
            self.catalog_path = Some(catalog);
        }
        if let Some(mode) = args.theme {
            self.theme.mode = mode;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
        if let Some(notification_duration) = args.notification_duration {
            self.ui.notification_duration = notification_duration;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("findercol.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            catalog_path: None,
            backend: BackendConfig::default(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}
