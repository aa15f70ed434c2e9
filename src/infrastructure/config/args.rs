use super::app_config::{LogLevel, ThemeMode};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "findercol",
    version,
    about = "Terminal directory of local services and businesses",
    long_about = None
)]
/// Command line arguments. Each one overrides its config file value.
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Firebase project id.
    #[arg(long, env = "FINDERCOL_PROJECT_ID")]
    pub project_id: Option<String>,

    /// Firebase web API key.
    #[arg(long, env = "FINDERCOL_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Keep registrations in memory.
    #[arg(long)]
    pub offline: bool,

    /// Catalog file path.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Theme mode.
    #[arg(long, value_enum)]
    pub theme: Option<ThemeMode>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Enable `TachyonFX` animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Notification duration in seconds.
    #[arg(long)]
    pub notification_duration: Option<u64>,
}
