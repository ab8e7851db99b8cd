//! Application configuration.

/// Configuration model.
pub mod app_config;
/// Command-line arguments.
pub mod args;
/// Config file persistence.
pub mod storage;

pub use app_config::{AppConfig, LogLevel, ProfileConfig, ThemeConfig, UiConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, ConfigSource, StorageManager};
