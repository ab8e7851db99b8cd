//! Infrastructure layer with adapters for files and the environment.

/// Text-art asset provider.
pub mod assets;
/// Application configuration.
pub mod config;

pub use assets::BundledAssets;
pub use config::{AppConfig, CliArgs, ConfigSource, LogLevel, StorageManager};
