use super::app_config::LogLevel;
use crate::domain::ScreenId;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "uitour",
    version,
    about = "A terminal tour of basic UI components",
    long_about = None
)]
/// Command-line arguments, merged over the config file.
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

    /// Directory with text-art assets overriding the bundled ones.
    #[arg(long, value_name = "DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Enable `TachyonFX` animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Print one screen (welcome, list, textDetail) to stdout and exit.
    #[arg(long, value_name = "ROUTE")]
    pub preview: Option<ScreenId>,

    /// Preview width in columns.
    #[arg(long, default_value_t = 60)]
    pub preview_width: u16,

    /// Preview height in rows.
    #[arg(long, default_value_t = 30)]
    pub preview_height: u16,
}
