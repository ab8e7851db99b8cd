use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use uitour::domain::Profile;
use uitour::domain::ports::AssetPort;
use uitour::infrastructure::{AppConfig, BundledAssets, CliArgs, ConfigSource, StorageManager};
use uitour::presentation::App;
use uitour::presentation::theme::Theme;
use uitour::presentation::ui::{StaticScreenRegistry, render_preview};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(args: CliArgs) -> Result<(AppConfig, ConfigSource)> {
    let storage = StorageManager::new()?;
    let (mut config, source) = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok((config, source))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let preview = args
        .preview
        .map(|id| (id, args.preview_width, args.preview_height));

    let (config, config_source) = load_config(args)?;
    init_logging(&config)?;

    info!(version = uitour::VERSION, "Starting {}", uitour::NAME);
    config_source.log();

    let assets: Arc<dyn AssetPort> = Arc::new(BundledAssets::new(config.assets_dir.clone()));

    if let Some((id, width, height)) = preview {
        let registry = StaticScreenRegistry::new(
            Theme::new(&config.theme.accent_color),
            Profile::from(&config.profile),
            assets,
        );
        print!("{}", render_preview(&registry, id, width, height));
        return Ok(());
    }

    let app = App::new(&config, assets);

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
