use anyhow::Context;
use clap::Parser;
use parkui::app::context::UiContext;
use parkui::cli::{self, Cli};
use parkui::config::{self, ConfigPresetStore, setup};
use parkui::logger;
use parkui::theme::{ThemeLoader, ThemeManager};
use std::path::{Path, PathBuf};
use tokio::runtime::Handle;

/// `--config`, else the first config file found, else a freshly initialised
/// config directory.
fn resolve_config_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = setup::find_config_file() {
        return Ok(path);
    }
    setup::initialize_config_dir().context("Failed to initialize config directory")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = config::load_config(Some(&config_path)).into_config()?;

    let log_file = setup::get_log_file_path()
        .ok()
        .filter(|path| path.parent().is_some_and(Path::exists));
    if let Err(e) = logger::setup_logger(config.logging(), log_file.as_deref()) {
        eprintln!("Warning: Failed to initialize logger: {e}");
    }
    log::debug!("Using config file {}", config_path.display());

    let themes_dir = match cli.themes_dir {
        Some(dir) => dir,
        None => config.themes_dir()?,
    };
    let presets = ConfigPresetStore::new(&config_path, config.interface().current_theme_preset());
    let themes = ThemeManager::new(ThemeLoader::new(themes_dir), Box::new(presets));

    let mut ui = UiContext::new(&config, themes, Handle::current());
    ui.initialise();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(cli.command, &mut ui, &mut out)?;
    Ok(())
}
