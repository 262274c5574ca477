use anyhow::Context;
use clap::Parser;
use trackhue::commands::{self, Cli};
use trackhue::config;
use trackhue::logger;
use trackhue::theme::ThemeManager;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut app_config = config::load_config(cli.config.as_deref()).into_result()?;
    if let Some(theme) = &cli.theme {
        app_config.set_theme(theme.as_str());
    }

    logger::setup_logger(app_config.logging()).context("Failed to initialize logger")?;
    ThemeManager::init_global(&app_config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ThemeManager::with_global(|manager| commands::execute(&cli.command, manager, &mut out))??;

    Ok(())
}
