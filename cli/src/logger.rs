use crate::config::LoggingConfig;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs::OpenOptions;

/// Map a configured level name to a filter. Unknown names fall back to Info.
pub fn level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Install the global logger.
///
/// Logs go to the configured file, or to stderr so they never mix with
/// command output on stdout.
pub fn setup_logger(logging: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::BrightBlue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let base_config = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level_filter(logging.level()));

    match logging.file() {
        Some(file_path) => match OpenOptions::new().create(true).append(true).open(file_path) {
            Ok(file) => base_config.chain(file).apply()?,
            Err(e) => {
                eprintln!("Warning: Failed to open log file '{file_path}': {e}");
                eprintln!("Logging to stderr instead.");
                base_config.chain(std::io::stderr()).apply()?;
            }
        },
        None => base_config.chain(std::io::stderr()).apply()?,
    }

    log::debug!("Logger initialized with level: {}", logging.level());
    Ok(())
}
