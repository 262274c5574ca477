use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

pub mod app;
pub mod defaults;
pub mod limits;
pub mod setup;
pub mod validation;

pub use app::AppConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Prefix of environment variables overriding config values, e.g. `TRACKHUE_THEME`
pub const ENV_PREFIX: &str = "TRACKHUE";

/// Environment source used for overrides. Nested keys use `__`, as in
/// `TRACKHUE_CAPACITY__PITCH`.
pub fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Load configuration from the embedded defaults, a config file and the
/// process environment.
///
/// `config_path` is an explicitly requested file and must exist. Without it
/// the first of `./config.toml` and `~/.config/trackhue/config.toml` is used,
/// if any.
pub fn load_config(config_path: Option<&Path>) -> ConfigLoadResult {
    load_config_with(config_path, env_source())
}

pub fn load_config_with(config_path: Option<&Path>, environment: Environment) -> ConfigLoadResult {
    let mut builder =
        Config::builder().add_source(File::from_str(defaults::DEFAULT_CONFIG, FileFormat::Toml));

    match config_path {
        Some(path) => {
            log::debug!("Using config file: {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        None => {
            if let Some(path) = setup::find_config_file() {
                log::debug!("Found config file: {}", path.display());
                builder = builder.add_source(
                    File::from(path.as_path())
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }
    }

    // Environment entries override file values
    let config = match builder.add_source(environment).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => match app_config.validate() {
            Ok(()) => ConfigLoadResult::Success(Box::new(app_config)),
            Err(errors) => ConfigLoadResult::ValidationError(errors),
        },
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
