use super::app::AppConfig;
use crate::error::AppError;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error(
        "Invalid capacity.{category}: {configured} (min: {min_limit}, max: {max_limit})"
    )]
    Capacity {
        category: String,
        configured: usize,
        min_limit: usize,
        max_limit: usize,
    },
    #[error("Invalid theme: name must not be empty")]
    EmptyTheme,
    #[error("Invalid logging.level: '{configured}'")]
    LogLevel { configured: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::Capacity {
                category,
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Channel capacity out of range!\n\n\
                    Your configured value for {category}: {configured}\n\
                    Valid range: {min_limit} - {max_limit}\n\n\
                    Please update capacity.{category} in config.toml to a value between {min_limit} and {max_limit}."
                )
            }
            ConfigValidationError::EmptyTheme => "No theme selected!\n\n\
                Please set theme in config.toml or pass --theme."
                .to_string(),
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown log level '{configured}'!\n\n\
                    Valid levels: trace, debug, info, warn, error, off\n\n\
                    Please update logging.level in config.toml."
                )
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
    ValidationError(Vec<ConfigValidationError>),
}

impl ConfigLoadResult {
    /// Collapse the result into a single error suitable for reporting
    pub fn into_result(self) -> Result<AppConfig, AppError> {
        match self {
            ConfigLoadResult::Success(config) => Ok(*config),
            ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => {
                Err(AppError::Config(msg))
            }
            ConfigLoadResult::ValidationError(errors) => {
                let messages: Vec<String> = errors.iter().map(|e| e.user_message()).collect();
                Err(AppError::Config(format!(
                    "Configuration validation failed:\n{}",
                    messages.join("\n\n")
                )))
            }
        }
    }
}
