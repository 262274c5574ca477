use std::fmt::Display;

/// Application-wide error types for the trackhue host.
///
/// Engine failures, theme file problems and configuration issues all end up
/// here so `main` has a single type to report.
///
/// # Error Categories
///
/// - [`Config`](AppError::Config) - Configuration loading and validation, including invalid theme files
/// - [`Theme`](AppError::Theme) - Theme store and switching failures reported by the engine
/// - [`Io`](AppError::Io) - File system failures
/// - [`State`](AppError::State) - Global manager lifecycle problems
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Configuration loading and validation errors.
    ///
    /// Covers unreadable or malformed `config.toml`, out-of-range limits and
    /// theme files that fail validation.
    Config(String),

    /// Theme selection errors, such as activating a theme that is not in the
    /// catalog.
    Theme(String),

    /// File system and I/O operation failures.
    Io(String),

    /// Global state lifecycle errors, e.g. using the theme manager before it
    /// was initialized or initializing it twice.
    State(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Theme(msg) => write!(f, "Theme Error: {msg}"),
            AppError::Io(msg) => write!(f, "IO Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<engine::EngineError> for AppError {
    fn from(err: engine::EngineError) -> Self {
        AppError::Theme(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use engine::EngineError;

    #[test]
    fn test_engine_errors_become_theme_errors() {
        let err: AppError = EngineError::UnknownTheme {
            name: "neon".to_string(),
        }
        .into();

        assert!(matches!(err, AppError::Theme(_)));
        assert!(err.to_string().starts_with("Theme Error:"));
        assert!(err.to_string().contains("neon"));
    }

    #[test]
    fn test_io_errors_keep_their_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let err: AppError = io.into();
        assert_eq!(err, AppError::Io("missing file".to_string()));
    }
}
