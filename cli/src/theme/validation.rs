use crate::config::limits::MAX_THEME_NAME_LENGTH;
use crate::error::AppError;
use crate::theme::types::ThemeFile;
use crate::validation::Validator;
use engine::StyleContext;
use std::path::Path;

/// Validation errors specific to theme operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeValidationError {
    InvalidThemeName { name: String, reason: String },
    InvalidThemePath { path: String, reason: String },
    MissingMetadata { field: String },
    InvalidFileExtension { path: String, expected: String },
    EmptyStyle { name: String },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::InvalidThemeName { name, reason } => {
                format!(
                    "Invalid theme name: '{name}'\n\n\
                    Reason: {reason}\n\n\
                    Please use valid theme names (letters, digits, spaces, hyphens, underscores)."
                )
            }
            ThemeValidationError::InvalidThemePath { path, reason } => {
                format!(
                    "Invalid theme path: '{path}'\n\n\
                    Reason: {reason}\n\n\
                    Please ensure the path exists and is accessible."
                )
            }
            ThemeValidationError::MissingMetadata { field } => {
                format!(
                    "Missing theme metadata: '{field}'\n\n\
                    Please ensure the theme file contains all required metadata fields."
                )
            }
            ThemeValidationError::InvalidFileExtension { path, expected } => {
                format!(
                    "Invalid file extension for: '{path}'\n\n\
                    Expected: '{expected}' files\n\n\
                    Please ensure theme files have the correct extension."
                )
            }
            ThemeValidationError::EmptyStyle { name } => {
                format!(
                    "Theme '{name}' defines no style variables\n\n\
                    Please declare its colors as --name: value pairs inside a :root block."
                )
            }
        }
    }
}

impl From<ThemeValidationError> for AppError {
    fn from(error: ThemeValidationError) -> Self {
        AppError::Config(error.user_message())
    }
}

/// Validator for theme names. Display names may contain single spaces.
pub struct ThemeNameValidator;

impl Validator<str> for ThemeNameValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let invalid = |reason: &str| ThemeValidationError::InvalidThemeName {
            name: input.to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(invalid("Name cannot be empty"));
        }

        if input.chars().count() > MAX_THEME_NAME_LENGTH {
            return Err(invalid(&format!(
                "Name too long (max {MAX_THEME_NAME_LENGTH} characters)"
            )));
        }

        if !input
            .chars()
            .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_')
        {
            return Err(invalid(
                "Name contains invalid characters (only letters, digits, spaces, hyphens, and underscores allowed)",
            ));
        }

        let is_separator = |c: char| c == ' ' || c == '-' || c == '_';
        if input.starts_with(is_separator) || input.ends_with(is_separator) {
            return Err(invalid(
                "Name cannot start or end with spaces, hyphens or underscores",
            ));
        }

        Ok(())
    }
}

/// Validator for theme file paths
pub struct ThemePathValidator;

impl Validator<Path> for ThemePathValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &Path) -> Result<(), Self::Error> {
        if !input.exists() {
            return Err(ThemeValidationError::InvalidThemePath {
                path: input.display().to_string(),
                reason: "Path does not exist".to_string(),
            });
        }

        if !input.is_file() {
            return Err(ThemeValidationError::InvalidThemePath {
                path: input.display().to_string(),
                reason: "Path is not a file".to_string(),
            });
        }

        if input.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(ThemeValidationError::InvalidFileExtension {
                path: input.display().to_string(),
                expected: "toml".to_string(),
            });
        }

        Ok(())
    }
}

/// Validator for loaded theme content
pub struct ThemeValidator;

impl Validator<ThemeFile> for ThemeValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &ThemeFile) -> Result<(), Self::Error> {
        if input.metadata.name.is_empty() {
            return Err(ThemeValidationError::MissingMetadata {
                field: "name".to_string(),
            });
        }
        ThemeNameValidator.validate(&input.metadata.name)?;

        if input.metadata.description.trim().is_empty() {
            return Err(ThemeValidationError::MissingMetadata {
                field: "description".to_string(),
            });
        }

        if StyleContext::parse(&input.style.css).is_empty() {
            return Err(ThemeValidationError::EmptyStyle {
                name: input.metadata.name.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::types::{ThemeMetadata, ThemeStyle};
    use claims::{assert_err, assert_ok};

    fn theme_file(name: &str, description: &str, css: &str) -> ThemeFile {
        ThemeFile {
            metadata: ThemeMetadata {
                name: name.to_string(),
                description: description.to_string(),
                author: None,
            },
            style: ThemeStyle {
                css: css.to_string(),
            },
        }
    }

    #[test]
    fn test_theme_name_validator() {
        let validator = ThemeNameValidator;

        assert_ok!(validator.validate("dark classic"));
        assert_ok!(validator.validate("theme-name"));
        assert_ok!(validator.validate("theme_123"));

        assert_err!(validator.validate(""));
        assert_err!(validator.validate(" padded"));
        assert_err!(validator.validate("_invalid"));
        assert_err!(validator.validate("invalid-"));
        assert_err!(validator.validate("invalid@theme"));
        assert_err!(validator.validate(&"a".repeat(51)));
    }

    #[test]
    fn test_theme_validator_requires_description() {
        let file = theme_file("forest", "  ", ":root { --page-margin: #000; }");
        assert_eq!(
            assert_err!(ThemeValidator.validate(&file)),
            ThemeValidationError::MissingMetadata {
                field: "description".to_string()
            }
        );
    }

    #[test]
    fn test_theme_validator_requires_root_variables() {
        let file = theme_file("forest", "Green", ".editor { --page-margin: #000; }");
        assert!(matches!(
            assert_err!(ThemeValidator.validate(&file)),
            ThemeValidationError::EmptyStyle { .. }
        ));

        let file = theme_file("forest", "Green", ":root { --page-margin: #000; }");
        assert_ok!(ThemeValidator.validate(&file));
    }

    #[test]
    fn test_errors_convert_to_config_errors() {
        let err: AppError = ThemeValidationError::MissingMetadata {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Config(msg) if msg.contains("'name'")));
    }
}
