use crate::model::ChannelCategory;
use thiserror::Error;

/// Errors raised by the color engine.
///
/// Only construction and theme activation can fail. Color resolution itself
/// never returns an error: malformed or missing theme values degrade to a
/// neutral color instead.
///
/// # Examples
///
/// ```no_run
/// use engine::{EngineError, ThemeSwitcher};
///
/// fn switch(switcher: &mut ThemeSwitcher, name: &str) {
///     match switcher.activate(name) {
///         Ok(()) => {}
///         Err(EngineError::UnknownTheme { name }) => {
///             eprintln!("No theme called '{name}', keeping the current one");
///         }
///         Err(other) => eprintln!("{other}"),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The requested theme is not in the store. The previously active theme
    /// stays in place.
    #[error("Unknown theme: '{name}'")]
    UnknownTheme { name: String },

    /// Two themes with the same name were handed to the store.
    #[error("Duplicate theme name: '{name}'")]
    DuplicateTheme { name: String },

    /// A palette table was built with no entries for a category.
    #[error("Palette for {category} channels has no entries")]
    EmptyPalette { category: ChannelCategory },

    /// A channel capacity of zero was configured for a category.
    #[error("Channel capacity for {category} channels must be greater than zero")]
    InvalidCapacity { category: ChannelCategory },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_subject() {
        let unknown = EngineError::UnknownTheme {
            name: "sunrise".to_string(),
        };
        assert_eq!(unknown.to_string(), "Unknown theme: 'sunrise'");

        let empty = EngineError::EmptyPalette {
            category: ChannelCategory::Noise,
        };
        assert_eq!(empty.to_string(), "Palette for noise channels has no entries");
    }
}
