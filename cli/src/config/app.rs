use super::{LoggingConfig, limits::*, validation::ConfigValidationError};
use engine::{ChannelCapacity, ChannelCategory, EngineResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default theme when neither the config nor the command line picks one
pub const DEFAULT_THEME: &str = "dark classic";

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    theme: Option<String>,
    themes_dir: Option<PathBuf>,
    #[serde(default)]
    capacity: CapacityConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

/// Maximum channel count per category, used as the divisor of the hue step
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CapacityConfig {
    pitch: Option<usize>,
    noise: Option<usize>,
    modulation: Option<usize>,
}

impl CapacityConfig {
    pub fn pitch(&self) -> usize {
        self.pitch.unwrap_or(ChannelCapacity::DEFAULT_PITCH)
    }

    pub fn noise(&self) -> usize {
        self.noise.unwrap_or(ChannelCapacity::DEFAULT_NOISE)
    }

    pub fn modulation(&self) -> usize {
        self.modulation.unwrap_or(ChannelCapacity::DEFAULT_MODULATION)
    }

    pub fn get(&self, category: ChannelCategory) -> usize {
        match category {
            ChannelCategory::Pitch => self.pitch(),
            ChannelCategory::Noise => self.noise(),
            ChannelCategory::Mod => self.modulation(),
        }
    }

    /// Config keys are `pitch`, `noise` and `modulation`
    fn key(category: ChannelCategory) -> &'static str {
        match category {
            ChannelCategory::Pitch => "pitch",
            ChannelCategory::Noise => "noise",
            ChannelCategory::Mod => "modulation",
        }
    }
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        for category in ChannelCategory::ALL {
            let configured = self.capacity.get(category);
            if !(MIN_CHANNEL_CAPACITY..=MAX_CHANNEL_CAPACITY).contains(&configured) {
                errors.push(ConfigValidationError::Capacity {
                    category: CapacityConfig::key(category).to_string(),
                    configured,
                    min_limit: MIN_CHANNEL_CAPACITY,
                    max_limit: MAX_CHANNEL_CAPACITY,
                });
            }
        }

        if self.theme().trim().is_empty() {
            errors.push(ConfigValidationError::EmptyTheme);
        }

        if self.logging.level().parse::<log::LevelFilter>().is_err() {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging.level().to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn theme(&self) -> &str {
        self.theme.as_deref().unwrap_or(DEFAULT_THEME)
    }

    /// Override the configured theme, e.g. from the command line
    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.theme = Some(theme.into());
    }

    pub fn themes_dir(&self) -> Option<&Path> {
        self.themes_dir.as_deref()
    }

    pub fn capacity(&self) -> &CapacityConfig {
        &self.capacity
    }

    /// Engine capacity built from the configured values
    pub fn channel_capacity(&self) -> EngineResult<ChannelCapacity> {
        ChannelCapacity::new(
            self.capacity.pitch(),
            self.capacity.noise(),
            self.capacity.modulation(),
        )
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}
