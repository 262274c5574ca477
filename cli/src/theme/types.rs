use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeStyle {
    /// Style sheet text; channel and UI colors are `--name` variables in `:root`
    pub css: String,
}

/// A theme as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeFile {
    pub metadata: ThemeMetadata,
    pub style: ThemeStyle,
}

impl ThemeFile {
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Engine view of this theme
    pub fn to_theme(&self) -> engine::Theme {
        engine::Theme::new(self.metadata.name.clone(), self.style.css.clone())
    }
}

/// Where a theme was loaded from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSource {
    Builtin,
    User(PathBuf),
}

#[derive(Debug, Clone)]
pub struct LoadedTheme {
    pub file: ThemeFile,
    pub source: ThemeSource,
}

/// Every usable theme keyed by name; user themes replace built-ins of the same name
pub type ThemeCatalog = BTreeMap<String, LoadedTheme>;

/// Listing entry for one theme
#[derive(Debug, Clone, Serialize)]
pub struct ThemeSummary {
    pub name: String,
    pub description: String,
    pub author: Option<String>,
    pub source: ThemeSource,
    pub formula: bool,
    pub active: bool,
}
