use crate::config::defaults::DEFAULT_THEMES;
use crate::error::{AppError, AppResult};
use crate::theme::types::{LoadedTheme, ThemeCatalog, ThemeFile, ThemeSource};
use crate::theme::validation::{ThemePathValidator, ThemeValidator};
use crate::validation::Validator;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Theme loader responsible for the embedded catalog and the user themes directory
pub struct ThemeLoader {
    themes_dir: Option<PathBuf>,
    path_validator: ThemePathValidator,
    theme_validator: ThemeValidator,
}

impl ThemeLoader {
    /// Loader for built-in themes plus the `*.toml` files of `themes_dir`
    pub fn new(themes_dir: Option<PathBuf>) -> Self {
        Self {
            themes_dir,
            path_validator: ThemePathValidator,
            theme_validator: ThemeValidator,
        }
    }

    pub fn themes_dir(&self) -> Option<&Path> {
        self.themes_dir.as_deref()
    }

    /// Parse and validate theme file contents. `origin` names the source in errors.
    pub fn parse_theme(&self, content: &str, origin: &str) -> AppResult<ThemeFile> {
        let theme: ThemeFile = toml::from_str(content).map_err(|e| {
            AppError::Config(format!("Failed to parse theme file '{origin}': {e}"))
        })?;

        self.theme_validator.validate(&theme)?;
        Ok(theme)
    }

    pub fn load_theme_file(&self, path: &Path) -> AppResult<ThemeFile> {
        self.path_validator.validate(path)?;

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Io(format!(
                "Failed to read theme file '{}': {e}",
                path.display()
            ))
        })?;

        self.parse_theme(&content, &path.display().to_string())
    }

    /// Themes compiled into the binary
    pub fn load_builtin(&self) -> AppResult<Vec<LoadedTheme>> {
        DEFAULT_THEMES
            .iter()
            .map(|(file_name, content)| {
                Ok(LoadedTheme {
                    file: self.parse_theme(content, file_name)?,
                    source: ThemeSource::Builtin,
                })
            })
            .collect()
    }

    /// Themes from the user directory. Files that fail to load are skipped
    /// with a warning.
    pub fn discover_user_themes(&self) -> AppResult<Vec<LoadedTheme>> {
        let Some(themes_dir) = self.themes_dir.as_deref() else {
            return Ok(vec![]);
        };
        if !themes_dir.exists() {
            log::warn!("Themes directory '{}' does not exist", themes_dir.display());
            return Ok(vec![]);
        }

        let entries = fs::read_dir(themes_dir).map_err(|e| {
            AppError::Io(format!(
                "Failed to read themes directory '{}': {e}",
                themes_dir.display()
            ))
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| AppError::Io(format!("Failed to read directory entry: {e}")))?;
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut themes = Vec::new();
        for path in paths {
            match self.load_theme_file(&path) {
                Ok(file) => themes.push(LoadedTheme {
                    file,
                    source: ThemeSource::User(path),
                }),
                Err(e) => log::warn!("Skipping theme file '{}': {e}", path.display()),
            }
        }

        Ok(themes)
    }

    /// Built-in and user themes merged by name
    pub fn load_catalog(&self) -> AppResult<ThemeCatalog> {
        let mut catalog = ThemeCatalog::new();

        for theme in self.load_builtin()? {
            catalog.insert(theme.file.name().to_string(), theme);
        }

        for theme in self.discover_user_themes()? {
            let name = theme.file.name().to_string();
            match catalog.get(&name).map(|existing| &existing.source) {
                Some(ThemeSource::Builtin) => {
                    log::info!("User theme '{name}' replaces the built-in theme")
                }
                Some(ThemeSource::User(previous)) => log::warn!(
                    "Theme '{name}' is defined more than once, ignoring '{}'",
                    previous.display()
                ),
                None => {}
            }
            catalog.insert(name, theme);
        }

        log::debug!("Loaded {} themes", catalog.len());
        Ok(catalog)
    }
}

impl Default for ThemeLoader {
    fn default() -> Self {
        Self::new(None)
    }
}
