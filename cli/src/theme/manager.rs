use crate::config::{AppConfig, setup};
use crate::error::{AppError, AppResult};
use crate::theme::{
    loader::ThemeLoader,
    types::{ThemeCatalog, ThemeSummary},
};
use engine::formula::USE_FORMULA_VARIABLE;
use engine::{
    AccentIndicator, ChannelCapacity, ChannelColors, ChannelCounts, PaletteTable, StyleContext,
    ThemeStore, ThemeSwitcher, UiColor,
};
use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex};

// Global theme manager instance, wrapped in Mutex for thread-safe switching
static GLOBAL_THEME_MANAGER: OnceCell<Mutex<ThemeManager>> = OnceCell::new();

/// Accent color of the active theme, shared between the switcher and the host
#[derive(Debug, Clone, Default)]
pub struct SharedAccent(Arc<Mutex<String>>);

impl SharedAccent {
    pub fn get(&self) -> String {
        match self.0.lock() {
            Ok(color) => color.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl AccentIndicator for SharedAccent {
    fn set_accent(&mut self, color: &str) {
        let mut current = match self.0.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *current = color.to_string();
    }
}

pub struct ThemeManager {
    switcher: ThemeSwitcher,
    catalog: ThemeCatalog,
    accent: SharedAccent,
}

impl ThemeManager {
    /// Load every theme the configuration points at and activate its selected theme
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let themes_dir = config
            .themes_dir()
            .map(|dir| dir.to_path_buf())
            .or_else(setup::find_themes_dir);
        let catalog = ThemeLoader::new(themes_dir).load_catalog()?;
        let capacity = config.channel_capacity()?;

        Self::from_catalog(catalog, capacity, config.theme())
    }

    pub fn from_catalog(
        catalog: ThemeCatalog,
        capacity: ChannelCapacity,
        initial: &str,
    ) -> AppResult<Self> {
        let store = ThemeStore::new(catalog.values().map(|theme| theme.file.to_theme()))?;
        let accent = SharedAccent::default();
        let switcher = ThemeSwitcher::with_accent(
            store,
            PaletteTable::reference(),
            capacity,
            initial,
            Box::new(accent.clone()),
        )
        .map_err(|e| {
            AppError::Theme(format!(
                "{e}. Available themes: {}",
                catalog.keys().cloned().collect::<Vec<_>>().join(", ")
            ))
        })?;

        Ok(Self {
            switcher,
            catalog,
            accent,
        })
    }

    /// Initialize the global theme manager - call this once at startup
    pub fn init_global(config: &AppConfig) -> AppResult<()> {
        let manager = Self::new(config)?;

        GLOBAL_THEME_MANAGER
            .set(Mutex::new(manager))
            .map_err(|_| AppError::State("Theme manager already initialized".to_string()))?;

        log::info!("Global theme manager initialized");
        Ok(())
    }

    /// Get the global theme manager instance
    pub fn global() -> AppResult<&'static Mutex<ThemeManager>> {
        GLOBAL_THEME_MANAGER.get().ok_or_else(|| {
            AppError::State(
                "Theme manager not initialized. Call ThemeManager::init_global() first."
                    .to_string(),
            )
        })
    }

    /// Run `f` with exclusive access to the global manager
    pub fn with_global<F, R>(f: F) -> AppResult<R>
    where
        F: FnOnce(&mut ThemeManager) -> R,
    {
        let mut manager = Self::global()?
            .lock()
            .map_err(|_| AppError::State("Theme manager lock poisoned".to_string()))?;
        Ok(f(&mut manager))
    }

    /// Switch the global manager to another theme
    pub fn global_switch_theme(name: &str) -> AppResult<()> {
        Self::with_global(|manager| manager.switch_theme(name))?
    }

    /// Switch to another theme; on failure the current theme stays active
    pub fn switch_theme(&mut self, name: &str) -> AppResult<()> {
        self.switcher.activate(name)?;
        Ok(())
    }

    pub fn active_theme(&self) -> &str {
        self.switcher.active_name()
    }

    /// Accent color last pushed by the active theme
    pub fn accent(&self) -> String {
        self.accent.get()
    }

    pub fn style(&self) -> &StyleContext {
        self.switcher.style()
    }

    pub fn switcher(&self) -> &ThemeSwitcher {
        &self.switcher
    }

    pub fn channel_colors(&mut self, channel: usize, counts: &ChannelCounts) -> ChannelColors {
        self.switcher.resolve(channel, counts)
    }

    pub fn computed_channel_colors(
        &mut self,
        channel: usize,
        counts: &ChannelCounts,
    ) -> ChannelColors {
        self.switcher.resolve_computed(channel, counts)
    }

    /// Colors of every channel in `counts`, in channel order
    pub fn all_channel_colors(&mut self, counts: &ChannelCounts, computed: bool) -> Vec<ChannelColors> {
        (0..counts.total())
            .map(|channel| {
                if computed {
                    self.computed_channel_colors(channel, counts)
                } else {
                    self.channel_colors(channel, counts)
                }
            })
            .collect()
    }

    /// A style variable of the active theme, raw or fully resolved
    pub fn variable(&self, name: &str, computed: bool) -> String {
        let style = self.switcher.style();
        if computed {
            style.computed(&format!("--{}", name.trim_start_matches("--")))
        } else {
            style.variable(name).to_string()
        }
    }

    /// Every literal UI color of the active theme
    pub fn ui_colors(&self) -> Vec<(UiColor, String)> {
        let style = self.switcher.style();
        UiColor::ALL
            .iter()
            .map(|color| (*color, style.ui_color(*color)))
            .collect()
    }

    /// Listing of every loaded theme, sorted by name
    pub fn available_themes(&self) -> Vec<ThemeSummary> {
        self.catalog
            .values()
            .map(|theme| {
                let style = StyleContext::parse(&theme.file.style.css);
                ThemeSummary {
                    name: theme.file.metadata.name.clone(),
                    description: theme.file.metadata.description.clone(),
                    author: theme.file.metadata.author.clone(),
                    source: theme.source.clone(),
                    formula: style.variable(USE_FORMULA_VARIABLE).trim() != "false",
                    active: theme.file.metadata.name == self.active_theme(),
                }
            })
            .collect()
    }
}

impl std::fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeManager")
            .field("active", &self.active_theme())
            .field("themes", &self.catalog.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    fn manager(initial: &str) -> ThemeManager {
        let catalog = ThemeLoader::default().load_catalog().unwrap();
        ThemeManager::from_catalog(catalog, ChannelCapacity::default(), initial).unwrap()
    }

    #[test]
    fn test_unknown_initial_theme_lists_alternatives() {
        let catalog = ThemeLoader::default().load_catalog().unwrap();
        let err = assert_err!(ThemeManager::from_catalog(
            catalog,
            ChannelCapacity::default(),
            "neon"
        ));
        assert!(err.to_string().contains("dark classic"));
    }

    #[test]
    fn test_switch_updates_accent_and_mode() {
        let mut manager = manager("dark classic");
        assert!(!manager.switcher().mode().is_formula());
        let dark_accent = manager.accent();
        assert_eq!(dark_accent, manager.style().ui_color(UiColor::ACCENT));

        assert_ok!(manager.switch_theme("jummbox classic"));
        assert_eq!(manager.active_theme(), "jummbox classic");
        assert!(manager.switcher().mode().is_formula());
        assert_eq!(manager.accent(), manager.style().ui_color(UiColor::ACCENT));
    }

    #[test]
    fn test_failed_switch_keeps_theme() {
        let mut manager = manager("forest");
        let err = assert_err!(manager.switch_theme("neon"));
        assert!(matches!(err, AppError::Theme(_)));
        assert_eq!(manager.active_theme(), "forest");
    }

    #[test]
    fn test_all_channel_colors_covers_every_channel() {
        let mut manager = manager("dark classic");
        let counts = ChannelCounts::new(3, 1, 1);

        let symbolic = manager.all_channel_colors(&counts, false);
        assert_eq!(symbolic.len(), 5);
        assert_eq!(symbolic[3].primary_channel, "var(--noise1-primary-channel)");

        let computed = manager.all_channel_colors(&counts, true);
        assert!(computed.iter().all(|c| !c.primary_channel.starts_with("var(")));
    }

    #[test]
    fn test_available_themes_marks_active() {
        let manager = manager("midnight");
        let themes = manager.available_themes();
        let active: Vec<&str> = themes
            .iter()
            .filter(|t| t.active)
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(active, vec!["midnight"]);

        let dark = themes.iter().find(|t| t.name == "dark classic").unwrap();
        assert!(!dark.formula);
    }

    #[test]
    fn test_variable_lookup() {
        let manager = manager("dark classic");
        assert_eq!(manager.variable("use-color-formula", false), "false");
        assert_eq!(manager.variable("--ui-widget-background", true), "#444");
        assert_eq!(manager.variable("no-such-variable", true), "");
    }
}
