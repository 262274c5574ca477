use crate::errors::{EngineError, EngineResult};
use crate::formula::ColorMode;
use crate::model::{ChannelCapacity, ChannelColors, ChannelCounts};
use crate::palette::PaletteTable;
use crate::resolver::ChannelColorResolver;
use crate::style::StyleContext;
use crate::ui_color::UiColor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A named bundle of style values, kept as the text it was authored in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub style: String,
}

impl Theme {
    pub fn new(name: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: style.into(),
        }
    }
}

/// Immutable catalog of themes, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ThemeStore {
    themes: BTreeMap<String, Theme>,
}

impl ThemeStore {
    /// Build a store, rejecting repeated names
    pub fn new<I>(themes: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = Theme>,
    {
        let mut map = BTreeMap::new();
        for theme in themes {
            if map.contains_key(&theme.name) {
                return Err(EngineError::DuplicateTheme { name: theme.name });
            }
            map.insert(theme.name.clone(), theme);
        }

        log::info!("Theme store created with {} themes", map.len());
        Ok(Self { themes: map })
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Theme names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

/// Host-level indicator that mirrors the active theme's accent color,
/// such as a browser chrome tint or a terminal title color.
pub trait AccentIndicator {
    fn set_accent(&mut self, color: &str);
}

/// Accent indicator for hosts that have none
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAccent;

impl AccentIndicator for NoAccent {
    fn set_accent(&mut self, _color: &str) {}
}

/// Everything derived from the active theme. Replaced as a whole on every switch.
#[derive(Debug)]
struct ActiveTheme {
    name: String,
    style: StyleContext,
    resolver: ChannelColorResolver,
}

impl ActiveTheme {
    fn build(theme: &Theme, palette: &Arc<PaletteTable>, capacity: ChannelCapacity) -> Self {
        let style = StyleContext::parse(&theme.style);
        let resolver = ChannelColorResolver::new(&style, Arc::clone(palette), capacity);
        Self {
            name: theme.name.clone(),
            style,
            resolver,
        }
    }
}

/// Owns the active theme and the only path for changing it.
///
/// Activation parses the theme once, derives its color mode and formula
/// parameters, and swaps in a fresh resolver so no color computed for the
/// previous theme can be served afterwards.
///
/// `ThemeSwitcher` is single-threaded. Hosts sharing it across threads must
/// serialize access, e.g. behind a `Mutex`.
pub struct ThemeSwitcher {
    store: ThemeStore,
    palette: Arc<PaletteTable>,
    capacity: ChannelCapacity,
    accent: Box<dyn AccentIndicator + Send>,
    active: ActiveTheme,
}

impl ThemeSwitcher {
    /// Create a switcher with `initial` already active
    pub fn new(
        store: ThemeStore,
        palette: PaletteTable,
        capacity: ChannelCapacity,
        initial: &str,
    ) -> EngineResult<Self> {
        Self::with_accent(store, palette, capacity, initial, Box::new(NoAccent))
    }

    pub fn with_accent(
        store: ThemeStore,
        palette: PaletteTable,
        capacity: ChannelCapacity,
        initial: &str,
        mut accent: Box<dyn AccentIndicator + Send>,
    ) -> EngineResult<Self> {
        let palette = Arc::new(palette);
        let theme = store.get(initial).ok_or_else(|| EngineError::UnknownTheme {
            name: initial.to_string(),
        })?;
        let active = ActiveTheme::build(theme, &palette, capacity);
        accent.set_accent(&active.style.ui_color(UiColor::ACCENT));

        log::info!("Initial theme: {initial}");
        Ok(Self {
            store,
            palette,
            capacity,
            accent,
            active,
        })
    }

    /// Make `name` the active theme.
    ///
    /// On an unknown name the current theme stays active and an error is
    /// returned. Activating the already active theme rebuilds it, which also
    /// empties the color cache.
    pub fn activate(&mut self, name: &str) -> EngineResult<()> {
        let theme = self.store.get(name).ok_or_else(|| {
            log::warn!("Cannot switch to unknown theme '{name}'");
            EngineError::UnknownTheme {
                name: name.to_string(),
            }
        })?;

        self.active = ActiveTheme::build(theme, &self.palette, self.capacity);
        self.accent
            .set_accent(&self.active.style.ui_color(UiColor::ACCENT));

        log::info!(
            "Switched to theme: {name} ({})",
            if self.active.resolver.mode().is_formula() {
                "formula colors"
            } else {
                "palette colors"
            }
        );
        Ok(())
    }

    /// Colors for `channel`; palette entries are symbolic references
    pub fn resolve(&mut self, channel: usize, counts: &ChannelCounts) -> ChannelColors {
        self.active.resolver.resolve(channel, counts)
    }

    /// Colors for `channel` with every symbolic reference resolved to a literal
    pub fn resolve_computed(&mut self, channel: usize, counts: &ChannelCounts) -> ChannelColors {
        let active = &mut self.active;
        active
            .resolver
            .resolve_computed(&active.style, channel, counts)
    }

    /// Drop cached colors of the active theme
    pub fn reset_cache(&mut self) {
        self.active.resolver.reset_cache();
    }

    pub fn cached_len(&self) -> usize {
        self.active.resolver.cached_len()
    }

    pub fn active_name(&self) -> &str {
        &self.active.name
    }

    pub fn style(&self) -> &StyleContext {
        &self.active.style
    }

    pub fn mode(&self) -> &ColorMode {
        self.active.resolver.mode()
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    pub fn capacity(&self) -> &ChannelCapacity {
        &self.capacity
    }
}

impl std::fmt::Debug for ThemeSwitcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeSwitcher")
            .field("active", &self.active.name)
            .field("themes", &self.store.len())
            .finish_non_exhaustive()
    }
}
