//! # Theme System Module
//!
//! Theme loading, validation and runtime switching for the trackhue host.
//!
//! ## Architecture
//!
//! - **[`ThemeLoader`]** - Loads the embedded catalog and the user themes directory
//! - **[`ThemeManager`]** - Process-wide owner of the engine's theme switcher
//! - **Theme Validation** - Name, path and content checks for theme files
//!
//! ## Built-in Themes
//!
//! - **dark classic**, **light classic** - Hand-picked palette colors per channel
//! - **jummbox classic**, **forest**, **canyon**, **midnight** - Channel colors
//!   generated from the HSL formula
//!
//! ## Theme File Structure
//!
//! User themes are read from `~/.config/trackhue/themes/` (or `themes_dir` in
//! `config.toml`). A user theme with the same name as a built-in one replaces it.
//!
//! ```toml
//! [metadata]
//! name = "forest"
//! description = "Green-tinted dark theme"
//! author = "someone"
//!
//! [style]
//! css = '''
//! :root {
//!     --ui-widget-background: #203829;
//!     --use-color-formula: true;
//!     --pitch-primary-note-hue: 120;
//! }
//! '''
//! ```
//!
//! ## Runtime Theme Switching
//!
//! ```no_run
//! use trackhue::theme::ThemeManager;
//! use engine::ChannelCounts;
//!
//! ThemeManager::global_switch_theme("forest")?;
//! let colors = ThemeManager::with_global(|manager| {
//!     manager.channel_colors(0, &ChannelCounts::new(4, 1, 1))
//! })?;
//! # Ok::<(), trackhue::AppError>(())
//! ```

pub mod loader;
pub mod manager;
pub mod types;
pub mod validation;

pub use loader::ThemeLoader;
pub use manager::ThemeManager;
pub use types::{ThemeFile, ThemeSource, ThemeSummary};
