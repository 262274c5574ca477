//! # Trackhue Engine
//!
//! Core library for assigning colors to sequencer channels.
//! This library maps every channel of a composition to a quartet of colors,
//! either from a fixed palette or from a per-theme HSL formula, and keeps
//! those lookups consistent with the active theme across runtime switches.
//!
//! ## Modules
//!
//! - [`errors`] - Engine error types
//! - [`model`] - Channel categories, counts, capacities and color records
//! - [`hsl`] - HSL triples on the 256-step hue wheel
//! - [`style`] - Parsed theme style values and variable resolution
//! - [`ui_color`] - Catalog of the literal UI colors a theme defines
//! - [`palette`] - Pre-authored per-category color tables
//! - [`formula`] - Formula parameters and HSL evaluation
//! - [`resolver`] - Cached channel color resolution
//! - [`theme`] - Theme store and runtime theme switching

pub mod errors;
pub mod formula;
pub mod hsl;
pub mod model;
pub mod palette;
pub mod resolver;
pub mod style;
pub mod theme;
pub mod ui_color;

pub use errors::{EngineError, EngineResult};
pub use formula::{ColorMode, FormulaParams};
pub use model::{ChannelCapacity, ChannelCategory, ChannelColors, ChannelCounts, ColorRole};
pub use palette::PaletteTable;
pub use resolver::ChannelColorResolver;
pub use style::StyleContext;
pub use theme::{AccentIndicator, NoAccent, Theme, ThemeStore, ThemeSwitcher};
pub use ui_color::UiColor;
