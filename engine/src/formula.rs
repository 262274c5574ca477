//! Procedural channel colors.
//!
//! Themes that opt into the formula describe each channel color with six
//! numbers per category and role, read from variables named
//! `{category}-{role}-{hue|sat|lum}[-scale]`, e.g.
//! `pitch-primary-note-hue-scale`.
//!
//! For a channel at category-relative index `r` and absolute index `c`:
//!
//! - hue is `(hue + r * hue_scale / capacity * 256) mod 256`
//! - pitch saturation is `sat * (1 - sat_scale * floor(r / 7))`, and likewise
//!   for luminance, so every further group of seven pitch channels is more muted
//! - noise and mod saturation is `sat + c * sat_scale`, and likewise for
//!   luminance. These scale by the absolute index, not the relative one.

use crate::hsl::{HUE_CYCLE, Hsl};
use crate::model::{ChannelCapacity, ChannelCategory, ChannelColors, ColorRole};
use crate::style::StyleContext;

/// Variable selecting between palette and formula colors
pub const USE_FORMULA_VARIABLE: &str = "use-color-formula";

/// Pitch channels are muted in groups of this many
pub const PITCH_GROUP_SIZE: usize = 7;

const HUE: &str = "hue";
const HUE_SCALE: &str = "hue-scale";
const SAT: &str = "sat";
const SAT_SCALE: &str = "sat-scale";
const LUM: &str = "lum";
const LUM_SCALE: &str = "lum-scale";

/// Name of the variable holding one formula parameter
pub fn variable_name(category: ChannelCategory, role: ColorRole, parameter: &str) -> String {
    format!("{}-{}-{}", category.prefix(), role.key(), parameter)
}

/// The six numbers driving one color of one category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoleParams {
    pub hue: f64,
    pub hue_scale: f64,
    pub sat: f64,
    pub sat_scale: f64,
    pub lum: f64,
    pub lum_scale: f64,
}

impl RoleParams {
    pub fn from_style(style: &StyleContext, category: ChannelCategory, role: ColorRole) -> Self {
        let read = |parameter: &str| style.number(&variable_name(category, role, parameter));
        Self {
            hue: read(HUE),
            hue_scale: read(HUE_SCALE),
            sat: read(SAT),
            sat_scale: read(SAT_SCALE),
            lum: read(LUM),
            lum_scale: read(LUM_SCALE),
        }
    }

    /// Evaluate this color for one channel
    pub fn evaluate(
        &self,
        category: ChannelCategory,
        relative_index: usize,
        channel: usize,
        capacity: usize,
    ) -> Hsl {
        let hue = self.hue + (relative_index as f64 * self.hue_scale / capacity as f64) * HUE_CYCLE;

        let (saturation, luminance) = match category {
            ChannelCategory::Pitch => {
                let group = (relative_index / PITCH_GROUP_SIZE) as f64;
                (
                    self.sat * (1.0 - self.sat_scale * group),
                    self.lum * (1.0 - self.lum_scale * group),
                )
            }
            ChannelCategory::Noise | ChannelCategory::Mod => {
                let channel = channel as f64;
                (
                    self.sat + channel * self.sat_scale,
                    self.lum + channel * self.lum_scale,
                )
            }
        };

        Hsl::new(hue, saturation, luminance)
    }
}

/// Formula parameters of one category, one entry per color role.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryParams {
    pub secondary_channel: RoleParams,
    pub primary_channel: RoleParams,
    pub secondary_note: RoleParams,
    pub primary_note: RoleParams,
}

impl CategoryParams {
    pub fn from_style(style: &StyleContext, category: ChannelCategory) -> Self {
        Self {
            secondary_channel: RoleParams::from_style(style, category, ColorRole::SecondaryChannel),
            primary_channel: RoleParams::from_style(style, category, ColorRole::PrimaryChannel),
            secondary_note: RoleParams::from_style(style, category, ColorRole::SecondaryNote),
            primary_note: RoleParams::from_style(style, category, ColorRole::PrimaryNote),
        }
    }

    pub fn role(&self, role: ColorRole) -> &RoleParams {
        match role {
            ColorRole::SecondaryChannel => &self.secondary_channel,
            ColorRole::PrimaryChannel => &self.primary_channel,
            ColorRole::SecondaryNote => &self.secondary_note,
            ColorRole::PrimaryNote => &self.primary_note,
        }
    }
}

/// Every formula parameter of a theme, read once when the theme is activated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FormulaParams {
    pub pitch: CategoryParams,
    pub noise: CategoryParams,
    pub modulation: CategoryParams,
}

impl FormulaParams {
    pub fn from_style(style: &StyleContext) -> Self {
        Self {
            pitch: CategoryParams::from_style(style, ChannelCategory::Pitch),
            noise: CategoryParams::from_style(style, ChannelCategory::Noise),
            modulation: CategoryParams::from_style(style, ChannelCategory::Mod),
        }
    }

    pub fn category(&self, category: ChannelCategory) -> &CategoryParams {
        match category {
            ChannelCategory::Pitch => &self.pitch,
            ChannelCategory::Noise => &self.noise,
            ChannelCategory::Mod => &self.modulation,
        }
    }

    /// HSL value of one color of a channel
    pub fn evaluate(
        &self,
        role: ColorRole,
        category: ChannelCategory,
        relative_index: usize,
        channel: usize,
        capacity: &ChannelCapacity,
    ) -> Hsl {
        self.category(category).role(role).evaluate(
            category,
            relative_index,
            channel,
            capacity.max(category),
        )
    }

    /// All four colors of a channel, serialized as `hsl()` strings
    pub fn channel_colors(
        &self,
        category: ChannelCategory,
        relative_index: usize,
        channel: usize,
        capacity: &ChannelCapacity,
    ) -> ChannelColors {
        ChannelColors::from_roles(|role| {
            self.evaluate(role, category, relative_index, channel, capacity)
                .to_string()
        })
    }
}

/// How the active theme produces channel colors.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorMode {
    /// Colors come from the [`PaletteTable`](crate::palette::PaletteTable)
    Palette,
    /// Colors are computed from the theme's formula parameters
    Formula(Box<FormulaParams>),
}

impl ColorMode {
    /// Read the mode flag and, for formula themes, all parameters.
    ///
    /// Only the literal value `false` selects the palette. Any other value,
    /// including an absent flag, selects the formula.
    pub fn from_style(style: &StyleContext) -> Self {
        match style.variable(USE_FORMULA_VARIABLE).trim() {
            "false" => return ColorMode::Palette,
            "true" => {}
            "" => log::debug!("--{USE_FORMULA_VARIABLE} not set, using the color formula"),
            flag => log::warn!(
                "Unexpected --{USE_FORMULA_VARIABLE} value '{flag}', using the color formula"
            ),
        }
        ColorMode::Formula(Box::new(FormulaParams::from_style(style)))
    }

    pub fn is_formula(&self) -> bool {
        matches!(self, ColorMode::Formula(_))
    }
}
