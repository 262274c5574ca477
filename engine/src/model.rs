use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three kinds of channel a composition is partitioned into, in the order
/// they appear in the channel list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelCategory {
    Pitch,
    Noise,
    Mod,
}

impl ChannelCategory {
    pub const ALL: [ChannelCategory; 3] = [Self::Pitch, Self::Noise, Self::Mod];

    /// Prefix used by the style variables of this category
    pub fn prefix(self) -> &'static str {
        match self {
            ChannelCategory::Pitch => "pitch",
            ChannelCategory::Noise => "noise",
            ChannelCategory::Mod => "mod",
        }
    }
}

impl fmt::Display for ChannelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// The four colors drawn for every channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorRole {
    SecondaryChannel,
    PrimaryChannel,
    SecondaryNote,
    PrimaryNote,
}

impl ColorRole {
    pub const ALL: [ColorRole; 4] = [
        Self::SecondaryChannel,
        Self::PrimaryChannel,
        Self::SecondaryNote,
        Self::PrimaryNote,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ColorRole::SecondaryChannel => "secondary-channel",
            ColorRole::PrimaryChannel => "primary-channel",
            ColorRole::SecondaryNote => "secondary-note",
            ColorRole::PrimaryNote => "primary-note",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Color quartet for one channel.
///
/// Values are opaque color expressions: either symbolic references such as
/// `var(--pitch1-primary-note)` or literal colors such as `hsl(0,100%,67.5%)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelColors {
    pub secondary_channel: String,
    pub primary_channel: String,
    pub secondary_note: String,
    pub primary_note: String,
}

impl ChannelColors {
    pub fn new(
        secondary_channel: impl Into<String>,
        primary_channel: impl Into<String>,
        secondary_note: impl Into<String>,
        primary_note: impl Into<String>,
    ) -> Self {
        Self {
            secondary_channel: secondary_channel.into(),
            primary_channel: primary_channel.into(),
            secondary_note: secondary_note.into(),
            primary_note: primary_note.into(),
        }
    }

    /// Build a quartet by evaluating `f` once per role
    pub fn from_roles<F>(mut f: F) -> Self
    where
        F: FnMut(ColorRole) -> String,
    {
        Self {
            secondary_channel: f(ColorRole::SecondaryChannel),
            primary_channel: f(ColorRole::PrimaryChannel),
            secondary_note: f(ColorRole::SecondaryNote),
            primary_note: f(ColorRole::PrimaryNote),
        }
    }

    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::SecondaryChannel => &self.secondary_channel,
            ColorRole::PrimaryChannel => &self.primary_channel,
            ColorRole::SecondaryNote => &self.secondary_note,
            ColorRole::PrimaryNote => &self.primary_note,
        }
    }

    /// Apply `f` to every color, keeping the role layout
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        Self::from_roles(|role| f(self.get(role)))
    }
}

/// Number of channels of each category in the current composition.
///
/// Owned by the song model; the engine only reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelCounts {
    pub pitch: usize,
    pub noise: usize,
    pub modulation: usize,
}

impl ChannelCounts {
    pub fn new(pitch: usize, noise: usize, modulation: usize) -> Self {
        Self {
            pitch,
            noise,
            modulation,
        }
    }

    /// Total channel count, saturating at `usize::MAX`.
    pub fn total(&self) -> usize {
        self.pitch
            .saturating_add(self.noise)
            .saturating_add(self.modulation)
    }

    /// Category of `channel` and its index counted from the start of that category.
    ///
    /// Indices past the last noise channel are modulation channels, even when
    /// they are beyond `total()`.
    pub fn classify(&self, channel: usize) -> (ChannelCategory, usize) {
        if channel < self.pitch {
            return (ChannelCategory::Pitch, channel);
        }

        let past_pitch = channel - self.pitch;
        if past_pitch < self.noise {
            (ChannelCategory::Noise, past_pitch)
        } else {
            (ChannelCategory::Mod, past_pitch - self.noise)
        }
    }
}

/// Maximum number of channels supported per category.
///
/// This is the divisor of the formula's hue step, so it is fixed
/// configuration and never derived from the live channel counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelCapacity {
    pitch: usize,
    noise: usize,
    modulation: usize,
}

impl ChannelCapacity {
    pub const DEFAULT_PITCH: usize = 40;
    pub const DEFAULT_NOISE: usize = 16;
    pub const DEFAULT_MODULATION: usize = 12;

    pub fn new(pitch: usize, noise: usize, modulation: usize) -> EngineResult<Self> {
        for (category, value) in [
            (ChannelCategory::Pitch, pitch),
            (ChannelCategory::Noise, noise),
            (ChannelCategory::Mod, modulation),
        ] {
            if value == 0 {
                return Err(EngineError::InvalidCapacity { category });
            }
        }

        Ok(Self {
            pitch,
            noise,
            modulation,
        })
    }

    pub fn max(&self, category: ChannelCategory) -> usize {
        match category {
            ChannelCategory::Pitch => self.pitch,
            ChannelCategory::Noise => self.noise,
            ChannelCategory::Mod => self.modulation,
        }
    }
}

impl Default for ChannelCapacity {
    fn default() -> Self {
        Self {
            pitch: Self::DEFAULT_PITCH,
            noise: Self::DEFAULT_NOISE,
            modulation: Self::DEFAULT_MODULATION,
        }
    }
}
