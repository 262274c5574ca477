use crate::errors::{EngineError, EngineResult};
use crate::model::{ChannelCategory, ChannelColors, ColorRole};

/// Pre-authored color quartets for themes that do not use the color formula.
///
/// Each category holds an ordered, non-empty list; channels beyond the end of
/// a list wrap around to its start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteTable {
    pitch: Vec<ChannelColors>,
    noise: Vec<ChannelColors>,
    modulation: Vec<ChannelColors>,
}

impl PaletteTable {
    pub const REFERENCE_PITCH_ENTRIES: usize = 10;
    pub const REFERENCE_NOISE_ENTRIES: usize = 5;
    pub const REFERENCE_MOD_ENTRIES: usize = 4;

    pub fn new(
        pitch: Vec<ChannelColors>,
        noise: Vec<ChannelColors>,
        modulation: Vec<ChannelColors>,
    ) -> EngineResult<Self> {
        for (category, entries) in [
            (ChannelCategory::Pitch, &pitch),
            (ChannelCategory::Noise, &noise),
            (ChannelCategory::Mod, &modulation),
        ] {
            if entries.is_empty() {
                return Err(EngineError::EmptyPalette { category });
            }
        }

        Ok(Self {
            pitch,
            noise,
            modulation,
        })
    }

    /// The standard table layout: entries refer to `--pitch1-...` through
    /// `--pitch10-...`, `--noise1-...` through `--noise5-...` and `--mod1-...`
    /// through `--mod4-...` theme variables.
    pub fn reference() -> Self {
        Self {
            pitch: symbolic_entries(ChannelCategory::Pitch, Self::REFERENCE_PITCH_ENTRIES),
            noise: symbolic_entries(ChannelCategory::Noise, Self::REFERENCE_NOISE_ENTRIES),
            modulation: symbolic_entries(ChannelCategory::Mod, Self::REFERENCE_MOD_ENTRIES),
        }
    }

    pub fn entries(&self, category: ChannelCategory) -> &[ChannelColors] {
        match category {
            ChannelCategory::Pitch => &self.pitch,
            ChannelCategory::Noise => &self.noise,
            ChannelCategory::Mod => &self.modulation,
        }
    }

    /// Entry for a channel, given its index within its category
    pub fn entry(&self, category: ChannelCategory, relative_index: usize) -> &ChannelColors {
        let entries = self.entries(category);
        &entries[relative_index % entries.len()]
    }
}

impl Default for PaletteTable {
    fn default() -> Self {
        Self::reference()
    }
}

fn symbolic_entries(category: ChannelCategory, count: usize) -> Vec<ChannelColors> {
    (1..=count)
        .map(|slot| {
            ChannelColors::from_roles(|role: ColorRole| {
                format!("var(--{}{}-{})", category.prefix(), slot, role.key())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_err;

    #[test]
    fn test_reference_layout() {
        let table = PaletteTable::reference();
        assert_eq!(table.entries(ChannelCategory::Pitch).len(), 10);
        assert_eq!(table.entries(ChannelCategory::Noise).len(), 5);
        assert_eq!(table.entries(ChannelCategory::Mod).len(), 4);

        let first = table.entry(ChannelCategory::Pitch, 0);
        assert_eq!(first.secondary_channel, "var(--pitch1-secondary-channel)");
        assert_eq!(first.primary_note, "var(--pitch1-primary-note)");

        let last_mod = table.entry(ChannelCategory::Mod, 3);
        assert_eq!(last_mod.primary_channel, "var(--mod4-primary-channel)");
    }

    #[test]
    fn test_entry_wraps_around() {
        let table = PaletteTable::reference();
        assert_eq!(
            table.entry(ChannelCategory::Pitch, 10),
            table.entry(ChannelCategory::Pitch, 0)
        );
        assert_eq!(
            table.entry(ChannelCategory::Noise, 7),
            table.entry(ChannelCategory::Noise, 2)
        );
    }

    #[test]
    fn test_new_rejects_empty_category() {
        let one = vec![ChannelColors::new("a", "b", "c", "d")];
        let err = assert_err!(PaletteTable::new(one.clone(), one, Vec::new()));
        assert_eq!(
            err,
            EngineError::EmptyPalette {
                category: ChannelCategory::Mod
            }
        );
    }
}
