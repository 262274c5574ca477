use crate::formula::ColorMode;
use crate::model::{ChannelCapacity, ChannelColors, ChannelCounts};
use crate::palette::PaletteTable;
use crate::style::StyleContext;
use std::collections::HashMap;
use std::sync::Arc;

/// Maps channel indices to color quartets for one active theme.
///
/// A resolver is bound to the theme it was built from: its mode and formula
/// parameters are read once at construction and its cache only ever holds
/// colors computed from them. Switching themes builds a new resolver, which
/// starts with an empty cache.
#[derive(Debug, Clone)]
pub struct ChannelColorResolver {
    mode: ColorMode,
    palette: Arc<PaletteTable>,
    capacity: ChannelCapacity,
    cache: HashMap<usize, ChannelColors>,
}

impl ChannelColorResolver {
    pub fn new(style: &StyleContext, palette: Arc<PaletteTable>, capacity: ChannelCapacity) -> Self {
        Self::with_mode(ColorMode::from_style(style), palette, capacity)
    }

    pub fn with_mode(mode: ColorMode, palette: Arc<PaletteTable>, capacity: ChannelCapacity) -> Self {
        Self {
            mode,
            palette,
            capacity,
            cache: HashMap::new(),
        }
    }

    /// Colors for `channel` given the composition's channel counts.
    ///
    /// Palette themes return the table entry directly. Formula themes compute
    /// the colors on first use and serve later calls for the same channel
    /// from the cache.
    pub fn resolve(&mut self, channel: usize, counts: &ChannelCounts) -> ChannelColors {
        let (category, relative_index) = counts.classify(channel);

        match &self.mode {
            ColorMode::Palette => self.palette.entry(category, relative_index).clone(),
            ColorMode::Formula(params) => {
                if let Some(colors) = self.cache.get(&channel) {
                    return colors.clone();
                }

                log::debug!("Computing {category} colors for channel {channel}");
                let colors =
                    params.channel_colors(category, relative_index, channel, &self.capacity);
                self.cache.insert(channel, colors.clone());
                colors
            }
        }
    }

    /// Like [`resolve`](Self::resolve), but with symbolic palette references
    /// replaced by their literal values from `style`.
    ///
    /// For surfaces that cannot evaluate style variables themselves, such as
    /// pixel-based renderers. Formula colors are already literal.
    pub fn resolve_computed(
        &mut self,
        style: &StyleContext,
        channel: usize,
        counts: &ChannelCounts,
    ) -> ChannelColors {
        let colors = self.resolve(channel, counts);
        match self.mode {
            ColorMode::Palette => colors.map(|color| style.computed(color)),
            ColorMode::Formula(_) => colors,
        }
    }

    /// Drop all cached colors
    pub fn reset_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn mode(&self) -> &ColorMode {
        &self.mode
    }

    pub fn capacity(&self) -> &ChannelCapacity {
        &self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChannelCategory;

    const FORMULA_THEME: &str = r#"
        :root {
            --use-color-formula: true;
            --pitch-secondary-channel-hue: 0;
            --pitch-secondary-channel-hue-scale: 6.1;
            --pitch-secondary-channel-sat: 83.3;
            --pitch-secondary-channel-sat-scale: 0.1;
            --pitch-secondary-channel-lum: 40;
            --pitch-secondary-channel-lum-scale: 0.05;
            --pitch-primary-channel-hue: 0;
            --pitch-primary-channel-hue-scale: 6.1;
            --pitch-primary-channel-sat: 100;
            --pitch-primary-channel-sat-scale: 0.1;
            --pitch-primary-channel-lum: 67.5;
            --pitch-primary-channel-lum-scale: 0.05;
            --noise-primary-channel-hue: 0;
            --noise-primary-channel-hue-scale: 2;
            --noise-primary-channel-sat: 33;
            --noise-primary-channel-lum: 63.5;
            --mod-primary-channel-hue: 192;
            --mod-primary-channel-hue-scale: 1.5;
            --mod-primary-channel-sat: 96;
            --mod-primary-channel-lum: 80;
        }
    "#;

    const PALETTE_THEME: &str = r#"
        :root {
            --use-color-formula: false;
            --pitch1-secondary-channel: #0099A1;
            --pitch1-primary-channel: #25F3FF;
            --pitch1-secondary-note: #00BDC7;
            --pitch1-primary-note: #92F9FF;
            --noise1-primary-channel: #AAAAAA;
        }
    "#;

    fn resolver_for(style: &StyleContext) -> ChannelColorResolver {
        ChannelColorResolver::new(
            style,
            Arc::new(PaletteTable::reference()),
            ChannelCapacity::new(10, 8, 12).unwrap(),
        )
    }

    #[test]
    fn test_formula_first_channel() {
        let style = StyleContext::parse(FORMULA_THEME);
        let mut resolver = resolver_for(&style);
        let counts = ChannelCounts::new(4, 2, 1);

        let colors = resolver.resolve(0, &counts);
        assert_eq!(colors.secondary_channel, "hsl(0,83.3%,40%)");
        assert_eq!(colors.primary_channel, "hsl(0,100%,67.5%)");
    }

    #[test]
    fn test_formula_results_are_cached() {
        let style = StyleContext::parse(FORMULA_THEME);
        let mut resolver = resolver_for(&style);
        let counts = ChannelCounts::new(4, 2, 1);

        let first = resolver.resolve(1, &counts);
        assert_eq!(resolver.cached_len(), 1);
        let second = resolver.resolve(1, &counts);
        assert_eq!(first, second);
        assert_eq!(resolver.cached_len(), 1);

        resolver.reset_cache();
        assert_eq!(resolver.cached_len(), 0);
        assert_eq!(resolver.resolve(1, &counts), first);
    }

    #[test]
    fn test_formula_categories_differ() {
        let style = StyleContext::parse(FORMULA_THEME);
        let mut resolver = resolver_for(&style);
        let counts = ChannelCounts::new(1, 1, 1);

        let noise = resolver.resolve(1, &counts);
        let modulation = resolver.resolve(2, &counts);
        assert_eq!(noise.primary_channel, "hsl(0,33%,63.5%)");
        assert_eq!(modulation.primary_channel, "hsl(192,96%,80%)");
    }

    #[test]
    fn test_palette_mode_never_caches() {
        let style = StyleContext::parse(PALETTE_THEME);
        let mut resolver = resolver_for(&style);
        let counts = ChannelCounts::new(10, 5, 4);

        let colors = resolver.resolve(0, &counts);
        assert_eq!(colors.primary_note, "var(--pitch1-primary-note)");
        assert_eq!(resolver.resolve(10, &counts), colors);
        assert_eq!(resolver.cached_len(), 0);
    }

    #[test]
    fn test_palette_uses_category_relative_index() {
        let style = StyleContext::parse(PALETTE_THEME);
        let mut resolver = resolver_for(&style);
        let counts = ChannelCounts::new(3, 2, 2);

        let noise = resolver.resolve(3, &counts);
        assert_eq!(
            &noise,
            PaletteTable::reference().entry(ChannelCategory::Noise, 0)
        );
        let modulation = resolver.resolve(6, &counts);
        assert_eq!(modulation.primary_channel, "var(--mod2-primary-channel)");
    }

    #[test]
    fn test_computed_unwraps_palette_entries() {
        let style = StyleContext::parse(PALETTE_THEME);
        let mut resolver = resolver_for(&style);
        let counts = ChannelCounts::new(1, 1, 0);

        let pitch = resolver.resolve_computed(&style, 0, &counts);
        assert_eq!(pitch.secondary_channel, "#0099A1");
        assert_eq!(pitch.primary_note, "#92F9FF");

        // Undefined variables degrade to empty values
        let noise = resolver.resolve_computed(&style, 1, &counts);
        assert_eq!(noise.primary_channel, "#AAAAAA");
        assert_eq!(noise.secondary_note, "");
    }

    #[test]
    fn test_computed_passes_formula_colors_through() {
        let style = StyleContext::parse(FORMULA_THEME);
        let mut resolver = resolver_for(&style);
        let counts = ChannelCounts::new(2, 0, 0);

        let plain = resolver.resolve(1, &counts);
        let computed = resolver.resolve_computed(&style, 1, &counts);
        assert_eq!(plain, computed);
    }
}
