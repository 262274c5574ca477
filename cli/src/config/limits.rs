/// Smallest per-category channel capacity; zero would divide by zero in the hue step
pub const MIN_CHANNEL_CAPACITY: usize = 1;

/// Largest per-category channel capacity accepted from configuration
pub const MAX_CHANNEL_CAPACITY: usize = 128;

/// Longest accepted theme name
pub const MAX_THEME_NAME_LENGTH: usize = 50;
