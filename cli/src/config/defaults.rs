/// Default configuration file embedded in the binary
pub const DEFAULT_CONFIG: &str = include_str!("../../config.default.toml");

/// Built-in theme files embedded in the binary, keyed by file name
pub const DEFAULT_THEMES: &[(&str, &str)] = &[
    (
        "dark-classic.toml",
        include_str!("../../themes/dark-classic.toml"),
    ),
    (
        "light-classic.toml",
        include_str!("../../themes/light-classic.toml"),
    ),
    (
        "jummbox-classic.toml",
        include_str!("../../themes/jummbox-classic.toml"),
    ),
    ("forest.toml", include_str!("../../themes/forest.toml")),
    ("canyon.toml", include_str!("../../themes/canyon.toml")),
    ("midnight.toml", include_str!("../../themes/midnight.toml")),
];
