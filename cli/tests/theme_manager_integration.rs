use claims::{assert_err, assert_matches, assert_ok};
use engine::ChannelCounts;
use std::fs;
use tempfile::TempDir;
use trackhue::AppError;
use trackhue::config::{self, env_source};
use trackhue::theme::ThemeManager;

// The global manager can only be initialized once per process, so the whole
// lifecycle runs in a single test.
#[test]
fn test_global_manager_lifecycle() {
    assert_matches!(ThemeManager::global(), Err(AppError::State(_)));

    let dir = TempDir::new().unwrap();
    let themes_dir = dir.path().join("themes");
    fs::create_dir(&themes_dir).unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "theme = \"jummbox classic\"\nthemes_dir = {:?}\n[capacity]\npitch = 10\n",
            themes_dir.display().to_string()
        ),
    )
    .unwrap();

    let app_config = assert_ok!(
        config::load_config_with(
            Some(&config_path),
            env_source().source(Some(::config::Map::new()))
        )
        .into_result()
    );

    assert_ok!(ThemeManager::init_global(&app_config));
    assert_matches!(
        ThemeManager::init_global(&app_config),
        Err(AppError::State(_))
    );

    let counts = ChannelCounts::new(3, 1, 1);
    let before = assert_ok!(ThemeManager::with_global(|manager| {
        assert_eq!(manager.active_theme(), "jummbox classic");
        manager.channel_colors(1, &counts)
    }));
    assert!(before.primary_note.starts_with("hsl("));

    assert_ok!(ThemeManager::global_switch_theme("dark classic"));
    let after = assert_ok!(ThemeManager::with_global(|manager| {
        manager.channel_colors(1, &counts)
    }));
    assert_eq!(after.primary_note, "var(--pitch2-primary-note)");

    assert_err!(ThemeManager::global_switch_theme("neon"));
    let active = assert_ok!(ThemeManager::with_global(|manager| {
        manager.active_theme().to_string()
    }));
    assert_eq!(active, "dark classic");
}
