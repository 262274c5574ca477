use claims::{assert_err, assert_matches, assert_ok};
use std::fs;
use tempfile::TempDir;
use trackhue::AppError;
use trackhue::config::{self, ConfigLoadResult, ConfigValidationError, env_source};

fn no_env() -> ::config::Map<String, String> {
    ::config::Map::new()
}

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn test_file_values_override_defaults() {
    let (_dir, path) = write_config(
        "theme = \"forest\"\nthemes_dir = \"/tmp/themes\"\n[capacity]\npitch = 10\n",
    );

    let result = config::load_config_with(Some(&path), env_source().source(Some(no_env())));
    let app_config = assert_ok!(result.into_result());

    assert_eq!(app_config.theme(), "forest");
    assert_eq!(app_config.capacity().pitch(), 10);
    assert_eq!(app_config.capacity().noise(), 16);
    assert_eq!(
        app_config.themes_dir(),
        Some(std::path::Path::new("/tmp/themes"))
    );
    // Embedded default config sets warn
    assert_eq!(app_config.logging().level(), "warn");
}

#[test]
fn test_environment_overrides_file() {
    let (_dir, path) = write_config("theme = \"forest\"\n");

    let mut env = no_env();
    env.insert("TRACKHUE_THEME".to_string(), "midnight".to_string());
    env.insert("TRACKHUE_CAPACITY__MODULATION".to_string(), "6".to_string());

    let result = config::load_config_with(Some(&path), env_source().source(Some(env)));
    let app_config = assert_ok!(result.into_result());

    assert_eq!(app_config.theme(), "midnight");
    assert_eq!(app_config.capacity().modulation(), 6);
}

#[test]
fn test_missing_explicit_file_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let result = config::load_config_with(Some(&path), env_source().source(Some(no_env())));
    assert_matches!(result, ConfigLoadResult::LoadError(_));
}

#[test]
fn test_out_of_range_capacity_fails_validation() {
    let (_dir, path) = write_config("[capacity]\npitch = 0\n");

    let result = config::load_config_with(Some(&path), env_source().source(Some(no_env())));
    match result {
        ConfigLoadResult::ValidationError(errors) => {
            assert_matches!(
                errors.as_slice(),
                [ConfigValidationError::Capacity { configured: 0, .. }]
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let (_dir, path) = write_config("[capacity]\npitch = 0\n");
    let err = assert_err!(
        config::load_config_with(Some(&path), env_source().source(Some(no_env()))).into_result()
    );
    assert_matches!(err, AppError::Config(msg) if msg.contains("capacity.pitch"));
}

#[test]
fn test_wrong_type_fails_to_deserialize() {
    let (_dir, path) = write_config("[capacity]\npitch = \"many\"\n");

    let result = config::load_config_with(Some(&path), env_source().source(Some(no_env())));
    assert_matches!(result, ConfigLoadResult::DeserializeError(_));
}
