use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::AppError;

const APP_DIR: &str = "trackhue";
const CONFIG_FILE: &str = "config.toml";
const THEMES_DIR: &str = "themes";

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Failed to determine config directory: {0}")]
    ConfigDir(String),
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<SetupError> for AppError {
    fn from(error: SetupError) -> Self {
        AppError::Config(error.to_string())
    }
}

/// Get the standard configuration directory for the current platform
pub fn get_config_dir() -> Result<PathBuf, SetupError> {
    // Prefer ~/.config/trackhue on Unix-like systems
    if cfg!(unix) {
        if let Some(mut home_path) = dirs::home_dir() {
            home_path.push(".config");
            home_path.push(APP_DIR);
            return Ok(home_path);
        }
    }

    dirs::config_dir()
        .map(|mut path| {
            path.push(APP_DIR);
            path
        })
        .ok_or_else(|| SetupError::ConfigDir("Unable to determine config directory".to_string()))
}

/// Get the standard configuration file path
pub fn get_config_file_path() -> Result<PathBuf, SetupError> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

/// Get the user themes directory path
pub fn get_themes_dir() -> Result<PathBuf, SetupError> {
    Ok(get_config_dir()?.join(THEMES_DIR))
}

/// Create the config directory and its themes subdirectory.
///
/// Config and theme files are embedded in the binary, so nothing is written;
/// users drop override files into these directories.
pub fn initialize_config_dir() -> Result<PathBuf, SetupError> {
    let config_dir = get_config_dir()?;
    create_dir_if_not_exists(&config_dir)?;
    create_dir_if_not_exists(&get_themes_dir()?)?;

    log::info!("Config directory initialized: {}", config_dir.display());
    Ok(config_dir)
}

fn create_dir_if_not_exists(path: &Path) -> Result<(), SetupError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| SetupError::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Find config file using discovery priority
pub fn find_config_file() -> Option<PathBuf> {
    // 1. ./config.toml
    // 2. Standard OS config directory
    let current_dir_config = PathBuf::from(CONFIG_FILE);
    if current_dir_config.exists() {
        return Some(current_dir_config);
    }

    match get_config_file_path() {
        Ok(standard_config) if standard_config.exists() => Some(standard_config),
        _ => None,
    }
}

/// User themes directory, if one exists on disk
pub fn find_themes_dir() -> Option<PathBuf> {
    match get_themes_dir() {
        Ok(dir) if dir.is_dir() => Some(dir),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_determination() {
        let result = get_config_dir();
        assert!(result.is_ok());
        let config_dir = result.unwrap();
        assert!(config_dir.to_string_lossy().contains(APP_DIR));
    }

    #[test]
    fn test_paths_live_under_config_dir() {
        let dir = get_config_dir().unwrap();
        assert_eq!(get_config_file_path().unwrap(), dir.join("config.toml"));
        assert_eq!(get_themes_dir().unwrap(), dir.join("themes"));
    }
}
