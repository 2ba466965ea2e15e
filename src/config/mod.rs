//! Application Configuration
//!
//! Window geometry preferences stored in TOML format. Configuration is
//! cosmetic only: it never changes calculator semantics or the database path.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Main calculator window
    pub window: WindowSettings,
    /// History window
    pub history_window: WindowSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings {
                width: 350.0,
                height: 500.0,
            },
            history_window: WindowSettings {
                width: 400.0,
                height: 300.0,
            },
        }
    }
}

/// Size of one window in logical points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "calchistory", "CalcHistory")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    let config_dir = proj_dirs.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
