// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences to a `settings.toml` file in the
//! platform configuration directory.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Viewfinder";

/// Pixel distance below which a thumbnail edge triggers an animated
/// centering scroll.
pub const DEFAULT_ENGAGE_SCROLL_PX: f32 = 120.0;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Engage-scroll threshold override in pixels.
    #[serde(default)]
    pub engage_scroll_px: Option<f32>,
    /// Photo index to select when a gallery opens.
    #[serde(default)]
    pub start_index: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engage_scroll_px: Some(DEFAULT_ENGAGE_SCROLL_PX),
            start_index: None,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
