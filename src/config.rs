//! Application configuration.
//!
//! Loaded from `<config dir>/joymap/config.toml`. Missing or corrupt
//! configuration degrades to defaults with a warning rather than failing
//! startup; a default file is written on first run.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct AppConfig {
    /// File the Save/Load buttons operate on.
    pub assignment_file: PathBuf,
    /// Scale factor applied to the whole UI.
    pub ui_scale: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            assignment_file: PathBuf::from("save.data"),
            ui_scale: 1.25,
        }
    }
}

impl AppConfig {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("joymap").join("config.toml"))
    }

    /// Loads the config file, writing a default one first if none exists.
    pub fn load() -> AppConfig {
        let Some(path) = Self::config_path() else {
            warn!("no config directory available, using defaults");
            return AppConfig::default();
        };

        if !path.exists() {
            Self::write_default(&path);
        }

        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!("invalid config {}: {}", path.display(), e);
                    AppConfig::default()
                }
            },
            Err(e) => {
                warn!("could not read {}: {}", path.display(), e);
                AppConfig::default()
            }
        }
    }

    fn write_default(path: &std::path::Path) {
        let default = AppConfig::default();
        let contents = match toml::to_string_pretty(&default) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("could not serialize default config: {}", e);
                return;
            }
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("could not create {}: {}", parent.display(), e);
                return;
            }
        }
        match fs::write(path, contents) {
            Ok(()) => info!("wrote default config to {}", path.display()),
            Err(e) => warn!("could not write {}: {}", path.display(), e),
        }
    }
}
