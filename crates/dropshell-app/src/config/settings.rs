//! Settings loading

use std::path::{Path, PathBuf};

use dropshell_core::prelude::*;

use super::types::Settings;

pub const CONFIG_DIR: &str = "dropshell";
pub const CONFIG_FILENAME: &str = "config.toml";

/// `<config_dir>/dropshell/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings
///
/// With an explicit path the file must exist and parse. Without one the
/// default location is optional and a broken file only costs a warning.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let mut settings = match explicit {
        Some(path) => load_explicit(path)?,
        None => match default_config_path() {
            Some(path) => load_default(&path),
            None => {
                debug!("No config directory on this platform, using defaults");
                Settings::default()
            }
        },
    };

    for field in settings.normalize() {
        warn!("Config value {} out of range, clamped", field);
    }

    Ok(settings)
}

fn load_explicit(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config_invalid(path, format!("cannot read file: {e}")))?;
    let settings =
        toml::from_str(&content).map_err(|e| Error::config_invalid(path, e.to_string()))?;
    info!("Loaded settings from {}", path.display());
    Ok(settings)
}

fn load_default(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
