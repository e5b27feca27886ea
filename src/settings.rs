//! Configuration external to the simulation
//!
//! Screen dimensions and asset paths. Loaded from a JSON file next to the
//! binary; any load failure degrades to defaults with a logged note, never
//! into the sim.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_H, SCREEN_W};

/// Bitmap paths for the render backend; a missing file means the backend
/// falls back to a solid-color rect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetPaths {
    pub player: String,
    pub wall: String,
    pub background: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            player: "assets/player.bmp".into(),
            wall: "assets/wall.bmp".into(),
            background: "assets/background.bmp".into(),
        }
    }
}

/// Demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub screen_width: f32,
    pub screen_height: f32,
    pub assets: AssetPaths,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_W,
            screen_height: SCREEN_H,
            assets: AssetPaths::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Bad settings file {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings file at {}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as JSON; failures are logged and otherwise ignored.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("Could not save settings to {}: {e}", path.display());
                } else {
                    log::info!("Settings saved to {}", path.display());
                }
            }
            Err(e) => log::warn!("Could not serialize settings: {e}"),
        }
    }
}
