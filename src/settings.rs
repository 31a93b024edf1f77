//! Game settings and preferences
//!
//! Read from `platformer.json` in the working directory on native builds and
//! from LocalStorage in the browser. Every field is optional in the file.

use serde::{Deserialize, Serialize};

use crate::sim::BoundaryMode;
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side-wall behavior for the player
    pub boundary: BoundaryMode,
    /// Fixed run seed (random per launch when unset)
    pub seed: Option<u64>,
    /// Window scale factor relative to the arena size (native only)
    pub window_scale: f32,
    /// Blink the player while the teleport grace period runs
    pub grace_blink: bool,
    /// Physics and level-generation constants
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            boundary: BoundaryMode::Clamp,
            seed: None,
            window_scale: 1.5,
            grace_blink: true,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Settings file name (native)
    pub const FILE_NAME: &'static str = "platformer.json";

    /// LocalStorage key (web)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "platformer_settings";

    /// Parse settings JSON, repairing inconsistent values
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.tuning = settings.tuning.sanitized();
        if !(settings.window_scale.is_finite() && settings.window_scale > 0.0) {
            log::warn!("Invalid window_scale {}, using 1.0", settings.window_scale);
            settings.window_scale = 1.0;
        }
        Ok(settings)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the working directory (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_from(std::path::Path::new(Self::FILE_NAME))
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No {} found, using default settings", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
