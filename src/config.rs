use std::error;
use std::fs;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use iced::Color;
use log::{debug, error, info};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::toast::{DEFAULT_DURATION, ToastStyle};
use crate::utils::get_assets_path;

/// Main structure holding runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: Config,
}

impl Settings {
    /// Loads settings from disk or uses defaults if the file is missing or invalid
    pub fn load() -> Self {
        let config = Self::load_config();
        Settings { config }
    }

    /// Reads config.json and deserializes into Config
    fn load_config() -> Config {
        let config_path = get_assets_path().join("config.json");

        fs::read_to_string(&config_path)
            .and_then(|content| serde_json::from_str(&content).map_err(Into::into))
            .unwrap_or_else(|err| {
                error!("Failed to load config.json: {}. Using default config.", err);
                Config::default()
            })
    }

    /// Saves the current settings to config.json
    pub fn save(&self) -> Result<(), Box<dyn error::Error>> {
        let config_path = get_assets_path().join("config.json");
        let config_json = serde_json::to_string_pretty(&self.config)?;

        debug!("Saving config to {}", config_path.display());
        debug!("Config JSON: {}", config_json);

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, config_json)?;
        info!("Config saved");
        Ok(())
    }
}

/// Serializable structure for app config
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub theme: String,
    pub language: String,
    pub default_duration_ms: u64,
    pub background_alpha: u8,
    pub font_size: u16,
}

impl Config {
    /// Duration used when a toast is shown without one
    pub fn default_duration(&self) -> Duration {
        match self.default_duration_ms {
            0 => DEFAULT_DURATION,
            ms => Duration::from_millis(ms),
        }
    }

    pub fn toast_style(&self) -> ToastStyle {
        let base = ToastStyle::default();
        ToastStyle {
            font_size: f32::from(self.font_size.max(1)),
            background: Color::from_rgba8(0, 0, 0, f32::from(self.background_alpha) / 255.0),
            ..base
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Dark".to_string(),
            language: "en".to_string(),
            default_duration_ms: 2000,
            background_alpha: 160,
            font_size: 14,
        }
    }
}

// ===================================
//         GLOBAL CONFIG SINGLETON
// ===================================

static SETTINGS: Lazy<RwLock<Settings>> = Lazy::new(|| {
    let settings = Settings::load();
    RwLock::new(settings)
});

/// Gets a read-only lock on the global Settings
pub fn get_settings() -> RwLockReadGuard<'static, Settings> {
    SETTINGS
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Gets a writable lock on the global Settings
pub fn get_settings_mut() -> RwLockWriteGuard<'static, Settings> {
    SETTINGS
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = serde_json::from_str(r#"{ "theme": "Light" }"#).unwrap();

        assert_eq!(config.theme, "Light");
        assert_eq!(config.language, "en");
        assert_eq!(config.default_duration(), Duration::from_millis(2000));
        assert_eq!(config.background_alpha, 160);
    }

    #[test]
    fn zero_duration_falls_back() {
        let config = Config {
            default_duration_ms: 0,
            ..Config::default()
        };

        assert_eq!(config.default_duration(), DEFAULT_DURATION);
    }

    #[test]
    fn default_style_matches_overlay_look() {
        assert_eq!(Config::default().toast_style(), ToastStyle::default());
    }

    #[test]
    fn style_follows_config() {
        let config = Config {
            background_alpha: 255,
            font_size: 20,
            ..Config::default()
        };
        let style = config.toast_style();

        assert_eq!(style.font_size, 20.0);
        assert_eq!(style.background.a, 1.0);
        assert_eq!(style.padding, 10.0);
    }
}
