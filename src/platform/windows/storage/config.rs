//! JSON configuration file for Windows.
//!
//! Stores cosmetic settings in %APPDATA%/Pulso/config.json
//!
//! Uses an in-memory cache to avoid disk I/O on every read.
//! Call `flush_config()` to persist changes to disk.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::constants::*;
use crate::model::settings::DEFAULT_RING_COLOR_RGBA;
use crate::model::OverlaySettings;
use crate::{color_to_hex, parse_hex_color};

/// Serializable config structure for JSON persistence.
///
/// The ring color is stored as a `#RRGGBB[AA]` hex string so the file
/// stays hand-editable.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct Config {
    ring_color: String,
    ring_width: f64,
    icon_opacity_pct: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ring_color: DEFAULT_RING_COLOR.to_string(),
            ring_width: DEFAULT_RING_WIDTH,
            icon_opacity_pct: DEFAULT_ICON_OPACITY_PCT,
        }
    }
}

// In-memory config cache. Loaded once, written on flush.
thread_local! {
    static CONFIG_CACHE: RefCell<Option<Config>> = const { RefCell::new(None) };
    static CONFIG_DIRTY: RefCell<bool> = const { RefCell::new(false) };
}

/// Get config file path: %APPDATA%/Pulso/config.json
fn config_path() -> PathBuf {
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(appdata).join("Pulso").join("config.json")
}

/// Ensure the config directory exists.
fn ensure_config_dir() -> std::io::Result<()> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Load config from JSON file, returning defaults if not found or invalid.
fn load_config_from_disk() -> Config {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

/// Save config to JSON file.
fn save_config_to_disk(config: &Config) {
    if ensure_config_dir().is_err() {
        warn!("failed to create config directory");
        return;
    }

    let path = config_path();
    match serde_json::to_string_pretty(config) {
        Ok(json) => {
            if let Err(e) = fs::write(&path, json) {
                warn!("failed to write config: {e}");
            }
        }
        Err(e) => warn!("failed to serialize config: {e}"),
    }
}

/// Get the cached config, loading from disk if needed.
fn get_config() -> Config {
    CONFIG_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.is_none() {
            *cache = Some(load_config_from_disk());
        }
        cache.clone().unwrap()
    })
}

/// Update the cached config and mark it dirty.
fn set_config(config: Config) {
    CONFIG_CACHE.with(|cache| {
        *cache.borrow_mut() = Some(config);
    });
    CONFIG_DIRTY.with(|dirty| {
        *dirty.borrow_mut() = true;
    });
}

/// Flush the config cache to disk if dirty.
pub fn flush_config() {
    let is_dirty = CONFIG_DIRTY.with(|dirty| *dirty.borrow());
    if !is_dirty {
        return;
    }

    CONFIG_CACHE.with(|cache| {
        if let Some(ref config) = *cache.borrow() {
            save_config_to_disk(config);
        }
    });

    CONFIG_DIRTY.with(|dirty| {
        *dirty.borrow_mut() = false;
    });
}

/// Write the default config on first run so it can be found and edited.
pub fn ensure_config_file() {
    if config_path().exists() {
        return;
    }
    save_settings(&OverlaySettings::default());
    flush_config();
}

/// Load settings from the config file.
///
/// An unparseable ring color falls back to the default color rather than
/// failing the load.
pub fn load_settings() -> OverlaySettings {
    let config = get_config();
    let (r, g, b, a) = parse_hex_color(&config.ring_color).unwrap_or_else(|| {
        warn!(color = %config.ring_color, "invalid ring color in config, using default");
        DEFAULT_RING_COLOR_RGBA
    });

    let mut settings = OverlaySettings {
        ring_r: r,
        ring_g: g,
        ring_b: b,
        ring_a: a,
        ring_width: config.ring_width,
        icon_opacity_pct: config.icon_opacity_pct,
    };
    settings.validate();
    settings
}

/// Save settings to the config file.
///
/// Updates the cache immediately but only writes to disk when
/// `flush_config()` is called.
pub fn save_settings(settings: &OverlaySettings) {
    let config = Config {
        ring_color: color_to_hex(
            settings.ring_r,
            settings.ring_g,
            settings.ring_b,
            settings.ring_a,
        ),
        ring_width: settings.ring_width,
        icon_opacity_pct: settings.icon_opacity_pct,
    };
    set_config(config);
}
