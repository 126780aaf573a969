//! Configuration structures and loading logic.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use xmouse_core::{CellMetrics, TrackingMode};

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mouse: MouseConfig,
    pub pty: PtyConfig,
}

/// Mouse reporting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MouseConfig {
    /// Tracking mode in effect at startup: `none`, `x10`, `vt200`,
    /// `vt200-highlight`, `button-event`, or `any-event`.
    pub mode: String,
    /// Cell width in pixels.
    pub cell_width: f64,
    /// Cell height in pixels.
    pub cell_height: f64,
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            mode: "vt200".to_owned(),
            cell_width: CellMetrics::default().cell_width(),
            cell_height: CellMetrics::default().cell_height(),
        }
    }
}

impl MouseConfig {
    /// Parsed `mode`. Unknown names fall back to `none`.
    pub fn tracking_mode(&self) -> TrackingMode {
        TrackingMode::from_name(&self.mode).unwrap_or_else(|| {
            log::warn!("config: unknown mouse mode {:?}, using none", self.mode);
            TrackingMode::None
        })
    }

    /// Cell size. Invalid values fall back to the default cell.
    pub fn cell_metrics(&self) -> CellMetrics {
        CellMetrics::new(self.cell_width, self.cell_height).unwrap_or_else(|| {
            let fallback = CellMetrics::default();
            log::warn!(
                "config: invalid cell size {}x{}, using {}x{}",
                self.cell_width,
                self.cell_height,
                fallback.cell_width(),
                fallback.cell_height()
            );
            fallback
        })
    }
}

/// Child process configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PtyConfig {
    /// Program to run. Defaults to the user's shell.
    pub program: Option<String>,
    pub args: Vec<String>,
    pub rows: u16,
    pub cols: u16,
}

impl Default for PtyConfig {
    fn default() -> Self {
        Self {
            program: None,
            args: Vec::new(),
            rows: 24,
            cols: 80,
        }
    }
}

/// Returns the `xmouse` configuration directory: `%APPDATA%\xmouse` on
/// Windows; elsewhere `$XDG_CONFIG_HOME/xmouse`, then `$HOME/.config/xmouse`.
/// Falls back to `./xmouse` when none of those variables is set.
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("xmouse");
        }
        PathBuf::from(".").join("xmouse")
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("xmouse");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config").join("xmouse");
        }
        PathBuf::from(".").join("xmouse")
    }
}

/// Returns the path to the config file. `XMOUSE_CONFIG` overrides it.
pub fn config_path() -> PathBuf {
    match std::env::var_os("XMOUSE_CONFIG") {
        Some(path) => PathBuf::from(path),
        None => config_dir().join("config.toml"),
    }
}

impl Config {
    /// Loads config from the default path. Returns defaults if the file
    /// doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let path = config_path();
        let data = match std::fs::read_to_string(&path) {
            Ok(d) => d,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("config: failed to read {}: {e}", path.display());
                }
                return Self::default();
            }
        };
        match Self::from_toml(&data) {
            Ok(config) => {
                log::info!("config: loaded {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("config: parse error in {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Parses a TOML document; missing fields take their defaults.
    pub fn from_toml(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }
}
