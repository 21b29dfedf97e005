//! Configuration for WaypointKit
//!
//! Supports JSON and TOML file formats, chosen by file extension, stored in a
//! platform-specific directory by default.
//!
//! Configuration is organized into logical sections:
//! - Drawing surface (size, grid)
//! - Labels (waypoint and draft prefixes, zero padding)
//! - Distance (method, rounding)
//! - Workflow switches

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use waypointkit_core::DistanceMethod;

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "waypointkit";
/// File name of the default configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Drawing surface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSettings {
    /// Surface width in pixels
    pub width: f64,
    /// Surface height in pixels
    pub height: f64,
    /// Spacing of the background grid in pixels
    pub grid_spacing: u32,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            grid_spacing: 50,
        }
    }
}

/// Row label settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSettings {
    /// Prefix of main-path waypoint labels
    pub waypoint_prefix: String,
    /// Prefix of polygon draft row labels
    pub draft_prefix: String,
    /// Minimum digits in the index part, zero padded
    pub pad_width: usize,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            waypoint_prefix: "WP".to_string(),
            draft_prefix: "P".to_string(),
            pad_width: 2,
        }
    }
}

/// Distance settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceSettings {
    pub method: DistanceMethod,
    /// Rounding step in metres
    pub accuracy: f64,
}

impl Default for DistanceSettings {
    fn default() -> Self {
        Self {
            method: DistanceMethod::default(),
            accuracy: 1.0,
        }
    }
}

/// Polygon import workflow settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowSettings {
    /// "Insert polygon before" splices ahead of the selected row instead of
    /// after it
    pub insert_before_splices_before: bool,
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub surface: SurfaceSettings,
    pub labels: LabelSettings,
    pub distance: DistanceSettings,
    pub workflow: WorkflowSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        tracing::debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Default config file location for this platform.
    pub fn default_path() -> ConfigResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads `path` if given, else the default file if it exists, else
    /// returns defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Ok(path) if path.exists() => Self::load_from_file(&path),
            Ok(path) => {
                tracing::debug!("No configuration at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => {
                tracing::warn!("{}; using default configuration", e);
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let surface = &self.surface;
        if !(surface.width.is_finite() && surface.width > 0.0) {
            return Err(ConfigError::out_of_range("surface.width", surface.width));
        }
        if !(surface.height.is_finite() && surface.height > 0.0) {
            return Err(ConfigError::out_of_range("surface.height", surface.height));
        }
        if surface.grid_spacing == 0 {
            return Err(ConfigError::out_of_range(
                "surface.grid_spacing",
                surface.grid_spacing,
            ));
        }

        if self.labels.waypoint_prefix.is_empty() {
            return Err(ConfigError::Empty("labels.waypoint_prefix".to_string()));
        }
        if self.labels.draft_prefix.is_empty() {
            return Err(ConfigError::Empty("labels.draft_prefix".to_string()));
        }

        let accuracy = self.distance.accuracy;
        if !(accuracy.is_finite() && accuracy > 0.0) {
            return Err(ConfigError::out_of_range("distance.accuracy", accuracy));
        }

        Ok(())
    }
}
