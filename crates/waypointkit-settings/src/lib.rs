//! WaypointKit Settings Crate
//!
//! Handles application configuration: file formats, default location and
//! validation.

pub mod config;
pub mod error;

pub use config::{
    Config, DistanceSettings, LabelSettings, SurfaceSettings, WorkflowSettings,
    CONFIG_DIR_NAME, CONFIG_FILE_NAME,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
