//! Engine configuration
//!
//! Every tolerance, margin and default offset the engine uses lives here so a
//! host application can tune them without touching code. The defaults are the
//! values the editor has always shipped with.
//!
//! Configuration is organized into logical sections:
//! - Collision settings (boundary tolerance, per-class separation margins)
//! - Network settings (spur and loop offsets, default track speed limit)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name used under the platform config directory.
pub const CONFIG_FILE_NAME: &str = "layoutkit.toml";

/// Thresholds used by the collision detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionSettings {
    /// Max distance between a position and its projection before the
    /// position counts as off-manifold.
    pub boundary_tolerance: f64,
    /// Min parametric gap between two cranes on the same runway, as a
    /// fraction of the runway length.
    pub rail_parameter_threshold: f64,
    /// Extra clearance added to a jib crane's radius.
    pub arc_margin: f64,
    /// Min distance between a zone position and another zone's centroid.
    pub region_min_separation: f64,
    /// Min distance between a conveyor position and another conveyor's start.
    pub path_min_separation: f64,
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self {
            boundary_tolerance: 1.0,
            rail_parameter_threshold: 0.1,
            arc_margin: 5.0,
            region_min_separation: 20.0,
            path_min_separation: 10.0,
        }
    }
}

/// Defaults applied when the transport network synthesizes geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSettings {
    /// Default x offset of a new spur waypoint.
    pub spur_offset_x: f64,
    /// Default y offset of a new spur waypoint.
    pub spur_offset_y: f64,
    /// Horizontal offset of the two helper waypoints in a single-station loop.
    pub loop_offset_x: f64,
    /// Vertical offset (up and down) of the single-station loop waypoints.
    pub loop_offset_y: f64,
    /// Speed limit assigned to generated tracks (m/s).
    pub default_speed_limit: f64,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            spur_offset_x: 100.0,
            spur_offset_y: 0.0,
            loop_offset_x: 120.0,
            loop_offset_y: 80.0,
            default_speed_limit: 2.0,
        }
    }
}

/// Complete engine configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Collision detector thresholds
    pub collision: CollisionSettings,
    /// Transport network defaults
    pub network: NetworkSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/layoutkit/layoutkit.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join("layoutkit").join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let c = &self.collision;
        require_positive("collision.boundary_tolerance", c.boundary_tolerance)?;
        require_positive("collision.arc_margin", c.arc_margin)?;
        require_positive("collision.region_min_separation", c.region_min_separation)?;
        require_positive("collision.path_min_separation", c.path_min_separation)?;

        if !(c.rail_parameter_threshold > 0.0 && c.rail_parameter_threshold <= 1.0) {
            return Err(SettingsError::invalid(
                "collision.rail_parameter_threshold",
                "must be in (0, 1]",
            ));
        }

        let n = &self.network;
        if !n.spur_offset_x.is_finite() || !n.spur_offset_y.is_finite() {
            return Err(SettingsError::invalid("network.spur_offset", "must be finite"));
        }
        if n.spur_offset_x == 0.0 && n.spur_offset_y == 0.0 {
            return Err(SettingsError::invalid(
                "network.spur_offset",
                "spur would sit on top of its origin",
            ));
        }
        if !(n.loop_offset_x.is_finite() && n.loop_offset_x > 0.0) {
            return Err(SettingsError::invalid("network.loop_offset_x", "must be > 0"));
        }
        if !(n.loop_offset_y.is_finite() && n.loop_offset_y > 0.0) {
            return Err(SettingsError::invalid("network.loop_offset_y", "must be > 0"));
        }
        if !(n.default_speed_limit.is_finite() && n.default_speed_limit > 0.0) {
            return Err(SettingsError::invalid(
                "network.default_speed_limit",
                "must be > 0",
            ));
        }

        Ok(())
    }
}

enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}

fn require_positive(key: &str, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::invalid(key, "must be a finite value > 0"))
    }
}
