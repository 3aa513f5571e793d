//! LayoutKit Settings Crate
//!
//! Handles engine configuration: collision tolerances, network generation
//! defaults, and their persistence as JSON or TOML files.

pub mod config;
pub mod error;

pub use config::{CollisionSettings, Config, NetworkSettings, CONFIG_FILE_NAME};
pub use error::{ConfigError, SettingsError, SettingsResult};
