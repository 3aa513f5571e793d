//! # LayoutKit
//!
//! The motion and routing engine behind a 2D factory layout editor:
//! - Constrained dragging of cranes, conveyors, zones and AGV paths
//! - Boundary and collision checks while a drag is in progress
//! - Transport networks with loop building, spurs and shortest-path routing
//!
//! ## Architecture
//!
//! LayoutKit is organized as a workspace with multiple crates:
//!
//! 1. **layoutkit-core** - Geometry value types and the error hierarchy
//! 2. **layoutkit-settings** - Tolerances and defaults, loaded from TOML or JSON
//! 3. **layoutkit-designer** - Constraints, constraint resolution, collision checks, drags
//! 4. **layoutkit-transport** - Network model, edits, validation, routing
//! 5. **layoutkit** - This crate: the layout document and a command-line harness

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use layoutkit_designer as designer;
pub use layoutkit_settings as settings;
pub use layoutkit_transport as transport;

pub use layoutkit_core::{
    ConstraintError, Error, LayoutError, NetworkError, Point, Result, Vector,
};

pub use layoutkit_designer::{
    CollisionDetector, CollisionWarning, ConstrainedDragService, Constraint, ConstraintFactory,
    DragRejection, EntityKind, EntityRef, LayoutLookup, LayoutSnapshot, MotionConstraint,
    MoveUpdate, VisualGuide,
};

pub use layoutkit_transport::{
    find_route, find_shortest_path, validate_network, NetworkValidationIssue, Route,
    TransportNetwork, TransportPathService,
};

pub use layoutkit_settings::{CollisionSettings, Config, NetworkSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// A saved layout: the draggable entities plus the transport network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutDocument {
    pub layout: LayoutSnapshot,
    pub network: TransportNetwork,
}

impl LayoutDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let document = Self::from_json(&text)?;
        tracing::debug!(
            "Loaded {} ({} station(s), {} track(s))",
            path.display(),
            document.network.stations().len(),
            document.network.tracks().len()
        );
        Ok(document)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so command results on stdout stay parseable
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
