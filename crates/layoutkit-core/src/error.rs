//! Error handling for LayoutKit
//!
//! Provides error types for all layers of the engine:
//! - Constraint errors (malformed constraint construction)
//! - Network errors (transport graph edits and lookups)
//! - Layout errors (entity lookups when applying drag updates)
//!
//! All error types use `thiserror` for ergonomic error handling.
//! Note that constraint *resolution* never produces an error; an entity whose
//! references cannot be resolved simply has no constraint.

use thiserror::Error;

/// Constraint construction error
///
/// Raised when a constraint is built from geometry that cannot describe a
/// manifold. These are contract violations by the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstraintError {
    /// A path constraint needs at least two waypoints
    #[error("Path constraint requires at least 2 waypoints, got {count}")]
    TooFewWaypoints {
        /// Number of waypoints supplied.
        count: usize,
    },

    /// A polygon constraint needs at least three vertices
    #[error("Polygon constraint requires at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// A coordinate was NaN or infinite
    #[error("Non-finite coordinate in {context}")]
    NonFinite {
        /// Where the bad coordinate was found.
        context: String,
    },
}

/// Transport network error type
///
/// Distinguishes "the id you gave me does not exist" from "the network has
/// nothing to offer".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// No station or waypoint carries this id
    #[error("Point {id} not found")]
    PointNotFound {
        /// The missing point id.
        id: String,
    },

    /// No station carries this id
    #[error("Station {id} not found")]
    StationNotFound {
        /// The missing station id.
        id: String,
    },

    /// No track carries this id
    #[error("Track {id} not found")]
    TrackNotFound {
        /// The missing track id.
        id: String,
    },

    /// The query needs other points but the network has none
    #[error("No points to connect to from {id}")]
    NoCandidates {
        /// The point the search started from.
        id: String,
    },

    /// An element with this id already exists
    #[error("Duplicate id: {id}")]
    DuplicateId {
        /// The conflicting id.
        id: String,
    },
}

/// Layout document error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The entity referenced by an update is no longer in the layout
    #[error("{kind} {id} not found in layout")]
    EntityNotFound {
        /// Entity kind, e.g. "zone".
        kind: String,
        /// The missing entity id.
        id: String,
    },
}

/// Main error type for LayoutKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Constraint error
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    /// Network error
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error reports a missing id
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Network(
                NetworkError::PointNotFound { .. }
                    | NetworkError::StationNotFound { .. }
                    | NetworkError::TrackNotFound { .. }
            ) | Error::Layout(LayoutError::EntityNotFound { .. })
        )
    }

    /// Check if this is a network error
    pub fn is_network_error(&self) -> bool {
        matches!(self, Error::Network(_))
    }

    /// Check if this is a constraint error
    pub fn is_constraint_error(&self) -> bool {
        matches!(self, Error::Constraint(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
