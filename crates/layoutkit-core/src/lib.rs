//! # LayoutKit Core
//!
//! Core types and utilities shared by the LayoutKit crates.
//! Provides the planar geometry value types and the error hierarchy used by
//! the constraint engine and the transport network.

pub mod error;
pub mod geometry;

pub use error::{ConstraintError, Error, LayoutError, NetworkError, Result};
pub use geometry::{normalize_angle, project_onto_segment, Point, Vector};
