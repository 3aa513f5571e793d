//! Motion constraints
//!
//! A constraint is a one-dimensional manifold embedded in the plane. Every
//! constraint maps a free position to a scalar parameter (`project_point`)
//! and a parameter back to a position on the manifold (`evaluate`). Snapping
//! a drag is `evaluate(project_point(p))`.
//!
//! Four kinds exist:
//! - [`LinearConstraint`]: a segment, parameter is the fraction `[0, 1]`
//! - [`ArcConstraint`]: a circular arc, parameter is an angle in radians
//! - [`PathConstraint`]: a polyline, parameter is the fraction of arc length
//! - [`PolygonConstraint`]: a closed boundary, parameter is an angle around
//!   the vertex centroid

mod arc;
mod linear;
mod path;
mod polygon;

pub use arc::ArcConstraint;
pub use linear::LinearConstraint;
pub use path::PathConstraint;
pub use polygon::PolygonConstraint;

use crate::guide::VisualGuide;
use layoutkit_core::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Constraint kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintType {
    Linear,
    Arc,
    Path,
    Polygon,
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConstraintType::Linear => "linear",
            ConstraintType::Arc => "arc",
            ConstraintType::Path => "path",
            ConstraintType::Polygon => "polygon",
        };
        f.write_str(name)
    }
}

/// Inclusive parameter interval of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
}

impl ParameterRange {
    pub const UNIT: ParameterRange = ParameterRange { min: 0.0, max: 1.0 };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps into the range. Unlike `f64::clamp` this never panics: a NaN
    /// input lands on `min`, and an inverted range yields `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.min(self.max).max(self.min)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl From<ParameterRange> for (f64, f64) {
    fn from(range: ParameterRange) -> Self {
        (range.min, range.max)
    }
}

/// Common behavior of every constraint kind.
pub trait MotionConstraint {
    fn constraint_type(&self) -> ConstraintType;

    /// Parameter of the manifold point closest (for the kind's notion of
    /// closeness) to `p`. Always inside [`MotionConstraint::parameter_range`].
    fn project_point(&self, p: Point) -> f64;

    /// Position on the manifold for `parameter`, clamped into range first.
    fn evaluate(&self, parameter: f64) -> Point;

    fn parameter_range(&self) -> ParameterRange;

    /// Geometry the editor draws while a constrained drag is active.
    fn visual_guide(&self) -> VisualGuide;

    /// Snaps a free position onto the manifold.
    fn snap(&self, p: Point) -> (Point, f64) {
        let parameter = self.project_point(p);
        (self.evaluate(parameter), parameter)
    }
}

/// Closed set of constraint kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Linear(LinearConstraint),
    Arc(ArcConstraint),
    Path(PathConstraint),
    Polygon(PolygonConstraint),
}

impl MotionConstraint for Constraint {
    fn constraint_type(&self) -> ConstraintType {
        match self {
            Constraint::Linear(c) => c.constraint_type(),
            Constraint::Arc(c) => c.constraint_type(),
            Constraint::Path(c) => c.constraint_type(),
            Constraint::Polygon(c) => c.constraint_type(),
        }
    }

    fn project_point(&self, p: Point) -> f64 {
        match self {
            Constraint::Linear(c) => c.project_point(p),
            Constraint::Arc(c) => c.project_point(p),
            Constraint::Path(c) => c.project_point(p),
            Constraint::Polygon(c) => c.project_point(p),
        }
    }

    fn evaluate(&self, parameter: f64) -> Point {
        match self {
            Constraint::Linear(c) => c.evaluate(parameter),
            Constraint::Arc(c) => c.evaluate(parameter),
            Constraint::Path(c) => c.evaluate(parameter),
            Constraint::Polygon(c) => c.evaluate(parameter),
        }
    }

    fn parameter_range(&self) -> ParameterRange {
        match self {
            Constraint::Linear(c) => c.parameter_range(),
            Constraint::Arc(c) => c.parameter_range(),
            Constraint::Path(c) => c.parameter_range(),
            Constraint::Polygon(c) => c.parameter_range(),
        }
    }

    fn visual_guide(&self) -> VisualGuide {
        match self {
            Constraint::Linear(c) => c.visual_guide(),
            Constraint::Arc(c) => c.visual_guide(),
            Constraint::Path(c) => c.visual_guide(),
            Constraint::Polygon(c) => c.visual_guide(),
        }
    }
}

impl From<LinearConstraint> for Constraint {
    fn from(c: LinearConstraint) -> Self {
        Constraint::Linear(c)
    }
}

impl From<ArcConstraint> for Constraint {
    fn from(c: ArcConstraint) -> Self {
        Constraint::Arc(c)
    }
}

impl From<PathConstraint> for Constraint {
    fn from(c: PathConstraint) -> Self {
        Constraint::Path(c)
    }
}

impl From<PolygonConstraint> for Constraint {
    fn from(c: PolygonConstraint) -> Self {
        Constraint::Polygon(c)
    }
}
