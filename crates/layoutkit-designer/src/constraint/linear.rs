use layoutkit_core::{Point, Vector};

use super::{ConstraintType, MotionConstraint, ParameterRange};
use crate::guide::VisualGuide;

/// Motion along the segment `start`-`end`, parameter `t ∈ [0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    start: Point,
    end: Point,
    direction: Option<Vector>,
    length: f64,
}

impl LinearConstraint {
    pub fn new(start: Point, end: Point) -> Self {
        let delta = end - start;
        Self {
            start,
            end,
            direction: delta.normalized(),
            length: delta.length(),
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// True when both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.direction.is_none()
    }
}

impl MotionConstraint for LinearConstraint {
    fn constraint_type(&self) -> ConstraintType {
        ConstraintType::Linear
    }

    fn project_point(&self, p: Point) -> f64 {
        let Some(direction) = self.direction else {
            return 0.0;
        };
        let along = (p - self.start).dot(&direction);
        ParameterRange::UNIT.clamp(along / self.length)
    }

    fn evaluate(&self, parameter: f64) -> Point {
        let t = ParameterRange::UNIT.clamp(parameter);
        self.start.lerp(&self.end, t)
    }

    fn parameter_range(&self) -> ParameterRange {
        ParameterRange::UNIT
    }

    fn visual_guide(&self) -> VisualGuide {
        VisualGuide::Line {
            start: self.start,
            end: self.end,
        }
    }
}
