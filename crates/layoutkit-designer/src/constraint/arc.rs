use layoutkit_core::{normalize_angle, Point, Vector};

use super::{ConstraintType, MotionConstraint, ParameterRange};
use crate::guide::VisualGuide;

/// Motion along a circular arc.
///
/// The parameter is an angle in radians. The range `[start_angle, end_angle]`
/// does not wrap: callers that need a sweep crossing 0 pass an `end_angle`
/// above `2π`. Projection normalizes the cursor angle to `[0, 2π)` before
/// clamping, so such a sweep only reaches its lower part from above.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcConstraint {
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

impl ArcConstraint {
    pub fn new(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

impl MotionConstraint for ArcConstraint {
    fn constraint_type(&self) -> ConstraintType {
        ConstraintType::Arc
    }

    fn project_point(&self, p: Point) -> f64 {
        let angle = normalize_angle((p.y - self.center.y).atan2(p.x - self.center.x));
        self.parameter_range().clamp(angle)
    }

    fn evaluate(&self, parameter: f64) -> Point {
        let angle = self.parameter_range().clamp(parameter);
        self.center + Vector::from_angle(angle) * self.radius
    }

    fn parameter_range(&self) -> ParameterRange {
        ParameterRange::new(self.start_angle, self.end_angle)
    }

    fn visual_guide(&self) -> VisualGuide {
        VisualGuide::Arc {
            center: self.center,
            radius: self.radius,
            start_angle: self.start_angle,
            end_angle: self.end_angle,
        }
    }
}
