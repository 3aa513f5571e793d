use layoutkit_core::{project_onto_segment, ConstraintError, Point};

use super::{ConstraintType, MotionConstraint, ParameterRange};
use crate::guide::VisualGuide;

/// Motion along a polyline, parameterized by arc length.
///
/// `t = 0` is the first waypoint, `t = 1` the last, and equal parameter steps
/// cover equal distances.
#[derive(Debug, Clone, PartialEq)]
pub struct PathConstraint {
    waypoints: Vec<Point>,
    segment_lengths: Vec<f64>,
    total_length: f64,
}

impl PathConstraint {
    pub fn new(waypoints: Vec<Point>) -> Result<Self, ConstraintError> {
        if waypoints.len() < 2 {
            return Err(ConstraintError::TooFewWaypoints {
                count: waypoints.len(),
            });
        }
        if waypoints.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(ConstraintError::NonFinite {
                context: "path waypoint".to_string(),
            });
        }

        let segment_lengths: Vec<f64> = waypoints
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .collect();
        let total_length = segment_lengths.iter().sum();

        Ok(Self {
            waypoints,
            segment_lengths,
            total_length,
        })
    }

    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    pub fn segment_lengths(&self) -> &[f64] {
        &self.segment_lengths
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }
}

impl MotionConstraint for PathConstraint {
    fn constraint_type(&self) -> ConstraintType {
        ConstraintType::Path
    }

    fn project_point(&self, p: Point) -> f64 {
        if self.total_length == 0.0 {
            return 0.0;
        }

        let mut best_distance = f64::INFINITY;
        let mut best_parameter = 0.0;
        let mut accumulated = 0.0;

        for (i, &segment_length) in self.segment_lengths.iter().enumerate() {
            if segment_length == 0.0 {
                continue;
            }
            let a = self.waypoints[i];
            let b = self.waypoints[i + 1];
            let closest = project_onto_segment(p, a, b);
            let distance = p.distance_to(&closest);

            // first segment wins ties
            if distance < best_distance {
                best_distance = distance;
                let along = a.distance_to(&closest);
                best_parameter = (accumulated + along) / self.total_length;
            }
            accumulated += segment_length;
        }

        ParameterRange::UNIT.clamp(best_parameter)
    }

    fn evaluate(&self, parameter: f64) -> Point {
        let t = ParameterRange::UNIT.clamp(parameter);
        if self.total_length == 0.0 {
            return self.waypoints[0];
        }

        let target = t * self.total_length;
        let mut accumulated = 0.0;
        for (i, &segment_length) in self.segment_lengths.iter().enumerate() {
            if accumulated + segment_length >= target {
                let local = if segment_length > 0.0 {
                    (target - accumulated) / segment_length
                } else {
                    0.0
                };
                return self.waypoints[i].lerp(&self.waypoints[i + 1], local);
            }
            accumulated += segment_length;
        }

        // rounding left target past the summed lengths
        self.waypoints[self.waypoints.len() - 1]
    }

    fn parameter_range(&self) -> ParameterRange {
        ParameterRange::UNIT
    }

    fn visual_guide(&self) -> VisualGuide {
        VisualGuide::Polyline {
            points: self.waypoints.clone(),
        }
    }
}
