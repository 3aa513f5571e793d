use layoutkit_core::{normalize_angle, project_onto_segment, ConstraintError, Point, Vector};
use std::f64::consts::TAU;

use super::{ConstraintType, MotionConstraint, ParameterRange};
use crate::guide::VisualGuide;

/// Reach of the ray cast from the centroid when evaluating a boundary angle.
/// Boundaries further than this from their centroid evaluate to the centroid.
pub const RAY_LENGTH: f64 = 10_000.0;

const PARALLEL_EPSILON: f64 = 1e-10;

/// Motion along a closed polygon boundary.
///
/// The parameter is the angle around the vertex centroid, `[0, 2π]`.
/// Evaluation casts a ray from the centroid and takes the nearest edge hit,
/// which is exact for star-shaped polygons and best-effort otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonConstraint {
    vertices: Vec<Point>,
    centroid: Point,
}

impl PolygonConstraint {
    pub fn new(vertices: Vec<Point>) -> Result<Self, ConstraintError> {
        if vertices.len() < 3 {
            return Err(ConstraintError::TooFewVertices {
                count: vertices.len(),
            });
        }
        if vertices.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(ConstraintError::NonFinite {
                context: "polygon vertex".to_string(),
            });
        }
        let centroid =
            Point::average(&vertices).ok_or(ConstraintError::TooFewVertices { count: 0 })?;
        Ok(Self { vertices, centroid })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Vertex average, not the area centroid.
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Even-odd point-in-polygon test. Points exactly on an edge may land on
    /// either side.
    pub fn contains(&self, p: Point) -> bool {
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Returns `p` when inside, otherwise the nearest point on the boundary.
    pub fn clamp_to_polygon(&self, p: Point) -> Point {
        if self.contains(p) {
            return p;
        }

        let mut nearest = self.vertices[0];
        let mut best = f64::INFINITY;
        for (a, b) in self.edges() {
            let candidate = project_onto_segment(p, a, b);
            let distance = p.distance_to(&candidate);
            if distance < best {
                best = distance;
                nearest = candidate;
            }
        }
        nearest
    }
}

/// Parametric hit of segment `a1 + t*da` with `b1 + u*db`, both `t, u ∈ [0, 1]`.
fn segment_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let da = a2 - a1;
    let db = b2 - b1;
    let denom = da.cross(&db);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let offset = b1 - a1;
    let t = offset.cross(&db) / denom;
    let u = offset.cross(&da) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a1 + da * t)
    } else {
        None
    }
}

impl MotionConstraint for PolygonConstraint {
    fn constraint_type(&self) -> ConstraintType {
        ConstraintType::Polygon
    }

    fn project_point(&self, p: Point) -> f64 {
        self.centroid.angle_to(&p)
    }

    fn evaluate(&self, parameter: f64) -> Point {
        let angle = normalize_angle(parameter);
        let ray_end = self.centroid + Vector::from_angle(angle) * RAY_LENGTH;

        let mut nearest = None;
        let mut best = f64::INFINITY;
        for (a, b) in self.edges() {
            if let Some(hit) = segment_intersection(self.centroid, ray_end, a, b) {
                let distance = self.centroid.distance_to(&hit);
                if distance < best {
                    best = distance;
                    nearest = Some(hit);
                }
            }
        }

        nearest.unwrap_or(self.centroid)
    }

    fn parameter_range(&self) -> ParameterRange {
        ParameterRange::new(0.0, TAU)
    }

    fn visual_guide(&self) -> VisualGuide {
        VisualGuide::Polygon {
            vertices: self.vertices.clone(),
        }
    }
}
