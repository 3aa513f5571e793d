//! Visual guides
//!
//! The geometry a UI draws while a constrained drag is in progress: the rail,
//! the swing arc, the conveyor polyline or the zone outline. Guides are plain
//! data; [`VisualGuide::to_path`] turns one into a `lyon` path for renderers
//! that already speak lyon.

use layoutkit_core::{Point, Vector};
use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Angular step used when an arc is flattened to line segments.
pub const ARC_FLATTEN_STEP: f64 = PI / 36.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualGuide {
    Line {
        start: Point,
        end: Point,
    },
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Polyline {
        points: Vec<Point>,
    },
    Polygon {
        vertices: Vec<Point>,
    },
}

impl VisualGuide {
    pub fn is_closed(&self) -> bool {
        matches!(self, VisualGuide::Polygon { .. })
    }

    /// True when an SVG arc drawn for this guide needs the large-arc flag.
    pub fn is_large_arc(&self) -> bool {
        match self {
            VisualGuide::Arc {
                start_angle,
                end_angle,
                ..
            } => end_angle - start_angle > PI,
            _ => false,
        }
    }

    /// Points along the guide; arcs are flattened in [`ARC_FLATTEN_STEP`]
    /// increments.
    pub fn sample_points(&self) -> Vec<Point> {
        match self {
            VisualGuide::Line { start, end } => vec![*start, *end],
            VisualGuide::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                let sweep = (end_angle - start_angle).max(0.0);
                let steps = ((sweep / ARC_FLATTEN_STEP).ceil() as usize).max(1);
                (0..=steps)
                    .map(|i| {
                        let angle = start_angle + sweep * i as f64 / steps as f64;
                        *center + Vector::from_angle(angle) * *radius
                    })
                    .collect()
            }
            VisualGuide::Polyline { points } => points.clone(),
            VisualGuide::Polygon { vertices } => vertices.clone(),
        }
    }

    /// Builds a lyon path. Polygons are closed; an empty guide gives an empty
    /// path.
    pub fn to_path(&self) -> Path {
        let points = self.sample_points();
        let mut builder = Path::builder();
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            builder.begin(point(first.x as f32, first.y as f32));
            for p in iter {
                builder.line_to(point(p.x as f32, p.y as f32));
            }
            if self.is_closed() {
                builder.close();
            } else {
                builder.end(false);
            }
        }
        builder.build()
    }

    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let path = self.to_path();
        let bb = lyon::algorithms::aabb::bounding_box(path.iter());
        (
            bb.min.x as f64,
            bb.min.y as f64,
            bb.max.x as f64,
            bb.max.y as f64,
        )
    }

    pub fn to_svg_path(&self) -> String {
        let path = self.to_path();
        let mut svg = String::new();
        for event in path.iter() {
            match event {
                lyon::path::Event::Begin { at } => svg.push_str(&format!("M {} {} ", at.x, at.y)),
                lyon::path::Event::Line { to, .. } => {
                    svg.push_str(&format!("L {} {} ", to.x, to.y))
                }
                lyon::path::Event::Quadratic { ctrl, to, .. } => {
                    svg.push_str(&format!("Q {} {} {} {} ", ctrl.x, ctrl.y, to.x, to.y))
                }
                lyon::path::Event::Cubic {
                    ctrl1, ctrl2, to, ..
                } => svg.push_str(&format!(
                    "C {} {} {} {} {} {} ",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                )),
                lyon::path::Event::End { close, .. } => {
                    if close {
                        svg.push_str("Z ");
                    }
                }
            }
        }
        svg.trim_end().to_string()
    }
}
