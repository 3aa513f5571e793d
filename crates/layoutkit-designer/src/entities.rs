//! Layout entity records
//!
//! Plain serde records for the draggable things on a factory floor. The
//! document that owns them lives outside this crate; the engine only reads
//! them through [`crate::layout::LayoutLookup`] and hands back
//! [`crate::drag::MoveUpdate`]s.

use layoutkit_core::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constraint::{
    ArcConstraint, Constraint, LinearConstraint, PathConstraint, PolygonConstraint,
};

/// Straight rail an overhead travelling crane runs on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runway {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub start: Point,
    pub end: Point,
}

impl Runway {
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Point at fraction `t` of the runway. `t` is clamped to `[0, 1]`.
    pub fn position_at(&self, t: f64) -> Point {
        self.start.lerp(&self.end, t.min(1.0).max(0.0))
    }
}

fn default_zone_max() -> f64 {
    1.0
}

fn default_bridge_position() -> f64 {
    0.5
}

/// Overhead travelling (EOT) crane confined to a window of its runway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EotCrane {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub runway_id: String,
    /// Lower end of the working window, as a runway fraction.
    #[serde(default)]
    pub zone_min: f64,
    /// Upper end of the working window, as a runway fraction.
    #[serde(default = "default_zone_max")]
    pub zone_max: f64,
    /// Current bridge location, as a runway fraction.
    #[serde(default = "default_bridge_position")]
    pub bridge_position: f64,
}

impl EotCrane {
    /// Bridge position clamped into the working window.
    pub fn set_bridge_position(&mut self, position: f64) {
        let (lo, hi) = if self.zone_min <= self.zone_max {
            (self.zone_min, self.zone_max)
        } else {
            (self.zone_max, self.zone_min)
        };
        self.bridge_position = position.min(hi).max(lo);
    }

    /// Linear constraint covering the working window on `runway`.
    pub fn constraint_on(&self, runway: &Runway) -> Constraint {
        LinearConstraint::new(
            runway.position_at(self.zone_min),
            runway.position_at(self.zone_max),
        )
        .into()
    }
}

fn default_arc_end() -> f64 {
    360.0
}

/// Pivoting jib crane; the hook sweeps an arc around a fixed column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JibCrane {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub center: Point,
    pub radius: f64,
    #[serde(default)]
    pub arc_start_deg: f64,
    #[serde(default = "default_arc_end")]
    pub arc_end_deg: f64,
}

impl JibCrane {
    /// Swing arc in radians; a sweep crossing 0° gets its end lifted by a
    /// full turn so the range stays increasing.
    pub fn constraint(&self) -> Constraint {
        let start = self.arc_start_deg.to_radians();
        let mut end = self.arc_end_deg.to_radians();
        if end < start {
            end += std::f64::consts::TAU;
        }
        ArcConstraint::new(self.center, self.radius, start, end).into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conveyor {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: Vec<Point>,
}

impl Conveyor {
    pub fn constraint(&self) -> Option<Constraint> {
        PathConstraint::new(self.path.clone()).ok().map(Constraint::from)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub points: Vec<Point>,
}

impl Zone {
    /// Vertex average of the outline.
    pub fn centroid(&self) -> Option<Point> {
        Point::average(&self.points)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            *p = p.translated(dx, dy);
        }
    }

    pub fn constraint(&self) -> Option<Constraint> {
        PolygonConstraint::new(self.points.clone())
            .ok()
            .map(Constraint::from)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgvWaypoint {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub position: Point,
}

/// Straight AGV lane between two waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgvPath {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub from_waypoint_id: String,
    pub to_waypoint_id: String,
}

impl AgvPath {
    pub fn constraint_between(from: &AgvWaypoint, to: &AgvWaypoint) -> Constraint {
        LinearConstraint::new(from.position, to.position).into()
    }
}

/// Drawable area, `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    EotCrane,
    JibCrane,
    Conveyor,
    Zone,
    AgvPath,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::EotCrane => "EOT crane",
            EntityKind::JibCrane => "jib crane",
            EntityKind::Conveyor => "conveyor",
            EntityKind::Zone => "zone",
            EntityKind::AgvPath => "AGV path",
        };
        f.write_str(name)
    }
}

impl FromStr for EntityKind {
    type Err = String;

    /// Accepts the snake_case wire names, e.g. `eot_crane`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eot_crane" => Ok(EntityKind::EotCrane),
            "jib_crane" => Ok(EntityKind::JibCrane),
            "conveyor" => Ok(EntityKind::Conveyor),
            "zone" => Ok(EntityKind::Zone),
            "agv_path" => Ok(EntityKind::AgvPath),
            other => Err(format!("Unknown entity kind: {other}")),
        }
    }
}

/// Borrowed handle to any entity that can take part in a constrained drag.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    EotCrane(&'a EotCrane),
    JibCrane(&'a JibCrane),
    Conveyor(&'a Conveyor),
    Zone(&'a Zone),
    AgvPath(&'a AgvPath),
}

impl<'a> EntityRef<'a> {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::EotCrane(_) => EntityKind::EotCrane,
            EntityRef::JibCrane(_) => EntityKind::JibCrane,
            EntityRef::Conveyor(_) => EntityKind::Conveyor,
            EntityRef::Zone(_) => EntityKind::Zone,
            EntityRef::AgvPath(_) => EntityKind::AgvPath,
        }
    }

    pub fn id(&self) -> &'a str {
        match *self {
            EntityRef::EotCrane(e) => &e.id,
            EntityRef::JibCrane(e) => &e.id,
            EntityRef::Conveyor(e) => &e.id,
            EntityRef::Zone(e) => &e.id,
            EntityRef::AgvPath(e) => &e.id,
        }
    }
}

impl<'a> From<&'a EotCrane> for EntityRef<'a> {
    fn from(e: &'a EotCrane) -> Self {
        EntityRef::EotCrane(e)
    }
}

impl<'a> From<&'a JibCrane> for EntityRef<'a> {
    fn from(e: &'a JibCrane) -> Self {
        EntityRef::JibCrane(e)
    }
}

impl<'a> From<&'a Conveyor> for EntityRef<'a> {
    fn from(e: &'a Conveyor) -> Self {
        EntityRef::Conveyor(e)
    }
}

impl<'a> From<&'a Zone> for EntityRef<'a> {
    fn from(e: &'a Zone) -> Self {
        EntityRef::Zone(e)
    }
}

impl<'a> From<&'a AgvPath> for EntityRef<'a> {
    fn from(e: &'a AgvPath) -> Self {
        EntityRef::AgvPath(e)
    }
}
