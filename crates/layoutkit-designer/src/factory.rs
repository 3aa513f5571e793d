//! Entity to constraint resolution
//!
//! Cranes and AGV lanes are positioned relative to geometry they do not own
//! (a runway, two waypoints), so resolving their constraint needs the layout.
//! Self-contained entities resolve from their own geometry. Resolution never
//! fails loudly: any missing reference just means "no constraint".

use tracing::debug;

use crate::constraint::Constraint;
use crate::entities::{AgvPath, Conveyor, EntityRef, EotCrane, JibCrane, Zone};
use crate::layout::LayoutLookup;

#[derive(Clone, Copy)]
pub struct ConstraintFactory<'a> {
    layout: &'a dyn LayoutLookup,
}

impl<'a> ConstraintFactory<'a> {
    pub fn new(layout: &'a dyn LayoutLookup) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &'a dyn LayoutLookup {
        self.layout
    }

    pub fn constraint_for(&self, entity: EntityRef<'_>) -> Option<Constraint> {
        match entity {
            EntityRef::EotCrane(crane) => self.eot_crane_constraint(crane),
            EntityRef::JibCrane(crane) => Some(self.jib_crane_constraint(crane)),
            EntityRef::Conveyor(conveyor) => self.conveyor_constraint(conveyor),
            EntityRef::Zone(zone) => self.zone_constraint(zone),
            EntityRef::AgvPath(path) => self.agv_path_constraint(path),
        }
    }

    pub fn eot_crane_constraint(&self, crane: &EotCrane) -> Option<Constraint> {
        if crane.runway_id.is_empty() {
            debug!("EOT crane {} has no runway", crane.id);
            return None;
        }
        let Some(runway) = self.layout.runway(&crane.runway_id) else {
            debug!(
                "EOT crane {} references missing runway {}",
                crane.id, crane.runway_id
            );
            return None;
        };
        Some(crane.constraint_on(runway))
    }

    pub fn agv_path_constraint(&self, path: &AgvPath) -> Option<Constraint> {
        let from = self.layout.agv_waypoint(&path.from_waypoint_id);
        let to = self.layout.agv_waypoint(&path.to_waypoint_id);
        match (from, to) {
            (Some(from), Some(to)) => Some(AgvPath::constraint_between(from, to)),
            _ => {
                debug!(
                    "AGV path {} has unresolved endpoints {} -> {}",
                    path.id, path.from_waypoint_id, path.to_waypoint_id
                );
                None
            }
        }
    }

    pub fn jib_crane_constraint(&self, crane: &JibCrane) -> Constraint {
        crane.constraint()
    }

    pub fn conveyor_constraint(&self, conveyor: &Conveyor) -> Option<Constraint> {
        let constraint = conveyor.constraint();
        if constraint.is_none() {
            debug!(
                "Conveyor {} has {} points, not a usable path",
                conveyor.id,
                conveyor.path.len()
            );
        }
        constraint
    }

    pub fn zone_constraint(&self, zone: &Zone) -> Option<Constraint> {
        let constraint = zone.constraint();
        if constraint.is_none() {
            debug!(
                "Zone {} has {} points, not a usable outline",
                zone.id,
                zone.points.len()
            );
        }
        constraint
    }

    /// Whether `entity` kind and geometry allow a constrained drag at all.
    /// Cranes and AGV lanes report true even if their references are missing.
    pub fn supports_constrained_movement(&self, entity: EntityRef<'_>) -> bool {
        match entity {
            EntityRef::EotCrane(_) | EntityRef::JibCrane(_) | EntityRef::AgvPath(_) => true,
            EntityRef::Conveyor(conveyor) => conveyor.path.len() >= 2,
            EntityRef::Zone(zone) => zone.points.len() >= 3,
        }
    }
}
