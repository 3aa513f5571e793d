//! Drag-time collision and boundary checks
//!
//! These are deliberately coarse: each entity class compares the candidate
//! position against one representative point of every other entity of the
//! same class (runway midpoint, jib column, zone centroid, conveyor start).
//! Checks are read-only and never fail; anything that cannot be resolved
//! counts as "no collision".

use layoutkit_core::Point;
use layoutkit_settings::CollisionSettings;
use smallvec::SmallVec;
use std::fmt;
use tracing::trace;

use crate::constraint::MotionConstraint;
use crate::entities::{Conveyor, EntityRef, EotCrane, JibCrane, Zone};
use crate::factory::ConstraintFactory;
use crate::layout::LayoutLookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionWarning {
    /// The position is further than the tolerance from its manifold.
    OutsideBoundary,
    /// The position is too close to another entity of the same class.
    EntityCollision,
}

impl fmt::Display for CollisionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CollisionWarning::OutsideBoundary => "Position outside constraint boundary",
            CollisionWarning::EntityCollision => "Collision with other entity",
        };
        f.write_str(text)
    }
}

pub type CollisionWarnings = SmallVec<[CollisionWarning; 2]>;

pub struct CollisionDetector<'a> {
    factory: ConstraintFactory<'a>,
    settings: CollisionSettings,
}

impl<'a> CollisionDetector<'a> {
    pub fn new(layout: &'a dyn LayoutLookup, settings: CollisionSettings) -> Self {
        Self {
            factory: ConstraintFactory::new(layout),
            settings,
        }
    }

    pub fn with_defaults(layout: &'a dyn LayoutLookup) -> Self {
        Self::new(layout, CollisionSettings::default())
    }

    pub fn settings(&self) -> &CollisionSettings {
        &self.settings
    }

    fn layout(&self) -> &'a dyn LayoutLookup {
        self.factory.layout()
    }

    /// True when `position` is too close to another entity of the same
    /// class.
    pub fn check_constraint_collision(&self, entity: EntityRef<'_>, position: Point) -> bool {
        let collides = match entity {
            EntityRef::EotCrane(crane) => self.eot_collision(crane, position),
            EntityRef::JibCrane(crane) => self.jib_collision(crane, position),
            EntityRef::Zone(zone) => self.zone_collision(zone, position),
            EntityRef::Conveyor(conveyor) => self.conveyor_collision(conveyor, position),
            EntityRef::AgvPath(_) => false,
        };
        if collides {
            trace!("{} {} collides at {}", entity.kind(), entity.id(), position);
        }
        collides
    }

    /// Cranes on one runway compare window parameters: the candidate on this
    /// crane's own window against the runway midpoint projected onto each
    /// other crane's window. Stored bridge positions are not consulted.
    fn eot_collision(&self, crane: &EotCrane, position: Point) -> bool {
        let Some(runway) = self.layout().runway(&crane.runway_id) else {
            return false;
        };
        let candidate = crane.constraint_on(runway).project_point(position);
        let midpoint = runway.start.midpoint(&runway.end);

        self.layout()
            .eot_cranes()
            .iter()
            .filter(|other| other.id != crane.id && other.runway_id == crane.runway_id)
            .any(|other| {
                let reference = other.constraint_on(runway).project_point(midpoint);
                (candidate - reference).abs() < self.settings.rail_parameter_threshold
            })
    }

    fn jib_collision(&self, crane: &JibCrane, position: Point) -> bool {
        self.layout()
            .jib_cranes()
            .iter()
            .filter(|other| other.id != crane.id)
            .any(|other| {
                position.distance_to(&other.center) < other.radius + self.settings.arc_margin
            })
    }

    fn zone_collision(&self, zone: &Zone, position: Point) -> bool {
        self.layout()
            .zones()
            .iter()
            .filter(|other| other.id != zone.id)
            .filter_map(Zone::centroid)
            .any(|centroid| {
                position.distance_to(&centroid) < self.settings.region_min_separation
            })
    }

    fn conveyor_collision(&self, conveyor: &Conveyor, position: Point) -> bool {
        self.layout()
            .conveyors()
            .iter()
            .filter(|other| other.id != conveyor.id)
            .filter_map(|other| other.path.first())
            .any(|start| position.distance_to(start) < self.settings.path_min_separation)
    }

    /// True when `position` sits further than the tolerance from its own
    /// snap target. Unconstrained entities never violate.
    pub fn check_boundary_violation(&self, entity: EntityRef<'_>, position: Point) -> bool {
        let Some(constraint) = self.factory.constraint_for(entity) else {
            return false;
        };
        let (snapped, _) = constraint.snap(position);
        let violated = position.distance_to(&snapped) > self.settings.boundary_tolerance;
        if violated {
            trace!(
                "{} {} off manifold at {} (snap {})",
                entity.kind(),
                entity.id(),
                position,
                snapped
            );
        }
        violated
    }

    pub fn collision_warnings(&self, entity: EntityRef<'_>, position: Point) -> CollisionWarnings {
        let mut warnings = CollisionWarnings::new();
        if self.check_boundary_violation(entity, position) {
            warnings.push(CollisionWarning::OutsideBoundary);
        }
        if self.check_constraint_collision(entity, position) {
            warnings.push(CollisionWarning::EntityCollision);
        }
        warnings
    }

    /// Canvas AABB check; documents without a canvas accept everything.
    pub fn is_within_canvas_bounds(&self, position: Point) -> bool {
        self.layout()
            .canvas()
            .map_or(true, |canvas| canvas.contains(position))
    }
}
