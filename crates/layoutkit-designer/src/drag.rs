//! Constrained dragging
//!
//! `ConstrainedDragService` is what the canvas calls on every pointer move:
//! snap the pointer onto the entity's manifold, gate the result through the
//! collision and canvas checks, and describe the accepted move as a
//! [`MoveUpdate`]. It never mutates the layout; the caller applies the update
//! (see [`crate::layout::LayoutSnapshot::apply_move`]).

use layoutkit_core::Point;
use layoutkit_settings::CollisionSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::collision::{CollisionDetector, CollisionWarnings};
use crate::constraint::MotionConstraint;
use crate::entities::{EntityKind, EntityRef};
use crate::factory::ConstraintFactory;
use crate::guide::VisualGuide;
use crate::layout::LayoutLookup;

/// Accepted drag, expressed as an edit to the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MoveUpdate {
    /// Jib hook angle in radians. The column itself never moves.
    JibRotation { crane_id: String, angle: f64 },
    /// New bridge location as a runway fraction.
    BridgePosition { crane_id: String, position: f64 },
    /// Rigid translation of every zone vertex.
    TranslateZone { zone_id: String, dx: f64, dy: f64 },
}

/// Why a drag step was refused.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DragRejection {
    #[error("Collision with other entity")]
    Collision,

    #[error("Position outside constraint boundary")]
    OutsideBoundary,

    #[error("Position {position} is outside the canvas")]
    OutsideCanvas { position: Point },

    #[error("Constrained moves are not supported for {kind}")]
    Unsupported { kind: EntityKind },

    /// The entity's constraint could not be resolved.
    #[error("{kind} {id} has no resolvable constraint")]
    Unresolved { kind: EntityKind, id: String },
}

pub struct ConstrainedDragService<'a> {
    factory: ConstraintFactory<'a>,
    detector: CollisionDetector<'a>,
}

impl<'a> ConstrainedDragService<'a> {
    pub fn new(layout: &'a dyn LayoutLookup, settings: CollisionSettings) -> Self {
        Self {
            factory: ConstraintFactory::new(layout),
            detector: CollisionDetector::new(layout, settings),
        }
    }

    pub fn with_defaults(layout: &'a dyn LayoutLookup) -> Self {
        Self::new(layout, CollisionSettings::default())
    }

    /// Snapped position and parameter; unconstrained entities follow the
    /// pointer with parameter 0.
    pub fn project_to_constraint(&self, entity: EntityRef<'_>, mouse: Point) -> (Point, f64) {
        match self.factory.constraint_for(entity) {
            Some(constraint) => constraint.snap(mouse),
            None => (mouse, 0.0),
        }
    }

    pub fn plan_move(
        &self,
        entity: EntityRef<'_>,
        mouse: Point,
    ) -> Result<MoveUpdate, DragRejection> {
        let (position, parameter) = self.project_to_constraint(entity, mouse);

        if self.detector.check_constraint_collision(entity, position) {
            return self.reject(entity, DragRejection::Collision);
        }
        if self.detector.check_boundary_violation(entity, position) {
            return self.reject(entity, DragRejection::OutsideBoundary);
        }
        if !self.detector.is_within_canvas_bounds(position) {
            return self.reject(entity, DragRejection::OutsideCanvas { position });
        }

        match entity {
            EntityRef::JibCrane(crane) => Ok(MoveUpdate::JibRotation {
                crane_id: crane.id.clone(),
                angle: parameter,
            }),
            EntityRef::EotCrane(crane) => {
                if self.factory.eot_crane_constraint(crane).is_none() {
                    return self.reject(
                        entity,
                        DragRejection::Unresolved {
                            kind: entity.kind(),
                            id: crane.id.clone(),
                        },
                    );
                }
                Ok(MoveUpdate::BridgePosition {
                    crane_id: crane.id.clone(),
                    position: crane.zone_min + parameter * (crane.zone_max - crane.zone_min),
                })
            }
            EntityRef::Zone(zone) => match zone.centroid() {
                Some(centroid) => Ok(MoveUpdate::TranslateZone {
                    zone_id: zone.id.clone(),
                    dx: position.x - centroid.x,
                    dy: position.y - centroid.y,
                }),
                None => self.reject(
                    entity,
                    DragRejection::Unresolved {
                        kind: entity.kind(),
                        id: zone.id.clone(),
                    },
                ),
            },
            EntityRef::Conveyor(_) | EntityRef::AgvPath(_) => self.reject(
                entity,
                DragRejection::Unsupported {
                    kind: entity.kind(),
                },
            ),
        }
    }

    fn reject(
        &self,
        entity: EntityRef<'_>,
        reason: DragRejection,
    ) -> Result<MoveUpdate, DragRejection> {
        trace!("Drag of {} {} rejected: {}", entity.kind(), entity.id(), reason);
        Err(reason)
    }

    pub fn constraint_guide(&self, entity: EntityRef<'_>) -> Option<VisualGuide> {
        self.factory
            .constraint_for(entity)
            .map(|constraint| constraint.visual_guide())
    }

    pub fn supports_constrained_movement(&self, entity: EntityRef<'_>) -> bool {
        self.factory.supports_constrained_movement(entity)
    }

    pub fn would_collide(&self, entity: EntityRef<'_>, position: Point) -> bool {
        self.detector.check_constraint_collision(entity, position)
    }

    pub fn collision_warnings(&self, entity: EntityRef<'_>, position: Point) -> CollisionWarnings {
        self.detector.collision_warnings(entity, position)
    }
}
