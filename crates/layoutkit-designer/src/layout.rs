//! Read-only layout view and the in-memory snapshot implementing it.

use layoutkit_core::LayoutError;
use serde::{Deserialize, Serialize};

use crate::drag::MoveUpdate;
use crate::entities::{
    AgvPath, AgvWaypoint, CanvasBounds, Conveyor, EntityKind, EntityRef, EotCrane, JibCrane,
    Runway, Zone,
};

/// What constraint resolution and collision checks need to see of the
/// layout document.
pub trait LayoutLookup {
    fn runway(&self, id: &str) -> Option<&Runway>;
    fn agv_waypoint(&self, id: &str) -> Option<&AgvWaypoint>;
    fn eot_cranes(&self) -> &[EotCrane];
    fn jib_cranes(&self) -> &[JibCrane];
    fn zones(&self) -> &[Zone];
    fn conveyors(&self) -> &[Conveyor];
    /// `None` when the document has no fixed canvas.
    fn canvas(&self) -> Option<CanvasBounds>;
}

/// Owned copy of every entity the engine reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSnapshot {
    pub runways: Vec<Runway>,
    pub eot_cranes: Vec<EotCrane>,
    pub jib_cranes: Vec<JibCrane>,
    pub conveyors: Vec<Conveyor>,
    pub zones: Vec<Zone>,
    pub agv_waypoints: Vec<AgvWaypoint>,
    pub agv_paths: Vec<AgvPath>,
    pub canvas: Option<CanvasBounds>,
}

impl LayoutSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eot_crane(&self, id: &str) -> Option<&EotCrane> {
        self.eot_cranes.iter().find(|c| c.id == id)
    }

    pub fn jib_crane(&self, id: &str) -> Option<&JibCrane> {
        self.jib_cranes.iter().find(|c| c.id == id)
    }

    pub fn conveyor(&self, id: &str) -> Option<&Conveyor> {
        self.conveyors.iter().find(|c| c.id == id)
    }

    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn agv_path(&self, id: &str) -> Option<&AgvPath> {
        self.agv_paths.iter().find(|p| p.id == id)
    }

    /// Any draggable entity by kind and id.
    pub fn entity(&self, kind: EntityKind, id: &str) -> Option<EntityRef<'_>> {
        match kind {
            EntityKind::EotCrane => self.eot_crane(id).map(EntityRef::from),
            EntityKind::JibCrane => self.jib_crane(id).map(EntityRef::from),
            EntityKind::Conveyor => self.conveyor(id).map(EntityRef::from),
            EntityKind::Zone => self.zone(id).map(EntityRef::from),
            EntityKind::AgvPath => self.agv_path(id).map(EntityRef::from),
        }
    }

    /// Writes a planned drag back into the snapshot.
    pub fn apply_move(&mut self, update: &MoveUpdate) -> Result<(), LayoutError> {
        match update {
            MoveUpdate::JibRotation { crane_id, .. } => {
                // the column stays put, only the hook angle changes
                if self.jib_crane(crane_id).is_none() {
                    return Err(not_found("jib crane", crane_id));
                }
            }
            MoveUpdate::BridgePosition { crane_id, position } => {
                let crane = self
                    .eot_cranes
                    .iter_mut()
                    .find(|c| &c.id == crane_id)
                    .ok_or_else(|| not_found("EOT crane", crane_id))?;
                crane.set_bridge_position(*position);
            }
            MoveUpdate::TranslateZone { zone_id, dx, dy } => {
                let zone = self
                    .zones
                    .iter_mut()
                    .find(|z| &z.id == zone_id)
                    .ok_or_else(|| not_found("zone", zone_id))?;
                zone.translate(*dx, *dy);
            }
        }
        tracing::debug!("Applied {:?}", update);
        Ok(())
    }
}

fn not_found(kind: &str, id: &str) -> LayoutError {
    LayoutError::EntityNotFound {
        kind: kind.to_string(),
        id: id.to_string(),
    }
}

impl LayoutLookup for LayoutSnapshot {
    fn runway(&self, id: &str) -> Option<&Runway> {
        self.runways.iter().find(|r| r.id == id)
    }

    fn agv_waypoint(&self, id: &str) -> Option<&AgvWaypoint> {
        self.agv_waypoints.iter().find(|w| w.id == id)
    }

    fn eot_cranes(&self) -> &[EotCrane] {
        &self.eot_cranes
    }

    fn jib_cranes(&self) -> &[JibCrane] {
        &self.jib_cranes
    }

    fn zones(&self) -> &[Zone] {
        &self.zones
    }

    fn conveyors(&self) -> &[Conveyor] {
        &self.conveyors
    }

    fn canvas(&self) -> Option<CanvasBounds> {
        self.canvas
    }
}
