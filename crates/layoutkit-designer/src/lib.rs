//! # LayoutKit Designer
//!
//! Constrained-motion engine for the layout editor. Cranes, AGV lanes,
//! conveyors and zones can only be dragged along a manifold: a runway
//! window, a swing arc, a conveyor polyline or a zone outline. This crate
//! resolves that manifold for an entity, snaps pointer positions onto it,
//! and decides whether the snapped position is acceptable.
//!
//! ## Architecture
//!
//! ```text
//! ConstrainedDragService (plan_move, project_to_constraint)
//!   ├── CollisionDetector (boundary, same-class collisions, canvas)
//!   │     └── ConstraintFactory
//!   └── ConstraintFactory (entity -> Constraint, via LayoutLookup)
//!         └── Constraint (Linear | Arc | Path | Polygon)
//!               └── VisualGuide (declarative drag guide, lyon path)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use layoutkit_designer::{ConstrainedDragService, LayoutSnapshot};
//!
//! let mut layout: LayoutSnapshot = serde_json::from_str(&json)?;
//! let crane = layout.eot_crane("bay-1").unwrap();
//! let service = ConstrainedDragService::with_defaults(&layout);
//! let update = service.plan_move(crane.into(), pointer)?;
//! layout.apply_move(&update)?;
//! ```

pub mod collision;
pub mod constraint;
pub mod drag;
pub mod entities;
pub mod factory;
pub mod guide;
pub mod layout;

pub use collision::{CollisionDetector, CollisionWarning, CollisionWarnings};
pub use constraint::{
    ArcConstraint, Constraint, ConstraintType, LinearConstraint, MotionConstraint,
    ParameterRange, PathConstraint, PolygonConstraint,
};
pub use drag::{ConstrainedDragService, DragRejection, MoveUpdate};
pub use entities::{
    AgvPath, AgvWaypoint, CanvasBounds, Conveyor, EntityKind, EntityRef, EotCrane, JibCrane,
    Runway, Zone,
};
pub use factory::ConstraintFactory;
pub use guide::VisualGuide;
pub use layout::{LayoutLookup, LayoutSnapshot};
pub use layoutkit_core::Point;
