use layoutkit_designer::{
    AgvPath, AgvWaypoint, ConstraintFactory, ConstraintType, Conveyor, EntityRef, EotCrane,
    JibCrane, LayoutSnapshot, MotionConstraint, Point, Runway, Zone,
};
use std::f64::consts::{PI, TAU};

fn layout() -> LayoutSnapshot {
    LayoutSnapshot {
        runways: vec![Runway {
            id: "rw-north".into(),
            name: "North".into(),
            start: Point::new(0.0, 0.0),
            end: Point::new(0.0, 400.0),
        }],
        eot_cranes: vec![EotCrane {
            id: "crane-1".into(),
            name: "Bay 1".into(),
            runway_id: "rw-north".into(),
            zone_min: 0.0,
            zone_max: 0.5,
            bridge_position: 0.25,
        }],
        jib_cranes: vec![JibCrane {
            id: "jib-1".into(),
            name: "Press jib".into(),
            center: Point::new(200.0, 200.0),
            radius: 40.0,
            arc_start_deg: 300.0,
            arc_end_deg: 60.0,
        }],
        conveyors: vec![Conveyor {
            id: "cv-1".into(),
            name: "Infeed".into(),
            path: vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
        }],
        zones: vec![Zone {
            id: "z-1".into(),
            name: "Staging".into(),
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
            ],
        }],
        agv_waypoints: vec![AgvWaypoint {
            id: "w-1".into(),
            name: "Dock".into(),
            position: Point::new(0.0, 0.0),
        }],
        agv_paths: vec![AgvPath {
            id: "lane-1".into(),
            name: String::new(),
            from_waypoint_id: "w-1".into(),
            to_waypoint_id: "w-1".into(),
        }],
        canvas: None,
    }
}

#[test]
fn test_resolves_every_entity_kind() {
    let layout = layout();
    let factory = ConstraintFactory::new(&layout);

    let kinds = [
        (EntityRef::from(&layout.eot_cranes[0]), ConstraintType::Linear),
        (EntityRef::from(&layout.jib_cranes[0]), ConstraintType::Arc),
        (EntityRef::from(&layout.conveyors[0]), ConstraintType::Path),
        (EntityRef::from(&layout.zones[0]), ConstraintType::Polygon),
        (EntityRef::from(&layout.agv_paths[0]), ConstraintType::Linear),
    ];
    for (entity, expected) in kinds {
        let constraint = factory
            .constraint_for(entity)
            .unwrap_or_else(|| panic!("{} {} unresolved", entity.kind(), entity.id()));
        assert_eq!(constraint.constraint_type(), expected);
    }
}

#[test]
fn test_eot_window_covers_half_runway() {
    let layout = layout();
    let factory = ConstraintFactory::new(&layout);
    let c = factory.eot_crane_constraint(&layout.eot_cranes[0]).unwrap();
    assert_eq!(c.evaluate(1.0), Point::new(0.0, 200.0));
}

#[test]
fn test_jib_wraps_through_zero() {
    let layout = layout();
    let factory = ConstraintFactory::new(&layout);
    let c = factory.jib_crane_constraint(&layout.jib_cranes[0]);
    let range = c.parameter_range();
    assert!((range.min - 300.0_f64.to_radians()).abs() < 1e-12);
    assert!((range.max - (60.0_f64.to_radians() + TAU)).abs() < 1e-12);
    assert!(range.max - range.min < PI);
}

#[test]
fn test_degenerate_agv_lane_still_resolves() {
    let layout = layout();
    let factory = ConstraintFactory::new(&layout);
    let c = factory.agv_path_constraint(&layout.agv_paths[0]).unwrap();
    assert_eq!(c.project_point(Point::new(50.0, 50.0)), 0.0);
}

#[test]
fn test_supports_constrained_movement() {
    let layout = layout();
    let factory = ConstraintFactory::new(&layout);
    let short = Conveyor {
        id: "cv-2".into(),
        name: String::new(),
        path: vec![Point::ORIGIN],
    };
    assert!(!factory.supports_constrained_movement((&short).into()));
    assert!(factory.supports_constrained_movement((&layout.conveyors[0]).into()));

    let orphan = EotCrane {
        id: "crane-2".into(),
        name: String::new(),
        runway_id: String::new(),
        zone_min: 0.0,
        zone_max: 1.0,
        bridge_position: 0.0,
    };
    assert!(factory.supports_constrained_movement((&orphan).into()));
    assert!(factory.constraint_for((&orphan).into()).is_none());
}
