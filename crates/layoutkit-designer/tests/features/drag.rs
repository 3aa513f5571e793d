use layoutkit_designer::{
    CanvasBounds, ConstrainedDragService, DragRejection, EntityKind, EotCrane, JibCrane,
    LayoutSnapshot, MoveUpdate, Point, Runway, VisualGuide,
};

fn crane(id: &str, bridge_position: f64) -> EotCrane {
    EotCrane {
        id: id.into(),
        name: String::new(),
        runway_id: "rw".into(),
        zone_min: 0.0,
        zone_max: 1.0,
        bridge_position,
    }
}

fn layout() -> LayoutSnapshot {
    LayoutSnapshot {
        runways: vec![Runway {
            id: "rw".into(),
            name: String::new(),
            start: Point::new(0.0, 50.0),
            end: Point::new(1000.0, 50.0),
        }],
        eot_cranes: vec![crane("c1", 0.1), crane("c2", 0.9)],
        canvas: Some(CanvasBounds {
            width: 580.0,
            height: 400.0,
        }),
        ..LayoutSnapshot::default()
    }
}

#[test]
fn test_collision_checked_before_canvas() {
    let layout = layout();
    let service = ConstrainedDragService::with_defaults(&layout);
    let c1 = &layout.eot_cranes[0];

    // x = 590 is past the canvas edge and within 0.1 of the runway midpoint
    let err = service.plan_move(c1.into(), Point::new(590.0, 60.0)).unwrap_err();
    assert_eq!(err, DragRejection::Collision);
}

#[test]
fn test_outside_canvas_rejected() {
    let layout = layout();
    let service = ConstrainedDragService::with_defaults(&layout);
    let c1 = &layout.eot_cranes[0];

    let err = service.plan_move(c1.into(), Point::new(700.0, 60.0)).unwrap_err();
    match err {
        DragRejection::OutsideCanvas { position } => {
            assert!((position.x - 700.0).abs() < 1e-9);
            assert!((position.y - 50.0).abs() < 1e-9);
        }
        other => panic!("unexpected rejection {other}"),
    }
}

#[test]
fn test_accepted_move_round_trips_into_layout() {
    let mut layout = layout();
    let update = {
        let service = ConstrainedDragService::with_defaults(&layout);
        service
            .plan_move((&layout.eot_cranes[0]).into(), Point::new(300.0, 0.0))
            .unwrap()
    };
    layout.apply_move(&update).unwrap();
    let c1 = layout.eot_crane("c1").unwrap();
    assert!((c1.bridge_position - 0.3).abs() < 1e-9);
}

#[test]
fn test_missing_runway_is_unresolved() {
    let layout = layout();
    let service = ConstrainedDragService::with_defaults(&layout);
    let mut orphan = crane("c3", 0.5);
    orphan.runway_id = "gone".into();

    let err = service.plan_move((&orphan).into(), Point::new(10.0, 10.0)).unwrap_err();
    assert_eq!(
        err,
        DragRejection::Unresolved {
            kind: EntityKind::EotCrane,
            id: "c3".into()
        }
    );
    assert_eq!(err.to_string(), "EOT crane c3 has no resolvable constraint");
}

#[test]
fn test_guide_and_warnings_for_jib() {
    let layout = LayoutSnapshot {
        jib_cranes: vec![JibCrane {
            id: "j".into(),
            name: String::new(),
            center: Point::new(50.0, 50.0),
            radius: 20.0,
            arc_start_deg: 0.0,
            arc_end_deg: 90.0,
        }],
        ..LayoutSnapshot::default()
    };
    let service = ConstrainedDragService::with_defaults(&layout);
    let jib = &layout.jib_cranes[0];

    assert!(service.supports_constrained_movement(jib.into()));
    assert!(matches!(
        service.constraint_guide(jib.into()),
        Some(VisualGuide::Arc { radius, .. }) if radius == 20.0
    ));
    assert!(!service.would_collide(jib.into(), Point::new(70.0, 50.0)));
    assert!(service.collision_warnings(jib.into(), Point::new(70.0, 50.0)).is_empty());

    let update = service.plan_move(jib.into(), Point::new(50.0, 90.0)).unwrap();
    assert!(matches!(update, MoveUpdate::JibRotation { ref crane_id, .. } if crane_id == "j"));
}
