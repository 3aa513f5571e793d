//! A pointer sweep over a small bay, applying each accepted step.

use layoutkit_designer::{
    ConstrainedDragService, DragRejection, EotCrane, LayoutSnapshot, MoveUpdate, Point, Runway,
    Zone,
};

fn bay() -> LayoutSnapshot {
    LayoutSnapshot {
        runways: vec![Runway {
            id: "rw".into(),
            name: "Bay runway".into(),
            start: Point::new(0.0, 100.0),
            end: Point::new(500.0, 100.0),
        }],
        eot_cranes: vec![
            EotCrane {
                id: "west".into(),
                name: String::new(),
                runway_id: "rw".into(),
                zone_min: 0.0,
                zone_max: 1.0,
                bridge_position: 0.1,
            },
            EotCrane {
                id: "east".into(),
                name: String::new(),
                runway_id: "rw".into(),
                zone_min: 0.0,
                zone_max: 1.0,
                bridge_position: 0.7,
            },
        ],
        zones: vec![Zone {
            id: "buffer".into(),
            name: String::new(),
            points: vec![
                Point::new(100.0, 200.0),
                Point::new(200.0, 200.0),
                Point::new(200.0, 300.0),
                Point::new(100.0, 300.0),
            ],
        }],
        ..LayoutSnapshot::default()
    }
}

#[test]
fn test_crane_sweep_stops_short_of_neighbor() {
    let mut layout = bay();
    let mut last_accepted = None;

    for step in 1..=10 {
        let pointer = Point::new(step as f64 * 30.0, 120.0);
        let planned = {
            let service = ConstrainedDragService::with_defaults(&layout);
            let west = layout.eot_crane("west").unwrap();
            service.plan_move(west.into(), pointer)
        };
        match planned {
            Ok(update) => {
                layout.apply_move(&update).unwrap();
                last_accepted = Some(step);
            }
            Err(DragRejection::Collision) => break,
            Err(other) => panic!("unexpected rejection at step {step}: {other}"),
        }
    }

    // east is measured at the runway midpoint, whatever its bridge position,
    // so step 7 (0.42 of the runway) is the first one within 0.1 of it
    assert_eq!(last_accepted, Some(6));
    let west = layout.eot_crane("west").unwrap();
    assert!((west.bridge_position - 0.36).abs() < 1e-9);
}

#[test]
fn test_zone_drag_moves_outline_rigidly() {
    let mut layout = bay();
    let before = layout.zone("buffer").unwrap().points.clone();

    let update = {
        let service = ConstrainedDragService::with_defaults(&layout);
        let zone = layout.zone("buffer").unwrap();
        service.plan_move(zone.into(), Point::new(150.0, 900.0)).unwrap()
    };
    assert!(matches!(update, MoveUpdate::TranslateZone { .. }));
    layout.apply_move(&update).unwrap();

    let after = &layout.zone("buffer").unwrap().points;
    let dx = after[0].x - before[0].x;
    let dy = after[0].y - before[0].y;
    for (a, b) in before.iter().zip(after) {
        assert!((b.x - a.x - dx).abs() < 1e-9);
        assert!((b.y - a.y - dy).abs() < 1e-9);
    }
    // dragged straight up, so the centroid lands on the top edge
    assert!(dx.abs() < 1e-6);
    assert!((dy - 50.0).abs() < 1e-6);
}
