use layoutkit_designer::{
    CollisionDetector, CollisionWarning, Conveyor, JibCrane, LayoutSnapshot, Point, Zone,
};
use layoutkit_settings::CollisionSettings;

fn jib(id: &str, center: Point, radius: f64) -> JibCrane {
    JibCrane {
        id: id.into(),
        name: String::new(),
        center,
        radius,
        arc_start_deg: 0.0,
        arc_end_deg: 360.0,
    }
}

fn zone(id: &str, origin: Point) -> Zone {
    Zone {
        id: id.into(),
        name: String::new(),
        points: vec![
            origin,
            origin.translated(40.0, 0.0),
            origin.translated(40.0, 40.0),
            origin.translated(0.0, 40.0),
        ],
    }
}

#[test]
fn test_jib_clearance_uses_other_radius_plus_margin() {
    let layout = LayoutSnapshot {
        jib_cranes: vec![
            jib("a", Point::new(0.0, 0.0), 10.0),
            jib("b", Point::new(100.0, 0.0), 30.0),
        ],
        ..LayoutSnapshot::default()
    };
    let detector = CollisionDetector::with_defaults(&layout);
    let a = &layout.jib_cranes[0];

    // b reaches 30 + 5 from its column
    assert!(detector.check_constraint_collision(a.into(), Point::new(66.0, 0.0)));
    assert!(!detector.check_constraint_collision(a.into(), Point::new(64.0, 0.0)));
}

#[test]
fn test_zone_separation_against_centroids() {
    let layout = LayoutSnapshot {
        zones: vec![zone("a", Point::new(0.0, 0.0)), zone("b", Point::new(100.0, 0.0))],
        ..LayoutSnapshot::default()
    };
    let detector = CollisionDetector::with_defaults(&layout);
    let a = &layout.zones[0];

    // b's centroid is (120, 20)
    assert!(detector.check_constraint_collision(a.into(), Point::new(105.0, 20.0)));
    assert!(!detector.check_constraint_collision(a.into(), Point::new(99.0, 20.0)));
}

#[test]
fn test_conveyor_compares_against_first_point_only() {
    let layout = LayoutSnapshot {
        conveyors: vec![
            Conveyor {
                id: "a".into(),
                name: String::new(),
                path: vec![Point::new(0.0, 0.0), Point::new(50.0, 0.0)],
            },
            Conveyor {
                id: "b".into(),
                name: String::new(),
                path: vec![Point::new(0.0, 100.0), Point::new(0.0, 200.0)],
            },
            Conveyor {
                id: "empty".into(),
                name: String::new(),
                path: Vec::new(),
            },
        ],
        ..LayoutSnapshot::default()
    };
    let detector = CollisionDetector::with_defaults(&layout);
    let a = &layout.conveyors[0];

    assert!(detector.check_constraint_collision(a.into(), Point::new(5.0, 95.0)));
    // right on b's second point, but only the start counts
    assert!(!detector.check_constraint_collision(a.into(), Point::new(0.0, 200.0)));
}

#[test]
fn test_custom_settings_are_honored() {
    let layout = LayoutSnapshot {
        jib_cranes: vec![
            jib("a", Point::new(0.0, 0.0), 10.0),
            jib("b", Point::new(100.0, 0.0), 30.0),
        ],
        ..LayoutSnapshot::default()
    };
    let settings = CollisionSettings {
        arc_margin: 50.0,
        ..CollisionSettings::default()
    };
    let detector = CollisionDetector::new(&layout, settings);
    let a = &layout.jib_cranes[0];
    assert!(detector.check_constraint_collision(a.into(), Point::new(25.0, 0.0)));
}

#[test]
fn test_jib_boundary_violation_and_warnings() {
    let layout = LayoutSnapshot {
        jib_cranes: vec![jib("a", Point::new(0.0, 0.0), 10.0)],
        ..LayoutSnapshot::default()
    };
    let detector = CollisionDetector::with_defaults(&layout);
    let a = &layout.jib_cranes[0];

    assert!(!detector.check_boundary_violation(a.into(), Point::new(10.5, 0.0)));
    let warnings = detector.collision_warnings(a.into(), Point::new(0.0, 25.0));
    assert_eq!(warnings.as_slice(), &[CollisionWarning::OutsideBoundary]);
}
