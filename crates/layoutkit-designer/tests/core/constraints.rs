use layoutkit_designer::{
    ArcConstraint, Constraint, ConstraintType, LinearConstraint, MotionConstraint,
    PathConstraint, Point, PolygonConstraint,
};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

#[test]
fn test_linear_snaps_perpendicular() {
    let rail = LinearConstraint::new(Point::new(10.0, 10.0), Point::new(110.0, 10.0));
    let (snapped, t) = rail.snap(Point::new(60.0, 42.0));
    assert!((t - 0.5).abs() < 1e-12, "t = {t}");
    assert!((snapped.x - 60.0).abs() < 1e-9);
    assert!((snapped.y - 10.0).abs() < 1e-9);
}

#[test]
fn test_linear_diagonal() {
    let rail = LinearConstraint::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    let t = rail.project_point(Point::new(10.0, 0.0));
    assert!((t - 0.5).abs() < 1e-12);
    assert_eq!(rail.length(), 200.0_f64.sqrt());
}

#[test]
fn test_arc_projection_below_center() {
    // straight down from the center is equidistant from both ends of a
    // half-circle sweep; either end is acceptable
    let arc = ArcConstraint::new(Point::new(0.0, 0.0), 10.0, 0.0, PI);
    let angle = arc.project_point(Point::new(0.0, -10.0));
    assert!(angle == 0.0 || angle == PI, "angle = {angle}");
}

#[test]
fn test_arc_lifted_range() {
    // 270 deg .. 450 deg, the sweep through +x
    let arc = ArcConstraint::new(Point::ORIGIN, 5.0, 1.5 * PI, 2.5 * PI);
    let below = arc.project_point(Point::new(1.0, -5.0));
    assert!(arc.parameter_range().contains(below));
    assert!(below > 1.5 * PI && below < TAU);

    // a cursor just above +x normalizes to a small angle and clamps up
    let above = arc.project_point(Point::new(5.0, 1.0));
    assert_eq!(above, 1.5 * PI);
}

#[test]
fn test_path_near_middle_waypoint() {
    let path = PathConstraint::new(vec![
        Point::new(0.0, 0.0),
        Point::new(50.0, 0.0),
        Point::new(50.0, 80.0),
    ])
    .unwrap();
    let (snapped, _) = path.snap(Point::new(50.3, 0.2));
    assert!(snapped.distance_to(&Point::new(50.0, 0.0)) < 0.5);
}

#[test]
fn test_path_first_segment_wins_ties() {
    // a hairpin: both legs are equally close to the point
    let path = PathConstraint::new(vec![
        Point::new(0.0, 1.0),
        Point::new(10.0, 1.0),
        Point::new(10.0, -1.0),
        Point::new(0.0, -1.0),
    ])
    .unwrap();
    let t = path.project_point(Point::new(5.0, 0.0));
    let expected = 5.0 / path.total_length();
    assert!((t - expected).abs() < 1e-12);
}

#[test]
fn test_path_evaluate_beyond_end() {
    let path = PathConstraint::new(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]).unwrap();
    assert_eq!(path.evaluate(1.5), Point::new(3.0, 4.0));
    assert_eq!(path.segment_lengths(), &[5.0]);
}

#[test]
fn test_polygon_triangle() {
    let tri = PolygonConstraint::new(vec![
        Point::new(0.0, 0.0),
        Point::new(90.0, 0.0),
        Point::new(0.0, 90.0),
    ])
    .unwrap();
    assert_eq!(tri.centroid(), Point::new(30.0, 30.0));
    assert!(tri.contains(tri.centroid()));

    // straight down from the centroid hits the bottom edge
    let bottom = tri.evaluate(1.5 * PI);
    assert!((bottom.x - 30.0).abs() < 1e-6);
    assert!(bottom.y.abs() < 1e-6);
}

#[test]
fn test_polygon_range_is_full_turn() {
    let square = PolygonConstraint::new(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ])
    .unwrap();
    let range = square.parameter_range();
    assert_eq!((range.min, range.max), (0.0, TAU));
    assert!(range.contains(square.project_point(Point::new(0.5, -3.0))));
}

#[test]
fn test_constraint_enum_reports_type() {
    let constraints: Vec<Constraint> = vec![
        LinearConstraint::new(Point::ORIGIN, Point::new(1.0, 0.0)).into(),
        ArcConstraint::new(Point::ORIGIN, 1.0, 0.0, FRAC_PI_2).into(),
        PathConstraint::new(vec![Point::ORIGIN, Point::new(0.0, 1.0)])
            .unwrap()
            .into(),
        PolygonConstraint::new(vec![
            Point::ORIGIN,
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap()
        .into(),
    ];
    let types: Vec<ConstraintType> = constraints.iter().map(|c| c.constraint_type()).collect();
    assert_eq!(
        types,
        vec![
            ConstraintType::Linear,
            ConstraintType::Arc,
            ConstraintType::Path,
            ConstraintType::Polygon
        ]
    );
}
