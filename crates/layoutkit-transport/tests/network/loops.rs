use layoutkit_transport::{
    find_shortest_path, Point, Station, Track, TrackId, TransportNetwork, TransportPathService,
};
use std::collections::HashSet;

fn grouped(positions: &[(f64, f64)]) -> TransportNetwork {
    let mut net = TransportNetwork::new("Cell");
    for (i, (x, y)) in positions.iter().enumerate() {
        net.add_station(
            Station::new(format!("S{i}"), Point::new(*x, *y))
                .with_id(format!("s{i}").as_str())
                .with_group("cell"),
        )
        .unwrap();
    }
    net
}

/// Follows the tracks in order and checks each one starts where the last
/// ended and the walk returns to its start.
fn assert_closed_walk(net: &TransportNetwork, tracks: &[TrackId]) -> Vec<String> {
    let legs: Vec<&Track> = tracks.iter().map(|id| net.track(id).unwrap()).collect();
    for pair in legs.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }
    assert_eq!(legs.last().unwrap().to, legs[0].from);
    legs.iter().map(|t| t.from.to_string()).collect()
}

#[test]
fn test_single_station_loop_is_closed_triangle() {
    let mut net = grouped(&[(200.0, 200.0)]);
    let tracks = TransportPathService::with_defaults(&mut net)
        .create_loop_for_group("cell")
        .unwrap();

    assert_eq!(tracks.len(), 3);
    let visited = assert_closed_walk(&net, &tracks);
    assert_eq!(visited[0], "s0");
    assert_eq!(net.waypoints().len(), 2);
}

#[test]
fn test_multi_station_loop_visits_each_once() {
    let mut net = grouped(&[
        (0.0, 0.0),
        (100.0, 100.0),
        (100.0, 0.0),
        (0.0, 100.0),
        (50.0, 150.0),
    ]);
    let tracks = TransportPathService::with_defaults(&mut net)
        .create_loop_for_group("cell")
        .unwrap();

    assert_eq!(tracks.len(), 5);
    let visited = assert_closed_walk(&net, &tracks);
    let distinct: HashSet<&String> = visited.iter().collect();
    assert_eq!(distinct.len(), 5);
    assert!(net.waypoints().is_empty());
}

#[test]
fn test_loop_follows_angle_around_centroid() {
    // a square listed out of order comes back as its perimeter
    let mut net = grouped(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]);
    let tracks = TransportPathService::with_defaults(&mut net)
        .create_loop_for_group("cell")
        .unwrap();

    for id in &tracks {
        let track = net.track(id).unwrap();
        let a = net.point_position(&track.from).unwrap();
        let b = net.point_position(&track.to).unwrap();
        assert_eq!(a.distance_to(&b), 10.0);
    }
}

#[test]
fn test_recreate_then_route_between_members() {
    let mut net = grouped(&[(0.0, 0.0), (300.0, 40.0), (120.0, 260.0), (-80.0, 190.0)]);
    // a stale one-way track that would otherwise strand s1
    net.add_track(Track::new("s1", "s0").one_way()).unwrap();

    TransportPathService::with_defaults(&mut net)
        .recreate_loop("cell")
        .unwrap();

    assert_eq!(net.tracks().len(), 4);
    let ids: Vec<String> = net.stations().iter().map(|s| s.id.to_string()).collect();
    for from in &ids {
        for to in &ids {
            let path = find_shortest_path(&net, from, to).unwrap();
            assert_eq!(path.first().unwrap().as_str(), from);
            assert_eq!(path.last().unwrap().as_str(), to);
        }
    }
}

#[test]
fn test_recreate_leaves_other_groups_alone() {
    let mut net = grouped(&[(0.0, 0.0), (50.0, 0.0)]);
    for (id, x) in [("o1", 500.0), ("o2", 600.0)] {
        net.add_station(
            Station::new(id, Point::new(x, 0.0))
                .with_id(id)
                .with_group("other"),
        )
        .unwrap();
    }
    let mut service = TransportPathService::with_defaults(&mut net);
    service.create_loop_for_group("other").unwrap();
    service.create_loop_for_group("cell").unwrap();
    service.recreate_loop("cell").unwrap();

    assert_eq!(net.tracks().len(), 4);
    assert!(net.are_points_connected("o1", "o2"));
    assert_eq!(net.group_names(), vec!["cell".to_string(), "other".to_string()]);
}
