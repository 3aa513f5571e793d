use layoutkit_transport::{
    find_route, find_shortest_path, Point, PointId, Station, Track, TransportNetwork,
    TransportPathService, Waypoint,
};

fn ids(path: &[PointId]) -> Vec<&str> {
    path.iter().map(PointId::as_str).collect()
}

#[test]
fn test_explicit_weights_pick_the_detour() {
    let mut net = TransportNetwork::new("Weights");
    net.add_station(Station::new("A", Point::new(0.0, 0.0)).with_id("A"))
        .unwrap();
    net.add_station(Station::new("B", Point::new(1.0, 0.0)).with_id("B"))
        .unwrap();
    net.add_station(Station::new("C", Point::new(0.5, 10.0)).with_id("C"))
        .unwrap();
    net.add_track(Track::new("A", "B").with_distance(5.0)).unwrap();
    net.add_track(Track::new("A", "C").with_distance(1.0)).unwrap();
    net.add_track(Track::new("C", "B").with_distance(2.0)).unwrap();

    let path = find_shortest_path(&net, "A", "B").unwrap();
    assert_eq!(ids(&path), vec!["A", "C", "B"]);
    let back = find_shortest_path(&net, "B", "A").unwrap();
    assert_eq!(ids(&back), vec!["B", "C", "A"]);
}

#[test]
fn test_disconnected_pair_has_no_route() {
    let mut net = TransportNetwork::new("Islands");
    for (id, x) in [("A", 0.0), ("B", 10.0), ("C", 100.0), ("D", 110.0)] {
        net.add_station(Station::new(id, Point::new(x, 0.0)).with_id(id))
            .unwrap();
    }
    net.add_track(Track::new("A", "B")).unwrap();
    net.add_track(Track::new("C", "D")).unwrap();

    assert!(find_shortest_path(&net, "A", "D").is_none());
    assert!(find_route(&net, "B", "C").is_none());
    assert_eq!(find_route(&net, "C", "D").unwrap().distance, 10.0);
}

#[test]
fn test_route_through_spur_and_split() {
    let mut net = TransportNetwork::new("Edited");
    net.add_station(Station::new("In", Point::new(0.0, 0.0)).with_id("in"))
        .unwrap();
    net.add_station(Station::new("Out", Point::new(400.0, 0.0)).with_id("out"))
        .unwrap();
    let main = net.add_track(Track::new("in", "out")).unwrap();

    let mut service = TransportPathService::with_defaults(&mut net);
    let middle = service.insert_waypoint(&main).unwrap();
    let spur = service.add_blind_path(&middle, 0.0, 50.0).unwrap();

    let route = find_route(&net, "in", &spur.waypoint).unwrap();
    assert_eq!(
        ids(&route.points),
        vec!["in", middle.as_str(), spur.waypoint.as_str()]
    );
    assert!((route.distance - 250.0).abs() < 1e-9);

    let through = find_route(&net, "in", "out").unwrap();
    assert_eq!(through.len(), 3);
    assert!((through.distance - 400.0).abs() < 1e-9);
}

#[test]
fn test_connect_to_nearest_joins_islands() {
    let mut net = TransportNetwork::new("Join");
    net.add_station(Station::new("A", Point::new(0.0, 0.0)).with_id("A"))
        .unwrap();
    net.add_waypoint(Waypoint::new("W", Point::new(30.0, 0.0)).with_id("W"))
        .unwrap();
    net.add_station(Station::new("B", Point::new(60.0, 0.0)).with_id("B"))
        .unwrap();
    net.add_track(Track::new("W", "B")).unwrap();
    assert!(find_shortest_path(&net, "A", "B").is_none());

    TransportPathService::with_defaults(&mut net)
        .connect_to_nearest("A")
        .unwrap();
    assert_eq!(ids(&find_shortest_path(&net, "A", "B").unwrap()), vec!["A", "W", "B"]);
}
