//! Shortest paths and nearest-point queries
//!
//! Networks hold tens of points, so Dijkstra here scans for the closest
//! unvisited point each round instead of keeping a heap.

use crate::model::{PointId, TrackId, TransportNetwork};
use layoutkit_core::Point;
use std::collections::{BTreeMap, HashMap, HashSet};

/// One traversable direction of a track.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub to: PointId,
    pub weight: f64,
    pub track: TrackId,
}

pub type Adjacency = BTreeMap<PointId, Vec<Edge>>;

/// Outgoing edges per point.
///
/// A one-way track contributes a single edge, a bidirectional track one in
/// each direction. Blocked tracks and tracks whose endpoints are missing are
/// left out. The weight is the track's explicit distance when positive,
/// otherwise the straight-line distance between its endpoints.
pub fn build_adjacency(network: &TransportNetwork) -> Adjacency {
    let mut adjacency: Adjacency = network
        .point_ids()
        .map(|id| (id.clone(), Vec::new()))
        .collect();

    for track in network.tracks().iter().filter(|t| !t.blocked) {
        let (Some(a), Some(b)) = (
            network.point_position(&track.from),
            network.point_position(&track.to),
        ) else {
            continue;
        };
        let weight = match track.distance {
            Some(d) if d > 0.0 => d,
            _ => a.distance_to(&b),
        };

        if let Some(edges) = adjacency.get_mut(&track.from) {
            edges.push(Edge {
                to: track.to.clone(),
                weight,
                track: track.id.clone(),
            });
        }
        if track.bidirectional {
            if let Some(edges) = adjacency.get_mut(&track.to) {
                edges.push(Edge {
                    to: track.from.clone(),
                    weight,
                    track: track.id.clone(),
                });
            }
        }
    }
    adjacency
}

/// A path through the network with its summed weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub points: Vec<PointId>,
    pub distance: f64,
}

impl Route {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Point ids from `from` to `to` inclusive, or `None` when either end is
/// unknown or `to` cannot be reached.
pub fn find_shortest_path(network: &TransportNetwork, from: &str, to: &str) -> Option<Vec<PointId>> {
    find_route(network, from, to).map(|route| route.points)
}

pub fn find_route(network: &TransportNetwork, from: &str, to: &str) -> Option<Route> {
    if !network.contains_point(from) || !network.contains_point(to) {
        return None;
    }
    if from == to {
        return Some(Route {
            points: vec![PointId::from(from)],
            distance: 0.0,
        });
    }

    let adjacency = build_adjacency(network);
    let order: Vec<&PointId> = network.point_ids().collect();
    let mut dist: HashMap<&str, f64> = order.iter().map(|id| (id.as_str(), f64::INFINITY)).collect();
    let mut previous: HashMap<&str, &PointId> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    dist.insert(from, 0.0);

    loop {
        let current = order
            .iter()
            .filter(|id| !visited.contains(id.as_str()))
            .map(|id| (*id, dist[id.as_str()]))
            .filter(|(_, d)| d.is_finite())
            .min_by(|(_, a), (_, b)| a.total_cmp(b));
        let Some((current, current_dist)) = current else {
            break;
        };
        if current.as_str() == to {
            break;
        }
        visited.insert(current.as_str());

        for edge in adjacency.get(current).into_iter().flatten() {
            if visited.contains(edge.to.as_str()) {
                continue;
            }
            let candidate = current_dist + edge.weight;
            if let Some(best) = dist.get_mut(edge.to.as_str()) {
                if candidate < *best {
                    *best = candidate;
                    previous.insert(edge.to.as_str(), current);
                }
            }
        }
    }

    let distance = dist.get(to).copied().filter(|d| d.is_finite())?;
    let mut points = vec![PointId::from(to)];
    let mut cursor = to;
    while let Some(prev) = previous.get(cursor) {
        points.push((*prev).clone());
        cursor = prev.as_str();
    }
    points.reverse();
    Some(Route { points, distance })
}

/// Result of [`find_nearest_point`].
#[derive(Debug, Clone, PartialEq)]
pub struct NearestPoint {
    pub id: PointId,
    pub position: Point,
    pub distance: f64,
}

/// Closest station or waypoint to `(x, y)`, skipping `exclude`.
///
/// Stations are scanned before waypoints and the first of several equally
/// close points wins.
pub fn find_nearest_point(
    network: &TransportNetwork,
    x: f64,
    y: f64,
    exclude: Option<&str>,
) -> Option<NearestPoint> {
    let target = Point::new(x, y);
    let stations = network.stations().iter().map(|s| (&s.id, s.position));
    let waypoints = network.waypoints().iter().map(|w| (&w.id, w.position));

    stations
        .chain(waypoints)
        .filter(|(id, _)| Some(id.as_str()) != exclude)
        .map(|(id, position)| NearestPoint {
            id: id.clone(),
            position,
            distance: position.distance_to(&target),
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
