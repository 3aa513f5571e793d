//! # LayoutKit Transport
//!
//! The transport network of a layout: stations, waypoints and the tracks
//! between them.
//!
//! - [`model`]: the network arena and its element records
//! - [`service`]: structural edits (loops, spurs, splits)
//! - [`routing`]: shortest paths and nearest-point queries
//! - [`validation`]: whole-network consistency checks

pub mod model;
pub mod routing;
pub mod service;
pub mod validation;

pub use model::{PointId, Station, StationType, Track, TrackId, TransportNetwork, Waypoint};
pub use routing::{
    build_adjacency, find_nearest_point, find_route, find_shortest_path, Adjacency, Edge,
    NearestPoint, Route,
};
pub use service::{BlindPath, TransportPathService};
pub use validation::{validate_network, IssueKind, NetworkValidationIssue, Severity};

pub use layoutkit_core::{NetworkError, Point};
