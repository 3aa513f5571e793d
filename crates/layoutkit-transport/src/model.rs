//! Transport network data model
//!
//! A network is an arena of stations, waypoints and tracks addressed by
//! stable string ids. Stations and waypoints share one id space ("points");
//! a track always joins two existing points. Removing a point removes every
//! track touching it.

use layoutkit_core::{NetworkError, Point};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Fresh random id.
            pub fn new_v4() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Id of a station or waypoint.
    PointId
);
string_id!(
    /// Id of a track.
    TrackId
);

/// Role of a station in the material flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationType {
    #[default]
    Pickup,
    Dropoff,
    /// Where transporters park between jobs.
    Home,
    Buffer,
    Crossing,
    Waypoint,
    Charging,
    Maintenance,
}

fn default_queue_capacity() -> u32 {
    5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: PointId,
    pub name: String,
    /// Station center.
    pub position: Point,
    #[serde(default)]
    pub station_type: StationType,
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: u32,
    /// Stations sharing a group are linked into one loop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Station {
    pub fn new(name: impl Into<String>, position: Point) -> Self {
        Self {
            id: PointId::new_v4(),
            name: name.into(),
            position,
            station_type: StationType::default(),
            queue_capacity: default_queue_capacity(),
            group: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<PointId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_type(mut self, station_type: StationType) -> Self {
        self.station_type = station_type;
        self
    }

    pub fn in_group(&self, group: &str) -> bool {
        self.group.as_deref() == Some(group)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: PointId,
    pub name: String,
    pub position: Point,
    /// Paths split here.
    #[serde(default)]
    pub is_junction: bool,
    /// Transporters pick a branch here.
    #[serde(default)]
    pub is_decision: bool,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, position: Point) -> Self {
        Self {
            id: PointId::new_v4(),
            name: name.into(),
            position,
            is_junction: false,
            is_decision: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<PointId>) -> Self {
        self.id = id.into();
        self
    }
}

fn default_true() -> bool {
    true
}

fn default_speed_limit() -> f64 {
    2.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub from: PointId,
    pub to: PointId,
    #[serde(default = "default_true")]
    pub bidirectional: bool,
    /// Explicit routing length; `None` or non-positive means "use the
    /// straight-line distance".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default)]
    pub blocked: bool,
    /// m/s
    #[serde(default = "default_speed_limit")]
    pub speed_limit: f64,
}

impl Track {
    pub fn new(from: impl Into<PointId>, to: impl Into<PointId>) -> Self {
        Self {
            id: TrackId::new_v4(),
            from: from.into(),
            to: to.into(),
            bidirectional: true,
            distance: None,
            blocked: false,
            speed_limit: default_speed_limit(),
        }
    }

    pub fn with_id(mut self, id: impl Into<TrackId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn one_way(mut self) -> Self {
        self.bidirectional = false;
        self
    }

    pub fn touches(&self, point: &str) -> bool {
        self.from.as_str() == point || self.to.as_str() == point
    }

    /// The endpoint across from `point`, if the track touches it.
    pub fn other_end(&self, point: &str) -> Option<&PointId> {
        if self.from.as_str() == point {
            Some(&self.to)
        } else if self.to.as_str() == point {
            Some(&self.from)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportNetwork {
    pub id: String,
    pub name: String,
    #[serde(default)]
    stations: Vec<Station>,
    #[serde(default)]
    waypoints: Vec<Waypoint>,
    #[serde(default)]
    tracks: Vec<Track>,
}

impl Default for TransportNetwork {
    fn default() -> Self {
        Self::new("Network")
    }
}

impl TransportNetwork {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            stations: Vec::new(),
            waypoints: Vec::new(),
            tracks: Vec::new(),
        }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id.as_str() == id)
    }

    pub fn waypoint(&self, id: &str) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| w.id.as_str() == id)
    }

    pub fn track(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id.as_str() == id)
    }

    pub fn contains_point(&self, id: &str) -> bool {
        self.point_position(id).is_some()
    }

    /// Stations first, then waypoints, each in insertion order.
    pub fn point_ids(&self) -> impl Iterator<Item = &PointId> + '_ {
        self.stations
            .iter()
            .map(|s| &s.id)
            .chain(self.waypoints.iter().map(|w| &w.id))
    }

    pub fn point_position(&self, id: &str) -> Option<Point> {
        self.station(id)
            .map(|s| s.position)
            .or_else(|| self.waypoint(id).map(|w| w.position))
    }

    pub fn point_name(&self, id: &str) -> Option<&str> {
        self.station(id)
            .map(|s| s.name.as_str())
            .or_else(|| self.waypoint(id).map(|w| w.name.as_str()))
    }

    fn ensure_unique_point(&self, id: &PointId) -> Result<(), NetworkError> {
        if self.contains_point(id) {
            return Err(NetworkError::DuplicateId { id: id.to_string() });
        }
        Ok(())
    }

    pub fn add_station(&mut self, station: Station) -> Result<PointId, NetworkError> {
        self.ensure_unique_point(&station.id)?;
        let id = station.id.clone();
        self.stations.push(station);
        Ok(id)
    }

    pub fn add_waypoint(&mut self, waypoint: Waypoint) -> Result<PointId, NetworkError> {
        self.ensure_unique_point(&waypoint.id)?;
        let id = waypoint.id.clone();
        self.waypoints.push(waypoint);
        Ok(id)
    }

    /// Adds a track whose endpoints must already exist.
    pub fn add_track(&mut self, track: Track) -> Result<TrackId, NetworkError> {
        for end in [&track.from, &track.to] {
            if !self.contains_point(end) {
                return Err(NetworkError::PointNotFound { id: end.to_string() });
            }
        }
        if self.track(&track.id).is_some() {
            return Err(NetworkError::DuplicateId {
                id: track.id.to_string(),
            });
        }
        let id = track.id.clone();
        self.tracks.push(track);
        Ok(id)
    }

    /// Removes a station and every track touching it.
    pub fn remove_station(&mut self, id: &str) -> Result<Station, NetworkError> {
        let index = self
            .stations
            .iter()
            .position(|s| s.id.as_str() == id)
            .ok_or_else(|| NetworkError::StationNotFound { id: id.to_string() })?;
        self.remove_tracks_touching(id);
        Ok(self.stations.remove(index))
    }

    /// Removes a waypoint and every track touching it.
    pub fn remove_waypoint(&mut self, id: &str) -> Result<Waypoint, NetworkError> {
        let index = self
            .waypoints
            .iter()
            .position(|w| w.id.as_str() == id)
            .ok_or_else(|| NetworkError::PointNotFound { id: id.to_string() })?;
        self.remove_tracks_touching(id);
        Ok(self.waypoints.remove(index))
    }

    pub fn remove_track(&mut self, id: &str) -> Result<Track, NetworkError> {
        let index = self
            .tracks
            .iter()
            .position(|t| t.id.as_str() == id)
            .ok_or_else(|| NetworkError::TrackNotFound { id: id.to_string() })?;
        Ok(self.tracks.remove(index))
    }

    /// Drops every track with an endpoint in `points`; returns how many.
    pub(crate) fn remove_tracks_touching_any(&mut self, points: &HashSet<&str>) -> usize {
        let before = self.tracks.len();
        self.tracks.retain(|t| {
            !points.contains(t.from.as_str()) && !points.contains(t.to.as_str())
        });
        before - self.tracks.len()
    }

    fn remove_tracks_touching(&mut self, id: &str) {
        let removed = self.remove_tracks_touching_any(&HashSet::from([id]));
        if removed > 0 {
            tracing::debug!("Removed {} track(s) incident to {}", removed, id);
        }
    }

    pub fn connected_tracks<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Track> + 'a {
        self.tracks.iter().filter(move |t| t.touches(id))
    }

    pub fn is_point_connected(&self, id: &str) -> bool {
        self.tracks.iter().any(|t| t.touches(id))
    }

    /// Points with no incident track, in point order.
    pub fn orphaned_points(&self) -> Vec<PointId> {
        let connected: HashSet<&str> = self
            .tracks
            .iter()
            .flat_map(|t| [t.from.as_str(), t.to.as_str()])
            .collect();
        self.point_ids()
            .filter(|id| !connected.contains(id.as_str()))
            .cloned()
            .collect()
    }

    /// Whether a track lets you travel directly from `a` to `b`.
    pub fn are_points_connected(&self, a: &str, b: &str) -> bool {
        self.tracks.iter().any(|t| {
            (t.from.as_str() == a && t.to.as_str() == b)
                || (t.bidirectional && t.from.as_str() == b && t.to.as_str() == a)
        })
    }

    /// First track joining `a` and `b` in either direction.
    pub fn track_between(&self, a: &str, b: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| {
            (t.from.as_str() == a && t.to.as_str() == b)
                || (t.from.as_str() == b && t.to.as_str() == a)
        })
    }

    /// Distinct non-empty group names, sorted.
    pub fn group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .stations
            .iter()
            .filter_map(|s| s.group.as_deref())
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn stations_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Station> + 'a {
        self.stations.iter().filter(move |s| s.in_group(group))
    }
}
