//! Structural edits on a transport network
//!
//! Each edit resolves every id it needs before touching the network, so a
//! failed edit leaves the network exactly as it was.

use crate::model::{PointId, Station, Track, TrackId, TransportNetwork, Waypoint};
use crate::routing::find_nearest_point;
use layoutkit_core::{NetworkError, Point};
use layoutkit_settings::NetworkSettings;
use std::collections::HashSet;
use tracing::{debug, info};
use uuid::Uuid;

/// The spur created by [`TransportPathService::add_blind_path`].
#[derive(Debug, Clone, PartialEq)]
pub struct BlindPath {
    pub waypoint: PointId,
    pub track: TrackId,
}

/// Edits a borrowed network: loops, spurs, nearest-point links and track
/// splits.
pub struct TransportPathService<'a> {
    network: &'a mut TransportNetwork,
    settings: NetworkSettings,
}

impl<'a> TransportPathService<'a> {
    pub fn new(network: &'a mut TransportNetwork, settings: NetworkSettings) -> Self {
        Self { network, settings }
    }

    pub fn with_defaults(network: &'a mut TransportNetwork) -> Self {
        Self::new(network, NetworkSettings::default())
    }

    pub fn network(&self) -> &TransportNetwork {
        &*self.network
    }

    pub fn settings(&self) -> &NetworkSettings {
        &self.settings
    }

    /// Links every station in `group` into one closed loop.
    ///
    /// A lone station gets two helper waypoints so the loop still has three
    /// legs. Larger groups are ordered by angle around their centroid, which
    /// can cross itself for concave or clustered layouts.
    pub fn create_loop_for_group(&mut self, group: &str) -> Result<Vec<TrackId>, NetworkError> {
        let stations: Vec<(PointId, String, Point)> = self
            .network
            .stations_in_group(group)
            .map(|s| (s.id.clone(), s.name.clone(), s.position))
            .collect();

        let tracks = match stations.as_slice() {
            [] => Vec::new(),
            [(id, name, center)] => self.single_station_loop(id, name, *center)?,
            _ => self.multi_station_loop(stations)?,
        };
        debug!("Loop for group '{}' created with {} track(s)", group, tracks.len());
        Ok(tracks)
    }

    fn single_station_loop(
        &mut self,
        station: &PointId,
        name: &str,
        center: Point,
    ) -> Result<Vec<TrackId>, NetworkError> {
        let dx = self.settings.loop_offset_x;
        let dy = self.settings.loop_offset_y;
        let wp1 = self.network.add_waypoint(Waypoint::new(
            format!("{name}_WP1"),
            center.translated(dx, -dy),
        ))?;
        let wp2 = self.network.add_waypoint(Waypoint::new(
            format!("{name}_WP2"),
            center.translated(dx, dy),
        ))?;

        Ok(vec![
            self.connect(station, &wp1)?,
            self.connect(&wp1, &wp2)?,
            self.connect(&wp2, station)?,
        ])
    }

    fn multi_station_loop(
        &mut self,
        mut stations: Vec<(PointId, String, Point)>,
    ) -> Result<Vec<TrackId>, NetworkError> {
        if stations.len() > 2 {
            if let Some(centroid) = Point::average(stations.iter().map(|(_, _, p)| p)) {
                stations.sort_by(|(_, _, a), (_, _, b)| {
                    let angle_a = (a.y - centroid.y).atan2(a.x - centroid.x);
                    let angle_b = (b.y - centroid.y).atan2(b.x - centroid.x);
                    angle_a.total_cmp(&angle_b)
                });
            }
        }

        let n = stations.len();
        let mut tracks = Vec::with_capacity(n);
        for i in 0..n {
            let from = &stations[i].0;
            let to = &stations[(i + 1) % n].0;
            tracks.push(self.connect(from, to)?);
        }
        Ok(tracks)
    }

    /// Tears down every track touching the group's stations and builds the
    /// loop again.
    pub fn recreate_loop(&mut self, group: &str) -> Result<Vec<TrackId>, NetworkError> {
        let members: Vec<PointId> = self
            .network
            .stations_in_group(group)
            .map(|s| s.id.clone())
            .collect();
        let ids: HashSet<&str> = members.iter().map(PointId::as_str).collect();
        let removed = self.network.remove_tracks_touching_any(&ids);
        let tracks = self.create_loop_for_group(group)?;
        info!(
            "Rebuilt loop for group '{}': removed {} track(s), added {}",
            group,
            removed,
            tracks.len()
        );
        Ok(tracks)
    }

    /// Adds a dead-end waypoint offset from `from` and links it back.
    pub fn add_blind_path(
        &mut self,
        from: &str,
        offset_x: f64,
        offset_y: f64,
    ) -> Result<BlindPath, NetworkError> {
        let (position, name) = self.point_info(from)?;
        let from = PointId::from(from);
        let waypoint = self.network.add_waypoint(Waypoint::new(
            format!("{name}_Spur"),
            position.translated(offset_x, offset_y),
        ))?;
        let track = self.connect(&from, &waypoint)?;
        debug!("Added spur {} from {}", waypoint, from);
        Ok(BlindPath { waypoint, track })
    }

    /// [`add_blind_path`](Self::add_blind_path) with the configured offsets.
    pub fn add_default_blind_path(&mut self, from: &str) -> Result<BlindPath, NetworkError> {
        let (dx, dy) = (self.settings.spur_offset_x, self.settings.spur_offset_y);
        self.add_blind_path(from, dx, dy)
    }

    /// Links a station to the closest other station or waypoint.
    pub fn connect_to_nearest(&mut self, station_id: &str) -> Result<TrackId, NetworkError> {
        let station: &Station = self
            .network
            .station(station_id)
            .ok_or_else(|| NetworkError::StationNotFound {
                id: station_id.to_string(),
            })?;
        let from = station.id.clone();
        let center = station.position;

        let nearest = find_nearest_point(&*self.network, center.x, center.y, Some(station_id))
            .ok_or_else(|| NetworkError::NoCandidates {
                id: station_id.to_string(),
            })?;
        let track = self.connect(&from, &nearest.id)?;
        debug!("Connected {} to nearest point {}", from, nearest.id);
        Ok(track)
    }

    /// Splits a track at its midpoint; the two halves replace it.
    pub fn insert_waypoint(&mut self, track_id: &str) -> Result<PointId, NetworkError> {
        let track = self
            .network
            .track(track_id)
            .ok_or_else(|| NetworkError::TrackNotFound {
                id: track_id.to_string(),
            })?;
        let (from, to) = (track.from.clone(), track.to.clone());
        let (start, _) = self.point_info(&from)?;
        let (end, _) = self.point_info(&to)?;

        let suffix: String = Uuid::new_v4().simple().to_string().chars().take(4).collect();
        let waypoint = self
            .network
            .add_waypoint(Waypoint::new(format!("WP_{suffix}"), start.midpoint(&end)))?;
        self.network.remove_track(track_id)?;
        self.connect(&from, &waypoint)?;
        self.connect(&waypoint, &to)?;
        debug!("Split track {} at new waypoint {}", track_id, waypoint);
        Ok(waypoint)
    }

    fn point_info(&self, id: &str) -> Result<(Point, String), NetworkError> {
        let position = self
            .network
            .point_position(id)
            .ok_or_else(|| NetworkError::PointNotFound { id: id.to_string() })?;
        let name = self.network.point_name(id).unwrap_or_default().to_string();
        Ok((position, name))
    }

    /// New bidirectional track carrying its straight-line length.
    fn connect(&mut self, from: &PointId, to: &PointId) -> Result<TrackId, NetworkError> {
        let (a, _) = self.point_info(from)?;
        let (b, _) = self.point_info(to)?;
        let mut track = Track::new(from.clone(), to.clone()).with_distance(a.distance_to(&b));
        track.speed_limit = self.settings.default_speed_limit;
        self.network.add_track(track)
    }
}
