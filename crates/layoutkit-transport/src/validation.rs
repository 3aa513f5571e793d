//! Structural checks over a whole network
//!
//! Networks loaded from a document bypass the edit operations, so they can
//! carry dangling track references. [`validate_network`] reports those along
//! with softer layout problems.

use crate::model::{StationType, TransportNetwork};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    OrphanedPoint,
    InvalidReference,
    MissingHomeStation,
    DisconnectedSubgraph,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkValidationIssue {
    pub severity: Severity,
    pub kind: IssueKind,
    pub message: String,
    /// Offending point or track, when there is a single one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
}

impl NetworkValidationIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for NetworkValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Runs every check and returns the issues in check order.
pub fn validate_network(network: &TransportNetwork) -> Vec<NetworkValidationIssue> {
    let mut issues = Vec::new();
    check_orphans(network, &mut issues);
    check_references(network, &mut issues);
    check_home_station(network, &mut issues);
    check_reachability(network, &mut issues);
    issues
}

fn check_orphans(network: &TransportNetwork, issues: &mut Vec<NetworkValidationIssue>) {
    for id in network.orphaned_points() {
        let name = network.point_name(&id).unwrap_or(id.as_str());
        issues.push(NetworkValidationIssue {
            severity: Severity::Warning,
            kind: IssueKind::OrphanedPoint,
            message: format!("'{name}' is not connected to any track segment"),
            element_id: Some(id.to_string()),
        });
    }
}

fn check_references(network: &TransportNetwork, issues: &mut Vec<NetworkValidationIssue>) {
    for track in network.tracks() {
        for (end, label) in [(&track.from, "start"), (&track.to, "end")] {
            if !network.contains_point(end) {
                issues.push(NetworkValidationIssue {
                    severity: Severity::Error,
                    kind: IssueKind::InvalidReference,
                    message: format!("Segment references unknown {label} point: {end}"),
                    element_id: Some(track.id.to_string()),
                });
            }
        }
    }
}

fn check_home_station(network: &TransportNetwork, issues: &mut Vec<NetworkValidationIssue>) {
    let has_home = network
        .stations()
        .iter()
        .any(|s| s.station_type == StationType::Home);
    if !has_home {
        issues.push(NetworkValidationIssue {
            severity: Severity::Warning,
            kind: IssueKind::MissingHomeStation,
            message: "Network has no Home station defined".to_string(),
            element_id: None,
        });
    }
}

/// Breadth-first walk from the first point along permitted directions.
/// Only points with at least one track count as unreachable; orphans are
/// already reported on their own.
fn check_reachability(network: &TransportNetwork, issues: &mut Vec<NetworkValidationIssue>) {
    let points: Vec<&str> = network.point_ids().map(|id| id.as_str()).collect();
    let Some(&first) = points.first() else {
        return;
    };
    if points.len() < 2 || network.tracks().is_empty() {
        return;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue = VecDeque::from([first]);
    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        for track in network.connected_tracks(current) {
            let Some(next) = track.other_end(current) else {
                continue;
            };
            let forward = track.from.as_str() == current;
            if !visited.contains(next.as_str()) && (track.bidirectional || forward) {
                queue.push_back(next.as_str());
            }
        }
    }

    let unreachable = points
        .iter()
        .filter(|id| !visited.contains(*id) && network.is_point_connected(id))
        .count();
    if unreachable > 0 {
        issues.push(NetworkValidationIssue {
            severity: Severity::Warning,
            kind: IssueKind::DisconnectedSubgraph,
            message: format!("{unreachable} point(s) are not reachable from the main network"),
            element_id: None,
        });
    }
}
