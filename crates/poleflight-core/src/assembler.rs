//! Inspection mission assembly.
//!
//! Each pole with photos becomes: approach point above the pole, one capture
//! point per photo, departure point above the pole. Poles without photos
//! are skipped.

use crate::index::PhotoIndex;
use crate::models::{
    LocationCoordinate2D, PhotoRecord, PoleRecord, Waypoint, WaypointAction, WaypointMission,
};
use crate::params::{PlannerConfig, WaypointProfile};

/// Result of assembling a mission.
#[derive(Debug, Clone, PartialEq)]
pub enum AssemblyOutcome {
    /// At least one pole matched its photos.
    Assembled {
        mission: WaypointMission,
        /// Poles that contributed waypoints
        matched_poles: usize,
    },
    /// No pole id in the pole list matched any photo record.
    NoMatchingPhotos,
}

impl AssemblyOutcome {
    pub fn mission(&self) -> Option<&WaypointMission> {
        match self {
            AssemblyOutcome::Assembled { mission, .. } => Some(mission),
            AssemblyOutcome::NoMatchingPhotos => None,
        }
    }

    pub fn waypoint_count(&self) -> usize {
        self.mission().map_or(0, WaypointMission::waypoint_count)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AssemblyOutcome::Assembled { .. })
    }
}

/// Builds inspection missions from poles and their photo offsets.
#[derive(Debug, Clone, Default)]
pub struct MissionAssembler {
    config: PlannerConfig,
}

impl MissionAssembler {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Walk `poles` in order and emit the waypoints for each one with photos.
    pub fn assemble(&self, poles: &[PoleRecord], index: &PhotoIndex<'_>) -> AssemblyOutcome {
        let profile = &self.config.waypoint;
        let mut waypoints = Vec::new();
        let mut matched_poles = 0;

        for pole in poles {
            let photos = index.photos_for(&pole.id);
            if photos.is_empty() {
                continue;
            }
            matched_poles += 1;

            waypoints.reserve(photos.len() + 2);
            waypoints.push(transit_waypoint(pole, profile));
            waypoints.extend(photos.iter().map(|photo| photo_waypoint(pole, photo, profile)));
            waypoints.push(transit_waypoint(pole, profile));
        }

        if waypoints.is_empty() {
            return AssemblyOutcome::NoMatchingPhotos;
        }

        AssemblyOutcome::Assembled {
            mission: self.config.mission.clone().into_mission(waypoints),
            matched_poles,
        }
    }
}

/// Approach / departure point directly above the pole.
fn transit_waypoint(pole: &PoleRecord, profile: &WaypointProfile) -> Waypoint {
    profile.waypoint(
        LocationCoordinate2D::new(pole.latitude, pole.longitude),
        pole.altitude + profile.safety_margin_m,
        0.0,
        profile.transit_speed,
        Vec::new(),
    )
}

/// Capture point at pole position + photo offset (plain addition, no projection).
fn photo_waypoint(pole: &PoleRecord, photo: &PhotoRecord, profile: &WaypointProfile) -> Waypoint {
    profile.waypoint(
        LocationCoordinate2D::new(
            pole.latitude + photo.relative_latitude,
            pole.longitude + photo.relative_longitude,
        ),
        pole.altitude + photo.relative_altitude,
        photo.camera_tilt,
        profile.photo_speed,
        vec![WaypointAction::take_photo()],
    )
}
