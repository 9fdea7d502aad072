//! Core data models for pole inspection missions.

use serde::{Deserialize, Serialize};

use crate::error::MissionError;

/// A surveyed pole parsed from the pole location file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoleRecord {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

/// A photo capture position, relative to the pole it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    /// Id of the pole this photo is taken of
    pub pole_id: String,
    pub relative_latitude: f64,
    pub relative_longitude: f64,
    pub relative_altitude: f64,
    /// Gimbal tilt in degrees (negative = looking down)
    pub camera_tilt: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationCoordinate2D {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationCoordinate2D {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WaypointTurnMode {
    #[default]
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WaypointActionType {
    /// Hover in place; param is milliseconds
    Stay,
    /// Take a single photo
    StartTakePhoto,
    StartRecord,
    StopRecord,
    /// Rotate the aircraft; param is the target heading in degrees
    RotateAircraft,
    /// Rotate the gimbal; param is the target pitch in degrees
    RotateGimbalPitch,
}

/// Action executed when the aircraft arrives at a waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaypointAction {
    pub action_type: WaypointActionType,
    pub action_param: i32,
}

impl WaypointAction {
    pub fn take_photo() -> Self {
        Self {
            action_type: WaypointActionType::StartTakePhoto,
            action_param: 0,
        }
    }

    pub fn stay(millis: i32) -> Self {
        Self {
            action_type: WaypointActionType::Stay,
            action_param: millis,
        }
    }
}

/// A single navigation target. Without actions it is a pure navigation
/// point; with a `StartTakePhoto` action it is a capture point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub location: LocationCoordinate2D,
    pub altitude: f32,
    pub gimbal_pitch: f32,
    pub turn_mode: WaypointTurnMode,
    pub heading: i32,
    pub action_repeat_times: i32,
    pub action_timeout_in_seconds: i32,
    pub corner_radius_in_meters: f64,
    pub speed: f64,
    /// Negative disables interval shooting
    pub shoot_photo_time_interval: f64,
    pub shoot_photo_distance_interval: f64,
    #[serde(default)]
    pub waypoint_actions: Vec<WaypointAction>,
}

impl Waypoint {
    /// Check whether this waypoint triggers a photo capture.
    pub fn is_capture_point(&self) -> bool {
        self.waypoint_actions
            .iter()
            .any(|a| a.action_type == WaypointActionType::StartTakePhoto)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WaypointMissionFinishedAction {
    NoAction,
    #[default]
    GoHome,
    AutoLand,
    GoFirstWaypoint,
    ContinueUntilStop,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WaypointMissionHeadingMode {
    /// Aircraft nose follows the flight path
    #[default]
    Auto,
    UsingInitialDirection,
    ControlByRemoteController,
    UsingWaypointHeading,
    TowardPointOfInterest,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WaypointMissionFlightPathMode {
    #[default]
    Normal,
    Curved,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WaypointMissionGotoFirstWaypointMode {
    /// Climb to the first waypoint altitude before flying there
    #[default]
    Safely,
    PointToPoint,
}

/// An ordered waypoint sequence plus mission-level flight parameters.
/// This is the unit handed to the flight controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypointMission {
    pub mission_id: i32,
    pub max_flight_speed: f64,
    pub auto_flight_speed: f64,
    pub finished_action: WaypointMissionFinishedAction,
    pub heading_mode: WaypointMissionHeadingMode,
    pub flight_path_mode: WaypointMissionFlightPathMode,
    pub goto_first_waypoint_mode: WaypointMissionGotoFirstWaypointMode,
    pub exit_mission_on_rc_signal_lost_enabled: bool,
    pub point_of_interest: LocationCoordinate2D,
    pub gimbal_pitch_rotation_enabled: bool,
    pub repeat_times: i32,
    pub waypoints: Vec<Waypoint>,
}

impl WaypointMission {
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Number of waypoints that take a photo.
    pub fn photo_count(&self) -> usize {
        self.waypoints.iter().filter(|wp| wp.is_capture_point()).count()
    }

    /// Append a STAY action to the waypoint at `index`.
    ///
    /// The aircraft hovers at that waypoint for `millis` milliseconds.
    pub fn add_stay_action(&mut self, index: usize, millis: i32) -> Result<(), MissionError> {
        let len = self.waypoints.len();
        let waypoint = self
            .waypoints
            .get_mut(index)
            .ok_or(MissionError::WaypointOutOfRange { index, len })?;
        waypoint.waypoint_actions.push(WaypointAction::stay(millis));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MissionParameters;

    fn nav_point(lat: f64, lon: f64) -> Waypoint {
        Waypoint {
            location: LocationCoordinate2D::new(lat, lon),
            altitude: 20.0,
            gimbal_pitch: 0.0,
            turn_mode: WaypointTurnMode::Clockwise,
            heading: 0,
            action_repeat_times: 1,
            action_timeout_in_seconds: 60,
            corner_radius_in_meters: 0.2,
            speed: 5.0,
            shoot_photo_time_interval: -1.0,
            shoot_photo_distance_interval: -1.0,
            waypoint_actions: Vec::new(),
        }
    }

    #[test]
    fn test_photo_count_only_counts_capture_points() {
        let mut photo = nav_point(1.0, 1.0);
        photo.waypoint_actions.push(WaypointAction::take_photo());
        let mission = MissionParameters::default()
            .into_mission(vec![nav_point(0.0, 0.0), photo, nav_point(0.0, 0.0)]);

        assert_eq!(mission.waypoint_count(), 3);
        assert_eq!(mission.photo_count(), 1);
    }

    #[test]
    fn test_add_stay_action_out_of_range() {
        let mut mission = MissionParameters::default().into_mission(vec![nav_point(0.0, 0.0)]);

        let err = mission.add_stay_action(1, 2000).unwrap_err();
        assert_eq!(err, MissionError::WaypointOutOfRange { index: 1, len: 1 });

        mission.add_stay_action(0, 2000).unwrap();
        assert_eq!(mission.waypoints[0].waypoint_actions, vec![WaypointAction::stay(2000)]);
        assert!(!mission.waypoints[0].is_capture_point());
    }

    #[test]
    fn test_enums_serialize_screaming_snake_case() {
        let json = serde_json::to_value(WaypointAction::take_photo()).unwrap();
        assert_eq!(json["action_type"], "START_TAKE_PHOTO");

        let json = serde_json::to_value(WaypointMissionFinishedAction::GoHome).unwrap();
        assert_eq!(json, "GO_HOME");
    }
}
