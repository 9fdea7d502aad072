//! Flight parameters for generated inspection missions.

use std::env;

use serde::{Deserialize, Serialize};

use crate::models::{
    LocationCoordinate2D, Waypoint, WaypointAction, WaypointMission,
    WaypointMissionFinishedAction, WaypointMissionFlightPathMode,
    WaypointMissionGotoFirstWaypointMode, WaypointMissionHeadingMode, WaypointTurnMode,
};

/// Mission-level settings applied to every generated mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionParameters {
    pub mission_id: i32,
    /// Maximum flight speed in m/s
    pub max_flight_speed: f64,
    /// Cruise speed in m/s used between waypoints without their own speed
    pub auto_flight_speed: f64,
    pub finished_action: WaypointMissionFinishedAction,
    pub heading_mode: WaypointMissionHeadingMode,
    pub flight_path_mode: WaypointMissionFlightPathMode,
    pub goto_first_waypoint_mode: WaypointMissionGotoFirstWaypointMode,
    pub exit_mission_on_rc_signal_lost_enabled: bool,
    pub point_of_interest: LocationCoordinate2D,
    pub gimbal_pitch_rotation_enabled: bool,
    pub repeat_times: i32,
}

impl Default for MissionParameters {
    fn default() -> Self {
        Self {
            mission_id: 0,
            max_flight_speed: 15.0,
            auto_flight_speed: 10.0,
            finished_action: WaypointMissionFinishedAction::GoHome,
            heading_mode: WaypointMissionHeadingMode::Auto,
            flight_path_mode: WaypointMissionFlightPathMode::Normal,
            goto_first_waypoint_mode: WaypointMissionGotoFirstWaypointMode::Safely,
            exit_mission_on_rc_signal_lost_enabled: false,
            point_of_interest: LocationCoordinate2D::default(),
            gimbal_pitch_rotation_enabled: true,
            repeat_times: 0,
        }
    }
}

impl MissionParameters {
    /// Wrap a waypoint sequence into a mission carrying these parameters.
    pub fn into_mission(self, waypoints: Vec<Waypoint>) -> WaypointMission {
        WaypointMission {
            mission_id: self.mission_id,
            max_flight_speed: self.max_flight_speed,
            auto_flight_speed: self.auto_flight_speed,
            finished_action: self.finished_action,
            heading_mode: self.heading_mode,
            flight_path_mode: self.flight_path_mode,
            goto_first_waypoint_mode: self.goto_first_waypoint_mode,
            exit_mission_on_rc_signal_lost_enabled: self.exit_mission_on_rc_signal_lost_enabled,
            point_of_interest: self.point_of_interest,
            gimbal_pitch_rotation_enabled: self.gimbal_pitch_rotation_enabled,
            repeat_times: self.repeat_times,
            waypoints,
        }
    }
}

/// Per-waypoint settings for approach, photo and departure points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaypointProfile {
    /// Height above the pole top for approach and departure points
    pub safety_margin_m: f64,
    pub transit_speed: f64,
    pub photo_speed: f64,
    pub corner_radius_in_meters: f64,
    pub turn_mode: WaypointTurnMode,
    pub heading: i32,
    pub action_repeat_times: i32,
    pub action_timeout_in_seconds: i32,
    pub shoot_photo_time_interval: f64,
    pub shoot_photo_distance_interval: f64,
}

impl Default for WaypointProfile {
    fn default() -> Self {
        Self {
            safety_margin_m: 10.0,
            transit_speed: 5.0,
            photo_speed: 3.0,
            corner_radius_in_meters: 0.2,
            turn_mode: WaypointTurnMode::Clockwise,
            heading: 0,
            action_repeat_times: 1,
            action_timeout_in_seconds: 60,
            shoot_photo_time_interval: -1.0,
            shoot_photo_distance_interval: -1.0,
        }
    }
}

impl WaypointProfile {
    /// Build a waypoint at the given position with this profile's settings.
    pub fn waypoint(
        &self,
        location: LocationCoordinate2D,
        altitude: f64,
        gimbal_pitch: f64,
        speed: f64,
        waypoint_actions: Vec<WaypointAction>,
    ) -> Waypoint {
        Waypoint {
            location,
            altitude: altitude as f32,
            gimbal_pitch: gimbal_pitch as f32,
            turn_mode: self.turn_mode,
            heading: self.heading,
            action_repeat_times: self.action_repeat_times,
            action_timeout_in_seconds: self.action_timeout_in_seconds,
            corner_radius_in_meters: self.corner_radius_in_meters,
            speed,
            shoot_photo_time_interval: self.shoot_photo_time_interval,
            shoot_photo_distance_interval: self.shoot_photo_distance_interval,
            waypoint_actions,
        }
    }
}

/// Full planner configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub mission: MissionParameters,
    pub waypoint: WaypointProfile,
}

impl PlannerConfig {
    /// Defaults overridden by environment variables.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `POLEFLIGHT_*` environment overrides. Unparseable values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(v) = env_f64("POLEFLIGHT_MAX_SPEED") {
            self.mission.max_flight_speed = v;
        }
        if let Some(v) = env_f64("POLEFLIGHT_AUTO_SPEED") {
            self.mission.auto_flight_speed = v;
        }
        if let Some(v) = env_f64("POLEFLIGHT_SAFETY_MARGIN_M") {
            self.waypoint.safety_margin_m = v;
        }
        self
    }
}

fn env_f64(key: &str) -> Option<f64> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
