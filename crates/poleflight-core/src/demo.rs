//! Four-corner demo mission around a reference location.

use crate::error::MissionError;
use crate::models::{LocationCoordinate2D, WaypointMission, WaypointMissionFinishedAction};
use crate::params::{MissionParameters, WaypointProfile};

const LAT_OFFSET_DEG: f64 = 0.0001;
const LON_OFFSET_DEG: f64 = 0.00015;
const DEMO_ALTITUDE_M: f64 = 20.0;
const DEMO_GIMBAL_PITCH: f64 = -30.0;
const DEMO_STAY_MS: i32 = 2000;

/// Build a square of four waypoints around (`lat`, `lon`).
///
/// Corners are visited NE, NW, SW, SE. The mission ends with no action so
/// the aircraft hovers at the last corner.
pub fn square_demo_mission(lat: f64, lon: f64, params: MissionParameters) -> WaypointMission {
    let profile = WaypointProfile::default();
    let corners = [
        (lat + LAT_OFFSET_DEG, lon + LON_OFFSET_DEG),
        (lat + LAT_OFFSET_DEG, lon - LON_OFFSET_DEG),
        (lat - LAT_OFFSET_DEG, lon - LON_OFFSET_DEG),
        (lat - LAT_OFFSET_DEG, lon + LON_OFFSET_DEG),
    ];

    let waypoints = corners
        .iter()
        .map(|&(lat, lon)| {
            profile.waypoint(
                LocationCoordinate2D::new(lat, lon),
                DEMO_ALTITUDE_M,
                DEMO_GIMBAL_PITCH,
                0.0,
                Vec::new(),
            )
        })
        .collect();

    MissionParameters {
        finished_action: WaypointMissionFinishedAction::NoAction,
        ..params
    }
    .into_mission(waypoints)
}

/// Make the aircraft hover at the second waypoint for two seconds.
pub fn add_demo_stay(mission: &mut WaypointMission) -> Result<(), MissionError> {
    if mission.waypoints.len() < 2 {
        return Err(MissionError::TooFewWaypoints {
            required: 2,
            actual: mission.waypoints.len(),
        });
    }
    mission.add_stay_action(1, DEMO_STAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WaypointAction;

    #[test]
    fn test_square_corners_and_settings() {
        let mission = square_demo_mission(33.0, -117.0, MissionParameters::default());
        assert_eq!(mission.waypoints.len(), 4);
        assert_eq!(mission.finished_action, WaypointMissionFinishedAction::NoAction);
        assert_eq!(mission.max_flight_speed, 15.0);

        let expected = [
            (33.0 + 0.0001, -117.0 + 0.00015),
            (33.0 + 0.0001, -117.0 - 0.00015),
            (33.0 - 0.0001, -117.0 - 0.00015),
            (33.0 - 0.0001, -117.0 + 0.00015),
        ];
        for (wp, (lat, lon)) in mission.waypoints.iter().zip(expected) {
            assert_eq!(wp.location, LocationCoordinate2D::new(lat, lon));
            assert_eq!(wp.altitude, 20.0);
            assert_eq!(wp.gimbal_pitch, -30.0);
            assert_eq!(wp.speed, 0.0);
            assert!(wp.waypoint_actions.is_empty());
        }
    }

    #[test]
    fn test_demo_stay_on_second_waypoint() {
        let mut mission = square_demo_mission(0.0, 0.0, MissionParameters::default());
        add_demo_stay(&mut mission).unwrap();
        assert_eq!(mission.waypoints[1].waypoint_actions, vec![WaypointAction::stay(2000)]);
        assert!(mission.waypoints[0].waypoint_actions.is_empty());
    }

    #[test]
    fn test_demo_stay_needs_two_waypoints() {
        let mut mission = MissionParameters::default().into_mission(Vec::new());
        let err = add_demo_stay(&mut mission).unwrap_err();
        assert_eq!(err, MissionError::TooFewWaypoints { required: 2, actual: 0 });
    }
}
