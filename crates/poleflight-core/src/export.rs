//! JSON envelope handed to the flight-control side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::WaypointMission;
use crate::session::GenerationReport;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionExport {
    pub generated_at: DateTime<Utc>,
    pub pole_count: usize,
    pub photo_count: usize,
    pub waypoint_count: usize,
    pub mission: WaypointMission,
}

impl MissionExport {
    pub fn new(mission: WaypointMission, pole_count: usize, photo_count: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            pole_count,
            photo_count,
            waypoint_count: mission.waypoint_count(),
            mission,
        }
    }

    pub fn from_report(mission: WaypointMission, report: &GenerationReport) -> Self {
        Self::new(mission, report.pole_count, report.photo_count)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::square_demo_mission;
    use crate::params::MissionParameters;

    #[test]
    fn test_export_json_shape() {
        let mission = square_demo_mission(1.0, 2.0, MissionParameters::default());
        let export = MissionExport::new(mission, 0, 0);
        let json: serde_json::Value =
            serde_json::from_str(&export.to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["waypoint_count"], 4);
        assert_eq!(json["mission"]["finished_action"], "NO_ACTION");
        assert_eq!(json["mission"]["heading_mode"], "AUTO");
        assert_eq!(json["mission"]["waypoints"][0]["turn_mode"], "CLOCKWISE");
        assert!(json["generated_at"].is_string());
    }

    #[test]
    fn test_export_parses_back() {
        let mission = square_demo_mission(1.0, 2.0, MissionParameters::default());
        let export = MissionExport::new(mission.clone(), 3, 4);
        let parsed: MissionExport = serde_json::from_str(&export.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed.mission, mission);
        assert_eq!(parsed.pole_count, 3);
    }
}
