pub mod assembler;
pub mod demo;
pub mod error;
pub mod export;
pub mod index;
pub mod models;
pub mod params;
pub mod records;
pub mod session;

pub use assembler::{AssemblyOutcome, MissionAssembler};
pub use demo::{add_demo_stay, square_demo_mission};
pub use error::{MissionError, ParseError, RecordKind, SessionError};
pub use export::MissionExport;
pub use index::PhotoIndex;
pub use models::{
    LocationCoordinate2D, PhotoRecord, PoleRecord, Waypoint, WaypointAction, WaypointActionType,
    WaypointMission, WaypointMissionFinishedAction, WaypointMissionFlightPathMode,
    WaypointMissionGotoFirstWaypointMode, WaypointMissionHeadingMode, WaypointTurnMode,
};
pub use params::{MissionParameters, PlannerConfig, WaypointProfile};
pub use records::{parse_photos, parse_poles, ParseOptions, RecordSet};
pub use session::{
    GenerationOutcome, GenerationReport, InspectionSession, LoadReport, SessionSummary,
};
