//! Caller-owned inspection planning state.
//!
//! Holds the current pole and photo collections and the last generated
//! mission. Every load replaces its collection wholesale and every
//! generation replaces the mission. Not synchronised; a concurrent host
//! must serialise access.

use std::fmt;

use tracing::{debug, info, warn};

use crate::assembler::{AssemblyOutcome, MissionAssembler};
use crate::error::{ParseError, RecordKind, SessionError};
use crate::index::PhotoIndex;
use crate::models::{PhotoRecord, PoleRecord, WaypointMission};
use crate::params::PlannerConfig;
use crate::records::{self, ParseOptions, RecordSet};

/// Counts reported back after a successful file load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub kind: RecordKind,
    pub records: usize,
    pub skipped_lines: usize,
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file loaded: {} {}",
            self.kind,
            self.records,
            plural(self.records, "record", "records")
        )?;
        if self.skipped_lines > 0 {
            write!(
                f,
                " ({} short {} skipped)",
                self.skipped_lines,
                plural(self.skipped_lines, "line", "lines")
            )?;
        }
        Ok(())
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}

/// How a generation request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// A mission was built and stored.
    Assembled,
    /// No pole matched any photo record; no mission is stored.
    NoMatchingPhotos,
}

/// Result of a generation request, with the counts shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    pub outcome: GenerationOutcome,
    pub pole_count: usize,
    pub photo_count: usize,
    pub waypoint_count: usize,
    pub matched_poles: usize,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.outcome == GenerationOutcome::Assembled
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            write!(
                f,
                "mission generated: {} waypoints for {} of {} poles",
                self.waypoint_count, self.matched_poles, self.pole_count
            )
        } else {
            write!(
                f,
                "mission generation failed: none of the {} poles matched the {} photo records, check that pole ids agree between files",
                self.pole_count, self.photo_count
            )
        }
    }
}

/// Snapshot of the session counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub pole_count: usize,
    pub photo_count: usize,
    pub waypoint_count: usize,
    pub ready: bool,
}

#[derive(Debug, Clone, Default)]
pub struct InspectionSession {
    assembler: MissionAssembler,
    parse_options: ParseOptions,
    poles: Vec<PoleRecord>,
    photos: Vec<PhotoRecord>,
    mission: Option<WaypointMission>,
}

impl InspectionSession {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            assembler: MissionAssembler::new(config),
            ..Self::default()
        }
    }

    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Replace the pole collection with the records in `text`.
    ///
    /// On failure the collection is left empty.
    pub fn load_poles(&mut self, text: &str) -> Result<LoadReport, SessionError> {
        self.poles.clear();
        let result = records::parse_poles(text, self.parse_options);
        let (poles, report) = finish_load(RecordKind::Poles, result)?;
        self.poles = poles;
        Ok(report)
    }

    /// Replace the photo collection with the records in `text`.
    ///
    /// On failure the collection is left empty.
    pub fn load_photos(&mut self, text: &str) -> Result<LoadReport, SessionError> {
        self.photos.clear();
        let result = records::parse_photos(text, self.parse_options);
        let (photos, report) = finish_load(RecordKind::Photos, result)?;
        self.photos = photos;
        Ok(report)
    }

    /// Both files loaded with at least one record each.
    pub fn is_ready(&self) -> bool {
        !self.poles.is_empty() && !self.photos.is_empty()
    }

    /// Build a new mission from the current collections.
    ///
    /// A mission is stored only on success; a failed generation clears the
    /// previous one.
    pub fn generate(&mut self) -> Result<GenerationReport, SessionError> {
        if !self.is_ready() {
            return Err(SessionError::FilesNotLoaded {
                poles: self.poles.len(),
                photos: self.photos.len(),
            });
        }

        let index = PhotoIndex::build(&self.photos);
        for pole in self.poles.iter().filter(|p| !index.contains(&p.id)) {
            debug!(pole_id = %pole.id, "pole has no photo records, skipping");
        }

        let outcome = self.assembler.assemble(&self.poles, &index);
        let mut report = GenerationReport {
            outcome: GenerationOutcome::NoMatchingPhotos,
            pole_count: self.poles.len(),
            photo_count: self.photos.len(),
            waypoint_count: outcome.waypoint_count(),
            matched_poles: 0,
        };

        match outcome {
            AssemblyOutcome::Assembled {
                mission,
                matched_poles,
            } => {
                report.outcome = GenerationOutcome::Assembled;
                report.matched_poles = matched_poles;
                info!(
                    waypoints = report.waypoint_count,
                    matched_poles, "inspection mission generated"
                );
                self.mission = Some(mission);
            }
            AssemblyOutcome::NoMatchingPhotos => {
                warn!(
                    poles = report.pole_count,
                    photos = report.photo_count,
                    "no pole matched any photo record"
                );
                self.mission = None;
            }
        }

        Ok(report)
    }

    pub fn poles(&self) -> &[PoleRecord] {
        &self.poles
    }

    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    pub fn mission(&self) -> Option<&WaypointMission> {
        self.mission.as_ref()
    }

    pub fn mission_mut(&mut self) -> Option<&mut WaypointMission> {
        self.mission.as_mut()
    }

    pub fn config(&self) -> &PlannerConfig {
        self.assembler.config()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            pole_count: self.poles.len(),
            photo_count: self.photos.len(),
            waypoint_count: self.mission.as_ref().map_or(0, WaypointMission::waypoint_count),
            ready: self.is_ready(),
        }
    }
}

/// Log a parse result and turn it into records plus a report.
fn finish_load<T>(
    kind: RecordKind,
    result: Result<RecordSet<T>, ParseError>,
) -> Result<(Vec<T>, LoadReport), SessionError> {
    match result {
        Ok(set) => {
            if !set.short_lines.is_empty() {
                debug!(%kind, lines = ?set.short_lines, "skipped lines with too few fields");
            }
            let report = LoadReport {
                kind,
                records: set.records.len(),
                skipped_lines: set.short_lines.len(),
            };
            info!(%kind, records = report.records, "record file loaded");
            Ok((set.records, report))
        }
        Err(source) => {
            warn!(%kind, error = %source, "record file rejected");
            Err(SessionError::Load { kind, source })
        }
    }
}
