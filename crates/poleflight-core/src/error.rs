//! Error types for record loading and mission handling.

use std::fmt;

use thiserror::Error;

/// Errors raised while parsing a delimited record file.
///
/// Any of these aborts the whole file; short lines are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: field `{field}` is not a number: {value:?}")]
    MalformedNumericField {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: identifier field is empty")]
    EmptyIdentifier { line: usize },
    #[error("line {line}: failed to read record: {message}")]
    Read { line: usize, message: String },
}

/// Which of the two input files a load refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Poles,
    Photos,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Poles => f.write_str("pole"),
            RecordKind::Photos => f.write_str("photo"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("failed to load {kind} file: {source}")]
    Load {
        kind: RecordKind,
        #[source]
        source: ParseError,
    },
    #[error("load the pole and photo files first ({poles} poles, {photos} photos loaded)")]
    FilesNotLoaded { poles: usize, photos: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissionError {
    #[error("mission needs at least {required} waypoints, has {actual}")]
    TooFewWaypoints { required: usize, actual: usize },
    #[error("waypoint index {index} out of range (mission has {len})")]
    WaypointOutOfRange { index: usize, len: usize },
}
