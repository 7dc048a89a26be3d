use crate::crew::CrewId;
use crate::flight::FlightId;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A single flight or crew record breaks one of its invariants.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("flight_id must not be empty")]
    EmptyFlightId,
    #[error("{0}: origin/destination must not be empty")]
    EmptyAirport(FlightId),
    #[error("{0}: arrival must be after departure")]
    ArrivalNotAfterDeparture(FlightId),
    #[error("{0}: distance_miles must be a positive integer")]
    NonPositiveDistance(FlightId),
    #[error("crew_id must not be empty")]
    EmptyCrewId,
    #[error("{0}: home_base must not be empty")]
    EmptyHomeBase(CrewId),
    #[error("{0}: max_range_miles must be a positive integer")]
    NonPositiveRange(CrewId),
    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Loading aborted; nothing from the file is used.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{}, row {row}: {source}", .path.display())]
    Record {
        path: PathBuf,
        row: usize,
        #[source]
        source: RecordError,
    },
    #[error("{}, row {row}: duplicate id {id}", .path.display())]
    DuplicateId { path: PathBuf, row: usize, id: String },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write roster: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize roster: {0}")]
    Json(#[from] serde_json::Error),
}
