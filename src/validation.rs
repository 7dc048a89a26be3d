//! Post-hoc roster audit.
//!
//! Re-derives every rule from scratch over the finished chains instead of
//! replaying [`crate::rules::can_assign_next`], and reports every violation it
//! finds rather than stopping at the first.

use crate::airport::AirportId;
use crate::crew::{Crew, CrewId};
use crate::flight::{Flight, FlightId};
use crate::roster::Roster;
use crate::rules::{dynamic_rest_minutes, rest_minutes};
use std::collections::HashMap;
use std::fmt;

pub const UNKNOWN_CREW: &str = "Unknown crew_id in roster";

/// A rule broken somewhere in a crew's chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    StartOutsideHomeBase {
        origin: AirportId,
        home_base: AirportId,
    },
    Range {
        flight: FlightId,
        distance: u64,
        max: u64,
    },
    Chain {
        prev: FlightId,
        destination: AirportId,
        next: FlightId,
        origin: AirportId,
    },
    Rest {
        prev: FlightId,
        next: FlightId,
        actual: i64,
        required: i64,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::StartOutsideHomeBase { origin, home_base } => write!(
                f,
                "Start rule violated: first flight origin {} != home_base {}",
                origin, home_base
            ),
            Violation::Range { flight, distance, max } => write!(
                f,
                "Range rule violated: {} distance {} > max {}",
                flight, distance, max
            ),
            Violation::Chain { prev, destination, next, origin } => write!(
                f,
                "Chain rule violated: {} destination {} != {} origin {}",
                prev, destination, next, origin
            ),
            Violation::Rest { prev, next, actual, required } => write!(
                f,
                "Rest rule violated: rest between {}->{} is {} min, needs {} min",
                prev, next, actual, required
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub crew_id: CrewId,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.crew_id, self.message)
    }
}

/// Checks one crew's chain, which must already be sorted by departure.
pub fn validate_chain(crew: &Crew, flights: &[Flight]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let Some(first) = flights.first() else {
        return violations;
    };

    if first.origin() != crew.home_base() {
        violations.push(Violation::StartOutsideHomeBase {
            origin: first.origin().clone(),
            home_base: crew.home_base().clone(),
        });
    }

    for (i, flight) in flights.iter().enumerate() {
        if flight.distance_miles() > crew.max_range_miles() {
            violations.push(Violation::Range {
                flight: flight.id().clone(),
                distance: flight.distance_miles(),
                max: crew.max_range_miles(),
            });
        }

        if i == 0 {
            continue;
        }
        let prev = &flights[i - 1];

        if prev.destination() != flight.origin() {
            violations.push(Violation::Chain {
                prev: prev.id().clone(),
                destination: prev.destination().clone(),
                next: flight.id().clone(),
                origin: flight.origin().clone(),
            });
        }

        let required = dynamic_rest_minutes(prev);
        let actual = rest_minutes(prev, flight);
        if actual < required {
            violations.push(Violation::Rest {
                prev: prev.id().clone(),
                next: flight.id().clone(),
                actual,
                required,
            });
        }
    }

    violations
}

/// Audits every chain in `roster`. An empty result means the roster is legal.
pub fn validate_roster(roster: &Roster, crews: &HashMap<CrewId, &Crew>) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (crew_id, flights) in roster.iter() {
        let Some(crew) = crews.get(crew_id) else {
            errors.push(ValidationError {
                crew_id: crew_id.clone(),
                message: UNKNOWN_CREW.to_string(),
            });
            continue;
        };

        let mut chain = flights.to_vec();
        chain.sort_by_key(|f| f.departure());
        errors.extend(
            validate_chain(crew, &chain)
                .into_iter()
                .map(|violation| ValidationError {
                    crew_id: crew_id.clone(),
                    message: violation.to_string(),
                }),
        );
    }

    errors
}
