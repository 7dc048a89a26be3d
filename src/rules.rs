//! Crew legality rules shared by the scheduler and the roster validator.
//!
//! The incremental check evaluates, in order:
//! 1. range: the leg must not exceed the crew's maximum range;
//! 2. home-base start: a crew's first leg departs from its home base;
//! 3. continuity: every later leg departs where the latest one landed;
//! 4. rest: enough turnaround after the latest leg (see [`dynamic_rest_minutes`]).

use crate::crew::Crew;
use crate::flight::Flight;
use crate::time::minutes_between;
use std::fmt;

/// Legs shorter than this earn the short rest period.
pub const LONG_FLIGHT_MINUTES: i64 = 180;
pub const SHORT_REST_MINUTES: i64 = 60;
pub const LONG_REST_MINUTES: i64 = 120;

/// Why a flight cannot be appended to a crew's chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rejection {
    Range,
    HomeBaseStart,
    Continuity,
    Rest,
}

impl Rejection {
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::Range => "range",
            Rejection::HomeBaseStart => "home_base_start",
            Rejection::Continuity => "continuity",
            Rejection::Rest => "rest",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Minimum rest owed after `flight`, in minutes.
pub fn dynamic_rest_minutes(flight: &Flight) -> i64 {
    if flight.duration_minutes() < LONG_FLIGHT_MINUTES {
        SHORT_REST_MINUTES
    } else {
        LONG_REST_MINUTES
    }
}

/// Actual rest between landing `prev` and departing `next`, floor-rounded.
pub fn rest_minutes(prev: &Flight, next: &Flight) -> i64 {
    minutes_between(prev.arrival(), next.departure())
}

pub fn within_range(crew: &Crew, flight: &Flight) -> bool {
    flight.distance_miles() <= crew.max_range_miles()
}

pub fn starts_at_home_base(crew: &Crew, flight: &Flight) -> bool {
    flight.origin() == crew.home_base()
}

pub fn continues_from(prev: &Flight, next: &Flight) -> bool {
    prev.destination() == next.origin()
}

pub fn rested_after(prev: &Flight, next: &Flight) -> bool {
    rest_minutes(prev, next) >= dynamic_rest_minutes(prev)
}

/// Chronologically latest flight of a chain. Ties on departure resolve to the
/// earliest entry, so the answer doesn't depend on how the chain was built.
pub fn latest_flight(flights: &[Flight]) -> Option<&Flight> {
    flights.iter().reduce(|latest, f| {
        if f.departure() > latest.departure() {
            f
        } else {
            latest
        }
    })
}

/// Decides whether `candidate` may be appended to a crew currently flying
/// `assigned`. Returns the first rule that fails.
pub fn can_assign_next(
    crew: &Crew,
    assigned: &[Flight],
    candidate: &Flight,
) -> Result<(), Rejection> {
    if !within_range(crew, candidate) {
        return Err(Rejection::Range);
    }

    match latest_flight(assigned) {
        None if !starts_at_home_base(crew, candidate) => Err(Rejection::HomeBaseStart),
        None => Ok(()),
        Some(last) if !continues_from(last, candidate) => Err(Rejection::Continuity),
        Some(last) if !rested_after(last, candidate) => Err(Rejection::Rest),
        Some(_) => Ok(()),
    }
}
