use crate::airport::AirportId;
use crate::error::RecordError;
use crate::time::{minutes_between, parse_utc};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

pub type FlightId = Arc<str>;

/// A scheduled flight leg. Only constructible through [`Flight::new`], so every
/// instance has a non-empty id and airports, arrives after it departs and
/// covers a positive distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    id: FlightId,
    origin: AirportId,
    destination: AirportId,
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
    distance_miles: u64,
}

impl Flight {
    pub fn new(
        id: &str,
        origin: &str,
        destination: &str,
        departure: DateTime<Utc>,
        arrival: DateTime<Utc>,
        distance_miles: i64,
    ) -> Result<Flight, RecordError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(RecordError::EmptyFlightId);
        }
        let id: FlightId = Arc::from(id);
        let (origin, destination) = (origin.trim(), destination.trim());
        if origin.is_empty() || destination.is_empty() {
            return Err(RecordError::EmptyAirport(id));
        }
        if arrival <= departure {
            return Err(RecordError::ArrivalNotAfterDeparture(id));
        }
        let distance_miles = u64::try_from(distance_miles)
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(|| RecordError::NonPositiveDistance(id.clone()))?;

        Ok(Flight {
            id,
            origin: Arc::from(origin),
            destination: Arc::from(destination),
            departure,
            arrival,
            distance_miles,
        })
    }

    pub fn id(&self) -> &FlightId {
        &self.id
    }

    pub fn origin(&self) -> &AirportId {
        &self.origin
    }

    pub fn destination(&self) -> &AirportId {
        &self.destination
    }

    pub fn departure(&self) -> DateTime<Utc> {
        self.departure
    }

    pub fn arrival(&self) -> DateTime<Utc> {
        self.arrival
    }

    pub fn distance_miles(&self) -> u64 {
        self.distance_miles
    }

    /// Block time in whole minutes, floor-rounded.
    pub fn duration_minutes(&self) -> i64 {
        minutes_between(self.departure, self.arrival)
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}->{} at {})",
            self.id,
            self.origin,
            self.destination,
            self.departure.to_rfc3339()
        )
    }
}

/// One row of the flights table, before validation.
#[derive(Debug, Deserialize)]
pub struct FlightRecord {
    pub flight_id: String,
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub arrival: String,
    pub distance_miles: i64,
}

impl TryFrom<FlightRecord> for Flight {
    type Error = RecordError;

    fn try_from(record: FlightRecord) -> Result<Self, Self::Error> {
        let timestamp = |value: &str| {
            parse_utc(value).map_err(|source| RecordError::InvalidTimestamp {
                value: value.to_string(),
                source,
            })
        };
        Flight::new(
            &record.flight_id,
            &record.origin,
            &record.destination,
            timestamp(&record.departure)?,
            timestamp(&record.arrival)?,
            record.distance_miles,
        )
    }
}
