use crate::airport::AirportId;
use crate::error::RecordError;
use serde::Deserialize;
use std::sync::Arc;

pub type CrewId = Arc<str>;

/// A schedulable crew. Like [`crate::flight::Flight`], validated once on
/// construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crew {
    id: CrewId,
    home_base: AirportId,
    max_range_miles: u64,
}

impl Crew {
    pub fn new(id: &str, home_base: &str, max_range_miles: i64) -> Result<Crew, RecordError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(RecordError::EmptyCrewId);
        }
        let id: CrewId = Arc::from(id);
        let home_base = home_base.trim();
        if home_base.is_empty() {
            return Err(RecordError::EmptyHomeBase(id));
        }
        let max_range_miles = u64::try_from(max_range_miles)
            .ok()
            .filter(|r| *r > 0)
            .ok_or_else(|| RecordError::NonPositiveRange(id.clone()))?;

        Ok(Crew {
            id,
            home_base: Arc::from(home_base),
            max_range_miles,
        })
    }

    pub fn id(&self) -> &CrewId {
        &self.id
    }

    pub fn home_base(&self) -> &AirportId {
        &self.home_base
    }

    pub fn max_range_miles(&self) -> u64 {
        self.max_range_miles
    }
}

#[derive(Debug, Deserialize)]
pub struct CrewRecord {
    pub crew_id: String,
    pub home_base: String,
    pub max_range_miles: i64,
}

impl TryFrom<CrewRecord> for Crew {
    type Error = RecordError;

    fn try_from(record: CrewRecord) -> Result<Self, Self::Error> {
        Crew::new(&record.crew_id, &record.home_base, record.max_range_miles)
    }
}
