use crate::crew::{Crew, CrewId};
use crate::error::LoadError;
use crate::flight::Flight;
use crate::loader::{load_crew, load_flights};
use crate::roster::Roster;
use crate::rules::{can_assign_next, Rejection};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::{debug, info, warn};

#[cfg(test)]
pub(crate) mod tests;

/// Outcome of one assignment pass.
#[derive(Debug, Clone)]
pub struct ScheduleResult {
    pub roster: Roster,
    pub unassigned: Vec<Flight>,
}

impl ScheduleResult {
    pub fn assigned_count(&self) -> usize {
        self.roster.assigned_count()
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self, input_count: usize) {
        debug_assert_eq!(
            input_count,
            self.assigned_count() + self.unassigned.len(),
            "Assigned + unassigned <-> input flight count violated"
        );

        let mut seen = std::collections::HashSet::new();
        let all_ids = self
            .roster
            .iter()
            .flat_map(|(_, flights)| flights.iter())
            .chain(self.unassigned.iter())
            .map(|f| f.id().clone());
        for flight_id in all_ids {
            debug_assert!(seen.insert(flight_id), "Flight placed twice");
        }

        debug_assert!(
            self.roster.iter().all(|(_, flights)| {
                flights
                    .windows(2)
                    .all(|fs| fs[0].departure() <= fs[1].departure())
            }),
            "Crew chain departure order violated"
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_invariants(&self, _input_count: usize) {}
}

/// A fixed crew pool and flight batch awaiting assignment.
///
/// Flights are held in departure order; equal departures keep input order.
/// Crews keep input order, which is also their preference order.
pub struct Schedule {
    pub crews: Vec<Crew>,
    pub flights: Vec<Flight>,
}

impl Schedule {
    pub fn new(crews: Vec<Crew>, mut flights: Vec<Flight>) -> Schedule {
        flights.sort_by_key(|f| f.departure());
        Schedule { crews, flights }
    }

    pub fn load_from_files(flights_path: &Path, crew_path: &Path) -> Result<Self, LoadError> {
        let flights = load_flights(flights_path)?;
        let crews = load_crew(crew_path)?;
        info!(
            flights = flights.len(),
            crews = crews.len(),
            "loaded {} and {}",
            flights_path.display(),
            crew_path.display()
        );
        Ok(Schedule::new(crews, flights))
    }

    pub fn crew_index(&self) -> HashMap<CrewId, &Crew> {
        self.crews.iter().map(|c| (c.id().clone(), c)).collect()
    }

    /// Greedy single pass: every flight goes to the first crew, in input
    /// order, that can legally fly it next. Nothing is ever reassigned.
    pub fn assign(&self) -> ScheduleResult {
        let mut roster = Roster::new();
        self.crews.iter().for_each(|crew| roster.seed(crew.id()));
        let mut unassigned = Vec::new();

        for flight in &self.flights {
            let mut reasons = BTreeSet::<Rejection>::new();
            let chosen = self.crews.iter().find(|crew| {
                match can_assign_next(crew, roster.flights(crew.id()), flight) {
                    Ok(()) => true,
                    Err(reason) => {
                        reasons.insert(reason);
                        false
                    }
                }
            });

            match chosen {
                Some(crew) => {
                    debug!(flight = %flight.id(), crew = %crew.id(), "assigned");
                    roster.assign(crew.id(), flight.clone());
                }
                None => {
                    let reasons = reasons
                        .iter()
                        .map(Rejection::code)
                        .collect::<Vec<_>>()
                        .join(", ");
                    warn!(%flight, reasons = %reasons, "unassigned");
                    unassigned.push(flight.clone());
                }
            }
        }

        let result = ScheduleResult { roster, unassigned };
        info!(
            crews = result.roster.crew_count(),
            assigned = result.assigned_count(),
            unassigned = result.unassigned.len(),
            "assignment complete"
        );
        result.assert_invariants(self.flights.len());
        result
    }
}
