use crate::crew::CrewId;
use crate::flight::Flight;
use indexmap::IndexMap;

/// Per-crew flight chains, each kept in departure order.
///
/// Crews are iterated in the order they were first seeded or assigned, which
/// is crew input order when the roster comes out of the scheduler.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    schedule: IndexMap<CrewId, Vec<Flight>>,
}

impl Roster {
    pub fn new() -> Roster {
        Roster::default()
    }

    /// Registers a crew with an empty chain. No-op if already present.
    pub fn seed(&mut self, crew_id: &CrewId) {
        self.schedule.entry(crew_id.clone()).or_default();
    }

    /// Appends `flight` to the crew's chain and restores departure order.
    ///
    /// The sort is stable so flights sharing a departure instant keep their
    /// assignment order.
    pub fn assign(&mut self, crew_id: &CrewId, flight: Flight) {
        let flights = self.schedule.entry(crew_id.clone()).or_default();
        flights.push(flight);
        flights.sort_by_key(|f| f.departure());
    }

    pub fn flights(&self, crew_id: &str) -> &[Flight] {
        self.schedule
            .get(crew_id)
            .map(|flights| flights.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CrewId, &[Flight])> {
        self.schedule
            .iter()
            .map(|(crew_id, flights)| (crew_id, flights.as_slice()))
    }

    pub fn crew_count(&self) -> usize {
        self.schedule.len()
    }

    pub fn assigned_count(&self) -> usize {
        self.schedule.values().map(Vec::len).sum()
    }
}
