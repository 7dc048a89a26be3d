use crate::rules::dynamic_rest_minutes;
use crate::schedule::Schedule;
use crate::schedule::tests::utils::{arb_flights, arb_id, crew};
use crate::time::minutes_between;
use crate::validation::validate_roster;
use proptest::prelude::*;
use proptest::proptest;
use std::collections::HashSet;

fn arb_crews() -> impl Strategy<Value = Vec<(String, std::sync::Arc<str>, i64)>> {
    prop::collection::vec((arb_id("AP"), 500..4000i64), 1..5).prop_map(|crews| {
        crews
            .into_iter()
            .enumerate()
            .map(|(i, (base, range))| (format!("C_{}", i), base, range))
            .collect()
    })
}

proptest! {
    #[test]
    fn test_rest_and_location_invariants(
        crew_data in arb_crews(),
        flights in arb_flights(1..30)
    ) {
        let crews = crew_data
            .iter()
            .map(|(id, base, range)| crew(id, base, *range))
            .collect::<Vec<_>>();
        let schedule = Schedule::new(crews, flights);
        let result = schedule.assign();

        for c in &schedule.crews {
            let assigned = result.roster.flights(c.id());

            for pair in assigned.windows(2) {
                let first = &pair[0];
                let second = &pair[1];

                prop_assert!(
                    first.departure() <= second.departure(),
                    "\nOut of order on {}:\nFlight {} departs after Flight {}",
                    c.id(), first.id(), second.id()
                );

                let rest = minutes_between(first.arrival(), second.departure());
                prop_assert!(
                    rest >= dynamic_rest_minutes(first),
                    "\nShort rest on {}:\nFlight {} (lands {}) vs Flight {} (departs {}), {} min",
                    c.id(), first.id(), first.arrival(), second.id(), second.departure(), rest
                );

                prop_assert!(
                    first.destination() == second.origin(),
                    "\nWrong airport:\nFlight {} lands at {} vs Flight {} (takes off at {})",
                    first.id(), first.destination(), second.id(), second.origin()
                );
            }

            for f in assigned {
                prop_assert!(f.distance_miles() <= c.max_range_miles());
            }

            if let Some(first_flight) = assigned.first() {
                prop_assert!(
                    first_flight.origin() == c.home_base(),
                    "\nWrong airport:\nCrew {} is based at {} but Flight {} takes off at {}",
                    c.id(), c.home_base(), first_flight.id(), first_flight.origin()
                );
            }
        }

        prop_assert!(validate_roster(&result.roster, &schedule.crew_index()).is_empty());
    }

    #[test]
    fn test_conservation(
        crew_data in arb_crews(),
        flights in arb_flights(0..40)
    ) {
        let crews = crew_data
            .iter()
            .map(|(id, base, range)| crew(id, base, *range))
            .collect::<Vec<_>>();
        let input_count = flights.len();
        let result = Schedule::new(crews, flights).assign();

        prop_assert_eq!(input_count, result.assigned_count() + result.unassigned.len());

        let mut seen = HashSet::new();
        for (_, chain) in result.roster.iter() {
            for f in chain {
                prop_assert!(seen.insert(f.id().clone()), "{} assigned twice", f.id());
            }
        }
        for f in &result.unassigned {
            prop_assert!(seen.insert(f.id().clone()), "{} both assigned and unassigned", f.id());
        }
    }
}
