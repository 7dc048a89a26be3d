use crate::crew::Crew;
use crate::flight::Flight;
use crate::time::parse_utc;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn crew(crew_id: &str, home_base: &str, max_range_miles: i64) -> Crew {
    Crew::new(crew_id, home_base, max_range_miles).unwrap()
}

pub fn flight(
    flight_id: &str,
    origin: &str,
    destination: &str,
    departure: &str,
    arrival: &str,
    distance_miles: i64,
) -> Flight {
    Flight::new(
        flight_id,
        origin,
        destination,
        parse_utc(departure).unwrap(),
        parse_utc(arrival).unwrap(),
        distance_miles,
    )
    .unwrap()
}

pub fn add_crew(crews: &mut Vec<Crew>, crew_id: &str, home_base: &str, max_range_miles: i64) {
    crews.push(crew(crew_id, home_base, max_range_miles));
}

pub fn add_flight(
    flights: &mut Vec<Flight>,
    flight_id: &str,
    origin: &str,
    destination: &str,
    departure: &str,
    arrival: &str,
    distance_miles: i64,
) {
    flights.push(flight(
        flight_id,
        origin,
        destination,
        departure,
        arrival,
        distance_miles,
    ));
}

pub fn ids(flights: &[Flight]) -> Vec<&str> {
    flights.iter().map(|f| &**f.id()).collect()
}

pub fn arb_id(prefix: &'static str) -> impl Strategy<Value = Arc<str>> {
    prop_oneof![
        Just(Arc::from(format!("{}_1", prefix))),
        Just(Arc::from(format!("{}_2", prefix))),
        Just(Arc::from(format!("{}_3", prefix))),
    ]
}

/// Flights over a two-day window, lasting 10 minutes to about 6 hours.
pub fn arb_flight() -> impl Strategy<Value = Flight> {
    (
        arb_id("FL"),
        arb_id("AP"),
        arb_id("AP"),
        0..2880i64,
        10..360i64,
        100..4000i64,
    )
        .prop_map(|(fid, org, dst, dep, dur, distance)| {
            let start = parse_utc("2024-02-01T00:00:00Z").unwrap();
            let departure = start + chrono::Duration::minutes(dep);
            Flight::new(
                &fid,
                &org,
                &dst,
                departure,
                departure + chrono::Duration::minutes(dur),
                distance,
            )
            .unwrap()
        })
}

/// Like a vec of [`arb_flight`], with ids made unique by position.
pub fn arb_flights(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Flight>> {
    proptest::collection::vec(arb_flight(), len).prop_map(|flights| {
        flights
            .iter()
            .enumerate()
            .map(|(i, f)| {
                Flight::new(
                    &format!("FL_{}", i),
                    f.origin(),
                    f.destination(),
                    f.departure(),
                    f.arrival(),
                    f.distance_miles() as i64,
                )
                .unwrap()
            })
            .collect()
    })
}
