//! JSON export and console output for a finished schedule.

use crate::crew::{Crew, CrewId};
use crate::error::ExportError;
use crate::flight::{Flight, FlightId};
use crate::roster::Roster;
use crate::validation::ValidationError;
use colored::Colorize;
use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrewSummary {
    pub flights: Vec<FlightId>,
    pub total_hours: f64,
}

/// Exported roster, keyed by crew id in roster order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RosterSummary(pub IndexMap<CrewId, CrewSummary>);

impl RosterSummary {
    pub fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

impl From<&Roster> for RosterSummary {
    fn from(roster: &Roster) -> Self {
        RosterSummary(
            roster
                .iter()
                .map(|(crew_id, flights)| {
                    (
                        crew_id.clone(),
                        CrewSummary {
                            flights: flights.iter().map(|f| f.id().clone()).collect(),
                            total_hours: total_hours(flights),
                        },
                    )
                })
                .collect(),
        )
    }
}

/// Block hours flown, rounded to two decimals.
pub fn total_hours(flights: &[Flight]) -> f64 {
    let minutes: i64 = flights.iter().map(Flight::duration_minutes).sum();
    (minutes as f64 / 60.0 * 100.0).round() / 100.0
}

#[derive(Tabled)]
struct UnassignedRow {
    #[tabled(rename = "Flight")]
    id: FlightId,
    #[tabled(rename = "Route")]
    route: String,
    #[tabled(rename = "Departure (UTC)")]
    departure: String,
}

#[derive(Tabled)]
struct CrewRow {
    #[tabled(rename = "Crew")]
    id: CrewId,
    #[tabled(rename = "Base")]
    home_base: String,
    #[tabled(rename = "Flights")]
    flights: usize,
    #[tabled(rename = "Hours")]
    hours: String,
}

fn render<T: Tabled>(rows: &[T]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}

pub fn print_validation(errors: &[ValidationError]) {
    if errors.is_empty() {
        println!("{}", "Roster is valid".green());
        return;
    }
    println!("{}", "Validation errors found:".red().bold());
    for e in errors {
        println!("- {}: {}", e.crew_id.to_string().yellow(), e.message);
    }
}

pub fn print_unassigned(unassigned: &[Flight]) {
    if unassigned.is_empty() {
        return;
    }
    let rows = unassigned
        .iter()
        .map(|f| UnassignedRow {
            id: f.id().clone(),
            route: format!("{}->{}", f.origin(), f.destination()),
            departure: f.departure().to_rfc3339(),
        })
        .collect::<Vec<_>>();
    println!("\n{}", "Unassigned flights:".yellow().bold());
    println!("{}", render(&rows));
}

pub fn print_crew_summary(roster: &Roster, crews: &[Crew]) {
    let rows = roster
        .iter()
        .map(|(crew_id, flights)| CrewRow {
            id: crew_id.clone(),
            home_base: crews
                .iter()
                .find(|c| c.id() == crew_id)
                .map(|c| c.home_base().to_string())
                .unwrap_or_else(|| "?".to_string()),
            flights: flights.len(),
            hours: format!("{:.2}", total_hours(flights)),
        })
        .collect::<Vec<_>>();
    if rows.is_empty() {
        println!("No crews on roster.");
        return;
    }
    println!("\n{}", render(&rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::tests::utils::{flight, id};

    #[test]
    fn test_total_hours_rounding() {
        let flights = [
            flight("FL1", "JFK", "BOS", "2024-02-01T08:00:00Z", "2024-02-01T09:15:00Z", 187),
            flight("FL2", "BOS", "JFK", "2024-02-01T10:15:00Z", "2024-02-01T11:35:00Z", 187),
        ];
        // 155 minutes
        assert_eq!(2.58, total_hours(&flights));
        assert_eq!(0.0, total_hours(&[]));
    }

    #[test]
    fn test_summary_json() {
        let mut roster = Roster::new();
        roster.seed(&id("C001"));
        roster.seed(&id("C002"));
        roster.assign(&id("C001"), flight("FL2", "BOS", "JFK", "2024-02-01T11:00:00Z", "2024-02-01T12:30:00Z", 187));
        roster.assign(&id("C001"), flight("FL1", "JFK", "BOS", "2024-02-01T08:00:00Z", "2024-02-01T09:00:00Z", 187));

        let json = serde_json::to_value(RosterSummary::from(&roster)).unwrap();
        assert_eq!(
            serde_json::json!({
                "C001": { "flights": ["FL1", "FL2"], "total_hours": 2.5 },
                "C002": { "flights": [], "total_hours": 0.0 },
            }),
            json
        );
    }

    #[test]
    fn test_summary_keeps_roster_order() {
        let mut roster = Roster::new();
        roster.seed(&id("Z9"));
        roster.seed(&id("A1"));

        let summary = RosterSummary::from(&roster);
        let keys: Vec<&str> = summary.0.keys().map(|k| &**k).collect();
        assert_eq!(vec!["Z9", "A1"], keys);
    }
}
