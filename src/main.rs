use crate::report::{print_crew_summary, print_unassigned, print_validation, RosterSummary};
use crate::schedule::Schedule;
use crate::validation::validate_roster;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod airport;
mod crew;
mod error;
mod flight;
mod loader;
mod report;
mod roster;
mod rules;
mod schedule;
mod time;
mod validation;

#[derive(Parser)]
#[command(about = "Greedy crew-to-flight roster builder")]
struct Args {
    /// Path to the flights CSV
    #[arg(short, long, value_name = "FILE", default_value = "data/flight.csv")]
    flights: PathBuf,

    /// Path to the crew CSV
    #[arg(short, long, value_name = "FILE", default_value = "data/crew.csv")]
    crew: PathBuf,

    /// Where to write the roster JSON
    #[arg(short, long, value_name = "FILE", default_value = "outputs/output_roster.json")]
    output: PathBuf,

    /// Skip the per-crew summary table
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let schedule = Schedule::load_from_files(&args.flights, &args.crew)?;
    let result = schedule.assign();

    let errors = validate_roster(&result.roster, &schedule.crew_index());
    if !errors.is_empty() {
        info!(errors = errors.len(), "roster failed validation");
    }
    print_validation(&errors);
    print_unassigned(&result.unassigned);
    if !args.quiet {
        print_crew_summary(&result.roster, &schedule.crews);
    }

    RosterSummary::from(&result.roster).write_to(&args.output)?;
    println!("\nWrote {}", args.output.display());
    Ok(())
}
