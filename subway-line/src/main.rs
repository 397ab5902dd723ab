use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use subway_line::auth::Principal;
use subway_line::config::AppConfig;
use subway_line::domain::StationId;
use subway_line::fare::{FareCalculator, Rider};
use subway_line::network::{JourneyFinder, Network};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "subway-line")]
#[command(about = "Find the shortest subway journey between two stations and quote its fare")]
#[command(long_about = None)]
struct Cli {
    /// Origin station id
    from: u64,

    /// Destination station id
    to: u64,

    /// Rider age; omit for an anonymous rider
    age: Option<String>,

    /// Network file (defaults to network.json)
    #[arg(long, env = "SUBWAY_NETWORK")]
    network: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // An age on the command line stands in for an authenticated member.
    let principal = cli
        .age
        .map(|age| Principal::new().with_attribute("age", age));
    let rider = Rider::from_principal(principal.as_ref())?;

    let mut config = AppConfig::from_env()?;
    if let Some(path) = cli.network {
        config.network_path = path;
    }

    info!(path = %config.network_path.display(), "loading network");
    let network = Network::from_file(&config.network_path, config.split_policy)?;

    let journey = JourneyFinder::new(&network).find(
        StationId::new(cli.from),
        StationId::new(cli.to),
        config.path_kind,
    )?;
    let calculator = FareCalculator::new(config.fare);
    let travel_time = journey.travel_time();

    println!("{}", network.station_names(journey.stations()).join(" -> "));
    println!("Distance: {}", journey.distance());
    println!(
        "Duration: {}h {:02}m",
        travel_time.num_hours(),
        travel_time.num_minutes() % 60
    );
    println!("Fare:     {}", journey.fare(&calculator, rider));

    Ok(())
}
