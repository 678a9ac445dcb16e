use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use fuel_calculator::calculate_legs;
use fuel_calculator::config::{
    LegInput, ServiceConfig, TripConfig, load_manifest, load_service_config, normalize_route,
};
use fuel_calculator::export::history::{ExportFormat, export};
use fuel_calculator::server::{self, CalculatorHandle, logging};
use tracing::warn;

#[derive(Parser)]
#[command(author, version, about = "Launch/land fuel calculator")]
struct Cli {
    /// Service configuration file (TOML or YAML); built-in defaults when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute fuel for a single route
    Compute {
        /// Starting mass of the vehicle
        #[arg(long, allow_hyphen_values = true)]
        mass: i64,

        /// Route leg as kind:body or kind:gravity (e.g. launch:earth, land:1.62), in flight order
        #[arg(long = "leg", required = true)]
        legs: Vec<LegInput>,

        /// Caller identity recorded in history
        #[arg(long, default_value = "cli")]
        caller: String,

        /// Print fuel contributed by each leg
        #[arg(long, default_value_t = false)]
        breakdown: bool,
    },
    /// Compute every trip in a manifest concurrently through one calculator
    Batch {
        /// Trip manifest (YAML or TOML)
        #[arg(long)]
        manifest: PathBuf,

        /// Write the recorded history here instead of stdout (`-` for stdout)
        #[arg(long)]
        history_out: Option<PathBuf>,

        /// History export format
        #[arg(long, value_enum, default_value_t = HistoryFormat::Csv)]
        format: HistoryFormat,
    },
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum HistoryFormat {
    Csv,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_service_config(path)?,
        None => ServiceConfig::default(),
    };
    logging::init_tracing(&config)?;

    match cli.command {
        Command::Compute {
            mass,
            legs,
            caller,
            breakdown,
        } => run_compute(&config, mass, &legs, caller, breakdown).await,
        Command::Batch {
            manifest,
            history_out,
            format,
        } => run_batch(&config, &manifest, history_out.as_deref(), format).await,
    }
}

async fn run_compute(
    config: &ServiceConfig,
    mass: i64,
    legs: &[LegInput],
    caller: String,
    breakdown: bool,
) -> anyhow::Result<()> {
    let route = normalize_route(legs)?;
    let calculator = server::spawn(config);
    let fuel = calculator.compute(caller, mass, route.clone()).await?;

    println!("=== Fuel Estimate ===");
    println!("Mass          : {mass}");
    println!("Route         : {route}");
    if breakdown {
        for (idx, leg) in calculate_legs(mass, &route)?.iter().enumerate() {
            println!(
                "Leg {:<2}        : {:<14} carry = {:>10}  fuel = {:>10}",
                idx + 1,
                leg.maneuver.to_string(),
                leg.carry_mass,
                leg.fuel
            );
        }
    }
    println!("Fuel required : {fuel}");
    Ok(())
}

async fn run_batch(
    config: &ServiceConfig,
    manifest_path: &Path,
    history_out: Option<&Path>,
    format: HistoryFormat,
) -> anyhow::Result<()> {
    let manifest = load_manifest(manifest_path)?;
    let calculator = server::spawn(config);

    let pending: Vec<_> = manifest
        .trips
        .into_iter()
        .enumerate()
        .map(|(idx, trip)| {
            let caller = trip
                .caller
                .clone()
                .unwrap_or_else(|| format!("trip-{}", idx + 1));
            let task = tokio::spawn(submit(calculator.clone(), caller.clone(), trip));
            (caller, task)
        })
        .collect();

    println!("=== Batch Results ===");
    for (caller, task) in pending {
        match task.await? {
            Ok(fuel) => println!("{caller:<16}: {fuel}"),
            Err(err) => {
                warn!(caller = %caller, error = %err, "trip failed");
                println!("{caller:<16}: error: {err}");
            }
        }
    }

    let history = calculator.history().await?;
    let format = match format {
        HistoryFormat::Csv => ExportFormat::Csv,
        HistoryFormat::Json => ExportFormat::Json,
    };
    match history_out {
        Some(path) => export(&history, path, format)?,
        None => {
            println!("=== History ===");
            export(&history, Path::new("-"), format)?;
        }
    }
    Ok(())
}

async fn submit(
    calculator: CalculatorHandle,
    caller: String,
    trip: TripConfig,
) -> anyhow::Result<u64> {
    let route = trip.route()?;
    Ok(calculator.compute(caller, trip.mass, route).await?)
}
