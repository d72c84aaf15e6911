use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use astrogation_lib::{
    calculate_travel, find_optimal_route, load_galaxy, render_report, TravelModifiers,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Galaxy astrogation utilities")]
struct Cli {
    /// Path to the galaxy data file.
    #[arg(long)]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the planets available in the galaxy data.
    Planets,
    /// Plot a jump between two planets and print the travel report.
    Jump {
        /// Starting planet name.
        #[arg(long = "from")]
        from: String,
        /// Destination planet name.
        #[arg(long = "to")]
        to: String,
        /// Hyperdrive rating of the ship (lower is faster).
        #[arg(long, default_value_t = 1.0)]
        hyperdrive: f64,
        #[command(flatten)]
        modifiers: ModifierArgs,
        /// Append the travel summary to this history file.
        #[arg(long)]
        history: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ModifierArgs {
    /// The ship has a working navigation computer.
    #[arg(long)]
    nav_computer: bool,
    /// Rush the astrogation plot (fewer rounds, harder check).
    #[arg(long)]
    quick_calc: bool,
    /// The ship has taken light damage.
    #[arg(long)]
    light_damage: bool,
    /// The ship has taken heavy damage.
    #[arg(long)]
    heavy_damage: bool,
    /// The hyperdrive is malfunctioning.
    #[arg(long)]
    hyperdrive_malfunction: bool,
    /// Avoid hyperspace lanes and plot by raw chart adjacency.
    #[arg(long)]
    non_optimal_route: bool,
    /// Take additional time plotting the jump.
    #[arg(long)]
    extra_time: bool,
}

impl From<&ModifierArgs> for TravelModifiers {
    fn from(args: &ModifierArgs) -> Self {
        TravelModifiers {
            nav_computer: args.nav_computer,
            quick_calc: args.quick_calc,
            light_damage: args.light_damage,
            heavy_damage: args.heavy_damage,
            hyperdrive_malfunction: args.hyperdrive_malfunction,
            non_optimal_route: args.non_optimal_route,
            extra_time: args.extra_time,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Planets => handle_planets(&cli.data),
        Command::Jump {
            from,
            to,
            hyperdrive,
            modifiers,
            history,
        } => handle_jump(
            &cli.data,
            &from,
            &to,
            hyperdrive,
            &TravelModifiers::from(&modifiers),
            history.as_deref(),
        ),
    }
}

fn handle_planets(data: &Path) -> Result<()> {
    let galaxy = load_galaxy(data)
        .with_context(|| format!("failed to load galaxy data from {}", data.display()))?;

    for planet in &galaxy.planets {
        println!(
            "{} ({}) - {}",
            planet.name, planet.grid_label, planet.region
        );
    }
    Ok(())
}

fn handle_jump(
    data: &Path,
    from: &str,
    to: &str,
    hyperdrive: f64,
    modifiers: &TravelModifiers,
    history: Option<&Path>,
) -> Result<()> {
    let galaxy = load_galaxy(data)
        .with_context(|| format!("failed to load galaxy data from {}", data.display()))?;

    let route = find_optimal_route(&galaxy, from, to, hyperdrive, modifiers.non_optimal_route)?;
    let report = calculate_travel(&galaxy, &route, hyperdrive, modifiers)?;

    let summary = render_report(&report);
    println!("{summary}");

    if let Some(path) = history {
        append_history(path, &summary)
            .with_context(|| format!("failed to append history to {}", path.display()))?;
    }

    Ok(())
}

/// One-way jump history: each completed report is appended as a block, the
/// CLI stand-in for posting the summary to a shared chat log.
fn append_history(path: &Path, summary: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "--- Astrogation Jump ---")?;
    writeln!(file, "{summary}")?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
