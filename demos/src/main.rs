//! Two-phase wavefront pathfinding demo.
//!
//! Run: cargo run --bin wavefront-demo -- --config demos/scenario.toml
//!
//! Set `RUST_LOG=debug` to see the search progress.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wavefront_scenario::{PhaseReport, ScenarioConfig, ScenarioError, render};

#[derive(Debug, Parser)]
#[command(version, about = "Shortest paths on a grid by wavefront expansion")]
struct Args {
    /// Scenario file (TOML). Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seed for the random obstacles.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Number of random obstacles added in phase two.
    #[arg(short = 'n', long)]
    random_obstacles: Option<usize>,
    /// Maximum number of wavefront expansions.
    #[arg(long)]
    step_limit: Option<usize>,
}

impl Args {
    fn scenario(&self) -> Result<ScenarioConfig, ScenarioError> {
        let mut config = match &self.config {
            Some(path) => ScenarioConfig::load(path)?,
            None => ScenarioConfig::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(n) = self.random_obstacles {
            config.random_obstacles = n;
        }
        if self.step_limit.is_some() {
            config.step_limit = self.step_limit;
        }
        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ScenarioError> {
    let config = args.scenario()?;
    let report = wavefront_scenario::run(&config)?;

    println!("PHASE 1: shortest path around the given obstacles\n");
    print_phase(&report.fixed);

    println!("{}\n", "#".repeat(72));
    println!("PHASE 2: shortest path with random obstacles added\n");
    println!(
        "Added obstacles: {}\n",
        render::path_list(&report.randomized.added_obstacles)
    );
    print_phase(&report.randomized);
    Ok(())
}

fn print_phase(phase: &PhaseReport) {
    println!("Environment (4 start, 5 goal, 1 obstacle, 0 empty):\n");
    println!("{}\n", render::terrain_matrix(&phase.terrain));
    println!("Moves needed to reach each cell (-1 not reached):\n");
    println!("{}\n", render::field_matrix(&phase.plan.field));

    match phase.plan.path() {
        Some(path) => {
            println!("One of the shortest paths ({} moves):\n", path.len() - 1);
            println!("{}\n", render::path_list(path));
            println!("{}\n", render::terrain_with_path(&phase.terrain, path));
        }
        None => println!(
            "The goal {} cannot be reached without removing an obstacle.\n",
            phase.terrain.goal()
        ),
    }
}
