//! The two-phase scenario run.
//!
//! Phase one plans around the configured obstacles. Phase two adds random
//! obstacles on top, recomputes, and reports either a path or that the goal
//! can no longer be reached.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wavefront_core::{Point, Terrain, Tile};
use wavefront_paths::{Plan, plan};

use crate::config::ScenarioConfig;
use crate::error::ScenarioError;
use crate::obstacles::add_random_obstacles;

/// Result of planning on one terrain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseReport {
    pub terrain: Terrain,
    /// Obstacles added at random for this phase, in draw order.
    pub added_obstacles: Vec<Point>,
    pub plan: Plan,
}

/// Both phases of a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub fixed: PhaseReport,
    pub randomized: PhaseReport,
}

/// Run a scenario, seeding the random phase from `config.seed` or, when
/// absent, from the thread-local generator.
pub fn run(config: &ScenarioConfig) -> Result<Report, ScenarioError> {
    match config.seed {
        Some(seed) => run_with_rng(config, &mut StdRng::seed_from_u64(seed)),
        None => run_with_rng(config, &mut rand::rng()),
    }
}

/// Run a scenario with a caller-supplied random generator.
pub fn run_with_rng<R: Rng + ?Sized>(
    config: &ScenarioConfig,
    rng: &mut R,
) -> Result<Report, ScenarioError> {
    let terrain = config.build_terrain()?;
    log::info!(
        "phase 1: {}x{} terrain, {} fixed obstacles",
        terrain.height(),
        terrain.width(),
        terrain.count(Tile::Obstacle)
    );
    let fixed = plan_phase(terrain.clone(), Vec::new(), config.step_limit)?;

    let (terrain, added) = add_random_obstacles(&terrain, config.random_obstacles, rng)?;
    log::info!("phase 2: {} random obstacles added", added.len());
    let randomized = plan_phase(terrain, added, config.step_limit)?;

    Ok(Report { fixed, randomized })
}

fn plan_phase(
    terrain: Terrain,
    added_obstacles: Vec<Point>,
    step_limit: Option<usize>,
) -> Result<PhaseReport, ScenarioError> {
    let plan = plan(&terrain, terrain.start(), terrain.goal(), step_limit)?;
    match plan.steps() {
        Some(steps) => log::info!("shortest path takes {steps} moves"),
        None => log::info!("goal {} is unreachable", terrain.goal()),
    }
    Ok(PhaseReport {
        terrain,
        added_obstacles,
        plan,
    })
}
