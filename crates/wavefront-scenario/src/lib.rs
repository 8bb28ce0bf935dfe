//! Scenario utilities for wavefront pathfinding: TOML configuration,
//! random obstacle injection, the two-phase run, and text reports.

pub mod config;
pub mod error;
pub mod obstacles;
pub mod render;
pub mod run;

pub use config::ScenarioConfig;
pub use error::ScenarioError;
pub use obstacles::add_random_obstacles;
pub use run::{PhaseReport, Report, run, run_with_rng};
