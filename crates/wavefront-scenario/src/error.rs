use std::path::PathBuf;

use thiserror::Error;
use wavefront_core::TerrainError;
use wavefront_paths::PathError;

/// Errors raised while loading or running a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("cannot read scenario file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid scenario file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid terrain: {0}")]
    Terrain(#[from] TerrainError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("cannot add {requested} obstacles, only {available} free cells left")]
    NotEnoughFreeCells { requested: usize, available: usize },
}
