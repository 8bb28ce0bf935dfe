//! Scenario configuration, loaded from TOML.
//!
//! ```toml
//! height = 10
//! width = 10
//! start = [0, 0]
//! goal = [9, 9]
//! obstacles = [[9, 7], [8, 7], [6, 7], [6, 8]]
//! random_obstacles = 20
//! seed = 7
//! ```
//!
//! Every key is optional. A `layout` string (see
//! [`Terrain::from_ascii`]) replaces the dimensions, endpoints and fixed
//! obstacles.

use std::path::Path;

use serde::Deserialize;
use wavefront_core::{Point, Terrain};

use crate::error::ScenarioError;

/// Everything needed to build and run a two-phase scenario.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub height: i32,
    pub width: i32,
    /// `(row, col)` of the start cell.
    pub start: (i32, i32),
    /// `(row, col)` of the goal cell.
    pub goal: (i32, i32),
    /// Fixed obstacles present in both phases.
    pub obstacles: Vec<(i32, i32)>,
    pub layout: Option<String>,
    /// Obstacles added at random in the second phase.
    pub random_obstacles: usize,
    /// Seed for the random phase; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Frontier cap; `None` means height × width.
    pub step_limit: Option<usize>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            height: 10,
            width: 10,
            start: (0, 0),
            goal: (9, 9),
            obstacles: vec![(9, 7), (8, 7), (6, 7), (6, 8)],
            layout: None,
            random_obstacles: 20,
            seed: None,
            step_limit: None,
        }
    }
}

impl ScenarioConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded scenario from {}", path.display());
        Ok(config)
    }

    /// Build the phase-one terrain: the layout if given, otherwise the
    /// dimensions, endpoints and fixed obstacles.
    pub fn build_terrain(&self) -> Result<Terrain, ScenarioError> {
        if let Some(layout) = &self.layout {
            return Ok(Terrain::from_ascii(layout)?);
        }
        let obstacles: Vec<Point> = self.obstacles.iter().copied().map(Point::from).collect();
        Ok(Terrain::new(
            self.height,
            self.width,
            self.start.into(),
            self.goal.into(),
            &obstacles,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavefront_core::Tile;

    #[test]
    fn defaults_build_the_classic_grid() {
        let t = ScenarioConfig::default().build_terrain().unwrap();
        assert_eq!((t.height(), t.width()), (10, 10));
        assert_eq!(t.at(Point::new(0, 0)), Some(Tile::Start));
        assert_eq!(t.at(Point::new(9, 9)), Some(Tile::Goal));
        assert_eq!(t.count(Tile::Obstacle), 4);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ScenarioConfig::from_toml_str("random_obstacles = 3\nseed = 42\n").unwrap();
        assert_eq!(c.random_obstacles, 3);
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.height, 10);
        assert_eq!(c.obstacles.len(), 4);
    }

    #[test]
    fn full_toml() {
        let c = ScenarioConfig::from_toml_str(
            r#"
height = 4
width = 5
start = [3, 0]
goal = [0, 4]
obstacles = [[1, 1], [2, 2]]
step_limit = 12
"#,
        )
        .unwrap();
        let t = c.build_terrain().unwrap();
        assert_eq!(t.start(), Point::new(3, 0));
        assert_eq!(t.goal(), Point::new(0, 4));
        assert_eq!(t.obstacles(), vec![Point::new(1, 1), Point::new(2, 2)]);
        assert_eq!(c.step_limit, Some(12));
    }

    #[test]
    fn layout_overrides_dimensions() {
        let c = ScenarioConfig::from_toml_str("layout = \"\"\"\nS.#\n..G\n\"\"\"\n").unwrap();
        let t = c.build_terrain().unwrap();
        assert_eq!((t.height(), t.width()), (2, 3));
        assert_eq!(t.obstacles(), vec![Point::new(0, 2)]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ScenarioConfig::from_toml_str("hieght = 3").unwrap_err();
        assert!(matches!(err, ScenarioError::Toml(_)));
    }

    #[test]
    fn invalid_terrain_is_reported() {
        let c = ScenarioConfig {
            obstacles: vec![(0, 0)],
            ..ScenarioConfig::default()
        };
        assert!(matches!(c.build_terrain(), Err(ScenarioError::Terrain(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ScenarioConfig::load("/nonexistent/scenario.toml").unwrap_err();
        assert!(matches!(err, ScenarioError::Io { .. }));
    }
}
