//! **wavefront-core** — grid geometry and terrain types.
//!
//! This crate provides the foundational types shared by the *wavefront*
//! crates: `(row, col)` points, compass directions, half-open ranges, and
//! the read-only [`Terrain`] grid of start, goal, empty and obstacle tiles.

pub mod geom;
pub mod layout;
pub mod terrain;

pub use geom::{Direction, Point, Range, RangeIter};
pub use terrain::{Role, Terrain, TerrainError, Tile};
