//! ASCII layouts: building a [`Terrain`] from text.
//!
//! ```text
//! S..#
//! .#..
//! ...G
//! ```
//!
//! `.` is empty, `#` an obstacle, `S` the start and `G` the goal. The
//! whole text is trimmed but individual lines are not, and every line must
//! have the same width.

use crate::geom::Point;
use crate::terrain::{Role, Terrain, TerrainError, Tile};

impl Terrain {
    /// Parse a terrain from an ASCII layout.
    pub fn from_ascii(s: &str) -> Result<Self, TerrainError> {
        let content = s.trim();
        let mut width: Option<i32> = None;
        let mut height = 0;
        let mut start = None;
        let mut goal = None;
        let mut obstacles = Vec::new();

        for (row, line) in content.lines().enumerate() {
            let row = row as i32;
            let mut w = 0;
            for (col, ch) in line.chars().enumerate() {
                let pos = Point::new(row, col as i32);
                let tile = Tile::from_symbol(ch).ok_or(TerrainError::InvalidGlyph { ch, pos })?;
                match tile {
                    Tile::Empty => {}
                    Tile::Obstacle => obstacles.push(pos),
                    Tile::Start => set_marker(&mut start, Role::Start, pos)?,
                    Tile::Goal => set_marker(&mut goal, Role::Goal, pos)?,
                }
                w += 1;
            }
            match width {
                Some(expected) if expected != w => {
                    return Err(TerrainError::InconsistentSize(content.to_string()));
                }
                _ => width = Some(w),
            }
            height += 1;
        }

        let start = start.ok_or(TerrainError::MissingMarker(Role::Start))?;
        let goal = goal.ok_or(TerrainError::MissingMarker(Role::Goal))?;
        Terrain::new(height, width.unwrap_or(0), start, goal, &obstacles)
    }
}

fn set_marker(slot: &mut Option<Point>, role: Role, pos: Point) -> Result<(), TerrainError> {
    if slot.is_some() {
        return Err(TerrainError::DuplicateMarker { role, pos });
    }
    *slot = Some(pos);
    Ok(())
}
