//! The [`Terrain`] grid: a fixed-size, read-only 2D array of [`Tile`]s.
//!
//! A terrain is built once from its dimensions, a start, a goal and a list
//! of obstacles. It is never mutated afterwards; adding obstacles yields a
//! new terrain via [`Terrain::with_obstacles`].

use std::fmt;

use thiserror::Error;

use crate::geom::{Point, Range};

/// The kind of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Empty,
    Obstacle,
    Start,
    Goal,
}

impl Tile {
    /// Numeric encoding used by matrix reports: 0 empty, 1 obstacle,
    /// 4 start, 5 goal.
    pub const fn code(self) -> i32 {
        match self {
            Tile::Empty => 0,
            Tile::Obstacle => 1,
            Tile::Start => 4,
            Tile::Goal => 5,
        }
    }

    /// ASCII glyph used by layouts.
    pub const fn symbol(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Obstacle => '#',
            Tile::Start => 'S',
            Tile::Goal => 'G',
        }
    }

    /// Inverse of [`symbol`](Self::symbol).
    pub const fn from_symbol(ch: char) -> Option<Tile> {
        match ch {
            '.' => Some(Tile::Empty),
            '#' => Some(Tile::Obstacle),
            'S' => Some(Tile::Start),
            'G' => Some(Tile::Goal),
            _ => None,
        }
    }

    /// Everything but an obstacle can be entered.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Tile::Obstacle)
    }
}

/// A fixed-size grid of tiles with exactly one start and one goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TerrainRepr"))]
pub struct Terrain {
    bounds: Range,
    tiles: Vec<Tile>,
    start: Point,
    goal: Point,
}

impl Terrain {
    /// Build a `height × width` terrain.
    ///
    /// Fails if the dimensions are not positive, if start or goal lie
    /// outside the grid or coincide, or if an obstacle lies outside the
    /// grid or on the start or goal. Repeated obstacles are fine.
    pub fn new(
        height: i32,
        width: i32,
        start: Point,
        goal: Point,
        obstacles: &[Point],
    ) -> Result<Self, TerrainError> {
        if height <= 0 || width <= 0 {
            return Err(TerrainError::EmptyDimensions { height, width });
        }
        let bounds = Range::sized(height, width);
        let mut tiles = vec![Tile::Empty; bounds.len()];
        let markers = [
            (Role::Start, start, Tile::Start),
            (Role::Goal, goal, Tile::Goal),
        ];
        for (role, p, tile) in markers {
            let Some(i) = bounds.index(p) else {
                return Err(TerrainError::OutOfBounds { role, pos: p, bounds });
            };
            tiles[i] = tile;
        }
        if start == goal {
            return Err(TerrainError::StartIsGoal(start));
        }

        let mut terrain = Self {
            bounds,
            tiles,
            start,
            goal,
        };
        terrain.place_obstacles(obstacles)?;
        Ok(terrain)
    }

    /// Return a copy of this terrain with `extra` obstacles added.
    ///
    /// The same validation as [`new`](Self::new) applies to every point.
    pub fn with_obstacles(&self, extra: &[Point]) -> Result<Self, TerrainError> {
        let mut next = self.clone();
        next.place_obstacles(extra)?;
        Ok(next)
    }

    fn place_obstacles(&mut self, obstacles: &[Point]) -> Result<(), TerrainError> {
        for &p in obstacles {
            let Some(idx) = self.bounds.index(p) else {
                return Err(TerrainError::OutOfBounds {
                    role: Role::Obstacle,
                    pos: p,
                    bounds: self.bounds,
                });
            };
            if p == self.start {
                return Err(TerrainError::Blocked { role: Role::Start, pos: p });
            }
            if p == self.goal {
                return Err(TerrainError::Blocked { role: Role::Goal, pos: p });
            }
            self.tiles[idx] = Tile::Obstacle;
        }
        Ok(())
    }

    /// The grid rectangle, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The tile at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.bounds.index(p).map(|i| self.tiles[i])
    }

    /// Whether `p` holds an obstacle. Out-of-bounds points are not obstacles.
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.at(p) == Some(Tile::Obstacle)
    }

    /// The start position.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The goal position.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Obstacle positions in row-major order.
    pub fn obstacles(&self) -> Vec<Point> {
        self.positions_of(Tile::Obstacle)
    }

    /// Empty positions in row-major order. These are the only cells an
    /// obstacle may still be added to.
    pub fn free_cells(&self) -> Vec<Point> {
        self.positions_of(Tile::Empty)
    }

    fn positions_of(&self, tile: Tile) -> Vec<Point> {
        self.iter()
            .filter_map(|(p, t)| (t == tile).then_some(p))
            .collect()
    }

    /// Count how many cells hold `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, Tile)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }

    /// Tiles of row `row`, or an empty slice out of range.
    pub fn row(&self, row: i32) -> &[Tile] {
        if row < 0 || row >= self.height() {
            return &[];
        }
        let w = self.width() as usize;
        let start = row as usize * w;
        &self.tiles[start..start + w]
    }
}

/// Serialized form of a [`Terrain`], rebuilt through [`Terrain::new`] on
/// the way back in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TerrainRepr {
    bounds: Range,
    tiles: Vec<Tile>,
    start: Point,
    goal: Point,
}

#[cfg(feature = "serde")]
impl TryFrom<TerrainRepr> for Terrain {
    type Error = TerrainError;

    fn try_from(raw: TerrainRepr) -> Result<Self, TerrainError> {
        if raw.bounds.min != Point::ZERO {
            return Err(TerrainError::Unanchored(raw.bounds));
        }
        if raw.tiles.len() != raw.bounds.len() {
            return Err(TerrainError::TileCount {
                bounds: raw.bounds,
                tiles: raw.tiles.len(),
            });
        }
        let obstacles: Vec<Point> = raw
            .bounds
            .iter()
            .zip(&raw.tiles)
            .filter_map(|(p, &t)| (t == Tile::Obstacle).then_some(p))
            .collect();
        let terrain = Terrain::new(
            raw.bounds.height(),
            raw.bounds.width(),
            raw.start,
            raw.goal,
            &obstacles,
        )?;
        // Anything left over is a start or goal tile away from its recorded
        // position, or a recorded position holding some other tile.
        if let Some((p, (&got, &want))) = raw
            .bounds
            .iter()
            .zip(raw.tiles.iter().zip(&terrain.tiles))
            .find(|(_, (got, want))| got != want)
        {
            let role = match (got, want) {
                (Tile::Goal, _) | (_, Tile::Goal) => Role::Goal,
                _ => Role::Start,
            };
            return Err(TerrainError::MisplacedMarker { role, pos: p });
        }
        Ok(terrain)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height() {
            if row > 0 {
                writeln!(f)?;
            }
            for tile in self.row(row) {
                write!(f, "{}", tile.symbol())?;
            }
        }
        Ok(())
    }
}

/// Which position a [`TerrainError`] is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Start,
    Goal,
    Obstacle,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Start => "start",
            Role::Goal => "goal",
            Role::Obstacle => "obstacle",
        })
    }
}

/// Errors raised while building a [`Terrain`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerrainError {
    #[error("terrain dimensions must be positive, got {height}x{width}")]
    EmptyDimensions { height: i32, width: i32 },
    #[error("{role} {pos} lies outside {bounds}")]
    OutOfBounds { role: Role, pos: Point, bounds: Range },
    #[error("obstacle placed on the {role} cell {pos}")]
    Blocked { role: Role, pos: Point },
    #[error("start and goal coincide at {0}")]
    StartIsGoal(Point),
    #[error("layout lines have inconsistent widths:\n{0}")]
    InconsistentSize(String),
    #[error("layout contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")]
    InvalidGlyph { ch: char, pos: Point },
    #[error("layout has no {0} marker")]
    MissingMarker(Role),
    #[error("layout has more than one {role} marker, second at {pos}")]
    DuplicateMarker { role: Role, pos: Point },
    #[error("terrain bounds {0} do not start at the origin")]
    Unanchored(Range),
    #[error("terrain over {bounds} holds {tiles} tiles, expected {}", .bounds.len())]
    TileCount { bounds: Range, tiles: usize },
    #[error("{role} tile at {pos} does not match the recorded {role} position")]
    MisplacedMarker { role: Role, pos: Point },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(height: i32, width: i32) -> Terrain {
        Terrain::new(
            height,
            width,
            Point::new(0, 0),
            Point::new(height - 1, width - 1),
            &[],
        )
        .unwrap()
    }

    #[test]
    fn new_places_markers() {
        let t = open(3, 4);
        assert_eq!(t.height(), 3);
        assert_eq!(t.width(), 4);
        assert_eq!(t.at(Point::new(0, 0)), Some(Tile::Start));
        assert_eq!(t.at(Point::new(2, 3)), Some(Tile::Goal));
        assert_eq!(t.at(Point::new(1, 1)), Some(Tile::Empty));
        assert_eq!(t.at(Point::new(3, 0)), None);
        assert_eq!(t.count(Tile::Empty), 10);
    }

    #[test]
    fn obstacles_are_placed_and_listed() {
        let obs = [Point::new(1, 1), Point::new(0, 2), Point::new(1, 1)];
        let t = Terrain::new(3, 3, Point::new(0, 0), Point::new(2, 2), &obs).unwrap();
        assert!(t.is_obstacle(Point::new(1, 1)));
        assert!(!t.is_obstacle(Point::new(9, 9)));
        assert_eq!(t.obstacles(), vec![Point::new(0, 2), Point::new(1, 1)]);
        assert_eq!(t.free_cells().len(), 5);
    }

    #[test]
    fn rejects_bad_dimensions() {
        let err = Terrain::new(0, 3, Point::ZERO, Point::new(0, 1), &[]).unwrap_err();
        assert_eq!(err, TerrainError::EmptyDimensions { height: 0, width: 3 });
    }

    #[test]
    fn rejects_out_of_bounds_markers() {
        let err = Terrain::new(3, 3, Point::new(0, 0), Point::new(3, 3), &[]).unwrap_err();
        assert!(matches!(err, TerrainError::OutOfBounds { role: Role::Goal, .. }));
        let err = Terrain::new(3, 3, Point::new(-1, 0), Point::new(2, 2), &[]).unwrap_err();
        assert!(matches!(err, TerrainError::OutOfBounds { role: Role::Start, .. }));
    }

    #[test]
    fn rejects_obstacle_on_markers() {
        let err = Terrain::new(3, 3, Point::new(0, 0), Point::new(2, 2), &[Point::new(0, 0)])
            .unwrap_err();
        assert_eq!(err, TerrainError::Blocked { role: Role::Start, pos: Point::new(0, 0) });
        let err = Terrain::new(3, 3, Point::new(0, 0), Point::new(2, 2), &[Point::new(2, 2)])
            .unwrap_err();
        assert_eq!(err, TerrainError::Blocked { role: Role::Goal, pos: Point::new(2, 2) });
    }

    #[test]
    fn rejects_out_of_bounds_obstacle() {
        let err = Terrain::new(3, 3, Point::new(0, 0), Point::new(2, 2), &[Point::new(0, 7)])
            .unwrap_err();
        assert!(matches!(err, TerrainError::OutOfBounds { role: Role::Obstacle, .. }));
    }

    #[test]
    fn rejects_coincident_markers() {
        let err = Terrain::new(3, 3, Point::new(1, 1), Point::new(1, 1), &[]).unwrap_err();
        assert_eq!(err, TerrainError::StartIsGoal(Point::new(1, 1)));
    }

    #[test]
    fn with_obstacles_leaves_original_untouched() {
        let t = open(3, 3);
        let t2 = t.with_obstacles(&[Point::new(1, 1)]).unwrap();
        assert!(!t.is_obstacle(Point::new(1, 1)));
        assert!(t2.is_obstacle(Point::new(1, 1)));
        assert!(t.with_obstacles(&[Point::new(2, 2)]).is_err());
    }

    #[test]
    fn display_renders_layout() {
        let t = Terrain::new(2, 3, Point::new(0, 0), Point::new(1, 2), &[Point::new(0, 1)])
            .unwrap();
        assert_eq!(t.to_string(), "S#.\n..G");
    }

    #[test]
    fn tile_codes() {
        assert_eq!(Tile::Empty.code(), 0);
        assert_eq!(Tile::Obstacle.code(), 1);
        assert_eq!(Tile::Start.code(), 4);
        assert_eq!(Tile::Goal.code(), 5);
        assert!(!Tile::Obstacle.is_passable());
        assert!(Tile::Goal.is_passable());
    }
}
