use wavefront_core::Point;

use crate::traits::Walkable;

/// Cached neighbor computation helper.
///
/// Enumerates the 8-directional neighbors of a grid point in compass order
/// (N, NE, E, SE, S, SW, W, NW), reusing one buffer across calls.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return 8-directional neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_8() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }

    /// Return the neighbors of `p` that lie inside `map` and are passable.
    pub fn walkable<M: Walkable + ?Sized>(&mut self, map: &M, p: Point) -> &[Point] {
        let bounds = map.bounds();
        self.all(p, |n| bounds.contains(n) && map.is_passable(n))
    }
}
