use wavefront_core::{Point, Range, Terrain};

/// Minimal map interface for wavefront searches.
pub trait Walkable {
    /// The rectangle the search is confined to.
    fn bounds(&self) -> Range;

    /// Whether `p` can be entered. Only called for points inside
    /// [`bounds`](Self::bounds).
    fn is_passable(&self, p: Point) -> bool;
}

impl Walkable for Terrain {
    fn bounds(&self) -> Range {
        Terrain::bounds(self)
    }

    fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(|t| t.is_passable())
    }
}
