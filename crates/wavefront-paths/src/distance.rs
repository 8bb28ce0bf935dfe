use wavefront_core::Point;

/// Chebyshev (L∞) distance between two points: the number of unit moves
/// between them on an open 8-connected grid.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}
