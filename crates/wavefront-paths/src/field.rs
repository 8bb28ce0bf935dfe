use wavefront_core::{Point, Range};

use crate::error::{Endpoint, PathError};
use crate::neighbors::Neighbors;
use crate::traits::Walkable;

/// Sentinel distance for cells the wavefront has not reached.
pub const UNREACHED: i32 = -1;

/// Minimum 8-directional move counts from a start cell.
///
/// Every cell holds either [`UNREACHED`] or the number of unit moves needed
/// to get there from [`start`](Self::start). Values are settled frontier by
/// frontier in non-decreasing order and never overwritten once set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "FieldRepr"))]
pub struct DistanceField {
    bounds: Range,
    start: Point,
    cells: Vec<i32>,
    frontiers: usize,
}

impl DistanceField {
    /// A fresh field over `bounds`: everything unreached except `start`,
    /// which is 0.
    pub fn new(bounds: Range, start: Point) -> Result<Self, PathError> {
        let Some(si) = bounds.index(start) else {
            return Err(PathError::OutOfBounds {
                endpoint: Endpoint::Start,
                pos: start,
                bounds,
            });
        };
        let mut cells = vec![UNREACHED; bounds.len()];
        cells[si] = 0;
        Ok(Self {
            bounds,
            start,
            cells,
            frontiers: 0,
        })
    }

    /// Fill a distance field for `map` from `start` until `goal` is reached.
    ///
    /// At most `step_limit` frontiers are expanded (`None` means one per
    /// cell of the map), and expansion also stops as soon as a frontier
    /// adds no new cell. A goal still at [`UNREACHED`] afterwards is
    /// unreachable; that is a normal outcome, check it with
    /// [`is_reached`](Self::is_reached) before tracing.
    pub fn compute<M: Walkable + ?Sized>(
        map: &M,
        start: Point,
        goal: Point,
        step_limit: Option<usize>,
    ) -> Result<Self, PathError> {
        let bounds = map.bounds();
        check_endpoint(map, Endpoint::Start, start)?;
        check_endpoint(map, Endpoint::Goal, goal)?;

        let limit = step_limit.unwrap_or_else(|| bounds.len());
        let mut field = Self::new(bounds, start)?;
        let mut n: u32 = 0;
        while !field.is_reached(goal) && (n as usize) < limit {
            let added = field.compute_frontier(map, n);
            n += 1;
            if added == 0 {
                log::trace!("wavefront exhausted after {n} frontiers");
                break;
            }
        }

        match field.distance(goal) {
            Some(d) => log::debug!(
                "goal {goal} reached from {start} in {d} moves ({} frontiers)",
                field.frontiers
            ),
            None => log::debug!(
                "goal {goal} unreachable from {start} ({} frontiers, limit {limit})",
                field.frontiers
            ),
        }
        Ok(field)
    }

    /// Expand the wavefront from every cell at distance `n` to `n + 1`.
    ///
    /// A neighbour is promoted if it is inside the map, passable and not
    /// yet reached. Returns the number of promoted cells; zero means the
    /// wavefront can grow no further.
    pub fn compute_frontier<M: Walkable + ?Sized>(&mut self, map: &M, n: u32) -> usize {
        // No cell can hold a distance past `i32::MAX`.
        let Ok(n) = i32::try_from(n) else {
            return 0;
        };
        let frontier: Vec<Point> = self
            .cells
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d == n)
            .map(|(i, _)| self.bounds.point(i))
            .collect();

        let mut nb = Neighbors::new();
        let mut added = 0;
        for p in frontier {
            for &q in nb.walkable(map, p) {
                let Some(qi) = self.bounds.index(q) else {
                    continue;
                };
                if self.cells[qi] != UNREACHED {
                    continue;
                }
                self.cells[qi] = n + 1;
                added += 1;
            }
        }

        self.frontiers += 1;
        log::trace!("frontier {n}: {added} cells promoted to {}", n + 1);
        added
    }

    /// The raw distance at `p`: [`UNREACHED`] if not reached or outside
    /// the field.
    #[inline]
    pub fn at(&self, p: Point) -> i32 {
        match self.bounds.index(p) {
            Some(i) => self.cells[i],
            None => UNREACHED,
        }
    }

    /// The distance at `p`, if it was reached.
    #[inline]
    pub fn distance(&self, p: Point) -> Option<i32> {
        let d = self.at(p);
        (d >= 0).then_some(d)
    }

    /// Whether the wavefront reached `p`.
    #[inline]
    pub fn is_reached(&self, p: Point) -> bool {
        self.at(p) >= 0
    }

    /// The rectangle covered by the field.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// The cell the distances are measured from.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Number of frontier sweeps performed so far.
    #[inline]
    pub fn frontiers(&self) -> usize {
        self.frontiers
    }

    /// Number of reached cells.
    pub fn reached(&self) -> usize {
        self.cells.iter().filter(|&&d| d >= 0).count()
    }

    /// Iterate over the rows of the field, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.cells.chunks(self.bounds.width().max(1) as usize)
    }
}

/// Serialized form of a [`DistanceField`], checked on the way back in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct FieldRepr {
    bounds: Range,
    start: Point,
    cells: Vec<i32>,
    frontiers: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<FieldRepr> for DistanceField {
    type Error = PathError;

    fn try_from(raw: FieldRepr) -> Result<Self, PathError> {
        let FieldRepr {
            bounds,
            start,
            cells,
            frontiers,
        } = raw;
        if cells.len() != bounds.len() {
            return Err(PathError::FieldSize {
                bounds,
                cells: cells.len(),
            });
        }
        let Some(si) = bounds.index(start) else {
            return Err(PathError::OutOfBounds {
                endpoint: Endpoint::Start,
                pos: start,
                bounds,
            });
        };
        if cells[si] != 0 {
            return Err(PathError::Inconsistent {
                at: start,
                distance: cells[si],
            });
        }
        if let Some(i) = cells.iter().position(|&d| d < UNREACHED) {
            return Err(PathError::Inconsistent {
                at: bounds.point(i),
                distance: cells[i],
            });
        }
        Ok(Self {
            bounds,
            start,
            cells,
            frontiers,
        })
    }
}

/// Reject endpoints outside the map or on an impassable cell.
pub(crate) fn check_endpoint<M: Walkable + ?Sized>(
    map: &M,
    endpoint: Endpoint,
    pos: Point,
) -> Result<(), PathError> {
    let bounds = map.bounds();
    if !bounds.contains(pos) {
        return Err(PathError::OutOfBounds {
            endpoint,
            pos,
            bounds,
        });
    }
    if !map.is_passable(pos) {
        return Err(PathError::Blocked { endpoint, pos });
    }
    Ok(())
}
