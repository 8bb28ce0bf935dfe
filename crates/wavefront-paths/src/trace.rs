use wavefront_core::Point;

use crate::error::{Endpoint, PathError};
use crate::field::{DistanceField, check_endpoint};
use crate::neighbors::Neighbors;
use crate::traits::Walkable;

impl DistanceField {
    /// Recover one shortest path from `start` to `goal`.
    ///
    /// Walks back from `goal`, each time stepping to the passable neighbour
    /// with the smallest reached distance, until `start` is hit. When
    /// several neighbours share that distance the first one in compass
    /// order (N, NE, E, SE, S, SW, W, NW) wins, so the result is
    /// deterministic.
    ///
    /// The returned path runs from `start` to `goal`, both included, and
    /// has `distance(goal) + 1` entries.
    ///
    /// # Errors
    ///
    /// - [`PathError::Unreachable`] if `goal` was never reached.
    /// - [`PathError::Inconsistent`] if the walk gets stuck, which means the
    ///   field was not computed from `start` on this map.
    /// - [`PathError::OutOfBounds`], [`PathError::Blocked`] or
    ///   [`PathError::BoundsMismatch`] for bad arguments.
    pub fn trace<M: Walkable + ?Sized>(
        &self,
        map: &M,
        goal: Point,
        start: Point,
    ) -> Result<Vec<Point>, PathError> {
        if self.bounds() != map.bounds() {
            return Err(PathError::BoundsMismatch {
                field: self.bounds(),
                map: map.bounds(),
            });
        }
        check_endpoint(map, Endpoint::Start, start)?;
        check_endpoint(map, Endpoint::Goal, goal)?;
        let Some(total) = self.distance(goal) else {
            return Err(PathError::Unreachable { goal });
        };

        let mut path = Vec::with_capacity(total as usize + 1);
        path.push(goal);
        let mut nb = Neighbors::new();
        let mut current = goal;
        let mut current_d = total;

        while current != start {
            let mut best: Option<(i32, Point)> = None;
            for &q in nb.walkable(map, current) {
                let d = self.at(q);
                if d < 0 {
                    continue;
                }
                if best.is_none_or(|(bd, _)| d < bd) {
                    best = Some((d, q));
                }
            }
            match best {
                Some((d, q)) if d < current_d => {
                    path.push(q);
                    current = q;
                    current_d = d;
                }
                _ => {
                    return Err(PathError::Inconsistent {
                        at: current,
                        distance: current_d,
                    });
                }
            }
        }

        path.reverse();
        log::debug!("traced {} steps from {start} to {goal}", path.len() - 1);
        Ok(path)
    }
}
