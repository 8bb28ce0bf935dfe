//! Random obstacle injection.

use rand::Rng;
use rand::seq::index;
use wavefront_core::{Point, Terrain};

use crate::error::ScenarioError;

/// Add `count` obstacles at distinct, uniformly chosen empty cells.
///
/// Start, goal and existing obstacles are never picked. Returns the new
/// terrain and the added positions in the order they were drawn; the
/// input terrain is left as is.
pub fn add_random_obstacles<R: Rng + ?Sized>(
    terrain: &Terrain,
    count: usize,
    rng: &mut R,
) -> Result<(Terrain, Vec<Point>), ScenarioError> {
    let free = terrain.free_cells();
    if count > free.len() {
        return Err(ScenarioError::NotEnoughFreeCells {
            requested: count,
            available: free.len(),
        });
    }

    let added: Vec<Point> = index::sample(rng, free.len(), count)
        .into_iter()
        .map(|i| free[i])
        .collect();
    let next = terrain.with_obstacles(&added)?;
    log::debug!(
        "added {} random obstacles, {} free cells left",
        added.len(),
        free.len() - added.len()
    );
    Ok((next, added))
}
