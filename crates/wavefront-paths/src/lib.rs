//! Wavefront pathfinding on 8-connected grids.
//!
//! Distances are computed by breadth-first "wavefront" expansion: every
//! cell at distance `n` promotes its unreached, passable neighbours to
//! `n + 1`, one frontier at a time, until the goal is reached. All eight
//! moves cost one, so on open ground the distance is the Chebyshev metric.
//! A shortest path is then recovered by walking back from the goal to a
//! neighbour one step closer, until the start is reached.
//!
//! - [`DistanceField::compute`] / [`DistanceField::compute_frontier`] fill
//!   the field.
//! - [`DistanceField::trace`] recovers a path from a filled field.
//! - [`plan`] does both and reports [`Route::Unreachable`] instead of
//!   failing when the goal cannot be reached.
//!
//! Maps are abstracted by the [`Walkable`] trait, implemented for
//! [`wavefront_core::Terrain`].

mod distance;
mod error;
mod field;
mod neighbors;
mod plan;
mod trace;
mod traits;

pub use distance::chebyshev;
pub use error::{Endpoint, PathError};
pub use field::{DistanceField, UNREACHED};
pub use neighbors::Neighbors;
pub use plan::{Plan, Route, plan};
pub use traits::Walkable;
