//! One-call planning: distance field plus path, or an unreachability signal.

use wavefront_core::Point;

use crate::error::PathError;
use crate::field::DistanceField;
use crate::traits::Walkable;

/// Outcome of a planning query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Route {
    /// A shortest path from start to goal, both included.
    Found(Vec<Point>),
    /// The wavefront never reached the goal.
    Unreachable,
}

/// The distance field of a query together with its route.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    pub start: Point,
    pub goal: Point,
    pub field: DistanceField,
    pub route: Route,
}

impl Plan {
    /// Whether a path to the goal exists.
    pub fn is_reachable(&self) -> bool {
        matches!(self.route, Route::Found(_))
    }

    /// The path, if any.
    pub fn path(&self) -> Option<&[Point]> {
        match &self.route {
            Route::Found(path) => Some(path),
            Route::Unreachable => None,
        }
    }

    /// Number of moves along the path, if any.
    pub fn steps(&self) -> Option<usize> {
        self.path().map(|p| p.len() - 1)
    }
}

/// Compute the distance field from `start` and, when `goal` is reached,
/// trace a shortest path to it.
///
/// `step_limit` caps the number of frontiers as in
/// [`DistanceField::compute`]. Only bad endpoints produce an error; an
/// unreachable goal yields [`Route::Unreachable`].
pub fn plan<M: Walkable + ?Sized>(
    map: &M,
    start: Point,
    goal: Point,
    step_limit: Option<usize>,
) -> Result<Plan, PathError> {
    let field = DistanceField::compute(map, start, goal, step_limit)?;
    let route = if field.is_reached(goal) {
        Route::Found(field.trace(map, goal, start)?)
    } else {
        Route::Unreachable
    };
    Ok(Plan {
        start,
        goal,
        field,
        route,
    })
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use wavefront_core::Terrain;

    #[test]
    fn plan_round_trip() {
        let t = Terrain::from_ascii("S..\n.#.\n..G").unwrap();
        let plan = plan(&t, t.start(), t.goal(), None).unwrap();
        let json = serde_json::to_string(&plan).unwrap();
        let back: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, back);
    }
}
