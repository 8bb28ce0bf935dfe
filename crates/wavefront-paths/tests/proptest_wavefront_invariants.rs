//! Property-based invariant tests for wavefront distance fields and paths.
//!
//! 1. On open ground the goal distance is the Chebyshev distance
//! 2. Every reached cell but the start has a neighbour one step closer
//! 3. Reached distances match an independent queue-based BFS
//! 4. Computing twice yields identical fields
//! 5. Traced paths are adjacent, obstacle-free and climb by exactly one
//! 6. An unreached goal cannot be traced

use std::collections::VecDeque;

use proptest::prelude::*;
use wavefront_core::{Point, Range, Terrain};
use wavefront_paths::{DistanceField, PathError, Route, UNREACHED, Walkable, chebyshev, plan};

// ── Strategies ──────────────────────────────────────────────────────────

/// Random terrain up to 8x8 with roughly `density` of the cells blocked.
fn terrain_strategy(density: f64) -> impl Strategy<Value = Terrain> {
    (2i32..9, 2i32..9)
        .prop_flat_map(move |(h, w)| {
            let n = (h * w) as usize;
            (
                Just(h),
                Just(w),
                0..n,
                0..n,
                prop::collection::vec(prop::bool::weighted(density), n),
            )
        })
        .prop_filter_map("start and goal must differ", |(h, w, s, g, mask)| {
            if s == g {
                return None;
            }
            let rng = Range::sized(h, w);
            let obstacles: Vec<Point> = mask
                .iter()
                .enumerate()
                .filter(|&(i, &blocked)| blocked && i != s && i != g)
                .map(|(i, _)| rng.point(i))
                .collect();
            Terrain::new(h, w, rng.point(s), rng.point(g), &obstacles).ok()
        })
}

/// Plain queue-based BFS over the whole map, for comparison.
fn reference_distances(t: &Terrain) -> Vec<i32> {
    let rng = t.bounds();
    let mut dist = vec![UNREACHED; rng.len()];
    let mut queue = VecDeque::new();
    if let Some(si) = rng.index(t.start()) {
        dist[si] = 0;
        queue.push_back(t.start());
    }
    while let Some(p) = queue.pop_front() {
        let d = dist[rng.index(p).unwrap()];
        for q in p.neighbors_8() {
            let Some(qi) = rng.index(q) else { continue };
            if dist[qi] == UNREACHED && t.is_passable(q) {
                dist[qi] = d + 1;
                queue.push_back(q);
            }
        }
    }
    dist
}

fn compute(t: &Terrain) -> DistanceField {
    DistanceField::compute(t, t.start(), t.goal(), None).unwrap()
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn open_ground_distance_is_chebyshev(t in terrain_strategy(0.0)) {
        let f = compute(&t);
        prop_assert_eq!(f.at(t.goal()), chebyshev(t.start(), t.goal()));
    }

    #[test]
    fn reached_cells_have_a_closer_neighbor(t in terrain_strategy(0.3)) {
        let f = compute(&t);
        prop_assert_eq!(f.at(t.start()), 0);
        for p in t.bounds().iter() {
            let d = f.at(p);
            if d <= 0 {
                continue;
            }
            prop_assert!(t.is_passable(p));
            let closer = p
                .neighbors_8()
                .iter()
                .any(|&q| t.contains(q) && t.is_passable(q) && f.at(q) == d - 1);
            prop_assert!(closer, "cell {} at distance {} has no closer neighbour", p, d);
        }
    }

    #[test]
    fn reached_cells_match_reference_bfs(t in terrain_strategy(0.35)) {
        let f = compute(&t);
        let expected = reference_distances(&t);
        for (i, p) in t.bounds().iter().enumerate() {
            let d = f.at(p);
            if d >= 0 {
                prop_assert_eq!(d, expected[i]);
            }
        }
        let gi = t.bounds().index(t.goal()).unwrap();
        prop_assert_eq!(f.at(t.goal()), expected[gi]);
    }

    #[test]
    fn compute_is_idempotent(t in terrain_strategy(0.3)) {
        prop_assert_eq!(compute(&t), compute(&t));
    }

    #[test]
    fn traced_paths_are_valid(t in terrain_strategy(0.3)) {
        let plan = plan(&t, t.start(), t.goal(), None).unwrap();
        let Route::Found(path) = &plan.route else {
            return Ok(());
        };
        prop_assert_eq!(path.len() as i32, plan.field.at(t.goal()) + 1);
        prop_assert_eq!(path[0], t.start());
        prop_assert_eq!(*path.last().unwrap(), t.goal());
        for (i, &p) in path.iter().enumerate() {
            prop_assert!(t.is_passable(p));
            prop_assert_eq!(plan.field.at(p), i as i32);
        }
        for w in path.windows(2) {
            prop_assert!(w[0].is_adjacent(w[1]));
        }
    }

    #[test]
    fn unreached_goal_cannot_be_traced(t in terrain_strategy(0.5)) {
        let f = compute(&t);
        if !f.is_reached(t.goal()) {
            prop_assert_eq!(
                f.trace(&t, t.goal(), t.start()),
                Err(PathError::Unreachable { goal: t.goal() })
            );
        }
    }
}

#[test]
fn fully_enclosed_goal() {
    let t = Terrain::from_ascii(
        "
S.....
...###
...#G#
...###",
    )
    .unwrap();
    let f = compute(&t);
    assert_eq!(f.at(t.goal()), UNREACHED);
    assert!(matches!(
        f.trace(&t, t.goal(), t.start()),
        Err(PathError::Unreachable { .. })
    ));
}
