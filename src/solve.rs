use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{Estimator, Grid, Heuristic, Move, Placement};

type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;

const ROOT: usize = !0usize; // Sentinel parent of the start state.

/// A frontier entry. `idx` points into the visited map, which also makes it the
/// insertion sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    f: u32,
    g: u32,
    idx: usize,
}

// Min-heap on `f`. Equal `f` pops in insertion order; `g` is not consulted.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search from `start` to `goal` guided by `heuristic`.
///
/// Returns `None` only if the reachable space is exhausted, and `Some(vec![])`
/// if `start` is already `goal`. With an inadmissible heuristic the path is
/// short but not necessarily minimal. `on_step` is called on every expansion.
pub fn astar(
    start: &Grid,
    goal: &Grid,
    heuristic: Heuristic,
    on_step: impl FnMut(),
) -> Option<Vec<Move>> {
    let estimator = Estimator::new(goal, heuristic);
    astar_until(
        start,
        |grid| estimator.estimate(grid),
        |grid| grid == goal,
        on_step,
    )
}

/// Best-first search from `start` until a popped state satisfies `is_done`.
pub fn astar_until(
    start: &Grid,
    estimate: impl Fn(&Grid) -> u32,
    is_done: impl Fn(&Grid) -> bool,
    mut on_step: impl FnMut(),
) -> Option<Vec<Move>> {
    // state -> (parent index, move from parent)
    let mut visited = IndexMap::default();
    visited.insert(*start, (ROOT, Move::ALL[0]));

    let mut frontier = BinaryHeap::new();
    frontier.push(Node {
        f: estimate(start),
        g: 0,
        idx: 0,
    });

    let final_idx = loop {
        #[cfg(feature = "coz")]
        coz::scope!("Expand");

        let Node { g, idx, .. } = frontier.pop()?;
        on_step();

        #[cfg(feature = "coz")]
        coz::progress!("Step");

        let (&state, _) = visited.get_index(idx)?;
        if is_done(&state) {
            break idx;
        }

        for mv in Move::ALL {
            let next = state.rotated(mv);
            if visited.contains_key(&next) {
                continue;
            }
            let (next_idx, _) = visited.insert_full(next, (idx, mv));
            frontier.push(Node {
                f: g + 1 + estimate(&next),
                g: g + 1,
                idx: next_idx,
            });
        }
    };

    let mut steps = std::iter::successors(Some(final_idx), |&i| {
        let (parent, _) = visited[i];
        (parent != ROOT).then_some(parent)
    })
    .filter_map(|i| {
        let (parent, mv) = visited[i];
        (parent != ROOT).then_some(mv)
    })
    .collect::<Vec<_>>();
    steps.reverse();
    Some(steps)
}

/// Solve towards `goal` one tile at a time, following the goal's tiles in
/// row-major order. Stage `n` searches until the first `n` tiles are all home,
/// scored by their plain Manhattan distance.
///
/// Blank goal cells are not constrained, so `start` may carry extra tiles.
/// Far cheaper than [`astar`] on deep scrambles, at the cost of longer paths.
pub fn staged(start: &Grid, goal: &Grid, mut on_step: impl FnMut()) -> Option<Vec<Move>> {
    let mut grid = *start;
    let mut solution = Vec::new();
    for count in 1..=Placement::tile_count(goal) {
        let placement = Placement::new(goal, count);
        if placement.is_placed(&grid) {
            continue;
        }
        let steps = astar_until(
            &grid,
            |state| placement.distance(state),
            |state| placement.is_placed(state),
            &mut on_step,
        )?;
        grid = grid.apply_all(steps.iter().copied());
        solution.extend(steps);
    }
    Some(solution)
}
