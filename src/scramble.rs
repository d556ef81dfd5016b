use rand::Rng;

use crate::{Grid, Move};

pub const DEFAULT_STEPS: usize = 12;

/// Apply `steps` uniformly random rotations to a copy of `goal`.
///
/// The result is always reachable from `goal`, hence solvable.
pub fn shuffle(goal: &Grid, steps: usize, rng: &mut impl Rng) -> Grid {
    shuffle_moves(goal, steps, rng).0
}

/// Like [`shuffle`], also returning the rotations applied in order.
pub fn shuffle_moves(goal: &Grid, steps: usize, rng: &mut impl Rng) -> (Grid, Vec<Move>) {
    let mut grid = *goal;
    let mut moves = Vec::with_capacity(steps);
    for _ in 0..steps {
        let mv = Move::ALL[rng.gen_range(0..Move::COUNT)];
        grid.rotate(mv);
        moves.push(mv);
    }
    (grid, moves)
}
