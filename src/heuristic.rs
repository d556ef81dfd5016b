//! Distance estimates from a grid to a fixed goal.
//!
//! Neither estimate is admissible. A single rotation moves four cells by one
//! step each, so the raw tile distance overestimates, and the blank term uses
//! a greedy matching rather than an optimal assignment.
use std::fmt;

use arrayvec::ArrayVec;

use crate::{Cell, Grid, Pos, CELLS};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Half of tile Manhattan distance plus greedy blank matching distance, floored.
    #[default]
    BlankMatching,
    /// Plain tile Manhattan distance, unscaled.
    Manhattan,
}

impl Heuristic {
    pub const ALL: [Self; 2] = [Self::BlankMatching, Self::Manhattan];

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::BlankMatching => "blank-matching",
            Heuristic::Manhattan => "manhattan",
        }
    }

    /// One-shot estimate. Prefer [`Estimator`] when scoring many grids.
    pub fn estimate(self, grid: &Grid, goal: &Grid) -> u32 {
        Estimator::new(goal, self).estimate(grid)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type Blanks = ArrayVec<Pos, CELLS>;

/// Goal-side lookups, computed once per search.
#[derive(Debug, Clone)]
pub struct Estimator {
    heuristic: Heuristic,
    tile_targets: [Option<Pos>; CELLS],
    goal_blanks: Blanks,
}

impl Estimator {
    pub fn new(goal: &Grid, heuristic: Heuristic) -> Self {
        let tile_targets = tile_positions(goal);
        let goal_blanks = goal
            .cells()
            .filter(|(_, cell)| cell.is_blank())
            .map(|(pos, _)| pos)
            .collect::<Blanks>();
        Self {
            heuristic,
            tile_targets,
            goal_blanks,
        }
    }

    pub fn estimate(&self, grid: &Grid) -> u32 {
        let tiles = self.tile_distance(grid);
        match self.heuristic {
            Heuristic::Manhattan => tiles,
            Heuristic::BlankMatching => (tiles + self.blank_distance(grid)) / 2,
        }
    }

    /// Sum of Manhattan distances of every tile that also appears in the goal.
    pub fn tile_distance(&self, grid: &Grid) -> u32 {
        grid.cells()
            .filter_map(|(pos, cell)| match cell {
                Cell::Tile(id) => {
                    let target = self.tile_targets.get(id as usize).copied().flatten()?;
                    Some(pos.distance(target))
                }
                Cell::Blank => None,
            })
            .sum()
    }

    /// Greedily pairs each goal blank, in row-major order, with the nearest
    /// unpaired blank of `grid`. Ties go to the earlier blank.
    pub fn blank_distance(&self, grid: &Grid) -> u32 {
        let mut blanks = grid
            .cells()
            .filter(|(_, cell)| cell.is_blank())
            .map(|(pos, _)| Some(pos))
            .collect::<ArrayVec<_, CELLS>>();

        let mut total = 0;
        for &target in &self.goal_blanks {
            let nearest = blanks
                .iter_mut()
                .filter(|slot| slot.is_some())
                .min_by_key(|slot| slot.map_or(u32::MAX, |pos| pos.distance(target)));
            if let Some(slot) = nearest {
                total += slot.take().map_or(0, |pos| pos.distance(target));
            }
        }
        total
    }
}

fn tile_positions(grid: &Grid) -> [Option<Pos>; CELLS] {
    let mut positions = [None; CELLS];
    for (pos, cell) in grid.cells() {
        if let Cell::Tile(id) = cell {
            if let Some(slot) = positions.get_mut(id as usize) {
                *slot = Some(pos);
            }
        }
    }
    positions
}

/// The first few tiles of a goal, in row-major goal order, and where they belong.
///
/// Blank goal cells are "don't care", and so are tiles missing from the grid.
#[derive(Debug, Clone)]
pub struct Placement {
    targets: ArrayVec<(u8, Pos), CELLS>,
}

impl Placement {
    pub fn tile_count(goal: &Grid) -> usize {
        CELLS - goal.blank_count()
    }

    pub fn new(goal: &Grid, count: usize) -> Self {
        let targets = goal
            .cells()
            .filter_map(|(pos, cell)| match cell {
                Cell::Tile(id) => Some((id, pos)),
                Cell::Blank => None,
            })
            .take(count)
            .collect();
        Self { targets }
    }

    /// Manhattan distance of the target tiles, unscaled.
    pub fn distance(&self, grid: &Grid) -> u32 {
        let positions = tile_positions(grid);
        self.targets
            .iter()
            .filter_map(|&(id, target)| {
                let pos = positions.get(id as usize).copied().flatten()?;
                Some(pos.distance(target))
            })
            .sum()
    }

    pub fn is_placed(&self, grid: &Grid) -> bool {
        let positions = tile_positions(grid);
        self.targets
            .iter()
            .all(|&(id, target)| match positions.get(id as usize).copied().flatten() {
                Some(pos) => pos == target,
                None => true,
            })
    }
}
