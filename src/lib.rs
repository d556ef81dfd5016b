use std::ops::{Index, IndexMut};

mod fmt;
pub mod heuristic;
mod parse;
pub mod scramble;
pub mod solve;

pub use heuristic::{Estimator, Heuristic, Placement};

pub const SIZE: u8 = 5;
pub const CELLS: usize = SIZE as usize * SIZE as usize;

/// Cell indices (`row * SIZE + col`) left blank in the solved layout.
pub const BLANK_IDS: [u8; 6] = [3, 4, 9, 15, 20, 21];

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cell {
    #[default]
    Blank,
    Tile(u8),
}

impl Cell {
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos(pub u8, pub u8);

impl Pos {
    fn from_index(idx: usize) -> Self {
        Pos(idx as u8 / SIZE, idx as u8 % SIZE)
    }

    fn index(self) -> usize {
        self.0 as usize * SIZE as usize + self.1 as usize
    }

    pub fn distance(self, other: Pos) -> u32 {
        (self.0.abs_diff(other.0) + self.1.abs_diff(other.1)) as u32
    }
}

/// A 5x5 board. Compared and hashed by value, so it can key the visited set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Cell; CELLS],
}

impl Index<Pos> for Grid {
    type Output = Cell;
    fn index(&self, pos: Pos) -> &Self::Output {
        &self.cells[pos.index()]
    }
}
impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

impl Grid {
    /// The solved layout: tile `row * 5 + col` at every cell except [`BLANK_IDS`].
    pub fn goal() -> Self {
        let mut cells = [Cell::Blank; CELLS];
        for (id, cell) in (0u8..).zip(cells.iter_mut()) {
            if !BLANK_IDS.contains(&id) {
                *cell = Cell::Tile(id);
            }
        }
        Self { cells }
    }

    pub fn from_cells(cells: [Cell; CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (Pos::from_index(idx), cell))
    }

    pub fn blank_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_blank()).count()
    }

    /// Whether both grids hold the same multiset of cells, i.e. one could be a
    /// rearrangement of the other.
    pub fn same_tiles(&self, other: &Grid) -> bool {
        let mut lhs = self.cells;
        let mut rhs = other.cells;
        lhs.sort_unstable();
        rhs.sort_unstable();
        lhs == rhs
    }

    /// Whether every tile of `other` also appears somewhere in `self`.
    pub fn covers(&self, other: &Grid) -> bool {
        other
            .cells
            .iter()
            .filter(|cell| !cell.is_blank())
            .all(|cell| self.cells.contains(cell))
    }

    /// Rotate the 2x2 block under `mv` clockwise.
    pub fn rotate(&mut self, mv: Move) {
        let Move { row, col } = mv;
        let top_left = Pos(row, col);
        let top_right = Pos(row, col + 1);
        let bottom_right = Pos(row + 1, col + 1);
        let bottom_left = Pos(row + 1, col);

        let tmp = self[top_left];
        self[top_left] = self[bottom_left];
        self[bottom_left] = self[bottom_right];
        self[bottom_right] = self[top_right];
        self[top_right] = tmp;
    }

    pub fn rotated(mut self, mv: Move) -> Self {
        self.rotate(mv);
        self
    }

    pub fn apply_all(mut self, moves: impl IntoIterator<Item = Move>) -> Self {
        for mv in moves {
            self.rotate(mv);
        }
        self
    }
}

/// A clockwise rotation of the 2x2 block whose top-left cell is `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    pub const COUNT: usize = (SIZE as usize - 1) * (SIZE as usize - 1);

    /// Every pivot in row-major order. Search expands neighbors in this order.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Move { row: 0, col: 0 }; Self::COUNT];
        let mut i = 0;
        while i < Self::COUNT {
            all[i] = Move {
                row: (i / (SIZE as usize - 1)) as u8,
                col: (i % (SIZE as usize - 1)) as u8,
            };
            i += 1;
        }
        all
    };

    /// Returns `None` if the block would leave the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < SIZE - 1 && col < SIZE - 1).then_some(Self { row, col })
    }
}

/// A start layout paired with the layout it should be solved into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub start: Grid,
    pub goal: Grid,
}

impl Puzzle {
    pub fn is_solved(&self) -> bool {
        self.start == self.goal
    }
}
