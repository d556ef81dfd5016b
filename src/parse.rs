use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};

use crate::{Cell, Grid, Puzzle, CELLS, SIZE};

/// Anything from a line starting with this on is not part of the puzzle.
const SEPARATOR: &str = "====";

impl FromStr for Puzzle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut blocks = Vec::new();
        let mut block = Vec::new();
        let lines = s
            .lines()
            .map(|line| line.trim())
            .take_while(|line| !line.starts_with(SEPARATOR));
        for line in lines {
            if line.is_empty() {
                if !block.is_empty() {
                    blocks.push(std::mem::take(&mut block));
                }
            } else {
                block.push(line);
            }
        }
        if !block.is_empty() {
            blocks.push(block);
        }

        let (start, goal) = match &blocks[..] {
            [start] => (parse_grid(start).context("Invalid start grid")?, Grid::goal()),
            [start, goal] => (
                parse_grid(start).context("Invalid start grid")?,
                parse_grid(goal).context("Invalid goal grid")?,
            ),
            [] => bail!("Missing start grid"),
            _ => bail!("Expecting at most 2 grids, got {}", blocks.len()),
        };
        Ok(Puzzle { start, goal })
    }
}

impl FromStr for Grid {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(|line| line.trim())
            .take_while(|line| !line.starts_with(SEPARATOR))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        parse_grid(&lines)
    }
}

fn parse_grid(lines: &[&str]) -> Result<Grid> {
    ensure!(
        lines.len() == SIZE as usize,
        "Expecting {SIZE} rows, got {}",
        lines.len(),
    );

    let mut cells = [Cell::Blank; CELLS];
    let mut seen = [false; CELLS];
    for (i, line) in lines.iter().enumerate() {
        let tokens = line.split_whitespace().collect::<Vec<_>>();
        ensure!(
            tokens.len() == SIZE as usize,
            "Width mismatch on row {i}, expecting width {SIZE}, got {}",
            tokens.len(),
        );
        for (j, tok) in tokens.into_iter().enumerate() {
            let cell = match tok {
                "*" => Cell::Blank,
                _ => {
                    let id = tok
                        .parse::<u8>()
                        .with_context(|| format!("Invalid cell {tok:?} at row {i}"))?;
                    ensure!((id as usize) < CELLS, "Tile id {id} out of bound {CELLS}");
                    ensure!(!seen[id as usize], "Duplicated tile id {id}");
                    seen[id as usize] = true;
                    Cell::Tile(id)
                }
            };
            cells[i * SIZE as usize + j] = cell;
        }
    }
    Ok(Grid::from_cells(cells))
}
