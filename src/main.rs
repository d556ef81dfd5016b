use std::time::Duration;

use anyhow::{bail, ensure, Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rotate_solver::{scramble, solve, Grid, Heuristic, Puzzle};

#[derive(Debug, Default)]
struct Args {
    map: Option<String>,
    staged: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--staged" => args.staged = true,
            flag if flag.starts_with("--") => bail!("Unknown flag: {flag}"),
            _ => {
                ensure!(args.map.is_none(), "Multiple map file arguments");
                args.map = Some(arg);
            }
        }
    }
    Ok(args)
}

fn load_puzzle(path: Option<&str>) -> Result<Puzzle> {
    let Some(path) = path else {
        let goal = Grid::goal();
        let start = scramble::shuffle(&goal, scramble::DEFAULT_STEPS, &mut rand::thread_rng());
        return Ok(Puzzle { start, goal });
    };

    let map_data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read the map {path:?}"))?;
    let puzzle = map_data
        .parse::<Puzzle>()
        .context("Failed to parse the map")?;
    ensure!(
        puzzle.start.covers(&puzzle.goal),
        "Start grid lacks some tiles of the goal grid",
    );
    Ok(puzzle)
}

fn main() -> Result<()> {
    let args = parse_args()?;
    let puzzle = load_puzzle(args.map.as_deref())?;
    // Extra tiles on the start side can only be ignored by the staged search.
    let staged = args.staged || !puzzle.start.same_tiles(&puzzle.goal);

    println!("{}", style("Initial state:").bold());
    println!("{}", puzzle.start);
    println!("{}", style("Goal state:").bold());
    println!("{}", puzzle.goal);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template(
        "{spinner} {pos} states expanded [{elapsed}]",
    )?);
    pb.enable_steady_tick(Duration::from_millis(100));
    let on_step = || pb.inc(1);
    let solution = if staged {
        solve::staged(&puzzle.start, &puzzle.goal, on_step)
    } else {
        solve::astar(&puzzle.start, &puzzle.goal, Heuristic::default(), on_step)
    };
    pb.finish_and_clear();

    match solution {
        Some(moves) => {
            println!("Solution in {} moves:", moves.len());
            for mv in moves {
                println!("Rotate at {mv}");
            }
        }
        None => println!("No solution found"),
    }

    Ok(())
}
