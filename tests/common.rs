use std::path::Path;

use anyhow::{bail, Context, Result};
use console::style;
use rotate_solver::Move;

pub const SEPARATOR: &str = "================\n";
pub const TEST_DIR: &str = "tests";
pub const EXTENTION: &str = "map";

#[allow(unused)]
pub fn parse_move(tok: &str) -> Result<Move> {
    let &[row, col] = tok.as_bytes() else {
        bail!("Invalid move: {tok:?}");
    };
    let digit = |b: u8| (b as char).to_digit(10).map(|d| d as u8);
    digit(row)
        .zip(digit(col))
        .and_then(|(row, col)| Move::new(row, col))
        .with_context(|| format!("Invalid move: {tok:?}"))
}

#[allow(unused)]
pub fn fmt_move(mv: Move) -> String {
    format!("{}{}", mv.row, mv.col)
}

pub fn run_tests(subdir: &str, mut f: impl FnMut(&str) -> Result<String>) {
    let mut tests = std::fs::read_dir(Path::new(TEST_DIR).join(subdir))
        .unwrap()
        .filter_map(|ent| {
            let path = ent.unwrap().path();
            if path.extension().map_or(true, |ext| ext != EXTENTION) {
                return None;
            }
            let name = path.file_stem().unwrap().to_str().unwrap().to_owned();
            Some((name, path))
        })
        .collect::<Vec<_>>();
    tests.sort();

    let do_update_tests = std::env::var("UPDATE_EXPECT").map_or(false, |v| v == "1");

    let mut failed_cnt = 0;
    for (name, path) in &tests {
        eprint!("{name}: ");
        let content = std::fs::read_to_string(path).unwrap();
        match f(&content) {
            Ok(got) if got == content => eprintln!("{}", style("OK").green()),
            Ok(got) if do_update_tests => {
                std::fs::write(path, got).unwrap();
                eprintln!("{}", style("Updated").yellow());
            }
            Ok(got) => {
                eprintln!("{}\n{got}", style("FAILED").red());
                failed_cnt += 1;
            }
            Err(err) => {
                eprintln!("{}\n{:?}", style("FAILED").red(), err);
                failed_cnt += 1;
            }
        }
    }

    if failed_cnt != 0 {
        eprintln!("{failed_cnt}/{} tests failed", tests.len());
        std::process::exit(1);
    }
}
