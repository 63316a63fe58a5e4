//! Example listing the candidate digits for every empty cell of a puzzle.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example candidates
//! ```
//!
//! Pass a file path to load a puzzle instead of using the built-in one:
//!
//! ```sh
//! cargo run --example candidates -- puzzle.txt
//! ```

use std::{env, process};

use ninefold_core::{Grid, Position};

const BUILT_IN: &str = "\
    530070000\n\
    600195000\n\
    098000060\n\
    800060003\n\
    400803001\n\
    700020006\n\
    060000280\n\
    000419005\n\
    000080079";

fn main() {
    let grid = match env::args().nth(1) {
        Some(path) => match Grid::load_from_path(&path) {
            Ok(grid) => grid,
            Err(err) => {
                eprintln!("{path}: {err}");
                process::exit(1);
            }
        },
        None => BUILT_IN.parse().expect("built-in puzzle is well-formed"),
    };

    println!("{grid}");
    println!();

    if grid.is_solved() {
        println!("already solved");
        return;
    }

    for pos in Position::ALL {
        if grid.value_at(pos).is_some() {
            continue;
        }
        let options: Vec<String> = grid.options_at(pos).iter().map(|d| d.to_string()).collect();
        println!("{pos}: {}", options.join(" "));
    }
}
