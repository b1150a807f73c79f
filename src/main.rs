//! # sudoku-solver
//!
//! A command-line Sudoku solver. Puzzles are read from free-form text files
//! (whitespace is ignored, any non-digit character is a blank cell) and
//! solved by constraint propagation — naked and hidden singles applied to a
//! fixed point — with a depth-first backtracking search picking up whatever
//! deduction could not settle.
//!
//! ## Usage
//!
//! ```sh
//! # solve a single puzzle file
//! sudoku-solver puzzle.sudoku
//!
//! # print every deduction step and search trial along the way
//! sudoku-solver puzzle.sudoku --print-steps
//!
//! # deduction only, or search only
//! sudoku-solver puzzle.sudoku --deduce-only
//! sudoku-solver puzzle.sudoku --dont-deduce
//!
//! # solve every *.sudoku file under a directory
//! sudoku-solver dir --path puzzles/
//! ```
//!
//! Exit code is 1 when no input file is given or the file cannot be read.

use crate::command_line::cli::{Cli, Commands, solve_dir, solve_file};
use clap::{CommandFactory, Parser};

mod command_line;

/// Global allocator using `tikv-jemallocator`, which also backs the memory
/// figures in the `--stats` report.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Dir { path, common }) => {
            if let Err(e) = solve_dir(&path, &common) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "sudoku-solver",
                &mut std::io::stdout(),
            );
        }
        None => {
            let Some(path) = cli.path else {
                eprintln!("Need an input filename. Aborting.");
                std::process::exit(1);
            };
            if let Err(e) = solve_file(&path, &cli.common) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
