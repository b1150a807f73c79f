//! Argument parsing and the command handlers.
//!
//! Uses `clap` for the surface. Parsing and solving live in the library;
//! this module only wires files to the solver and formats the report.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use sudoku_solver::sudoku::grid::Grid;
use sudoku_solver::sudoku::parse::parse_sudoku_file;
use sudoku_solver::sudoku::solver::SolveOptions;
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the solver.
#[derive(Parser, Debug)]
#[command(
    name = "sudoku-solver",
    version,
    about = "A Sudoku solver combining candidate elimination with backtracking search"
)]
pub(crate) struct Cli {
    /// Path to the puzzle file. Whitespace in the file is ignored; any
    /// non-digit character marks a blank cell.
    #[arg(global = true)]
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `dir`, `completions`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve every `*.sudoku` file found under a directory.
    Dir {
        /// Path to the directory to scan recursively.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Options shared by the main command and the `dir` subcommand.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Print a diagnostic message and the grid after every deduction step,
    /// and each trial made by the backtracking search.
    #[arg(short = 'p', long, default_value_t = false)]
    pub(crate) print_steps: bool,

    /// Run only the deduction engine; report the grid as far as naked and
    /// hidden singles get it.
    #[arg(long, default_value_t = false)]
    pub(crate) deduce_only: bool,

    /// Skip deduction and hand the puzzle straight to the backtracking
    /// search.
    #[arg(long, default_value_t = false)]
    pub(crate) dont_deduce: bool,

    /// Print parse/solve timings and memory statistics after solving.
    #[arg(short, long, default_value_t = false)]
    pub(crate) stats: bool,
}

impl CommonOptions {
    /// The solver options carried by these flags.
    pub(crate) const fn to_solve_options(&self) -> SolveOptions {
        SolveOptions {
            print_steps: self.print_steps,
            deduce_only: self.deduce_only,
            dont_deduce: self.dont_deduce,
        }
    }
}

/// Parses and solves a single puzzle file, printing the grid before and
/// after.
///
/// # Errors
///
/// If the file does not exist, cannot be read or does not parse.
pub(crate) fn solve_file(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("Puzzle file does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Provided path is not a file: {}", path.display()));
    }

    let time = Instant::now();
    let mut grid = parse_sudoku_file(path)
        .map_err(|e| format!("Error parsing puzzle file {}: {e}", path.display()))?;
    let parse_time = time.elapsed();

    println!("Parsed Sudoku:\n{grid}");

    epoch::advance().unwrap();
    let time = Instant::now();
    grid.solve(&common.to_solve_options());
    let solve_time = time.elapsed();

    if grid.is_solved() && grid.is_valid_solution() {
        println!("Solution:\n{grid}");
    } else {
        println!("No solution found. Final state:\n{grid}");
    }

    if common.stats {
        epoch::advance().unwrap();
        let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
        let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
        let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
        let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

        print_stats(parse_time, solve_time, &grid, allocated_mib, resident_mib);
    }

    Ok(())
}

/// Solves every `*.sudoku` file under a directory.
///
/// # Errors
///
/// If any of the found puzzle files fails to read or parse.
pub(crate) fn solve_dir(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.is_dir() {
        eprintln!("Provided path is not a directory: {}", path.display());
        std::process::exit(1);
    }

    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path();
        if file_path.extension().is_none_or(|ext| ext != "sudoku") {
            continue;
        }

        if !file_path.is_file() {
            eprintln!("Skipping non-file entry: {}", file_path.display());
            continue;
        }

        solve_file(file_path, common)?;
    }

    Ok(())
}

/// Helper function to print a single statistic line in a formatted table
/// row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Prints a summary of the solve: timings, grid counters, memory.
fn print_stats(parse_time: Duration, elapsed: Duration, grid: &Grid, allocated: f64, resident: f64) {
    println!("\n=======================[ Solver Statistics ]=========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Solve time (s)", format!("{:.3}", elapsed.as_secs_f64()));
    stat_line("Block size", grid.size());
    stat_line("Cells", grid.cells().len());
    stat_line("Cells solved", grid.solved_count());
    stat_line("Valid solution", grid.is_valid_solution());
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    println!("=====================================================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_options_map_onto_solve_options() {
        let common = CommonOptions {
            print_steps: true,
            deduce_only: false,
            dont_deduce: true,
            stats: false,
        };
        let options = common.to_solve_options();
        assert!(options.print_steps);
        assert!(!options.deduce_only);
        assert!(options.dont_deduce);
    }

    #[test]
    fn test_solve_file_reports_missing_file() {
        let err = solve_file(Path::new("/no/such/puzzle.sudoku"), &CommonOptions::default())
            .unwrap_err();
        assert!(err.contains("does not exist"));
    }
}
