//! The backtracking engine.
//!
//! Invoked when deduction stalls short of a full solution. The search is a
//! plain depth-first walk over the remaining unsolved cells in index order,
//! with no cell-ordering heuristic; deduction is relied upon to have shrunk
//! the unsolved set first. Assignments made here set cell values directly
//! and bypass the exclusion bookkeeping, which is why every leaf is checked
//! with [`Grid::is_valid_solution`] rather than "all cells non-zero".

use crate::sudoku::grid::Grid;
use crate::sudoku::solver::SolveOptions;

impl Grid {
    /// Exhaustively searches for an assignment of the unsolved cells.
    ///
    /// Returns `true` iff the grid now holds a complete valid solution. On
    /// `false` every trial has been undone and the grid is exactly as it was
    /// on entry; exhaustion is ordinary control flow, not a failure signal.
    ///
    /// Recursion depth is bounded by the number of unsolved cells (at most
    /// `max_value²`), which is the effective resource ceiling of the search.
    pub fn solve_brute(&mut self, options: &SolveOptions) -> bool {
        if options.print_steps {
            println!("Falling back to brute force.");
        }
        let unsolved = self.unsolved_indices();
        self.solve_brute_step(options, &unsolved)
    }

    fn solve_brute_step(&mut self, options: &SolveOptions, unsolved: &[usize]) -> bool {
        let Some((&index, rest)) = unsolved.split_first() else {
            return self.is_valid_solution();
        };

        for value in self.cells[index].possible_values(self.max_value()) {
            if options.print_steps {
                println!("trying {value} at cell {index}");
            }
            if !self.can_place(index, value) {
                continue;
            }
            self.cells[index].value = value;
            if self.solve_brute_step(options, rest) {
                return true;
            }
        }

        self.cells[index].value = 0;
        false
    }
}
