//! This module contains the time-bounded backtracking solver and the search
//! state it operates on.
//!
//! The [BacktrackingSolver] fills the open cells of a grid in row-major order
//! by exhaustive search. A [Search] owns two grids: the immutable clues the
//! search was started from and the working grid the solver writes candidate
//! values into. Solving in [SolveMode::Fresh] finds the first completion of
//! the clues; solving the same search again in [SolveMode::Continue] resumes
//! the exhaustion where the previous solve stopped and finds the *next*
//! completion, if any. A fresh solve followed by a failed continued solve
//! therefore proves that the found solution is unique, which is the oracle
//! the [Reducer](crate::generator::Reducer) relies on.
//!
//! Every solve is bounded by a wall-clock budget. A `false` result means no
//! (further) solution was found *within the budget*, so callers that need a
//! proof of non-existence must account for the possibility of a timeout.

use crate::SudokuGrid;

use std::time::{Duration, Instant};

/// The default wall-clock budget for a single solve call.
pub const DEFAULT_SOLVE_BUDGET: Duration = Duration::from_millis(2000);

/// Determines how [BacktrackingSolver::solve] treats the state of a
/// [Search].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolveMode {

    /// Discard any previous progress and search for the first solution of
    /// the clues.
    Fresh,

    /// Resume the search behind the solution currently held by the working
    /// grid and look for the next one. Requires a previous successful solve
    /// on the same search to be meaningful.
    Continue
}

/// The state of a backtracking search over one grid. It holds the clue grid,
/// whose filled cells are fixed and never touched by the solver, and the
/// working grid the solver fills.
///
/// Keeping the state in a dedicated owned structure allows one solver to
/// drive any number of independent searches.
#[derive(Clone, Debug)]
pub struct Search {
    clues: SudokuGrid,
    working: SudokuGrid
}

impl Search {

    /// Creates a new search for solutions of the given problem grid. The
    /// grid is copied; later changes to `problem` do not affect the search.
    pub fn new(problem: &SudokuGrid) -> Search {
        Search {
            clues: problem.clone(),
            working: problem.clone()
        }
    }

    /// Gets the working grid. After a successful solve this holds the found
    /// solution.
    pub fn solution(&self) -> &SudokuGrid {
        &self.working
    }

    fn is_fixed(&self, column: usize, row: usize) -> bool {
        self.clues.get_cell(column, row).unwrap().is_some()
    }
}

/// A solver that fills the open cells of a grid by exhaustive backtracking.
///
/// Cells are visited in row-major order. In each open cell the solver tries
/// the candidates above the currently held value in ascending order and
/// places the first one that does not conflict with the rest of the working
/// grid. If no candidate fits, the cell is cleared and the solver retreats to
/// the most recent open cell. Retreating off the grid means the search space
/// is exhausted.
///
/// Every call to [BacktrackingSolver::solve] is bounded by the wall-clock
/// budget the solver was created with.
#[derive(Clone, Copy, Debug)]
pub struct BacktrackingSolver {
    budget: Duration
}

fn find_value(working: &mut SudokuGrid, column: usize, row: usize) -> bool {
    let held = working.get_cell(column, row).unwrap().unwrap_or(0);

    for number in (held + 1)..=working.width() {
        if working.allows(column, row, number).unwrap() {
            working.set_cell(column, row, number).unwrap();
            return true;
        }
    }

    false
}

fn previous_open_cell(clues: &SudokuGrid, column: usize, row: usize)
        -> Option<(usize, usize)> {
    let width = clues.width();
    let mut index = row * width + column;

    while index > 0 {
        index -= 1;
        let column = index % width;
        let row = index / width;

        if clues.get_cell(column, row).unwrap().is_none() {
            return Some((column, row));
        }
    }

    None
}

fn last_open_cell(clues: &SudokuGrid) -> Option<(usize, usize)> {
    let width = clues.width();

    (0..(width * width)).rev()
        .map(|index| (index % width, index / width))
        .find(|&(column, row)| clues.get_cell(column, row).unwrap().is_none())
}

impl BacktrackingSolver {

    /// Creates a new backtracking solver with the given wall-clock budget
    /// per solve call.
    pub fn new(budget: Duration) -> BacktrackingSolver {
        BacktrackingSolver {
            budget
        }
    }

    /// Creates a new backtracking solver with the default budget of
    /// [DEFAULT_SOLVE_BUDGET].
    pub fn new_default() -> BacktrackingSolver {
        BacktrackingSolver::new(DEFAULT_SOLVE_BUDGET)
    }

    /// Gets the wall-clock budget of a single solve call.
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Runs the backtracking search on the given search state. In
    /// [SolveMode::Fresh], the working grid is reset to the clues and the
    /// first solution is searched; in [SolveMode::Continue], the search
    /// resumes behind the currently held solution and looks for the next
    /// one.
    ///
    /// Returns `true` if a (further) solution was found, in which case it
    /// can be read from [Search::solution]. Returns `false` if the search
    /// space was exhausted without success, if the budget ran out, or if a
    /// continued solve found no open cell to resume from.
    pub fn solve(&self, search: &mut Search, mode: SolveMode) -> bool {
        let width = search.clues.width();
        let (mut column, mut row) = match mode {
            SolveMode::Fresh => {
                search.working.assign(&search.clues).unwrap();
                (0, 0)
            },
            SolveMode::Continue => {
                match last_open_cell(&search.clues) {
                    Some(position) => position,
                    None => return false
                }
            }
        };
        let start = Instant::now();

        loop {
            if start.elapsed() > self.budget {
                log::debug!(
                    "Solve budget of {:?} exhausted at cell ({}, {}).",
                    self.budget, column, row);
                return false;
            }

            let advance = search.is_fixed(column, row)
                || find_value(&mut search.working, column, row);

            if advance {
                column += 1;

                if column == width {
                    column = 0;
                    row += 1;

                    if row == width {
                        return true;
                    }
                }
            }
            else {
                search.working.clear_cell(column, row).unwrap();

                match previous_open_cell(&search.clues, column, row) {
                    Some((previous_column, previous_row)) => {
                        column = previous_column;
                        row = previous_row;
                    },
                    None => return false
                }
            }
        }
    }

    /// Searches for a solution of the given problem grid and proves that it
    /// is the only one. Returns the solution if the problem is uniquely
    /// solvable and `None` if no solution was found or a second solution was
    /// found.
    ///
    /// Note that both directions are subject to the budget: a solve that
    /// times out before finding the first solution yields `None`, while a
    /// continued solve that times out counts as "no second solution found".
    pub fn solve_unique(&self, problem: &SudokuGrid) -> Option<SudokuGrid> {
        let mut search = Search::new(problem);

        if !self.solve(&mut search, SolveMode::Fresh) {
            return None;
        }

        let solution = search.solution().clone();

        if self.solve(&mut search, SolveMode::Continue) {
            return None;
        }

        Some(solution)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn classic_problem() -> SudokuGrid {
        SudokuGrid::parse("9;\
            ,1,3,8,,4,5,,,\
            ,6,,,7,,,3,,\
            ,,,,,5,1,,,\
            ,,,,,6,,,7,\
            7,,9,4,,8,3,,2,\
            3,,,7,,,,,,\
            ,,1,6,,,,,,\
            ,7,,,4,,,8,,\
            ,,8,9,,3,7,5,").unwrap()
    }

    fn classic_solution() -> SudokuGrid {
        SudokuGrid::parse("9;\
            2,1,3,8,6,4,5,7,9,\
            4,6,5,1,7,9,2,3,8,\
            8,9,7,2,3,5,1,4,6,\
            1,2,4,3,5,6,8,9,7,\
            7,5,9,4,1,8,3,6,2,\
            3,8,6,7,9,2,4,1,5,\
            5,3,1,6,8,7,9,2,4,\
            9,7,2,5,4,1,6,8,3,\
            6,4,8,9,2,3,7,5,1").unwrap()
    }

    fn assert_valid_solution(problem: &SudokuGrid, solution: &SudokuGrid) {
        let width = solution.width();

        assert!(problem.is_subset(solution).unwrap());
        assert!(solution.is_full());

        for number in 1..=width {
            for i in 0..width {
                assert!(solution.row_contains(i, number).unwrap());
                assert!(solution.column_contains(i, number).unwrap());
            }

            for box_row in (0..width).step_by(solution.box_size()) {
                for box_column in (0..width).step_by(solution.box_size()) {
                    assert!(solution
                        .box_contains(box_column, box_row, number)
                        .unwrap());
                }
            }
        }
    }

    #[test]
    fn solves_classic_problem() {
        let problem = classic_problem();
        let solver = BacktrackingSolver::new_default();
        let mut search = Search::new(&problem);

        assert!(solver.solve(&mut search, SolveMode::Fresh));
        assert_eq!(&classic_solution(), search.solution());
    }

    #[test]
    fn fresh_solve_is_deterministic() {
        let problem = classic_problem();
        let solver = BacktrackingSolver::new_default();
        let mut first = Search::new(&problem);
        let mut second = Search::new(&problem);

        assert!(solver.solve(&mut first, SolveMode::Fresh));
        assert!(solver.solve(&mut second, SolveMode::Fresh));
        assert_eq!(first.solution(), second.solution());
    }

    #[test]
    fn solution_of_empty_grid_is_valid() {
        let problem = SudokuGrid::new(9).unwrap();
        let solver = BacktrackingSolver::new_default();
        let mut search = Search::new(&problem);

        assert!(solver.solve(&mut search, SolveMode::Fresh));
        assert_valid_solution(&problem, search.solution());
    }

    #[test]
    fn empty_grid_has_second_solution() {
        let problem = SudokuGrid::new(4).unwrap();
        let solver = BacktrackingSolver::new_default();
        let mut search = Search::new(&problem);

        assert!(solver.solve(&mut search, SolveMode::Fresh));

        let first = search.solution().clone();

        assert!(solver.solve(&mut search, SolveMode::Continue));
        assert_ne!(&first, search.solution());
        assert_valid_solution(&problem, search.solution());
    }

    #[test]
    fn unique_problem_is_proven_unique() {
        let solver = BacktrackingSolver::new_default();
        let solution = solver.solve_unique(&classic_problem());

        assert_eq!(Some(classic_solution()), solution);
    }

    #[test]
    fn ambiguous_problem_is_rejected() {
        // clearing these four cells permits swapping two number pairs
        let problem =
            SudokuGrid::parse("4;,,3,4,3,4,1,2,,,4,3,4,3,2,1").unwrap();
        let solver = BacktrackingSolver::new_default();

        assert_eq!(None, solver.solve_unique(&problem));
    }

    #[test]
    fn almost_full_problem_is_unique() {
        let mut problem =
            SudokuGrid::parse("4;1,2,3,4,3,4,1,2,2,1,4,3,4,3,2,1").unwrap();
        problem.clear_cell(1, 1).unwrap();
        let solver = BacktrackingSolver::new_default();
        let solution = solver.solve_unique(&problem);

        assert!(solution.is_some());
        assert!(solution.unwrap().has_number(1, 1, 4).unwrap());
    }

    #[test]
    fn continue_without_open_cells_fails() {
        let problem =
            SudokuGrid::parse("4;1,2,3,4,3,4,1,2,2,1,4,3,4,3,2,1").unwrap();
        let solver = BacktrackingSolver::new_default();
        let mut search = Search::new(&problem);

        assert!(!solver.solve(&mut search, SolveMode::Continue));
    }

    #[test]
    fn unsolvable_problem_fails() {
        // the top-right cell requires a 4, which its column already holds
        let problem =
            SudokuGrid::parse("4;1,2,3,,,,,4,,,,,,,,").unwrap();
        let solver = BacktrackingSolver::new_default();
        let mut search = Search::new(&problem);

        assert!(!solver.solve(&mut search, SolveMode::Fresh));
    }

    #[test]
    fn exhausted_budget_aborts_solve() {
        let problem = SudokuGrid::parse("9;\
            ,,,,,,,1,2,\
            ,,,,3,5,,,,\
            ,,,6,,,,7,,\
            7,,,,,,3,,,\
            ,,,4,,,8,,,\
            1,,,,,,,,,\
            ,,,1,2,,,,,\
            ,8,,,,,,4,,\
            ,5,,,,,6,,").unwrap();
        let solver = BacktrackingSolver::new(Duration::from_millis(1));
        let mut search = Search::new(&problem);

        assert!(!solver.solve(&mut search, SolveMode::Fresh));
    }
}
