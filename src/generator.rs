//! This module contains the puzzle generation pipeline.
//!
//! A [Generator] produces a [Puzzle] for a requested width and
//! [Level](crate::level::Level). For the standard levels it seeds an empty
//! grid with a few random conflict-free values, completes it with the
//! [BacktrackingSolver], and hands the completed grid to a [Reducer], which
//! removes values in centrally symmetric pairs while the puzzle stays
//! uniquely solvable. The Extreme level is instead served from an
//! [ExtremeDataset] of pre-verified 17-given puzzles.
//!
//! Individual attempts can fail, for example when the seeded grid turns out
//! to be unsolvable within the solve budget or a dataset record cannot be
//! read. The generator retries failed attempts up to
//! [MAX_GENERATION_ATTEMPTS] times before giving up with
//! [SudokuError::GenerationFailed].

use crate::{Puzzle, SudokuGrid};
use crate::dataset::{self, ExtremeDataset};
use crate::error::{SudokuError, SudokuResult};
use crate::level::Level;
use crate::solver::{BacktrackingSolver, Search, SolveMode};

use rand::Rng;
use rand::rngs::ThreadRng;

/// The number of random seed values placed in the grid before it is
/// completed by the solver.
pub const SEED_COUNT: usize = 10;

/// The number of consecutive failed removal attempts after which the
/// [Reducer] gives up on reaching the target number of givens.
pub const MAX_REMOVAL_RETRIES: usize = 20;

/// The number of failed generation attempts after which
/// [Generator::generate] gives up.
pub const MAX_GENERATION_ATTEMPTS: usize = 100;

pub(crate) fn shuffle<R: Rng, T>(rng: &mut R, values: &mut [T]) {
    if values.len() < 2 {
        return;
    }

    for i in 0..(values.len() - 1) {
        let j = rng.gen_range(i..values.len());
        values.swap(i, j);
    }
}

/// Removes values from a completed grid in centrally symmetric pairs while
/// the puzzle remains uniquely solvable, to make the reduced problem grids
/// look balanced.
///
/// A reducer wraps a [BacktrackingSolver] as the uniqueness oracle and a
/// random number generator that picks the removal candidates.
pub struct Reducer<R: Rng> {
    solver: BacktrackingSolver,
    rng: R
}

impl Reducer<ThreadRng> {

    /// Creates a new reducer with a default solver and `rand::thread_rng()`.
    pub fn new_default() -> Reducer<ThreadRng> {
        Reducer::new(BacktrackingSolver::new_default(), rand::thread_rng())
    }
}

impl<R: Rng> Reducer<R> {

    /// Creates a new reducer that uses the given solver as the uniqueness
    /// oracle and the given random number generator to pick removal
    /// candidates.
    pub fn new(solver: BacktrackingSolver, rng: R) -> Reducer<R> {
        Reducer {
            solver,
            rng
        }
    }

    /// Reduces the given problem grid towards the target number of givens.
    /// `problem` must initially be a copy of the full `answer` grid.
    ///
    /// For even targets the center cell is cleared first, so that reaching
    /// the even target by removing symmetric pairs from a full odd-width
    /// grid is possible at all. Afterwards randomly chosen cells are cleared
    /// together with their centrally mirrored partner; a removal that makes
    /// the puzzle ambiguous is rolled back. After [MAX_REMOVAL_RETRIES]
    /// consecutive rollbacks the reduction stops early, so the result may
    /// hold more givens than the target.
    ///
    /// Note that the uniqueness oracle is subject to the solver's budget: a
    /// second-solution search that times out counts as unique, which biases
    /// the reduction towards keeping removals on grids that are expensive to
    /// exhaust.
    ///
    /// Returns the number of givens remaining in the problem grid.
    pub fn reduce(&mut self, problem: &mut SudokuGrid, answer: &SudokuGrid,
            target: usize) -> usize {
        let width = problem.width();
        let mut known = problem.count_clues();

        if target % 2 == 0 {
            let center = width / 2;

            if problem.get_cell(center, center).unwrap().is_some() {
                problem.clear_cell(center, center).unwrap();
                known -= 1;
            }
        }

        let mut retries = 0;

        while known > target {
            let column = self.rng.gen_range(0..width);
            let row = self.rng.gen_range(0..width);

            if problem.get_cell(column, row).unwrap().is_none() {
                continue;
            }

            let mirror_column = width - 1 - column;
            let mirror_row = width - 1 - row;
            problem.clear_cell(column, row).unwrap();
            problem.clear_cell(mirror_column, mirror_row).unwrap();

            if self.solver.solve_unique(problem).is_some() {
                known -= if (column, row) == (mirror_column, mirror_row) {
                    1
                }
                else {
                    2
                };
                retries = 0;
            }
            else {
                let number =
                    answer.get_cell(column, row).unwrap().unwrap();
                problem.set_cell(column, row, number).unwrap();
                let mirror_number = answer
                    .get_cell(mirror_column, mirror_row).unwrap().unwrap();
                problem.set_cell(mirror_column, mirror_row, mirror_number)
                    .unwrap();
                retries += 1;

                if retries >= MAX_REMOVAL_RETRIES {
                    log::debug!(
                        "Reduction stopped at {} givens (target {}).",
                        known, target);
                    break;
                }
            }
        }

        known
    }
}

/// The facade of the generation pipeline. A generator owns the solver, the
/// random number generator, and the [ExtremeDataset] the pipeline draws
/// from, and produces immutable [Puzzle] instances.
pub struct Generator<R: Rng> {
    solver: BacktrackingSolver,
    dataset: ExtremeDataset,
    rng: R,
    seed_count: usize
}

impl Generator<ThreadRng> {

    /// Creates a new generator with a default solver, the bundled dataset,
    /// and `rand::thread_rng()`.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator with a default solver and the bundled
    /// dataset that uses the given random number generator.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            solver: BacktrackingSolver::new_default(),
            dataset: ExtremeDataset::bundled(),
            rng,
            seed_count: SEED_COUNT
        }
    }

    /// Replaces the solver used for completing and validating grids.
    pub fn set_solver(&mut self, solver: BacktrackingSolver) {
        self.solver = solver;
    }

    /// Replaces the dataset the Extreme level draws from.
    pub fn set_dataset(&mut self, dataset: ExtremeDataset) {
        self.dataset = dataset;
    }

    /// Replaces the number of seed values placed before completing a grid.
    /// The default is [SEED_COUNT].
    pub fn set_seed_count(&mut self, seed_count: usize) {
        self.seed_count = seed_count;
    }

    fn try_place_random(&mut self, grid: &mut SudokuGrid, column: usize,
            row: usize) -> bool {
        let width = grid.width();
        let mut numbers: Vec<usize> = (1..=width).collect();
        shuffle(&mut self.rng, &mut numbers);

        for number in numbers {
            if grid.allows(column, row, number).unwrap() {
                grid.set_cell(column, row, number).unwrap();
                return true;
            }
        }

        false
    }

    /// Clears the given grid and places up to `seed_count` random values in
    /// it that do not conflict with each other. The first value is always
    /// placed in the top-left cell, the remaining cells are chosen at
    /// random. Returns the number of values actually placed, which can fall
    /// short of `seed_count` when no conflict-free value is found for a
    /// chosen cell.
    pub fn place_seeds(&mut self, grid: &mut SudokuGrid, seed_count: usize)
            -> usize {
        grid.clear();

        if seed_count == 0 {
            return 0;
        }

        let width = grid.width();
        let mut placed = 0;

        if self.try_place_random(grid, 0, 0) {
            placed += 1;
        }

        let mut attempts = 0;
        let attempt_limit = width * width * width;

        while placed < seed_count && attempts < attempt_limit {
            attempts += 1;
            let column = self.rng.gen_range(0..width);
            let row = self.rng.gen_range(0..width);

            if grid.get_cell(column, row).unwrap().is_some() {
                continue;
            }

            if self.try_place_random(grid, column, row) {
                placed += 1;
            }
        }

        placed
    }

    fn attempt_reduced(&mut self, grid: &mut SudokuGrid, level: &Level)
            -> Option<Puzzle> {
        self.place_seeds(grid, self.seed_count);
        let mut search = Search::new(grid);

        if !self.solver.solve(&mut search, SolveMode::Fresh) {
            return None;
        }

        let answer = search.solution().clone();
        let mut problem = answer.clone();
        let mut reducer = Reducer::new(self.solver, &mut self.rng);
        let actual =
            reducer.reduce(&mut problem, &answer, level.initial_givens());

        Some(Puzzle::new(level.clone(), problem, answer, actual))
    }

    fn attempt_extreme(&mut self, level: &Level) -> Option<Puzzle> {
        let record = self.dataset.load_random(&mut self.rng)?;
        let mut search = Search::new(&record.grid);

        if !self.solver.solve(&mut search, SolveMode::Fresh) {
            return None;
        }

        let answer = search.solution().clone();

        Some(Puzzle::new(level.clone(), record.grid, answer, record.givens))
    }

    /// Generates a puzzle of the given width at the given difficulty level.
    /// Failed attempts are retried up to [MAX_GENERATION_ATTEMPTS] times.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidSize` if `width` is zero or not a square
    /// number, or if the Extreme level is requested for a width other than
    /// the dataset's [RECORD_WIDTH](crate::dataset::RECORD_WIDTH).
    /// * `SudokuError::GenerationFailed` if all attempts failed.
    pub fn generate(&mut self, width: usize, level: &Level)
            -> SudokuResult<Puzzle> {
        let mut grid = SudokuGrid::new(width)?;

        if level.is_extreme() && width != dataset::RECORD_WIDTH {
            return Err(SudokuError::InvalidSize);
        }

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let result = if level.is_extreme() {
                self.attempt_extreme(level)
            }
            else {
                self.attempt_reduced(&mut grid, level)
            };

            if let Some(puzzle) = result {
                return Ok(puzzle);
            }

            log::debug!("Generation attempt {} for level {} failed.",
                attempt, level.name());
        }

        Err(SudokuError::GenerationFailed)
    }

    /// Generates a puzzle of the given width at the standard difficulty
    /// level with the given name, looked up with
    /// [Level::by_name](crate::level::Level::by_name).
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnknownLevel` if no standard level has the given
    /// name.
    /// * Any error raised by [Generator::generate].
    pub fn generate_named(&mut self, width: usize, name: &str)
            -> SudokuResult<Puzzle> {
        let level = Level::by_name(name)?;
        self.generate(width, &level)
    }
}
