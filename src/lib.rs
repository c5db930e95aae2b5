// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate generates Sudoku puzzles that are guaranteed to have a unique
//! solution, at a chosen difficulty. It supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Solving grids using a time-bounded backtracking algorithm that can also
//! search for a *second* solution, which proves or disproves uniqueness
//! * Generating puzzles for the standard difficulty levels by randomly
//! seeding a grid, completing it, and removing values in centrally symmetric
//! pairs while uniqueness is preserved
//! * Loading pre-verified minimal 17-given puzzles for the Extreme level from
//! a compact binary dataset, together with the offline encoder that produces
//! that dataset
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and display
//! a grid is provided below.
//!
//! ```
//! use sudoku_gen::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("4;2, ,3, , ,1, , ,1, , ,4, ,2, ,3").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving grids
//!
//! The [BacktrackingSolver](solver::BacktrackingSolver) fills the empty cells
//! of a grid by exhaustive search over an owned [Search](solver::Search)
//! state. A fresh solve finds the first completion; a continued solve resumes
//! the search to look for a different one. Both are bounded by a wall-clock
//! budget, so a negative result within the budget means "not found in time",
//! not necessarily "proven impossible".
//!
//! ```
//! use sudoku_gen::SudokuGrid;
//! use sudoku_gen::solver::{BacktrackingSolver, Search, SolveMode};
//!
//! let problem = SudokuGrid::parse("4; , , ,4, ,4,3, , ,3, , , , ,1, ")
//!     .unwrap();
//! let solver = BacktrackingSolver::new_default();
//! let mut search = Search::new(&problem);
//!
//! assert!(solver.solve(&mut search, SolveMode::Fresh));
//! assert!(search.solution().is_full());
//! ```
//!
//! # Generating puzzles
//!
//! The [Generator](generator::Generator) orchestrates the entire pipeline and
//! returns an immutable [Puzzle] holding the problem grid, the answer grid
//! and the actual number of givens.
//!
//! ```
//! use sudoku_gen::generator::Generator;
//! use sudoku_gen::level::Level;
//!
//! let mut generator = Generator::new_default();
//! let puzzle = generator.generate(9, &Level::easy()).unwrap();
//!
//! assert!(puzzle.problem().is_subset(puzzle.answer()).unwrap());
//! assert!(puzzle.answer().is_full());
//! ```
//!
//! # Note regarding performance
//!
//! Proving uniqueness requires exhaustive search. Generation is doable within
//! a few seconds for the standard levels, but it is strongly recommended to
//! use at least `opt-level = 2`, even in tests that generate puzzles.

pub mod dataset;
pub mod error;
pub mod generator;
pub mod level;
pub mod solver;

use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};
use level::Level;

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Error, Formatter};

/// A Sudoku grid is a square matrix of cells that is subdivided into square
/// boxes. The width must therefore have an integer square root, the box size.
/// Each cell may or may not be occupied by a number.
///
/// In ordinary Sudoku, the width is 9 and the box size 3, resulting in a grid
/// like this:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// In a solved grid, every row, column, and box contains each number from 1
/// to the width exactly once.
///
/// `SudokuGrid` implements `Display`, but only grids with a width of less
/// than or equal to 9 can be displayed with digits 1 to 9. Grids of all other
/// widths will raise an error.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SudokuGrid {
    width: usize,
    box_size: usize,
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(grid: &SudokuGrid, start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let width = grid.width();
    let mut result = String::new();

    for x in 0..width {
        if x == 0 {
            result.push(start);
        }
        else if x % grid.box_size == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row(grid: &SudokuGrid) -> String {
    line(grid, '╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line(grid: &SudokuGrid) -> String {
    line(grid, '╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line(grid: &SudokuGrid) -> String {
    line(grid, '╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row(grid: &SudokuGrid) -> String {
    line(grid, '╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line(grid, '║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ',
        '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self.width();

        if width > 9 {
            return Err(Error::default());
        }

        let top_row = top_row(self);
        let thin_separator_line = thin_separator_line(self);
        let thick_separator_line = thick_separator_line(self);
        let bottom_row = bottom_row(self);

        for y in 0..width {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % self.box_size == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn index(column: usize, row: usize, width: usize) -> usize {
    row * width + column
}

fn integer_sqrt(width: usize) -> Option<usize> {
    let mut root = 0;

    while root * root < width {
        root += 1;
    }

    if root * root == width {
        Some(root)
    }
    else {
        None
    }
}

impl SudokuGrid {

    /// Creates a new, empty grid with the given width.
    ///
    /// # Arguments
    ///
    /// * `width`: The number of columns and rows of the grid. Must be greater
    /// than 0 and have an integer square root, which becomes the box size.
    /// For an ordinary Sudoku grid, this is 9.
    ///
    /// # Errors
    ///
    /// If `width` is invalid (zero or not a square number). In that case,
    /// `SudokuError::InvalidSize` is returned.
    pub fn new(width: usize) -> SudokuResult<SudokuGrid> {
        if width == 0 {
            return Err(SudokuError::InvalidSize);
        }

        let box_size = integer_sqrt(width)
            .ok_or(SudokuError::InvalidSize)?;
        let cells = vec![None; width * width];

        Ok(SudokuGrid {
            width,
            box_size,
            cells
        })
    }

    /// Parses a code encoding a grid. The code has to be of the format
    /// `<width>;<cells>` where `<cells>` is a comma-separated list of
    /// entries, which are either empty or a number. The entries are assigned
    /// left-to-right, top-to-bottom, where each row is completed before the
    /// next one is started. Whitespace in the entries is ignored to allow for
    /// more intuitive formatting. The number of entries must be `width²`.
    ///
    /// As an example, the code `4;1, ,2, , ,3, ,4, , , ,3, ,1, ,2` will parse
    /// to the following grid:
    ///
    /// ```text
    /// ╔═══╤═══╦═══╤═══╗
    /// ║ 1 │   ║ 2 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 3 ║   │ 4 ║
    /// ╠═══╪═══╬═══╪═══╣
    /// ║   │   ║ 3 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 1 ║   │ 2 ║
    /// ╚═══╧═══╩═══╧═══╝
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(SudokuParseError::WrongNumberOfParts);
        }

        let width: usize = parts[0].trim().parse()?;
        let mut grid = SudokuGrid::new(width)
            .map_err(|_| SudokuParseError::InvalidSize)?;
        let numbers: Vec<&str> = parts[1].split(',').collect();

        if numbers.len() != width * width {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        for (i, number_str) in numbers.iter().enumerate() {
            let number_str = number_str.trim();

            if number_str.is_empty() {
                continue;
            }

            let number = number_str.parse::<usize>()?;

            if number == 0 || number > width {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change.
    pub fn to_parseable_string(&self) -> String {
        let mut s = format!("{};", self.width);
        let cells = self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Gets the width (number of columns and rows) of the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Gets the size of one box of the grid, that is, the integer square root
    /// of the width. For an ordinary Sudoku grid, this is 3.
    pub fn box_size(&self) -> usize {
        self.box_size
    }

    fn check_coordinates(&self, column: usize, row: usize) -> SudokuResult<()> {
        if column >= self.width || row >= self.width {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(())
        }
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, width[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, width[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        self.check_coordinates(column, row)?;
        Ok(self.cells[index(column, row, self.width)])
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are greater than or equal to the width. In
    /// that case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, width[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, width[`.
    /// * `number`: The number to assign to the specified cell. Must be in the
    /// range `[1, width]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        self.check_coordinates(column, row)?;

        if number == 0 || number > self.width {
            return Err(SudokuError::InvalidNumber);
        }

        let index = index(column, row, self.width);
        self.cells[index] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are greater than or equal to the width. In
    /// that case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        self.check_coordinates(column, row)?;
        let index = index(column, row, self.width);
        self.cells[index] = None;
        Ok(())
    }

    /// Clears the content of every cell in the grid.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = None;
        }
    }

    fn verify_width(&self, other: &SudokuGrid) -> SudokuResult<()> {
        if self.width != other.width {
            Err(SudokuError::InvalidSize)
        }
        else {
            Ok(())
        }
    }

    /// Assigns the content of another grid to this one, i.e., changes the
    /// cells in this grid to the state in `other`. The other grid must have
    /// the same width as this one.
    ///
    /// # Errors
    ///
    /// If the widths are not the same. In that case,
    /// `SudokuError::InvalidSize` is returned.
    pub fn assign(&mut self, other: &SudokuGrid) -> SudokuResult<()> {
        self.verify_width(other)?;
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }

    /// Counts the number of givens in this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether the given row contains the given number.
    ///
    /// # Errors
    ///
    /// `SudokuError::OutOfBounds` if `row` is greater than or equal to the
    /// width.
    pub fn row_contains(&self, row: usize, number: usize)
            -> SudokuResult<bool> {
        self.check_coordinates(0, row)?;
        Ok((0..self.width)
            .any(|column| self.cells[index(column, row, self.width)]
                == Some(number)))
    }

    /// Indicates whether the given column contains the given number.
    ///
    /// # Errors
    ///
    /// `SudokuError::OutOfBounds` if `column` is greater than or equal to the
    /// width.
    pub fn column_contains(&self, column: usize, number: usize)
            -> SudokuResult<bool> {
        self.check_coordinates(column, 0)?;
        Ok((0..self.width)
            .any(|row| self.cells[index(column, row, self.width)]
                == Some(number)))
    }

    /// Indicates whether the box containing the cell at the specified
    /// position contains the given number.
    ///
    /// # Errors
    ///
    /// `SudokuError::OutOfBounds` if either `column` or `row` are greater
    /// than or equal to the width.
    pub fn box_contains(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        self.check_coordinates(column, row)?;
        let box_column = (column / self.box_size) * self.box_size;
        let box_row = (row / self.box_size) * self.box_size;

        for y in box_row..(box_row + self.box_size) {
            for x in box_column..(box_column + self.box_size) {
                if self.cells[index(x, y, self.width)] == Some(number) {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }

    /// Indicates whether the given number could be placed in the cell at the
    /// specified position without conflicting with another cell in the same
    /// row, column, or box. The content of the specified cell itself is
    /// ignored.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are greater
    /// than or equal to the width.
    /// * `SudokuError::InvalidNumber` If `number` is 0 or greater than the
    /// width.
    pub fn allows(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        self.check_coordinates(column, row)?;

        if number == 0 || number > self.width {
            return Err(SudokuError::InvalidNumber);
        }

        let number = Some(number);

        for x in 0..self.width {
            if x != column && self.cells[index(x, row, self.width)] == number {
                return Ok(false);
            }
        }

        for y in 0..self.width {
            if y != row && self.cells[index(column, y, self.width)] == number {
                return Ok(false);
            }
        }

        let box_column = (column / self.box_size) * self.box_size;
        let box_row = (row / self.box_size) * self.box_size;

        for y in box_row..(box_row + self.box_size) {
            for x in box_column..(box_column + self.box_size) {
                if (x, y) != (column, row)
                        && self.cells[index(x, y, self.width)] == number {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be filled
    /// in `other` with the same number. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the widths of this and the `other` grid are not the same. In that
    /// case, `SudokuError::InvalidSize` is returned.
    pub fn is_subset(&self, other: &SudokuGrid) -> SudokuResult<bool> {
        self.verify_width(other)?;
        Ok(self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            }))
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the widths of this and the `other` grid are not the same. In that
    /// case, `SudokuError::InvalidSize` is returned.
    pub fn is_superset(&self, other: &SudokuGrid) -> SudokuResult<bool> {
        other.is_subset(self)
    }
}

/// The result of a puzzle generation request: a problem grid, the unique
/// answer it solves to, and some metadata about the request. A puzzle is
/// immutable after construction; no partial or intermediate state of the
/// generation pipeline is exposed.
///
/// Puzzles are created by a [Generator](generator::Generator).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Puzzle {
    width: usize,
    level: Level,
    actual_initial: usize,
    problem: SudokuGrid,
    answer: SudokuGrid
}

impl Puzzle {

    pub(crate) fn new(level: Level, problem: SudokuGrid, answer: SudokuGrid,
            actual_initial: usize) -> Puzzle {
        Puzzle {
            width: problem.width(),
            level,
            actual_initial,
            problem,
            answer
        }
    }

    /// Gets the width of the puzzle's grids.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Gets the difficulty level this puzzle was generated at.
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Gets the actual number of givens in the problem grid. For standard
    /// levels this may exceed the level's nominal target when the reducer ran
    /// out of removable cells, see
    /// [Reducer::reduce](generator::Reducer::reduce).
    pub fn actual_initial(&self) -> usize {
        self.actual_initial
    }

    /// Gets the problem grid, which contains only the givens.
    pub fn problem(&self) -> &SudokuGrid {
        &self.problem
    }

    /// Gets the answer grid, the unique solution of the problem grid.
    pub fn answer(&self) -> &SudokuGrid {
        &self.answer
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let grid_res = SudokuGrid::parse("4; 1,,,2, ,3,,4, ,2,,, 3,,,");

        if let Ok(grid) = grid_res {
            assert_eq!(4, grid.width());
            assert_eq!(2, grid.box_size());
            assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
            assert_eq!(None, grid.get_cell(1, 0).unwrap());
            assert_eq!(None, grid.get_cell(2, 0).unwrap());
            assert_eq!(Some(2), grid.get_cell(3, 0).unwrap());
            assert_eq!(None, grid.get_cell(0, 1).unwrap());
            assert_eq!(Some(3), grid.get_cell(1, 1).unwrap());
            assert_eq!(None, grid.get_cell(2, 1).unwrap());
            assert_eq!(Some(4), grid.get_cell(3, 1).unwrap());
            assert_eq!(None, grid.get_cell(0, 2).unwrap());
            assert_eq!(Some(2), grid.get_cell(1, 2).unwrap());
            assert_eq!(None, grid.get_cell(2, 2).unwrap());
            assert_eq!(None, grid.get_cell(3, 2).unwrap());
            assert_eq!(Some(3), grid.get_cell(0, 3).unwrap());
            assert_eq!(None, grid.get_cell(1, 3).unwrap());
            assert_eq!(None, grid.get_cell(2, 3).unwrap());
            assert_eq!(None, grid.get_cell(3, 3).unwrap());
        }
        else {
            panic!("Parsing valid grid failed.");
        }
    }

    #[test]
    fn parse_invalid_size() {
        assert_eq!(Err(SudokuParseError::InvalidSize),
            SudokuGrid::parse("0;"));
        assert_eq!(Err(SudokuParseError::InvalidSize),
            SudokuGrid::parse("8;,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,\
                ,,,,,,,,,,,,,,,,,,,,"));
    }

    #[test]
    fn parse_wrong_number_of_parts() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfParts),
            SudokuGrid::parse("4;,,,,,,,,,,,,,,,;whatever"));
    }

    #[test]
    fn parse_number_format_error() {
        assert_eq!(Err(SudokuParseError::NumberFormatError),
            SudokuGrid::parse("#;,"));
    }

    #[test]
    fn parse_invalid_number() {
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse("4;,,,4,,,5,,,,,,,,,"));
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse("4;1,2,3,4,1,2,3,4,1,2,3,4,1,2,3"));
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse("4;1,2,3,4,1,2,3,4,1,2,3,4,1,2,3,4,1"));
    }

    #[test]
    fn new_rejects_non_square_width() {
        assert_eq!(Err(SudokuError::InvalidSize), SudokuGrid::new(0));
        assert_eq!(Err(SudokuError::InvalidSize), SudokuGrid::new(8));
        assert_eq!(Err(SudokuError::InvalidSize), SudokuGrid::new(12));
        assert!(SudokuGrid::new(1).is_ok());
        assert!(SudokuGrid::new(4).is_ok());
        assert!(SudokuGrid::new(9).is_ok());
        assert!(SudokuGrid::new(16).is_ok());
    }

    #[test]
    fn to_parseable_string() {
        let mut grid = SudokuGrid::new(4).unwrap();

        assert_eq!("4;,,,,,,,,,,,,,,,", grid.to_parseable_string().as_str());

        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(1, 1, 2).unwrap();
        grid.set_cell(2, 2, 3).unwrap();
        grid.set_cell(3, 3, 4).unwrap();

        assert_eq!("4;1,,,,,2,,,,,3,,,,,4",
            grid.to_parseable_string().as_str());
    }

    #[test]
    fn parse_round_trip() {
        let grid = SudokuGrid::parse("9;\
            1,,3,,2,,,9,,\
            ,,,,,8,,,2,\
            4,,4,3,,,,,,\
            ,,,2,,,6,,,\
            ,5,,,1,,,8,,\
            ,,7,,,,,,4,\
            ,,,1,2,,,,,\
            8,,,,,,4,,,\
            ,,,5,,,6,,").unwrap();
        let reparsed =
            SudokuGrid::parse(grid.to_parseable_string().as_str()).unwrap();
        assert_eq!(grid, reparsed);
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = SudokuGrid::parse("4;,,,,,,,,,,,,,,,").unwrap();
        let partial = SudokuGrid::parse("4;1,,3,2,4,,,,,,,,,,1,").unwrap();
        let full = SudokuGrid::parse("4;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4")
            .unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(5, partial.count_clues());
        assert_eq!(16, full.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    #[test]
    fn clear_empties_grid() {
        let mut grid = SudokuGrid::parse("4;1,,3,2,4,,,,,,,,,,1,").unwrap();
        grid.clear();
        assert!(grid.is_empty());
    }

    #[test]
    fn neighborhood_queries() {
        let grid = SudokuGrid::parse("9;\
            ,,,,8,1,,,,\
            ,,2,,,7,8,,,\
            ,5,3,,,,1,7,,\
            3,7,,,,,,,,\
            6,,,,,,,,3,\
            ,,,,,,,2,4,\
            ,6,9,,,,2,3,,\
            ,,5,9,,,4,,,\
            ,,,6,5,,,,").unwrap();

        assert!(grid.row_contains(0, 8).unwrap());
        assert!(!grid.row_contains(0, 2).unwrap());
        assert!(grid.column_contains(2, 5).unwrap());
        assert!(!grid.column_contains(2, 7).unwrap());
        assert!(grid.box_contains(0, 0, 2).unwrap());
        assert!(grid.box_contains(8, 8, 4).unwrap());
        assert!(!grid.box_contains(0, 0, 9).unwrap());
    }

    #[test]
    fn allows_detects_conflicts() {
        let grid = SudokuGrid::parse("4;1,,3,2,4,,,,,,,,,,1,").unwrap();

        // row conflict
        assert!(!grid.allows(1, 0, 3).unwrap());
        // column conflict
        assert!(!grid.allows(0, 2, 4).unwrap());
        // box conflict
        assert!(!grid.allows(1, 1, 1).unwrap());
        // no conflict
        assert!(grid.allows(1, 2, 3).unwrap());
    }

    #[test]
    fn allows_ignores_own_cell() {
        let grid = SudokuGrid::parse("4;1,,3,2,4,,,,,,,,,,1,").unwrap();
        assert!(grid.allows(0, 0, 1).unwrap());
    }

    #[test]
    fn out_of_bounds_and_invalid_number_errors() {
        let mut grid = SudokuGrid::new(4).unwrap();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(4, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(0, 4, 1));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 5));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.allows(0, 4, 1));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.allows(0, 0, 5));
    }

    fn assert_subset_relation(a: &SudokuGrid, b: &SudokuGrid, a_subset_b: bool,
            b_subset_a: bool) {
        assert!(a.is_subset(b).unwrap() == a_subset_b);
        assert!(a.is_superset(b).unwrap() == b_subset_a);
        assert!(b.is_subset(a).unwrap() == b_subset_a);
        assert!(b.is_superset(a).unwrap() == a_subset_b);
    }

    #[test]
    fn empty_is_subset() {
        let empty = SudokuGrid::new(4).unwrap();
        let non_empty = SudokuGrid::parse("4;1,,,,,,,,,,,,,,,").unwrap();
        let full = SudokuGrid::parse("4;1,2,3,4,3,4,1,2,2,3,1,4,4,1,3,2")
            .unwrap();

        assert_subset_relation(&empty, &empty, true, true);
        assert_subset_relation(&empty, &non_empty, true, false);
        assert_subset_relation(&empty, &full, true, false);
    }

    #[test]
    fn true_subset() {
        let g1 = SudokuGrid::parse("4;1,,3,,2,,,,4,,4,3,,,,2").unwrap();
        let g2 = SudokuGrid::parse("4;1,2,3,,2,,3,,4,,4,3,,,1,2").unwrap();
        assert_subset_relation(&g1, &g2, true, false);
    }

    #[test]
    fn unrelated_grids_not_subsets() {
        // g1 and g2 differ in the third digit (3 in g1, 4 in g2)
        let g1 = SudokuGrid::parse("4;1,,3,,2,,,,4,,4,3,,,,2").unwrap();
        let g2 = SudokuGrid::parse("4;1,2,4,,2,,3,,4,,4,3,,,1,2").unwrap();
        assert_subset_relation(&g1, &g2, false, false);
    }

    #[test]
    fn display_small_grid() {
        let grid = SudokuGrid::parse("4;1, ,2, , ,3, ,4, , , ,3, ,1, ,2")
            .unwrap();
        let expected =
            "╔═══╤═══╦═══╤═══╗\n\
             ║ 1 │   ║ 2 │   ║\n\
             ╟───┼───╫───┼───╢\n\
             ║   │ 3 ║   │ 4 ║\n\
             ╠═══╪═══╬═══╪═══╣\n\
             ║   │   ║ 3 │   ║\n\
             ╟───┼───╫───┼───╢\n\
             ║   │ 1 ║   │ 2 ║\n\
             ╚═══╧═══╩═══╧═══╝";
        assert_eq!(expected, format!("{}", grid));
    }

    #[test]
    fn grid_serde_round_trip() {
        let grid = SudokuGrid::parse("4;1,,3,2,4,,,,,,,,,,1,").unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let deserialized: SudokuGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, deserialized);
    }
}
