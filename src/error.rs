//! This module contains some error and result definitions used in this crate.

use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html) and during puzzle generation. This does not
/// exclude errors that occur when parsing grids, see
/// [SudokuParseError](enum.SudokuParseError.html) for that.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the width specified for a created grid is invalid. This
    /// is the case if it is zero or has no integer square root, since the
    /// grid could not be divided into square boxes.
    InvalidSize,

    /// Indicates that some number is invalid for the width of the grid in
    /// question. This is the case if it is less than 1 or greater than the
    /// width.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the grid in question. This is the case if they are greater than or
    /// equal to the width.
    OutOfBounds,

    /// Indicates that a difficulty level was requested by a name that is not
    /// contained in the standard level table. The offending name is wrapped
    /// in this instance.
    UnknownLevel(String),

    /// An error that is raised when every generation attempt failed, that is,
    /// the seed/load, solve, or reduce step failed in all of the permitted
    /// retries.
    GenerationFailed
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a `SudokuGrid`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. The code should have two parts: width and
    /// cells (separated by ';'), so if the code does not contain exactly one
    /// semicolon, this error will be returned.
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the square of the width.
    WrongNumberOfCells,

    /// Indicates that the provided width is invalid (i.e. zero or not a
    /// square number).
    InvalidSize,

    /// Indicates that one of the numbers (width or cell content) could not be
    /// parsed.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more than
    /// the grid width).
    InvalidNumber
}

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

/// An enumeration of the errors that may occur when encoding a puzzle line
/// into the binary dataset format (see the [dataset](../dataset/index.html)
/// module).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DatasetError {

    /// Indicates that an input line does not contain exactly one character
    /// per cell of the grid.
    WrongLineLength,

    /// Indicates that an input line contains a character that is not a digit.
    InvalidCharacter,

    /// Indicates that an input line contains more given cells than fit into
    /// one fixed-size record.
    TooManyGivens
}

/// Syntactic sugar for `Result<V, DatasetError>`.
pub type DatasetResult<V> = Result<V, DatasetError>;
