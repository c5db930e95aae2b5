//! This module implements the binary dataset of pre-verified Extreme
//! puzzles, together with the offline encoder that produces it.
//!
//! Minimal 9x9 puzzles with 17 givens are far too expensive to find by
//! reduction, so the Extreme level is served from a prepared collection
//! instead. The collection is a flat sequence of fixed-size records of
//! [RECORD_SIZE] bytes, each holding one puzzle as a list of
//! `(row, column, value)` triples in row-major order. Every component of a
//! triple fits in a nibble, and two nibbles are packed per byte, high nibble
//! first. Unused trailing nibbles are zero.
//!
//! A copy of the collection is compiled into the library, so
//! [ExtremeDataset::bundled] works without any file access. External files
//! in the same format, for example produced by [encode_file] or the
//! `sudokugen encode` command, can be read with [ExtremeDataset::open].

use crate::SudokuGrid;
use crate::error::{DatasetError, DatasetResult};

use rand::Rng;

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// The size of one puzzle record in bytes.
pub const RECORD_SIZE: usize = 26;

/// The grid width of the puzzles held by a dataset.
pub const RECORD_WIDTH: usize = 9;

const NIBBLES_PER_RECORD: usize = RECORD_SIZE * 2;

static BUNDLED: &[u8] = include_bytes!("../data/sudoku17.dat");

/// One puzzle loaded from an [ExtremeDataset].
#[derive(Clone, Debug)]
pub struct ExtremeRecord {

    /// The problem grid the record decoded to.
    pub grid: SudokuGrid,

    /// The number of givens placed in the grid.
    pub givens: usize
}

/// Decodes one fixed-size record into a puzzle grid.
///
/// The decoder walks all cells in row-major order and consumes the next
/// nibble triple whenever its row and column components match the current
/// cell. Triples with a value outside `[1, 9]` are consumed but place
/// nothing, so a corrupted or all-zero record yields a grid with fewer
/// givens rather than an error.
pub fn decode_record(record: &[u8; RECORD_SIZE]) -> ExtremeRecord {
    let mut nibbles = [0u8; NIBBLES_PER_RECORD];

    for (i, &byte) in record.iter().enumerate() {
        nibbles[2 * i] = byte >> 4;
        nibbles[2 * i + 1] = byte & 0xf;
    }

    let mut grid = SudokuGrid::new(RECORD_WIDTH).unwrap();
    let mut givens = 0;
    let mut next = 0;

    for row in 0..RECORD_WIDTH {
        for column in 0..RECORD_WIDTH {
            if next + 3 <= NIBBLES_PER_RECORD
                    && nibbles[next] as usize == row
                    && nibbles[next + 1] as usize == column {
                let value = nibbles[next + 2] as usize;
                next += 3;

                if value >= 1 && value <= RECORD_WIDTH {
                    grid.set_cell(column, row, value).unwrap();
                    givens += 1;
                }
            }
        }
    }

    ExtremeRecord {
        grid,
        givens
    }
}

/// Encodes one puzzle line into a fixed-size record.
///
/// The line must contain exactly one ASCII digit per cell of the grid in
/// row-major order, with `0` denoting an empty cell.
///
/// # Errors
///
/// * `DatasetError::WrongLineLength` if the line does not have exactly one
/// character per cell.
/// * `DatasetError::InvalidCharacter` if the line contains a character that
/// is not an ASCII digit.
/// * `DatasetError::TooManyGivens` if the givens do not fit into one record.
pub fn encode_record(line: &str) -> DatasetResult<[u8; RECORD_SIZE]> {
    if line.chars().count() != RECORD_WIDTH * RECORD_WIDTH {
        return Err(DatasetError::WrongLineLength);
    }

    let mut nibbles = [0u8; NIBBLES_PER_RECORD];
    let mut next = 0;

    for (i, c) in line.chars().enumerate() {
        let value = c.to_digit(10)
            .ok_or(DatasetError::InvalidCharacter)?;

        if value == 0 {
            continue;
        }

        if next + 3 > NIBBLES_PER_RECORD {
            return Err(DatasetError::TooManyGivens);
        }

        nibbles[next] = (i / RECORD_WIDTH) as u8;
        nibbles[next + 1] = (i % RECORD_WIDTH) as u8;
        nibbles[next + 2] = value as u8;
        next += 3;
    }

    let mut record = [0u8; RECORD_SIZE];

    for (i, byte) in record.iter_mut().enumerate() {
        *byte = (nibbles[2 * i] << 4) | nibbles[2 * i + 1];
    }

    Ok(record)
}

/// Encodes a text file with one puzzle line per row into the binary record
/// format and appends the records to the output file, which is created if it
/// does not exist. Reading stops at the first empty line or at the end of
/// the input. Returns the number of records written.
///
/// # Errors
///
/// Any I/O error raised by reading or writing the files. Lines rejected by
/// [encode_record] are reported as an error of kind
/// `io::ErrorKind::InvalidData`.
pub fn encode_file(input: impl AsRef<Path>, output: impl AsRef<Path>)
        -> io::Result<usize> {
    let reader = BufReader::new(File::open(input)?);
    let mut writer = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output)?;
    let mut written = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end();

        if line.is_empty() {
            break;
        }

        let record = encode_record(line)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData,
                format!("invalid puzzle line: {:?}", e)))?;
        writer.write_all(&record)?;
        written += 1;
    }

    writer.flush()?;
    Ok(written)
}

#[derive(Clone, Debug)]
enum Source {
    Bundled(&'static [u8]),
    File {
        path: PathBuf,
        records: usize
    }
}

/// A read-only collection of pre-verified Extreme puzzles, backed either by
/// the bundled data compiled into the library or by an external file in the
/// same format.
#[derive(Clone, Debug)]
pub struct ExtremeDataset {
    source: Source
}

impl ExtremeDataset {

    /// Gets the dataset bundled with the library.
    pub fn bundled() -> ExtremeDataset {
        ExtremeDataset {
            source: Source::Bundled(BUNDLED)
        }
    }

    /// Opens an external dataset file. Only the record count is read at this
    /// point; individual records are read on demand by the load methods.
    ///
    /// # Errors
    ///
    /// Any I/O error raised while querying the file.
    pub fn open(path: impl AsRef<Path>) -> io::Result<ExtremeDataset> {
        let path = path.as_ref().to_path_buf();
        let len = std::fs::metadata(&path)?.len() as usize;

        Ok(ExtremeDataset {
            source: Source::File {
                path,
                records: len / RECORD_SIZE
            }
        })
    }

    /// Gets the number of records in this dataset.
    pub fn record_count(&self) -> usize {
        match &self.source {
            Source::Bundled(data) => data.len() / RECORD_SIZE,
            Source::File { records, .. } => *records
        }
    }

    fn read_record(&self, index: usize) -> io::Result<[u8; RECORD_SIZE]> {
        let mut record = [0u8; RECORD_SIZE];

        match &self.source {
            Source::Bundled(data) => {
                let start = index * RECORD_SIZE;

                if start + RECORD_SIZE > data.len() {
                    return Err(io::Error::new(io::ErrorKind::UnexpectedEof,
                        "record index out of range"));
                }

                record.copy_from_slice(&data[start..(start + RECORD_SIZE)]);
            },
            Source::File { path, .. } => {
                let mut file = File::open(path)?;
                file.seek(SeekFrom::Start((index * RECORD_SIZE) as u64))?;
                file.read_exact(&mut record)?;
            }
        }

        Ok(record)
    }

    /// Loads and decodes the record at the given index.
    ///
    /// # Errors
    ///
    /// Any I/O error raised while reading the record, including an
    /// out-of-range index.
    pub fn load_at(&self, index: usize) -> io::Result<ExtremeRecord> {
        Ok(decode_record(&self.read_record(index)?))
    }

    /// Loads a record chosen uniformly at random. Returns `None` if the
    /// dataset is empty or the record could not be read, in which case a
    /// warning is logged.
    pub fn load_random<R: Rng>(&self, rng: &mut R) -> Option<ExtremeRecord> {
        let records = self.record_count();

        if records == 0 {
            log::warn!("Attempted to load a puzzle from an empty dataset.");
            return None;
        }

        let index = rng.gen_range(0..records);

        match self.load_at(index) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Could not read dataset record {}: {}", index, e);
                None
            }
        }
    }
}
