//! This module defines the difficulty levels a puzzle can be generated at.
//!
//! A [Level] pairs a name with the number of given cells the
//! [Reducer](crate::generator::Reducer) aims to leave in the problem grid.
//! The four standard levels are kept in an immutable table and can be looked
//! up by name with [Level::by_name]. Custom levels can be created with
//! [Level::new].

use crate::error::{SudokuError, SudokuResult};

use serde::{Deserialize, Serialize};

/// The table of standard difficulty levels. The special Extreme level is not
/// realized by reduction but by a lookup in the bundled dataset of 17-given
/// puzzles (see the [dataset](crate::dataset) module).
const STANDARD: [(&str, usize); 4] = [
    ("Easy", 38),
    ("Medium", 32),
    ("Hard", 21),
    ("Extreme", 17)
];

const EXTREME_NAME: &str = "Extreme";

/// A difficulty level for generated puzzles. It consists of a name, which is
/// unique among the standard levels, and a target number of given cells the
/// problem grid should be reduced to. Levels with fewer givens are, on
/// average, harder.
///
/// Level names are compared case-insensitively, both by [Level::by_name] and
/// by the `PartialEq` implementation.
#[derive(Clone, Debug, Eq, Serialize, Deserialize)]
pub struct Level {
    name: String,
    initial_givens: usize
}

impl PartialEq for Level {
    fn eq(&self, other: &Level) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl Level {

    /// Creates a new level with the given name and target number of given
    /// cells. This can be used for custom difficulties; the standard levels
    /// are available via [Level::by_name] and the associated constructors
    /// ([Level::easy] etc.).
    pub fn new(name: impl Into<String>, initial_givens: usize) -> Level {
        Level {
            name: name.into(),
            initial_givens
        }
    }

    fn from_entry(entry: (&str, usize)) -> Level {
        let (name, initial_givens) = entry;
        Level::new(name, initial_givens)
    }

    /// Looks up a standard level by its name, ignoring case.
    ///
    /// # Errors
    ///
    /// `SudokuError::UnknownLevel` if no standard level has the given name.
    pub fn by_name(name: &str) -> SudokuResult<Level> {
        STANDARD.iter()
            .find(|(level_name, _)| level_name.eq_ignore_ascii_case(name))
            .map(|&entry| Level::from_entry(entry))
            .ok_or_else(|| SudokuError::UnknownLevel(String::from(name)))
    }

    /// Returns all standard levels in order of decreasing given count.
    pub fn standard() -> Vec<Level> {
        STANDARD.iter()
            .map(|&entry| Level::from_entry(entry))
            .collect()
    }

    /// The standard Easy level (38 givens).
    pub fn easy() -> Level {
        Level::from_entry(STANDARD[0])
    }

    /// The standard Medium level (32 givens).
    pub fn medium() -> Level {
        Level::from_entry(STANDARD[1])
    }

    /// The standard Hard level (21 givens).
    pub fn hard() -> Level {
        Level::from_entry(STANDARD[2])
    }

    /// The special Extreme level (17 givens, served from the dataset).
    pub fn extreme() -> Level {
        Level::from_entry(STANDARD[3])
    }

    /// Gets the name of this level.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the number of given cells the reducer aims to leave in the
    /// problem grid. The actual count of a generated puzzle may differ, see
    /// [Puzzle::actual_initial](crate::Puzzle::actual_initial).
    pub fn initial_givens(&self) -> usize {
        self.initial_givens
    }

    /// Indicates whether this is the special Extreme level, whose puzzles are
    /// loaded from the dataset instead of being reduced.
    pub fn is_extreme(&self) -> bool {
        self.name.eq_ignore_ascii_case(EXTREME_NAME)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(Ok(Level::easy()), Level::by_name("easy"));
        assert_eq!(Ok(Level::medium()), Level::by_name("MEDIUM"));
        assert_eq!(Ok(Level::hard()), Level::by_name("hArD"));
        assert_eq!(Ok(Level::extreme()), Level::by_name("Extreme"));
    }

    #[test]
    fn lookup_unknown_name_fails() {
        assert_eq!(Err(SudokuError::UnknownLevel(String::from("Impossible"))),
            Level::by_name("Impossible"));
    }

    #[test]
    fn standard_names_are_distinct() {
        let levels = Level::standard();

        for (i, level) in levels.iter().enumerate() {
            for other in levels.iter().skip(i + 1) {
                assert!(level != other,
                    "Standard levels {} and {} are considered equal.",
                    level.name(), other.name());
            }
        }
    }

    #[test]
    fn equality_ignores_case_and_givens() {
        assert_eq!(Level::new("easy", 40), Level::easy());
        assert_ne!(Level::new("Trivial", 38), Level::easy());
    }

    #[test]
    fn extreme_is_detected() {
        assert!(Level::extreme().is_extreme());
        assert!(Level::new("eXtReMe", 17).is_extreme());
        assert!(!Level::hard().is_extreme());
    }

    #[test]
    fn standard_given_counts() {
        assert_eq!(38, Level::easy().initial_givens());
        assert_eq!(32, Level::medium().initial_givens());
        assert_eq!(21, Level::hard().initial_givens());
        assert_eq!(17, Level::extreme().initial_givens());
    }
}
