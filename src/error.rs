//! Error types for the 8-puzzle solver crate.

use thiserror::Error;

/// Main error type for the solver crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The supplied grid is not a permutation of {0..=8}; rejected before any
    /// search begins.
    #[error("invalid start state: {reason}")]
    InvalidStartState { reason: String },

    /// A board string had the wrong shape.
    #[error("invalid board format: expected {expected} {unit}, found {found}")]
    InvalidBoardShape {
        expected: usize,
        found: usize,
        unit: &'static str,
    },

    /// A board string contained a character that is not a tile label.
    #[error("unrecognized character '{character}' in row {row} col {col}")]
    UnrecognizedCharacter {
        character: char,
        row: usize,
        col: usize,
    },

    /// The frontier was exhausted without reaching the goal. A normal terminal
    /// outcome for the search, not a crash.
    #[error("no solution found: search space exhausted without reaching the goal")]
    NoSolution,
}
