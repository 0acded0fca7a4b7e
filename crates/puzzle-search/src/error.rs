//! Construction-time validation errors for the shipped puzzle variants.
//!
//! The search engine itself never fails: it either finds a path or reports
//! that none exists. Only building a puzzle from untrusted input can go wrong.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Grid must have at least one row and one column")]
    EmptyGrid,
    #[error("Grid is not rectangular: row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Start and target grids differ in size: {from:?} vs {to:?}")]
    DimensionMismatch {
        from: (usize, usize),
        to: (usize, usize),
    },
    #[error("Expected exactly one blank cell, found {0}")]
    BlankCount(usize),
    #[error("Unknown marker {marker:?} at row {row}, column {col}")]
    UnknownMarker { marker: char, row: usize, col: usize },
    #[error("Words must be non-empty lowercase ASCII, got {0:?}")]
    InvalidWord(String),
    #[error("Start word {from:?} and target word {to:?} have different lengths")]
    WordLengthMismatch { from: String, to: String },
    #[error("Sudoku side length {0} is not a perfect square")]
    NotPerfectSquare(usize),
    #[error("Expected {expected} distinct symbols, got {actual}")]
    SymbolCount { expected: usize, actual: usize },
}
