//! n×n sudoku-style logic grids, where n is a perfect square.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::error::PuzzleError;
use crate::puzzle::Puzzle;

/// Marker for a cell that has not been filled yet
pub const EMPTY: char = '*';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SudokuPuzzle {
    side: usize,
    box_side: usize,
    /// Row-major cells
    cells: Vec<char>,
    /// Allowed symbols, sorted
    symbols: Arc<[char]>,
}

impl SudokuPuzzle {
    pub fn new<S: AsRef<str>>(
        rows: &[S],
        symbols: impl IntoIterator<Item = char>,
    ) -> Result<Self, PuzzleError> {
        let side = rows.len();
        if side == 0 {
            return Err(PuzzleError::EmptyGrid);
        }
        let box_side = (1..=side).find(|n| n * n >= side).unwrap_or(side);
        if box_side * box_side != side {
            return Err(PuzzleError::NotPerfectSquare(side));
        }

        let symbols: BTreeSet<char> = symbols.into_iter().filter(|&c| c != EMPTY).collect();
        if symbols.len() != side {
            return Err(PuzzleError::SymbolCount {
                expected: side,
                actual: symbols.len(),
            });
        }

        let mut cells = Vec::with_capacity(side * side);
        for (row, markers) in rows.iter().enumerate() {
            let before = cells.len();
            for (col, marker) in markers.as_ref().chars().enumerate() {
                if marker != EMPTY && !symbols.contains(&marker) {
                    return Err(PuzzleError::UnknownMarker { marker, row, col });
                }
                cells.push(marker);
            }
            if cells.len() - before != side {
                return Err(PuzzleError::RaggedRow {
                    row,
                    expected: side,
                    actual: cells.len() - before,
                });
            }
        }

        Ok(Self {
            side,
            box_side,
            cells,
            symbols: symbols.into_iter().collect(),
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, row: usize, col: usize) -> char {
        self.cells[row * self.side + col]
    }

    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.side)
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Indices of the cells sharing a row, column or box with `index`,
    /// `index` itself included.
    fn peers(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let (row, col) = (index / self.side, index % self.side);
        let (box_row, box_col) = (
            row - row % self.box_side,
            col - col % self.box_side,
        );
        let side = self.side;
        let box_side = self.box_side;

        let in_row = (0..side).map(move |c| row * side + c);
        let in_col = (0..side).map(move |r| r * side + col);
        let in_box = (0..side).map(move |i| {
            (box_row + i / box_side) * side + box_col + i % box_side
        });
        in_row.chain(in_col).chain(in_box)
    }

    /// Every row, column and box as lists of cell indices.
    fn groups(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        let side = self.side;
        (0..side).flat_map(move |i| {
            let row: Vec<usize> = (0..side).map(|c| i * side + c).collect();
            let col: Vec<usize> = (0..side).map(|r| r * side + i).collect();
            let (box_row, box_col) = (
                (i / self.box_side) * self.box_side,
                (i % self.box_side) * self.box_side,
            );
            let boxed: Vec<usize> = (0..side)
                .map(|j| (box_row + j / self.box_side) * side + box_col + j % self.box_side)
                .collect();
            [row, col, boxed]
        })
    }
}

impl Puzzle for SudokuPuzzle {
    type Key = Vec<char>;

    fn is_solved(&self) -> bool {
        !self.cells.contains(&EMPTY)
            && self.groups().all(|group| {
                group
                    .iter()
                    .map(|&i| self.cells[i])
                    .collect::<BTreeSet<char>>()
                    .len()
                    == self.side
            })
    }

    /// Fill the first empty cell with every symbol its row, column and box
    /// still allow.
    fn extensions(&self) -> Vec<Self> {
        let Some(index) = self.cells.iter().position(|&c| c == EMPTY) else {
            return Vec::new();
        };
        let taken: BTreeSet<char> = self.peers(index).map(|i| self.cells[i]).collect();

        self.symbols
            .iter()
            .filter(|&&symbol| !taken.contains(&symbol))
            .map(|&symbol| {
                let mut next = self.clone();
                next.cells[index] = symbol;
                next
            })
            .collect()
    }

    fn canonical_key(&self) -> Self::Key {
        self.cells.clone()
    }
}

impl Serialize for SudokuPuzzle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}
