//! Concrete puzzle families implementing [`Puzzle`](crate::Puzzle).

pub mod peg_solitaire;
pub mod sliding_tile;
pub mod sudoku;
pub mod word_ladder;

pub use peg_solitaire::{Cell, PegSolitairePuzzle};
pub use sliding_tile::SlidingTilePuzzle;
pub use sudoku::SudokuPuzzle;
pub use word_ladder::WordLadderPuzzle;

use crate::error::PuzzleError;

/// Orthogonal direction on a row-major grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Row and column offset of one step
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The neighbouring cell of `(row, col)`, if it lies inside a
    /// `rows` × `cols` grid.
    pub fn step(
        self,
        (row, col): (usize, usize),
        (rows, cols): (usize, usize),
    ) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        (row < rows && col < cols).then_some((row, col))
    }
}

/// Dimensions of a non-empty rectangular grid.
pub(crate) fn grid_dimensions<T>(rows: &[Vec<T>]) -> Result<(usize, usize), PuzzleError> {
    let width = rows.first().map_or(0, Vec::len);
    if width == 0 {
        return Err(PuzzleError::EmptyGrid);
    }
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != width {
            return Err(PuzzleError::RaggedRow {
                row,
                expected: width,
                actual: cells.len(),
            });
        }
    }
    Ok((rows.len(), width))
}
