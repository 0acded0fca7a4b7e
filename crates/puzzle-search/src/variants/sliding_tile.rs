//! Sliding-tile grids such as the 8- and 15-puzzle, generalised to m×n.

use std::sync::Arc;

use serde::Serialize;

use super::{grid_dimensions, Direction};
use crate::error::PuzzleError;
use crate::puzzle::Puzzle;

/// Symbol marking the blank cell
pub const BLANK: &str = "*";

/// Order in which the blank is moved
const MOVE_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Down,
    Direction::Up,
];

/// An m×n grid of symbols with one blank, working towards a target layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlidingTilePuzzle {
    grid: Vec<Vec<String>>,
    #[serde(skip)]
    target: Arc<Vec<Vec<String>>>,
    #[serde(skip)]
    blank: (usize, usize),
}

impl SlidingTilePuzzle {
    pub fn new(from: Vec<Vec<String>>, to: Vec<Vec<String>>) -> Result<Self, PuzzleError> {
        let from_dims = grid_dimensions(&from)?;
        let to_dims = grid_dimensions(&to)?;
        if from_dims != to_dims {
            return Err(PuzzleError::DimensionMismatch {
                from: from_dims,
                to: to_dims,
            });
        }

        let blanks: Vec<(usize, usize)> = from
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.as_str() == BLANK)
                    .map(move |(col, _)| (row, col))
            })
            .collect();
        let &[blank] = blanks.as_slice() else {
            return Err(PuzzleError::BlankCount(blanks.len()));
        };

        Ok(Self {
            grid: from,
            target: Arc::new(to),
            blank,
        })
    }

    /// Convenience constructor from rows of single-character symbols.
    pub fn from_rows(from: &[&str], to: &[&str]) -> Result<Self, PuzzleError> {
        let split = |rows: &[&str]| -> Vec<Vec<String>> {
            rows.iter()
                .map(|row| row.chars().map(String::from).collect())
                .collect()
        };
        Self::new(split(from), split(to))
    }

    pub fn grid(&self) -> &[Vec<String>] {
        &self.grid
    }

    /// Position of the blank as `(row, col)`
    pub fn blank(&self) -> (usize, usize) {
        self.blank
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.grid.len(), self.grid[0].len())
    }

    /// Slide the tile at `from` into the blank.
    fn slide(&self, from: (usize, usize)) -> Self {
        let mut grid = self.grid.clone();
        let tile = std::mem::replace(&mut grid[from.0][from.1], BLANK.to_string());
        grid[self.blank.0][self.blank.1] = tile;
        Self {
            grid,
            target: Arc::clone(&self.target),
            blank: from,
        }
    }
}

impl Puzzle for SlidingTilePuzzle {
    type Key = Vec<Vec<String>>;

    fn is_solved(&self) -> bool {
        self.grid == *self.target
    }

    fn extensions(&self) -> Vec<Self> {
        let dims = self.dimensions();
        MOVE_ORDER
            .iter()
            .filter_map(|direction| direction.step(self.blank, dims))
            .map(|neighbour| self.slide(neighbour))
            .collect()
    }

    fn canonical_key(&self) -> Self::Key {
        self.grid.clone()
    }
}
