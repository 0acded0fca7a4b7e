//! Peg solitaire on a rectangular board.
//!
//! Boards are written one string per row: `*` is a peg, `.` an empty hole and
//! `#` a position that is not part of the board.

use serde::{Serialize, Serializer};

use super::{grid_dimensions, Direction};
use crate::error::PuzzleError;
use crate::puzzle::Puzzle;

/// Directions a peg may arrive from, checked for every empty hole
const JUMP_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Peg,
    Empty,
    Unused,
}

impl Cell {
    pub fn from_marker(marker: char) -> Option<Cell> {
        match marker {
            '*' => Some(Cell::Peg),
            '.' => Some(Cell::Empty),
            '#' => Some(Cell::Unused),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Cell::Peg => '*',
            Cell::Empty => '.',
            Cell::Unused => '#',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PegSolitairePuzzle {
    board: Vec<Vec<Cell>>,
}

impl PegSolitairePuzzle {
    /// Parse a board from marker rows.
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self, PuzzleError> {
        let mut board = Vec::with_capacity(rows.len());
        for (row, markers) in rows.iter().enumerate() {
            let cells = markers
                .as_ref()
                .chars()
                .enumerate()
                .map(|(col, marker)| {
                    Cell::from_marker(marker)
                        .ok_or(PuzzleError::UnknownMarker { marker, row, col })
                })
                .collect::<Result<Vec<Cell>, PuzzleError>>()?;
            board.push(cells);
        }
        Self::from_cells(board)
    }

    pub fn from_cells(board: Vec<Vec<Cell>>) -> Result<Self, PuzzleError> {
        grid_dimensions(&board)?;
        Ok(Self { board })
    }

    pub fn board(&self) -> &[Vec<Cell>] {
        &self.board
    }

    pub fn peg_count(&self) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Peg)
            .count()
    }

    /// Board rendered back into marker rows
    pub fn rows(&self) -> Vec<String> {
        self.board
            .iter()
            .map(|row| row.iter().map(|cell| cell.marker()).collect())
            .collect()
    }

    fn cell(&self, (row, col): (usize, usize)) -> Cell {
        self.board[row][col]
    }

    fn jump(&self, from: (usize, usize), over: (usize, usize), to: (usize, usize)) -> Self {
        let mut board = self.board.clone();
        board[from.0][from.1] = Cell::Empty;
        board[over.0][over.1] = Cell::Empty;
        board[to.0][to.1] = Cell::Peg;
        Self { board }
    }
}

impl Puzzle for PegSolitairePuzzle {
    type Key = Vec<Vec<Cell>>;

    fn is_solved(&self) -> bool {
        self.peg_count() == 1
    }

    fn extensions(&self) -> Vec<Self> {
        let dims = (self.board.len(), self.board[0].len());
        let mut extensions = Vec::new();

        for (row, cells) in self.board.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell != Cell::Empty {
                    continue;
                }
                let hole = (row, col);
                for direction in JUMP_ORDER {
                    let Some(over) = direction.step(hole, dims) else {
                        continue;
                    };
                    let Some(from) = direction.step(over, dims) else {
                        continue;
                    };
                    if self.cell(over) == Cell::Peg && self.cell(from) == Cell::Peg {
                        extensions.push(self.jump(from, over, hole));
                    }
                }
            }
        }

        extensions
    }

    fn canonical_key(&self) -> Self::Key {
        self.board.clone()
    }
}

impl Serialize for PegSolitairePuzzle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}
