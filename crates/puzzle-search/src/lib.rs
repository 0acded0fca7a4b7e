//! Generic solver for state-space puzzles.
//!
//! A puzzle implements [`Puzzle`]; the engine searches its implicit
//! transition graph depth-first or breadth-first and hands back the chain of
//! states from the start to a solved configuration, or nothing if no solved
//! state is reachable. Sliding tiles, peg solitaire, word ladders and sudoku
//! grids ship as ready-made variants.

pub mod definition;
pub mod error;
pub mod node;
pub mod puzzle;
pub mod solver;
pub mod variants;

// Re-export main types
pub use definition::{AnyPuzzle, PuzzleDefinition};
pub use error::PuzzleError;
pub use node::{NodeId, SearchNode, SearchTree, Solution};
pub use puzzle::Puzzle;
pub use solver::{
    breadth_first_solve, depth_first_solve, solve, SearchConfig, SearchReport, SearchStatus,
    Strategy,
};
pub use variants::{Cell, PegSolitairePuzzle, SlidingTilePuzzle, SudokuPuzzle, WordLadderPuzzle};
