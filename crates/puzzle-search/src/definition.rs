//! JSON descriptions of the shipped puzzle families.
//!
//! A definition is untrusted input: [`PuzzleDefinition::build`] runs the
//! variant's validation and hands back a ready-to-search puzzle.

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;
use crate::variants::{PegSolitairePuzzle, SlidingTilePuzzle, SudokuPuzzle, WordLadderPuzzle};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PuzzleDefinition {
    SlidingTile {
        from: Vec<Vec<String>>,
        to: Vec<Vec<String>>,
    },
    PegSolitaire {
        board: Vec<String>,
    },
    WordLadder {
        from: String,
        to: String,
        dictionary: Vec<String>,
    },
    Sudoku {
        grid: Vec<String>,
        symbols: String,
    },
}

/// A validated puzzle of any shipped family
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyPuzzle {
    SlidingTile(SlidingTilePuzzle),
    PegSolitaire(PegSolitairePuzzle),
    WordLadder(WordLadderPuzzle),
    Sudoku(SudokuPuzzle),
}

impl PuzzleDefinition {
    pub fn build(&self) -> Result<AnyPuzzle, PuzzleError> {
        Ok(match self {
            PuzzleDefinition::SlidingTile { from, to } => {
                AnyPuzzle::SlidingTile(SlidingTilePuzzle::new(from.clone(), to.clone())?)
            }
            PuzzleDefinition::PegSolitaire { board } => {
                AnyPuzzle::PegSolitaire(PegSolitairePuzzle::new(board)?)
            }
            PuzzleDefinition::WordLadder {
                from,
                to,
                dictionary,
            } => AnyPuzzle::WordLadder(WordLadderPuzzle::new(
                from,
                to,
                dictionary.iter().cloned(),
            )?),
            PuzzleDefinition::Sudoku { grid, symbols } => {
                AnyPuzzle::Sudoku(SudokuPuzzle::new(grid, symbols.chars())?)
            }
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PuzzleDefinition::SlidingTile { .. } => "sliding_tile",
            PuzzleDefinition::PegSolitaire { .. } => "peg_solitaire",
            PuzzleDefinition::WordLadder { .. } => "word_ladder",
            PuzzleDefinition::Sudoku { .. } => "sudoku",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Puzzle;

    #[test]
    fn test_parse_sliding_tile() {
        let json = r#"{
            "kind": "sliding_tile",
            "from": [["1", "2", "3"], ["4", "*", "5"]],
            "to": [["1", "2", "3"], ["4", "5", "*"]]
        }"#;

        let definition: PuzzleDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(definition.kind(), "sliding_tile");

        let AnyPuzzle::SlidingTile(puzzle) = definition.build().unwrap() else {
            panic!("expected a sliding tile puzzle");
        };
        assert_eq!(puzzle.blank(), (1, 1));
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn test_parse_word_ladder() {
        let json = r#"{"kind": "word_ladder", "from": "hot", "to": "hot", "dictionary": ["hit", "hot", "hat"]}"#;

        let definition: PuzzleDefinition = serde_json::from_str(json).unwrap();
        let AnyPuzzle::WordLadder(puzzle) = definition.build().unwrap() else {
            panic!("expected a word ladder");
        };
        assert!(puzzle.is_solved());
    }

    #[test]
    fn test_build_reports_validation_errors() {
        let json = r#"{"kind": "peg_solitaire", "board": ["*.*", "**"]}"#;
        let definition: PuzzleDefinition = serde_json::from_str(json).unwrap();

        assert_eq!(
            definition.build().unwrap_err(),
            PuzzleError::RaggedRow {
                row: 1,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_sudoku_round_trips_through_json() {
        let definition = PuzzleDefinition::Sudoku {
            grid: vec!["*".to_string()],
            symbols: "1".to_string(),
        };
        let json = serde_json::to_string(&definition).unwrap();
        assert!(json.contains(r#""kind":"sudoku""#));

        let parsed: PuzzleDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, definition);
        assert!(matches!(parsed.build(), Ok(AnyPuzzle::Sudoku(_))));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let json = r#"{"kind": "rubiks_cube"}"#;
        assert!(serde_json::from_str::<PuzzleDefinition>(json).is_err());
    }
}
