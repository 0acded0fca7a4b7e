//! Word ladders: change one letter at a time, every step a dictionary word.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::error::PuzzleError;
use crate::puzzle::Puzzle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordLadderPuzzle {
    word: String,
    target: String,
    #[serde(skip)]
    dictionary: Arc<HashSet<String>>,
}

impl WordLadderPuzzle {
    /// Build a ladder from `from` to `to`.
    ///
    /// Only dictionary words of the same length as `from` can ever be
    /// reached, so the rest are dropped up front.
    pub fn new<I, W>(from: &str, to: &str, dictionary: I) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let length = from.len();
        let dictionary: HashSet<String> = dictionary
            .into_iter()
            .map(Into::into)
            .filter(|word| word.len() == length)
            .collect();
        Self::with_dictionary(from, to, Arc::new(dictionary))
    }

    /// Build a ladder sharing an already loaded dictionary.
    pub fn with_dictionary(
        from: &str,
        to: &str,
        dictionary: Arc<HashSet<String>>,
    ) -> Result<Self, PuzzleError> {
        for word in [from, to] {
            if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(PuzzleError::InvalidWord(word.to_string()));
            }
        }
        if from.len() != to.len() {
            return Err(PuzzleError::WordLengthMismatch {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        Ok(Self {
            word: from.to_string(),
            target: to.to_string(),
            dictionary,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    fn step_to(&self, word: String) -> Self {
        Self {
            word,
            target: self.target.clone(),
            dictionary: Arc::clone(&self.dictionary),
        }
    }
}

impl Puzzle for WordLadderPuzzle {
    type Key = String;

    fn is_solved(&self) -> bool {
        self.word == self.target
    }

    fn extensions(&self) -> Vec<Self> {
        let mut extensions = Vec::new();
        let mut candidate = self.word.clone().into_bytes();

        for i in 0..candidate.len() {
            let original = candidate[i];
            for letter in b'a'..=b'z' {
                if letter == original {
                    continue;
                }
                candidate[i] = letter;
                // Lowercase ASCII in, lowercase ASCII out
                if let Ok(word) = std::str::from_utf8(&candidate) {
                    if self.dictionary.contains(word) {
                        extensions.push(self.step_to(word.to_string()));
                    }
                }
            }
            candidate[i] = original;
        }

        extensions
    }

    fn canonical_key(&self) -> Self::Key {
        self.word.clone()
    }
}
