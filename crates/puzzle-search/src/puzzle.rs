//! The capability every searchable puzzle provides.
//!
//! A puzzle value is one immutable snapshot of a problem instance. The
//! search engine only ever asks three questions of it: is it solved, which
//! states are one move away, and which key identifies it for deduplication.

use std::hash::Hash;

pub trait Puzzle: Sized {
    /// Identifies states that count as the same node during one search.
    type Key: Eq + Hash;

    /// Whether this exact state is a goal state.
    fn is_solved(&self) -> bool;

    /// Every state reachable by exactly one legal move, freshly constructed.
    ///
    /// The order must be deterministic for a given state: depth-first search
    /// explores the first extension before its siblings.
    fn extensions(&self) -> Vec<Self>;

    fn canonical_key(&self) -> Self::Key;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Small synthetic puzzles shared by the engine tests.

    use std::cell::Cell;
    use std::rc::Rc;

    use super::Puzzle;

    /// A walk on an explicit directed graph of `u32` vertices.
    #[derive(Debug, Clone)]
    pub struct GraphWalk {
        pub at: u32,
        pub goal: u32,
        pub edges: Rc<Vec<(u32, u32)>>,
        pub expansions: Rc<Cell<usize>>,
    }

    impl GraphWalk {
        pub fn new(start: u32, goal: u32, edges: &[(u32, u32)]) -> Self {
            Self {
                at: start,
                goal,
                edges: Rc::new(edges.to_vec()),
                expansions: Rc::new(Cell::new(0)),
            }
        }
    }

    impl PartialEq for GraphWalk {
        fn eq(&self, other: &Self) -> bool {
            self.at == other.at && self.goal == other.goal && self.edges == other.edges
        }
    }

    impl Puzzle for GraphWalk {
        type Key = u32;

        fn is_solved(&self) -> bool {
            self.at == self.goal
        }

        fn extensions(&self) -> Vec<Self> {
            self.expansions.set(self.expansions.get() + 1);
            self.edges
                .iter()
                .filter(|(from, _)| *from == self.at)
                .map(|&(_, to)| Self {
                    at: to,
                    ..self.clone()
                })
                .collect()
        }

        fn canonical_key(&self) -> u32 {
            self.at
        }
    }

    /// A solved state that must never be expanded.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AlreadySolved;

    impl Puzzle for AlreadySolved {
        type Key = ();

        fn is_solved(&self) -> bool {
            true
        }

        fn extensions(&self) -> Vec<Self> {
            panic!("a solved start state must not be expanded");
        }

        fn canonical_key(&self) {}
    }
}
