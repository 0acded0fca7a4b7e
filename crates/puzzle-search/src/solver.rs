//! Depth-first and breadth-first search over a puzzle's transition graph.
//!
//! Both strategies share one loop: a frontier of pending nodes, a seen-set of
//! canonical keys scoped to the call, and a [`SearchTree`] recording parent
//! links so the winning path can be rebuilt by walking back to the root.
//! They differ only in which end of the frontier the next node comes from.

use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::node::{NodeId, SearchTree, Solution};
use crate::puzzle::Puzzle;

/// Traversal order of the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Explore the first branch fully before its siblings.
    DepthFirst,
    /// Explore level by level; the first solution found is a shortest one.
    BreadthFirst,
}

/// Limits on a single search. The default is unbounded.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Maximum number of nodes the search may create
    pub max_nodes: Option<usize>,
    /// Maximum wall-clock time before giving up
    pub timeout: Option<Duration>,
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    SolutionFound,
    /// Every reachable state was explored without reaching a goal.
    Exhausted,
    /// A [`SearchConfig`] limit stopped the search early.
    BudgetExceeded,
}

/// Result of a bounded search
#[derive(Debug, Clone)]
pub struct SearchReport<P> {
    pub solution: Option<Solution<P>>,
    pub status: SearchStatus,
    /// Nodes created, the root included
    pub nodes_created: usize,
    /// States whose extensions were generated
    pub states_expanded: usize,
    pub time_elapsed_ms: u64,
}

impl<P> SearchReport<P> {
    pub fn is_solved(&self) -> bool {
        self.status == SearchStatus::SolutionFound
    }
}

/// Find a solution by depth-first search.
///
/// Returns the first solution in extension order, which is not necessarily
/// the shortest, or `None` if no solved state is reachable.
pub fn depth_first_solve<P: Puzzle>(puzzle: P) -> Option<Solution<P>> {
    solve(puzzle, Strategy::DepthFirst, &SearchConfig::default()).solution
}

/// Find a shortest solution by breadth-first search, or `None` if no solved
/// state is reachable.
pub fn breadth_first_solve<P: Puzzle>(puzzle: P) -> Option<Solution<P>> {
    solve(puzzle, Strategy::BreadthFirst, &SearchConfig::default()).solution
}

/// Run one search with the given strategy and limits.
pub fn solve<P: Puzzle>(puzzle: P, strategy: Strategy, config: &SearchConfig) -> SearchReport<P> {
    let start_time = Instant::now();
    let deadline = config.timeout.map(|timeout| start_time + timeout);

    let mut seen: HashSet<P::Key> = HashSet::new();
    seen.insert(puzzle.canonical_key());

    let mut tree = SearchTree::with_root(puzzle);
    let mut frontier: VecDeque<NodeId> = VecDeque::new();
    frontier.push_back(tree.root());

    let mut states_expanded: usize = 0;

    debug!("Starting {:?} search", strategy);

    loop {
        let next = match strategy {
            Strategy::DepthFirst => frontier.pop_back(),
            Strategy::BreadthFirst => frontier.pop_front(),
        };
        let Some(current) = next else {
            break;
        };

        if tree.puzzle(current).is_solved() {
            let nodes_created = tree.node_count();
            let solution = Solution::new(tree, current);
            info!(
                "{:?} search found a {}-move solution after creating {} nodes",
                strategy,
                solution.transitions(),
                nodes_created
            );
            return SearchReport {
                solution: Some(solution),
                status: SearchStatus::SolutionFound,
                nodes_created,
                states_expanded,
                time_elapsed_ms: start_time.elapsed().as_millis() as u64,
            };
        }

        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            debug!("{:?} search ran out of time", strategy);
            return budget_exceeded(&tree, states_expanded, start_time);
        }

        states_expanded += 1;
        let extensions = tree.puzzle(current).extensions();

        for extension in extensions {
            // Marked at discovery so no state is queued twice from different parents
            if seen.insert(extension.canonical_key()) {
                if config.max_nodes.is_some_and(|max| tree.node_count() >= max) {
                    debug!("{:?} search reached its node limit", strategy);
                    return budget_exceeded(&tree, states_expanded, start_time);
                }
                tree.add_child(current, extension);
            }
        }

        let children = tree.node(current).children();
        trace!("Expanded node {} into {} new children", current, children.len());

        match strategy {
            // Reversed so the first extension is popped first
            Strategy::DepthFirst => frontier.extend(children.iter().rev()),
            Strategy::BreadthFirst => frontier.extend(children.iter()),
        }
    }

    debug!(
        "{:?} search exhausted {} states without a solution",
        strategy,
        tree.node_count()
    );
    SearchReport {
        solution: None,
        status: SearchStatus::Exhausted,
        nodes_created: tree.node_count(),
        states_expanded,
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
    }
}

fn budget_exceeded<P>(
    tree: &SearchTree<P>,
    states_expanded: usize,
    start_time: Instant,
) -> SearchReport<P> {
    debug!(
        "Stopped after creating {} nodes and expanding {}",
        tree.node_count(),
        states_expanded
    );
    SearchReport {
        solution: None,
        status: SearchStatus::BudgetExceeded,
        nodes_created: tree.node_count(),
        states_expanded,
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
    }
}
