//! Search nodes and the arena that owns them.
//!
//! Every node of one search lives in a [`SearchTree`]. Children are held as an
//! ordered list of [`NodeId`]s and the parent link is a plain index into the
//! same arena, so there is exactly one owner for each puzzle state.

use std::fmt;

use smallvec::SmallVec;

/// Handle to a node inside the [`SearchTree`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Most puzzles branch into a handful of states per move.
pub type Children = SmallVec<[NodeId; 4]>;

/// One explored puzzle state, the states explored from it, and its parent.
#[derive(Debug, Clone)]
pub struct SearchNode<P> {
    puzzle: P,
    children: Children,
    parent: Option<NodeId>,
}

impl<P> SearchNode<P> {
    pub fn new(
        puzzle: P,
        children: impl IntoIterator<Item = NodeId>,
        parent: Option<NodeId>,
    ) -> Self {
        Self {
            puzzle,
            children: children.into_iter().collect(),
            parent,
        }
    }

    pub fn puzzle(&self) -> &P {
        &self.puzzle
    }

    /// Children in the order they were explored.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Arena holding every node created during one search.
///
/// The root is always [`SearchTree::root`]; nodes are never removed, so every
/// id handed out stays valid for the lifetime of the tree.
#[derive(Debug, Clone)]
pub struct SearchTree<P> {
    nodes: Vec<SearchNode<P>>,
}

impl<P> SearchTree<P> {
    pub fn with_root(puzzle: P) -> Self {
        Self {
            nodes: vec![SearchNode::new(puzzle, [], None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Record `puzzle` as the next child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, puzzle: P) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode::new(puzzle, [], Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Look up a node. Ids from another tree are a caller bug and panic.
    pub fn node(&self, id: NodeId) -> &SearchNode<P> {
        &self.nodes[id.0]
    }

    pub fn puzzle(&self, id: NodeId) -> &P {
        &self.nodes[id.0].puzzle
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All nodes in creation order, root first.
    pub fn nodes(&self) -> impl Iterator<Item = &SearchNode<P>> {
        self.nodes.iter()
    }

    /// Number of transitions between the root and `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.node(parent).parent;
        }
        depth
    }

    /// Ids from the root down to `id`, found by walking parent links upward.
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            path.push(parent);
            current = self.node(parent).parent;
        }
        path.reverse();
        path
    }
}

/// One pending subtree comparison: the next left child to place and the next
/// right child to try it against.
struct Comparison {
    left: NodeId,
    right: NodeId,
    child: usize,
    candidate: usize,
    matched: Vec<bool>,
}

impl Comparison {
    fn new(left: NodeId, right: NodeId, width: usize) -> Self {
        Self {
            left,
            right,
            child: 0,
            candidate: 0,
            matched: vec![false; width],
        }
    }
}

impl<P: PartialEq> SearchTree<P> {
    fn shallow_eq(&self, a: NodeId, other: &SearchTree<P>, b: NodeId) -> bool {
        let (left, right) = (self.node(a), other.node(b));
        left.puzzle == right.puzzle && left.children.len() == right.children.len()
    }

    /// Structural equality of two subtrees: equal puzzles and the same
    /// multiset of child subtrees, in any order.
    ///
    /// Runs on an explicit stack, so trees of any depth can be compared.
    pub fn subtree_eq(&self, a: NodeId, other: &SearchTree<P>, b: NodeId) -> bool {
        if !self.shallow_eq(a, other, b) {
            return false;
        }

        let mut stack = vec![Comparison::new(a, b, self.node(a).children.len())];
        // Outcome of the comparison most recently popped off the stack
        let mut outcome: Option<bool> = None;

        while let Some(frame) = stack.last_mut() {
            let left = &self.node(frame.left).children;
            let right = &other.node(frame.right).children;

            match outcome.take() {
                Some(true) => {
                    frame.matched[frame.candidate] = true;
                    frame.child += 1;
                    frame.candidate = 0;
                }
                Some(false) => frame.candidate += 1,
                None => {}
            }

            if frame.child == left.len() {
                stack.pop();
                outcome = Some(true);
                continue;
            }
            while frame.candidate < right.len() && frame.matched[frame.candidate] {
                frame.candidate += 1;
            }
            if frame.candidate == right.len() {
                stack.pop();
                outcome = Some(false);
                continue;
            }

            let (l, r) = (left[frame.child], right[frame.candidate]);
            if self.shallow_eq(l, other, r) {
                stack.push(Comparison::new(l, r, self.node(l).children.len()));
            } else {
                outcome = Some(false);
            }
        }

        outcome == Some(true)
    }
}

impl<P: PartialEq> PartialEq for SearchTree<P> {
    fn eq(&self, other: &Self) -> bool {
        self.subtree_eq(self.root(), other, other.root())
    }
}

/// A solved search: the tree it explored and the chain from root to goal.
#[derive(Debug, Clone)]
pub struct Solution<P> {
    tree: SearchTree<P>,
    path: Vec<NodeId>,
}

impl<P> Solution<P> {
    pub(crate) fn new(tree: SearchTree<P>, goal: NodeId) -> Self {
        let path = tree.path_to(goal);
        Self { tree, path }
    }

    /// Number of nodes on the path, start and goal included.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of moves from start to goal.
    pub fn transitions(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    pub fn tree(&self) -> &SearchTree<P> {
        &self.tree
    }

    pub fn nodes(&self) -> impl Iterator<Item = &SearchNode<P>> {
        self.path.iter().map(|&id| self.tree.node(id))
    }

    pub fn puzzles(&self) -> impl Iterator<Item = &P> {
        self.nodes().map(SearchNode::puzzle)
    }

    pub fn start(&self) -> &P {
        self.tree.puzzle(self.tree.root())
    }

    pub fn goal(&self) -> &P {
        // The path always holds at least the root.
        self.tree.puzzle(self.path[self.path.len() - 1])
    }

    /// Consume the solution, keeping only the states along the path.
    pub fn into_puzzles(self) -> Vec<P> {
        let mut slots: Vec<Option<P>> = self
            .tree
            .nodes
            .into_iter()
            .map(|node| Some(node.puzzle))
            .collect();
        self.path
            .iter()
            .filter_map(|id| slots[id.0].take())
            .collect()
    }
}

impl<P: PartialEq> PartialEq for Solution<P> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.puzzles().eq(other.puzzles())
            && self.tree == other.tree
    }
}
