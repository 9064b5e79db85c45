//! The node of a coverage trie.

/// A node of the coverage trie. Each node stands for the address range of the bit path that leads
/// to it from the root.
///
/// A [`Node::Branch`] exclusively owns both of its children, so the whole trie is a single owned
/// tree without sharing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Node {
    /// No address in this range is covered.
    #[default]
    Empty,
    /// Every address in this range is covered.
    Full,
    /// Covered addresses are split between the lower half (`0` bit, left) and the upper half
    /// (`1` bit, right).
    Branch(Box<Node>, Box<Node>),
}

impl Node {
    /// Create a new branch node from its two children.
    pub fn branch(left: Node, right: Node) -> Self {
        Node::Branch(Box::new(left), Box::new(right))
    }

    /// Join two children into their parent, collapsing two empty or two full children into a
    /// single leaf.
    pub(crate) fn join(left: Node, right: Node) -> Self {
        match (left, right) {
            (Node::Empty, Node::Empty) => Node::Empty,
            (Node::Full, Node::Full) => Node::Full,
            (left, right) => Node::branch(left, right),
        }
    }

    /// Returns `true` for [`Node::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Returns `true` for [`Node::Full`].
    pub fn is_full(&self) -> bool {
        matches!(self, Node::Full)
    }

    /// Get the child in the given direction, or `None` if this is not a branch.
    pub fn child(&self, right: bool) -> Option<&Node> {
        match self {
            Node::Branch(left, _) if !right => Some(left.as_ref()),
            Node::Branch(_, r) => Some(r.as_ref()),
            _ => None,
        }
    }

    /// Returns `true` if the branch has no covered address at all. Such a branch never results
    /// from building, optimizing or inverting a trie, but can be constructed by hand.
    pub(crate) fn covers_nothing(&self) -> bool {
        match self {
            Node::Empty => true,
            Node::Full => false,
            Node::Branch(left, right) => left.covers_nothing() && right.covers_nothing(),
        }
    }

    /// Insert the remaining bits of a prefix below this node. Returns `false` if the prefix was
    /// already covered by a full node, i.e., if nothing changed.
    pub(crate) fn insert<I>(&mut self, mut bits: I) -> bool
    where
        I: Iterator<Item = bool>,
    {
        let Some(bit) = bits.next() else {
            // the prefix ends here and absorbs everything below.
            let changed = !self.is_full();
            *self = Node::Full;
            return changed;
        };
        if self.is_full() {
            return false;
        }
        if self.is_empty() {
            *self = Node::branch(Node::Empty, Node::Empty);
        }
        match self {
            Node::Branch(left, right) => {
                let child = if bit { right } else { left };
                child.insert(bits)
            }
            _ => false,
        }
    }
}

/// Counters describing the shape of a trie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Total number of nodes, including empty ones.
    pub nodes: usize,
    /// Number of branch nodes.
    pub branches: usize,
    /// Number of full leaves, i.e., the number of networks the trie enumerates.
    pub full: usize,
    /// Deepest level reached (the root has depth 0).
    pub depth: usize,
}

impl Stats {
    pub(crate) fn of(node: &Node) -> Self {
        let mut stats = Stats::default();
        let mut stack = vec![(node, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            stats.nodes += 1;
            stats.depth = stats.depth.max(depth);
            match node {
                Node::Empty => {}
                Node::Full => stats.full += 1,
                Node::Branch(left, right) => {
                    stats.branches += 1;
                    stack.push((right.as_ref(), depth + 1));
                    stack.push((left.as_ref(), depth + 1));
                }
            }
        }
        stats
    }
}
