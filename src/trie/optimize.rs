//! Aggregation of sibling networks.

use log::debug;

use super::Trie;
use crate::Node;

impl Trie {
    /// Merge every pair of sibling networks that together cover their parent into the parent
    /// network. The trie is modified in place.
    ///
    /// After this call, the shape of the trie only depends on the set of covered addresses, and
    /// calling `optimize` again has no effect.
    ///
    /// ```
    /// # use ip_cover_trie::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut trie = Trie::build(["10.0.0.0/9".parse::<Bits>()?, "10.128.0.0/9".parse()?]);
    /// trie.optimize();
    /// assert_eq!(trie.cidrs().collect::<Vec<_>>(), vec!["10.0.0.0/8"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn optimize(&mut self) {
        let merged = self.root.optimize();
        debug!("merged {merged} pairs of sibling networks");
    }

    /// Same as [`Trie::optimize`], but takes and returns the trie by value.
    pub fn optimized(mut self) -> Self {
        self.optimize();
        self
    }
}

impl Node {
    /// Post-order aggregation. Returns the number of branches that were collapsed.
    pub(crate) fn optimize(&mut self) -> usize {
        let Node::Branch(left, right) = self else {
            return 0;
        };
        let merged = left.optimize() + right.optimize();
        if left.is_full() && right.is_full() {
            *self = Node::Full;
            merged + 1
        } else {
            merged
        }
    }
}
