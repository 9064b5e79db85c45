//! Complement of a trie.

use std::ops::Not;

use super::Trie;
use crate::Node;

impl Trie {
    /// Create the complement of the trie, i.e., a trie that covers exactly the addresses that
    /// `self` does not cover.
    ///
    /// Two empty or two full siblings in the result are collapsed into their parent, so the
    /// complement of an optimized trie is optimized as well.
    ///
    /// ```
    /// # use ip_cover_trie::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let trie = Trie::build(["128.0.0.0/1".parse::<Bits>()?, "64.0.0.0/2".parse()?]);
    /// assert_eq!(trie.invert().cidrs().collect::<Vec<_>>(), vec!["0.0.0.0/2"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn invert(&self) -> Trie {
        Trie::from_root(self.root.invert())
    }
}

impl Node {
    pub(crate) fn invert(&self) -> Node {
        match self {
            Node::Empty => Node::Full,
            Node::Full => Node::Empty,
            Node::Branch(left, right) => Node::join(left.invert(), right.invert()),
        }
    }
}

impl Not for &Trie {
    type Output = Trie;

    fn not(self) -> Trie {
        self.invert()
    }
}

impl Not for Trie {
    type Output = Trie;

    fn not(self) -> Trie {
        self.invert()
    }
}

#[cfg(test)]
mod test {
    use crate::{Bits, Node, Trie};

    fn trie(prefixes: &[&str]) -> Trie {
        Trie::build(prefixes.iter().map(|p| p.parse::<Bits>().unwrap()))
    }

    #[test]
    fn leaves() {
        assert_eq!(Trie::new().invert().root, Node::Full);
        assert_eq!(trie(&["0.0.0.0/0"]).invert().root, Node::Empty);
    }

    #[test]
    fn single_network() {
        let t = trie(&["192.168.0.0/16"]);
        let inv = !&t;
        assert_eq!(inv.cidrs().count(), 16);
        assert_eq!(inv.cidrs().next().as_deref(), Some("0.0.0.0/1"));
        assert!(!inv.contains("192.168.3.4".parse().unwrap()));
        assert!(inv.contains("192.169.0.0".parse().unwrap()));
    }

    #[test]
    fn collapses_empty_branches() {
        let t = Trie::from_root(Node::branch(
            Node::branch(Node::Full, Node::Full),
            Node::Empty,
        ));
        assert_eq!(t.invert().root, Node::branch(Node::Empty, Node::Full));
    }

    #[test]
    fn double_inversion() {
        let t = trie(&["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"]).optimized();
        assert_eq!(!!t.clone(), t);
    }
}
