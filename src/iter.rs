//! Enumeration of the networks covered by a trie.

use std::iter::FusedIterator;

use crate::{Bits, Node, Trie};

/// An iterator over all networks of a [`Trie`], in lexicographic order. See [`Trie::networks`].
#[derive(Clone, Debug)]
pub struct Networks<'a> {
    nodes: Vec<(&'a Node, Bits)>,
}

impl<'a> Iterator for Networks<'a> {
    type Item = Bits;

    fn next(&mut self) -> Option<Bits> {
        while let Some((node, path)) = self.nodes.pop() {
            match node {
                Node::Empty => {}
                Node::Full => return Some(path),
                Node::Branch(left, right) => {
                    // a branch below depth 32 cannot be reached by any address.
                    if let (Some(l), Some(r)) = (path.push(false), path.push(true)) {
                        self.nodes.push((right.as_ref(), r));
                        self.nodes.push((left.as_ref(), l));
                    }
                }
            }
        }
        None
    }
}

impl FusedIterator for Networks<'_> {}

/// An iterator over all networks of a [`Trie`] in CIDR notation. See [`Trie::cidrs`].
#[derive(Clone, Debug)]
pub struct Cidrs<'a>(Networks<'a>);

impl<'a> Iterator for Cidrs<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.0.next().map(|bits| bits.to_string())
    }
}

impl FusedIterator for Cidrs<'_> {}

impl Trie {
    /// Iterate over the networks of all full nodes in the trie, with the lower half of each branch
    /// visited before the upper half. The iterator is lazy, and a new one can be created at any
    /// time.
    ///
    /// ```
    /// # use ip_cover_trie::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let trie = Trie::build(["192.168.1.0/24".parse::<Bits>()?, "10.0.0.0/8".parse()?]);
    /// assert_eq!(
    ///     trie.networks().collect::<Vec<_>>(),
    ///     vec!["10.0.0.0/8".parse::<Bits>()?, "192.168.1.0/24".parse()?],
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn networks(&self) -> Networks<'_> {
        Networks {
            nodes: vec![(&self.root, Bits::EMPTY)],
        }
    }

    /// Iterate over the networks of the trie in CIDR notation, in the same order as
    /// [`Trie::networks`].
    pub fn cidrs(&self) -> Cidrs<'_> {
        Cidrs(self.networks())
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = Bits;
    type IntoIter = Networks<'a>;

    fn into_iter(self) -> Networks<'a> {
        self.networks()
    }
}
