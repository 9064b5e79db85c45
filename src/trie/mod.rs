//! Implementation of the coverage trie and its builder.

use std::net::Ipv4Addr;

use log::{debug, trace};

use crate::{node::Stats, Node, Prefix, ADDR_BITS};

mod invert;
mod optimize;

/// A binary trie over the 32-bit IPv4 address space that records which addresses are covered.
///
/// Each level of the trie consumes one bit of the address, starting with the most significant
/// one. A network is stored as a [`Node::Full`] leaf at the end of its prefix bits. Inserting a
/// network absorbs all narrower networks below it, and inserting a network that is already
/// covered does nothing.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Trie {
    pub(crate) root: Node,
}

impl Trie {
    /// Create an empty trie that covers no address.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trie from a root node.
    pub fn from_root(root: Node) -> Self {
        Self { root }
    }

    /// Build a trie by inserting all prefixes in order.
    ///
    /// ```
    /// # use ip_cover_trie::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let trie = Trie::build(["10.0.0.0/9".parse::<Bits>()?, "10.128.0.0/9".parse()?]);
    /// assert_eq!(trie.cidrs().collect::<Vec<_>>(), vec!["10.0.0.0/9", "10.128.0.0/9"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn build<P, I>(prefixes: I) -> Self
    where
        P: Prefix<R = u32>,
        I: IntoIterator<Item = P>,
    {
        let mut trie = Self::new();
        let mut inserted = 0usize;
        let mut absorbed = 0usize;
        for prefix in prefixes {
            inserted += 1;
            if !trie.insert(&prefix) {
                absorbed += 1;
            }
        }
        debug!("built trie from {inserted} prefixes ({absorbed} already covered)");
        trie
    }

    /// Insert a prefix into the trie. Returns `false` if the prefix was already covered by a
    /// broader (or identical) prefix, in which case the trie is unchanged. Otherwise, the prefix
    /// becomes a full leaf, and any narrower prefix below it is removed.
    ///
    /// ```
    /// # use ip_cover_trie::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut trie = Trie::new();
    /// assert!(trie.insert(&"192.168.1.0/24".parse::<Bits>()?));
    /// assert!(trie.insert(&"192.168.0.0/16".parse::<Bits>()?));
    /// assert!(!trie.insert(&"192.168.2.0/24".parse::<Bits>()?));
    /// assert_eq!(trie.cidrs().collect::<Vec<_>>(), vec!["192.168.0.0/16"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert<P>(&mut self, prefix: &P) -> bool
    where
        P: Prefix<R = u32>,
    {
        let len = prefix.prefix_len().min(ADDR_BITS);
        let inserted = self.root.insert((0..len).map(|bit| prefix.is_bit_set(bit)));
        if !inserted {
            trace!("{}/{len} is already covered", Ipv4Addr::from(prefix.mask()));
        }
        inserted
    }

    /// Check whether an address is covered by the trie.
    ///
    /// ```
    /// # use ip_cover_trie::*;
    /// # use std::net::Ipv4Addr;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let trie = Trie::build(["10.0.0.0/8".parse::<Bits>()?]);
    /// assert!(trie.contains(Ipv4Addr::new(10, 1, 2, 3)));
    /// assert!(!trie.contains(Ipv4Addr::new(11, 0, 0, 0)));
    /// # Ok(())
    /// # }
    /// ```
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let addr = u32::from(addr);
        let mut node = &self.root;
        for bit in 0..ADDR_BITS {
            match node {
                Node::Empty => return false,
                Node::Full => return true,
                Node::Branch(left, right) => {
                    node = if addr & (1 << (ADDR_BITS - 1 - bit)) != 0 {
                        right.as_ref()
                    } else {
                        left.as_ref()
                    }
                }
            }
        }
        node.is_full()
    }

    /// Returns `true` if no address is covered.
    pub fn is_empty(&self) -> bool {
        self.root.covers_nothing()
    }

    /// Returns `true` if the trie is a single full leaf, i.e., `0.0.0.0/0` is covered.
    pub fn is_full(&self) -> bool {
        self.root.is_full()
    }

    /// Get the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Take the root node.
    pub fn into_root(self) -> Node {
        self.root
    }

    /// Count the nodes of the trie.
    pub fn stats(&self) -> Stats {
        Stats::of(&self.root)
    }
}

impl<P> FromIterator<P> for Trie
where
    P: Prefix<R = u32>,
{
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<P> Extend<P> for Trie
where
    P: Prefix<R = u32>,
{
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        iter.into_iter().for_each(|p| {
            self.insert(&p);
        });
    }
}

impl From<Node> for Trie {
    fn from(root: Node) -> Self {
        Self::from_root(root)
    }
}
