//! This crate compresses a list of IPv4 networks into a binary trie that covers exactly the same
//! addresses, and can compute the complement of that trie. The result is meant to be serialized
//! and shipped to a consumer that only needs to answer "is this address in the set?".
//!
//! # Description of the Tree
//!
//! Each level of the tree consumes one bit of the address, starting at the most significant one.
//! A node is either [`Node::Empty`] (no address below is covered), [`Node::Full`] (every address
//! below is covered), or a [`Node::Branch`] with a left child for the `0` bit and a right child
//! for the `1` bit. A network of prefix length `n` is a full node at depth `n`.
//!
//! # Operations on the tree
//!
//! | Operation               | Effect                                                          |
//! |-------------------------|-----------------------------------------------------------------|
//! | [`Trie::insert`]        | Add a network. Broader networks absorb narrower ones.           |
//! | [`Trie::optimize`]      | Merge sibling networks that together cover their parent.        |
//! | [`Trie::invert`]        | Compute the complement within the whole IPv4 address space.     |
//! | [`Trie::networks`]      | Enumerate the covered networks in lexicographic order.          |
//! | [`Trie::contains`]      | Check whether a single address is covered.                      |
//!
//! The order of insertions never changes which addresses are covered: the trie always covers the
//! union of all inserted networks. After [`Trie::optimize`], the shape of the tree only depends
//! on the covered addresses.
//!
//! ```
//! # use ip_cover_trie::*;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut trie: Trie = ["10.0.0.0/9", "10.128.0.0/9", "10.1.2.0/24"]
//!     .into_iter()
//!     .map(encode)
//!     .collect::<Result<Vec<_>, _>>()?
//!     .into_iter()
//!     .collect();
//! trie.optimize();
//! assert_eq!(trie.cidrs().collect::<Vec<_>>(), vec!["10.0.0.0/8"]);
//! assert_eq!(trie.invert().cidrs().count(), 8);
//! # Ok(())
//! # }
//! ```
//!
//! # Serialization
//!
//! With the `serde` feature, a [`Trie`] serializes as a nested pair structure: `None` for an
//! empty node, a pair of two `None` for a full node, and the pair of both children for a branch.

#![deny(missing_docs)]

pub mod error;
mod fmt;
mod iter;
mod node;
pub mod prefix;
#[cfg(feature = "serde")]
mod serde;
pub mod source;
mod trie;

#[cfg(test)]
mod fuzzing;

pub use error::Error;
pub use iter::{Cidrs, Networks};
pub use node::{Node, Stats};
pub use prefix::{decode, encode, Bits, Prefix};
pub use trie::Trie;

/// Number of bits in an IPv4 address, and therefore the maximal depth of a [`Trie`].
pub const ADDR_BITS: u8 = 32;
