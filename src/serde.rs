//! Serialization and Deserialization implementation
//!
//! A trie is serialized as a nested pair structure: an empty node is `None` (`null` in JSON), a
//! full node is a pair of two `None` (`[null,null]`), and a branch is the pair of its children.

use ::serde::{ser::SerializeTuple, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Node, Trie};

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Full => {
                let mut tup = serializer.serialize_tuple(2)?;
                tup.serialize_element(&None::<Node>)?;
                tup.serialize_element(&None::<Node>)?;
                tup.end()
            }
            // would be indistinguishable from a full node
            n if n.covers_nothing() => serializer.serialize_none(),
            Node::Branch(left, right) => {
                let mut tup = serializer.serialize_tuple(2)?;
                tup.serialize_element(left.as_ref())?;
                tup.serialize_element(right.as_ref())?;
                tup.end()
            }
            Node::Empty => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<(Node, Node)>::deserialize(deserializer)? {
            None => Node::Empty,
            Some((Node::Empty, Node::Empty)) => Node::Full,
            Some((left, right)) => Node::branch(left, right),
        })
    }
}

impl Serialize for Trie {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.root.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Trie {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Node::deserialize(deserializer).map(Trie::from_root)
    }
}
