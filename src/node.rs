use ahash::RandomState;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Handle to a node stored in a [`Trie`](crate::Trie).
///
/// Ids are only meaningful for the trie that produced them. Nodes are never removed,
/// so an id stays valid for the whole lifetime of its trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
  pub(crate) const ROOT: NodeId = NodeId(0);

  /// Position of the node in the trie's arena. The root is always `0`.
  pub fn index(self) -> usize {
    self.0
  }
}

/// One position in the tree: outgoing character edges plus an optional stored value.
///
/// Edges and the value live in separate fields, so no edge character can ever be
/// confused with the value slot.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
  feature = "serde",
  serde(bound(serialize = "V: Serialize", deserialize = "V: Deserialize<'de>"))
)]
pub struct Node<V> {
  pub(crate) children: HashMap<char, NodeId, RandomState>,
  // Written as `Option<(V,)>` so `Some(())` and `None` stay distinct in every format.
  #[cfg_attr(feature = "serde", serde(default, with = "value_slot"))]
  pub(crate) value: Option<V>,
}

impl<V> Default for Node<V> {
  fn default() -> Self {
    Self {
      children: HashMap::with_hasher(RandomState::new()),
      value: None,
    }
  }
}

impl<V> Node<V> {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// The value stored at this node, if the path to it is an inserted key.
  pub fn value(&self) -> Option<&V> {
    self.value.as_ref()
  }

  /// Terminal nodes end an inserted key.
  pub fn is_terminal(&self) -> bool {
    self.value.is_some()
  }

  /// Follows the edge labelled `c`.
  pub fn child(&self, c: char) -> Option<NodeId> {
    self.children.get(&c).copied()
  }

  /// Number of outgoing edges.
  pub fn fanout(&self) -> usize {
    self.children.len()
  }

  pub fn is_leaf(&self) -> bool {
    self.children.is_empty()
  }

  pub(crate) fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
    self.children.iter().map(|(&c, &id)| (c, id))
  }
}

#[cfg(feature = "serde")]
mod value_slot {
  use serde::{Deserialize, Deserializer, Serialize, Serializer};

  pub fn serialize<S, V>(value: &Option<V>, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
    V: Serialize,
  {
    value.as_ref().map(|v| (v,)).serialize(serializer)
  }

  pub fn deserialize<'de, D, V>(deserializer: D) -> Result<Option<V>, D::Error>
  where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
  {
    Option::<(V,)>::deserialize(deserializer).map(|slot| slot.map(|(v,)| v))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_value_slot_is_separate_from_edges() {
    // A child labelled 'v' must not make the node look terminal.
    let mut node: Node<i32> = Node::new();
    node.children.insert('v', NodeId(1));

    assert!(!node.is_terminal());
    assert_eq!(node.value(), None);
    assert_eq!(node.child('v'), Some(NodeId(1)));
    assert_eq!(node.fanout(), 1);

    node.value = Some(7);
    assert!(node.is_terminal());
    assert_eq!(node.value(), Some(&7));
    assert_eq!(node.child('x'), None);
  }

  #[test]
  fn test_root_id() {
    assert_eq!(NodeId::ROOT.index(), 0);
  }
}
