use crate::error::TrieError;
use crate::node::{Node, NodeId};
use crate::Trie;
use serde::Deserialize;

/// Wire form of a [`Trie`], checked before it is accepted.
#[derive(Deserialize)]
pub(crate) struct RawTrie<V> {
  nodes: Vec<Node<V>>,
  len: usize,
}

impl<V> TryFrom<RawTrie<V>> for Trie<V> {
  type Error = TrieError;

  fn try_from(raw: RawTrie<V>) -> Result<Self, Self::Error> {
    validate(&raw.nodes, raw.len).map_err(|reason| TrieError::InvalidStructure { reason })?;
    Ok(Trie {
      nodes: raw.nodes,
      len: raw.len,
    })
  }
}

/// The arena must describe a single tree rooted at node 0 with no empty
/// non-root leaves, and `len` must match the number of terminal nodes.
fn validate<V>(nodes: &[Node<V>], len: usize) -> Result<(), String> {
  if nodes.is_empty() {
    return Err("missing root node".to_string());
  }

  let mut has_parent = vec![false; nodes.len()];
  for (i, node) in nodes.iter().enumerate() {
    for (c, child) in node.children() {
      if child.index() >= nodes.len() {
        return Err(format!(
          "edge {c:?} from node {i} points to missing node {}",
          child.index()
        ));
      }
      if child == NodeId::ROOT {
        return Err(format!("edge {c:?} from node {i} points to the root"));
      }
      if has_parent[child.index()] {
        return Err(format!("node {} has more than one parent", child.index()));
      }
      has_parent[child.index()] = true;
    }
    if i != NodeId::ROOT.index() && node.is_leaf() && !node.is_terminal() {
      return Err(format!("node {i} has neither children nor a value"));
    }
  }

  // With at most one parent per node, the part reachable from the root is a tree.
  let mut reached = 0;
  let mut stack = vec![NodeId::ROOT];
  while let Some(id) = stack.pop() {
    reached += 1;
    stack.extend(nodes[id.index()].children().map(|(_, child)| child));
  }
  if reached != nodes.len() {
    return Err(format!(
      "{} nodes are unreachable from the root",
      nodes.len() - reached
    ));
  }

  let terminals = nodes.iter().filter(|n| n.is_terminal()).count();
  if terminals != len {
    return Err(format!("len is {len} but {terminals} nodes hold values"));
  }
  Ok(())
}
