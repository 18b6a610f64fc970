//! A character-keyed prefix tree with exact lookup, longest-matched-prefix lookup and
//! in-place overwrite.
//!
//! ```
//! use chartrie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("cat", 1).unwrap();
//! trie.insert("ca", 3).unwrap();
//!
//! assert_eq!(trie.get("cat").unwrap(), Some(&1));
//!
//! let lookup = trie.lookup("catalog").unwrap();
//! assert!(!lookup.is_match());
//! assert_eq!(lookup.best_index(), Some(3));
//! ```

mod error;
mod key;
mod lookup;
mod node;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod json;

pub use error::{TrieError, TrieResult};
pub use key::Key;
pub use lookup::{BestMatch, Insertion, Lookup};
pub use node::{Node, NodeId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::Index;
use tracing::{debug, trace};

/// Shape of a trie: node and terminal counts, the longest path from the root in
/// characters, and the largest number of edges leaving one node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieStats {
  pub nodes: usize,
  pub terminal_nodes: usize,
  pub max_depth: usize,
  pub max_fanout: usize,
}

/// A prefix tree mapping character sequences to values.
///
/// Nodes live in an arena owned by the trie and refer to their children by [`NodeId`].
/// Nothing is ever removed, so `len()` only grows with each distinct key and
/// `node_count()` only grows with each new edge.
///
/// Mutation goes through `&mut self`; shared lookups through `&Trie` may run from
/// any number of threads when `V: Sync`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
  feature = "serde",
  serde(
    try_from = "de::RawTrie<V>",
    bound(deserialize = "V: Deserialize<'de>")
  )
)]
pub struct Trie<V> {
  nodes: Vec<Node<V>>,
  len: usize,
}

impl<V> Default for Trie<V> {
  fn default() -> Self {
    Self {
      nodes: vec![Node::new()],
      len: 0,
    }
  }
}

/// Where a traversal ended. `next` holds the character whose edge was missing, or
/// `None` if the whole key was consumed.
struct Walk {
  node: NodeId,
  depth: usize,
  best: Option<BestMatch>,
  next: Option<char>,
}

impl<V> Trie<V> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates an empty trie whose node arena has room for `nodes` nodes (root included)
  /// before reallocating.
  pub fn with_capacity(nodes: usize) -> Self {
    let mut arena = Vec::with_capacity(nodes.max(1));
    arena.push(Node::new());
    Self {
      nodes: arena,
      len: 0,
    }
  }

  /// Builds a trie from key-value pairs. Later duplicates overwrite earlier ones.
  ///
  /// Stops at the first key that is not a character sequence.
  pub fn from_entries<I, K>(entries: I) -> TrieResult<Self>
  where
    I: IntoIterator<Item = (K, V)>,
    K: Key,
  {
    let mut trie = Self::new();
    for (key, value) in entries {
      trie.insert(&key, value)?;
    }
    debug!(
      keys = trie.len,
      nodes = trie.nodes.len(),
      "bulk-loaded trie from entries"
    );
    Ok(trie)
  }

  /// Number of distinct keys holding a value.
  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Total number of nodes, root included. Always at least 1.
  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn root(&self) -> NodeId {
    NodeId::ROOT
  }

  pub fn node(&self, id: NodeId) -> Option<&Node<V>> {
    self.nodes.get(id.index())
  }

  /// Returns the value stored for exactly `key`. Values stored under prefixes of
  /// `key` are never returned.
  pub fn get<K: Key + ?Sized>(&self, key: &K) -> TrieResult<Option<&V>> {
    Ok(self.lookup(key)?.value())
  }

  pub fn get_mut<K: Key + ?Sized>(&mut self, key: &K) -> TrieResult<Option<&mut V>> {
    let walk = self.walk(&mut key.key_chars()?);
    if walk.next.is_some() {
      return Ok(None);
    }
    Ok(self.nodes[walk.node.index()].value.as_mut())
  }

  pub fn contains_key<K: Key + ?Sized>(&self, key: &K) -> TrieResult<bool> {
    Ok(self.lookup(key)?.is_match())
  }

  /// Walks `key` from the root.
  ///
  /// On a miss the result carries the node where traversal stopped, how many
  /// characters were matched, and the deepest terminal node passed before the
  /// missing edge (the longest stored key that is a strict prefix of the matched
  /// part).
  pub fn lookup<K: Key + ?Sized>(&self, key: &K) -> TrieResult<Lookup<'_, V>> {
    let walk = self.walk(&mut key.key_chars()?);
    Ok(self.resolve(walk))
  }

  /// Stores `value` under `key`, overwriting any value already there.
  ///
  /// An overwrite leaves `len()` and `node_count()` untouched. A new key adds one
  /// to `len()` and one node per character past the deepest existing node.
  pub fn insert<K: Key + ?Sized>(&mut self, key: &K, value: V) -> TrieResult<Insertion<V>> {
    let chars = key.key_chars()?;
    Ok(self.insert_chars(chars, value))
  }

  /// Finds the value of the longest stored key that is a prefix of `key`, the key
  /// itself included. Returns the length of that prefix in characters.
  pub fn longest_prefix<K: Key + ?Sized>(&self, key: &K) -> TrieResult<Option<(usize, &V)>> {
    let mut node = &self.nodes[NodeId::ROOT.index()];
    let mut last_match = node.value().map(|v| (0, v));

    for (depth, c) in key.key_chars()?.enumerate() {
      match node.child(c) {
        Some(child) => node = &self.nodes[child.index()],
        None => break,
      }
      if let Some(v) = node.value() {
        last_match = Some((depth + 1, v));
      }
    }
    Ok(last_match)
  }

  // --- DIAGNOSTICS ---

  pub fn stats(&self) -> TrieStats {
    let mut stats = TrieStats {
      nodes: self.nodes.len(),
      ..TrieStats::default()
    };
    let mut stack = vec![(NodeId::ROOT, 0)];
    while let Some((id, depth)) = stack.pop() {
      let node = &self.nodes[id.index()];
      if node.is_terminal() {
        stats.terminal_nodes += 1;
      }
      stats.max_depth = stats.max_depth.max(depth);
      stats.max_fanout = stats.max_fanout.max(node.fanout());
      stack.extend(node.children().map(|(_, child)| (child, depth + 1)));
    }
    stats
  }

  // --- TRAVERSAL ---

  fn walk<I: Iterator<Item = char>>(&self, chars: &mut I) -> Walk {
    let mut node = NodeId::ROOT;
    let mut depth = 0;
    let mut best = None;

    for c in chars {
      let current = &self.nodes[node.index()];
      // Record before following `c`: a node only counts once it has been reached.
      if current.is_terminal() {
        best = Some(BestMatch { node, index: depth });
      }
      match current.child(c) {
        Some(child) => {
          node = child;
          depth += 1;
        }
        None => {
          return Walk {
            node,
            depth,
            best,
            next: Some(c),
          };
        }
      }
    }

    Walk {
      node,
      depth,
      best: None,
      next: None,
    }
  }

  fn resolve(&self, walk: Walk) -> Lookup<'_, V> {
    match (walk.next, self.nodes[walk.node.index()].value()) {
      (None, Some(value)) => Lookup::Found {
        node: walk.node,
        depth: walk.depth,
        value,
      },
      _ => Lookup::NotFound {
        stopped_at: walk.node,
        depth: walk.depth,
        best: walk.best,
      },
    }
  }

  fn insert_chars<I: Iterator<Item = char>>(&mut self, mut chars: I, value: V) -> Insertion<V> {
    let walk = self.walk(&mut chars);

    if walk.next.is_none() {
      if let Some(current) = self.nodes[walk.node.index()].value.as_mut() {
        let previous = std::mem::replace(current, value);
        trace!(depth = walk.depth, "replaced value of existing key");
        return Insertion::Replaced {
          node: walk.node,
          depth: walk.depth,
          previous,
        };
      }
    }

    let mut frontier = walk.node;
    let mut created = 0;
    for c in walk.next.into_iter().chain(chars) {
      frontier = self.push_child(frontier, c);
      created += 1;
    }

    self.nodes[frontier.index()].value = Some(value);
    self.len += 1;
    trace!(depth = walk.depth, created, "inserted new key");

    Insertion::Created {
      node: frontier,
      depth: walk.depth,
      best: walk.best,
      created,
    }
  }

  fn push_child(&mut self, parent: NodeId, c: char) -> NodeId {
    let id = NodeId(self.nodes.len());
    self.nodes.push(Node::new());
    self.nodes[parent.index()].children.insert(c, id);
    id
  }

  fn subtree_eq(&self, other: &Self) -> bool
  where
    V: PartialEq,
  {
    let mut stack = vec![(NodeId::ROOT, NodeId::ROOT)];
    while let Some((a, b)) = stack.pop() {
      let (left, right) = (&self.nodes[a.index()], &other.nodes[b.index()]);
      if left.value() != right.value() || left.fanout() != right.fanout() {
        return false;
      }
      for (c, child) in left.children() {
        match right.child(c) {
          Some(other_child) => stack.push((child, other_child)),
          None => return false,
        }
      }
    }
    true
  }
}

impl Trie<()> {
  /// Builds a set-like trie: every key is stored with the value `()`.
  pub fn from_keys<I>(keys: I) -> TrieResult<Self>
  where
    I: IntoIterator,
    I::Item: Key,
  {
    let mut trie = Self::new();
    for key in keys {
      trie.insert(&key, ())?;
    }
    debug!(
      keys = trie.len,
      nodes = trie.nodes.len(),
      "bulk-loaded trie from keys"
    );
    Ok(trie)
  }
}

// --- RUST TRAITS ---

impl<V> FromIterator<(String, V)> for Trie<V> {
  fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
    let mut trie = Trie::default();
    trie.extend(iter);
    trie
  }
}

impl<V> Extend<(String, V)> for Trie<V> {
  fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
    for (k, v) in iter {
      self.insert_chars(k.chars(), v);
    }
  }
}

impl<V> Index<&str> for Trie<V> {
  type Output = V;
  fn index(&self, index: &str) -> &Self::Output {
    self
      .get(index)
      .ok()
      .flatten()
      .expect("no entry found for key")
  }
}

// Tries built by different insertion orders have different arena layouts, so
// compare by following edges instead of comparing the arenas.
impl<V: PartialEq> PartialEq for Trie<V> {
  fn eq(&self, other: &Self) -> bool {
    self.len == other.len && self.nodes.len() == other.nodes.len() && self.subtree_eq(other)
  }
}

impl<V: Eq> Eq for Trie<V> {}

#[cfg(test)]
mod tests {
  use super::*;

  struct NoDefault {
    _x: i32,
  }

  #[test]
  fn test_no_default_trait_required() {
    let mut trie: Trie<NoDefault> = Trie::new();

    trie.insert("foo", NoDefault { _x: 10 }).unwrap();
    assert!(trie.len() == 1);
  }

  #[test]
  fn test_empty_trie() {
    let trie: Trie<i32> = Trie::new();
    assert_eq!(trie.len(), 0);
    assert_eq!(trie.node_count(), 1);
    assert!(trie.is_empty());
    assert!(!trie.node(trie.root()).unwrap().is_terminal());
  }

  #[test]
  fn test_scenario_cat_car_ca() {
    let mut trie = Trie::new();
    trie.insert("cat", 1).unwrap();
    trie.insert("car", 2).unwrap();
    trie.insert("ca", 3).unwrap();

    assert_eq!(trie.len(), 3);
    assert_eq!(trie.get("cat").unwrap(), Some(&1));
    assert_eq!(trie.get("car").unwrap(), Some(&2));
    assert_eq!(trie.get("ca").unwrap(), Some(&3));
    assert_eq!(trie.get("c").unwrap(), None);
    // root, c, a, t, r
    assert_eq!(trie.node_count(), 5);

    let lookup = trie.lookup("catalog").unwrap();
    let cat = trie.lookup("cat").unwrap().prefix();
    assert!(!lookup.is_match());
    assert_eq!(lookup.best_match(), Some(cat));
    assert_eq!(lookup.best_index(), Some(3));
    assert_eq!(lookup.depth(), 3);
    assert_eq!(lookup.prefix(), cat);

    let replaced = trie.insert("cat", 99).unwrap();
    assert_eq!(replaced.previous(), Some(1));
    assert_eq!(trie.len(), 3);
    assert_eq!(trie.node_count(), 5);
    assert_eq!(trie.get("cat").unwrap(), Some(&99));
  }

  #[test]
  fn test_existing_path_gains_value_without_new_nodes() {
    let mut trie = Trie::new();
    trie.insert("abc", 1).unwrap();
    let nodes = trie.node_count();

    let res = trie.insert("ab", 2).unwrap();
    assert_eq!(res.created(), 0);
    assert_eq!(res.depth(), 2);
    assert!(res.is_new());
    assert_eq!(trie.node_count(), nodes);
    assert_eq!(trie.len(), 2);
  }

  #[test]
  fn test_stats() {
    let trie: Trie<usize> = ["a", "ab", "ac", "abcd"]
      .into_iter()
      .enumerate()
      .map(|(i, k)| (k.to_string(), i))
      .collect();

    let stats = trie.stats();
    assert_eq!(stats.nodes, trie.node_count());
    assert_eq!(stats.terminal_nodes, 4);
    assert_eq!(stats.max_depth, 4);
    assert_eq!(stats.max_fanout, 2);
  }
}
