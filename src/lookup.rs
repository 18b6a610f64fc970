use crate::node::NodeId;

/// The deepest terminal node passed on the way to a failed lookup.
///
/// `index` is the number of leading characters of the searched key that spell out the
/// stored key at `node`. It never exceeds the depth at which the lookup failed, and
/// equals it when the node where traversal stopped is itself terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMatch {
  pub node: NodeId,
  pub index: usize,
}

/// Outcome of [`Trie::lookup`](crate::Trie::lookup).
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a, V> {
  /// The whole key was consumed and ends on a terminal node.
  Found {
    node: NodeId,
    depth: usize,
    value: &'a V,
  },
  /// Either an edge was missing after `depth` characters, or the whole key was
  /// consumed but ends on a node without a value.
  ///
  /// `best` is only reported when an edge was missing.
  NotFound {
    stopped_at: NodeId,
    depth: usize,
    best: Option<BestMatch>,
  },
}

// Holds only `&V`, so no `V: Clone` bound.
impl<V> Clone for Lookup<'_, V> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<V> Copy for Lookup<'_, V> {}

impl<'a, V> Lookup<'a, V> {
  pub fn is_match(&self) -> bool {
    matches!(self, Lookup::Found { .. })
  }

  /// The node where traversal ended: the terminal node on a match, otherwise the
  /// deepest node reached.
  pub fn prefix(&self) -> NodeId {
    match self {
      Lookup::Found { node, .. } => *node,
      Lookup::NotFound { stopped_at, .. } => *stopped_at,
    }
  }

  /// Number of characters matched against existing edges.
  pub fn depth(&self) -> usize {
    match self {
      Lookup::Found { depth, .. } | Lookup::NotFound { depth, .. } => *depth,
    }
  }

  pub fn value(&self) -> Option<&'a V> {
    match self {
      Lookup::Found { value, .. } => Some(*value),
      Lookup::NotFound { .. } => None,
    }
  }

  pub fn best(&self) -> Option<BestMatch> {
    match self {
      Lookup::Found { .. } => None,
      Lookup::NotFound { best, .. } => *best,
    }
  }

  pub fn best_match(&self) -> Option<NodeId> {
    self.best().map(|b| b.node)
  }

  pub fn best_index(&self) -> Option<usize> {
    self.best().map(|b| b.index)
  }
}

/// Outcome of [`Trie::insert`](crate::Trie::insert), describing the trie after the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion<V> {
  /// The key was already stored; its value was overwritten in place.
  Replaced {
    node: NodeId,
    depth: usize,
    previous: V,
  },
  /// The key is new. `depth` and `best` are those of the lookup that preceded the
  /// write, `created` is the number of nodes added for it.
  Created {
    node: NodeId,
    depth: usize,
    best: Option<BestMatch>,
    created: usize,
  },
}

impl<V> Insertion<V> {
  /// The terminal node now holding the inserted value.
  pub fn node(&self) -> NodeId {
    match self {
      Insertion::Replaced { node, .. } | Insertion::Created { node, .. } => *node,
    }
  }

  pub fn is_new(&self) -> bool {
    matches!(self, Insertion::Created { .. })
  }

  pub fn depth(&self) -> usize {
    match self {
      Insertion::Replaced { depth, .. } | Insertion::Created { depth, .. } => *depth,
    }
  }

  pub fn created(&self) -> usize {
    match self {
      Insertion::Replaced { .. } => 0,
      Insertion::Created { created, .. } => *created,
    }
  }

  /// The overwritten value, if the key was already present.
  pub fn previous(self) -> Option<V> {
    match self {
      Insertion::Replaced { previous, .. } => Some(previous),
      Insertion::Created { .. } => None,
    }
  }
}
