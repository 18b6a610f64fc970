//! Error types for trie operations.

/// Errors reported by [`Trie`](crate::Trie) operations.
///
/// All of them are contract violations by the caller. Nothing is retried, and an
/// operation that fails leaves the trie exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
  /// The key cannot be read as a sequence of characters.
  #[error("Key is not a character sequence: {found}")]
  InvalidKeyType {
    /// Description of what was supplied instead.
    found: String,
  },

  /// Bulk-load input was neither a sequence of keys nor a key-value mapping.
  #[error("Initial entries must be a sequence of keys or a key-value mapping, found {found}")]
  InvalidInitialSpec {
    /// Description of what was supplied instead.
    found: String,
  },

  /// A deserialized node graph does not form a trie. Only produced with the
  /// `serde` feature.
  #[error("Node graph is not a valid trie: {reason}")]
  InvalidStructure {
    /// The violated invariant.
    reason: String,
  },
}

/// Result type for trie operations.
pub type TrieResult<T> = Result<T, TrieError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_display() {
    let err = TrieError::InvalidKeyType {
      found: "number".to_string(),
    };
    assert_eq!(err.to_string(), "Key is not a character sequence: number");

    let err = TrieError::InvalidInitialSpec {
      found: "boolean".to_string(),
    };
    assert_eq!(
      err.to_string(),
      "Initial entries must be a sequence of keys or a key-value mapping, found boolean"
    );
  }

  #[test]
  fn test_structure_error_display() {
    let err = TrieError::InvalidStructure {
      reason: "node 3 has two parents".to_string(),
    };
    assert_eq!(
      err.to_string(),
      "Node graph is not a valid trie: node 3 has two parents"
    );
  }
}
