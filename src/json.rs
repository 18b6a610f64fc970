use crate::Trie;
use crate::error::{TrieError, TrieResult};
use serde_json::Value;
use tracing::debug;

pub(crate) fn kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

impl Trie<Value> {
  /// Builds a trie from a JSON document.
  ///
  /// An array is read as a list of keys, each stored with `Value::Null`. An object is
  /// read as key-value entries. Anything else is rejected with
  /// [`TrieError::InvalidInitialSpec`], and a non-string array element with
  /// [`TrieError::InvalidKeyType`].
  pub fn from_json(initial: Value) -> TrieResult<Self> {
    let mut trie = Trie::new();
    match initial {
      Value::Array(keys) => {
        for key in &keys {
          trie.insert(key, Value::Null)?;
        }
      }
      Value::Object(entries) => {
        for (key, value) in entries {
          trie.insert(&key, value)?;
        }
      }
      other => {
        return Err(TrieError::InvalidInitialSpec {
          found: kind(&other).to_string(),
        });
      }
    }
    debug!(
      keys = trie.len(),
      nodes = trie.node_count(),
      "bulk-loaded trie from JSON"
    );
    Ok(trie)
  }
}
