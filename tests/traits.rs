use chartrie::Trie;

struct NotCloneable;

#[test]
fn test_non_cloneable_values_work() {
  let mut trie = Trie::new();

  trie.insert("key", NotCloneable).unwrap();

  assert!(trie.get("key").unwrap().is_some());
  // Lookup results are Copy even when V is not Clone.
  let lookup = trie.lookup("key").unwrap();
  let copy = lookup;
  assert!(lookup.is_match() && copy.is_match());
}

#[test]
fn test_clone_independence() {
  let mut original = Trie::new();
  original.insert("key", 1).unwrap();

  let mut clone = original.clone();
  clone.insert("key", 2).unwrap();
  clone.insert("other", 3).unwrap();

  assert_eq!(original.get("key").unwrap(), Some(&1));
  assert_eq!(original.len(), 1);
  assert_eq!(clone.get("key").unwrap(), Some(&2));
}

#[test]
fn test_partial_eq_structural_independence() {
  // Same content, different insertion order, so different arena layouts.
  let mut forward = Trie::new();
  let mut backward = Trie::new();

  let data = vec![("a", 1), ("ab", 2), ("b", 3), ("abc", 4)];

  for (k, v) in &data {
    forward.insert(k, *v).unwrap();
  }
  for (k, v) in data.iter().rev() {
    backward.insert(k, *v).unwrap();
  }

  assert_eq!(forward, backward);

  forward.insert("d", 5).unwrap();
  assert_ne!(forward, backward);
}

#[test]
fn test_partial_eq_compares_values() {
  let a = Trie::from_entries([("x", 1)]).unwrap();
  let b = Trie::from_entries([("x", 2)]).unwrap();
  let c = Trie::from_entries([("y", 1)]).unwrap();
  assert_ne!(a, b);
  assert_ne!(a, c);
}

#[test]
fn test_extend() {
  let mut trie: Trie<i32> = Trie::new();
  trie.extend(vec![("a".to_string(), 1), ("a".to_string(), 2)]);
  assert_eq!(trie.len(), 1);
  assert_eq!(trie["a"], 2);
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn test_index_missing_key_panics() {
  let trie: Trie<i32> = Trie::new();
  let _value = trie["missing"];
}

#[test]
fn test_debug_format() {
  let mut trie = Trie::new();
  trie.insert("a", 1).unwrap();
  let debug_str = format!("{:?}", trie);
  assert!(debug_str.contains("Trie"));
}

#[test]
fn test_send_sync() {
  fn assert_send_sync<T: Send + Sync>() {}
  assert_send_sync::<Trie<String>>();
}
