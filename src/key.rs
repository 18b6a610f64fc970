use crate::error::{TrieError, TrieResult};

/// Anything that can be read as a sequence of characters.
///
/// Keys are compared one `char` at a time by raw scalar value. No normalization
/// or case folding is applied.
///
/// Byte keys are decoded as UTF-8 and rejected with [`TrieError::InvalidKeyType`]
/// when the bytes are not valid UTF-8.
pub trait Key {
  type Chars<'a>: Iterator<Item = char>
  where
    Self: 'a;

  fn key_chars(&self) -> TrieResult<Self::Chars<'_>>;
}

impl Key for str {
  type Chars<'a> = std::str::Chars<'a>;

  fn key_chars(&self) -> TrieResult<Self::Chars<'_>> {
    Ok(self.chars())
  }
}

impl Key for String {
  type Chars<'a> = std::str::Chars<'a>;

  fn key_chars(&self) -> TrieResult<Self::Chars<'_>> {
    Ok(self.as_str().chars())
  }
}

impl Key for char {
  type Chars<'a> = std::iter::Once<char>;

  fn key_chars(&self) -> TrieResult<Self::Chars<'_>> {
    Ok(std::iter::once(*self))
  }
}

impl Key for [char] {
  type Chars<'a> = std::iter::Copied<std::slice::Iter<'a, char>>;

  fn key_chars(&self) -> TrieResult<Self::Chars<'_>> {
    Ok(self.iter().copied())
  }
}

impl Key for Vec<char> {
  type Chars<'a> = std::iter::Copied<std::slice::Iter<'a, char>>;

  fn key_chars(&self) -> TrieResult<Self::Chars<'_>> {
    Ok(self.iter().copied())
  }
}

impl Key for [u8] {
  type Chars<'a> = std::str::Chars<'a>;

  fn key_chars(&self) -> TrieResult<Self::Chars<'_>> {
    std::str::from_utf8(self)
      .map(str::chars)
      .map_err(|e| TrieError::InvalidKeyType {
        found: format!("bytes with invalid UTF-8 at offset {}", e.valid_up_to()),
      })
  }
}

impl Key for Vec<u8> {
  type Chars<'a> = std::str::Chars<'a>;

  fn key_chars(&self) -> TrieResult<Self::Chars<'_>> {
    self.as_slice().key_chars()
  }
}

impl<K: Key + ?Sized> Key for &K {
  type Chars<'a>
    = K::Chars<'a>
  where
    Self: 'a;

  fn key_chars(&self) -> TrieResult<Self::Chars<'_>> {
    (**self).key_chars()
  }
}

#[cfg(feature = "serde")]
impl Key for serde_json::Value {
  type Chars<'a> = std::str::Chars<'a>;

  fn key_chars(&self) -> TrieResult<Self::Chars<'_>> {
    match self {
      serde_json::Value::String(s) => Ok(s.chars()),
      other => Err(TrieError::InvalidKeyType {
        found: crate::json::kind(other).to_string(),
      }),
    }
  }
}
