//! Many spellings resolving to one value

use super::{AliasBiDictionary, AliasInsert};
use crate::error::DictionaryResult;
use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

/// A dictionary where several keys may share one value
///
/// Reverse lookup returns the canonical key of a value, which is the first key
/// it was registered under. This is what lets an atom be written back out as
/// LaTeX source.
#[derive(Debug, Clone)]
pub struct AliasDictionary<K, V> {
    inner: AliasBiDictionary<K, V>,
}

impl<K, V> Default for AliasDictionary<K, V> {
    fn default() -> Self {
        Self {
            inner: AliasBiDictionary::default(),
        }
    }
}

impl<K, V> AliasDictionary<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the value registered under `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key)
    }

    /// Canonical key of a value
    pub fn key_for(&self, value: &V) -> Option<&K> {
        self.inner.first_for(value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_first(key)
    }

    /// Number of keys, counting every alias
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Key/value pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.inner.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }
}

impl<K, V> AliasInsert<K, V> for AliasDictionary<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K, value: V) -> DictionaryResult<()> {
        self.inner.insert(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DictionaryError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Style {
        Roman,
        Bold,
    }

    fn styles() -> AliasDictionary<String, Style> {
        let mut table = AliasDictionary::new();
        table.insert_aliases(["mathrm", "rm", "text"], Style::Roman).unwrap();
        table.insert_aliases(["mathbf", "bf"], Style::Bold).unwrap();
        table
    }

    #[test]
    fn test_aliases_share_value() {
        let table = styles();
        assert_eq!(table.get("rm"), Some(&Style::Roman));
        assert_eq!(table.get("text"), Some(&Style::Roman));
        assert_eq!(table.get("bf"), Some(&Style::Bold));
        assert_eq!(table.get("it"), None);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_key_for_returns_canonical_spelling() {
        let table = styles();
        assert_eq!(table.key_for(&Style::Roman).map(String::as_str), Some("mathrm"));
        assert_eq!(table.key_for(&Style::Bold).map(String::as_str), Some("mathbf"));
    }

    #[test]
    fn test_duplicate_alias_rejected() {
        let mut table = styles();
        let err = table.insert("bf".to_string(), Style::Roman).unwrap_err();
        assert!(matches!(err, DictionaryError::DuplicateKey(_)));
    }

    #[test]
    fn test_keys_in_registration_order() {
        let table = styles();
        let keys: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["mathrm", "rm", "text", "mathbf", "bf"]);
    }
}
