//! Many-to-one table with a consistent reverse index

use super::AliasInsert;
use crate::error::{DictionaryError, DictionaryResult};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A many-to-one relation between firsts and seconds
///
/// Each first maps to exactly one second. Each second maps back to one of the
/// firsts pointing at it: the earliest registered one still present.
#[derive(Debug, Clone)]
pub struct AliasBiDictionary<F, S> {
    /// first -> (second, registration sequence number)
    first_to_second: HashMap<F, (S, u64)>,
    second_to_first: HashMap<S, F>,
    next_seq: u64,
}

impl<F, S> Default for AliasBiDictionary<F, S> {
    fn default() -> Self {
        Self {
            first_to_second: HashMap::new(),
            second_to_first: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<F, S> AliasBiDictionary<F, S>
where
    F: Eq + Hash + Clone + Debug,
    S: Eq + Hash + Clone,
{
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the second for a first
    pub fn get<Q>(&self, first: &Q) -> Option<&S>
    where
        F: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.first_to_second.get(first).map(|(second, _)| second)
    }

    /// Look up the canonical first for a second
    pub fn first_for(&self, second: &S) -> Option<&F> {
        self.second_to_first.get(second)
    }

    pub fn contains_first<Q>(&self, first: &Q) -> bool
    where
        F: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.first_to_second.contains_key(first)
    }

    pub fn contains_second(&self, second: &S) -> bool {
        self.second_to_first.contains_key(second)
    }

    /// Number of firsts
    pub fn len(&self) -> usize {
        self.first_to_second.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_to_second.is_empty()
    }

    /// Number of distinct seconds
    pub fn second_count(&self) -> usize {
        self.second_to_first.len()
    }

    /// All pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&F, &S)> {
        let mut entries: Vec<_> = self
            .first_to_second
            .iter()
            .map(|(first, (second, seq))| (*seq, first, second))
            .collect();
        entries.sort_unstable_by_key(|(seq, _, _)| *seq);
        entries.into_iter().map(|(_, first, second)| (first, second))
    }

    /// Remove a first
    ///
    /// If the reverse entry of its second pointed at this first, it is re-linked
    /// to the earliest remaining first mapping to the same second, or dropped
    /// when none remains.
    pub fn remove_by_first<Q>(&mut self, first: &Q) -> bool
    where
        F: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some((second, _)) = self.first_to_second.remove(first) else {
            return false;
        };

        let linked_here = self
            .second_to_first
            .get(&second)
            .is_some_and(|linked| <F as Borrow<Q>>::borrow(linked) == first);
        if !linked_here {
            return true;
        }

        let replacement = self
            .first_to_second
            .iter()
            .filter(|(_, (s, _))| *s == second)
            .min_by_key(|(_, (_, seq))| *seq)
            .map(|(f, _)| f.clone());

        match replacement {
            Some(other) => {
                self.second_to_first.insert(second, other);
            }
            None => {
                self.second_to_first.remove(&second);
            }
        }
        true
    }

    /// Remove a second along with every first pointing at it
    pub fn remove_by_second(&mut self, second: &S) -> bool {
        if self.second_to_first.remove(second).is_none() {
            return false;
        }
        self.first_to_second.retain(|_, (s, _)| *s != *second);
        true
    }
}

impl<F, S> AliasInsert<F, S> for AliasBiDictionary<F, S>
where
    F: Eq + Hash + Clone + Debug,
    S: Eq + Hash + Clone,
{
    fn insert(&mut self, first: F, second: S) -> DictionaryResult<()> {
        // A first may only ever point at one second
        if self.first_to_second.contains_key(&first) {
            return Err(DictionaryError::DuplicateKey(format!("{first:?}")));
        }
        if !self.second_to_first.contains_key(&second) {
            self.second_to_first.insert(second.clone(), first.clone());
        }
        self.first_to_second.insert(first, (second, self.next_seq));
        self.next_seq += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AliasBiDictionary<&'static str, u32> {
        let mut table = AliasBiDictionary::new();
        table.insert_aliases(["le", "leq", "leqslant"], 1).unwrap();
        table.insert("ge", 2).unwrap();
        table
    }

    #[test]
    fn test_reverse_keeps_first_registered() {
        let table = sample();
        assert_eq!(table.first_for(&1), Some(&"le"));
        assert_eq!(table.first_for(&2), Some(&"ge"));
        assert_eq!(table.get("leq"), Some(&1));
        assert_eq!(table.len(), 4);
        assert_eq!(table.second_count(), 2);
    }

    #[test]
    fn test_duplicate_first_rejected() {
        let mut table = sample();
        let err = table.insert("le", 3).unwrap_err();
        assert_eq!(err, DictionaryError::DuplicateKey("\"le\"".to_string()));
        assert_eq!(table.get("le"), Some(&1));
    }

    #[test]
    fn test_remove_by_first_relinks() {
        let mut table = sample();
        assert!(table.remove_by_first("le"));
        assert_eq!(table.first_for(&1), Some(&"leq"));

        assert!(table.remove_by_first("leq"));
        assert_eq!(table.first_for(&1), Some(&"leqslant"));

        assert!(table.remove_by_first("leqslant"));
        assert_eq!(table.first_for(&1), None);
        assert!(!table.contains_second(&1));
    }

    #[test]
    fn test_remove_non_canonical_first_keeps_link() {
        let mut table = sample();
        assert!(table.remove_by_first("leq"));
        assert_eq!(table.first_for(&1), Some(&"le"));
        assert!(!table.remove_by_first("leq"));
    }

    #[test]
    fn test_remove_by_second_drops_all_firsts() {
        let mut table = sample();
        assert!(table.remove_by_second(&1));
        assert!(!table.contains_first("le"));
        assert!(!table.contains_first("leq"));
        assert!(table.contains_first("ge"));
        assert!(!table.remove_by_second(&1));
    }

    #[test]
    fn test_iter_in_registration_order() {
        let table = sample();
        let firsts: Vec<_> = table.iter().map(|(f, _)| *f).collect();
        assert_eq!(firsts, vec!["le", "leq", "leqslant", "ge"]);
    }

    #[test]
    fn test_insert_with_computed_values() {
        let mut table: AliasBiDictionary<String, usize> = AliasBiDictionary::new();
        table.insert_with(["a", "bb", "ccc"], |k| k.len()).unwrap();
        assert_eq!(table.get("bb"), Some(&2));
        assert_eq!(table.first_for(&3).map(String::as_str), Some("ccc"));
    }
}
