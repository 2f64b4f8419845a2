//! Lookup tables keyed by LaTeX spellings
//!
//! Every table accepts bulk registration through [`AliasInsert`]: a single key,
//! a set of aliases sharing one value, or a key collection with a value
//! computed per key.

mod alias;
mod bidirectional;
mod command;

pub use alias::AliasDictionary;
pub use bidirectional::AliasBiDictionary;
pub use command::{split_command, CommandDictionary, DefaultResolver, COMMAND_ESCAPE};

use crate::error::DictionaryResult;

/// Registration funnel shared by all dictionaries
pub trait AliasInsert<K, V> {
    /// Register one key
    fn insert(&mut self, key: K, value: V) -> DictionaryResult<()>;

    /// Register several spellings that all resolve to the same value
    fn insert_aliases<I>(&mut self, keys: I, value: V) -> DictionaryResult<()>
    where
        I: IntoIterator,
        I::Item: Into<K>,
        V: Clone,
    {
        for key in keys {
            self.insert(key.into(), value.clone())?;
        }
        Ok(())
    }

    /// Register a key collection with a value computed from each key
    fn insert_with<I, F>(&mut self, keys: I, mut value_for: F) -> DictionaryResult<()>
    where
        I: IntoIterator,
        I::Item: Into<K>,
        F: FnMut(&K) -> V,
    {
        for key in keys {
            let key = key.into();
            let value = value_for(&key);
            self.insert(key, value)?;
        }
        Ok(())
    }
}
