//! LaTeX-aware dictionary used by the tokenizer
//!
//! Input starting with the command escape is split into a command name the way
//! TeX reads control sequences. Any other input is matched against the
//! registered literal keys, longest first.

use super::AliasInsert;
use crate::error::{DictionaryError, DictionaryResult};
use crate::result::MathResult;
use std::collections::HashMap;
use std::fmt;

/// The command escape character
pub const COMMAND_ESCAPE: char = '\\';

/// Fallback used when a lookup misses
///
/// Receives the unmatched input and returns a value with the number of bytes
/// it consumed, or an error.
pub type DefaultResolver<V> = Box<dyn Fn(&str) -> MathResult<(V, usize)> + Send + Sync>;

/// Number of bytes of the control sequence at the start of `text`
///
/// After the escape, a run of ASCII letters or `@` is taken, optionally followed
/// by one `*`, `=` or `'`. Any other character after the escape forms a
/// one-character command.
pub fn split_command(text: &str) -> usize {
    debug_assert!(text.starts_with(COMMAND_ESCAPE));
    let escape_len = COMMAND_ESCAPE.len_utf8();
    let rest = &text[escape_len..];

    match rest.chars().next() {
        None => escape_len,
        Some(c) if is_letter_or_at(c) => {
            let run = rest.find(|c| !is_letter_or_at(c)).unwrap_or(rest.len());
            let mut split = escape_len + run;
            if matches!(text[split..].chars().next(), Some('*' | '=' | '\'')) {
                split += 1;
            }
            split
        }
        Some(c) => escape_len + c.len_utf8(),
    }
}

fn is_letter_or_at(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '@'
}

/// Dictionary resolving the start of a LaTeX string to a value
pub struct CommandDictionary<V> {
    commands: HashMap<String, V>,
    /// Kept sorted longest first, so the first prefix match is the longest
    non_commands: Vec<(String, V)>,
    default_resolver: DefaultResolver<V>,
    default_command_resolver: DefaultResolver<V>,
}

impl<V> CommandDictionary<V> {
    /// Create an empty dictionary with the fallbacks for literals and commands
    pub fn new<D, C>(default_resolver: D, default_command_resolver: C) -> Self
    where
        D: Fn(&str) -> MathResult<(V, usize)> + Send + Sync + 'static,
        C: Fn(&str) -> MathResult<(V, usize)> + Send + Sync + 'static,
    {
        Self {
            commands: HashMap::new(),
            non_commands: Vec::new(),
            default_resolver: Box::new(default_resolver),
            default_command_resolver: Box::new(default_command_resolver),
        }
    }

    /// Exact lookup of a registered key, escape included for commands
    pub fn get(&self, key: &str) -> Option<&V> {
        if key.starts_with(COMMAND_ESCAPE) {
            self.commands.get(key)
        } else {
            self.non_commands
                .iter()
                .find(|(literal, _)| literal == key)
                .map(|(_, value)| value)
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len() + self.non_commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.non_commands.is_empty()
    }

    /// Literal keys (longest first), then command keys
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.non_commands
            .iter()
            .map(|(key, value)| (key.as_str(), value))
            .chain(self.commands.iter().map(|(key, value)| (key.as_str(), value)))
    }
}

impl<V: Clone> CommandDictionary<V> {
    /// Resolve the start of `text`, returning the value and the bytes consumed
    ///
    /// Whitespace following a command is absorbed into the consumed count.
    ///
    /// # Panics
    ///
    /// Panics if `text` is empty.
    pub fn try_lookup(&self, text: &str) -> MathResult<(V, usize)> {
        assert!(!text.is_empty(), "there are no characters to read");
        if text.starts_with(COMMAND_ESCAPE) {
            self.lookup_command(text)
        } else {
            self.lookup_non_command(text)
        }
    }

    fn lookup_command(&self, text: &str) -> MathResult<(V, usize)> {
        let split = split_command(text);
        let command = &text[..split];
        let after = &text[split..];
        let consumed = split + (after.len() - after.trim_start().len());

        match self.commands.get(command) {
            Some(value) => Ok((value.clone(), consumed)),
            None => {
                tracing::trace!(command, "command not registered, using fallback");
                (self.default_command_resolver)(command)
            }
        }
    }

    fn lookup_non_command(&self, text: &str) -> MathResult<(V, usize)> {
        for (literal, value) in &self.non_commands {
            if text.starts_with(literal.as_str()) {
                return Ok((value.clone(), literal.len()));
            }
        }
        tracing::trace!(text, "no literal matched, using fallback");
        (self.default_resolver)(text)
    }
}

impl<V> AliasInsert<String, V> for CommandDictionary<V> {
    fn insert(&mut self, key: String, value: V) -> DictionaryResult<()> {
        if key.starts_with(COMMAND_ESCAPE) {
            if split_command(&key) != key.len() {
                return Err(DictionaryError::UnreachableCommand(key));
            }
            if self.commands.contains_key(&key) {
                return Err(DictionaryError::DuplicateKey(key));
            }
            self.commands.insert(key, value);
        } else {
            if key.is_empty() {
                return Err(DictionaryError::EmptyKey);
            }
            // Descending by length, then descending ordinal among equal lengths
            let position = self.non_commands.binary_search_by(|(existing, _)| {
                key.len()
                    .cmp(&existing.len())
                    .then_with(|| key.as_str().cmp(existing.as_str()))
            });
            match position {
                Ok(_) => return Err(DictionaryError::DuplicateKey(key)),
                Err(index) => self.non_commands.insert(index, (key, value)),
            }
        }
        Ok(())
    }
}

impl<V> fmt::Debug for CommandDictionary<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDictionary")
            .field("commands", &self.commands.len())
            .field("non_commands", &self.non_commands.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::fail;

    fn dictionary() -> CommandDictionary<&'static str> {
        let mut dict = CommandDictionary::new(
            |text: &str| fail(format!("unknown literal {}", text.chars().next().unwrap_or(' '))),
            |command: &str| fail(format!("Invalid command {command}")),
        );
        dict.insert("a".to_string(), "A").unwrap();
        dict.insert("ab".to_string(), "AB").unwrap();
        dict.insert("'".to_string(), "prime").unwrap();
        dict.insert("''".to_string(), "double prime").unwrap();
        dict.insert_aliases(["\\alpha"], "alpha").unwrap();
        dict.insert_aliases(["\\leq", "\\le"], "leq").unwrap();
        dict.insert("\\{".to_string(), "lbrace").unwrap();
        dict.insert("\\operatorname*".to_string(), "opname*").unwrap();
        dict
    }

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("\\alpha2"), 6);
        assert_eq!(split_command("\\{x"), 2);
        assert_eq!(split_command("\\"), 1);
        assert_eq!(split_command("\\@ifnext{"), 8);
        assert_eq!(split_command("\\section*{"), 9);
        assert_eq!(split_command("\\foo'bar"), 5);
        assert_eq!(split_command("\\\u{3b1}x"), 3);
    }

    #[test]
    fn test_longest_literal_wins() {
        let dict = dictionary();
        assert_eq!(dict.try_lookup("abc"), Ok(("AB", 2)));
        assert_eq!(dict.try_lookup("ac"), Ok(("A", 1)));
        assert_eq!(dict.try_lookup("'''"), Ok(("double prime", 2)));
    }

    #[test]
    fn test_command_consumes_trailing_whitespace() {
        let dict = dictionary();
        assert_eq!(dict.try_lookup("\\alpha2"), Ok(("alpha", 6)));
        assert_eq!(dict.try_lookup("\\alpha  \t2"), Ok(("alpha", 9)));
        assert_eq!(dict.try_lookup("\\{"), Ok(("lbrace", 2)));
        assert_eq!(dict.try_lookup("\\le x"), Ok(("leq", 4)));
        assert_eq!(dict.try_lookup("\\operatorname*{f}"), Ok(("opname*", 14)));
    }

    #[test]
    fn test_misses_defer_to_resolvers() {
        let dict = dictionary();
        let err = dict.try_lookup("\\beta x").unwrap_err();
        assert_eq!(err.as_str(), "Invalid command \\beta");

        let err = dict.try_lookup("zz").unwrap_err();
        assert_eq!(err.as_str(), "unknown literal z");
    }

    #[test]
    fn test_default_resolver_can_succeed() {
        let dict: CommandDictionary<char> = CommandDictionary::new(
            |text: &str| {
                let c = text.chars().next().unwrap_or(' ');
                Ok((c, c.len_utf8()))
            },
            |command: &str| fail(format!("Invalid command {command}")),
        );
        assert_eq!(dict.try_lookup("\u{3b1}\u{3b2}"), Ok(('\u{3b1}', 2)));
    }

    #[test]
    fn test_unreachable_command_rejected() {
        let mut dict = dictionary();
        let err = dict.insert("\\alpha2".to_string(), "bad").unwrap_err();
        assert_eq!(err, DictionaryError::UnreachableCommand("\\alpha2".to_string()));

        let err = dict.insert("\\{}".to_string(), "bad").unwrap_err();
        assert!(matches!(err, DictionaryError::UnreachableCommand(_)));
    }

    #[test]
    fn test_empty_literal_key_rejected() {
        let mut dict = dictionary();
        let len = dict.len();
        assert_eq!(dict.insert(String::new(), "empty"), Err(DictionaryError::EmptyKey));
        assert_eq!(dict.len(), len);
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let mut dict = dictionary();
        assert!(matches!(
            dict.insert("\\alpha".to_string(), "again"),
            Err(DictionaryError::DuplicateKey(_))
        ));
        assert!(matches!(
            dict.insert("ab".to_string(), "again"),
            Err(DictionaryError::DuplicateKey(_))
        ));
    }

    #[test]
    #[should_panic(expected = "no characters to read")]
    fn test_empty_lookup_panics() {
        let _ = dictionary().try_lookup("");
    }

    #[test]
    fn test_get_and_iter() {
        let dict = dictionary();
        assert_eq!(dict.get("\\le"), Some(&"leq"));
        assert_eq!(dict.get("ab"), Some(&"AB"));
        assert_eq!(dict.get("abc"), None);
        assert_eq!(dict.len(), 9);

        let literals: Vec<&str> = dict.iter().take(4).map(|(k, _)| k).collect();
        assert_eq!(literals, vec!["ab", "''", "a", "'"]);
    }
}
