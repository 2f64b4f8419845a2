//! Math Structures - Shared building blocks for LaTeX math typesetting
//!
//! This crate provides the pieces the atom model and the parser lean on:
//! - A fallible-value primitive carrying a non-empty error message
//! - Alias dictionaries (many spellings resolving to one value, with reverse lookup)
//! - A bidirectional many-to-one table that keeps its reverse index consistent on removal
//! - A LaTeX-aware command dictionary doing command splitting and longest-match literal lookup

pub mod dictionary;
pub mod error;
pub mod result;

pub use dictionary::{
    split_command, AliasBiDictionary, AliasDictionary, AliasInsert, CommandDictionary,
    DefaultResolver, COMMAND_ESCAPE,
};
pub use error::*;
pub use result::{fail, ErrorMessage, MathResult, ResultExt, SpanResult};
