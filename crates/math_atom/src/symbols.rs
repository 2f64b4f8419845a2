//! Symbol tables shared by the LaTeX parser and writer
//!
//! All tables are built on first use and live for the rest of the process.
//! Lookups hand out clones, so callers may freely mutate what they get back.

use crate::atom::{Boundary, MathAtom};
use crate::commands::build_commands;
use crate::math_list::MathList;
use crate::style::FontStyle;
use math_structures::{
    fail, AliasDictionary, AliasInsert, CommandDictionary, DictionaryResult, MathResult,
    COMMAND_ESCAPE,
};
use std::sync::OnceLock;

// =============================================================================
// Templates
// =============================================================================

/// `×`
pub fn times() -> MathAtom {
    MathAtom::binary_operator("×")
}

/// `÷`
pub fn divide() -> MathAtom {
    MathAtom::binary_operator("÷")
}

/// An empty input slot
pub fn placeholder() -> MathAtom {
    MathAtom::placeholder(None)
}

/// A list holding a single placeholder
pub fn placeholder_list() -> MathList {
    MathList::from(placeholder())
}

// =============================================================================
// ASCII classifier
// =============================================================================

/// Atom for a raw ASCII character typed directly in math mode
///
/// Returns `None` for whitespace, control characters, the TeX special
/// characters `$ % # & ~ ' ^ _ { } \`, and anything outside ASCII.
pub fn for_ascii(byte: u8) -> Option<MathAtom> {
    if !byte.is_ascii() || byte.is_ascii_control() || byte.is_ascii_whitespace() {
        return None;
    }
    let c = char::from(byte);
    let s = c.to_string();
    let atom = match c {
        '0'..='9' | '.' => MathAtom::number(s),
        'a'..='z' | 'A'..='Z' => MathAtom::variable(s),
        '$' | '%' | '#' | '&' | '~' | '\'' | '^' | '_' | '{' | '}' | '\\' => return None,
        '(' | '[' => MathAtom::open(s),
        ')' | ']' => MathAtom::close(s),
        '!' | '?' => MathAtom::unmatched_close(s),
        ',' | ';' => MathAtom::punctuation(s),
        '=' | '<' | '>' => MathAtom::relation(s),
        // ratio; a plain colon is \colon
        ':' => MathAtom::relation("\u{2236}"),
        '-' => MathAtom::binary_operator("\u{2212}"),
        '+' | '*' => MathAtom::binary_operator(s),
        '"' | '/' | '@' | '`' | '|' => MathAtom::ordinary(s),
        _ => unreachable!("printable ASCII {c:?} is not classified"),
    };
    Some(atom)
}

// =============================================================================
// Static tables
// =============================================================================

fn built<T>(table: &str, result: DictionaryResult<T>) -> T {
    result.unwrap_or_else(|e| panic!("invalid {table} table: {e}"))
}

/// Delimiters accepted after `\left` and `\right`, keyed without the escape
pub fn boundary_delimiters() -> &'static AliasDictionary<String, Boundary> {
    static TABLE: OnceLock<AliasDictionary<String, Boundary>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let table = built("delimiter", build_boundary_delimiters());
        tracing::debug!(entries = table.len(), "built delimiter table");
        table
    })
}

fn build_boundary_delimiters() -> DictionaryResult<AliasDictionary<String, Boundary>> {
    let mut table: AliasDictionary<String, Boundary> = AliasDictionary::new();
    let entries: &[(&[&str], &str)] = &[
        (&["."], ""),
        (&["("], "("),
        (&[")"], ")"),
        (&["uparrow"], "↑"),
        (&["Uparrow"], "⇑"),
        (&["["], "["),
        (&["]"], "]"),
        (&["downarrow"], "↓"),
        (&["Downarrow"], "⇓"),
        (&["{", "lbrace"], "{"),
        (&["}", "rbrace"], "}"),
        (&["updownarrow"], "↕"),
        (&["Updownarrow"], "⇕"),
        (&["lfloor"], "⌊"),
        (&["rfloor"], "⌋"),
        (&["lceil"], "⌈"),
        (&["rceil"], "⌉"),
        (&["<", "langle"], "〈"),
        (&[">", "rangle"], "〉"),
        (&["/"], "/"),
        (&["\\", "backslash"], "\\"),
        (&["|", "vert"], "|"),
        (&["||", "Vert"], "‖"),
        (&["rgroup"], "⟯"),
        (&["lgroup"], "⟮"),
        (&["arrowvert"], "|"),
        (&["Arrowvert"], "‖"),
        (&["bracevert"], "|"),
        (&["ulcorner"], "⌜"),
        (&["urcorner"], "⌝"),
        (&["llcorner"], "⌞"),
        (&["lrcorner"], "⌟"),
    ];
    for (names, nucleus) in entries {
        table.insert_aliases(names.iter().copied(), Boundary::new(*nucleus))?;
    }
    Ok(table)
}

/// Font switches such as `\mathbf`, keyed without the escape
pub fn font_styles() -> &'static AliasDictionary<String, FontStyle> {
    static TABLE: OnceLock<AliasDictionary<String, FontStyle>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let table = built("font style", build_font_styles());
        tracing::debug!(entries = table.len(), "built font style table");
        table
    })
}

fn build_font_styles() -> DictionaryResult<AliasDictionary<String, FontStyle>> {
    let mut table: AliasDictionary<String, FontStyle> = AliasDictionary::new();
    table.insert("mathnormal".into(), FontStyle::Default)?;
    table.insert_aliases(["mathrm", "rm", "text"], FontStyle::Roman)?;
    table.insert_aliases(["mathbf", "bf"], FontStyle::Bold)?;
    table.insert_aliases(["mathcal", "cal"], FontStyle::Caligraphic)?;
    table.insert("mathtt".into(), FontStyle::Typewriter)?;
    table.insert_aliases(["mathit", "mit"], FontStyle::Italic)?;
    table.insert("mathsf".into(), FontStyle::SansSerif)?;
    table.insert_aliases(["mathfrak", "frak"], FontStyle::Fraktur)?;
    table.insert("mathbb".into(), FontStyle::Blackboard)?;
    table.insert_aliases(["mathbfit", "bm"], FontStyle::BoldItalic)?;
    Ok(table)
}

/// Every LaTeX command and the atom it produces, keyed without the escape
pub fn commands() -> &'static AliasDictionary<String, MathAtom> {
    static TABLE: OnceLock<AliasDictionary<String, MathAtom>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let table = built("LaTeX command", build_commands());
        tracing::debug!(entries = table.len(), "built LaTeX command table");
        table
    })
}

/// Fresh atom for a command name given without the escape, e.g. `alpha`
pub fn atom_for_command(name: &str) -> Option<MathAtom> {
    commands().get(name).cloned()
}

/// Canonical command name producing an atom of this shape
///
/// Scripts and child list contents are ignored, so `\hat{x}^2` maps to `hat`.
pub fn command_for_atom(atom: &MathAtom) -> Option<&'static str> {
    commands()
        .key_for(&atom.without_contents())
        .map(String::as_str)
}

// =============================================================================
// Tokenizer dictionary
// =============================================================================

const PRIMES: [(&str, &str); 3] = [("'", "′"), ("''", "″"), ("'''", "‴")];

/// Dictionary the tokenizer reads atoms from
///
/// Commands are keyed with their escape. Literal keys are the printable ASCII
/// characters [`for_ascii`] accepts plus the prime ligatures. Any other
/// non-ASCII character reads as an ordinary symbol.
pub fn command_dictionary() -> &'static CommandDictionary<MathAtom> {
    static TABLE: OnceLock<CommandDictionary<MathAtom>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let table = built("tokenizer", build_command_dictionary());
        tracing::debug!(entries = table.len(), "built tokenizer dictionary");
        table
    })
}

fn build_command_dictionary() -> DictionaryResult<CommandDictionary<MathAtom>> {
    let mut dictionary = CommandDictionary::new(resolve_literal, resolve_unknown_command);
    for byte in b'!'..=b'~' {
        if let Some(atom) = for_ascii(byte) {
            dictionary.insert(char::from(byte).to_string(), atom)?;
        }
    }
    for (key, nucleus) in PRIMES {
        dictionary.insert(key.to_string(), MathAtom::ordinary(nucleus))?;
    }
    for (name, atom) in commands().iter() {
        dictionary.insert(format!("{COMMAND_ESCAPE}{name}"), atom.clone())?;
    }
    Ok(dictionary)
}

fn resolve_literal(text: &str) -> MathResult<(MathAtom, usize)> {
    match text.chars().next() {
        Some(c) if !c.is_ascii() => Ok((MathAtom::ordinary(c.to_string()), c.len_utf8())),
        Some(c) => fail(format!("Unsupported character {c:?}")),
        None => fail("there are no characters to read"),
    }
}

fn resolve_unknown_command(command: &str) -> MathResult<(MathAtom, usize)> {
    fail(format!("Invalid command {command}"))
}
