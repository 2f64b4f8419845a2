//! Math atoms - the nodes of a parsed LaTeX formula
//!
//! Every atom shares a nucleus, a font style and a pair of script lists. The
//! [`AtomKind`] tag selects the TeX atom class and carries the payload that
//! only some classes have, such as the radicand of a radical or the cells of
//! a table.

use crate::color::Color;
use crate::error::{AtomError, AtomResult};
use crate::math_list::MathList;
use crate::range::AtomRange;
use crate::space::Space;
use crate::style::{FontStyle, LineStyle};
use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Nucleus used by placeholders unless another is given
pub const PLACEHOLDER_NUCLEUS: &str = "\u{25A1}";

// =============================================================================
// Boundary
// =============================================================================

/// A delimiter on either side of an [`AtomKind::Inner`], e.g. `(` from `\left(`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Boundary {
    pub nucleus: String,
}

impl Boundary {
    pub fn new(nucleus: impl Into<String>) -> Self {
        Self {
            nucleus: nucleus.into(),
        }
    }

    /// The invisible delimiter written as `\left.` or `\right.`
    pub const fn empty() -> Self {
        Self {
            nucleus: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nucleus.is_empty()
    }

    /// Standalone boundary atom carrying this delimiter
    pub fn to_atom(&self) -> MathAtom {
        MathAtom::new(AtomKind::Boundary, self.nucleus.clone())
    }
}

// =============================================================================
// Atom Kind
// =============================================================================

/// The class of an atom and its class-specific payload
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AtomKind {
    /// Plain symbol (TeX class 0)
    Ordinary,
    /// Digits and the decimal point
    Number,
    /// Letters, set italic by default
    Variable,
    /// Binary operator such as `+` (TeX class 2)
    BinaryOperator,
    /// Relation such as `=` (TeX class 3)
    Relation,
    /// Opening delimiter (TeX class 4)
    Open,
    /// Closing delimiter (TeX class 5)
    Close {
        /// False for `!` and `?`, which close without a matching open
        has_corresponding_open: bool,
    },
    /// Punctuation (TeX class 6)
    Punctuation,
    /// Accent over a list; the nucleus is the combining character
    Accent { inner: MathList },
    Overline { inner: MathList },
    Underline { inner: MathList },
    /// Root; an empty degree is a square root
    Radical { degree: MathList, radicand: MathList },
    /// A sub-formula between `\left` and `\right`
    Inner {
        left: Boundary,
        inner: MathList,
        right: Boundary,
    },
    /// List shifted vertically by `raise`
    RaiseBox { raise: Space, inner: MathList },
    /// List on a colored background
    ColorBox { color: Color, inner: MathList },
    /// List drawn in a color
    Colored { color: Color, inner: MathList },
    /// Explicit horizontal space
    Space(Space),
    Table(Table),
    /// `%` comment, kept for round-tripping
    Comment,
    /// Large operator such as `\sum` or `\sin`
    LargeOperator {
        /// Place limits above and below; `None` defers to the line style
        limits: Option<bool>,
        /// Function names like `\sin` are drawn as text rather than a glyph
        is_text_like: bool,
    },
    /// Switches the line style for the rest of the list
    Style(LineStyle),
    /// Slot awaiting input in an editor
    Placeholder { color: Option<Color> },
    /// A standalone delimiter
    Boundary,
}

impl AtomKind {
    /// Variant name, for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            AtomKind::Ordinary => "Ordinary",
            AtomKind::Number => "Number",
            AtomKind::Variable => "Variable",
            AtomKind::BinaryOperator => "BinaryOperator",
            AtomKind::Relation => "Relation",
            AtomKind::Open => "Open",
            AtomKind::Close { .. } => "Close",
            AtomKind::Punctuation => "Punctuation",
            AtomKind::Accent { .. } => "Accent",
            AtomKind::Overline { .. } => "Overline",
            AtomKind::Underline { .. } => "Underline",
            AtomKind::Radical { .. } => "Radical",
            AtomKind::Inner { .. } => "Inner",
            AtomKind::RaiseBox { .. } => "RaiseBox",
            AtomKind::ColorBox { .. } => "ColorBox",
            AtomKind::Colored { .. } => "Colored",
            AtomKind::Space(_) => "Space",
            AtomKind::Table(_) => "Table",
            AtomKind::Comment => "Comment",
            AtomKind::LargeOperator { .. } => "LargeOperator",
            AtomKind::Style(_) => "Style",
            AtomKind::Placeholder { .. } => "Placeholder",
            AtomKind::Boundary => "Boundary",
        }
    }

    /// Whether atoms of this kind may carry sub/superscripts
    pub fn scripts_allowed(&self) -> bool {
        !matches!(
            self,
            AtomKind::Comment
                | AtomKind::Space(_)
                | AtomKind::ColorBox { .. }
                | AtomKind::Colored { .. }
                | AtomKind::RaiseBox { .. }
                | AtomKind::Table(_)
                | AtomKind::Style(_)
                | AtomKind::Boundary
        )
    }

    /// Child lists in a fixed order: degree before radicand, table cells row-major
    pub fn inner_lists(&self) -> Vec<&MathList> {
        match self {
            AtomKind::Accent { inner }
            | AtomKind::Overline { inner }
            | AtomKind::Underline { inner }
            | AtomKind::Inner { inner, .. }
            | AtomKind::RaiseBox { inner, .. }
            | AtomKind::ColorBox { inner, .. }
            | AtomKind::Colored { inner, .. } => vec![inner],
            AtomKind::Radical { degree, radicand } => vec![degree, radicand],
            AtomKind::Table(table) => table.cells().collect(),
            _ => Vec::new(),
        }
    }

    pub fn inner_lists_mut(&mut self) -> Vec<&mut MathList> {
        match self {
            AtomKind::Accent { inner }
            | AtomKind::Overline { inner }
            | AtomKind::Underline { inner }
            | AtomKind::Inner { inner, .. }
            | AtomKind::RaiseBox { inner, .. }
            | AtomKind::ColorBox { inner, .. }
            | AtomKind::Colored { inner, .. } => vec![inner],
            AtomKind::Radical { degree, radicand } => vec![degree, radicand],
            AtomKind::Table(table) => table.cells_mut().collect(),
            _ => Vec::new(),
        }
    }

    /// Whether this kind owns child lists
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            AtomKind::Accent { .. }
                | AtomKind::Overline { .. }
                | AtomKind::Underline { .. }
                | AtomKind::Radical { .. }
                | AtomKind::Inner { .. }
                | AtomKind::RaiseBox { .. }
                | AtomKind::ColorBox { .. }
                | AtomKind::Colored { .. }
                | AtomKind::Table(_)
        )
    }
}

// =============================================================================
// Math Atom
// =============================================================================

/// A single atom of a math list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MathAtom {
    pub kind: AtomKind,
    /// Text drawn for the atom; may be empty
    pub nucleus: String,
    pub font_style: FontStyle,
    superscript: MathList,
    subscript: MathList,
    /// Position of the atom in the list it was parsed from
    #[serde(skip)]
    pub index_range: AtomRange,
}

impl MathAtom {
    pub fn new(kind: AtomKind, nucleus: impl Into<String>) -> Self {
        Self {
            kind,
            nucleus: nucleus.into(),
            font_style: FontStyle::Default,
            superscript: MathList::new(),
            subscript: MathList::new(),
            index_range: AtomRange::default(),
        }
    }

    pub fn ordinary(nucleus: impl Into<String>) -> Self {
        Self::new(AtomKind::Ordinary, nucleus)
    }

    pub fn number(nucleus: impl Into<String>) -> Self {
        Self::new(AtomKind::Number, nucleus)
    }

    pub fn variable(nucleus: impl Into<String>) -> Self {
        Self::new(AtomKind::Variable, nucleus)
    }

    pub fn binary_operator(nucleus: impl Into<String>) -> Self {
        Self::new(AtomKind::BinaryOperator, nucleus)
    }

    pub fn relation(nucleus: impl Into<String>) -> Self {
        Self::new(AtomKind::Relation, nucleus)
    }

    pub fn open(nucleus: impl Into<String>) -> Self {
        Self::new(AtomKind::Open, nucleus)
    }

    pub fn close(nucleus: impl Into<String>) -> Self {
        Self::new(
            AtomKind::Close {
                has_corresponding_open: true,
            },
            nucleus,
        )
    }

    /// A closing symbol with no opening partner, such as `!`
    pub fn unmatched_close(nucleus: impl Into<String>) -> Self {
        Self::new(
            AtomKind::Close {
                has_corresponding_open: false,
            },
            nucleus,
        )
    }

    pub fn punctuation(nucleus: impl Into<String>) -> Self {
        Self::new(AtomKind::Punctuation, nucleus)
    }

    /// An accent whose nucleus is the combining character
    pub fn accent(nucleus: impl Into<String>, inner: MathList) -> Self {
        Self::new(AtomKind::Accent { inner }, nucleus)
    }

    pub fn overline(inner: MathList) -> Self {
        Self::new(AtomKind::Overline { inner }, "")
    }

    pub fn underline(inner: MathList) -> Self {
        Self::new(AtomKind::Underline { inner }, "")
    }

    pub fn radical(degree: MathList, radicand: MathList) -> Self {
        Self::new(AtomKind::Radical { degree, radicand }, "")
    }

    pub fn sqrt(radicand: MathList) -> Self {
        Self::radical(MathList::new(), radicand)
    }

    pub fn inner(left: Boundary, inner: MathList, right: Boundary) -> Self {
        Self::new(AtomKind::Inner { left, inner, right }, "")
    }

    pub fn raise_box(raise: Space, inner: MathList) -> Self {
        Self::new(AtomKind::RaiseBox { raise, inner }, "")
    }

    pub fn color_box(color: Color, inner: MathList) -> Self {
        Self::new(AtomKind::ColorBox { color, inner }, "")
    }

    pub fn colored(color: Color, inner: MathList) -> Self {
        Self::new(AtomKind::Colored { color, inner }, "")
    }

    pub fn space(space: Space) -> Self {
        Self::new(AtomKind::Space(space), "")
    }

    pub fn table(table: Table) -> Self {
        Self::new(AtomKind::Table(table), "")
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::new(AtomKind::Comment, text)
    }

    pub fn large_operator(
        nucleus: impl Into<String>,
        limits: Option<bool>,
        is_text_like: bool,
    ) -> Self {
        Self::new(
            AtomKind::LargeOperator {
                limits,
                is_text_like,
            },
            nucleus,
        )
    }

    pub fn style(style: LineStyle) -> Self {
        Self::new(AtomKind::Style(style), "")
    }

    pub fn placeholder(color: Option<Color>) -> Self {
        Self::new(AtomKind::Placeholder { color }, PLACEHOLDER_NUCLEUS)
    }

    pub fn boundary(nucleus: impl Into<String>) -> Self {
        Self::new(AtomKind::Boundary, nucleus)
    }

    /// Builder-style font style
    pub fn with_font_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }

    // -------------------------------------------------------------------------
    // Scripts
    // -------------------------------------------------------------------------

    pub fn scripts_allowed(&self) -> bool {
        self.kind.scripts_allowed()
    }

    pub fn superscript(&self) -> &MathList {
        &self.superscript
    }

    pub fn subscript(&self) -> &MathList {
        &self.subscript
    }

    /// Mutable superscript, or `None` if this atom cannot carry scripts
    pub fn superscript_mut(&mut self) -> Option<&mut MathList> {
        self.scripts_allowed().then_some(&mut self.superscript)
    }

    /// Mutable subscript, or `None` if this atom cannot carry scripts
    pub fn subscript_mut(&mut self) -> Option<&mut MathList> {
        self.scripts_allowed().then_some(&mut self.subscript)
    }

    /// Replace the superscript. Any atom accepts an empty list.
    pub fn set_superscript(&mut self, list: MathList) -> AtomResult<()> {
        self.check_script(&list)?;
        self.superscript = list;
        Ok(())
    }

    /// Replace the subscript. Any atom accepts an empty list.
    pub fn set_subscript(&mut self, list: MathList) -> AtomResult<()> {
        self.check_script(&list)?;
        self.subscript = list;
        Ok(())
    }

    fn check_script(&self, list: &MathList) -> AtomResult<()> {
        if list.is_empty() || self.scripts_allowed() {
            Ok(())
        } else {
            Err(AtomError::ScriptsNotAllowed(self.kind.name()))
        }
    }

    pub fn has_scripts(&self) -> bool {
        !self.superscript.is_empty() || !self.subscript.is_empty()
    }

    pub fn clear_scripts(&mut self) {
        self.superscript.clear();
        self.subscript.clear();
    }

    // -------------------------------------------------------------------------
    // Child lists
    // -------------------------------------------------------------------------

    /// Child lists of container atoms, excluding scripts
    pub fn inner_lists(&self) -> Vec<&MathList> {
        self.kind.inner_lists()
    }

    pub fn inner_lists_mut(&mut self) -> Vec<&mut MathList> {
        self.kind.inner_lists_mut()
    }

    /// Clone with scripts and every child list emptied, keeping only the shape
    pub fn without_contents(&self) -> MathAtom {
        let mut atom = self.clone();
        atom.clear_scripts();
        for list in atom.inner_lists_mut() {
            list.clear();
        }
        atom.index_range = AtomRange::default();
        atom
    }
}

impl PartialEq for MathAtom {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.nucleus == other.nucleus
            && self.font_style == other.font_style
            && self.superscript == other.superscript
            && self.subscript == other.subscript
    }
}

impl Eq for MathAtom {}

// Must hash exactly the fields compared by `eq`
impl Hash for MathAtom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.nucleus.hash(state);
        self.font_style.hash(state);
        self.superscript.hash(state);
        self.subscript.hash(state);
    }
}

// =============================================================================
// Debug strings
// =============================================================================

impl fmt::Display for MathAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AtomKind::Accent { inner } => write!(f, "\\accent{{{}}}{{{inner}}}", self.nucleus)?,
            AtomKind::Overline { inner } => write!(f, "\\overline{{{inner}}}")?,
            AtomKind::Underline { inner } => write!(f, "\\underline{{{inner}}}")?,
            AtomKind::Radical { degree, radicand } => {
                f.write_str("\\sqrt")?;
                if !degree.is_empty() {
                    write!(f, "[{degree}]")?;
                }
                write!(f, "{{{radicand}}}")?;
            }
            AtomKind::Inner { left, inner, right } => write!(
                f,
                "\\inner{{{}}}{{{inner}}}{{{}}}",
                left.nucleus, right.nucleus
            )?,
            AtomKind::RaiseBox { raise, inner } => {
                let unit = if raise.is_mu() { "mu" } else { "em" };
                write!(f, "\\raisebox{{{}{unit}}}{{{inner}}}", raise.length())?
            }
            AtomKind::ColorBox { color, inner } => write!(f, "\\colorbox{{{color}}}{{{inner}}}")?,
            AtomKind::Colored { color, inner } => write!(f, "\\color{{{color}}}{{{inner}}}")?,
            AtomKind::Space(_) => f.write_str(" ")?,
            AtomKind::Comment => write!(f, "%{}", self.nucleus)?,
            AtomKind::Table(table) => {
                for (i, row) in table.rows().iter().enumerate() {
                    if i > 0 {
                        f.write_str(r"\\")?;
                    }
                    for (j, cell) in row.iter().enumerate() {
                        if j > 0 {
                            f.write_str("&")?;
                        }
                        write!(f, "{cell}")?;
                    }
                }
            }
            _ => f.write_str(&self.nucleus)?,
        }
        if !self.superscript.is_empty() {
            write!(f, "^{{{}}}", self.superscript)?;
        }
        if !self.subscript.is_empty() {
            write!(f, "_{{{}}}", self.subscript)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(atom: &MathAtom) -> u64 {
        let mut hasher = DefaultHasher::new();
        atom.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_scripts_allowed_per_kind() {
        assert!(MathAtom::variable("x").scripts_allowed());
        assert!(MathAtom::large_operator("∑", None, false).scripts_allowed());
        assert!(MathAtom::placeholder(None).scripts_allowed());
        let inner = MathAtom::inner(Boundary::new("("), MathList::new(), Boundary::new(")"));
        assert!(inner.scripts_allowed());

        assert!(!MathAtom::space(Space::SHORT).scripts_allowed());
        assert!(!MathAtom::comment("note").scripts_allowed());
        assert!(!MathAtom::style(LineStyle::Display).scripts_allowed());
        assert!(!MathAtom::table(Table::default()).scripts_allowed());
        assert!(!MathAtom::color_box(Color::RED, MathList::new()).scripts_allowed());
        assert!(!MathAtom::colored(Color::RED, MathList::new()).scripts_allowed());
        assert!(!MathAtom::raise_box(Space::SHORT, MathList::new()).scripts_allowed());
        assert!(!MathAtom::boundary("(").scripts_allowed());
    }

    #[test]
    fn test_set_script_rejected_when_disallowed() {
        let mut space = MathAtom::space(Space::LONG);
        let result = space.set_superscript(MathList::from(MathAtom::number("2")));
        assert_eq!(result, Err(AtomError::ScriptsNotAllowed("Space")));
        assert!(space.superscript().is_empty());
        assert!(space.superscript_mut().is_none());

        // clearing is always allowed
        assert!(space.set_subscript(MathList::new()).is_ok());
    }

    #[test]
    fn test_set_script_accepted() {
        let mut x = MathAtom::variable("x");
        x.set_subscript(MathList::from(MathAtom::variable("i"))).unwrap();
        assert!(x.has_scripts());
        x.superscript_mut().unwrap().push(MathAtom::number("2"));
        assert_eq!(x.superscript().len(), 1);

        x.clear_scripts();
        assert!(!x.has_scripts());
    }

    #[test]
    fn test_equality_ignores_index_range() {
        let mut a = MathAtom::variable("x");
        let b = MathAtom::variable("x");
        a.index_range = AtomRange::new(4, 1);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_equality_compares_payload() {
        assert_ne!(MathAtom::variable("x"), MathAtom::ordinary("x"));
        assert_ne!(MathAtom::close("!"), MathAtom::unmatched_close("!"));
        assert_ne!(
            MathAtom::variable("x"),
            MathAtom::variable("x").with_font_style(FontStyle::Bold)
        );
        assert_ne!(MathAtom::space(Space::SHORT), MathAtom::space(-Space::SHORT));
        assert_ne!(
            MathAtom::large_operator("∑", None, false),
            MathAtom::large_operator("∑", Some(true), false)
        );
    }

    #[test]
    fn test_inner_lists_order() {
        let radical = MathAtom::radical(
            MathList::from(MathAtom::number("3")),
            MathList::from(MathAtom::variable("x")),
        );
        let lists = radical.inner_lists();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0][0].nucleus, "3");
        assert_eq!(lists[1][0].nucleus, "x");

        let mut table = Table::default();
        table.set_cell(MathList::from(MathAtom::variable("a")), 0, 0);
        table.set_cell(MathList::from(MathAtom::variable("b")), 0, 1);
        table.set_cell(MathList::from(MathAtom::variable("c")), 1, 0);
        let table = MathAtom::table(table);
        let order: Vec<_> = table
            .inner_lists()
            .iter()
            .map(|list| list[0].nucleus.clone())
            .collect();
        assert_eq!(order, ["a", "b", "c"]);

        assert!(MathAtom::variable("x").inner_lists().is_empty());
        assert!(!MathAtom::variable("x").kind.is_container());
    }

    #[test]
    fn test_without_contents() {
        let mut accent = MathAtom::accent("\u{0302}", MathList::from(MathAtom::variable("x")));
        accent.set_superscript(MathList::from(MathAtom::number("2"))).unwrap();
        accent.index_range = AtomRange::new(1, 1);

        let shape = accent.without_contents();
        assert_eq!(shape, MathAtom::accent("\u{0302}", MathList::new()));
        assert_eq!(accent.inner_lists()[0].len(), 1);
    }

    #[test]
    fn test_boundary() {
        assert!(Boundary::empty().is_empty());
        let atom = Boundary::new("(").to_atom();
        assert_eq!(atom.kind, AtomKind::Boundary);
        assert_eq!(atom.nucleus, "(");
    }

    #[test]
    fn test_serde_skips_index_range() {
        let mut atom = MathAtom::sqrt(MathList::from(MathAtom::variable("x")));
        atom.index_range = AtomRange::new(3, 1);

        let json = serde_json::to_string(&atom).unwrap();
        assert!(!json.contains("index_range"));
        let back: MathAtom = serde_json::from_str(&json).unwrap();
        assert_eq!(back, atom);
        assert_eq!(back.index_range, AtomRange::default());
    }

    #[test]
    fn test_display_strings() {
        let root = MathAtom::radical(
            MathList::from(MathAtom::number("3")),
            MathList::from(MathAtom::variable("x")),
        );
        assert_eq!(root.to_string(), r"\sqrt[3]{x}");

        let inner = MathAtom::inner(
            Boundary::new("("),
            MathList::from(MathAtom::variable("y")),
            Boundary::new(")"),
        );
        assert_eq!(inner.to_string(), r"\inner{(}{y}{)}");

        let colored = MathAtom::colored(Color::RED, MathList::from(MathAtom::variable("z")));
        assert_eq!(colored.to_string(), r"\color{#FF0000}{z}");
    }
}
