//! Font and line styles

use serde::{Deserialize, Serialize};

/// Math font style variants, as selected by `\mathbf` and friends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FontStyle {
    /// Italic letters, upright digits and symbols
    #[default]
    Default,
    /// Upright
    Roman,
    Bold,
    /// Calligraphic
    Caligraphic,
    /// Monospace
    Typewriter,
    Italic,
    SansSerif,
    /// Fraktur (German blackletter)
    Fraktur,
    /// Double-struck (blackboard bold)
    Blackboard,
    BoldItalic,
}

impl FontStyle {
    /// Check if this style is bold
    pub fn is_bold(&self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }

    /// Check if this style renders letters italic
    pub fn is_italic(&self) -> bool {
        matches!(
            self,
            FontStyle::Default | FontStyle::Italic | FontStyle::BoldItalic
        )
    }
}

/// TeX line styles, from largest to smallest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum LineStyle {
    /// Display style (`\displaystyle`)
    Display,
    /// Text style (`\textstyle`)
    #[default]
    Text,
    /// First-level scripts (`\scriptstyle`)
    Script,
    /// Second-level scripts (`\scriptscriptstyle`)
    ScriptScript,
}

impl LineStyle {
    /// Style used for sub/superscripts of an atom in this style
    pub fn script_style(&self) -> LineStyle {
        match self {
            LineStyle::Display | LineStyle::Text => LineStyle::Script,
            LineStyle::Script | LineStyle::ScriptScript => LineStyle::ScriptScript,
        }
    }

    /// Whether large operators place limits above and below by default
    pub fn is_display(&self) -> bool {
        matches!(self, LineStyle::Display)
    }
}
