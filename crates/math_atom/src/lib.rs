//! Math Atom - The LaTeX math model and its symbol tables
//!
//! This crate provides:
//! - `MathAtom` and `MathList`, the tree a LaTeX formula parses into
//! - Tables, spaces, styles and colors carried by atoms
//! - Static symbol tables mapping LaTeX commands and ASCII input to atoms
//! - The tokenizer dictionary used to read atoms off LaTeX source

pub mod atom;
pub mod color;
mod commands;
pub mod error;
pub mod math_list;
pub mod range;
pub mod space;
pub mod style;
pub mod symbols;
pub mod table;

pub use atom::{AtomKind, Boundary, MathAtom, PLACEHOLDER_NUCLEUS};
pub use color::Color;
pub use error::*;
pub use math_list::MathList;
pub use range::AtomRange;
pub use space::{Space, MU_PER_EM};
pub use style::{FontStyle, LineStyle};
pub use symbols::{
    atom_for_command, boundary_delimiters, command_dictionary, command_for_atom, commands,
    divide, font_styles, for_ascii, placeholder, placeholder_list, times,
};
pub use table::{ColumnAlignment, Table};
