//! Math Display - Positioned boxes for typeset math
//!
//! This crate provides:
//! - Geometry primitives in y-up coordinates
//! - The `GraphicsContext` trait drawing backends implement, plus a recording context
//! - The `Display` trait and the glyph, inner, list and text line displays
//! - A renderer applying tree-wide colors before drawing

pub mod context;
pub mod display;
pub mod geometry;
pub mod glyph;
pub mod inner;
pub mod list;
pub mod render;
pub mod text_line;

pub use context::{DrawCommand, GraphicsContext, RecordingContext};
pub use display::{draw_background, Display};
pub use geometry::{Point, Rect, Size};
pub use glyph::GlyphDisplay;
pub use inner::InnerDisplay;
pub use list::{LinePosition, ListDisplay};
pub use render::{render, RenderConfig, Renderer};
pub use text_line::{GlyphInfo, TextLineDisplay};
