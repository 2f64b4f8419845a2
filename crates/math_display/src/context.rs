//! Drawing backend abstraction
//!
//! Displays never talk to a rendering library directly. They issue calls on a
//! [`GraphicsContext`], which a backend implements for its font and glyph
//! types. [`RecordingContext`] captures those calls as data, for headless
//! output and for tests.

use crate::geometry::{Point, Rect};
use math_atom::Color;
use serde::{Deserialize, Serialize};

/// Capabilities a drawing backend provides, generic over its font `F` and glyph `G`
pub trait GraphicsContext<F, G> {
    /// Push the current transform and text position
    fn save_state(&mut self);
    /// Pop back to the last saved state
    fn restore_state(&mut self);
    /// Move the origin of subsequent drawing
    fn translate(&mut self, offset: Point);
    /// Restrict subsequent drawing to `rect` until the matching [`pop_clip`](Self::pop_clip)
    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);
    fn set_text_position(&mut self, position: Point);
    /// Draw glyphs at points relative to the text position; `None` uses the context's color
    fn draw_glyphs_at_points(
        &mut self,
        glyphs: &[G],
        font: &F,
        points: &[Point],
        color: Option<Color>,
    );
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32);
    fn draw_line(&mut self, from: Point, to: Point, line_width: f32, color: Option<Color>);
}

// =============================================================================
// Recording context
// =============================================================================

/// A drawing call captured by [`RecordingContext`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand<G> {
    SaveState,
    RestoreState,
    Translate(Point),
    SetTextPosition(Point),
    PushClip(Rect),
    PopClip,
    Glyphs {
        glyphs: Vec<G>,
        points: Vec<Point>,
        color: Option<Color>,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        line_width: f32,
    },
    Line {
        from: Point,
        to: Point,
        line_width: f32,
        color: Option<Color>,
    },
}

/// Context that records every call instead of drawing
///
/// Also tracks the effective origin so glyph draws can be checked in absolute
/// coordinates, and the clip rectangles currently pushed.
#[derive(Debug, Clone)]
pub struct RecordingContext<G> {
    pub commands: Vec<DrawCommand<G>>,
    origin: Point,
    saved: Vec<Point>,
    clips: Vec<Rect>,
}

impl<G> Default for RecordingContext<G> {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            origin: Point::origin(),
            saved: Vec::new(),
            clips: Vec::new(),
        }
    }
}

impl<G> RecordingContext<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current origin after all translations
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Depth of unrestored saves
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Innermost clip, in the coordinates it was pushed with
    pub fn clip(&self) -> Option<Rect> {
        self.clips.last().copied()
    }

    /// Glyph draws only
    pub fn glyph_draws(&self) -> impl Iterator<Item = &DrawCommand<G>> {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Glyphs { .. }))
    }
}

impl<F, G: Clone> GraphicsContext<F, G> for RecordingContext<G> {
    fn save_state(&mut self) {
        self.saved.push(self.origin);
        self.commands.push(DrawCommand::SaveState);
    }

    fn restore_state(&mut self) {
        match self.saved.pop() {
            Some(origin) => self.origin = origin,
            None => tracing::warn!("restore_state without matching save_state"),
        }
        self.commands.push(DrawCommand::RestoreState);
    }

    fn translate(&mut self, offset: Point) {
        self.origin = self.origin + offset;
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clips.push(rect);
        self.commands.push(DrawCommand::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        if self.clips.pop().is_none() {
            tracing::warn!("pop_clip without matching push_clip");
        }
        self.commands.push(DrawCommand::PopClip);
    }

    fn set_text_position(&mut self, position: Point) {
        self.commands.push(DrawCommand::SetTextPosition(position));
    }

    fn draw_glyphs_at_points(
        &mut self,
        glyphs: &[G],
        _font: &F,
        points: &[Point],
        color: Option<Color>,
    ) {
        self.commands.push(DrawCommand::Glyphs {
            glyphs: glyphs.to_vec(),
            points: points.iter().map(|p| *p + self.origin).collect(),
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color,
            line_width,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, line_width: f32, color: Option<Color>) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            line_width,
            color,
        });
    }
}
