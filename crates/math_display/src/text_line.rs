//! Runs of glyphs set on one baseline

use crate::context::GraphicsContext;
use crate::display::{draw_background, Display};
use crate::geometry::Point;
use math_atom::{AtomRange, Color};
use serde::{Deserialize, Serialize};

/// A glyph in a text line with its spacing and optional color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphInfo<G> {
    pub glyph: G,
    /// Horizontal advance from the font metrics
    pub advance: f32,
    /// Extra space after the glyph, usually from kerning
    pub kern_after_glyph: f32,
    /// Overrides the line's text color for this glyph
    pub foreground: Option<Color>,
}

impl<G> GlyphInfo<G> {
    pub fn new(glyph: G, advance: f32) -> Self {
        Self {
            glyph,
            advance,
            kern_after_glyph: 0.0,
            foreground: None,
        }
    }

    pub fn with_kern(mut self, kern: f32) -> Self {
        self.kern_after_glyph = kern;
        self
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }
}

/// A line of glyphs in one font, drawn left to right from the position
#[derive(Debug, Clone)]
pub struct TextLineDisplay<F, G> {
    pub font: F,
    glyphs: Vec<GlyphInfo<G>>,
    ascent: f32,
    descent: f32,
    range: AtomRange,
    position: Point,
    has_script: bool,
    text_color: Option<Color>,
    back_color: Option<Color>,
}

impl<F, G> TextLineDisplay<F, G> {
    pub fn new(
        font: F,
        glyphs: Vec<GlyphInfo<G>>,
        range: AtomRange,
        ascent: f32,
        descent: f32,
    ) -> Self {
        Self {
            font,
            glyphs,
            ascent,
            descent,
            range,
            position: Point::origin(),
            has_script: false,
            text_color: None,
            back_color: None,
        }
    }

    pub fn glyphs(&self) -> &[GlyphInfo<G>] {
        &self.glyphs
    }

    /// Glyph origins relative to the line's position
    pub fn glyph_positions(&self) -> Vec<Point> {
        let mut x = 0.0;
        self.glyphs
            .iter()
            .map(|info| {
                let point = Point::new(x, 0.0);
                x += info.advance + info.kern_after_glyph;
                point
            })
            .collect()
    }
}

impl<F, G: Clone> Display<F, G> for TextLineDisplay<F, G> {
    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn descent(&self) -> f32 {
        self.descent
    }

    fn width(&self) -> f32 {
        self.glyphs
            .iter()
            .map(|info| info.advance + info.kern_after_glyph)
            .sum()
    }

    fn range(&self) -> AtomRange {
        self.range
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn has_script(&self) -> bool {
        self.has_script
    }

    fn set_has_script(&mut self, has_script: bool) {
        self.has_script = has_script;
    }

    fn draw(&self, context: &mut dyn GraphicsContext<F, G>) {
        draw_background(self, context);
        context.save_state();
        context.translate(self.position);
        context.set_text_position(Point::origin());

        let positions = self.glyph_positions();
        let mut start = 0;
        while start < self.glyphs.len() {
            let color = self.glyphs[start].foreground.or(self.text_color);
            let end = self.glyphs[start..]
                .iter()
                .position(|info| info.foreground.or(self.text_color) != color)
                .map_or(self.glyphs.len(), |len| start + len);
            let glyphs: Vec<G> = self.glyphs[start..end]
                .iter()
                .map(|info| info.glyph.clone())
                .collect();
            context.draw_glyphs_at_points(&glyphs, &self.font, &positions[start..end], color);
            start = end;
        }

        context.restore_state();
    }

    fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    fn set_text_color_recursive(&mut self, color: Option<Color>) {
        self.text_color = self.text_color.or(color);
    }

    fn back_color(&self) -> Option<Color> {
        self.back_color
    }

    fn set_back_color(&mut self, color: Option<Color>) {
        self.back_color = color;
    }
}
