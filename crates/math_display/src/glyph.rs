//! Single-glyph displays

use crate::context::GraphicsContext;
use crate::display::{draw_background, Display};
use crate::geometry::Point;
use math_atom::{AtomRange, Color};

/// A display drawing one glyph, optionally shifted below the baseline
#[derive(Debug, Clone)]
pub struct GlyphDisplay<F, G> {
    pub glyph: G,
    pub font: F,
    /// Moves the glyph down; raises descent and lowers ascent by the same amount
    pub shift_down: f32,
    range: AtomRange,
    raw_ascent: f32,
    raw_descent: f32,
    width: f32,
    position: Point,
    has_script: bool,
    text_color: Option<Color>,
    back_color: Option<Color>,
}

impl<F, G> GlyphDisplay<F, G> {
    pub fn new(
        glyph: G,
        font: F,
        range: AtomRange,
        ascent: f32,
        descent: f32,
        width: f32,
    ) -> Self {
        Self {
            glyph,
            font,
            shift_down: 0.0,
            range,
            raw_ascent: ascent,
            raw_descent: descent,
            width,
            position: Point::origin(),
            has_script: false,
            text_color: None,
            back_color: None,
        }
    }
}

impl<F, G> Display<F, G> for GlyphDisplay<F, G> {
    fn ascent(&self) -> f32 {
        self.raw_ascent - self.shift_down
    }

    fn descent(&self) -> f32 {
        self.raw_descent + self.shift_down
    }

    fn width(&self) -> f32 {
        self.width
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
        context.translate(self.position.offset(0.0, -self.shift_down));
        context.set_text_position(Point::origin());
        context.draw_glyphs_at_points(
            std::slice::from_ref(&self.glyph),
            &self.font,
            &[Point::origin()],
            self.text_color,
        );
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
