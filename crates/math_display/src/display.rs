//! The display capability shared by every node of a display tree

use crate::context::GraphicsContext;
use crate::geometry::{Point, Rect};
use math_atom::{AtomRange, Color};

/// A laid-out box that knows its metrics and how to draw itself
///
/// Positions are relative to the parent list. The baseline runs through
/// `position().y`.
pub trait Display<F, G> {
    /// Distance from the baseline to the top
    fn ascent(&self) -> f32;
    /// Distance from the baseline to the bottom
    fn descent(&self) -> f32;
    fn width(&self) -> f32;
    /// Atoms this display was laid out from
    fn range(&self) -> AtomRange;
    fn position(&self) -> Point;
    fn set_position(&mut self, position: Point);
    /// Whether the display carries sub/superscripts
    fn has_script(&self) -> bool;
    fn set_has_script(&mut self, has_script: bool);
    fn draw(&self, context: &mut dyn GraphicsContext<F, G>);
    fn text_color(&self) -> Option<Color>;
    /// Give this display and its children a color, unless they already have one
    fn set_text_color_recursive(&mut self, color: Option<Color>);
    fn back_color(&self) -> Option<Color>;
    fn set_back_color(&mut self, color: Option<Color>);

    /// Bounding box in the parent's coordinates
    fn display_bounds(&self) -> Rect {
        let position = self.position();
        Rect::new(
            position.x,
            position.y - self.descent(),
            self.width(),
            self.ascent() + self.descent(),
        )
    }
}

/// Fill a display's bounds with its back color, if it has one
pub fn draw_background<F, G, D>(display: &D, context: &mut dyn GraphicsContext<F, G>)
where
    D: Display<F, G> + ?Sized,
{
    if let Some(color) = display.back_color() {
        context.save_state();
        context.fill_rect(display.display_bounds(), color);
        context.restore_state();
    }
}
