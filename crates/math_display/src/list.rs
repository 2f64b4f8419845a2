//! Horizontal lists of displays

use crate::context::GraphicsContext;
use crate::display::{draw_background, Display};
use crate::geometry::Point;
use math_atom::{AtomRange, Color};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a list sits relative to the atom that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LinePosition {
    #[default]
    Regular,
    Subscript,
    Superscript,
}

/// A row of child displays positioned relative to the list
///
/// The list's metrics always cover its children: call
/// [`recompute_dimensions`](Self::recompute_dimensions) after moving a child
/// through [`children_mut`](Self::children_mut).
pub struct ListDisplay<F, G> {
    children: Vec<Box<dyn Display<F, G>>>,
    pub line_position: LinePosition,
    /// Index of the atom this list is a script of, for sub/superscript lists
    pub index_in_parent: Option<usize>,
    ascent: f32,
    descent: f32,
    width: f32,
    range: AtomRange,
    position: Point,
    has_script: bool,
    text_color: Option<Color>,
    back_color: Option<Color>,
}

impl<F, G> ListDisplay<F, G> {
    pub fn new(children: Vec<Box<dyn Display<F, G>>>) -> Self {
        let mut list = Self {
            children,
            line_position: LinePosition::Regular,
            index_in_parent: None,
            ascent: 0.0,
            descent: 0.0,
            width: 0.0,
            range: AtomRange::default(),
            position: Point::origin(),
            has_script: false,
            text_color: None,
            back_color: None,
        };
        list.recompute_dimensions();
        list
    }

    /// A script list hanging off the atom at `index_in_parent`
    pub fn script(
        children: Vec<Box<dyn Display<F, G>>>,
        line_position: LinePosition,
        index_in_parent: usize,
    ) -> Self {
        let mut list = Self::new(children);
        list.line_position = line_position;
        list.index_in_parent = Some(index_in_parent);
        list
    }

    pub fn children(&self) -> &[Box<dyn Display<F, G>>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Box<dyn Display<F, G>>] {
        &mut self.children
    }

    pub fn push(&mut self, child: Box<dyn Display<F, G>>) {
        self.children.push(child);
        self.recompute_dimensions();
    }

    /// Refresh ascent, descent, width and range from the children
    pub fn recompute_dimensions(&mut self) {
        let mut ascent = 0.0_f32;
        let mut descent = 0.0_f32;
        let mut width = 0.0_f32;
        let mut range: Option<AtomRange> = None;
        for child in &self.children {
            let position = child.position();
            ascent = ascent.max(child.ascent() + position.y);
            descent = descent.max(child.descent() - position.y);
            width = width.max(position.x + child.width());
            range = Some(match range {
                Some(range) => range.union(child.range()),
                None => child.range(),
            });
        }
        self.ascent = ascent;
        self.descent = descent;
        self.width = width;
        self.range = range.unwrap_or_default();
    }
}

impl<F, G> Display<F, G> for ListDisplay<F, G> {
    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn descent(&self) -> f32 {
        self.descent
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
        context.translate(self.position);
        context.set_text_position(Point::origin());
        for child in &self.children {
            child.draw(context);
        }
        context.restore_state();
    }

    fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    // Children inherit the list's own color, which may predate `color`
    fn set_text_color_recursive(&mut self, color: Option<Color>) {
        self.text_color = self.text_color.or(color);
        for child in &mut self.children {
            child.set_text_color_recursive(self.text_color);
        }
    }

    fn back_color(&self) -> Option<Color> {
        self.back_color
    }

    fn set_back_color(&mut self, color: Option<Color>) {
        self.back_color = color;
    }
}

impl<F, G> fmt::Debug for ListDisplay<F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListDisplay")
            .field("children", &self.children.len())
            .field("line_position", &self.line_position)
            .field("position", &self.position)
            .field("range", &self.range)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{DrawCommand, RecordingContext};
    use crate::glyph::GlyphDisplay;

    fn glyph_at(c: char, index: usize, x: f32, y: f32) -> Box<dyn Display<(), char>> {
        let mut glyph = GlyphDisplay::new(c, (), AtomRange::new(index, 1), 10.0, 3.0, 6.0);
        glyph.set_position(Point::new(x, y));
        Box::new(glyph)
    }

    #[test]
    fn test_dimensions_cover_children() {
        let list = ListDisplay::new(vec![
            glyph_at('a', 0, 0.0, 0.0),
            glyph_at('b', 1, 6.0, 4.0),
            glyph_at('c', 2, 12.0, -5.0),
        ]);
        assert_eq!(list.ascent(), 14.0);
        assert_eq!(list.descent(), 8.0);
        assert_eq!(list.width(), 18.0);
        assert_eq!(list.range(), AtomRange::new(0, 3));
    }

    #[test]
    fn test_empty_list() {
        let list: ListDisplay<(), char> = ListDisplay::new(Vec::new());
        assert_eq!(list.ascent(), 0.0);
        assert_eq!(list.descent(), 0.0);
        assert_eq!(list.width(), 0.0);
        assert!(list.range().is_empty());
    }

    #[test]
    fn test_recompute_after_moving_child() {
        let mut list = ListDisplay::new(vec![glyph_at('a', 0, 0.0, 0.0)]);
        list.children_mut()[0].set_position(Point::new(10.0, 2.0));
        assert_eq!(list.width(), 6.0);
        list.recompute_dimensions();
        assert_eq!(list.width(), 16.0);
        assert_eq!(list.ascent(), 12.0);

        list.push(glyph_at('b', 5, 20.0, 0.0));
        assert_eq!(list.width(), 26.0);
        assert_eq!(list.range(), AtomRange::new(0, 6));
    }

    #[test]
    fn test_draw_translates_children() {
        let mut list =
            ListDisplay::new(vec![glyph_at('a', 0, 0.0, 0.0), glyph_at('b', 1, 6.0, 0.0)]);
        list.set_position(Point::new(50.0, 10.0));
        let mut ctx: RecordingContext<char> = RecordingContext::new();
        list.draw(&mut ctx);

        assert_eq!(ctx.commands[0], DrawCommand::SaveState);
        assert_eq!(ctx.commands[1], DrawCommand::Translate(Point::new(50.0, 10.0)));
        assert_eq!(ctx.commands[2], DrawCommand::SetTextPosition(Point::origin()));
        let points: Vec<Point> = ctx
            .glyph_draws()
            .filter_map(|draw| match draw {
                DrawCommand::Glyphs { points, .. } => points.first().copied(),
                _ => None,
            })
            .collect();
        assert_eq!(points, [Point::new(50.0, 10.0), Point::new(56.0, 10.0)]);
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn test_color_inherited_by_children() {
        let mut colored = GlyphDisplay::new('b', (), AtomRange::new(1, 1), 10.0, 3.0, 6.0);
        colored.set_text_color_recursive(Some(Color::RED));
        let mut list = ListDisplay::new(vec![glyph_at('a', 0, 0.0, 0.0), Box::new(colored)]);

        list.set_text_color_recursive(Some(Color::BLUE));
        list.set_text_color_recursive(Some(Color::GREEN));

        assert_eq!(list.text_color(), Some(Color::BLUE));
        assert_eq!(list.children()[0].text_color(), Some(Color::BLUE));
        assert_eq!(list.children()[1].text_color(), Some(Color::RED));
    }

    #[test]
    fn test_script_list() {
        let list =
            ListDisplay::script(vec![glyph_at('2', 0, 0.0, 0.0)], LinePosition::Superscript, 3);
        assert_eq!(list.line_position, LinePosition::Superscript);
        assert_eq!(list.index_in_parent, Some(3));
    }
}
