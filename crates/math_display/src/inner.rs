//! Displays for `\left ... \right` groups

use crate::context::GraphicsContext;
use crate::display::{draw_background, Display};
use crate::geometry::Point;
use crate::list::ListDisplay;
use math_atom::{AtomRange, Color};

type Delimiter<F, G> = Option<Box<dyn Display<F, G>>>;

/// An inner list between optional left and right delimiters
///
/// The delimiters and the inner list are positioned in the parent's
/// coordinates, laid out left to right from this display's position.
pub struct InnerDisplay<F, G> {
    inner: ListDisplay<F, G>,
    left: Delimiter<F, G>,
    right: Delimiter<F, G>,
    range: AtomRange,
    position: Point,
    has_script: bool,
    text_color: Option<Color>,
    back_color: Option<Color>,
}

impl<F, G> InnerDisplay<F, G> {
    pub fn new(
        inner: ListDisplay<F, G>,
        left: Delimiter<F, G>,
        right: Delimiter<F, G>,
        range: AtomRange,
    ) -> Self {
        Self {
            inner,
            left,
            right,
            range,
            position: Point::origin(),
            has_script: false,
            text_color: None,
            back_color: None,
        }
    }

    pub fn inner(&self) -> &ListDisplay<F, G> {
        &self.inner
    }

    pub fn left(&self) -> Option<&dyn Display<F, G>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&dyn Display<F, G>> {
        self.right.as_deref()
    }
}

fn metric<F, G>(delimiter: &Delimiter<F, G>, f: impl Fn(&dyn Display<F, G>) -> f32) -> f32 {
    delimiter.as_ref().map_or(0.0, |d| f(&**d))
}

impl<F, G> Display<F, G> for InnerDisplay<F, G> {
    fn ascent(&self) -> f32 {
        let ascent = |d: &dyn Display<F, G>| d.ascent();
        metric(&self.left, ascent)
            .max(metric(&self.right, ascent))
            .max(self.inner.ascent())
    }

    fn descent(&self) -> f32 {
        let descent = |d: &dyn Display<F, G>| d.descent();
        metric(&self.left, descent)
            .max(metric(&self.right, descent))
            .max(self.inner.descent())
    }

    fn width(&self) -> f32 {
        let width = |d: &dyn Display<F, G>| d.width();
        metric(&self.left, width) + self.inner.width() + metric(&self.right, width)
    }

    fn range(&self) -> AtomRange {
        self.range
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
        match &mut self.left {
            Some(left) => {
                left.set_position(position);
                self.inner.set_position(position.with_x(position.x + left.width()));
            }
            None => self.inner.set_position(position),
        }
        if let Some(right) = &mut self.right {
            let inner = self.inner.position();
            right.set_position(inner.with_x(inner.x + self.inner.width()));
        }
    }

    fn has_script(&self) -> bool {
        self.has_script
    }

    fn set_has_script(&mut self, has_script: bool) {
        self.has_script = has_script;
    }

    fn draw(&self, context: &mut dyn GraphicsContext<F, G>) {
        draw_background(self, context);
        if let Some(left) = &self.left {
            left.draw(context);
        }
        if let Some(right) = &self.right {
            right.draw(context);
        }
        self.inner.draw(context);
    }

    fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    fn set_text_color_recursive(&mut self, color: Option<Color>) {
        self.text_color = self.text_color.or(color);
        if let Some(left) = &mut self.left {
            left.set_text_color_recursive(color);
        }
        if let Some(right) = &mut self.right {
            right.set_text_color_recursive(color);
        }
        self.inner.set_text_color_recursive(color);
    }

    fn back_color(&self) -> Option<Color> {
        self.back_color
    }

    fn set_back_color(&mut self, color: Option<Color>) {
        self.back_color = color;
    }
}
