//! Drawing a finished display tree
//!
//! The renderer owns the settings that apply to a whole tree: the inherited
//! text color and an optional background behind everything.

use crate::context::GraphicsContext;
use crate::display::Display;
use math_atom::Color;
use serde::{Deserialize, Serialize};

/// Configuration for rendering a display tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Color for displays that don't set their own
    pub text_color: Color,
    /// Fill behind the whole tree
    pub background: Option<Color>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            text_color: Color::BLACK,
            background: None,
        }
    }
}

/// Renders display trees into a graphics context
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Color the tree, then draw it
    ///
    /// Colors already set in the tree win over the configured text color.
    pub fn render<F, G>(
        &self,
        display: &mut dyn Display<F, G>,
        context: &mut dyn GraphicsContext<F, G>,
    ) {
        display.set_text_color_recursive(Some(self.config.text_color));
        if let Some(background) = self.config.background {
            context.save_state();
            context.fill_rect(display.display_bounds(), background);
            context.restore_state();
        }
        let (width, ascent, descent) = (display.width(), display.ascent(), display.descent());
        tracing::trace!(width, ascent, descent, "rendering display tree");
        display.draw(context);
    }
}

/// Render `display` with `config`
pub fn render<F, G>(
    display: &mut dyn Display<F, G>,
    context: &mut dyn GraphicsContext<F, G>,
    config: &RenderConfig,
) {
    Renderer::with_config(config.clone()).render(display, context);
}
