//! Collaborator traits for text measurement and painting.
//!
//! The widget never talks to a font rasterizer or a GPU directly. The host
//! supplies a [`TextMetrics`] implementation for measurement and a
//! [`Painter`] implementation at paint time; both are deliberately small so
//! that any backend (software canvas, GPU renderer, test double) can satisfy
//! them.

use crate::color::Color;
use crate::font::Font;
use crate::geometry::{Point, Rect};

/// Measures text in a given font.
///
/// Widths are additive over concatenation for the widget's purposes: the
/// cursor x-position is the width of the text before the cursor. Kerning
/// across the measurement boundary is ignored, as it is in classic
/// immediate-mode text controls.
pub trait TextMetrics: Send + Sync {
    /// Pixel width of `text` rendered in `font`.
    fn text_width(&self, font: &Font, text: &str) -> f32;

    /// Pixel height of one line of `font`, including leading.
    fn line_height(&self, font: &Font) -> f32;
}

/// Paint surface handed to [`SyntaxTextEdit::paint`](crate::widget::SyntaxTextEdit::paint).
///
/// Only the operations the widget actually performs: filled rectangles, a
/// single clip rectangle, and colored text runs.
pub trait Painter {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a single run of text at `origin` (top-left of the run).
    fn draw_text(&mut self, font: &Font, text: &str, origin: Point, color: Color);

    /// Restrict subsequent drawing to `rect`.
    fn set_clip(&mut self, rect: Rect);

    /// Remove the clip set by [`set_clip`](Self::set_clip).
    fn clear_clip(&mut self);
}

/// Deterministic metrics where every Unicode scalar advances by a fixed
/// amount.
///
/// Useful for headless hosts and for tests: offsets map to pixel positions
/// by simple multiplication, so expected values are easy to state exactly.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvance {
    /// Advance per scalar value, in pixels.
    pub advance: f32,
    /// Line height, in pixels.
    pub height: f32,
}

impl FixedAdvance {
    /// Create fixed-advance metrics.
    pub const fn new(advance: f32, height: f32) -> Self {
        Self { advance, height }
    }
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl TextMetrics for FixedAdvance {
    fn text_width(&self, _font: &Font, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn line_height(&self, _font: &Font) -> f32 {
        self.height
    }
}
