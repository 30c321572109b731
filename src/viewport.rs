//! Horizontal viewport: keeps the cursor inside the visible client width.
//!
//! The viewport is one scalar, the horizontal pixel scroll offset. It is
//! derived from the cursor position and the client width — the user never
//! sets it directly — and is applied as a translation when painting and when
//! mapping mouse positions back to text offsets.

use unicode_segmentation::UnicodeSegmentation;

use crate::font::Font;
use crate::metrics::TextMetrics;

/// Horizontal scroll state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Viewport {
    scroll: f32,
}

impl Viewport {
    /// Create a viewport at scroll position zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scroll offset in pixels, always `>= 0`.
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Reset scroll to zero.
    pub fn reset(&mut self) {
        self.scroll = 0.0;
    }

    /// Adjust scroll so a cursor at `cursor_px` (pixels from text start)
    /// falls inside `[0, visible_width]` on screen.
    ///
    /// When the cursor is off the right edge it gets pinned to the right
    /// edge; off the left edge, to the left edge. Scroll never goes
    /// negative.
    pub fn ensure_visible(&mut self, cursor_px: f32, visible_width: f32) {
        if visible_width <= 0.0 {
            return;
        }

        let on_screen = cursor_px - self.scroll;
        if on_screen > visible_width {
            self.scroll = cursor_px - visible_width;
        } else if on_screen < 0.0 {
            self.scroll = cursor_px;
        }

        if self.scroll < 0.0 {
            self.scroll = 0.0;
        }
    }

    /// Map an x position (pixels from the text area's left edge, before
    /// scrolling) to the nearest grapheme boundary byte offset in `text`.
    ///
    /// Scans increasing prefix widths and rounds to the closer of the two
    /// surrounding boundaries; an exact tie resolves to the later offset.
    pub fn offset_at_point(
        &self,
        metrics: &dyn TextMetrics,
        font: &Font,
        text: &str,
        x: f32,
    ) -> usize {
        let target = x + self.scroll;
        if target <= 0.0 {
            return 0;
        }

        let boundaries: Vec<usize> = std::iter::once(0)
            .chain(text.grapheme_indices(true).map(|(i, g)| i + g.len()))
            .collect();

        let mut prev_width = 0.0;
        for (idx, &boundary) in boundaries.iter().enumerate() {
            let width = metrics.text_width(font, &text[..boundary]);
            if boundary == text.len() || width > target {
                if idx > 0 && width - target > target - prev_width {
                    return boundaries[idx - 1];
                }
                return boundary;
            }
            prev_width = width;
        }

        text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FixedAdvance;

    const ADVANCE: f32 = 8.0;

    fn metrics() -> FixedAdvance {
        FixedAdvance::new(ADVANCE, 16.0)
    }

    #[test]
    fn cursor_pinned_to_right_edge() {
        let mut vp = Viewport::new();
        vp.ensure_visible(200.0, 80.0);
        assert_eq!(vp.scroll(), 120.0);
    }

    #[test]
    fn cursor_pinned_to_left_edge() {
        let mut vp = Viewport::new();
        vp.ensure_visible(200.0, 80.0);
        vp.ensure_visible(40.0, 80.0);
        assert_eq!(vp.scroll(), 40.0);
    }

    #[test]
    fn scroll_never_negative() {
        let mut vp = Viewport::new();
        vp.ensure_visible(0.0, 80.0);
        assert_eq!(vp.scroll(), 0.0);
    }

    #[test]
    fn visible_cursor_leaves_scroll_alone() {
        let mut vp = Viewport::new();
        vp.ensure_visible(200.0, 80.0);
        let scroll = vp.scroll();
        vp.ensure_visible(150.0, 80.0);
        assert_eq!(vp.scroll(), scroll);
    }

    #[test]
    fn offset_at_point_rounds_to_nearest() {
        let vp = Viewport::new();
        let m = metrics();
        let font = Font::default();
        let text = "abcd";

        // Boundaries sit at 0, 8, 16, 24, 32.
        assert_eq!(vp.offset_at_point(&m, &font, text, 0.0), 0);
        assert_eq!(vp.offset_at_point(&m, &font, text, 3.0), 0);
        assert_eq!(vp.offset_at_point(&m, &font, text, 5.0), 1);
        assert_eq!(vp.offset_at_point(&m, &font, text, 11.0), 1);
        assert_eq!(vp.offset_at_point(&m, &font, text, 13.0), 2);
        assert_eq!(vp.offset_at_point(&m, &font, text, 1000.0), 4);
    }

    #[test]
    fn offset_at_point_tie_goes_to_later_offset() {
        let vp = Viewport::new();
        // Exactly halfway between boundaries 8 and 16.
        assert_eq!(
            vp.offset_at_point(&metrics(), &Font::default(), "abcd", 12.0),
            2
        );
    }

    #[test]
    fn offset_at_point_accounts_for_scroll() {
        let mut vp = Viewport::new();
        vp.ensure_visible(80.0, 40.0); // scroll = 40
        assert_eq!(
            vp.offset_at_point(&metrics(), &Font::default(), "abcdefghij", 0.0),
            5
        );
    }

    #[test]
    fn offset_at_point_left_of_text_is_zero() {
        let vp = Viewport::new();
        assert_eq!(
            vp.offset_at_point(&metrics(), &Font::default(), "abc", -5.0),
            0
        );
    }

    #[test]
    fn offset_at_point_multibyte_boundaries() {
        let vp = Viewport::new();
        let m = metrics();
        let font = Font::default();
        let text = "aéb"; // boundaries at bytes 0, 1, 3, 4

        assert_eq!(vp.offset_at_point(&m, &font, text, 9.0), 1);
        assert_eq!(vp.offset_at_point(&m, &font, text, 15.0), 3);
    }
}
