//! Text buffer, cursor and selection state.
//!
//! [`EditModel`] owns the single line of text and the two offsets that
//! describe cursor and selection. All offsets are byte offsets into the
//! `String`, kept on grapheme cluster boundaries at all times; inbound
//! offsets from callers are snapped, never rejected.
//!
//! The selection is the pair (anchor, cursor): the anchor is the fixed end,
//! the cursor the active end. The selection is empty when the two are equal,
//! and its display range is always `min..max` regardless of drag direction.

use unicode_segmentation::UnicodeSegmentation;

/// Text buffer with cursor and selection.
#[derive(Debug, Clone, Default)]
pub struct EditModel {
    text: String,
    /// Active end of the selection; the caret position.
    cursor: usize,
    /// Fixed end of the selection. Equal to `cursor` when nothing is
    /// selected.
    anchor: usize,
}

impl EditModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model with initial text, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            text,
            cursor: end,
            anchor: end,
        }
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole text; cursor moves to the end, selection collapses.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
        self.anchor = self.cursor;
    }

    /// The cursor byte offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The selection anchor byte offset.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Whether a non-empty selection exists.
    pub fn has_selection(&self) -> bool {
        self.anchor != self.cursor
    }

    /// Selection range as ordered `(start, end)` byte offsets. Equal values
    /// when the selection is empty.
    pub fn selection(&self) -> (usize, usize) {
        (
            self.anchor.min(self.cursor),
            self.anchor.max(self.cursor),
        )
    }

    /// The selected text, empty when nothing is selected.
    pub fn selected_text(&self) -> &str {
        let (start, end) = self.selection();
        &self.text[start..end]
    }

    /// Set the selection to `from..to`, both clamped and snapped. The cursor
    /// lands on `to`.
    pub fn set_selection(&mut self, from: usize, to: usize) {
        self.anchor = self.snap(from);
        self.cursor = self.snap(to);
    }

    /// Select the whole buffer, cursor at the end.
    pub fn select_all(&mut self) {
        self.anchor = 0;
        self.cursor = self.text.len();
    }

    /// Insert text at the cursor; the cursor advances past it and the
    /// selection collapses there. Callers that want typed input to replace a
    /// selection delete it first.
    pub fn insert(&mut self, text: &str) {
        self.text.insert_str(self.cursor, text);
        self.cursor += text.len();
        self.anchor = self.cursor;
    }

    /// Delete the selected range, leaving the cursor at its start. Returns
    /// `false` (and does nothing) when the selection is empty.
    pub fn delete_selection(&mut self) -> bool {
        if !self.has_selection() {
            return false;
        }
        let (start, end) = self.selection();
        self.text.replace_range(start..end, "");
        self.cursor = start;
        self.anchor = start;
        true
    }

    /// Delete one grapheme after (`forward`) or before (`!forward`) the
    /// cursor. No-op at the corresponding buffer boundary. Collapses the
    /// selection to the cursor.
    pub fn delete_char(&mut self, forward: bool) {
        if forward && self.cursor < self.text.len() {
            let next = self.next_boundary(self.cursor);
            self.text.replace_range(self.cursor..next, "");
        } else if !forward && self.cursor > 0 {
            let prev = self.prev_boundary(self.cursor);
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
        self.anchor = self.cursor;
    }

    /// Move the cursor by `delta` graphemes.
    ///
    /// When not extending and a selection exists, the move collapses the
    /// cursor to the selection edge in the direction of travel instead of
    /// stepping: left arrow exits at the selection start, right arrow at its
    /// end. When extending, the anchor stays put and the cursor steps,
    /// clamped at the buffer bounds.
    pub fn move_cursor(&mut self, delta: isize, extend: bool) {
        if !extend && self.has_selection() && delta != 0 {
            let (start, end) = self.selection();
            self.cursor = if delta < 0 { start } else { end };
            self.anchor = self.cursor;
            return;
        }

        for _ in 0..delta.unsigned_abs() {
            if delta < 0 {
                if self.cursor == 0 {
                    break;
                }
                self.cursor = self.prev_boundary(self.cursor);
            } else {
                if self.cursor == self.text.len() {
                    break;
                }
                self.cursor = self.next_boundary(self.cursor);
            }
        }
        if !extend {
            self.anchor = self.cursor;
        }
    }

    /// Place the cursor at an absolute offset (clamped and snapped),
    /// optionally extending the selection.
    pub fn set_cursor(&mut self, offset: usize, extend: bool) {
        self.cursor = self.snap(offset);
        if !extend {
            self.anchor = self.cursor;
        }
    }

    /// Word-wise move left: skip the run of spaces before the cursor, then
    /// the run of non-spaces.
    ///
    /// This is the character-class scan of classic line editors, with the
    /// ASCII space as the only separator; it intentionally keeps that exact
    /// behavior rather than a Unicode word-boundary algorithm.
    pub fn move_word_left(&mut self, extend: bool) {
        while self.cursor > 0 && self.char_before(self.cursor) == Some(' ') {
            self.move_cursor(-1, extend);
        }
        while self.cursor > 0 && self.char_before(self.cursor) != Some(' ') {
            self.move_cursor(-1, extend);
        }
    }

    /// Word-wise move right: skip the run of non-spaces at the cursor, then
    /// the run of spaces. Same character-class scan as
    /// [`move_word_left`](Self::move_word_left).
    pub fn move_word_right(&mut self, extend: bool) {
        while self.cursor < self.text.len() && self.char_at(self.cursor) != Some(' ') {
            self.move_cursor(1, extend);
        }
        while self.cursor < self.text.len() && self.char_at(self.cursor) == Some(' ') {
            self.move_cursor(1, extend);
        }
    }

    /// Start offset of the space-delimited token ending at the cursor.
    /// Scans backward while the previous character is not an ASCII space.
    pub fn word_start_before_cursor(&self) -> usize {
        let mut start = self.cursor;
        while start > 0 {
            let prev = self.prev_boundary(start);
            if self.text[prev..start].starts_with(' ') {
                break;
            }
            start = prev;
        }
        start
    }

    // ---------------------------------------------------------------------
    // Boundary helpers
    // ---------------------------------------------------------------------

    fn char_before(&self, pos: usize) -> Option<char> {
        self.text[..pos].chars().next_back()
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.text[pos..].chars().next()
    }

    /// Previous grapheme boundary strictly before `pos`.
    fn prev_boundary(&self, pos: usize) -> usize {
        self.text[..pos]
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Next grapheme boundary strictly after `pos`.
    fn next_boundary(&self, pos: usize) -> usize {
        self.text[pos..]
            .graphemes(true)
            .next()
            .map(|g| pos + g.len())
            .unwrap_or(self.text.len())
    }

    /// Clamp `pos` into the buffer and snap it to the nearest grapheme
    /// boundary, ties toward the earlier one.
    pub fn snap(&self, pos: usize) -> usize {
        if pos >= self.text.len() {
            return self.text.len();
        }
        let mut offset = 0;
        for g in self.text.graphemes(true) {
            let next = offset + g.len();
            if pos <= offset {
                return offset;
            }
            if pos < next {
                return if pos - offset <= next - pos { offset } else { next };
            }
            offset = next;
        }
        self.text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_advances_cursor_and_collapses() {
        let mut m = EditModel::new();
        m.insert("hello");
        assert_eq!(m.text(), "hello");
        assert_eq!(m.cursor(), 5);
        assert!(!m.has_selection());
    }

    #[test]
    fn insert_then_delete_restores_buffer_and_cursor() {
        let mut m = EditModel::with_text("abcdef");
        m.set_cursor(3, false);
        m.insert("XY");
        assert_eq!(m.text(), "abcXYdef");
        m.set_selection(3, 5);
        m.delete_selection();
        assert_eq!(m.text(), "abcdef");
        assert_eq!(m.cursor(), 3);
    }

    #[test]
    fn delete_char_at_boundaries_is_noop() {
        let mut m = EditModel::with_text("ab");
        m.set_cursor(0, false);
        m.delete_char(false);
        assert_eq!(m.text(), "ab");
        m.set_cursor(2, false);
        m.delete_char(true);
        assert_eq!(m.text(), "ab");
    }

    #[test]
    fn delete_char_handles_multibyte() {
        let mut m = EditModel::with_text("aéb");
        m.set_cursor(3, false); // after 'é'
        m.delete_char(false);
        assert_eq!(m.text(), "ab");
        assert_eq!(m.cursor(), 1);
    }

    #[test]
    fn selection_is_ordered_on_read() {
        let mut m = EditModel::with_text("abcdef");
        m.set_selection(5, 2);
        assert_eq!(m.selection(), (2, 5));
        assert_eq!(m.selected_text(), "cde");
        assert_eq!(m.cursor(), 2);
    }

    #[test]
    fn set_selection_clamps_out_of_range() {
        let mut m = EditModel::with_text("abc");
        m.set_selection(100, 200);
        assert_eq!(m.selection(), (3, 3));
        assert!(!m.has_selection());
    }

    #[test]
    fn move_left_collapses_to_selection_start() {
        let mut m = EditModel::with_text("abcdef");
        m.set_selection(2, 5);
        m.move_cursor(-1, false);
        assert_eq!(m.cursor(), 2);
        assert!(!m.has_selection());
    }

    #[test]
    fn move_right_collapses_to_selection_end() {
        let mut m = EditModel::with_text("abcdef");
        m.set_selection(5, 2); // backward drag; end is still 5
        m.move_cursor(1, false);
        assert_eq!(m.cursor(), 5);
        assert!(!m.has_selection());
    }

    #[test]
    fn extending_move_keeps_anchor() {
        let mut m = EditModel::with_text("hello");
        m.set_cursor(0, false);
        m.move_cursor(1, true);
        m.move_cursor(1, true);
        assert_eq!(m.selection(), (0, 2));
        assert_eq!(m.selected_text(), "he");
    }

    #[test]
    fn move_clamps_at_bounds() {
        let mut m = EditModel::with_text("ab");
        m.move_cursor(10, false);
        assert_eq!(m.cursor(), 2);
        m.move_cursor(-10, false);
        assert_eq!(m.cursor(), 0);
    }

    #[test]
    fn select_all_spans_buffer() {
        let mut m = EditModel::with_text("abc");
        m.select_all();
        assert_eq!(m.selection(), (0, 3));
        assert_eq!(m.cursor(), 3);
    }

    #[test]
    fn word_left_skips_spaces_then_word() {
        let mut m = EditModel::with_text("foo   bar");
        m.set_cursor(9, false);
        m.move_word_left(false);
        assert_eq!(m.cursor(), 6); // start of "bar"
        m.move_word_left(false);
        assert_eq!(m.cursor(), 0); // spaces, then "foo"
    }

    #[test]
    fn word_right_skips_word_then_spaces() {
        let mut m = EditModel::with_text("foo   bar");
        m.set_cursor(0, false);
        m.move_word_right(false);
        assert_eq!(m.cursor(), 6); // past "foo" and the spaces
        m.move_word_right(false);
        assert_eq!(m.cursor(), 9);
    }

    #[test]
    fn word_left_from_mid_word_stops_at_word_start() {
        let mut m = EditModel::with_text("foo bar");
        m.set_cursor(6, false); // inside "bar"
        m.move_word_left(false);
        assert_eq!(m.cursor(), 4);
    }

    #[test]
    fn word_move_with_selection_collapses_first() {
        // The scan steps through move_cursor, so an active selection is
        // collapsed by the first step before any real movement happens.
        let mut m = EditModel::with_text("foo bar");
        m.set_selection(5, 6);
        m.move_word_left(false);
        assert_eq!(m.cursor(), 4);
        assert!(!m.has_selection());
    }

    #[test]
    fn snap_rounds_to_nearest_boundary() {
        let m = EditModel::with_text("aéb"); // 'é' spans bytes 1..3
        assert_eq!(m.snap(0), 0);
        assert_eq!(m.snap(2), 1); // tie between 1 and 3 goes earlier
        assert_eq!(m.snap(3), 3);
        assert_eq!(m.snap(99), 4);
    }

    #[test]
    fn word_start_before_cursor_scans_to_space() {
        let mut m = EditModel::with_text("print pri");
        m.set_cursor(9, false);
        assert_eq!(m.word_start_before_cursor(), 6);
        m.set_cursor(5, false);
        assert_eq!(m.word_start_before_cursor(), 0);
    }
}
