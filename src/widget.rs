//! The single-line syntax-highlighting text input widget.
//!
//! [`SyntaxTextEdit`] owns the edit model, undo history, highlighter,
//! viewport, completion state and blink state, and translates host events
//! into edits. It draws itself through the [`Painter`] trait and measures
//! text through the [`TextMetrics`] implementation supplied at construction;
//! it has no direct dependency on any windowing or rendering backend.
//!
//! # Keyboard shortcuts
//!
//! - Arrow keys: move cursor (Shift extends the selection)
//! - Ctrl+Arrow: word navigation (space-delimited)
//! - Home/End: line start/end
//! - Backspace/Delete: delete backward/forward (or the selection)
//! - Ctrl/Cmd+A: select all
//! - Ctrl/Cmd+C / X / V: copy, cut, paste
//! - Ctrl/Cmd+Z: undo; Ctrl/Cmd+Y or Ctrl/Cmd+Shift+Z: redo
//! - While the completion popup shows: Up/Down move the highlight,
//!   Enter/Tab accept, Escape dismisses
//!
//! # Example
//!
//! ```ignore
//! use syntaxline::{Color, FixedAdvance, SyntaxTextEdit};
//!
//! let mut edit = SyntaxTextEdit::new(FixedAdvance::default());
//! edit.add_syntax_rule(r"\b(let|fn)\b", |_| Color::BLUE)?;
//! edit.add_syntax_rule(r"\d+", |_| Color::GREEN)?;
//! edit.set_completion_function(|prefix| lookup_candidates(prefix));
//! ```

use std::time::Duration;

use crate::blink::{BLINK_INTERVAL, CursorBlink};
use crate::clipboard::Clipboard;
use crate::color::Color;
use crate::completion::{CompletionFn, CompletionState};
use crate::events::{
    Key, KeyPressEvent, MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent,
    WidgetEvent,
};
use crate::font::{Font, FontFamily};
use crate::geometry::{Point, Rect, Size};
use crate::highlight::{ColoredSegment, HighlightError, Highlighter};
use crate::history::{EditSnapshot, History};
use crate::metrics::{Painter, TextMetrics};
use crate::model::EditModel;
use crate::viewport::Viewport;

/// Pixels between the widget's left edge and the text.
const LEFT_MARGIN: f32 = 5.0;
/// Pixels above the text baseline area.
const TOP_MARGIN: f32 = 5.0;
/// Slack kept free at the right edge when scrolling the cursor into view.
const RIGHT_GUTTER: f32 = 10.0;
/// Caret bar width.
const CURSOR_WIDTH: f32 = 2.0;

/// A single-line text input with regex syntax highlighting, bounded
/// undo/redo, selection, clipboard support and pluggable auto-completion.
pub struct SyntaxTextEdit {
    model: EditModel,
    history: History,
    highlighter: Highlighter,
    viewport: Viewport,
    completion: CompletionState,
    completion_fn: Option<CompletionFn>,
    blink: CursorBlink,

    metrics: Box<dyn TextMetrics>,
    font: Font,
    text_color: Color,
    background_color: Color,
    selection_color: Color,
    cursor_color: Color,

    client_size: Size,
    focused: bool,
    dragging: bool,
    repaint_pending: bool,
}

impl SyntaxTextEdit {
    /// Create an empty widget measuring text through `metrics`.
    pub fn new(metrics: impl TextMetrics + 'static) -> Self {
        Self {
            model: EditModel::new(),
            history: History::new(),
            highlighter: Highlighter::new(),
            viewport: Viewport::new(),
            completion: CompletionState::new(),
            completion_fn: None,
            blink: CursorBlink::new(),
            metrics: Box::new(metrics),
            font: Font::default(),
            text_color: Color::BLACK,
            background_color: Color::WHITE,
            selection_color: Color::from_rgb8(173, 214, 255),
            cursor_color: Color::BLACK,
            client_size: Size::new(200.0, 30.0),
            focused: false,
            dragging: false,
            repaint_pending: false,
        }
    }

    /// Create a widget with initial text, cursor at the end.
    pub fn with_text(metrics: impl TextMetrics + 'static, text: impl Into<String>) -> Self {
        let mut edit = Self::new(metrics);
        edit.model = EditModel::with_text(text);
        edit
    }

    // =========================================================================
    // Text Access
    // =========================================================================

    /// The current text.
    pub fn text(&self) -> &str {
        self.model.text()
    }

    /// Replace the whole text.
    ///
    /// Pushes an undo snapshot, moves the cursor to the end, collapses the
    /// selection and resets the horizontal scroll.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.save_undo_state();
        self.model.set_text(text);
        self.viewport.reset();
        self.ensure_cursor_visible();
        self.request_repaint();
        tracing::debug!(len = self.model.len(), "text replaced");
    }

    /// The cursor byte offset.
    pub fn cursor(&self) -> usize {
        self.model.cursor()
    }

    // =========================================================================
    // Syntax Rules
    // =========================================================================

    /// Append a highlighting rule; rules are evaluated in registration
    /// order, earlier rules claiming characters first.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::InvalidPattern`] for an uncompilable regex.
    pub fn add_syntax_rule(
        &mut self,
        pattern: &str,
        color: impl Fn(&str) -> Color + Send + Sync + 'static,
    ) -> Result<(), HighlightError> {
        self.highlighter.add_rule(pattern, color)?;
        self.request_repaint();
        Ok(())
    }

    /// Remove every registered syntax rule.
    pub fn clear_syntax_rules(&mut self) {
        self.highlighter.clear_rules();
        self.request_repaint();
    }

    /// The current segmentation of the text, one entry per colored run.
    /// Recomputed on each call.
    pub fn colored_segments(&self) -> Vec<ColoredSegment> {
        self.highlighter.segments(self.model.text(), self.text_color)
    }

    // =========================================================================
    // Completion
    // =========================================================================

    /// Install the completion lookup. It receives the text from buffer
    /// start to the cursor after every edit; a non-empty result shows the
    /// candidate popup.
    pub fn set_completion_function(
        &mut self,
        func: impl Fn(&str) -> Vec<String> + Send + Sync + 'static,
    ) {
        self.completion_fn = Some(Box::new(func));
    }

    /// Whether the completion popup is showing.
    pub fn completions_visible(&self) -> bool {
        self.completion.is_visible()
    }

    /// The candidate list state, for the host's popup renderer.
    pub fn completion_state(&self) -> &CompletionState {
        &self.completion
    }

    /// Commit the highlighted candidate: replaces the space-delimited token
    /// ending at the cursor and dismisses the popup. No-op while hidden.
    pub fn accept_completion(&mut self) {
        if let Some(candidate) = self.completion.selected().map(str::to_owned) {
            self.save_undo_state();
            let word_start = self.model.word_start_before_cursor();
            self.model.set_selection(word_start, self.model.cursor());
            self.model.delete_selection();
            self.model.insert(&candidate);
            self.ensure_cursor_visible();
            tracing::debug!(candidate = %candidate, "completion accepted");
        }
        self.completion.hide();
        self.request_repaint();
    }

    fn update_completions(&mut self) {
        if let Some(func) = &self.completion_fn {
            let prefix = &self.model.text()[..self.model.cursor()];
            let candidates = func(prefix);
            self.completion.set_candidates(candidates);
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Selection range as ordered `(start, end)` byte offsets; equal values
    /// when nothing is selected.
    pub fn selection(&self) -> (usize, usize) {
        self.model.selection()
    }

    /// Set the selection; both offsets are clamped into the buffer and the
    /// cursor lands on `to`.
    pub fn set_selection(&mut self, from: usize, to: usize) {
        self.model.set_selection(from, to);
        self.request_repaint();
    }

    /// Whether a non-empty selection exists.
    pub fn has_selection(&self) -> bool {
        self.model.has_selection()
    }

    /// Select the whole buffer.
    pub fn select_all(&mut self) {
        self.model.select_all();
        self.request_repaint();
    }

    // =========================================================================
    // Undo / Redo
    // =========================================================================

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Revert to the state before the most recent edit. No-op on an empty
    /// undo stack. Dismisses the completion popup.
    pub fn undo(&mut self) {
        if let Some(restored) = self.history.undo(self.snapshot()) {
            self.apply_snapshot(restored);
        }
    }

    /// Reapply the most recently undone edit. No-op unless the immediately
    /// preceding operation chain ends in an undo.
    pub fn redo(&mut self) {
        if let Some(restored) = self.history.redo(self.snapshot()) {
            self.apply_snapshot(restored);
        }
    }

    fn snapshot(&self) -> EditSnapshot {
        EditSnapshot {
            text: self.model.text().to_owned(),
            cursor: self.model.cursor(),
        }
    }

    fn apply_snapshot(&mut self, snapshot: EditSnapshot) {
        self.model.set_text(snapshot.text);
        self.model.set_cursor(snapshot.cursor, false);
        self.completion.hide();
        self.ensure_cursor_visible();
        self.request_repaint();
    }

    /// Push the current `(text, cursor)` onto the undo stack. Called before
    /// every user-visible edit; clears the redo stack.
    fn save_undo_state(&mut self) {
        self.history.save(self.snapshot());
    }

    // =========================================================================
    // Clipboard
    // =========================================================================

    /// Copy the selected text to the system clipboard. Returns `false` with
    /// an empty selection or when the clipboard is unavailable.
    pub fn copy(&self) -> bool {
        if !self.model.has_selection() {
            return false;
        }
        let selected = self.model.selected_text().to_owned();
        match Clipboard::new() {
            Ok(mut clipboard) => clipboard.set_text(&selected).is_ok(),
            Err(_) => false,
        }
    }

    /// Copy the selected text to the clipboard, then delete it. Returns
    /// `false` when nothing was cut.
    pub fn cut(&mut self) -> bool {
        if !self.model.has_selection() {
            return false;
        }
        if !self.copy() {
            return false;
        }
        self.save_undo_state();
        self.model.delete_selection();
        self.ensure_cursor_visible();
        self.update_completions();
        self.request_repaint();
        true
    }

    /// Insert clipboard text at the cursor, replacing any selection.
    /// Control characters other than tab are stripped; an empty or
    /// unavailable clipboard makes this a no-op returning `false`.
    pub fn paste(&mut self) -> bool {
        let text = match Clipboard::new().and_then(|mut c| c.get_text()) {
            Ok(text) => text,
            Err(_) => return false,
        };

        let filtered: String = text
            .chars()
            .filter(|c| !c.is_control() || *c == '\t')
            .collect();
        if filtered.is_empty() {
            return false;
        }

        self.save_undo_state();
        self.model.delete_selection();
        self.model.insert(&filtered);
        self.ensure_cursor_visible();
        self.update_completions();
        self.request_repaint();
        true
    }

    // =========================================================================
    // Font and Colors
    // =========================================================================

    /// The current font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Replace the font; affects metrics only, so the preferred height and
    /// scroll position are recomputed.
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
        self.ensure_cursor_visible();
        self.request_repaint();
    }

    /// Set the font size in pixels.
    pub fn set_font_size(&mut self, size: f32) {
        self.font.set_size(size);
        self.ensure_cursor_visible();
        self.request_repaint();
    }

    /// Set the font family.
    pub fn set_font_family(&mut self, family: FontFamily) {
        self.font.set_family(family);
        self.ensure_cursor_visible();
        self.request_repaint();
    }

    /// Set the default (unhighlighted) text color.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
        self.request_repaint();
    }

    /// Set the background fill color.
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
        self.request_repaint();
    }

    /// Set the selection highlight color.
    pub fn set_selection_color(&mut self, color: Color) {
        self.selection_color = color;
        self.request_repaint();
    }

    /// Set the caret color.
    pub fn set_cursor_color(&mut self, color: Color) {
        self.cursor_color = color;
        self.request_repaint();
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Preferred widget size for the current font: fixed height from the
    /// metrics line height plus margins, conventional starting width.
    pub fn size_hint(&self) -> Size {
        let line_height = self.metrics.line_height(&self.font);
        Size::new(200.0, TOP_MARGIN * 2.0 + line_height + 4.0)
    }

    /// The current client size, as set by the last resize event.
    pub fn client_size(&self) -> Size {
        self.client_size
    }

    /// Interval at which the host should deliver [`WidgetEvent::Timer`]
    /// while the widget has focus.
    pub fn blink_interval(&self) -> Duration {
        BLINK_INTERVAL
    }

    /// Whether the blink timer should be rescheduled from zero; clears the
    /// flag. Hosts poll this after delivering events.
    pub fn take_blink_restart(&mut self) -> bool {
        self.blink.take_restart()
    }

    /// Whether a repaint was requested since the last call; clears the flag.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.repaint_pending)
    }

    fn request_repaint(&mut self) {
        self.repaint_pending = true;
    }

    fn visible_width(&self) -> f32 {
        self.client_size.width - LEFT_MARGIN - RIGHT_GUTTER
    }

    fn cursor_px(&self) -> f32 {
        let before = &self.model.text()[..self.model.cursor()];
        self.metrics.text_width(&self.font, before)
    }

    fn ensure_cursor_visible(&mut self) {
        self.viewport
            .ensure_visible(self.cursor_px(), self.visible_width());
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Dispatch a host event. Returns `true` when the widget consumed it.
    pub fn handle_event(&mut self, event: &WidgetEvent) -> bool {
        match event {
            WidgetEvent::KeyPress(e) => self.handle_key_press(e),
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::MouseMove(e) => self.handle_mouse_move(e),
            WidgetEvent::MouseRelease(e) => self.handle_mouse_release(e),
            WidgetEvent::FocusIn => {
                self.handle_focus_in();
                true
            }
            WidgetEvent::FocusOut => {
                self.handle_focus_out();
                true
            }
            WidgetEvent::Resize(size) => {
                self.client_size = *size;
                self.request_repaint();
                true
            }
            WidgetEvent::Timer => {
                self.blink.tick();
                self.request_repaint();
                true
            }
        }
    }

    fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        let shift = event.modifiers.shift;
        let ctrl = event.modifiers.control;
        let accel = event.modifiers.accel();

        // The completion popup owns navigation keys while it is showing.
        if self.completion.is_visible() {
            match event.key {
                Key::ArrowUp => {
                    self.completion.select_previous();
                    self.request_repaint();
                    return true;
                }
                Key::ArrowDown => {
                    self.completion.select_next();
                    self.request_repaint();
                    return true;
                }
                Key::Escape => {
                    self.completion.hide();
                    self.request_repaint();
                    return true;
                }
                Key::Enter | Key::Tab => {
                    self.accept_completion();
                    return true;
                }
                _ => {}
            }
        }

        match event.key {
            Key::Z if accel && !shift => {
                self.undo();
                true
            }
            Key::Y if accel => {
                self.redo();
                true
            }
            Key::Z if accel && shift => {
                self.redo();
                true
            }
            Key::C if accel => {
                self.copy();
                true
            }
            Key::X if accel => {
                self.cut();
                true
            }
            Key::V if accel => {
                self.paste();
                true
            }
            Key::A if accel => {
                self.select_all();
                true
            }
            Key::Backspace => {
                if self.model.has_selection() {
                    self.save_undo_state();
                    self.model.delete_selection();
                } else if self.model.cursor() > 0 {
                    self.save_undo_state();
                    self.model.delete_char(false);
                } else {
                    return true;
                }
                self.ensure_cursor_visible();
                self.update_completions();
                self.request_repaint();
                true
            }
            Key::Delete => {
                if self.model.has_selection() {
                    self.save_undo_state();
                    self.model.delete_selection();
                } else if self.model.cursor() < self.model.len() {
                    self.save_undo_state();
                    self.model.delete_char(true);
                } else {
                    return true;
                }
                self.ensure_cursor_visible();
                self.update_completions();
                self.request_repaint();
                true
            }
            Key::ArrowLeft => {
                if ctrl {
                    self.model.move_word_left(shift);
                } else {
                    self.model.move_cursor(-1, shift);
                }
                self.after_navigation();
                true
            }
            Key::ArrowRight => {
                if ctrl {
                    self.model.move_word_right(shift);
                } else {
                    self.model.move_cursor(1, shift);
                }
                self.after_navigation();
                true
            }
            Key::Home => {
                self.model.set_cursor(0, shift);
                self.after_navigation();
                true
            }
            Key::End => {
                self.model.set_cursor(self.model.len(), shift);
                self.after_navigation();
                true
            }
            _ => {
                // Printable input arrives as committed text; anything with an
                // accelerator or Alt held belongs to the host.
                if event.text.is_empty() || accel || event.modifiers.alt {
                    return false;
                }
                let printable: String =
                    event.text.chars().filter(|c| !c.is_control()).collect();
                if printable.is_empty() {
                    return false;
                }
                self.insert_typed(&printable);
                true
            }
        }
    }

    fn insert_typed(&mut self, text: &str) {
        self.save_undo_state();
        self.model.delete_selection();
        self.model.insert(text);
        self.ensure_cursor_visible();
        self.update_completions();
        self.blink.restart();
        self.request_repaint();
    }

    fn after_navigation(&mut self) {
        self.completion.hide();
        self.blink.restart_if_running();
        self.ensure_cursor_visible();
        self.request_repaint();
    }

    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        let client = Rect::new(0.0, 0.0, self.client_size.width, self.client_size.height);
        if !client.contains(event.local_pos) {
            return false;
        }

        let offset = self.viewport.offset_at_point(
            self.metrics.as_ref(),
            &self.font,
            self.model.text(),
            event.local_pos.x - LEFT_MARGIN,
        );
        self.model.set_cursor(offset, false);
        self.dragging = true;
        self.completion.hide();
        self.request_repaint();
        true
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        if !self.dragging || !event.left_down {
            return false;
        }

        let offset = self.viewport.offset_at_point(
            self.metrics.as_ref(),
            &self.font,
            self.model.text(),
            event.local_pos.x - LEFT_MARGIN,
        );
        self.model.set_cursor(offset, true);
        self.request_repaint();
        true
    }

    fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        self.dragging = false;
        true
    }

    fn handle_focus_in(&mut self) {
        self.focused = true;
        self.blink.restart();
        self.request_repaint();
    }

    fn handle_focus_out(&mut self) {
        self.focused = false;
        self.dragging = false;
        self.blink.stop();
        self.completion.hide();
        self.request_repaint();
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Draw the widget: background, selection, colored text runs and caret.
    ///
    /// The caret is drawn only when the widget is focused, blink-visible and
    /// has no active selection.
    pub fn paint(&self, painter: &mut dyn Painter) {
        let client = Rect::new(0.0, 0.0, self.client_size.width, self.client_size.height);
        painter.fill_rect(client, self.background_color);

        painter.set_clip(Rect::new(
            LEFT_MARGIN,
            0.0,
            client.width() - LEFT_MARGIN,
            client.height(),
        ));

        let text = self.model.text();
        let text_y = TOP_MARGIN;
        let line_height = self.metrics.line_height(&self.font);
        let scroll = self.viewport.scroll();

        if self.model.has_selection() {
            let (start, end) = self.model.selection();
            let before_width = self.metrics.text_width(&self.font, &text[..start]);
            let selected_width = self.metrics.text_width(&self.font, &text[start..end]);
            painter.fill_rect(
                Rect::new(
                    LEFT_MARGIN + before_width - scroll,
                    text_y,
                    selected_width,
                    line_height,
                ),
                self.selection_color,
            );
        }

        let mut x = LEFT_MARGIN - scroll;
        for segment in self.colored_segments() {
            let run = &text[segment.start..segment.end()];
            painter.draw_text(&self.font, run, Point::new(x, text_y), segment.color);
            x += self.metrics.text_width(&self.font, run);
        }

        if self.focused && !self.model.has_selection() && self.blink.is_visible() {
            let cursor_x = LEFT_MARGIN + self.cursor_px() - scroll;
            painter.fill_rect(
                Rect::new(cursor_x, text_y, CURSOR_WIDTH, line_height),
                self.cursor_color,
            );
        }

        painter.clear_clip();
    }
}

impl std::fmt::Debug for SyntaxTextEdit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxTextEdit")
            .field("text", &self.model.text())
            .field("cursor", &self.model.cursor())
            .field("selection", &self.model.selection())
            .field("rules", &self.highlighter.rule_count())
            .field("completions_visible", &self.completion.is_visible())
            .finish_non_exhaustive()
    }
}

// The widget is a plain value; hosts may move it across threads even though
// all mutation happens on one event thread.
static_assertions::assert_impl_all!(SyntaxTextEdit: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::KeyboardModifiers;
    use crate::metrics::FixedAdvance;

    const ADVANCE: f32 = 8.0;

    fn edit() -> SyntaxTextEdit {
        SyntaxTextEdit::new(FixedAdvance::new(ADVANCE, 16.0))
    }

    fn edit_with(text: &str) -> SyntaxTextEdit {
        SyntaxTextEdit::with_text(FixedAdvance::new(ADVANCE, 16.0), text)
    }

    fn press(edit: &mut SyntaxTextEdit, key: Key, modifiers: KeyboardModifiers) -> bool {
        edit.handle_event(&WidgetEvent::KeyPress(KeyPressEvent::key(key, modifiers)))
    }

    fn type_text(edit: &mut SyntaxTextEdit, text: &str) {
        for ch in text.chars() {
            edit.handle_event(&WidgetEvent::KeyPress(KeyPressEvent::character(
                ch.to_string(),
            )));
        }
    }

    // ---------------------------------------------------------------------
    // Text and selection
    // ---------------------------------------------------------------------

    #[test]
    fn set_text_moves_cursor_to_end_and_resets_scroll() {
        let mut e = edit();
        e.handle_event(&WidgetEvent::Resize(Size::new(60.0, 30.0)));
        e.set_text("a long line of text that overflows");
        assert_eq!(e.cursor(), e.text().len());
        assert!(!e.has_selection());
        assert!(e.can_undo());

        e.set_text("x");
        assert_eq!(e.cursor(), 1);
    }

    #[test]
    fn selection_round_trips_ordered_and_clamped() {
        let mut e = edit_with("abcdef");
        e.set_selection(5, 2);
        assert_eq!(e.selection(), (2, 5));

        e.set_selection(4, 100);
        assert_eq!(e.selection(), (4, 6));
    }

    #[test]
    fn typed_character_replaces_selection() {
        let mut e = edit_with("hello world");
        e.set_selection(0, 5);
        type_text(&mut e, "X");
        assert_eq!(e.text(), "X world");
        assert_eq!(e.cursor(), 1);
    }

    #[test]
    fn typing_appends_and_advances_cursor() {
        let mut e = edit();
        type_text(&mut e, "abc");
        assert_eq!(e.text(), "abc");
        assert_eq!(e.cursor(), 3);
    }

    #[test]
    fn control_characters_are_not_inserted() {
        let mut e = edit();
        let handled = e.handle_event(&WidgetEvent::KeyPress(KeyPressEvent::character("\u{7}")));
        assert!(!handled);
        assert_eq!(e.text(), "");
    }

    // ---------------------------------------------------------------------
    // Deletion
    // ---------------------------------------------------------------------

    #[test]
    fn backspace_deletes_before_cursor() {
        let mut e = edit_with("abc");
        press(&mut e, Key::Backspace, KeyboardModifiers::NONE);
        assert_eq!(e.text(), "ab");
    }

    #[test]
    fn backspace_at_start_is_consumed_noop() {
        let mut e = edit_with("abc");
        e.set_selection(0, 0);
        assert!(press(&mut e, Key::Backspace, KeyboardModifiers::NONE));
        assert_eq!(e.text(), "abc");
        assert!(!e.can_undo(), "boundary no-op pushes no undo state");
    }

    #[test]
    fn delete_removes_selection_first() {
        let mut e = edit_with("abcdef");
        e.set_selection(1, 4);
        press(&mut e, Key::Delete, KeyboardModifiers::NONE);
        assert_eq!(e.text(), "aef");
        assert_eq!(e.cursor(), 1);
    }

    // ---------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------

    #[test]
    fn left_arrow_collapses_selection_to_start() {
        let mut e = edit_with("abcdef");
        e.set_selection(2, 5);
        press(&mut e, Key::ArrowLeft, KeyboardModifiers::NONE);
        assert_eq!(e.cursor(), 2);
        assert!(!e.has_selection());
    }

    #[test]
    fn shift_arrows_extend_selection() {
        let mut e = edit_with("hello");
        e.set_selection(0, 0);
        press(&mut e, Key::ArrowRight, KeyboardModifiers::SHIFT);
        press(&mut e, Key::ArrowRight, KeyboardModifiers::SHIFT);
        assert_eq!(e.selection(), (0, 2));
    }

    #[test]
    fn ctrl_arrows_navigate_by_word() {
        let mut e = edit_with("foo   bar");
        press(&mut e, Key::ArrowLeft, KeyboardModifiers::CTRL);
        assert_eq!(e.cursor(), 6);
        press(&mut e, Key::ArrowLeft, KeyboardModifiers::CTRL);
        assert_eq!(e.cursor(), 0);
        press(&mut e, Key::ArrowRight, KeyboardModifiers::CTRL);
        assert_eq!(e.cursor(), 6);
    }

    #[test]
    fn home_and_end_jump_with_optional_extend() {
        let mut e = edit_with("hello");
        press(&mut e, Key::Home, KeyboardModifiers::NONE);
        assert_eq!(e.cursor(), 0);
        press(&mut e, Key::End, KeyboardModifiers::SHIFT);
        assert_eq!(e.selection(), (0, 5));
    }

    #[test]
    fn select_all_shortcut() {
        let mut e = edit_with("hello");
        press(&mut e, Key::A, KeyboardModifiers::CTRL);
        assert_eq!(e.selection(), (0, 5));
    }

    // ---------------------------------------------------------------------
    // Undo / redo
    // ---------------------------------------------------------------------

    #[test]
    fn undo_restores_state_before_edit_and_redo_reapplies() {
        let mut e = edit_with("ab");
        type_text(&mut e, "c");
        assert_eq!(e.text(), "abc");

        e.undo();
        assert_eq!(e.text(), "ab");
        assert_eq!(e.cursor(), 2);
        assert!(e.can_redo());

        e.redo();
        assert_eq!(e.text(), "abc");
        assert_eq!(e.cursor(), 3);
    }

    #[test]
    fn undo_on_empty_stack_is_noop() {
        let mut e = edit_with("ab");
        assert!(!e.can_undo());
        e.undo();
        assert_eq!(e.text(), "ab");
        assert_eq!(e.cursor(), 2);
    }

    #[test]
    fn new_edit_clears_redo() {
        let mut e = edit();
        type_text(&mut e, "ab");
        e.undo();
        assert!(e.can_redo());
        type_text(&mut e, "x");
        assert!(!e.can_redo());
    }

    #[test]
    fn undo_redo_shortcuts() {
        let mut e = edit();
        type_text(&mut e, "a");
        press(&mut e, Key::Z, KeyboardModifiers::CTRL);
        assert_eq!(e.text(), "");
        press(&mut e, Key::Y, KeyboardModifiers::CTRL);
        assert_eq!(e.text(), "a");
        press(&mut e, Key::Z, KeyboardModifiers::CTRL_SHIFT);
        assert_eq!(e.text(), "a", "shift+z redo with nothing undone is a no-op");
    }

    #[test]
    fn insert_then_delete_round_trips() {
        let mut e = edit_with("abcdef");
        e.set_selection(3, 3);
        type_text(&mut e, "XY");
        assert_eq!(e.text(), "abcXYdef");
        press(&mut e, Key::Backspace, KeyboardModifiers::NONE);
        press(&mut e, Key::Backspace, KeyboardModifiers::NONE);
        assert_eq!(e.text(), "abcdef");
        assert_eq!(e.cursor(), 3);
    }

    // ---------------------------------------------------------------------
    // Completion
    // ---------------------------------------------------------------------

    fn print_completer(prefix: &str) -> Vec<String> {
        let word = prefix.rsplit(' ').next().unwrap_or("");
        if !word.is_empty() && "print".starts_with(word) {
            vec!["print".to_string(), "println".to_string()]
        } else {
            Vec::new()
        }
    }

    #[test]
    fn typing_shows_and_accepting_replaces_token() {
        let mut e = edit();
        e.set_completion_function(print_completer);

        type_text(&mut e, "pri");
        assert!(e.completions_visible());
        assert_eq!(e.completion_state().selected(), Some("print"));

        press(&mut e, Key::Enter, KeyboardModifiers::NONE);
        assert_eq!(e.text(), "print");
        assert_eq!(e.cursor(), 5);
        assert!(!e.completions_visible());
    }

    #[test]
    fn accepting_replaces_only_the_last_token() {
        let mut e = edit_with("say ");
        e.set_completion_function(print_completer);
        type_text(&mut e, "pri");

        press(&mut e, Key::ArrowDown, KeyboardModifiers::NONE);
        press(&mut e, Key::Tab, KeyboardModifiers::NONE);
        assert_eq!(e.text(), "say println");
        assert_eq!(e.cursor(), 11);
    }

    #[test]
    fn completion_navigation_clamps() {
        let mut e = edit();
        e.set_completion_function(print_completer);
        type_text(&mut e, "p");

        press(&mut e, Key::ArrowUp, KeyboardModifiers::NONE);
        assert_eq!(e.completion_state().selected_index(), 0);
        press(&mut e, Key::ArrowDown, KeyboardModifiers::NONE);
        press(&mut e, Key::ArrowDown, KeyboardModifiers::NONE);
        assert_eq!(e.completion_state().selected_index(), 1);
    }

    #[test]
    fn escape_dismisses_completions() {
        let mut e = edit();
        e.set_completion_function(print_completer);
        type_text(&mut e, "p");
        assert!(e.completions_visible());

        press(&mut e, Key::Escape, KeyboardModifiers::NONE);
        assert!(!e.completions_visible());
        assert_eq!(e.text(), "p");
    }

    #[test]
    fn cursor_navigation_dismisses_completions() {
        let mut e = edit();
        e.set_completion_function(print_completer);
        type_text(&mut e, "p");
        assert!(e.completions_visible());

        press(&mut e, Key::Home, KeyboardModifiers::NONE);
        assert!(!e.completions_visible());
    }

    #[test]
    fn empty_result_hides_completions() {
        let mut e = edit();
        e.set_completion_function(print_completer);
        type_text(&mut e, "p");
        assert!(e.completions_visible());
        type_text(&mut e, "z"); // "pz" matches nothing
        assert!(!e.completions_visible());
    }

    #[test]
    fn undo_dismisses_completions() {
        let mut e = edit();
        e.set_completion_function(print_completer);
        type_text(&mut e, "p");
        assert!(e.completions_visible());
        e.undo();
        assert!(!e.completions_visible());
        assert_eq!(e.text(), "");
    }

    #[test]
    fn accept_while_hidden_is_noop() {
        let mut e = edit_with("abc");
        e.accept_completion();
        assert_eq!(e.text(), "abc");
        assert!(!e.can_undo());
    }

    // ---------------------------------------------------------------------
    // Mouse
    // ---------------------------------------------------------------------

    fn click(e: &mut SyntaxTextEdit, x: f32) {
        e.handle_event(&WidgetEvent::MousePress(MousePressEvent {
            button: MouseButton::Left,
            local_pos: Point::new(x, 10.0),
            modifiers: KeyboardModifiers::NONE,
        }));
    }

    #[test]
    fn click_places_cursor_at_nearest_boundary() {
        let mut e = edit_with("abcdef");
        // Character cells start at LEFT_MARGIN and are ADVANCE wide.
        click(&mut e, LEFT_MARGIN + 2.0 * ADVANCE + 1.0);
        assert_eq!(e.cursor(), 2);
        assert!(!e.has_selection());
    }

    #[test]
    fn drag_extends_selection() {
        let mut e = edit_with("abcdef");
        click(&mut e, LEFT_MARGIN + 1.0 * ADVANCE);
        e.handle_event(&WidgetEvent::MouseMove(MouseMoveEvent {
            local_pos: Point::new(LEFT_MARGIN + 4.0 * ADVANCE, 10.0),
            left_down: true,
        }));
        assert_eq!(e.selection(), (1, 4));

        e.handle_event(&WidgetEvent::MouseRelease(MouseReleaseEvent {
            button: MouseButton::Left,
            local_pos: Point::new(LEFT_MARGIN + 4.0 * ADVANCE, 10.0),
        }));
        // Further moves no longer extend.
        e.handle_event(&WidgetEvent::MouseMove(MouseMoveEvent {
            local_pos: Point::new(LEFT_MARGIN, 10.0),
            left_down: false,
        }));
        assert_eq!(e.selection(), (1, 4));
    }

    #[test]
    fn click_outside_client_area_is_ignored() {
        let mut e = edit_with("abcdef");
        e.handle_event(&WidgetEvent::Resize(Size::new(200.0, 30.0)));
        e.set_selection(3, 3);

        let consumed = e.handle_event(&WidgetEvent::MousePress(MousePressEvent {
            button: MouseButton::Left,
            local_pos: Point::new(50.0, 100.0),
            modifiers: KeyboardModifiers::NONE,
        }));
        assert!(!consumed);
        assert_eq!(e.cursor(), 3, "press below the widget moves nothing");

        let consumed = e.handle_event(&WidgetEvent::MousePress(MousePressEvent {
            button: MouseButton::Left,
            local_pos: Point::new(-1.0, 10.0),
            modifiers: KeyboardModifiers::NONE,
        }));
        assert!(!consumed);
        assert_eq!(e.cursor(), 3);
    }

    #[test]
    fn click_dismisses_completions() {
        let mut e = edit();
        e.set_completion_function(print_completer);
        type_text(&mut e, "p");
        assert!(e.completions_visible());
        click(&mut e, LEFT_MARGIN);
        assert!(!e.completions_visible());
    }

    // ---------------------------------------------------------------------
    // Focus and blink
    // ---------------------------------------------------------------------

    #[test]
    fn focus_out_stops_blink_and_hides_completions() {
        let mut e = edit();
        e.set_completion_function(print_completer);
        e.handle_event(&WidgetEvent::FocusIn);
        assert!(e.take_blink_restart());
        type_text(&mut e, "p");
        assert!(e.completions_visible());

        e.handle_event(&WidgetEvent::FocusOut);
        assert!(!e.completions_visible());
        e.handle_event(&WidgetEvent::Timer);
        // A stopped blink ignores ticks; painting would not draw the caret.
    }

    #[test]
    fn typing_restarts_blink_phase() {
        let mut e = edit();
        e.handle_event(&WidgetEvent::FocusIn);
        e.take_blink_restart();
        e.handle_event(&WidgetEvent::Timer); // caret now hidden
        type_text(&mut e, "a");
        assert!(e.take_blink_restart(), "typing re-phases the blink timer");
    }

    // ---------------------------------------------------------------------
    // Viewport integration
    // ---------------------------------------------------------------------

    #[test]
    fn typing_past_right_edge_scrolls() {
        let mut e = edit();
        e.handle_event(&WidgetEvent::Resize(Size::new(
            LEFT_MARGIN + RIGHT_GUTTER + 4.0 * ADVANCE,
            30.0,
        )));
        type_text(&mut e, "abcdefgh");
        // Cursor at 8 chars = 64px, visible width 32px.
        assert_eq!(e.cursor(), 8);

        // The caret must sit exactly on the right edge.
        let mut p = RecordingPainter::default();
        e.handle_event(&WidgetEvent::FocusIn);
        e.paint(&mut p);
        let caret = p.rects.last().unwrap();
        assert!((caret.0.origin.x - (LEFT_MARGIN + 4.0 * ADVANCE)).abs() < 0.01);
    }

    // ---------------------------------------------------------------------
    // Painting
    // ---------------------------------------------------------------------

    #[derive(Default)]
    struct RecordingPainter {
        rects: Vec<(Rect, Color)>,
        runs: Vec<(String, Point, Color)>,
        clip: Option<Rect>,
    }

    impl Painter for RecordingPainter {
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.rects.push((rect, color));
        }

        fn draw_text(&mut self, _font: &Font, text: &str, origin: Point, color: Color) {
            self.runs.push((text.to_string(), origin, color));
        }

        fn set_clip(&mut self, rect: Rect) {
            self.clip = Some(rect);
        }

        fn clear_clip(&mut self) {}
    }

    #[test]
    fn paint_emits_highlighted_runs_in_order() {
        let mut e = edit_with("let x = 10");
        e.add_syntax_rule(r"\b(let)\b", |_| Color::BLUE).unwrap();
        e.add_syntax_rule(r"\d+", |_| Color::GREEN).unwrap();

        let mut p = RecordingPainter::default();
        e.paint(&mut p);

        let runs: Vec<(&str, Color)> = p
            .runs
            .iter()
            .map(|(t, _, c)| (t.as_str(), *c))
            .collect();
        assert_eq!(
            runs,
            vec![
                ("let", Color::BLUE),
                (" x = ", Color::BLACK),
                ("10", Color::GREEN),
            ]
        );

        // Runs advance by measured width.
        assert_eq!(p.runs[0].1.x, LEFT_MARGIN);
        assert_eq!(p.runs[1].1.x, LEFT_MARGIN + 3.0 * ADVANCE);
        assert_eq!(p.runs[2].1.x, LEFT_MARGIN + 8.0 * ADVANCE);
        assert!(p.clip.is_some());
    }

    #[test]
    fn paint_draws_selection_rect_but_no_caret() {
        let mut e = edit_with("abcdef");
        e.handle_event(&WidgetEvent::FocusIn);
        e.set_selection(1, 3);

        let mut p = RecordingPainter::default();
        e.paint(&mut p);

        // Background plus selection; caret suppressed while a selection
        // exists.
        assert_eq!(p.rects.len(), 2);
        let (sel_rect, sel_color) = p.rects[1];
        assert_eq!(sel_color, Color::from_rgb8(173, 214, 255));
        assert_eq!(sel_rect.origin.x, LEFT_MARGIN + 1.0 * ADVANCE);
        assert_eq!(sel_rect.width(), 2.0 * ADVANCE);
    }

    #[test]
    fn paint_draws_caret_when_focused_and_visible() {
        let mut e = edit_with("abc");
        e.handle_event(&WidgetEvent::FocusIn);

        let mut p = RecordingPainter::default();
        e.paint(&mut p);
        assert_eq!(p.rects.len(), 2, "background + caret");
        let (caret, _) = p.rects[1];
        assert_eq!(caret.origin.x, LEFT_MARGIN + 3.0 * ADVANCE);

        // After one blink tick the caret disappears.
        e.handle_event(&WidgetEvent::Timer);
        let mut p = RecordingPainter::default();
        e.paint(&mut p);
        assert_eq!(p.rects.len(), 1);
    }

    #[test]
    fn paint_empty_text_has_no_runs() {
        let e = edit();
        let mut p = RecordingPainter::default();
        e.paint(&mut p);
        assert!(p.runs.is_empty());
    }

    // ---------------------------------------------------------------------
    // Clipboard (system-dependent)
    // ---------------------------------------------------------------------

    #[test]
    fn copy_without_selection_returns_false() {
        let e = edit_with("hello");
        assert!(!e.copy());
    }

    #[test]
    fn cut_without_selection_returns_false() {
        let mut e = edit_with("hello");
        assert!(!e.cut());
        assert_eq!(e.text(), "hello");
    }

    #[test]
    #[ignore] // Requires the system clipboard - run manually with: cargo test -- --ignored
    fn copy_paste_round_trip() {
        let mut e = edit_with("hello world");
        e.select_all();
        assert!(e.copy());

        let mut other = edit();
        assert!(other.paste());
        assert_eq!(other.text(), "hello world");
    }

    #[test]
    #[ignore] // Requires the system clipboard - run manually with: cargo test -- --ignored
    fn cut_removes_selection_and_paste_restores() {
        let mut e = edit_with("hello");
        e.select_all();
        assert!(e.cut());
        assert_eq!(e.text(), "");
        assert!(e.paste());
        assert_eq!(e.text(), "hello");
    }
}
