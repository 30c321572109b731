//! Completion candidate state.
//!
//! The completion list is an owned value object — candidates plus the
//! highlighted index — not a long-lived child window. The host's popup is a
//! thin renderer over this state, rebuilt whenever it is shown.
//!
//! The lookup itself is a caller-supplied [`CompletionFn`] invoked with the
//! text from buffer start to the cursor. It is assumed synchronous and fast;
//! a slow callback stalls the input thread.

/// Completion lookup callback: text up to the cursor in, ordered candidate
/// list out. An empty result means "nothing to show".
pub type CompletionFn = Box<dyn Fn(&str) -> Vec<String> + Send + Sync>;

/// Transient candidate-list state: Hidden ⇄ Showing.
#[derive(Debug, Clone, Default)]
pub struct CompletionState {
    visible: bool,
    candidates: Vec<String>,
    selected: usize,
}

impl CompletionState {
    /// Create hidden, empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the candidate list is showing.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The current candidates (empty when hidden).
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Index of the highlighted candidate.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The highlighted candidate, if showing.
    pub fn selected(&self) -> Option<&str> {
        if self.visible {
            self.candidates.get(self.selected).map(String::as_str)
        } else {
            None
        }
    }

    /// Install a fresh candidate list. A non-empty list shows the popup with
    /// the first candidate highlighted; an empty list hides it.
    pub fn set_candidates(&mut self, candidates: Vec<String>) {
        if candidates.is_empty() {
            self.hide();
            return;
        }
        if !self.visible {
            tracing::trace!(count = candidates.len(), "completion popup shown");
        }
        self.candidates = candidates;
        self.selected = 0;
        self.visible = true;
    }

    /// Dismiss the candidate list and drop its contents.
    pub fn hide(&mut self) {
        if self.visible {
            tracing::trace!("completion popup hidden");
        }
        self.visible = false;
        self.candidates.clear();
        self.selected = 0;
    }

    /// Move the highlight down one entry. Clamped at the last entry, no
    /// wraparound. Returns whether the highlight moved.
    pub fn select_next(&mut self) -> bool {
        if self.visible && self.selected + 1 < self.candidates.len() {
            self.selected += 1;
            true
        } else {
            false
        }
    }

    /// Move the highlight up one entry. Clamped at the first entry, no
    /// wraparound. Returns whether the highlight moved.
    pub fn select_previous(&mut self) -> bool {
        if self.visible && self.selected > 0 {
            self.selected -= 1;
            true
        } else {
            false
        }
    }
}
