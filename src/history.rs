//! Bounded undo/redo history.
//!
//! The history holds full `(text, cursor)` snapshots — the buffer is a
//! single line, so snapshots are cheap and exact. Both stacks share one
//! per-instance depth cap; pushing past it evicts the oldest entry. Any new
//! edit clears the redo stack, keeping the history linear.

use std::collections::VecDeque;

/// Default maximum number of retained undo (and redo) entries.
pub const DEFAULT_UNDO_DEPTH: usize = 100;

/// A point-in-time view of the editable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSnapshot {
    pub text: String,
    pub cursor: usize,
}

/// Undo/redo stacks of [`EditSnapshot`]s with a fixed depth cap.
#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<EditSnapshot>,
    redo: VecDeque<EditSnapshot>,
    depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a history with the default depth of
    /// [`DEFAULT_UNDO_DEPTH`] entries.
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_UNDO_DEPTH)
    }

    /// Create a history retaining at most `depth` entries per stack.
    pub fn with_depth(depth: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: VecDeque::new(),
            depth,
        }
    }

    /// The configured depth cap.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether an undo entry is available.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether a redo entry is available.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Record `current` before a user-visible edit mutates it. Evicts the
    /// oldest entry past the cap and clears the redo stack: redo history is
    /// linear, a new edit forks nothing.
    pub fn save(&mut self, current: EditSnapshot) {
        push_capped(&mut self.undo, current, self.depth);
        self.redo.clear();
    }

    /// Exchange `current` for the most recent undo entry, which becomes the
    /// new current state. Returns `None` (and changes nothing) when there is
    /// nothing to undo.
    pub fn undo(&mut self, current: EditSnapshot) -> Option<EditSnapshot> {
        let restored = self.undo.pop_back()?;
        push_capped(&mut self.redo, current, self.depth);
        tracing::trace!(undo_left = self.undo.len(), "undo");
        Some(restored)
    }

    /// Exchange `current` for the most recent redo entry. Symmetric to
    /// [`undo`](Self::undo).
    pub fn redo(&mut self, current: EditSnapshot) -> Option<EditSnapshot> {
        let restored = self.redo.pop_back()?;
        push_capped(&mut self.undo, current, self.depth);
        tracing::trace!(redo_left = self.redo.len(), "redo");
        Some(restored)
    }
}

fn push_capped(stack: &mut VecDeque<EditSnapshot>, entry: EditSnapshot, depth: usize) {
    stack.push_back(entry);
    while stack.len() > depth {
        stack.pop_front();
    }
}
