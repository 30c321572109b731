//! Cursor blink state.
//!
//! The widget owns a restartable blink flag; the host owns the actual timer.
//! While the widget has focus, the host ticks the widget every
//! [`BLINK_INTERVAL`] and each tick toggles visibility. Every
//! cursor-affecting operation resets the phase to "visible" so the caret
//! never blinks out from under active input; the host should restart its
//! timer whenever [`CursorBlink::take_restart`] reports a reset.

use std::time::Duration;

/// Interval between blink toggles.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Restartable blink flag driven by host timer ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorBlink {
    visible: bool,
    running: bool,
    restart_pending: bool,
}

impl CursorBlink {
    /// Create stopped blink state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the caret should be drawn this frame.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the blink loop is active (focus held).
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start (or re-phase) blinking: visible immediately, timer restarted.
    pub fn restart(&mut self) {
        self.visible = true;
        self.running = true;
        self.restart_pending = true;
    }

    /// Re-phase only if already running. Cursor movement while unfocused
    /// must not start the loop.
    pub fn restart_if_running(&mut self) {
        if self.running {
            self.restart();
        }
    }

    /// Stop blinking entirely (focus lost).
    pub fn stop(&mut self) {
        self.visible = false;
        self.running = false;
        self.restart_pending = false;
    }

    /// One timer tick: toggle visibility. Ignored while stopped.
    pub fn tick(&mut self) {
        if self.running {
            self.visible = !self.visible;
        }
    }

    /// Whether the host should reschedule its timer, clearing the flag.
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart_pending)
    }
}
