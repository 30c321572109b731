//! Input event types delivered by the host.
//!
//! The host windowing layer translates its native events into these types
//! and feeds them to [`SyntaxTextEdit::handle_event`](crate::widget::SyntaxTextEdit::handle_event).
//! Handlers return `true` when the event was consumed, leaving the host free
//! to forward unconsumed events elsewhere.

use crate::geometry::{Point, Size};

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        control: true,
        ..Self::NONE
    };

    /// Control + Shift modifiers.
    pub const CTRL_SHIFT: Self = Self {
        shift: true,
        control: true,
        ..Self::NONE
    };

    /// The platform "accelerator" modifier: Control, or Cmd on macOS
    /// (reported as `meta`).
    pub fn accel(&self) -> bool {
        self.control || self.meta
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// The subset of physical keys the widget reacts to.
///
/// Printable input arrives through [`KeyPressEvent::text`], not through key
/// identity, so letter keys are only listed where they participate in
/// shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Shortcut letters
    A,
    C,
    V,
    X,
    Y,
    Z,

    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,

    // Editing
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,

    /// Any other key; carries no meaning to the widget.
    Other,
}

/// A key press, together with the text it committed (empty for
/// non-printable keys).
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPressEvent {
    pub key: Key,
    pub modifiers: KeyboardModifiers,
    /// The character(s) this press produces, already dead-key/layout
    /// resolved by the host. Empty for navigation and shortcut keys.
    pub text: String,
}

impl KeyPressEvent {
    /// A key press with no committed text.
    pub fn key(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            key,
            modifiers,
            text: String::new(),
        }
    }

    /// A printable character press.
    pub fn character(text: impl Into<String>) -> Self {
        Self {
            key: Key::Other,
            modifiers: KeyboardModifiers::NONE,
            text: text.into(),
        }
    }
}

/// A mouse button press in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MousePressEvent {
    pub button: MouseButton,
    pub local_pos: Point,
    pub modifiers: KeyboardModifiers,
}

/// A mouse move in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMoveEvent {
    pub local_pos: Point,
    /// Whether the primary button is held during the move.
    pub left_down: bool,
}

/// A mouse button release in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseReleaseEvent {
    pub button: MouseButton,
    pub local_pos: Point,
}

/// Events the host delivers to the widget.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    KeyPress(KeyPressEvent),
    MousePress(MousePressEvent),
    MouseMove(MouseMoveEvent),
    MouseRelease(MouseReleaseEvent),
    /// Keyboard focus gained.
    FocusIn,
    /// Keyboard focus lost.
    FocusOut,
    /// Client area resized to the given size.
    Resize(Size),
    /// Cursor-blink timer tick; the host schedules the recurring timer at
    /// [`SyntaxTextEdit::blink_interval`](crate::widget::SyntaxTextEdit::blink_interval).
    Timer,
}
