//! A single-line text input widget with regex syntax highlighting,
//! selection, bounded undo/redo, clipboard support and pluggable
//! auto-completion.
//!
//! The crate is backend-agnostic: the host windowing layer feeds
//! [`WidgetEvent`]s in, supplies a [`TextMetrics`] implementation for
//! measurement, and hands a [`Painter`] to [`SyntaxTextEdit::paint`] each
//! frame. Nothing here talks to a font rasterizer, GPU or window system.
//!
//! # Quick Start
//!
//! ```
//! use syntaxline::{Color, FixedAdvance, Key, KeyPressEvent, KeyboardModifiers,
//!                  SyntaxTextEdit, WidgetEvent};
//!
//! let mut edit = SyntaxTextEdit::new(FixedAdvance::default());
//!
//! // Color keywords blue and numbers green.
//! edit.add_syntax_rule(r"\b(let|fn|if|else)\b", |_| Color::BLUE).unwrap();
//! edit.add_syntax_rule(r"\b\d+\b", |_| Color::GREEN).unwrap();
//!
//! // Complete anything starting with "pr".
//! edit.set_completion_function(|prefix| {
//!     let word = prefix.rsplit(' ').next().unwrap_or("");
//!     ["print", "println"]
//!         .iter()
//!         .filter(|c| !word.is_empty() && c.starts_with(word))
//!         .map(|c| c.to_string())
//!         .collect()
//! });
//!
//! // The host delivers events...
//! edit.handle_event(&WidgetEvent::KeyPress(KeyPressEvent::character("p")));
//! edit.handle_event(&WidgetEvent::KeyPress(KeyPressEvent::character("r")));
//! assert!(edit.completions_visible());
//!
//! edit.handle_event(&WidgetEvent::KeyPress(KeyPressEvent::key(
//!     Key::Enter,
//!     KeyboardModifiers::NONE,
//! )));
//! assert_eq!(edit.text(), "print");
//! ```
//!
//! # Architecture
//!
//! | Module | Role |
//! |--------|------|
//! | [`widget`] | The [`SyntaxTextEdit`] widget tying everything together |
//! | [`model`] | Text buffer, cursor and selection |
//! | [`highlight`] | Regex rules and text segmentation |
//! | [`history`] | Bounded undo/redo snapshots |
//! | [`viewport`] | Horizontal scroll and point-to-offset mapping |
//! | [`completion`] | Candidate list state |
//! | [`blink`] | Host-ticked cursor blink |
//! | [`events`] | Input event types delivered by the host |
//! | [`metrics`] | [`TextMetrics`] and [`Painter`] collaborator traits |
//! | [`clipboard`] | System clipboard wrapper |
//! | [`geometry`], [`color`], [`font`] | Value types |
//!
//! All text offsets in the public API are byte offsets kept on grapheme
//! cluster boundaries; out-of-range or mid-cluster offsets are snapped to
//! the nearest boundary rather than rejected.

pub mod blink;
pub mod clipboard;
pub mod color;
pub mod completion;
pub mod events;
pub mod font;
pub mod geometry;
pub mod highlight;
pub mod history;
pub mod metrics;
pub mod model;
pub mod viewport;
pub mod widget;

pub use blink::{BLINK_INTERVAL, CursorBlink};
pub use clipboard::{Clipboard, ClipboardError};
pub use color::Color;
pub use completion::{CompletionFn, CompletionState};
pub use events::{
    Key, KeyPressEvent, KeyboardModifiers, MouseButton, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent, WidgetEvent,
};
pub use font::{Font, FontFamily, FontStyle, FontWeight};
pub use geometry::{Point, Rect, Size};
pub use highlight::{ColorFn, ColoredSegment, HighlightError, Highlighter, SyntaxRule};
pub use history::{DEFAULT_UNDO_DEPTH, EditSnapshot, History};
pub use metrics::{FixedAdvance, Painter, TextMetrics};
pub use model::EditModel;
pub use viewport::Viewport;
pub use widget::SyntaxTextEdit;
