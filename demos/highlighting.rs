//! Headless demonstration: drives the widget with synthetic events and
//! prints the paint commands it emits.
//!
//! Run with internal tracing enabled:
//!
//! ```sh
//! RUST_LOG=syntaxline=trace cargo run --example highlighting
//! ```

use syntaxline::{
    Color, FixedAdvance, Font, FontFamily, FontStyle, FontWeight, Key, KeyPressEvent,
    KeyboardModifiers, Painter, Point, Rect, Size, SyntaxTextEdit, WidgetEvent,
};

/// Prints each paint command instead of rasterizing it.
struct ConsolePainter;

impl Painter for ConsolePainter {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        println!(
            "fill  x={:6.1} y={:5.1} w={:6.1} h={:5.1}  rgba({:.2},{:.2},{:.2},{:.2})",
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
            color.r,
            color.g,
            color.b,
            color.a
        );
    }

    fn draw_text(&mut self, _font: &Font, text: &str, origin: Point, color: Color) {
        println!(
            "text  x={:6.1} y={:5.1} {:?}  rgba({:.2},{:.2},{:.2},{:.2})",
            origin.x, origin.y, text, color.r, color.g, color.b, color.a
        );
    }

    fn set_clip(&mut self, rect: Rect) {
        println!(
            "clip  x={:6.1} y={:5.1} w={:6.1} h={:5.1}",
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height()
        );
    }

    fn clear_clip(&mut self) {
        println!("clip  cleared");
    }
}

fn type_text(edit: &mut SyntaxTextEdit, text: &str) {
    for ch in text.chars() {
        edit.handle_event(&WidgetEvent::KeyPress(KeyPressEvent::character(
            ch.to_string(),
        )));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut edit = SyntaxTextEdit::new(FixedAdvance::default());
    edit.set_font(
        Font::new(FontFamily::Monospace, 12.0)
            .with_weight(FontWeight::BOLD)
            .with_style(FontStyle::Normal),
    );

    edit.add_syntax_rule(r"\b(let|fn|if|else)\b", |_| Color::BLUE)?;
    edit.add_syntax_rule(r"\b\d+\b", |_| Color::GREEN)?;
    edit.set_completion_function(|prefix| {
        let word = prefix.rsplit(' ').next().unwrap_or("");
        ["let", "length"]
            .iter()
            .filter(|c| !word.is_empty() && c.starts_with(word))
            .map(|c| c.to_string())
            .collect()
    });

    edit.handle_event(&WidgetEvent::Resize(Size::new(240.0, 30.0)));
    edit.handle_event(&WidgetEvent::FocusIn);

    // Type "le", accept the "let" completion, then finish the line.
    type_text(&mut edit, "le");
    if edit.completions_visible() {
        println!("completions: {:?}", edit.completion_state().candidates());
        edit.handle_event(&WidgetEvent::KeyPress(KeyPressEvent::key(
            Key::Tab,
            KeyboardModifiers::NONE,
        )));
    }
    type_text(&mut edit, " x = 10");

    println!("text: {:?}", edit.text());
    println!();
    edit.paint(&mut ConsolePainter);

    Ok(())
}
