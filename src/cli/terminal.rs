//! Terminal colour helpers for verdict lines

use owo_colors::{Color, OwoColorize, colors::css};

/// Detects whether colored output should be enabled
fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

fn paint<C: Color>(text: &str) -> String {
    if supports_color() {
        text.fg::<C>().to_string()
    } else {
        text.to_string()
    }
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as warning (amber)
    fn warning(&self) -> String;
    /// Color as error (red)
    fn error(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn success(&self) -> String {
        paint::<css::Green>(self.as_ref())
    }

    fn warning(&self) -> String {
        paint::<css::Orange>(self.as_ref())
    }

    fn error(&self) -> String {
        paint::<css::Red>(self.as_ref())
    }
}
