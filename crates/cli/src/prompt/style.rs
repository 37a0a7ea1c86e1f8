//! String styling helpers.
//!
//! All helpers are pure string transforms built on crossterm's [`Stylize`], so
//! rendered frames can be compared in tests after [`strip_ansi`].

use crossterm::style::{Color, Stylize};
use unicode_width::UnicodeWidthStr;

pub fn bold(text: &str) -> String {
    text.bold().to_string()
}

pub fn dim(text: &str) -> String {
    text.dim().to_string()
}

pub fn yellow(text: &str) -> String {
    text.with(Color::Yellow).to_string()
}

pub fn green(text: &str) -> String {
    text.with(Color::Green).to_string()
}

pub fn red(text: &str) -> String {
    text.with(Color::Red).to_string()
}

pub fn bright_blue(text: &str) -> String {
    text.with(Color::Blue).to_string()
}

/// Removes CSI escape sequences (colors, attributes, cursor moves).
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
            continue;
        }
        output.push(c);
    }

    output
}

/// Terminal columns taken by `text` once styling is removed.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    strip_ansi(text).width()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_ansi_removes_styles() {
        assert_eq!(strip_ansi(&bold("hello")), "hello");
        assert_eq!(strip_ansi(&format!("a{}c", yellow("b"))), "abc");
        assert_eq!(strip_ansi("\x1b[38;5;12mblue\x1b[39m"), "blue");
    }

    #[test]
    fn test_visible_width() {
        assert_eq!(visible_width(&bold("abc")), 3);
        assert_eq!(visible_width("🔎 "), 3);
        assert_eq!(visible_width(""), 0);
    }

    #[test]
    fn test_strip_ansi_keeps_plain_text() {
        assert_eq!(strip_ansi("❯ plain › text"), "❯ plain › text");
        assert_eq!(strip_ansi(""), "");
    }
}
