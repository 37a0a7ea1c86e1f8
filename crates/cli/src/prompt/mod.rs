//! Interactive prompts.
//!
//! Every prompt is a plain state machine: it renders a [`Frame`] and consumes
//! [`KeyPress`] events until it yields a value. Terminal I/O lives behind
//! [`crate::terminal::Tty`] and is driven by [`runner::run`].

pub mod confirm;
pub mod figures;
pub mod fuzzy;
pub mod input;
pub mod input_buffer;
pub mod keys;
pub mod list;
pub mod runner;
pub mod select;
pub mod style;

use rust_prompts_core::error::Result;

use keys::KeyPress;
use style::{bold, bright_blue, green, red, yellow};

/// One rendered state of a prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    /// Column of the text cursor on the first line, when input is shown.
    pub cursor_column: Option<usize>,
}

pub trait Prompt {
    type Value;

    fn render(&self) -> Frame;

    /// Consumes a key press, returning the final value once submitted.
    ///
    /// # Errors
    ///
    /// Returns [`rust_prompts_core::error::Error::Interrupted`] on Ctrl+C.
    fn handle_event(&mut self, key: &KeyPress) -> Result<Option<Self::Value>>;

    /// Line left on screen after the prompt finished.
    fn success_line(&self, value: &Self::Value) -> String;
}

pub(crate) fn header(indent: &str, message: &str) -> String {
    format!("{indent}{}{}", yellow("? "), bold(message))
}

/// `? message › value`, left behind once a prompt resolved.
pub(crate) fn resolved_line(indent: &str, message: &str, value: &str) -> String {
    format!(
        "{} {} {}",
        header(indent, message),
        bright_blue(figures::POINTER_SMALL),
        green(value)
    )
}

pub(crate) fn error_line(indent: &str, error: &str) -> String {
    format!("{indent}{}", red(&format!("{} {error}", figures::CROSS)))
}
