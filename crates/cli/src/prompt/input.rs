//! Free text prompt with length validation.

use serde::Deserialize;

use rust_prompts_core::error::{Error, Result};

use super::figures::POINTER_SMALL;
use super::input_buffer::InputBuffer;
use super::keys::KeyPress;
use super::list::DEFAULT_INDENT;
use super::style::{bright_blue, dim, visible_width};
use super::{error_line, header, resolved_line, Frame, Prompt};

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct InputOptions {
    pub message: String,
    /// Used when the input is left empty.
    pub default: Option<String>,
    pub min_length: usize,
    pub max_length: Option<usize>,
}

pub struct Input {
    options: InputOptions,
    buffer: InputBuffer,
    error: Option<String>,
}

impl Input {
    #[must_use]
    pub fn new(options: InputOptions) -> Self {
        Self {
            options,
            buffer: InputBuffer::default(),
            error: None,
        }
    }

    /// Trims `value`, falls back to the default and checks its length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] describing the violated bound.
    pub fn validate(&self, value: &str) -> Result<String> {
        let mut value = value.trim().to_string();
        if value.is_empty() {
            if let Some(default) = &self.options.default {
                value.clone_from(default);
            }
        }

        let length = value.chars().count();
        if length < self.options.min_length {
            return Err(Error::Validation(format!(
                "Value must be longer than {} but has a length of {length}.",
                self.options.min_length
            )));
        }
        if let Some(max_length) = self.options.max_length {
            if length > max_length {
                return Err(Error::Validation(format!(
                    "Value can't be longer than {max_length} but has a length of {length}."
                )));
            }
        }
        Ok(value)
    }

    /// Resolves the prompt without user interaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when `value` is rejected.
    pub fn inject(&self, value: &str) -> Result<String> {
        self.validate(value)
    }

    fn header(&self) -> String {
        let hint = self
            .options
            .default
            .as_ref()
            .map(|default| dim(&format!(" ({default})")))
            .unwrap_or_default();
        format!(
            "{}{hint} {} ",
            header(DEFAULT_INDENT, &self.options.message),
            bright_blue(POINTER_SMALL)
        )
    }
}

impl Prompt for Input {
    type Value = String;

    fn render(&self) -> Frame {
        let header = self.header();
        let mut text = format!("{header}{}", self.buffer.value());
        if let Some(error) = &self.error {
            text.push('\n');
            text.push_str(&error_line(DEFAULT_INDENT, error));
        }

        Frame {
            cursor_column: Some(visible_width(&header) + self.buffer.cursor_width()),
            text,
        }
    }

    fn handle_event(&mut self, key: &KeyPress) -> Result<Option<String>> {
        if key.is_interrupt() {
            return Err(Error::Interrupted);
        }
        self.error = None;

        if matches!(key.name.as_str(), "enter" | "return") {
            return match self.validate(&self.buffer.value()) {
                Ok(value) => Ok(Some(value)),
                Err(Error::Validation(message)) => {
                    self.error = Some(message);
                    Ok(None)
                }
                Err(error) => Err(error),
            };
        }

        self.buffer.handle_key(key);
        Ok(None)
    }

    fn success_line(&self, value: &String) -> String {
        resolved_line(DEFAULT_INDENT, &self.options.message, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::style::strip_ansi;

    fn input(min_length: usize, max_length: Option<usize>) -> Input {
        Input::new(InputOptions {
            message: "Name".to_string(),
            default: None,
            min_length,
            max_length,
        })
    }

    #[test]
    fn test_validate_trims() {
        assert_eq!(input(0, None).validate("  hi  ").unwrap(), "hi");
    }

    #[test]
    fn test_validate_lengths() {
        let error = input(3, None).validate("ab").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Value must be longer than 3 but has a length of 2."
        );

        let error = input(0, Some(2)).validate("abc").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Value can't be longer than 2 but has a length of 3."
        );
    }

    #[test]
    fn test_default_for_empty_input() {
        let prompt = Input::new(InputOptions {
            message: "Name".to_string(),
            default: Some("anon".to_string()),
            ..InputOptions::default()
        });
        assert_eq!(prompt.inject("").unwrap(), "anon");
        assert_eq!(strip_ansi(&prompt.render().text), " ? Name (anon) › ");
    }

    #[test]
    fn test_error_shown_until_next_key() {
        let mut prompt = input(2, None);
        prompt.handle_event(&KeyPress::char('a')).unwrap();
        assert_eq!(prompt.handle_event(&KeyPress::named("return")).unwrap(), None);
        assert_eq!(
            strip_ansi(&prompt.render().text),
            " ? Name › a\n ✘ Value must be longer than 2 but has a length of 1."
        );

        prompt.handle_event(&KeyPress::char('b')).unwrap();
        assert_eq!(strip_ansi(&prompt.render().text), " ? Name › ab");
        assert_eq!(
            prompt.handle_event(&KeyPress::named("return")).unwrap(),
            Some("ab".to_string())
        );
    }

    #[test]
    fn test_cursor_column() {
        let mut prompt = input(0, None);
        prompt.handle_event(&KeyPress::char('x')).unwrap();
        assert_eq!(prompt.render().cursor_column, Some(11));
    }
}
