//! Yes/no prompt.

use serde::Deserialize;

use rust_prompts_core::error::{Error, Result};

use super::figures::POINTER_SMALL;
use super::input_buffer::InputBuffer;
use super::keys::KeyPress;
use super::list::DEFAULT_INDENT;
use super::style::{bright_blue, dim, visible_width};
use super::{error_line, header, resolved_line, Frame, Prompt};

pub const DEFAULT_ACTIVE: &str = "Yes";
pub const DEFAULT_INACTIVE: &str = "No";

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ConfirmOptions {
    pub message: String,
    pub default: Option<bool>,
    pub active: Option<String>,
    pub inactive: Option<String>,
}

pub struct Confirm {
    message: String,
    default: Option<bool>,
    active: String,
    inactive: String,
    buffer: InputBuffer,
    error: Option<String>,
}

fn initial(label: &str) -> String {
    label.chars().next().map(String::from).unwrap_or_default()
}

impl Confirm {
    #[must_use]
    pub fn new(options: ConfirmOptions) -> Self {
        Self {
            message: options.message,
            default: options.default,
            active: options.active.unwrap_or_else(|| DEFAULT_ACTIVE.to_string()),
            inactive: options
                .inactive
                .unwrap_or_else(|| DEFAULT_INACTIVE.to_string()),
            buffer: InputBuffer::default(),
            error: None,
        }
    }

    /// `(Y/n)`, `(y/N)` or `(y/n)`, the default in upper case.
    #[must_use]
    pub fn hint(&self) -> String {
        let active = initial(&self.active);
        let inactive = initial(&self.inactive);
        let (active, inactive) = match self.default {
            Some(true) => (active.to_uppercase(), inactive.to_lowercase()),
            Some(false) => (active.to_lowercase(), inactive.to_uppercase()),
            None => (active.to_lowercase(), inactive.to_lowercase()),
        };
        format!("({active}/{inactive})")
    }

    /// Maps an answer to a boolean. Either label or its first letter is
    /// accepted, ignoring case; an empty answer falls back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for any other answer.
    pub fn validate(&self, value: &str) -> Result<bool> {
        let answer = value.trim().to_lowercase();
        if answer.is_empty() {
            if let Some(default) = self.default {
                return Ok(default);
            }
        }

        let is_answer = |label: &str| {
            let label = label.to_lowercase();
            answer == label || answer == initial(&label)
        };
        if is_answer(&self.active) {
            Ok(true)
        } else if is_answer(&self.inactive) {
            Ok(false)
        } else {
            Err(Error::Validation("Invalid answer.".to_string()))
        }
    }

    /// Resolves the prompt without user interaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when `value` is not an accepted answer.
    pub fn inject(&self, value: &str) -> Result<bool> {
        self.validate(value)
    }

    fn header(&self) -> String {
        format!(
            "{} {} {} ",
            header(DEFAULT_INDENT, &self.message),
            dim(&self.hint()),
            bright_blue(POINTER_SMALL)
        )
    }
}

impl Prompt for Confirm {
    type Value = bool;

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

    fn handle_event(&mut self, key: &KeyPress) -> Result<Option<bool>> {
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

    fn success_line(&self, value: &bool) -> String {
        let label = if *value { &self.active } else { &self.inactive };
        resolved_line(DEFAULT_INDENT, &self.message, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::style::strip_ansi;

    fn confirm(default: Option<bool>) -> Confirm {
        Confirm::new(ConfirmOptions {
            message: "Continue?".to_string(),
            default,
            ..ConfirmOptions::default()
        })
    }

    #[test]
    fn test_hints() {
        assert_eq!(confirm(Some(true)).hint(), "(Y/n)");
        assert_eq!(confirm(Some(false)).hint(), "(y/N)");
        assert_eq!(confirm(None).hint(), "(y/n)");
    }

    #[test]
    fn test_accepted_answers() {
        let prompt = confirm(None);
        assert!(prompt.validate("y").unwrap());
        assert!(prompt.validate("YES").unwrap());
        assert!(!prompt.validate("n").unwrap());
        assert!(!prompt.validate("No").unwrap());
        assert!(matches!(prompt.validate("maybe"), Err(Error::Validation(_))));
        assert!(matches!(prompt.validate(""), Err(Error::Validation(_))));
    }

    #[test]
    fn test_empty_answer_uses_default() {
        assert!(confirm(Some(true)).inject("").unwrap());
        assert!(!confirm(Some(false)).inject("").unwrap());
    }

    #[test]
    fn test_custom_labels() {
        let prompt = Confirm::new(ConfirmOptions {
            message: "Deploy?".to_string(),
            default: Some(false),
            active: Some("Ship".to_string()),
            inactive: Some("Hold".to_string()),
        });
        assert_eq!(prompt.hint(), "(s/H)");
        assert!(prompt.validate("ship").unwrap());
        assert!(!prompt.validate("h").unwrap());
        assert_eq!(strip_ansi(&prompt.success_line(&true)), " ? Deploy? › Ship");
    }

    #[test]
    fn test_invalid_answer_then_retry() {
        let mut prompt = confirm(None);
        prompt.handle_event(&KeyPress::char('x')).unwrap();
        assert_eq!(prompt.handle_event(&KeyPress::named("return")).unwrap(), None);
        assert!(strip_ansi(&prompt.render().text).ends_with("✘ Invalid answer."));

        prompt.handle_event(&KeyPress::named("backspace")).unwrap();
        prompt.handle_event(&KeyPress::char('Y')).unwrap();
        assert_eq!(
            prompt.handle_event(&KeyPress::named("return")).unwrap(),
            Some(true)
        );
    }
}
