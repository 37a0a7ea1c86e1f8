//! Single choice prompt over a (possibly nested) option list.

use log::debug;

use rust_prompts_core::error::{Error, Result};
use rust_prompts_core::options::RawOption;

use super::keys::KeyPress;
use super::list::{GenericList, ListOptions};
use super::{resolved_line, Frame, Prompt};

pub struct Select {
    list: GenericList,
}

impl Select {
    /// # Errors
    ///
    /// Fails when the option specification is malformed.
    pub fn new(options: ListOptions) -> Result<Self> {
        Ok(Self {
            list: GenericList::new(options)?,
        })
    }

    /// A disabled row used to split the list visually.
    #[must_use]
    pub fn separator(label: Option<&str>) -> RawOption {
        RawOption::separator(label)
    }

    #[must_use]
    pub fn list(&self) -> &GenericList {
        &self.list
    }

    /// Resolves the prompt without user interaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelection`] when `value` is not the value of a
    /// selectable option anywhere in the tree.
    pub fn inject(&self, value: &str) -> Result<String> {
        match self.list.tree().find_value(value) {
            Some(option) if !option.disabled => {
                debug!("Injected value `{value}`");
                Ok(option.value.clone())
            }
            _ => Err(Error::InvalidSelection(value.to_string())),
        }
    }
}

impl Prompt for Select {
    type Value = String;

    fn render(&self) -> Frame {
        self.list.render()
    }

    fn handle_event(&mut self, key: &KeyPress) -> Result<Option<String>> {
        self.list.handle_event(key)
    }

    fn success_line(&self, value: &String) -> String {
        let settings = self.list.settings();
        resolved_line(&settings.indent, &settings.message, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select() -> Select {
        Select::new(ListOptions {
            message: "Pick".to_string(),
            options: vec![
                RawOption::from("foo"),
                Select::separator(None),
                RawOption::from("bar").disabled(),
                RawOption::group("baz", vec![RawOption::option("Beep", "beep")]),
            ],
            ..ListOptions::default()
        })
        .unwrap()
    }

    #[test]
    fn test_inject_nested_value() {
        assert_eq!(select().inject("beep").unwrap(), "beep");
        assert_eq!(select().inject("foo").unwrap(), "foo");
    }

    #[test]
    fn test_inject_rejects_unknown_and_disabled() {
        assert!(matches!(select().inject("Beep"), Err(Error::InvalidSelection(_))));
        assert!(matches!(select().inject("baz"), Err(Error::InvalidSelection(_))));
        assert!(matches!(select().inject("bar"), Err(Error::InvalidSelection(_))));
    }

    #[test]
    fn test_separator_is_disabled() {
        let select = select();
        let row = select.list().options()[1];
        assert!(select.list().is_disabled(&row));
        assert_eq!(select.list().entry(&row).name(), "------------");
    }

    #[test]
    fn test_success_line() {
        let line = select().success_line(&"foo".to_string());
        assert_eq!(crate::prompt::style::strip_ansi(&line), " ? Pick › foo");
    }
}
