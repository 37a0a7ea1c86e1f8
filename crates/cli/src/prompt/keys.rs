//! Keyboard events as seen by the prompts.
//!
//! Prompts match symbolic key names (`"up"`, `"pagedown"`, `"a"`) against
//! configurable key lists, so the terminal backend only has to translate its
//! own events into a [`KeyPress`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// Symbolic name: a lowercase key name or the typed character.
    pub name: String,
    /// Printable character carried by the key, if any.
    pub char: Option<char>,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyPress {
    /// A named, non-printable key.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            char: None,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    /// A printable character.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self {
            name: c.to_lowercase().to_string(),
            char: Some(c),
            ctrl: false,
            meta: false,
            shift: c.is_uppercase(),
        }
    }

    #[must_use]
    pub fn ctrl(c: char) -> Self {
        Self {
            ctrl: true,
            char: None,
            ..Self::char(c)
        }
    }

    #[must_use]
    pub fn is_interrupt(&self) -> bool {
        self.ctrl && self.name == "c"
    }

    /// Character that should be inserted into an input buffer.
    #[must_use]
    pub fn printable(&self) -> Option<char> {
        if self.ctrl || self.meta {
            return None;
        }
        self.char.filter(|c| !c.is_control())
    }
}

impl From<KeyEvent> for KeyPress {
    fn from(event: KeyEvent) -> Self {
        let mut key = match event.code {
            KeyCode::Char(' ') => KeyPress {
                char: Some(' '),
                ..KeyPress::named("space")
            },
            KeyCode::Char(c) => KeyPress::char(c),
            KeyCode::Enter => KeyPress::named("return"),
            KeyCode::Up => KeyPress::named("up"),
            KeyCode::Down => KeyPress::named("down"),
            KeyCode::Left => KeyPress::named("left"),
            KeyCode::Right => KeyPress::named("right"),
            KeyCode::PageUp => KeyPress::named("pageup"),
            KeyCode::PageDown => KeyPress::named("pagedown"),
            KeyCode::Home => KeyPress::named("home"),
            KeyCode::End => KeyPress::named("end"),
            KeyCode::Backspace => KeyPress::named("backspace"),
            KeyCode::Delete => KeyPress::named("delete"),
            KeyCode::Tab | KeyCode::BackTab => KeyPress::named("tab"),
            KeyCode::Esc => KeyPress::named("escape"),
            KeyCode::F(n) => KeyPress::named(&format!("f{n}")),
            _ => KeyPress::named("unknown"),
        };

        key.ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        key.meta = event.modifiers.contains(KeyModifiers::ALT);
        key.shift |= event.modifiers.contains(KeyModifiers::SHIFT);
        if key.ctrl || key.meta {
            key.char = None;
        }
        key
    }
}

/// Whether `key` is bound to one of `names`.
#[must_use]
pub fn is_key(names: &[String], key: &KeyPress) -> bool {
    names.iter().any(|name| *name == key.name)
}
