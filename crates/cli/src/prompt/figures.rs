//! Glyphs used by the prompts.

use itertools::Itertools;

pub const POINTER: &str = "❯";
pub const POINTER_SMALL: &str = "›";
pub const LEFT_POINTER: &str = "❮";
pub const SEARCH: &str = "🔎";
pub const INFO: &str = "ℹ";
pub const CROSS: &str = "✘";
pub const FOLDER: &str = "📁";
pub const FOLDER_OPEN: &str = "📂";

/// Glyph for a key name, or the name itself when there is none.
#[must_use]
pub fn figure_for_key(key: &str) -> &str {
    match key {
        "up" => "↑",
        "down" => "↓",
        "left" => "←",
        "right" => "→",
        "pageup" => "⇞",
        "pagedown" => "⇟",
        "home" => "⇱",
        "end" => "⇲",
        "enter" | "return" => "↵",
        "backspace" => "⌫",
        "delete" => "⌦",
        "tab" => "⇥",
        "escape" => "⎋",
        "space" => "␣",
        other => other,
    }
}

/// Glyphs for a list of key names, without repeats.
#[must_use]
pub fn figures_for_keys(keys: &[String]) -> Vec<&str> {
    keys.iter()
        .map(|key| figure_for_key(key))
        .unique()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figures_for_keys_dedups() {
        let keys = vec!["enter".to_string(), "return".to_string()];
        assert_eq!(figures_for_keys(&keys), ["↵"]);
    }

    #[test]
    fn test_unknown_key_is_shown_as_is() {
        let keys = vec!["pagedown".to_string(), "n".to_string()];
        assert_eq!(figures_for_keys(&keys), ["⇟", "n"]);
    }
}
