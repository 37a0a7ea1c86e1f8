//! Configuration path utilities for rust-prompts.
//!
//! This module resolves the location of option specification files and
//! expands shell variables like `~` in paths.

use log::debug;

/// Default path for the select prompt options file
const DEFAULT_OPTIONS_PATH: &str = "~/.rust-prompts/options.yml";

/// Resolves the options file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// options path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use rust_prompts_core::config::get_options_path;
///
/// let default_path = get_options_path(None);
/// assert!(default_path.ends_with("options.yml"));
///
/// let custom_path = get_options_path(Some("/path/to/options.yml"));
/// assert_eq!(custom_path, "/path/to/options.yml");
/// ```
#[must_use]
pub fn get_options_path(options_path_arg: Option<&str>) -> String {
    let options_path = options_path_arg.unwrap_or(DEFAULT_OPTIONS_PATH);
    let expanded = shellexpand::tilde(options_path).to_string();
    debug!("Options path: `{expanded}`");
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_options_path_with_custom_path() {
        let result = get_options_path(Some("/custom/path/options.yml"));
        assert_eq!(result, "/custom/path/options.yml");
    }

    #[test]
    fn test_get_options_path_with_none() {
        let result = get_options_path(None);
        // Should expand the tilde in the default path
        assert!(result.contains(".rust-prompts"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_options_path_with_tilde() {
        let result = get_options_path(Some("~/my-options.yml"));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-options.yml"));
    }
}
