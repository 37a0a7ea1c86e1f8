//! Loading select prompt settings from an options file.

use log::debug;
use serde::Deserialize;

use rust_prompts_core::error::Result;
use rust_prompts_core::file_handling::read_yaml;
use rust_prompts_core::options::{OptionTree, RawOption};

use crate::prompt::list::ListOptions;

/// Accepted shapes of an options file.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum OptionsFile {
    List(Vec<RawOption>),
    Prompt(ListOptions),
}

impl From<OptionsFile> for ListOptions {
    fn from(file: OptionsFile) -> Self {
        match file {
            OptionsFile::List(options) => ListOptions {
                options,
                ..ListOptions::default()
            },
            OptionsFile::Prompt(options) => options,
        }
    }
}

/// Reads list settings from `path`, validating the option tree.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid YAML of either
/// shape, or holds a malformed option tree.
pub fn load_list_options(path: &str) -> Result<ListOptions> {
    let options: ListOptions = read_yaml::<OptionsFile>("options", path)?.into();
    OptionTree::from_raw(&options.options)?;
    debug!("Loaded {} options from `{path}`", options.options.len());
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_prompts_core::error::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn yaml_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_bare_list() {
        let file = yaml_file("- foo\n- name: Bar\n  value: bar\n");
        let options = load_list_options(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            options.options,
            vec![RawOption::from("foo"), RawOption::option("Bar", "bar")]
        );
        assert!(!options.search);
    }

    #[test]
    fn test_full_settings() {
        let file = yaml_file(
            r"
message: Pick a fruit
search: true
max_rows: 3
group_icon: false
keys:
  submit: [space]
options:
  - apple
  - name: Citrus
    options: [lemon, lime]
",
        );
        let options = load_list_options(file.path().to_str().unwrap()).unwrap();
        assert_eq!(options.message, "Pick a fruit");
        assert!(options.search);
        assert_eq!(options.max_rows, Some(3));
        assert_eq!(options.keys.submit, Some(vec!["space".to_string()]));
        assert_eq!(options.options.len(), 2);
    }

    #[test]
    fn test_group_without_name() {
        let file = yaml_file("- options: [a, b]\n");
        let result = load_list_options(file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::GroupWithoutName(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_list_options("/nonexistent/options.yml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
