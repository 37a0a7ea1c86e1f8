//! File handling for rust-prompts option specifications.
//!
//! Option specifications are YAML documents. A file either holds a bare list
//! of options or a mapping with prompt settings and an `options` key; the
//! caller picks the shape by choosing the deserialization target.

use std::fs::File;

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::options::{OptionTree, RawOption};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Reads and deserializes a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its content does not
/// match `T`.
pub fn read_yaml<T: DeserializeOwned>(file_description: &str, path: &str) -> Result<T> {
    let reader = get_reader(file_description, path)?;

    // This can't be shortcut with ? as serde would try to convert its own error
    let parsing_result: serde_yaml::Result<T> = serde_yaml::from_reader(reader);

    parsing_result.map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            file_description.to_string(),
            path.to_string(),
            e,
        )
    })
}

/// Loads a bare list of option specifications and validates it.
///
/// The specifications are normalized once so that malformed entries (such as
/// a group without a name) are reported here, before any prompt is built.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or is not a list of options
/// - An option group has no name
///
/// # Examples
///
/// ```no_run
/// use rust_prompts_core::file_handling::get_option_specs;
///
/// let options = get_option_specs("/home/me/.rust-prompts/options.yml")?;
/// println!("Loaded {} options", options.len());
/// # Ok::<(), rust_prompts_core::error::Error>(())
/// ```
pub fn get_option_specs(path: &str) -> Result<Vec<RawOption>> {
    let raw_options: Vec<RawOption> = read_yaml("options", path)?;
    OptionTree::from_raw(&raw_options)?;
    debug!("Loaded {} top level options from `{path}`", raw_options.len());
    Ok(raw_options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();
        temp_file
    }

    #[test]
    fn test_get_option_specs_valid_yaml() {
        let temp_file = write_temp(
            r#"
- foo
- name: Bar
  value: bar
- name: Baz
  options: [beep, boop]
"#,
        );
        let temp_path = temp_file.path().to_str().unwrap();

        let options = get_option_specs(temp_path).unwrap();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0], RawOption::from("foo"));
    }

    #[test]
    fn test_get_option_specs_group_without_name() {
        let temp_file = write_temp(
            r#"
- options: [beep]
"#,
        );
        let temp_path = temp_file.path().to_str().unwrap();

        let result = get_option_specs(temp_path);
        assert!(matches!(result, Err(Error::GroupWithoutName(_))));
    }

    #[test]
    fn test_get_option_specs_invalid_yaml() {
        let temp_file = write_temp("invalid: yaml: content: [");
        let temp_path = temp_file.path().to_str().unwrap();

        let result = get_option_specs(temp_path);
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_get_option_specs_file_not_found() {
        let result = get_option_specs("/this/path/does/not/exist.yml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_read_yaml_wrong_shape() {
        let temp_file = write_temp("just a string");
        let temp_path = temp_file.path().to_str().unwrap();

        let result: Result<Vec<RawOption>> = read_yaml("options", temp_path);
        assert!(result.is_err());
    }
}
