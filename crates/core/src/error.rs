use log::error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Option group at position {} has no name.", .0)]
    GroupWithoutName(String),

    #[error("Expected an option but got an option group: `{}`", .0)]
    ExpectedOption(String),

    #[error("`{}` is not one of the available options.", .0)]
    InvalidSelection(String),

    #[error("{}", .0)]
    Validation(String),

    #[error("Prompt was interrupted.")]
    Interrupted,

    #[error("Invalid option flags: `{}`", .0)]
    InvalidFlags(String),

    #[error("Unknown option: `{}`", .0)]
    UnknownOption(String),

    #[error("Missing value for option: `{}`", .0)]
    MissingOptionValue(String),

    #[error("Option `{}` must be of type `{}`, but got: `{}`", .option, .type_name, .value)]
    InvalidOptionValue {
        option: String,
        type_name: String,
        value: String,
    },

    #[error("Unknown type `{}`", .0)]
    UnknownType(String),

    #[error("Duplicate option name: `{}`", .0)]
    DuplicateOption(String),

    #[error("Option `{}` was given more than once", .0)]
    DuplicateOptionValue(String),

    #[error("Duplicate command name: `{}`", .0)]
    DuplicateCommand(String),

    #[error("Duplicate type name: `{}`", .0)]
    DuplicateType(String),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        error!("Failed {action} {file_description} file `{path}`");
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn invalid_option_value(option: &str, type_name: &str, value: &str) -> Self {
        Self::InvalidOptionValue {
            option: option.to_string(),
            type_name: type_name.to_string(),
            value: value.to_string(),
        }
    }
}
