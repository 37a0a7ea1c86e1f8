//! Parsing of option flag definitions such as `-g, --global [val:custom]`.

use crate::error::{Error, Result};

/// Type applied to an argument that does not name one.
pub const DEFAULT_TYPE: &str = "string";

/// The value an option accepts, as declared in its flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDefinition {
    pub name: String,
    pub type_name: String,
    /// `[name]` arguments may be omitted, `<name>` arguments may not.
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDefinition {
    pub short: Option<char>,
    pub long: Option<String>,
    pub argument: Option<ArgumentDefinition>,
}

impl FlagDefinition {
    /// Key under which parsed values are stored: the long name in
    /// snake_case, or the short name when there is no long one.
    #[must_use]
    pub fn key(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => long.replace('-', "_"),
            (None, Some(short)) => short.to_string(),
            (None, None) => String::new(),
        }
    }

    /// Most descriptive spelling of the flag, used in messages.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => String::new(),
        }
    }
}

/// Parses a flags definition.
///
/// # Errors
///
/// Returns [`Error::InvalidFlags`] when the definition has no flag, repeats a
/// short or long flag, or contains a malformed token.
///
/// # Examples
///
/// ```
/// use rust_prompts_core::command::flags::parse_flags;
///
/// let flags = parse_flags("-g, --global [val:custom]")?;
/// assert_eq!(flags.short, Some('g'));
/// assert_eq!(flags.long.as_deref(), Some("global"));
/// assert!(flags.argument.unwrap().optional);
/// # Ok::<(), rust_prompts_core::error::Error>(())
/// ```
pub fn parse_flags(flags: &str) -> Result<FlagDefinition> {
    let invalid = || Error::InvalidFlags(flags.to_string());

    let mut definition = FlagDefinition {
        short: None,
        long: None,
        argument: None,
    };

    for token in flags
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
    {
        if let Some(long) = token.strip_prefix("--") {
            if definition.long.is_some() || !is_valid_name(long) {
                return Err(invalid());
            }
            definition.long = Some(long.to_string());
        } else if let Some(short) = token.strip_prefix('-') {
            let mut chars = short.chars();
            let (Some(short), None) = (chars.next(), chars.next()) else {
                return Err(invalid());
            };
            if definition.short.is_some() || !short.is_alphanumeric() {
                return Err(invalid());
            }
            definition.short = Some(short);
        } else if definition.argument.is_none() {
            definition.argument = Some(parse_argument(token).ok_or_else(invalid)?);
        } else {
            return Err(invalid());
        }
    }

    if definition.short.is_none() && definition.long.is_none() {
        return Err(invalid());
    }

    Ok(definition)
}

fn parse_argument(token: &str) -> Option<ArgumentDefinition> {
    let (inner, optional) = if let Some(inner) = token.strip_prefix('[') {
        (inner.strip_suffix(']')?, true)
    } else if let Some(inner) = token.strip_prefix('<') {
        (inner.strip_suffix('>')?, false)
    } else {
        return None;
    };

    let (name, type_name) = inner.split_once(':').unwrap_or((inner, DEFAULT_TYPE));
    if !is_valid_name(name) || !is_valid_name(type_name) {
        return None;
    }

    Some(ArgumentDefinition {
        name: name.to_string(),
        type_name: type_name.to_string(),
        optional,
    })
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}
