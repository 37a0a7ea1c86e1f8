//! Declarative command line parser.
//!
//! Commands declare their options with flag strings (see [`flags`]), may
//! register custom value types, and nest sub-commands. Options marked as
//! global are accepted by every descendant command.
//!
//! # Examples
//!
//! ```
//! use rust_prompts_core::command::{Command, OptionSettings, Value};
//!
//! let cmd = Command::new()
//!     .option("-g, --global [val:custom]", "Available on all commands.", OptionSettings::global())?
//!     .add_type("custom", |context| Ok(Value::from(context.value.to_uppercase())))?
//!     .command("sub-command", Command::new().description("Some sub command."))?;
//!
//! let result = cmd.parse(&["sub-command", "-g", "halo"])?;
//! assert_eq!(result.command_path, ["sub-command"]);
//! assert_eq!(result.options.get("global"), Some(&Value::from("HALO")));
//! assert!(result.args.is_empty());
//! # Ok::<(), rust_prompts_core::error::Error>(())
//! ```

pub mod flags;
pub mod types;

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use indexmap::IndexMap;
use log::debug;

use crate::error::{Error, Result};
use flags::{parse_flags, FlagDefinition};
pub use types::{TypeContext, TypeHandler, Value};

/// Per-option behaviour.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionSettings {
    /// Accepted by all sub-commands as well.
    pub global: bool,
    /// Stored when the option is not given.
    pub default: Option<Value>,
    /// Repeated occurrences are gathered into a [`Value::List`].
    pub collect: bool,
}

impl OptionSettings {
    #[must_use]
    pub fn global() -> Self {
        Self {
            global: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    #[must_use]
    pub fn collect(mut self) -> Self {
        self.collect = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandOption {
    pub flags: FlagDefinition,
    pub description: String,
    pub settings: OptionSettings,
}

impl CommandOption {
    #[must_use]
    pub fn key(&self) -> String {
        self.flags.key()
    }
}

/// Outcome of [`Command::parse`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseResult {
    /// Names of the sub-commands that were walked into.
    pub command_path: Vec<String>,
    pub options: IndexMap<String, Value>,
    pub args: Vec<String>,
}

#[derive(Clone, Default)]
pub struct Command {
    description: Option<String>,
    options: Vec<CommandOption>,
    commands: IndexMap<String, Command>,
    types: IndexMap<String, TypeHandler>,
}

impl Debug for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("description", &self.description)
            .field("options", &self.options)
            .field("commands", &self.commands)
            .field("types", &self.types.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Command {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn options(&self) -> &[CommandOption] {
        &self.options
    }

    #[must_use]
    pub fn get_command(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// Declares an option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFlags`] for a malformed definition and
    /// [`Error::DuplicateOption`] when the name, short or long flag is already
    /// taken on this command.
    pub fn option(
        mut self,
        flags: &str,
        description: &str,
        settings: OptionSettings,
    ) -> Result<Self> {
        let flags = parse_flags(flags)?;
        let clashes = self.options.iter().any(|existing| {
            existing.key() == flags.key()
                || (flags.short.is_some() && existing.flags.short == flags.short)
                || (flags.long.is_some() && existing.flags.long == flags.long)
        });
        if clashes {
            return Err(Error::DuplicateOption(flags.display_name()));
        }

        self.options.push(CommandOption {
            flags,
            description: description.to_string(),
            settings,
        });
        Ok(self)
    }

    /// Registers a value type usable by this command and its sub-commands.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateType`] if the name is already registered here.
    pub fn add_type<F>(mut self, name: &str, handler: F) -> Result<Self>
    where
        F: Fn(&TypeContext<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        if self.types.contains_key(name) {
            return Err(Error::DuplicateType(name.to_string()));
        }
        self.types.insert(name.to_string(), Arc::new(handler));
        Ok(self)
    }

    /// Adds a sub-command.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateCommand`] if the name is already used.
    pub fn command(mut self, name: &str, command: Command) -> Result<Self> {
        if self.commands.contains_key(name) {
            return Err(Error::DuplicateCommand(name.to_string()));
        }
        self.commands.insert(name.to_string(), command);
        Ok(self)
    }

    /// Parses command line arguments (without the program name).
    ///
    /// # Errors
    ///
    /// Returns an error for unknown options, missing or invalid values, unknown
    /// types and repeated non-collecting options.
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<ParseResult> {
        let mut parser = Parser {
            chain: vec![self],
            result: ParseResult::default(),
        };
        parser.run(args)?;
        parser.apply_defaults();
        debug!(
            "Parsed command `{}` with {} option(s) and {} argument(s)",
            parser.result.command_path.join(" "),
            parser.result.options.len(),
            parser.result.args.len()
        );
        Ok(parser.result)
    }
}

struct Parser<'a> {
    /// Root first, innermost sub-command last.
    chain: Vec<&'a Command>,
    result: ParseResult,
}

impl<'a> Parser<'a> {
    fn current(&self) -> &'a Command {
        self.chain[self.chain.len() - 1]
    }

    fn run<S: AsRef<str>>(&mut self, args: &[S]) -> Result<()> {
        let mut level_started = false;
        let mut literal = false;
        let mut index = 0;

        while index < args.len() {
            let arg = args[index].as_ref();
            index += 1;

            if literal {
                self.result.args.push(arg.to_string());
                continue;
            }

            if !level_started {
                if let Some(sub_command) = self.current().commands.get(arg) {
                    self.chain.push(sub_command);
                    self.result.command_path.push(arg.to_string());
                    continue;
                }
            }
            level_started = true;

            if arg == "--" {
                literal = true;
            } else if let Some(long) = arg.strip_prefix("--") {
                let (name, inline) = match long.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (long, None),
                };
                let option = self
                    .find_option(|flags| flags.long.as_deref() == Some(name))
                    .ok_or_else(|| Error::UnknownOption(format!("--{name}")))?;
                self.read_option(option, inline, args, &mut index)?;
            } else if is_short_group(arg) {
                let shorts: Vec<char> = arg.chars().skip(1).collect();
                let last = shorts.len() - 1;
                for (position, short) in shorts.into_iter().enumerate() {
                    let option = self
                        .find_option(|flags| flags.short == Some(short))
                        .ok_or_else(|| Error::UnknownOption(format!("-{short}")))?;
                    if position != last && option.flags.argument.is_some() {
                        return Err(Error::MissingOptionValue(format!("-{short}")));
                    }
                    self.read_option(option, None, args, &mut index)?;
                }
            } else {
                self.result.args.push(arg.to_string());
            }
        }

        Ok(())
    }

    /// Options of the current command, then global options of its ancestors
    /// from the closest outwards.
    fn scoped_options(&self) -> impl Iterator<Item = &'a CommandOption> + '_ {
        let ancestors = self.chain[..self.chain.len() - 1]
            .iter()
            .rev()
            .copied()
            .flat_map(|command: &'a Command| {
                command.options.iter().filter(|option| option.settings.global)
            });
        self.current().options.iter().chain(ancestors)
    }

    fn find_option<P>(&self, predicate: P) -> Option<&'a CommandOption>
    where
        P: Fn(&FlagDefinition) -> bool,
    {
        self.scoped_options().find(|option| predicate(&option.flags))
    }

    fn find_type(&self, name: &str) -> Option<&'a TypeHandler> {
        self.chain
            .iter()
            .rev()
            .copied()
            .find_map(|command: &'a Command| command.types.get(name))
    }

    fn read_option<S: AsRef<str>>(
        &mut self,
        option: &'a CommandOption,
        inline: Option<&str>,
        args: &[S],
        index: &mut usize,
    ) -> Result<()> {
        let flag_name = option.flags.display_name();

        let value = match &option.flags.argument {
            None => {
                if let Some(inline) = inline {
                    return Err(Error::invalid_option_value(&flag_name, "boolean", inline));
                }
                Value::Bool(true)
            }
            Some(argument) => {
                let next: Option<&str> = args.get(*index).map(|next| next.as_ref());
                let raw = match (inline, next) {
                    (Some(inline), _) => Some(inline),
                    (None, Some(next)) if !argument.optional || !looks_like_flag(next) => {
                        *index += 1;
                        Some(next)
                    }
                    _ => None,
                };

                match raw {
                    Some(raw) => {
                        let context = TypeContext {
                            option: &flag_name,
                            argument: &argument.name,
                            type_name: &argument.type_name,
                            value: raw,
                        };
                        match self.find_type(&argument.type_name) {
                            Some(handler) => handler(&context)?,
                            None => types::convert_builtin(&context)?,
                        }
                    }
                    None if argument.optional => Value::Bool(true),
                    None => return Err(Error::MissingOptionValue(flag_name)),
                }
            }
        };

        self.store(option, value)
    }

    fn store(&mut self, option: &CommandOption, value: Value) -> Result<()> {
        let key = option.key();
        match self.result.options.get_mut(&key) {
            Some(Value::List(values)) if option.settings.collect => values.push(value),
            Some(_) => return Err(Error::DuplicateOptionValue(option.flags.display_name())),
            None if option.settings.collect => {
                self.result.options.insert(key, Value::List(vec![value]));
            }
            None => {
                self.result.options.insert(key, value);
            }
        }
        Ok(())
    }

    fn apply_defaults(&mut self) {
        let defaults: Vec<(String, Value)> = self
            .scoped_options()
            .filter_map(|option| {
                option
                    .settings
                    .default
                    .clone()
                    .map(|default| (option.key(), default))
            })
            .collect();

        for (key, default) in defaults {
            self.result.options.entry(key).or_insert(default);
        }
    }
}

fn looks_like_flag(arg: &str) -> bool {
    arg.starts_with('-') && arg.len() > 1 && arg.parse::<f64>().is_err()
}

fn is_short_group(arg: &str) -> bool {
    looks_like_flag(arg) && !arg.starts_with("--")
}
