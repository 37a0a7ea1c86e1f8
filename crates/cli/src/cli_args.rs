//! Command-line argument parsing.
//!
//! Each sub-command maps to one prompt. Flags override values loaded from the
//! options file.

use clap::{Parser, Subcommand};

use rust_prompts_core::options::RawOption;

use crate::prompt::confirm::ConfirmOptions;
use crate::prompt::input::InputOptions;
use crate::prompt::list::ListOptions;

/// Command-line arguments for the `rp` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use rust_prompts_cli::cli_args::{Args, PromptCommand};
///
/// let args = Args::parse_from(["rp", "select", "foo", "bar", "--search"]);
/// assert!(matches!(args.command, PromptCommand::Select(_)));
/// ```
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    #[command(subcommand)]
    pub command: PromptCommand,
}

#[derive(Subcommand, Debug)]
pub enum PromptCommand {
    /// Pick one value from a list of options.
    Select(SelectArgs),
    /// Ask for a line of text.
    Input(InputArgs),
    /// Ask a yes/no question.
    Confirm(ConfirmArgs),
}

#[derive(clap::Args, Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct SelectArgs {
    /// Options to choose from. Read from the options file when empty.
    pub options: Vec<String>,

    /// Path to a YAML options file: a list of options or full list settings.
    ///
    /// If not provided, defaults to `~/.rust-prompts/options.yml`.
    #[arg(long, short = 'f')]
    pub options_file: Option<String>,

    #[arg(long, short = 'm')]
    pub message: Option<String>,

    /// Number of visible rows, `0` shows all.
    #[arg(long)]
    pub max_rows: Option<usize>,

    /// Filter the list while typing.
    #[arg(long, short = 's', action)]
    pub search: bool,

    /// Show the position and key legend line.
    #[arg(long, short = 'i', action)]
    pub info: bool,

    /// Value to select initially.
    #[arg(long, short = 'd')]
    pub default: Option<String>,

    /// Answer without prompting.
    #[arg(long)]
    pub inject: Option<String>,
}

impl SelectArgs {
    /// Whether the options must come from the options file.
    #[must_use]
    pub fn needs_options_file(&self) -> bool {
        self.options.is_empty()
    }

    /// Applies the flags on top of `base`.
    #[must_use]
    pub fn apply(&self, mut base: ListOptions) -> ListOptions {
        if !self.options.is_empty() {
            base.options = self
                .options
                .iter()
                .map(|option| RawOption::from(option.as_str()))
                .collect();
        }
        if let Some(message) = &self.message {
            base.message.clone_from(message);
        }
        if self.max_rows.is_some() {
            base.max_rows = self.max_rows;
        }
        if self.default.is_some() {
            base.default.clone_from(&self.default);
        }
        base.search |= self.search;
        base.info |= self.info;
        if base.message.is_empty() {
            base.message = "Select an option".to_string();
        }
        base
    }
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    #[arg(long, short = 'm', default_value = "Enter a value")]
    pub message: String,

    /// Value used when the answer is left empty.
    #[arg(long, short = 'd')]
    pub default: Option<String>,

    #[arg(long, default_value_t = 0)]
    pub min_length: usize,

    #[arg(long)]
    pub max_length: Option<usize>,

    /// Answer without prompting.
    #[arg(long)]
    pub inject: Option<String>,
}

impl From<&InputArgs> for InputOptions {
    fn from(args: &InputArgs) -> Self {
        Self {
            message: args.message.clone(),
            default: args.default.clone(),
            min_length: args.min_length,
            max_length: args.max_length,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ConfirmArgs {
    #[arg(long, short = 'm', default_value = "Are you sure?")]
    pub message: String,

    /// Answer used when nothing is typed.
    #[arg(long, short = 'd')]
    pub default: Option<bool>,

    /// Label of the positive answer.
    #[arg(long)]
    pub active: Option<String>,

    /// Label of the negative answer.
    #[arg(long)]
    pub inactive: Option<String>,

    /// Answer without prompting.
    #[arg(long)]
    pub inject: Option<String>,
}

impl From<&ConfirmArgs> for ConfirmOptions {
    fn from(args: &ConfirmArgs) -> Self {
        Self {
            message: args.message.clone(),
            default: args.default,
            active: args.active.clone(),
            inactive: args.inactive.clone(),
        }
    }
}
