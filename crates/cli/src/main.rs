use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use rust_prompts_cli::cli_args::{Args, ConfirmArgs, InputArgs, PromptCommand, SelectArgs};
use rust_prompts_cli::options_file::load_list_options;
use rust_prompts_cli::prompt::confirm::{Confirm, ConfirmOptions};
use rust_prompts_cli::prompt::input::{Input, InputOptions};
use rust_prompts_cli::prompt::list::ListOptions;
use rust_prompts_cli::prompt::runner::run;
use rust_prompts_cli::prompt::select::Select;
use rust_prompts_cli::terminal::CrosstermTty;
use rust_prompts_core::config;
use rust_prompts_core::error::Result;

/// Settings for the select prompt: the options file, overridden by flags.
fn list_options(args: &SelectArgs) -> Result<ListOptions> {
    let base = if args.needs_options_file() || args.options_file.is_some() {
        let options_path = config::get_options_path(args.options_file.as_deref());
        debug!("Options path: `{options_path}`");
        load_list_options(&options_path)?
    } else {
        ListOptions::default()
    };
    Ok(args.apply(base))
}

fn select(args: &SelectArgs) -> Result<String> {
    let mut prompt = Select::new(list_options(args)?)?;
    if let Some(value) = &args.inject {
        info!("Injecting select value");
        return prompt.inject(value);
    }
    run(&mut prompt, &mut CrosstermTty::new()?)
}

fn input(args: &InputArgs) -> Result<String> {
    let mut prompt = Input::new(InputOptions::from(args));
    if let Some(value) = &args.inject {
        info!("Injecting input value");
        return prompt.inject(value);
    }
    run(&mut prompt, &mut CrosstermTty::new()?)
}

fn confirm(args: &ConfirmArgs) -> Result<bool> {
    let mut prompt = Confirm::new(ConfirmOptions::from(args));
    if let Some(value) = &args.inject {
        info!("Injecting confirm answer");
        return prompt.inject(value);
    }
    run(&mut prompt, &mut CrosstermTty::new()?)
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let value = match &args.command {
        PromptCommand::Select(args) => select(args)?,
        PromptCommand::Input(args) => input(args)?,
        PromptCommand::Confirm(args) => confirm(args)?.to_string(),
    };

    println!("{value}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
