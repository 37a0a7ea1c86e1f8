//! Rust Prompts CLI Library
//!
//! This crate provides the interactive side of rust-prompts: keyboard
//! handling, the searchable and nestable list engine, the select, input and
//! confirm prompts, and the terminal they are drawn on.
//!
//! # Key Features
//!
//! - **Nested Option Lists**: groups are entered and left again through a back row
//! - **Live Search**: fuzzy filtering that keeps matching groups around their children
//! - **Pagination**: fixed height window with wrap-around and page jumps
//! - **Scriptable**: every prompt can be resolved with an injected answer
//!
//! # Architecture
//!
//! - [`prompt`]: prompt state machines and the read loop
//! - [`terminal`]: crossterm backend and a scripted backend for tests
//! - [`cli_args`]: command-line argument parsing
//! - [`options_file`]: loading select settings from YAML
//!
//! # Examples
//!
//! The CLI binary (`rp`) prints the answer on stdout:
//!
//! ```bash
//! # Pick from inline options
//! rp select foo bar baz
//!
//! # Searchable list from the default options file
//! rp select --search --info
//!
//! # Free text with bounds
//! rp input -m "Name?" --min-length 2
//!
//! # Non-interactive answer
//! rp confirm -m "Deploy?" --inject yes
//! ```

pub mod cli_args;
pub mod options_file;
pub mod prompt;
pub mod terminal;
