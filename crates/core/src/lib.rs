//! Rust Prompts Core Library
//!
//! This crate provides the core functionality for rust-prompts, an interactive
//! command-line toolkit: the option model behind list prompts and a
//! declarative command line parser.
//!
//! # Key Features
//!
//! - **Option Tree Model**: Normalize strings, options and nested groups into an immutable tree
//! - **Flattening**: Project the tree into ordered lists with or without group headers
//! - **Command Parsing**: Sub-commands, typed option values and global option inheritance
//! - **Configuration Management**: Resolve and load YAML option specification files
//! - **Error Handling**: One error type for every failure mode
//!
//! # Examples
//!
//! Loading option specifications from a file:
//!
//! ```no_run
//! use rust_prompts_core::config::get_options_path;
//! use rust_prompts_core::file_handling::get_option_specs;
//! use rust_prompts_core::options::OptionTree;
//!
//! let raw_options = get_option_specs(&get_options_path(None))?;
//! let tree = OptionTree::from_raw(&raw_options)?;
//! for option in tree.leaves() {
//!     println!("{} -> {}", option.name, option.value);
//! }
//! # Ok::<(), rust_prompts_core::error::Error>(())
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod options;
