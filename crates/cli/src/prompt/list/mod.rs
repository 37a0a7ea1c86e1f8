//! Generic list prompt engine.
//!
//! [`GenericList`] is a keyboard driven, paginated, searchable selector over an
//! [`OptionTree`]. Groups can be entered and left again; while inside a group
//! a synthetic back row leads out of it. The engine is split by concern:
//!
//! - [`navigation`]: cursor movement, wrap-around and paging
//! - [`search`]: live filtering of the current scope
//! - [`groups`]: drill-down, back navigation and submission
//! - [`render`]: turning the state into text
//!
//! # Examples
//!
//! ```
//! use rust_prompts_cli::prompt::keys::KeyPress;
//! use rust_prompts_cli::prompt::list::{GenericList, ListOptions};
//! use rust_prompts_core::options::RawOption;
//!
//! let mut list = GenericList::new(ListOptions {
//!     message: "Pick one".to_string(),
//!     options: vec![RawOption::from("foo"), RawOption::from("bar")],
//!     ..ListOptions::default()
//! })?;
//!
//! list.handle_event(&KeyPress::named("down"))?;
//! let value = list.handle_event(&KeyPress::named("return"))?;
//! assert_eq!(value.as_deref(), Some("bar"));
//! # Ok::<(), rust_prompts_core::error::Error>(())
//! ```

pub mod groups;
pub mod navigation;
pub mod render;
pub mod search;

use log::{debug, warn};
use serde::Deserialize;

use rust_prompts_core::error::{Error, Result};
use rust_prompts_core::options::{ListEntry, NodeId, OptionTree, RawOption};

use super::figures;
use super::fuzzy::Matcher;
use super::input_buffer::InputBuffer;
use super::keys::{is_key, KeyPress};
use super::style::{bright_blue, yellow};

pub use groups::Submission;

pub const DEFAULT_MAX_ROWS: usize = 10;
pub const DEFAULT_MAX_BREADCRUMB_ITEMS: usize = 5;
pub const DEFAULT_BREADCRUMB_SEPARATOR: &str = "›";
pub const DEFAULT_INDENT: &str = " ";

/// A group icon setting: `false` hides it, `true` uses the default glyph.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Icon {
    Enabled(bool),
    Custom(String),
}

/// User overrides for key bindings. Unset lists keep their defaults.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ListKeyOptions {
    pub previous: Option<Vec<String>>,
    pub next: Option<Vec<String>>,
    pub previous_page: Option<Vec<String>>,
    pub next_page: Option<Vec<String>>,
    pub submit: Option<Vec<String>>,
}

/// Configuration surface of a list prompt, as written by users.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ListOptions {
    pub message: String,
    pub options: Vec<RawOption>,
    /// Value of the option selected initially.
    pub default: Option<String>,
    pub keys: ListKeyOptions,
    pub indent: Option<String>,
    pub list_pointer: Option<String>,
    pub search_label: Option<String>,
    /// Visible rows; `0` shows the whole list.
    pub max_rows: Option<usize>,
    pub search: bool,
    pub info: bool,
    pub max_breadcrumb_items: Option<usize>,
    pub breadcrumb_separator: Option<String>,
    pub back_pointer: Option<String>,
    pub group_pointer: Option<String>,
    pub group_icon: Option<Icon>,
    pub group_open_icon: Option<Icon>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListKeys {
    pub previous: Vec<String>,
    pub next: Vec<String>,
    pub previous_page: Vec<String>,
    pub next_page: Vec<String>,
    pub submit: Vec<String>,
    pub move_cursor_left: Vec<String>,
    pub move_cursor_right: Vec<String>,
    pub delete_char_left: Vec<String>,
    pub delete_char_right: Vec<String>,
}

fn key_names(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

impl ListKeys {
    fn resolve(options: &ListKeyOptions, search: bool) -> Self {
        let default_previous: &[&str] = if search { &["up"] } else { &["up", "u", "p", "8"] };
        let default_next: &[&str] = if search { &["down"] } else { &["down", "d", "n", "2"] };

        Self {
            previous: options.previous.clone().unwrap_or_else(|| key_names(default_previous)),
            next: options.next.clone().unwrap_or_else(|| key_names(default_next)),
            previous_page: options
                .previous_page
                .clone()
                .unwrap_or_else(|| key_names(&["pageup", "left"])),
            next_page: options
                .next_page
                .clone()
                .unwrap_or_else(|| key_names(&["pagedown", "right"])),
            submit: options
                .submit
                .clone()
                .unwrap_or_else(|| key_names(&["enter", "return"])),
            move_cursor_left: key_names(&["left"]),
            move_cursor_right: key_names(&["right"]),
            delete_char_left: key_names(&["backspace"]),
            delete_char_right: key_names(&["delete"]),
        }
    }
}

/// Resolved settings with every default filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSettings {
    pub message: String,
    pub prefix: String,
    pub indent: String,
    pub list_pointer: String,
    pub search_label: String,
    pub back_pointer: String,
    pub group_pointer: String,
    pub group_icon: Option<String>,
    pub group_open_icon: Option<String>,
    pub max_rows: usize,
    pub search: bool,
    pub info: bool,
    pub max_breadcrumb_items: usize,
    pub breadcrumb_separator: String,
    pub keys: ListKeys,
}

fn resolve_icon(icon: &Icon, default: &str) -> Option<String> {
    match icon {
        Icon::Enabled(false) => None,
        Icon::Enabled(true) => Some(default.to_string()),
        Icon::Custom(icon) => Some(icon.clone()),
    }
}

impl From<&ListOptions> for ListSettings {
    fn from(options: &ListOptions) -> Self {
        let group_icon = options.group_icon.clone().unwrap_or(Icon::Enabled(true));
        let group_open_icon = options
            .group_open_icon
            .clone()
            .unwrap_or_else(|| group_icon.clone());
        let list_pointer = options
            .list_pointer
            .clone()
            .unwrap_or_else(|| bright_blue(figures::POINTER));

        Self {
            message: options.message.clone(),
            prefix: yellow("? "),
            indent: options
                .indent
                .clone()
                .unwrap_or_else(|| DEFAULT_INDENT.to_string()),
            group_pointer: options
                .group_pointer
                .clone()
                .unwrap_or_else(|| list_pointer.clone()),
            list_pointer,
            search_label: options
                .search_label
                .clone()
                .unwrap_or_else(|| bright_blue(figures::SEARCH)),
            back_pointer: options
                .back_pointer
                .clone()
                .unwrap_or_else(|| bright_blue(figures::LEFT_POINTER)),
            group_icon: resolve_icon(&group_icon, figures::FOLDER),
            group_open_icon: resolve_icon(&group_open_icon, figures::FOLDER_OPEN),
            max_rows: options.max_rows.unwrap_or(DEFAULT_MAX_ROWS),
            search: options.search,
            info: options.info,
            max_breadcrumb_items: options
                .max_breadcrumb_items
                .unwrap_or(DEFAULT_MAX_BREADCRUMB_ITEMS),
            breadcrumb_separator: options
                .breadcrumb_separator
                .clone()
                .unwrap_or_else(|| DEFAULT_BREADCRUMB_SEPARATOR.to_string()),
            keys: ListKeys::resolve(&options.keys, options.search),
        }
    }
}

/// One row of the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Entry { id: NodeId, indent_level: usize },
    /// Leads out of the wrapped group.
    Back(NodeId),
}

impl Row {
    #[must_use]
    pub fn id(&self) -> NodeId {
        match self {
            Row::Entry { id, .. } | Row::Back(id) => *id,
        }
    }

    #[must_use]
    pub fn indent_level(&self) -> usize {
        match self {
            Row::Entry { indent_level, .. } => *indent_level,
            Row::Back(_) => 0,
        }
    }

    #[must_use]
    pub fn is_back(&self) -> bool {
        matches!(self, Row::Back(_))
    }
}

pub struct GenericList {
    settings: ListSettings,
    tree: OptionTree,
    matcher: Matcher,
    options: Vec<Row>,
    list_index: usize,
    list_offset: usize,
    parents: Vec<NodeId>,
    input: InputBuffer,
    selected: Option<String>,
}

impl GenericList {
    /// Builds the engine from user options.
    ///
    /// # Errors
    ///
    /// Fails when the option specification is malformed.
    pub fn new(options: ListOptions) -> Result<Self> {
        let tree = OptionTree::from_raw(&options.options)?;
        let settings = ListSettings::from(&options);

        let mut list = Self {
            settings,
            tree,
            matcher: Matcher::default(),
            options: Vec::new(),
            list_index: 0,
            list_offset: 0,
            parents: Vec::new(),
            input: InputBuffer::default(),
            selected: None,
        };

        let rows = list.current_rows();
        list.set_options(rows);
        list.list_index = list.initial_index(options.default.as_deref());
        list.list_offset = list.page_offset(list.list_index);
        debug!(
            "List prompt `{}` built with {} top level rows",
            list.settings.message,
            list.options.len()
        );
        Ok(list)
    }

    fn initial_index(&self, default: Option<&str>) -> usize {
        if let Some(value) = default {
            let position = self.options.iter().position(|row| {
                matches!(self.entry(row), ListEntry::Option(option) if option.value == value)
            });
            match position {
                Some(position) => return position,
                None => warn!("Default value `{value}` is not a top level option"),
            }
        }

        self.options
            .iter()
            .position(|row| !self.is_disabled(row))
            .unwrap_or(0)
    }

    fn page_offset(&self, index: usize) -> usize {
        let height = self.list_height();
        if height == 0 {
            return 0;
        }
        ((index / height) * height).min(self.options.len() - height)
    }

    #[must_use]
    pub fn settings(&self) -> &ListSettings {
        &self.settings
    }

    #[must_use]
    pub fn tree(&self) -> &OptionTree {
        &self.tree
    }

    /// The visible list.
    #[must_use]
    pub fn options(&self) -> &[Row] {
        &self.options
    }

    #[must_use]
    pub fn list_index(&self) -> usize {
        self.list_index
    }

    #[must_use]
    pub fn list_offset(&self) -> usize {
        self.list_offset
    }

    /// Groups entered so far, outermost first.
    #[must_use]
    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    #[must_use]
    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    /// Value of the submitted option, once one was submitted.
    #[must_use]
    pub fn selected_value(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The row under the cursor.
    #[must_use]
    pub fn current_row(&self) -> Option<&Row> {
        self.options.get(self.list_index)
    }

    #[must_use]
    pub fn entry(&self, row: &Row) -> &ListEntry {
        self.tree.get(row.id())
    }

    #[must_use]
    pub fn is_disabled(&self, row: &Row) -> bool {
        !row.is_back() && self.entry(row).is_disabled()
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        !self.input.is_empty()
    }

    #[must_use]
    pub fn has_parent(&self) -> bool {
        !self.parents.is_empty()
    }

    pub(crate) fn parent(&self) -> Option<NodeId> {
        self.parents.last().copied()
    }

    /// Unfiltered rows of the current scope.
    #[must_use]
    pub fn current_rows(&self) -> Vec<Row> {
        self.tree
            .children(self.parent())
            .iter()
            .map(|&id| Row::Entry {
                id,
                indent_level: 0,
            })
            .collect()
    }

    /// Number of rows shown at once.
    #[must_use]
    pub fn list_height(&self) -> usize {
        let max_rows = if self.settings.max_rows == 0 {
            self.options.len()
        } else {
            self.settings.max_rows
        };
        self.options.len().min(max_rows)
    }

    /// Replaces the visible list, prepending the back row inside a group,
    /// and clamps the cursor into the new bounds.
    pub fn set_options(&mut self, options: Vec<Row>) {
        self.options = options;

        if let Some(parent) = self.parent() {
            if self.options.first() != Some(&Row::Back(parent)) {
                self.options.insert(0, Row::Back(parent));
            }
        }

        self.list_index = self
            .list_index
            .min(self.options.len().saturating_sub(1));
        self.list_offset = self
            .list_offset
            .min(self.options.len().saturating_sub(self.list_height()));
    }

    /// Feeds one key press into the engine.
    ///
    /// Returns the selected value once a leaf option is submitted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interrupted`] on Ctrl+C.
    pub fn handle_event(&mut self, key: &KeyPress) -> Result<Option<String>> {
        if key.is_interrupt() {
            return Err(Error::Interrupted);
        }

        let keys = &self.settings.keys;
        if is_key(&keys.previous, key) {
            self.select_previous();
        } else if is_key(&keys.next, key) {
            self.select_next();
        } else if is_key(&keys.next_page, key) {
            self.select_next_page();
        } else if is_key(&keys.previous_page, key) {
            self.select_previous_page();
        } else if is_key(&keys.submit, key) {
            if let Submission::Selected(value) = self.submit() {
                return Ok(Some(value));
            }
        } else if self.settings.search {
            self.handle_search_key(key);
        }

        Ok(None)
    }

    fn handle_search_key(&mut self, key: &KeyPress) {
        let keys = &self.settings.keys;
        if is_key(&keys.move_cursor_left, key) {
            self.input.move_left();
        } else if is_key(&keys.move_cursor_right, key) {
            self.input.move_right();
        } else if is_key(&keys.delete_char_left, key) {
            if self.input.delete_char() {
                self.match_options();
            }
        } else if is_key(&keys.delete_char_right, key) {
            if self.input.delete_char_right() {
                self.match_options();
            }
        } else if let Some(c) = key.printable() {
            self.input.add_char(c);
            self.match_options();
        }
    }
}
