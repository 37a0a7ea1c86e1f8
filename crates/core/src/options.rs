//! Option tree model for list prompts.
//!
//! Raw option specifications (as written by users or loaded from YAML) are
//! normalized once into an [`OptionTree`]. The tree is never mutated after
//! construction; list prompts only ever look at *projections* of it produced
//! by [`OptionTree::flatten`] or by a search.
//!
//! # Examples
//!
//! ```
//! use rust_prompts_core::options::{OptionTree, RawOption};
//!
//! let tree = OptionTree::from_raw(&[
//!     RawOption::from("foo"),
//!     RawOption::group("baz", vec![RawOption::from("beep"), RawOption::from("boop")]),
//! ])?;
//!
//! let values: Vec<&str> = tree
//!     .flatten(tree.roots(), false)
//!     .iter()
//!     .filter_map(|flat| tree.get(flat.id).as_option().ok())
//!     .map(|option| option.value.as_str())
//!     .collect();
//! assert_eq!(values, ["foo", "beep", "boop"]);
//! # Ok::<(), rust_prompts_core::error::Error>(())
//! ```

use std::fmt::{Display, Formatter};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Label used by [`RawOption::separator`] when none is given.
pub const DEFAULT_SEPARATOR_LABEL: &str = "------------";

/// A user supplied option specification.
///
/// Accepts a bare string, a leaf object (`{name?, value, disabled?}`) or a
/// group object (`{name, options, disabled?}`), nested arbitrarily.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawOption {
    Name(String),
    Group {
        name: Option<String>,
        options: Vec<RawOption>,
        #[serde(default)]
        disabled: bool,
    },
    Option {
        value: String,
        name: Option<String>,
        #[serde(default)]
        disabled: bool,
    },
}

impl RawOption {
    pub fn option(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Option {
            value: value.into(),
            name: Some(name.into()),
            disabled: false,
        }
    }

    pub fn group(name: impl Into<String>, options: Vec<RawOption>) -> Self {
        Self::Group {
            name: Some(name.into()),
            options,
            disabled: false,
        }
    }

    /// Builds a disabled placeholder row, useful to visually split a list.
    pub fn separator(label: Option<&str>) -> Self {
        Self::Option {
            value: label.unwrap_or(DEFAULT_SEPARATOR_LABEL).to_string(),
            name: None,
            disabled: true,
        }
    }

    #[must_use]
    pub fn disabled(self) -> Self {
        match self {
            Self::Name(value) => Self::Option {
                value,
                name: None,
                disabled: true,
            },
            Self::Group { name, options, .. } => Self::Group {
                name,
                options,
                disabled: true,
            },
            Self::Option { value, name, .. } => Self::Option {
                value,
                name,
                disabled: true,
            },
        }
    }
}

impl From<&str> for RawOption {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for RawOption {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

/// Kind of entry a raw specification normalizes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Option,
    Group,
}

/// Classifies a raw specification.
///
/// A specification is a group only when it carries at least one child. A group
/// written with an empty `options` list is a plain option.
#[must_use]
pub fn classify(raw: &RawOption) -> EntryKind {
    match raw {
        RawOption::Group { options, .. } if !options.is_empty() => EntryKind::Group,
        _ => EntryKind::Option,
    }
}

/// Stable identifier of an entry inside the [`OptionTree`] that minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafOption {
    pub name: String,
    pub value: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    pub name: String,
    pub disabled: bool,
    pub options: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Option(LeafOption),
    Group(OptionGroup),
}

impl ListEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            ListEntry::Option(option) => &option.name,
            ListEntry::Group(group) => &group.name,
        }
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        match self {
            ListEntry::Option(option) => option.disabled,
            ListEntry::Group(group) => group.disabled,
        }
    }

    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self, ListEntry::Group(_))
    }

    /// Returns the leaf option, or [`Error::ExpectedOption`] for a group.
    ///
    /// # Errors
    ///
    /// Fails when the entry is a group.
    pub fn as_option(&self) -> Result<&LeafOption> {
        match self {
            ListEntry::Option(option) => Ok(option),
            ListEntry::Group(group) => Err(Error::ExpectedOption(group.name.clone())),
        }
    }
}

impl Display for ListEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An entry of a flattened projection together with its depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatOption {
    pub id: NodeId,
    pub indent_level: usize,
}

/// Normalized, immutable option tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionTree {
    entries: Vec<ListEntry>,
    roots: Vec<NodeId>,
}

impl OptionTree {
    /// Normalizes raw specifications into a tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GroupWithoutName`] if any group lacks a name. No partial
    /// tree is produced.
    pub fn from_raw(raw_options: &[RawOption]) -> Result<Self> {
        let mut tree = Self::default();
        let mut roots = Vec::with_capacity(raw_options.len());
        for (position, raw) in raw_options.iter().enumerate() {
            roots.push(tree.normalize(raw, &position.to_string())?);
        }
        tree.roots = roots;
        Ok(tree)
    }

    fn normalize(&mut self, raw: &RawOption, position: &str) -> Result<NodeId> {
        let entry = match (classify(raw), raw) {
            (_, RawOption::Name(name)) => ListEntry::Option(LeafOption {
                name: name.clone(),
                value: name.clone(),
                disabled: false,
            }),
            (
                EntryKind::Group,
                RawOption::Group {
                    name,
                    options,
                    disabled,
                },
            ) => {
                let name = name
                    .clone()
                    .ok_or_else(|| Error::GroupWithoutName(position.to_string()))?;
                let mut children = Vec::with_capacity(options.len());
                for (index, child) in options.iter().enumerate() {
                    children.push(self.normalize(child, &format!("{position}.{index}"))?);
                }
                ListEntry::Group(OptionGroup {
                    name,
                    disabled: *disabled,
                    options: children,
                })
            }
            (_, RawOption::Group { name, disabled, .. }) => {
                let name = name
                    .clone()
                    .ok_or_else(|| Error::GroupWithoutName(position.to_string()))?;
                ListEntry::Option(LeafOption {
                    value: name.clone(),
                    name,
                    disabled: *disabled,
                })
            }
            (
                _,
                RawOption::Option {
                    value,
                    name,
                    disabled,
                },
            ) => ListEntry::Option(LeafOption {
                name: name.clone().unwrap_or_else(|| value.clone()),
                value: value.clone(),
                disabled: *disabled,
            }),
        };

        self.entries.push(entry);
        Ok(NodeId(self.entries.len() - 1))
    }

    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Looks up an entry. Ids are only ever minted by this tree.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &ListEntry {
        &self.entries[id.0]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Direct children of a scope, or the roots when no scope is given.
    #[must_use]
    pub fn children(&self, scope: Option<NodeId>) -> &[NodeId] {
        match scope.map(|id| self.get(id)) {
            Some(ListEntry::Group(group)) => &group.options,
            Some(ListEntry::Option(_)) => &[],
            None => &self.roots,
        }
    }

    /// Depth-first pre-order projection of `scope`.
    ///
    /// With `include_groups` every entry is emitted and children sit one level
    /// deeper than their group. Without it only leaves are emitted, and the
    /// children of an omitted group keep the group's own level.
    #[must_use]
    pub fn flatten(&self, scope: &[NodeId], include_groups: bool) -> Vec<FlatOption> {
        let mut flattened = Vec::new();
        self.flatten_into(scope, include_groups, 0, &mut flattened);
        flattened
    }

    fn flatten_into(
        &self,
        scope: &[NodeId],
        include_groups: bool,
        indent_level: usize,
        flattened: &mut Vec<FlatOption>,
    ) {
        for &id in scope {
            match self.get(id) {
                ListEntry::Option(_) => flattened.push(FlatOption { id, indent_level }),
                ListEntry::Group(group) => {
                    if include_groups {
                        flattened.push(FlatOption { id, indent_level });
                        self.flatten_into(&group.options, true, indent_level + 1, flattened);
                    } else {
                        self.flatten_into(&group.options, false, indent_level, flattened);
                    }
                }
            }
        }
    }

    /// Every leaf option of the tree, in display order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&LeafOption> {
        self.flatten(&self.roots, false)
            .into_iter()
            .filter_map(|flat| self.get(flat.id).as_option().ok())
            .collect()
    }

    /// Finds the leaf with the given value anywhere in the tree.
    #[must_use]
    pub fn find_value(&self, value: &str) -> Option<&LeafOption> {
        self.leaves().into_iter().find(|option| option.value == value)
    }
}
