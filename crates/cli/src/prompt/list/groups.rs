//! Group drill-down and submission.

use itertools::Itertools;
use log::debug;

use rust_prompts_core::options::{ListEntry, NodeId};

use super::{GenericList, Row};

/// Outcome of submitting the row under the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Left the current group.
    Back,
    Entered(NodeId),
    /// A leaf option was chosen; carries its value.
    Selected(String),
    /// Nothing selectable under the cursor.
    Ignored,
}

impl GenericList {
    /// Opens `group`, selecting its first child.
    pub fn enter_group(&mut self, group: NodeId) {
        debug!("Entering group `{}`", self.tree.get(group).name());
        self.parents.push(group);
        self.input.clear();
        let rows = self.current_rows();
        self.set_options(rows);
        self.list_index = 1.min(self.options.len().saturating_sub(1));
        self.list_offset = 0;
        self.settle(true);
    }

    /// Closes the innermost group and puts the cursor back on it.
    pub fn exit_group(&mut self) {
        let Some(group) = self.parents.pop() else {
            return;
        };
        debug!("Leaving group `{}`", self.tree.get(group).name());

        self.input.clear();
        let rows = self.current_rows();
        self.set_options(rows);
        if let Some(index) = self.options.iter().position(|row| *row == Row::Entry {
            id: group,
            indent_level: 0,
        }) {
            self.list_index = index;
        }
        self.ensure_visible();
    }

    /// Acts on the row under the cursor.
    pub fn submit(&mut self) -> Submission {
        let Some(row) = self.current_row().copied() else {
            return Submission::Ignored;
        };
        if self.is_disabled(&row) {
            return Submission::Ignored;
        }

        let id = match row {
            Row::Back(_) => {
                self.exit_group();
                return Submission::Back;
            }
            Row::Entry { id, .. } => id,
        };

        match self.tree.get(id) {
            ListEntry::Group(_) => {
                self.enter_group(id);
                Submission::Entered(id)
            }
            ListEntry::Option(option) => {
                let value = option.value.clone();
                self.selected = Some(value.clone());
                Submission::Selected(value)
            }
        }
    }

    /// Path of entered groups, collapsed in the middle when longer than the
    /// configured maximum.
    #[must_use]
    pub fn breadcrumb(&self) -> String {
        let max_items = self.settings.max_breadcrumb_items;
        if self.parents.is_empty() || max_items == 0 {
            return String::new();
        }

        let names: Vec<&str> = self
            .parents
            .iter()
            .map(|&id| self.tree.get(id).name())
            .collect();

        let separator = format!(" {} ", self.settings.breadcrumb_separator);
        if names.len() <= max_items {
            return names.join(&separator);
        }

        let tail = &names[names.len() - (max_items - 1)..];
        [names[0], ".."]
            .into_iter()
            .chain(tail.iter().copied())
            .join(&separator)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{list_with, names, strings};
    use super::super::ListOptions;
    use super::*;
    use rust_prompts_core::options::RawOption;

    fn example_options() -> Vec<RawOption> {
        vec![
            RawOption::from("foo"),
            RawOption::from("bar"),
            RawOption::group("baz", strings(&["beep", "boop"])),
        ]
    }

    fn nested(depth: usize) -> Vec<RawOption> {
        let mut options = strings(&["leaf"]);
        for level in (1..=depth).rev() {
            options = vec![RawOption::group(format!("g{level}"), options)];
        }
        options
    }

    fn breadcrumb_at(depth: usize, max_items: usize) -> String {
        let mut list = GenericList::new(ListOptions {
            options: nested(depth),
            max_breadcrumb_items: Some(max_items),
            breadcrumb_separator: Some(">".to_string()),
            ..ListOptions::default()
        })
        .unwrap();
        for _ in 0..depth {
            list.submit();
        }
        list.breadcrumb()
    }

    #[test]
    fn test_enter_select_submit() {
        let mut list = list_with(example_options(), 10);
        assert_eq!(names(&list), ["foo", "bar", "baz"]);

        list.select_next();
        list.select_next();
        let submission = list.submit();
        assert!(matches!(submission, Submission::Entered(_)));
        assert_eq!(names(&list), ["<back:baz>", "beep", "boop"]);
        assert_eq!(list.list_index(), 1);

        list.select_next();
        assert_eq!(list.list_index(), 2);
        assert_eq!(list.submit(), Submission::Selected("boop".to_string()));
        assert_eq!(list.selected_value(), Some("boop"));
    }

    #[test]
    fn test_enter_then_exit_restores_cursor() {
        let mut list = list_with(example_options(), 2);
        list.select_next();
        list.select_next();
        assert_eq!((list.list_index(), list.list_offset()), (2, 1));

        list.submit();
        assert_eq!(list.list_offset(), 0);
        list.exit_group();
        assert_eq!(list.list_index(), 2);
        assert_eq!(list.list_offset(), 1);
        assert!(!list.has_parent());
    }

    #[test]
    fn test_back_row_exits_group() {
        let mut list = list_with(example_options(), 10);
        list.select_previous();
        list.submit();
        list.select_previous();
        assert_eq!(list.current_row().map(Row::is_back), Some(true));
        assert_eq!(list.submit(), Submission::Back);
        assert_eq!(names(&list), ["foo", "bar", "baz"]);
        assert_eq!(list.list_index(), 2);
    }

    #[test]
    fn test_exit_without_parent_is_noop() {
        let mut list = list_with(example_options(), 10);
        list.select_next();
        list.exit_group();
        assert_eq!(list.list_index(), 1);
        assert_eq!(names(&list), ["foo", "bar", "baz"]);
    }

    #[test]
    fn test_disabled_rows_are_not_submitted() {
        let mut list = list_with(
            vec![
                RawOption::group("locked", strings(&["a"])).disabled(),
                RawOption::from("b"),
            ],
            10,
        );
        list.list_index = 0;
        assert_eq!(list.submit(), Submission::Ignored);
        assert!(!list.has_parent());
    }

    #[test]
    fn test_empty_group_is_selectable_leaf() {
        let mut list = list_with(vec![RawOption::group("Empty", Vec::new())], 10);
        assert_eq!(list.submit(), Submission::Selected("Empty".to_string()));
    }

    #[test]
    fn test_breadcrumb() {
        assert_eq!(breadcrumb_at(1, 5), "g1");
        assert_eq!(breadcrumb_at(3, 5), "g1 > g2 > g3");
        assert_eq!(breadcrumb_at(6, 3), "g1 > .. > g5 > g6");
        assert_eq!(breadcrumb_at(3, 0), "");
    }

    #[test]
    fn test_breadcrumb_empty_at_root() {
        let list = list_with(example_options(), 10);
        assert_eq!(list.breadcrumb(), "");
    }
}
