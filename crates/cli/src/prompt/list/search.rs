//! Live filtering of the current scope.
//!
//! Matching and flattening are separate passes: [`filter_match`] scores the
//! tree into [`MatchedEntry`] values and [`flatten_matches`] projects them into
//! indented rows.

use log::debug;

use rust_prompts_core::options::{ListEntry, NodeId, OptionTree};

use super::{GenericList, Row};
use crate::prompt::fuzzy::{Distance, Matcher};

/// A matching entry with its matching descendants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedEntry {
    pub id: NodeId,
    pub distance: Distance,
    pub children: Vec<MatchedEntry>,
}

fn leaf_distance(matcher: &Matcher, entry: &ListEntry, query: &str) -> Option<Distance> {
    let by_name = matcher.distance(entry.name(), query);
    let by_value = match entry {
        ListEntry::Option(option) if option.value != option.name => {
            matcher.distance(&option.value, query)
        }
        _ => None,
    };
    by_name.into_iter().chain(by_value).min()
}

/// Scores `scope` against `query`, closest matches first on every level.
///
/// Groups are kept when any descendant matches and take the best score of
/// their children. A group whose own name matches is kept even without
/// matching children.
#[must_use]
pub fn filter_match(
    tree: &OptionTree,
    matcher: &Matcher,
    scope: &[NodeId],
    query: &str,
) -> Vec<MatchedEntry> {
    let mut matched = Vec::new();

    for &id in scope {
        let entry = tree.get(id);

        if let ListEntry::Group(group) = entry {
            let children = filter_match(tree, matcher, &group.options, query);
            if let Some(distance) = children.iter().map(|child| child.distance).min() {
                matched.push(MatchedEntry {
                    id,
                    distance,
                    children,
                });
                continue;
            }
        }

        if let Some(distance) = leaf_distance(matcher, entry, query) {
            matched.push(MatchedEntry {
                id,
                distance,
                children: Vec::new(),
            });
        }
    }

    // stable: ties keep input order
    matched.sort_by_key(|entry| entry.distance);
    matched
}

/// Pre-order projection of matches, children one level below their group.
#[must_use]
pub fn flatten_matches(matches: &[MatchedEntry], indent_level: usize) -> Vec<Row> {
    let mut rows = Vec::new();
    for matched in matches {
        rows.push(Row::Entry {
            id: matched.id,
            indent_level,
        });
        rows.extend(flatten_matches(&matched.children, indent_level + 1));
    }
    rows
}

impl GenericList {
    /// Rebuilds the visible list from the search input.
    pub fn match_options(&mut self) {
        let query = self.input.value();

        let rows = if query.is_empty() {
            self.current_rows()
        } else {
            let scope = self.tree.children(self.parent());
            let matches = filter_match(&self.tree, &self.matcher, scope, &query);
            debug!("Search `{query}` matched {} top level entries", matches.len());
            flatten_matches(&matches, 0)
        };

        self.set_options(rows);
        self.settle(true);
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{list_with, names, strings};
    use super::*;
    use crate::prompt::keys::KeyPress;
    use crate::prompt::list::ListOptions;
    use rust_prompts_core::options::RawOption;

    fn searchable(options: Vec<RawOption>) -> GenericList {
        GenericList::new(ListOptions {
            options,
            search: true,
            ..ListOptions::default()
        })
        .unwrap()
    }

    fn type_text(list: &mut GenericList, text: &str) {
        for c in text.chars() {
            list.handle_event(&KeyPress::char(c)).unwrap();
        }
    }

    #[test]
    fn test_search_ranks_by_distance() {
        let mut list = searchable(strings(&["foo", "bar", "baz"]));
        type_text(&mut list, "ba");
        assert_eq!(names(&list), ["bar", "baz"]);
    }

    #[test]
    fn test_closest_match_first() {
        let mut list = searchable(strings(&["foobar", "bar"]));
        type_text(&mut list, "bar");
        assert_eq!(names(&list), ["bar", "foobar"]);
    }

    #[test]
    fn test_empty_query_restores_scope() {
        let mut list = searchable(vec![
            RawOption::from("foo"),
            RawOption::group("baz", strings(&["beep", "boop"])),
        ]);
        let initial = list.options().to_vec();

        type_text(&mut list, "bo");
        assert_ne!(list.options(), initial.as_slice());

        list.handle_event(&KeyPress::named("backspace")).unwrap();
        list.handle_event(&KeyPress::named("backspace")).unwrap();
        assert!(!list.is_searching());
        assert_eq!(list.options(), initial.as_slice());
    }

    #[test]
    fn test_groups_kept_with_matching_children() {
        let mut list = searchable(vec![
            RawOption::from("foo"),
            RawOption::group("baz", strings(&["beep", "boop"])),
        ]);
        type_text(&mut list, "boop");
        assert_eq!(names(&list), ["baz", "boop"]);
        assert_eq!(list.options()[1].indent_level(), 1);
    }

    #[test]
    fn test_group_distance_is_best_child() {
        let tree = OptionTree::from_raw(&[
            RawOption::from("xbeepx"),
            RawOption::group("g", strings(&["zzz", "beep"])),
        ])
        .unwrap();
        let matches = filter_match(&tree, &Matcher::default(), tree.roots(), "beep");

        assert_eq!(matches.len(), 2);
        assert_eq!(tree.get(matches[0].id).name(), "g");
        assert_eq!(matches[0].distance, Distance::contained(0));
        assert_eq!(matches[0].children.len(), 1);
        assert_eq!(matches[1].distance, Distance::contained(2));
    }

    #[test]
    fn test_contained_match_ranks_before_scattered() {
        let mut list = searchable(strings(&["xxxxxxab", "axb"]));
        type_text(&mut list, "ab");
        assert_eq!(names(&list), ["xxxxxxab", "axb"]);
    }

    #[test]
    fn test_value_matches_when_name_differs() {
        let mut list = searchable(vec![
            RawOption::option("Production", "prod-eu"),
            RawOption::option("Staging", "stage"),
        ]);
        type_text(&mut list, "eu");
        assert_eq!(names(&list), ["Production"]);
    }

    #[test]
    fn test_no_matches_is_empty() {
        let mut list = searchable(strings(&["foo", "bar"]));
        type_text(&mut list, "qqq");
        assert!(list.options().is_empty());
        assert_eq!(list.list_index(), 0);
    }

    #[test]
    fn test_search_inside_group_keeps_back_row() {
        let mut list = searchable(vec![RawOption::group("baz", strings(&["beep", "boop"]))]);
        list.handle_event(&KeyPress::named("return")).unwrap();
        type_text(&mut list, "boop");
        assert_eq!(names(&list), ["<back:baz>", "boop"]);
    }

    #[test]
    fn test_without_search_typing_is_ignored() {
        let mut list = list_with(strings(&["foo", "bar"]), 10);
        type_text(&mut list, "ba");
        assert_eq!(names(&list), ["foo", "bar"]);
    }
}
