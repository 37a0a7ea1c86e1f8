//! Text rendering of the list state.

use itertools::Itertools;

use rust_prompts_core::options::ListEntry;

use super::{GenericList, Row};
use crate::prompt::figures::{self, figures_for_keys};
use crate::prompt::style::{bold, bright_blue, dim, strip_ansi, visible_width, yellow};
use crate::prompt::Frame;

const NO_MATCHES: &str = "  No matches...";

impl GenericList {
    /// Message line, visible rows and the optional info line.
    #[must_use]
    pub fn render(&self) -> Frame {
        let header = self.header();
        let cursor_column = self
            .settings
            .search
            .then(|| visible_width(&header) + self.input.cursor_width());

        let mut text = format!("{header}{}\n{}", self.input.value(), self.list());
        if self.settings.info {
            text.push_str(&self.info());
        }

        Frame {
            text,
            cursor_column,
        }
    }

    fn header(&self) -> String {
        let mut header = format!(
            "{}{}{}",
            self.settings.indent,
            self.settings.prefix,
            bold(&self.settings.message)
        );
        if self.settings.search {
            header.push_str(&format!(" {} ", self.settings.search_label));
        }
        header
    }

    /// Visible rows, or a placeholder when nothing is left.
    #[must_use]
    pub fn list(&self) -> String {
        let height = self.list_height();
        let end = (self.list_offset + height).min(self.options.len());
        let lines: Vec<String> = (self.list_offset..end)
            .map(|index| self.list_item(&self.options[index], index == self.list_index))
            .collect();

        if lines.is_empty() {
            return format!("{}{}", self.settings.indent, dim(NO_MATCHES));
        }
        lines.join("\n")
    }

    fn list_item(&self, row: &Row, is_selected: bool) -> String {
        format!(
            "{}{}{}{}",
            self.item_indent(row),
            self.item_pointer(row, is_selected),
            self.item_icon(row),
            self.item_label(row, is_selected)
        )
    }

    fn item_indent(&self, row: &Row) -> String {
        let indent_level = if self.is_searching() {
            row.indent_level()
        } else if self.has_parent() && !row.is_back() {
            1
        } else {
            0
        };
        format!("{}{}", self.settings.indent, " ".repeat(indent_level))
    }

    fn item_pointer(&self, row: &Row, is_selected: bool) -> String {
        if !is_selected {
            return "  ".to_string();
        }
        let pointer = match (row, self.entry(row)) {
            (Row::Back(_), _) => &self.settings.back_pointer,
            (_, ListEntry::Group(_)) => &self.settings.group_pointer,
            (_, ListEntry::Option(_)) => &self.settings.list_pointer,
        };
        format!("{pointer} ")
    }

    fn item_icon(&self, row: &Row) -> String {
        let icon = match (row, self.entry(row)) {
            (Row::Back(_), _) => self.settings.group_open_icon.as_deref(),
            (_, ListEntry::Group(_)) => self.settings.group_icon.as_deref(),
            (_, ListEntry::Option(_)) => None,
        };
        icon.map(|icon| format!("{icon} ")).unwrap_or_default()
    }

    fn item_label(&self, row: &Row, is_selected: bool) -> String {
        let entry = self.entry(row);
        let active = is_selected && !self.is_disabled(row);

        if row.is_back() {
            let breadcrumb = self.breadcrumb();
            let label = if active {
                yellow(&breadcrumb)
            } else {
                dim(&breadcrumb)
            };
            return bold(&label);
        }

        let label = if active {
            self.highlight(entry.name(), |text| text.to_string())
        } else {
            self.highlight(entry.name(), dim)
        };
        if entry.is_group() {
            bold(&label)
        } else {
            label
        }
    }

    /// Paints the part of `label` matching the search input, styling the
    /// rest with `base`.
    fn highlight(&self, label: &str, base: impl Fn(&str) -> String) -> String {
        let query: Vec<char> = self.input.value().to_lowercase().chars().collect();
        let label: Vec<char> = strip_ansi(label).chars().collect();

        let lowered: Vec<char> = label
            .iter()
            .map(|c| c.to_lowercase().next().unwrap_or(*c))
            .collect();
        let found = (!query.is_empty())
            .then(|| lowered.windows(query.len()).position(|window| window == query))
            .flatten();

        let Some(start) = found else {
            return base(&label.iter().collect::<String>());
        };
        let end = start + query.len();
        let part = |range: std::ops::Range<usize>| label[range].iter().collect::<String>();

        format!(
            "{}{}{}",
            base(&part(0..start)),
            bright_blue(&part(start..end)),
            base(&part(end..label.len()))
        )
    }

    /// Position and key legend line.
    #[must_use]
    pub fn info(&self) -> String {
        let keys = &self.settings.keys;
        let actions = [
            ("Next", &keys.next),
            ("Previous", &keys.previous),
            ("Next Page", &keys.next_page),
            ("Previous Page", &keys.previous_page),
            ("Submit", &keys.submit),
        ];
        let legend = actions
            .iter()
            .map(|(action, names)| {
                format!("{action}: {}", bold(&figures_for_keys(names).join(", ")))
            })
            .join(", ");

        let selected = if self.options.is_empty() {
            0
        } else {
            self.list_index + 1
        };
        format!(
            "\n{}{}{}{legend}",
            self.settings.indent,
            bright_blue(figures::INFO),
            bold(&format!(" {selected}/{} ", self.options.len()))
        )
    }
}
