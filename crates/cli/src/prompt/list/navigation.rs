//! Cursor movement over the visible list.
//!
//! Single steps wrap around at both ends, page jumps clamp to the first or
//! last full page. Disabled rows are never left under the cursor.

use super::GenericList;

impl GenericList {
    fn selectable_count(&self) -> usize {
        self.options
            .iter()
            .filter(|row| !self.is_disabled(row))
            .count()
    }

    fn is_current_disabled(&self) -> bool {
        self.current_row().map_or(true, |row| self.is_disabled(row))
    }

    fn step_next(&mut self) {
        if self.list_index + 1 < self.options.len() {
            self.list_index += 1;
            if self.list_index >= self.list_offset + self.list_height() {
                self.list_offset += 1;
            }
        } else {
            self.list_index = 0;
            self.list_offset = 0;
        }
    }

    fn step_previous(&mut self) {
        if self.list_index > 0 {
            self.list_index -= 1;
            if self.list_index < self.list_offset {
                self.list_offset -= 1;
            }
        } else {
            self.list_index = self.options.len().saturating_sub(1);
            self.list_offset = self.options.len() - self.list_height();
        }
    }

    /// Moves to the next selectable row, wrapping to the top.
    pub fn select_next(&mut self) {
        if self.selectable_count() < 2 {
            return;
        }
        for _ in 0..self.options.len() {
            self.step_next();
            if !self.is_current_disabled() {
                return;
            }
        }
    }

    /// Moves to the previous selectable row, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        if self.selectable_count() < 2 {
            return;
        }
        for _ in 0..self.options.len() {
            self.step_previous();
            if !self.is_current_disabled() {
                return;
            }
        }
    }

    pub fn select_next_page(&mut self) {
        let height = self.list_height();
        let len = self.options.len();

        if self.list_offset + height * 2 < len {
            self.list_index += height;
            self.list_offset += height;
        } else if self.list_offset + height < len {
            let offset = len - height;
            self.list_index += offset - self.list_offset;
            self.list_offset = offset;
        }
        self.settle(true);
    }

    pub fn select_previous_page(&mut self) {
        let height = self.list_height();

        if self.list_offset >= height {
            self.list_index -= height;
            self.list_offset -= height;
        } else if self.list_offset > 0 {
            self.list_index -= self.list_offset;
            self.list_offset = 0;
        }
        self.settle(false);
    }

    /// Moves the cursor off a disabled row without wrapping, preferring
    /// `forward`, and scrolls it into view.
    pub(crate) fn settle(&mut self, forward: bool) {
        if self.is_current_disabled() {
            let selectable = |index: &usize| !self.is_disabled(&self.options[*index]);
            let after = (self.list_index..self.options.len()).find(selectable);
            let before = (0..self.list_index).rev().find(selectable);
            let target = if forward {
                after.or(before)
            } else {
                before.or(after)
            };
            if let Some(index) = target {
                self.list_index = index;
            }
        }
        self.ensure_visible();
    }

    pub(crate) fn ensure_visible(&mut self) {
        let height = self.list_height();
        if self.list_index < self.list_offset {
            self.list_offset = self.list_index;
        } else if height > 0 && self.list_index >= self.list_offset + height {
            self.list_offset = self.list_index + 1 - height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{list_with, strings};
    use rust_prompts_core::options::RawOption;

    #[test]
    fn test_select_next_wraps_to_start() {
        let mut list = list_with(strings(&["a", "b", "c", "d", "e"]), 2);
        let start = list.list_index();
        for _ in 0..5 {
            list.select_next();
        }
        assert_eq!(list.list_index(), start);
        assert_eq!(list.list_offset(), 0);
    }

    #[test]
    fn test_select_next_scrolls_one_row() {
        let mut list = list_with(strings(&["a", "b", "c", "d", "e"]), 2);
        list.select_next();
        assert_eq!((list.list_index(), list.list_offset()), (1, 0));
        list.select_next();
        assert_eq!((list.list_index(), list.list_offset()), (2, 1));
    }

    #[test]
    fn test_select_previous_wraps_to_last_page() {
        let mut list = list_with(strings(&["a", "b", "c", "d", "e"]), 2);
        list.select_previous();
        assert_eq!((list.list_index(), list.list_offset()), (4, 3));
        list.select_previous();
        list.select_previous();
        assert_eq!((list.list_index(), list.list_offset()), (2, 2));
    }

    #[test]
    fn test_select_skips_disabled() {
        let mut list = list_with(
            vec![
                RawOption::from("a"),
                RawOption::from("b").disabled(),
                RawOption::separator(None),
                RawOption::from("c"),
            ],
            10,
        );
        list.select_next();
        assert_eq!(list.list_index(), 3);
        list.select_next();
        assert_eq!(list.list_index(), 0);
        list.select_previous();
        assert_eq!(list.list_index(), 3);
    }

    #[test]
    fn test_select_is_noop_with_single_selectable() {
        let mut list = list_with(
            vec![RawOption::from("a").disabled(), RawOption::from("b")],
            10,
        );
        assert_eq!(list.list_index(), 1);
        list.select_next();
        assert_eq!(list.list_index(), 1);
        list.select_previous();
        assert_eq!(list.list_index(), 1);
    }

    #[test]
    fn test_all_disabled_terminates() {
        let mut list = list_with(
            vec![
                RawOption::from("a").disabled(),
                RawOption::from("b").disabled(),
            ],
            10,
        );
        list.select_next();
        list.select_previous();
        list.select_next_page();
        assert_eq!(list.list_index(), 0);
    }

    #[test]
    fn test_next_page_clamps_to_last_full_page() {
        let mut list = list_with(strings(&["a", "b", "c", "d", "e"]), 2);
        list.select_next_page();
        assert_eq!((list.list_index(), list.list_offset()), (2, 2));
        list.select_next_page();
        assert_eq!((list.list_index(), list.list_offset()), (3, 3));
        list.select_next_page();
        assert_eq!((list.list_index(), list.list_offset()), (3, 3));
    }

    #[test]
    fn test_previous_page_clamps_to_first_page() {
        let mut list = list_with(strings(&["a", "b", "c", "d", "e"]), 2);
        list.select_next_page();
        list.select_next_page();
        list.select_previous_page();
        assert_eq!((list.list_index(), list.list_offset()), (1, 1));
        list.select_previous_page();
        assert_eq!((list.list_index(), list.list_offset()), (0, 0));
        list.select_previous_page();
        assert_eq!((list.list_index(), list.list_offset()), (0, 0));
    }

    #[test]
    fn test_page_jump_settles_off_disabled() {
        let mut list = list_with(
            vec![
                RawOption::from("a"),
                RawOption::from("b"),
                RawOption::separator(None),
                RawOption::from("c"),
            ],
            2,
        );
        list.select_next_page();
        assert_eq!(list.list_index(), 3);
        assert_eq!(list.list_offset(), 2);
    }
}
