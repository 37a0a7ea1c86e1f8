use unicode_width::UnicodeWidthChar;

use super::keys::KeyPress;

/// Single-line text buffer with a character cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    chars: Vec<char>,
    index: usize,
}

impl InputBuffer {
    #[must_use]
    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Cursor position in characters.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.index
    }

    /// Display width of the text left of the cursor.
    #[must_use]
    pub fn cursor_width(&self) -> usize {
        self.chars[..self.index]
            .iter()
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    pub fn set_value(&mut self, value: &str) {
        self.chars = value.chars().collect();
        self.index = self.chars.len();
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.index = 0;
    }

    pub fn add_char(&mut self, c: char) {
        self.chars.insert(self.index, c);
        self.index += 1;
    }

    /// Removes the character left of the cursor.
    pub fn delete_char(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        self.chars.remove(self.index);
        true
    }

    /// Removes the character under the cursor.
    pub fn delete_char_right(&mut self) -> bool {
        if self.index >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.index);
        true
    }

    pub fn move_left(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.index = (self.index + 1).min(self.chars.len());
    }

    /// Applies the default editing keys. Returns `false` for keys that are
    /// not editing keys.
    pub fn handle_key(&mut self, key: &KeyPress) -> bool {
        match key.name.as_str() {
            "left" => self.move_left(),
            "right" => self.move_right(),
            "backspace" => {
                self.delete_char();
            }
            "delete" => {
                self.delete_char_right();
            }
            _ => match key.printable() {
                Some(c) => self.add_char(c),
                None => return false,
            },
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_cursor() {
        let mut buffer = InputBuffer::default();
        buffer.add_char('a');
        buffer.add_char('c');
        buffer.move_left();
        buffer.add_char('b');
        assert_eq!(buffer.value(), "abc");
        assert_eq!(buffer.cursor(), 2);
    }

    #[test]
    fn test_delete_left_and_right() {
        let mut buffer = InputBuffer::default();
        buffer.set_value("héllo");
        assert!(buffer.delete_char());
        assert_eq!(buffer.value(), "héll");

        buffer.move_left();
        buffer.move_left();
        buffer.move_left();
        assert!(buffer.delete_char_right());
        assert_eq!(buffer.value(), "hll");
        assert_eq!(buffer.cursor(), 1);
    }

    #[test]
    fn test_handle_key() {
        let mut buffer = InputBuffer::default();
        assert!(buffer.handle_key(&KeyPress::char('a')));
        assert!(buffer.handle_key(&KeyPress::char('b')));
        assert!(buffer.handle_key(&KeyPress::named("left")));
        assert!(buffer.handle_key(&KeyPress::named("backspace")));
        assert_eq!(buffer.value(), "b");
        assert!(!buffer.handle_key(&KeyPress::named("up")));
        assert!(!buffer.handle_key(&KeyPress::ctrl('a')));
    }

    #[test]
    fn test_cursor_width_counts_columns() {
        let mut buffer = InputBuffer::default();
        buffer.set_value("a日本");
        assert_eq!(buffer.cursor(), 3);
        assert_eq!(buffer.cursor_width(), 5);
        buffer.move_left();
        assert_eq!(buffer.cursor_width(), 3);
    }

    #[test]
    fn test_bounds() {
        let mut buffer = InputBuffer::default();
        assert!(!buffer.delete_char());
        assert!(!buffer.delete_char_right());
        buffer.move_left();
        buffer.move_right();
        assert_eq!(buffer.cursor(), 0);
        assert!(buffer.is_empty());
    }
}
