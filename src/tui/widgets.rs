/// Multi-line text input with a cursor.
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug, Default, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Backspace
    pub fn delete_char(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.value.remove(idx);
            self.cursor = idx;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Move to the start of the current line
    pub fn move_home(&mut self) {
        self.cursor = self.value[..self.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    /// Move to the end of the current line
    pub fn move_end(&mut self) {
        self.cursor = self.value[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.value.len());
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Lines hard-wrapped at `width` characters, with the cursor's
    /// (row, column) inside them
    pub fn wrapped(&self, width: usize) -> (Vec<String>, (usize, usize)) {
        let width = width.max(1);
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut col = 0;
        let mut cursor = (0, 0);

        for (idx, c) in self.value.char_indices() {
            if c != '\n' && col == width {
                lines.push(std::mem::take(&mut current));
                col = 0;
            }
            if idx == self.cursor {
                cursor = (lines.len(), col);
            }
            if c == '\n' {
                lines.push(std::mem::take(&mut current));
                col = 0;
            } else {
                current.push(c);
                col += 1;
            }
        }

        if self.cursor == self.value.len() {
            // A full last line puts the cursor at the start of the next one
            if col == width {
                lines.push(std::mem::take(&mut current));
                col = 0;
            }
            cursor = (lines.len(), col);
        }
        lines.push(current);

        (lines, cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new();
        for c in text.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = typed("abc");
        assert_eq!(input.value(), "abc");

        input.delete_char();
        assert_eq!(input.value(), "ab");
        assert_eq!(input.wrapped(80).1, (0, 2));
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::new();
        input.delete_char();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = typed("héllo");
        input.move_left();
        input.move_left();
        input.move_left();
        input.delete_char();
        assert_eq!(input.value(), "hllo");
        input.insert_char('é');
        assert_eq!(input.value(), "héllo");
        assert_eq!(input.wrapped(80).1, (0, 2));
    }

    #[test]
    fn test_newlines_and_line_navigation() {
        let mut input = typed("first");
        input.insert_newline();
        for c in "second".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.value(), "first\nsecond");
        assert_eq!(input.wrapped(80).1, (1, 6));

        input.move_home();
        assert_eq!(input.wrapped(80).1, (1, 0));
        input.move_left();
        assert_eq!(input.wrapped(80).1, (0, 5));
        input.move_home();
        input.move_end();
        assert_eq!(input.wrapped(80).1, (0, 5));
    }

    #[test]
    fn test_wrapping_long_line() {
        let input = typed("abcdefgh");
        let (lines, cursor) = input.wrapped(3);
        assert_eq!(lines, vec!["abc", "def", "gh"]);
        assert_eq!(cursor, (2, 2));
    }

    #[test]
    fn test_wrapping_cursor_on_full_line_moves_down() {
        let mut input = typed("abcdef");
        let (lines, cursor) = input.wrapped(3);
        assert_eq!(lines, vec!["abc", "def", ""]);
        assert_eq!(cursor, (2, 0));

        input.move_home();
        input.move_right();
        input.move_right();
        input.move_right();
        let (_, cursor) = input.wrapped(3);
        assert_eq!(cursor, (1, 0));
    }

    #[test]
    fn test_wrapping_keeps_explicit_newlines() {
        let mut input = typed("ab");
        input.insert_newline();
        input.insert_char('c');
        let (lines, cursor) = input.wrapped(10);
        assert_eq!(lines, vec!["ab", "c"]);
        assert_eq!(cursor, (1, 1));

        let (lines, cursor) = TextInput::new().wrapped(10);
        assert_eq!(lines, vec![""]);
        assert_eq!(cursor, (0, 0));
    }

    #[test]
    fn test_delete_forward_and_clear() {
        let mut input = typed("xy");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.value(), "y");

        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.wrapped(80).1, (0, 0));
    }
}
