/// Single-line text field for the folder prompt.
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the contents and put the cursor at the end
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.len();
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_backward(&mut self) {
        if let Some(c) = self.value[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
            self.value.remove(self.cursor);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(c) = self.value[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_edit_in_middle() {
        let mut input = TextInput::default();
        for c in "/prj".chars() {
            input.insert(c);
        }
        input.move_left();
        input.insert('o');
        assert_eq!(input.value(), "/proj");
        assert_eq!(input.cursor(), 4);

        input.move_end();
        input.delete_backward();
        assert_eq!(input.value(), "/pro");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.value(), "pro");
    }

    #[test]
    fn test_multibyte_cursor_stays_on_boundary() {
        let mut input = TextInput::default();
        input.set_value("/dåta");
        input.move_left();
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor(), 2);
        input.move_right();
        assert_eq!(input.cursor(), 4);
        input.delete_backward();
        assert_eq!(input.value(), "/dta");
    }

    #[test]
    fn test_edits_at_bounds_are_noops() {
        let mut input = TextInput::default();
        input.delete_backward();
        input.delete_forward();
        input.move_left();
        input.move_right();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }
}
