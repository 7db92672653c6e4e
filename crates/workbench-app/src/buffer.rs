//! Content buffer: the single source of truth for the editor and preview

/// Cursor movement within the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
    /// Start of the current line
    Home,
    /// End of the current line
    End,
}

/// Editable text with a cursor.
///
/// The cursor is a byte offset that always sits on a char boundary. The
/// text the buffer was created with is kept so it can be reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBuffer {
    text: String,
    cursor: usize,
    initial_text: String,
}

impl ContentBuffer {
    /// Create a buffer with the cursor at the end of `text`
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            cursor: text.len(),
            initial_text: text.clone(),
            text,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn initial_text(&self) -> &str {
        &self.initial_text
    }

    /// Byte offset of the cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the text differs from what the buffer was seeded with
    pub fn is_modified(&self) -> bool {
        self.text != self.initial_text
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// Zero-based (line, column) of the cursor, column counted in chars
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let col = self.text[line_start..self.cursor].chars().count();
        (line, col)
    }

    // ─────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    /// Restore the seed text
    pub fn reset(&mut self) {
        self.text = self.initial_text.clone();
        self.cursor = self.text.len();
    }

    // ─────────────────────────────────────────────────────────
    // Cursor
    // ─────────────────────────────────────────────────────────

    pub fn move_cursor(&mut self, movement: CursorMove) {
        match movement {
            CursorMove::Left => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor = prev;
                }
            }
            CursorMove::Right => {
                if let Some(next) = self.next_boundary() {
                    self.cursor = next;
                }
            }
            CursorMove::Home => self.cursor = self.line_start(self.cursor),
            CursorMove::End => self.cursor = self.line_end(self.cursor),
            CursorMove::Up => {
                let start = self.line_start(self.cursor);
                if start > 0 {
                    let col = self.text[start..self.cursor].chars().count();
                    let prev_start = self.line_start(start - 1);
                    self.cursor = self.offset_at_column(prev_start, col);
                }
            }
            CursorMove::Down => {
                let end = self.line_end(self.cursor);
                if end < self.text.len() {
                    let start = self.line_start(self.cursor);
                    let col = self.text[start..self.cursor].chars().count();
                    self.cursor = self.offset_at_column(end + 1, col);
                }
            }
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    fn line_start(&self, offset: usize) -> usize {
        self.text[..offset].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self, offset: usize) -> usize {
        self.text[offset..]
            .find('\n')
            .map_or(self.text.len(), |i| offset + i)
    }

    /// Offset of column `col` on the line starting at `line_start`, clamped
    /// to the line's end
    fn offset_at_column(&self, line_start: usize, col: usize) -> usize {
        let end = self.line_end(line_start);
        self.text[line_start..end]
            .char_indices()
            .nth(col)
            .map_or(end, |(i, _)| line_start + i)
    }
}

impl Default for ContentBuffer {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_cursor_at_end() {
        let buffer = ContentBuffer::new("abc");
        assert_eq!(buffer.cursor(), 3);
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut buffer = ContentBuffer::new("ab");
        buffer.insert_char('c');
        assert_eq!(buffer.text(), "abc");
        buffer.backspace();
        buffer.backspace();
        assert_eq!(buffer.text(), "a");
        assert!(buffer.is_modified());
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut buffer = ContentBuffer::new("");
        buffer.backspace();
        buffer.delete();
        assert_eq!(buffer.text(), "");
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_multibyte_chars() {
        let mut buffer = ContentBuffer::new("é");
        buffer.insert_char('ü');
        assert_eq!(buffer.text(), "éü");
        buffer.move_cursor(CursorMove::Left);
        buffer.move_cursor(CursorMove::Left);
        assert_eq!(buffer.cursor(), 0);
        buffer.delete();
        assert_eq!(buffer.text(), "ü");
    }

    #[test]
    fn test_cursor_position_tracks_lines() {
        let mut buffer = ContentBuffer::new("one\ntwo");
        assert_eq!(buffer.cursor_position(), (1, 3));
        buffer.insert_newline();
        assert_eq!(buffer.cursor_position(), (2, 0));
        assert_eq!(buffer.line_count(), 3);
    }

    #[test]
    fn test_vertical_movement_keeps_column() {
        let mut buffer = ContentBuffer::new("abcdef\nxy\nlonger line");
        buffer.move_cursor(CursorMove::Up);
        // "longer line" col 11 clamps to end of "xy"
        assert_eq!(buffer.cursor_position(), (1, 2));
        buffer.move_cursor(CursorMove::Up);
        assert_eq!(buffer.cursor_position(), (0, 2));
        buffer.move_cursor(CursorMove::Up);
        assert_eq!(buffer.cursor_position(), (0, 2));
        buffer.move_cursor(CursorMove::Down);
        buffer.move_cursor(CursorMove::Down);
        assert_eq!(buffer.cursor_position(), (2, 2));
        buffer.move_cursor(CursorMove::Down);
        assert_eq!(buffer.cursor_position(), (2, 2));
    }

    #[test]
    fn test_home_and_end() {
        let mut buffer = ContentBuffer::new("first\nsecond");
        buffer.move_cursor(CursorMove::Home);
        assert_eq!(buffer.cursor_position(), (1, 0));
        buffer.move_cursor(CursorMove::Left);
        assert_eq!(buffer.cursor_position(), (0, 5));
        buffer.move_cursor(CursorMove::Home);
        buffer.move_cursor(CursorMove::End);
        assert_eq!(buffer.cursor_position(), (0, 5));
    }

    #[test]
    fn test_reset_restores_seed() {
        let mut buffer = ContentBuffer::new("<p>seed</p>");
        buffer.backspace();
        buffer.insert_char('!');
        assert_eq!(buffer.text(), "<p>seed</p!");
        assert!(buffer.is_modified());
        buffer.reset();
        assert_eq!(buffer.text(), "<p>seed</p>");
        assert!(!buffer.is_modified());
    }
}
