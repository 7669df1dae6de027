//! Scan position tracking.

/// Where the scanner currently is in the source.
///
/// `offset` is a byte offset; `line` and `column` are 1-indexed, with columns
/// counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Position {
    /// Step over a lexeme that stays on the current line, as far as line
    /// tracking is concerned.
    pub fn advance_columns(&mut self, lexeme: &str) {
        self.offset += lexeme.len();
        self.column += lexeme.chars().count();
    }

    /// Step over `count` line breaks.
    pub fn advance_lines(&mut self, count: usize) {
        self.offset += count;
        self.line += count;
        self.column = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one_one() {
        let pos = Position::default();
        assert_eq!((pos.offset, pos.line, pos.column), (0, 1, 1));
    }

    #[test]
    fn test_advance_columns() {
        let mut pos = Position::default();
        pos.advance_columns("var");
        assert_eq!((pos.offset, pos.line, pos.column), (3, 1, 4));
    }

    #[test]
    fn test_advance_columns_counts_chars() {
        let mut pos = Position::default();
        pos.advance_columns("\"héllo\"");
        assert_eq!(pos.offset, 8);
        assert_eq!(pos.column, 8);
    }

    #[test]
    fn test_advance_lines_resets_column() {
        let mut pos = Position::default();
        pos.advance_columns("x = 1");
        pos.advance_lines(3);
        assert_eq!((pos.offset, pos.line, pos.column), (8, 4, 1));
    }
}
