//! Character cursors over source text.

/// Read access to the characters ahead of a lexing position.
///
/// The operator scanner only needs bounded lookahead and the ability to
/// commit to a number of characters, so anything that can provide those
/// can be scanned.
pub trait CharCursor {
    /// Returns the `n`-th character after the current position without
    /// consuming anything. `peek_nth(0)` is the next character.
    fn peek_nth(&self, n: usize) -> Option<char>;

    /// Consumes `n` characters, stopping early at end of input.
    fn advance_by(&mut self, n: usize);
}

/// A cursor over a `&str` that tracks byte offset, line and column.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Current 1-based line.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current 1-based column, in characters.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The unconsumed remainder of the source.
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Returns true once every character has been consumed.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Returns the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes and returns the next character.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consumes characters while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.bump();
        }
    }
}

impl CharCursor for Cursor<'_> {
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            if self.bump().is_none() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_tracks_line_and_column() {
        let mut cursor = Cursor::new("ab\nc");
        assert_eq!((cursor.line(), cursor.column()), (1, 1));
        cursor.bump();
        cursor.bump();
        assert_eq!((cursor.line(), cursor.column()), (1, 3));
        assert_eq!(cursor.bump(), Some('\n'));
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        assert_eq!(cursor.bump(), Some('c'));
        assert!(cursor.is_eof());
        assert_eq!(cursor.bump(), None);
    }

    #[test]
    fn test_peek_nth_does_not_consume() {
        let cursor = Cursor::new("**=");
        assert_eq!(cursor.peek_nth(0), Some('*'));
        assert_eq!(cursor.peek_nth(2), Some('='));
        assert_eq!(cursor.peek_nth(3), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_multibyte_position() {
        let mut cursor = Cursor::new("é=");
        cursor.advance_by(1);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.column(), 2);
        assert_eq!(cursor.rest(), "=");
    }

    #[test]
    fn test_advance_by_stops_at_eof() {
        let mut cursor = Cursor::new("+");
        cursor.advance_by(5);
        assert!(cursor.is_eof());
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_eat_while() {
        let mut cursor = Cursor::new("123abc");
        cursor.eat_while(|c| c.is_ascii_digit());
        assert_eq!(cursor.rest(), "abc");
    }
}
