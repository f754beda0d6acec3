//! The scanner that produces tokens from source text.

use super::cursor::Cursor;
use super::operator_scanner::OperatorScanner;
use super::operators::{OperatorTable, operator_table};
use super::{Span, Token, TokenKind};
use crate::error::LexError;

/// A scanner that tokenizes Wizard source code.
///
/// Multi-character operators are recognized through the operator table
/// first; everything else falls through to the single-character and
/// literal rules.
pub struct Scanner<'a> {
    pub(super) cursor: Cursor<'a>,
    operators: OperatorScanner<'a>,
    failed: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner using the built-in operator table.
    pub fn new(source: &'a str) -> Self {
        Self::with_table(source, operator_table())
    }

    /// Creates a scanner that recognizes operators from `table`.
    pub fn with_table(source: &'a str, table: &'a OperatorTable) -> Self {
        Self {
            cursor: Cursor::new(source),
            operators: OperatorScanner::new(table),
            failed: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Once the input is exhausted every call returns an `Eof` token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments()?;

        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();

        if let Some(op) = self.operators.scan_at(&mut self.cursor) {
            return Ok(self.finish(op.kind, start, line, column));
        }

        let Some(ch) = self.cursor.bump() else {
            return Ok(Token::new(TokenKind::Eof, Span::new(start, start), line, column));
        };

        let kind = match ch {
            // Single-character tokens
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '?' => TokenKind::Question,
            '.' => TokenKind::Dot,

            // Operators the table had no longer match for
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '=' => TokenKind::Equal,
            '!' => TokenKind::Bang,
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,

            // String literals
            '"' | '\'' => self.scan_string(ch, line, column)?,

            // Numbers
            '0'..='9' => self.scan_number(start, line, column)?,

            // Identifiers and keywords
            _ if is_id_start(ch) => self.scan_identifier(start),

            _ => {
                tracing::debug!(%ch, line, column, "unexpected character");
                return Err(LexError::UnexpectedCharacter { ch, line, column });
            }
        };

        Ok(self.finish(kind, start, line, column))
    }

    fn finish(&self, kind: TokenKind, start: usize, line: u32, column: u32) -> Token {
        Token::new(kind, Span::new(start, self.cursor.position()), line, column)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.cursor.peek() {
                Some(' ' | '\t' | '\n' | '\r') => {
                    self.cursor.bump();
                }
                Some('/') => match self.cursor.rest().as_bytes().get(1) {
                    Some(b'/') => {
                        // Single-line comment: skip until end of line
                        self.cursor.eat_while(|ch| ch != '\n' && ch != '\r');
                    }
                    Some(b'*') => {
                        let (line, column) = (self.cursor.line(), self.cursor.column());
                        self.cursor.bump(); // consume '/'
                        self.cursor.bump(); // consume '*'
                        let mut prev = ' ';
                        loop {
                            match self.cursor.bump() {
                                Some('/') if prev == '*' => break,
                                Some(ch) => prev = ch,
                                None => {
                                    return Err(LexError::UnterminatedComment { line, column });
                                }
                            }
                        }
                    }
                    _ => break, // Not a comment, it's a division operator
                },
                _ => break,
            }
        }
        Ok(())
    }
}

/// Checks if a character can start an identifier.
pub(super) fn is_id_start(ch: char) -> bool {
    ch == '_' || ch == '$' || unicode_xid::UnicodeXID::is_xid_start(ch)
}

/// Checks if a character can continue an identifier.
pub(super) fn is_id_continue(ch: char) -> bool {
    ch == '_' || ch == '$' || unicode_xid::UnicodeXID::is_xid_continue(ch)
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => None,
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Scanner::new(src).map(|t| t.unwrap().kind).collect()
    }

    #[test]
    fn test_simple_tokens() {
        let mut scanner = Scanner::new("{ } ( )");
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::LeftBrace));
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::RightBrace));
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::LeftParen));
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::RightParen));
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::Eof));
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::Eof));
    }

    #[test]
    fn test_operators_prefer_table() {
        assert_eq!(
            kinds("a === b !== c ** d **= e"),
            vec![
                TokenKind::Identifier("a".into()),
                TokenKind::StrictEqual,
                TokenKind::Identifier("b".into()),
                TokenKind::StrictNotEqual,
                TokenKind::Identifier("c".into()),
                TokenKind::DoubleStar,
                TokenKind::Identifier("d".into()),
                TokenKind::DoubleStarEqual,
                TokenKind::Identifier("e".into()),
            ]
        );
    }

    #[test]
    fn test_single_character_fallback() {
        assert_eq!(
            kinds("= ! * + - / % < >"),
            vec![
                TokenKind::Equal,
                TokenKind::Bang,
                TokenKind::Star,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::Less,
                TokenKind::Greater,
            ]
        );
    }

    #[test]
    fn test_plus_plus_plus() {
        assert_eq!(kinds("+++"), vec![TokenKind::PlusPlus, TokenKind::Plus]);
    }

    #[test]
    fn test_equal_then_bang() {
        assert_eq!(kinds("=!x"), vec![
            TokenKind::Equal,
            TokenKind::Bang,
            TokenKind::Identifier("x".into()),
        ]);
    }

    #[test]
    fn test_four_equals() {
        assert_eq!(kinds("===="), vec![TokenKind::StrictEqual, TokenKind::Equal]);
    }

    #[test]
    fn test_keywords() {
        let mut scanner = Scanner::new("function var while yield");
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::Function));
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::Var));
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::While));
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::Yield));
    }

    #[test]
    fn test_single_line_comments() {
        let mut scanner = Scanner::new("42 // this is a comment\n43");
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::Number(n) if n == 42.0));
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::Number(n) if n == 43.0));
    }

    #[test]
    fn test_multi_line_comments() {
        let mut scanner = Scanner::new("1 /* comment */ 2 /* multi\nline\ncomment */ 3");
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::Number(n) if n == 1.0));
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::Number(n) if n == 2.0));
        let three = scanner.next_token().unwrap();
        assert!(matches!(three.kind, TokenKind::Number(n) if n == 3.0));
        assert_eq!(three.line, 3);
    }

    #[test]
    fn test_unterminated_comment() {
        let mut scanner = Scanner::new("1 /* never closed");
        scanner.next_token().unwrap();
        assert_eq!(
            scanner.next_token(),
            Err(LexError::UnterminatedComment { line: 1, column: 3 })
        );
    }

    #[test]
    fn test_division_vs_comment() {
        assert_eq!(
            kinds("6 / 2 /= 3"),
            vec![
                TokenKind::Number(6.0),
                TokenKind::Slash,
                TokenKind::Number(2.0),
                TokenKind::DivideEqual,
                TokenKind::Number(3.0),
            ]
        );
    }

    #[test]
    fn test_positions() {
        let src = "var x\n  x += 1";
        let tokens: Vec<Token> = Scanner::new(src).map(Result::unwrap).collect();
        let plus_equal = &tokens[3];
        assert_eq!(plus_equal.kind, TokenKind::PlusEqual);
        assert_eq!((plus_equal.line, plus_equal.column), (2, 5));
        assert_eq!(plus_equal.lexeme(src), "+=");
        assert_eq!(plus_equal.span, Span::new(10, 12));
    }

    #[test]
    fn test_lone_ampersand_is_an_error() {
        let mut scanner = Scanner::new("a & b");
        scanner.next_token().unwrap();
        assert_eq!(
            scanner.next_token(),
            Err(LexError::UnexpectedCharacter { ch: '&', line: 1, column: 3 })
        );
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut scanner = Scanner::new("a @ b");
        assert!(matches!(scanner.next(), Some(Ok(_))));
        assert!(matches!(scanner.next(), Some(Err(LexError::UnexpectedCharacter { ch: '@', .. }))));
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_custom_table() {
        let table = OperatorTable::build([("<>", TokenKind::BangEqual)]).unwrap();
        let tokens: Vec<TokenKind> = Scanner::with_table("a <> b == c", &table)
            .map(|t| t.unwrap().kind)
            .collect();
        assert_eq!(tokens[1], TokenKind::BangEqual);
        // `==` is not in this table, so it falls back to two `=`
        assert_eq!(tokens[3], TokenKind::Equal);
        assert_eq!(tokens[4], TokenKind::Equal);
    }
}
