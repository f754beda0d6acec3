//! Number, string, and identifier literals.
//!
//! ## Numeric Literals
//!
//! ```text
//! 42        -> Integer
//! 3.14      -> Float
//! 1e10      -> Exponential
//! 1.5e-3    -> Exponential with negative exponent
//! ```
//!
//! A `.` only starts a fraction when a digit follows it, so `1.foo` scans
//! as `Number`, `Dot`, `Identifier`. A literal too large for an `f64`
//! (`1e400`) is an `InvalidNumber` error rather than infinity.
//!
//! ## String Literals
//!
//! Single or double quotes. The token's lexeme keeps the quotes; the
//! `String` payload holds the value with escapes resolved.
//!
//! | Escape | Meaning |
//! |--------|---------|
//! | `\n` | Newline |
//! | `\r` | Carriage return |
//! | `\t` | Tab |
//! | `\\` | Backslash |
//! | `\'` | Single quote |
//! | `\"` | Double quote |
//! | `\0` | Null |
//!
//! Any other escaped character stands for itself.

use super::cursor::CharCursor;
use super::scanner::{Scanner, is_id_continue};
use super::token::keyword;
use super::TokenKind;
use crate::error::LexError;

impl Scanner<'_> {
    /// Scans a string literal; the opening quote is already consumed.
    pub(super) fn scan_string(
        &mut self,
        quote: char,
        line: u32,
        column: u32,
    ) -> Result<TokenKind, LexError> {
        let mut value = String::new();

        loop {
            match self.cursor.bump() {
                None => return Err(LexError::UnterminatedString { line, column }),
                Some(ch) if ch == quote => break,
                Some('\\') => {
                    let Some(escaped) = self.cursor.bump() else {
                        return Err(LexError::UnterminatedString { line, column });
                    };
                    match escaped {
                        'n' => value.push('\n'),
                        'r' => value.push('\r'),
                        't' => value.push('\t'),
                        '0' => value.push('\0'),
                        _ => value.push(escaped),
                    }
                }
                Some(ch) => value.push(ch),
            }
        }

        Ok(TokenKind::String(value))
    }

    /// Scans a decimal number; the first digit is already consumed.
    pub(super) fn scan_number(
        &mut self,
        start: usize,
        line: u32,
        column: u32,
    ) -> Result<TokenKind, LexError> {
        // Integer part
        self.cursor.eat_while(|ch| ch.is_ascii_digit());

        // Fractional part
        if self.cursor.peek() == Some('.')
            && self.cursor.peek_nth(1).is_some_and(|ch| ch.is_ascii_digit())
        {
            self.cursor.bump();
            self.cursor.eat_while(|ch| ch.is_ascii_digit());
        }

        // Exponent part
        if matches!(self.cursor.peek(), Some('e' | 'E')) {
            self.cursor.bump();
            if matches!(self.cursor.peek(), Some('+' | '-')) {
                self.cursor.bump();
            }
            self.cursor.eat_while(|ch| ch.is_ascii_digit());
        }

        let text = &self.cursor.source()[start..self.cursor.position()];
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(TokenKind::Number(value)),
            _ => Err(LexError::InvalidNumber {
                text: text.to_string(),
                line,
                column,
            }),
        }
    }

    /// Scans an identifier or keyword; the first character is already
    /// consumed.
    pub(super) fn scan_identifier(&mut self, start: usize) -> TokenKind {
        self.cursor.eat_while(is_id_continue);
        let name = &self.cursor.source()[start..self.cursor.position()];
        keyword(name).unwrap_or_else(|| TokenKind::Identifier(name.to_string()))
    }
}
