//! Lexical analysis (tokenization) for Wizard source code.
//!
//! The lexer transforms Wizard source text into a stream of tokens
//! that can be consumed by the parser.
//!
//! ## Structure
//!
//! - `operators.rs` - `OperatorTable`, the trie of multi-character operators
//! - `operator_scanner.rs` - `OperatorScanner`, longest-match operator recognition
//! - `cursor.rs` - `CharCursor` trait and the line-tracking `Cursor`
//! - `scanner.rs` - Main `Scanner` struct that produces tokens
//! - `literals.rs` - Number, string, and identifier literals
//! - `token.rs` - `Token` and `TokenKind` definitions
//!
//! ## Usage
//!
//! ```rust
//! use wizard_lexer::lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("var x = y ** 2;");
//!
//! loop {
//!     let token = scanner.next_token().unwrap();
//!     if matches!(token.kind, TokenKind::Eof) {
//!         break;
//!     }
//!     println!("{:?}", token.kind);
//! }
//! ```

mod cursor;
mod literals;
mod operator_scanner;
mod operators;
mod scanner;
mod token;

pub use cursor::{CharCursor, Cursor};
pub use operator_scanner::{OperatorScanner, OperatorToken};
pub use operators::{MAX_SPELLING_LEN, OperatorEntry, OperatorTable, WIZARD_OPERATORS, operator_table};
pub use scanner::Scanner;
pub use token::{KEYWORDS, Span, Token, TokenKind};
