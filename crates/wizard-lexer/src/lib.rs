// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # wizard-lexer
//!
//! The lexer for the Wizard scripting language.
//!
//! ## Overview
//!
//! The heart of the crate is operator recognition:
//! - [`OperatorTable`] - an immutable trie of operator spellings
//! - [`OperatorScanner`] - maximal-munch scanning over that trie
//!
//! Around it sits a tokenizer ([`Scanner`]) that skips whitespace and
//! comments, scans literals and identifiers, and falls back to
//! single-character tokens when no multi-character operator matches.
//!
//! ## Quick Start
//!
//! ```rust
//! use wizard_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("a === b").unwrap();
//! assert_eq!(tokens[1].kind, TokenKind::StrictEqual);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod lexer;

pub use error::{LexError, TableError};
pub use lexer::{
    CharCursor, Cursor, KEYWORDS, OperatorScanner, OperatorTable, OperatorToken, Scanner, Span,
    Token, TokenKind, operator_table,
};

/// Tokenizes `source` with the built-in operator table.
///
/// The returned tokens always end with a single `Eof` token. Scanning stops
/// at the first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = scanner.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

/// Tokenizes independent sources, in parallel when the `parallel` feature
/// is enabled.
///
/// Results are returned in the same order as `sources`. All scanners share
/// the process-wide operator table.
pub fn tokenize_many<S>(sources: &[S]) -> Vec<Result<Vec<Token>, LexError>>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        sources.par_iter().map(|s| tokenize(s.as_ref())).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        sources.iter().map(|s| tokenize(s.as_ref())).collect()
    }
}
