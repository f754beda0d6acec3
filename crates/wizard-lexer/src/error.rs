// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for operator table construction and lexing

use crate::lexer::TokenKind;
use thiserror::Error;

/// Errors raised while building an operator table.
///
/// These are configuration errors: a table that fails to build must not be
/// used for scanning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// A spelling with no characters
    #[error("operator spelling must not be empty")]
    EmptySpelling,

    /// A spelling longer than the table supports
    #[error("operator spelling `{spelling}` is longer than {max} characters")]
    SpellingTooLong {
        /// The offending spelling
        spelling: String,
        /// Maximum supported length in characters
        max: usize,
    },

    /// The same spelling registered twice
    #[error("operator spelling `{spelling}` registered twice ({existing:?} and {duplicate:?})")]
    DuplicateSpelling {
        /// The repeated spelling
        spelling: String,
        /// Kind from the first registration
        existing: TokenKind,
        /// Kind from the rejected registration
        duplicate: TokenKind,
    },
}

/// Errors raised by the tokenizer driver.
///
/// Positions are 1-based; columns count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// A character no token rule accepts
    #[error("{line}:{column}: unexpected character '{ch}'")]
    UnexpectedCharacter {
        /// The character
        ch: char,
        /// Line of the character
        line: u32,
        /// Column of the character
        column: u32,
    },

    /// A string literal with no closing quote
    #[error("{line}:{column}: unterminated string literal")]
    UnterminatedString {
        /// Line of the opening quote
        line: u32,
        /// Column of the opening quote
        column: u32,
    },

    /// A block comment with no closing `*/`
    #[error("{line}:{column}: unterminated block comment")]
    UnterminatedComment {
        /// Line of the opening `/*`
        line: u32,
        /// Column of the opening `/*`
        column: u32,
    },

    /// A numeric literal that does not parse
    #[error("{line}:{column}: invalid number literal '{text}'")]
    InvalidNumber {
        /// The scanned text
        text: String,
        /// Line of the first digit
        line: u32,
        /// Column of the first digit
        column: u32,
    },
}

impl LexError {
    /// Returns the 1-based `(line, column)` the error points at.
    pub fn position(&self) -> (u32, u32) {
        match self {
            LexError::UnexpectedCharacter { line, column, .. }
            | LexError::UnterminatedString { line, column }
            | LexError::UnterminatedComment { line, column }
            | LexError::InvalidNumber { line, column, .. } => (*line, *column),
        }
    }
}
