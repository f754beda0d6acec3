// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Token and operator table rendering for the terminal.

use owo_colors::OwoColorize;
use serde::Serialize;
use wizard_lexer::{LexError, OperatorTable, Token, TokenKind};

/// A token as written by `--json`.
#[derive(Debug, Serialize, PartialEq)]
pub struct TokenRecord<'a> {
    pub line: u32,
    pub column: u32,
    pub start: usize,
    pub end: usize,
    pub kind: &'static str,
    pub lexeme: &'a str,
}

impl<'a> TokenRecord<'a> {
    pub fn new(token: &Token, source: &'a str) -> Self {
        Self {
            line: token.line,
            column: token.column,
            start: token.span.start,
            end: token.span.end,
            kind: token.kind.name(),
            lexeme: token.lexeme(source),
        }
    }
}

/// Renders tokens as a JSON array.
pub fn tokens_to_json(tokens: &[Token], source: &str) -> serde_json::Result<String> {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(|t| TokenRecord::new(t, source)).collect();
    serde_json::to_string_pretty(&records)
}

/// Prints tokens as an aligned, colored table.
pub fn print_tokens(tokens: &[Token], source: &str) {
    for token in tokens {
        let position = format!("{}:{}", token.line, token.column);
        println!(
            "  {:>8}  {}  {}",
            position.dimmed(),
            color_kind(&token.kind),
            token.lexeme(source)
        );
    }
}

fn color_kind(kind: &TokenKind) -> String {
    let name = format!("{:16}", kind.name());
    if kind.is_operator() {
        name.cyan().to_string()
    } else if kind.is_keyword() {
        name.magenta().bold().to_string()
    } else if kind.is_literal() {
        name.yellow().to_string()
    } else if *kind == TokenKind::Eof {
        name.dimmed().to_string()
    } else {
        name
    }
}

/// Prints every entry of an operator table.
pub fn print_operator_table(table: &OperatorTable) {
    println!("{}", "OPERATORS:".white().bold());
    for entry in table.iter() {
        println!("    {:6} {}", entry.spelling().cyan(), entry.kind().name());
    }
}

/// Prints a lexical error, with the error's source line when available.
pub fn print_lex_error(error: &LexError, source: &str, origin: &str) {
    let (line, column) = error.position();
    eprintln!("{}: {}: {}", "LexError".red().bold(), origin.cyan(), error);
    if let Some(text) = source.lines().nth(line.saturating_sub(1) as usize) {
        eprintln!("    {}", text);
        eprintln!("    {}{}", " ".repeat(column.saturating_sub(1) as usize), "^".red());
    }
}
