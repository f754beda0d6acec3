// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Wizard - command-line tokenizer for the Wizard scripting language
//!
//! This is the main entry point for the wizard CLI/REPL.
//!
//! ## Features
//!
//! - Tokenize files (in parallel) or inline code
//! - Colored token tables or JSON output
//! - Interactive token REPL with history

mod output;
mod repl;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wizard_lexer::{LexError, Token, operator_table, tokenize, tokenize_many};

#[derive(Parser)]
#[command(
    name = "wizard",
    about = "Tokenizer for the Wizard scripting language",
    version,
    author = "Pegasus Heavy Industries"
)]
struct Cli {
    /// Wizard source files to tokenize
    files: Vec<PathBuf>,

    /// Tokenize code from the command line
    #[arg(short = 'e', long = "eval", conflicts_with = "files")]
    eval: Option<String>,

    /// Print tokens as JSON
    #[arg(long)]
    json: bool,

    /// Print the operator table and exit
    #[arg(long)]
    operators: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Output settings shared by every input.
#[derive(Debug, Clone, Copy)]
struct OutputOptions {
    json: bool,
    /// Print a header naming each input before its tokens
    headers: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.operators {
        output::print_operator_table(operator_table());
        return ExitCode::SUCCESS;
    }

    let result = if let Some(code) = &cli.eval {
        let options = OutputOptions {
            json: cli.json,
            headers: false,
        };
        Ok(report("<eval>", code, tokenize(code), options))
    } else if !cli.files.is_empty() {
        let options = OutputOptions {
            json: cli.json,
            headers: cli.files.len() > 1,
        };
        run_files(&cli.files, options)
    } else {
        run_repl()
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize the tracing subscriber; `RUST_LOG` overrides the default filter.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "wizard=debug,wizard_lexer=debug"
    } else {
        "wizard=warn,wizard_lexer=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read every file, tokenize them in parallel, then report in argument order.
///
/// Returns `Ok(false)` when any file failed to lex.
fn run_files(paths: &[PathBuf], options: OutputOptions) -> anyhow::Result<bool> {
    let sources = paths
        .iter()
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read '{}'", path.display()))
        })
        .collect::<anyhow::Result<Vec<String>>>()?;

    tracing::debug!(files = sources.len(), "tokenizing files");

    let results = tokenize_many(&sources);

    let mut ok = true;
    for ((path, source), result) in paths.iter().zip(&sources).zip(results) {
        let origin = path.display().to_string();
        ok &= report(&origin, source, result, options);
    }
    Ok(ok)
}

/// Print one input's tokens or its error. Returns false on a lexical error.
fn report(
    origin: &str,
    source: &str,
    result: Result<Vec<Token>, LexError>,
    options: OutputOptions,
) -> bool {
    match result {
        Ok(tokens) => {
            if options.json {
                match output::tokens_to_json(&tokens, source) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("{}: {}", "Error".red().bold(), e);
                        return false;
                    }
                }
            } else {
                if options.headers {
                    println!("{}", origin.white().bold());
                }
                output::print_tokens(&tokens, source);
            }
            true
        }
        Err(e) => {
            output::print_lex_error(&e, source, origin);
            false
        }
    }
}

/// Start the interactive REPL
fn run_repl() -> anyhow::Result<bool> {
    let mut repl = repl::Repl::new().context("failed to initialize REPL")?;
    repl.run().context("REPL error")?;
    Ok(true)
}
