// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive token REPL for the Wizard lexer.
//!
//! Every line entered is tokenized and its tokens printed.

use crate::output;
use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config, Editor, Helper};
use std::borrow::Cow;
use std::path::PathBuf;
use wizard_lexer::{Cursor, KEYWORDS, OperatorScanner, operator_table, tokenize};

/// REPL configuration constants
const HISTORY_FILE: &str = ".wizard_history";
const MAX_HISTORY_SIZE: usize = 1000;

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Load,
    Operators,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let rest = input.trim().strip_prefix('.')?;

        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next();

        match cmd.as_str() {
            "help" | "h" | "?" => Some((ReplCommand::Help, arg)),
            "exit" | "quit" | "q" => Some((ReplCommand::Exit, arg)),
            "clear" | "cls" => Some((ReplCommand::Clear, arg)),
            "version" | "v" => Some((ReplCommand::Version, arg)),
            "load" | "l" => Some((ReplCommand::Load, arg)),
            "operators" | "ops" => Some((ReplCommand::Operators, arg)),
            _ => None,
        }
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".load <file>", "Tokenize a Wizard source file"),
            (".operators", "List the operator table"),
        ]
    }
}

/// Helper struct for rustyline that provides completion, hints, and validation
struct WizardHelper {
    words: Vec<String>,
}

impl WizardHelper {
    fn new() -> Self {
        let words = KEYWORDS
            .iter()
            .map(|&(spelling, _)| spelling)
            .chain(
                ReplCommand::all_commands()
                    .iter()
                    .map(|&(cmd, _)| cmd.split_whitespace().next().unwrap_or(cmd)),
            )
            .map(String::from)
            .collect();

        Self { words }
    }

    fn word_start(line: &str, pos: usize) -> usize {
        line[..pos]
            .char_indices()
            .rev()
            .find(|&(_, c)| !c.is_alphanumeric() && c != '_' && c != '.')
            .map_or(0, |(i, c)| i + c.len_utf8())
    }
}

impl Completer for WizardHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = Self::word_start(line, pos);
        let word = &line[start..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches: Vec<Pair> = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for WizardHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let word = &line[Self::word_start(line, pos)..];
        if word.len() < 2 {
            return None;
        }

        self.words
            .iter()
            .find(|w| w.starts_with(word) && w.len() > word.len())
            .map(|w| w[word.len()..].to_string().dimmed().to_string())
    }
}

impl Highlighter for WizardHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(highlight_line(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

/// Colors operators using the same longest-match rule as the lexer, so
/// `**=` is highlighted as one operator and `=!` as two characters.
fn highlight_line(line: &str) -> String {
    let scanner = OperatorScanner::new(operator_table());
    let mut cursor = Cursor::new(line);
    let mut result = String::with_capacity(line.len() * 2);
    let mut word = String::new();

    loop {
        if let Some(op) = scanner.scan_at(&mut cursor) {
            flush_word(&mut result, &mut word);
            result.push_str(&op.lexeme.cyan().bold().to_string());
            continue;
        }

        let Some(c) = cursor.bump() else {
            break;
        };

        if c.is_alphanumeric() || c == '_' || c == '$' {
            word.push(c);
            continue;
        }

        flush_word(&mut result, &mut word);
        let colored = match c {
            '(' | ')' | '[' | ']' | '{' | '}' => c.to_string().yellow().to_string(),
            '+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' | '!' => c.to_string().cyan().to_string(),
            '"' | '\'' => c.to_string().green().to_string(),
            _ => c.to_string(),
        };
        result.push_str(&colored);
    }

    flush_word(&mut result, &mut word);
    result
}

fn flush_word(result: &mut String, word: &mut String) {
    if word.is_empty() {
        return;
    }
    if KEYWORDS.iter().any(|(spelling, _)| *spelling == word.as_str()) {
        result.push_str(&word.magenta().bold().to_string());
    } else if word.chars().all(|c| c.is_ascii_digit() || c == '.') {
        result.push_str(&word.yellow().to_string());
    } else {
        result.push_str(word);
    }
    word.clear();
}

impl Validator for WizardHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        let input = ctx.input();

        // Check for balanced brackets/braces/parentheses
        if !is_balanced(input) {
            return Ok(ValidationResult::Incomplete);
        }

        // Trailing backslash continues the line
        if input.trim_end().ends_with('\\') {
            return Ok(ValidationResult::Incomplete);
        }

        Ok(ValidationResult::Valid(None))
    }
}

/// Check if brackets, braces, and parentheses are balanced
fn is_balanced(input: &str) -> bool {
    let mut stack = Vec::new();
    let mut in_string = None;
    let mut escape_next = false;

    for c in input.chars() {
        if escape_next {
            escape_next = false;
            continue;
        }

        if c == '\\' && in_string.is_some() {
            escape_next = true;
            continue;
        }

        match in_string {
            Some(quote) if c == quote => in_string = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' => in_string = Some(c),
                '(' => stack.push(')'),
                '[' => stack.push(']'),
                '{' => stack.push('}'),
                ')' | ']' | '}' => {
                    if stack.pop() != Some(c) {
                        return true; // Unbalanced, but let the lexer report it
                    }
                }
                _ => {}
            },
        }
    }

    stack.is_empty() && in_string.is_none()
}

impl Helper for WizardHelper {}

/// The interactive token REPL
pub struct Repl {
    editor: Editor<WizardHelper, DefaultHistory>,
    history_path: PathBuf,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new() -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(WizardHelper::new()));

        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wizard")
            .join(HISTORY_FILE);

        if let Some(parent) = history_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), error = %e, "cannot create history directory");
            }
        }

        if let Err(e) = editor.load_history(&history_path) {
            tracing::debug!(error = %e, "no REPL history loaded");
        }

        Ok(Self {
            editor,
            history_path,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> rustyline::Result<()> {
        self.print_banner();

        loop {
            let prompt = format!("{} ", "wizard>".bright_green().bold());

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();

                    if trimmed.is_empty() {
                        continue;
                    }

                    if let Some((cmd, arg)) = ReplCommand::parse(trimmed) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    tokenize_and_print(trimmed, "<repl>");
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "^D".dimmed());
                    break;
                }
                Err(err) => {
                    eprintln!("{}: {:?}", "Error".red().bold(), err);
                    break;
                }
            }
        }

        if let Err(e) = self.editor.save_history(&self.history_path) {
            tracing::warn!(error = %e, "failed to save REPL history");
        }

        Ok(())
    }

    fn print_banner(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!(
            "  {} {} {}",
            "Wizard Lexer".white().bold(),
            "v".dimmed(),
            version.bright_yellow()
        );
        println!(
            "  {} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
        println!();
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => {
                self.print_help();
                CommandResult::Continue
            }
            ReplCommand::Exit => CommandResult::Exit,
            ReplCommand::Clear => {
                print!("\x1B[2J\x1B[H");
                CommandResult::Continue
            }
            ReplCommand::Version => {
                println!(
                    "{}: {}",
                    "Wizard".bright_cyan().bold(),
                    env!("CARGO_PKG_VERSION").yellow()
                );
                CommandResult::Continue
            }
            ReplCommand::Load => {
                match arg {
                    Some(path) => load_file(path.trim()),
                    None => eprintln!(
                        "{}: {} {}",
                        "Error".red().bold(),
                        ".load".cyan(),
                        "requires a file path".dimmed()
                    ),
                }
                CommandResult::Continue
            }
            ReplCommand::Operators => {
                output::print_operator_table(operator_table());
                CommandResult::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "REPL Commands:".white().bold());
        println!();

        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:16} {}", cmd.cyan(), desc.dimmed());
        }

        println!();
        println!("{}", "Keyboard Shortcuts:".white().bold());
        println!();
        println!("  {:16} {}", "Ctrl+C".yellow(), "Cancel current input".dimmed());
        println!("  {:16} {}", "Ctrl+D".yellow(), "Exit REPL".dimmed());
        println!("  {:16} {}", "Tab".yellow(), "Autocomplete".dimmed());
        println!();
    }
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}

fn load_file(path: &str) {
    match std::fs::read_to_string(path) {
        Ok(source) => tokenize_and_print(&source, path),
        Err(e) => eprintln!("{}: cannot read '{}': {}", "Error".red().bold(), path, e),
    }
}

fn tokenize_and_print(source: &str, origin: &str) {
    match tokenize(source) {
        Ok(tokens) => output::print_tokens(&tokens, source),
        Err(e) => output::print_lex_error(&e, source, origin),
    }
}
