//! The operator table: multi-character operator spellings and their kinds.
//!
//! Spellings are stored in a character trie. Every node below the root lies
//! on the path of at least one registered spelling, so "does a child exist
//! for this character" is the same question as "is the extended candidate a
//! prefix of some operator". Nodes where a spelling ends point at its entry.
//!
//! ## Wizard Operators
//!
//! | Spelling | Kind | Spelling | Kind |
//! |----------|------|----------|------|
//! | `!=` | `BangEqual` | `<=` | `LessEqual` |
//! | `/=` | `DivideEqual` | `*=` | `StarEqual` |
//! | `!!` | `DoubleBang` | `-=` | `MinusEqual` |
//! | `**` | `DoubleStar` | `--` | `MinusMinus` |
//! | `==` | `EqualEqual` | `%=` | `ModuloEqual` |
//! | `>=` | `GreaterEqual` | `===` | `StrictEqual` |
//! | `+=` | `PlusEqual` | `!==` | `StrictNotEqual` |
//! | `++` | `PlusPlus` | `**=` | `DoubleStarEqual` |
//! | `&&` | `LogicalAnd` | `\|\|` | `LogicalOr` |
//!
//! Single-character operators (`=`, `!`, `*`, ...) are not in the table; the
//! tokenizer falls back to them when the table has no match.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::TokenKind;
use crate::error::TableError;

/// Longest spelling an operator table accepts, in characters.
pub const MAX_SPELLING_LEN: usize = 3;

/// The Wizard operator vocabulary.
pub static WIZARD_OPERATORS: &[(&str, TokenKind)] = &[
    ("!=", TokenKind::BangEqual),
    ("/=", TokenKind::DivideEqual),
    ("!!", TokenKind::DoubleBang),
    ("**", TokenKind::DoubleStar),
    ("==", TokenKind::EqualEqual),
    (">=", TokenKind::GreaterEqual),
    ("+=", TokenKind::PlusEqual),
    ("++", TokenKind::PlusPlus),
    ("&&", TokenKind::LogicalAnd),
    ("||", TokenKind::LogicalOr),
    ("<=", TokenKind::LessEqual),
    ("*=", TokenKind::StarEqual),
    ("-=", TokenKind::MinusEqual),
    ("--", TokenKind::MinusMinus),
    ("%=", TokenKind::ModuloEqual),
    ("===", TokenKind::StrictEqual),
    ("!==", TokenKind::StrictNotEqual),
    ("**=", TokenKind::DoubleStarEqual),
];

static OPERATOR_TABLE: LazyLock<OperatorTable> = LazyLock::new(|| {
    let entries = WIZARD_OPERATORS
        .iter()
        .map(|(spelling, kind)| (*spelling, kind.clone()));
    match OperatorTable::build(entries) {
        Ok(table) => table,
        Err(e) => panic!("built-in operator table is invalid: {e}"),
    }
});

/// Returns the process-wide Wizard operator table.
///
/// The table is built on first use and never modified afterwards, so it can
/// be shared by any number of scanners on any thread.
pub fn operator_table() -> &'static OperatorTable {
    &OPERATOR_TABLE
}

/// Index of a trie node.
pub(crate) type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Default)]
struct TrieNode {
    children: FxHashMap<char, NodeId>,
    entry: Option<usize>,
}

/// One registered operator.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorEntry {
    spelling: Box<str>,
    kind: TokenKind,
}

impl OperatorEntry {
    /// The literal spelling.
    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    /// The kind the spelling maps to.
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }
}

/// An immutable mapping from operator spelling to token kind.
#[derive(Debug)]
pub struct OperatorTable {
    nodes: Vec<TrieNode>,
    entries: Vec<OperatorEntry>,
    max_len: usize,
}

impl OperatorTable {
    /// Builds a table from `(spelling, kind)` pairs.
    ///
    /// Fails if a spelling is empty, longer than [`MAX_SPELLING_LEN`], or
    /// registered more than once (whatever the kinds).
    pub fn build<I, S>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, TokenKind)>,
        S: AsRef<str>,
    {
        let mut table = Self {
            nodes: vec![TrieNode::default()],
            entries: Vec::new(),
            max_len: 0,
        };

        for (spelling, kind) in entries {
            table.insert(spelling.as_ref(), kind)?;
        }

        tracing::debug!(
            entries = table.entries.len(),
            nodes = table.nodes.len(),
            "built operator table"
        );
        Ok(table)
    }

    fn insert(&mut self, spelling: &str, kind: TokenKind) -> Result<(), TableError> {
        let len = spelling.chars().count();
        if len == 0 {
            return Err(TableError::EmptySpelling);
        }
        if len > MAX_SPELLING_LEN {
            return Err(TableError::SpellingTooLong {
                spelling: spelling.to_string(),
                max: MAX_SPELLING_LEN,
            });
        }

        let mut node = ROOT;
        for ch in spelling.chars() {
            node = match self.nodes[node].children.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(ch, next);
                    next
                }
            };
        }

        if let Some(existing) = self.nodes[node].entry {
            return Err(TableError::DuplicateSpelling {
                spelling: spelling.to_string(),
                existing: self.entries[existing].kind.clone(),
                duplicate: kind,
            });
        }

        self.nodes[node].entry = Some(self.entries.len());
        self.entries.push(OperatorEntry {
            spelling: spelling.into(),
            kind,
        });
        self.max_len = self.max_len.max(len);
        Ok(())
    }

    /// Returns the kind registered for exactly `spelling`.
    pub fn lookup(&self, spelling: &str) -> Option<&TokenKind> {
        let node = self.walk(spelling)?;
        self.entry(node).map(OperatorEntry::kind)
    }

    /// Returns true if some registered spelling begins with `prefix`.
    pub fn has_spelling_with_prefix(&self, prefix: &str) -> bool {
        match self.walk(prefix) {
            Some(ROOT) => !self.entries.is_empty(),
            Some(_) => true,
            None => false,
        }
    }

    /// Number of registered spellings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no spelling is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length in characters of the longest registered spelling.
    pub fn max_spelling_len(&self) -> usize {
        self.max_len
    }

    /// Iterates over entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &OperatorEntry> {
        self.entries.iter()
    }

    pub(crate) fn root(&self) -> NodeId {
        ROOT
    }

    /// Follows the edge for `ch` out of `node`.
    pub(crate) fn step(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[node].children.get(&ch).copied()
    }

    /// The entry whose spelling ends at `node`, if any.
    pub(crate) fn entry(&self, node: NodeId) -> Option<&OperatorEntry> {
        self.nodes[node].entry.map(|index| &self.entries[index])
    }

    fn walk(&self, text: &str) -> Option<NodeId> {
        text.chars().try_fold(self.root(), |node, ch| self.step(node, ch))
    }
}
