//! Longest-match operator recognition.
//!
//! ## Lookahead Logic
//!
//! The scanner walks the operator trie one character at a time and keeps the
//! last node that completed a spelling. When the next character has no edge,
//! it commits to that last match:
//!
//! ```text
//! // For input "**=x"
//! '*' -> node(*)       no entry
//! '*' -> node(**)      DoubleStar, width 2
//! '=' -> node(**=)     DoubleStarEqual, width 3
//! 'x' -> no edge       commit DoubleStarEqual, advance 3
//!
//! // For input "=!"
//! '=' -> node(=)       no entry
//! '!' -> no edge       nothing recorded, cursor untouched
//! ```

use super::cursor::CharCursor;
use super::operators::{OperatorTable, operator_table};
use super::TokenKind;

/// An operator recognized at the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorToken<'t> {
    /// The operator's kind
    pub kind: TokenKind,
    /// The matched spelling
    pub lexeme: &'t str,
    /// Characters consumed
    pub width: usize,
}

/// Maximal-munch scanner over an [`OperatorTable`].
///
/// Holds no state between calls beyond the table reference.
#[derive(Debug, Clone, Copy)]
pub struct OperatorScanner<'t> {
    table: &'t OperatorTable,
}

impl<'t> OperatorScanner<'t> {
    /// Creates a scanner over `table`.
    pub fn new(table: &'t OperatorTable) -> Self {
        Self { table }
    }

    /// The table this scanner reads.
    pub fn table(&self) -> &'t OperatorTable {
        self.table
    }

    /// Scans the longest operator starting at the cursor.
    ///
    /// On a match the cursor is advanced past the operator. `None` means no
    /// registered spelling starts here; the cursor is left where it was and
    /// the caller decides what the character is.
    pub fn scan_at<C>(&self, cursor: &mut C) -> Option<OperatorToken<'t>>
    where
        C: CharCursor + ?Sized,
    {
        let mut node = self.table.root();
        let mut last_match = None;
        let mut offset = 0;

        while let Some(ch) = cursor.peek_nth(offset) {
            let Some(next) = self.table.step(node, ch) else {
                break;
            };
            node = next;
            offset += 1;
            if let Some(entry) = self.table.entry(node) {
                last_match = Some((entry, offset));
            }
        }

        let (entry, width) = last_match?;
        cursor.advance_by(width);
        tracing::trace!(kind = ?entry.kind(), width, "matched operator");

        Some(OperatorToken {
            kind: entry.kind().clone(),
            lexeme: entry.spelling(),
            width,
        })
    }
}

impl Default for OperatorScanner<'static> {
    fn default() -> Self {
        Self::new(operator_table())
    }
}
