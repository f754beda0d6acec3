//! Token definitions for the Wizard lexer.

/// A span in the source code, representing a range of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The span in the source code
    pub span: Span,
    /// 1-based line of the first character
    pub line: u32,
    /// 1-based column of the first character, counted in characters
    pub column: u32,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, span: Span, line: u32, column: u32) -> Self {
        Self {
            kind,
            span,
            line,
            column,
        }
    }

    /// Returns the source text this token was scanned from.
    ///
    /// `source` must be the text the token came from; the span is sliced
    /// directly.
    pub fn lexeme<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.start..self.span.end]
    }
}

/// The different kinds of tokens in Wizard.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Numeric literal (integer or floating point)
    Number(f64),
    /// String literal with escapes resolved
    String(String),

    /// Identifier
    Identifier(String),

    // Keywords
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Export,
    Extends,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    Instanceof,
    New,
    Return,
    Super,
    Switch,
    This,
    Throw,
    Try,
    Typeof,
    Var,
    Void,
    While,
    With,
    Yield,

    // Punctuation
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// (
    LeftParen,
    /// )
    RightParen,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// .
    Dot,
    /// ;
    Semicolon,
    /// ,
    Comma,
    /// :
    Colon,
    /// ?
    Question,

    // Single-character operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// =
    Equal,
    /// !
    Bang,
    /// <
    Less,
    /// >
    Greater,

    // Multi-character operators
    /// !=
    BangEqual,
    /// /=
    DivideEqual,
    /// !!
    DoubleBang,
    /// **
    DoubleStar,
    /// ==
    EqualEqual,
    /// >=
    GreaterEqual,
    /// +=
    PlusEqual,
    /// ++
    PlusPlus,
    /// &&
    LogicalAnd,
    /// ||
    LogicalOr,
    /// <=
    LessEqual,
    /// *=
    StarEqual,
    /// -=
    MinusEqual,
    /// --
    MinusMinus,
    /// %=
    ModuloEqual,
    /// ===
    StrictEqual,
    /// !==
    StrictNotEqual,
    /// **=
    DoubleStarEqual,

    // Special
    /// End of file
    Eof,
}

impl TokenKind {
    /// Returns true if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Break
                | TokenKind::Case
                | TokenKind::Catch
                | TokenKind::Class
                | TokenKind::Const
                | TokenKind::Continue
                | TokenKind::Debugger
                | TokenKind::Default
                | TokenKind::Delete
                | TokenKind::Do
                | TokenKind::Else
                | TokenKind::Export
                | TokenKind::Extends
                | TokenKind::Finally
                | TokenKind::For
                | TokenKind::Function
                | TokenKind::If
                | TokenKind::Import
                | TokenKind::In
                | TokenKind::Instanceof
                | TokenKind::New
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::Switch
                | TokenKind::This
                | TokenKind::Throw
                | TokenKind::Try
                | TokenKind::Typeof
                | TokenKind::Var
                | TokenKind::Void
                | TokenKind::While
                | TokenKind::With
                | TokenKind::Yield
        )
    }

    /// Returns true if this token is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Number(_) | TokenKind::String(_))
    }

    /// Returns true if this token is an operator, single- or multi-character.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::Equal
                | TokenKind::Bang
                | TokenKind::Less
                | TokenKind::Greater
                | TokenKind::BangEqual
                | TokenKind::DivideEqual
                | TokenKind::DoubleBang
                | TokenKind::DoubleStar
                | TokenKind::EqualEqual
                | TokenKind::GreaterEqual
                | TokenKind::PlusEqual
                | TokenKind::PlusPlus
                | TokenKind::LogicalAnd
                | TokenKind::LogicalOr
                | TokenKind::LessEqual
                | TokenKind::StarEqual
                | TokenKind::MinusEqual
                | TokenKind::MinusMinus
                | TokenKind::ModuloEqual
                | TokenKind::StrictEqual
                | TokenKind::StrictNotEqual
                | TokenKind::DoubleStarEqual
        )
    }

    /// Returns the variant name without any payload, e.g. `"Number"`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "Number",
            TokenKind::String(_) => "String",
            TokenKind::Identifier(_) => "Identifier",
            TokenKind::Break => "Break",
            TokenKind::Case => "Case",
            TokenKind::Catch => "Catch",
            TokenKind::Class => "Class",
            TokenKind::Const => "Const",
            TokenKind::Continue => "Continue",
            TokenKind::Debugger => "Debugger",
            TokenKind::Default => "Default",
            TokenKind::Delete => "Delete",
            TokenKind::Do => "Do",
            TokenKind::Else => "Else",
            TokenKind::Export => "Export",
            TokenKind::Extends => "Extends",
            TokenKind::Finally => "Finally",
            TokenKind::For => "For",
            TokenKind::Function => "Function",
            TokenKind::If => "If",
            TokenKind::Import => "Import",
            TokenKind::In => "In",
            TokenKind::Instanceof => "Instanceof",
            TokenKind::New => "New",
            TokenKind::Return => "Return",
            TokenKind::Super => "Super",
            TokenKind::Switch => "Switch",
            TokenKind::This => "This",
            TokenKind::Throw => "Throw",
            TokenKind::Try => "Try",
            TokenKind::Typeof => "Typeof",
            TokenKind::Var => "Var",
            TokenKind::Void => "Void",
            TokenKind::While => "While",
            TokenKind::With => "With",
            TokenKind::Yield => "Yield",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::LeftBracket => "LeftBracket",
            TokenKind::RightBracket => "RightBracket",
            TokenKind::Dot => "Dot",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Comma => "Comma",
            TokenKind::Colon => "Colon",
            TokenKind::Question => "Question",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Star => "Star",
            TokenKind::Slash => "Slash",
            TokenKind::Percent => "Percent",
            TokenKind::Equal => "Equal",
            TokenKind::Bang => "Bang",
            TokenKind::Less => "Less",
            TokenKind::Greater => "Greater",
            TokenKind::BangEqual => "BangEqual",
            TokenKind::DivideEqual => "DivideEqual",
            TokenKind::DoubleBang => "DoubleBang",
            TokenKind::DoubleStar => "DoubleStar",
            TokenKind::EqualEqual => "EqualEqual",
            TokenKind::GreaterEqual => "GreaterEqual",
            TokenKind::PlusEqual => "PlusEqual",
            TokenKind::PlusPlus => "PlusPlus",
            TokenKind::LogicalAnd => "LogicalAnd",
            TokenKind::LogicalOr => "LogicalOr",
            TokenKind::LessEqual => "LessEqual",
            TokenKind::StarEqual => "StarEqual",
            TokenKind::MinusEqual => "MinusEqual",
            TokenKind::MinusMinus => "MinusMinus",
            TokenKind::ModuloEqual => "ModuloEqual",
            TokenKind::StrictEqual => "StrictEqual",
            TokenKind::StrictNotEqual => "StrictNotEqual",
            TokenKind::DoubleStarEqual => "DoubleStarEqual",
            TokenKind::Eof => "Eof",
        }
    }
}

/// Reserved words and the token kinds they scan to.
pub static KEYWORDS: &[(&str, TokenKind)] = &[
    ("break", TokenKind::Break),
    ("case", TokenKind::Case),
    ("catch", TokenKind::Catch),
    ("class", TokenKind::Class),
    ("const", TokenKind::Const),
    ("continue", TokenKind::Continue),
    ("debugger", TokenKind::Debugger),
    ("default", TokenKind::Default),
    ("delete", TokenKind::Delete),
    ("do", TokenKind::Do),
    ("else", TokenKind::Else),
    ("export", TokenKind::Export),
    ("extends", TokenKind::Extends),
    ("finally", TokenKind::Finally),
    ("for", TokenKind::For),
    ("function", TokenKind::Function),
    ("if", TokenKind::If),
    ("import", TokenKind::Import),
    ("in", TokenKind::In),
    ("instanceof", TokenKind::Instanceof),
    ("new", TokenKind::New),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("switch", TokenKind::Switch),
    ("this", TokenKind::This),
    ("throw", TokenKind::Throw),
    ("try", TokenKind::Try),
    ("typeof", TokenKind::Typeof),
    ("var", TokenKind::Var),
    ("void", TokenKind::Void),
    ("while", TokenKind::While),
    ("with", TokenKind::With),
    ("yield", TokenKind::Yield),
];

/// Resolves a keyword spelling to its token kind.
pub(crate) fn keyword(name: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(spelling, _)| *spelling == name)
        .map(|(_, kind)| kind.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(5, 15);
        assert_eq!(span.len(), 10);
    }

    #[test]
    fn test_span_is_empty() {
        assert!(Span::new(5, 5).is_empty());
        assert!(!Span::new(5, 10).is_empty());
    }

    #[test]
    fn test_token_lexeme() {
        let source = "a **= 2";
        let token = Token::new(TokenKind::DoubleStarEqual, Span::new(2, 5), 1, 3);
        assert_eq!(token.lexeme(source), "**=");
    }

    #[test]
    fn test_keywords_resolve() {
        for (spelling, kind) in KEYWORDS {
            assert!(kind.is_keyword(), "{spelling}");
            assert_eq!(keyword(spelling).as_ref(), Some(kind));
        }
        assert_eq!(keyword("pesho"), None);
        assert_eq!(keyword("Var"), None);
    }

    #[test]
    fn test_is_keyword() {
        assert!(TokenKind::If.is_keyword());
        assert!(TokenKind::Instanceof.is_keyword());
        assert!(TokenKind::Yield.is_keyword());
        assert!(!TokenKind::Identifier("x".to_string()).is_keyword());
        assert!(!TokenKind::PlusPlus.is_keyword());
        assert!(!TokenKind::Eof.is_keyword());
    }

    #[test]
    fn test_is_literal() {
        assert!(TokenKind::Number(42.0).is_literal());
        assert!(TokenKind::String("hello".to_string()).is_literal());
        assert!(!TokenKind::Identifier("x".to_string()).is_literal());
        assert!(!TokenKind::LeftBrace.is_literal());
    }

    #[test]
    fn test_is_operator() {
        assert!(TokenKind::Plus.is_operator());
        assert!(TokenKind::StrictNotEqual.is_operator());
        assert!(TokenKind::DoubleStarEqual.is_operator());
        assert!(!TokenKind::Semicolon.is_operator());
        assert!(!TokenKind::Var.is_operator());
    }

    #[test]
    fn test_name_drops_payload() {
        assert_eq!(TokenKind::Number(1.5).name(), "Number");
        assert_eq!(TokenKind::Identifier("abc".into()).name(), "Identifier");
        assert_eq!(TokenKind::LogicalOr.name(), "LogicalOr");
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(keyword("while"), Some(TokenKind::While));
        assert_eq!(keyword("typeof"), Some(TokenKind::Typeof));
        assert_eq!(keyword("While"), None);
        assert_eq!(keyword("let"), None);
    }
}
