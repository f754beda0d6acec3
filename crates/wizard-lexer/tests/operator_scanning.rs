//! Operator scanning integration tests
//!
//! Exercises the operator table and scanner through the public API, the way
//! a tokenizer driver uses them.

use wizard_lexer::lexer::WIZARD_OPERATORS;
use wizard_lexer::{
    Cursor, OperatorScanner, OperatorTable, Scanner, TableError, TokenKind, operator_table,
    tokenize, tokenize_many,
};

/// Scans one operator from `src` and returns its kind, width and the rest.
fn scan(src: &str) -> (Option<(TokenKind, usize)>, &str) {
    let mut cursor = Cursor::new(src);
    let token = OperatorScanner::new(operator_table()).scan_at(&mut cursor);
    (token.map(|t| (t.kind, t.width)), cursor.rest())
}

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_every_spelling_before_non_extending_character() {
    for (spelling, kind) in WIZARD_OPERATORS {
        for follower in [" ", "a", "1", "(", ""] {
            let src = format!("{spelling}{follower}");
            let (token, rest) = scan(&src);
            assert_eq!(token, Some((kind.clone(), spelling.len())), "{src:?}");
            assert_eq!(rest, follower);
        }
    }
}

#[test]
fn test_concrete_cases() {
    assert_eq!(scan("==").0, Some((TokenKind::EqualEqual, 2)));
    assert_eq!(scan("===").0, Some((TokenKind::StrictEqual, 3)));
    assert_eq!(scan("**=").0, Some((TokenKind::DoubleStarEqual, 3)));
    assert_eq!(scan("+++"), (Some((TokenKind::PlusPlus, 2)), "+"));
    assert_eq!(scan("=!"), (None, "=!"));
}

#[test]
fn test_no_match_leaves_cursor() {
    for src in ["(", "x", "@@", ";==", "\n!="] {
        assert_eq!(scan(src), (None, src));
    }
}

#[test]
fn test_table_rejects_duplicates_regardless_of_kind() {
    let mut entries: Vec<(&str, TokenKind)> = WIZARD_OPERATORS.to_vec();
    entries.push(("!=", TokenKind::StrictNotEqual));
    let err = OperatorTable::build(entries).unwrap_err();
    assert_eq!(
        err,
        TableError::DuplicateSpelling {
            spelling: "!=".to_string(),
            existing: TokenKind::BangEqual,
            duplicate: TokenKind::StrictNotEqual,
        }
    );
}

#[test]
fn test_driver_falls_back_after_operator_scan() {
    assert_eq!(kinds("+++"), vec![TokenKind::PlusPlus, TokenKind::Plus, TokenKind::Eof]);
    assert_eq!(
        kinds("a !!= b"),
        vec![
            TokenKind::Identifier("a".into()),
            TokenKind::DoubleBang,
            TokenKind::Equal,
            TokenKind::Identifier("b".into()),
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("x&&y||z"),
        vec![
            TokenKind::Identifier("x".into()),
            TokenKind::LogicalAnd,
            TokenKind::Identifier("y".into()),
            TokenKind::LogicalOr,
            TokenKind::Identifier("z".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_wizard_program() {
    let src = "\
function pow(a, b) {
    var r = a ** b; // power
    r **= 2;
    if (r !== 0 && !!a) { r--; }
    return r >= 10 || r <= -1;
}
";
    let tokens = tokenize(src).unwrap();
    let operators: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind.is_operator())
        .map(|t| t.lexeme(src))
        .collect();
    assert_eq!(
        operators,
        ["=", "**", "**=", "!==", "&&", "!!", "--", ">=", "||", "<=", "-"]
    );

    let ret = tokens.iter().find(|t| t.kind == TokenKind::Return).unwrap();
    assert_eq!((ret.line, ret.column), (5, 5));
}

#[test]
fn test_scanner_iterator_matches_tokenize() {
    let src = "while (i <= n) { i += 1; }";
    let from_iter: Vec<TokenKind> = Scanner::new(src).map(|t| t.unwrap().kind).collect();
    let mut from_tokenize = kinds(src);
    assert_eq!(from_tokenize.pop(), Some(TokenKind::Eof));
    assert_eq!(from_iter, from_tokenize);
}

#[test]
fn test_parallel_matches_sequential() {
    let sources: Vec<String> = (0..64)
        .map(|i| format!("var v{i} = {i} ** 2; v{i} %= 7; v{i} === {i};"))
        .collect();
    let parallel = tokenize_many(&sources);
    for (source, result) in sources.iter().zip(parallel) {
        assert_eq!(result.unwrap(), tokenize(source).unwrap());
    }
}

#[test]
fn test_table_shared_across_threads() {
    std::thread::scope(|scope| {
        let handles: Vec<_> = ["==", "===", "**", "**=", "!=", "!=="]
            .into_iter()
            .map(|src| scope.spawn(move || scan(src).0.map(|(_, width)| width)))
            .collect();
        let widths: Vec<Option<usize>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(widths, [Some(2), Some(3), Some(2), Some(3), Some(2), Some(3)]);
    });
}
