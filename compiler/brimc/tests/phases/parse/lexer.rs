use brim_ir::TokenKind;
use brim_lexer::{tokenize, Dialect, Keywords, Scanner};
use brimc::{Session, Stage};
use pretty_assertions::assert_eq;

use crate::common::failing_lines;

fn kinds(source: &str, keywords: Keywords) -> Vec<TokenKind> {
    tokenize(source, keywords)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_statement_tokens() {
    assert_eq!(
        kinds("if (x > 10) { y = 2 ; }", Keywords::BLOCK),
        vec![
            TokenKind::Keyword,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Integer,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::RightBrace,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_no_whitespace_needed() {
    let texts: Vec<String> = tokenize("x=12*(y-3);", Keywords::BLOCK)
        .unwrap()
        .into_iter()
        .map(|token| token.text)
        .collect();
    assert_eq!(
        texts,
        vec!["x", "=", "12", "*", "(", "y", "-", "3", ")", ";", ""]
    );
}

#[test]
fn test_digits_then_letters_split() {
    assert_eq!(
        kinds("12ab", Keywords::NONE),
        vec![TokenKind::Integer, TokenKind::Identifier, TokenKind::EndOfInput]
    );
}

#[test]
fn test_lazy_scanning_stops_at_first_error() {
    // The scanner is only asked for lines as the parser needs them, so a
    // complete program followed by a failing source still reports the
    // failure: the parser must see end of input.
    let err = Session::new(Dialect::Block)
        .run_lines(failing_lines(&["x = 1 ;", "y = 2 ;"]))
        .unwrap_err();
    assert_eq!(err.stage(), Stage::Scan);
    assert_eq!(
        err.to_string(),
        "failed to read source line 3: stream closed"
    );
}

#[test]
fn test_scanner_reports_line_numbers_past_comments() {
    let mut scanner = Scanner::from_source("# header\n\n  total", Keywords::BLOCK);
    let token = scanner.next_token().unwrap();
    assert_eq!(token.text, "total");
    assert_eq!(token.span.line, 3);
    assert_eq!(token.span.start, 2);
    assert_eq!(scanner.line_number(), 3);
}
