use brimc::{parse_source, Dialect, Error, Stage};
use pretty_assertions::assert_eq;

use crate::common::fails_at;

fn tree(source: &str, dialect: Dialect) -> String {
    parse_source(source, dialect).unwrap().to_string()
}

#[test]
fn test_expression_shapes() {
    assert_eq!(tree("2+3*4", Dialect::Arithmetic), "(+ 2 (* 3 4))");
    assert_eq!(tree("(2+3)*4", Dialect::Arithmetic), "(* (+ 2 3) 4)");
    assert_eq!(tree("a & b | c > d", Dialect::Arithmetic), "(> (& a (| b c)) d)");
}

#[test]
fn test_program_shape() {
    assert_eq!(
        tree(
            "x = 2 ;\nif (x > 1) {\n  y = x * 3 ;\n}\n",
            Dialect::Block
        ),
        "{(= x 2) (if (> x 1) {(= y (* x 3))})}"
    );
}

#[test]
fn test_unclosed_paren_is_syntax_error() {
    let err = fails_at("(1+2", Dialect::Arithmetic, Stage::Parse);
    assert!(matches!(err, Error::Syntax(_)));
    assert_eq!(
        err.to_string(),
        "1:5: expected `)`, found end of input while parsing a parenthesized expression"
    );
}

#[test]
fn test_syntax_error_reports_line() {
    let err = fails_at("x = 1 ;\ny = ;\n", Dialect::Block, Stage::Parse);
    let Error::Syntax(syntax) = err else {
        panic!("expected syntax error");
    };
    assert_eq!(syntax.span().line, 2);
}

#[test]
fn test_no_partial_tree_on_error() {
    assert!(parse_source("x = 1 ; y = 2", Dialect::Block).is_err());
}

#[test]
fn test_statement_dialect_rejects_bare_expression() {
    fails_at("2+3", Dialect::Block, Stage::Parse);
}

#[test]
fn test_expression_dialect_rejects_statements() {
    fails_at("x = 2 ;", Dialect::Arithmetic, Stage::Parse);
}
