use brimc::{Dialect, Outcome, Session};
use pretty_assertions::assert_eq;
use std::io::{BufRead, Cursor};

use crate::common::{bindings, pairs};

#[test]
fn test_assignment_sequence() {
    assert_eq!(
        bindings("x = 2 ; y = x * 3 ; "),
        pairs(&[("x", 2), ("y", 6)])
    );
}

#[test]
fn test_if_taken() {
    assert_eq!(bindings("if (1 > 0) { x = 9 ; }"), pairs(&[("x", 9)]));
}

#[test]
fn test_if_not_taken_leaves_no_binding() {
    assert_eq!(bindings("if (0 > 1) { x = 1 ; }"), pairs(&[]));
}

#[test]
fn test_empty_program() {
    let outcome = Session::default().run_source("").unwrap();
    assert_eq!(outcome.value, 0);
    assert!(outcome.environment.is_empty());
}

#[test]
fn test_unset_variables_read_zero() {
    assert_eq!(
        bindings("a = b + c ; d = b ;"),
        pairs(&[("a", 0), ("d", 0)])
    );
}

#[test]
fn test_counter_program() {
    // Comment lines must start in column 0.
    let source = "\
# Sum the first few odd numbers, one guarded step at a time.
total = 0 ;
n = 1 ;
if (10 > n) { total = total + n ; n = n + 2 ; }
if (10 > n) { total = total + n ; n = n + 2 ; }
if (10 > n) { total = total + n ; n = n + 2 ; }
if (n > 100) { total = 0 ; }
";
    assert_eq!(bindings(source), pairs(&[("n", 7), ("total", 9)]));
}

#[test]
fn test_alias_operators_in_programs() {
    assert_eq!(
        bindings("a = 2 & 3 ; b = 2 | 3 ; c = a & b | 2 ;"),
        pairs(&[("a", 5), ("b", 6), ("c", 17)])
    );
}

#[test]
fn test_run_lines_from_reader() {
    let reader = Cursor::new("x = 4 ;\r\n# comment\r\nif (x > 3) {\r\n y = x / 3 ;\r\n}\r\n");
    let outcome = Session::new(Dialect::Block).run_lines(reader.lines()).unwrap();
    assert_eq!(outcome.environment.sorted_bindings(), vec![("x", 4), ("y", 1)]);
}

#[test]
fn test_arithmetic_outcome() {
    let outcome = Session::new(Dialect::Arithmetic).run_source("2+3*4").unwrap();
    assert_eq!(
        outcome,
        Outcome {
            value: 14,
            environment: brimc::Environment::new(),
        }
    );
    assert_eq!(brimc::evaluate("(2+3)*4").unwrap(), 20);
}

#[test]
fn test_sessions_do_not_share_state() {
    let session = Session::new(Dialect::Block);
    let first = session.run_source("x = 1 ;").unwrap();
    let second = session.run_source("y = x ;").unwrap();
    assert_eq!(first.environment.sorted_bindings(), vec![("x", 1)]);
    assert_eq!(second.environment.sorted_bindings(), vec![("y", 0)]);
}

#[test]
fn test_tracing_init_is_idempotent() {
    brimc::init_tracing();
    brimc::init_tracing();
    assert_eq!(brimc::evaluate("1+1").unwrap(), 2);
}
