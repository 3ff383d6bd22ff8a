// Arithmetic semantics: operand order, exact rationals, integer collapse

use redfin::console::{CaptureSink, MemorySource};
use redfin::interpreter::engine::Interpreter;
use redfin::interpreter::errors::RuntimeError;
use redfin::parser::grid::Grid;

fn run_program(source: &str) -> String {
    let mut interpreter = Interpreter::new(
        Grid::parse(source),
        MemorySource::new(b""),
        CaptureSink::new(),
    );
    interpreter.run().expect("execution failed");
    interpreter.output().text().to_string()
}

#[test]
fn test_operand_order() {
    // the deeper value is the left operand: 3 - 2, not 2 - 3
    assert_eq!(run_program("32-n;"), "1");
    assert_eq!(run_program("23-n;"), "-1");
    assert_eq!(run_program("73%n;"), "1");
}

#[test]
fn test_add_and_multiply() {
    assert_eq!(run_program("31+n;"), "4");
    assert_eq!(run_program("34*n;"), "12");
    assert_eq!(run_program("00+n;"), "0");
}

#[test]
fn test_division_collapses_to_integer() {
    assert_eq!(run_program("62,n;"), "3");
    assert_eq!(run_program("84,n;"), "2");
}

#[test]
fn test_division_yields_exact_rational() {
    assert_eq!(run_program("52,n;"), "2.5");
    assert_eq!(run_program("13,n;"), "0.3333333333333333");
}

#[test]
fn test_rational_arithmetic_renormalizes() {
    // 5/2 * 2 = 5 must print as an integer again
    assert_eq!(run_program("52,2*n;"), "5");
    // 5/2 + 1/2 = 3
    assert_eq!(run_program("52,12,+n;"), "3");
}

#[test]
fn test_comparisons() {
    assert_eq!(run_program("23(n;"), "1"); // 2 < 3
    assert_eq!(run_program("32(n;"), "0");
    assert_eq!(run_program("32)n;"), "1"); // 3 > 2
    assert_eq!(run_program("23)n;"), "0");
    assert_eq!(run_program("22=n;"), "1");
    assert_eq!(run_program("21=n;"), "0");
}

#[test]
fn test_comparison_across_representations() {
    // 6/2 collapses to 3, so it compares equal to the literal 3
    assert_eq!(run_program("62,3=n;"), "1");
    // 5/2 < 3
    assert_eq!(run_program("52,3(n;"), "1");
}

#[test]
fn test_division_by_zero_is_fatal() {
    let mut interpreter = Interpreter::new(
        Grid::parse("10,n;"),
        MemorySource::new(b""),
        CaptureSink::new(),
    );
    let err = interpreter.run().unwrap_err();
    assert_eq!(err, RuntimeError::DivisionByZero { at: (2, 0) });
}

#[test]
fn test_modulo_by_zero_is_fatal() {
    let mut interpreter = Interpreter::new(
        Grid::parse("10%n;"),
        MemorySource::new(b""),
        CaptureSink::new(),
    );
    let err = interpreter.run().unwrap_err();
    assert_eq!(err, RuntimeError::DivisionByZero { at: (2, 0) });
}

#[test]
fn test_noun_literals() {
    assert_eq!(run_program("an;"), "10");
    assert_eq!(run_program("fn;"), "15");
    assert_eq!(run_program("f1+n;"), "16");
}

#[test]
fn test_negative_result() {
    assert_eq!(run_program("01-n;"), "-1");
}
