// Integration tests for the calculator pipeline

use bigcalc::interpreter::engine::{Calculator, Outcome};
use bigcalc::interpreter::errors::CalcError;
use bigcalc::interpreter::evaluator::evaluate;
use bigcalc::interpreter::variables::{assign, lookup, VariableTable};
use bigcalc::repl;
use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::io::Cursor;

fn eval(input: &str) -> Result<BigInt, CalcError> {
    evaluate(input, &VariableTable::new())
}

fn big(n: i64) -> BigInt {
    BigInt::from(n)
}

#[test]
fn test_left_to_right_with_precedence() {
    assert_eq!(eval("8 - 2 + 3"), Ok(big(9)));
    assert_eq!(eval("2 + 3 * 4"), Ok(big(14)));
    assert_eq!(eval("20 / 2 * 5 - 3 * 3 + 1"), Ok(big(42)));
}

#[test]
fn test_brackets_override_precedence() {
    assert_eq!(eval("(2 + 3) * 4"), Ok(big(20)));
    assert_eq!(eval("2 * (3 + (4 - 1)) / 3"), Ok(big(4)));
}

#[test]
fn test_sign_runs() {
    assert_eq!(eval("8 - -5"), Ok(big(13)));
    assert_eq!(eval("8 - - - 5"), Ok(big(3)));
    assert_eq!(eval("8 + + + 5"), Ok(big(13)));
}

#[test]
fn test_repeated_multiplicative_operators() {
    assert_eq!(eval("3 ** 2"), Err(CalcError::InvalidExpression));
    assert_eq!(eval("4 // 2"), Err(CalcError::InvalidExpression));
}

#[test]
fn test_unbalanced_brackets() {
    assert_eq!(eval("(1 + 2"), Err(CalcError::InvalidExpression));
    assert_eq!(eval("(1 + 2))"), Err(CalcError::InvalidExpression));
    assert_eq!(eval("(1 + [2)]"), Err(CalcError::InvalidExpression));
}

#[test]
fn test_other_bracket_families_group() {
    assert_eq!(eval("[15]"), Ok(big(15)));
    assert_eq!(eval("{2 + 3} * [4]"), Ok(big(20)));
}

#[test]
fn test_variable_round_trip() {
    let mut vars = VariableTable::new();
    assign("a=5", &mut vars).unwrap();
    assert_eq!(evaluate("a+3", &vars), Ok(big(8)));

    assign("b=a", &mut vars).unwrap();
    assign("a=100", &mut vars).unwrap();
    assert_eq!(evaluate("b", &vars), Ok(big(5)));
    assert_eq!(lookup("b", &vars), Ok(big(5)));
}

#[test]
fn test_unknown_variable_is_distinct() {
    assert_eq!(
        eval("x+1"),
        Err(CalcError::UnknownVariable {
            name: "x".to_string()
        })
    );
}

#[test]
fn test_large_magnitudes() {
    let expected: BigInt = "100000000000000000000".parse().unwrap();
    assert_eq!(eval("99999999999999999999 + 1"), Ok(expected));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(eval("10 / (5 - 5)"), Err(CalcError::ArithmeticError));
}

#[test]
fn test_session_survives_errors() {
    let mut calc = Calculator::new();
    assert_eq!(calc.process("n = 10"), Outcome::Silent);
    assert_eq!(calc.process("n / 0"), Outcome::Error(CalcError::ArithmeticError));
    assert_eq!(calc.process("n * n"), Outcome::Value(big(100)));
    assert_eq!(calc.variables().len(), 1);
}

#[test]
fn test_plain_mode_script() {
    let script = "\
a = 3
b = 4
a * a + b * b
c
x1 = 2
/help
/exit
1 + 1
";
    let mut calc = Calculator::new();
    let mut out = Vec::new();
    repl::run(&mut calc, Cursor::new(script), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "25");
    assert_eq!(lines[1], "Unknown variable");
    assert_eq!(lines[2], "Invalid identifier");
    assert!(lines[3].starts_with("The program evaluates"));
    assert_eq!(lines[4], "Bye!");
    assert_eq!(lines.len(), 5);
}

/// Reference evaluation of `a op1 b op2 c` with standard precedence and
/// truncating division, in checked i128 arithmetic.
fn reference(a: i64, op1: char, b: i64, op2: char, c: i64) -> Option<i128> {
    fn apply(x: i128, op: char, y: i128) -> Option<i128> {
        match op {
            '+' => x.checked_add(y),
            '-' => x.checked_sub(y),
            '*' => x.checked_mul(y),
            _ => {
                if y == 0 {
                    None
                } else {
                    Some(x / y)
                }
            }
        }
    }
    let (a, b, c) = (a as i128, b as i128, c as i128);
    let strong = |op: char| op == '*' || op == '/';
    if strong(op2) && !strong(op1) {
        apply(a, op1, apply(b, op2, c)?)
    } else {
        apply(apply(a, op1, b)?, op2, c)
    }
}

proptest! {
    #[test]
    fn prop_matches_reference_arithmetic(
        a in -1000i64..1000,
        b in -1000i64..1000,
        c in -1000i64..1000,
        op1 in prop::sample::select(vec!['+', '-', '*', '/']),
        op2 in prop::sample::select(vec!['+', '-', '*', '/']),
    ) {
        let expression = format!("{} {} {} {} {}", a, op1, b, op2, c);
        match reference(a, op1, b, op2, c) {
            Some(expected) => prop_assert_eq!(eval(&expression), Ok(BigInt::from(expected))),
            None => prop_assert_eq!(eval(&expression), Err(CalcError::ArithmeticError)),
        }
    }
}
