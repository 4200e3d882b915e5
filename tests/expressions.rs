use tally::{error::ParseError, evaluate, util::num::MAX_SAFE_U64_INT};

fn assert_evaluates(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(
            value, expected,
            "Expression '{src}' evaluated to {value}, expected {expected}"
        ),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_fails(src: &str) {
    if evaluate(src).is_ok() {
        panic!("Expression '{src}' succeeded but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_evaluates("1+2", 3.0);
    assert_evaluates("8-5", 3.0);
    assert_evaluates("7*9", 63.0);
    assert_evaluates("10/2", 5.0);
    assert_evaluates("42", 42.0);
}

#[test]
fn precedence() {
    assert_evaluates("1+2*3", 7.0);
    assert_evaluates("(1+2)*3", 9.0);
    assert_evaluates("2*3+4*5", 26.0);
    assert_evaluates("10-4/2", 8.0);
    assert_evaluates("(10-4)/2", 3.0);
}

#[test]
fn left_associativity() {
    assert_evaluates("10/2/5", 1.0);
    assert_evaluates("8-2-3", 3.0);
    assert_evaluates("100/10*2", 20.0);
    assert_evaluates("1-2+3", 2.0);
}

#[test]
fn unary_sign_chains() {
    assert_evaluates("-5", -5.0);
    assert_evaluates("--5", 5.0);
    assert_evaluates("---5", -5.0);
    assert_evaluates("+5", 5.0);
    assert_evaluates("-+-5", 5.0);
    assert_evaluates("+-+5", -5.0);
    assert_evaluates("-(1+1+1)--1", -2.0);
    assert_evaluates("2*-3", -6.0);
}

#[test]
fn parentheses_and_nesting() {
    assert_evaluates("(((5)))", 5.0);
    assert_evaluates("2*(3+(4-1))", 12.0);
    assert_evaluates("((((((((((1))))))))))", 1.0);
    assert_evaluates("(1)+(2)", 3.0);
}

#[test]
fn whitespace_insensitivity() {
    assert_evaluates("  3  +   4 ", 7.0);
    assert_evaluates(" ( 1 + 2 ) * 3 ", 9.0);
    assert_evaluates("\t7\n", 7.0);
    assert_evaluates("1+1   ", 2.0);
    // Whitespace is transparent even inside a digit run.
    assert_evaluates("1 2", 12.0);
}

#[test]
fn empty_input_evaluates_to_zero() {
    assert_evaluates("", 0.0);
    assert_evaluates("   ", 0.0);
    assert_evaluates("\t \n", 0.0);
}

#[test]
fn division_follows_floating_point_semantics() {
    assert!(evaluate("1/0").unwrap().is_infinite());
    assert!(evaluate("-1/0").unwrap() < 0.0);
    assert!(evaluate("0/0").unwrap().is_nan());
}

#[test]
fn evaluation_is_idempotent() {
    let first = evaluate("-(1+1+1)--1").unwrap();
    let second = evaluate("-(1+1+1)--1").unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_closing_paren() {
    assert!(matches!(
        evaluate("(1+1"),
        Err(ParseError::ExpectedChar { expected: ')' })
    ));
    assert!(matches!(
        evaluate("2*(3+(4-1)"),
        Err(ParseError::ExpectedChar { expected: ')' })
    ));
}

#[test]
fn trailing_operator() {
    assert!(matches!(
        evaluate("1+"),
        Err(ParseError::UnexpectedEndOfInput { .. })
    ));
    assert!(matches!(
        evaluate("2*3/"),
        Err(ParseError::UnexpectedEndOfInput { .. })
    ));
    assert!(matches!(
        evaluate("-"),
        Err(ParseError::UnexpectedEndOfInput { .. })
    ));
}

#[test]
fn unexpected_characters() {
    assert!(matches!(
        evaluate("a+1"),
        Err(ParseError::UnexpectedChar { found: 'a' })
    ));
    assert!(matches!(
        evaluate("*3"),
        Err(ParseError::UnexpectedChar { found: '*' })
    ));
    assert!(matches!(
        evaluate("1+$"),
        Err(ParseError::UnexpectedChar { found: '$' })
    ));
    assert_fails("1..2");
}

#[test]
fn trailing_input() {
    assert!(matches!(
        evaluate("1)"),
        Err(ParseError::ExpectedEnd { position: 1 })
    ));
    assert!(matches!(
        evaluate("(1+2))"),
        Err(ParseError::ExpectedEnd { .. })
    ));
}

#[test]
fn literal_range() {
    assert_evaluates("9007199254740991", MAX_SAFE_U64_INT as f64);
    assert!(matches!(
        evaluate("9007199254740992"),
        Err(ParseError::LiteralTooLarge { .. })
    ));
    // Does not fit in a u64 at all.
    assert!(matches!(
        evaluate("999999999999999999999999999999"),
        Err(ParseError::LiteralTooLarge { .. })
    ));
}
