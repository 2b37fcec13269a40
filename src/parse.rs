//! Reading a free-form formula like `"eleve + leçon = devoir"` into an `Equation`.

use crate::equation::{Equation, Operator};
use crate::error::BadInput;
use std::str::FromStr;

/// Formulas are case insensitive and may contain any amount of whitespace.
pub fn normalize(formula: &str) -> String {
    formula
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Split the left hand side of a formula on its operator.
fn split_operator(left: &str) -> Result<(&str, Operator, &str), BadInput> {
    for operator in [Operator::Add, Operator::Sub] {
        let args = left.split(operator.symbol()).collect::<Vec<_>>();
        match args.as_slice() {
            [_] => continue,
            [lhs, rhs] => return Ok((*lhs, operator, *rhs)),
            _ => return Err(BadInput::MultipleOperators(operator.symbol())),
        }
    }
    Err(BadInput::MissingOperator)
}

/// Parse a formula of the form `A+B=C` or `A-B=C`.
///
/// A `+` takes priority: `A+B-C=D` splits into `A` and `B-C`, and then fails because `B-C` isn't
/// a word.
pub fn parse_formula(formula: &str) -> Result<Equation, BadInput> {
    let formula = normalize(formula);
    let sides = formula.split('=').collect::<Vec<_>>();
    let [left, result] = sides.as_slice() else {
        return Err(BadInput::MalformedEquation);
    };
    let (lhs, operator, rhs) = split_operator(left)?;
    Equation::new(lhs, operator, rhs, *result)
}

impl FromStr for Equation {
    type Err = BadInput;

    fn from_str(formula: &str) -> Result<Equation, BadInput> {
        parse_formula(formula)
    }
}

#[test]
fn test_normalize() {
    assert_eq!(normalize(" eleve + leçon =  devoir\n"), "ELEVE+LEÇON=DEVOIR");
    assert_eq!(normalize("Реши + Если = Силен"), "РЕШИ+ЕСЛИ=СИЛЕН");
}

#[test]
fn test_parse_formula() {
    let eq = parse_formula("send + more = money").unwrap();
    assert_eq!(eq.to_string(), "SEND+MORE=MONEY");
    assert_eq!(eq.operator(), Operator::Add);

    let eq: Equation = "abc-de=fg".parse().unwrap();
    assert_eq!(eq.operator(), Operator::Sub);
    assert_eq!(eq.lhs().word(), "ABC");
    assert_eq!(eq.rhs().word(), "DE");
    assert_eq!(eq.result().word(), "FG");
}

#[test]
fn test_parse_errors() {
    use BadInput::*;

    assert_eq!(parse_formula("A+B").unwrap_err(), MalformedEquation);
    assert_eq!(parse_formula("A+B=C=D").unwrap_err(), MalformedEquation);
    assert_eq!(parse_formula("A+B+C=D").unwrap_err(), MultipleOperators('+'));
    assert_eq!(parse_formula("A-B-C=D").unwrap_err(), MultipleOperators('-'));
    assert_eq!(parse_formula("AB=C").unwrap_err(), MissingOperator);
    assert_eq!(
        parse_formula("A+B-C=D").unwrap_err(),
        NonAlphabeticToken("B-C".to_owned())
    );
    assert_eq!(
        parse_formula("A+B2=C").unwrap_err(),
        NonAlphabeticToken("B2".to_owned())
    );
    assert_eq!(parse_formula("+B=C").unwrap_err(), NonAlphabeticToken(String::new()));
    assert_eq!(
        parse_formula("ABCDEFGHIJ+K=AK").unwrap_err(),
        TooManySymbols(11)
    );
}
