//! End to end tests: formulas in, solution lines out.

use alphamatic::{parse_formula, solve, solve_parallel, Alphamatic, BadInput, Equation};
use std::collections::HashSet;

fn lines(formula: &str) -> Vec<String> {
    let solver = Alphamatic::from_formula(formula).unwrap();
    solver.solve().lines().collect()
}

/// Check every rule against every solution.
fn assert_valid(eq: &Equation) {
    for solution in solve(eq) {
        let digits = solution.digits();
        let distinct = digits.iter().collect::<HashSet<_>>();
        assert_eq!(distinct.len(), digits.len(), "repeated digit in {}", solution);

        for term in eq.terms() {
            assert_ne!(digits[term.leading()], 0, "leading zero in {}", solution);
        }

        let [a, b, c] = solution.values();
        match eq.operator() {
            alphamatic::Operator::Add => assert_eq!(a + b, c),
            alphamatic::Operator::Sub => assert_eq!(a as i128 - b as i128, c as i128),
        }
    }
}

#[test]
fn test_eleve_lecon() {
    let found = lines("eleve+leçon = devoir");
    assert!(found.contains(&"69656+96078=165734".to_owned()));
    assert_valid(&parse_formula("eleve+leçon = devoir").unwrap());
}

#[test]
fn test_still_within() {
    assert_eq!(lines("still+within=limits"), vec!["97166+517013=614179"]);
}

#[test]
fn test_cyrillic() {
    let found = lines("Реши + Если = Силен").into_iter().collect::<HashSet<_>>();
    let expected = ["9675+6185=15860", "9382+3152=12534", "5782+7192=12974"]
        .into_iter()
        .map(|s| s.to_owned())
        .collect::<HashSet<_>>();
    assert_eq!(found, expected);
}

#[test]
fn test_small_search_space() {
    let eq = parse_formula("ABC+AB=CCB").unwrap();
    assert_eq!(eq.search_space(), 720);
    let mut solutions = solve(&eq);
    let count = solutions.by_ref().count();
    assert_eq!(solutions.examined(), 720);
    // 100A + 10B + C + 10A + B = 110C + B, so 110A + 10B = 109C: C must be a multiple of 10
    assert_eq!(count, 0);
}

#[test]
fn test_subtraction() {
    let eq = parse_formula("AB - C = BA").unwrap();
    assert_valid(&eq);
    let found = lines("AB - C = BA");
    assert!(found.contains(&"21-9=12".to_owned()));
    assert!(found.iter().all(|line| line.contains('-')));
}

#[test]
fn test_complete() {
    // Compare against trying every injective assignment directly.
    // A, B and C each lead a term, so none of them may be 0.
    let eq = parse_formula("AB+BA=CAC").unwrap();
    let mut expected = Vec::new();
    for a in 1..10u32 {
        for b in 1..10u32 {
            for c in 1..10u32 {
                if a == b || b == c || a == c {
                    continue;
                }
                let ab = 10 * a + b;
                let ba = 10 * b + a;
                let cac = 100 * c + 10 * a + c;
                if ab + ba == cac {
                    expected.push(vec![a as u8, b as u8, c as u8]);
                }
            }
        }
    }
    assert!(expected.contains(&vec![2, 9, 1]));
    let mut found = solve(&eq)
        .map(|solution| solution.digits().to_vec())
        .collect::<Vec<_>>();
    found.sort();
    assert_eq!(found, expected);
}

#[test]
fn test_deterministic() {
    let eq = parse_formula("two+two=four").unwrap();
    let first = solve(&eq).map(|s| s.to_string()).collect::<Vec<_>>();
    let second = solve(&eq).map(|s| s.to_string()).collect::<Vec<_>>();
    let parallel = solve_parallel(&eq)
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();
    assert!(!first.is_empty());
    assert!(first.contains(&"734+734=1468".to_owned()));
    assert_eq!(first, second);
    assert_eq!(first, parallel);
    assert_valid(&eq);
}

#[test]
fn test_bad_input() {
    assert_eq!(
        Alphamatic::from_formula("A+B+C=D").err(),
        Some(BadInput::MultipleOperators('+'))
    );
    assert_eq!(
        Alphamatic::from_formula("ABCDEFGHIJ+K=L").err(),
        Some(BadInput::TooManySymbols(12))
    );
    assert_eq!(
        Alphamatic::from_formula("ABCDEFGHIJ+K=KA").err(),
        Some(BadInput::TooManySymbols(11))
    );
    assert_eq!(
        Alphamatic::from_formula("A+B==C").err(),
        Some(BadInput::MalformedEquation)
    );
    assert_eq!(
        Alphamatic::from_formula("A*B=C").err(),
        Some(BadInput::MissingOperator)
    );
}

#[test]
fn test_no_solutions_is_empty() {
    let solver = Alphamatic::from_formula("A+A=A").unwrap();
    assert!(solver.solve().is_empty());
    assert_eq!(solver.solve().to_string(), "");
}
