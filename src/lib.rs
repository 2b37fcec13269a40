//! Alphametics are puzzles where each letter of an equation stands for a different digit:
//!
//! ```text
//!    SEND
//!  + MORE
//!  ------
//!   MONEY
//! ```
//!
//! Alph-a-matic finds every way to fill in the digits, under the usual rules: different letters
//! get different digits, and no number starts with a zero (not even a one digit number). It handles
//! exactly one `+` or `-`, and at most 10 different letters. Letters can be any alphabetic
//! character, not just `A-Z`.
//!
//! It does this by brute force: it tries every set of digits, in every order. That's at most
//! 10! = 3628800 candidates, which is fast enough.
//!
//! Alph-a-matic can be used either as an application, or as a library.
//!
//! ## Solving a puzzle
//!
//! Give it a formula. Case and whitespace don't matter:
//!
//! ```
//! use alphamatic::Alphamatic;
//!
//! let solver = Alphamatic::from_formula("send + more = money")?;
//! let solutions = solver.solve();
//! assert_eq!(solutions.to_string(), "9567+1085=10652\n");
//! # Ok::<(), alphamatic::BadInput>(())
//! ```
//!
//! Bad formulas are rejected before any searching happens:
//!
//! ```
//! use alphamatic::{Alphamatic, BadInput};
//!
//! let err = Alphamatic::from_formula("a+b+c=d").unwrap_err();
//! assert_eq!(err, BadInput::MultipleOperators('+'));
//! println!("{}", err); // formula contains more than one '+' sign
//! ```
//!
//! ## Going lazy
//!
//! `solve()` collects every solution. To look at them one at a time instead, or to stop early,
//! use `solutions()`. Each `Solution` knows the digit of every letter:
//!
//! ```
//! use alphamatic::Alphamatic;
//!
//! let solver = Alphamatic::from_formula("still+within=limits")?;
//! let first = solver.solutions().next().unwrap();
//! assert_eq!(first.to_string(), "97166+517013=614179");
//! assert_eq!(first.digit('W'), Some(5));
//! # Ok::<(), alphamatic::BadInput>(())
//! ```
//!
//! Solutions always come out in the same order: digit subsets in lexicographic order, and within
//! each subset, digit orders in lexicographic order. Digit `i` of an ordering goes to the `i`th
//! distinct letter of the formula, counting letters in the order they first appear.

mod display;
mod equation;
mod error;
pub mod logging;
mod parse;
mod search;

pub use display::{SolutionSet, DEFAULT_WIDTH};
pub use equation::{Equation, Letters, Operator, Term, MAX_LETTERS, MAX_TERM_LEN};
pub use error::BadInput;
pub use parse::{normalize, parse_formula};
pub use search::{
    solve, solve_parallel, Assignment, Combinations, Permutations, Solution, Solutions,
};

use std::time::{Duration, Instant};

/************************
 *     Solver           *
 ************************/

#[derive(Debug)]
pub struct Alphamatic {
    equation: Equation,
    config: Config,
}

/// What a solve did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Candidate assignments looked at
    pub examined: u64,
    /// Solutions returned
    pub found: usize,
    pub elapsed: Duration,
}

impl Alphamatic {
    pub fn new(equation: Equation) -> Alphamatic {
        Alphamatic {
            equation,
            config: Config::default(),
        }
    }

    /// Parse a formula like `"eleve + leçon = devoir"` and make a solver for it.
    pub fn from_formula(formula: &str) -> Result<Alphamatic, BadInput> {
        Ok(Alphamatic::new(parse_formula(formula)?))
    }

    pub fn config(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn equation(&self) -> &Equation {
        &self.equation
    }

    /// Lazily produce solutions. Ignores `config`.
    pub fn solutions(&self) -> Solutions<'_> {
        solve(&self.equation)
    }

    pub fn solve(&self) -> SolutionSet<'_> {
        self.solve_with_stats().0
    }

    pub fn solve_with_stats(&self) -> (SolutionSet<'_>, Stats) {
        let start_time = Instant::now();

        if self.config.log_steps {
            log::info!(
                "Solving {} for letters {}",
                self.equation,
                self.equation.letters().iter().collect::<String>()
            );
            log::info!("Search space = {}", self.equation.search_space());
        }

        let (solutions, examined) = if self.config.parallel {
            let mut solutions = solve_parallel(&self.equation);
            if let Some(limit) = self.config.limit {
                solutions.truncate(limit);
            }
            (solutions, self.equation.search_space())
        } else {
            let mut iter = solve(&self.equation);
            let solutions: Vec<_> = match self.config.limit {
                Some(limit) => iter.by_ref().take(limit).collect(),
                None => iter.by_ref().collect(),
            };
            (solutions, iter.examined())
        };

        let stats = Stats {
            examined,
            found: solutions.len(),
            elapsed: start_time.elapsed(),
        };
        if self.config.log_steps {
            log::info!(
                "Examined {} candidates, found {} solutions",
                stats.examined,
                stats.found
            );
        }
        if self.config.log_elapsed {
            log::info!("Total time: {}ms", stats.elapsed.as_millis());
        }

        (SolutionSet(solutions), stats)
    }
}

/************************
 *     Config           *
 ************************/

// When running `main`, this is loaded from command line args.
// See `Config` in `main.rs`.
/// Configuration options. Set these using `Alphamatic.config()`.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Log the equation and search space before solving, and a summary after
    pub log_steps: bool,
    /// Log how long solving took
    pub log_elapsed: bool,
    /// Split the search across threads
    pub parallel: bool,
    /// Stop after this many solutions
    pub limit: Option<usize>,
}

#[test]
fn test_bad_formula() {
    let err = Alphamatic::from_formula("a+b+c=d").unwrap_err();
    assert_eq!(err, BadInput::MultipleOperators('+'));
    assert!(format!("{:?}", Alphamatic::from_formula("a+b=c")).starts_with("Ok(Alphamatic"));
}

#[test]
fn test_solver_config() {
    let mut solver = Alphamatic::from_formula("A+B=C").unwrap();
    let (all, stats) = solver.solve_with_stats();
    assert_eq!(all.len(), 32);
    assert_eq!(stats.found, 32);
    assert_eq!(stats.examined, 720);

    solver.config().limit = Some(2);
    let (some, stats) = solver.solve_with_stats();
    assert_eq!(some.to_string(), "1+2=3\n2+1=3\n");
    // Every subset with a 0 in it comes first, then the second solution is the third ordering
    // of {1, 2, 3}
    assert_eq!(stats.examined, 36 * 6 + 3);

    solver.config().parallel = true;
    let (some, stats) = solver.solve_with_stats();
    assert_eq!(some.to_string(), "1+2=3\n2+1=3\n");
    assert_eq!(stats.examined, 720);
}
