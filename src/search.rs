use crate::equation::Equation;
use rayon::prelude::*;
use std::fmt;

/************************
 *     Combinations     *
 ************************/

/// Every `k`-element subset of `0..n`, each sorted, in lexicographic order.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: u8,
    indices: Vec<u8>,
    done: bool,
}

impl Combinations {
    pub fn new(n: u8, k: usize) -> Combinations {
        Combinations {
            n,
            indices: (0..k as u8).collect(),
            done: k > n as usize,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        if self.done {
            return None;
        }
        let subset = self.indices.clone();

        // Advance: find the rightmost index that can still move right, move it, and pack
        // everything after it up against it.
        let k = self.indices.len();
        match (0..k).rev().find(|&i| self.indices[i] != i as u8 + self.n - k as u8) {
            None => self.done = true,
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
        }
        Some(subset)
    }
}

/************************
 *     Permutations     *
 ************************/

/// Every ordering of a set of distinct digits, in lexicographic order.
#[derive(Debug, Clone)]
pub struct Permutations {
    digits: Vec<u8>,
    first: bool,
}

impl Permutations {
    pub fn new(mut digits: Vec<u8>) -> Permutations {
        digits.sort_unstable();
        Permutations {
            digits,
            first: true,
        }
    }

    /// Step to the next permutation in place. Returns false after the last one.
    fn advance(&mut self) -> bool {
        let digits = &mut self.digits;
        let n = digits.len();
        let Some(i) = (1..n).rev().find(|&i| digits[i - 1] < digits[i]) else {
            return false;
        };
        let j = (i..n).rev().find(|&j| digits[j] > digits[i - 1]).unwrap_or(i);
        digits.swap(i - 1, j);
        digits[i..].reverse();
        true
    }

    fn next_ref(&mut self) -> Option<&[u8]> {
        if self.first {
            self.first = false;
        } else if !self.advance() {
            return None;
        }
        Some(&self.digits)
    }
}

impl Iterator for Permutations {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        self.next_ref().map(|digits| digits.to_vec())
    }
}

/************************
 *     Solution         *
 ************************/

/// A digit for every letter: `digits[i]` is the digit of letter `i` of the equation.
pub type Assignment = Vec<u8>;

/// An assignment that satisfies an equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<'e> {
    equation: &'e Equation,
    digits: Assignment,
}

impl<'e> Solution<'e> {
    pub fn equation(&self) -> &'e Equation {
        self.equation
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// The digit standing for `letter`, if it occurs in the equation.
    pub fn digit(&self, letter: char) -> Option<u8> {
        let index = self.equation.letters().index_of(letter)?;
        Some(self.digits[index])
    }

    /// The values of the two operands and the result.
    pub fn values(&self) -> [u128; 3] {
        self.equation
            .terms()
            .map(|term| term.evaluate(&self.digits))
    }

    /// Letters paired with their digits, in letter order.
    pub fn pairs(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.equation
            .letters()
            .iter()
            .zip(self.digits.iter().copied())
    }

    /// One `letter = digit` line per letter.
    pub fn letter_table(&self) -> String {
        let mut table = format!("{}\n", self);
        for (letter, digit) in self.pairs() {
            table.push_str(&format!("{} = {}\n", letter, digit));
        }
        table
    }
}

impl fmt::Display for Solution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [lhs, rhs, result] = self.values();
        write!(
            f,
            "{}{}{}={}",
            lhs,
            self.equation.operator(),
            rhs,
            result
        )
    }
}

/************************
 *     Search           *
 ************************/

/// Every accepted assignment of digits to letters, found by trying each set of `k` digits in
/// each order.
pub struct Solutions<'e> {
    equation: &'e Equation,
    subsets: Combinations,
    perms: Option<Permutations>,
    examined: u64,
}

impl<'e> Solutions<'e> {
    fn new(equation: &'e Equation) -> Solutions<'e> {
        Solutions {
            equation,
            subsets: Combinations::new(10, equation.num_letters()),
            perms: None,
            examined: 0,
        }
    }

    /// How many candidate assignments have been looked at so far.
    pub fn examined(&self) -> u64 {
        self.examined
    }

    pub fn equation(&self) -> &'e Equation {
        self.equation
    }
}

impl<'e> Iterator for Solutions<'e> {
    type Item = Solution<'e>;

    fn next(&mut self) -> Option<Solution<'e>> {
        loop {
            if let Some(perms) = &mut self.perms {
                while let Some(digits) = perms.next_ref() {
                    self.examined += 1;
                    if self.equation.accepts(digits) {
                        return Some(Solution {
                            equation: self.equation,
                            digits: digits.to_vec(),
                        });
                    }
                }
            }
            self.perms = Some(Permutations::new(self.subsets.next()?));
        }
    }
}

/// Lazily find every solution, in order of digit subset and then of permutation within it.
/// An equation without letters has no solutions.
pub fn solve(equation: &Equation) -> Solutions<'_> {
    let mut solutions = Solutions::new(equation);
    if equation.num_letters() == 0 {
        solutions.subsets.done = true;
    }
    solutions
}

/// All solutions of one digit subset.
fn solve_subset(equation: &Equation, subset: Vec<u8>) -> Vec<Solution<'_>> {
    let mut perms = Permutations::new(subset);
    let mut solutions = Vec::new();
    while let Some(digits) = perms.next_ref() {
        if equation.accepts(digits) {
            solutions.push(Solution {
                equation,
                digits: digits.to_vec(),
            });
        }
    }
    solutions
}

/// Like `solve(equation).collect()`, but with the digit subsets split across threads. The
/// solutions come out in the same order.
pub fn solve_parallel(equation: &Equation) -> Vec<Solution<'_>> {
    if equation.num_letters() == 0 {
        return Vec::new();
    }
    let subsets = Combinations::new(10, equation.num_letters()).collect::<Vec<_>>();
    subsets
        .into_par_iter()
        .map(|subset| solve_subset(equation, subset))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

#[test]
fn test_combinations() {
    let all = Combinations::new(4, 2).collect::<Vec<_>>();
    assert_eq!(
        all,
        vec![
            vec![0, 1],
            vec![0, 2],
            vec![0, 3],
            vec![1, 2],
            vec![1, 3],
            vec![2, 3]
        ]
    );
    assert_eq!(Combinations::new(10, 3).count(), 120);
    assert_eq!(Combinations::new(10, 10).count(), 1);
    assert_eq!(Combinations::new(10, 0).collect::<Vec<_>>(), vec![vec![]]);
    assert_eq!(Combinations::new(3, 4).count(), 0);
}

#[test]
fn test_permutations() {
    let all = Permutations::new(vec![5, 1, 3]).collect::<Vec<_>>();
    assert_eq!(
        all,
        vec![
            vec![1, 3, 5],
            vec![1, 5, 3],
            vec![3, 1, 5],
            vec![3, 5, 1],
            vec![5, 1, 3],
            vec![5, 3, 1]
        ]
    );
    assert_eq!(Permutations::new(vec![7]).collect::<Vec<_>>(), vec![vec![7]]);
    assert_eq!(Permutations::new((0..6).collect()).count(), 720);
}

#[test]
fn test_solve_order_and_count() {
    let eq: Equation = "A+B=C".parse().unwrap();
    let mut solutions = solve(&eq);
    let lines = solutions.by_ref().map(|s| s.to_string()).collect::<Vec<_>>();
    assert_eq!(solutions.examined(), eq.search_space());
    assert_eq!(solutions.examined(), 720);
    // Subsets in order, and within a subset, permutations in order
    assert_eq!(&lines[..4], &["1+2=3", "2+1=3", "1+3=4", "3+1=4"]);
    // Ordered pairs of distinct nonzero digits summing to at most 9
    assert_eq!(lines.len(), 32);
}

#[test]
fn test_single_letter_zero() {
    // A = 0 would make "A" a (one digit) number with a leading zero
    let eq: Equation = "AB-B=A".parse().unwrap();
    let lines = solve(&eq).map(|s| s.to_string()).collect::<Vec<_>>();
    assert!(lines.is_empty());
}

#[test]
fn test_solution_accessors() {
    let eq: Equation = "AB-C=BA".parse().unwrap();
    let solutions = solve(&eq).collect::<Vec<_>>();
    assert!(solutions.iter().any(|s| s.to_string() == "21-9=12"));
    let solution = solutions
        .iter()
        .find(|s| s.to_string() == "21-9=12")
        .unwrap();
    assert_eq!(solution.digit('A'), Some(2));
    assert_eq!(solution.digit('B'), Some(1));
    assert_eq!(solution.digit('C'), Some(9));
    assert_eq!(solution.digit('Z'), None);
    assert_eq!(solution.values(), [21, 9, 12]);
    assert_eq!(solution.letter_table(), "21-9=12\nA = 2\nB = 1\nC = 9\n");
}

#[test]
fn test_parallel_matches_sequential() {
    let eq: Equation = "SEND+MORE=MONEY".parse().unwrap();
    let sequential = solve(&eq).collect::<Vec<_>>();
    let parallel = solve_parallel(&eq);
    assert_eq!(sequential, parallel);
    assert_eq!(
        sequential.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        vec!["9567+1085=10652"]
    );
}
