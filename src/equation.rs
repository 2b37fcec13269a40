use crate::error::BadInput;
use bitvec::{bitvec, vec::BitVec};
use std::fmt;

/// Longest term whose value is guaranteed to fit in a `u128`.
pub const MAX_TERM_LEN: usize = 38;
/// There are only ten digits to go around.
pub const MAX_LETTERS: usize = 10;

/************************
 *     Operator         *
 ************************/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
        }
    }

    /// Does `a op b = result` hold? Subtraction is checked as `a = b + result` so that it never
    /// goes negative.
    pub fn holds(self, a: u128, b: u128, result: u128) -> bool {
        match self {
            Operator::Add => a.checked_add(b) == Some(result),
            Operator::Sub => b.checked_add(result) == Some(a),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/************************
 *     Letters          *
 ************************/

/// The distinct letters of an equation, in the order they first appear. A letter's position in
/// this list is its index everywhere else (in `Term`s and in assignments).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Letters(Vec<char>);

impl Letters {
    fn collect<'a>(words: impl IntoIterator<Item = &'a str>) -> Letters {
        let mut letters = Vec::new();
        for ch in words.into_iter().flat_map(|word| word.chars()) {
            if !letters.contains(&ch) {
                letters.push(ch);
            }
        }
        Letters(letters)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn index_of(&self, letter: char) -> Option<usize> {
        self.0.iter().position(|ch| *ch == letter)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

/************************
 *     Term             *
 ************************/

/// One of the three words of an equation, as a sequence of letter indices (most significant
/// digit first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    word: String,
    positions: Vec<usize>,
}

impl Term {
    fn new(word: &str, letters: &Letters) -> Term {
        let positions = word
            .chars()
            // Every char of every word went into `letters`
            .map(|ch| letters.index_of(ch).unwrap_or_default())
            .collect::<Vec<_>>();
        Term {
            word: word.to_owned(),
            positions,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// The letter index of the most significant digit.
    pub fn leading(&self) -> usize {
        self.positions[0]
    }

    /// The value of this term when letter `i` stands for `digits[i]`.
    pub fn evaluate(&self, digits: &[u8]) -> u128 {
        let mut value: u128 = 0;
        let mut ten_power: u128 = 1;
        for index in self.positions.iter().rev() {
            value += digits[*index] as u128 * ten_power;
            ten_power = ten_power.saturating_mul(10);
        }
        value
    }
}

/************************
 *     Equation         *
 ************************/

/// A validated alphametic `lhs op rhs = result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    letters: Letters,
    lhs: Term,
    rhs: Term,
    result: Term,
    operator: Operator,
    /// LetterIndex -> does some term start with it
    leading: BitVec,
}

fn check_word(word: &str) -> Result<(), BadInput> {
    if word.is_empty() || !word.chars().all(char::is_alphabetic) {
        return Err(BadInput::NonAlphabeticToken(word.to_owned()));
    }
    if word.chars().count() > MAX_TERM_LEN {
        return Err(BadInput::TermTooLong(word.to_owned()));
    }
    Ok(())
}

impl Equation {
    /// Build the equation `lhs operator rhs = result`. The words should already be normalized
    /// (see `parse::normalize`): letters are compared exactly.
    pub fn new(
        lhs: &str,
        operator: Operator,
        rhs: &str,
        result: &str,
    ) -> Result<Equation, BadInput> {
        for word in [lhs, rhs, result] {
            check_word(word)?;
        }

        let letters = Letters::collect([lhs, rhs, result]);
        if letters.len() > MAX_LETTERS {
            return Err(BadInput::TooManySymbols(letters.len()));
        }

        let lhs = Term::new(lhs, &letters);
        let rhs = Term::new(rhs, &letters);
        let result = Term::new(result, &letters);

        let mut leading = bitvec![0; letters.len()];
        for term in [&lhs, &rhs, &result] {
            leading.set(term.leading(), true);
        }

        Ok(Equation {
            letters,
            lhs,
            rhs,
            result,
            operator,
            leading,
        })
    }

    pub fn letters(&self) -> &Letters {
        &self.letters
    }

    pub fn num_letters(&self) -> usize {
        self.letters.len()
    }

    pub fn lhs(&self) -> &Term {
        &self.lhs
    }

    pub fn rhs(&self) -> &Term {
        &self.rhs
    }

    pub fn result(&self) -> &Term {
        &self.result
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn terms(&self) -> [&Term; 3] {
        [&self.lhs, &self.rhs, &self.result]
    }

    /// Whether the letter at `letter_index` is the first letter of some term (and so can't be 0).
    pub fn is_leading(&self, letter_index: usize) -> bool {
        self.leading[letter_index]
    }

    /// The number of candidate assignments an exhaustive search looks at: `10! / (10 - k)!`, for
    /// `k` letters.
    pub fn search_space(&self) -> u64 {
        let k = self.num_letters() as u64;
        (10 - k + 1..=10).product()
    }

    /// Check a complete assignment (letter `i` is `digits[i]`) against every rule: no leading
    /// zeros, and the arithmetic works out. The digits must be distinct.
    pub fn accepts(&self, digits: &[u8]) -> bool {
        if let Some(zero) = digits.iter().position(|digit| *digit == 0) {
            if self.is_leading(zero) {
                return false;
            }
        }
        let [lhs, rhs, result] = self.terms().map(|term| term.evaluate(digits));
        self.operator.holds(lhs, rhs, result)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}{}={}",
            self.lhs.word, self.operator, self.rhs.word, self.result.word
        )
    }
}

#[test]
fn test_equation_model() {
    let eq = Equation::new("AC", Operator::Add, "BC", "DE").unwrap();
    assert_eq!(eq.letters().as_slice(), &['A', 'C', 'B', 'D', 'E']);
    assert_eq!(eq.lhs().positions(), &[0, 1]);
    assert_eq!(eq.rhs().positions(), &[2, 1]);
    assert_eq!(eq.result().positions(), &[3, 4]);
    assert!(eq.is_leading(0));
    assert!(!eq.is_leading(1));
    assert!(eq.is_leading(2));
    assert!(eq.is_leading(3));
    assert!(!eq.is_leading(4));
    assert_eq!(eq.to_string(), "AC+BC=DE");
    assert_eq!(eq.search_space(), 10 * 9 * 8 * 7 * 6);

    let eq = Equation::new("ABC", Operator::Add, "AB", "CCB").unwrap();
    assert_eq!(eq.search_space(), 720);
}

#[test]
fn test_bad_equations() {
    assert_eq!(
        Equation::new("ABCDEFGHIJ", Operator::Add, "K", "L").unwrap_err(),
        BadInput::TooManySymbols(12)
    );
    assert_eq!(
        Equation::new("AB1", Operator::Sub, "B", "C").unwrap_err(),
        BadInput::NonAlphabeticToken("AB1".to_owned())
    );
    assert_eq!(
        Equation::new("A", Operator::Add, "", "C").unwrap_err(),
        BadInput::NonAlphabeticToken(String::new())
    );
    let long = "A".repeat(MAX_TERM_LEN + 1);
    assert_eq!(
        Equation::new(&long, Operator::Add, "A", "A").unwrap_err(),
        BadInput::TermTooLong(long)
    );
}

#[test]
fn test_evaluate() {
    let letters = Letters::collect(["ELEVE"]);
    let term = Term::new("ELEVE", &letters);
    // E = 6, L = 9, V = 5
    assert_eq!(term.evaluate(&[6, 9, 5]), 69656);
    assert_eq!(Term::new("L", &letters).evaluate(&[6, 9, 5]), 9);

    let long = Term::new(&"L".repeat(MAX_TERM_LEN), &letters);
    assert_eq!(long.evaluate(&[6, 9, 5]), 10u128.pow(MAX_TERM_LEN as u32) - 1);
}

#[test]
fn test_accepts() {
    let eq = Equation::new("A", Operator::Add, "B", "CA").unwrap();
    // 9 + 1 = 29? no
    assert!(!eq.accepts(&[9, 1, 2]));
    // A leads, so it can't be 0
    assert!(!eq.accepts(&[0, 1, 2]));

    let eq = Equation::new("AB", Operator::Sub, "C", "A").unwrap();
    // 15 - 4 = 1? no
    assert!(!eq.accepts(&[1, 5, 4]));
    let eq = Equation::new("AB", Operator::Sub, "C", "BA").unwrap();
    // 21 - 9 = 12
    assert!(eq.accepts(&[2, 1, 9]));
    // B leads the result, so it can't be 0
    assert!(!eq.accepts(&[2, 0, 9]));
}

#[test]
fn test_operator() {
    assert_eq!(Operator::Add.symbol(), '+');
    assert_eq!(Operator::Sub.to_string(), "-");
    assert!(Operator::Sub.holds(5, 3, 2));
    assert!(!Operator::Sub.holds(3, 5, 0));
    assert!(!Operator::Add.holds(u128::MAX, 1, 0));
}
