/// Everything that can be wrong with a formula. All of these are found before any searching
/// starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BadInput {
    #[error("formula must contain exactly one '=' sign")]
    MalformedEquation,

    #[error("formula contains more than one '{0}' sign")]
    MultipleOperators(char),

    #[error("formula contains neither '+' nor '-' sign")]
    MissingOperator,

    #[error("arguments and result must contain letters only (found '{0}')")]
    NonAlphabeticToken(String),

    #[error("term '{0}' is too long (at most {max} letters)", max = crate::equation::MAX_TERM_LEN)]
    TermTooLong(String),

    #[error("formula must contain at most 10 different letters (found {0})")]
    TooManySymbols(usize),
}

#[test]
fn test_messages() {
    assert_eq!(
        BadInput::MultipleOperators('+').to_string(),
        "formula contains more than one '+' sign"
    );
    assert_eq!(
        BadInput::TooManySymbols(11).to_string(),
        "formula must contain at most 10 different letters (found 11)"
    );
    assert_eq!(
        BadInput::TermTooLong("AB".to_owned()).to_string(),
        "term 'AB' is too long (at most 38 letters)"
    );
}
