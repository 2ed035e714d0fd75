//! Error types used in the library.
//!
//! Every error here is user-correctable and is reported to the caller before the belief base is touched: a statement which fails to parse, or a statement whose formula is unsatisfiable on its own under the [Reject](crate::config::UnsatisfiablePolicy::Reject) policy.
//! Errors internal to the core --- say, a repair loop which fails to terminate --- are defects rather than conditions, and are guarded by assertions instead of being modelled here.

/// A general error, wrapping the specific errors of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    Revision(RevisionError),
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some formula was required.
    Empty,

    /// A character with no reading at the given (char, not byte) position.
    UnexpectedCharacter(usize, char),

    /// The string ended where a formula or connective was still expected.
    UnexpectedEnd,

    /// A complete formula was read, though input remains from the given position.
    TrailingInput(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors during revision.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RevisionError {
    /// The formula to revise with is unsatisfiable on its own, and the configured policy is to reject such formulas.
    Unsatisfiable,
}

impl From<RevisionError> for ErrorKind {
    fn from(e: RevisionError) -> Self {
        ErrorKind::Revision(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "an empty string is not a formula"),
            Self::UnexpectedCharacter(position, character) => {
                write!(f, "unexpected character '{character}' at position {position}")
            }
            Self::UnexpectedEnd => write!(f, "the formula is incomplete"),
            Self::TrailingInput(position) => {
                write!(f, "unexpected trailing input from position {position}")
            }
        }
    }
}

impl std::fmt::Display for RevisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsatisfiable => {
                write!(f, "the formula is unsatisfiable on its own and was rejected")
            }
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Revision(e) => write!(f, "{e}"),
        }
    }
}
