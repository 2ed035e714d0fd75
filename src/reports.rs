//! Reports on the status of a belief base.

/// A report on the satisfiability of a collection of formulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    /// The conjunction of the formulas is satisfiable.
    Satisfiable,

    /// The conjunction of the formulas is unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}
