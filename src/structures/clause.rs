//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//! Clauses are produced by [clausal normalization](crate::structures::formula::Formula::clauses) and consumed by the [oracle](crate::oracle).

use crate::structures::literal::CLiteral;

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    fn as_string(&self) -> String;

    /// Whether the clause contains an atom in both polarities, and so is true on every valuation.
    fn tautological(&self) -> bool;
}

impl Clause for CClause {
    fn as_string(&self) -> String {
        self.iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn tautological(&self) -> bool {
        self.iter()
            .any(|literal| self.contains(&literal.negate()))
    }
}
