//! Conjunctive normal form.
//!
//! A formula enters the belief base only after normalization, so the rendering a user sees (and the rendering the graph builder scans) is the rendering of the normal form.
//!
//! Normalization is the usual pipeline: negation normal form with implications unfolded, then distribution of disjunction over conjunction.
//! No attempt is made to keep the result small --- belief bases are tiny, and the oracle removes tautological clauses on its own.

use std::collections::BTreeSet;

use crate::structures::{clause::CClause, formula::Formula, literal::CLiteral};

impl Formula {
    /// The formula in conjunctive normal form.
    pub fn cnf(&self) -> Formula {
        self.nnf(false).distributed()
    }

    /// The formula in negation normal form, negated when `negated` holds.
    ///
    /// Implications are unfolded along the way, so the result is built from literals, conjunction, and disjunction alone.
    fn nnf(&self, negated: bool) -> Formula {
        match self {
            Formula::Atom(atom) => match negated {
                true => Formula::not(Formula::Atom(*atom)),
                false => Formula::Atom(*atom),
            },

            Formula::Not(formula) => formula.nnf(!negated),

            Formula::And(left, right) => match negated {
                true => Formula::or(left.nnf(true), right.nnf(true)),
                false => Formula::and(left.nnf(false), right.nnf(false)),
            },

            Formula::Or(left, right) => match negated {
                true => Formula::and(left.nnf(true), right.nnf(true)),
                false => Formula::or(left.nnf(false), right.nnf(false)),
            },

            Formula::Implies(antecedent, consequent) => match negated {
                true => Formula::and(antecedent.nnf(false), consequent.nnf(true)),
                false => Formula::or(antecedent.nnf(true), consequent.nnf(false)),
            },
        }
    }

    /// Distribution of disjunction over conjunction, on a formula in negation normal form.
    fn distributed(self) -> Formula {
        match self {
            Formula::And(left, right) => {
                Formula::and(left.distributed(), right.distributed())
            }

            Formula::Or(left, right) => {
                Formula::distribute(left.distributed(), right.distributed())
            }

            literal => literal,
        }
    }

    /// The disjunction of two formulas in conjunctive normal form, as a formula in conjunctive normal form.
    fn distribute(left: Formula, right: Formula) -> Formula {
        match (left, right) {
            (Formula::And(a, b), right) => Formula::and(
                Formula::distribute(*a, right.clone()),
                Formula::distribute(*b, right),
            ),

            (left, Formula::And(a, b)) => Formula::and(
                Formula::distribute(left.clone(), *a),
                Formula::distribute(left, *b),
            ),

            (left, right) => Formula::or(left, right),
        }
    }

    /// The clausal form of the formula, via [cnf](Formula::cnf).
    ///
    /// Literals within a clause are deduplicated; tautological clauses are kept, as dropping them is the oracle's concern.
    pub fn clauses(&self) -> Vec<CClause> {
        let mut clauses = Vec::new();
        self.cnf().collect_clauses(&mut clauses);
        clauses
    }

    /// Walks the conjunctive spine of a formula in conjunctive normal form.
    fn collect_clauses(self, clauses: &mut Vec<CClause>) {
        match self {
            Formula::And(left, right) => {
                left.collect_clauses(clauses);
                right.collect_clauses(clauses);
            }

            disjunct => {
                let mut literals = BTreeSet::new();
                disjunct.collect_literals(&mut literals);
                clauses.push(literals.into_iter().collect());
            }
        }
    }

    /// Walks the disjunctive spine of a clause in conjunctive normal form.
    fn collect_literals(self, literals: &mut BTreeSet<CLiteral>) {
        match self {
            Formula::Or(left, right) => {
                left.collect_literals(literals);
                right.collect_literals(literals);
            }

            Formula::Atom(atom) => {
                literals.insert(CLiteral::new(atom, true));
            }

            Formula::Not(formula) => match *formula {
                Formula::Atom(atom) => {
                    literals.insert(CLiteral::new(atom, false));
                }

                // Normalization leaves negation only on atoms.
                _ => unreachable!("negation of a non-atom survived normalization"),
            },

            _ => unreachable!("implication or conjunction survived normalization"),
        }
    }
}
