//! A DPLL procedure over clausal forms.
//!
//! The textbook recursive form: remove tautological clauses, propagate unit clauses to a fixed point, and otherwise branch on the least unassigned atom, true first.
//! Branching is deterministic so repeated queries over the same base trace identically, and the formulas in play are small enough that conflict-driven machinery would be all overhead.

use std::collections::BTreeMap;

use crate::{
    misc::log::targets,
    reports::Report,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::CLiteral,
    },
};

/// The status of a clause on a partial valuation.
enum Status {
    /// Some literal of the clause is true.
    Satisfied,

    /// Every literal of the clause is false.
    Conflict,

    /// Exactly one literal is unvalued, the rest are false.
    Unit(CLiteral),

    /// At least two literals are unvalued; the least unassigned atom is noted for branching.
    Open(Atom),
}

/// Whether the conjunction of `clauses` is satisfiable.
pub(super) fn solve(mut clauses: Vec<CClause>) -> Report {
    clauses.retain(|clause| !clause.tautological());
    search(&clauses, BTreeMap::new())
}

fn status(clause: &CClause, valuation: &BTreeMap<Atom, bool>) -> Status {
    let mut unvalued: Vec<CLiteral> = Vec::new();

    for literal in clause {
        match valuation.get(&literal.atom()) {
            Some(value) if *value == literal.polarity() => return Status::Satisfied,
            Some(_) => {}
            None => unvalued.push(*literal),
        }
    }

    match unvalued[..] {
        [] => Status::Conflict,
        [literal] => Status::Unit(literal),
        // Within a clause literals are ordered by atom, so the first unvalued atom is least.
        [literal, ..] => Status::Open(literal.atom()),
    }
}

fn search(clauses: &[CClause], mut valuation: BTreeMap<Atom, bool>) -> Report {
    // Unit propagation to a fixed point, restarting the scan after each assignment.
    'propagation: loop {
        let mut branch_atom: Option<Atom> = None;

        for clause in clauses {
            match status(clause, &valuation) {
                Status::Satisfied => {}

                Status::Conflict => {
                    log::trace!(target: targets::ORACLE, "conflict: {}", clause.as_string());
                    return Report::Unsatisfiable;
                }

                Status::Unit(literal) => {
                    log::trace!(target: targets::ORACLE, "propagation: {literal}");
                    valuation.insert(literal.atom(), literal.polarity());
                    continue 'propagation;
                }

                Status::Open(atom) => {
                    branch_atom = match branch_atom {
                        Some(noted) => Some(std::cmp::min(noted, atom)),
                        None => Some(atom),
                    };
                }
            }
        }

        let Some(atom) = branch_atom else {
            // Every clause is satisfied.
            return Report::Satisfiable;
        };

        for polarity in [true, false] {
            log::trace!(target: targets::ORACLE, "decision: {}", CLiteral::new(atom, polarity));

            let mut extended = valuation.clone();
            extended.insert(atom, polarity);

            if search(clauses, extended) == Report::Satisfiable {
                return Report::Satisfiable;
            }
        }

        return Report::Unsatisfiable;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(literals: &[(Atom, bool)]) -> CClause {
        literals
            .iter()
            .map(|(atom, polarity)| CLiteral::new(*atom, *polarity))
            .collect()
    }

    #[test]
    fn no_clauses_are_satisfiable() {
        assert_eq!(solve(vec![]), Report::Satisfiable);
    }

    #[test]
    fn propagation_chain_to_conflict() {
        let clauses = vec![
            clause(&[('p', true)]),
            clause(&[('p', false), ('q', true)]),
            clause(&[('q', false)]),
        ];
        assert_eq!(solve(clauses), Report::Unsatisfiable);
    }

    #[test]
    fn branching_finds_a_valuation() {
        // (p | q) & (~p | q) & (p | ~q) is satisfied by p, q.
        let clauses = vec![
            clause(&[('p', true), ('q', true)]),
            clause(&[('p', false), ('q', true)]),
            clause(&[('p', true), ('q', false)]),
        ];
        assert_eq!(solve(clauses), Report::Satisfiable);
    }

    #[test]
    fn all_polarity_combinations_conflict() {
        let clauses = vec![
            clause(&[('p', true), ('q', true)]),
            clause(&[('p', false), ('q', true)]),
            clause(&[('p', true), ('q', false)]),
            clause(&[('p', false), ('q', false)]),
        ];
        assert_eq!(solve(clauses), Report::Unsatisfiable);
    }

    #[test]
    fn tautological_clauses_are_ignored() {
        let clauses = vec![clause(&[('p', true), ('p', false)])];
        assert_eq!(solve(clauses), Report::Satisfiable);
    }
}
