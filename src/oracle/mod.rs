//! The consistency oracle.
//!
//! Given a finite collection of formulas, the oracle decides whether their conjunction is satisfiable under classical two-valued semantics.
//! An empty collection is consistent --- the vacuous conjunction is true.
//!
//! The oracle is a pure function of its input: no state is kept between calls, and the answer is independent of the order of the formulas, as the clausal form of a conjunction is the union of the clausal forms of its conjuncts.
//! Satisfiability itself is decided by a small [DPLL procedure](dpll) over the clausal form, rebuilt from scratch on every call.
//! Belief bases are expected to stay small, so nothing incremental is attempted.

mod dpll;

use crate::{
    misc::log::targets,
    reports::Report,
    structures::formula::Formula,
};

/// Whether the conjunction of `beliefs` is satisfiable.
pub fn consistent(beliefs: &[Formula]) -> bool {
    // The vacuous conjunction is satisfiable.
    let Some(conjunction) = Formula::conjoin(beliefs.iter().cloned()) else {
        return true;
    };

    let report = dpll::solve(conjunction.clauses());
    log::debug!(target: targets::ORACLE, "{} beliefs: {report}", beliefs.len());

    report == Report::Satisfiable
}
