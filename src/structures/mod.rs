//! Structures which make up a belief base: atoms, literals, clauses, and formulas.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
