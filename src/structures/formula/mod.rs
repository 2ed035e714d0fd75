//! Formulas of propositional logic, the things a belief base holds.
//!
//! A formula is a closed variant over atoms, negation, conjunction, disjunction, and implication.
//! Formulas are immutable values: the belief base and the graph builder share them read-only, and every operation which appears to change a formula builds a fresh one.
//!
//! Equality of formulas is structural, and the [Display] rendering is canonical in the sense that rendering is fixed by structure.
//! The rendering uses the surface syntax accepted by [the parser](crate::parse): `~` for negation, `&`, `|`, and `>>` for the binary connectives, with minimal parenthesization.
//!
//! ```rust
//! # use agm_belief::structures::formula::Formula;
//! let p_implies_q = Formula::implies(Formula::Atom('p'), Formula::Atom('q'));
//!
//! assert_eq!(p_implies_q.to_string(), "p >> q");
//! assert_eq!(p_implies_q.cnf().to_string(), "~p | q");
//! ```

mod cnf;

use std::collections::BTreeSet;

use crate::structures::atom::Atom;

/// A formula of propositional logic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    /// An atom.
    Atom(Atom),

    /// The negation of a formula.
    Not(Box<Formula>),

    /// The conjunction of two formulas.
    And(Box<Formula>, Box<Formula>),

    /// The disjunction of two formulas.
    Or(Box<Formula>, Box<Formula>),

    /// A material implication.
    Implies(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// The negation of `formula`.
    pub fn not(formula: Formula) -> Self {
        Formula::Not(Box::new(formula))
    }

    /// The conjunction of `left` and `right`.
    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    /// The disjunction of `left` and `right`.
    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    /// The implication from `antecedent` to `consequent`.
    pub fn implies(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Implies(Box::new(antecedent), Box::new(consequent))
    }

    /// The conjunction of `formulas`, or none if `formulas` is empty.
    ///
    /// The conjunction of a single formula is that formula.
    pub fn conjoin(formulas: impl IntoIterator<Item = Formula>) -> Option<Formula> {
        formulas.into_iter().reduce(Formula::and)
    }

    /// The set of atoms occurring in the formula.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        let mut atoms = BTreeSet::new();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms(&self, atoms: &mut BTreeSet<Atom>) {
        match self {
            Formula::Atom(atom) => {
                atoms.insert(*atom);
            }

            Formula::Not(formula) => formula.collect_atoms(atoms),

            Formula::And(left, right)
            | Formula::Or(left, right)
            | Formula::Implies(left, right) => {
                left.collect_atoms(atoms);
                right.collect_atoms(atoms);
            }
        }
    }

    /// Binding strength of the outermost connective, used to place parentheses when rendering.
    fn precedence(&self) -> u8 {
        match self {
            Formula::Implies(_, _) => 1,
            Formula::Or(_, _) => 2,
            Formula::And(_, _) => 3,
            Formula::Not(_) => 4,
            Formula::Atom(_) => 5,
        }
    }

    fn fmt_child(
        child: &Formula,
        parenthesize: bool,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match parenthesize {
            true => write!(f, "({child})"),
            false => write!(f, "{child}"),
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Atom(atom) => write!(f, "{atom}"),

            Formula::Not(formula) => {
                write!(f, "~")?;
                Formula::fmt_child(formula, formula.precedence() < self.precedence(), f)
            }

            Formula::And(left, right) | Formula::Or(left, right) => {
                let connective = match self {
                    Formula::And(_, _) => "&",
                    _ => "|",
                };
                Formula::fmt_child(left, left.precedence() < self.precedence(), f)?;
                write!(f, " {connective} ")?;
                Formula::fmt_child(right, right.precedence() < self.precedence(), f)
            }

            // Implication is rendered right-associative, so a nested antecedent is parenthesized.
            Formula::Implies(antecedent, consequent) => {
                Formula::fmt_child(
                    antecedent,
                    antecedent.precedence() <= self.precedence(),
                    f,
                )?;
                write!(f, " >> ")?;
                Formula::fmt_child(consequent, consequent.precedence() < self.precedence(), f)
            }
        }
    }
}
