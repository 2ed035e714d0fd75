//! The belief base --- an ordered collection of formulas, revised and contracted in the AGM style.
//!
//! Order is entrenchment: the belief at index 0 is the least entrenched and the first candidate for eviction when [revision](BeliefBase::revise) must restore consistency.
//! Entrenchment is approximated by insertion order alone --- a deliberate simplification, degrees of entrenchment are not modelled.
//!
//! After every public operation the conjunction of the held beliefs is satisfiable, or the base is empty.
//! The one way around this is [from_formulas](BeliefBase::from_formulas), which exists so an arbitrary base can be set up directly.
//!
//! ```rust
//! # use agm_belief::base::{BeliefBase, ReviseOk};
//! # use agm_belief::structures::formula::Formula;
//! let mut base = BeliefBase::default();
//!
//! base.revise(Formula::Atom('A'));
//! let outcome = base.revise(Formula::not(Formula::Atom('A')));
//!
//! assert_eq!(outcome, ReviseOk::Evicted(vec![Formula::Atom('A')]));
//! assert_eq!(base.beliefs(), &[Formula::not(Formula::Atom('A'))]);
//! assert!(base.is_consistent());
//! ```

use crate::{misc::log::targets, oracle, structures::formula::Formula};

/// An ordered collection of formulas, least entrenched first.
#[derive(Clone, Debug, Default)]
pub struct BeliefBase {
    beliefs: Vec<Formula>,
}

/// The result of a revision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReviseOk {
    /// The belief was appended and the base remained consistent.
    Added,

    /// The belief was appended, and the noted beliefs were evicted (in eviction order) to restore consistency.
    Evicted(Vec<Formula>),

    /// A structurally equal belief is already held; the base is unchanged.
    Duplicate,
}

impl BeliefBase {
    /// An empty belief base.
    pub fn new() -> Self {
        Self::default()
    }

    /// A belief base holding `formulas` in the given order.
    ///
    /// The formulas are taken as given: revision is bypassed, so the result may be inconsistent.
    pub fn from_formulas(formulas: impl IntoIterator<Item = Formula>) -> Self {
        BeliefBase {
            beliefs: formulas.into_iter().collect(),
        }
    }

    /// The held beliefs, least entrenched first.
    pub fn beliefs(&self) -> &[Formula] {
        &self.beliefs
    }

    /// A count of the held beliefs.
    pub fn len(&self) -> usize {
        self.beliefs.len()
    }

    /// Whether no beliefs are held.
    pub fn is_empty(&self) -> bool {
        self.beliefs.is_empty()
    }

    /// Whether a structurally equal belief is held.
    pub fn contains(&self, formula: &Formula) -> bool {
        self.beliefs.contains(formula)
    }

    /// Whether the conjunction of the held beliefs is satisfiable.
    pub fn is_consistent(&self) -> bool {
        oracle::consistent(&self.beliefs)
    }

    /// Revises the base with `belief`: the belief is appended as the most entrenched element, and while the base is inconsistent the least entrenched belief is evicted.
    ///
    /// The appended belief is the last candidate for eviction, so the loop runs at most `len + 1` times.
    /// Revising with a belief already held leaves the base unchanged.
    pub fn revise(&mut self, belief: Formula) -> ReviseOk {
        if self.contains(&belief) {
            log::info!(target: targets::REVISION, "duplicate ignored: {belief}");
            return ReviseOk::Duplicate;
        }

        log::info!(target: targets::REVISION, "appended: {belief}");
        self.beliefs.push(belief);

        let bound = self.beliefs.len();
        let mut evicted = Vec::new();

        while !self.is_consistent() && !self.is_empty() {
            debug_assert!(evicted.len() < bound, "the repair loop failed to terminate");

            let removed = self.beliefs.remove(0);
            log::info!(target: targets::REVISION, "evicted: {removed}");
            evicted.push(removed);
        }

        match evicted.is_empty() {
            true => ReviseOk::Added,
            false => ReviseOk::Evicted(evicted),
        }
    }

    /// Contracts the base by `target`: every structurally equal belief is removed, with the order of the remainder preserved.
    ///
    /// Contracting by an absent belief is a no-op, and contraction never requires a consistency repair --- removing beliefs cannot introduce a contradiction.
    pub fn contract(&mut self, target: &Formula) {
        let before = self.beliefs.len();
        self.beliefs.retain(|belief| belief != target);

        if self.beliefs.len() < before {
            log::info!(target: targets::CONTRACTION, "removed: {target}");
        } else {
            log::info!(target: targets::CONTRACTION, "not held: {target}");
        }
    }

    /// Contracts the base by rendering: every belief whose canonical rendering equals `rendering` is removed.
    ///
    /// This is the surface used by a presentation layer, which identifies beliefs by the renderings it was handed.
    pub fn contract_rendering(&mut self, rendering: &str) {
        let before = self.beliefs.len();
        self.beliefs.retain(|belief| belief.to_string() != rendering);

        if self.beliefs.len() < before {
            log::info!(target: targets::CONTRACTION, "removed: {rendering}");
        }
    }
}
