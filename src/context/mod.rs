//! The context --- the belief base together with its configuration, behind the interface a presentation layer consumes.
//!
//! A context is session-local, owned state: one context per session, never shared across sessions, with each intent handled to completion before the next.
//! Parsing and policy checks happen here, before the belief base is touched, so every operation the base itself sees is total.
//!
//! # Example
//! ```rust
//! # use agm_belief::config::Config;
//! # use agm_belief::context::Context;
//! # use agm_belief::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.revise("p >> q").is_ok());
//! assert!(the_context.revise("p").is_ok());
//! assert!(the_context.revise("~q").is_ok());
//!
//! // Revising with ~q evicted the least entrenched belief, the implication.
//! assert_eq!(the_context.report(), Report::Satisfiable);
//! assert_eq!(
//!     the_context.current_base().iter().map(|(rendering, _)| rendering.as_str()).collect::<Vec<_>>(),
//!     vec!["p", "~q"],
//! );
//! ```

use crate::{
    base::{BeliefBase, ReviseOk},
    config::{Config, UnsatisfiablePolicy},
    graph::{self, DependencyGraph},
    oracle,
    parse,
    reports::Report,
    structures::formula::Formula,
    types::err::{ErrorKind, RevisionError},
};

/// A configuration paired with the belief base it governs.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The belief base of the context.
    pub base: BeliefBase,
}

impl Context {
    /// A context with an empty belief base.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            base: BeliefBase::new(),
        }
    }

    /// Revises the base with the statement a user typed.
    ///
    /// The statement is parsed (with `~` read as negation) and normalized to conjunctive normal form before revision.
    /// A statement which fails to parse is reported without the base being touched.
    pub fn revise(&mut self, statement: &str) -> Result<ReviseOk, ErrorKind> {
        let parsed = parse::formula(statement)?;
        self.revise_formula(parsed)
    }

    /// Revises the base with a formula built programmatically, skipping the parser.
    ///
    /// The formula is normalized to conjunctive normal form, as on the parsed path.
    pub fn revise_formula(&mut self, formula: Formula) -> Result<ReviseOk, ErrorKind> {
        let belief = formula.cnf();

        if self.config.unsatisfiable == UnsatisfiablePolicy::Reject
            && !oracle::consistent(std::slice::from_ref(&belief))
        {
            return Err(ErrorKind::from(RevisionError::Unsatisfiable));
        }

        Ok(self.base.revise(belief))
    }

    /// Contracts the base by rendering.
    ///
    /// Always succeeds: contracting by a rendering no held belief has is a no-op.
    pub fn contract(&mut self, rendering: &str) {
        self.base.contract_rendering(rendering);
    }

    /// The held beliefs as (rendering, formula) pairs, least entrenched first.
    pub fn current_base(&self) -> Vec<(String, &Formula)> {
        self.base
            .beliefs()
            .iter()
            .map(|belief| (belief.to_string(), belief))
            .collect()
    }

    /// Whether the conjunction of the held beliefs is satisfiable.
    pub fn is_consistent(&self) -> bool {
        self.base.is_consistent()
    }

    /// A report on the satisfiability of the held beliefs.
    pub fn report(&self) -> Report {
        match self.is_consistent() {
            true => Report::Satisfiable,
            false => Report::Unsatisfiable,
        }
    }

    /// The dependency graph of the held beliefs, built fresh.
    pub fn dependency_graph(&self) -> DependencyGraph {
        graph::dependency_graph(&self.base)
    }
}
