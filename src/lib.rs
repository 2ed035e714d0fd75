//! A library for AGM-style belief revision over propositional formulas.
//!
//! agm_belief maintains a small ordered collection of logical statements --- a belief base --- and keeps it free of contradiction as statements are added and removed, in the spirit of the AGM theory of belief revision:
//! - *Revision* adds a belief, restoring consistency (when needed) by evicting the least entrenched beliefs.
//! - *Contraction* removes a belief on request, which never requires a repair.
//!
//! Entrenchment is approximated by insertion order alone: the earliest surviving belief is the least entrenched and the first candidate for eviction.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context::Context) --- a belief base paired with its configuration.
//! Statements may be added through their [textual form](crate::context::Context::revise) or [programmatically](crate::context::Context::revise_formula).
//!
//! Internally:
//! - Beliefs are [formulas](crate::structures::formula::Formula), a closed variant over atoms, negation, conjunction, disjunction, and implication, normalized to conjunctive normal form before they are held.
//! - Consistency of the base is decided by the [oracle], a pure satisfiability check over the clausal forms of the held beliefs, rebuilt from scratch after each mutation.
//! - The [base](crate::base::BeliefBase) carries the revision and contraction algorithms.
//! - The [graph](crate::graph) module derives a bipartite atom→belief graph of the base for visualization.
//!
//! Everything is synchronous and session-local: one base, one writer, no background work.
//! The oracle and the graph builder are pure functions of their input.
//!
//! # Example
//!
//! ```rust
//! use agm_belief::{config::Config, context::Context, reports::Report};
//!
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.revise("A").is_ok());
//! assert_eq!(the_context.report(), Report::Satisfiable);
//!
//! // ~A contradicts A, and A is the least entrenched belief, so A is evicted.
//! assert!(the_context.revise("~A").is_ok());
//!
//! assert_eq!(the_context.report(), Report::Satisfiable);
//! assert_eq!(the_context.base.beliefs().len(), 1);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with a variety of targets, listed in [misc::log], to help narrow output to the relevant part of the library.
//! No log implementation is provided by the library itself.

pub mod base;
pub mod config;
pub mod context;
pub mod graph;
pub mod oracle;
pub mod parse;
pub mod reports;
pub mod structures;
pub mod types;

pub mod misc;
