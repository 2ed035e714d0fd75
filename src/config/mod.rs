//! Configuration of a context.

/// The primary configuration structure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// What to do when a revision is requested with a formula which is unsatisfiable on its own.
    pub unsatisfiable: UnsatisfiablePolicy,
}

/// Policy for revision with a formula which is unsatisfiable on its own.
///
/// With such a formula the repair loop of a revision cannot reach a consistent base which holds it: every prior belief is evicted, then the formula itself, and the base ends empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnsatisfiablePolicy {
    /// Reject the formula before any mutation, reporting [RevisionError::Unsatisfiable](crate::types::err::RevisionError::Unsatisfiable).
    #[default]
    Reject,

    /// Admit the formula and let the repair loop run, emptying the base.
    Admit,
}
