/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
Note, no log implementation is provided --- the bundled CLI uses [env_logger](https://docs.rs/env_logger/latest/env_logger/), so, e.g., logs of evictions made during revision can be narrowed with `RUST_LOG=revision …`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [revision](crate::base::BeliefBase::revise).
    pub const REVISION: &str = "revision";

    /// Logs related to [contraction](crate::base::BeliefBase::contract).
    pub const CONTRACTION: &str = "contraction";

    /// Logs related to the [consistency oracle](crate::oracle).
    pub const ORACLE: &str = "oracle";

    /// Logs related to the [dependency graph](crate::graph).
    pub const GRAPH: &str = "graph";

    /// Logs related to [parsing](crate::parse).
    pub const PARSE: &str = "parse";
}
