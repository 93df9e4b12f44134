//! Engine error taxonomy.
//!
//! Only configuration-class failures surface here. Recoverable input
//! problems (a non-numeric answer where a number was expected) are handled
//! locally as an incorrect answer and never reach the caller.

use thiserror::Error;

/// Errors surfaced across the engine boundary.
///
/// `InsufficientPool` is the important one: a level that requests more
/// sampled content than its bank holds must abort session start rather than
/// silently yielding a short or duplicated round.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A content bank is smaller than the requested sample size.
    #[error("content pool exhausted: needed {needed}, only {available} available")]
    InsufficientPool {
        /// How many items the level asked for.
        needed: usize,
        /// How many the filtered bank actually holds.
        available: usize,
    },

    /// A game was configured with no levels at all.
    #[error("game has an empty level table")]
    EmptyLevelTable,

    /// A level index outside the configured table.
    #[error("no level at index {index} (table has {count})")]
    NoSuchLevel { index: usize, count: usize },
}
