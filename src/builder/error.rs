//! Build errors for the automaton builder.

use thiserror::Error;

/// Errors that can occur when building an automaton programmatically.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Duplicate transition from {from:?} on {symbol:?} would break determinism")]
    DuplicateTransition { from: String, symbol: char },
}
