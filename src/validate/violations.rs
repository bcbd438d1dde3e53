//! Structural violations a description can carry without failing to parse.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single structural inconsistency in an automaton description.
///
/// None of these prevent deserialization; under the lenient load policy they
/// surface only as fail-closed `Rejected` verdicts at evaluation time. The
/// strict policy turns a non-empty set of them into a load error.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    #[error("state set is empty")]
    EmptyStates,

    #[error("initial state {state:?} is not in the state set")]
    UnknownInitialState { state: String },

    #[error("final state {state:?} is not in the state set")]
    UnknownFinalState { state: String },

    #[error("transition source {state:?} is not in the state set")]
    UnknownTransitionSource { state: String },

    #[error("transition {from:?} --{symbol}--> {state:?} targets a state not in the state set")]
    UnknownTransitionTarget {
        from: String,
        symbol: String,
        state: String,
    },

    #[error("transition from {from:?} uses symbol {symbol:?} not in the alphabet")]
    UnknownSymbol { from: String, symbol: String },

    // Symbols are one Unicode code point in the base contract. Supporting
    // multi-code-point tokens would need a tokenizer at the alphabet
    // boundary; until then longer entries are flagged here.
    #[error("alphabet entry {symbol:?} is not a single code point")]
    MultiCharSymbol { symbol: String },
}
