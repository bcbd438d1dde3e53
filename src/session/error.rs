//! Load error types.

use crate::validate::ValidationReport;
use thiserror::Error;

/// Errors that can occur when loading an automaton description.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The byte buffer could not be decoded into the description shape
    /// (missing, extra, or mistyped fields).
    #[error("malformed automaton description: {0}")]
    MalformedDescription(String),

    /// Strict policy only: the description parsed but violates structural
    /// invariants. Carries every violation found.
    #[error("invalid automaton: {0}")]
    InvalidAutomaton(ValidationReport),
}
