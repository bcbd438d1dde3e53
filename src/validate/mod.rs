//! Structural validation, independent of loading.
//!
//! Parsing and validity are two separate phases: a description that parses
//! may still reference states it never declared or symbols outside its
//! alphabet. [`validate`] checks every invariant in one pass and accumulates
//! ALL violations rather than stopping at the first, so a caller sees the
//! complete picture of what is wrong.
//!
//! Whether violations matter is a policy choice: the lenient load policy
//! never calls this (evaluation fails closed instead), the strict policy
//! turns a non-empty report into a load error.

mod violations;

pub use violations::Violation;

use crate::core::Automaton;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of validating an automaton: every violation found, possibly none.
///
/// # Example
///
/// ```rust
/// use acceptor::core::Automaton;
/// use acceptor::validate::{validate, Violation};
///
/// let automaton: Automaton = serde_json::from_str(r#"{
///     "states": ["q0"],
///     "alphabet": ["a"],
///     "transitions": { "q0": { "a": "ghost" } },
///     "initialState": "q0",
///     "finalStates": []
/// }"#).unwrap();
///
/// let report = validate(&automaton);
/// assert!(!report.is_valid());
/// assert_eq!(report.violations().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// True when no violations were found.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violations found, in discovery order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return write!(f, "valid");
        }
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Check every structural invariant of an automaton description.
///
/// Checked invariants:
/// - the state set is non-empty
/// - the initial state is declared
/// - every final state is declared
/// - every transition source and destination is declared
/// - every transition symbol is in the alphabet
/// - every alphabet entry is a single Unicode code point
///
/// Partiality of the transition table is NOT a violation: a missing
/// (state, symbol) entry means "no transition defined" and is meaningful.
pub fn validate(automaton: &Automaton) -> ValidationReport {
    let mut violations = Vec::new();

    if automaton.states().is_empty() {
        violations.push(Violation::EmptyStates);
    }

    if !automaton.states().contains(automaton.initial_state()) {
        violations.push(Violation::UnknownInitialState {
            state: automaton.initial_state().to_string(),
        });
    }

    for state in automaton.final_states() {
        if !automaton.states().contains(state) {
            violations.push(Violation::UnknownFinalState {
                state: state.clone(),
            });
        }
    }

    for symbol in automaton.alphabet() {
        if symbol.chars().count() != 1 {
            violations.push(Violation::MultiCharSymbol {
                symbol: symbol.clone(),
            });
        }
    }

    for (from, row) in automaton.transitions() {
        if !automaton.states().contains(from) {
            violations.push(Violation::UnknownTransitionSource {
                state: from.clone(),
            });
        }
        for (symbol, to) in row {
            if !automaton.alphabet().contains(symbol) {
                violations.push(Violation::UnknownSymbol {
                    from: from.clone(),
                    symbol: symbol.clone(),
                });
            }
            if !automaton.states().contains(to) {
                violations.push(Violation::UnknownTransitionTarget {
                    from: from.clone(),
                    symbol: symbol.clone(),
                    state: to.clone(),
                });
            }
        }
    }

    ValidationReport { violations }
}
