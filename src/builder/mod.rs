//! Builder API for constructing automata in code.
//!
//! The serialized description format is the usual way in; this builder exists
//! for tests, demos, and callers that assemble machines programmatically.
//! States and symbols mentioned by transitions are registered automatically,
//! so a builder-produced automaton always passes validation.

pub mod error;

pub use error::BuildError;

use crate::core::Automaton;
use std::collections::{BTreeMap, BTreeSet};

/// Fluent builder for [`Automaton`] values.
///
/// Adding a transition registers its source state, destination state, and
/// symbol. A second destination for the same (state, symbol) pair is rejected
/// at `build()` time: the transition table must stay a function.
///
/// # Example
///
/// ```rust
/// use acceptor::builder::AutomatonBuilder;
///
/// // Accepts strings of a's of even length
/// let automaton = AutomatonBuilder::new()
///     .transition("even", 'a', "odd")
///     .transition("odd", 'a', "even")
///     .initial("even")
///     .accept("even")
///     .build()
///     .unwrap();
///
/// assert!(automaton.accepts(""));
/// assert!(automaton.accepts("aa"));
/// assert!(!automaton.accepts("aaa"));
/// ```
#[derive(Default)]
pub struct AutomatonBuilder {
    states: BTreeSet<String>,
    alphabet: BTreeSet<String>,
    transitions: Vec<(String, char, String)>,
    initial: Option<String>,
    finals: BTreeSet<String>,
}

impl AutomatonBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state without attaching any transition to it.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.states.insert(state.into());
        self
    }

    /// Declare an alphabet symbol without using it in a transition.
    pub fn symbol(mut self, symbol: char) -> Self {
        self.alphabet.insert(symbol.to_string());
        self
    }

    /// Add a transition. Source, destination, and symbol are auto-registered.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        symbol: char,
        to: impl Into<String>,
    ) -> Self {
        let from = from.into();
        let to = to.into();
        self.states.insert(from.clone());
        self.states.insert(to.clone());
        self.alphabet.insert(symbol.to_string());
        self.transitions.push((from, symbol, to));
        self
    }

    /// Set the initial state (required). Auto-registered.
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        let state = state.into();
        self.states.insert(state.clone());
        self.initial = Some(state);
        self
    }

    /// Mark a state as accepting. Auto-registered. May be called repeatedly.
    pub fn accept(mut self, state: impl Into<String>) -> Self {
        let state = state.into();
        self.states.insert(state.clone());
        self.finals.insert(state);
        self
    }

    /// Build the automaton.
    ///
    /// Fails when no initial state was set, or when two transitions share a
    /// (state, symbol) pair with different destinations recorded (the second
    /// entry is the offender reported).
    pub fn build(self) -> Result<Automaton, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut table: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for (from, symbol, to) in self.transitions {
            let row = table.entry(from.clone()).or_default();
            if row.insert(symbol.to_string(), to).is_some() {
                return Err(BuildError::DuplicateTransition { from, symbol });
            }
        }

        Ok(Automaton::from_parts(
            self.states,
            self.alphabet,
            table,
            initial,
            self.finals,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;

    #[test]
    fn builder_requires_initial_state() {
        let result = AutomatonBuilder::new().transition("q0", 'a', "q1").build();
        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn transitions_auto_register_states_and_symbols() {
        let automaton = AutomatonBuilder::new()
            .transition("q0", 'a', "q1")
            .initial("q0")
            .accept("q1")
            .build()
            .unwrap();

        assert!(automaton.states().contains("q0"));
        assert!(automaton.states().contains("q1"));
        assert!(automaton.alphabet().contains("a"));
        assert_eq!(automaton.transition("q0", 'a'), Some("q1"));
    }

    #[test]
    fn duplicate_transition_is_rejected() {
        let result = AutomatonBuilder::new()
            .transition("q0", 'a', "q1")
            .transition("q0", 'a', "q2")
            .initial("q0")
            .build();

        assert_eq!(
            result.err(),
            Some(BuildError::DuplicateTransition {
                from: "q0".to_string(),
                symbol: 'a'
            })
        );
    }

    #[test]
    fn repeating_an_identical_transition_is_still_rejected() {
        // even the same destination twice signals a caller bug
        let result = AutomatonBuilder::new()
            .transition("q0", 'a', "q1")
            .transition("q0", 'a', "q1")
            .initial("q0")
            .build();

        assert!(matches!(
            result,
            Err(BuildError::DuplicateTransition { .. })
        ));
    }

    #[test]
    fn built_automata_always_validate_clean() {
        let automaton = AutomatonBuilder::new()
            .state("isolated")
            .symbol('z')
            .transition("q0", 'a', "q1")
            .transition("q1", 'b', "q0")
            .initial("q0")
            .accept("q0")
            .accept("q1")
            .build()
            .unwrap();

        assert!(validate(&automaton).is_valid());
    }

    #[test]
    fn initial_only_machine_builds() {
        let automaton = AutomatonBuilder::new()
            .initial("lonely")
            .accept("lonely")
            .build()
            .unwrap();

        assert!(automaton.accepts(""));
        assert!(!automaton.accepts("a"));
    }
}
