//! The automaton model: an immutable machine description.
//!
//! An [`Automaton`] is the deserialized form of a machine description and is
//! never mutated after construction. Loading a new description produces a new
//! instance; see [`crate::session::Session`] for the replace-wholesale slot.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A deterministic finite automaton description.
///
/// The serialized shape is field-for-field, order-independent:
///
/// ```json
/// {
///     "states": ["q0", "q1"],
///     "alphabet": ["a", "b"],
///     "transitions": { "q0": { "a": "q1" }, "q1": { "b": "q0" } },
///     "initialState": "q0",
///     "finalStates": ["q0"]
/// }
/// ```
///
/// All five fields are required; unknown fields are rejected. Construction
/// does not enforce structural invariants (a description may reference states
/// it never declares) — that is the job of [`crate::validate::validate`], and
/// evaluation fails closed on anything it cannot resolve.
///
/// The transition table is partial by design: a missing (state, symbol) entry
/// means "no transition defined" and causes rejection during evaluation, not
/// an error.
///
/// # Example
///
/// ```rust
/// use acceptor::core::Automaton;
///
/// let description = r#"{
///     "states": ["q0", "q1"],
///     "alphabet": ["a", "b"],
///     "transitions": { "q0": { "a": "q1" }, "q1": { "b": "q0" } },
///     "initialState": "q0",
///     "finalStates": ["q0"]
/// }"#;
///
/// let automaton: Automaton = serde_json::from_str(description).unwrap();
/// assert!(automaton.accepts("ab"));
/// assert!(!automaton.accepts("a"));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Automaton {
    states: BTreeSet<String>,
    alphabet: BTreeSet<String>,
    transitions: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(rename = "initialState")]
    initial_state: String,
    #[serde(rename = "finalStates")]
    final_states: BTreeSet<String>,
}

impl Automaton {
    /// Look up the destination of a single transition.
    ///
    /// Returns `None` when no transition is defined for the (state, symbol)
    /// pair. Symbols are one Unicode code point; the lookup matches against
    /// single-code-point map keys.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acceptor::builder::AutomatonBuilder;
    ///
    /// let automaton = AutomatonBuilder::new()
    ///     .transition("q0", 'a', "q1")
    ///     .initial("q0")
    ///     .accept("q1")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(automaton.transition("q0", 'a'), Some("q1"));
    /// assert_eq!(automaton.transition("q0", 'b'), None);
    /// assert_eq!(automaton.transition("q1", 'a'), None);
    /// ```
    pub fn transition(&self, state: &str, symbol: char) -> Option<&str> {
        // encode_utf8 avoids allocating a String per looked-up symbol
        let mut buf = [0u8; 4];
        let key: &str = symbol.encode_utf8(&mut buf);
        self.transitions
            .get(state)
            .and_then(|row| row.get(key))
            .map(String::as_str)
    }

    /// Check whether a state is accepting.
    ///
    /// This is a plain membership test against `finalStates`; it does not
    /// require the state to be declared in `states`.
    pub fn is_final_state(&self, state: &str) -> bool {
        self.final_states.contains(state)
    }

    /// Run this automaton over an input string and report acceptance.
    ///
    /// Convenience over [`crate::core::eval::run`]; see that function for the
    /// full verdict semantics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acceptor::builder::AutomatonBuilder;
    ///
    /// // Accepts (ab)*
    /// let automaton = AutomatonBuilder::new()
    ///     .transition("q0", 'a', "q1")
    ///     .transition("q1", 'b', "q0")
    ///     .initial("q0")
    ///     .accept("q0")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(automaton.accepts(""));
    /// assert!(automaton.accepts("abab"));
    /// assert!(!automaton.accepts("aba"));
    /// ```
    pub fn accepts(&self, input: &str) -> bool {
        crate::core::eval::run(Some(self), input).is_accepted()
    }

    /// The declared state set.
    pub fn states(&self) -> &BTreeSet<String> {
        &self.states
    }

    /// The declared input alphabet.
    pub fn alphabet(&self) -> &BTreeSet<String> {
        &self.alphabet
    }

    /// The transition table, state -> symbol -> destination.
    pub fn transitions(&self) -> &BTreeMap<String, BTreeMap<String, String>> {
        &self.transitions
    }

    /// The initial state identifier.
    pub fn initial_state(&self) -> &str {
        &self.initial_state
    }

    /// The accepting state set. May be empty (such a machine accepts nothing).
    pub fn final_states(&self) -> &BTreeSet<String> {
        &self.final_states
    }

    pub(crate) fn from_parts(
        states: BTreeSet<String>,
        alphabet: BTreeSet<String>,
        transitions: BTreeMap<String, BTreeMap<String, String>>,
        initial_state: String,
        final_states: BTreeSet<String>,
    ) -> Self {
        Self {
            states,
            alphabet,
            transitions,
            initial_state,
            final_states,
        }
    }
}
