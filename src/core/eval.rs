//! The evaluator: a pure left-to-right scan over the input.
//!
//! Determinism guarantees at most one candidate transition per step, so
//! evaluation is a single pass with no search and no backtracking. Every
//! branch returns a [`Verdict`]; no input or automaton can make it panic.

use crate::core::automaton::Automaton;
use crate::core::trace::{EvalStep, EvalTrace};
use crate::core::verdict::Verdict;

/// Run an automaton over an input string.
///
/// - `None` yields [`Verdict::NoAutomatonLoaded`].
/// - A missing (state, symbol) transition yields [`Verdict::Rejected`]
///   immediately; the remaining input is not consumed. There is no recovery
///   transition, so this short-circuit is observationally equivalent to
///   scanning to the end.
/// - Otherwise the verdict is [`Verdict::Accepted`] exactly when the state
///   reached after the last symbol is an accepting state.
///
/// Structural problems in the automaton (an initial state that was never
/// declared, dangling destinations) are not errors here: the lookup simply
/// finds nothing and the run fails closed with `Rejected`.
///
/// Input is consumed one Unicode code point at a time, matching the
/// single-code-point symbol granularity of the description format.
///
/// # Example
///
/// ```rust
/// use acceptor::builder::AutomatonBuilder;
/// use acceptor::core::{eval, Verdict};
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
/// assert_eq!(eval::run(Some(&automaton), "ab"), Verdict::Accepted);
/// assert_eq!(eval::run(Some(&automaton), "a"), Verdict::Rejected);
/// assert_eq!(eval::run(None, "ab"), Verdict::NoAutomatonLoaded);
/// ```
pub fn run(automaton: Option<&Automaton>, input: &str) -> Verdict {
    let Some(automaton) = automaton else {
        return Verdict::NoAutomatonLoaded;
    };

    let mut current = automaton.initial_state();
    for symbol in input.chars() {
        match automaton.transition(current, symbol) {
            Some(next) => current = next,
            None => return Verdict::Rejected,
        }
    }

    if automaton.is_final_state(current) {
        Verdict::Accepted
    } else {
        Verdict::Rejected
    }
}

/// Run an automaton and record the path taken.
///
/// Same verdict semantics as [`run`]; the returned [`EvalTrace`] covers the
/// consumed prefix of the input, which is the whole input unless a missing
/// transition cut the run short.
pub fn run_with_trace(automaton: &Automaton, input: &str) -> (Verdict, EvalTrace) {
    let mut trace = EvalTrace::new(automaton.initial_state());
    let mut current = automaton.initial_state().to_string();

    for symbol in input.chars() {
        match automaton.transition(&current, symbol) {
            Some(next) => {
                trace = trace.record(EvalStep {
                    from: current.clone(),
                    symbol,
                    to: next.to_string(),
                });
                current = next.to_string();
            }
            None => return (Verdict::Rejected, trace),
        }
    }

    let verdict = if automaton.is_final_state(&current) {
        Verdict::Accepted
    } else {
        Verdict::Rejected
    };
    (verdict, trace)
}
