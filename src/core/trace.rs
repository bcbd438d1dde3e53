//! Evaluation traces: an immutable record of the states a run visited.
//!
//! Traces follow functional principles: [`EvalTrace::record`] returns a new
//! trace rather than mutating in place.

use serde::{Deserialize, Serialize};

/// A single consumed symbol and the states on either side of it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct EvalStep {
    /// State the automaton was in before consuming the symbol
    pub from: String,
    /// The symbol consumed
    pub symbol: char,
    /// State the automaton moved to
    pub to: String,
}

/// Ordered record of one evaluation's progress through an automaton.
///
/// A trace always starts at the initial state; each recorded step appends the
/// destination reached after consuming one symbol. Evaluation that rejects on
/// a missing transition produces a trace covering only the consumed prefix.
///
/// # Example
///
/// ```rust
/// use acceptor::builder::AutomatonBuilder;
/// use acceptor::core::eval::run_with_trace;
///
/// let automaton = AutomatonBuilder::new()
///     .transition("q0", 'a', "q1")
///     .transition("q1", 'b', "q0")
///     .initial("q0")
///     .accept("q0")
///     .build()
///     .unwrap();
///
/// let (_, trace) = run_with_trace(&automaton, "ab");
/// assert_eq!(trace.path(), vec!["q0", "q1", "q0"]);
/// assert_eq!(trace.consumed(), 2);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct EvalTrace {
    initial: String,
    steps: Vec<EvalStep>,
}

impl EvalTrace {
    /// Create an empty trace anchored at an initial state.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            steps: Vec::new(),
        }
    }

    /// Record a step, returning a new trace. The original is unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acceptor::core::{EvalStep, EvalTrace};
    ///
    /// let trace = EvalTrace::new("q0");
    /// let extended = trace.record(EvalStep {
    ///     from: "q0".to_string(),
    ///     symbol: 'a',
    ///     to: "q1".to_string(),
    /// });
    ///
    /// assert_eq!(trace.consumed(), 0);
    /// assert_eq!(extended.consumed(), 1);
    /// ```
    pub fn record(&self, step: EvalStep) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self {
            initial: self.initial.clone(),
            steps,
        }
    }

    /// The state the trace started in.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// The recorded steps, in consumption order.
    pub fn steps(&self) -> &[EvalStep] {
        &self.steps
    }

    /// Number of symbols consumed before the run ended.
    pub fn consumed(&self) -> usize {
        self.steps.len()
    }

    /// The states visited, in order: initial state, then each destination.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        path.push(self.initial.as_str());
        for step in &self.steps {
            path.push(step.to.as_str());
        }
        path
    }

    /// The state the run ended in.
    pub fn last_state(&self) -> &str {
        self.steps
            .last()
            .map(|step| step.to.as_str())
            .unwrap_or(&self.initial)
    }
}
