//! The three-valued outcome of an evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of running an automaton over an input string.
///
/// `NoAutomatonLoaded` is a distinct verdict rather than an error so that
/// callers can tell "no machine is loaded" apart from "the machine rejects
/// this input".
///
/// # Example
///
/// ```rust
/// use acceptor::core::Verdict;
///
/// assert!(Verdict::Accepted.is_accepted());
/// assert!(!Verdict::Rejected.is_accepted());
/// assert_eq!(Verdict::NoAutomatonLoaded.to_string(), "no automaton loaded");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Verdict {
    /// The input drove the automaton into an accepting state.
    Accepted,
    /// The input ended in a non-accepting state, or hit a missing transition.
    Rejected,
    /// Evaluation was requested before any automaton was loaded.
    NoAutomatonLoaded,
}

impl Verdict {
    /// True only for [`Verdict::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Rejected => write!(f, "rejected"),
            Self::NoAutomatonLoaded => write!(f, "no automaton loaded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_accepted_only_for_accepted() {
        assert!(Verdict::Accepted.is_accepted());
        assert!(!Verdict::Rejected.is_accepted());
        assert!(!Verdict::NoAutomatonLoaded.is_accepted());
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(Verdict::Accepted.to_string(), "accepted");
        assert_eq!(Verdict::Rejected.to_string(), "rejected");
        assert_eq!(Verdict::NoAutomatonLoaded.to_string(), "no automaton loaded");
    }

    #[test]
    fn verdict_serializes() {
        let json = serde_json::to_string(&Verdict::Accepted).unwrap();
        let back: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Verdict::Accepted);
    }
}
