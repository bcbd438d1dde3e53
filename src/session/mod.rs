//! The current-automaton slot.
//!
//! A [`Session`] is an explicit handle owned by the caller (a UI layer, a
//! service, a test harness) rather than process-wide ambient state. It holds
//! at most one automaton at a time; each successful load replaces the
//! previous machine wholesale, and a failed load leaves it untouched.
//!
//! Loading a machine description and supplying an input to evaluate are
//! independent operations: [`Session::run`] always takes the input string
//! explicitly. The raw bytes of the last successful load are retained and
//! available through [`Session::raw_description`] for callers that need them.
//!
//! For a session shared across threads, see [`SharedSession`].

pub mod error;

pub use error::LoadError;

use crate::core::{eval, Automaton, Verdict};
use crate::validate::validate;
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

/// How strictly [`Session::load`] treats structural invariant violations.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LoadPolicy {
    /// Accept any description that parses. Invariant violations surface
    /// later as fail-closed `Rejected` verdicts during evaluation. This is
    /// the default.
    #[default]
    Lenient,

    /// Reject descriptions with structural violations at load time with
    /// [`LoadError::InvalidAutomaton`].
    Strict,
}

/// An owned slot holding the currently loaded automaton.
///
/// # Example
///
/// ```rust
/// use acceptor::session::Session;
/// use acceptor::core::Verdict;
///
/// let description = br#"{
///     "states": ["q0", "q1"],
///     "alphabet": ["a", "b"],
///     "transitions": { "q0": { "a": "q1" }, "q1": { "b": "q0" } },
///     "initialState": "q0",
///     "finalStates": ["q0"]
/// }"#;
///
/// let mut session = Session::new();
/// assert_eq!(session.run("ab"), Verdict::NoAutomatonLoaded);
///
/// session.load(description).unwrap();
/// assert_eq!(session.run("ab"), Verdict::Accepted);
/// assert_eq!(session.run("a"), Verdict::Rejected);
/// ```
#[derive(Debug, Default)]
pub struct Session {
    current: Option<Automaton>,
    raw: Option<Vec<u8>>,
    loaded_at: Option<DateTime<Utc>>,
    policy: LoadPolicy,
}

impl Session {
    /// Create an empty session with the lenient load policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with an explicit load policy.
    pub fn with_policy(policy: LoadPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Deserialize a description and make it the current automaton.
    ///
    /// On success the previous automaton (if any) is replaced wholesale, the
    /// raw bytes are retained, and the load time is stamped. On ANY failure
    /// the session is left exactly as it was.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acceptor::session::{LoadError, Session};
    ///
    /// let mut session = Session::new();
    /// let result = session.load(br#"{"states": "not-an-array"}"#);
    ///
    /// assert!(matches!(result, Err(LoadError::MalformedDescription(_))));
    /// assert!(session.current().is_none());
    /// ```
    pub fn load(&mut self, bytes: &[u8]) -> Result<&Automaton, LoadError> {
        let automaton: Automaton = serde_json::from_slice(bytes)
            .map_err(|e| LoadError::MalformedDescription(e.to_string()))?;

        if self.policy == LoadPolicy::Strict {
            let report = validate(&automaton);
            if !report.is_valid() {
                return Err(LoadError::InvalidAutomaton(report));
            }
        }

        self.raw = Some(bytes.to_vec());
        self.loaded_at = Some(Utc::now());
        Ok(self.current.insert(automaton))
    }

    /// The currently loaded automaton, if any.
    pub fn current(&self) -> Option<&Automaton> {
        self.current.as_ref()
    }

    /// Raw bytes of the last successfully loaded description.
    ///
    /// Retained for callers that want them (for display, re-serialization,
    /// or to deliberately evaluate the description text itself); `run` never
    /// consults them.
    pub fn raw_description(&self) -> Option<&[u8]> {
        self.raw.as_deref()
    }

    /// When the current automaton was loaded, if any.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// The session's load policy.
    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Evaluate an input string against the current automaton.
    ///
    /// Returns [`Verdict::NoAutomatonLoaded`] before the first successful
    /// load; otherwise delegates to [`crate::core::eval::run`].
    pub fn run(&self, input: &str) -> Verdict {
        eval::run(self.current.as_ref(), input)
    }
}

/// A session shareable across threads.
///
/// Wraps a [`Session`] in a reader-writer lock so that concurrent readers
/// always observe a consistent snapshot and a load swaps the machine
/// wholesale, never torn. Policy is last-load-wins. Cloning shares the
/// underlying slot.
///
/// # Example
///
/// ```rust
/// use acceptor::session::SharedSession;
/// use acceptor::core::Verdict;
///
/// let shared = SharedSession::new();
/// let reader = shared.clone();
///
/// shared.load(br#"{
///     "states": ["q0"],
///     "alphabet": [],
///     "transitions": {},
///     "initialState": "q0",
///     "finalStates": ["q0"]
/// }"#).unwrap();
///
/// assert_eq!(reader.run(""), Verdict::Accepted);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedSession {
    inner: Arc<RwLock<Session>>,
}

impl SharedSession {
    /// Create an empty shared session with the lenient load policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty shared session with an explicit load policy.
    pub fn with_policy(policy: LoadPolicy) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Session::with_policy(policy))),
        }
    }

    /// Load a description, replacing the current automaton on success.
    pub fn load(&self, bytes: &[u8]) -> Result<(), LoadError> {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            // a panicked writer cannot have left a torn slot: load replaces
            // the Option wholesale, so recover the lock and keep going
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.load(bytes).map(|_| ())
    }

    /// Evaluate an input string against a consistent snapshot of the slot.
    pub fn run(&self, input: &str) -> Verdict {
        let guard = match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.run(input)
    }

    /// Clone of the currently loaded automaton, if any.
    pub fn current(&self) -> Option<Automaton> {
        let guard = match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.current().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVEN_AB: &[u8] = br#"{
        "states": ["q0", "q1"],
        "alphabet": ["a", "b"],
        "transitions": { "q0": { "a": "q1" }, "q1": { "b": "q0" } },
        "initialState": "q0",
        "finalStates": ["q0"]
    }"#;

    const SINGLE_A: &[u8] = br#"{
        "states": ["s", "t"],
        "alphabet": ["a"],
        "transitions": { "s": { "a": "t" } },
        "initialState": "s",
        "finalStates": ["t"]
    }"#;

    const DANGLING: &[u8] = br#"{
        "states": ["q0"],
        "alphabet": ["a"],
        "transitions": { "q0": { "a": "ghost" } },
        "initialState": "q0",
        "finalStates": []
    }"#;

    #[test]
    fn run_before_load_reports_no_automaton() {
        let session = Session::new();
        assert_eq!(session.run(""), Verdict::NoAutomatonLoaded);
        assert_eq!(session.run("ab"), Verdict::NoAutomatonLoaded);
    }

    #[test]
    fn load_then_run() {
        let mut session = Session::new();
        session.load(EVEN_AB).unwrap();

        assert_eq!(session.run("ab"), Verdict::Accepted);
        assert_eq!(session.run("a"), Verdict::Rejected);
        assert_eq!(session.run("ac"), Verdict::Rejected);
    }

    #[test]
    fn load_retains_raw_bytes_and_timestamp() {
        let mut session = Session::new();
        assert!(session.raw_description().is_none());
        assert!(session.loaded_at().is_none());

        session.load(EVEN_AB).unwrap();
        assert_eq!(session.raw_description(), Some(EVEN_AB));
        assert!(session.loaded_at().is_some());
    }

    #[test]
    fn malformed_load_leaves_session_unchanged() {
        let mut session = Session::new();
        session.load(EVEN_AB).unwrap();

        let result = session.load(br#"{"states": "not-an-array"}"#);
        assert!(matches!(result, Err(LoadError::MalformedDescription(_))));

        // the previous machine and bytes are still current
        assert_eq!(session.run("ab"), Verdict::Accepted);
        assert_eq!(session.raw_description(), Some(EVEN_AB));
    }

    #[test]
    fn load_replaces_wholesale() {
        let mut session = Session::new();
        session.load(EVEN_AB).unwrap();
        assert_eq!(session.run("ab"), Verdict::Accepted);

        session.load(SINGLE_A).unwrap();
        // "ab" was accepted by the old machine; the new one rejects it
        assert_eq!(session.run("ab"), Verdict::Rejected);
        assert_eq!(session.run("a"), Verdict::Accepted);
        assert_eq!(session.raw_description(), Some(SINGLE_A));
        assert_eq!(session.current().unwrap().initial_state(), "s");
    }

    #[test]
    fn lenient_policy_accepts_dangling_references() {
        let mut session = Session::new();
        session.load(DANGLING).unwrap();

        // fail closed at evaluation time
        assert_eq!(session.run("aa"), Verdict::Rejected);
    }

    #[test]
    fn strict_policy_rejects_dangling_references() {
        let mut session = Session::with_policy(LoadPolicy::Strict);
        let result = session.load(DANGLING);

        match result {
            Err(LoadError::InvalidAutomaton(report)) => {
                assert!(!report.is_valid());
            }
            other => panic!("expected InvalidAutomaton, got {other:?}"),
        }
        assert!(session.current().is_none());
    }

    #[test]
    fn strict_policy_accepts_well_formed_descriptions() {
        let mut session = Session::with_policy(LoadPolicy::Strict);
        session.load(EVEN_AB).unwrap();
        assert_eq!(session.run("abab"), Verdict::Accepted);
    }

    #[test]
    fn strict_failure_leaves_previous_machine_current() {
        let mut session = Session::with_policy(LoadPolicy::Strict);
        session.load(EVEN_AB).unwrap();

        assert!(session.load(DANGLING).is_err());
        assert_eq!(session.run("ab"), Verdict::Accepted);
        assert_eq!(session.raw_description(), Some(EVEN_AB));
    }

    #[test]
    fn shared_session_swaps_wholesale_across_clones() {
        let shared = SharedSession::new();
        let reader = shared.clone();

        assert_eq!(reader.run("a"), Verdict::NoAutomatonLoaded);

        shared.load(SINGLE_A).unwrap();
        assert_eq!(reader.run("a"), Verdict::Accepted);

        shared.load(EVEN_AB).unwrap();
        assert_eq!(reader.run("a"), Verdict::Rejected);
        assert_eq!(reader.run("ab"), Verdict::Accepted);
    }

    #[test]
    fn shared_session_readable_from_other_threads() {
        let shared = SharedSession::new();
        shared.load(EVEN_AB).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let reader = shared.clone();
                std::thread::spawn(move || reader.run("abab"))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Verdict::Accepted);
        }
    }
}
