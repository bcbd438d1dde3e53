//! Acceptor: a deterministic finite automaton library
//!
//! Acceptor loads machine descriptions (states, alphabet, transition table,
//! initial state, accepting states), validates them, and decides whether an
//! automaton accepts or rejects an input string.
//!
//! The core is pure: evaluation is a single left-to-right scan with no
//! backtracking, and the [`core::Verdict`] covers every outcome — there is no
//! input or description that can make `run` panic. State lives in one place,
//! the [`session::Session`] slot, which a caller owns explicitly.
//!
//! # Core Concepts
//!
//! - **Automaton**: an immutable machine description, deserialized from JSON
//! - **Verdict**: the three-valued outcome — `Accepted`, `Rejected`,
//!   `NoAutomatonLoaded`
//! - **Session**: the current-automaton slot; each load replaces the machine
//!   wholesale
//! - **Validation**: a separate phase that accumulates every structural
//!   violation, opted into at load time via [`session::LoadPolicy::Strict`]
//!
//! # Example
//!
//! ```rust
//! use acceptor::core::Verdict;
//! use acceptor::session::Session;
//!
//! let description = br#"{
//!     "states": ["q0", "q1"],
//!     "alphabet": ["a", "b"],
//!     "transitions": { "q0": { "a": "q1" }, "q1": { "b": "q0" } },
//!     "initialState": "q0",
//!     "finalStates": ["q0"]
//! }"#;
//!
//! let mut session = Session::new();
//! session.load(description).unwrap();
//!
//! assert_eq!(session.run("ab"), Verdict::Accepted);
//! assert_eq!(session.run("a"), Verdict::Rejected);
//! ```

pub mod builder;
pub mod core;
pub mod session;
pub mod validate;

// Re-export commonly used types
pub use builder::{AutomatonBuilder, BuildError};
pub use core::{Automaton, EvalStep, EvalTrace, Verdict};
pub use session::{LoadError, LoadPolicy, Session, SharedSession};
pub use validate::{validate, ValidationReport, Violation};
