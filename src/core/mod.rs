//! Core automaton types and evaluation logic.
//!
//! This module contains the pure functional core of the crate:
//! - The immutable [`Automaton`] model
//! - The [`Verdict`] type
//! - The evaluator in [`eval`]
//! - Immutable evaluation traces
//!
//! Nothing here performs I/O or holds mutable shared state; the stateful
//! current-automaton slot lives in [`crate::session`].

mod automaton;
pub mod eval;
mod trace;
mod verdict;

pub use automaton::Automaton;
pub use trace::{EvalStep, EvalTrace};
pub use verdict::Verdict;
