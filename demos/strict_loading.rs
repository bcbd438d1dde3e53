//! Lenient vs strict load policies
//!
//! A description that parses can still reference states it never declared.
//! The lenient policy (the default) loads it anyway and lets evaluation fail
//! closed; the strict policy rejects it at load time with a full report.
//!
//! Run with: cargo run --example strict_loading

use acceptor::session::{LoadPolicy, Session};
use acceptor::validate::validate;

fn main() {
    println!("=== Lenient vs Strict Loading ===\n");

    // "ghost" is a transition target that is never declared
    let dangling = br#"{
        "states": ["q0"],
        "alphabet": ["a"],
        "transitions": { "q0": { "a": "ghost" } },
        "initialState": "q0",
        "finalStates": ["q0"]
    }"#;

    let mut lenient = Session::new();
    lenient.load(dangling).expect("lenient load accepts this");
    println!("Lenient session loaded the description.");
    println!("  \"\"   -> {}", lenient.run(""));
    println!("  \"a\"  -> {} (stuck in undeclared state)", lenient.run("a"));
    println!("  \"aa\" -> {} (no transition out of it)\n", lenient.run("aa"));

    let mut strict = Session::with_policy(LoadPolicy::Strict);
    match strict.load(dangling) {
        Ok(_) => println!("unexpected: strict load accepted the description"),
        Err(error) => println!("Strict session refused it:\n  {error}"),
    }

    // the validation phase is also callable on its own
    if let Some(automaton) = lenient.current() {
        let report = validate(automaton);
        println!("\nStandalone validation found {} violation(s):", report.violations().len());
        for violation in report.violations() {
            println!("  - {violation}");
        }
    }
}
