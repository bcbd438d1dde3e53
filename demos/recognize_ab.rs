//! Recognizing (ab)*
//!
//! This demo loads a two-state machine from its JSON description and runs a
//! few inputs through it.
//!
//! Key concepts:
//! - Loading a description into a Session
//! - Explicit input strings, independent of the loaded bytes
//! - Verdicts as plain displayable values
//!
//! Run with: cargo run --example recognize_ab

use acceptor::session::Session;

fn main() {
    println!("=== Recognizing (ab)* ===\n");

    let description = br#"{
        "states": ["q0", "q1"],
        "alphabet": ["a", "b"],
        "transitions": { "q0": { "a": "q1" }, "q1": { "b": "q0" } },
        "initialState": "q0",
        "finalStates": ["q0"]
    }"#;

    let mut session = Session::new();
    session
        .load(description)
        .expect("description is well formed");

    println!("Machine: q0 --a--> q1, q1 --b--> q0, accepting in q0\n");

    for input in ["", "ab", "abab", "a", "aba", "ac"] {
        println!("  {:8} -> {}", format!("{input:?}"), session.run(input));
    }

    println!("\nNote: \"ac\" is cut short after 'a' because q1 has no");
    println!("transition for 'c' - a missing transition rejects immediately.");
}
