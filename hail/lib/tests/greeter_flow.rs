//! Integration tests for the greeting workflow.
//!
//! These tests drive the formatters and the stateful greeter together the
//! way a consuming application would.

use hail_lib::{GreetError, Greeter, greet, greet_many, greet_many_lenient};

#[test]
fn single_and_batch_formatters_agree() {
    let names = ["Alice", "Bob", "Charlie"];
    let batch = greet_many(&names, "Hello").unwrap();

    for (name, message) in names.iter().zip(&batch) {
        assert_eq!(greet(name, "Hello").unwrap(), *message);
    }
}

#[test]
fn strict_batch_returns_no_partial_result() {
    let result = greet_many(&["Alice", "   ", "Bob"], "Hello");
    assert_eq!(result, Err(GreetError::EmptyName));
}

#[test]
fn lenient_batch_survives_boundary_noise() {
    // Entries as they would arrive from a deserialized JSON array: `None`
    // stands in for elements that were not strings at all.
    let entries = [
        Some("Alice"),
        Some(""),
        Some("Bob"),
        None,
        Some("  Charlie  "),
    ];

    let messages = greet_many_lenient(&entries, "Hello");
    assert_eq!(
        messages,
        vec!["Hello, Alice!", "Hello, Bob!", "Hello, Charlie!"]
    );
}

#[test]
fn greeter_records_accumulate_and_reset() {
    let mut greeter = Greeter::new("Hi").unwrap();

    greeter.greet("World").unwrap();
    greeter.greet_with("Alice", "Welcome").unwrap();
    greeter.greet("Alice").unwrap();

    assert_eq!(
        greeter.history(),
        vec!["Hi, World!", "Welcome, Alice!", "Hi, Alice!"]
    );

    let stats = greeter.statistics();
    assert_eq!(stats.total_greetings, 3);
    assert_eq!(stats.unique_names, 2);
    assert_eq!(stats.most_common_greeting.as_deref(), Some("Hi"));

    greeter.clear_history();

    let stats = greeter.statistics();
    assert_eq!(stats.total_greetings, 0);
    assert_eq!(stats.unique_names, 0);
    assert_eq!(stats.most_common_greeting, None);

    // Configuration survives the reset.
    assert_eq!(greeter.default_greeting(), "Hi");
    assert_eq!(greeter.greet("World").unwrap(), "Hi, World!");
}

#[test]
fn case_insensitive_greeter_normalizes_before_recording() {
    let mut greeter = Greeter::with_case_sensitivity("Hello", false).unwrap();

    greeter.greet("alice").unwrap();
    greeter.greet("ALICE").unwrap();

    // Both spellings normalize to the same stored name.
    let stats = greeter.statistics();
    assert_eq!(stats.total_greetings, 2);
    assert_eq!(stats.unique_names, 1);
    assert_eq!(greeter.history(), vec!["Hello, Alice!", "Hello, Alice!"]);
}

#[test]
fn errors_format_as_human_readable_messages() {
    assert_eq!(
        GreetError::EmptyName.to_string(),
        "name cannot be empty or whitespace only"
    );
    assert_eq!(
        GreetError::EmptyGreeting.to_string(),
        "default greeting cannot be empty or whitespace only"
    );
}
