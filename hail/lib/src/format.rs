//! Stateless greeting formatters.
//!
//! This module provides the core message formatter along with two batch
//! variants that differ only in how they handle invalid names: [`greet_many`]
//! aborts on the first invalid name, while [`greet_many_lenient`] skips
//! invalid entries and returns whatever was formatted successfully.

use tracing::{info, warn};

use crate::error::GreetError;

/// The greeting word used when a caller has no preference.
pub const DEFAULT_GREETING: &str = "Hello";

/// Formats a single greeting message.
///
/// Combines a greeting word with a name into `"{greeting}, {name}!"`.
/// Leading and trailing whitespace is trimmed from the name; the greeting
/// is used verbatim.
///
/// ## Errors
///
/// Returns `GreetError::EmptyName` if the name is empty or contains only
/// whitespace.
///
/// ## Examples
///
/// ```
/// use hail_lib::{greet, GreetError};
///
/// assert_eq!(greet("World", "Hello").unwrap(), "Hello, World!");
/// assert_eq!(greet("  Alice  ", "Hi").unwrap(), "Hi, Alice!");
/// assert_eq!(greet("   ", "Hello"), Err(GreetError::EmptyName));
/// ```
pub fn greet(name: &str, greeting: &str) -> Result<String, GreetError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(GreetError::EmptyName);
    }

    info!("Generating greeting for {name}");
    Ok(format!("{greeting}, {name}!"))
}

/// Formats a greeting message for each name in a batch.
///
/// Messages come back in input order, one per name. The first invalid name
/// aborts the whole batch and its error is returned unchanged; no partial
/// result is produced. Use [`greet_many_lenient`] to skip invalid names
/// instead.
///
/// ## Errors
///
/// Returns `GreetError::EmptyName` if any name is empty or whitespace only.
///
/// ## Examples
///
/// ```
/// use hail_lib::greet_many;
///
/// let messages = greet_many(&["Alice", "Bob"], "Hello").unwrap();
/// assert_eq!(messages, vec!["Hello, Alice!", "Hello, Bob!"]);
///
/// assert!(greet_many(&["Alice", "  "], "Hello").is_err());
/// ```
pub fn greet_many<S: AsRef<str>>(names: &[S], greeting: &str) -> Result<Vec<String>, GreetError> {
    info!("Generating greetings for {} names", names.len());

    names
        .iter()
        .map(|name| greet(name.as_ref(), greeting))
        .collect()
}

/// Formats greeting messages for a batch, skipping invalid entries.
///
/// Entries are `Option<&str>` so that values arriving from an untyped
/// boundary (e.g. a deserialized JSON array containing non-strings) can be
/// represented as `None`. `None`, empty, and whitespace-only entries are
/// skipped with a warning; the relative order of the surviving messages
/// matches the input.
///
/// ## Examples
///
/// ```
/// use hail_lib::greet_many_lenient;
///
/// let messages = greet_many_lenient(
///     &[Some("Alice"), Some(""), Some("Bob"), None, Some("Charlie")],
///     "Hello",
/// );
/// assert_eq!(messages, vec!["Hello, Alice!", "Hello, Bob!", "Hello, Charlie!"]);
/// ```
pub fn greet_many_lenient(names: &[Option<&str>], greeting: &str) -> Vec<String> {
    let mut messages = Vec::with_capacity(names.len());
    let mut skipped = 0usize;

    for entry in names.iter().copied() {
        match entry.map(|name| greet(name, greeting)) {
            Some(Ok(message)) => messages.push(message),
            Some(Err(_)) | None => {
                skipped += 1;
                warn!("Skipping invalid name: {entry:?}");
            }
        }
    }

    info!(
        "Generated {} greetings, skipped {} invalid names",
        messages.len(),
        skipped
    );
    messages
}
